//! Questionnaire state machine.

use entities::{TestResult, TestType};

use crate::{evaluate, QuestionSet, QuestionnaireError, QuestionnaireResult, MAX_ANSWER};

/// A questionnaire being answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    /// Questions being asked.
    pub set: QuestionSet,
    /// Index of the question awaiting an answer.
    pub question_index: usize,
    /// Answers given so far, in question order.
    pub answers: Vec<u8>,
}

impl Progress {
    /// Text of the question awaiting an answer.
    pub fn current_question(&self) -> Option<&'static str> {
        self.set.question(self.question_index)
    }

    /// Total number of questions.
    pub fn total(&self) -> usize {
        self.set.len()
    }

    /// Share of questions answered, between 0.0 and 1.0.
    pub fn fraction_complete(&self) -> f32 {
        if self.set.is_empty() {
            return 1.0;
        }
        self.answers.len() as f32 / self.set.len() as f32
    }
}

/// State of the questionnaire engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QuestionnaireState {
    /// No questionnaire running.
    #[default]
    Idle,
    /// A questionnaire is being answered.
    InProgress(Progress),
}

/// Outcome of a single answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// More questions remain; `question_index` is the next one.
    Next {
        /// Index of the next question.
        question_index: usize,
    },
    /// The last question was answered; the engine is idle again.
    Completed(TestResult),
}

/// Walks a user through one questionnaire at a time.
///
/// `Idle -> InProgress -> Idle`. Completing or cancelling always returns to
/// idle. Nothing is recorded until the last answer.
#[derive(Debug, Clone, Default)]
pub struct Questionnaire {
    state: QuestionnaireState,
}

impl Questionnaire {
    /// Creates an idle engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &QuestionnaireState {
        &self.state
    }

    /// Progress of the running questionnaire.
    pub fn progress(&self) -> Option<&Progress> {
        match &self.state {
            QuestionnaireState::InProgress(progress) => Some(progress),
            QuestionnaireState::Idle => None,
        }
    }

    /// Whether a questionnaire is running.
    pub fn is_active(&self) -> bool {
        self.progress().is_some()
    }

    /// Type of the running questionnaire.
    pub fn active_test(&self) -> Option<TestType> {
        self.progress().map(|p| p.set.test_type)
    }

    /// Text of the question awaiting an answer.
    pub fn current_question(&self) -> Option<&'static str> {
        self.progress().and_then(Progress::current_question)
    }

    /// Starts a questionnaire at its first question, discarding any other
    /// one in progress.
    pub fn start(&mut self, test_type: TestType) {
        if let Some(previous) = self.active_test() {
            tracing::debug!(?previous, "Discarding unfinished questionnaire");
        }
        let set = QuestionSet::for_test(test_type);
        self.state = QuestionnaireState::InProgress(Progress {
            set,
            question_index: 0,
            answers: Vec::with_capacity(set.len()),
        });
        tracing::debug!(?test_type, "Questionnaire started");
    }

    /// Records an answer to the current question.
    ///
    /// An invalid value leaves the state unchanged.
    pub fn answer(&mut self, value: u8) -> QuestionnaireResult<AnswerOutcome> {
        let QuestionnaireState::InProgress(progress) = &mut self.state else {
            return Err(QuestionnaireError::NotStarted);
        };
        if value > MAX_ANSWER {
            return Err(QuestionnaireError::InvalidAnswer(value));
        }

        progress.answers.push(value);
        if progress.answers.len() < progress.set.len() {
            progress.question_index += 1;
            return Ok(AnswerOutcome::Next {
                question_index: progress.question_index,
            });
        }

        let result = evaluate(progress.set.test_type, &progress.answers);
        self.state = QuestionnaireState::Idle;
        tracing::debug!(
            test_type = ?result.test_type,
            score = result.score,
            level = result.level.label(),
            "Questionnaire completed"
        );
        Ok(AnswerOutcome::Completed(result))
    }

    /// Abandons the running questionnaire. Returns false if none was running.
    pub fn cancel(&mut self) -> bool {
        let was_active = self.is_active();
        self.state = QuestionnaireState::Idle;
        if was_active {
            tracing::debug!("Questionnaire cancelled");
        }
        was_active
    }
}

#[cfg(test)]
mod tests {
    use entities::Band;

    use super::*;

    fn run(engine: &mut Questionnaire, answers: &[u8]) -> TestResult {
        let (last, init) = answers.split_last().unwrap();
        for (i, &value) in init.iter().enumerate() {
            assert_eq!(
                engine.answer(value).unwrap(),
                AnswerOutcome::Next {
                    question_index: i + 1
                }
            );
        }
        match engine.answer(*last).unwrap() {
            AnswerOutcome::Completed(result) => result,
            other => panic!("Expected completion, got {:?}", other),
        }
    }

    #[test]
    fn test_full_anxiety_run() {
        let mut engine = Questionnaire::new();
        engine.start(TestType::Anxiety);

        assert_eq!(engine.active_test(), Some(TestType::Anxiety));
        assert_eq!(engine.progress().unwrap().total(), 7);
        assert_eq!(
            engine.current_question(),
            QuestionSet::for_test(TestType::Anxiety).question(0)
        );

        let result = run(&mut engine, &[4, 4, 4, 4, 4, 3, 3]);
        assert_eq!(result.test_type, TestType::Anxiety);
        // 100 * 26 / 28 = 92.86
        assert_eq!(result.score, 93);
        assert_eq!(result.level, Band::High);
        assert_eq!(engine.state(), &QuestionnaireState::Idle);
    }

    #[test]
    fn test_progress_tracking() {
        let mut engine = Questionnaire::new();
        engine.start(TestType::Stress);
        engine.answer(1).unwrap();
        engine.answer(2).unwrap();

        let progress = engine.progress().unwrap();
        assert_eq!(progress.question_index, 2);
        assert_eq!(progress.answers, vec![1, 2]);
        assert!((progress.fraction_complete() - 0.4).abs() < f32::EPSILON);
    }

    #[test]
    fn test_answer_while_idle() {
        let mut engine = Questionnaire::new();
        assert_eq!(engine.answer(2), Err(QuestionnaireError::NotStarted));
    }

    #[test]
    fn test_invalid_answer_keeps_state() {
        let mut engine = Questionnaire::new();
        engine.start(TestType::Burnout);
        engine.answer(3).unwrap();
        let before = engine.state().clone();

        assert_eq!(engine.answer(5), Err(QuestionnaireError::InvalidAnswer(5)));
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_cancel_discards_answers() {
        let mut engine = Questionnaire::new();
        assert!(!engine.cancel());

        engine.start(TestType::Burnout);
        engine.answer(4).unwrap();
        assert!(engine.cancel());
        assert!(!engine.is_active());
        assert_eq!(engine.answer(1), Err(QuestionnaireError::NotStarted));
    }

    #[test]
    fn test_restart_resets_progress() {
        let mut engine = Questionnaire::new();
        engine.start(TestType::Stress);
        engine.answer(4).unwrap();
        engine.answer(4).unwrap();

        engine.start(TestType::Stress);
        let progress = engine.progress().unwrap();
        assert_eq!(progress.question_index, 0);
        assert!(progress.answers.is_empty());

        let result = run(&mut engine, &[0, 0, 0, 0, 0]);
        assert_eq!(result.score, 0);
        assert_eq!(result.level, Band::Low);
    }
}
