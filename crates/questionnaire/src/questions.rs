//! Fixed question sets and the answer scale.

use entities::TestType;

/// Highest answer value.
pub const MAX_ANSWER: u8 = 4;

/// Answer scale, indexed by answer value.
pub const ANSWER_OPTIONS: [&str; 5] = ["Никогда", "Редко", "Иногда", "Часто", "Постоянно"];

const ANXIETY_QUESTIONS: &[&str] = &[
    "Как часто вы чувствуете нервозность, тревогу или напряжение?",
    "Как часто вы не можете остановить или контролировать беспокойство?",
    "Как часто вы слишком сильно беспокоитесь о разных вещах?",
    "Как часто вам трудно расслабиться?",
    "Как часто вы настолько беспокойны, что вам трудно усидеть на месте?",
    "Как часто вы легко раздражаетесь или злитесь?",
    "Как часто вы испытываете страх, будто может случиться что-то ужасное?",
];

const STRESS_QUESTIONS: &[&str] = &[
    "Как часто вы чувствуете, что не справляетесь со всеми делами?",
    "Как часто вы расстраиваетесь из-за неожиданных событий?",
    "Как часто вы чувствуете, что не контролируете важные вещи в жизни?",
    "Как часто вам трудно уснуть из-за переживаний?",
    "Как часто вы чувствуете, что трудности накапливаются и их не преодолеть?",
];

const BURNOUT_QUESTIONS: &[&str] = &[
    "Как часто вы чувствуете себя эмоционально опустошённым после работы или учёбы?",
    "Как часто вы чувствуете усталость уже утром при мысли о предстоящем дне?",
    "Как часто работа или учёба вызывает у вас безразличие?",
    "Как часто вы сомневаетесь в значимости того, что делаете?",
    "Как часто вам не хватает сил на дела, которые раньше радовали?",
    "Как часто вы чувствуете, что ваши усилия остаются незамеченными?",
];

/// The questions of one questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionSet {
    /// Questionnaire kind.
    pub test_type: TestType,
    /// Questions, in the order they are asked.
    pub questions: &'static [&'static str],
}

impl QuestionSet {
    /// Returns the question set for a test type.
    pub fn for_test(test_type: TestType) -> Self {
        let questions = match test_type {
            TestType::Anxiety => ANXIETY_QUESTIONS,
            TestType::Stress => STRESS_QUESTIONS,
            TestType::Burnout => BURNOUT_QUESTIONS,
        };
        Self {
            test_type,
            questions,
        }
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the set has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Gets a question by index.
    pub fn question(&self, index: usize) -> Option<&'static str> {
        self.questions.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_counts() {
        assert_eq!(QuestionSet::for_test(TestType::Anxiety).len(), 7);
        assert_eq!(QuestionSet::for_test(TestType::Stress).len(), 5);
        assert_eq!(QuestionSet::for_test(TestType::Burnout).len(), 6);
    }

    #[test]
    fn test_answer_scale() {
        assert_eq!(ANSWER_OPTIONS.len(), MAX_ANSWER as usize + 1);
        assert_eq!(ANSWER_OPTIONS[0], "Никогда");
        assert_eq!(ANSWER_OPTIONS[MAX_ANSWER as usize], "Постоянно");
    }
}
