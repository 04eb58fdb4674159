//! Questionnaire result entity definitions.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Keyed;

/// Kind of self-assessment questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestType {
    /// Anxiety test.
    Anxiety,
    /// Stress test.
    Stress,
    /// Burnout test.
    Burnout,
}

impl TestType {
    /// All test types.
    pub const ALL: [TestType; 3] = [Self::Anxiety, Self::Stress, Self::Burnout];

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Anxiety => "Тест на тревожность",
            Self::Stress => "Тест на стресс",
            Self::Burnout => "Тест на выгорание",
        }
    }
}

/// Severity band derived from a questionnaire score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Band {
    /// Score below 33.
    #[serde(rename = "Низкий")]
    Low,
    /// Score from 33 up to 65.
    #[serde(rename = "Средний")]
    Medium,
    /// Score 66 and above.
    #[serde(rename = "Высокий")]
    High,
}

impl Band {
    /// Lowest score classified as [`Band::Medium`].
    pub const MEDIUM_THRESHOLD: u8 = 33;
    /// Lowest score classified as [`Band::High`].
    pub const HIGH_THRESHOLD: u8 = 66;

    /// Classifies a 0-100 score.
    pub fn from_score(score: u8) -> Self {
        if score < Self::MEDIUM_THRESHOLD {
            Self::Low
        } else if score < Self::HIGH_THRESHOLD {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Низкий",
            Self::Medium => "Средний",
            Self::High => "Высокий",
        }
    }

    /// Canned recommendation for this band. Shared by all test types.
    pub fn recommendation(&self) -> &'static str {
        match self {
            Self::Low => {
                "Ваше состояние в норме. Продолжайте заботиться о себе и практиковать \
                 техники осознанности."
            }
            Self::Medium => {
                "Заметен умеренный уровень напряжения. Попробуйте регулярно выполнять \
                 дыхательные упражнения и технику заземления, следите за режимом сна и отдыха."
            }
            Self::High => {
                "Уровень напряжения высокий. Рекомендуем обратиться к психологу или \
                 психотерапевту и не оставаться с этим состоянием наедине."
            }
        }
    }
}

/// Outcome of a completed questionnaire. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    /// Unique identifier.
    pub id: Uuid,
    /// Questionnaire kind.
    pub test_type: TestType,
    /// Questionnaire display name.
    pub test_name: String,
    /// Calendar day of completion.
    pub date: NaiveDate,
    /// Score in percent, 0 to 100.
    pub score: u8,
    /// Severity band.
    pub level: Band,
    /// Recommendation text.
    pub recommendation: String,
}

impl TestResult {
    /// Creates a result dated today, deriving band and recommendation from
    /// the score.
    pub fn new(test_type: TestType, score: u8) -> Self {
        let level = Band::from_score(score);
        Self {
            id: Uuid::new_v4(),
            test_type,
            test_name: test_type.display_name().to_string(),
            date: Local::now().date_naive(),
            score,
            level,
            recommendation: level.recommendation().to_string(),
        }
    }
}

impl Keyed for TestResult {
    type Key = Uuid;

    fn key(&self) -> &Uuid {
        &self.id
    }
}
