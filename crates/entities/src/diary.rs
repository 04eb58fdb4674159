//! Mood diary entity definitions.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Keyed;

/// Emotion recorded in a diary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    /// Радость.
    Happy,
    /// Спокойствие.
    #[default]
    Calm,
    /// Тревога.
    Anxious,
    /// Грусть.
    Sad,
    /// Злость.
    Angry,
    /// Стресс.
    Stressed,
}

impl Emotion {
    /// All emotions in picker order.
    pub const ALL: [Emotion; 6] = [
        Self::Happy,
        Self::Calm,
        Self::Anxious,
        Self::Sad,
        Self::Angry,
        Self::Stressed,
    ];

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Happy => "Радость",
            Self::Calm => "Спокойствие",
            Self::Anxious => "Тревога",
            Self::Sad => "Грусть",
            Self::Angry => "Злость",
            Self::Stressed => "Стресс",
        }
    }

    /// Returns the emoji shown next to entries.
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Happy => "😊",
            Self::Calm => "😌",
            Self::Anxious => "😰",
            Self::Sad => "😢",
            Self::Angry => "😠",
            Self::Stressed => "😫",
        }
    }
}

/// Error returned when a stress level is outside `0..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StressLevelOutOfRange(pub u8);

impl std::fmt::Display for StressLevelOutOfRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "stress level {} is out of range 0..={}",
            self.0,
            StressLevel::MAX
        )
    }
}

impl std::error::Error for StressLevelOutOfRange {}

/// Self-reported stress level between 0 and 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StressLevel(u8);

impl StressLevel {
    /// Highest allowed level.
    pub const MAX: u8 = 10;

    /// Creates a stress level, rejecting values above [`StressLevel::MAX`].
    pub fn new(value: u8) -> Result<Self, StressLevelOutOfRange> {
        if value > Self::MAX {
            return Err(StressLevelOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Classifies the level for display.
    pub fn band(&self) -> StressBand {
        if self.0 > 7 {
            StressBand::High
        } else if self.0 > 4 {
            StressBand::Elevated
        } else {
            StressBand::Balanced
        }
    }
}

impl Default for StressLevel {
    fn default() -> Self {
        Self(5)
    }
}

impl TryFrom<u8> for StressLevel {
    type Error = StressLevelOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StressLevel> for u8 {
    fn from(level: StressLevel) -> Self {
        level.0
    }
}

/// Display classification of a single entry's stress level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StressBand {
    /// Level 0 to 4.
    Balanced,
    /// Level 5 to 7.
    Elevated,
    /// Level 8 to 10.
    High,
}

impl StressBand {
    /// Short advice shown under an entry.
    pub fn advice(&self) -> &'static str {
        match self {
            Self::High => "Попробуйте технику глубокого дыхания 4-7-8 для снижения стресса",
            Self::Elevated => "Рекомендуем прогрессивную мышечную релаксацию",
            Self::Balanced => {
                "Продолжайте практиковать техники осознанности для поддержания баланса"
            }
        }
    }
}

/// A single mood diary entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    /// Unique identifier.
    pub id: Uuid,
    /// Calendar day the entry was created.
    pub date: NaiveDate,
    /// Recorded emotion.
    pub emotion: Emotion,
    /// Recorded stress level.
    pub stress_level: StressLevel,
    /// What triggered the emotion.
    pub trigger: String,
    /// Free-form notes.
    pub notes: String,
}

impl DiaryEntry {
    /// Creates an entry dated today.
    pub fn new(
        emotion: Emotion,
        stress_level: StressLevel,
        trigger: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: Local::now().date_naive(),
            emotion,
            stress_level,
            trigger: trigger.into(),
            notes: notes.into(),
        }
    }

    /// Overrides the entry date.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }
}

impl Keyed for DiaryEntry {
    type Key = Uuid;

    fn key(&self) -> &Uuid {
        &self.id
    }
}
