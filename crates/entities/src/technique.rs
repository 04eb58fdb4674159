//! Coping technique entity definitions.

use serde::{Deserialize, Serialize};

use crate::{Collection, Keyed};

/// A self-help technique. Only `is_favorite` changes after seeding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technique {
    /// Stable identifier, identical for every user.
    pub id: String,
    /// Title.
    pub title: String,
    /// Category shown as a badge.
    pub category: String,
    /// Short description.
    pub description: String,
    /// Instruction steps, in order.
    pub steps: Vec<String>,
    /// Icon reference.
    pub icon: String,
    /// Whether the user marked this technique as a favorite.
    pub is_favorite: bool,
}

impl Technique {
    /// Creates a technique that is not a favorite.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            description: description.into(),
            steps: Vec::new(),
            icon: icon.into(),
            is_favorite: false,
        }
    }

    /// Sets the instruction steps.
    pub fn with_steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps = steps.into_iter().map(Into::into).collect();
        self
    }

    /// Flips the favorite flag.
    pub fn toggle_favorite(&mut self) {
        self.is_favorite = !self.is_favorite;
    }
}

impl Keyed for Technique {
    type Key = String;

    fn key(&self) -> &String {
        &self.id
    }
}

/// Identifier of the 4-7-8 breathing technique.
pub const BREATHING_4_7_8: &str = "breathing-4-7-8";
/// Identifier of the progressive muscle relaxation technique.
pub const PROGRESSIVE_MUSCLE_RELAXATION: &str = "progressive-muscle-relaxation";
/// Identifier of the 5-4-3-2-1 grounding technique.
pub const GROUNDING_5_4_3_2_1: &str = "grounding-5-4-3-2-1";

/// The technique library every new user starts with.
pub fn default_techniques() -> Collection<Technique> {
    vec![
        Technique::new(
            BREATHING_4_7_8,
            "Дыхание 4-7-8",
            "Дыхательные практики",
            "Техника глубокого дыхания для снятия тревожности",
            "Wind",
        )
        .with_steps([
            "Сделайте глубокий вдох через нос на 4 счета",
            "Задержите дыхание на 7 счетов",
            "Медленно выдохните через рот на 8 счетов",
            "Повторите цикл 4-5 раз",
        ]),
        Technique::new(
            PROGRESSIVE_MUSCLE_RELAXATION,
            "Прогрессивная мышечная релаксация",
            "Физические упражнения",
            "Последовательное напряжение и расслабление мышц",
            "Activity",
        )
        .with_steps([
            "Сядьте или лягте в удобное положение",
            "Начните с мышц лица: напрягите на 5 секунд, затем расслабьте",
            "Переходите к плечам, рукам, животу, ногам",
            "Сосредоточьтесь на ощущении расслабления",
        ]),
        Technique::new(
            GROUNDING_5_4_3_2_1,
            "Техника заземления 5-4-3-2-1",
            "Психологические приёмы",
            "Возвращение в настоящий момент через органы чувств",
            "Brain",
        )
        .with_steps([
            "Назовите 5 вещей, которые вы видите",
            "Назовите 4 вещи, которые вы чувствуете",
            "Назовите 3 вещи, которые вы слышите",
            "Назовите 2 вещи, которые вы обоняете",
            "Назовите 1 вещь, которую вы ощущаете на вкус",
        ]),
    ]
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_techniques_seeded_identically() {
        let first = default_techniques();
        let second = default_techniques();

        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
        assert!(first.iter().all(|t| !t.is_favorite));
        assert_eq!(first.get(GROUNDING_5_4_3_2_1).unwrap().steps.len(), 5);
    }

    #[test]
    fn test_toggle_favorite_twice_restores() {
        let mut technique = default_techniques().get(BREATHING_4_7_8).unwrap().clone();
        let original = technique.clone();

        technique.toggle_favorite();
        assert!(technique.is_favorite);
        technique.toggle_favorite();
        assert_eq!(technique, original);
    }
}
