//! Per-user statistics shown on the home screen.

use entities::{TestResult, TestType, User};

/// Summary of a user's activity.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    /// Number of diary entries.
    pub diary_entries: usize,
    /// Number of favorite techniques.
    pub favorite_techniques: usize,
    /// Number of completed questionnaires.
    pub completed_tests: usize,
    /// Mean stress level over all diary entries.
    pub average_stress: Option<f32>,
    /// Most recent result of each questionnaire taken, in test type order.
    pub latest_results: Vec<TestResult>,
}

impl Statistics {
    /// Computes statistics for a user.
    pub fn for_user(user: &User) -> Self {
        let average_stress = if user.diary_entries.is_empty() {
            None
        } else {
            let total: u32 = user
                .diary_entries
                .iter()
                .map(|e| u32::from(e.stress_level.value()))
                .sum();
            Some(total as f32 / user.diary_entries.len() as f32)
        };

        // Results are stored most recent first.
        let latest_results = TestType::ALL
            .iter()
            .filter_map(|t| user.test_results.iter().find(|r| r.test_type == *t))
            .cloned()
            .collect();

        Self {
            diary_entries: user.diary_entries.len(),
            favorite_techniques: user.favorites().count(),
            completed_tests: user.test_results.len(),
            average_stress,
            latest_results,
        }
    }
}

#[cfg(test)]
mod tests {
    use entities::{
        DiaryEntry, Emotion, PasswordHash, StressLevel, BREATHING_4_7_8, GROUNDING_5_4_3_2_1,
    };

    use super::*;

    fn user() -> User {
        User::new(
            "Anna",
            "anna@example.com",
            PasswordHash::new(""),
        )
    }

    #[test]
    fn test_empty_user() {
        let stats = Statistics::for_user(&user());
        assert_eq!(stats.diary_entries, 0);
        assert_eq!(stats.favorite_techniques, 0);
        assert_eq!(stats.average_stress, None);
        assert!(stats.latest_results.is_empty());
    }

    #[test]
    fn test_counts_and_average() {
        let mut user = user();
        for level in [2, 4, 9] {
            user.add_diary_entry(DiaryEntry::new(
                Emotion::Calm,
                StressLevel::new(level).unwrap(),
                "",
                "",
            ));
        }
        user.toggle_favorite(BREATHING_4_7_8);
        user.toggle_favorite(GROUNDING_5_4_3_2_1);

        let stats = Statistics::for_user(&user);
        assert_eq!(stats.diary_entries, 3);
        assert_eq!(stats.favorite_techniques, 2);
        assert_eq!(stats.average_stress, Some(5.0));
    }

    #[test]
    fn test_latest_result_per_type() {
        let mut user = user();
        user.add_test_result(TestResult::new(TestType::Stress, 10));
        user.add_test_result(TestResult::new(TestType::Anxiety, 50));
        user.add_test_result(TestResult::new(TestType::Stress, 90));

        let stats = Statistics::for_user(&user);
        assert_eq!(stats.completed_tests, 3);
        let latest: Vec<_> = stats
            .latest_results
            .iter()
            .map(|r| (r.test_type, r.score))
            .collect();
        assert_eq!(latest, vec![(TestType::Anxiety, 50), (TestType::Stress, 90)]);
    }
}
