//! Scoring of completed questionnaires.

use entities::{TestResult, TestType};

use crate::MAX_ANSWER;

/// Percentage of the maximum possible total, rounded half up.
///
/// `round(100 * sum / (4 * n))`, computed in integers. An empty answer list
/// scores 0.
pub fn score(answers: &[u8]) -> u8 {
    if answers.is_empty() {
        return 0;
    }
    let sum: u64 = answers.iter().map(|&a| u64::from(a.min(MAX_ANSWER))).sum();
    let max = u64::from(MAX_ANSWER) * answers.len() as u64;
    // floor((100 * sum + max / 2) / max), with max / 2 kept exact by doubling.
    let rounded = (200 * sum + max) / (2 * max);
    rounded as u8
}

/// Builds the result of a completed questionnaire.
pub fn evaluate(test_type: TestType, answers: &[u8]) -> TestResult {
    TestResult::new(test_type, score(answers))
}

#[cfg(test)]
mod tests {
    use entities::Band;

    use super::*;

    #[test]
    fn test_score_extremes() {
        assert_eq!(score(&[0; 7]), 0);
        assert_eq!(score(&[4; 7]), 100);
        assert_eq!(score(&[]), 0);
    }

    #[test]
    fn test_score_rounding() {
        // 100 * 10 / 28 = 35.71
        assert_eq!(score(&[2, 2, 2, 1, 1, 1, 1]), 36);
        // 100 * 3 / 24 = 12.5
        assert_eq!(score(&[1, 1, 1, 0, 0, 0]), 13);
        // 100 * 4 / 24 = 16.67
        assert_eq!(score(&[1, 1, 1, 1, 0, 0]), 17);
        // 100 * 1 / 20 = 5
        assert_eq!(score(&[1, 0, 0, 0, 0]), 5);
    }

    #[test]
    fn test_score_matches_formula_for_all_stress_totals() {
        for sum in 0..=20u32 {
            let mut answers = [0u8; 5];
            let mut remaining = sum;
            for a in answers.iter_mut() {
                let take = remaining.min(4);
                *a = take as u8;
                remaining -= take;
            }
            let expected = (100.0 * f64::from(sum) / 20.0).round() as u8;
            assert_eq!(score(&answers), expected, "sum {sum}");
        }
    }

    #[test]
    fn test_evaluate_bands() {
        // 100 * 8 / 24 = 33.33 -> 33
        let medium = evaluate(TestType::Burnout, &[4, 4, 0, 0, 0, 0]);
        assert_eq!(medium.score, 33);
        assert_eq!(medium.level, Band::Medium);

        // 100 * 11 / 28 = 39.29 -> 39
        let anxiety = evaluate(TestType::Anxiety, &[4, 4, 3, 0, 0, 0, 0]);
        assert_eq!(anxiety.score, 39);
        assert_eq!(anxiety.level, Band::Medium);

        // 100 * 13 / 20 = 65
        let stress = evaluate(TestType::Stress, &[4, 4, 4, 1, 0]);
        assert_eq!(stress.score, 65);
        assert_eq!(stress.level, Band::Medium);

        // 100 * 16 / 24 = 66.67 -> 67
        let high = evaluate(TestType::Burnout, &[4, 4, 4, 4, 0, 0]);
        assert_eq!(high.score, 67);
        assert_eq!(high.level, Band::High);

        let low = evaluate(TestType::Stress, &[1, 1, 1, 1, 2]);
        assert_eq!(low.score, 30);
        assert_eq!(low.level, Band::Low);
    }
}
