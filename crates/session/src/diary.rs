//! Diary form state.

use entities::{DiaryEntry, Emotion, StressLevel, StressLevelOutOfRange};

/// Fields of the diary form before an entry is saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiaryDraft {
    /// Selected emotion.
    pub emotion: Emotion,
    /// Selected stress level.
    pub stress_level: StressLevel,
    /// Trigger text.
    pub trigger: String,
    /// Notes text.
    pub notes: String,
}

impl DiaryDraft {
    /// Sets the stress level from a raw slider value.
    pub fn set_stress_level(&mut self, value: u8) -> Result<(), StressLevelOutOfRange> {
        self.stress_level = StressLevel::new(value)?;
        Ok(())
    }

    /// Builds an entry dated today from the current fields.
    pub fn to_entry(&self) -> DiaryEntry {
        DiaryEntry::new(
            self.emotion,
            self.stress_level,
            self.trigger.trim(),
            self.notes.trim(),
        )
    }

    /// Clears the text fields, keeping emotion and stress level.
    pub fn clear_text(&mut self) {
        self.trigger.clear();
        self.notes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_defaults() {
        let draft = DiaryDraft::default();
        assert_eq!(draft.emotion, Emotion::Calm);
        assert_eq!(draft.stress_level.value(), 5);
        assert!(draft.trigger.is_empty());
    }

    #[test]
    fn test_draft_to_entry() {
        let mut draft = DiaryDraft {
            emotion: Emotion::Angry,
            trigger: "  traffic ".to_string(),
            ..Default::default()
        };
        draft.set_stress_level(9).unwrap();
        assert!(draft.set_stress_level(11).is_err());

        let entry = draft.to_entry();
        assert_eq!(entry.emotion, Emotion::Angry);
        assert_eq!(entry.stress_level.value(), 9);
        assert_eq!(entry.trigger, "traffic");

        draft.clear_text();
        assert!(draft.trigger.is_empty());
        assert_eq!(draft.emotion, Emotion::Angry);
    }
}
