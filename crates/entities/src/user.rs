//! User-related entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{default_techniques, Collection, DiaryEntry, Keyed, Technique, TestResult};

/// Password digest as stored with a user record.
///
/// Holds a self-describing PHC string (algorithm, parameters, salt and hash).
/// Producing and checking it is the job of the account store.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wraps an encoded PHC string.
    pub fn new(phc: impl Into<String>) -> Self {
        Self(phc.into())
    }

    /// The encoded PHC string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}

/// A registered user together with all of their data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Display name.
    pub name: String,
    /// Email address. Unique across the store.
    pub email: String,
    /// Salted password digest.
    pub password: PasswordHash,
    /// Diary entries, most recent first.
    pub diary_entries: Collection<DiaryEntry>,
    /// Technique library.
    pub techniques: Collection<Technique>,
    /// Completed questionnaires, most recent first.
    pub test_results: Collection<TestResult>,
    /// When this record was created.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a user with the default technique library and empty history.
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: PasswordHash) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password,
            diary_entries: Collection::new(),
            techniques: default_techniques(),
            test_results: Collection::new(),
            created_at: Utc::now(),
        }
    }

    /// Prepends a diary entry. Returns false if its id is already present.
    pub fn add_diary_entry(&mut self, entry: DiaryEntry) -> bool {
        self.diary_entries.push_front(entry).is_ok()
    }

    /// Prepends a test result. Returns false if its id is already present.
    pub fn add_test_result(&mut self, result: TestResult) -> bool {
        self.test_results.push_front(result).is_ok()
    }

    /// Flips the favorite flag of one technique. Returns false if unknown.
    pub fn toggle_favorite(&mut self, technique_id: &str) -> bool {
        self.techniques
            .update(technique_id, Technique::toggle_favorite)
    }

    /// Techniques marked as favorite, in library order.
    pub fn favorites(&self) -> impl Iterator<Item = &Technique> {
        self.techniques.iter().filter(|t| t.is_favorite)
    }

    /// The first techniques of the library, shown on the home screen.
    pub fn quick_access(&self) -> impl Iterator<Item = &Technique> {
        self.techniques.iter().take(3)
    }
}

impl Keyed for User {
    type Key = String;

    fn key(&self) -> &String {
        &self.email
    }
}
