//! Session context: the single place where user data is mutated.

use account_store::{AccountStore, FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
use entities::{DiaryEntry, TestType, User};
use questionnaire::{AnswerOutcome, Questionnaire};

use crate::{
    AppConfig, DiaryDraft, Notification, SessionError, SessionResult, Statistics,
    StorageBackend,
};

/// Holds the account store together with the in-memory view state of one
/// UI session (diary form, running questionnaire, pending notifications).
///
/// Every mutation builds a new snapshot of the active user and hands it to
/// [`AccountStore::update_user`]. Outcomes are queued as notifications for
/// the UI; failures are also returned to the caller.
#[derive(Debug)]
pub struct SessionContext {
    accounts: AccountStore,
    questionnaire: Questionnaire,
    draft: DiaryDraft,
    notifications: Vec<Notification>,
}

impl SessionContext {
    /// Creates a context around an account store.
    pub fn new(accounts: AccountStore) -> Self {
        Self {
            accounts,
            questionnaire: Questionnaire::new(),
            draft: DiaryDraft::default(),
            notifications: Vec::new(),
        }
    }

    /// Opens the configured backend and rehydrates the account store.
    pub fn open(config: &AppConfig) -> SessionResult<Self> {
        let backend: Box<dyn KeyValueStore> = match config.storage {
            StorageBackend::Memory => Box::new(MemoryKeyValueStore::new()),
            StorageBackend::File => Box::new(FileKeyValueStore::open(&config.data_dir)?),
        };
        Ok(Self::new(AccountStore::open(backend)?))
    }

    /// The account store.
    pub fn accounts(&self) -> &AccountStore {
        &self.accounts
    }

    /// The authenticated user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.accounts.current_user()
    }

    /// The questionnaire engine.
    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    /// The diary form.
    pub fn draft(&self) -> &DiaryDraft {
        &self.draft
    }

    /// The diary form, for editing.
    pub fn draft_mut(&mut self) -> &mut DiaryDraft {
        &mut self.draft
    }

    /// Removes and returns all queued notifications, oldest first.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Registers a new account and logs it in.
    pub fn register(&mut self, name: &str, email: &str, password: &str) -> SessionResult<User> {
        let result = self
            .accounts
            .register(name, email, password)
            .map_err(SessionError::from);
        if result.is_ok() {
            self.reset_view_state();
        }
        self.report(result, |user| {
            Some(Notification::success(
                "Аккаунт создан",
                format!("Добро пожаловать, {}!", user.name),
            ))
        })
    }

    /// Logs in with email and password.
    pub fn login(&mut self, email: &str, password: &str) -> SessionResult<User> {
        let result = self
            .accounts
            .login(email, password)
            .map_err(SessionError::from);
        if result.is_ok() {
            self.reset_view_state();
        }
        self.report(result, |user| {
            Some(Notification::success(
                "Вход выполнен",
                format!("С возвращением, {}!", user.name),
            ))
        })
    }

    /// Logs out, abandoning any questionnaire in progress.
    pub fn logout(&mut self) -> SessionResult<()> {
        let result = self.accounts.logout().map_err(SessionError::from);
        if result.is_ok() {
            self.reset_view_state();
        }
        self.report(result, |_| {
            Some(Notification::success("Выход выполнен", "До встречи!"))
        })
    }

    /// Deletes the authenticated user's account and ends the session.
    pub fn delete_account(&mut self) -> SessionResult<()> {
        let result = self.require_user().and_then(|user| {
            self.accounts
                .delete_account(&user.email)
                .map_err(SessionError::from)
        });
        if result.is_ok() {
            self.reset_view_state();
        }
        self.report(result, |_| {
            Some(Notification::success("Аккаунт удалён", "Все ваши данные удалены"))
        })
    }

    /// Sets the diary form's stress level from a raw slider value.
    pub fn set_stress_level(&mut self, value: u8) -> SessionResult<()> {
        let result = self
            .draft
            .set_stress_level(value)
            .map_err(SessionError::from);
        self.report(result, |_| None)
    }

    /// Saves the diary form as a new entry at the top of the diary.
    ///
    /// Clears the form's text fields on success.
    pub fn save_diary_entry(&mut self) -> SessionResult<DiaryEntry> {
        let result = self.require_user().and_then(|mut user| {
            let entry = self.draft.to_entry();
            user.add_diary_entry(entry.clone());
            self.accounts.update_user(user)?;
            Ok(entry)
        });
        if result.is_ok() {
            self.draft.clear_text();
        }
        self.report(result, |entry| {
            tracing::debug!(entry_id = %entry.id, "Diary entry saved");
            Some(Notification::success(
                "Запись сохранена",
                "Ваша запись добавлена в дневник",
            ))
        })
    }

    /// Flips the favorite flag of a technique. Returns the new flag.
    pub fn toggle_favorite(&mut self, technique_id: &str) -> SessionResult<bool> {
        let result = self.require_user().and_then(|mut user| {
            if !user.toggle_favorite(technique_id) {
                return Err(SessionError::UnknownTechnique(technique_id.to_string()));
            }
            let is_favorite = user
                .techniques
                .get(technique_id)
                .is_some_and(|t| t.is_favorite);
            self.accounts.update_user(user)?;
            Ok(is_favorite)
        });
        self.report(result, |_| None)
    }

    /// Starts a questionnaire, discarding any other one in progress.
    pub fn start_test(&mut self, test_type: TestType) -> SessionResult<()> {
        let result = self.require_user().map(|_| self.questionnaire.start(test_type));
        self.report(result, |_| None)
    }

    /// Answers the current question. On the last answer the result is added
    /// to the user's history.
    pub fn answer(&mut self, value: u8) -> SessionResult<AnswerOutcome> {
        let result = self.answer_inner(value);
        self.report(result, |outcome| match outcome {
            AnswerOutcome::Completed(result) => Some(Notification::success(
                "Тест завершён",
                format!("{}: {}% ({})", result.test_name, result.score, result.level.label()),
            )),
            AnswerOutcome::Next { .. } => None,
        })
    }

    fn answer_inner(&mut self, value: u8) -> SessionResult<AnswerOutcome> {
        let mut user = self.require_user()?;
        let before = self.questionnaire.clone();
        let outcome = self.questionnaire.answer(value)?;
        if let AnswerOutcome::Completed(result) = &outcome {
            user.add_test_result(result.clone());
            if let Err(e) = self.accounts.update_user(user) {
                // Keep the last question open so the answer can be resent.
                self.questionnaire = before;
                return Err(e.into());
            }
        }
        Ok(outcome)
    }

    /// Abandons the running questionnaire without recording anything.
    pub fn cancel_test(&mut self) -> bool {
        self.questionnaire.cancel()
    }

    /// Statistics of the authenticated user.
    pub fn statistics(&self) -> SessionResult<Statistics> {
        self.current_user()
            .map(Statistics::for_user)
            .ok_or(SessionError::NotAuthenticated)
    }

    fn require_user(&self) -> SessionResult<User> {
        self.current_user()
            .cloned()
            .ok_or(SessionError::NotAuthenticated)
    }

    fn reset_view_state(&mut self) {
        self.questionnaire.cancel();
        self.draft = DiaryDraft::default();
    }

    /// Queues the notification for `result` and passes it through.
    fn report<T, F>(&mut self, result: SessionResult<T>, on_success: F) -> SessionResult<T>
    where
        F: FnOnce(&T) -> Option<Notification>,
    {
        match &result {
            Ok(value) => {
                if let Some(notification) = on_success(value) {
                    self.notifications.push(notification);
                }
            }
            Err(e) => {
                tracing::warn!("Session operation failed: {}", e);
                self.notifications.push(e.notification());
            }
        }
        result
    }
}
