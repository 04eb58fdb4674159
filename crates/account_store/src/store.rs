//! Account store: registered users and the active session.

use entities::{Collection, User};

use crate::{
    hash_password, verify_password, AccountError, AccountResult, KeyValueStore,
    MemoryKeyValueStore, CURRENT_USER_KEY, USERS_KEY,
};

/// Holds every registered user and the currently authenticated one.
///
/// Each mutation rewrites the full user list (and the active-session
/// snapshot) in the backend. If writing fails, the in-memory state is rolled
/// back to what it was before the call.
pub struct AccountStore {
    backend: Box<dyn KeyValueStore>,
    users: Collection<User>,
    /// Email of the authenticated user. Always a key of `users`.
    active: Option<String>,
}

impl std::fmt::Debug for AccountStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountStore")
            .field("users", &self.users.len())
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}

impl AccountStore {
    /// Rehydrates the store from a backend.
    ///
    /// A persisted session whose user no longer exists, or that cannot be
    /// parsed, is discarded. For a valid session the stored user record is
    /// authoritative over the snapshot.
    pub fn open(backend: Box<dyn KeyValueStore>) -> AccountResult<Self> {
        let users: Collection<User> = match backend.get(USERS_KEY)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Collection::new(),
        };

        let mut store = Self {
            backend,
            users,
            active: None,
        };

        let snapshot = match store.backend.get(CURRENT_USER_KEY)? {
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::warn!("Discarding unreadable session snapshot: {}", e);
                    None
                }
            },
            None => None,
        };

        match snapshot {
            Some(snapshot) => match store.users.get(snapshot.email.as_str()) {
                Some(stored) => {
                    let stale = *stored != snapshot;
                    store.active = Some(snapshot.email);
                    if stale {
                        tracing::debug!("Session snapshot out of date, rewriting from user list");
                        store.persist_session()?;
                    }
                }
                None => {
                    tracing::warn!(email = %snapshot.email, "Session refers to unknown user");
                    store.backend.remove(CURRENT_USER_KEY)?;
                }
            },
            None => store.backend.remove(CURRENT_USER_KEY)?,
        }

        tracing::info!(
            users = store.users.len(),
            authenticated = store.active.is_some(),
            "Account store loaded"
        );
        Ok(store)
    }

    /// Creates an empty store backed by memory.
    pub fn in_memory() -> Self {
        Self {
            backend: Box::new(MemoryKeyValueStore::new()),
            users: Collection::new(),
            active: None,
        }
    }

    /// All registered users, in registration order.
    pub fn users(&self) -> &Collection<User> {
        &self.users
    }

    /// Gets a user by email.
    pub fn user(&self, email: &str) -> Option<&User> {
        self.users.get(email)
    }

    /// Number of registered users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether no user is registered.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// The authenticated user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.active
            .as_deref()
            .and_then(|email| self.users.get(email))
    }

    /// Whether a user is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.active.is_some()
    }

    /// Registers a new user and logs them in.
    pub fn register(&mut self, name: &str, email: &str, password: &str) -> AccountResult<User> {
        if name.trim().is_empty() {
            return Err(AccountError::MissingField("name"));
        }
        if email.trim().is_empty() {
            return Err(AccountError::MissingField("email"));
        }
        if password.is_empty() {
            return Err(AccountError::MissingField("password"));
        }
        if self.users.contains_key(email) {
            tracing::debug!(email = %email, "Registration rejected, email taken");
            return Err(AccountError::DuplicateEmail(email.to_string()));
        }

        let user = User::new(name.trim(), email, hash_password(password)?);
        self.transaction(|store| {
            if store.users.push_back(user.clone()).is_err() {
                return Err(AccountError::DuplicateEmail(user.email.clone()));
            }
            store.active = Some(user.email.clone());
            Ok(())
        })?;

        tracing::info!(email = %email, "User registered");
        Ok(user)
    }

    /// Logs in the user with exactly this email and password.
    pub fn login(&mut self, email: &str, password: &str) -> AccountResult<User> {
        let user = match self.users.get(email) {
            Some(user) if verify_password(password, &user.password) => user.clone(),
            _ => {
                tracing::debug!(email = %email, "Login rejected");
                return Err(AccountError::InvalidCredentials);
            }
        };

        let previous = self.active.replace(user.email.clone());
        if let Err(e) = self.persist_session() {
            self.active = previous;
            return Err(e);
        }

        tracing::info!(email = %email, "User logged in");
        Ok(user)
    }

    /// Ends the active session. Registered users are untouched.
    pub fn logout(&mut self) -> AccountResult<()> {
        let previous = self.active.take();
        if let Err(e) = self.backend.remove(CURRENT_USER_KEY) {
            self.active = previous;
            return Err(e.into());
        }
        if let Some(email) = previous {
            tracing::info!(email = %email, "User logged out");
        }
        Ok(())
    }

    /// Deletes an account and ends the active session.
    pub fn delete_account(&mut self, email: &str) -> AccountResult<()> {
        if !self.users.contains_key(email) {
            return Err(AccountError::NotFound(email.to_string()));
        }

        self.transaction(|store| {
            store.users.remove(email);
            store.active = None;
            Ok(())
        })?;

        tracing::info!(email = %email, "Account deleted");
        Ok(())
    }

    /// Replaces the stored record with the same email as `updated`.
    pub fn update_user(&mut self, updated: User) -> AccountResult<()> {
        if !self.users.contains_key(updated.email.as_str()) {
            return Err(AccountError::NotFound(updated.email));
        }

        let email = updated.email.clone();
        self.transaction(move |store| {
            store
                .users
                .replace(updated)
                .map_err(|user| AccountError::NotFound(user.email))?;
            Ok(())
        })?;

        tracing::debug!(email = %email, "User updated");
        Ok(())
    }

    /// Applies `change` and persists users and session.
    ///
    /// If any step fails, the previous in-memory state is restored and
    /// written back, so the backend never keeps half of a failed mutation.
    fn transaction<F>(&mut self, change: F) -> AccountResult<()>
    where
        F: FnOnce(&mut Self) -> AccountResult<()>,
    {
        let users = self.users.clone();
        let active = self.active.clone();

        let result = change(self)
            .and_then(|()| self.persist_users())
            .and_then(|()| self.persist_session());

        if let Err(e) = result {
            self.users = users;
            self.active = active;
            if let Err(restore) = self.persist_users().and_then(|()| self.persist_session()) {
                tracing::error!("Failed to restore stored accounts after error: {}", restore);
            }
            return Err(e);
        }
        Ok(())
    }

    fn persist_users(&self) -> AccountResult<()> {
        let raw = serde_json::to_string(&self.users)?;
        self.backend.set(USERS_KEY, &raw)?;
        Ok(())
    }

    fn persist_session(&self) -> AccountResult<()> {
        match self.current_user() {
            Some(user) => {
                let raw = serde_json::to_string(user)?;
                self.backend.set(CURRENT_USER_KEY, &raw)?;
            }
            None => self.backend.remove(CURRENT_USER_KEY)?,
        }
        Ok(())
    }
}
