//! The auth store: session state machine and its async operations.

use std::sync::Arc;

use taskdeck_model::{StoredSession, User, UserPatch};

use super::directory::{CredentialDirectory, NewCredential};
use super::AuthError;
use crate::storage::{StorageAdapter, StorageError, AUTH_KEY};

/// Owns the session state: who is logged in and whether an operation
/// is in flight.
///
/// Every operation follows the three-phase lifecycle: pending sets
/// `loading` (and clears `error`), then exactly one of fulfilled or
/// rejected settles it. Rejections record a user-facing message in
/// `error` and leave `is_authenticated`/`user` untouched; the silent
/// exception is [`check_auth`](Self::check_auth), whose "not logged
/// in" outcome is not an error.
///
/// Operations are not mutually exclusive; when calls overlap, the last
/// one to settle wins.
pub struct AuthStore<D: CredentialDirectory, S: StorageAdapter> {
    is_authenticated: bool,
    user: Option<User>,
    loading: bool,
    error: Option<String>,
    directory: D,
    storage: Arc<S>,
}

impl<D: CredentialDirectory, S: StorageAdapter> AuthStore<D, S> {
    /// Creates a store in the anonymous state. Call
    /// [`check_auth`](Self::check_auth) to restore a persisted session.
    pub fn new(directory: D, storage: Arc<S>) -> Self {
        Self {
            is_authenticated: false,
            user: None,
            loading: false,
            error: None,
            directory,
            storage,
        }
    }

    /// Whether a user is currently authenticated.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    /// The authenticated user's profile, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether an operation is in flight.
    #[must_use]
    pub const fn loading(&self) -> bool {
        self.loading
    }

    /// The last rejection's user-facing message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Logs in with an exact email/password match against the
    /// credential directory.
    ///
    /// On success the session is persisted under `"auth"` and the
    /// store becomes authenticated. On rejection the prior session
    /// state is untouched and nothing is persisted.
    ///
    /// # Errors
    ///
    /// [`AuthError::InvalidCredentials`] when no record matches;
    /// [`AuthError::LoginFailed`] when the directory or storage fails.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        self.loading = true;
        self.error = None;

        let outcome = self.login_inner(email, password).await;
        self.settle_session(outcome)
    }

    async fn login_inner(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let record = self
            .directory
            .find_by_email_and_password(email, password)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "credential lookup failed");
                AuthError::LoginFailed
            })?
            .ok_or(AuthError::InvalidCredentials)?;

        let user = record.public_profile();
        self.persist_session(&user).map_err(|e| {
            tracing::warn!(error = %e, "failed to persist session");
            AuthError::LoginFailed
        })?;
        Ok(user)
    }

    /// Registers a new account and authenticates it immediately (no
    /// separate confirmation step).
    ///
    /// # Errors
    ///
    /// [`AuthError::EmailTaken`] when a record with this email already
    /// exists (case-sensitive match); [`AuthError::RegistrationFailed`]
    /// when the directory or storage fails.
    pub async fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        self.loading = true;
        self.error = None;

        let outcome = self.register_inner(name, email, password).await;
        self.settle_session(outcome)
    }

    async fn register_inner(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let existing = self.directory.find_by_email(email).await.map_err(|e| {
            tracing::warn!(error = %e, "credential lookup failed");
            AuthError::RegistrationFailed
        })?;
        if existing.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let record = self
            .directory
            .create(NewCredential {
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
            })
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "credential creation failed");
                AuthError::RegistrationFailed
            })?;

        let user = record.public_profile();
        self.persist_session(&user).map_err(|e| {
            tracing::warn!(error = %e, "failed to persist session");
            AuthError::RegistrationFailed
        })?;
        Ok(user)
    }

    /// Restores a persisted session, if one exists.
    ///
    /// Returns whether a session was restored. The "not logged in"
    /// outcome (absent or malformed record) silently resets the store
    /// to anonymous; no error message is surfaced, distinguishing it
    /// from a login failure.
    pub fn check_auth(&mut self) -> bool {
        self.loading = true;
        self.error = None;

        let session: Option<StoredSession> = match self.storage.get(AUTH_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(session) => Some(session),
                Err(e) => {
                    tracing::warn!(error = %e, "malformed persisted session, treating as absent");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "persisted session unreadable, treating as absent");
                None
            }
        };

        self.loading = false;
        match session {
            Some(session) => {
                self.is_authenticated = true;
                self.user = Some(session.user);
                true
            }
            None => {
                self.is_authenticated = false;
                self.user = None;
                false
            }
        }
    }

    /// Logs out: removes the persisted session and clears the store
    /// unconditionally. A storage failure is logged, never surfaced —
    /// there is no meaningful rejection path.
    pub fn logout(&mut self) {
        if let Err(e) = self.storage.remove(AUTH_KEY) {
            tracing::warn!(error = %e, "failed to remove persisted session");
        }
        self.is_authenticated = false;
        self.user = None;
    }

    /// Applies a partial profile update to the authenticated user.
    ///
    /// Only provided, non-empty fields overwrite. The merged profile
    /// replaces the directory's matching record (silently skipped if
    /// that record vanished), the persisted session, and `user`.
    ///
    /// # Errors
    ///
    /// [`AuthError::NotAuthenticated`] when no user is logged in;
    /// [`AuthError::UpdateFailed`] when the directory or storage fails.
    pub async fn update_user(&mut self, patch: &UserPatch) -> Result<User, AuthError> {
        self.loading = true;
        self.error = None;

        let outcome = self.update_inner(patch).await;
        self.loading = false;
        match outcome {
            Ok(user) => {
                self.user = Some(user.clone());
                self.error = None;
                Ok(user)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    async fn update_inner(&self, patch: &UserPatch) -> Result<User, AuthError> {
        let current = self.user.as_ref().ok_or(AuthError::NotAuthenticated)?;
        let merged = current.apply_patch(patch);

        match self.directory.update(&merged.id, &merged).await {
            Ok(Some(_)) => {}
            // Record vanished from the directory: session still updates.
            Ok(None) => {
                tracing::debug!(id = %merged.id, "directory record missing during profile update");
            }
            Err(e) => {
                tracing::warn!(error = %e, "credential update failed");
                return Err(AuthError::UpdateFailed);
            }
        }

        self.persist_session(&merged).map_err(|e| {
            tracing::warn!(error = %e, "failed to persist session");
            AuthError::UpdateFailed
        })?;
        Ok(merged)
    }

    /// Shared fulfilled/rejected handling for login and register.
    fn settle_session(&mut self, outcome: Result<User, AuthError>) -> Result<User, AuthError> {
        self.loading = false;
        match outcome {
            Ok(user) => {
                self.is_authenticated = true;
                self.user = Some(user.clone());
                self.error = None;
                Ok(user)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    fn persist_session(&self, user: &User) -> Result<(), StorageError> {
        let session = StoredSession {
            is_authenticated: true,
            user: user.clone(),
        };
        let raw = serde_json::to_string(&session).map_err(|e| StorageError::WriteFailed {
            key: AUTH_KEY.to_string(),
            reason: e.to_string(),
        })?;
        self.storage.set(AUTH_KEY, &raw)
    }
}
