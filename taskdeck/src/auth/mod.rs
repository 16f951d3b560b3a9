//! Authentication: session state and the credential collaborator.
//!
//! [`AuthStore`] owns the session state machine (anonymous → checking →
//! authenticated | failed) and talks to a [`CredentialDirectory`] for
//! login, registration, and profile updates. The session is mirrored to
//! durable storage under the `"auth"` key only while authenticated.

pub mod directory;
pub mod store;

pub use directory::{CredentialDirectory, CredentialRecord, DirectoryError, MockDirectory, NewCredential};
pub use store::AuthStore;

/// Errors surfaced by auth operations.
///
/// The `Display` text of each variant is the user-facing message that
/// the store records in its `error` field on rejection.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AuthError {
    /// No credential record matched the email/password pair.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// A credential record with this email already exists.
    #[error("Email already in use")]
    EmailTaken,

    /// A profile update was attempted with no authenticated user.
    #[error("User not found")]
    NotAuthenticated,

    /// Login could not complete (collaborator or persistence failure).
    #[error("Login failed. Please try again.")]
    LoginFailed,

    /// Registration could not complete.
    #[error("Registration failed. Please try again.")]
    RegistrationFailed,

    /// Profile update could not complete.
    #[error("Failed to update user profile")]
    UpdateFailed,
}
