//! Credential directory collaborator.
//!
//! Defines the [`CredentialDirectory`] trait the auth store consumes,
//! plus [`MockDirectory`], the in-memory demo implementation seeded
//! with two well-known accounts. Records carry a plaintext password —
//! acceptable only because this is an explicit mock; a real backend
//! behind this trait would hash.

use parking_lot::Mutex;
use taskdeck_model::User;

/// Errors from the credential backend.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// The backend could not be reached or failed internally.
    #[error("credential backend unavailable: {0}")]
    Unavailable(String),
}

/// A stored credential record: public profile plus plaintext password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    /// Directory-assigned unique id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address; unique, matched case-sensitively.
    pub email: String,
    /// Plaintext password (mock only).
    pub password: String,
    /// Optional profile fields.
    pub bio: Option<String>,
    /// Location string.
    pub location: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
}

impl CredentialRecord {
    /// The public profile of this record, with the password stripped.
    #[must_use]
    pub fn public_profile(&self) -> User {
        User {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            bio: self.bio.clone(),
            location: self.location.clone(),
            phone: self.phone.clone(),
            avatar: None,
        }
    }
}

/// Input for creating a new credential record. The directory assigns
/// the id.
#[derive(Debug, Clone)]
pub struct NewCredential {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Plaintext password (mock only).
    pub password: String,
}

/// Async collaborator contract for credential lookup and maintenance.
///
/// All matching is exact and case-sensitive.
pub trait CredentialDirectory: Send + Sync {
    /// Finds the record with the given email, if any.
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl std::future::Future<Output = Result<Option<CredentialRecord>, DirectoryError>> + Send;

    /// Finds the record matching both email and password, if any.
    fn find_by_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<Option<CredentialRecord>, DirectoryError>> + Send;

    /// Creates a new record, assigning it a fresh unique id.
    fn create(
        &self,
        credential: NewCredential,
    ) -> impl std::future::Future<Output = Result<CredentialRecord, DirectoryError>> + Send;

    /// Overwrites the profile fields of the record with the given id,
    /// keeping its password. Returns `None` if no record matches.
    fn update(
        &self,
        id: &str,
        profile: &User,
    ) -> impl std::future::Future<Output = Result<Option<CredentialRecord>, DirectoryError>> + Send;
}

/// In-memory credential directory seeded with two demo accounts.
///
/// Ids are sequential strings ("1", "2", ...), continuing from the
/// seeded records.
#[derive(Debug, Default)]
pub struct MockDirectory {
    records: Mutex<Vec<CredentialRecord>>,
}

impl MockDirectory {
    /// Creates a directory seeded with the two demo users
    /// (`john@example.com` and `jane@example.com`, password
    /// `password123`).
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            records: Mutex::new(vec![
                CredentialRecord {
                    id: "1".to_string(),
                    name: "John Doe".to_string(),
                    email: "john@example.com".to_string(),
                    password: "password123".to_string(),
                    bio: Some("Frontend developer with a passion for UI/UX design".to_string()),
                    location: Some("San Francisco, CA".to_string()),
                    phone: Some("+1 (555) 123-4567".to_string()),
                },
                CredentialRecord {
                    id: "2".to_string(),
                    name: "Jane Smith".to_string(),
                    email: "jane@example.com".to_string(),
                    password: "password123".to_string(),
                    bio: Some("Product manager and tech enthusiast".to_string()),
                    location: Some("New York, NY".to_string()),
                    phone: Some("+1 (555) 987-6543".to_string()),
                },
            ]),
        }
    }

    /// Creates an empty directory (no accounts can log in until one is
    /// registered).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

impl CredentialDirectory for MockDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<CredentialRecord>, DirectoryError> {
        Ok(self
            .records
            .lock()
            .iter()
            .find(|r| r.email == email)
            .cloned())
    }

    async fn find_by_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<CredentialRecord>, DirectoryError> {
        Ok(self
            .records
            .lock()
            .iter()
            .find(|r| r.email == email && r.password == password)
            .cloned())
    }

    async fn create(
        &self,
        credential: NewCredential,
    ) -> Result<CredentialRecord, DirectoryError> {
        let mut records = self.records.lock();
        let record = CredentialRecord {
            id: (records.len() + 1).to_string(),
            name: credential.name,
            email: credential.email,
            password: credential.password,
            bio: None,
            location: None,
            phone: None,
        };
        records.push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: &str,
        profile: &User,
    ) -> Result<Option<CredentialRecord>, DirectoryError> {
        let mut records = self.records.lock();
        let Some(record) = records.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        record.name = profile.name.clone();
        record.email = profile.email.clone();
        record.bio = profile.bio.clone();
        record.location = profile.location.clone();
        record.phone = profile.phone.clone();
        Ok(Some(record.clone()))
    }
}
