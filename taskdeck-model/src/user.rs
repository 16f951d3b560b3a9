//! User profile and persisted session records.

use serde::{Deserialize, Serialize};

/// Public profile of an authenticated user.
///
/// The id is assigned by the credential directory. The password never
/// appears here; it lives only on the directory's credential records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Directory-assigned unique id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address; unique per user, matched case-sensitively.
    pub email: String,
    /// Optional short biography.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Optional location string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Optional phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Optional avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// Applies a partial profile update, returning the merged profile.
    ///
    /// Only provided, non-empty fields overwrite; a `None` or
    /// empty-string field keeps the existing value. The id never
    /// changes.
    #[must_use]
    pub fn apply_patch(&self, patch: &UserPatch) -> Self {
        fn pick(new: Option<&String>, old: &str) -> String {
            match new {
                Some(v) if !v.is_empty() => v.clone(),
                _ => old.to_string(),
            }
        }
        fn pick_opt(new: Option<&String>, old: Option<&String>) -> Option<String> {
            match new {
                Some(v) if !v.is_empty() => Some(v.clone()),
                _ => old.cloned(),
            }
        }

        Self {
            id: self.id.clone(),
            name: pick(patch.name.as_ref(), &self.name),
            email: pick(patch.email.as_ref(), &self.email),
            bio: pick_opt(patch.bio.as_ref(), self.bio.as_ref()),
            location: pick_opt(patch.location.as_ref(), self.location.as_ref()),
            phone: pick_opt(patch.phone.as_ref(), self.phone.as_ref()),
            avatar: pick_opt(patch.avatar.as_ref(), self.avatar.as_ref()),
        }
    }
}

/// A partial profile update. Absent and empty-string fields mean
/// "keep the existing value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    /// New display name, if any.
    pub name: Option<String>,
    /// New email address, if any.
    pub email: Option<String>,
    /// New biography, if any.
    pub bio: Option<String>,
    /// New location, if any.
    pub location: Option<String>,
    /// New phone number, if any.
    pub phone: Option<String>,
    /// New avatar URL, if any.
    pub avatar: Option<String>,
}

/// The session record persisted under the `"auth"` storage key.
///
/// Only ever written with `is_authenticated: true`; when the user is
/// anonymous the key is absent instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSession {
    /// Always true in persisted form.
    pub is_authenticated: bool,
    /// The authenticated user's public profile.
    pub user: User,
}
