//! User record types.
//!
//! Identifiers are opaque strings assigned by the persistence layer at
//! creation time; they are immutable and never reused after deletion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a user record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Creates a user identifier from a persistence-assigned value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the underlying identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// A stored user record.
///
/// `photo` is always a string; the empty string is the canonical
/// "no photo" sentinel. A non-empty value is a validated URL.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    /// Persistence-assigned identifier.
    pub id: UserId,
    /// Given name, non-empty, at most 100 characters.
    pub first_name: String,
    /// Family name, non-empty, at most 100 characters.
    pub last_name: String,
    /// Height value; any finite number.
    pub height: f64,
    /// Weight value; any finite number.
    pub weight: f64,
    /// Postal address, non-empty, unbounded length.
    pub address: String,
    /// Photo URL, or `""` when no photo is set.
    pub photo: String,
    /// Creation timestamp assigned by the persistence layer.
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by the caller when creating a user.
///
/// `id` and `created_at` are absent on purpose: the persistence layer
/// assigns both.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Height value.
    pub height: f64,
    /// Weight value.
    pub weight: f64,
    /// Postal address.
    pub address: String,
    /// Photo URL; `""` when the caller supplied none.
    pub photo: String,
}

/// Partial update for a user record.
///
/// Merge-preserving semantics: an absent field keeps its stored value,
/// a present field replaces it. `photo: Some("")` clears the photo.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    /// Replacement given name, if any.
    pub first_name: Option<String>,
    /// Replacement family name, if any.
    pub last_name: Option<String>,
    /// Replacement height, if any.
    pub height: Option<f64>,
    /// Replacement weight, if any.
    pub weight: Option<f64>,
    /// Replacement address, if any.
    pub address: Option<String>,
    /// Replacement photo URL, if any.
    pub photo: Option<String>,
}

impl UserPatch {
    /// Returns `true` when the patch carries no fields at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.height.is_none()
            && self.weight.is_none()
            && self.address.is_none()
            && self.photo.is_none()
    }

    /// Applies this patch to an existing record, field by field.
    ///
    /// Omitted fields retain the stored value; `id` and `created_at`
    /// are never touched.
    #[must_use]
    pub fn apply_to(&self, existing: &UserRecord) -> UserRecord {
        UserRecord {
            id: existing.id.clone(),
            first_name: self
                .first_name
                .clone()
                .unwrap_or_else(|| existing.first_name.clone()),
            last_name: self
                .last_name
                .clone()
                .unwrap_or_else(|| existing.last_name.clone()),
            height: self.height.unwrap_or(existing.height),
            weight: self.weight.unwrap_or(existing.weight),
            address: self
                .address
                .clone()
                .unwrap_or_else(|| existing.address.clone()),
            photo: self.photo.clone().unwrap_or_else(|| existing.photo.clone()),
            created_at: existing.created_at,
        }
    }
}
