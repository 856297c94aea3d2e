use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rosterly_domain::{NewUser, UserPatch, UserRecord};

/// Create request body. The id and creation timestamp are server-assigned
/// and therefore absent here.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
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
    /// Photo URL; omitting it stores the empty "no photo" sentinel.
    #[serde(default)]
    pub photo: Option<String>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(value: CreateUserRequest) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            height: value.height,
            weight: value.weight,
            address: value.address,
            photo: value.photo.unwrap_or_default(),
        }
    }
}

/// Partial update body; every field optional, omitted fields keep their
/// stored values.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateUserRequest {
    /// Replacement given name.
    pub first_name: Option<String>,
    /// Replacement family name.
    pub last_name: Option<String>,
    /// Replacement height.
    pub height: Option<f64>,
    /// Replacement weight.
    pub weight: Option<f64>,
    /// Replacement address.
    pub address: Option<String>,
    /// Replacement photo URL; `""` clears the photo.
    pub photo: Option<String>,
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(value: UpdateUserRequest) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            height: value.height,
            weight: value.weight,
            address: value.address,
            photo: value.photo,
        }
    }
}

/// One user record on the wire.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Opaque identifier.
    pub id: String,
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
    /// Photo URL or `""`.
    pub photo: String,
    /// Server-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<UserRecord> for UserResponse {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id.into(),
            first_name: record.first_name,
            last_name: record.last_name,
            height: record.height,
            weight: record.weight,
            address: record.address,
            photo: record.photo,
            created_at: record.created_at,
        }
    }
}

/// Listing response: one page of users plus the total page count.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUsersResponse {
    /// Records within the requested page.
    pub users: Vec<UserResponse>,
    /// Total pages for the whole store.
    pub total_pages: u64,
}
