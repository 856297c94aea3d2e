//! User persistence port and application service.
//!
//! Owns the user lifecycle: paginated listing, single lookup, creation,
//! merge-preserving partial update, and deletion. All durable state lives
//! behind the [`UserRepository`] port; the service itself is stateless.

use std::sync::Arc;

use async_trait::async_trait;

use rosterly_core::{AppError, AppResult};
use rosterly_domain::{
    FieldViolation, NewUser, UserId, UserPatch, UserRecord, validate_new_user, validate_user_patch,
};

#[cfg(test)]
mod tests;

/// Fixed number of users per listing page; not caller-configurable.
pub const USERS_PER_PAGE: u64 = 20;

// ---------------------------------------------------------------------------
// Ports
// ---------------------------------------------------------------------------

/// Repository port for user persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns up to `take` records in creation order, skipping `skip`.
    async fn find_page(&self, skip: u64, take: u64) -> AppResult<Vec<UserRecord>>;

    /// Finds a user by exact identifier match.
    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<UserRecord>>;

    /// Creates a new user record, assigning its id and creation time.
    async fn create(&self, input: NewUser) -> AppResult<UserRecord>;

    /// Applies a merge-preserving partial update and returns the merged
    /// record. Callers must verify existence first.
    async fn update(&self, id: &UserId, patch: UserPatch) -> AppResult<UserRecord>;

    /// Permanently removes a record and returns its pre-deletion snapshot.
    async fn delete(&self, id: &UserId) -> AppResult<UserRecord>;

    /// Returns the total number of stored records.
    async fn count(&self) -> AppResult<u64>;
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// One page of listed users plus the total page count for the store.
#[derive(Debug, Clone, PartialEq)]
pub struct UserPage {
    /// Records within the requested window, in creation order.
    pub users: Vec<UserRecord>,
    /// `ceil(total record count / USERS_PER_PAGE)`, independent of how
    /// many records the requested window actually holds.
    pub total_pages: u64,
}

/// Application service for user records.
#[derive(Clone)]
pub struct UserService {
    user_repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// Creates a new user service over the given repository.
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Lists one page of users together with the total page count.
    ///
    /// Rejects negative pages before touching the repository. Page 0
    /// addresses the window before the first record and pages past the end
    /// address windows after the last one; both yield an empty list with
    /// the correctly computed `total_pages`, never an error.
    pub async fn list(&self, page: i64) -> AppResult<UserPage> {
        if page < 0 {
            return Err(AppError::Validation("Incorrect page value".to_owned()));
        }

        let total = self.user_repository.count().await?;
        let total_pages = total.div_ceil(USERS_PER_PAGE);

        let users = if page == 0 {
            Vec::new()
        } else {
            let skip = (page as u64 - 1).saturating_mul(USERS_PER_PAGE);
            self.user_repository.find_page(skip, USERS_PER_PAGE).await?
        };

        Ok(UserPage { users, total_pages })
    }

    /// Returns the user with the given identifier.
    pub async fn get_one(&self, id: &UserId) -> AppResult<UserRecord> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_owned()))
    }

    /// Validates and creates a new user record.
    ///
    /// The repository assigns `id` and `created_at`; uniqueness is enforced
    /// by the store, not pre-checked here.
    pub async fn create(&self, input: NewUser) -> AppResult<UserRecord> {
        reject_violations(validate_new_user(&input))?;
        self.user_repository.create(input).await
    }

    /// Validates and applies a partial update.
    ///
    /// The existence check happens before any write; a missing id fails
    /// with `NotFound` and leaves the store untouched. Omitted patch fields
    /// retain their stored values.
    pub async fn update(&self, id: &UserId, patch: UserPatch) -> AppResult<UserRecord> {
        reject_violations(validate_user_patch(&patch))?;

        // Lookup-then-act. The repository update contract assumes the
        // record exists.
        self.get_one(id).await?;
        self.user_repository.update(id, patch).await
    }

    /// Deletes a user and returns the record as it existed beforehand.
    pub async fn delete_one(&self, id: &UserId) -> AppResult<UserRecord> {
        self.get_one(id).await?;
        self.user_repository.delete(id).await
    }
}

fn reject_violations(violations: Vec<FieldViolation>) -> AppResult<()> {
    if violations.is_empty() {
        return Ok(());
    }

    let joined = violations
        .iter()
        .map(FieldViolation::to_string)
        .collect::<Vec<_>>()
        .join("; ");

    Err(AppError::Validation(joined))
}
