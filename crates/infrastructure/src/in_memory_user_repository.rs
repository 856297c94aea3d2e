//! In-memory user repository implementation.
//!
//! Backs local runs without a database and exercises the repository port
//! in tests. Identifiers are sequential decimal strings; the counter only
//! ever moves forward, so an id is never reused after deletion.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use rosterly_application::UserRepository;
use rosterly_core::{AppError, AppResult};
use rosterly_domain::{NewUser, UserId, UserPatch, UserRecord};


/// In-memory user repository.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<UserRecord>>,
    next_id: AtomicU64,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_page(&self, skip: u64, take: u64) -> AppResult<Vec<UserRecord>> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .skip(skip as usize)
            .take(take as usize)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<UserRecord>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|user| &user.id == id).cloned())
    }

    async fn create(&self, input: NewUser) -> AppResult<UserRecord> {
        let assigned = self.next_id.fetch_add(1, Ordering::Relaxed);
        let record = UserRecord {
            id: UserId::new(assigned.to_string()),
            first_name: input.first_name,
            last_name: input.last_name,
            height: input.height,
            weight: input.weight,
            address: input.address,
            photo: input.photo,
            created_at: Utc::now(),
        };

        self.users.write().await.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &UserId, patch: UserPatch) -> AppResult<UserRecord> {
        let mut users = self.users.write().await;
        let stored = users
            .iter_mut()
            .find(|user| &user.id == id)
            .ok_or_else(|| AppError::NotFound("User not found".to_owned()))?;

        *stored = patch.apply_to(stored);
        Ok(stored.clone())
    }

    async fn delete(&self, id: &UserId) -> AppResult<UserRecord> {
        let mut users = self.users.write().await;
        let position = users
            .iter()
            .position(|user| &user.id == id)
            .ok_or_else(|| AppError::NotFound("User not found".to_owned()))?;

        Ok(users.remove(position))
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.users.read().await.len() as u64)
    }
}
