//! PostgreSQL-backed user repository.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use rosterly_application::UserRepository;
use rosterly_core::{AppError, AppResult};
use rosterly_domain::{NewUser, UserId, UserPatch, UserRecord};

/// PostgreSQL implementation of the user repository port.
///
/// Identifiers are freshly generated UUID strings; `created_at` comes from
/// the column default, so both stay server-assigned.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Converts a paging value into a non-negative OFFSET/LIMIT bind.
///
/// Postgres rejects negative values, so windows past `i64::MAX` clamp to
/// the end of the table, which is empty anyway.
fn window_param(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: String,
    first_name: String,
    last_name: String,
    height: f64,
    weight: f64,
    address: String,
    photo: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<UserRow> for UserRecord {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::new(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            height: row.height,
            weight: row.weight,
            address: row.address,
            photo: row.photo,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_page(&self, skip: u64, take: u64) -> AppResult<Vec<UserRecord>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, first_name, last_name, height, weight, address, photo, created_at
            FROM users
            ORDER BY created_at, id
            OFFSET $1
            LIMIT $2
            "#,
        )
        .bind(window_param(skip))
        .bind(window_param(take))
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list users: {error}")))?;

        Ok(rows.into_iter().map(UserRecord::from).collect())
    }

    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<UserRecord>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, first_name, last_name, height, weight, address, photo, created_at
            FROM users
            WHERE id = $1
            LIMIT 1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find user by id: {error}")))?;

        Ok(row.map(UserRecord::from))
    }

    async fn create(&self, input: NewUser) -> AppResult<UserRecord> {
        let id = Uuid::new_v4().to_string();

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, first_name, last_name, height, weight, address, photo)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, first_name, last_name, height, weight, address, photo, created_at
            "#,
        )
        .bind(id.as_str())
        .bind(input.first_name.as_str())
        .bind(input.last_name.as_str())
        .bind(input.height)
        .bind(input.weight)
        .bind(input.address.as_str())
        .bind(input.photo.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to create user: {error}")))?;

        debug!(user_id = %row.id, "created user record");
        Ok(UserRecord::from(row))
    }

    async fn update(&self, id: &UserId, patch: UserPatch) -> AppResult<UserRecord> {
        // COALESCE keeps the stored value for every omitted patch field.
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                height = COALESCE($4, height),
                weight = COALESCE($5, weight),
                address = COALESCE($6, address),
                photo = COALESCE($7, photo)
            WHERE id = $1
            RETURNING id, first_name, last_name, height, weight, address, photo, created_at
            "#,
        )
        .bind(id.as_str())
        .bind(patch.first_name.as_deref())
        .bind(patch.last_name.as_deref())
        .bind(patch.height)
        .bind(patch.weight)
        .bind(patch.address.as_deref())
        .bind(patch.photo.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to update user: {error}")))?;

        row.map(UserRecord::from)
            .ok_or_else(|| AppError::NotFound("User not found".to_owned()))
    }

    async fn delete(&self, id: &UserId) -> AppResult<UserRecord> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            DELETE FROM users
            WHERE id = $1
            RETURNING id, first_name, last_name, height, weight, address, photo, created_at
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to delete user: {error}")))?;

        match row {
            Some(row) => {
                debug!(user_id = %row.id, "deleted user record");
                Ok(UserRecord::from(row))
            }
            None => Err(AppError::NotFound("User not found".to_owned())),
        }
    }

    async fn count(&self) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|error| AppError::Internal(format!("failed to count users: {error}")))?;

        Ok(total as u64)
    }
}
