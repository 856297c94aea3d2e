//! Shared application state.

use rosterly_application::UserService;
use sqlx::PgPool;

/// State handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// User CRUD application service.
    pub user_service: UserService,
    /// Connection pool for the health probe; `None` on the in-memory backend.
    pub postgres_pool: Option<PgPool>,
}
