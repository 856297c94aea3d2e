//! Rosterly API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod dev_seed;
mod dto;
mod error;
mod handlers;
mod state;

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

use rosterly_application::{UserRepository, UserService};
use rosterly_core::AppError;
use rosterly_infrastructure::{InMemoryUserRepository, PostgresUserRepository};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::api_config::{ApiConfig, StorageConfig};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::load()?;

    let (user_repository, postgres_pool): (Arc<dyn UserRepository>, Option<PgPool>) =
        match &config.storage {
            StorageConfig::Postgres { database_url } => {
                let pool = PgPoolOptions::new()
                    .max_connections(10)
                    .connect(database_url)
                    .await
                    .map_err(|error| {
                        AppError::Internal(format!("failed to connect to database: {error}"))
                    })?;

                sqlx::migrate!("../../crates/infrastructure/migrations")
                    .run(&pool)
                    .await
                    .map_err(|error| {
                        AppError::Internal(format!("failed to run migrations: {error}"))
                    })?;

                if config.migrate_only {
                    info!("database migrations applied successfully");
                    return Ok(());
                }

                (
                    Arc::new(PostgresUserRepository::new(pool.clone())),
                    Some(pool),
                )
            }
            StorageConfig::Memory => {
                if config.migrate_only {
                    return Err(AppError::Validation(
                        "the migrate command requires the postgres storage backend".to_owned(),
                    ));
                }

                (Arc::new(InMemoryUserRepository::new()), None)
            }
        };

    let user_service = UserService::new(user_repository);

    if config.dev_seed {
        dev_seed::run(&user_service).await?;
    }

    let app_state = AppState {
        user_service,
        postgres_pool,
    };
    let app = api_router::build_router(app_state, &config.frontend_url)?;

    let host = IpAddr::from_str(&config.api_host).map_err(|error| {
        AppError::Internal(format!("invalid API_HOST '{}': {error}", config.api_host))
    })?;
    let address = SocketAddr::from((host, config.api_port));

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, "rosterly-api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}
