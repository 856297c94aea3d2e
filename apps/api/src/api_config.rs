//! Environment-driven runtime configuration.

use std::env;

use rosterly_core::AppError;

/// Storage backend selection.
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// Durable PostgreSQL storage; the default.
    Postgres {
        /// Connection string from `DATABASE_URL`.
        database_url: String,
    },
    /// Process-local in-memory storage for demos and local runs.
    Memory,
}

/// Runtime configuration for the API process.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Run migrations and exit (the `migrate` CLI argument).
    pub migrate_only: bool,
    /// Selected storage backend.
    pub storage: StorageConfig,
    /// Listener host, default 127.0.0.1.
    pub api_host: String,
    /// Listener port, default 3001.
    pub api_port: u16,
    /// Browser origin allowed by CORS, default http://localhost:3000.
    pub frontend_url: String,
    /// Seed sample users into an empty store on startup.
    pub dev_seed: bool,
}

impl ApiConfig {
    /// Loads configuration from process arguments and the environment.
    pub fn load() -> Result<Self, AppError> {
        let migrate_only = env::args().nth(1).as_deref() == Some("migrate");

        let storage_name = env::var("STORAGE").unwrap_or_else(|_| "postgres".to_owned());
        let storage = match storage_name.as_str() {
            "postgres" => StorageConfig::Postgres {
                database_url: required_env("DATABASE_URL")?,
            },
            "memory" => StorageConfig::Memory,
            _ => {
                return Err(AppError::Validation(format!(
                    "STORAGE must be either 'postgres' or 'memory', got '{storage_name}'"
                )));
            }
        };

        let api_host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
        let api_port = env::var("API_PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3001);

        let frontend_url =
            env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned());

        let dev_seed = env::var("DEV_SEED")
            .unwrap_or_else(|_| "false".to_owned())
            .eq_ignore_ascii_case("true");

        Ok(Self {
            migrate_only,
            storage,
            api_host,
            api_port,
            frontend_url,
            dev_seed,
        })
    }
}

fn required_env(name: &str) -> Result<String, AppError> {
    env::var(name).map_err(|_| AppError::Validation(format!("{name} is required")))
}
