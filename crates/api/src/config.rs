use crate::auth::jwt::JwtConfig;

/// Which [`NoteStore`](jotter_db::store::NoteStore) backend the server runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// PostgreSQL at the given connection URL.
    Postgres { database_url: String },
    /// Process-local maps; everything is lost on restart.
    Memory,
}

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret (and the database URL when running on
/// PostgreSQL) have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Storage backend selection.
    pub store: StoreBackend,
    /// JWT verification configuration.
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `STORE_BACKEND`        | `postgres`                 |
    /// | `DATABASE_URL`         | required for `postgres`    |
    ///
    /// # Panics
    ///
    /// Panics on malformed values so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let backend = std::env::var("STORE_BACKEND").unwrap_or_else(|_| "postgres".into());
        let store = parse_store_backend(&backend, std::env::var("DATABASE_URL").ok())
            .unwrap_or_else(|e| panic!("{e}"));

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            store,
            jwt,
        }
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_store_backend(
    backend: &str,
    database_url: Option<String>,
) -> Result<StoreBackend, String> {
    match backend.trim().to_ascii_lowercase().as_str() {
        "postgres" => database_url
            .filter(|url| !url.is_empty())
            .map(|database_url| StoreBackend::Postgres { database_url })
            .ok_or_else(|| "DATABASE_URL must be set when STORE_BACKEND=postgres".to_string()),
        "memory" => Ok(StoreBackend::Memory),
        other => Err(format!(
            "Invalid STORE_BACKEND '{other}'. Must be one of: postgres, memory"
        )),
    }
}
