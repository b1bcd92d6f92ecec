use std::time::Duration;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `12348`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Connection attempts made while waiting for the database (default: `30`).
    pub db_wait_attempts: u32,
    /// Delay between database connection attempts in milliseconds (default: `1000`).
    pub db_wait_delay_ms: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `12348`                    |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DB_WAIT_ATTEMPTS`     | `30`                       |
    /// | `DB_WAIT_DELAY_MS`     | `1000`                     |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "12348".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let db_wait_attempts: u32 = std::env::var("DB_WAIT_ATTEMPTS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("DB_WAIT_ATTEMPTS must be a valid u32");

        let db_wait_delay_ms: u64 = std::env::var("DB_WAIT_DELAY_MS")
            .unwrap_or_else(|_| "1000".into())
            .parse()
            .expect("DB_WAIT_DELAY_MS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            db_wait_attempts,
            db_wait_delay_ms,
        }
    }

    pub fn db_wait_delay(&self) -> Duration {
        Duration::from_millis(self.db_wait_delay_ms)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
