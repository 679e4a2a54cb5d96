use itemservice_core::validation::codes::MessageCodeFormat;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
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
    /// Upper bound on draining open connections after a shutdown signal,
    /// in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Postgres connection string. Items are kept in memory when unset.
    pub database_url: Option<String>,
    /// JSON message catalogue overriding the bundled one.
    pub messages_path: Option<String>,
    /// Layout of generated message codes (default: prefix).
    pub message_code_format: MessageCodeFormat,
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
    /// | `SHUTDOWN_TIMEOUT_SECS`| `30`                       |
    /// | `DATABASE_URL`         | unset (in-memory store)    |
    /// | `MESSAGES_PATH`        | unset (bundled messages)   |
    /// | `MESSAGE_CODE_FORMAT`  | `prefix`                   |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let database_url = non_empty_var("DATABASE_URL");
        let messages_path = non_empty_var("MESSAGES_PATH");

        let message_code_format: MessageCodeFormat = std::env::var("MESSAGE_CODE_FORMAT")
            .unwrap_or_else(|_| "prefix".into())
            .parse()
            .expect("MESSAGE_CODE_FORMAT must be 'prefix' or 'postfix'");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            database_url,
            messages_path,
            message_code_format,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shutdown_timeout_defaults_and_reads_env() {
        std::env::remove_var("SHUTDOWN_TIMEOUT_SECS");
        assert_eq!(ServerConfig::from_env().shutdown_timeout_secs, 30);

        std::env::set_var("SHUTDOWN_TIMEOUT_SECS", "5");
        assert_eq!(ServerConfig::from_env().shutdown_timeout_secs, 5);
        std::env::remove_var("SHUTDOWN_TIMEOUT_SECS");
    }
}
