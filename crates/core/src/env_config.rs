//! Environment variable parsing with warn-level logging for invalid values.

use crate::{DEFAULT_DATABASE_URL, DEFAULT_HOST, DEFAULT_PORT};

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

/// Process-level settings: where to listen and which database to use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_owned(),
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Reads `DATABASE_URL`, `HOST` and `PORT`, falling back to the defaults.
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned()),
            host: std::env::var("HOST")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port: env_parse_with_default("PORT", DEFAULT_PORT),
        }
    }

    /// `host:port`, suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // SAFETY: each test touches its own uniquely named variable.
    #[test]
    fn test_env_parse_valid_value() {
        let var_name = "FLAVORS_TEST_ENV_PARSE_VALID_31847";
        unsafe { std::env::set_var(var_name, "8080") };
        let result: u16 = env_parse_with_default(var_name, DEFAULT_PORT);
        assert_eq!(result, 8080);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn test_env_parse_invalid_value() {
        let var_name = "FLAVORS_TEST_ENV_PARSE_INVALID_31848";
        unsafe { std::env::set_var(var_name, "not-a-port") };
        let result: u16 = env_parse_with_default(var_name, DEFAULT_PORT);
        assert_eq!(result, DEFAULT_PORT);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn test_env_parse_out_of_range_value() {
        let var_name = "FLAVORS_TEST_ENV_PARSE_RANGE_31849";
        unsafe { std::env::set_var(var_name, "70000") };
        let result: u16 = env_parse_with_default(var_name, DEFAULT_PORT);
        assert_eq!(result, DEFAULT_PORT);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn test_env_parse_missing_var() {
        let var_name = "FLAVORS_TEST_ENV_PARSE_MISSING_31850";
        unsafe { std::env::remove_var(var_name) };
        let result: u16 = env_parse_with_default(var_name, DEFAULT_PORT);
        assert_eq!(result, DEFAULT_PORT);
    }

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.database_url, "postgres://localhost/flavors_db");
        assert_eq!(config.port, 3000);
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }
}
