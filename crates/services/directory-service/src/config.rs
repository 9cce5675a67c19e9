//! Directory configuration.

use std::env;

use common::{DatabaseConfig, ServerConfig};

/// Settings for the directory service and its HTTP surface.
#[derive(Debug, Clone, Default)]
pub struct DirectoryConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

impl DirectoryConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or(defaults.database.url),
                max_connections: parse_var("DB_MAX_CONNECTIONS")
                    .unwrap_or(defaults.database.max_connections),
                min_connections: parse_var("DB_MIN_CONNECTIONS")
                    .unwrap_or(defaults.database.min_connections),
            },
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or(defaults.server.host),
                port: parse_var("SERVER_PORT").unwrap_or(defaults.server.port),
            },
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_database_url() {
        let config = DirectoryConfig::default();
        let rendered = format!("{:?}", config);

        assert!(!rendered.contains("postgres://"));
        assert!(rendered.contains("3000"));
    }
}
