//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    #[serde(default = "default_database_url")]
    pub url: String,
    /// Connection timeout in seconds for the single connection attempt.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            connect_timeout_secs: default_connect_timeout(),
            max_connections: default_max_connections(),
        }
    }
}

fn default_database_url() -> String {
    std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "postgres://localhost:5432/survey_db".to_string())
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_max_connections() -> u32 {
    10
}

impl DatabaseConfig {
    /// Derives the database name from the connection URL's path segment.
    ///
    /// The explicit path segment is authoritative; when the URL carries no
    /// database segment this returns `None` rather than guessing a default.
    #[must_use]
    pub fn database_name(&self) -> Option<&str> {
        let without_query = self.url.split(['?', '#']).next().unwrap_or(&self.url);
        let authority_and_path = without_query
            .split_once("://")
            .map_or(without_query, |(_, rest)| rest);
        let segment = authority_and_path.split('/').nth(1)?;
        if segment.is_empty() { None } else { Some(segment) }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FOSTER").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::DatabaseConfig;

    fn config_with_url(url: &str) -> DatabaseConfig {
        DatabaseConfig {
            url: url.to_string(),
            ..DatabaseConfig::default()
        }
    }

    #[rstest]
    #[case("postgres://localhost:5432/survey_db", Some("survey_db"))]
    #[case("postgres://user:pw@db.example.com:5432/foster?sslmode=require", Some("foster"))]
    #[case("postgres://localhost:5432", None)]
    #[case("postgres://localhost:5432/", None)]
    #[case("postgres://localhost:5432/survey_db?a=1&b=2", Some("survey_db"))]
    fn test_database_name_from_url(#[case] url: &str, #[case] expected: Option<&str>) {
        assert_eq!(config_with_url(url).database_name(), expected);
    }

    #[test]
    fn test_default_database_url_falls_back_to_local() {
        temp_env::with_var_unset("DATABASE_URL", || {
            let config = DatabaseConfig::default();
            assert_eq!(config.url, "postgres://localhost:5432/survey_db");
            assert_eq!(config.database_name(), Some("survey_db"));
        });
    }

    #[test]
    fn test_database_url_env_var_recognized() {
        temp_env::with_var("DATABASE_URL", Some("postgres://db:5432/foster"), || {
            let config = DatabaseConfig::default();
            assert_eq!(config.url, "postgres://db:5432/foster");
            assert_eq!(config.database_name(), Some("foster"));
        });
    }
}
