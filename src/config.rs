use std::net::SocketAddr;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "ClinicRecords";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_API_PREFIX: &str = "/api";

const ENV_DB_PATH: &str = "CLINIC_DB_PATH";
const ENV_BIND_ADDR: &str = "CLINIC_BIND_ADDR";
const ENV_API_PREFIX: &str = "CLINIC_API_PREFIX";

/// Get the application data directory
/// ~/ClinicRecords/ on all platforms. Falls back to the working directory
/// when no home directory can be determined.
pub fn app_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Default SQLite database location
pub fn default_db_path() -> PathBuf {
    app_data_dir().join("clinic.db")
}

/// Filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "clinic_records=info"
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidBindAddr { var: &'static str, value: String },

    #[error("{var} must start with '/': {value}")]
    InvalidPrefix { var: &'static str, value: String },
}

/// Runtime settings for the server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub bind_addr: SocketAddr,
    /// Path prefix every route is nested under. Empty means root.
    pub api_prefix: String,
}

impl AppConfig {
    /// Read settings from `CLINIC_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; unset keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = lookup(ENV_DB_PATH)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_db_path);

        let bind_raw = lookup(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr {
                var: ENV_BIND_ADDR,
                value: bind_raw.clone(),
            })?;

        let prefix_raw = lookup(ENV_API_PREFIX).unwrap_or_else(|| DEFAULT_API_PREFIX.to_string());
        let api_prefix = normalize_prefix(&prefix_raw)?;

        Ok(Self {
            db_path,
            bind_addr,
            api_prefix,
        })
    }
}

fn normalize_prefix(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    if !trimmed.starts_with('/') {
        return Err(ConfigError::InvalidPrefix {
            var: ENV_API_PREFIX,
            value: raw.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn app_data_dir_ends_with_app_name() {
        assert!(app_data_dir().ends_with(APP_NAME));
        assert!(default_db_path().starts_with(app_data_dir()));
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(config.api_prefix, "/api");
        assert_eq!(config.db_path, default_db_path());
    }

    #[test]
    fn overrides_are_applied() {
        let config = AppConfig::from_lookup(lookup(&[
            ("CLINIC_DB_PATH", "/tmp/records.db"),
            ("CLINIC_BIND_ADDR", "0.0.0.0:9090"),
            ("CLINIC_API_PREFIX", "/v1/"),
        ]))
        .unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/records.db"));
        assert_eq!(config.bind_addr.port(), 9090);
        assert_eq!(config.api_prefix, "/v1");
    }

    #[test]
    fn root_prefix_becomes_empty() {
        let config = AppConfig::from_lookup(lookup(&[("CLINIC_API_PREFIX", "/")])).unwrap();
        assert_eq!(config.api_prefix, "");
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = AppConfig::from_lookup(lookup(&[("CLINIC_BIND_ADDR", "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
        let err = AppConfig::from_lookup(lookup(&[("CLINIC_API_PREFIX", "api")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPrefix { .. }));
    }
}
