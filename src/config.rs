//! Build-time Configuration
//!
//! A CSR bundle has no process environment, so the Supabase project is
//! baked in when the bundle is built:
//!
//! ```text
//! SUPABASE_URL=https://<ref>.supabase.co SUPABASE_ANON_KEY=... trunk build
//! ```

use thiserror::Error;
use tracing::Level;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} was not set when the app was built")]
    Missing(&'static str),
    #[error("invalid log level {0:?}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub log_level: Level,
}

impl AppConfig {
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("SUPABASE_URL"),
            option_env!("SUPABASE_ANON_KEY"),
            option_env!("TASKS_LOG_LEVEL"),
        )
    }

    pub fn from_values(
        url: Option<&str>,
        anon_key: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let url = required("SUPABASE_URL", url)?;
        let anon_key = required("SUPABASE_ANON_KEY", anon_key)?;
        let log_level = match log_level.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidLogLevel(raw.to_string()))?,
            None => Level::INFO,
        };

        Ok(Self {
            supabase_url: url.trim_end_matches('/').to_string(),
            supabase_anon_key: anon_key.to_string(),
            log_level,
        })
    }
}

fn required<'a>(name: &'static str, value: Option<&'a str>) -> Result<&'a str, ConfigError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(name))
}
