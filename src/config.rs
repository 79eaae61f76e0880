use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_TITLE: &str = "ModernChat";
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} must be a whole number of milliseconds, got {value:?}")]
    InvalidDelay { key: &'static str, value: String },

    #[error("{key} is not a log level: {value:?}")]
    InvalidLogLevel { key: &'static str, value: String },
}

/// Settings read once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatConfig {
    pub title: String,
    pub reply_delay: Duration,
    pub log_level: tracing::Level,
    pub seed_path: Option<PathBuf>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            reply_delay: DEFAULT_REPLY_DELAY,
            log_level: tracing::Level::INFO,
            seed_path: None,
        }
    }
}

impl ChatConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(title) = read("MODERNCHAT_TITLE") {
            config.title = title;
        }

        if let Some(raw) = read("MODERNCHAT_REPLY_DELAY_MS") {
            let millis = raw.parse::<u64>().map_err(|_| ConfigError::InvalidDelay {
                key: "MODERNCHAT_REPLY_DELAY_MS",
                value: raw.clone(),
            })?;
            config.reply_delay = Duration::from_millis(millis);
        }

        if let Some(raw) = read("MODERNCHAT_LOG") {
            config.log_level = raw
                .parse::<tracing::Level>()
                .map_err(|_| ConfigError::InvalidLogLevel {
                    key: "MODERNCHAT_LOG",
                    value: raw.clone(),
                })?;
        }

        config.seed_path = read("MODERNCHAT_SEED_PATH").map(PathBuf::from);

        Ok(config)
    }
}
