//! Shared domain types and configuration for the revlens review-analytics
//! pipeline.
//!
//! Holds the review/bank record types consumed by every other crate, the
//! env-driven application configuration, and the theme-rules file loader.

use thiserror::Error;

pub mod app_config;
pub mod config;
pub mod themes;
pub mod types;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use themes::{default_theme_rules, load_theme_rules, ThemeRule, ThemeRulesFile};
pub use types::{ReviewRecord, SentimentLabel, FALLBACK_THEME};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read theme rules file {path}: {source}")]
    ThemesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse theme rules file: {0}")]
    ThemesFileParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),
}
