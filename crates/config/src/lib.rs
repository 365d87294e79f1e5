//! Configuration management for the interview platform.
//!
//! Supports loading configuration from a TOML/YAML file, environment
//! variables (`INTERVIEW_` prefix), and code defaults, layered the way the
//! teacher's `voice-agent-config` does via the `config` crate.

pub mod scoring;
pub mod sensitivity;
pub mod settings;

pub use scoring::ScoringConfig;
pub use sensitivity::{SensitivityConfig, SensitivityProfile};
pub use settings::{
    load_settings, ObservabilityConfig, PersistenceConfig, RuntimeEnvironment, ServerConfig,
    Settings,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration file not found: {0}")]
    FileNotFound(String),

    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    #[error("invalid configuration: {0}")]
    ValidationError(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        Self::ParseError(err.to_string())
    }
}
