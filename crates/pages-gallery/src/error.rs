//! Error types for the gallery crate.
//!
//! Paging itself never fails: empty galleries, out-of-range targets and a
//! missing active index are all silent no-ops. Errors only arise while
//! loading a configuration.

use thiserror::Error;

/// Errors that can occur while loading a gallery configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration text is not valid TOML or has the wrong shape.
    #[error("failed to parse gallery configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The indicator dot diameter is negative or not finite.
    #[error("invalid indicator dot size: {0}")]
    InvalidDotSize(f32),

    /// The spacing between indicator dots is negative or not finite.
    #[error("invalid indicator dot spacing: {0}")]
    InvalidSpacing(f32),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
