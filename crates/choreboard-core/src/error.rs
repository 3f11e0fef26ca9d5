//! Core error types for choreboard-core.
//!
//! Errors are defined with thiserror. The statistics engine itself can only
//! fail on an input-contract violation; everything else here covers the file
//! and config plumbing around it.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for choreboard-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Statistics computation errors
    #[error("Statistics error: {0}")]
    Stats(#[from] StatsError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by the statistics engine.
#[derive(Error, Debug)]
pub enum StatsError {
    /// A task carried an owner tag outside the closed member set. No partial
    /// result is returned.
    #[error("task '{task_id}' has unknown member tag '{tag}' (expected one of: parentA, parentB, both)")]
    UnknownMember { task_id: String, tag: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file
    #[error("failed to read config at {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the config file
    #[error("failed to parse config: {0}")]
    ParseFailed(#[from] toml::de::Error),
}
