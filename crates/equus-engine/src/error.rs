//! Error types for the engine binary.
//!
//! [`EngineError`] wraps every failure that can stop a season run.

/// Top-level error for the engine binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: equus_core::ConfigError,
    },

    /// A stable operation failed in a way the season cannot recover from.
    #[error("stable error: {source}")]
    Stable {
        /// The underlying stable error.
        #[from]
        source: equus_core::StableError,
    },

    /// The training plan could not be resolved.
    #[error("training plan error: {source}")]
    Plan {
        /// The underlying training error.
        #[from]
        source: equus_training::TrainingError,
    },

    /// The season report could not be serialized.
    #[error("report error: {source}")]
    Report {
        /// The underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}
