//! Error types for the equus-training crate.
//!
//! Whether a horse may train, and how a session went, are game outcomes and
//! travel in-band through [`TrainingValidation`](equus_types::TrainingValidation)
//! and [`TrainingResult`](equus_types::TrainingResult). These errors are for
//! inputs that name things the catalog does not know.

use equus_types::TypesError;

/// Errors raised when resolving training inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrainingError {
    /// The skill id is not in the catalog.
    #[error("unknown skill: {skill_id}")]
    UnknownSkill {
        /// The id that was looked up.
        skill_id: String,
    },

    /// A session length or other boundary value was rejected.
    #[error("invalid training input: {source}")]
    Types {
        /// The underlying validation error.
        #[from]
        source: TypesError,
    },
}
