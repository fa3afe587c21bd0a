//! Error types for stable operations.

use equus_genetics::GeneticsError;
use equus_types::HorseId;

/// Errors returned by [`Stable`](crate::Stable) operations.
///
/// Rejections carry the same reason text the validators produce so a
/// caller can show them to the player unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StableError {
    /// No horse with this id lives in the stable.
    #[error("horse {horse_id} not found")]
    UnknownHorse {
        /// The requested horse.
        horse_id: HorseId,
    },

    /// Every stall is taken.
    #[error("stable is full (max {capacity} horses)")]
    StableFull {
        /// Configured capacity.
        capacity: usize,
    },

    /// Not enough money for the action.
    #[error("insufficient funds: need {needed}, have {available}")]
    InsufficientFunds {
        /// Cost of the action.
        needed: u64,
        /// Money on hand.
        available: u64,
    },

    /// Not enough of today's time budget left.
    #[error("not enough time remaining: need {needed} minutes, have {remaining} minutes left")]
    InsufficientTime {
        /// Minutes the action takes.
        needed: u32,
        /// Minutes left today.
        remaining: u32,
    },

    /// The horse may not train this skill right now.
    #[error("training rejected: {reason}")]
    TrainingRejected {
        /// Validator reason.
        reason: String,
    },

    /// The pairing breaks a breeding rule.
    #[error("breeding rejected: {reason}")]
    BreedingRejected {
        /// Validator reason.
        reason: String,
    },

    /// Gene generation failed.
    #[error("genetics error: {source}")]
    Genetics {
        /// The underlying error.
        #[from]
        source: GeneticsError,
    },
}
