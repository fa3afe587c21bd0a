//! Error types for the equus-genetics crate.
//!
//! Game-rule rejections (an ineligible pairing) are reported in-band through
//! [`BreedingValidation`](equus_types::BreedingValidation). The errors here
//! cover malformed inputs that indicate a caller bug.

use equus_types::TypesError;

/// Errors that can occur while generating or combining genes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeneticsError {
    /// Foundation potential bounds are reversed or above 100.
    #[error("invalid potential range: min {min}, max {max}")]
    InvalidPotentialRange {
        /// Requested lower bound.
        min: u32,
        /// Requested upper bound.
        max: u32,
    },

    /// Mutation chance outside `0..=1` or a negative mutation amount.
    #[error("invalid breeding options: mutation chance {chance}, amount {amount}")]
    InvalidBreedingOptions {
        /// Requested chance.
        chance: f64,
        /// Requested amount.
        amount: f64,
    },

    /// A derived value failed type validation.
    #[error("invalid gene value: {source}")]
    Types {
        /// The underlying validation error.
        #[from]
        source: TypesError,
    },
}
