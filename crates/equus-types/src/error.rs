//! Errors raised when building validated value types.

use crate::genes::ConformationGene;

/// A value failed boundary validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypesError {
    /// Allele outside `0..=100`, or NaN.
    #[error("allele value {value} is outside 0..=100")]
    AlleleOutOfRange {
        /// The rejected value.
        value: f64,
    },

    /// Session length not in the offered set.
    #[error("unsupported session duration: {minutes} minutes (expected 5, 15, 30 or 60)")]
    UnsupportedDuration {
        /// The rejected length.
        minutes: u32,
    },

    /// Personality ordinal above 10.
    #[error("personality ordinal {ordinal} is outside 0..=10")]
    PersonalityOrdinal {
        /// The rejected ordinal.
        ordinal: u8,
    },

    /// A conformation gene has the wrong number of alleles.
    #[error("conformation gene {gene:?} has {actual} alleles, expected {expected}")]
    ConformationLength {
        /// The gene.
        gene: ConformationGene,
        /// Alleles the gene must carry.
        expected: usize,
        /// Alleles found.
        actual: usize,
    },

    /// A conformation allele is not in the gene's alphabet.
    #[error("conformation gene {gene:?} cannot carry allele '{allele}'")]
    ConformationAllele {
        /// The gene.
        gene: ConformationGene,
        /// The rejected letter.
        allele: char,
    },
}
