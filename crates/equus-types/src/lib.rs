//! Shared type definitions for the Equus horse simulation.
//!
//! This crate is the single source of truth for the data model used across
//! the workspace: genes, horses, trainers and the result records the engine
//! hands back to its callers. Types that the game UI reads flow to
//! `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for horses and trainers
//! - [`enums`] -- Stats, sexes, housing, personalities, moods, skill categories
//! - [`genes`] -- Alleles, gene pairs, per-stat tables, colour and conformation genes
//! - [`horse`] -- The [`Horse`] aggregate, mental state, satisfaction, bonds
//! - [`results`] -- Validation and training result records
//! - [`error`] -- [`TypesError`] for rejected boundary values

pub mod enums;
pub mod error;
pub mod genes;
pub mod horse;
pub mod ids;
pub mod results;

// Re-export all public types at crate root for convenience.
pub use enums::{
    Gender, Housing, Mood, NeedChannel, NeedModifiers, Personality, SessionDuration,
    SkillCategory, Stat,
};
pub use error::TypesError;
pub use genes::{
    ALLELE_MAX, ALLELE_MIN, Agouti, Allele, BaseColor, ConformationGene, ConformationGenetics,
    Extension, GenePair, Gray, StatGeneMap, StatTable, TrainingLevels, VisualGenetics,
};
pub use horse::{Bond, Horse, Lineage, MAX_FATIGUE, MentalState, NeedLevel, Satisfaction, Trainer};
pub use ids::{HorseId, TrainerId};
pub use results::{
    BreedingValidation, ColorResult, SatisfactionGain, StatPhenotype, TrainingResult,
    TrainingValidation,
};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // ts-rs writes the files to `bindings/` relative to the crate root.
        use ts_rs::TS;

        // IDs
        let _ = crate::ids::HorseId::export_all();
        let _ = crate::ids::TrainerId::export_all();

        // Enums
        let _ = crate::enums::Stat::export_all();
        let _ = crate::enums::Gender::export_all();
        let _ = crate::enums::Housing::export_all();
        let _ = crate::enums::Personality::export_all();
        let _ = crate::enums::Mood::export_all();
        let _ = crate::enums::SkillCategory::export_all();
        let _ = crate::enums::NeedChannel::export_all();

        // Genes
        let _ = crate::genes::Allele::export_all();
        let _ = crate::genes::GenePair::export_all();
        let _ = crate::genes::Extension::export_all();
        let _ = crate::genes::Agouti::export_all();
        let _ = crate::genes::Gray::export_all();
        let _ = crate::genes::VisualGenetics::export_all();
        let _ = crate::genes::BaseColor::export_all();
        let _ = crate::genes::ConformationGene::export_all();

        // Horse
        let _ = crate::horse::MentalState::export_all();
        let _ = crate::horse::NeedLevel::export_all();
        let _ = crate::horse::Satisfaction::export_all();
        let _ = crate::horse::Bond::export_all();
        let _ = crate::horse::Lineage::export_all();
        let _ = crate::horse::Trainer::export_all();

        // Results
        let _ = crate::results::TrainingValidation::export_all();
        let _ = crate::results::BreedingValidation::export_all();
        let _ = crate::results::SatisfactionGain::export_all();
        let _ = crate::results::TrainingResult::export_all();
        let _ = crate::results::StatPhenotype::export_all();
        let _ = crate::results::ColorResult::export_all();
    }
}
