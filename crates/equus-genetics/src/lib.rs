//! Genetics for the Equus horse simulation.
//!
//! Pure functions over gene data: no I/O, and every random draw comes from
//! a caller-supplied [`rand::Rng`] so results can be replayed under a seed.
//!
//! # Modules
//!
//! - [`model`] -- Potential, star rating and allele validity
//! - [`breeding`] -- Foundation genes, stat inheritance with mutation,
//!   personality inheritance, pairing rules
//! - [`color`] -- Coat colour generation, inheritance and naming
//! - [`conformation`] -- Conformation generation and half-segregation inheritance
//! - [`phenotype`] -- Effective stats, overall scores, strongest and weakest stat
//! - [`error`] -- [`GeneticsError`]

pub mod breeding;
pub mod color;
pub mod conformation;
pub mod error;
pub mod model;
pub mod phenotype;

pub use breeding::{
    BreedingOptions, DEFAULT_MAX_POTENTIAL, DEFAULT_MIN_POTENTIAL, MIN_BREEDING_AGE,
    breed_stat_genes, generate_foundation_genes, generate_random_personality,
    inherit_personality, validate_breeding,
};
pub use color::{breed_visual_genetics, calculate_color, generate_visual_genetics};
pub use conformation::{breed_conformation_genetics, generate_conformation_genetics};
pub use error::GeneticsError;
pub use model::{is_valid_allele, potential, star_rating};
pub use phenotype::{
    calculate_overall_quality, calculate_overall_training, calculate_phenotype, strongest_stat,
    weakest_stat,
};
