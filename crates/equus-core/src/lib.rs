//! Stable management for the Equus horse simulation.
//!
//! The genetics and training crates compute proposals from a horse
//! record. This crate owns the records: it creates horses, commits
//! training and breeding outcomes, and runs the economy and calendar
//! around them.
//!
//! # Modules
//!
//! - [`config`] -- YAML configuration with environment overrides
//! - [`calendar`] -- Game days, year-end ageing, age formatting
//! - [`factory`] -- Foundation horses and foals
//! - [`stable`] -- [`Stable`]: training, breeding, housing, chores, day advance
//! - [`error`] -- [`StableError`]

pub mod calendar;
pub mod config;
pub mod error;
pub mod factory;
pub mod stable;

pub use calendar::{AgeBreakdown, GameCalendar, format_detailed_age};
pub use config::{
    BreedingConfig, ConfigError, EconomyConfig, FoundationConfig, PlannedSession,
    SimulationConfig, StableConfig,
};
pub use error::StableError;
pub use factory::{create_foal, create_foundation_horse};
pub use stable::{Chore, ChoreOutcome, DayReport, HorseDayUpdate, Stable, commit_training};
