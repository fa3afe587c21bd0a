//! Configuration loading and typed config structures for an Equus stable.
//!
//! The configuration lives in `equus-config.yaml`. Every field has a
//! default, so an empty file (or no file at all) yields a playable stable.

use std::path::Path;

use equus_genetics::{BreedingOptions, GeneticsError};
use equus_training::TrainingError;
use equus_types::SessionDuration;
use serde::Deserialize;
use tracing::warn;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// Breeding or foundation parameters are out of range.
    #[error("invalid genetics settings: {source}")]
    Genetics {
        /// The underlying validation error.
        #[from]
        source: GeneticsError,
    },

    /// The training plan names an unknown skill or session length.
    #[error("invalid training plan: {source}")]
    Training {
        /// The underlying validation error.
        #[from]
        source: TrainingError,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level stable configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StableConfig {
    /// Money, capacity and time budget.
    #[serde(default)]
    pub economy: EconomyConfig,

    /// Mutation settings for foals.
    #[serde(default)]
    pub breeding: BreedingConfig,

    /// Purchased foundation horses.
    #[serde(default)]
    pub foundation: FoundationConfig,

    /// The demonstration season run by the engine binary.
    #[serde(default)]
    pub simulation: SimulationConfig,
}

impl StableConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override economy values:
    /// - `MAX_STABLE_SIZE` overrides `economy.max_stable_size`
    /// - `STARTING_MONEY` overrides `economy.starting_money`
    /// - `DAILY_STABLE_COST_PER_HORSE` overrides `economy.daily_upkeep_per_horse`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or a
    /// validation error if a value is out of range.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or a
    /// validation error if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.economy.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Check every value the engine cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Genetics`] for bad mutation or potential
    /// settings and [`ConfigError::Training`] for a plan entry naming an
    /// unknown skill or an unsupported session length.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.breeding.options()?;
        self.foundation.validate()?;
        for session in &self.simulation.plan {
            session.resolve()?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Economy
// ---------------------------------------------------------------------------

/// Money, capacity and the daily time budget.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EconomyConfig {
    /// Most horses the stable can hold.
    #[serde(default = "default_max_stable_size")]
    pub max_stable_size: usize,

    /// Money the player starts with.
    #[serde(default = "default_starting_money")]
    pub starting_money: u64,

    /// Upkeep charged per horse at the end of each day.
    #[serde(default = "default_daily_upkeep_per_horse")]
    pub daily_upkeep_per_horse: u64,

    /// Cost of one breeding.
    #[serde(default = "default_breeding_cost")]
    pub breeding_cost: u64,

    /// Minutes of work available each day.
    #[serde(default = "default_daily_time_budget_minutes")]
    pub daily_time_budget_minutes: u32,

    /// Skill of the stable's trainer, `0..=100`.
    #[serde(default = "default_starting_trainer_skill")]
    pub starting_trainer_skill: f64,
}

impl EconomyConfig {
    /// Override economy values with environment variables when set.
    ///
    /// Values that do not parse are ignored with a warning.
    pub fn apply_env_overrides(&mut self) {
        if let Some(val) = env_number("MAX_STABLE_SIZE") {
            self.max_stable_size = val;
        }
        if let Some(val) = env_number("STARTING_MONEY") {
            self.starting_money = val;
        }
        if let Some(val) = env_number("DAILY_STABLE_COST_PER_HORSE") {
            self.daily_upkeep_per_horse = val;
        }
    }
}

fn env_number<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(val) => Some(val),
        Err(_) => {
            warn!(variable = name, value = %raw, "Ignoring non-numeric override");
            None
        }
    }
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            max_stable_size: default_max_stable_size(),
            starting_money: default_starting_money(),
            daily_upkeep_per_horse: default_daily_upkeep_per_horse(),
            breeding_cost: default_breeding_cost(),
            daily_time_budget_minutes: default_daily_time_budget_minutes(),
            starting_trainer_skill: default_starting_trainer_skill(),
        }
    }
}

// ---------------------------------------------------------------------------
// Breeding and foundation stock
// ---------------------------------------------------------------------------

/// Mutation settings applied when breeding.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BreedingConfig {
    /// Chance, per allele, of a mutation.
    #[serde(default = "default_mutation_chance")]
    pub mutation_chance: f64,

    /// Largest shift a mutation can apply to an allele.
    #[serde(default = "default_mutation_amount")]
    pub mutation_amount: f64,
}

impl BreedingConfig {
    /// Validated breeding options.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticsError::InvalidBreedingOptions`] when the chance is
    /// outside `0..=1` or the amount is negative.
    pub fn options(&self) -> Result<BreedingOptions, GeneticsError> {
        BreedingOptions::new(self.mutation_chance, self.mutation_amount)
    }
}

impl Default for BreedingConfig {
    fn default() -> Self {
        Self {
            mutation_chance: default_mutation_chance(),
            mutation_amount: default_mutation_amount(),
        }
    }
}

/// Genes and age of purchased foundation horses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FoundationConfig {
    /// Lowest allele value rolled.
    #[serde(default = "default_min_potential")]
    pub min_potential: u32,

    /// Highest allele value rolled.
    #[serde(default = "default_max_potential")]
    pub max_potential: u32,

    /// Age in years of a newly bought horse.
    #[serde(default = "default_starting_age")]
    pub starting_age: u32,
}

impl FoundationConfig {
    /// Check the potential range.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticsError::InvalidPotentialRange`] when the bounds are
    /// reversed or the maximum is above 100.
    pub const fn validate(&self) -> Result<(), GeneticsError> {
        if self.min_potential > self.max_potential || self.max_potential > 100 {
            return Err(GeneticsError::InvalidPotentialRange {
                min: self.min_potential,
                max: self.max_potential,
            });
        }
        Ok(())
    }
}

impl Default for FoundationConfig {
    fn default() -> Self {
        Self {
            min_potential: default_min_potential(),
            max_potential: default_max_potential(),
            starting_age: default_starting_age(),
        }
    }
}

// ---------------------------------------------------------------------------
// Demonstration season
// ---------------------------------------------------------------------------

/// Settings for the seeded demonstration run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimulationConfig {
    /// Random seed for reproducibility.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Number of days to simulate.
    #[serde(default = "default_days")]
    pub days: u32,

    /// Sessions attempted for each horse every day, in order.
    #[serde(default = "default_plan")]
    pub plan: Vec<PlannedSession>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            days: default_days(),
            plan: default_plan(),
        }
    }
}

/// One entry of the daily training plan.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlannedSession {
    /// Catalog skill id.
    pub skill: String,

    /// Session length in minutes: 5, 15, 30 or 60.
    pub minutes: u32,
}

impl PlannedSession {
    fn new(skill: &str, minutes: u32) -> Self {
        Self {
            skill: skill.to_owned(),
            minutes,
        }
    }

    /// The session length, checked against the catalog and the supported
    /// durations.
    ///
    /// # Errors
    ///
    /// Returns [`TrainingError::UnknownSkill`] or [`TrainingError::Types`].
    pub fn resolve(&self) -> Result<SessionDuration, TrainingError> {
        equus_training::require_skill(&self.skill)?;
        Ok(SessionDuration::try_from(self.minutes)?)
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

const fn default_max_stable_size() -> usize {
    10
}

const fn default_starting_money() -> u64 {
    10_000
}

const fn default_daily_upkeep_per_horse() -> u64 {
    10
}

const fn default_breeding_cost() -> u64 {
    5_000
}

const fn default_daily_time_budget_minutes() -> u32 {
    480
}

const fn default_starting_trainer_skill() -> f64 {
    50.0
}

const fn default_mutation_chance() -> f64 {
    0.05
}

const fn default_mutation_amount() -> f64 {
    5.0
}

const fn default_min_potential() -> u32 {
    50
}

const fn default_max_potential() -> u32 {
    80
}

const fn default_starting_age() -> u32 {
    3
}

const fn default_seed() -> u64 {
    42
}

const fn default_days() -> u32 {
    30
}

fn default_plan() -> Vec<PlannedSession> {
    vec![
        PlannedSession::new("grooming", 15),
        PlannedSession::new("haltering", 30),
        PlannedSession::new("leading", 30),
        PlannedSession::new("standing", 30),
        PlannedSession::new("tying", 15),
        PlannedSession::new("lunging_free", 15),
        PlannedSession::new("teach_voice_cues", 15),
    ]
}
