//! Engine binary for the Equus simulation.
//!
//! Runs a seeded demonstration season against the simulation crates and
//! prints the outcome as JSON.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `equus-config.yaml`
//! 3. Resolve the daily training plan
//! 4. Open a stable and buy a foundation stallion and mare
//! 5. Run the season
//! 6. Print the season report

mod error;
mod season;

use std::path::Path;

use equus_core::{Stable, StableConfig};
use equus_types::{Gender, Trainer};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::season::{FoundationPair, SeasonReport};

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the season cannot run.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("equus-engine starting");

    // 2. Load configuration.
    let config = load_config()?;
    info!(
        seed = config.simulation.seed,
        days = config.simulation.days,
        max_stable_size = config.economy.max_stable_size,
        starting_money = config.economy.starting_money,
        "Configuration loaded"
    );

    // 3. Resolve the plan.
    let plan = season::resolve_plan(&config.simulation.plan).map_err(EngineError::from)?;
    info!(steps = plan.len(), "Training plan resolved");

    // 4. Open the stable.
    let mut rng = SmallRng::seed_from_u64(config.simulation.seed);
    let days = config.simulation.days;
    let trainer = Trainer::new("Head Trainer", config.economy.starting_trainer_skill);
    let mut stable = Stable::new(config, trainer);
    let sire = stable
        .add_foundation_horse("Thunder", Gender::Stallion, &mut rng)
        .map_err(EngineError::from)?;
    let dam = stable
        .add_foundation_horse("Willow", Gender::Mare, &mut rng)
        .map_err(EngineError::from)?;
    info!(sire = %sire, dam = %dam, "Foundation pair purchased");

    // 5. Run the season.
    let log = season::run_season(&mut stable, FoundationPair { sire, dam }, &plan, days, &mut rng)?;

    // 6. Report.
    let report = SeasonReport::new(&stable, days, log);
    info!(
        final_day = report.final_day,
        money = report.money,
        horses = report.horses.len(),
        "Season finished"
    );
    let json = serde_json::to_string_pretty(&report).map_err(EngineError::from)?;
    println!("{json}");

    Ok(())
}

/// Load configuration from `equus-config.yaml` in the working directory.
///
/// Falls back to defaults (with environment overrides) when the file does
/// not exist.
fn load_config() -> Result<StableConfig, EngineError> {
    let config_path = Path::new("equus-config.yaml");
    if config_path.exists() {
        let config = StableConfig::from_file(config_path)?;
        Ok(config)
    } else {
        info!("Config file not found, using defaults");
        let mut config = StableConfig::default();
        config.economy.apply_env_overrides();
        Ok(config)
    }
}
