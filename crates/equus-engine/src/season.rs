//! The demonstration season: a foundation pair worked through a fixed daily
//! plan, bred once the stable can afford it, and reported at the end.

use std::collections::BTreeMap;

use equus_core::{Chore, PlannedSession, Stable, StableError};
use equus_genetics::{
    calculate_color, calculate_overall_quality, calculate_overall_training, strongest_stat,
};
use equus_training::{
    MasteryLevel, TrainingError, calculate_skill_progress, get_next_skills,
    get_skill_mastery_level, mood_description, needs_rest_day, validate_skill_training,
};
use equus_types::{Gender, Horse, HorseId, Mood, Personality, SessionDuration, Stat};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::EngineError;

/// Chores tried with leftover time, longest first.
const CHORE_ORDER: [Chore; 3] = [Chore::MuckStalls, Chore::FillHayNets, Chore::WaterHorses];

// ---------------------------------------------------------------------------
// Plan
// ---------------------------------------------------------------------------

/// One resolved entry of the daily plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanStep {
    /// Catalog skill id.
    pub skill: String,
    /// Session length.
    pub duration: SessionDuration,
}

/// Check every planned session against the catalog and the offered
/// session lengths.
pub fn resolve_plan(sessions: &[PlannedSession]) -> Result<Vec<PlanStep>, TrainingError> {
    sessions
        .iter()
        .map(|session| {
            Ok(PlanStep {
                skill: session.skill.clone(),
                duration: session.resolve()?,
            })
        })
        .collect()
}

/// The breeding pair the season is built around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoundationPair {
    /// The stallion.
    pub sire: HorseId,
    /// The mare.
    pub dam: HorseId,
}

// ---------------------------------------------------------------------------
// Running
// ---------------------------------------------------------------------------

/// Running totals for the season.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonLog {
    /// Training sessions run.
    pub sessions: u32,
    /// Sessions that made progress.
    pub successful_sessions: u32,
    /// Sessions that ended in injury.
    pub injuries: u32,
    /// Horse-days spent resting.
    pub rest_days: u32,
    /// Chores done.
    pub chores: u32,
    /// Nights the upkeep went unpaid.
    pub unpaid_days: u32,
    /// Foals born.
    pub foals: Vec<HorseId>,
}

/// Run `days` days of the plan.
///
/// Every horse works through the plan in order, skipping sessions it may
/// not train and stopping for the day when it needs rest or time runs
/// out. Leftover time goes to chores. The pair is bred once, as soon as
/// the fee can be paid.
pub fn run_season(
    stable: &mut Stable,
    pair: FoundationPair,
    plan: &[PlanStep],
    days: u32,
    rng: &mut impl Rng,
) -> Result<SeasonLog, EngineError> {
    let mut log = SeasonLog::default();

    for _ in 0..days {
        let horse_ids: Vec<HorseId> = stable.horses().iter().map(|horse| horse.id).collect();
        for horse_id in horse_ids {
            train_horse(stable, horse_id, plan, &mut log, rng)?;
        }

        do_chores(stable, &mut log)?;

        if log.foals.is_empty() {
            try_breeding(stable, pair, &mut log, rng)?;
        }

        let report = stable.advance_day(rng);
        if !report.upkeep_paid {
            log.unpaid_days = log.unpaid_days.saturating_add(1);
        }
    }

    info!(
        sessions = log.sessions,
        successful = log.successful_sessions,
        rest_days = log.rest_days,
        foals = log.foals.len(),
        "Season complete"
    );
    Ok(log)
}

fn train_horse(
    stable: &mut Stable,
    horse_id: HorseId,
    plan: &[PlanStep],
    log: &mut SeasonLog,
    rng: &mut impl Rng,
) -> Result<(), EngineError> {
    if stable.horse(horse_id).is_some_and(needs_rest_day) {
        debug!(horse_id = %horse_id, "Rest day");
        log.rest_days = log.rest_days.saturating_add(1);
        return Ok(());
    }

    for step in plan {
        let Some(horse) = stable.horse(horse_id) else {
            return Ok(());
        };
        if needs_rest_day(horse) {
            break;
        }
        if !validate_skill_training(horse, &step.skill).can_train {
            continue;
        }
        if stable.time_remaining() < step.duration.minutes() {
            break;
        }

        let result = stable.train(horse_id, &step.skill, step.duration, rng)?;
        log.sessions = log.sessions.saturating_add(1);
        if result.success {
            log.successful_sessions = log.successful_sessions.saturating_add(1);
        }
        if result.injured {
            warn!(horse_id = %horse_id, skill = %step.skill, "Horse injured in training");
            log.injuries = log.injuries.saturating_add(1);
        }
        debug!(horse_id = %horse_id, message = %result.message, "Session result");
    }
    Ok(())
}

fn do_chores(stable: &mut Stable, log: &mut SeasonLog) -> Result<(), EngineError> {
    for chore in CHORE_ORDER {
        while stable.time_remaining() >= chore.minutes() {
            stable.do_chore(chore)?;
            log.chores = log.chores.saturating_add(1);
        }
    }
    Ok(())
}

fn try_breeding(
    stable: &mut Stable,
    pair: FoundationPair,
    log: &mut SeasonLog,
    rng: &mut impl Rng,
) -> Result<(), EngineError> {
    if stable.money() < stable.config().economy.breeding_cost {
        return Ok(());
    }
    let foal_name = format!("Foal {}", log.foals.len().saturating_add(1));
    match stable.breed(pair.sire, pair.dam, &foal_name, rng) {
        Ok(foal_id) => {
            info!(foal_id = %foal_id, day = stable.current_day(), "Foal added to the stable");
            log.foals.push(foal_id);
            Ok(())
        }
        Err(
            err @ (StableError::BreedingRejected { .. }
            | StableError::StableFull { .. }
            | StableError::InsufficientFunds { .. }),
        ) => {
            debug!(error = %err, "Breeding skipped");
            Ok(())
        }
        Err(other) => Err(other.into()),
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// One trained skill in the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillReport {
    /// Level in `0..=100`.
    pub level: f64,
    /// Mastery band.
    pub mastery: MasteryLevel,
}

/// End-of-season view of one horse.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HorseReport {
    /// Horse id.
    pub id: HorseId,
    /// Name.
    pub name: String,
    /// Sex.
    pub gender: Gender,
    /// Age in years.
    pub age: u32,
    /// Age such as `3 years, 1 month`.
    pub detailed_age: String,
    /// Generation; foundation horses are 0.
    pub generation: u32,
    /// Temperament.
    pub personality: Personality,
    /// Mood at the end of the season.
    pub mood: Mood,
    /// What the mood means for training.
    pub mood_description: &'static str,
    /// Fatigue at the end of the season.
    pub fatigue: f64,
    /// Coat colour label.
    pub color: String,
    /// Colour genotype notation.
    pub genetic_code: String,
    /// Mean genetic potential.
    pub overall_quality: f64,
    /// Mean training level.
    pub overall_training: f64,
    /// Best stat by potential.
    pub strongest_stat: Stat,
    /// Share of the catalog completed, as a percentage.
    pub skill_progress: f64,
    /// Every skill with any training.
    pub skills: BTreeMap<String, SkillReport>,
    /// Skills one or two prerequisites away.
    pub next_skills: Vec<&'static str>,
}

impl HorseReport {
    fn new(stable: &Stable, horse: &Horse) -> Self {
        let color = calculate_color(&horse.visual_genetics);
        let (strongest, _) = strongest_stat(&horse.genes);
        Self {
            id: horse.id,
            name: horse.name.clone(),
            gender: horse.gender,
            age: horse.age,
            detailed_age: stable.detailed_age(horse.id).unwrap_or_default(),
            generation: horse.lineage.generation,
            personality: horse.mental_state.personality,
            mood: horse.mental_state.mood,
            mood_description: mood_description(horse.mental_state.mood),
            fatigue: horse.mental_state.fatigue,
            color: color.color_name,
            genetic_code: color.genetic_code,
            overall_quality: calculate_overall_quality(&horse.genes),
            overall_training: calculate_overall_training(&horse.training),
            strongest_stat: strongest,
            skill_progress: calculate_skill_progress(horse),
            skills: horse
                .skills
                .iter()
                .filter(|(_, level)| **level > 0.0)
                .map(|(id, level)| {
                    let report = SkillReport {
                        level: *level,
                        mastery: get_skill_mastery_level(*level),
                    };
                    (id.clone(), report)
                })
                .collect(),
            next_skills: get_next_skills(horse).iter().map(|skill| skill.id).collect(),
        }
    }
}

/// Summary printed at the end of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonReport {
    /// Days simulated.
    pub days_run: u32,
    /// Day the stable ended on.
    pub final_day: u32,
    /// Money on hand.
    pub money: u64,
    /// Season totals.
    pub log: SeasonLog,
    /// Every horse in the stable.
    pub horses: Vec<HorseReport>,
}

impl SeasonReport {
    /// Build the report for a finished season.
    pub fn new(stable: &Stable, days_run: u32, log: SeasonLog) -> Self {
        Self {
            days_run,
            final_day: stable.current_day(),
            money: stable.money(),
            log,
            horses: stable
                .horses()
                .iter()
                .map(|horse| HorseReport::new(stable, horse))
                .collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use equus_core::StableConfig;
    use equus_types::Trainer;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    fn setup(config: StableConfig, rng: &mut SmallRng) -> (Stable, FoundationPair, Vec<PlanStep>) {
        let plan = resolve_plan(&config.simulation.plan).unwrap();
        let mut stable = Stable::new(config, Trainer::new("Sam", 50.0));
        let sire = stable
            .add_foundation_horse("Thunder", Gender::Stallion, rng)
            .unwrap();
        let dam = stable.add_foundation_horse("Willow", Gender::Mare, rng).unwrap();
        (stable, FoundationPair { sire, dam }, plan)
    }

    #[test]
    fn default_plan_resolves() {
        let plan = resolve_plan(&StableConfig::default().simulation.plan).unwrap();
        assert_eq!(plan.len(), 7);
        assert_eq!(plan.first().unwrap().skill, "grooming");
    }

    #[test]
    fn unknown_plan_skill_is_an_error() {
        let sessions = [PlannedSession {
            skill: "levitation".to_owned(),
            minutes: 15,
        }];
        assert_eq!(
            resolve_plan(&sessions),
            Err(TrainingError::UnknownSkill {
                skill_id: "levitation".to_owned()
            })
        );
    }

    #[test]
    fn short_season() {
        let mut rng = SmallRng::seed_from_u64(42);
        let (mut stable, pair, plan) = setup(StableConfig::default(), &mut rng);

        let log = run_season(&mut stable, pair, &plan, 5, &mut rng).unwrap();
        assert!(log.sessions > 0);
        assert!(log.chores > 0);
        assert_eq!(log.foals.len(), 1);
        assert_eq!(log.unpaid_days, 0);
        assert_eq!(stable.current_day(), 6);

        let report = SeasonReport::new(&stable, 5, log);
        assert_eq!(report.horses.len(), 3);
        let foal = report.horses.iter().find(|horse| horse.generation == 1).unwrap();
        assert_eq!(foal.age, 0);
        assert_eq!(foal.detailed_age, "5 days");
        assert!(foal.skills.is_empty());
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"finalDay\":6"));
    }

    #[test]
    fn no_breeding_without_the_fee() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut config = StableConfig::default();
        config.economy.starting_money = 100;
        let (mut stable, pair, plan) = setup(config, &mut rng);

        let log = run_season(&mut stable, pair, &plan, 3, &mut rng).unwrap();
        assert!(log.foals.is_empty());
        assert_eq!(stable.horses().len(), 2);
    }

    #[test]
    fn seeded_runs_agree() {
        let run = |seed| {
            let mut rng = SmallRng::seed_from_u64(seed);
            let (mut stable, pair, plan) = setup(StableConfig::default(), &mut rng);
            let log = run_season(&mut stable, pair, &plan, 10, &mut rng).unwrap();
            let levels: Vec<f64> = stable
                .horses()
                .iter()
                .flat_map(|horse| horse.skills.values().copied())
                .collect();
            (log.sessions, log.successful_sessions, stable.money(), levels)
        };
        assert_eq!(run(3), run(3));
    }
}
