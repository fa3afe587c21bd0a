//! The player's stable: horses, money, and the daily time budget.
//!
//! [`Stable`] owns every horse record and applies the proposals returned
//! by the training and breeding engines. It enforces the economy around
//! them: capacity, breeding fees, upkeep, and minutes left in the day.
//!
//! # Day cycle
//!
//! 1. The player trains horses and does chores until the time budget runs
//!    out.
//! 2. [`Stable::advance_day`] rolls each horse's mood from how yesterday
//!    went, rests it, resets the daily needs and ages it at year end.
//! 3. The day counter moves on, the budget is refilled and upkeep is
//!    charged.

use std::collections::BTreeMap;

use equus_genetics::validate_breeding;
use equus_training::{
    DAILY_FATIGUE_RECOVERY, apply_satisfaction_gain, apply_training, calculate_daily_mood,
    calculate_satisfaction_requirements, reduce_fatigue, reset_daily_satisfaction,
    validate_skill_training,
};
use equus_types::{
    Gender, Horse, HorseId, Housing, MAX_FATIGUE, Mood, SessionDuration, Trainer, TrainingResult,
};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::calendar::{DAYS_PER_YEAR, GameCalendar, format_detailed_age};
use crate::config::StableConfig;
use crate::error::StableError;
use crate::factory::{create_foal, create_foundation_horse};

/// Highest level a skill can reach.
const MAX_SKILL_LEVEL: f64 = 100.0;

/// Highest training level a stat can reach.
const MAX_STAT_TRAINING: f64 = 1.0;

// ---------------------------------------------------------------------------
// Chores
// ---------------------------------------------------------------------------

/// Paid barn work that uses up part of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Chore {
    /// An hour of mucking out.
    MuckStalls,
    /// A quick round of the water buckets.
    WaterHorses,
    /// Half an hour of hay nets.
    FillHayNets,
}

impl Chore {
    /// Every chore on offer.
    pub const ALL: [Self; 3] = [Self::MuckStalls, Self::WaterHorses, Self::FillHayNets];

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::MuckStalls => "Muck Stalls",
            Self::WaterHorses => "Water Horses",
            Self::FillHayNets => "Fill Hay Nets",
        }
    }

    /// Minutes the chore takes.
    pub const fn minutes(self) -> u32 {
        match self {
            Self::MuckStalls => 60,
            Self::WaterHorses => 15,
            Self::FillHayNets => 30,
        }
    }

    /// Money the chore pays.
    pub const fn payment(self) -> u64 {
        match self {
            Self::MuckStalls => 32,
            Self::WaterHorses => 8,
            Self::FillHayNets => 16,
        }
    }
}

/// What a finished chore earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoreOutcome {
    /// The chore done.
    pub chore: Chore,
    /// Minutes spent.
    pub time_spent: u32,
    /// Money earned.
    pub money_earned: u64,
    /// Minutes left today.
    pub time_remaining: u32,
    /// Money on hand afterwards.
    pub new_balance: u64,
}

// ---------------------------------------------------------------------------
// Day report
// ---------------------------------------------------------------------------

/// How one horse came out of the night.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HorseDayUpdate {
    /// The horse.
    pub horse_id: HorseId,
    /// Its name.
    pub horse_name: String,
    /// Mood for the new day.
    pub new_mood: Mood,
    /// Fatigue after the night's rest.
    pub new_fatigue: f64,
    /// Whether it turned a year older.
    pub aged: bool,
}

/// Summary of [`Stable::advance_day`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayReport {
    /// The day that has just started.
    pub new_day: u32,
    /// Upkeep due for the night.
    pub daily_cost: u64,
    /// Whether the upkeep could be paid.
    pub upkeep_paid: bool,
    /// Per-horse changes, in stable order.
    pub horse_updates: Vec<HorseDayUpdate>,
}

// ---------------------------------------------------------------------------
// Stable
// ---------------------------------------------------------------------------

/// A player's stable.
#[derive(Debug, Clone)]
pub struct Stable {
    config: StableConfig,
    trainer: Trainer,
    /// Horses in arrival order.
    horses: Vec<Horse>,
    /// Days since each horse last aged a year.
    days_since_birthday: BTreeMap<HorseId, u32>,
    money: u64,
    calendar: GameCalendar,
    time_remaining: u32,
}

impl Stable {
    /// An empty stable on day 1 with the configured starting money and a
    /// full time budget.
    pub fn new(config: StableConfig, trainer: Trainer) -> Self {
        let money = config.economy.starting_money;
        let time_remaining = config.economy.daily_time_budget_minutes;
        Self {
            config,
            trainer,
            horses: Vec::new(),
            days_since_birthday: BTreeMap::new(),
            money,
            calendar: GameCalendar::new(),
            time_remaining,
        }
    }

    /// Configuration the stable runs under.
    pub const fn config(&self) -> &StableConfig {
        &self.config
    }

    /// The player's trainer.
    pub const fn trainer(&self) -> &Trainer {
        &self.trainer
    }

    /// Money on hand.
    pub const fn money(&self) -> u64 {
        self.money
    }

    /// Current game day.
    pub const fn current_day(&self) -> u32 {
        self.calendar.day()
    }

    /// Minutes left today.
    pub const fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    /// Every horse, in arrival order.
    pub fn horses(&self) -> &[Horse] {
        &self.horses
    }

    /// Look up a horse.
    pub fn horse(&self, horse_id: HorseId) -> Option<&Horse> {
        self.horses.iter().find(|horse| horse.id == horse_id)
    }

    fn horse_mut(&mut self, horse_id: HorseId) -> Result<&mut Horse, StableError> {
        self.horses
            .iter_mut()
            .find(|horse| horse.id == horse_id)
            .ok_or(StableError::UnknownHorse { horse_id })
    }

    fn ensure_capacity(&self) -> Result<(), StableError> {
        let capacity = self.config.economy.max_stable_size;
        if self.horses.len() >= capacity {
            return Err(StableError::StableFull { capacity });
        }
        Ok(())
    }

    fn spend_time(&mut self, minutes: u32) -> Result<(), StableError> {
        let remaining = self.time_remaining;
        self.time_remaining = remaining
            .checked_sub(minutes)
            .ok_or(StableError::InsufficientTime {
                needed: minutes,
                remaining,
            })?;
        Ok(())
    }

    fn ensure_time(&self, minutes: u32) -> Result<(), StableError> {
        if self.time_remaining < minutes {
            return Err(StableError::InsufficientTime {
                needed: minutes,
                remaining: self.time_remaining,
            });
        }
        Ok(())
    }

    /// Buy a foundation horse.
    pub fn add_foundation_horse(
        &mut self,
        name: &str,
        gender: Gender,
        rng: &mut impl Rng,
    ) -> Result<HorseId, StableError> {
        self.ensure_capacity()?;
        let horse = create_foundation_horse(name, gender, &self.config.foundation, rng)?;
        let horse_id = horse.id;
        self.days_since_birthday.insert(horse_id, 0);
        self.horses.push(horse);
        Ok(horse_id)
    }

    /// Rename a horse.
    pub fn rename(&mut self, horse_id: HorseId, name: &str) -> Result<(), StableError> {
        self.horse_mut(horse_id)?.name = name.to_owned();
        Ok(())
    }

    /// Move a horse between pasture and stall. Requirements are recomputed
    /// for the new housing; progress already made today is kept.
    pub fn set_housing(&mut self, horse_id: HorseId, housing: Housing) -> Result<(), StableError> {
        let horse = self.horse_mut(horse_id)?;
        horse.housing = housing;
        horse.satisfaction = calculate_satisfaction_requirements(horse);
        debug!(horse_id = %horse_id, housing = ?housing, "Housing changed");
        Ok(())
    }

    /// Run one training session and commit its outcome.
    ///
    /// The session must fit in the remaining time and pass the training
    /// validator. A session that goes badly still costs its time and still
    /// tires the horse.
    pub fn train(
        &mut self,
        horse_id: HorseId,
        skill_id: &str,
        duration: SessionDuration,
        rng: &mut impl Rng,
    ) -> Result<TrainingResult, StableError> {
        let minutes = duration.minutes();
        self.ensure_time(minutes)?;

        let trainer = &self.trainer;
        let horse = self
            .horses
            .iter_mut()
            .find(|horse| horse.id == horse_id)
            .ok_or(StableError::UnknownHorse { horse_id })?;

        let validation = validate_skill_training(horse, skill_id);
        if !validation.can_train {
            return Err(StableError::TrainingRejected {
                reason: validation.reason.unwrap_or_default(),
            });
        }

        let result = apply_training(horse, skill_id, duration, trainer, rng);
        commit_training(horse, skill_id, &result);
        info!(
            horse_id = %horse_id,
            skill = skill_id,
            minutes,
            skill_gained = result.skill_gained,
            success = result.success,
            "Training session"
        );

        self.spend_time(minutes)?;
        Ok(result)
    }

    /// Breed two horses in the stable and keep the foal.
    ///
    /// The pairing is validated before anything else; a rejected pairing
    /// costs nothing and rolls no genes. Capacity and the breeding fee are
    /// checked next.
    pub fn breed(
        &mut self,
        sire_id: HorseId,
        dam_id: HorseId,
        foal_name: &str,
        rng: &mut impl Rng,
    ) -> Result<HorseId, StableError> {
        let sire = self
            .horse(sire_id)
            .ok_or(StableError::UnknownHorse { horse_id: sire_id })?;
        let dam = self
            .horse(dam_id)
            .ok_or(StableError::UnknownHorse { horse_id: dam_id })?;

        let validation = validate_breeding(sire.age, dam.age, sire.gender, dam.gender);
        if !validation.can_breed {
            return Err(StableError::BreedingRejected {
                reason: validation.reason.unwrap_or_default(),
            });
        }

        self.ensure_capacity()?;
        let cost = self.config.economy.breeding_cost;
        if self.money < cost {
            return Err(StableError::InsufficientFunds {
                needed: cost,
                available: self.money,
            });
        }

        let options = self.config.breeding.options()?;
        let foal = create_foal(sire, dam, foal_name, options, rng)?;
        let foal_id = foal.id;

        self.money = self.money.saturating_sub(cost);
        self.days_since_birthday.insert(foal_id, 0);
        self.horses.push(foal);
        Ok(foal_id)
    }

    /// Do a chore for pay.
    pub fn do_chore(&mut self, chore: Chore) -> Result<ChoreOutcome, StableError> {
        let minutes = chore.minutes();
        self.spend_time(minutes)?;
        self.money = self.money.saturating_add(chore.payment());
        debug!(chore = chore.name(), minutes, "Chore done");
        Ok(ChoreOutcome {
            chore,
            time_spent: minutes,
            money_earned: chore.payment(),
            time_remaining: self.time_remaining,
            new_balance: self.money,
        })
    }

    /// End the day and start the next one.
    ///
    /// Each horse's mood is rolled from the state it ended the day in,
    /// before its needs are reset. Upkeep is charged only when the stable
    /// can afford all of it.
    pub fn advance_day(&mut self, rng: &mut impl Rng) -> DayReport {
        let year_end = self.calendar.is_year_end();
        let mut horse_updates = Vec::with_capacity(self.horses.len());

        for horse in &mut self.horses {
            let new_mood = calculate_daily_mood(horse, rng);
            horse.mental_state.mood = new_mood;
            horse.mental_state.fatigue =
                reduce_fatigue(horse.mental_state.fatigue, DAILY_FATIGUE_RECOVERY);
            horse.satisfaction = reset_daily_satisfaction(&horse.satisfaction);
            horse.satisfaction = calculate_satisfaction_requirements(horse);

            if let Some(days) = self.days_since_birthday.get_mut(&horse.id) {
                *days = if year_end { 0 } else { days.saturating_add(1) };
            }
            if year_end {
                horse.age = horse.age.saturating_add(1);
            }

            horse_updates.push(HorseDayUpdate {
                horse_id: horse.id,
                horse_name: horse.name.clone(),
                new_mood,
                new_fatigue: horse.mental_state.fatigue,
                aged: year_end,
            });
        }

        self.calendar.advance();
        self.time_remaining = self.config.economy.daily_time_budget_minutes;

        let horse_count = u64::try_from(self.horses.len()).unwrap_or(u64::MAX);
        let daily_cost = self
            .config
            .economy
            .daily_upkeep_per_horse
            .saturating_mul(horse_count);
        let upkeep_paid = self.money >= daily_cost;
        if upkeep_paid {
            self.money = self.money.saturating_sub(daily_cost);
        } else {
            warn!(daily_cost, money = self.money, "Cannot afford stable upkeep");
        }

        info!(
            day = self.calendar.day(),
            horses = horse_updates.len(),
            daily_cost,
            money = self.money,
            "Day advanced"
        );

        DayReport {
            new_day: self.calendar.day(),
            daily_cost,
            upkeep_paid,
            horse_updates,
        }
    }

    /// Age in days of a horse: whole years from [`Horse::age`] plus the
    /// days since it last aged.
    pub fn age_in_days(&self, horse_id: HorseId) -> Option<u32> {
        let horse = self.horse(horse_id)?;
        let days = self.days_since_birthday.get(&horse_id).copied().unwrap_or(0);
        Some(horse.age.saturating_mul(DAYS_PER_YEAR).saturating_add(days))
    }

    /// Readable age such as `3 years, 1 month` for a horse.
    pub fn detailed_age(&self, horse_id: HorseId) -> Option<String> {
        self.age_in_days(horse_id).map(format_detailed_age)
    }
}

/// Write a training result into the horse record.
///
/// Skill level moves by the session's gain within `0..=100`, stats gain up
/// to fully trained, and fatigue stays on its scale. Entering `Confused`
/// remembers the prior mood and the skill that caused it.
pub fn commit_training(horse: &mut Horse, skill_id: &str, result: &TrainingResult) {
    let level = (horse.skill_level(skill_id) + result.skill_gained).clamp(0.0, MAX_SKILL_LEVEL);
    horse.skills.insert(skill_id.to_owned(), level);

    for (stat, gain) in &result.stats_gained {
        let trained = horse.training.get_mut(*stat);
        *trained = (*trained + gain).min(MAX_STAT_TRAINING);
    }

    let fatigue = &mut horse.mental_state.fatigue;
    *fatigue = (*fatigue + result.fatigue_gained).clamp(0.0, MAX_FATIGUE);

    if let Some(mood) = result.new_mood {
        if mood == Mood::Confused {
            horse.mental_state.previous_mood = Some(horse.mental_state.mood);
            horse.mental_state.previous_skill = Some(skill_id.to_owned());
        }
        horse.mental_state.mood = mood;
    }

    horse.satisfaction = apply_satisfaction_gain(&horse.satisfaction, result.satisfaction_gained);
}
