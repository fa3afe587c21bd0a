//! The training formula.
//!
//! One session turns a horse, a skill, a duration and a trainer into a
//! [`TrainingResult`]. The core is the session value:
//!
//! ```text
//! CTV    = (BTV - PTM - SDM) * TSM
//! factor = max(0, Tr + PV) * MM + BM
//! raw    = FM * CTV * factor / 100 * duration multiplier
//! SV     = clamp(raw * (1 - level / 150), -2.5, duration cap)
//! ```
//!
//! The result is a proposal: nothing is written back to the horse. The
//! caller commits skill, stats, fatigue, mood and satisfaction.

use std::collections::BTreeMap;

use equus_types::{
    Horse, MAX_FATIGUE, MentalState, Mood, Personality, SessionDuration, Stat, Trainer,
    TrainingResult,
};
use rand::Rng;
use tracing::debug;

use crate::catalog::{self, Prerequisite, SkillDefinition};
use crate::mood::{
    check_for_confusion, check_mood_transition, get_fatigue_modifier, mood_modifier,
    update_fatigue,
};
use crate::satisfaction::calculate_training_satisfaction;

/// Bond modifier added to every trainability factor.
pub const BOND_MODIFIER: f64 = 1.0;

/// Worst possible session value.
pub const MIN_SESSION_VALUE: f64 = -2.5;

/// Ceiling of each of the prerequisite and stat penalties.
const MAX_PENALTY: f64 = 5.0;

/// Highest skill or stat level.
const MAX_SKILL_LEVEL: f64 = 100.0;

/// Level at which diminishing returns would reach zero.
const DIMINISHING_LEVEL: f64 = 150.0;

/// Injury chance ceiling for under-age work.
const MAX_INJURY_CHANCE: f64 = 0.8;

const DAYS_PER_YEAR: f64 = 365.0;

/// Fatigue shed per minute of care work.
const CARE_RECOVERY_PER_MINUTE: f64 = 0.5;

// ---------------------------------------------------------------------------
// Formula terms
// ---------------------------------------------------------------------------

/// How session length scales progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationScaling {
    /// Multiplier on the raw session value.
    pub multiplier: f64,
    /// Largest skill gain the session can produce.
    pub max_gain: f64,
}

/// Longer sessions achieve more but with a per-minute falloff.
pub const fn duration_scaling(duration: SessionDuration) -> DurationScaling {
    let (multiplier, max_gain) = match duration {
        SessionDuration::Five => (0.5, 1.25),
        SessionDuration::Fifteen => (1.0, 2.5),
        SessionDuration::Thirty => (1.75, 5.0),
        SessionDuration::Sixty => (3.0, 10.0),
    };
    DurationScaling {
        multiplier,
        max_gain,
    }
}

/// BTV: catalog difficulty inverted so easy skills score high.
pub fn base_training_value(skill: &SkillDefinition) -> f64 {
    11.0 - f64::from(skill.base_training_value)
}

/// PTM: a tenth of a point per missing prerequisite level, capped at 5.
///
/// An any-of group costs only its cheapest option's shortfall.
pub fn prerequisite_penalty(horse: &Horse, skill: &SkillDefinition) -> f64 {
    let total: f64 = skill
        .prerequisites
        .iter()
        .map(|prereq| match prereq {
            Prerequisite::Skill(req) => req.shortfall(horse.skill_level(req.skill)),
            Prerequisite::AnyOf { any_of } => any_of
                .iter()
                .map(|req| req.shortfall(horse.skill_level(req.skill)))
                .reduce(f64::min)
                .unwrap_or(0.0),
        })
        .map(|shortfall| shortfall * 0.1)
        .sum();
    total.min(MAX_PENALTY)
}

/// SDM: a twentieth of a point per missing stat level, capped at 5.
pub fn stat_deficiency_penalty(horse: &Horse, skill: &SkillDefinition) -> f64 {
    let total: f64 = skill
        .minimum_stats
        .iter()
        .map(|req| {
            let effective = horse.training.get(req.stat) * 100.0;
            if effective < req.min_level {
                (req.min_level - effective) * 0.05
            } else {
                0.0
            }
        })
        .sum();
    total.min(MAX_PENALTY)
}

/// TSM: 0.75 for a novice trainer up to 1.25 for a master.
pub fn trainer_skill_modifier(trainer_skill: f64) -> f64 {
    (trainer_skill / 100.0).mul_add(0.5, 0.75)
}

/// Tr: natural intelligence scaled by how much of it has been trained.
pub fn trainability(horse: &Horse) -> f64 {
    let [first, second] = horse.genes.intelligence.alleles();
    let natural = (first.value() + second.value()) / 2.0;
    natural * horse.training.intelligence
}

/// PV: the personality's fixed value. Bold horses roll from -3 to 8 each
/// session, plus up to 5 more from their bond with the trainer.
pub fn personality_value(horse: &Horse, trainer: &Trainer, rng: &mut impl Rng) -> f64 {
    let personality = horse.mental_state.personality;
    personality.fixed_value().unwrap_or_else(|| {
        let bond = horse.bond_level(trainer.id);
        rng.random::<f64>().mul_add(11.0, -3.0) + bond / 100.0 * 5.0
    })
}

/// MM: the mood modifier for this particular session.
pub fn session_mood_modifier(
    mental_state: &MentalState,
    skill: &SkillDefinition,
    rng: &mut impl Rng,
) -> f64 {
    let same_skill = mental_state.previous_skill.as_deref() == Some(skill.id);
    match mental_state.mood {
        Mood::PentUp => {
            if skill.is_physical {
                1.0
            } else {
                0.3
            }
        }
        Mood::Energetic => {
            if skill.is_physical {
                1.25
            } else {
                0.9
            }
        }
        Mood::Sassy => rng.random::<f64>().mul_add(0.6, 0.9),
        Mood::Confused => {
            if same_skill {
                1.0
            } else {
                0.8
            }
        }
        Mood::Intrigued => {
            if same_skill {
                1.3
            } else {
                1.0
            }
        }
        mood => mood_modifier(mood),
    }
}

/// Chance an under-age horse is hurt by `skill`. Zero when the skill has
/// no age gate or the horse is old enough.
pub fn injury_chance(age: u32, skill: &SkillDefinition) -> f64 {
    let Some(minimum_age) = skill.minimum_age else {
        return 0.0;
    };
    if age >= minimum_age {
        return 0.0;
    }
    // The yearly rate is spread over a year of days, applied once per
    // year under the gate.
    let years_under = f64::from(minimum_age.saturating_sub(age));
    let rate = if skill.is_physical { 0.5 } else { 0.25 };
    (years_under * rate / DAYS_PER_YEAR).min(MAX_INJURY_CHANCE)
}

/// Session value before it is added to the skill level.
pub fn calculate_session_value(
    horse: &Horse,
    skill: &SkillDefinition,
    duration: SessionDuration,
    trainer: &Trainer,
    rng: &mut impl Rng,
) -> f64 {
    let fm = get_fatigue_modifier(horse.mental_state.fatigue);
    let btv = base_training_value(skill);
    let ptm = prerequisite_penalty(horse, skill);
    let sdm = stat_deficiency_penalty(horse, skill);
    let tsm = trainer_skill_modifier(trainer.skill_level);
    let ctv = (btv - ptm - sdm) * tsm;

    let tr = trainability(horse);
    let pv = personality_value(horse, trainer, rng);
    let mm = session_mood_modifier(&horse.mental_state, skill, rng);
    let factor = (tr + pv).max(0.0).mul_add(mm, BOND_MODIFIER);
    let scaled = factor / 100.0;

    let scaling = duration_scaling(duration);
    let raw = fm * ctv * scaled * scaling.multiplier;
    let current = horse.skill_level(skill.id);
    let diminishing = 1.0 - current / DIMINISHING_LEVEL;
    let value = (raw * diminishing).clamp(MIN_SESSION_VALUE, scaling.max_gain);

    debug!(
        horse = %horse.name,
        skill = skill.id,
        fm,
        btv,
        ptm,
        sdm,
        tsm,
        ctv,
        tr,
        pv,
        mm,
        raw,
        sv = value,
        "Session value"
    );
    value
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Run one training session and report what it would change.
///
/// An unknown skill yields a failed result with no changes. Every other
/// input produces a result, including sessions that go backwards.
pub fn apply_training(
    horse: &Horse,
    skill_id: &str,
    duration: SessionDuration,
    trainer: &Trainer,
    rng: &mut impl Rng,
) -> TrainingResult {
    let Some(skill) = catalog::skill(skill_id) else {
        return TrainingResult::failed(format!("Skill '{skill_id}' not found."));
    };
    run_session(horse, skill, duration, trainer, rng)
}

fn run_session(
    horse: &Horse,
    skill: &SkillDefinition,
    duration: SessionDuration,
    trainer: &Trainer,
    rng: &mut impl Rng,
) -> TrainingResult {
    let injury_risk = injury_chance(horse.age, skill);
    let injured = injury_risk > 0.0 && rng.random::<f64>() < injury_risk;
    if injury_risk > 0.0 {
        debug!(horse = %horse.name, skill = skill.id, injury_risk, injured, "Injury roll");
    }

    let session_value = calculate_session_value(horse, skill, duration, trainer, rng);
    let success = session_value > 0.0 && !injured;

    let current_level = horse.skill_level(skill.id);
    let new_skill_level = if injured {
        current_level
    } else {
        (current_level + session_value).clamp(0.0, MAX_SKILL_LEVEL)
    };
    let skill_gained = new_skill_level - current_level;

    let stats_gained = stat_gains(horse, skill, skill_gained);
    let fatigue_gained = fatigue_change(horse.mental_state.fatigue, skill, duration);

    let new_mood = if check_for_confusion(current_level, rng) {
        debug!(horse = %horse.name, skill = skill.id, "Horse confused");
        Some(Mood::Confused)
    } else {
        check_mood_transition(&horse.mental_state, skill.id, skill.is_physical)
    };

    let message = training_message(
        &horse.name,
        horse.mental_state.personality,
        skill,
        duration,
        skill_gained,
        success,
        injured,
    );

    TrainingResult {
        success,
        skill_gained,
        new_skill_level,
        stats_gained,
        fatigue_gained,
        mood_changed: new_mood.is_some(),
        new_mood,
        satisfaction_gained: calculate_training_satisfaction(duration, skill.is_physical),
        injured,
        message,
    }
}

/// Stat training earned from `skill_gained` points of skill.
///
/// Each contribution grows its stat in proportion to the room left below
/// 1.0, so no stat is ever pushed past fully trained.
fn stat_gains(horse: &Horse, skill: &SkillDefinition, skill_gained: f64) -> BTreeMap<Stat, f64> {
    if skill_gained <= 0.0 {
        return BTreeMap::new();
    }
    skill
        .stat_contributions
        .iter()
        .filter_map(|contribution| {
            let current = *horse.training.get(contribution.stat);
            let gain = contribution.amount * skill_gained.abs() * (1.0 - current);
            let gained = (current + gain).min(1.0) - current;
            (gained > 0.0).then_some((contribution.stat, gained))
        })
        .collect()
}

/// Care work rests the horse; everything else tires it.
fn fatigue_change(fatigue: f64, skill: &SkillDefinition, duration: SessionDuration) -> f64 {
    if skill.is_care() {
        let rest = f64::from(duration.minutes()) * CARE_RECOVERY_PER_MINUTE;
        -rest.min(fatigue)
    } else {
        update_fatigue(fatigue, duration, skill.is_physical).min(MAX_FATIGUE) - fatigue
    }
}

/// Narrative line for the player.
///
/// Gains are normalised to a fifteen minute session before being graded, so
/// a long session has to earn proportionally more to read as excellent.
pub fn training_message(
    horse_name: &str,
    personality: Personality,
    skill: &SkillDefinition,
    duration: SessionDuration,
    skill_gained: f64,
    success: bool,
    injured: bool,
) -> String {
    let skill_name = skill.name;
    if injured {
        return format!(
            "{horse_name} sustained an injury during training. They may be too young for {skill_name} training."
        );
    }

    if !success || skill_gained < 0.0 {
        return match personality {
            Personality::Recalcitrant | Personality::Intractable | Personality::Stubborn => {
                format!("{horse_name} stubbornly refused to cooperate during {skill_name} training.")
            }
            Personality::Timid => {
                format!("{horse_name} was too anxious to make progress in {skill_name}.")
            }
            _ => format!("{horse_name} struggled with {skill_name} training today."),
        };
    }

    let per_fifteen = skill_gained / (f64::from(duration.minutes()) / 15.0);
    if per_fifteen >= 2.0 {
        match personality {
            Personality::Willing | Personality::Amiable | Personality::Curious => {
                format!("{horse_name} eagerly worked on {skill_name} and made excellent progress!")
            }
            _ => {
                format!("{horse_name} performed exceptionally well during {skill_name} training!")
            }
        }
    } else if per_fifteen >= 1.0 {
        match personality {
            Personality::Personable | Personality::Curious => {
                format!("{horse_name} was engaged and made good progress with {skill_name}.")
            }
            _ => format!("{horse_name} made good progress in {skill_name} today."),
        }
    } else {
        format!("{horse_name} made some progress with {skill_name}.")
    }
}
