//! The horse aggregate and the trainer working it.
//!
//! A [`Horse`] is created once, either as a foundation horse or as a foal,
//! and carries its immutable genetics alongside the state that training and
//! day advances mutate: training levels, skills, mental state and
//! satisfaction.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{Gender, Housing, Mood, NeedChannel, Personality};
use crate::genes::{ConformationGenetics, StatGeneMap, TrainingLevels, VisualGenetics};
use crate::ids::{HorseId, TrainerId};

// ---------------------------------------------------------------------------
// Mental state
// ---------------------------------------------------------------------------

/// Upper bound of the fatigue scale.
pub const MAX_FATIGUE: f64 = 100.0;

/// Personality, mood and fatigue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct MentalState {
    /// Fixed at birth.
    pub personality: Personality,
    /// Current mood.
    pub mood: Mood,
    /// Mood to fall back to when leaving `Confused` on a different skill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_mood: Option<Mood>,
    /// Skill that caused the current confusion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_skill: Option<String>,
    /// Tiredness in `0..=100`.
    pub fatigue: f64,
}

impl MentalState {
    /// A rested horse in the given mood.
    pub const fn new(personality: Personality, mood: Mood) -> Self {
        Self {
            personality,
            mood,
            previous_mood: None,
            previous_skill: None,
            fatigue: 0.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Satisfaction
// ---------------------------------------------------------------------------

/// Progress toward one daily need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NeedLevel {
    /// Amount received today.
    pub current: u32,
    /// Amount needed today.
    pub required: u32,
}

impl NeedLevel {
    /// Build a level.
    pub const fn new(current: u32, required: u32) -> Self {
        Self { current, required }
    }

    /// Whether today's requirement has been reached.
    pub const fn is_met(self) -> bool {
        self.current >= self.required
    }
}

/// The four daily needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Satisfaction {
    /// Physical work.
    pub exercise: NeedLevel,
    /// Mental engagement.
    pub stimulation: NeedLevel,
    /// Feed.
    pub nutrition: NeedLevel,
    /// Company.
    pub socialization: NeedLevel,
}

impl Satisfaction {
    /// Level of one channel.
    pub const fn channel(&self, channel: NeedChannel) -> NeedLevel {
        match channel {
            NeedChannel::Exercise => self.exercise,
            NeedChannel::Stimulation => self.stimulation,
            NeedChannel::Nutrition => self.nutrition,
            NeedChannel::Socialization => self.socialization,
        }
    }

    /// Mutable level of one channel.
    pub const fn channel_mut(&mut self, channel: NeedChannel) -> &mut NeedLevel {
        match channel {
            NeedChannel::Exercise => &mut self.exercise,
            NeedChannel::Stimulation => &mut self.stimulation,
            NeedChannel::Nutrition => &mut self.nutrition,
            NeedChannel::Socialization => &mut self.socialization,
        }
    }
}

// ---------------------------------------------------------------------------
// Bonds and lineage
// ---------------------------------------------------------------------------

/// Attachment between a horse and one trainer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Bond {
    /// The trainer this bond is with.
    pub trainer_id: TrainerId,
    /// Strength of the bond, `0..=100`.
    pub level: f64,
    /// Last time the two worked together.
    pub last_interaction: DateTime<Utc>,
}

/// Parentage of a horse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Lineage {
    /// Father, absent for foundation horses.
    pub sire: Option<HorseId>,
    /// Mother, absent for foundation horses.
    pub dam: Option<HorseId>,
    /// 0 for foundation horses, otherwise one more than the older parent line.
    pub generation: u32,
}

// ---------------------------------------------------------------------------
// Horse
// ---------------------------------------------------------------------------

/// A horse and everything the simulation knows about it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Horse {
    /// Unique identifier.
    pub id: HorseId,
    /// Barn name.
    pub name: String,
    /// Age in whole years.
    pub age: u32,
    /// Sex.
    pub gender: Gender,
    /// Stat genes, fixed at birth.
    pub genes: StatGeneMap,
    /// Unlocked fraction of each stat's potential.
    pub training: TrainingLevels,
    /// Skill id to level in `0..=100`. Absent means untrained.
    pub skills: BTreeMap<String, f64>,
    /// Coat colour genes.
    pub visual_genetics: VisualGenetics,
    /// Conformation genes.
    pub conformation_genetics: ConformationGenetics,
    /// Personality, mood and fatigue.
    pub mental_state: MentalState,
    /// Daily needs.
    pub satisfaction: Satisfaction,
    /// Where the horse is kept.
    pub housing: Housing,
    /// Bonds with trainers.
    #[serde(default)]
    pub bonds: Vec<Bond>,
    /// Sire, dam and generation.
    pub lineage: Lineage,
    /// Real-world birth time.
    pub born_at: DateTime<Utc>,
}

impl Horse {
    /// Current level of `skill_id`, 0 if never trained.
    pub fn skill_level(&self, skill_id: &str) -> f64 {
        self.skills.get(skill_id).copied().unwrap_or(0.0)
    }

    /// Bond level with `trainer`, 0 if they have never worked together.
    pub fn bond_level(&self, trainer: TrainerId) -> f64 {
        self.bonds
            .iter()
            .find(|bond| bond.trainer_id == trainer)
            .map_or(0.0, |bond| bond.level)
    }
}

/// The person training horses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Trainer {
    /// Unique identifier.
    pub id: TrainerId,
    /// Display name.
    pub name: String,
    /// Horsemanship, `0..=100`.
    pub skill_level: f64,
}

impl Trainer {
    /// A trainer with a fresh id.
    pub fn new(name: impl Into<String>, skill_level: f64) -> Self {
        Self {
            id: TrainerId::new(),
            name: name.into(),
            skill_level: skill_level.clamp(0.0, 100.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn need_level_met_at_threshold() {
        assert!(NeedLevel::new(30, 30).is_met());
        assert!(!NeedLevel::new(29, 30).is_met());
        assert!(NeedLevel::new(0, 0).is_met());
    }

    #[test]
    fn satisfaction_channel_accessors_agree() {
        let mut satisfaction = Satisfaction::default();
        satisfaction.channel_mut(NeedChannel::Stimulation).current = 12;
        assert_eq!(satisfaction.stimulation.current, 12);
        assert_eq!(satisfaction.channel(NeedChannel::Stimulation).current, 12);
    }

    #[test]
    fn trainer_skill_is_clamped() {
        let trainer = Trainer::new("Sam", 140.0);
        assert!((trainer.skill_level - 100.0).abs() < f64::EPSILON);
    }
}
