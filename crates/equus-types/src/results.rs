//! Result records returned by the simulation engine.
//!
//! These shapes are what the UI and tests pin against: field names are
//! serialized in camelCase (`canTrain`, `skillGained`, `statsGained`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{Mood, Stat};
use crate::genes::BaseColor;

/// Outcome of checking whether a horse may train a skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct TrainingValidation {
    /// Whether the session may go ahead.
    pub can_train: bool,
    /// Human-readable rejection reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// One entry per unmet prerequisite, empty unless that was the blocker.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_prerequisites: Vec<String>,
}

impl TrainingValidation {
    /// Training is allowed.
    pub const fn allowed() -> Self {
        Self {
            can_train: true,
            reason: None,
            missing_prerequisites: Vec::new(),
        }
    }

    /// Training is refused.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            can_train: false,
            reason: Some(reason.into()),
            missing_prerequisites: Vec::new(),
        }
    }
}

/// Outcome of checking whether two horses may breed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct BreedingValidation {
    /// Whether the pairing is allowed.
    pub can_breed: bool,
    /// First failed rule, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl BreedingValidation {
    /// Breeding is allowed.
    pub const fn allowed() -> Self {
        Self {
            can_breed: true,
            reason: None,
        }
    }

    /// Breeding is refused.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            can_breed: false,
            reason: Some(reason.into()),
        }
    }
}

/// Satisfaction earned by one session, not yet applied to the horse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SatisfactionGain {
    /// Exercise points.
    pub exercise: u32,
    /// Stimulation points.
    pub stimulation: u32,
    /// Socialization points.
    pub socialization: u32,
}

/// Everything a training session changed, for the caller to commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct TrainingResult {
    /// Positive progress and no injury.
    pub success: bool,
    /// Change in skill level, negative on a bad session.
    pub skill_gained: f64,
    /// Skill level after the session.
    pub new_skill_level: f64,
    /// Training-level gains per stat.
    pub stats_gained: BTreeMap<Stat, f64>,
    /// Change in fatigue, negative for care work.
    pub fatigue_gained: f64,
    /// Whether the mood changed.
    pub mood_changed: bool,
    /// The new mood, when it changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_mood: Option<Mood>,
    /// Satisfaction earned.
    pub satisfaction_gained: SatisfactionGain,
    /// Whether the horse was hurt.
    pub injured: bool,
    /// Narrative summary for the player.
    pub message: String,
}

impl TrainingResult {
    /// A result that changes nothing.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            skill_gained: 0.0,
            new_skill_level: 0.0,
            stats_gained: BTreeMap::new(),
            fatigue_gained: 0.0,
            mood_changed: false,
            new_mood: None,
            satisfaction_gained: SatisfactionGain::default(),
            injured: false,
            message: message.into(),
        }
    }
}

/// Expressed value of one stat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct StatPhenotype {
    /// Genetic ceiling, mean of the gene pair.
    pub potential: f64,
    /// Unlocked fraction of the potential.
    pub trained: f64,
    /// Potential scaled by training and age.
    pub effective: f64,
    /// 1 to 5 star rating of the potential.
    pub stars: u8,
}

/// Coat colour derived from visual genetics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ColorResult {
    /// Colour before graying.
    pub base_color: BaseColor,
    /// Asset key, prefixed with `gray_` for graying horses.
    pub display_color: String,
    /// Whether the horse carries a gray allele.
    pub is_gray: bool,
    /// Notation such as `Ee/A+At/Gg`.
    pub genetic_code: String,
    /// Label such as `Graying Bay`.
    pub color_name: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn training_validation_serializes_can_train() {
        let json = serde_json::to_value(TrainingValidation::rejected("nope")).unwrap();
        assert_eq!(json["canTrain"], false);
        assert_eq!(json["reason"], "nope");
        assert!(json.get("missingPrerequisites").is_none());
    }

    #[test]
    fn failed_training_result_is_inert() {
        let result = TrainingResult::failed("Skill 'x' not found.");
        assert!(!result.success);
        assert!(result.stats_gained.is_empty());
        assert!(result.fatigue_gained.abs() < f64::EPSILON);
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("skillGained").is_some());
        assert!(json.get("statsGained").is_some());
    }
}
