//! The static skill catalog.
//!
//! Every skill a horse can learn is described here once: its category,
//! difficulty, prerequisite graph, the stat levels it expects and the stats
//! it develops. The table is plain data; [`crate::validation`] and
//! [`crate::formula`] interpret it.

use equus_types::{SkillCategory, Stat};
use serde::Serialize;

use crate::error::TrainingError;

/// Age in years below which ridden work risks injury.
pub const RIDING_AGE: u32 = 3;

// ---------------------------------------------------------------------------
// Definition types
// ---------------------------------------------------------------------------

/// A minimum level in another skill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRequirement {
    /// Catalog id of the required skill.
    pub skill: &'static str,
    /// Required level, `0..=100`.
    pub min_level: f64,
}

impl SkillRequirement {
    /// Build a requirement.
    pub const fn new(skill: &'static str, min_level: f64) -> Self {
        Self { skill, min_level }
    }

    /// Shortfall of `current` against this requirement, never negative.
    pub fn shortfall(&self, current: f64) -> f64 {
        (self.min_level - current).max(0.0)
    }
}

/// One entry of a skill's prerequisite list. Entries are AND-ed together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Prerequisite {
    /// A single required skill level.
    Skill(SkillRequirement),
    /// Alternatives, any one of which satisfies the entry.
    AnyOf {
        /// The alternatives.
        #[serde(rename = "anyOf")]
        any_of: &'static [SkillRequirement],
    },
}

impl Prerequisite {
    /// Every skill id this entry mentions.
    pub fn skill_ids(&self) -> Vec<&'static str> {
        match self {
            Self::Skill(req) => vec![req.skill],
            Self::AnyOf { any_of } => any_of.iter().map(|req| req.skill).collect(),
        }
    }
}

/// A minimum training level in a stat, expressed on a `0..=100` scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatRequirement {
    /// The stat.
    pub stat: Stat,
    /// Required level.
    pub min_level: f64,
}

impl StatRequirement {
    /// Build a requirement.
    pub const fn new(stat: Stat, min_level: f64) -> Self {
        Self { stat, min_level }
    }
}

/// A stat paired with a weight. Used both for how strongly a stat
/// influences learning a skill and for how much practising the skill
/// develops the stat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatWeight {
    /// The stat.
    pub stat: Stat,
    /// Weight or contribution per skill point.
    pub amount: f64,
}

impl StatWeight {
    /// Build a weight.
    pub const fn new(stat: Stat, amount: f64) -> Self {
        Self { stat, amount }
    }
}

/// A learnable skill.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillDefinition {
    /// Stable catalog id.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Category.
    pub category: SkillCategory,
    /// Short description for the UI.
    pub description: &'static str,
    /// Difficulty from 1 (trivial) to 10 (hardest).
    pub base_training_value: u8,
    /// Prerequisite entries, all of which must hold.
    pub prerequisites: &'static [Prerequisite],
    /// Stat levels the skill expects. Shortfalls slow learning.
    pub minimum_stats: &'static [StatRequirement],
    /// Stats that shape how the horse takes to the skill.
    pub stat_influences: &'static [StatWeight],
    /// Stats developed per point of skill gained.
    pub stat_contributions: &'static [StatWeight],
    /// Physical work tires the horse faster and counts as exercise.
    pub is_physical: bool,
    /// Age in years below which training risks injury.
    pub minimum_age: Option<u32>,
}

impl SkillDefinition {
    /// Whether this is a care skill.
    pub fn is_care(&self) -> bool {
        self.category == SkillCategory::Care
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

static SKILLS: &[SkillDefinition] = &[
    SkillDefinition {
        id: "brushing",
        name: "Brush",
        category: SkillCategory::Care,
        description: "Give your horse a good brushing.",
        base_training_value: 1,
        prerequisites: &[],
        minimum_stats: &[],
        stat_influences: &[],
        stat_contributions: &[StatWeight::new(Stat::Sociability, 0.015)],
        is_physical: false,
        minimum_age: None,
    },
    SkillDefinition {
        id: "grooming",
        name: "Grooming",
        category: SkillCategory::Care,
        description: "A full grooming session. Settles a nervous horse and builds trust.",
        base_training_value: 2,
        prerequisites: &[],
        minimum_stats: &[],
        stat_influences: &[StatWeight::new(Stat::Sociability, 0.2)],
        stat_contributions: &[
            StatWeight::new(Stat::Sociability, 0.01),
            StatWeight::new(Stat::Stolidity, 0.01),
        ],
        is_physical: false,
        minimum_age: None,
    },
    SkillDefinition {
        id: "picking_out_feet",
        name: "Pick Out Feet",
        category: SkillCategory::Care,
        description: "Pick packed dirt, mud, rocks, etcetera, out of your horse's feet.",
        base_training_value: 3,
        prerequisites: &[],
        minimum_stats: &[],
        stat_influences: &[],
        stat_contributions: &[
            StatWeight::new(Stat::Balance, 0.015),
            StatWeight::new(Stat::Sociability, 0.01),
        ],
        is_physical: false,
        minimum_age: None,
    },
    SkillDefinition {
        id: "bathing",
        name: "Bathing",
        category: SkillCategory::Care,
        description: "Give your horse a bath.",
        base_training_value: 3,
        prerequisites: &[
            Prerequisite::Skill(SkillRequirement::new("haltering", 25.0)),
            Prerequisite::AnyOf {
                any_of: &[
                    SkillRequirement::new("standing", 30.0),
                    SkillRequirement::new("tying", 30.0),
                ],
            },
        ],
        minimum_stats: &[],
        stat_influences: &[],
        stat_contributions: &[],
        is_physical: false,
        minimum_age: None,
    },
    SkillDefinition {
        id: "clipping",
        name: "Clipping",
        category: SkillCategory::Care,
        description: "Clip your horse to get them ready for shows or winter work.",
        base_training_value: 5,
        prerequisites: &[
            Prerequisite::Skill(SkillRequirement::new("haltering", 65.0)),
            Prerequisite::AnyOf {
                any_of: &[
                    SkillRequirement::new("standing", 50.0),
                    SkillRequirement::new("tying", 60.0),
                ],
            },
        ],
        minimum_stats: &[StatRequirement::new(Stat::Stolidity, 40.0)],
        stat_influences: &[],
        stat_contributions: &[],
        is_physical: false,
        minimum_age: None,
    },
    SkillDefinition {
        id: "haltering",
        name: "Haltering",
        category: SkillCategory::Foundation,
        description: "Teaching the horse to accept and wear a halter",
        base_training_value: 1,
        prerequisites: &[],
        minimum_stats: &[],
        stat_influences: &[
            StatWeight::new(Stat::Bravery, 0.3),
            StatWeight::new(Stat::Intelligence, 0.2),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Bravery, 0.005),
            StatWeight::new(Stat::Stolidity, 0.01),
            StatWeight::new(Stat::Intelligence, 0.005),
        ],
        is_physical: false,
        minimum_age: None,
    },
    SkillDefinition {
        id: "leading",
        name: "Leading",
        category: SkillCategory::Foundation,
        description: "Teaching the horse to give to pressure and follow when led.",
        base_training_value: 2,
        prerequisites: &[Prerequisite::Skill(SkillRequirement::new("haltering", 25.0))],
        minimum_stats: &[],
        stat_influences: &[
            StatWeight::new(Stat::Bravery, 0.3),
            StatWeight::new(Stat::Intelligence, 0.2),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Bravery, 0.01),
            StatWeight::new(Stat::Balance, 0.01),
            StatWeight::new(Stat::Intelligence, 0.005),
        ],
        is_physical: false,
        minimum_age: None,
    },
    SkillDefinition {
        id: "standing",
        name: "Standing",
        category: SkillCategory::Foundation,
        description: "Teaching the horse to stand quietly.",
        base_training_value: 3,
        prerequisites: &[Prerequisite::Skill(SkillRequirement::new("haltering", 20.0))],
        minimum_stats: &[],
        stat_influences: &[
            StatWeight::new(Stat::Stolidity, 0.4),
            StatWeight::new(Stat::Intelligence, 0.2),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Stolidity, 0.02),
            StatWeight::new(Stat::Intelligence, 0.01),
        ],
        is_physical: false,
        minimum_age: None,
    },
    SkillDefinition {
        id: "tying",
        name: "Tying",
        category: SkillCategory::Foundation,
        description: "Teaching the horse to be tied securely",
        base_training_value: 4,
        prerequisites: &[
            Prerequisite::Skill(SkillRequirement::new("haltering", 30.0)),
            Prerequisite::Skill(SkillRequirement::new("leading", 25.0)),
            Prerequisite::Skill(SkillRequirement::new("standing", 25.0)),
        ],
        minimum_stats: &[],
        stat_influences: &[
            StatWeight::new(Stat::Bravery, 0.3),
            StatWeight::new(Stat::Stolidity, 0.3),
            StatWeight::new(Stat::Intelligence, 0.2),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Flexibility, 0.015),
            StatWeight::new(Stat::Intelligence, 0.01),
        ],
        is_physical: false,
        minimum_age: None,
    },
    SkillDefinition {
        id: "loading",
        name: "Loading",
        category: SkillCategory::Foundation,
        description: "Teaching the horse to load into a trailer for transport.",
        base_training_value: 6,
        prerequisites: &[
            Prerequisite::Skill(SkillRequirement::new("haltering", 40.0)),
            Prerequisite::Skill(SkillRequirement::new("leading", 40.0)),
        ],
        minimum_stats: &[],
        stat_influences: &[
            StatWeight::new(Stat::Bravery, 0.3),
            StatWeight::new(Stat::Intelligence, 0.15),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Agility, 0.0025),
            StatWeight::new(Stat::Bravery, 0.015),
            StatWeight::new(Stat::Stolidity, 0.0025),
            StatWeight::new(Stat::Flexibility, 0.01),
        ],
        is_physical: false,
        minimum_age: None,
    },
    SkillDefinition {
        id: "teach_voice_cues",
        name: "Teach Voice Cues",
        category: SkillCategory::Ground,
        description: "Teach the horse to respond to verbal commands for different gaits.",
        base_training_value: 4,
        prerequisites: &[],
        minimum_stats: &[],
        stat_influences: &[
            StatWeight::new(Stat::Intelligence, 0.4),
            StatWeight::new(Stat::Sociability, 0.2),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Intelligence, 0.06),
            StatWeight::new(Stat::Sociability, 0.03),
        ],
        is_physical: false,
        minimum_age: None,
    },
    SkillDefinition {
        id: "lunging_free",
        name: "Free Lunging",
        category: SkillCategory::Ground,
        description: "Teaching the horse to move in a circle around the handler",
        base_training_value: 3,
        prerequisites: &[],
        minimum_stats: &[],
        stat_influences: &[
            StatWeight::new(Stat::Intelligence, 0.3),
            StatWeight::new(Stat::Balance, 0.2),
            StatWeight::new(Stat::Stamina, 0.2),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Stamina, 0.05),
            StatWeight::new(Stat::Balance, 0.025),
            StatWeight::new(Stat::Sociability, 0.025),
            StatWeight::new(Stat::Tempo, 0.025),
        ],
        is_physical: true,
        minimum_age: None,
    },
    SkillDefinition {
        id: "lunging_long_line",
        name: "Long Line Lunging",
        category: SkillCategory::Ground,
        description: "Teaching the horse to move in a circle around the handler while on the long line",
        base_training_value: 5,
        prerequisites: &[
            Prerequisite::Skill(SkillRequirement::new("haltering", 60.0)),
            Prerequisite::Skill(SkillRequirement::new("leading", 50.0)),
        ],
        minimum_stats: &[StatRequirement::new(Stat::Agility, 10.0)],
        stat_influences: &[
            StatWeight::new(Stat::Agility, 0.4),
            StatWeight::new(Stat::Balance, 0.3),
            StatWeight::new(Stat::Intelligence, 0.1),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Balance, 0.06),
            StatWeight::new(Stat::Agility, 0.06),
            StatWeight::new(Stat::Stamina, 0.05),
            StatWeight::new(Stat::Intelligence, 0.025),
        ],
        is_physical: true,
        minimum_age: None,
    },
    SkillDefinition {
        id: "tacking_pad_saddle_girth",
        name: "Saddling Up",
        category: SkillCategory::Ground,
        description: "Teaching the horse to accept a saddle pad, saddle, and girth",
        base_training_value: 4,
        prerequisites: &[
            Prerequisite::AnyOf {
                any_of: &[
                    SkillRequirement::new("standing", 60.0),
                    SkillRequirement::new("tying", 35.0),
                ],
            },
        ],
        minimum_stats: &[],
        stat_influences: &[
            StatWeight::new(Stat::Bravery, 0.3),
            StatWeight::new(Stat::Stolidity, 0.1),
            StatWeight::new(Stat::Sociability, 0.1),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Sociability, 0.025),
            StatWeight::new(Stat::Flexibility, 0.025),
        ],
        is_physical: false,
        minimum_age: None,
    },
    SkillDefinition {
        id: "tacking_bridle",
        name: "Bridling",
        category: SkillCategory::Ground,
        description: "Teaching the horse to wear a bridle with a bit.",
        base_training_value: 4,
        prerequisites: &[Prerequisite::Skill(SkillRequirement::new("haltering", 40.0))],
        minimum_stats: &[],
        stat_influences: &[
            StatWeight::new(Stat::Sociability, 0.1),
            StatWeight::new(Stat::Flexibility, 0.3),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Flexibility, 0.025),
            StatWeight::new(Stat::Intelligence, 0.025),
        ],
        is_physical: false,
        minimum_age: None,
    },
    SkillDefinition {
        id: "tacking_harness",
        name: "Harnessing",
        category: SkillCategory::Ground,
        description: "Teaching the horse to wear a driving harness.",
        base_training_value: 5,
        prerequisites: &[
            Prerequisite::Skill(SkillRequirement::new("standing", 50.0)),
            Prerequisite::Skill(SkillRequirement::new("tacking_pad_saddle_girth", 30.0)),
        ],
        minimum_stats: &[StatRequirement::new(Stat::Stolidity, 10.0)],
        stat_influences: &[
            StatWeight::new(Stat::Bravery, 0.3),
            StatWeight::new(Stat::Stolidity, 0.2),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Bravery, 0.05),
            StatWeight::new(Stat::Stolidity, 0.04),
            StatWeight::new(Stat::Flexibility, 0.03),
        ],
        is_physical: false,
        minimum_age: None,
    },
    SkillDefinition {
        id: "mounting",
        name: "Mounting",
        category: SkillCategory::Ground,
        description: "Teaching the horse to accept a rider mounting",
        base_training_value: 5,
        prerequisites: &[
            Prerequisite::Skill(SkillRequirement::new("tacking_pad_saddle_girth", 50.0)),
            Prerequisite::Skill(SkillRequirement::new("standing", 60.0)),
        ],
        minimum_stats: &[StatRequirement::new(Stat::Balance, 15.0)],
        stat_influences: &[
            StatWeight::new(Stat::Bravery, 0.2),
            StatWeight::new(Stat::Balance, 0.3),
            StatWeight::new(Stat::Stolidity, 0.2),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Bravery, 0.04),
            StatWeight::new(Stat::Balance, 0.05),
            StatWeight::new(Stat::Strength, 0.03),
        ],
        is_physical: true,
        minimum_age: Some(RIDING_AGE),
    },
    SkillDefinition {
        id: "groundDrive_walk",
        name: "Ground Driving - Walk",
        category: SkillCategory::Driving,
        description: "Teaching the horse to walk forward while driven from behind.",
        base_training_value: 5,
        prerequisites: &[
            Prerequisite::Skill(SkillRequirement::new("lunging_long_line", 60.0)),
            Prerequisite::Skill(SkillRequirement::new("tacking_harness", 50.0)),
            Prerequisite::Skill(SkillRequirement::new("teach_voice_cues", 50.0)),
        ],
        minimum_stats: &[],
        stat_influences: &[
            StatWeight::new(Stat::Intelligence, 0.3),
            StatWeight::new(Stat::Balance, 0.2),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Balance, 0.05),
            StatWeight::new(Stat::Intelligence, 0.04),
            StatWeight::new(Stat::Stamina, 0.03),
        ],
        is_physical: false,
        minimum_age: None,
    },
    SkillDefinition {
        id: "groundDrive_halt",
        name: "Ground Driving - Halt",
        category: SkillCategory::Driving,
        description: "Teaching the horse to halt while driven from behind.",
        base_training_value: 4,
        prerequisites: &[
            Prerequisite::Skill(SkillRequirement::new("groundDrive_walk", 40.0)),
            Prerequisite::Skill(SkillRequirement::new("teach_voice_cues", 50.0)),
        ],
        minimum_stats: &[],
        stat_influences: &[
            StatWeight::new(Stat::Intelligence, 0.3),
            StatWeight::new(Stat::Stolidity, 0.2),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Balance, 0.04),
            StatWeight::new(Stat::Intelligence, 0.03),
        ],
        is_physical: false,
        minimum_age: None,
    },
    SkillDefinition {
        id: "groundDrive_turning",
        name: "Ground Driving - Turning",
        category: SkillCategory::Driving,
        description: "Teaching the horse to turn right and left while driven from behind.",
        base_training_value: 5,
        prerequisites: &[Prerequisite::Skill(SkillRequirement::new("groundDrive_walk", 50.0))],
        minimum_stats: &[],
        stat_influences: &[
            StatWeight::new(Stat::Agility, 0.3),
            StatWeight::new(Stat::Intelligence, 0.2),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Agility, 0.05),
            StatWeight::new(Stat::Balance, 0.04),
            StatWeight::new(Stat::Intelligence, 0.03),
        ],
        is_physical: false,
        minimum_age: None,
    },
    SkillDefinition {
        id: "groundDrive_trot",
        name: "Ground Driving - Trot",
        category: SkillCategory::Driving,
        description: "Teaching the horse to trot while driven from behind.",
        base_training_value: 6,
        prerequisites: &[
            Prerequisite::Skill(SkillRequirement::new("groundDrive_walk", 60.0)),
            Prerequisite::Skill(SkillRequirement::new("groundDrive_halt", 40.0)),
            Prerequisite::Skill(SkillRequirement::new("teach_voice_cues", 50.0)),
        ],
        minimum_stats: &[],
        stat_influences: &[
            StatWeight::new(Stat::Stamina, 0.3),
            StatWeight::new(Stat::Balance, 0.2),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Stamina, 0.06),
            StatWeight::new(Stat::Balance, 0.05),
            StatWeight::new(Stat::Agility, 0.03),
            StatWeight::new(Stat::Tempo, 0.03),
        ],
        is_physical: false,
        minimum_age: None,
    },
    SkillDefinition {
        id: "groundDrive_canter",
        name: "Ground Driving - Canter",
        category: SkillCategory::Driving,
        description: "Teaching the horse to canter while driven from behind.",
        base_training_value: 7,
        prerequisites: &[
            Prerequisite::Skill(SkillRequirement::new("groundDrive_trot", 60.0)),
            Prerequisite::Skill(SkillRequirement::new("groundDrive_turning", 50.0)),
            Prerequisite::Skill(SkillRequirement::new("teach_voice_cues", 50.0)),
        ],
        minimum_stats: &[],
        stat_influences: &[
            StatWeight::new(Stat::Stamina, 0.3),
            StatWeight::new(Stat::Balance, 0.2),
            StatWeight::new(Stat::Agility, 0.2),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Stamina, 0.07),
            StatWeight::new(Stat::Balance, 0.05),
            StatWeight::new(Stat::Agility, 0.04),
            StatWeight::new(Stat::Strength, 0.03),
        ],
        is_physical: false,
        minimum_age: None,
    },
    SkillDefinition {
        id: "groundDrive_back",
        name: "Ground Driving - Back",
        category: SkillCategory::Driving,
        description: "Teaching the horse to back while driven from behind.",
        base_training_value: 6,
        prerequisites: &[
            Prerequisite::Skill(SkillRequirement::new("groundDrive_halt", 60.0)),
            Prerequisite::Skill(SkillRequirement::new("teach_voice_cues", 50.0)),
        ],
        minimum_stats: &[],
        stat_influences: &[
            StatWeight::new(Stat::Intelligence, 0.3),
            StatWeight::new(Stat::Flexibility, 0.2),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Balance, 0.05),
            StatWeight::new(Stat::Flexibility, 0.04),
            StatWeight::new(Stat::Intelligence, 0.03),
        ],
        is_physical: false,
        minimum_age: None,
    },
    SkillDefinition {
        id: "walk_under_saddle",
        name: "Walk Under Saddle",
        category: SkillCategory::BasicRiding,
        description: "Teaching the horse to walk with a rider",
        base_training_value: 4,
        prerequisites: &[
            Prerequisite::Skill(SkillRequirement::new("mounting", 60.0)),
            Prerequisite::Skill(SkillRequirement::new("tacking_bridle", 50.0)),
        ],
        minimum_stats: &[
            StatRequirement::new(Stat::Balance, 0.2),
            StatRequirement::new(Stat::Strength, 0.15),
        ],
        stat_influences: &[
            StatWeight::new(Stat::Balance, 0.3),
            StatWeight::new(Stat::Intelligence, 0.3),
            StatWeight::new(Stat::Bravery, 0.2),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Balance, 0.06),
            StatWeight::new(Stat::Strength, 0.04),
            StatWeight::new(Stat::Stamina, 0.03),
            StatWeight::new(Stat::Movement, 0.01),
        ],
        is_physical: true,
        minimum_age: Some(RIDING_AGE),
    },
    SkillDefinition {
        id: "trot_under_saddle",
        name: "Trot Under Saddle",
        category: SkillCategory::BasicRiding,
        description: "Teaching the horse to trot with a rider",
        base_training_value: 5,
        prerequisites: &[
            Prerequisite::Skill(SkillRequirement::new("walk_under_saddle", 60.0)),
            Prerequisite::Skill(SkillRequirement::new("halt_under_saddle", 40.0)),
        ],
        minimum_stats: &[
            StatRequirement::new(Stat::Balance, 0.25),
            StatRequirement::new(Stat::Strength, 0.2),
        ],
        stat_influences: &[
            StatWeight::new(Stat::Balance, 0.2),
            StatWeight::new(Stat::Stamina, 0.3),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Stamina, 0.03),
            StatWeight::new(Stat::Balance, 0.02),
            StatWeight::new(Stat::Movement, 0.02),
            StatWeight::new(Stat::Tempo, 0.02),
        ],
        is_physical: true,
        minimum_age: Some(RIDING_AGE),
    },
    SkillDefinition {
        id: "canter_under_saddle",
        name: "Canter Under Saddle",
        category: SkillCategory::BasicRiding,
        description: "Teaching the horse to canter with a rider",
        base_training_value: 7,
        prerequisites: &[
            Prerequisite::Skill(SkillRequirement::new("trot_under_saddle", 60.0)),
            Prerequisite::Skill(SkillRequirement::new("turn_under_saddle", 30.0)),
            Prerequisite::Skill(SkillRequirement::new("halt_under_saddle", 40.0)),
        ],
        minimum_stats: &[
            StatRequirement::new(Stat::Balance, 10.0),
            StatRequirement::new(Stat::Strength, 10.0),
        ],
        stat_influences: &[
            StatWeight::new(Stat::Balance, 0.2),
            StatWeight::new(Stat::Agility, 0.2),
            StatWeight::new(Stat::Stamina, 0.3),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Stamina, 0.04),
            StatWeight::new(Stat::Strength, 0.03),
            StatWeight::new(Stat::Balance, 0.02),
            StatWeight::new(Stat::Speed, 0.02),
        ],
        is_physical: true,
        minimum_age: Some(RIDING_AGE),
    },
    SkillDefinition {
        id: "halt_under_saddle",
        name: "Halt Under Saddle",
        category: SkillCategory::BasicRiding,
        description: "Teaching the horse to halt while ridden.",
        base_training_value: 4,
        prerequisites: &[Prerequisite::Skill(SkillRequirement::new("walk_under_saddle", 40.0))],
        minimum_stats: &[],
        stat_influences: &[
            StatWeight::new(Stat::Balance, 0.3),
            StatWeight::new(Stat::Intelligence, 0.2),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Balance, 0.05),
            StatWeight::new(Stat::Strength, 0.03),
        ],
        is_physical: true,
        minimum_age: Some(RIDING_AGE),
    },
    SkillDefinition {
        id: "turn_under_saddle",
        name: "Turning Under Saddle",
        category: SkillCategory::BasicRiding,
        description: "Teaching the horse to turn while ridden.",
        base_training_value: 4,
        prerequisites: &[Prerequisite::Skill(SkillRequirement::new("walk_under_saddle", 40.0))],
        minimum_stats: &[],
        stat_influences: &[
            StatWeight::new(Stat::Agility, 0.3),
            StatWeight::new(Stat::Balance, 0.2),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Agility, 0.05),
            StatWeight::new(Stat::Balance, 0.04),
            StatWeight::new(Stat::Flexibility, 0.03),
        ],
        is_physical: true,
        minimum_age: Some(RIDING_AGE),
    },
    SkillDefinition {
        id: "back_under_saddle",
        name: "Backing Under Saddle",
        category: SkillCategory::BasicRiding,
        description: "Teaching the horse to back while ridden.",
        base_training_value: 7,
        prerequisites: &[
            Prerequisite::Skill(SkillRequirement::new("halt_under_saddle", 60.0)),
            Prerequisite::Skill(SkillRequirement::new("walk_under_saddle", 60.0)),
        ],
        minimum_stats: &[],
        stat_influences: &[
            StatWeight::new(Stat::Flexibility, 0.3),
            StatWeight::new(Stat::Intelligence, 0.2),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Flexibility, 0.05),
            StatWeight::new(Stat::Strength, 0.04),
            StatWeight::new(Stat::Balance, 0.03),
        ],
        is_physical: true,
        minimum_age: Some(RIDING_AGE),
    },
    SkillDefinition {
        id: "hand_gallop",
        name: "Hand Gallop",
        category: SkillCategory::Intermediate,
        description: "Work the horse at a fast gait between canter and gallop.",
        base_training_value: 7,
        prerequisites: &[Prerequisite::Skill(SkillRequirement::new("canter_under_saddle", 70.0))],
        minimum_stats: &[],
        stat_influences: &[
            StatWeight::new(Stat::Stamina, 0.3),
            StatWeight::new(Stat::Bravery, 0.2),
            StatWeight::new(Stat::Balance, 0.2),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Stamina, 0.08),
            StatWeight::new(Stat::Speed, 0.06),
            StatWeight::new(Stat::Strength, 0.05),
        ],
        is_physical: true,
        minimum_age: Some(RIDING_AGE),
    },
    SkillDefinition {
        id: "self_carriage",
        name: "Self Carriage",
        category: SkillCategory::Intermediate,
        description: "Teach the horse to carry itself in balance.",
        base_training_value: 7,
        prerequisites: &[
            Prerequisite::Skill(SkillRequirement::new("walk_under_saddle", 70.0)),
            Prerequisite::Skill(SkillRequirement::new("trot_under_saddle", 70.0)),
        ],
        minimum_stats: &[],
        stat_influences: &[
            StatWeight::new(Stat::Balance, 0.4),
            StatWeight::new(Stat::Strength, 0.2),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Balance, 0.08),
            StatWeight::new(Stat::Strength, 0.06),
            StatWeight::new(Stat::Stamina, 0.04),
        ],
        is_physical: true,
        minimum_age: None,
    },
    SkillDefinition {
        id: "yield_forehand",
        name: "Yield Forehand",
        category: SkillCategory::Intermediate,
        description: "Teach the horse to move the front end away from pressure.",
        base_training_value: 7,
        prerequisites: &[Prerequisite::Skill(SkillRequirement::new("turn_under_saddle", 60.0))],
        minimum_stats: &[],
        stat_influences: &[
            StatWeight::new(Stat::Agility, 0.3),
            StatWeight::new(Stat::Flexibility, 0.2),
            StatWeight::new(Stat::Intelligence, 0.2),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Agility, 0.06),
            StatWeight::new(Stat::Flexibility, 0.05),
            StatWeight::new(Stat::Balance, 0.03),
        ],
        is_physical: true,
        minimum_age: None,
    },
    SkillDefinition {
        id: "yield_haunches",
        name: "Yield Haunches",
        category: SkillCategory::Intermediate,
        description: "Teach the horse to move the rear end away from pressure.",
        base_training_value: 7,
        prerequisites: &[Prerequisite::Skill(SkillRequirement::new("turn_under_saddle", 60.0))],
        minimum_stats: &[],
        stat_influences: &[
            StatWeight::new(Stat::Agility, 0.3),
            StatWeight::new(Stat::Flexibility, 0.2),
            StatWeight::new(Stat::Intelligence, 0.2),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Agility, 0.06),
            StatWeight::new(Stat::Flexibility, 0.05),
            StatWeight::new(Stat::Balance, 0.03),
        ],
        is_physical: true,
        minimum_age: None,
    },
    SkillDefinition {
        id: "square_halt",
        name: "Square Halt",
        category: SkillCategory::Intermediate,
        description: "Teach the horse to perform a square halt.",
        base_training_value: 7,
        prerequisites: &[Prerequisite::Skill(SkillRequirement::new("halt_under_saddle", 70.0))],
        minimum_stats: &[StatRequirement::new(Stat::Balance, 45.0)],
        stat_influences: &[
            StatWeight::new(Stat::Balance, 0.4),
            StatWeight::new(Stat::Intelligence, 0.2),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Balance, 0.07),
            StatWeight::new(Stat::Strength, 0.04),
        ],
        is_physical: true,
        minimum_age: None,
    },
    SkillDefinition {
        id: "ground_poles_walk",
        name: "Ground Poles - Walk",
        category: SkillCategory::Intermediate,
        description: "Work the horse over ground poles at a walk.",
        base_training_value: 5,
        prerequisites: &[Prerequisite::Skill(SkillRequirement::new("walk_under_saddle", 60.0))],
        minimum_stats: &[],
        stat_influences: &[
            StatWeight::new(Stat::Agility, 0.3),
            StatWeight::new(Stat::Bravery, 0.2),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Agility, 0.05),
            StatWeight::new(Stat::Balance, 0.04),
            StatWeight::new(Stat::Bravery, 0.03),
        ],
        is_physical: true,
        minimum_age: None,
    },
    SkillDefinition {
        id: "ground_poles_trot",
        name: "Ground Poles - Trot",
        category: SkillCategory::Intermediate,
        description: "Work the horse over ground poles at a trot.",
        base_training_value: 6,
        prerequisites: &[Prerequisite::Skill(SkillRequirement::new("trot_under_saddle", 60.0))],
        minimum_stats: &[],
        stat_influences: &[
            StatWeight::new(Stat::Agility, 0.3),
            StatWeight::new(Stat::Balance, 0.2),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Agility, 0.06),
            StatWeight::new(Stat::Balance, 0.05),
            StatWeight::new(Stat::Stamina, 0.03),
        ],
        is_physical: true,
        minimum_age: None,
    },
    SkillDefinition {
        id: "ground_poles_canter",
        name: "Ground Poles - Canter",
        category: SkillCategory::Intermediate,
        description: "Work the horse over ground poles at a canter.",
        base_training_value: 7,
        prerequisites: &[Prerequisite::Skill(SkillRequirement::new("canter_under_saddle", 60.0))],
        minimum_stats: &[],
        stat_influences: &[
            StatWeight::new(Stat::Agility, 0.3),
            StatWeight::new(Stat::Balance, 0.2),
            StatWeight::new(Stat::Stamina, 0.2),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Agility, 0.07),
            StatWeight::new(Stat::Balance, 0.05),
            StatWeight::new(Stat::Stamina, 0.04),
        ],
        is_physical: true,
        minimum_age: None,
    },
    SkillDefinition {
        id: "sidepass",
        name: "Sidepass",
        category: SkillCategory::Intermediate,
        description: "Teach the horse to move laterally.",
        base_training_value: 8,
        prerequisites: &[
            Prerequisite::Skill(SkillRequirement::new("yield_forehand", 50.0)),
            Prerequisite::Skill(SkillRequirement::new("yield_haunches", 50.0)),
        ],
        minimum_stats: &[],
        stat_influences: &[
            StatWeight::new(Stat::Agility, 0.3),
            StatWeight::new(Stat::Flexibility, 0.3),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Agility, 0.07),
            StatWeight::new(Stat::Flexibility, 0.06),
            StatWeight::new(Stat::Balance, 0.04),
        ],
        is_physical: true,
        minimum_age: None,
    },
    SkillDefinition {
        id: "cavaletti",
        name: "Cavaletti",
        category: SkillCategory::Intermediate,
        description: "Work the horse over elevated poles.",
        base_training_value: 7,
        prerequisites: &[Prerequisite::Skill(SkillRequirement::new("ground_poles_walk", 40.0))],
        minimum_stats: &[],
        stat_influences: &[
            StatWeight::new(Stat::Agility, 0.3),
            StatWeight::new(Stat::Balance, 0.2),
            StatWeight::new(Stat::Bravery, 0.2),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Agility, 0.08),
            StatWeight::new(Stat::Balance, 0.06),
            StatWeight::new(Stat::Strength, 0.04),
        ],
        is_physical: true,
        minimum_age: None,
    },
    SkillDefinition {
        id: "transitions",
        name: "Transitions",
        category: SkillCategory::Intermediate,
        description: "Teach the horse to transition smoothly between gaits.",
        base_training_value: 4,
        prerequisites: &[
            Prerequisite::Skill(SkillRequirement::new("walk_under_saddle", 30.0)),
            Prerequisite::Skill(SkillRequirement::new("trot_under_saddle", 30.0)),
            Prerequisite::Skill(SkillRequirement::new("canter_under_saddle", 30.0)),
        ],
        minimum_stats: &[],
        stat_influences: &[
            StatWeight::new(Stat::Balance, 0.4),
            StatWeight::new(Stat::Intelligence, 0.2),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Balance, 0.07),
            StatWeight::new(Stat::Agility, 0.05),
            StatWeight::new(Stat::Stamina, 0.03),
        ],
        is_physical: true,
        minimum_age: None,
    },
    SkillDefinition {
        id: "jumping",
        name: "Jumping",
        category: SkillCategory::Discipline,
        description: "Teaching the horse to jump obstacles",
        base_training_value: 8,
        prerequisites: &[
            Prerequisite::Skill(SkillRequirement::new("trot_under_saddle", 70.0)),
            Prerequisite::Skill(SkillRequirement::new("cavaletti", 60.0)),
        ],
        minimum_stats: &[
            StatRequirement::new(Stat::Strength, 30.0),
            StatRequirement::new(Stat::Balance, 30.0),
            StatRequirement::new(Stat::Agility, 25.0),
            StatRequirement::new(Stat::Bravery, 20.0),
        ],
        stat_influences: &[
            StatWeight::new(Stat::Bravery, 0.3),
            StatWeight::new(Stat::Strength, 0.3),
            StatWeight::new(Stat::Agility, 0.2),
            StatWeight::new(Stat::Balance, 0.2),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Strength, 0.05),
            StatWeight::new(Stat::Agility, 0.04),
            StatWeight::new(Stat::Balance, 0.04),
            StatWeight::new(Stat::Bravery, 0.02),
            StatWeight::new(Stat::Stamina, 0.02),
        ],
        is_physical: true,
        minimum_age: Some(RIDING_AGE),
    },
    SkillDefinition {
        id: "collection",
        name: "Collected Gaits",
        category: SkillCategory::Advanced,
        description: "Teach the horse to collect itself while moving.",
        base_training_value: 8,
        prerequisites: &[
            Prerequisite::Skill(SkillRequirement::new("self_carriage", 70.0)),
            Prerequisite::Skill(SkillRequirement::new("transitions", 60.0)),
        ],
        minimum_stats: &[],
        stat_influences: &[
            StatWeight::new(Stat::Balance, 0.3),
            StatWeight::new(Stat::Strength, 0.3),
            StatWeight::new(Stat::Flexibility, 0.2),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Balance, 0.09),
            StatWeight::new(Stat::Strength, 0.08),
            StatWeight::new(Stat::Flexibility, 0.06),
        ],
        is_physical: true,
        minimum_age: None,
    },
    SkillDefinition {
        id: "extension",
        name: "Extended Gaits",
        category: SkillCategory::Advanced,
        description: "Teach the horse to extend itself while moving.",
        base_training_value: 8,
        prerequisites: &[
            Prerequisite::Skill(SkillRequirement::new("self_carriage", 70.0)),
            Prerequisite::Skill(SkillRequirement::new("transitions", 60.0)),
        ],
        minimum_stats: &[],
        stat_influences: &[
            StatWeight::new(Stat::Strength, 0.3),
            StatWeight::new(Stat::Stamina, 0.3),
            StatWeight::new(Stat::Flexibility, 0.2),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Strength, 0.09),
            StatWeight::new(Stat::Stamina, 0.08),
            StatWeight::new(Stat::Movement, 0.06),
        ],
        is_physical: true,
        minimum_age: None,
    },
    SkillDefinition {
        id: "slow_spin",
        name: "Turn on the Haunches",
        category: SkillCategory::Advanced,
        description: "Teach the horse to turn while keeping a rear hoof planted.",
        base_training_value: 6,
        prerequisites: &[Prerequisite::Skill(SkillRequirement::new("yield_haunches", 70.0))],
        minimum_stats: &[],
        stat_influences: &[
            StatWeight::new(Stat::Agility, 0.3),
            StatWeight::new(Stat::Balance, 0.3),
            StatWeight::new(Stat::Flexibility, 0.2),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Agility, 0.08),
            StatWeight::new(Stat::Balance, 0.07),
            StatWeight::new(Stat::Flexibility, 0.05),
        ],
        is_physical: true,
        minimum_age: None,
    },
    SkillDefinition {
        id: "turn_on_forehand",
        name: "Turn on the Forehand",
        category: SkillCategory::Advanced,
        description: "Teach the horse to turn while keeping a front hoof planted.",
        base_training_value: 6,
        prerequisites: &[Prerequisite::Skill(SkillRequirement::new("yield_forehand", 70.0))],
        minimum_stats: &[],
        stat_influences: &[
            StatWeight::new(Stat::Agility, 0.3),
            StatWeight::new(Stat::Flexibility, 0.3),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Agility, 0.08),
            StatWeight::new(Stat::Flexibility, 0.06),
            StatWeight::new(Stat::Balance, 0.05),
        ],
        is_physical: true,
        minimum_age: None,
    },
    SkillDefinition {
        id: "halfpass",
        name: "Halfpass",
        category: SkillCategory::Advanced,
        description: "Teach the horse to move laterally while maintaining forward momentum.",
        base_training_value: 9,
        prerequisites: &[
            Prerequisite::Skill(SkillRequirement::new("sidepass", 70.0)),
            Prerequisite::Skill(SkillRequirement::new("self_carriage", 60.0)),
        ],
        minimum_stats: &[],
        stat_influences: &[
            StatWeight::new(Stat::Agility, 0.3),
            StatWeight::new(Stat::Flexibility, 0.3),
            StatWeight::new(Stat::Balance, 0.2),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Agility, 0.09),
            StatWeight::new(Stat::Flexibility, 0.07),
            StatWeight::new(Stat::Balance, 0.06),
        ],
        is_physical: true,
        minimum_age: None,
    },
    SkillDefinition {
        id: "pole_sidepass",
        name: "Sidepass Over Poles",
        category: SkillCategory::Advanced,
        description: "Teach the horse to move laterally while straddling a pole.",
        base_training_value: 8,
        prerequisites: &[
            Prerequisite::Skill(SkillRequirement::new("sidepass", 70.0)),
            Prerequisite::Skill(SkillRequirement::new("ground_poles_walk", 60.0)),
        ],
        minimum_stats: &[],
        stat_influences: &[
            StatWeight::new(Stat::Agility, 0.4),
            StatWeight::new(Stat::Flexibility, 0.2),
            StatWeight::new(Stat::Bravery, 0.2),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Agility, 0.09),
            StatWeight::new(Stat::Flexibility, 0.06),
            StatWeight::new(Stat::Balance, 0.05),
        ],
        is_physical: true,
        minimum_age: None,
    },
    SkillDefinition {
        id: "lead_changes_simple",
        name: "Simple Lead Changes",
        category: SkillCategory::Advanced,
        description: "Teach the horse to change canter leads by transitioning through trot.",
        base_training_value: 6,
        prerequisites: &[
            Prerequisite::Skill(SkillRequirement::new("canter_under_saddle", 80.0)),
            Prerequisite::Skill(SkillRequirement::new("trot_under_saddle", 80.0)),
            Prerequisite::Skill(SkillRequirement::new("transitions", 70.0)),
        ],
        minimum_stats: &[],
        stat_influences: &[
            StatWeight::new(Stat::Balance, 0.4),
            StatWeight::new(Stat::Agility, 0.2),
            StatWeight::new(Stat::Intelligence, 0.2),
        ],
        stat_contributions: &[
            StatWeight::new(Stat::Balance, 0.08),
            StatWeight::new(Stat::Agility, 0.06),
            StatWeight::new(Stat::Flexibility, 0.05),
        ],
        is_physical: true,
        minimum_age: None,
    },
];

/// Every skill, in catalog order.
pub fn all_skills() -> &'static [SkillDefinition] {
    SKILLS
}

/// Every skill id, in catalog order.
pub fn all_skill_ids() -> impl Iterator<Item = &'static str> {
    SKILLS.iter().map(|skill| skill.id)
}

/// Look up a skill by id.
pub fn skill(id: &str) -> Option<&'static SkillDefinition> {
    SKILLS.iter().find(|skill| skill.id == id)
}

/// Look up a skill by id, failing for ids outside the catalog.
pub fn require_skill(id: &str) -> Result<&'static SkillDefinition, TrainingError> {
    skill(id).ok_or_else(|| TrainingError::UnknownSkill {
        skill_id: id.to_owned(),
    })
}

/// Skills of one category.
pub fn skills_in_category(
    category: SkillCategory,
) -> impl Iterator<Item = &'static SkillDefinition> {
    SKILLS.iter().filter(move |skill| skill.category == category)
}

/// Skills with no prerequisites, trainable by any horse of age.
pub fn foundation_skills() -> impl Iterator<Item = &'static SkillDefinition> {
    SKILLS.iter().filter(|skill| skill.prerequisites.is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn ids_are_unique() {
        let ids: BTreeSet<&str> = all_skill_ids().collect();
        assert_eq!(ids.len(), all_skills().len());
    }

    #[test]
    fn every_prerequisite_resolves() {
        for def in all_skills() {
            for prereq in def.prerequisites {
                for id in prereq.skill_ids() {
                    assert!(skill(id).is_some(), "{} requires unknown skill {id}", def.id);
                    assert_ne!(id, def.id, "{} requires itself", def.id);
                }
            }
        }
    }

    #[test]
    fn base_training_values_in_range() {
        for def in all_skills() {
            assert!((1..=10).contains(&def.base_training_value), "{}", def.id);
        }
    }

    #[test]
    fn prerequisite_levels_are_percentages() {
        for def in all_skills() {
            for prereq in def.prerequisites {
                let reqs = match prereq {
                    Prerequisite::Skill(req) => std::slice::from_ref(req),
                    Prerequisite::AnyOf { any_of } => any_of,
                };
                for req in reqs {
                    assert!((0.0..=100.0).contains(&req.min_level), "{}", def.id);
                }
            }
        }
    }

    #[test]
    fn lookup_and_queries() {
        let halter = skill("haltering").unwrap();
        assert_eq!(halter.category, SkillCategory::Foundation);
        assert!(halter.prerequisites.is_empty());
        assert!(skill("flying").is_none());
        assert!(matches!(
            require_skill("flying"),
            Err(TrainingError::UnknownSkill { skill_id }) if skill_id == "flying"
        ));

        assert!(skills_in_category(SkillCategory::Care).all(SkillDefinition::is_care));
        assert!(skills_in_category(SkillCategory::Care).any(|s| s.id == "grooming"));
        assert!(foundation_skills().any(|s| s.id == "brushing"));
        assert!(foundation_skills().all(|s| s.prerequisites.is_empty()));
    }

    #[test]
    fn ridden_skills_carry_an_age_gate() {
        assert_eq!(skill("walk_under_saddle").unwrap().minimum_age, Some(RIDING_AGE));
        assert_eq!(skill("mounting").unwrap().minimum_age, Some(RIDING_AGE));
        assert_eq!(skill("haltering").unwrap().minimum_age, None);
    }

    #[test]
    fn prerequisites_serialize_in_catalog_shape() {
        let bathing = skill("bathing").unwrap();
        let json = serde_json::to_value(bathing.prerequisites).unwrap();
        assert_eq!(json[0]["skill"], "haltering");
        assert_eq!(json[0]["minLevel"], 25.0);
        assert_eq!(json[1]["anyOf"][1]["skill"], "tying");
    }

    #[test]
    fn prerequisite_graph_is_acyclic() {
        fn visit(id: &str, stack: &mut Vec<&'static str>) {
            let def = skill(id).unwrap();
            assert!(!stack.contains(&def.id), "cycle through {}", def.id);
            stack.push(def.id);
            for prereq in def.prerequisites {
                for next in prereq.skill_ids() {
                    visit(next, stack);
                }
            }
            stack.pop();
        }
        for id in all_skill_ids() {
            visit(id, &mut Vec::new());
        }
    }
}
