//! Training for the Equus horse simulation.
//!
//! Everything that happens when a horse is worked: which skills exist and
//! how they depend on each other, whether a horse may train one today, how
//! much a session achieves, and how it leaves the horse feeling. Functions
//! here read a [`Horse`](equus_types::Horse) and return proposals; the
//! caller owns the horse record and commits changes.
//!
//! # Modules
//!
//! - [`catalog`] -- The static skill table and lookups
//! - [`validation`] -- Training eligibility, trainable and next skills, mastery
//! - [`satisfaction`] -- Daily need requirements, gains and resets
//! - [`mood`] -- Daily mood, session mood transitions, confusion, fatigue
//! - [`formula`] -- The session value formula and [`apply_training`]
//! - [`error`] -- [`TrainingError`]

pub mod catalog;
pub mod error;
pub mod formula;
pub mod mood;
pub mod satisfaction;
pub mod validation;

pub use catalog::{
    Prerequisite, SkillDefinition, SkillRequirement, StatRequirement, StatWeight, all_skill_ids,
    all_skills, foundation_skills, require_skill, skill, skills_in_category,
};
pub use error::TrainingError;
pub use formula::{apply_training, calculate_session_value, training_message};
pub use mood::{
    DAILY_FATIGUE_RECOVERY, calculate_daily_mood, check_for_confusion, check_mood_transition,
    is_overworked, mood_description, mood_modifier, needs_rest_day, reduce_fatigue,
};
pub use satisfaction::{
    add_satisfaction, apply_satisfaction_gain, are_satisfaction_needs_met,
    calculate_satisfaction_requirements, calculate_training_satisfaction, get_unmet_needs,
    reset_daily_satisfaction,
};
pub use validation::{
    MasteryLevel, calculate_skill_progress, get_next_skills, get_skill_mastery_level,
    get_trainable_skills, validate_skill_training,
};

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod test_support {
    //! Horse fixtures shared by the unit tests.

    use std::collections::BTreeMap;

    use equus_types::{
        Agouti, ConformationGene, ConformationGenetics, Extension, GenePair, Gender, Gray, Horse,
        HorseId, Housing, Lineage, MentalState, Mood, NeedLevel, Personality, Satisfaction,
        StatTable, TrainingLevels, VisualGenetics,
    };

    /// A rested, calm, untrained pasture horse with middling genes.
    pub fn horse(age: u32, personality: Personality) -> Horse {
        let conformation = ConformationGene::ALL
            .into_iter()
            .map(|gene| {
                let [_, middle, _] = gene.alphabet();
                (gene, vec![middle; gene.allele_count()])
            })
            .collect();
        Horse {
            id: HorseId::new(),
            name: "Star".to_owned(),
            age,
            gender: Gender::Mare,
            genes: StatTable::from_fn(|_| GenePair::from_values(60.0, 60.0).unwrap()),
            training: TrainingLevels::default(),
            skills: BTreeMap::new(),
            visual_genetics: VisualGenetics {
                extension: [Extension::Dominant, Extension::Recessive],
                agouti: [Agouti::Bay, Agouti::Recessive],
                gray: [Gray::NonGray, Gray::NonGray],
            },
            conformation_genetics: ConformationGenetics::new(conformation).unwrap(),
            mental_state: MentalState::new(personality, Mood::Calm),
            satisfaction: Satisfaction {
                nutrition: NeedLevel::new(100, 80),
                ..Satisfaction::default()
            },
            housing: Housing::Pasture,
            bonds: Vec::new(),
            lineage: Lineage::default(),
            born_at: chrono::Utc::now(),
        }
    }
}
