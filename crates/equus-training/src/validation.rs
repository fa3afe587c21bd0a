//! Whether a horse may train a skill, and the read-only queries built on
//! that check.

use equus_types::{Horse, Mood, TrainingValidation};
use serde::Serialize;

use crate::catalog::{self, Prerequisite, SkillDefinition, SkillRequirement};

/// Youngest age, in years, at which any training is allowed.
pub const MIN_TRAINING_AGE: u32 = 2;

/// Fatigue at or above which non-care training is refused.
pub const FATIGUE_LIMIT: f64 = 80.0;

/// Level at which a skill counts as completed for progress tracking.
pub const COMPLETED_LEVEL: f64 = 80.0;

/// Check, in order: the skill exists, the horse is old enough, rested
/// enough (care skills excepted), not shut down, and meets every
/// prerequisite.
///
/// Minimum stat levels are not checked here. Stat shortfalls slow the
/// session down in the training formula instead.
pub fn validate_skill_training(horse: &Horse, skill_id: &str) -> TrainingValidation {
    let Some(skill) = catalog::skill(skill_id) else {
        return TrainingValidation::rejected(format!("Skill '{skill_id}' not found"));
    };

    if horse.age < MIN_TRAINING_AGE {
        return TrainingValidation::rejected("Horse must be at least 2 years old to train");
    }

    if horse.mental_state.fatigue >= FATIGUE_LIMIT && !skill.is_care() {
        return TrainingValidation::rejected("Horse is too tired to train (fatigue >= 80%)");
    }

    if horse.mental_state.mood == Mood::ShutDown {
        return TrainingValidation::rejected("Horse is shut-down and cannot train");
    }

    let missing = missing_prerequisites(horse, skill);
    if missing.is_empty() {
        return TrainingValidation::allowed();
    }

    TrainingValidation {
        can_train: false,
        reason: Some(format!("Missing prerequisites: {}", missing.join(", "))),
        missing_prerequisites: missing,
    }
}

/// One description per prerequisite entry the horse does not meet.
fn missing_prerequisites(horse: &Horse, skill: &SkillDefinition) -> Vec<String> {
    skill
        .prerequisites
        .iter()
        .filter_map(|prereq| match prereq {
            Prerequisite::Skill(req) => {
                let current = horse.skill_level(req.skill);
                (current < req.min_level).then(|| {
                    format!(
                        "{} (need {}%, have {current:.1}%)",
                        display_name(req),
                        req.min_level
                    )
                })
            }
            Prerequisite::AnyOf { any_of } => {
                let satisfied = any_of
                    .iter()
                    .any(|option| horse.skill_level(option.skill) >= option.min_level);
                (!satisfied).then(|| {
                    let options: Vec<String> = any_of
                        .iter()
                        .map(|option| format!("{} {}%", display_name(option), option.min_level))
                        .collect();
                    format!("Need one of: {}", options.join(" OR "))
                })
            }
        })
        .collect()
}

fn display_name(req: &SkillRequirement) -> &'static str {
    catalog::skill(req.skill).map_or(req.skill, |skill| skill.name)
}

/// Every skill the horse may train right now.
pub fn get_trainable_skills(horse: &Horse) -> Vec<&'static SkillDefinition> {
    catalog::all_skills()
        .iter()
        .filter(|skill| validate_skill_training(horse, skill.id).can_train)
        .collect()
}

/// Skills within reach: blocked only by one or two unmet prerequisite
/// entries.
pub fn get_next_skills(horse: &Horse) -> Vec<&'static SkillDefinition> {
    catalog::all_skills()
        .iter()
        .filter(|skill| {
            let validation = validate_skill_training(horse, skill.id);
            !validation.can_train && (1..=2).contains(&validation.missing_prerequisites.len())
        })
        .collect()
}

/// Share of the catalog, as a percentage, the horse has completed.
#[allow(clippy::cast_precision_loss)]
pub fn calculate_skill_progress(horse: &Horse) -> f64 {
    let skills = catalog::all_skills();
    if skills.is_empty() {
        return 0.0;
    }
    let completed = skills
        .iter()
        .filter(|skill| horse.skill_level(skill.id) >= COMPLETED_LEVEL)
        .count();
    completed as f64 / skills.len() as f64 * 100.0
}

// ---------------------------------------------------------------------------
// Mastery
// ---------------------------------------------------------------------------

/// Named band of a skill level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MasteryLevel {
    /// Never trained.
    Untrained,
    /// Above 0.
    Beginner,
    /// 20 and up.
    Novice,
    /// 40 and up.
    Competent,
    /// 60 and up.
    Proficient,
    /// 75 and up.
    Expert,
    /// 90 and up.
    Master,
}

impl MasteryLevel {
    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Untrained => "Untrained",
            Self::Beginner => "Beginner",
            Self::Novice => "Novice",
            Self::Competent => "Competent",
            Self::Proficient => "Proficient",
            Self::Expert => "Expert",
            Self::Master => "Master",
        }
    }
}

impl core::fmt::Display for MasteryLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Mastery band of a skill level.
pub fn get_skill_mastery_level(level: f64) -> MasteryLevel {
    if level >= 90.0 {
        MasteryLevel::Master
    } else if level >= 75.0 {
        MasteryLevel::Expert
    } else if level >= 60.0 {
        MasteryLevel::Proficient
    } else if level >= 40.0 {
        MasteryLevel::Competent
    } else if level >= 20.0 {
        MasteryLevel::Novice
    } else if level > 0.0 {
        MasteryLevel::Beginner
    } else {
        MasteryLevel::Untrained
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use equus_types::Personality;

    use super::*;
    use crate::test_support::horse;

    #[test]
    fn unknown_skill_is_rejected_by_name() {
        let h = horse(5, Personality::Willing);
        let v = validate_skill_training(&h, "flying");
        assert!(!v.can_train);
        assert_eq!(v.reason.as_deref(), Some("Skill 'flying' not found"));
    }

    #[test]
    fn too_young_to_train() {
        let h = horse(1, Personality::Willing);
        let v = validate_skill_training(&h, "haltering");
        assert_eq!(
            v.reason.as_deref(),
            Some("Horse must be at least 2 years old to train")
        );
        assert!(validate_skill_training(&horse(2, Personality::Willing), "haltering").can_train);
    }

    #[test]
    fn fatigue_blocks_all_but_care() {
        let mut h = horse(5, Personality::Willing);
        h.mental_state.fatigue = 80.0;
        let v = validate_skill_training(&h, "haltering");
        assert_eq!(
            v.reason.as_deref(),
            Some("Horse is too tired to train (fatigue >= 80%)")
        );
        assert!(validate_skill_training(&h, "brushing").can_train);

        h.mental_state.fatigue = 79.9;
        assert!(validate_skill_training(&h, "haltering").can_train);
    }

    #[test]
    fn shut_down_blocks_everything() {
        let mut h = horse(5, Personality::Willing);
        h.mental_state.mood = Mood::ShutDown;
        let v = validate_skill_training(&h, "brushing");
        assert_eq!(v.reason.as_deref(), Some("Horse is shut-down and cannot train"));
    }

    #[test]
    fn missing_plain_prerequisites_are_listed() {
        let mut h = horse(5, Personality::Willing);
        h.skills.insert("haltering".to_owned(), 10.0);
        let v = validate_skill_training(&h, "tying");
        assert!(!v.can_train);
        assert_eq!(v.missing_prerequisites.len(), 3);
        let first = v.missing_prerequisites.first().unwrap();
        assert_eq!(first, "Haltering (need 30%, have 10.0%)");
        assert!(v.reason.unwrap().starts_with("Missing prerequisites: "));
    }

    #[test]
    fn any_of_group_needs_one_option() {
        let mut h = horse(5, Personality::Willing);
        h.skills.insert("haltering".to_owned(), 30.0);
        let v = validate_skill_training(&h, "bathing");
        assert_eq!(
            v.missing_prerequisites,
            ["Need one of: Standing 30% OR Tying 30%"]
        );

        h.skills.insert("tying".to_owned(), 30.0);
        assert!(validate_skill_training(&h, "bathing").can_train);
    }

    #[test]
    fn stat_minimums_do_not_gate() {
        let mut h = horse(5, Personality::Willing);
        h.skills.insert("haltering".to_owned(), 100.0);
        h.skills.insert("standing".to_owned(), 100.0);
        // Clipping expects stolidity 40; the horse has no stat training.
        assert!(validate_skill_training(&h, "clipping").can_train);
    }

    #[test]
    fn trainable_and_next_skills() {
        let h = horse(5, Personality::Willing);
        let trainable = get_trainable_skills(&h);
        assert!(trainable.iter().all(|s| s.prerequisites.is_empty()));
        assert!(trainable.iter().any(|s| s.id == "haltering"));

        let next = get_next_skills(&h);
        assert!(next.iter().any(|s| s.id == "leading"));
        assert!(next.iter().all(|s| !s.prerequisites.is_empty()));
        // Tying has three unmet entries: out of reach.
        assert!(!next.iter().any(|s| s.id == "tying"));
    }

    #[test]
    fn progress_counts_completed_skills() {
        let mut h = horse(5, Personality::Willing);
        assert!(calculate_skill_progress(&h).abs() < f64::EPSILON);
        h.skills.insert("haltering".to_owned(), 80.0);
        h.skills.insert("leading".to_owned(), 79.9);
        #[allow(clippy::cast_precision_loss)]
        let expected = 100.0 / catalog::all_skills().len() as f64;
        assert!((calculate_skill_progress(&h) - expected).abs() < 1e-9);
    }

    #[test]
    fn mastery_bands() {
        assert_eq!(get_skill_mastery_level(0.0), MasteryLevel::Untrained);
        assert_eq!(get_skill_mastery_level(0.1), MasteryLevel::Beginner);
        assert_eq!(get_skill_mastery_level(20.0), MasteryLevel::Novice);
        assert_eq!(get_skill_mastery_level(40.0), MasteryLevel::Competent);
        assert_eq!(get_skill_mastery_level(60.0), MasteryLevel::Proficient);
        assert_eq!(get_skill_mastery_level(75.0), MasteryLevel::Expert);
        assert_eq!(get_skill_mastery_level(89.9), MasteryLevel::Expert);
        assert_eq!(get_skill_mastery_level(90.0), MasteryLevel::Master);
        assert_eq!(MasteryLevel::Master.to_string(), "Master");
    }
}
