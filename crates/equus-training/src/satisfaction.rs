//! Daily needs: how much of each a horse requires, and how much it got.

use equus_types::{
    Horse, Housing, NeedChannel, NeedLevel, Satisfaction, SatisfactionGain, SessionDuration,
};

/// Ceiling of any channel's current value.
pub const MAX_SATISFACTION: u32 = 100;

/// Nutrition every horse needs regardless of housing.
pub const NUTRITION_REQUIRED: u32 = 80;

const STALL_EXERCISE: f64 = 30.0;
const STALL_STIMULATION: f64 = 25.0;
const STALL_SOCIALIZATION: f64 = 20.0;

/// Requirements for the horse's housing, age and personality. Current
/// values are carried over unchanged.
///
/// Pasture horses look after their own exercise, stimulation and company.
/// Stalled horses need all three, young horses need half again as much
/// exercise and horses over 15 need less.
pub fn calculate_satisfaction_requirements(horse: &Horse) -> Satisfaction {
    let current = horse.satisfaction;
    let (exercise, stimulation, socialization) = match horse.housing {
        Housing::Pasture => (0, 0, 0),
        Housing::Stall => {
            let age_multiplier = if horse.age < 5 {
                1.5
            } else if horse.age > 15 {
                0.7
            } else {
                1.0
            };
            let modifiers = horse.mental_state.personality.need_modifiers();
            (
                round_requirement(STALL_EXERCISE * age_multiplier * modifiers.exercise),
                round_requirement(STALL_STIMULATION * modifiers.stimulation),
                round_requirement(STALL_SOCIALIZATION * modifiers.socialization),
            )
        }
    };

    Satisfaction {
        exercise: NeedLevel::new(current.exercise.current, exercise),
        stimulation: NeedLevel::new(current.stimulation.current, stimulation),
        socialization: NeedLevel::new(current.socialization.current, socialization),
        nutrition: NeedLevel::new(current.nutrition.current, NUTRITION_REQUIRED),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_requirement(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

/// Whether every channel has reached its requirement.
pub fn are_satisfaction_needs_met(satisfaction: &Satisfaction) -> bool {
    NeedChannel::ALL
        .into_iter()
        .all(|channel| satisfaction.channel(channel).is_met())
}

/// Channels below their requirement, in exercise, stimulation,
/// socialization, nutrition order.
pub fn get_unmet_needs(satisfaction: &Satisfaction) -> Vec<NeedChannel> {
    [
        NeedChannel::Exercise,
        NeedChannel::Stimulation,
        NeedChannel::Socialization,
        NeedChannel::Nutrition,
    ]
    .into_iter()
    .filter(|channel| !satisfaction.channel(*channel).is_met())
    .collect()
}

/// Add `amount` to one channel, capped at [`MAX_SATISFACTION`].
pub fn add_satisfaction(
    satisfaction: &Satisfaction,
    channel: NeedChannel,
    amount: u32,
) -> Satisfaction {
    let mut updated = *satisfaction;
    let level = updated.channel_mut(channel);
    level.current = level.current.saturating_add(amount).min(MAX_SATISFACTION);
    updated
}

/// Add everything a training session earned.
pub fn apply_satisfaction_gain(
    satisfaction: &Satisfaction,
    gain: SatisfactionGain,
) -> Satisfaction {
    let updated = add_satisfaction(satisfaction, NeedChannel::Exercise, gain.exercise);
    let updated = add_satisfaction(&updated, NeedChannel::Stimulation, gain.stimulation);
    add_satisfaction(&updated, NeedChannel::Socialization, gain.socialization)
}

/// Start-of-day reset: exercise, stimulation and socialization go back to
/// zero. Nutrition is only topped up by feeding, so it carries over.
pub fn reset_daily_satisfaction(satisfaction: &Satisfaction) -> Satisfaction {
    Satisfaction {
        exercise: NeedLevel::new(0, satisfaction.exercise.required),
        stimulation: NeedLevel::new(0, satisfaction.stimulation.required),
        socialization: NeedLevel::new(0, satisfaction.socialization.required),
        nutrition: satisfaction.nutrition,
    }
}

/// Satisfaction earned by a session. Physical work counts four times as
/// much exercise; every session stimulates and gives company.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn calculate_training_satisfaction(
    duration: SessionDuration,
    is_physical: bool,
) -> SatisfactionGain {
    let minutes = f64::from(duration.minutes());
    let exercise_rate = if is_physical { 2.0 } else { 0.5 };
    SatisfactionGain {
        exercise: (exercise_rate * minutes).round() as u32,
        stimulation: (1.5 * minutes).round() as u32,
        socialization: (0.5 * minutes).round() as u32,
    }
}

#[cfg(test)]
mod tests {
    use equus_types::Personality;

    use super::*;
    use crate::test_support::horse;

    #[test]
    fn pasture_only_requires_nutrition() {
        let mut h = horse(3, Personality::Bold);
        h.satisfaction.exercise.current = 12;
        let req = calculate_satisfaction_requirements(&h);
        assert_eq!(req.exercise, NeedLevel::new(12, 0));
        assert_eq!(req.stimulation.required, 0);
        assert_eq!(req.socialization.required, 0);
        assert_eq!(req.nutrition.required, 80);
    }

    #[test]
    fn stall_requirements_scale_by_age_and_personality() {
        let mut h = horse(8, Personality::Indifferent);
        h.housing = Housing::Stall;
        let req = calculate_satisfaction_requirements(&h);
        assert_eq!(req.exercise.required, 30);
        assert_eq!(req.stimulation.required, 25);
        assert_eq!(req.socialization.required, 20);
        assert_eq!(req.nutrition.required, 80);

        h.age = 3;
        assert_eq!(calculate_satisfaction_requirements(&h).exercise.required, 45);
        h.age = 20;
        assert_eq!(calculate_satisfaction_requirements(&h).exercise.required, 21);

        // Curious: 1.1 exercise, 1.3 stimulation, 1.1 socialization.
        h.age = 8;
        h.mental_state.personality = Personality::Curious;
        let req = calculate_satisfaction_requirements(&h);
        assert_eq!(req.exercise.required, 33);
        assert_eq!(req.stimulation.required, 33);
        assert_eq!(req.socialization.required, 22);
    }

    #[test]
    fn unmet_needs_in_channel_order() {
        let s = Satisfaction {
            exercise: NeedLevel::new(0, 30),
            stimulation: NeedLevel::new(30, 25),
            socialization: NeedLevel::new(0, 20),
            nutrition: NeedLevel::new(50, 80),
        };
        assert!(!are_satisfaction_needs_met(&s));
        assert_eq!(
            get_unmet_needs(&s),
            [
                NeedChannel::Exercise,
                NeedChannel::Socialization,
                NeedChannel::Nutrition
            ]
        );

        let met = Satisfaction {
            nutrition: NeedLevel::new(80, 80),
            ..Satisfaction::default()
        };
        assert!(are_satisfaction_needs_met(&met));
        assert!(get_unmet_needs(&met).is_empty());
    }

    #[test]
    fn add_caps_at_one_hundred() {
        let s = Satisfaction::default();
        let s = add_satisfaction(&s, NeedChannel::Exercise, 70);
        let s = add_satisfaction(&s, NeedChannel::Exercise, 70);
        assert_eq!(s.exercise.current, 100);
        let s = add_satisfaction(&s, NeedChannel::Nutrition, u32::MAX);
        assert_eq!(s.nutrition.current, 100);
    }

    #[test]
    fn reset_keeps_requirements_and_nutrition() {
        let s = Satisfaction {
            exercise: NeedLevel::new(40, 30),
            stimulation: NeedLevel::new(40, 25),
            socialization: NeedLevel::new(40, 20),
            nutrition: NeedLevel::new(90, 80),
        };
        let reset = reset_daily_satisfaction(&s);
        assert_eq!(reset.exercise, NeedLevel::new(0, 30));
        assert_eq!(reset.stimulation, NeedLevel::new(0, 25));
        assert_eq!(reset.socialization, NeedLevel::new(0, 20));
        assert_eq!(reset.nutrition, NeedLevel::new(90, 80));
    }

    #[test]
    fn training_satisfaction_by_duration() {
        let physical = calculate_training_satisfaction(SessionDuration::Thirty, true);
        assert_eq!(
            physical,
            SatisfactionGain {
                exercise: 60,
                stimulation: 45,
                socialization: 15,
            }
        );
        let calm = calculate_training_satisfaction(SessionDuration::Five, false);
        // 2.5 and 7.5 round half away from zero.
        assert_eq!(calm.exercise, 3);
        assert_eq!(calm.stimulation, 8);
        assert_eq!(calm.socialization, 3);
    }

    #[test]
    fn gains_apply_per_channel() {
        let s = apply_satisfaction_gain(
            &Satisfaction::default(),
            SatisfactionGain {
                exercise: 60,
                stimulation: 45,
                socialization: 150,
            },
        );
        assert_eq!(s.exercise.current, 60);
        assert_eq!(s.stimulation.current, 45);
        assert_eq!(s.socialization.current, 100);
        assert_eq!(s.nutrition.current, 0);
    }
}
