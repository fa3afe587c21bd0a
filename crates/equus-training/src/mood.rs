//! Mood and fatigue.
//!
//! A horse's mood is set once a day from how well its needs were met, then
//! nudged by training sessions: a physical workout focuses an energetic
//! horse, grooming settles an anxious one, and any session can leave the
//! horse confused. Fatigue builds with work and recovers overnight.

use equus_types::{Horse, MAX_FATIGUE, MentalState, Mood, NeedChannel, SessionDuration};
use rand::Rng;
use tracing::debug;

use crate::satisfaction::get_unmet_needs;

/// Fatigue shed every night.
pub const DAILY_FATIGUE_RECOVERY: f64 = 20.0;

/// Fatigue at or above which a horse is overworked.
pub const OVERWORKED_FATIGUE: f64 = 80.0;

/// Fatigue at or above which a horse should be rested.
pub const REST_DAY_FATIGUE: f64 = 60.0;

/// Chance of an off day when all needs are met.
const GRUMPY_CHANCE: f64 = 0.05;

/// Nutrition below which unmet nutrition means depression.
const SEVERE_HUNGER: u32 = 40;

/// Skill that settles an anxious horse.
const GROOMING: &str = "grooming";

// ---------------------------------------------------------------------------
// Mood tables
// ---------------------------------------------------------------------------

/// Base multiplier a mood applies to training.
///
/// Moods whose effect depends on the session (`Pent-up`, `Energetic`,
/// `Sassy`, `Confused`, `Intrigued`) are resolved in the training formula;
/// the value here is their neutral baseline.
pub const fn mood_modifier(mood: Mood) -> f64 {
    match mood {
        Mood::ShutDown => 0.0,
        Mood::Depressed => 0.2,
        Mood::BurntOut => 0.3,
        Mood::Withdrawn | Mood::Anxious => 0.5,
        Mood::Tired => 0.6,
        Mood::Grumpy => 0.7,
        Mood::Apathetic
        | Mood::Calm
        | Mood::Satisfied
        | Mood::PentUp
        | Mood::Sassy
        | Mood::Confused => 1.0,
        Mood::Cheerful => 1.1,
        Mood::Perky => 1.15,
        Mood::Eager => 1.2,
        Mood::Energetic => 1.25,
        Mood::Intrigued => 1.3,
        Mood::Focused => 1.4,
    }
}

/// Player-facing advice for a mood.
pub const fn mood_description(mood: Mood) -> &'static str {
    match mood {
        Mood::ShutDown => "This horse has been pushed too hard and will not make progress.",
        Mood::BurntOut => "This horse has been pushed to its limit. Give it a break.",
        Mood::Depressed => "This horse is severely neglected. Check its nutrition and care.",
        Mood::Tired => "This horse needs rest or lighter training.",
        Mood::Withdrawn => "This horse is being neglected. Check its care requirements.",
        Mood::PentUp => "This horse needs more exercise. Physical training recommended.",
        Mood::Anxious => "This horse is stressed. Consider desensitization work or rest.",
        Mood::Grumpy => "This horse is having an off day. Progress will be slower.",
        Mood::Apathetic => "This horse is content but not engaged in training.",
        Mood::Calm => "This horse is ready to work.",
        Mood::Cheerful => "This horse is happy and ready to learn.",
        Mood::Satisfied => "This horse is content with its routine.",
        Mood::Sassy => "This horse is feeling spirited! Progress will vary.",
        Mood::Perky => "This horse is eager and will learn quickly.",
        Mood::Energetic => "This horse is ready for a good workout.",
        Mood::Confused => "This horse is uncertain. Repeat training or switch tasks.",
        Mood::Intrigued => "This horse is fascinated! Excellent learning opportunity.",
        Mood::Eager => "This horse is highly motivated to work.",
        Mood::Focused => "This horse is in the zone! Exceptional learning.",
    }
}

// ---------------------------------------------------------------------------
// Daily mood
// ---------------------------------------------------------------------------

/// Positive mood for a uniform roll in `[0, 1)`.
pub fn mood_from_roll(roll: f64) -> Mood {
    if roll < 0.15 {
        Mood::Eager
    } else if roll < 0.30 {
        Mood::Perky
    } else if roll < 0.45 {
        Mood::Cheerful
    } else if roll < 0.60 {
        Mood::Energetic
    } else if roll < 0.75 {
        Mood::Satisfied
    } else if roll < 0.85 {
        Mood::Sassy
    } else {
        Mood::Calm
    }
}

/// Mood for the coming day, from yesterday's satisfaction.
///
/// Must run before the daily satisfaction reset. Severe hunger means
/// depression. Two or more unmet needs, or hunger alone, mean withdrawal,
/// and missing exercise alone leaves the horse pent-up. A lone
/// stimulation or socialization shortfall has no mood of its own and rolls
/// like a contented horse.
pub fn calculate_daily_mood(horse: &Horse, rng: &mut impl Rng) -> Mood {
    let satisfaction = &horse.satisfaction;
    let unmet = get_unmet_needs(satisfaction);

    let nutrition_unmet = unmet.contains(&NeedChannel::Nutrition);
    let mood = if nutrition_unmet && satisfaction.nutrition.current < SEVERE_HUNGER {
        Mood::Depressed
    } else if unmet.len() >= 2 {
        Mood::Withdrawn
    } else if unmet.contains(&NeedChannel::Exercise) {
        Mood::PentUp
    } else if nutrition_unmet {
        Mood::Withdrawn
    } else if rng.random::<f64>() < GRUMPY_CHANCE {
        Mood::Grumpy
    } else {
        mood_from_roll(rng.random::<f64>())
    };

    debug!(
        horse = %horse.name,
        unmet = unmet.len(),
        mood = %mood,
        "Daily mood"
    );
    mood
}

// ---------------------------------------------------------------------------
// Session transitions
// ---------------------------------------------------------------------------

/// Mood after a session on `skill_id`, or `None` to keep the current one.
pub fn check_mood_transition(
    mental_state: &MentalState,
    skill_id: &str,
    is_physical: bool,
) -> Option<Mood> {
    match mental_state.mood {
        Mood::Energetic if is_physical => Some(Mood::Focused),
        Mood::Anxious if skill_id == GROOMING => Some(Mood::Focused),
        Mood::Confused => {
            if mental_state.previous_skill.as_deref() == Some(skill_id) {
                if mental_state.personality.tractability() > 0 {
                    Some(Mood::Intrigued)
                } else {
                    Some(Mood::Anxious)
                }
            } else {
                Some(mental_state.previous_mood.unwrap_or(Mood::Calm))
            }
        }
        _ => None,
    }
}

/// Chance a session at `skill_level` confuses the horse: 1% for an
/// untrained skill falling to a floor of 0.1%.
pub fn confusion_chance(skill_level: f64) -> f64 {
    ((100.0 - skill_level) / 10_000.0).max(0.001)
}

/// Roll for confusion after a session.
pub fn check_for_confusion(skill_level: f64, rng: &mut impl Rng) -> bool {
    rng.random::<f64>() < confusion_chance(skill_level)
}

// ---------------------------------------------------------------------------
// Fatigue
// ---------------------------------------------------------------------------

/// Training multiplier from fatigue: 1 when fresh, 0 when exhausted.
pub fn get_fatigue_modifier(fatigue: f64) -> f64 {
    (1.0 - fatigue / MAX_FATIGUE).max(0.0)
}

/// Fatigue after a non-care session: half a point a minute of physical
/// work, a fifth of a point otherwise, capped at [`MAX_FATIGUE`].
pub fn update_fatigue(current: f64, duration: SessionDuration, is_physical: bool) -> f64 {
    let rate = if is_physical { 0.5 } else { 0.2 };
    f64::from(duration.minutes())
        .mul_add(rate, current)
        .min(MAX_FATIGUE)
}

/// Fatigue after resting off `amount`, never below zero.
pub fn reduce_fatigue(current: f64, amount: f64) -> f64 {
    (current - amount).max(0.0)
}

/// Whether the horse is too tired for anything but care work.
pub fn is_overworked(horse: &Horse) -> bool {
    horse.mental_state.fatigue >= OVERWORKED_FATIGUE
}

/// Whether the horse should get a day off.
pub fn needs_rest_day(horse: &Horse) -> bool {
    horse.mental_state.fatigue >= REST_DAY_FATIGUE
        || matches!(horse.mental_state.mood, Mood::Tired | Mood::BurntOut)
}

#[cfg(test)]
mod tests {
    use equus_types::{NeedLevel, Personality, Satisfaction};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::test_support::horse;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn with_needs(
        exercise: (u32, u32),
        stim: (u32, u32),
        social: (u32, u32),
        food: (u32, u32),
    ) -> Horse {
        let mut h = horse(6, Personality::Indifferent);
        h.satisfaction = Satisfaction {
            exercise: NeedLevel::new(exercise.0, exercise.1),
            stimulation: NeedLevel::new(stim.0, stim.1),
            socialization: NeedLevel::new(social.0, social.1),
            nutrition: NeedLevel::new(food.0, food.1),
        };
        h
    }

    const POSITIVE: [Mood; 8] = [
        Mood::Grumpy,
        Mood::Eager,
        Mood::Perky,
        Mood::Cheerful,
        Mood::Energetic,
        Mood::Satisfied,
        Mood::Sassy,
        Mood::Calm,
    ];

    #[test]
    fn roll_bands() {
        assert_eq!(mood_from_roll(0.0), Mood::Eager);
        assert_eq!(mood_from_roll(0.149), Mood::Eager);
        assert_eq!(mood_from_roll(0.15), Mood::Perky);
        assert_eq!(mood_from_roll(0.30), Mood::Cheerful);
        assert_eq!(mood_from_roll(0.45), Mood::Energetic);
        assert_eq!(mood_from_roll(0.60), Mood::Satisfied);
        assert_eq!(mood_from_roll(0.75), Mood::Sassy);
        assert_eq!(mood_from_roll(0.85), Mood::Calm);
        assert_eq!(mood_from_roll(0.999), Mood::Calm);
    }

    #[test]
    fn neglect_moods_take_priority() {
        let mut rng = SmallRng::seed_from_u64(42);
        let starving = with_needs((0, 30), (0, 0), (0, 0), (39, 80));
        assert_eq!(calculate_daily_mood(&starving, &mut rng), Mood::Depressed);

        let hungry = with_needs((0, 0), (0, 0), (0, 0), (60, 80));
        assert_eq!(calculate_daily_mood(&hungry, &mut rng), Mood::Withdrawn);

        let neglected = with_needs((0, 30), (0, 25), (0, 0), (80, 80));
        assert_eq!(calculate_daily_mood(&neglected, &mut rng), Mood::Withdrawn);

        let restless = with_needs((10, 30), (0, 0), (0, 0), (80, 80));
        assert_eq!(calculate_daily_mood(&restless, &mut rng), Mood::PentUp);
    }

    #[test]
    fn lone_stimulation_shortfall_rolls_positive() {
        let mut rng = SmallRng::seed_from_u64(7);
        let bored = with_needs((30, 30), (0, 25), (20, 20), (80, 80));
        for _ in 0..200 {
            assert!(POSITIVE.contains(&calculate_daily_mood(&bored, &mut rng)));
        }
    }

    #[test]
    fn contented_horse_is_mostly_positive_and_sometimes_grumpy() {
        let mut rng = SmallRng::seed_from_u64(42);
        let content = with_needs((0, 0), (0, 0), (0, 0), (100, 80));
        let moods: Vec<Mood> = (0..2000)
            .map(|_| calculate_daily_mood(&content, &mut rng))
            .collect();
        assert!(moods.iter().all(|m| POSITIVE.contains(m)));
        let grumpy = moods.iter().filter(|m| **m == Mood::Grumpy).count();
        // Expect about 100 of 2000.
        assert!((50..=160).contains(&grumpy), "grumpy {grumpy}");
    }

    #[test]
    fn energetic_focuses_on_physical_work() {
        let mut state = MentalState::new(Personality::Willing, Mood::Energetic);
        assert_eq!(check_mood_transition(&state, "lunging_free", true), Some(Mood::Focused));
        assert_eq!(check_mood_transition(&state, "haltering", false), None);

        state.mood = Mood::Anxious;
        assert_eq!(check_mood_transition(&state, "grooming", false), Some(Mood::Focused));
        assert_eq!(check_mood_transition(&state, "brushing", false), None);

        state.mood = Mood::Calm;
        assert_eq!(check_mood_transition(&state, "lunging_free", true), None);
    }

    #[test]
    fn confusion_resolves_by_skill_and_tractability() {
        let mut state = MentalState::new(Personality::Willing, Mood::Confused);
        state.previous_skill = Some("leading".to_owned());
        state.previous_mood = Some(Mood::Cheerful);

        assert_eq!(check_mood_transition(&state, "leading", false), Some(Mood::Intrigued));
        assert_eq!(check_mood_transition(&state, "standing", false), Some(Mood::Cheerful));

        state.personality = Personality::Stubborn;
        assert_eq!(check_mood_transition(&state, "leading", false), Some(Mood::Anxious));

        // Indifferent has zero tractability.
        state.personality = Personality::Indifferent;
        assert_eq!(check_mood_transition(&state, "leading", false), Some(Mood::Anxious));

        state.previous_mood = None;
        assert_eq!(check_mood_transition(&state, "standing", false), Some(Mood::Calm));
    }

    #[test]
    fn confusion_chance_bounds() {
        assert!(approx(confusion_chance(0.0), 0.01));
        assert!(approx(confusion_chance(90.0), 0.001));
        assert!(approx(confusion_chance(100.0), 0.001));
        assert!(approx(confusion_chance(50.0), 0.005));

        let mut rng = SmallRng::seed_from_u64(3);
        let hits = (0..20_000)
            .filter(|_| check_for_confusion(0.0, &mut rng))
            .count();
        // Expect about 200.
        assert!((120..=280).contains(&hits), "hits {hits}");
    }

    #[test]
    fn fatigue_accrues_and_recovers() {
        assert!(approx(update_fatigue(10.0, SessionDuration::Thirty, true), 25.0));
        assert!(approx(update_fatigue(10.0, SessionDuration::Thirty, false), 16.0));
        assert!(approx(update_fatigue(90.0, SessionDuration::Sixty, true), 100.0));
        assert!(approx(reduce_fatigue(15.0, DAILY_FATIGUE_RECOVERY), 0.0));
        assert!(approx(reduce_fatigue(50.0, DAILY_FATIGUE_RECOVERY), 30.0));
        assert!(approx(get_fatigue_modifier(0.0), 1.0));
        assert!(approx(get_fatigue_modifier(25.0), 0.75));
        assert!(approx(get_fatigue_modifier(100.0), 0.0));
    }

    #[test]
    fn rest_helpers() {
        let mut h = horse(5, Personality::Willing);
        assert!(!is_overworked(&h));
        assert!(!needs_rest_day(&h));

        h.mental_state.fatigue = 60.0;
        assert!(needs_rest_day(&h));
        assert!(!is_overworked(&h));

        h.mental_state.fatigue = 80.0;
        assert!(is_overworked(&h));

        h.mental_state.fatigue = 0.0;
        h.mental_state.mood = Mood::BurntOut;
        assert!(needs_rest_day(&h));
    }

    #[test]
    fn every_mood_has_modifier_and_description() {
        for mood in Mood::ALL {
            assert!((0.0..=1.4).contains(&mood_modifier(mood)));
            assert!(mood_description(mood).starts_with("This horse"));
        }
        assert!(approx(mood_modifier(Mood::Focused), 1.4));
        assert!(approx(mood_modifier(Mood::ShutDown), 0.0));
    }
}
