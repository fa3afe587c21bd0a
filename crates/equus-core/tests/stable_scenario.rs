//! A short season in one stable: buy a pair, work them through the
//! groundwork skills, breed them and raise the foal.

#![allow(clippy::unwrap_used)]

use equus_core::{Chore, Stable, StableConfig, StableError};
use equus_genetics::{calculate_phenotype, potential, star_rating};
use equus_training::{
    foundation_skills, get_trainable_skills, needs_rest_day, skill, validate_skill_training,
};
use equus_types::{Gender, SessionDuration, Stat, Trainer};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde_json::Value;

fn new_stable() -> Stable {
    let config = StableConfig::parse("{}").unwrap();
    Stable::new(config, Trainer::new("Sam", 50.0))
}

#[test]
fn groundwork_builds_skills_and_stats() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let mut stable = new_stable();
    let mare = stable.add_foundation_horse("Star", Gender::Mare, &mut rng).unwrap();

    let plan = [
        ("grooming", SessionDuration::Fifteen),
        ("haltering", SessionDuration::Thirty),
        ("leading", SessionDuration::Thirty),
    ];

    for _ in 0..30 {
        for (skill, duration) in plan {
            let horse = stable.horse(mare).unwrap();
            if needs_rest_day(horse) || !validate_skill_training(horse, skill).can_train {
                continue;
            }
            let outcome = stable.train(mare, skill, duration, &mut rng);
            assert!(
                matches!(outcome, Ok(_) | Err(StableError::InsufficientTime { .. })),
                "{outcome:?}"
            );
        }
        stable.advance_day(&mut rng);
    }

    let horse = stable.horse(mare).unwrap();
    assert!(horse.skill_level("haltering") > 0.0);
    assert!(horse.training.stolidity > 0.0);
    assert!(horse.training.iter().all(|(_, level)| (0.0..=1.0).contains(level)));
    assert!(horse.mental_state.fatigue >= 0.0 && horse.mental_state.fatigue <= 100.0);

    // Trained stats show up in the phenotype.
    let phenotype = calculate_phenotype(&horse.genes, &horse.training, Some(horse.age));
    let stolidity = phenotype.get(Stat::Stolidity);
    assert!(stolidity.trained > 0.0);
    assert!(stolidity.effective > 0.0);

    // Nothing that needs no groundwork is closed off.
    assert!(get_trainable_skills(horse).len() >= foundation_skills().count());
    assert_eq!(stable.current_day(), 31);
    assert_eq!(stable.money(), 10_000 - 30 * 10);
}

#[test]
fn first_halter_lesson_on_an_average_horse() {
    let yaml = "foundation:\n  min_potential: 50\n  max_potential: 50\n";
    let haltering = skill("haltering").unwrap();

    for seed in 0..50 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let config = StableConfig::parse(yaml).unwrap();
        let mut stable = Stable::new(config, Trainer::new("Sam", 50.0));
        let id = stable.add_foundation_horse("Star", Gender::Mare, &mut rng).unwrap();
        let horse = stable.horse(id).unwrap();
        for (_, pair) in horse.genes.iter() {
            assert!((potential(pair) - 50.0).abs() < 1e-9);
            assert_eq!(star_rating(potential(pair)), 2);
        }

        let result = stable
            .train(id, "haltering", SessionDuration::Fifteen, &mut rng)
            .unwrap();
        assert!(result.success, "seed {seed}: {}", result.message);
        assert!(result.skill_gained > 0.0);

        // Untrained stats grow by their full contribution.
        assert_eq!(result.stats_gained.len(), haltering.stat_contributions.len());
        let horse = stable.horse(id).unwrap();
        for contribution in haltering.stat_contributions {
            let gained = result.stats_gained.get(&contribution.stat).unwrap();
            assert!((gained - contribution.amount * result.skill_gained).abs() < 1e-12);
            assert!((horse.training.get(contribution.stat) - gained).abs() < 1e-12);
        }
    }
}

#[test]
fn breeding_season() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut stable = new_stable();
    let sire = stable
        .add_foundation_horse("Thunder", Gender::Stallion, &mut rng)
        .unwrap();
    let dam = stable.add_foundation_horse("Star", Gender::Mare, &mut rng).unwrap();

    let foal = stable.breed(sire, dam, "Comet", &mut rng).unwrap();
    assert_eq!(stable.money(), 5_000);

    let report = stable.advance_day(&mut rng);
    assert_eq!(report.daily_cost, 30);
    assert_eq!(stable.money(), 4_970);

    // Too young to train or breed.
    assert!(matches!(
        stable.train(foal, "haltering", SessionDuration::Fifteen, &mut rng),
        Err(StableError::TrainingRejected { .. })
    ));
    assert!(matches!(
        stable.breed(sire, dam, "Again", &mut rng),
        Err(StableError::InsufficientFunds { needed: 5_000, available: 4_970 })
    ));

    // Chores do not close a gap that size in one day.
    while stable.do_chore(Chore::MuckStalls).is_ok() {}
    assert_eq!(stable.time_remaining(), 0);
    assert_eq!(stable.money(), 4_970 + 8 * 32);

    let foal = stable.horse(foal).unwrap();
    assert_eq!(foal.lineage.generation, 1);
    assert_eq!(stable.detailed_age(foal.id).unwrap(), "1 day");
}

#[test]
fn day_report_shape() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut stable = new_stable();
    stable.add_foundation_horse("Star", Gender::Mare, &mut rng).unwrap();

    let report = stable.advance_day(&mut rng);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json.get("newDay").and_then(Value::as_u64), Some(2));
    assert_eq!(json.get("dailyCost").and_then(Value::as_u64), Some(10));
    assert_eq!(json.get("upkeepPaid").and_then(Value::as_bool), Some(true));

    let updates = json.get("horseUpdates").and_then(Value::as_array).unwrap();
    let update = updates.first().unwrap();
    assert_eq!(update.get("horseName").and_then(Value::as_str), Some("Star"));
    assert!(update.get("newMood").is_some_and(Value::is_string));
    assert!(update.get("newFatigue").is_some_and(Value::is_number));
}
