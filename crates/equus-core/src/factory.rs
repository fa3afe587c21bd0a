//! Building new horses: foundation stock and foals.

use std::collections::BTreeMap;

use chrono::Utc;
use equus_genetics::{
    BreedingOptions, GeneticsError, breed_conformation_genetics, breed_stat_genes,
    breed_visual_genetics, generate_conformation_genetics, generate_foundation_genes,
    generate_random_personality, generate_visual_genetics, inherit_personality,
};
use equus_training::calculate_satisfaction_requirements;
use equus_types::{
    Gender, Horse, HorseId, Housing, Lineage, MentalState, Mood, NeedLevel, Satisfaction,
    TrainingLevels,
};
use rand::Rng;
use tracing::info;

use crate::config::FoundationConfig;

/// Nutrition every new horse arrives with.
const STARTING_NUTRITION: u32 = 100;

/// A newly purchased horse with no recorded parents.
///
/// Stat genes are rolled within the configured potential range, the
/// personality is uniformly random, and the horse arrives calm, rested and
/// turned out to pasture.
///
/// # Errors
///
/// Returns [`GeneticsError::InvalidPotentialRange`] for a bad foundation
/// range.
pub fn create_foundation_horse(
    name: &str,
    gender: Gender,
    foundation: &FoundationConfig,
    rng: &mut impl Rng,
) -> Result<Horse, GeneticsError> {
    let genes =
        generate_foundation_genes(foundation.min_potential, foundation.max_potential, rng)?;
    let personality = generate_random_personality(rng);
    let visual_genetics = generate_visual_genetics(rng);
    let conformation_genetics = generate_conformation_genetics(rng)?;

    let horse = settle(Horse {
        id: HorseId::new(),
        name: name.to_owned(),
        age: foundation.starting_age,
        gender,
        genes,
        training: TrainingLevels::default(),
        skills: BTreeMap::new(),
        visual_genetics,
        conformation_genetics,
        mental_state: MentalState::new(personality, Mood::Calm),
        satisfaction: fresh_satisfaction(),
        housing: Housing::Pasture,
        bonds: Vec::new(),
        lineage: Lineage::default(),
        born_at: Utc::now(),
    });

    info!(
        horse_id = %horse.id,
        name = %horse.name,
        personality = ?personality,
        "Foundation horse created"
    );
    Ok(horse)
}

/// A newborn foal of `sire` and `dam`.
///
/// Every gene is freshly combined from the parents, the sex is a coin
/// flip, and the foal starts apathetic at age 0, one generation below its
/// older parent line.
///
/// # Errors
///
/// Returns [`GeneticsError`] if the breeding options are invalid.
pub fn create_foal(
    sire: &Horse,
    dam: &Horse,
    name: &str,
    options: BreedingOptions,
    rng: &mut impl Rng,
) -> Result<Horse, GeneticsError> {
    let genes = breed_stat_genes(&sire.genes, &dam.genes, options, rng)?;
    let personality = inherit_personality(
        sire.mental_state.personality,
        dam.mental_state.personality,
        rng,
    )?;
    let visual_genetics = breed_visual_genetics(&sire.visual_genetics, &dam.visual_genetics, rng);
    let conformation_genetics =
        breed_conformation_genetics(&sire.conformation_genetics, &dam.conformation_genetics, rng)?;
    let gender = if rng.random_bool(0.5) {
        Gender::Stallion
    } else {
        Gender::Mare
    };
    let generation = sire
        .lineage
        .generation
        .max(dam.lineage.generation)
        .saturating_add(1);

    let foal = settle(Horse {
        id: HorseId::new(),
        name: name.to_owned(),
        age: 0,
        gender,
        genes,
        training: TrainingLevels::default(),
        skills: BTreeMap::new(),
        visual_genetics,
        conformation_genetics,
        mental_state: MentalState::new(personality, Mood::Apathetic),
        satisfaction: fresh_satisfaction(),
        housing: Housing::Pasture,
        bonds: Vec::new(),
        lineage: Lineage {
            sire: Some(sire.id),
            dam: Some(dam.id),
            generation,
        },
        born_at: Utc::now(),
    });

    info!(
        foal_id = %foal.id,
        sire_id = %sire.id,
        dam_id = %dam.id,
        generation,
        "Foal born"
    );
    Ok(foal)
}

fn fresh_satisfaction() -> Satisfaction {
    Satisfaction {
        nutrition: NeedLevel::new(STARTING_NUTRITION, 0),
        ..Satisfaction::default()
    }
}

/// Fill in satisfaction requirements for the horse's housing and age.
fn settle(mut horse: Horse) -> Horse {
    horse.satisfaction = calculate_satisfaction_requirements(&horse);
    horse
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use equus_types::{NeedChannel, Personality};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    fn foundation(gender: Gender, rng: &mut SmallRng) -> Horse {
        create_foundation_horse("Star", gender, &FoundationConfig::default(), rng).unwrap()
    }

    #[test]
    fn foundation_horse_defaults() {
        let mut rng = SmallRng::seed_from_u64(42);
        let horse = foundation(Gender::Mare, &mut rng);
        assert_eq!(horse.age, 3);
        assert_eq!(horse.gender, Gender::Mare);
        assert_eq!(horse.mental_state.mood, Mood::Calm);
        assert_eq!(horse.housing, Housing::Pasture);
        assert_eq!(horse.satisfaction.nutrition, NeedLevel::new(100, 80));
        for channel in [NeedChannel::Exercise, NeedChannel::Stimulation, NeedChannel::Socialization] {
            assert_eq!(horse.satisfaction.channel(channel), NeedLevel::new(0, 0));
        }
        assert_eq!(horse.lineage, Lineage::default());
        assert!(horse.skills.is_empty());
        for (_, pair) in horse.genes.iter() {
            for allele in pair.alleles() {
                assert!((50.0..=80.0).contains(&allele.value()));
            }
        }
    }

    #[test]
    fn bad_potential_range_is_an_error() {
        let mut rng = SmallRng::seed_from_u64(1);
        let bad = FoundationConfig {
            min_potential: 90,
            max_potential: 10,
            starting_age: 3,
        };
        assert!(matches!(
            create_foundation_horse("X", Gender::Mare, &bad, &mut rng),
            Err(GeneticsError::InvalidPotentialRange { min: 90, max: 10 })
        ));
    }

    #[test]
    fn foal_inherits_from_both_parents() {
        let mut rng = SmallRng::seed_from_u64(42);
        let sire = foundation(Gender::Stallion, &mut rng);
        let mut dam = foundation(Gender::Mare, &mut rng);
        dam.lineage.generation = 2;

        let foal = create_foal(&sire, &dam, "Comet", BreedingOptions::default(), &mut rng).unwrap();
        assert_eq!(foal.age, 0);
        assert_eq!(foal.mental_state.mood, Mood::Apathetic);
        assert_eq!(foal.lineage.sire, Some(sire.id));
        assert_eq!(foal.lineage.dam, Some(dam.id));
        assert_eq!(foal.lineage.generation, 3);
        assert_ne!(foal.id, sire.id);
        assert_eq!(foal.satisfaction.nutrition, NeedLevel::new(100, 80));
    }

    #[test]
    fn foal_alleles_come_from_parents_without_mutation() {
        let mut rng = SmallRng::seed_from_u64(9);
        let sire = foundation(Gender::Stallion, &mut rng);
        let dam = foundation(Gender::Mare, &mut rng);
        let options = BreedingOptions::new(0.0, 0.0).unwrap();
        let foal = create_foal(&sire, &dam, "Comet", options, &mut rng).unwrap();
        for (stat, pair) in foal.genes.iter() {
            let [from_sire, from_dam] = pair.alleles();
            assert!(sire.genes.get(stat).alleles().contains(&from_sire));
            assert!(dam.genes.get(stat).alleles().contains(&from_dam));
        }
    }

    #[test]
    fn foal_sex_is_a_coin_flip() {
        let mut rng = SmallRng::seed_from_u64(5);
        let sire = foundation(Gender::Stallion, &mut rng);
        let dam = foundation(Gender::Mare, &mut rng);
        let colts = (0..400)
            .filter(|_| {
                create_foal(&sire, &dam, "F", BreedingOptions::default(), &mut rng)
                    .unwrap()
                    .gender
                    == Gender::Stallion
            })
            .count();
        assert!((150..=250).contains(&colts), "colts {colts}");
    }

    #[test]
    fn foal_personality_stays_near_parents() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut sire = foundation(Gender::Stallion, &mut rng);
        let mut dam = foundation(Gender::Mare, &mut rng);
        sire.mental_state.personality = Personality::Recalcitrant;
        dam.mental_state.personality = Personality::Recalcitrant;
        for _ in 0..50 {
            let foal = create_foal(&sire, &dam, "F", BreedingOptions::default(), &mut rng).unwrap();
            assert!(foal.mental_state.personality.ordinal() <= 2);
        }
    }
}
