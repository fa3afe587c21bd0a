//! Stat gene inheritance, personality inheritance and pairing rules.
//!
//! Each parent passes one randomly chosen allele per stat. A passed allele
//! may mutate by a bounded random amount before it lands in the foal.
//! Personalities are averaged on their ordinal scale with a little jitter.

use equus_types::{
    Allele, BreedingValidation, GenePair, Gender, Personality, StatGeneMap, StatTable,
};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GeneticsError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum age in years for either parent.
pub const MIN_BREEDING_AGE: u32 = 3;

/// Default per-allele mutation probability.
pub const DEFAULT_MUTATION_CHANCE: f64 = 0.05;

/// Default maximum mutation magnitude.
pub const DEFAULT_MUTATION_AMOUNT: f64 = 5.0;

/// Default lower bound for foundation alleles.
pub const DEFAULT_MIN_POTENTIAL: u32 = 40;

/// Default upper bound for foundation alleles.
pub const DEFAULT_MAX_POTENTIAL: u32 = 80;

/// Maximum ordinal drift applied when inheriting a personality.
const PERSONALITY_VARIATION: f64 = 1.5;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Mutation settings for stat gene inheritance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreedingOptions {
    /// Probability that a passed allele mutates, `0..=1`.
    pub mutation_chance: f64,
    /// Largest change a mutation can make, in either direction.
    pub mutation_amount: f64,
}

impl Default for BreedingOptions {
    fn default() -> Self {
        Self {
            mutation_chance: DEFAULT_MUTATION_CHANCE,
            mutation_amount: DEFAULT_MUTATION_AMOUNT,
        }
    }
}

impl BreedingOptions {
    /// Build options, rejecting a chance outside `0..=1` or a negative amount.
    pub fn new(mutation_chance: f64, mutation_amount: f64) -> Result<Self, GeneticsError> {
        let options = Self {
            mutation_chance,
            mutation_amount,
        };
        options.validate()?;
        Ok(options)
    }

    /// Check the options are usable.
    pub fn validate(&self) -> Result<(), GeneticsError> {
        let chance_ok = (0.0..=1.0).contains(&self.mutation_chance);
        let amount_ok = self.mutation_amount.is_finite() && self.mutation_amount >= 0.0;
        if chance_ok && amount_ok {
            Ok(())
        } else {
            Err(GeneticsError::InvalidBreedingOptions {
                chance: self.mutation_chance,
                amount: self.mutation_amount,
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Stat genes
// ---------------------------------------------------------------------------

/// Random stat genes for a horse with no recorded parents.
///
/// Every allele is an independent uniform integer in
/// `min_potential..=max_potential`.
pub fn generate_foundation_genes(
    min_potential: u32,
    max_potential: u32,
    rng: &mut impl Rng,
) -> Result<StatGeneMap, GeneticsError> {
    if min_potential > max_potential || max_potential > 100 {
        return Err(GeneticsError::InvalidPotentialRange {
            min: min_potential,
            max: max_potential,
        });
    }

    StatTable::try_from_fn(|_| {
        let first = rng.random_range(min_potential..=max_potential);
        let second = rng.random_range(min_potential..=max_potential);
        Ok(GenePair::from_values(f64::from(first), f64::from(second))?)
    })
}

/// Combine two parents' stat genes into a foal's.
///
/// For each stat one allele is drawn from the sire's pair and one from the
/// dam's pair, each may mutate, and the pair is stored sire side first.
pub fn breed_stat_genes(
    sire: &StatGeneMap,
    dam: &StatGeneMap,
    options: BreedingOptions,
    rng: &mut impl Rng,
) -> Result<StatGeneMap, GeneticsError> {
    options.validate()?;

    Ok(StatTable::from_fn(|stat| {
        let from_sire = pick_allele(sire.get(stat), rng);
        let from_dam = pick_allele(dam.get(stat), rng);
        GenePair::new(
            mutate(from_sire, options, rng),
            mutate(from_dam, options, rng),
        )
    }))
}

/// One allele of a pair, chosen with equal probability.
fn pick_allele(pair: &GenePair, rng: &mut impl Rng) -> Allele {
    if rng.random_bool(0.5) {
        pair.first()
    } else {
        pair.second()
    }
}

/// Possibly shift an allele by up to `mutation_amount` either way.
fn mutate(allele: Allele, options: BreedingOptions, rng: &mut impl Rng) -> Allele {
    if rng.random::<f64>() >= options.mutation_chance {
        return allele;
    }
    let delta = rng.random_range(-1.0..=1.0) * options.mutation_amount;
    let mutated = Allele::clamped(allele.value() + delta);
    debug!(
        before = allele.value(),
        after = mutated.value(),
        "allele mutated"
    );
    mutated
}

// ---------------------------------------------------------------------------
// Personality
// ---------------------------------------------------------------------------

/// Personality of a foal, drawn near the average of its parents.
///
/// The parents' ordinals are averaged, shifted by a uniform value in
/// `-1.5..=1.5`, rounded, and clamped to the ends of the scale.
pub fn inherit_personality(
    sire: Personality,
    dam: Personality,
    rng: &mut impl Rng,
) -> Result<Personality, GeneticsError> {
    let average = (f64::from(sire.ordinal()) + f64::from(dam.ordinal())) / 2.0;
    let variation = rng.random_range(-PERSONALITY_VARIATION..=PERSONALITY_VARIATION);
    let rounded = (average + variation).round().clamp(0.0, 10.0);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let ordinal = rounded as u8;

    Ok(Personality::from_ordinal(ordinal)?)
}

/// A uniformly random personality.
pub fn generate_random_personality(rng: &mut impl Rng) -> Personality {
    Personality::ALL
        .choose(rng)
        .copied()
        .unwrap_or(Personality::Indifferent)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check a pairing against the breeding rules.
///
/// Rules are checked in order and the first failure is reported: the sire
/// must be a stallion, the dam a mare, and both at least
/// [`MIN_BREEDING_AGE`].
pub fn validate_breeding(
    sire_age: u32,
    dam_age: u32,
    sire_gender: Gender,
    dam_gender: Gender,
) -> BreedingValidation {
    if sire_gender != Gender::Stallion {
        return BreedingValidation::rejected("Sire must be a stallion");
    }
    if dam_gender != Gender::Mare {
        return BreedingValidation::rejected("Dam must be a mare");
    }
    if sire_age < MIN_BREEDING_AGE {
        return BreedingValidation::rejected(format!(
            "Sire must be at least {MIN_BREEDING_AGE} years old"
        ));
    }
    if dam_age < MIN_BREEDING_AGE {
        return BreedingValidation::rejected(format!(
            "Dam must be at least {MIN_BREEDING_AGE} years old"
        ));
    }
    BreedingValidation::allowed()
}
