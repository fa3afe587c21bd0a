//! Expressed stats: genetic potential scaled by training and age.

use equus_types::{Stat, StatGeneMap, StatPhenotype, StatTable, TrainingLevels};

use crate::model::{potential, star_rating};

/// Number of stats, as a float divisor for averages.
const STAT_COUNT: f64 = 14.0;

/// Share of adult capability a horse of `age` years can express.
///
/// Under 2 is 0.5. From 2 to 4 it rises by 0.1 a year from 0.7. Ages 5
/// to 12 are prime at 1.0. It then falls 0.05 a year through 20, and
/// seniors sit at 0.6.
pub fn age_modifier(age: u32) -> f64 {
    let years = f64::from(age);
    match age {
        0..=1 => 0.5,
        2..=4 => (years - 2.0).mul_add(0.1, 0.7),
        5..=12 => 1.0,
        13..=20 => (years - 12.0).mul_add(-0.05, 1.0),
        _ => 0.6,
    }
}

/// Per-stat potential, training, effective value and stars.
///
/// Without an age the effective value is not age adjusted.
pub fn calculate_phenotype(
    genes: &StatGeneMap,
    training: &TrainingLevels,
    age: Option<u32>,
) -> StatTable<StatPhenotype> {
    let modifier = age.map_or(1.0, age_modifier);
    genes.map(|stat, pair| {
        let potential = potential(pair);
        let trained = *training.get(stat);
        StatPhenotype {
            potential,
            trained,
            effective: potential * trained * modifier,
            stars: star_rating(potential),
        }
    })
}

/// Mean potential across all stats, `0..=100`.
pub fn calculate_overall_quality(genes: &StatGeneMap) -> f64 {
    genes.iter().map(|(_, pair)| potential(pair)).sum::<f64>() / STAT_COUNT
}

/// Mean training level across all stats, as a percentage.
pub fn calculate_overall_training(training: &TrainingLevels) -> f64 {
    training.iter().map(|(_, level)| *level).sum::<f64>() / STAT_COUNT * 100.0
}

/// Stat with the highest potential. Ties keep the earliest stat.
pub fn strongest_stat(genes: &StatGeneMap) -> (Stat, f64) {
    genes
        .iter()
        .map(|(stat, pair)| (stat, potential(pair)))
        .fold((Stat::Strength, 0.0), |best, (stat, value)| {
            if value > best.1 { (stat, value) } else { best }
        })
}

/// Stat with the lowest potential. Ties keep the earliest stat.
pub fn weakest_stat(genes: &StatGeneMap) -> (Stat, f64) {
    genes
        .iter()
        .map(|(stat, pair)| (stat, potential(pair)))
        .fold((Stat::Strength, 100.0), |worst, (stat, value)| {
            if value < worst.1 { (stat, value) } else { worst }
        })
}
