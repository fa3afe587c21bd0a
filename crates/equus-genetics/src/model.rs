//! Potential and rating primitives over stat genes.

use equus_types::{Allele, GenePair};

/// Genetic potential of a stat: the mean of its two alleles.
pub fn potential(pair: &GenePair) -> f64 {
    let [first, second] = pair.alleles();
    (first.value() + second.value()) / 2.0
}

/// One to five star rating of a potential.
///
/// Thresholds: 90 and up is 5, 75 is 4, 60 is 3, 45 is 2, anything lower 1.
pub fn star_rating(potential: f64) -> u8 {
    if potential >= 90.0 {
        5
    } else if potential >= 75.0 {
        4
    } else if potential >= 60.0 {
        3
    } else if potential >= 45.0 {
        2
    } else {
        1
    }
}

/// Whether `value` may be used as an allele.
pub fn is_valid_allele(value: f64) -> bool {
    Allele::is_valid(value)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn pair(a: f64, b: f64) -> GenePair {
        GenePair::from_values(a, b).unwrap()
    }

    #[test]
    fn potential_is_mean() {
        assert!((potential(&pair(40.0, 61.0)) - 50.5).abs() < f64::EPSILON);
        assert!(potential(&pair(0.0, 0.0)).abs() < f64::EPSILON);
        assert!((potential(&pair(100.0, 100.0)) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn star_rating_boundaries() {
        assert_eq!(star_rating(90.0), 5);
        assert_eq!(star_rating(89.999), 4);
        assert_eq!(star_rating(75.0), 4);
        assert_eq!(star_rating(74.9), 3);
        assert_eq!(star_rating(60.0), 3);
        assert_eq!(star_rating(45.0), 2);
        assert_eq!(star_rating(44.99), 1);
        assert_eq!(star_rating(0.0), 1);
    }

    #[test]
    fn star_rating_is_monotonic() {
        let mut previous = 0;
        for step in 0..=1000_u32 {
            let rating = star_rating(f64::from(step) / 10.0);
            assert!(rating >= previous);
            previous = rating;
        }
    }

    #[test]
    fn allele_validity() {
        assert!(is_valid_allele(0.0));
        assert!(is_valid_allele(100.0));
        assert!(!is_valid_allele(-1.0));
        assert!(!is_valid_allele(100.1));
    }
}
