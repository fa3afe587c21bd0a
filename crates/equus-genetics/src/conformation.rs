//! Conformation genetics: body shape carried on multi-allele genes.
//!
//! The two-allele genes (femur and tibia length) inherit like stat genes,
//! one allele from each parent. Longer genes re-segregate: each parent
//! contributes an independently shuffled random half of its alleles.

use std::collections::BTreeMap;

use equus_types::{ConformationGene, ConformationGenetics};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::error::GeneticsError;

/// Random conformation for a foundation horse. Every allele is drawn
/// uniformly from its gene's three-letter alphabet.
pub fn generate_conformation_genetics(
    rng: &mut impl Rng,
) -> Result<ConformationGenetics, GeneticsError> {
    let genes: BTreeMap<ConformationGene, Vec<char>> = ConformationGene::ALL
        .into_iter()
        .map(|gene| {
            let alphabet = gene.alphabet();
            let alleles = (0..gene.allele_count())
                .map(|_| alphabet.choose(rng).copied().unwrap_or('m'))
                .collect();
            (gene, alleles)
        })
        .collect();
    Ok(ConformationGenetics::new(genes)?)
}

/// Combine two parents' conformation genes.
pub fn breed_conformation_genetics(
    sire: &ConformationGenetics,
    dam: &ConformationGenetics,
    rng: &mut impl Rng,
) -> Result<ConformationGenetics, GeneticsError> {
    let genes: BTreeMap<ConformationGene, Vec<char>> = ConformationGene::ALL
        .into_iter()
        .map(|gene| {
            let alleles = if gene.is_simple() {
                inherit_simple(sire.get(gene), dam.get(gene), rng)
            } else {
                inherit_halves(sire.get(gene), dam.get(gene), rng)
            };
            (gene, alleles)
        })
        .collect();
    Ok(ConformationGenetics::new(genes)?)
}

/// One random allele from each parent.
fn inherit_simple(sire: &[char], dam: &[char], rng: &mut impl Rng) -> Vec<char> {
    sire.choose(rng)
        .into_iter()
        .chain(dam.choose(rng))
        .copied()
        .collect()
}

/// A shuffled half of the sire's alleles followed by a shuffled half of the
/// dam's.
fn inherit_halves(sire: &[char], dam: &[char], rng: &mut impl Rng) -> Vec<char> {
    let mut alleles = random_half(sire, rng);
    alleles.extend(random_half(dam, rng));
    alleles
}

fn random_half(alleles: &[char], rng: &mut impl Rng) -> Vec<char> {
    let mut shuffled = alleles.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(alleles.len() / 2);
    shuffled
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    fn letter_count(alleles: &[char], letter: char) -> usize {
        alleles.iter().filter(|a| **a == letter).count()
    }

    fn uniform(letter_for: impl Fn(ConformationGene) -> char) -> ConformationGenetics {
        let genes = ConformationGene::ALL
            .into_iter()
            .map(|gene| (gene, vec![letter_for(gene); gene.allele_count()]))
            .collect();
        ConformationGenetics::new(genes).unwrap()
    }

    #[test]
    fn generated_genes_have_correct_shape() {
        let mut rng = SmallRng::seed_from_u64(42);
        let genetics = generate_conformation_genetics(&mut rng).unwrap();
        for gene in ConformationGene::ALL {
            let alleles = genetics.get(gene);
            assert_eq!(alleles.len(), gene.allele_count());
            assert!(alleles.iter().all(|a| gene.alphabet().contains(a)));
        }
    }

    #[test]
    fn multi_allele_genes_take_half_from_each_parent() {
        let mut rng = SmallRng::seed_from_u64(42);
        // First letter of each alphabet on the sire, last letter on the dam.
        let sire = uniform(|gene| gene.alphabet()[0]);
        let dam = uniform(|gene| gene.alphabet()[2]);

        for _ in 0..20 {
            let foal = breed_conformation_genetics(&sire, &dam, &mut rng).unwrap();
            for gene in ConformationGene::ALL {
                let alleles = foal.get(gene);
                let half = gene.allele_count() / 2;
                assert_eq!(alleles.len(), gene.allele_count());
                assert_eq!(letter_count(alleles, gene.alphabet()[0]), half);
                assert_eq!(letter_count(alleles, gene.alphabet()[2]), half);
            }
        }
    }

    #[test]
    fn halves_are_drawn_from_the_parent_multiset() {
        let mut rng = SmallRng::seed_from_u64(17);
        let parent = generate_conformation_genetics(&mut rng).unwrap();
        let slope = parent.get(ConformationGene::ShoulderSlope);
        for _ in 0..50 {
            let half = random_half(slope, &mut rng);
            assert_eq!(half.len(), 4);
            for letter in ['i', 'm', 'u'] {
                assert!(letter_count(&half, letter) <= letter_count(slope, letter));
            }
        }
    }

    #[test]
    fn simple_genes_pair_one_from_each_side() {
        let mut rng = SmallRng::seed_from_u64(4);
        let sire = uniform(|gene| if gene.is_simple() { 's' } else { 'm' });
        let dam = uniform(|gene| if gene.is_simple() { 'l' } else { 'm' });
        let foal = breed_conformation_genetics(&sire, &dam, &mut rng).unwrap();
        assert_eq!(foal.get(ConformationGene::FemurLength), ['s', 'l']);
        assert_eq!(foal.get(ConformationGene::TibiaLength), ['s', 'l']);
    }
}
