//! Gene representations: stat alleles, coat colour loci and conformation.
//!
//! Everything here is immutable once a horse is born. Values are validated
//! on construction and on deserialization, so downstream formulas can trust
//! the ranges without re-checking.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::Stat;
use crate::error::TypesError;

// ---------------------------------------------------------------------------
// Stat genes
// ---------------------------------------------------------------------------

/// Lowest legal allele value.
pub const ALLELE_MIN: f64 = 0.0;

/// Highest legal allele value.
pub const ALLELE_MAX: f64 = 100.0;

/// One inherited unit of genetic potential, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[serde(try_from = "f64", into = "f64")]
#[ts(export, export_to = "bindings/")]
pub struct Allele(f64);

impl Allele {
    /// Whether `value` is a legal allele.
    pub fn is_valid(value: f64) -> bool {
        (ALLELE_MIN..=ALLELE_MAX).contains(&value)
    }

    /// Build an allele, rejecting values outside `0..=100` (and NaN).
    pub fn new(value: f64) -> Result<Self, TypesError> {
        if Self::is_valid(value) {
            Ok(Self(value))
        } else {
            Err(TypesError::AlleleOutOfRange { value })
        }
    }

    /// Build an allele, clamping into range. NaN maps to the minimum.
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            Self(ALLELE_MIN)
        } else {
            Self(value.clamp(ALLELE_MIN, ALLELE_MAX))
        }
    }

    /// The numeric value.
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Allele {
    type Error = TypesError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Allele> for f64 {
    fn from(allele: Allele) -> Self {
        allele.0
    }
}

/// Exactly two alleles for one stat, sire side first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GenePair([Allele; 2]);

impl GenePair {
    /// Pair two alleles.
    pub const fn new(first: Allele, second: Allele) -> Self {
        Self([first, second])
    }

    /// Pair two raw values, validating both.
    pub fn from_values(first: f64, second: f64) -> Result<Self, TypesError> {
        Ok(Self::new(Allele::new(first)?, Allele::new(second)?))
    }

    /// The first (sire-side) allele.
    pub const fn first(&self) -> Allele {
        self.0[0]
    }

    /// The second (dam-side) allele.
    pub const fn second(&self) -> Allele {
        self.0[1]
    }

    /// Both alleles.
    pub const fn alleles(&self) -> [Allele; 2] {
        self.0
    }
}

/// A value for each of the fourteen stats.
///
/// Used for gene maps, training levels and phenotype tables alike.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatTable<T> {
    /// Strength entry.
    pub strength: T,
    /// Speed entry.
    pub speed: T,
    /// Agility entry.
    pub agility: T,
    /// Balance entry.
    pub balance: T,
    /// Stamina entry.
    pub stamina: T,
    /// Movement entry.
    pub movement: T,
    /// Tempo entry.
    pub tempo: T,
    /// Bravery entry.
    pub bravery: T,
    /// Competitiveness entry.
    pub competitiveness: T,
    /// Flexibility entry.
    pub flexibility: T,
    /// Intelligence entry.
    pub intelligence: T,
    /// Loyalty entry.
    pub loyalty: T,
    /// Sociability entry.
    pub sociability: T,
    /// Stolidity entry.
    pub stolidity: T,
}

impl<T> StatTable<T> {
    /// Build a table by evaluating `f` once per stat, in canonical order.
    pub fn from_fn(mut f: impl FnMut(Stat) -> T) -> Self {
        Self {
            strength: f(Stat::Strength),
            speed: f(Stat::Speed),
            agility: f(Stat::Agility),
            balance: f(Stat::Balance),
            stamina: f(Stat::Stamina),
            movement: f(Stat::Movement),
            tempo: f(Stat::Tempo),
            bravery: f(Stat::Bravery),
            competitiveness: f(Stat::Competitiveness),
            flexibility: f(Stat::Flexibility),
            intelligence: f(Stat::Intelligence),
            loyalty: f(Stat::Loyalty),
            sociability: f(Stat::Sociability),
            stolidity: f(Stat::Stolidity),
        }
    }

    /// Fallible variant of [`StatTable::from_fn`]; stops at the first error.
    pub fn try_from_fn<E>(mut f: impl FnMut(Stat) -> Result<T, E>) -> Result<Self, E> {
        Ok(Self {
            strength: f(Stat::Strength)?,
            speed: f(Stat::Speed)?,
            agility: f(Stat::Agility)?,
            balance: f(Stat::Balance)?,
            stamina: f(Stat::Stamina)?,
            movement: f(Stat::Movement)?,
            tempo: f(Stat::Tempo)?,
            bravery: f(Stat::Bravery)?,
            competitiveness: f(Stat::Competitiveness)?,
            flexibility: f(Stat::Flexibility)?,
            intelligence: f(Stat::Intelligence)?,
            loyalty: f(Stat::Loyalty)?,
            sociability: f(Stat::Sociability)?,
            stolidity: f(Stat::Stolidity)?,
        })
    }

    /// Entry for `stat`.
    pub const fn get(&self, stat: Stat) -> &T {
        match stat {
            Stat::Strength => &self.strength,
            Stat::Speed => &self.speed,
            Stat::Agility => &self.agility,
            Stat::Balance => &self.balance,
            Stat::Stamina => &self.stamina,
            Stat::Movement => &self.movement,
            Stat::Tempo => &self.tempo,
            Stat::Bravery => &self.bravery,
            Stat::Competitiveness => &self.competitiveness,
            Stat::Flexibility => &self.flexibility,
            Stat::Intelligence => &self.intelligence,
            Stat::Loyalty => &self.loyalty,
            Stat::Sociability => &self.sociability,
            Stat::Stolidity => &self.stolidity,
        }
    }

    /// Mutable entry for `stat`.
    pub const fn get_mut(&mut self, stat: Stat) -> &mut T {
        match stat {
            Stat::Strength => &mut self.strength,
            Stat::Speed => &mut self.speed,
            Stat::Agility => &mut self.agility,
            Stat::Balance => &mut self.balance,
            Stat::Stamina => &mut self.stamina,
            Stat::Movement => &mut self.movement,
            Stat::Tempo => &mut self.tempo,
            Stat::Bravery => &mut self.bravery,
            Stat::Competitiveness => &mut self.competitiveness,
            Stat::Flexibility => &mut self.flexibility,
            Stat::Intelligence => &mut self.intelligence,
            Stat::Loyalty => &mut self.loyalty,
            Stat::Sociability => &mut self.sociability,
            Stat::Stolidity => &mut self.stolidity,
        }
    }

    /// Iterate `(stat, entry)` in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, &T)> {
        Stat::ALL.into_iter().map(move |stat| (stat, self.get(stat)))
    }

    /// Transform every entry.
    pub fn map<U>(&self, mut f: impl FnMut(Stat, &T) -> U) -> StatTable<U> {
        StatTable::from_fn(|stat| f(stat, self.get(stat)))
    }
}

/// Genetic potential for every stat.
pub type StatGeneMap = StatTable<GenePair>;

/// Fraction of potential unlocked through training, per stat, in `0..=1`.
pub type TrainingLevels = StatTable<f64>;

// ---------------------------------------------------------------------------
// Visual genetics
// ---------------------------------------------------------------------------

/// Extension locus. Without a dominant `E` the coat is chestnut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Extension {
    /// `E`, allows black pigment.
    #[serde(rename = "E")]
    Dominant,
    /// `e`, red only.
    #[serde(rename = "e")]
    Recessive,
}

impl Extension {
    /// Every allele at this locus.
    pub const ALL: [Self; 2] = [Self::Dominant, Self::Recessive];

    /// Genetic notation.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Dominant => "E",
            Self::Recessive => "e",
        }
    }
}

/// Agouti locus, in dominance order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Agouti {
    /// `A+`, wild bay.
    #[serde(rename = "A+")]
    WildBay,
    /// `A`, bay.
    #[serde(rename = "A")]
    Bay,
    /// `At`, seal brown.
    #[serde(rename = "At")]
    Brown,
    /// `a`, no restriction of black.
    #[serde(rename = "a")]
    Recessive,
}

impl Agouti {
    /// Every allele at this locus.
    pub const ALL: [Self; 4] = [Self::WildBay, Self::Bay, Self::Brown, Self::Recessive];

    /// Genetic notation.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::WildBay => "A+",
            Self::Bay => "A",
            Self::Brown => "At",
            Self::Recessive => "a",
        }
    }
}

/// Gray locus. Any `G` makes the horse gray out with age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Gray {
    /// `G`, progressive graying.
    #[serde(rename = "G")]
    Gray,
    /// `g`, keeps its colour.
    #[serde(rename = "g")]
    NonGray,
}

impl Gray {
    /// Genetic notation.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Gray => "G",
            Self::NonGray => "g",
        }
    }
}

/// The three coat colour loci.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct VisualGenetics {
    /// Extension pair.
    pub extension: [Extension; 2],
    /// Agouti pair.
    pub agouti: [Agouti; 2],
    /// Gray pair.
    pub gray: [Gray; 2],
}

/// Base coat colour before graying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum BaseColor {
    /// Red coat, no black pigment.
    Chestnut,
    /// Light bay with reduced black points.
    WildBay,
    /// Red body, black points.
    Bay,
    /// Dark body with lighter soft points.
    Brown,
    /// Solid black.
    Black,
}

impl BaseColor {
    /// Snake-case key used by image assets.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Chestnut => "chestnut",
            Self::WildBay => "wild_bay",
            Self::Bay => "bay",
            Self::Brown => "brown",
            Self::Black => "black",
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chestnut => "Chestnut",
            Self::WildBay => "Wild Bay",
            Self::Bay => "Bay",
            Self::Brown => "Brown",
            Self::Black => "Black",
        }
    }
}

// ---------------------------------------------------------------------------
// Conformation genetics
// ---------------------------------------------------------------------------

/// A multi-allele conformation gene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub enum ConformationGene {
    /// Slope of the shoulder (upright, medium, sloped).
    ShoulderSlope,
    /// Angle at the point of shoulder (closed, medium, open).
    ShoulderAngle,
    /// Length of the upper arm.
    HumerusLength,
    /// Length of the thigh bone.
    FemurLength,
    /// Length of the gaskin.
    TibiaLength,
    /// Height at the withers (low, medium, high).
    WitherHeight,
    /// Length of the neck.
    NeckLength,
    /// Angle of the croup (flat, medium, steep).
    CroupAngle,
    /// Angle of the pastern (upright, medium, sloped).
    PasternAngle,
    /// Width of the chest (narrow, medium, wide).
    ChestWidth,
}

impl ConformationGene {
    /// All genes.
    pub const ALL: [Self; 10] = [
        Self::ShoulderSlope,
        Self::ShoulderAngle,
        Self::HumerusLength,
        Self::FemurLength,
        Self::TibiaLength,
        Self::WitherHeight,
        Self::NeckLength,
        Self::CroupAngle,
        Self::PasternAngle,
        Self::ChestWidth,
    ];

    /// Number of alleles the gene carries.
    pub const fn allele_count(self) -> usize {
        match self {
            Self::ShoulderSlope | Self::ShoulderAngle | Self::CroupAngle | Self::PasternAngle => 8,
            Self::HumerusLength => 6,
            Self::WitherHeight | Self::NeckLength | Self::ChestWidth => 4,
            Self::FemurLength | Self::TibiaLength => 2,
        }
    }

    /// The three allele letters legal for this gene.
    pub const fn alphabet(self) -> [char; 3] {
        match self {
            Self::ShoulderSlope | Self::PasternAngle => ['i', 'm', 'u'],
            Self::ShoulderAngle => ['c', 'm', 'o'],
            Self::HumerusLength | Self::FemurLength | Self::TibiaLength | Self::NeckLength => {
                ['s', 'm', 'l']
            }
            Self::WitherHeight => ['l', 'm', 'h'],
            Self::CroupAngle => ['f', 'm', 's'],
            Self::ChestWidth => ['n', 'm', 'w'],
        }
    }

    /// Whether the gene segregates as a single pair rather than in halves.
    pub const fn is_simple(self) -> bool {
        self.allele_count() == 2
    }
}

/// Allele lists for all ten conformation genes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<ConformationGene, Vec<char>>")]
#[serde(into = "BTreeMap<ConformationGene, Vec<char>>")]
pub struct ConformationGenetics(BTreeMap<ConformationGene, Vec<char>>);

impl ConformationGenetics {
    /// Validate that every gene is present with the right length and alphabet.
    pub fn new(genes: BTreeMap<ConformationGene, Vec<char>>) -> Result<Self, TypesError> {
        for gene in ConformationGene::ALL {
            let alleles = genes
                .get(&gene)
                .ok_or(TypesError::ConformationLength {
                    gene,
                    expected: gene.allele_count(),
                    actual: 0,
                })?;
            if alleles.len() != gene.allele_count() {
                return Err(TypesError::ConformationLength {
                    gene,
                    expected: gene.allele_count(),
                    actual: alleles.len(),
                });
            }
            if let Some(&allele) = alleles.iter().find(|a| !gene.alphabet().contains(*a)) {
                return Err(TypesError::ConformationAllele { gene, allele });
            }
        }
        Ok(Self(genes))
    }

    /// Alleles of `gene`.
    pub fn get(&self, gene: ConformationGene) -> &[char] {
        self.0.get(&gene).map_or(&[], Vec::as_slice)
    }

    /// Iterate genes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ConformationGene, &[char])> {
        self.0.iter().map(|(gene, alleles)| (*gene, alleles.as_slice()))
    }
}

impl TryFrom<BTreeMap<ConformationGene, Vec<char>>> for ConformationGenetics {
    type Error = TypesError;

    fn try_from(genes: BTreeMap<ConformationGene, Vec<char>>) -> Result<Self, Self::Error> {
        Self::new(genes)
    }
}

impl From<ConformationGenetics> for BTreeMap<ConformationGene, Vec<char>> {
    fn from(genetics: ConformationGenetics) -> Self {
        genetics.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn allele_rejects_out_of_range() {
        assert!(Allele::new(0.0).is_ok());
        assert!(Allele::new(100.0).is_ok());
        assert!(Allele::new(-0.1).is_err());
        assert!(Allele::new(100.5).is_err());
        assert!(Allele::new(f64::NAN).is_err());
    }

    #[test]
    fn allele_clamps() {
        assert!((Allele::clamped(104.0).value() - 100.0).abs() < f64::EPSILON);
        assert!(Allele::clamped(-3.0).value().abs() < f64::EPSILON);
    }

    #[test]
    fn gene_pair_deserialization_validates() {
        let ok: GenePair = serde_json::from_str("[40, 60]").unwrap();
        assert!((ok.second().value() - 60.0).abs() < f64::EPSILON);
        let bad: Result<GenePair, _> = serde_json::from_str("[40, 160]");
        assert!(bad.is_err());
    }

    #[test]
    fn stat_table_get_matches_from_fn() {
        let table = StatTable::from_fn(|stat| stat as usize);
        for (index, stat) in Stat::ALL.iter().enumerate() {
            assert_eq!(*table.get(*stat), index);
        }
        assert_eq!(table.iter().count(), 14);
    }

    #[test]
    fn stat_table_get_mut_writes_through() {
        let mut table: StatTable<f64> = StatTable::default();
        *table.get_mut(Stat::Loyalty) = 0.5;
        assert!((table.loyalty - 0.5).abs() < f64::EPSILON);
    }

    fn full_conformation() -> BTreeMap<ConformationGene, Vec<char>> {
        ConformationGene::ALL
            .into_iter()
            .map(|gene| (gene, vec!['m'; gene.allele_count()]))
            .collect()
    }

    #[test]
    fn conformation_accepts_well_formed_genes() {
        let genetics = ConformationGenetics::new(full_conformation()).unwrap();
        assert_eq!(genetics.get(ConformationGene::HumerusLength).len(), 6);
    }

    #[test]
    fn conformation_rejects_bad_length_and_letters() {
        let mut short = full_conformation();
        short.insert(ConformationGene::ChestWidth, vec!['m'; 3]);
        assert!(matches!(
            ConformationGenetics::new(short),
            Err(TypesError::ConformationLength { actual: 3, .. })
        ));

        let mut wrong = full_conformation();
        wrong.insert(ConformationGene::CroupAngle, vec!['x'; 8]);
        assert!(matches!(
            ConformationGenetics::new(wrong),
            Err(TypesError::ConformationAllele { allele: 'x', .. })
        ));
    }

    #[test]
    fn conformation_serializes_camel_case_keys() {
        let genetics = ConformationGenetics::new(full_conformation()).unwrap();
        let json = serde_json::to_value(&genetics).unwrap();
        assert!(json.get("shoulderSlope").is_some());
        let back: ConformationGenetics = serde_json::from_value(json).unwrap();
        assert_eq!(back, genetics);
    }
}
