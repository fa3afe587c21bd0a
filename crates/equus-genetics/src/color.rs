//! Coat colour genetics: generation, inheritance and phenotype.
//!
//! Three loci are modelled. Extension decides whether black pigment is
//! possible at all, agouti restricts where black appears, and any gray
//! allele turns the coat progressively white with age.

use equus_types::{Agouti, BaseColor, ColorResult, Extension, Gray, VisualGenetics};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Chance that a foundation horse's gray allele is the non-gray `g`.
const NON_GRAY_CHANCE: f64 = 0.8;

/// Prefix added to the display colour of graying horses.
const GRAY_PREFIX: &str = "gray_";

// ---------------------------------------------------------------------------
// Generation and inheritance
// ---------------------------------------------------------------------------

/// Random colour genes for a foundation horse.
///
/// Extension and agouti alleles are uniform over their alphabets. Gray is
/// deliberately rare: each allele is `g` four times out of five.
pub fn generate_visual_genetics(rng: &mut impl Rng) -> VisualGenetics {
    VisualGenetics {
        extension: [
            pick(&Extension::ALL, Extension::Recessive, rng),
            pick(&Extension::ALL, Extension::Recessive, rng),
        ],
        agouti: [
            pick(&Agouti::ALL, Agouti::Recessive, rng),
            pick(&Agouti::ALL, Agouti::Recessive, rng),
        ],
        gray: [random_gray(rng), random_gray(rng)],
    }
}

fn pick<T: Copy>(alleles: &[T], fallback: T, rng: &mut impl Rng) -> T {
    alleles.choose(rng).copied().unwrap_or(fallback)
}

fn random_gray(rng: &mut impl Rng) -> Gray {
    if rng.random_bool(NON_GRAY_CHANCE) {
        Gray::NonGray
    } else {
        Gray::Gray
    }
}

/// Combine two parents' colour genes: one random allele from each parent at
/// every locus, sire side first. Colour genes never mutate.
pub fn breed_visual_genetics(
    sire: &VisualGenetics,
    dam: &VisualGenetics,
    rng: &mut impl Rng,
) -> VisualGenetics {
    VisualGenetics {
        extension: inherit_pair(sire.extension, dam.extension, rng),
        agouti: inherit_pair(sire.agouti, dam.agouti, rng),
        gray: inherit_pair(sire.gray, dam.gray, rng),
    }
}

fn inherit_pair<T: Copy>(sire: [T; 2], dam: [T; 2], rng: &mut impl Rng) -> [T; 2] {
    let [sire_a, sire_b] = sire;
    let [dam_a, dam_b] = dam;
    let from_sire = if rng.random_bool(0.5) { sire_a } else { sire_b };
    let from_dam = if rng.random_bool(0.5) { dam_a } else { dam_b };
    [from_sire, from_dam]
}

// ---------------------------------------------------------------------------
// Phenotype
// ---------------------------------------------------------------------------

/// Base coat colour.
///
/// No `E` allele means chestnut regardless of agouti. Otherwise the most
/// dominant agouti allele present decides: `A+` wild bay, `A` bay,
/// `At` brown, and only `a a` leaves the horse black.
pub fn calculate_base_color(genetics: &VisualGenetics) -> BaseColor {
    if !genetics.extension.contains(&Extension::Dominant) {
        return BaseColor::Chestnut;
    }
    let agouti = &genetics.agouti;
    if agouti.contains(&Agouti::WildBay) {
        BaseColor::WildBay
    } else if agouti.contains(&Agouti::Bay) {
        BaseColor::Bay
    } else if agouti.contains(&Agouti::Brown) {
        BaseColor::Brown
    } else {
        BaseColor::Black
    }
}

/// Whether the horse carries at least one gray allele.
pub fn is_graying(genetics: &VisualGenetics) -> bool {
    genetics.gray.contains(&Gray::Gray)
}

/// Asset key for the coat, such as `bay` or `gray_chestnut`.
pub fn display_color(genetics: &VisualGenetics) -> String {
    let base = calculate_base_color(genetics).key();
    if is_graying(genetics) {
        format!("{GRAY_PREFIX}{base}")
    } else {
        base.to_owned()
    }
}

/// Compact notation of all three loci, for example `Ee/A+At/Gg`.
pub fn genetic_code(genetics: &VisualGenetics) -> String {
    let [e1, e2] = genetics.extension;
    let [a1, a2] = genetics.agouti;
    let [g1, g2] = genetics.gray;
    format!(
        "{}{}/{}{}/{}{}",
        e1.symbol(),
        e2.symbol(),
        a1.symbol(),
        a2.symbol(),
        g1.symbol(),
        g2.symbol()
    )
}

/// Human-readable colour name, for example `Graying Wild Bay`.
pub fn color_name(base: BaseColor, graying: bool) -> String {
    if graying {
        format!("Graying {}", base.name())
    } else {
        base.name().to_owned()
    }
}

/// Everything the UI needs to draw and label a coat.
pub fn calculate_color(genetics: &VisualGenetics) -> ColorResult {
    let base_color = calculate_base_color(genetics);
    let graying = is_graying(genetics);
    ColorResult {
        base_color,
        display_color: display_color(genetics),
        is_gray: graying,
        genetic_code: genetic_code(genetics),
        color_name: color_name(base_color, graying),
    }
}
