//! Enumeration types for the Equus simulation.
//!
//! Stats, sexes, housing, the fixed personality archetypes, moods, skill
//! categories and satisfaction channels. Serde names match the strings the
//! game UI already stores (`"Shut-down"`, `"basicRiding"`, `"stallion"`).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::TypesError;

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// One of the fourteen genetic stats every horse carries.
///
/// The first seven are physical, the last seven mental. Declaration order is
/// the canonical iteration order used by gene maps and phenotype scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub enum Stat {
    /// Raw pulling and carrying power.
    Strength,
    /// Top speed over ground.
    Speed,
    /// Quickness changing direction.
    Agility,
    /// Footing and self-carriage.
    Balance,
    /// Endurance over long work.
    Stamina,
    /// Quality of gaits.
    Movement,
    /// Rhythm and cadence.
    Tempo,
    /// Willingness to face new things.
    Bravery,
    /// Drive to win.
    Competitiveness,
    /// Mental adaptability.
    Flexibility,
    /// Capacity to learn.
    Intelligence,
    /// Attachment to handlers.
    Loyalty,
    /// Comfort around people and horses.
    Sociability,
    /// Steadiness under pressure.
    Stolidity,
}

impl Stat {
    /// All stats in canonical order.
    pub const ALL: [Self; 14] = [
        Self::Strength,
        Self::Speed,
        Self::Agility,
        Self::Balance,
        Self::Stamina,
        Self::Movement,
        Self::Tempo,
        Self::Bravery,
        Self::Competitiveness,
        Self::Flexibility,
        Self::Intelligence,
        Self::Loyalty,
        Self::Sociability,
        Self::Stolidity,
    ];

    /// The seven physical stats.
    pub const PHYSICAL: [Self; 7] = [
        Self::Strength,
        Self::Speed,
        Self::Agility,
        Self::Balance,
        Self::Stamina,
        Self::Movement,
        Self::Tempo,
    ];

    /// The seven mental stats.
    pub const MENTAL: [Self; 7] = [
        Self::Bravery,
        Self::Competitiveness,
        Self::Flexibility,
        Self::Intelligence,
        Self::Loyalty,
        Self::Sociability,
        Self::Stolidity,
    ];

    /// Whether this stat belongs to the physical group.
    pub const fn is_physical(self) -> bool {
        matches!(
            self,
            Self::Strength
                | Self::Speed
                | Self::Agility
                | Self::Balance
                | Self::Stamina
                | Self::Movement
                | Self::Tempo
        )
    }

    /// Lowercase display name, as used in UI labels.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Speed => "speed",
            Self::Agility => "agility",
            Self::Balance => "balance",
            Self::Stamina => "stamina",
            Self::Movement => "movement",
            Self::Tempo => "tempo",
            Self::Bravery => "bravery",
            Self::Competitiveness => "competitiveness",
            Self::Flexibility => "flexibility",
            Self::Intelligence => "intelligence",
            Self::Loyalty => "loyalty",
            Self::Sociability => "sociability",
            Self::Stolidity => "stolidity",
        }
    }
}

impl core::fmt::Display for Stat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Sex and housing
// ---------------------------------------------------------------------------

/// Biological sex of a horse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Gender {
    /// Intact male.
    Stallion,
    /// Female.
    Mare,
}

/// Where a horse is kept. Drives its daily satisfaction requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Housing {
    /// Turned out with herd mates; meets its own exercise and company needs.
    Pasture,
    /// Boxed; every need has to be met by the trainer.
    Stall,
}

// ---------------------------------------------------------------------------
// Personality
// ---------------------------------------------------------------------------

/// Per-channel multipliers a personality applies to stall requirements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeedModifiers {
    /// Exercise multiplier.
    pub exercise: f64,
    /// Stimulation multiplier.
    pub stimulation: f64,
    /// Socialization multiplier.
    pub socialization: f64,
}

/// Fixed-at-birth temperament archetype.
///
/// Declaration order is the ordinal scale used when averaging two parents'
/// personalities, running from least to most cooperative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Personality {
    /// Actively resists handling.
    Recalcitrant,
    /// Hard to direct.
    Intractable,
    /// Digs in its heels.
    Stubborn,
    /// Keeps to itself.
    Aloof,
    /// Easily worried.
    Timid,
    /// Neither helps nor hinders.
    Indifferent,
    /// Interested in new things.
    Curious,
    /// Enjoys company.
    Personable,
    /// Tries to please.
    Willing,
    /// Easygoing and affectionate.
    Amiable,
    /// Unpredictable; steadied by a strong bond.
    Bold,
}

impl Personality {
    /// All personalities in ordinal order.
    pub const ALL: [Self; 11] = [
        Self::Recalcitrant,
        Self::Intractable,
        Self::Stubborn,
        Self::Aloof,
        Self::Timid,
        Self::Indifferent,
        Self::Curious,
        Self::Personable,
        Self::Willing,
        Self::Amiable,
        Self::Bold,
    ];

    /// Position on the 0..=10 inheritance scale.
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Recalcitrant => 0,
            Self::Intractable => 1,
            Self::Stubborn => 2,
            Self::Aloof => 3,
            Self::Timid => 4,
            Self::Indifferent => 5,
            Self::Curious => 6,
            Self::Personable => 7,
            Self::Willing => 8,
            Self::Amiable => 9,
            Self::Bold => 10,
        }
    }

    /// Inverse of [`Personality::ordinal`].
    pub const fn from_ordinal(ordinal: u8) -> Result<Self, TypesError> {
        Ok(match ordinal {
            0 => Self::Recalcitrant,
            1 => Self::Intractable,
            2 => Self::Stubborn,
            3 => Self::Aloof,
            4 => Self::Timid,
            5 => Self::Indifferent,
            6 => Self::Curious,
            7 => Self::Personable,
            8 => Self::Willing,
            9 => Self::Amiable,
            10 => Self::Bold,
            _ => return Err(TypesError::PersonalityOrdinal { ordinal }),
        })
    }

    /// Fixed personality value fed into the training formula.
    ///
    /// `None` for [`Personality::Bold`], whose value is rolled per session.
    pub const fn fixed_value(self) -> Option<f64> {
        match self {
            Self::Recalcitrant => Some(-10.0),
            Self::Intractable => Some(-7.0),
            Self::Stubborn => Some(-5.0),
            Self::Aloof => Some(-3.0),
            Self::Timid => Some(-1.0),
            Self::Indifferent => Some(0.0),
            Self::Curious => Some(1.0),
            Self::Personable => Some(2.0),
            Self::Willing => Some(4.0),
            Self::Amiable => Some(5.0),
            Self::Bold => None,
        }
    }

    /// Tractability score. Positive values settle into `Intrigued` after a
    /// confusing session, negative values into `Anxious`.
    pub const fn tractability(self) -> i8 {
        match self {
            Self::Recalcitrant => -10,
            Self::Intractable => -8,
            Self::Stubborn => -6,
            Self::Aloof => -3,
            Self::Timid => -2,
            Self::Indifferent => 0,
            Self::Curious => 3,
            Self::Personable => 5,
            Self::Willing => 7,
            Self::Amiable => 8,
            Self::Bold => 2,
        }
    }

    /// Multipliers applied to stall requirements.
    pub const fn need_modifiers(self) -> NeedModifiers {
        let (exercise, stimulation, socialization) = match self {
            Self::Recalcitrant | Self::Intractable => (0.8, 0.8, 0.7),
            Self::Stubborn => (0.9, 0.9, 0.8),
            Self::Aloof => (1.0, 1.0, 0.6),
            Self::Timid => (0.9, 1.1, 1.2),
            Self::Indifferent => (1.0, 1.0, 1.0),
            Self::Curious => (1.1, 1.3, 1.1),
            Self::Personable => (1.0, 1.1, 1.4),
            Self::Willing => (1.2, 1.1, 1.2),
            Self::Amiable => (1.1, 1.0, 1.3),
            Self::Bold => (1.3, 1.2, 0.9),
        };
        NeedModifiers {
            exercise,
            stimulation,
            socialization,
        }
    }
}

// ---------------------------------------------------------------------------
// Mood
// ---------------------------------------------------------------------------

/// Transient emotional state. Set daily and nudged by training sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Mood {
    /// Refuses all training.
    #[serde(rename = "Shut-down")]
    ShutDown,
    /// Pushed past its limit.
    #[serde(rename = "Burnt Out")]
    BurntOut,
    /// Badly neglected.
    Depressed,
    /// Needs rest.
    Tired,
    /// Needs are going unmet.
    Withdrawn,
    /// Under-exercised.
    #[serde(rename = "Pent-up")]
    PentUp,
    /// Stressed.
    Anxious,
    /// Having an off day.
    Grumpy,
    /// Content but disengaged.
    Apathetic,
    /// Ready to work.
    Calm,
    /// Happy.
    Cheerful,
    /// Content with its routine.
    Satisfied,
    /// Spirited and unpredictable.
    Sassy,
    /// Quick to learn.
    Perky,
    /// Wants a physical workout.
    Energetic,
    /// Unsure after a surprising session.
    Confused,
    /// Fascinated by the last skill trained.
    Intrigued,
    /// Highly motivated.
    Eager,
    /// In the zone.
    Focused,
}

impl Mood {
    /// All moods.
    pub const ALL: [Self; 19] = [
        Self::ShutDown,
        Self::BurntOut,
        Self::Depressed,
        Self::Tired,
        Self::Withdrawn,
        Self::PentUp,
        Self::Anxious,
        Self::Grumpy,
        Self::Apathetic,
        Self::Calm,
        Self::Cheerful,
        Self::Satisfied,
        Self::Sassy,
        Self::Perky,
        Self::Energetic,
        Self::Confused,
        Self::Intrigued,
        Self::Eager,
        Self::Focused,
    ];

    /// Display label, identical to the serialized form.
    pub const fn label(self) -> &'static str {
        match self {
            Self::ShutDown => "Shut-down",
            Self::BurntOut => "Burnt Out",
            Self::Depressed => "Depressed",
            Self::Tired => "Tired",
            Self::Withdrawn => "Withdrawn",
            Self::PentUp => "Pent-up",
            Self::Anxious => "Anxious",
            Self::Grumpy => "Grumpy",
            Self::Apathetic => "Apathetic",
            Self::Calm => "Calm",
            Self::Cheerful => "Cheerful",
            Self::Satisfied => "Satisfied",
            Self::Sassy => "Sassy",
            Self::Perky => "Perky",
            Self::Energetic => "Energetic",
            Self::Confused => "Confused",
            Self::Intrigued => "Intrigued",
            Self::Eager => "Eager",
            Self::Focused => "Focused",
        }
    }
}

impl core::fmt::Display for Mood {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Skills and needs
// ---------------------------------------------------------------------------

/// Grouping of catalog skills. `Care` skills bypass the fatigue gate and
/// rest the horse instead of tiring it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub enum SkillCategory {
    /// First handling: halter, lead, stand, tie, load.
    Foundation,
    /// Groundwork: lunging, tack, voice cues.
    Ground,
    /// The basic gaits under saddle.
    BasicRiding,
    /// Lateral work, poles and self carriage.
    Intermediate,
    /// Collection, extension and lead changes.
    Advanced,
    /// Competition disciplines.
    Discipline,
    /// Grooming and husbandry.
    Care,
    /// Ground driving in harness.
    Driving,
}

/// One of the four satisfaction channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum NeedChannel {
    /// Physical work.
    Exercise,
    /// Mental engagement.
    Stimulation,
    /// Feed.
    Nutrition,
    /// Company.
    Socialization,
}

impl NeedChannel {
    /// All channels in the order they are reported.
    pub const ALL: [Self; 4] = [
        Self::Exercise,
        Self::Stimulation,
        Self::Nutrition,
        Self::Socialization,
    ];
}

// ---------------------------------------------------------------------------
// Session duration
// ---------------------------------------------------------------------------

/// Length of one training session. Only four lengths are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum SessionDuration {
    /// Five minutes.
    Five,
    /// Fifteen minutes.
    Fifteen,
    /// Half an hour.
    Thirty,
    /// A full hour.
    Sixty,
}

impl SessionDuration {
    /// All offered durations, shortest first.
    pub const ALL: [Self; 4] = [Self::Five, Self::Fifteen, Self::Thirty, Self::Sixty];

    /// Length in minutes.
    pub const fn minutes(self) -> u32 {
        match self {
            Self::Five => 5,
            Self::Fifteen => 15,
            Self::Thirty => 30,
            Self::Sixty => 60,
        }
    }
}

impl TryFrom<u32> for SessionDuration {
    type Error = TypesError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        match minutes {
            5 => Ok(Self::Five),
            15 => Ok(Self::Fifteen),
            30 => Ok(Self::Thirty),
            60 => Ok(Self::Sixty),
            _ => Err(TypesError::UnsupportedDuration { minutes }),
        }
    }
}

impl From<SessionDuration> for u32 {
    fn from(duration: SessionDuration) -> Self {
        duration.minutes()
    }
}
