use crate::emotion::EmotionId;
use crate::selection::Selection;
use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString, IntoEnumIterator};

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct DyadName(String);

crate::impl_string_newtype!(DyadName);

/// Dyad class by how many wheel steps separate the two emotions.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    AsRefStr,
    StrumDisplay,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum DyadCategory {
    #[default]
    Primary,
    Secondary,
    Tertiary,
    Opposite,
}

impl DyadCategory {
    pub fn steps(self) -> usize {
        match self {
            Self::Primary => 1,
            Self::Secondary => 2,
            Self::Tertiary => 3,
            Self::Opposite => 4,
        }
    }

    pub fn from_steps(steps: usize) -> Option<Self> {
        Self::iter().find(|c| c.steps() == steps)
    }

    /// Angular separation between the two emotions for a wheel of `segment_width` degrees.
    pub fn separation(self, segment_width: f64) -> f64 {
        self.steps() as f64 * segment_width
    }

    pub fn intensity(self) -> DyadIntensity {
        match self {
            Self::Primary => DyadIntensity::Strong,
            Self::Secondary => DyadIntensity::Moderate,
            Self::Tertiary => DyadIntensity::Mild,
            Self::Opposite => DyadIntensity::Complex,
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum DyadIntensity {
    Strong,
    Moderate,
    Mild,
    Complex,
}

impl DyadIntensity {
    pub fn description(self) -> &'static str {
        match self {
            Self::Strong => {
                "This is a PRIMARY DYAD - the strongest emotional blend, formed by adjacent emotions \
                 on the wheel. These combinations create powerful, well-recognized emotional states."
            }
            Self::Moderate => {
                "This is a SECONDARY DYAD - a moderate emotional blend, with one emotion between the \
                 pair. These create complex but recognizable emotional experiences."
            }
            Self::Mild => {
                "This is a TERTIARY DYAD - a subtle emotional blend, with two emotions between the \
                 pair. These create nuanced, sophisticated emotional states."
            }
            Self::Complex => {
                "This is an OPPOSITE DYAD - a complex emotional blend of contradictory emotions. \
                 These create paradoxical or conflicted emotional experiences."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dyad {
    pub name: DyadName,
    pub emotions: [EmotionId; 2],
    pub category: DyadCategory,
    pub intensity: DyadIntensity,
    pub description: String,
    pub explanation: String,
}

impl Dyad {
    pub fn key(&self) -> [EmotionId; 2] {
        sorted_pair(self.emotions)
    }

    /// Unordered match against a pair of emotions.
    pub fn matches(&self, pair: [EmotionId; 2]) -> bool {
        self.key() == sorted_pair(pair)
    }

    pub fn contains(&self, emotion: EmotionId) -> bool {
        self.emotions.contains(&emotion)
    }

    /// Sum of the selected intensity scores of both emotions, 2 to 6.
    /// Emotions without a chosen intensity count as medium.
    pub fn score(&self, selection: &Selection) -> u8 {
        self.emotions
            .iter()
            .map(|&e| selection.intensity_of(e).unwrap_or_default().score())
            .sum()
    }
}

/// Orders a pair by emotion name.
pub fn sorted_pair([a, b]: [EmotionId; 2]) -> [EmotionId; 2] {
    if a.as_ref() <= b.as_ref() { [a, b] } else { [b, a] }
}

pub fn score_description(score: u8) -> &'static str {
    match score {
        2 => "Very Mild - Subtle emotional experience with low intensity",
        3 => "Mild to Moderate - Gentle emotional blend with modest impact",
        4 => "Moderate - Balanced emotional state with noticeable presence",
        5 => "Moderate to Strong - Powerful emotional blend with significant impact",
        6 => "Very Strong - Intense emotional experience at maximum power",
        _ => "Unique emotional intensity",
    }
}
