use palette::Srgb;
use serde::Serialize;
use serde_with::DeserializeFromStr;
use strum::{AsRefStr, Display as StrumDisplay, EnumCount, EnumIter, EnumString, IntoEnumIterator};

/// The eight base emotions, in wheel order (clockwise from the positive x axis).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    EnumCount,
    AsRefStr,
    StrumDisplay,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum EmotionId {
    Joy,
    Trust,
    Fear,
    Surprise,
    Sadness,
    Disgust,
    Anger,
    Anticipation,
}

impl EmotionId {
    pub fn as_index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::iter().nth(idx)
    }
}

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
pub enum IntensityLevel {
    Mild,
    #[default]
    Medium,
    Strong,
}

impl IntensityLevel {
    pub fn score(self) -> u8 {
        match self {
            Self::Mild => 1,
            Self::Medium => 2,
            Self::Strong => 3,
        }
    }

    /// Ring position counted outward from the center. Strong sits innermost.
    pub fn ring(self) -> usize {
        match self {
            Self::Strong => 0,
            Self::Medium => 1,
            Self::Mild => 2,
        }
    }

    pub fn from_ring(ring: usize) -> Option<Self> {
        match ring {
            0 => Some(Self::Strong),
            1 => Some(Self::Medium),
            2 => Some(Self::Mild),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntensityTier {
    pub label: String,
    pub color: Srgb<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Emotion {
    pub id: EmotionId,
    /// Canonical angle in degrees.
    pub angle: f64,
    pub color: Srgb<u8>,
    pub mild: IntensityTier,
    pub medium: IntensityTier,
    pub strong: IntensityTier,
    pub description: String,
}

impl Emotion {
    pub fn tier(&self, level: IntensityLevel) -> &IntensityTier {
        match level {
            IntensityLevel::Mild => &self.mild,
            IntensityLevel::Medium => &self.medium,
            IntensityLevel::Strong => &self.strong,
        }
    }

    /// Tiers ordered from the center outward.
    pub fn tiers(&self) -> [(IntensityLevel, &IntensityTier); 3] {
        [
            (IntensityLevel::Strong, &self.strong),
            (IntensityLevel::Medium, &self.medium),
            (IntensityLevel::Mild, &self.mild),
        ]
    }
}
