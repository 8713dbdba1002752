//! Draw commands for the wheel, derived from [`WheelState`].

use crate::emotion::{EmotionId, IntensityLevel};
use crate::geometry::{Point, SegmentSpan};
use crate::wheel::{Wheel, WheelState};
use palette::Srgb;

pub const TIER_LABEL_SIZE: f64 = 10.0;
pub const NAME_LABEL_SIZE: f64 = 14.0;

/// Paint source. Data colors come from the tables; the rest is left to the theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ink {
    Data(Srgb<u8>),
    Outline,
    Highlight,
    Hover,
    CenterDisc,
    LabelLight,
    LabelDark,
    Title,
}

/// Wheel-local drawing primitive. Angles in degrees, clockwise from +x.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled annular sector with an outline.
    Sector {
        span: SegmentSpan,
        inner: f64,
        outer: f64,
        fill: Ink,
    },
    /// Translucent overlay on the ring under the pointer.
    Hover {
        span: SegmentSpan,
        inner: f64,
        outer: f64,
    },
    /// Glowing outline around a selected ring.
    Highlight {
        span: SegmentSpan,
        inner: f64,
        outer: f64,
    },
    /// Text centered on `at`.
    Label {
        text: String,
        at: Point,
        size: f64,
        bold: bool,
        ink: Ink,
    },
    Disc {
        radius: f64,
        ink: Ink,
    },
}

impl Wheel {
    /// Everything needed to paint `state`, back to front.
    pub fn scene(&self, state: &WheelState) -> Vec<DrawCommand> {
        let geometry = self.geometry();
        let rings = geometry.ring_boundaries();
        let emotions = self.catalog().emotions();

        let ring_command = |emotion: EmotionId, level: IntensityLevel| {
            let (inner, outer) = rings.ring(level);
            (geometry.segment_span(emotion), inner, outer)
        };

        let sectors = emotions.iter().flat_map(|emotion| {
            emotion.tiers().map(|(level, tier)| {
                let (span, inner, outer) = ring_command(emotion.id, level);
                DrawCommand::Sector {
                    span,
                    inner,
                    outer,
                    fill: Ink::Data(tier.color),
                }
            })
        });

        let hover = state.hover.map(|(emotion, level)| {
            let (span, inner, outer) = ring_command(emotion, level);
            DrawCommand::Hover { span, inner, outer }
        });

        let highlights = state.selection.picks().iter().map(|pick| {
            let (span, inner, outer) = ring_command(pick.emotion, pick.intensity);
            DrawCommand::Highlight { span, inner, outer }
        });

        let tier_labels = emotions.iter().flat_map(|emotion| {
            emotion.tiers().map(|(level, tier)| DrawCommand::Label {
                text: tier.label.clone(),
                at: geometry.anchor(emotion.id, level),
                size: TIER_LABEL_SIZE,
                bold: level != IntensityLevel::Mild,
                ink: match level {
                    IntensityLevel::Strong => Ink::LabelLight,
                    _ => Ink::LabelDark,
                },
            })
        });

        let names = emotions.iter().map(|emotion| DrawCommand::Label {
            text: emotion.id.to_string(),
            at: Point::polar(geometry.angle_of(emotion.id), geometry.label_radius()),
            size: NAME_LABEL_SIZE,
            bold: true,
            ink: Ink::Title,
        });

        let disc = DrawCommand::Disc {
            radius: rings.r0,
            ink: Ink::CenterDisc,
        };

        sectors
            .chain(hover)
            .chain(highlights)
            .chain(tier_labels)
            .chain(names)
            .chain(std::iter::once(disc))
            .collect()
    }
}
