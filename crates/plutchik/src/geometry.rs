//! Polar layout of the wheel and hit-testing.
//!
//! Angles are in degrees, measured clockwise from the positive x axis in screen space
//! (y grows downward). Radii and points are relative to the wheel center.

use crate::config::WheelConfig;
use crate::emotion::{Emotion, EmotionId, IntensityLevel};
use strum::EnumCount;
use thiserror::Error;

const ANGLE_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn polar(angle: f64, radius: f64) -> Self {
        let rad = angle.to_radians();
        Self::new(radius * rad.cos(), radius * rad.sin())
    }

    pub fn distance(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Angle of the point around the origin, in `[0, 360)`.
    pub fn angle(&self) -> f64 {
        normalize_degrees(self.y.atan2(self.x).to_degrees())
    }

    pub fn offset_from(&self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Shortest distance between two angles, in `[0, 180]`.
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs().rem_euclid(360.0);
    diff.min(360.0 - diff)
}

/// Four increasing radii bounding the three intensity rings.
///
/// `[r0, r1)` is the strong ring, `[r1, r2)` medium and `[r2, r3]` mild.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingBounds {
    pub r0: f64,
    pub r1: f64,
    pub r2: f64,
    pub r3: f64,
}

impl RingBounds {
    pub fn from_width(inner: f64, width: f64) -> Self {
        Self {
            r0: inner,
            r1: inner + width,
            r2: inner + 2.0 * width,
            r3: inner + 3.0 * width,
        }
    }

    pub fn radii(&self) -> [f64; 4] {
        [self.r0, self.r1, self.r2, self.r3]
    }

    /// Inner and outer radius of a ring.
    pub fn ring(&self, level: IntensityLevel) -> (f64, f64) {
        let radii = self.radii();
        let i = level.ring();
        (radii[i], radii[i + 1])
    }

    pub fn mid(&self, level: IntensityLevel) -> f64 {
        let (inner, outer) = self.ring(level);
        (inner + outer) / 2.0
    }

    pub fn contains(&self, distance: f64) -> bool {
        (self.r0..=self.r3).contains(&distance)
    }

    pub fn level_at(&self, distance: f64) -> Option<IntensityLevel> {
        if !self.contains(distance) {
            None
        } else if distance < self.r1 {
            Some(IntensityLevel::Strong)
        } else if distance < self.r2 {
            Some(IntensityLevel::Medium)
        } else {
            Some(IntensityLevel::Mild)
        }
    }
}

/// Angular extent of one emotion's segment. `start` may be negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentSpan {
    pub start: f64,
    pub end: f64,
}

impl SegmentSpan {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("inner radius must be finite and non-negative, got {0}")]
    InnerRadius(f64),
    #[error("ring width must be finite and positive, got {0}")]
    RingWidth(f64),
    #[error("label gap must be finite and non-negative, got {0}")]
    LabelGap(f64),
    #[error("canvas of {size}px cannot hold a wheel needing {needed}px")]
    Canvas { size: f64, needed: f64 },
    #[error("expected {expected} emotions on the wheel, found {found}")]
    SegmentCount { expected: usize, found: usize },
    #[error("{emotion} is listed at position {index}, out of wheel order")]
    Order { emotion: EmotionId, index: usize },
    #[error("{emotion} sits at {angle} degrees, expected {expected}")]
    Angle {
        emotion: EmotionId,
        angle: f64,
        expected: f64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct WheelGeometry {
    rings: RingBounds,
    label_radius: f64,
    canvas_size: f64,
    segments: Vec<(EmotionId, f64)>,
    segment_width: f64,
}

impl WheelGeometry {
    pub fn new(config: &WheelConfig, emotions: &[Emotion]) -> Result<Self, GeometryError> {
        let WheelConfig {
            inner_radius,
            ring_width,
            canvas_size,
            label_gap,
        } = *config;

        if !inner_radius.is_finite() || inner_radius < 0.0 {
            return Err(GeometryError::InnerRadius(inner_radius));
        }
        if !ring_width.is_finite() || ring_width <= 0.0 {
            return Err(GeometryError::RingWidth(ring_width));
        }
        if !label_gap.is_finite() || label_gap < 0.0 {
            return Err(GeometryError::LabelGap(label_gap));
        }

        let rings = RingBounds::from_width(inner_radius, ring_width);
        let label_radius = rings.r3 + label_gap;
        let needed = 2.0 * label_radius;
        if !(canvas_size >= needed) {
            return Err(GeometryError::Canvas {
                size: canvas_size,
                needed,
            });
        }

        if emotions.len() != EmotionId::COUNT {
            return Err(GeometryError::SegmentCount {
                expected: EmotionId::COUNT,
                found: emotions.len(),
            });
        }

        let segment_width = 360.0 / emotions.len() as f64;
        let segments = emotions
            .iter()
            .enumerate()
            .map(|(index, emotion)| {
                if emotion.id.as_index() != index {
                    return Err(GeometryError::Order {
                        emotion: emotion.id,
                        index,
                    });
                }
                let expected = index as f64 * segment_width;
                if angular_distance(emotion.angle, expected) > ANGLE_EPSILON {
                    return Err(GeometryError::Angle {
                        emotion: emotion.id,
                        angle: emotion.angle,
                        expected,
                    });
                }
                Ok((emotion.id, expected))
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!(
            "Wheel geometry: rings {:?}, {} segments of {} degrees",
            rings.radii(),
            segments.len(),
            segment_width
        );

        Ok(Self {
            rings,
            label_radius,
            canvas_size,
            segments,
            segment_width,
        })
    }

    pub fn ring_boundaries(&self) -> RingBounds {
        self.rings
    }

    pub fn segment_width(&self) -> f64 {
        self.segment_width
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Side of the square area the wheel is drawn in.
    pub fn canvas_size(&self) -> f64 {
        self.canvas_size
    }

    /// Radius at which emotion names are placed, outside the mild ring.
    pub fn label_radius(&self) -> f64 {
        self.label_radius
    }

    pub fn angle_of(&self, emotion: EmotionId) -> f64 {
        emotion.as_index() as f64 * self.segment_width
    }

    pub fn segment_span(&self, emotion: EmotionId) -> SegmentSpan {
        let center = self.angle_of(emotion);
        let half = self.segment_width / 2.0;
        SegmentSpan {
            start: center - half,
            end: center + half,
        }
    }

    /// Center of an emotion's ring: canonical angle at the ring's mid radius.
    pub fn anchor(&self, emotion: EmotionId, level: IntensityLevel) -> Point {
        Point::polar(self.angle_of(emotion), self.rings.mid(level))
    }

    /// Emotion whose segment covers `angle`.
    ///
    /// A point exactly on the border between two segments belongs to the neighbour with the
    /// lower wheel index.
    pub fn segment_at(&self, angle: f64) -> Option<EmotionId> {
        if !angle.is_finite() {
            return None;
        }
        let angle = normalize_degrees(angle);
        let half = self.segment_width / 2.0;

        self.segments
            .iter()
            .map(|&(id, center)| (id, angular_distance(angle, center)))
            .min_by(|(a_id, a), (b_id, b)| {
                if (a - b).abs() <= ANGLE_EPSILON {
                    a_id.cmp(b_id)
                } else {
                    a.total_cmp(b)
                }
            })
            .filter(|&(_, diff)| diff <= half + ANGLE_EPSILON)
            .map(|(id, _)| id)
    }

    /// Maps an offset from the wheel center to the emotion and ring under it.
    pub fn locate(&self, x: f64, y: f64) -> Option<(EmotionId, IntensityLevel)> {
        let point = Point::new(x, y);
        let level = self.rings.level_at(point.distance())?;
        let emotion = self.segment_at(point.angle())?;
        Some((emotion, level))
    }

    pub fn locate_point(&self, point: Point) -> Option<(EmotionId, IntensityLevel)> {
        self.locate(point.x, point.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use strum::IntoEnumIterator;

    fn geometry() -> WheelGeometry {
        let catalog = Catalog::builtin().unwrap();
        WheelGeometry::new(&WheelConfig::default(), catalog.emotions()).unwrap()
    }

    fn at(angle: f64, radius: f64) -> (f64, f64) {
        let p = Point::polar(angle, radius);
        (p.x, p.y)
    }

    #[test]
    fn test_ring_boundaries_from_defaults() {
        let rings = geometry().ring_boundaries();
        assert_eq!(rings.radii(), [80.0, 130.0, 180.0, 230.0]);
        assert_eq!(rings.ring(IntensityLevel::Strong), (80.0, 130.0));
        assert_eq!(rings.ring(IntensityLevel::Mild), (180.0, 230.0));
        assert_eq!(rings.mid(IntensityLevel::Medium), 155.0);
    }

    #[test]
    fn test_level_at_ring_edges() {
        let rings = geometry().ring_boundaries();
        assert_eq!(rings.level_at(79.999), None);
        assert_eq!(rings.level_at(80.0), Some(IntensityLevel::Strong));
        assert_eq!(rings.level_at(130.0), Some(IntensityLevel::Medium));
        assert_eq!(rings.level_at(180.0), Some(IntensityLevel::Mild));
        assert_eq!(rings.level_at(230.0), Some(IntensityLevel::Mild));
        assert_eq!(rings.level_at(230.001), None);
        assert_eq!(rings.level_at(f64::NAN), None);
    }

    #[test]
    fn test_locate_medium_anchor_of_every_emotion() {
        let geometry = geometry();
        for emotion in EmotionId::iter() {
            for level in IntensityLevel::iter() {
                let anchor = geometry.anchor(emotion, level);
                assert_eq!(geometry.locate_point(anchor), Some((emotion, level)));
            }
        }
    }

    #[test]
    fn test_locate_nearest_within_half_width() {
        let geometry = geometry();
        for emotion in EmotionId::iter() {
            let center = geometry.angle_of(emotion);
            for offset in [-22.0, -10.0, 0.0, 10.0, 22.0] {
                let (x, y) = at(center + offset, 200.0);
                assert_eq!(
                    geometry.locate(x, y),
                    Some((emotion, IntensityLevel::Mild)),
                    "{emotion} at offset {offset}"
                );
            }
        }
    }

    #[test]
    fn test_locate_outside_wheel() {
        let geometry = geometry();
        assert_eq!(geometry.locate(0.0, 0.0), None);
        for angle in [0.0, 45.0, 123.0, 300.0] {
            let (x, y) = at(angle, 79.0);
            assert_eq!(geometry.locate(x, y), None);
            let (x, y) = at(angle, 231.0);
            assert_eq!(geometry.locate(x, y), None);
        }
        assert_eq!(geometry.locate(f64::NAN, 100.0), None);
    }

    #[test]
    fn test_screen_axes() {
        let geometry = geometry();
        // y grows downward, so the positive y axis is 90 degrees clockwise from +x.
        assert_eq!(
            geometry.locate(0.0, 150.0),
            Some((EmotionId::Fear, IntensityLevel::Medium))
        );
        assert_eq!(
            geometry.locate(-100.0, 0.0),
            Some((EmotionId::Sadness, IntensityLevel::Strong))
        );
        assert_eq!(
            geometry.locate(0.0, -200.0),
            Some((EmotionId::Anger, IntensityLevel::Mild))
        );
    }

    #[test]
    fn test_segment_at_is_circular() {
        let geometry = geometry();
        for step in 0..72 {
            let angle = step as f64 * 5.0 + 0.5;
            assert_eq!(geometry.segment_at(angle), geometry.segment_at(angle + 360.0));
            assert_eq!(geometry.segment_at(angle), geometry.segment_at(angle - 720.0));
        }
    }

    #[test]
    fn test_boundary_goes_to_lower_index() {
        let geometry = geometry();
        assert_eq!(geometry.segment_at(22.5), Some(EmotionId::Joy));
        assert_eq!(geometry.segment_at(67.5), Some(EmotionId::Trust));
        assert_eq!(geometry.segment_at(337.5), Some(EmotionId::Joy));
        assert_eq!(geometry.segment_at(-22.5), Some(EmotionId::Joy));
        assert_eq!(geometry.segment_at(f64::INFINITY), None);
    }

    #[test]
    fn test_segment_span() {
        let geometry = geometry();
        let joy = geometry.segment_span(EmotionId::Joy);
        assert_eq!(joy, SegmentSpan { start: -22.5, end: 22.5 });
        assert_eq!(joy.center(), 0.0);

        let anticipation = geometry.segment_span(EmotionId::Anticipation);
        assert_eq!(anticipation.start, 292.5);
        assert_eq!(anticipation.end, 337.5);
        assert_eq!(anticipation.width(), 45.0);
    }

    #[test]
    fn test_span_center_resolves_to_emotion() {
        let geometry = geometry();
        let rings = geometry.ring_boundaries();
        for emotion in EmotionId::iter() {
            let span = geometry.segment_span(emotion);
            let (x, y) = at(span.center(), rings.mid(IntensityLevel::Medium));
            assert_eq!(geometry.locate(x, y), Some((emotion, IntensityLevel::Medium)));
        }
    }

    #[test]
    fn test_rejects_bad_radii() {
        let emotions = Catalog::builtin().unwrap().emotions().to_vec();

        let config = WheelConfig {
            inner_radius: -1.0,
            ..WheelConfig::default()
        };
        assert_eq!(
            WheelGeometry::new(&config, &emotions),
            Err(GeometryError::InnerRadius(-1.0))
        );

        let config = WheelConfig {
            ring_width: 0.0,
            ..WheelConfig::default()
        };
        assert_eq!(
            WheelGeometry::new(&config, &emotions),
            Err(GeometryError::RingWidth(0.0))
        );

        let config = WheelConfig {
            ring_width: f64::NAN,
            ..WheelConfig::default()
        };
        assert!(matches!(
            WheelGeometry::new(&config, &emotions),
            Err(GeometryError::RingWidth(_))
        ));

        let config = WheelConfig {
            canvas_size: 300.0,
            ..WheelConfig::default()
        };
        assert_eq!(
            WheelGeometry::new(&config, &emotions),
            Err(GeometryError::Canvas {
                size: 300.0,
                needed: 540.0
            })
        );
    }

    #[test]
    fn test_rejects_mismatched_emotions() {
        let mut emotions = Catalog::builtin().unwrap().emotions().to_vec();
        let config = WheelConfig::default();

        assert_eq!(
            WheelGeometry::new(&config, &emotions[..7]),
            Err(GeometryError::SegmentCount {
                expected: 8,
                found: 7
            })
        );

        emotions[2].angle = 100.0;
        assert_eq!(
            WheelGeometry::new(&config, &emotions),
            Err(GeometryError::Angle {
                emotion: EmotionId::Fear,
                angle: 100.0,
                expected: 90.0
            })
        );

        emotions.swap(0, 1);
        assert_eq!(
            WheelGeometry::new(&config, &emotions),
            Err(GeometryError::Order {
                emotion: EmotionId::Trust,
                index: 0
            })
        );
    }

    #[test]
    fn test_angle_helpers() {
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
        assert_eq!(angular_distance(350.0, 10.0), 20.0);
        assert_eq!(angular_distance(0.0, 180.0), 180.0);
        assert_eq!(angular_distance(-45.0, 315.0), 0.0);
    }
}
