//! Wheel state and the reducer that drives it.
//!
//! [`Wheel`] holds the immutable parts (geometry and tables). Interaction is a pure function
//! from the current [`WheelState`] and a [`WheelEvent`] to the next state; presentation is
//! derived from the state with [`Wheel::reading`] and [`Wheel::scene`].

use crate::catalog::{Catalog, CatalogError};
use crate::config::WheelConfig;
use crate::dyad::{Dyad, DyadCategory, DyadName, score_description};
use crate::emotion::{EmotionId, IntensityLevel};
use crate::geometry::{GeometryError, Point, WheelGeometry};
use crate::selection::{Selection, Toggle};
use palette::Srgb;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WheelError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WheelState {
    pub selection: Selection,
    /// Category shown in the dyad browse list.
    pub browsing: DyadCategory,
    pub hover: Option<(EmotionId, IntensityLevel)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WheelEvent {
    PointerMoved(Point),
    PointerLeft,
    /// A press at a wheel-local point.
    Pressed(Point),
    RingChosen {
        emotion: EmotionId,
        intensity: IntensityLevel,
    },
    IntensityChosen {
        emotion: EmotionId,
        intensity: IntensityLevel,
    },
    DyadChosen(DyadName),
    CategoryBrowsed(DyadCategory),
    Cleared,
}

/// What the result panel shows for a two-emotion selection.
#[derive(Debug, Clone, PartialEq)]
pub enum Reading<'a> {
    Dyad {
        dyad: &'a Dyad,
        score: u8,
        gradient: [Srgb<u8>; 3],
    },
    Custom {
        emotions: [EmotionId; 2],
        gradient: [Srgb<u8>; 3],
    },
}

impl Reading<'_> {
    pub fn emotions(&self) -> [EmotionId; 2] {
        match self {
            Self::Dyad { dyad, .. } => dyad.emotions,
            Self::Custom { emotions, .. } => *emotions,
        }
    }

    pub fn gradient(&self) -> [Srgb<u8>; 3] {
        match self {
            Self::Dyad { gradient, .. } | Self::Custom { gradient, .. } => *gradient,
        }
    }

    pub fn score_description(&self) -> Option<&'static str> {
        match self {
            Self::Dyad { score, .. } => Some(score_description(*score)),
            Self::Custom { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wheel {
    geometry: WheelGeometry,
    catalog: Catalog,
}

impl Wheel {
    /// Builds the wheel over the built-in tables.
    pub fn new(config: &WheelConfig) -> Result<Self, WheelError> {
        let catalog = Catalog::builtin()?;
        let geometry = WheelGeometry::new(config, catalog.emotions())?;
        Ok(Self::from_parts(geometry, catalog))
    }

    pub fn from_parts(geometry: WheelGeometry, catalog: Catalog) -> Self {
        Self { geometry, catalog }
    }

    pub fn geometry(&self) -> &WheelGeometry {
        &self.geometry
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn reduce(&self, state: &WheelState, event: WheelEvent) -> WheelState {
        let mut next = state.clone();
        match event {
            WheelEvent::PointerMoved(point) => {
                next.hover = self.geometry.locate_point(point);
            }
            WheelEvent::PointerLeft => {
                next.hover = None;
            }
            WheelEvent::Pressed(point) => {
                if let Some((emotion, intensity)) = self.geometry.locate_point(point) {
                    toggle(&mut next.selection, emotion, intensity);
                }
            }
            WheelEvent::RingChosen { emotion, intensity } => {
                toggle(&mut next.selection, emotion, intensity);
            }
            WheelEvent::IntensityChosen { emotion, intensity } => {
                if !next.selection.set_intensity(emotion, intensity) {
                    log::debug!("Ignoring intensity for unselected {}", emotion);
                }
            }
            WheelEvent::DyadChosen(name) => match self.catalog.dyad_named(&name) {
                Some(dyad) => {
                    log::debug!("Selecting dyad {}", dyad.name);
                    next.selection.select_pair(dyad.emotions);
                }
                None => log::warn!("Unknown dyad {}", name),
            },
            WheelEvent::CategoryBrowsed(category) => {
                next.browsing = category;
            }
            WheelEvent::Cleared => {
                next.selection.clear();
            }
        }
        next
    }

    pub fn reading(&self, state: &WheelState) -> Option<Reading<'_>> {
        let pair = state.selection.pair()?;
        let reading = match self.catalog.find_pair(pair) {
            Some(dyad) => Reading::Dyad {
                dyad,
                score: dyad.score(&state.selection),
                gradient: self.catalog.gradient(dyad.emotions),
            },
            None => Reading::Custom {
                emotions: pair,
                gradient: self.catalog.gradient(pair),
            },
        };
        Some(reading)
    }

    /// Reading for two explicit picks. The same emotion twice reads as a custom blend
    /// of that emotion with itself.
    pub fn reading_for(&self, picks: [(EmotionId, IntensityLevel); 2]) -> Reading<'_> {
        let mut state = WheelState::default();
        for (emotion, intensity) in picks {
            state.selection.toggle(emotion, intensity);
        }
        let emotions = picks.map(|(emotion, _)| emotion);
        self.reading(&state).unwrap_or_else(|| Reading::Custom {
            emotions,
            gradient: self.catalog.gradient(emotions),
        })
    }

    pub fn browse_list(&self, state: &WheelState) -> impl Iterator<Item = &Dyad> {
        self.catalog.dyads_in(state.browsing)
    }
}

fn toggle(selection: &mut Selection, emotion: EmotionId, intensity: IntensityLevel) {
    match selection.toggle(emotion, intensity) {
        Toggle::Deselected => log::debug!("Deselected {}", emotion),
        Toggle::Adjusted => log::debug!("{} set to {}", emotion, intensity),
        Toggle::Added { evicted: Some(old) } => {
            log::debug!("Selected {} ({}), evicted {}", emotion, intensity, old)
        }
        Toggle::Added { evicted: None } => log::debug!("Selected {} ({})", emotion, intensity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use EmotionId::*;
    use IntensityLevel::*;

    fn wheel() -> Wheel {
        Wheel::new(&WheelConfig::default()).unwrap()
    }

    fn press(
        wheel: &Wheel,
        state: &WheelState,
        emotion: EmotionId,
        level: IntensityLevel,
    ) -> WheelState {
        let point = wheel.geometry().anchor(emotion, level);
        wheel.reduce(state, WheelEvent::Pressed(point))
    }

    #[test]
    fn test_press_toggles_ring() {
        let wheel = wheel();
        let state = press(&wheel, &WheelState::default(), Joy, Strong);
        assert_eq!(state.selection.intensity_of(Joy), Some(Strong));

        let state = press(&wheel, &state, Joy, Strong);
        assert!(state.selection.is_empty());
    }

    #[test]
    fn test_press_outside_is_noop() {
        let wheel = wheel();
        let state = press(&wheel, &WheelState::default(), Fear, Medium);
        let next = wheel.reduce(&state, WheelEvent::Pressed(Point::new(0.0, 0.0)));
        assert_eq!(next, state);
        let next = wheel.reduce(&state, WheelEvent::Pressed(Point::new(500.0, 0.0)));
        assert_eq!(next, state);
    }

    #[test]
    fn test_reduce_leaves_input_untouched() {
        let wheel = wheel();
        let state = WheelState::default();
        let next = wheel.reduce(
            &state,
            WheelEvent::RingChosen {
                emotion: Anger,
                intensity: Mild,
            },
        );
        assert!(state.selection.is_empty());
        assert_eq!(next.selection.len(), 1);
    }

    #[test]
    fn test_three_presses_evict_oldest() {
        let wheel = wheel();
        let mut state = WheelState::default();
        for emotion in [Joy, Trust, Fear] {
            state = press(&wheel, &state, emotion, Medium);
        }
        assert_eq!(state.selection.pair(), Some([Trust, Fear]));
    }

    #[test]
    fn test_reading_for_love() {
        let wheel = wheel();
        let mut state = press(&wheel, &WheelState::default(), Joy, Strong);
        state = press(&wheel, &state, Trust, Mild);

        match wheel.reading(&state) {
            Some(Reading::Dyad { dyad, score, .. }) => {
                assert_eq!(dyad.name.as_str(), "love");
                assert_eq!(score, 4);
            }
            other => panic!("expected love, got {other:?}"),
        }
    }

    #[test]
    fn test_reading_needs_pair() {
        let wheel = wheel();
        let state = press(&wheel, &WheelState::default(), Joy, Strong);
        assert!(wheel.reading(&state).is_none());
    }

    #[test]
    fn test_custom_blend_when_pair_missing() {
        let geometry = wheel().geometry().clone();
        let catalog = Catalog::from_records(crate::data::EMOTIONS, &[]).unwrap();
        let wheel = Wheel::from_parts(geometry, catalog);

        let mut state = press(&wheel, &WheelState::default(), Joy, Mild);
        state = press(&wheel, &state, Sadness, Mild);

        let reading = wheel.reading(&state).unwrap();
        assert!(matches!(reading, Reading::Custom { emotions: [Joy, Sadness], .. }));
        assert_eq!(reading.score_description(), None);
    }

    #[test]
    fn test_dyad_chosen_defaults_to_medium() {
        let wheel = wheel();
        let state = press(&wheel, &WheelState::default(), Joy, Strong);
        let state = wheel.reduce(&state, WheelEvent::DyadChosen(DyadName::new("love")));

        assert_eq!(state.selection.pair(), Some([Joy, Trust]));
        assert_eq!(state.selection.intensity_of(Joy), Some(Strong));
        assert_eq!(state.selection.intensity_of(Trust), Some(Medium));

        let unknown = wheel.reduce(&state, WheelEvent::DyadChosen(DyadName::new("nope")));
        assert_eq!(unknown, state);
    }

    #[test]
    fn test_intensity_chosen_adjusts_score() {
        let wheel = wheel();
        let state = wheel.reduce(
            &WheelState::default(),
            WheelEvent::DyadChosen(DyadName::new("bittersweetness")),
        );
        let state = wheel.reduce(
            &state,
            WheelEvent::IntensityChosen {
                emotion: Sadness,
                intensity: Strong,
            },
        );

        match wheel.reading(&state) {
            Some(Reading::Dyad { score, .. }) => assert_eq!(score, 5),
            other => panic!("expected a dyad, got {other:?}"),
        }

        let ignored = wheel.reduce(
            &state,
            WheelEvent::IntensityChosen {
                emotion: Anger,
                intensity: Strong,
            },
        );
        assert_eq!(ignored, state);
    }

    #[test]
    fn test_reading_for_explicit_picks() {
        let wheel = wheel();
        match wheel.reading_for([(Sadness, Strong), (Joy, Mild)]) {
            Reading::Dyad { dyad, score, .. } => {
                assert_eq!(dyad.name.as_str(), "bittersweetness");
                assert_eq!(score, 4);
            }
            other => panic!("expected bittersweetness, got {other:?}"),
        }
    }

    #[test]
    fn test_reading_for_same_emotion_is_custom() {
        let wheel = wheel();
        let reading = wheel.reading_for([(Fear, Strong), (Fear, Mild)]);
        let fear = wheel.catalog().emotion(Fear).color;
        assert_eq!(
            reading,
            Reading::Custom {
                emotions: [Fear, Fear],
                gradient: [fear, fear, fear],
            }
        );
        assert_eq!(reading.score_description(), None);
    }

    #[test]
    fn test_hover_follows_pointer() {
        let wheel = wheel();
        let point = wheel.geometry().anchor(Surprise, Mild);
        let state = wheel.reduce(&WheelState::default(), WheelEvent::PointerMoved(point));
        assert_eq!(state.hover, Some((Surprise, Mild)));

        let state = wheel.reduce(&state, WheelEvent::PointerMoved(Point::default()));
        assert_eq!(state.hover, None);

        let state = wheel.reduce(&WheelState::default(), WheelEvent::PointerMoved(point));
        let state = wheel.reduce(&state, WheelEvent::PointerLeft);
        assert_eq!(state.hover, None);
    }

    #[test]
    fn test_browse_and_clear() {
        let wheel = wheel();
        let state = wheel.reduce(
            &WheelState::default(),
            WheelEvent::CategoryBrowsed(DyadCategory::Tertiary),
        );
        assert_eq!(wheel.browse_list(&state).count(), 8);
        assert!(
            wheel
                .browse_list(&state)
                .all(|d| d.category == DyadCategory::Tertiary)
        );

        let state = wheel.reduce(&state, WheelEvent::DyadChosen(DyadName::new("delight")));
        let state = wheel.reduce(&state, WheelEvent::Cleared);
        assert!(state.selection.is_empty());
        assert_eq!(state.browsing, DyadCategory::Tertiary);
    }

    #[test]
    fn test_invalid_config_fails_at_construction() {
        let config = WheelConfig {
            ring_width: -5.0,
            ..WheelConfig::default()
        };
        assert!(matches!(
            Wheel::new(&config),
            Err(WheelError::Geometry(GeometryError::RingWidth(_)))
        ));
    }
}
