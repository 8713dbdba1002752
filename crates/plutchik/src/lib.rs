pub mod catalog;
pub mod color;
pub mod config;
pub mod data;
pub mod dyad;
pub mod emotion;
pub mod geometry;
pub mod macros;
pub mod scene;
pub mod selection;
pub mod wheel;

pub use catalog::{Catalog, CatalogError};
pub use dyad::{Dyad, DyadCategory, DyadIntensity, DyadName};
pub use emotion::{Emotion, EmotionId, IntensityLevel, IntensityTier};
pub use geometry::{GeometryError, Point, RingBounds, SegmentSpan, WheelGeometry};
pub use scene::{DrawCommand, Ink};
pub use selection::{Pick, Selection, Toggle};
pub use wheel::{Reading, Wheel, WheelError, WheelEvent, WheelState};
