pub mod view;

pub use view::draw;

pub const OUTLINE_WIDTH: f64 = 1.5;
pub const DISC_OUTLINE_WIDTH: f64 = 2.0;
pub const LABEL_HALO_WIDTH: f64 = 3.0;
pub const FONT_FAMILY: &str = "Sans";

// Selected rings get a soft glow, a colored band and a thin white core, drawn in that order.
pub const GLOW_WIDTH: f64 = 10.0;
pub const GLOW_ALPHA: f64 = 0.35;
pub const HIGHLIGHT_WIDTH: f64 = 6.0;
pub const HIGHLIGHT_CORE_WIDTH: f64 = 3.0;
