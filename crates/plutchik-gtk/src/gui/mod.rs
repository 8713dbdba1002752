pub mod app;
pub mod panel;
pub mod theme;
pub mod wheel;
