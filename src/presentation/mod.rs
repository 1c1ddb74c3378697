// Presentation layer - HTTP surface (the rendering boundary)
pub mod app_state;
pub mod handlers;
