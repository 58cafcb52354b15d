//! Paint model used by the gradient state and the rasterizer.
//!
//! Scope:
//! - color representation (opaque 24-bit sRGB)
//! - linear gradients and CSS angle geometry
//! - the fixed swatch palette
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;
pub mod palette;

pub use color::Color;
pub use gradient::{ColorStop, LinearGradient, css_gradient_line, evenly_spaced_stops};
pub use palette::PALETTE;
