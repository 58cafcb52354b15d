//! Coordinate and geometry types shared by the gradient model and the rasterizer.
//!
//! Canonical raster space:
//! - Pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Pixel `(x, y)` covers `[x, x + 1) × [y, y + 1)`; samples are taken at its center.

mod canvas;
mod vec2;

pub use canvas::CanvasSize;
pub use vec2::Vec2;
