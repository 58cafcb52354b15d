//! Ramp engine crate.
//!
//! Gradient state (colors + CSS angle), the CSS-angle to raster geometry,
//! CPU rasterization and PNG export used by the studio front end.

pub mod coords;
pub mod error;
pub mod logging;
pub mod paint;
pub mod raster;
pub mod state;

pub use error::{Error, Result};
pub use raster::{ExportConfig, PixelBuffer, Surface, export_png, render_to_raster};
pub use state::{GradientAngle, GradientSpec, randomize};
