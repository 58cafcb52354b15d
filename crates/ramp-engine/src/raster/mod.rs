//! CPU rasterization of gradient specs and PNG export.
//!
//! The geometry lives in `paint::gradient`; this module only walks pixels.
//! Pixel storage is behind [`Surface`] so the sampling loop does not care
//! whether it writes into an `image` buffer or something else.

pub mod export;
mod render;
mod surface;

pub use export::{ExportConfig, export_png, export_png_at};
pub use render::{render_into, render_to_raster};
pub use surface::{PixelBuffer, Surface};
