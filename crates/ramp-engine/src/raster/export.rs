//! PNG export of a gradient spec.

use std::path::PathBuf;

use crate::coords::CanvasSize;
use crate::error::Result;
use crate::state::GradientSpec;

use super::render_to_raster;

/// Where and how large exported images are written.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    pub size: CanvasSize,
    pub dir: PathBuf,
    /// File stem before the timestamp, e.g. `gradient` → `gradient-<ms>.png`.
    pub prefix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            size: CanvasSize::EXPORT,
            dir: PathBuf::from("."),
            prefix: "gradient".to_string(),
        }
    }
}

impl ExportConfig {
    pub fn file_name(&self, unix_millis: i64) -> String {
        format!("{}-{}.png", self.prefix, unix_millis)
    }
}

/// Renders `spec`, encodes it as PNG and writes it under `config.dir`
/// with the current Unix time in milliseconds in the file name.
pub fn export_png(spec: &GradientSpec, config: &ExportConfig) -> Result<PathBuf> {
    export_png_at(spec, config, chrono::Utc::now().timestamp_millis())
}

/// Same as [`export_png`] with an explicit timestamp.
pub fn export_png_at(spec: &GradientSpec, config: &ExportConfig, unix_millis: i64) -> Result<PathBuf> {
    let buffer = render_to_raster(spec, config.size.width, config.size.height)?;
    let png = buffer.encode_png()?;

    let path = config.dir.join(config.file_name(unix_millis));
    std::fs::write(&path, &png)?;

    log::info!("exported {} ({} bytes) to {}", spec, png.len(), path.display());
    Ok(path)
}
