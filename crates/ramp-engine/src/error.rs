use thiserror::Error;

/// Errors produced by the gradient model, the rasterizer and PNG export.
#[derive(Debug, Error)]
pub enum Error {
    /// A gradient needs at least two colors before stops can be spaced.
    #[error("gradient needs at least 2 colors, got {colors}")]
    InvalidGradientSpec { colors: usize },

    #[error("color index {index} out of range for {len} colors")]
    IndexOutOfRange { index: usize, len: usize },

    /// Input that is not a `#rrggbb` literal.
    #[error("invalid color {0:?}: expected #rrggbb")]
    InvalidColor(String),

    #[error("invalid angle {0}: expected an integer in [0, 360]")]
    InvalidAngle(i64),

    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
