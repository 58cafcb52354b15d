use crate::coords::CanvasSize;
use crate::error::{Error, Result};
use crate::state::GradientSpec;

use super::{PixelBuffer, Surface};

/// Rasterizes `spec` into a new `width × height` buffer.
///
/// Fails with [`Error::InvalidGradientSpec`] for fewer than two colors and
/// [`Error::InvalidCanvas`] for an empty canvas.
pub fn render_to_raster(spec: &GradientSpec, width: u32, height: u32) -> Result<PixelBuffer> {
    spec.validate()?;

    let size = CanvasSize::new(width, height);
    if !size.is_valid() {
        return Err(Error::InvalidCanvas { width, height });
    }

    let mut buffer = PixelBuffer::allocate(size);
    render_into(spec, &mut buffer)?;
    Ok(buffer)
}

/// Fills every pixel of `surface` with `spec`, sampled at pixel centers.
pub fn render_into<S: Surface>(spec: &GradientSpec, surface: &mut S) -> Result<()> {
    let size = surface.size();
    let gradient = spec.linear_gradient(size)?;

    log::debug!(
        "rasterizing {} stops at {} into {}x{}",
        gradient.stops.len(),
        spec.angle,
        size.width,
        size.height
    );

    for y in 0..size.height {
        for x in 0..size.width {
            let color = gradient.sample(CanvasSize::pixel_center(x, y));
            surface.write_pixel(x, y, color);
        }
    }

    Ok(())
}
