use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::coords::CanvasSize;
use crate::error::Result;
use crate::paint::Color;

/// Minimal drawing target for the rasterizer.
pub trait Surface {
    /// Allocates an opaque-black surface of `size`.
    fn allocate(size: CanvasSize) -> Self
    where
        Self: Sized;

    fn size(&self) -> CanvasSize;

    /// Writes one opaque pixel. `x`/`y` must be inside [`size`](Self::size).
    fn write_pixel(&mut self, x: u32, y: u32, color: Color);
}

/// In-memory RGBA8 raster backed by an `image` buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    image: RgbaImage,
}

impl Surface for PixelBuffer {
    fn allocate(size: CanvasSize) -> Self {
        let image = RgbaImage::from_pixel(size.width, size.height, Rgba(Color::black().to_rgba8()));
        Self { image }
    }

    fn size(&self) -> CanvasSize {
        CanvasSize::new(self.image.width(), self.image.height())
    }

    #[inline]
    fn write_pixel(&mut self, x: u32, y: u32, color: Color) {
        self.image.put_pixel(x, y, Rgba(color.to_rgba8()));
    }
}

impl PixelBuffer {
    /// Pixel at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.image
            .get_pixel_checked(x, y)
            .map(|Rgba([r, g, b, _])| Color::rgb(*r, *g, *b))
    }

    /// Raw alpha channel at `(x, y)`.
    pub fn alpha(&self, x: u32, y: u32) -> Option<u8> {
        self.image.get_pixel_checked(x, y).map(|p| p.0[3])
    }

    /// Row-major RGBA8 bytes.
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut out = Cursor::new(Vec::new());
        self.image.write_to(&mut out, ImageFormat::Png)?;
        Ok(out.into_inner())
    }

    pub fn decode_png(bytes: &[u8]) -> Result<Self> {
        let image = image::load_from_memory_with_format(bytes, ImageFormat::Png)?.into_rgba8();
        Ok(Self { image })
    }
}
