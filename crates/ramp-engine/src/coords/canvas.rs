use super::Vec2;

/// Raster target size in pixels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    /// Size used for PNG export.
    pub const EXPORT: CanvasSize = CanvasSize::new(1920, 1080);

    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[inline]
    pub const fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }

    /// Center of pixel `(x, y)`.
    #[inline]
    pub fn pixel_center(x: u32, y: u32) -> Vec2 {
        Vec2::new(x as f32 + 0.5, y as f32 + 0.5)
    }
}
