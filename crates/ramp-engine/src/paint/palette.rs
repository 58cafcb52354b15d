use super::Color;

/// Fixed swatch palette offered next to the free-form color input.
pub const PALETTE: [Color; 14] = [
    Color::rgb(0xff, 0x00, 0x00),
    Color::rgb(0xff, 0x45, 0x00),
    Color::rgb(0xff, 0xa5, 0x00),
    Color::rgb(0xff, 0xff, 0x00),
    Color::rgb(0x9a, 0xcd, 0x32),
    Color::rgb(0x00, 0x80, 0x00),
    Color::rgb(0x40, 0xe0, 0xd0),
    Color::rgb(0x00, 0x00, 0xff),
    Color::rgb(0x4b, 0x00, 0x82),
    Color::rgb(0x80, 0x00, 0x80),
    Color::rgb(0xff, 0x69, 0xb4),
    Color::rgb(0xff, 0xff, 0xff),
    Color::rgb(0x80, 0x80, 0x80),
    Color::rgb(0x00, 0x00, 0x00),
];

/// Palette entry at `index`, if any.
#[inline]
pub fn swatch(index: usize) -> Option<Color> {
    PALETTE.get(index).copied()
}
