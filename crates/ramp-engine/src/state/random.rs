use rand::Rng;

use crate::paint::Color;

use super::{GradientAngle, GradientSpec};

pub const MIN_COLORS: usize = 2;
pub const MAX_COLORS: usize = 4;

/// Uniform 24-bit color; the high byte becomes red.
pub fn random_color<R: Rng>(rng: &mut R) -> Color {
    Color::from_u24(rng.random_range(0..=Color::MAX_U24))
}

/// Draws a fresh spec: 2 to 4 uniformly random colors and an angle
/// uniformly drawn from the 361 whole degrees in [0, 360].
pub fn randomize<R: Rng>(rng: &mut R) -> GradientSpec {
    let count = rng.random_range(MIN_COLORS..=MAX_COLORS);
    let colors = (0..count).map(|_| random_color(rng)).collect();
    let angle = GradientAngle::from_raw(rng.random_range(0..=GradientAngle::MAX_DEGREES));

    log::debug!("randomized gradient: {count} colors at {angle}");
    GradientSpec::new(colors, angle)
}
