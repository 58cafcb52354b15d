use std::fmt;

use crate::coords::CanvasSize;
use crate::error::{Error, Result};
use crate::paint::{Color, LinearGradient};

use super::{GradientAngle, MIN_COLORS, randomize};

/// Complete description of one gradient: ordered colors plus an angle.
///
/// Color order is stop order. Specs built through [`Default`] or
/// [`randomize`] always carry at least two colors; hand-built specs are
/// checked by [`validate`](Self::validate) before rendering.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct GradientSpec {
    pub colors: Vec<Color>,
    pub angle: GradientAngle,
}

impl Default for GradientSpec {
    /// Hot pink, pale green and white at 45deg.
    fn default() -> Self {
        Self::new(
            vec![
                Color::rgb(0xff, 0x69, 0xb4),
                Color::rgb(0x98, 0xfb, 0x98),
                Color::rgb(0xff, 0xff, 0xff),
            ],
            GradientAngle::from_raw(45),
        )
    }
}

impl GradientSpec {
    pub fn new(colors: Vec<Color>, angle: GradientAngle) -> Self {
        Self { colors, angle }
    }

    /// Random spec drawn from the thread-local generator.
    pub fn random() -> Self {
        randomize(&mut rand::rng())
    }

    /// Returns a copy with the color at `index` replaced.
    pub fn with_color_at(&self, index: usize, color: Color) -> Result<Self> {
        let len = self.colors.len();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }

        let mut colors = self.colors.clone();
        colors[index] = color;
        Ok(Self::new(colors, self.angle))
    }

    /// Returns a copy with a different angle.
    pub fn with_angle(&self, angle: GradientAngle) -> Self {
        Self::new(self.colors.clone(), angle)
    }

    pub fn validate(&self) -> Result<()> {
        if self.colors.len() < MIN_COLORS {
            return Err(Error::InvalidGradientSpec { colors: self.colors.len() });
        }
        Ok(())
    }

    /// Raster gradient equivalent to [`to_css`](Self::to_css) on a box of `size`.
    pub fn linear_gradient(&self, size: CanvasSize) -> Result<LinearGradient> {
        self.validate()?;
        LinearGradient::from_css_angle(self.angle.as_f32(), size, &self.colors)
    }

    /// `linear-gradient(<angle>deg, <c0>, <c1>, ...)`
    pub fn to_css(&self) -> String {
        let stops: Vec<String> = self.colors.iter().map(|c| c.to_hex()).collect();
        format!("linear-gradient({}, {})", self.angle, stops.join(", "))
    }

    /// Full `background:` declaration, ready to paste into a stylesheet.
    pub fn css_declaration(&self) -> String {
        format!("background: {};", self.to_css())
    }

    /// Parses a color list separated by commas and/or whitespace.
    pub fn parse_colors(list: &str) -> Result<Vec<Color>> {
        list.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(Color::from_hex)
            .collect()
    }
}

impl fmt::Display for GradientSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(colors: &[&str], angle: i64) -> GradientSpec {
        GradientSpec::new(
            colors.iter().map(|c| Color::from_hex(c).unwrap()).collect(),
            GradientAngle::new(angle).unwrap(),
        )
    }

    #[test]
    fn default_matches_initial_state() {
        let spec = GradientSpec::default();
        assert_eq!(spec.to_css(), "linear-gradient(45deg, #ff69b4, #98fb98, #ffffff)");
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn css_declaration_format() {
        let spec = spec(&["#FF0000", "#0000ff"], 90);
        assert_eq!(spec.css_declaration(), "background: linear-gradient(90deg, #ff0000, #0000ff);");
        assert_eq!(spec.to_string(), spec.to_css());
    }

    #[test]
    fn with_color_at_replaces_one_entry() {
        let before = spec(&["#111111", "#222222", "#333333"], 10);
        let green = Color::rgb(0, 255, 0);
        let after = before.with_color_at(1, green).unwrap();

        assert_eq!(after.colors.len(), before.colors.len());
        assert_eq!(after.colors[0], before.colors[0]);
        assert_eq!(after.colors[1], green);
        assert_eq!(after.colors[2], before.colors[2]);
        assert_eq!(after.angle, before.angle);
        // The source spec is left untouched.
        assert_eq!(before.colors[1], Color::from_hex("#222222").unwrap());
    }

    #[test]
    fn with_color_at_rejects_len() {
        let s = spec(&["#111111", "#222222"], 10);
        assert!(matches!(
            s.with_color_at(2, Color::white()),
            Err(Error::IndexOutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn single_color_fails_validation() {
        let s = spec(&["#abcdef"], 0);
        assert!(matches!(s.validate(), Err(Error::InvalidGradientSpec { colors: 1 })));
        assert!(matches!(
            s.linear_gradient(CanvasSize::new(4, 4)),
            Err(Error::InvalidGradientSpec { colors: 1 })
        ));
    }

    #[test]
    fn parse_colors_accepts_commas_and_spaces() {
        let colors = GradientSpec::parse_colors("#ff0000, #00FF00 #0000ff,,").unwrap();
        assert_eq!(
            colors,
            vec![Color::rgb(255, 0, 0), Color::rgb(0, 255, 0), Color::rgb(0, 0, 255)]
        );
        assert!(matches!(
            GradientSpec::parse_colors("#ff0000, red"),
            Err(Error::InvalidColor(c)) if c == "red"
        ));
    }

    #[test]
    fn with_angle_keeps_colors() {
        let s = spec(&["#111111", "#222222"], 10);
        let turned = s.with_angle(GradientAngle::new(200).unwrap());
        assert_eq!(turned.colors, s.colors);
        assert_eq!(turned.angle.degrees(), 200);
    }
}
