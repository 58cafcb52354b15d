use std::f32::consts::PI;

use crate::coords::{CanvasSize, Vec2};
use crate::error::{Error, Result};

use super::Color;

/// A single gradient stop.
///
/// `t` is a position along the gradient line in [0, 1]. Stops are expected
/// to be sorted by `t`; [`evenly_spaced_stops`] always builds them
/// that way.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient definition in raster pixel space.
///
/// Semantics:
/// - `start` maps to `t = 0` and `end` to `t = 1`.
/// - Points are projected onto the `start → end` line; positions outside
///   the segment take the color of the nearest edge stop (pad).
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Self { start, end, stops }
    }

    /// Builds the gradient a browser draws for
    /// `linear-gradient(<angle_deg>deg, colors...)` over a box of `size`.
    pub fn from_css_angle(angle_deg: f32, size: CanvasSize, colors: &[Color]) -> Result<Self> {
        let stops = evenly_spaced_stops(colors)?;
        if !size.is_valid() {
            return Err(Error::InvalidCanvas { width: size.width, height: size.height });
        }

        let (start, end) = css_gradient_line(angle_deg, size);
        log::debug!(
            "gradient line for {angle_deg}deg on {}x{}: ({:.2}, {:.2}) -> ({:.2}, {:.2})",
            size.width,
            size.height,
            start.x,
            start.y,
            end.x,
            end.y
        );

        let gradient = Self::new(start, end, stops);
        debug_assert!(gradient.is_valid(), "degenerate gradient: {gradient:?}");
        Ok(gradient)
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.iter().all(|s| s.t.is_finite())
            && self.stops.len() >= 2
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }

    /// Scalar projection of `p` onto the gradient line, clamped to [0, 1].
    pub fn project(&self, p: Vec2) -> f32 {
        let axis = self.end - self.start;
        let len_sq = axis.length_squared();
        if len_sq <= f32::EPSILON {
            return 0.0;
        }
        ((p - self.start).dot(axis) / len_sq).clamp(0.0, 1.0)
    }

    /// Color at gradient position `t`, interpolating between the two
    /// bracketing stops.
    pub fn color_at(&self, t: f32) -> Color {
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Color::default(),
        };

        if t <= first.t {
            return first.color;
        }
        if t >= last.t {
            return last.color;
        }

        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.t {
                let span = b.t - a.t;
                if span <= 0.0 {
                    return b.color;
                }
                return a.color.lerp(b.color, (t - a.t) / span);
            }
        }

        last.color
    }

    /// Color of the gradient at point `p`.
    #[inline]
    pub fn sample(&self, p: Vec2) -> Color {
        self.color_at(self.project(p))
    }
}

/// Stops at `i / (n - 1)`: first color at 0, last at 1.
///
/// Fails with [`Error::InvalidGradientSpec`] for fewer than two colors, where
/// the spacing is undefined.
pub fn evenly_spaced_stops(colors: &[Color]) -> Result<Vec<ColorStop>> {
    if colors.len() < 2 {
        return Err(Error::InvalidGradientSpec { colors: colors.len() });
    }

    let last = (colors.len() - 1) as f32;
    Ok(colors
        .iter()
        .enumerate()
        .map(|(i, &color)| ColorStop::new(i as f32 / last, color))
        .collect())
}

/// Start and end of the CSS gradient line for `angle_deg` over `size`.
///
/// CSS measures angles clockwise from "up" (0deg = bottom to top, 90deg =
/// left to right); raster math measures from +X with +Y down, hence the
/// `- 90` shift. The line passes through the center and is exactly long
/// enough for the two corners furthest along the direction to land on
/// `t = 0` and `t = 1`; with `a` the CSS angle that length is
/// `|w·sin a| + |h·cos a|`, written below as `|w·cos θ| + |h·sin θ|`.
pub fn css_gradient_line(angle_deg: f32, size: CanvasSize) -> (Vec2, Vec2) {
    let theta = (angle_deg - 90.0) * PI / 180.0;
    let dir = Vec2::from_angle(theta);

    let (w, h) = (size.width as f32, size.height as f32);
    let length = (w * dir.x).abs() + (h * dir.y).abs();

    let center = size.center();
    let half = dir * (length / 2.0);
    (center - half, center + half)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);
    const GREEN: Color = Color::rgb(0, 255, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-2
    }

    #[test]
    fn stops_are_evenly_spaced() {
        let stops = evenly_spaced_stops(&[RED, GREEN, BLUE, RED]).unwrap();
        let ts: Vec<f32> = stops.iter().map(|s| s.t).collect();
        assert_eq!(ts.len(), 4);
        assert_eq!(ts[0], 0.0);
        assert!((ts[1] - 1.0 / 3.0).abs() < 1e-6);
        assert!((ts[2] - 2.0 / 3.0).abs() < 1e-6);
        assert_eq!(ts[3], 1.0);
    }

    #[test]
    fn fewer_than_two_colors_is_rejected() {
        assert!(matches!(
            evenly_spaced_stops(&[RED]),
            Err(Error::InvalidGradientSpec { colors: 1 })
        ));
        assert!(matches!(
            evenly_spaced_stops(&[]),
            Err(Error::InvalidGradientSpec { colors: 0 })
        ));
    }

    #[test]
    fn line_for_cardinal_angles() {
        let size = CanvasSize::new(200, 100);

        let (s, e) = css_gradient_line(90.0, size);
        assert!(close(s, Vec2::new(0.0, 50.0)), "{s:?}");
        assert!(close(e, Vec2::new(200.0, 50.0)), "{e:?}");

        let (s, e) = css_gradient_line(0.0, size);
        assert!(close(s, Vec2::new(100.0, 100.0)), "{s:?}");
        assert!(close(e, Vec2::new(100.0, 0.0)), "{e:?}");

        let (s, e) = css_gradient_line(180.0, size);
        assert!(close(s, Vec2::new(100.0, 0.0)), "{s:?}");
        assert!(close(e, Vec2::new(100.0, 100.0)), "{e:?}");

        let (s, e) = css_gradient_line(270.0, size);
        assert!(close(s, Vec2::new(200.0, 50.0)), "{s:?}");
        assert!(close(e, Vec2::new(0.0, 50.0)), "{e:?}");
    }

    #[test]
    fn zero_and_360_are_the_same_line() {
        let size = CanvasSize::new(320, 240);
        let (s0, e0) = css_gradient_line(0.0, size);
        let (s1, e1) = css_gradient_line(360.0, size);
        assert!(close(s0, s1));
        assert!(close(e0, e1));
    }

    #[test]
    fn diagonal_line_reaches_the_corners() {
        let size = CanvasSize::new(300, 100);
        let g = LinearGradient::from_css_angle(45.0, size, &[RED, BLUE]).unwrap();

        // 45deg runs towards the top-right corner.
        assert!(g.project(Vec2::new(0.0, 100.0)).abs() < 1e-4);
        assert!((g.project(Vec2::new(300.0, 0.0)) - 1.0).abs() < 1e-4);
        // On a 3:1 box the top-left corner lands a quarter of the way along.
        assert!((g.project(Vec2::new(0.0, 0.0)) - 0.25).abs() < 1e-4);
    }

    #[test]
    fn projection_is_clamped() {
        let g = LinearGradient::new(
            Vec2::new(10.0, 0.0),
            Vec2::new(20.0, 0.0),
            evenly_spaced_stops(&[RED, BLUE]).unwrap(),
        );
        assert_eq!(g.project(Vec2::new(-5.0, 3.0)), 0.0);
        assert_eq!(g.project(Vec2::new(50.0, -3.0)), 1.0);
        assert!((g.project(Vec2::new(15.0, 9.0)) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn color_at_brackets_the_right_stops() {
        let g = LinearGradient::new(
            Vec2::zero(),
            Vec2::new(1.0, 0.0),
            evenly_spaced_stops(&[RED, GREEN, BLUE]).unwrap(),
        );
        assert_eq!(g.color_at(0.0), RED);
        assert_eq!(g.color_at(0.5), GREEN);
        assert_eq!(g.color_at(1.0), BLUE);
        assert_eq!(g.color_at(0.25), Color::rgb(128, 128, 0));
        assert_eq!(g.color_at(0.75), Color::rgb(0, 128, 128));
    }

    #[test]
    fn invalid_canvas_is_rejected() {
        assert!(matches!(
            LinearGradient::from_css_angle(90.0, CanvasSize::new(0, 10), &[RED, BLUE]),
            Err(Error::InvalidCanvas { width: 0, height: 10 })
        ));
    }

    #[test]
    fn built_gradient_is_valid() {
        for angle in [0.0, 33.0, 90.0, 181.0, 360.0] {
            let g = LinearGradient::from_css_angle(angle, CanvasSize::EXPORT, &[RED, BLUE]).unwrap();
            assert!(g.is_valid(), "angle {angle}");
        }
    }
}
