//! Gradient state: the color list + angle a user edits, and its transitions.
//!
//! A [`GradientSpec`] is a plain value. Transitions (`randomize`,
//! `with_color_at`) return a new spec and never mutate the one they read,
//! so an observer only ever sees a complete spec.

mod angle;
mod random;
mod spec;

pub use angle::GradientAngle;
pub use random::{MAX_COLORS, MIN_COLORS, random_color, randomize};
pub use spec::GradientSpec;
