use std::fmt;

use crate::error::{Error, Result};

/// CSS `linear-gradient` angle in whole degrees, within [0, 360].
///
/// 0deg runs bottom to top and angles turn clockwise, so 90deg runs left to
/// right. 0 and 360 describe the same orientation but stay distinct values.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct GradientAngle(u16);

impl GradientAngle {
    pub const MAX_DEGREES: u16 = 360;

    pub fn new(degrees: i64) -> Result<Self> {
        u16::try_from(degrees)
            .ok()
            .filter(|d| *d <= Self::MAX_DEGREES)
            .map(Self)
            .ok_or(Error::InvalidAngle(degrees))
    }

    #[inline]
    pub(crate) const fn from_raw(degrees: u16) -> Self {
        debug_assert!(degrees <= Self::MAX_DEGREES);
        Self(degrees)
    }

    #[inline]
    pub const fn degrees(self) -> u16 {
        self.0
    }

    #[inline]
    pub fn as_f32(self) -> f32 {
        self.0 as f32
    }

    /// Orientation equality: 0 and 360 compare equal.
    #[inline]
    pub const fn same_orientation(self, other: GradientAngle) -> bool {
        self.0 % Self::MAX_DEGREES == other.0 % Self::MAX_DEGREES
    }
}

impl fmt::Display for GradientAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}deg", self.0)
    }
}
