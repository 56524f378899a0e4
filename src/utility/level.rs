use approx::abs_diff_eq;

const LINEAR_EPSILON: f64 = 1e-9;

/// A linear amplitude, as stored for one entry of a mixing matrix
///
/// Conversion to and from dB goes through [crate::DecibelScale], which owns
/// the display floor
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Level {
    linear: f64,
}

impl Level {
    /// Unity gain (1.0 / 0 dB)
    pub fn unity() -> Self {
        Level::from_linear(1.0)
    }

    /// Zero gain (0.0 / -inf dB)
    pub fn zero() -> Self {
        Level::from_linear(0.0)
    }

    /// Create a level from linear gain
    pub fn from_linear(linear_gain: f64) -> Self {
        Self {
            linear: linear_gain,
        }
    }

    /// Convert to linear gain
    pub fn as_linear(&self) -> f64 {
        self.linear
    }

    /// The louder of two levels
    pub fn max(self, other: Self) -> Self {
        if other.linear > self.linear {
            other
        } else {
            self
        }
    }

    /// Scale the level by a linear factor
    pub fn scaled(&self, factor: f64) -> Self {
        Self::from_linear(self.linear * factor)
    }

    /// Check if the value represents zero gain
    pub fn is_zero(&self) -> bool {
        abs_diff_eq!(self.linear, 0.0, epsilon = LINEAR_EPSILON)
    }

    /// Check if the value represents unity gain
    pub fn is_unity(&self) -> bool {
        abs_diff_eq!(self.linear, 1.0, epsilon = LINEAR_EPSILON)
    }
}
