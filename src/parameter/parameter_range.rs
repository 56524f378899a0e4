/// The range and default of a controllable value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange {
    default: f64,
    minimum: f64,
    maximum: f64,
}

impl ParameterRange {
    /// Create a range
    ///
    /// Panics if `minimum > maximum` or if `default` is outside the range
    pub fn new(default: f64, minimum: f64, maximum: f64) -> Self {
        let range = Self {
            default,
            minimum,
            maximum,
        };

        assert!(range.is_valid());

        range
    }

    /// The default value
    pub fn default(&self) -> f64 {
        self.default
    }

    /// The lowest value in the range
    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    /// The highest value in the range
    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    /// Check the range is well formed
    pub fn is_valid(&self) -> bool {
        if self.maximum < self.minimum {
            return false;
        }

        if !(self.minimum..=self.maximum).contains(&self.default) {
            return false;
        }

        true
    }

    /// Clamp a value into the range
    ///
    /// NaN is replaced by the default
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.default;
        }

        value.clamp(self.minimum, self.maximum)
    }

    /// Map a value in `[0, 1]` linearly onto the range
    pub fn from_normalised(&self, normalised: f64) -> f64 {
        let normalised = normalised.clamp(0.0, 1.0);
        self.minimum + normalised * (self.maximum - self.minimum)
    }
}
