use crate::Level;

use super::ParameterRange;

/// Default lower bound of a volume control
pub const DEFAULT_MINIMUM_DB: f64 = -42.0;

/// Default upper bound of a volume control
pub const DEFAULT_MAXIMUM_DB: f64 = 6.0;

/// Converts between linear amplitudes and the dB values shown on a volume
/// control
///
/// The bottom of the range doubles as the display floor: silence, and
/// anything quieter than the floor, reads as the minimum instead of `-inf`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecibelScale {
    range: ParameterRange,
}

impl DecibelScale {
    /// Create a scale covering `[minimum_db, maximum_db]`
    pub fn new(minimum_db: f64, maximum_db: f64) -> Self {
        let default_db = 0.0_f64.clamp(minimum_db, maximum_db);

        Self {
            range: ParameterRange::new(default_db, minimum_db, maximum_db),
        }
    }

    /// The lowest displayable value
    pub fn minimum(&self) -> f64 {
        self.range.minimum()
    }

    /// The highest displayable value
    pub fn maximum(&self) -> f64 {
        self.range.maximum()
    }

    /// The range of the volume control
    pub fn range(&self) -> &ParameterRange {
        &self.range
    }

    /// Clamp a dB value into the scale
    pub fn clamp(&self, db: f64) -> f64 {
        self.range.clamp(db)
    }

    /// `10^(db / 20)`
    pub fn db_to_amplitude(&self, db: f64) -> Level {
        Level::from_linear(10.0_f64.powf(db / 20.0))
    }

    /// `20 * log10(amplitude)`, floored at the minimum of the scale
    pub fn amplitude_to_db(&self, amplitude: Level) -> f64 {
        if amplitude.as_linear() <= self.db_to_amplitude(self.minimum()).as_linear() {
            return self.minimum();
        }

        20.0 * amplitude.as_linear().log10()
    }
}

impl Default for DecibelScale {
    fn default() -> Self {
        Self::new(DEFAULT_MINIMUM_DB, DEFAULT_MAXIMUM_DB)
    }
}
