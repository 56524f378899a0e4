use crate::DecibelScale;

/// Options shared by the elements of a mixer
///
/// ```ignore
/// let options = ElementOptions::default().with_decibel_range(-60.0, 12.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElementOptions {
    decibel_scale: DecibelScale,
}

impl ElementOptions {
    /// Set the range of volume controls
    ///
    /// The minimum is also what silent routes read as
    pub fn with_decibel_range(mut self, minimum_db: f64, maximum_db: f64) -> Self {
        self.decibel_scale = DecibelScale::new(minimum_db, maximum_db);
        self
    }

    /// The scale used by volume controls
    pub fn decibel_scale(&self) -> &DecibelScale {
        &self.decibel_scale
    }
}
