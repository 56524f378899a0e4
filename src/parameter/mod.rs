mod decibel_scale;
mod parameter_range;
mod parameter_slot;

pub use decibel_scale::{DecibelScale, DEFAULT_MAXIMUM_DB, DEFAULT_MINIMUM_DB};
pub use parameter_range::ParameterRange;
pub use parameter_slot::ParameterSlot;
