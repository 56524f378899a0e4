use std::rc::Rc;

use crate::{BackendError, ChannelPair, Level};

/// The mixing matrix that elements control
///
/// Holds one linear amplitude per input to output route. Both methods take
/// `&self` so that one backend can be shared by every element on a mixer;
/// implementations are expected to use interior mutability.
pub trait MixingBackend {
    /// Read the amplitude of a route
    fn get_volume(&self, input: &str, output: &str) -> Result<Level, BackendError>;

    /// Write the amplitude of a route
    ///
    /// Writing the same value twice has no further effect
    fn set_volume(&self, input: &str, output: &str, level: Level) -> Result<(), BackendError>;
}

/// A backend handle that can be given to many elements
pub type SharedBackend = Rc<dyn MixingBackend>;

pub(crate) fn read_level(
    backend: &dyn MixingBackend,
    pair: &ChannelPair,
) -> Result<Level, BackendError> {
    backend
        .get_volume(pair.input(), pair.output())
        .inspect_err(|error| tracing::warn!("failed to read {pair}: {error}"))
}

pub(crate) fn write_level(
    backend: &dyn MixingBackend,
    pair: &ChannelPair,
    level: Level,
) -> Result<(), BackendError> {
    tracing::trace!("{pair} = {}", level.as_linear());

    backend
        .set_volume(pair.input(), pair.output(), level)
        .inspect_err(|error| tracing::warn!("failed to write {pair}: {error}"))
}
