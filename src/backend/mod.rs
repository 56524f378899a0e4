mod channel_pair;
mod matrix_backend;
mod mixing_backend;

pub use channel_pair::ChannelPair;
pub use matrix_backend::MatrixBackend;
pub use mixing_backend::{MixingBackend, SharedBackend};

pub(crate) use mixing_backend::{read_level, write_level};
