mod id;
mod level;

pub use id::Id;
pub use level::Level;
