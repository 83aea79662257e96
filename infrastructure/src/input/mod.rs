//! Input adapters

mod local;

pub use local::LocalInputSource;
