//! Storage layer for tasks document persistence.

mod file;
mod traits;

pub use file::FileStorage;
pub use traits::Storage;
