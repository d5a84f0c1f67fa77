//! Domain facades.

mod fix;

pub use fix::FixDomain;
