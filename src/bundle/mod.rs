//! Release bundle directories
//!
//! - [`materialize`]: copy the template into a fresh versioned bundle
//! - [`overwrite`]: decide what happens when that bundle already exists

pub mod materialize;
pub mod overwrite;

pub use materialize::materialize;
pub use overwrite::OverwritePolicy;
