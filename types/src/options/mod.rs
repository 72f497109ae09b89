//! Parameter bundles, one per daemon operation.
//!
//! Nothing here is validated: contradictory or malformed combinations are
//! reported by the daemon, not by these types.

mod container;
mod image;
mod system;

pub use container::*;
pub use image::*;
pub use system::*;
