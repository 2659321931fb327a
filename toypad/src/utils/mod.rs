//! Small helpers shared across the crate: hex formatting for logs and
//! file names, and pacing delays.

pub mod hex;
pub mod pacing;

pub use hex::*;
pub use pacing::*;
