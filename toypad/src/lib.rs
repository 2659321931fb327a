// toypad/src/lib.rs

//! toypad
//!
//! Pure Rust protocol engine that emulates a USB toy-figurine reader pad:
//! frame codec, TEA challenge exchange, token memory emulation, slot
//! management and persistence of saved tokens and layouts.
#![warn(missing_docs)]

pub mod constants;
pub mod crypto;
pub mod error;
pub mod persistence;
pub mod prelude;
pub mod protocol;
pub mod storage;
pub mod test_support;
pub mod token;
pub mod toypad;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
