// toypad/src/crypto/mod.rs

pub mod prng;
pub mod tea;

pub use prng::Prng;
pub use tea::{TeaKey, decrypt, encrypt};
