// toypad/src/storage/mod.rs

pub mod fs;
pub mod memory;
pub mod traits;

pub use fs::FsStorage;
pub use memory::MemoryStorage;
pub use traits::{Storage, join};
