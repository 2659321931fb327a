// toypad/src/storage/traits.rs

use std::io;

/// Block-storage abstraction consumed by the persistence layer. Paths are
/// `/`-separated and relative to the storage root.
pub trait Storage: Send {
    /// Read a whole file.
    fn read(&self, path: &str) -> io::Result<Vec<u8>>;

    /// Create or truncate a file and write `data` to it.
    fn write(&mut self, path: &str, data: &[u8]) -> io::Result<()>;

    fn remove(&mut self, path: &str) -> io::Result<()>;

    /// Create a directory (and parents). Existing directories are fine.
    fn mkdir(&mut self, path: &str) -> io::Result<()>;

    /// File names directly inside `dir`, sorted. A missing directory
    /// lists as empty.
    fn list(&self, dir: &str) -> io::Result<Vec<String>>;

    fn exists(&self, path: &str) -> bool {
        self.read(path).is_ok()
    }
}

/// Join a directory and a file name with `/`.
pub fn join(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", dir.trim_end_matches('/'), name)
    }
}
