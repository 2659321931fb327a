// toypad/src/token/memory.rs

use crate::constants::{PAGE_COUNT, PAGE_LEN, READ_LEN, TOKEN_MEMORY_LEN};

/// Emulated token memory: 180 bytes addressed as 45 four-byte pages.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenMemory([u8; TOKEN_MEMORY_LEN]);

impl TokenMemory {
    pub fn new() -> Self {
        Self([0u8; TOKEN_MEMORY_LEN])
    }

    pub fn from_bytes(bytes: [u8; TOKEN_MEMORY_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; TOKEN_MEMORY_LEN] {
        &self.0
    }

    pub fn page(&self, page: usize) -> Option<[u8; PAGE_LEN]> {
        let start = page.checked_mul(PAGE_LEN)?;
        let src = self.0.get(start..start + PAGE_LEN)?;
        let mut out = [0u8; PAGE_LEN];
        out.copy_from_slice(src);
        Some(out)
    }

    /// Overwrite one page. Returns false when the page lies past the end.
    pub fn write_page(&mut self, page: usize, data: [u8; PAGE_LEN]) -> bool {
        if page >= PAGE_COUNT {
            return false;
        }
        let start = page * PAGE_LEN;
        self.0[start..start + PAGE_LEN].copy_from_slice(&data);
        true
    }

    pub fn page_u32(&self, page: usize) -> Option<u32> {
        self.page(page).map(u32::from_le_bytes)
    }

    pub fn write_page_u32(&mut self, page: usize, value: u32) -> bool {
        self.write_page(page, value.to_le_bytes())
    }

    /// Read four consecutive pages starting at `page`. Bytes past the
    /// end of memory read as zero.
    pub fn read(&self, page: usize) -> [u8; READ_LEN] {
        let mut out = [0u8; READ_LEN];
        let start = page.saturating_mul(PAGE_LEN);
        if start < TOKEN_MEMORY_LEN {
            let end = (start + READ_LEN).min(TOKEN_MEMORY_LEN);
            out[..end - start].copy_from_slice(&self.0[start..end]);
        }
        out
    }
}

impl Default for TokenMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TokenMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.0.iter().filter(|&&b| b != 0).count();
        f.debug_struct("TokenMemory")
            .field("len", &TOKEN_MEMORY_LEN)
            .field("non_zero", &used)
            .finish()
    }
}
