// Shared helpers for integration tests. Each test file pulls this in via
// `#[path = "../common/mod.rs"]`.
#![allow(dead_code)]

pub mod fixtures;

/// Route `log` output through env_logger. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
