//! Shared test utilities for tuiport
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Once;

    use crate::clipboard::ClipboardStore;

    static INIT_LOGGING: Once = Once::new();

    /// Initialize debug-build logging once per test process
    pub fn init_logging() {
        INIT_LOGGING.call_once(|| {
            let _ = env_logger::builder().is_test(true).try_init();
        });
    }

    /// Helper to create a store already holding `text`
    pub fn store_with(text: &str) -> ClipboardStore {
        let mut store = ClipboardStore::new();
        store.set(Some(text)).expect("seed store contents");
        store
    }
}
