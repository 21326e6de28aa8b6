//! Platform driver surface
//!
//! One constructor-injected value owning the clipboard store and the
//! screen metrics, so an embedding terminal UI wires a single object into
//! its session instead of reaching for process-wide state. Each test
//! constructs its own.

use crate::clipboard::ClipboardStore;
use crate::config::Config;
use crate::screen::ScreenMetrics;

/// The terminal-UI platform layer: clipboard plus screen metrics
#[derive(Debug, Default)]
pub struct Platform {
    clipboard: ClipboardStore,
    screen: ScreenMetrics,
}

impl Platform {
    /// Build the platform layer from configuration
    pub fn new(config: &Config) -> Self {
        Platform {
            clipboard: ClipboardStore::with_backend(config.clipboard.backend),
            screen: ScreenMetrics::new(&config.screen),
        }
    }

    pub fn clipboard(&mut self) -> &mut ClipboardStore {
        &mut self.clipboard
    }

    pub fn screen(&self) -> &ScreenMetrics {
        &self.screen
    }
}
