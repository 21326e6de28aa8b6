// Configuration type definitions

use serde::Deserialize;

/// Clipboard backend selection
///
/// `Memory` is the in-process surrogate. `Disabled` models an embedding
/// with no clipboard capability at all; every store operation reports
/// `Unsupported` there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Memory,
    Disabled,
}

/// Clipboard configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        ClipboardConfig {
            backend: ClipboardBackend::Memory,
        }
    }
}

/// Screen configuration section
///
/// Fallback dimensions are reported when the process has no usable
/// terminal to query.
#[derive(Debug, Clone, Deserialize)]
pub struct ScreenConfig {
    #[serde(default = "default_fallback_columns")]
    pub fallback_columns: u16,
    #[serde(default = "default_fallback_rows")]
    pub fallback_rows: u16,
}

fn default_fallback_columns() -> u16 {
    80
}

fn default_fallback_rows() -> u16 {
    25
}

impl Default for ScreenConfig {
    fn default() -> Self {
        ScreenConfig {
            fallback_columns: 80,
            fallback_rows: 25,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub screen: ScreenConfig,
}
