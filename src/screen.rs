//! Screen metrics for the platform layer
//!
//! Reports viewport dimensions as plain accessors: the live terminal size
//! when one is attached, the configured fallback dimensions otherwise
//! (80x25 by default). There is no error contract; callers always get a
//! usable dimension back.

use crate::config::ScreenConfig;

/// Viewport dimension accessors
#[derive(Debug, Clone)]
pub struct ScreenMetrics {
    fallback_columns: u16,
    fallback_rows: u16,
}

impl ScreenMetrics {
    pub fn new(config: &ScreenConfig) -> Self {
        ScreenMetrics {
            fallback_columns: config.fallback_columns,
            fallback_rows: config.fallback_rows,
        }
    }

    /// Current viewport width in character cells
    pub fn columns(&self) -> u16 {
        #[cfg(debug_assertions)]
        log::debug!("screen columns");

        pick(live_size().map(|(columns, _)| columns), self.fallback_columns)
    }

    /// Maximum supported display rows
    pub fn rows(&self) -> u16 {
        #[cfg(debug_assertions)]
        log::debug!("screen rows");

        pick(live_size().map(|(_, rows)| rows), self.fallback_rows)
    }
}

impl Default for ScreenMetrics {
    fn default() -> Self {
        ScreenMetrics::new(&ScreenConfig::default())
    }
}

fn live_size() -> Option<(u16, u16)> {
    crossterm::terminal::size().ok()
}

/// Zero dimensions from a detached or dummy terminal count as no report.
fn pick(live: Option<u16>, fallback: u16) -> u16 {
    match live {
        Some(dimension) if dimension > 0 => dimension,
        _ => fallback,
    }
}
