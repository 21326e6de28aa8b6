//! tuiport library - terminal UI platform layer
//!
//! This library exposes an in-process clipboard surrogate and screen
//! metrics under one driver surface for terminal UI embeddings.

pub mod clipboard;
pub mod config;
pub mod error;
pub mod platform;
pub mod screen;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use clipboard::{ClipText, ClipboardStore, release};
pub use config::Config;
pub use error::ClipboardError;
pub use platform::Platform;
pub use screen::ScreenMetrics;
