//! Clipboard module for tuiport
//!
//! An in-process clipboard surrogate: one owned text payload, copied out
//! to callers on request. Not wired to any OS clipboard service — the
//! store is the clipboard for the embedding terminal UI.

mod store;
mod text;

pub use store::{ClipboardStore, release};
pub use text::ClipText;
