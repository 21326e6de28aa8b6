//! In-process clipboard store
//!
//! Holds at most one owned text payload. Reads copy the payload out;
//! writes discard the previous payload before the new one is allocated,
//! so a failed write leaves the store empty rather than holding stale
//! text.

use crate::config::ClipboardBackend;
use crate::error::ClipboardError;

use super::text::ClipText;

/// Single authority over the stored clipboard text.
///
/// Callers never alias the internal buffer: `get` hands out an
/// independently-owned copy, and `set` copies from the caller's borrow.
/// The store assumes a single-threaded embedding; an embedder that needs
/// cross-thread access must serialize calls externally.
#[derive(Debug, Default)]
pub struct ClipboardStore {
    contents: Option<String>,
    backend: ClipboardBackend,
}

impl ClipboardStore {
    /// Create an empty store over the in-process surrogate backend
    pub fn new() -> Self {
        ClipboardStore {
            contents: None,
            backend: ClipboardBackend::Memory,
        }
    }

    /// Create an empty store over the given backend
    pub fn with_backend(backend: ClipboardBackend) -> Self {
        ClipboardStore {
            contents: None,
            backend,
        }
    }

    /// Copy the stored text out to the caller.
    ///
    /// The returned handle owns its own allocation and reports the payload
    /// length via [`ClipText::len`]. The store keeps its buffer and is left
    /// unchanged, including when the copy allocation fails.
    pub fn get(&self) -> Result<ClipText, ClipboardError> {
        #[cfg(debug_assertions)]
        log::debug!("clipboard get");

        self.check_backend()?;

        let stored = self.contents.as_deref().ok_or(ClipboardError::Empty)?;
        Ok(ClipText::new(try_copy(stored)?))
    }

    /// Replace the stored text.
    ///
    /// `None` clears the store. The previous payload is discarded before
    /// the new one is allocated: if the allocation fails the store ends up
    /// empty, not holding the old text. Repeating a failed `set` is safe.
    pub fn set(&mut self, text: Option<&str>) -> Result<(), ClipboardError> {
        #[cfg(debug_assertions)]
        log::debug!("clipboard set ({} bytes)", text.map_or(0, str::len));

        self.check_backend()?;

        // Discard first; a failed allocation below must not resurrect it.
        self.contents = None;

        if let Some(text) = text {
            self.contents = Some(try_copy(text)?);
        }

        Ok(())
    }

    /// Discard the stored text. Idempotent.
    ///
    /// Handles already retrieved with `get` are independent copies and are
    /// unaffected.
    pub fn clear(&mut self) -> Result<(), ClipboardError> {
        #[cfg(debug_assertions)]
        log::debug!("clipboard clear");

        self.check_backend()?;

        self.contents = None;
        Ok(())
    }

    /// Whether the store currently holds no text
    pub fn is_empty(&self) -> bool {
        self.contents.is_none()
    }

    fn check_backend(&self) -> Result<(), ClipboardError> {
        match self.backend {
            ClipboardBackend::Memory => Ok(()),
            ClipboardBackend::Disabled => Err(ClipboardError::Unsupported),
        }
    }
}

/// Release a retrieved handle.
///
/// Consuming the handle is what rules out a second release: the caller's
/// binding is gone after this call. `None` is accepted as a no-op. In
/// debug builds the payload is overwritten with a marker before the memory
/// is freed, so stale copies of the text read visibly wrong data.
pub fn release(handle: Option<ClipText>) {
    #[cfg(debug_assertions)]
    log::debug!("clipboard release");

    drop(handle);
}

/// Copy `text` into a freshly allocated buffer, reporting allocation
/// failure instead of aborting.
fn try_copy(text: &str) -> Result<String, ClipboardError> {
    let mut buf = String::new();
    buf.try_reserve_exact(text.len())
        .map_err(|_| ClipboardError::OutOfMemory)?;
    buf.push_str(text);
    Ok(buf)
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;
