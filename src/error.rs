use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard is empty")]
    Empty,

    #[error("could not allocate a clipboard buffer")]
    OutOfMemory,

    #[error("clipboard access is not supported by this backend")]
    Unsupported,
}
