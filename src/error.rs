use std::io;
use thiserror::Error;

/// Errors surfaced by detection.
///
/// Mismatched signatures are never errors; a battery arm that does not match
/// simply falls through to the next one. Errors are reserved for the source
/// itself: running out of bytes where a structure requires them, cancellation,
/// or an I/O failure from the underlying transport.
#[derive(Debug, Error)]
pub enum DetectError {
    /// A read required more bytes than the source can provide.
    #[error("unexpected end of source")]
    EndOfSource,

    /// The caller's cancellation token fired during an I/O operation.
    #[error("detection aborted")]
    Aborted,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, DetectError>;

impl DetectError {
    /// Fold an I/O error into the detection error model.
    ///
    /// `UnexpectedEof` becomes [`DetectError::EndOfSource`] so probes can
    /// treat truncation uniformly regardless of transport.
    pub(crate) fn from_io(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => Self::EndOfSource,
            io::ErrorKind::Interrupted => Self::Aborted,
            _ => Self::Io(err),
        }
    }

    /// True for errors that end one probe without invalidating the source.
    pub(crate) fn is_end_of_source(&self) -> bool {
        matches!(self, Self::EndOfSource)
    }
}
