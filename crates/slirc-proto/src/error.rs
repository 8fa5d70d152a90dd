//! Error types for the protocol library.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Top-level protocol errors.
///
/// Malformed inbound lines are not errors: the codec drops them and keeps
/// reading. Only failures that end the stream or prevent it from being set up
/// surface here.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// I/O error during reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The configured text encoding label is not known.
    #[error("unknown encoding: {0}")]
    UnknownEncoding(String),
}
