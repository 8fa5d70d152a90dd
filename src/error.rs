//! Error handling for the client engine.
//!
//! Protocol-level noise (undecodable lines, short frames) never reaches this
//! type: the codec and the matchers drop it. What remains are stream failures
//! and user commands that cannot be expressed on the wire.

use slirc_proto::ProtocolError;
use thiserror::Error;

/// Errors surfaced by [`crate::session`] and [`crate::state`].
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("protocol error: {0}")]
    Protocol(ProtocolError),

    /// A room-scoped command was issued with no current room.
    #[error("not on a channel")]
    NotOnChannel,

    #[error("not a channel name: {0}")]
    InvalidChannel(String),

    /// `kick` or `ban` without a target.
    #[error("no nickname given")]
    MissingNick,

    #[error("empty command")]
    EmptyCommand,
}

impl SessionError {
    /// True for failures of the user's command that leave the connection usable.
    #[inline]
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::NotOnChannel | Self::InvalidChannel(_) | Self::MissingNick | Self::EmptyCommand
        )
    }
}

impl From<ProtocolError> for SessionError {
    /// Stream failures surfaced through the codec stay `Io`.
    fn from(err: ProtocolError) -> Self {
        match err {
            ProtocolError::Io(io) => Self::Io(io),
            other => Self::Protocol(other),
        }
    }
}

/// Result type for session operations.
pub type SessionResult<T = ()> = Result<T, SessionError>;
