//! Session - one connection to an IRC server.
//!
//! ```text
//!   SessionHandle ──┐                         ┌──▶ Presenter
//!   (user commands) │                         │    (events)
//!                   ▼                         │
//!          ┌──────────────────────────────────┴───────┐
//!          │  Arc<Mutex<SessionState>>                │
//!          └──────┬───────────────────────▲───────────┘
//!                 │ enqueue               │ dispatch
//!                 ▼                       │
//!          [CommandQueue]           [Registry]
//!                 │                       ▲
//!                 ▼                       │
//!          send loop ──▶ FramedWrite   FramedRead ──▶ read loop
//!                     └──────── tokio::select! ────────┘
//! ```
//!
//! The read and send loops run as siblings in one `tokio::select!`. Whichever
//! finishes first ends the session and cancels the other.

mod event_loop;
mod handle;

pub use handle::SessionHandle;

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use slirc_proto::LineCodec;
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio_util::codec::{FramedRead, FramedWrite};
use tracing::{info, instrument};

use crate::config::Config;
use crate::dispatch::Registry;
use crate::error::SessionResult;
use crate::presenter::Presenter;
use crate::queue::{CommandDrain, command_queue};
use crate::state::SessionState;

/// Why a session ended without an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The server closed the stream.
    ServerClosed,
    /// Every command producer went away.
    QueueClosed,
}

impl fmt::Display for SessionEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ServerClosed => f.write_str("connection closed by server"),
            Self::QueueClosed => f.write_str("command queue closed"),
        }
    }
}

/// A connected session, ready to [`run`](Session::run).
pub struct Session {
    address: String,
    nick: String,
    state: Arc<Mutex<SessionState>>,
    registry: Registry,
    presenter: Arc<dyn Presenter>,
    drain: CommandDrain,
    reader: FramedRead<OwnedReadHalf, LineCodec>,
    writer: FramedWrite<OwnedWriteHalf, LineCodec>,
}

impl Session {
    /// Open the stream and queue the identity announcement and the first
    /// catalogue request. Nothing is written until [`run`](Session::run).
    pub async fn connect(config: &Config, presenter: Arc<dyn Presenter>) -> SessionResult<Self> {
        let codec = LineCodec::new(&config.server.encoding)?;
        let encoding = codec.encoding();
        let address = config.address();

        let stream = TcpStream::connect(address.as_str()).await?;
        stream.set_nodelay(true)?;
        info!(%address, encoding = encoding.name(), "Connected");

        let (read_half, write_half) = stream.into_split();
        let reader = FramedRead::new(read_half, codec);
        let writer = FramedWrite::new(write_half, LineCodec::with_encoding(encoding));

        let (queue, drain) = command_queue();
        let mut state = SessionState::new(
            config.identity.nick.clone(),
            config.identity.realname.clone(),
            encoding,
            queue,
        );
        state.announce_identity();
        state.request_catalogue();

        Ok(Self {
            address,
            nick: config.identity.nick.clone(),
            state: Arc::new(Mutex::new(state)),
            registry: Registry::new(),
            presenter,
            drain,
            reader,
            writer,
        })
    }

    /// Handle for issuing user commands. Can be taken any number of times.
    pub fn handle(&self) -> SessionHandle {
        SessionHandle::new(Arc::clone(&self.state), Arc::clone(&self.presenter))
    }

    /// Run the read and send loops until one of them ends.
    ///
    /// The presenter gets a final `*** Disconnected: <reason>` line either way.
    #[instrument(skip(self), fields(host = %self.address, nick = %self.nick), name = "session")]
    pub async fn run(self) -> SessionResult<SessionEnd> {
        let Self {
            state,
            registry,
            presenter,
            drain,
            reader,
            writer,
            ..
        } = self;

        let outcome = tokio::select! {
            result = event_loop::read_loop(reader, &registry, &state, presenter.as_ref()) => result,
            result = event_loop::send_loop(writer, drain) => result,
        };

        let reason = match &outcome {
            Ok(end) => end.to_string(),
            Err(err) => err.to_string(),
        };
        info!(%reason, "Disconnected");
        presenter
            .on_display_line(format!("*** Disconnected: {reason}"))
            .await;
        outcome
    }
}
