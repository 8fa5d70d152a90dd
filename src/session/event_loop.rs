//! The two sibling loops of a running session.

use futures_util::{SinkExt, StreamExt};
use parking_lot::Mutex;
use slirc_proto::LineCodec;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_util::codec::{FramedRead, FramedWrite};
use tracing::{debug, warn};

use super::SessionEnd;
use crate::dispatch::Registry;
use crate::error::{SessionError, SessionResult};
use crate::presenter::{Presenter, deliver_all};
use crate::queue::CommandDrain;
use crate::state::SessionState;

/// Read lines, dispatch them under the state lock, then hand the resulting
/// events to the presenter with the lock released.
pub(super) async fn read_loop<R>(
    mut reader: FramedRead<R, LineCodec>,
    registry: &Registry,
    state: &Mutex<SessionState>,
    presenter: &dyn Presenter,
) -> SessionResult<SessionEnd>
where
    R: AsyncRead + Unpin,
{
    while let Some(result) = reader.next().await {
        let line = result.map_err(SessionError::from)?;
        debug!(line = %line, "Received");

        let events = {
            let mut state = state.lock();
            registry.dispatch_line(&mut state, &line)
        };
        deliver_all(presenter, events).await;
    }
    Ok(SessionEnd::ServerClosed)
}

/// Drain the queue in order, flushing each command before taking the next.
pub(super) async fn send_loop<W>(
    mut writer: FramedWrite<W, LineCodec>,
    mut drain: CommandDrain,
) -> SessionResult<SessionEnd>
where
    W: AsyncWrite + Unpin,
{
    while let Some(command) = drain.next().await {
        debug!(line = %command, "Sending");
        if let Err(err) = writer.send(command).await {
            warn!(error = %err, "Write failed");
            return Err(err.into());
        }
    }
    Ok(SessionEnd::QueueClosed)
}
