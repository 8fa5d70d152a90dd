//! Outbound command queue.
//!
//! A FIFO of [`Command`]s between everything that wants to talk to the server
//! (user commands, the PING matcher) and the single sender loop that owns the
//! write half of the stream. Commands are never coalesced or reordered.

use slirc_proto::Command;
use tokio::sync::mpsc;

/// Create a connected queue and drain pair.
pub fn command_queue() -> (CommandQueue, CommandDrain) {
    let (tx, rx) = mpsc::unbounded_channel();
    (CommandQueue { tx }, CommandDrain { rx })
}

/// Producer side. Cheap to clone.
#[derive(Clone, Debug)]
pub struct CommandQueue {
    tx: mpsc::UnboundedSender<Command>,
}

impl CommandQueue {
    /// Append a command. Returns `false` if the sender loop is gone.
    pub fn enqueue(&self, command: Command) -> bool {
        match self.tx.send(command) {
            Ok(()) => true,
            Err(mpsc::error::SendError(command)) => {
                tracing::trace!(command = %command, "Sender gone, dropping command");
                false
            }
        }
    }

    /// True once the drain side has been dropped.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Consumer side, owned by the sender loop.
#[derive(Debug)]
pub struct CommandDrain {
    rx: mpsc::UnboundedReceiver<Command>,
}

impl CommandDrain {
    /// Wait for the next command. `None` when every producer is gone.
    pub async fn next(&mut self) -> Option<Command> {
        self.rx.recv().await
    }

    /// Take the next command if one is already queued.
    pub fn try_next(&mut self) -> Option<Command> {
        self.rx.try_recv().ok()
    }

    /// Take everything currently queued.
    pub fn drain_ready(&mut self) -> Vec<Command> {
        std::iter::from_fn(|| self.try_next()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let (queue, mut drain) = command_queue();
        queue.enqueue(Command::join("#a"));
        queue.enqueue(Command::list());
        queue.enqueue(Command::join("#a"));

        let lines: Vec<String> = drain.drain_ready().iter().map(ToString::to_string).collect();
        assert_eq!(lines, ["JOIN #a", "LIST", "JOIN #a"]);
        assert!(drain.try_next().is_none());
    }

    #[tokio::test]
    async fn test_next_wakes_on_enqueue() {
        let (queue, mut drain) = command_queue();
        let waiter = tokio::spawn(async move { drain.next().await });
        tokio::task::yield_now().await;
        queue.enqueue(Command::pong("abc"));
        let command = waiter.await.unwrap().unwrap();
        assert_eq!(command.to_string(), "PONG :abc");
    }

    #[test]
    fn test_enqueue_after_drain_dropped() {
        let (queue, drain) = command_queue();
        drop(drain);
        assert!(queue.is_closed());
        assert!(!queue.enqueue(Command::list()));
    }
}
