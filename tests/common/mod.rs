//! Integration test common infrastructure.
//!
//! Provides a scripted fake IRC server, a session bootstrapper wired to an
//! [`EventPresenter`], and timeouts for asserting on both sides of the wire.

pub mod server;

#[allow(unused_imports)]
pub use server::{FakePeer, FakeServer};

use slirc_client::{Config, Event, EventPresenter, Session, SessionEnd, SessionHandle, SessionResult};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;
use tokio::time::timeout;

/// Default wait for anything the test expects to happen.
pub const WAIT: Duration = Duration::from_secs(5);

/// A running session plus the fake server side of its connection.
#[allow(dead_code)]
pub struct Harness {
    pub handle: SessionHandle,
    pub events: UnboundedReceiver<Event>,
    pub peer: FakePeer,
    pub task: JoinHandle<SessionResult<SessionEnd>>,
}

impl Harness {
    /// Start a session for `nick` against a fresh fake server and consume the
    /// registration burst (`NICK`, `USER`, `LIST`).
    pub async fn start(nick: &str) -> anyhow::Result<Self> {
        Self::start_with_encoding(nick, "utf-8").await
    }

    pub async fn start_with_encoding(nick: &str, encoding: &str) -> anyhow::Result<Self> {
        let server = FakeServer::bind().await?;
        let config = test_config(server.port(), nick, encoding)?;

        let (presenter, events) = EventPresenter::new();
        let session = Session::connect(&config, Arc::new(presenter)).await?;
        let handle = session.handle();
        let task = tokio::spawn(session.run());

        let mut peer = server.accept().await?;
        peer.expect_line(&format!("NICK {nick}")).await?;
        peer.expect_line(&format!("USER {nick} 8 * :slirc user")).await?;
        peer.expect_line("LIST").await?;

        Ok(Self {
            handle,
            events,
            peer,
            task,
        })
    }

    /// Next event from the presenter, failing after [`WAIT`].
    #[allow(dead_code)]
    pub async fn next_event(&mut self) -> anyhow::Result<Event> {
        timeout(WAIT, self.events.recv())
            .await?
            .ok_or_else(|| anyhow::anyhow!("presenter channel closed"))
    }
}

/// Build a config pointing at `127.0.0.1:<port>`.
pub fn test_config(port: u16, nick: &str, encoding: &str) -> anyhow::Result<Config> {
    let config = toml::from_str(&format!(
        r#"
[server]
host = "127.0.0.1"
port = {port}
encoding = "{encoding}"

[identity]
nick = "{nick}"
"#
    ))?;
    Ok(config)
}
