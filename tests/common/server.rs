//! Scripted fake server.
//!
//! Listens on an ephemeral localhost port and hands the test the raw socket
//! of the one client that connects.

use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::timeout;

use super::WAIT;

/// A listening fake server.
pub struct FakeServer {
    listener: TcpListener,
}

impl FakeServer {
    /// Bind to `127.0.0.1:0`.
    pub async fn bind() -> anyhow::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        Ok(Self { listener })
    }

    pub fn port(&self) -> u16 {
        self.listener
            .local_addr()
            .map(|addr| addr.port())
            .unwrap_or_default()
    }

    /// Accept the client connection.
    pub async fn accept(self) -> anyhow::Result<FakePeer> {
        let (stream, _) = timeout(WAIT, self.listener.accept()).await??;
        Ok(FakePeer::new(stream))
    }
}

/// Server side of one client connection.
pub struct FakePeer {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
}

#[allow(dead_code)]
impl FakePeer {
    fn new(stream: TcpStream) -> Self {
        let (read_half, write_half) = stream.into_split();
        Self {
            reader: BufReader::new(read_half),
            writer: write_half,
        }
    }

    /// Send raw bytes as-is.
    pub async fn send_bytes(&mut self, bytes: &[u8]) -> anyhow::Result<()> {
        self.writer.write_all(bytes).await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Send one line, adding CRLF.
    pub async fn send_line(&mut self, line: &str) -> anyhow::Result<()> {
        self.send_bytes(format!("{line}\r\n").as_bytes()).await
    }

    /// Receive one line as raw bytes, CRLF included.
    pub async fn recv_bytes(&mut self) -> anyhow::Result<Vec<u8>> {
        self.recv_bytes_timeout(WAIT).await
    }

    pub async fn recv_bytes_timeout(&mut self, dur: Duration) -> anyhow::Result<Vec<u8>> {
        let mut buf = Vec::new();
        let n = timeout(dur, self.reader.read_until(b'\n', &mut buf)).await??;
        if n == 0 {
            anyhow::bail!("client closed the connection");
        }
        Ok(buf)
    }

    /// Receive one UTF-8 line without its CRLF.
    pub async fn recv_line(&mut self) -> anyhow::Result<String> {
        let bytes = self.recv_bytes().await?;
        let line = String::from_utf8(bytes)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Receive one line and check it.
    pub async fn expect_line(&mut self, expected: &str) -> anyhow::Result<()> {
        let line = self.recv_line().await?;
        anyhow::ensure!(line == expected, "expected {expected:?}, got {line:?}");
        Ok(())
    }

    /// True if nothing arrives within `dur`.
    pub async fn is_quiet_for(&mut self, dur: Duration) -> bool {
        let mut buf = Vec::new();
        timeout(dur, self.reader.read_until(b'\n', &mut buf))
            .await
            .is_err()
    }

    /// Close the connection from the server side.
    pub async fn hang_up(mut self) -> anyhow::Result<()> {
        self.writer.shutdown().await?;
        Ok(())
    }
}
