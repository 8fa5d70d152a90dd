//! Sessions configured with a legacy single-byte encoding.

mod common;

use common::Harness;
use slirc_client::Event;
use slirc_proto::Encoding;

fn cp1251() -> &'static Encoding {
    Encoding::for_label(b"windows-1251").unwrap()
}

#[tokio::test]
async fn test_inbound_lines_are_decoded() -> anyhow::Result<()> {
    let mut h = Harness::start_with_encoding("me", "windows-1251").await?;

    let (bytes, _, _) = cp1251().encode(":pavel!p@host PRIVMSG #ru :привет\r\n");
    h.peer.send_bytes(&bytes).await?;

    assert_eq!(h.next_event().await?, Event::line("<pavel (p@host)> привет"));
    Ok(())
}

#[tokio::test]
async fn test_outbound_lines_are_encoded() -> anyhow::Result<()> {
    let mut h = Harness::start_with_encoding("me", "windows-1251").await?;

    h.handle.join("#ru")?;
    h.peer.recv_bytes().await?;

    h.handle.send_message("привет мир").await?;
    let bytes = h.peer.recv_bytes().await?;
    let (expected, _, _) = cp1251().encode("PRIVMSG #ru :привет мир\r\n");
    assert_eq!(bytes, expected.as_ref());
    Ok(())
}

#[tokio::test]
async fn test_budget_counts_encoded_bytes() -> anyhow::Result<()> {
    let mut h = Harness::start_with_encoding("me", "windows-1251").await?;

    h.handle.join("#ru")?;
    h.peer.recv_bytes().await?;

    // One byte per letter in windows-1251, so 384 letters fit one line
    h.handle.send_message(&"я".repeat(384)).await?;
    let bytes = h.peer.recv_bytes().await?;
    assert_eq!(bytes.len(), "PRIVMSG #ru :".len() + 384 + 2);
    Ok(())
}
