//! Line-based codec for tokio.
//!
//! Reads newline-terminated frames and writes [`Command`]s as CRLF-terminated
//! lines, both in a configurable text encoding.
//!
//! The decoder never fails on content: a line that does not decode under the
//! configured encoding, or that is longer than the line limit, is dropped and
//! the next line is returned instead.

use bytes::{BufMut, BytesMut};
use encoding::Encoding;
use tokio_util::codec::{Decoder, Encoder};

use crate::command::Command;
use crate::error::{self, ProtocolError};

/// Longest inbound line accepted: 8191 bytes of IRCv3 tags plus the 512-byte
/// message body.
pub const MAX_LINE_LEN: usize = 8191 + 512;

/// Codec that frames lines and converts them with an `encoding_rs` encoding.
#[derive(Debug)]
pub struct LineCodec {
    encoding: &'static Encoding,
    /// Index of next byte to check for newline
    next_index: usize,
    max_len: usize,
    /// Set while skipping the remainder of an oversized line.
    discarding: bool,
}

impl LineCodec {
    /// Create a codec for the given encoding label (e.g. `"utf-8"`,
    /// `"iso-8859-1"`, `"windows-1251"`).
    pub fn new(label: &str) -> error::Result<Self> {
        let encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| ProtocolError::UnknownEncoding(label.to_string()))?;
        Ok(Self::with_encoding(encoding))
    }

    /// Create a codec for an already resolved encoding.
    pub fn with_encoding(encoding: &'static Encoding) -> Self {
        Self {
            encoding,
            next_index: 0,
            max_len: MAX_LINE_LEN,
            discarding: false,
        }
    }

    /// Override the inbound line limit.
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Encoding used in both directions.
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    fn decode_line(&self, line: &[u8]) -> Option<String> {
        let line = strip_line_ending(line);
        let decoded = self
            .encoding
            .decode_without_bom_handling_and_without_replacement(line);
        decoded.map(|cow| cow.into_owned())
    }
}

fn strip_line_ending(mut line: &[u8]) -> &[u8] {
    if let [rest @ .., b'\n'] = line {
        line = rest;
    }
    if let [rest @ .., b'\r'] = line {
        line = rest;
    }
    line
}

/// Truncate at the first CR or LF so one command can never smuggle a second
/// line onto the wire.
fn sanitize(line: &str) -> &str {
    match line.find(['\r', '\n']) {
        Some(pos) => &line[..pos],
        None => line,
    }
}

impl Decoder for LineCodec {
    type Item = String;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> error::Result<Option<String>> {
        loop {
            let Some(offset) = src[self.next_index..].iter().position(|b| *b == b'\n') else {
                if src.len() > self.max_len {
                    tracing::trace!(len = src.len(), "Discarding oversized line");
                    src.clear();
                    self.discarding = true;
                }
                self.next_index = src.len();
                return Ok(None);
            };

            let line = src.split_to(self.next_index + offset + 1);
            self.next_index = 0;

            if std::mem::take(&mut self.discarding) || line.len() > self.max_len {
                continue;
            }

            match self.decode_line(&line) {
                Some(text) => return Ok(Some(text)),
                None => {
                    tracing::debug!(
                        encoding = self.encoding.name(),
                        len = line.len(),
                        "Dropping undecodable line"
                    );
                }
            }
        }
    }
}

impl Encoder<Command> for LineCodec {
    type Error = ProtocolError;

    fn encode(&mut self, command: Command, dst: &mut BytesMut) -> error::Result<()> {
        let line = command.to_string();
        let (bytes, _, _) = self.encoding.encode(sanitize(&line));
        dst.reserve(bytes.len() + 2);
        dst.put_slice(&bytes);
        dst.put_slice(b"\r\n");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_all(codec: &mut LineCodec, bytes: &[u8]) -> Vec<String> {
        let mut buf = BytesMut::from(bytes);
        let mut out = Vec::new();
        while let Some(line) = codec.decode(&mut buf).unwrap() {
            out.push(line);
        }
        out
    }

    #[test]
    fn test_decodes_crlf_and_lf() {
        let mut codec = LineCodec::new("utf-8").unwrap();
        let lines = decode_all(&mut codec, b"PING :a\r\nPING :b\nPING :c");
        assert_eq!(lines, ["PING :a", "PING :b"]);
    }

    #[test]
    fn test_partial_line_completes_later() {
        let mut codec = LineCodec::new("utf-8").unwrap();
        let mut buf = BytesMut::from(&b"PRIVMSG #x :hel"[..]);
        assert_eq!(codec.decode(&mut buf).unwrap(), None);
        buf.extend_from_slice(b"lo\r\n");
        assert_eq!(codec.decode(&mut buf).unwrap().as_deref(), Some("PRIVMSG #x :hello"));
    }

    #[test]
    fn test_undecodable_line_is_dropped() {
        let mut codec = LineCodec::new("utf-8").unwrap();
        let lines = decode_all(&mut codec, b"PING :\xff\xfe\r\nPING :ok\r\n");
        assert_eq!(lines, ["PING :ok"]);
    }

    #[test]
    fn test_legacy_encoding_roundtrip() {
        let mut codec = LineCodec::new("windows-1251").unwrap();
        // "привет" in windows-1251
        let lines = decode_all(&mut codec, b"PRIVMSG #ru :\xef\xf0\xe8\xe2\xe5\xf2\r\n");
        assert_eq!(lines, ["PRIVMSG #ru :привет"]);

        let mut out = BytesMut::new();
        codec
            .encode(Command::privmsg("#ru", "привет"), &mut out)
            .unwrap();
        assert_eq!(&out[..], b"PRIVMSG #ru :\xef\xf0\xe8\xe2\xe5\xf2\r\n");
    }

    #[test]
    fn test_oversized_line_is_skipped() {
        let mut codec = LineCodec::new("utf-8").unwrap().with_max_len(16);
        let mut buf = BytesMut::from(&b"PRIVMSG #x :this line is far too long"[..]);
        assert_eq!(codec.decode(&mut buf).unwrap(), None);
        buf.extend_from_slice(b" and still going\r\nPING :ok\r\n");
        assert_eq!(codec.decode(&mut buf).unwrap().as_deref(), Some("PING :ok"));
    }

    #[test]
    fn test_encode_appends_crlf_and_truncates_injection() {
        let mut codec = LineCodec::new("utf-8").unwrap();
        let mut out = BytesMut::new();
        codec
            .encode(Command::privmsg("#x", "hi\r\nQUIT :gotcha"), &mut out)
            .unwrap();
        assert_eq!(&out[..], b"PRIVMSG #x :hi\r\n");
    }

    #[test]
    fn test_unknown_encoding() {
        assert!(matches!(
            LineCodec::new("klingon-8"),
            Err(ProtocolError::UnknownEncoding(_))
        ));
    }
}
