//! Inbound frame parsing.
//!
//! A [`Frame`] is one protocol line broken into its origin, verb and
//! parameters. Only the shape needed by a client is kept: IRCv3 tags are
//! skipped, and the trailing parameter is stored without its leading colon.
//!
//! ```
//! use slirc_proto::Frame;
//!
//! let frame = Frame::parse(":alice!al@host PRIVMSG #rust :hi: there").unwrap();
//! assert_eq!(frame.origin(), Some("alice!al@host"));
//! assert_eq!(frame.verb(), "PRIVMSG");
//! assert_eq!(frame.params(), ["#rust", "hi: there"]);
//! ```

use std::fmt;

/// One decoded, CRLF-stripped protocol line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    origin: Option<String>,
    verb: String,
    params: Vec<String>,
}

impl Frame {
    /// Parse a raw line. Returns `None` for blank lines and lines that stop
    /// before a verb.
    pub fn parse(line: &str) -> Option<Self> {
        let mut rest = line.trim_end_matches(['\r', '\n']);

        if rest.starts_with('@') {
            let (_tags, tail) = rest.split_once(' ')?;
            rest = tail.trim_start_matches(' ');
        }

        let origin = match rest.strip_prefix(':') {
            Some(tail) => {
                let (origin, tail) = tail.split_once(' ')?;
                rest = tail.trim_start_matches(' ');
                Some(origin.to_string())
            }
            None => None,
        };

        let (verb, mut rest) = match rest.split_once(' ') {
            Some((verb, tail)) => (verb, tail),
            None => (rest, ""),
        };
        if verb.is_empty() {
            return None;
        }

        let mut params = Vec::new();
        loop {
            rest = rest.trim_start_matches(' ');
            if rest.is_empty() {
                break;
            }
            if let Some(trailing) = rest.strip_prefix(':') {
                params.push(trailing.to_string());
                break;
            }
            match rest.split_once(' ') {
                Some((param, tail)) => {
                    params.push(param.to_string());
                    rest = tail;
                }
                None => {
                    params.push(rest.to_string());
                    break;
                }
            }
        }

        Some(Self {
            origin,
            verb: verb.to_ascii_uppercase(),
            params,
        })
    }

    /// Source of the frame without its leading colon, if present.
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// Command verb or three-digit numeric, uppercased.
    pub fn verb(&self) -> &str {
        &self.verb
    }

    /// True if the verb is the given numeric reply code.
    pub fn is_numeric(&self, code: u16) -> bool {
        self.verb.len() == 3 && self.verb.parse::<u16>().ok() == Some(code)
    }

    /// All parameters in order; the trailing one has no leading colon.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Parameter at `index`, if the frame has that many.
    pub fn param(&self, index: usize) -> Option<&str> {
        self.params.get(index).map(String::as_str)
    }

    /// Last parameter, which carries free text on most replies.
    pub fn trailing(&self) -> Option<&str> {
        self.params.last().map(String::as_str)
    }

    /// The origin split into a user identity, when it has one.
    pub fn user(&self) -> Option<Origin<'_>> {
        self.origin().and_then(Origin::parse)
    }
}

/// A user origin of the form `nick!fullname`, where `fullname` is the
/// `user@host` part.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Origin<'a> {
    /// Nickname before the `!`.
    pub nick: &'a str,
    /// Everything after the `!`.
    pub fullname: &'a str,
}

impl<'a> Origin<'a> {
    /// Split `nick!user@host`. Server origins have no `!` and yield `None`.
    pub fn parse(origin: &'a str) -> Option<Self> {
        let origin = origin.strip_prefix(':').unwrap_or(origin);
        let (nick, fullname) = origin.split_once('!')?;
        if nick.is_empty() {
            return None;
        }
        Some(Self { nick, fullname })
    }
}

impl fmt::Display for Origin<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.nick, self.fullname)
    }
}
