//! # slirc-proto
//!
//! Client-side pieces of the IRC wire protocol.
//!
//! ## Features
//!
//! - Frame parsing into origin, verb and parameters
//! - Outbound [`Command`] construction and serialization
//! - Membership prefix parsing with a total rank order
//! - Byte-budgeted chunking of long chat text
//! - Optional Tokio line codec with configurable text encoding
//!
//! ## Quick Start
//!
//! ```rust
//! use slirc_proto::{parse_membership, Command, Frame, MembershipRank};
//!
//! let frame = Frame::parse(":irc.example.org 353 me = #rust :@alice bob").unwrap();
//! assert!(frame.is_numeric(slirc_proto::numeric::RPL_NAMREPLY));
//!
//! let alice = parse_membership("@alice");
//! assert_eq!(alice.rank, MembershipRank::Operator);
//!
//! assert_eq!(Command::names("#rust").to_string(), "NAMES #rust");
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod casemap;
pub mod chunk;
pub mod command;
pub mod error;
pub mod frame;
#[cfg(feature = "tokio")]
pub mod line;
pub mod membership;
pub mod names;
pub mod numeric;

pub use self::casemap::{irc_eq, irc_lower_char};
pub use self::chunk::{chunk_text, encoded_len, MAX_MESSAGE_SIZE};
pub use self::command::Command;
pub use self::error::ProtocolError;
pub use self::frame::{Frame, Origin};
#[cfg(feature = "tokio")]
pub use self::line::{LineCodec, MAX_LINE_LEN};
pub use self::membership::{parse_membership, Member, MembershipRank};
pub use self::names::NameExt;

pub use encoding::{Encoding, UTF_8};
