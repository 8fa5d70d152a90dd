//! Application-level events produced by the engine.

use crate::state::Channel;
use slirc_proto::Member;

/// Something the presentation layer should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A `LIST` cycle finished; channels are sorted busiest first.
    CatalogueUpdated(Vec<Channel>),
    /// The current channel's roster changed; members are sorted by rank, then nick.
    RosterUpdated(Vec<Member>),
    /// A formatted line for the chat window.
    DisplayLine(String),
}

impl Event {
    pub fn line(text: impl Into<String>) -> Self {
        Self::DisplayLine(text.into())
    }
}
