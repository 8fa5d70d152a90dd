//! Channel catalogue replies (`322`, `323`).

use super::{Context, Matcher};
use crate::event::Event;
use crate::state::Channel;
use slirc_proto::Frame;
use slirc_proto::numeric::{RPL_LIST, RPL_LISTEND};

/// Appends one `322` entry to the catalogue in progress.
pub struct ListEntryMatcher;

impl Matcher for ListEntryMatcher {
    fn name(&self) -> &'static str {
        "list-entry"
    }

    fn handle(&self, ctx: &mut Context<'_>, frame: &Frame) -> Option<()> {
        if !frame.is_numeric(RPL_LIST) {
            return None;
        }
        // 322 <target> <channel> <count> :<topic>
        let room = frame.param(1)?;
        let count = frame.param(2)?;
        let topic = frame.params().get(3..).unwrap_or_default().join(" ");
        ctx.state.push_channel(Channel::new(room, count, &topic));
        Some(())
    }
}

/// Publishes the sorted catalogue on `323`.
pub struct ListEndMatcher;

impl Matcher for ListEndMatcher {
    fn name(&self) -> &'static str {
        "list-end"
    }

    fn handle(&self, ctx: &mut Context<'_>, frame: &Frame) -> Option<()> {
        if !frame.is_numeric(RPL_LISTEND) {
            return None;
        }
        let channels = ctx.state.finish_catalogue();
        tracing::debug!(count = channels.len(), "Channel list complete");
        ctx.emit(Event::CatalogueUpdated(channels));
        Some(())
    }
}
