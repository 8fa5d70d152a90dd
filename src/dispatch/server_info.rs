//! Informational replies shown as-is: welcome burst, LUSERS, MOTD, notices.

use super::{Context, Matcher};
use crate::event::Event;
use slirc_proto::Frame;
use slirc_proto::numeric::{SERVER_INFO_NUMERICS, SERVER_INFO_VERBS};

/// Formats allow-listed replies as `<origin> text`.
pub struct ServerInfoMatcher;

impl ServerInfoMatcher {
    fn is_allowed(frame: &Frame) -> bool {
        SERVER_INFO_VERBS.contains(&frame.verb())
            || SERVER_INFO_NUMERICS
                .iter()
                .any(|&code| frame.is_numeric(code))
    }
}

impl Matcher for ServerInfoMatcher {
    fn name(&self) -> &'static str {
        "server-info"
    }

    fn handle(&self, ctx: &mut Context<'_>, frame: &Frame) -> Option<()> {
        if !Self::is_allowed(frame) {
            return None;
        }
        let text = frame.trailing()?;
        let line = match frame.origin() {
            Some(origin) => format!("<{origin}> {text}"),
            // Pre-registration notices may come without a prefix
            None => text.to_string(),
        };
        ctx.emit(Event::DisplayLine(line));
        Some(())
    }
}
