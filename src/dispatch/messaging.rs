//! Chat messages.

use super::{Context, Matcher};
use crate::event::Event;
use slirc_proto::Frame;

/// Renders `PRIVMSG` as `<nick (fullname)> text`.
pub struct PrivmsgMatcher;

impl Matcher for PrivmsgMatcher {
    fn name(&self) -> &'static str {
        "privmsg"
    }

    fn handle(&self, ctx: &mut Context<'_>, frame: &Frame) -> Option<()> {
        if frame.verb() != "PRIVMSG" || frame.params().len() < 2 {
            return None;
        }
        let sender = frame.user()?;
        let text = frame.trailing()?;
        ctx.emit(Event::DisplayLine(format!("<{sender}> {text}")));
        Some(())
    }
}

#[cfg(test)]
mod tests {
    use crate::dispatch::test_support::*;
    use crate::event::Event;

    #[test]
    fn test_privmsg_display_line() {
        let (mut state, _drain) = state();
        let events = run(&mut state, ":alice!al@example.org PRIVMSG #rust :hello: world");
        assert_eq!(
            events,
            [Event::line("<alice (al@example.org)> hello: world")]
        );
    }

    #[test]
    fn test_privmsg_from_server_is_ignored() {
        let (mut state, _drain) = state();
        assert!(run(&mut state, ":irc.example.org PRIVMSG me :hi").is_empty());
    }

    #[test]
    fn test_privmsg_without_text_is_ignored() {
        let (mut state, _drain) = state();
        assert!(run(&mut state, ":alice!al@host PRIVMSG #rust").is_empty());
    }
}
