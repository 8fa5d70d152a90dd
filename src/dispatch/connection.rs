//! Connection liveness.

use super::{Context, Matcher};
use slirc_proto::{Command, Frame};

/// Answers `PING` with a `PONG` echoing the token.
pub struct PingMatcher;

impl Matcher for PingMatcher {
    fn name(&self) -> &'static str {
        "ping"
    }

    fn handle(&self, ctx: &mut Context<'_>, frame: &Frame) -> Option<()> {
        if frame.verb() != "PING" {
            return None;
        }
        // PING :<token>
        let token = frame.param(0)?;
        ctx.state.queue().enqueue(Command::pong(token));
        Some(())
    }
}

#[cfg(test)]
mod tests {
    use crate::dispatch::test_support::*;

    #[test]
    fn test_ping_enqueues_exactly_one_pong() {
        let (mut state, mut drain) = state();
        let events = run(&mut state, "PING :irc.example.org");
        assert!(events.is_empty());
        assert_eq!(sent(&mut drain), ["PONG :irc.example.org"]);
    }

    #[test]
    fn test_ping_token_echoed_verbatim() {
        let (mut state, mut drain) = state();
        run(&mut state, ":hub.example.org PING :12345 with: spaces");
        assert_eq!(sent(&mut drain), ["PONG :12345 with: spaces"]);
    }

    #[test]
    fn test_ping_without_token_is_ignored() {
        let (mut state, mut drain) = state();
        run(&mut state, "PING");
        assert!(sent(&mut drain).is_empty());
    }
}
