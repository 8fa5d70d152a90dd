//! Inbound frame dispatch.
//!
//! This module contains the [`Matcher`] trait and the [`Registry`] that runs
//! every decoded [`Frame`] through a fixed, ordered chain of matchers.
//!
//! ## Matching Policy
//!
//! Matchers are independent: each one sees every frame and more than one may
//! react to the same frame. A matcher that does not recognize a frame, or finds
//! it shorter than expected, returns `None` and leaves state untouched. Nothing
//! a matcher does can stop the chain or the session.
//!
//! Matchers run synchronously under the session state lock. Anything meant for
//! the presenter is collected as [`Event`]s on the [`Context`] and delivered
//! after the lock is released.

mod catalogue;
mod connection;
mod membership;
mod messaging;
mod server_info;

pub use catalogue::{ListEndMatcher, ListEntryMatcher};
pub use connection::PingMatcher;
pub use membership::{MembershipChangeMatcher, NamesEndMatcher, NamesMatcher};
pub use messaging::PrivmsgMatcher;
pub use server_info::ServerInfoMatcher;

use crate::event::Event;
use crate::state::SessionState;
use slirc_proto::Frame;

/// Per-frame context handed to each matcher.
pub struct Context<'a> {
    /// Session state, locked for the duration of the dispatch.
    pub state: &'a mut SessionState,
    /// Events produced so far for this frame, in order.
    pub events: Vec<Event>,
}

impl<'a> Context<'a> {
    pub fn new(state: &'a mut SessionState) -> Self {
        Self {
            state,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }
}

/// Trait implemented by all inbound matchers.
///
/// Returns `Some(())` when the matcher acted on the frame and `None` when the
/// frame was not its shape. Use `?` on missing parameters to bail out.
pub trait Matcher: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    fn handle(&self, ctx: &mut Context<'_>, frame: &Frame) -> Option<()>;
}

/// Ordered chain of matchers.
pub struct Registry {
    matchers: Vec<Box<dyn Matcher>>,
}

impl Registry {
    /// Create a registry with every matcher in dispatch order.
    pub fn new() -> Self {
        let matchers: Vec<Box<dyn Matcher>> = vec![
            // Liveness first so a slow presenter never delays the PONG
            Box::new(PingMatcher),
            // Catalogue
            Box::new(ListEntryMatcher),
            Box::new(ListEndMatcher),
            // Roster
            Box::new(NamesMatcher),
            Box::new(NamesEndMatcher),
            // Chat
            Box::new(PrivmsgMatcher),
            Box::new(MembershipChangeMatcher),
            // Everything shown verbatim
            Box::new(ServerInfoMatcher),
        ];
        Self { matchers }
    }

    /// Run `frame` through every matcher and return the events produced.
    pub fn dispatch(&self, state: &mut SessionState, frame: &Frame) -> Vec<Event> {
        let mut ctx = Context::new(state);
        let mut matched = false;
        for matcher in &self.matchers {
            if matcher.handle(&mut ctx, frame).is_some() {
                tracing::trace!(matcher = matcher.name(), verb = %frame.verb(), "Frame matched");
                matched = true;
            }
        }
        if !matched {
            tracing::trace!(verb = %frame.verb(), "No matcher accepted frame");
        }
        ctx.events
    }

    /// Parse and dispatch one raw line. Blank and verbless lines yield nothing.
    pub fn dispatch_line(&self, state: &mut SessionState, line: &str) -> Vec<Event> {
        match Frame::parse(line) {
            Some(frame) => self.dispatch(state, &frame),
            None => {
                tracing::trace!(line = %line, "Dropping unparsable frame");
                Vec::new()
            }
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
