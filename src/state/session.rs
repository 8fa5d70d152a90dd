//! Per-connection client state.
//!
//! [`SessionState`] is the one mutable model of a connection: who we are,
//! which channel we are in, the catalogue being collected and the roster of
//! the current channel. It is shared between the reader loop and
//! [`crate::session::SessionHandle`] behind a mutex; every method here is
//! synchronous so the lock is never held across an await point.
//!
//! User commands validate locally first. A command that fails validation
//! enqueues nothing.

use slirc_proto::command::DEFAULT_QUIT_MESSAGE;
use slirc_proto::{
    Command, Encoding, MAX_MESSAGE_SIZE, Member, NameExt, chunk_text, irc_eq, parse_membership,
};

use super::channel::{Channel, sort_catalogue};
use crate::error::{SessionError, SessionResult};
use crate::event::Event;
use crate::queue::CommandQueue;

#[derive(Debug)]
pub struct SessionState {
    nick: String,
    realname: String,
    encoding: &'static Encoding,
    current_room: Option<String>,
    catalogue: Vec<Channel>,
    roster: Vec<Member>,
    /// Set between the first `353` of a reply and its `366`.
    names_open: bool,
    queue: CommandQueue,
}

impl SessionState {
    pub fn new(
        nick: impl Into<String>,
        realname: impl Into<String>,
        encoding: &'static Encoding,
        queue: CommandQueue,
    ) -> Self {
        Self {
            nick: nick.into(),
            realname: realname.into(),
            encoding,
            current_room: None,
            catalogue: Vec::new(),
            roster: Vec::new(),
            names_open: false,
            queue,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn nick(&self) -> &str {
        &self.nick
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    pub fn current_room(&self) -> Option<&str> {
        self.current_room.as_deref()
    }

    /// Catalogue entries collected so far in this `LIST` cycle.
    pub fn catalogue(&self) -> &[Channel] {
        &self.catalogue
    }

    pub fn roster(&self) -> &[Member] {
        &self.roster
    }

    pub fn queue(&self) -> &CommandQueue {
        &self.queue
    }

    /// True if `nick` is the local identity.
    pub fn is_me(&self, nick: &str) -> bool {
        irc_eq(&self.nick, nick)
    }

    /// True if `room` is the channel we are in.
    pub fn is_current_room(&self, room: &str) -> bool {
        self.current_room
            .as_deref()
            .is_some_and(|current| irc_eq(current, room))
    }

    fn require_room(&self) -> SessionResult<&str> {
        self.current_room.as_deref().ok_or(SessionError::NotOnChannel)
    }

    // ========================================================================
    // User commands
    // ========================================================================

    /// Enqueue `NICK` and `USER`.
    pub fn announce_identity(&self) {
        self.queue.enqueue(Command::nick(&self.nick));
        self.queue.enqueue(Command::user(&self.nick, &self.realname));
    }

    /// Start a new catalogue cycle.
    pub fn request_catalogue(&mut self) {
        self.catalogue.clear();
        self.queue.enqueue(Command::list());
    }

    /// Join `room` and make it the current channel.
    pub fn join(&mut self, room: &str) -> SessionResult {
        let room = room.trim();
        if !room.is_channel_name() {
            return Err(SessionError::InvalidChannel(room.to_string()));
        }
        self.queue.enqueue(Command::join(room));
        self.enter_room(room);
        Ok(())
    }

    /// Leave every channel.
    pub fn leave(&mut self) {
        self.queue.enqueue(Command::part_all());
        self.clear_room();
    }

    pub fn request_roster(&self) -> SessionResult {
        let room = self.require_room()?;
        self.queue.enqueue(Command::names(room));
        Ok(())
    }

    pub fn kick(&self, nick: &str, reason: &str) -> SessionResult {
        let room = self.require_room()?;
        let nick = require_nick(nick)?;
        self.queue.enqueue(Command::kick(room, nick, reason));
        Ok(())
    }

    pub fn ban(&self, nick: &str) -> SessionResult {
        let room = self.require_room()?;
        let nick = require_nick(nick)?;
        self.queue.enqueue(Command::ban(room, nick));
        Ok(())
    }

    /// Split chat text for the current channel into echo and `PRIVMSG` pairs.
    ///
    /// Each line of `text` is chunked on its own and blank lines are skipped.
    /// Nothing is enqueued: the caller shows each echo, then sends its command.
    pub fn message_fragments(&self, text: &str) -> SessionResult<Vec<(Event, Command)>> {
        let room = self.require_room()?;
        let fragments = text
            .split(['\r', '\n'])
            .filter(|line| !line.is_empty())
            .flat_map(|line| chunk_text(line, MAX_MESSAGE_SIZE, self.encoding))
            .map(|fragment| {
                let echo = Event::DisplayLine(format!("<{} (YOU)> {}", self.nick, fragment));
                (echo, Command::privmsg(room, &fragment))
            })
            .collect();
        Ok(fragments)
    }

    /// Send a user-typed command line as-is.
    pub fn execute_raw(&mut self, line: &str) -> SessionResult {
        let command = Command::raw(line).ok_or(SessionError::EmptyCommand)?;
        if command.verb == "LIST" {
            self.catalogue.clear();
        }
        self.queue.enqueue(command);
        Ok(())
    }

    pub fn close(&self) {
        self.queue.enqueue(Command::quit(DEFAULT_QUIT_MESSAGE));
    }

    // ========================================================================
    // Mutations driven by server replies
    // ========================================================================

    pub(crate) fn push_channel(&mut self, channel: Channel) {
        self.catalogue.push(channel);
    }

    /// Sort the catalogue and return a copy for the presenter.
    pub(crate) fn finish_catalogue(&mut self) -> Vec<Channel> {
        sort_catalogue(&mut self.catalogue);
        self.catalogue.clone()
    }

    /// Take one `353` line. The first line of a reply replaces the roster;
    /// continuation lines before the `366` extend it.
    pub(crate) fn absorb_names<'a>(&mut self, tokens: impl IntoIterator<Item = &'a str>) {
        if !std::mem::replace(&mut self.names_open, true) {
            self.roster.clear();
        }
        self.roster.extend(tokens.into_iter().map(parse_membership));
    }

    /// Close the current `353` reply and return the sorted roster.
    pub(crate) fn finish_names(&mut self) -> Vec<Member> {
        self.names_open = false;
        self.sorted_roster()
    }

    /// Add a joiner, replacing any stale entry for the same nick.
    pub(crate) fn add_member(&mut self, token: &str) {
        let member = parse_membership(token);
        self.remove_member(&member.nick);
        self.roster.push(member);
    }

    /// Remove every roster entry for `nick`. Returns true if any was removed.
    pub(crate) fn remove_member(&mut self, nick: &str) -> bool {
        let before = self.roster.len();
        self.roster.retain(|member| !irc_eq(&member.nick, nick));
        self.roster.len() != before
    }

    pub(crate) fn enter_room(&mut self, room: &str) {
        if !self.is_current_room(room) {
            self.roster.clear();
        }
        self.current_room = Some(room.to_string());
    }

    pub(crate) fn clear_room(&mut self) {
        self.current_room = None;
        self.roster.clear();
        self.names_open = false;
    }

    /// Sorted copy of the roster for the presenter.
    pub(crate) fn sorted_roster(&self) -> Vec<Member> {
        let mut roster = self.roster.clone();
        roster.sort();
        roster
    }
}

fn require_nick(nick: &str) -> SessionResult<&str> {
    let nick = nick.trim();
    if nick.is_empty() {
        return Err(SessionError::MissingNick);
    }
    Ok(nick)
}
