//! User-command API.

use std::sync::Arc;

use parking_lot::Mutex;
use slirc_proto::Member;

use crate::error::SessionResult;
use crate::presenter::{Presenter, deliver};
use crate::state::{Channel, SessionState};

/// Cloneable handle to a session's state.
///
/// Every method is a short state mutation plus an enqueue. Nothing here
/// touches the network directly.
#[derive(Clone)]
pub struct SessionHandle {
    state: Arc<Mutex<SessionState>>,
    presenter: Arc<dyn Presenter>,
}

impl SessionHandle {
    pub(crate) fn new(state: Arc<Mutex<SessionState>>, presenter: Arc<dyn Presenter>) -> Self {
        Self { state, presenter }
    }

    pub fn join(&self, room: &str) -> SessionResult {
        self.state.lock().join(room)
    }

    pub fn leave(&self) {
        self.state.lock().leave();
    }

    /// Ask for the roster of the current channel.
    pub fn request_roster(&self) -> SessionResult {
        self.state.lock().request_roster()
    }

    /// Ask for a fresh channel list.
    pub fn request_catalogue(&self) {
        self.state.lock().request_catalogue();
    }

    pub fn kick(&self, nick: &str, reason: &str) -> SessionResult {
        self.state.lock().kick(nick, reason)
    }

    pub fn ban(&self, nick: &str) -> SessionResult {
        self.state.lock().ban(nick)
    }

    /// Send chat text to the current channel.
    ///
    /// Each fragment is echoed to the presenter before it is queued.
    pub async fn send_message(&self, text: &str) -> SessionResult {
        let (queue, fragments) = {
            let state = self.state.lock();
            (state.queue().clone(), state.message_fragments(text)?)
        };
        for (echo, command) in fragments {
            deliver(self.presenter.as_ref(), echo).await;
            queue.enqueue(command);
        }
        Ok(())
    }

    pub fn execute_raw(&self, line: &str) -> SessionResult {
        self.state.lock().execute_raw(line)
    }

    /// Say goodbye. The session ends when the server closes the stream.
    pub fn close(&self) {
        self.state.lock().close();
    }

    pub fn nick(&self) -> String {
        self.state.lock().nick().to_string()
    }

    pub fn current_room(&self) -> Option<String> {
        self.state.lock().current_room().map(str::to_string)
    }

    pub fn roster(&self) -> Vec<Member> {
        self.state.lock().roster().to_vec()
    }

    pub fn catalogue(&self) -> Vec<Channel> {
        self.state.lock().catalogue().to_vec()
    }

    /// False once the session's send loop has stopped.
    pub fn is_connected(&self) -> bool {
        !self.state.lock().queue().is_closed()
    }
}
