//! Callback interface to the presentation layer.
//!
//! The engine never renders anything itself. Every catalogue, roster and chat
//! line it produces is handed to a [`Presenter`].

use async_trait::async_trait;
use slirc_proto::Member;
use tokio::sync::mpsc;

use crate::event::Event;
use crate::state::Channel;

/// Receives engine output.
///
/// Calls are made from the session task, one at a time, in the order the
/// events were produced.
#[async_trait]
pub trait Presenter: Send + Sync {
    /// A `LIST` cycle finished. Channels are sorted busiest first.
    async fn on_catalogue_updated(&self, channels: Vec<Channel>);

    /// The roster of the current channel changed. Members are sorted by rank.
    async fn on_roster_updated(&self, members: Vec<Member>);

    /// A line of chat, a notice, or server information.
    async fn on_display_line(&self, line: String);
}

/// Route one event to the matching callback.
pub async fn deliver(presenter: &dyn Presenter, event: Event) {
    match event {
        Event::CatalogueUpdated(channels) => presenter.on_catalogue_updated(channels).await,
        Event::RosterUpdated(members) => presenter.on_roster_updated(members).await,
        Event::DisplayLine(line) => presenter.on_display_line(line).await,
    }
}

/// Deliver events in order.
pub async fn deliver_all(presenter: &dyn Presenter, events: Vec<Event>) {
    for event in events {
        deliver(presenter, event).await;
    }
}

/// Presenter that forwards every callback into a channel as an [`Event`].
///
/// Useful for front ends that run their own loop, and for tests.
#[derive(Clone, Debug)]
pub struct EventPresenter {
    tx: mpsc::UnboundedSender<Event>,
}

impl EventPresenter {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Event>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn forward(&self, event: Event) {
        if self.tx.send(event).is_err() {
            tracing::trace!("Event receiver dropped");
        }
    }
}

#[async_trait]
impl Presenter for EventPresenter {
    async fn on_catalogue_updated(&self, channels: Vec<Channel>) {
        self.forward(Event::CatalogueUpdated(channels));
    }

    async fn on_roster_updated(&self, members: Vec<Member>) {
        self.forward(Event::RosterUpdated(members));
    }

    async fn on_display_line(&self, line: String) {
        self.forward(Event::DisplayLine(line));
    }
}
