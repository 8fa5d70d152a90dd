//! slirc-client - a small IRC client engine.
//!
//! The engine keeps a live model of the server's channel list and the roster
//! of the joined channel, turns inbound frames into [`Event`]s for a
//! [`Presenter`], and turns user intents into framed commands.
//!
//! ```no_run
//! use std::sync::Arc;
//! use slirc_client::{Config, EventPresenter, Session};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let config = Config::load("config.toml")?;
//! let (presenter, mut events) = EventPresenter::new();
//! let session = Session::connect(&config, Arc::new(presenter)).await?;
//! let handle = session.handle();
//!
//! tokio::spawn(session.run());
//! handle.join("#rust")?;
//! while let Some(event) = events.recv().await {
//!     println!("{event:?}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod presenter;
pub mod queue;
pub mod session;
pub mod state;

pub use config::Config;
pub use error::{SessionError, SessionResult};
pub use event::Event;
pub use presenter::{EventPresenter, Presenter};
pub use session::{Session, SessionEnd, SessionHandle};
pub use state::Channel;
