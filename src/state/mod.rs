//! State management module.
//!
//! Contains the per-connection [`SessionState`] and the catalogue [`Channel`].

mod channel;
mod session;

pub use channel::{Channel, sort_catalogue};
pub use session::SessionState;
