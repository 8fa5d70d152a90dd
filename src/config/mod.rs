//! Configuration loading and management.
//!
//! - [`types`]: Config struct definitions (Config, ServerConfig, IdentityConfig)
//! - [`defaults`]: serde default values
//! - [`validation`]: startup checks that report every problem at once

mod defaults;
mod types;
mod validation;

pub use types::{Config, ConfigError, IdentityConfig, ServerConfig};
pub use validation::{ValidationError, validate};
