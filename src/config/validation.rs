//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use slirc_proto::{Encoding, NameExt};
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("server.host is required")]
    MissingHost,
    #[error("server.port must be non-zero")]
    InvalidPort,
    #[error("server.encoding is not a known encoding label: '{0}'")]
    UnknownEncoding(String),
    #[error("identity.nick is not a valid nickname: '{0}'")]
    InvalidNick(String),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.host.trim().is_empty() {
        errors.push(ValidationError::MissingHost);
    }
    if config.server.port == 0 {
        errors.push(ValidationError::InvalidPort);
    }
    if Encoding::for_label(config.server.encoding.trim().as_bytes()).is_none() {
        errors.push(ValidationError::UnknownEncoding(
            config.server.encoding.clone(),
        ));
    }
    if !config.identity.nick.is_valid_nick() {
        errors.push(ValidationError::InvalidNick(config.identity.nick.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_valid_config() -> String {
        r#"
[server]
host = "irc.example.org"

[identity]
nick = "slirc"
"#
        .to_string()
    }

    #[test]
    fn test_valid_config_passes() {
        let config: Config = toml::from_str(&minimal_valid_config()).unwrap();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_reports_every_problem() {
        let toml = r#"
[server]
host = ""
port = 0
encoding = "klingon-8"

[identity]
nick = "9 lives"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let errors = validate(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.iter().any(|e| matches!(e, ValidationError::MissingHost)));
        assert!(errors.iter().any(|e| matches!(e, ValidationError::InvalidPort)));
        assert!(errors.iter().any(|e| matches!(e, ValidationError::UnknownEncoding(_))));
        assert!(errors.iter().any(|e| matches!(e, ValidationError::InvalidNick(_))));
    }

    #[test]
    fn test_legacy_encoding_accepted() {
        let toml = r#"
[server]
host = "irc.example.org"
encoding = "latin1"

[identity]
nick = "slirc"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(validate(&config).is_ok());
    }
}
