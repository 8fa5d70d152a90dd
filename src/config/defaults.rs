//! Default value functions for configuration.

/// Plain-text IRC port.
pub fn default_port() -> u16 {
    6667
}

pub fn default_encoding() -> String {
    "utf-8".to_string()
}

pub fn default_realname() -> String {
    "slirc user".to_string()
}
