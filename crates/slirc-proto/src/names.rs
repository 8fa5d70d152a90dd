//! Nickname and channel name checks.
//!
//! # Reference
//! - RFC 2812 Section 1.3 (channels) and 2.3.1 (nickname grammar)

/// Maximum nickname length accepted locally.
pub const NICK_MAX_LEN: usize = 30;

/// Maximum channel name length, including the type character.
pub const CHANNEL_MAX_LEN: usize = 50;

/// Extension trait for validating names before they are put on the wire.
pub trait NameExt {
    /// True if this is a channel name: starts with `#`, `&`, `+` or `!` and
    /// holds no space, comma, BEL or other control character.
    ///
    /// ```
    /// use slirc_proto::NameExt;
    ///
    /// assert!("#rust".is_channel_name());
    /// assert!(!"rust".is_channel_name());
    /// assert!(!"#a,b".is_channel_name());
    /// ```
    fn is_channel_name(&self) -> bool;

    /// True if this is a nickname per RFC 2812: a letter or special first,
    /// then letters, digits, specials or hyphens.
    ///
    /// ```
    /// use slirc_proto::NameExt;
    ///
    /// assert!("slirc".is_valid_nick());
    /// assert!("[away]".is_valid_nick());
    /// assert!(!"9lives".is_valid_nick());
    /// ```
    fn is_valid_nick(&self) -> bool;
}

#[inline]
fn is_special(c: char) -> bool {
    matches!(c, '[' | ']' | '\\' | '`' | '_' | '^' | '{' | '|' | '}')
}

impl NameExt for str {
    fn is_channel_name(&self) -> bool {
        let mut chars = self.chars();
        if !matches!(chars.next(), Some('#' | '&' | '+' | '!')) {
            return false;
        }
        self.chars().count() <= CHANNEL_MAX_LEN
            && chars.all(|c| c != ' ' && c != ',' && !c.is_control())
    }

    fn is_valid_nick(&self) -> bool {
        if self.is_empty() || self.len() > NICK_MAX_LEN {
            return false;
        }
        let mut chars = self.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() || is_special(first) => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_alphanumeric() || is_special(c) || c == '-')
    }
}

impl NameExt for String {
    fn is_channel_name(&self) -> bool {
        self.as_str().is_channel_name()
    }

    fn is_valid_nick(&self) -> bool {
        self.as_str().is_valid_nick()
    }
}
