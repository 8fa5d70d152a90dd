//! Outbound commands.
//!
//! A [`Command`] is a verb plus an ordered parameter list. Parameters are
//! opaque: a trailing parameter carries its own leading colon, and
//! serialization joins everything with single spaces without escaping.
//!
//! ```
//! use slirc_proto::Command;
//!
//! assert_eq!(Command::join("#rust").to_string(), "JOIN #rust");
//! assert_eq!(Command::privmsg("#rust", "hi all").to_string(), "PRIVMSG #rust :hi all");
//! assert_eq!(Command::list().to_string(), "LIST");
//! ```

use std::fmt;

/// Parameter used by `JOIN` to leave every joined channel.
pub const PART_ALL: &str = "0";

/// Text sent with `QUIT` by [`Command::quit`] callers that have nothing to say.
pub const DEFAULT_QUIT_MESSAGE: &str = "Bye!";

/// One outbound protocol operation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Command {
    /// Uppercase verb.
    pub verb: String,
    /// Parameters, already in wire form.
    pub params: Vec<String>,
}

impl Command {
    /// Build a command from a verb and parameters.
    pub fn new<V, I, P>(verb: V, params: I) -> Self
    where
        V: Into<String>,
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self {
            verb: verb.into(),
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    /// `NICK <nick>`
    pub fn nick(nick: &str) -> Self {
        Self::new("NICK", [nick])
    }

    /// `USER <nick> 8 * :<realname>`
    pub fn user(nick: &str, realname: &str) -> Self {
        Self::new(
            "USER",
            [
                nick.to_string(),
                "8".to_string(),
                "*".to_string(),
                format!(":{realname}"),
            ],
        )
    }

    /// `LIST`
    pub fn list() -> Self {
        Self::new("LIST", Vec::<String>::new())
    }

    /// `NAMES <room>`
    pub fn names(room: &str) -> Self {
        Self::new("NAMES", [room])
    }

    /// `JOIN <room>`
    pub fn join(room: &str) -> Self {
        Self::new("JOIN", [room])
    }

    /// `JOIN 0`, leaving every channel.
    pub fn part_all() -> Self {
        Self::new("JOIN", [PART_ALL])
    }

    /// `KICK <room> <nick> :<reason>`
    pub fn kick(room: &str, nick: &str, reason: &str) -> Self {
        Self::new(
            "KICK",
            [room.to_string(), nick.to_string(), format!(":{reason}")],
        )
    }

    /// `MODE <room> +b <nick>`
    pub fn ban(room: &str, nick: &str) -> Self {
        Self::new("MODE", [room, "+b", nick])
    }

    /// `PRIVMSG <room> :<text>`
    pub fn privmsg(target: &str, text: &str) -> Self {
        Self::new("PRIVMSG", [target.to_string(), format!(":{text}")])
    }

    /// `PONG :<token>`
    pub fn pong(token: &str) -> Self {
        Self::new("PONG", [format!(":{token}")])
    }

    /// `QUIT :<text>`
    pub fn quit(text: &str) -> Self {
        Self::new("QUIT", [format!(":{text}")])
    }

    /// Split a user-typed line on its first whitespace into verb and
    /// parameters. The verb is uppercased; the remainder is kept verbatim.
    /// Returns `None` for blank input.
    ///
    /// ```
    /// use slirc_proto::Command;
    ///
    /// let cmd = Command::raw("topic #rust :new topic").unwrap();
    /// assert_eq!(cmd.verb, "TOPIC");
    /// assert_eq!(cmd.to_string(), "TOPIC #rust :new topic");
    /// ```
    pub fn raw(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim_start()),
            None => (line, ""),
        };
        let params = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split(' ').map(str::to_string).collect()
        };
        Some(Self {
            verb: verb.to_ascii_uppercase(),
            params,
        })
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.verb)?;
        for param in &self.params {
            write!(f, " {param}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_commands() {
        assert_eq!(Command::nick("slirc").to_string(), "NICK slirc");
        assert_eq!(
            Command::user("slirc", "Straylight User").to_string(),
            "USER slirc 8 * :Straylight User"
        );
    }

    #[test]
    fn test_moderation_commands() {
        assert_eq!(
            Command::kick("#ops", "mallory", "spam").to_string(),
            "KICK #ops mallory :spam"
        );
        assert_eq!(Command::ban("#ops", "mallory").to_string(), "MODE #ops +b mallory");
    }

    #[test]
    fn test_pong_keeps_colon_in_param() {
        let pong = Command::pong("irc.example.org");
        assert_eq!(pong.verb, "PONG");
        assert_eq!(pong.params, vec![":irc.example.org".to_string()]);
    }

    #[test]
    fn test_part_all_and_quit() {
        assert_eq!(Command::part_all().to_string(), "JOIN 0");
        assert_eq!(Command::quit(DEFAULT_QUIT_MESSAGE).to_string(), "QUIT :Bye!");
    }

    #[test]
    fn test_raw_splits_on_first_whitespace() {
        let cmd = Command::raw("  whois\talice ").unwrap();
        assert_eq!(cmd.verb, "WHOIS");
        assert_eq!(cmd.params, vec!["alice".to_string()]);

        let bare = Command::raw("list").unwrap();
        assert!(bare.params.is_empty());
        assert_eq!(bare.to_string(), "LIST");

        assert!(Command::raw("   ").is_none());
    }
}
