//! Channel membership prefixes.
//!
//! Roster replies list members with a leading status symbol (`@alice`,
//! `+bob`). [`parse_membership`] turns such a token into a [`Member`] whose
//! rank gives a total order for sorting and privilege comparison.

/// Privilege level of a channel member. Declaration order is the sort order:
/// `Founder` first, `Default` last.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MembershipRank {
    /// `~` / `+q`
    Founder,
    /// `&` / `+a`
    Protected,
    /// `@` / `+o`
    Operator,
    /// `%` / `+h`
    Halfop,
    /// `+` / `+v`
    Voice,
    /// No status prefix.
    Default,
}

/// Ranks that carry a prefix, highest priority first.
const PREFIXED_RANKS: [MembershipRank; 5] = [
    MembershipRank::Founder,
    MembershipRank::Protected,
    MembershipRank::Operator,
    MembershipRank::Halfop,
    MembershipRank::Voice,
];

impl MembershipRank {
    /// Roster symbol for this rank, empty for `Default`.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Founder => "~",
            Self::Protected => "&",
            Self::Operator => "@",
            Self::Halfop => "%",
            Self::Voice => "+",
            Self::Default => "",
        }
    }

    /// Channel mode that grants this rank, e.g. `+o` for `Operator`.
    pub const fn mode_letter(self) -> Option<&'static str> {
        match self {
            Self::Founder => Some("+q"),
            Self::Protected => Some("+a"),
            Self::Operator => Some("+o"),
            Self::Halfop => Some("+h"),
            Self::Voice => Some("+v"),
            Self::Default => None,
        }
    }

    /// True if this rank may kick and ban (halfop or above).
    pub fn can_moderate(self) -> bool {
        self <= Self::Halfop
    }
}

/// One participant of the joined channel.
///
/// Field order matters: the derived `Ord` sorts by rank, then nick.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Member {
    /// Privilege level derived from the prefix.
    pub rank: MembershipRank,
    /// Nickname without any prefix.
    pub nick: String,
    /// The stripped prefix symbol, or empty.
    pub prefix: String,
}

impl Member {
    /// Build a member directly.
    pub fn new(rank: MembershipRank, nick: impl Into<String>) -> Self {
        Self {
            rank,
            nick: nick.into(),
            prefix: rank.symbol().to_string(),
        }
    }

    /// Nick as displayed in a roster, prefix included.
    pub fn display_name(&self) -> String {
        format!("{}{}", self.prefix, self.nick)
    }
}

/// Parse a roster token such as `@alice` into a [`Member`].
///
/// Symbols are checked in priority order and the first match wins; exactly
/// one symbol character is stripped. Tokens with no known symbol get
/// [`MembershipRank::Default`] and an empty prefix.
///
/// ```
/// use slirc_proto::{parse_membership, MembershipRank};
///
/// let op = parse_membership("@alice");
/// assert_eq!(op.rank, MembershipRank::Operator);
/// assert_eq!(op.nick, "alice");
/// assert_eq!(op.prefix, "@");
///
/// let plain = parse_membership("bob");
/// assert_eq!(plain.rank, MembershipRank::Default);
/// assert_eq!(plain.prefix, "");
/// ```
pub fn parse_membership(token: &str) -> Member {
    for rank in PREFIXED_RANKS {
        let symbol = rank.symbol();
        if let Some(nick) = token.strip_prefix(symbol) {
            return Member {
                rank,
                nick: nick.to_string(),
                prefix: symbol.to_string(),
            };
        }
    }
    Member {
        rank: MembershipRank::Default,
        nick: token.to_string(),
        prefix: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_symbol() {
        let cases = [
            ("~f", MembershipRank::Founder),
            ("&p", MembershipRank::Protected),
            ("@o", MembershipRank::Operator),
            ("%h", MembershipRank::Halfop),
            ("+v", MembershipRank::Voice),
        ];
        for (token, rank) in cases {
            let member = parse_membership(token);
            assert_eq!(member.rank, rank, "token {token}");
            assert_eq!(member.nick, &token[1..]);
            assert_eq!(member.prefix, &token[..1]);
        }
    }

    #[test]
    fn test_mode_letter_forms_rank_as_voice() {
        // "+o" starts with the voice symbol; only single characters are matched.
        let member = parse_membership("+oscar");
        assert_eq!(member.rank, MembershipRank::Voice);
        assert_eq!(member.nick, "oscar");
    }

    #[test]
    fn test_only_one_symbol_is_stripped() {
        let member = parse_membership("@@double");
        assert_eq!(member.rank, MembershipRank::Operator);
        assert_eq!(member.nick, "@double");
    }

    #[test]
    fn test_highest_priority_wins() {
        let member = parse_membership("~@both");
        assert_eq!(member.rank, MembershipRank::Founder);
        assert_eq!(member.nick, "@both");
    }

    #[test]
    fn test_default_and_empty() {
        let member = parse_membership("");
        assert_eq!(member.rank, MembershipRank::Default);
        assert_eq!(member.nick, "");
        assert_eq!(member.prefix, "");
    }

    #[test]
    fn test_rank_order_and_sort() {
        assert!(MembershipRank::Founder < MembershipRank::Protected);
        assert!(MembershipRank::Voice < MembershipRank::Default);

        let mut members = vec![
            parse_membership("zed"),
            parse_membership("+carol"),
            parse_membership("@bob"),
            parse_membership("@alice"),
        ];
        members.sort();
        let names: Vec<_> = members.iter().map(Member::display_name).collect();
        assert_eq!(names, ["@alice", "@bob", "+carol", "zed"]);
    }

    #[test]
    fn test_moderation_threshold() {
        assert!(MembershipRank::Halfop.can_moderate());
        assert!(!MembershipRank::Voice.can_moderate());
        assert_eq!(MembershipRank::Operator.mode_letter(), Some("+o"));
        assert_eq!(MembershipRank::Default.mode_letter(), None);
    }
}
