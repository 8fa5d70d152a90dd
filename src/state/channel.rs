//! Channel catalogue entries.

/// One row of the server's channel list, as reported by `322`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub name: String,
    /// Visible client count exactly as the server sent it.
    pub client_count: String,
    pub topic: String,
}

impl Channel {
    pub fn new(
        name: impl Into<String>,
        client_count: impl Into<String>,
        topic: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            client_count: client_count.into(),
            topic: topic.into(),
        }
    }

    /// Client count as a number. Counts that do not parse sort as 0.
    pub fn client_count_value(&self) -> u64 {
        self.client_count.trim().parse().unwrap_or(0)
    }
}

/// Sort a catalogue by client count, busiest first. Ties keep arrival order.
pub fn sort_catalogue(channels: &mut [Channel]) {
    channels.sort_by(|a, b| b.client_count_value().cmp(&a.client_count_value()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_count_value() {
        assert_eq!(Channel::new("#a", "42", "").client_count_value(), 42);
        assert_eq!(Channel::new("#a", "lots", "").client_count_value(), 0);
        assert_eq!(Channel::new("#a", "", "").client_count_value(), 0);
    }

    #[test]
    fn test_sort_is_numeric_and_stable() {
        let mut channels = vec![
            Channel::new("#nine", "9", ""),
            Channel::new("#tie1", "10", ""),
            Channel::new("#hundred", "100", ""),
            Channel::new("#tie2", "10", ""),
            Channel::new("#junk", "n/a", ""),
        ];
        sort_catalogue(&mut channels);
        let names: Vec<&str> = channels.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["#hundred", "#tie1", "#tie2", "#nine", "#junk"]);
    }
}
