//! Session source classification.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which slice of the external task store feeds a session.
///
/// This is the only piece of session state that survives a process
/// restart; everything else is rebuilt from the caller-supplied
/// identifier list at the next `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Tasks scheduled for today.
    #[default]
    Today,
    /// Unscheduled backlog tasks.
    Inbox,
    /// Everything still open.
    All,
}

impl Source {
    /// Stable lowercase name, used for persistence and display.
    pub fn as_str(self) -> &'static str {
        match self {
            Source::Today => "today",
            Source::Inbox => "inbox",
            Source::All => "all",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown source name.
#[derive(Debug, thiserror::Error)]
#[error("unknown source '{0}' (expected today, inbox or all)")]
pub struct ParseSourceError(String);

impl FromStr for Source {
    type Err = ParseSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "today" => Ok(Source::Today),
            "inbox" => Ok(Source::Inbox),
            "all" => Ok(Source::All),
            other => Err(ParseSourceError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_display() {
        assert_eq!(Source::Today.to_string(), "today");
        assert_eq!(Source::Inbox.to_string(), "inbox");
        assert_eq!(Source::All.to_string(), "all");
    }

    #[test]
    fn test_source_parse_roundtrip() {
        for source in [Source::Today, Source::Inbox, Source::All] {
            assert_eq!(source.as_str().parse::<Source>().unwrap(), source);
        }
    }

    #[test]
    fn test_source_parse_case_insensitive() {
        assert_eq!("Today".parse::<Source>().unwrap(), Source::Today);
        assert_eq!("INBOX".parse::<Source>().unwrap(), Source::Inbox);
    }

    #[test]
    fn test_source_parse_unknown_fails() {
        assert!("tomorrow".parse::<Source>().is_err());
        assert!("".parse::<Source>().is_err());
    }

    #[test]
    fn test_source_serde_lowercase() {
        let json = serde_json::to_string(&Source::Inbox).unwrap();
        assert_eq!(json, r#""inbox""#);

        let parsed: Source = serde_json::from_str(r#""all""#).unwrap();
        assert_eq!(parsed, Source::All);
    }
}
