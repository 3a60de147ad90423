//! Interactions a player can perform on the pet.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// A discrete user-initiated interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    /// Restores hunger
    Feed,
    /// Restores social
    Play,
    /// Restores hygiene
    Clean,
    /// Restores sleep
    Sleep,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Feed, Action::Play, Action::Clean, Action::Sleep];

    pub fn display_name(self) -> &'static str {
        match self {
            Action::Feed => "FEED",
            Action::Play => "PLAY",
            Action::Clean => "CLEAN",
            Action::Sleep => "SLEEP",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Action {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.display_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownAction(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("feed".parse::<Action>(), Ok(Action::Feed));
        assert_eq!("Clean".parse::<Action>(), Ok(Action::Clean));
        assert_eq!(" SLEEP ".parse::<Action>(), Ok(Action::Sleep));
    }

    #[test]
    fn test_parse_unknown_action() {
        assert_eq!(
            "dance".parse::<Action>(),
            Err(ParseError::UnknownAction("dance".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&Action::Play).unwrap();
        assert_eq!(json, "\"PLAY\"");
        let back: Action = serde_json::from_str("\"FEED\"").unwrap();
        assert_eq!(back, Action::Feed);
    }
}
