//! Mood Model
//!
//! Binary mood derived from need thresholds. The mood selects which decay
//! magnitudes a personality applies on the next tick.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::needs::NeedVector;

/// The pet's emotional state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mood {
    /// No need is critically low; needs decay at the gentle rate
    #[default]
    #[serde(rename = "HAPPY")]
    Content,
    /// At least one need is critically low; needs decay faster
    #[serde(rename = "SAD")]
    Distressed,
}

impl Mood {
    /// Derives the mood from current needs.
    ///
    /// Distressed iff any need is at or below `threshold`.
    pub fn recompute(needs: &NeedVector, threshold: i32) -> Mood {
        if needs.any_at_or_below(threshold) {
            Mood::Distressed
        } else {
            Mood::Content
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Mood::Content => "HAPPY",
            Mood::Distressed => "SAD",
        }
    }

    pub fn is_distressed(self) -> bool {
        self == Mood::Distressed
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Mood {
    type Err = ParseError;

    /// Accepts both the display names and the variant names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "happy" | "content" => Ok(Mood::Content),
            "sad" | "distressed" => Ok(Mood::Distressed),
            _ => Err(ParseError::UnknownMood(s.to_string())),
        }
    }
}
