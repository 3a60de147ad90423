//! Need Vector
//!
//! The four bounded needs (hunger, hygiene, social, sleep) and the clamp rule
//! applied after every mutation. Higher is better: 100 is fully satisfied,
//! 0 is fatal.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::action::Action;

/// Lowest value a need can hold
pub const MIN_LEVEL: i32 = 0;
/// Highest value a need can hold
pub const MAX_LEVEL: i32 = 100;

/// Clamps a value into `[MIN_LEVEL, MAX_LEVEL]`.
pub fn clamp_level(value: i32) -> i32 {
    value.clamp(MIN_LEVEL, MAX_LEVEL)
}

/// One of the four tracked needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeedKind {
    Hunger,
    Hygiene,
    Social,
    Sleep,
}

impl NeedKind {
    /// All needs in delta-tuple order.
    pub const ALL: [NeedKind; 4] = [
        NeedKind::Hunger,
        NeedKind::Hygiene,
        NeedKind::Social,
        NeedKind::Sleep,
    ];

    /// The interaction whose primary effect restores this need.
    pub fn relieved_by(self) -> Action {
        match self {
            NeedKind::Hunger => Action::Feed,
            NeedKind::Hygiene => Action::Clean,
            NeedKind::Social => Action::Play,
            NeedKind::Sleep => Action::Sleep,
        }
    }
}

/// A change to apply to all four needs at once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NeedDelta {
    pub hunger: i32,
    pub hygiene: i32,
    pub social: i32,
    pub sleep: i32,
}

impl NeedDelta {
    pub const ZERO: NeedDelta = NeedDelta::new(0, 0, 0, 0);

    pub const fn new(hunger: i32, hygiene: i32, social: i32, sleep: i32) -> Self {
        Self {
            hunger,
            hygiene,
            social,
            sleep,
        }
    }

    /// Same delta on every need.
    pub const fn uniform(amount: i32) -> Self {
        Self::new(amount, amount, amount, amount)
    }

    pub fn get(&self, kind: NeedKind) -> i32 {
        match kind {
            NeedKind::Hunger => self.hunger,
            NeedKind::Hygiene => self.hygiene,
            NeedKind::Social => self.social,
            NeedKind::Sleep => self.sleep,
        }
    }
}

/// Immutable snapshot of the four need levels handed to collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct HealthStatus {
    pub hunger: i32,
    pub hygiene: i32,
    pub social: i32,
    pub sleep: i32,
}

impl HealthStatus {
    pub fn get(&self, kind: NeedKind) -> i32 {
        match kind {
            NeedKind::Hunger => self.hunger,
            NeedKind::Hygiene => self.hygiene,
            NeedKind::Social => self.social,
            NeedKind::Sleep => self.sleep,
        }
    }

    /// Levels in delta-tuple order.
    pub fn as_array(&self) -> [i32; 4] {
        [self.hunger, self.hygiene, self.social, self.sleep]
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HealthStatus{{hunger={}, hygiene={}, social={}, sleep={}}}",
            self.hunger, self.hygiene, self.social, self.sleep
        )
    }
}

/// The mutable need state owned by a pet.
///
/// Every component stays within `[MIN_LEVEL, MAX_LEVEL]`; the only way to
/// change a level after construction is [`NeedVector::adjust`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NeedVector {
    hunger: i32,
    hygiene: i32,
    social: i32,
    sleep: i32,
}

impl NeedVector {
    /// All four needs at the same level (clamped).
    pub fn uniform(level: i32) -> Self {
        let level = clamp_level(level);
        Self {
            hunger: level,
            hygiene: level,
            social: level,
            sleep: level,
        }
    }

    /// Adds each component of `delta`, then clamps each result independently.
    pub fn adjust(&mut self, delta: NeedDelta) {
        self.hunger = clamp_level(self.hunger.saturating_add(delta.hunger));
        self.hygiene = clamp_level(self.hygiene.saturating_add(delta.hygiene));
        self.social = clamp_level(self.social.saturating_add(delta.social));
        self.sleep = clamp_level(self.sleep.saturating_add(delta.sleep));
    }

    pub fn snapshot(&self) -> HealthStatus {
        HealthStatus {
            hunger: self.hunger,
            hygiene: self.hygiene,
            social: self.social,
            sleep: self.sleep,
        }
    }

    pub fn level(&self, kind: NeedKind) -> i32 {
        match kind {
            NeedKind::Hunger => self.hunger,
            NeedKind::Hygiene => self.hygiene,
            NeedKind::Social => self.social,
            NeedKind::Sleep => self.sleep,
        }
    }

    /// Smallest of the four levels.
    pub fn min_level(&self) -> i32 {
        self.hunger.min(self.hygiene).min(self.social).min(self.sleep)
    }

    /// True if at least one need is at or below `threshold`.
    pub fn any_at_or_below(&self, threshold: i32) -> bool {
        self.min_level() <= threshold
    }

    /// True if at least one need has hit zero.
    pub fn any_depleted(&self) -> bool {
        self.min_level() == MIN_LEVEL
    }

    /// Needs at or below `threshold`, in delta-tuple order.
    pub fn low_needs(&self, threshold: i32) -> impl Iterator<Item = NeedKind> + '_ {
        NeedKind::ALL
            .into_iter()
            .filter(move |kind| self.level(*kind) <= threshold)
    }
}
