//! Personality Strategy Set
//!
//! Seven fixed behavior policies. Each one decides how fast needs decay per
//! tick (depending on mood) and how strongly the pet responds to each
//! interaction. Policies are pure: they return a [`NeedDelta`] and never touch
//! pet state themselves.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::action::Action;
use crate::error::ParseError;
use crate::mood::Mood;
use crate::needs::NeedDelta;

/// Decay per tick for most personalities while content
const CONTENT_STEP: i32 = 2;
/// Decay per tick for most personalities while distressed
const DISTRESSED_STEP: i32 = 3;
/// Smart pets decay slower across the board
const SMART_CONTENT_STEP: i32 = 1;
const SMART_DISTRESSED_STEP: i32 = 2;

/// Every interaction costs a little of each need it doesn't target
const SIDE_COST: i32 = 2;
/// Restoration for the targeted need unless a personality overrides it
const STANDARD_GAIN: i32 = 40;

/// Default probability that a Smart pet resists decay on a given need
pub const DEFAULT_SMART_RELIEF_CHANCE: f64 = 0.2;

/// Pet personality - fixed for the pet's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Personality {
    /// Gets hungry twice as fast, loves food
    Glutton,
    /// Barely needs company, tires quickly, sleeps deeply
    Lazy,
    /// Burns through sleep, loves to play
    Energetic,
    /// Obsessed with cleanliness
    Mysophobia,
    /// Craves attention
    Needy,
    /// Emotionally distant, shrugs off play
    Aloof,
    /// Manages its needs efficiently, sometimes resists decay
    Smart,
}

impl Personality {
    /// All personalities in declaration order.
    pub const ALL: [Personality; 7] = [
        Personality::Glutton,
        Personality::Lazy,
        Personality::Energetic,
        Personality::Mysophobia,
        Personality::Needy,
        Personality::Aloof,
        Personality::Smart,
    ];

    /// Draws a personality uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Personality {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Personality::Glutton => "GLUTTON",
            Personality::Lazy => "LAZY",
            Personality::Energetic => "ENERGETIC",
            Personality::Mysophobia => "MYSOPHOBIA",
            Personality::Needy => "NEEDY",
            Personality::Aloof => "ALOOF",
            Personality::Smart => "SMART",
        }
    }

    /// Whether this personality's tick consumes randomness.
    pub fn is_stochastic(self) -> bool {
        self == Personality::Smart
    }

    /// Need decay for one tick.
    ///
    /// All components are non-positive. Only [`Personality::Smart`] draws from
    /// `rng`: four draws per tick, in hunger, hygiene, social, sleep order, each
    /// giving +1 relief with probability `relief_chance`.
    pub fn tick_delta<R: Rng + ?Sized>(
        self,
        mood: Mood,
        rng: &mut R,
        relief_chance: f64,
    ) -> NeedDelta {
        let step = match mood {
            Mood::Content => CONTENT_STEP,
            Mood::Distressed => DISTRESSED_STEP,
        };

        match self {
            // Hunger decays twice as fast
            Personality::Glutton => NeedDelta::new(-2 * step, -step, -step, -step),
            // Social barely moves; sleep goes one faster
            Personality::Lazy => NeedDelta::new(-step, -step, -1, -(step + 1)),
            Personality::Energetic => NeedDelta::new(-step, -step, -step, -(step + 1)),
            Personality::Mysophobia => NeedDelta::new(-step, -2 * step, -step, -step),
            Personality::Needy => NeedDelta::new(-step, -step, -2 * step, -step),
            Personality::Aloof => NeedDelta::uniform(-step),
            Personality::Smart => {
                let step = match mood {
                    Mood::Content => SMART_CONTENT_STEP,
                    Mood::Distressed => SMART_DISTRESSED_STEP,
                };
                let mut relief = || -> i32 {
                    if rng.gen::<f64>() < relief_chance {
                        1
                    } else {
                        0
                    }
                };
                let hunger = -step + relief();
                let hygiene = -step + relief();
                let social = -step + relief();
                let sleep = -step + relief();
                NeedDelta::new(hunger, hygiene, social, sleep)
            }
        }
    }

    /// Response to one interaction.
    ///
    /// `mood` is part of the signature so every policy can be called the same
    /// way; no current personality reacts differently when distressed.
    pub fn interact_delta(self, _mood: Mood, action: Action) -> NeedDelta {
        let gain = self.gain_for(action);
        let side = -SIDE_COST;

        match action {
            Action::Feed => NeedDelta::new(gain, side, side, side),
            Action::Play => NeedDelta::new(side, side, gain, side),
            Action::Clean => NeedDelta::new(side, gain, side, side),
            Action::Sleep => NeedDelta::new(side, side, side, gain),
        }
    }

    /// How much the targeted need is restored by `action`.
    pub fn gain_for(self, action: Action) -> i32 {
        match (self, action) {
            (Personality::Glutton, Action::Feed) => 60,
            (Personality::Lazy, Action::Play) => 20,
            (Personality::Lazy, Action::Sleep) => 80,
            (Personality::Energetic, Action::Play) => 60,
            (Personality::Mysophobia, Action::Clean) => 80,
            (Personality::Needy, Action::Play) => 70,
            (Personality::Aloof, Action::Play) => 30,
            _ => STANDARD_GAIN,
        }
    }
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Personality {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Personality::ALL
            .into_iter()
            .find(|p| p.display_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownPersonality(s.to_string()))
    }
}
