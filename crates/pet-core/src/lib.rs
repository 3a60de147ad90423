//! Virtual pet simulation engine.
//!
//! A pet has four bounded needs (hunger, hygiene, social, sleep) that decay
//! every tick and respond to player interactions. How fast they decay and how
//! strongly they respond depends on the pet's personality and current mood.
//! A pet dies once any need reaches zero.
//!
//! # Architecture
//!
//! ```text
//! ┌────────┐  start / tick / interact   ┌─────┐  mood, action   ┌─────────────┐
//! │ driver │ ─────────────────────────▶ │ Pet │ ──────────────▶ │ Personality │
//! └────────┘ ◀───────────────────────── └─────┘ ◀────────────── └─────────────┘
//!               health, mood, flags        │        NeedDelta
//!                                          ▼
//!                                    NeedVector::adjust (clamped)
//! ```
//!
//! # Modules
//!
//! - [`needs`]: Need vector, deltas, and the clamp rule
//! - [`mood`]: Mood derivation from need thresholds
//! - [`personality`]: Per-personality decay and interaction tables
//! - [`action`]: Player interactions
//! - [`pet`]: The state machine tying it together
//! - [`config`]: TOML-loadable tuning values

pub mod action;
pub mod config;
pub mod error;
pub mod mood;
pub mod needs;
pub mod personality;
pub mod pet;

pub use action::Action;
pub use config::{PetConfig, DEFAULT_TUNING_PATH};
pub use error::{ConfigError, ParseError};
pub use mood::Mood;
pub use needs::{HealthStatus, NeedDelta, NeedKind, NeedVector, MAX_LEVEL, MIN_LEVEL};
pub use personality::{Personality, DEFAULT_SMART_RELIEF_CHANCE};
pub use pet::{LifeState, Pet, PetSnapshot};
