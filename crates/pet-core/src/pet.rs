//! Pet State Machine
//!
//! Owns a pet's needs, mood, personality, and life state. External drivers
//! issue commands (`start`, `tick`, `interact`) and read back state through
//! side-effect-free queries.
//!
//! ```text
//! Uninitialized ──start──▶ Alive ──(any need hits 0)──▶ Dead
//!                            │ ▲
//!                            └─┘ tick / interact
//! ```
//!
//! Dead is terminal: commands are ignored and queries return the frozen state.
//! Only another `start` brings a fresh pet.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::config::PetConfig;
use crate::mood::Mood;
use crate::needs::{HealthStatus, NeedDelta, NeedKind, NeedVector};
use crate::personality::Personality;

/// Lifecycle state of a pet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeState {
    /// Created but not yet started
    #[default]
    Uninitialized,
    Alive,
    /// Terminal; reached when any need hits zero
    Dead,
}

/// Serializable view of everything a collaborator can query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetSnapshot {
    pub state: LifeState,
    pub personality: Option<Personality>,
    pub mood: Mood,
    pub health: HealthStatus,
    pub age: u64,
    /// Needs currently at or below the attention threshold
    pub needs_attention: Vec<NeedKind>,
}

/// A single simulated pet.
///
/// Not internally synchronized. Callers driving it from several threads must
/// serialize access themselves.
#[derive(Debug, Clone)]
pub struct Pet {
    needs: NeedVector,
    mood: Mood,
    personality: Option<Personality>,
    state: LifeState,
    /// Ticks applied while alive since the last start
    age: u64,
    config: PetConfig,
    rng: SmallRng,
}

impl Default for Pet {
    fn default() -> Self {
        Self::new()
    }
}

impl Pet {
    /// Creates an uninitialized pet with default tuning and an entropy-seeded RNG.
    ///
    /// Runs are non-deterministic; use [`Pet::with_seed`] for reproducible ones.
    pub fn new() -> Self {
        Self::with_config(PetConfig::default(), SmallRng::from_entropy())
    }

    /// Creates an uninitialized pet whose randomness is fixed by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(PetConfig::default(), SmallRng::seed_from_u64(seed))
    }

    /// Creates an uninitialized pet with explicit tuning and random source.
    pub fn with_config(config: PetConfig, rng: SmallRng) -> Self {
        Self {
            needs: NeedVector::default(),
            mood: Mood::Content,
            personality: None,
            state: LifeState::Uninitialized,
            age: 0,
            config,
            rng,
        }
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Starts (or fully restarts) the pet with a randomly drawn personality.
    pub fn start(&mut self) {
        let personality = Personality::random(&mut self.rng);
        self.reset(personality);
    }

    /// Starts (or fully restarts) the pet with a fixed personality.
    pub fn start_with(&mut self, personality: Personality) {
        self.reset(personality);
    }

    fn reset(&mut self, personality: Personality) {
        self.needs = NeedVector::uniform(self.config.initial_level);
        self.mood = Mood::Content;
        self.personality = Some(personality);
        self.state = LifeState::Alive;
        self.age = 0;
        tracing::info!(
            "Pet started: personality {}, needs at {}",
            personality,
            self.config.initial_level
        );
    }

    /// Advances the simulation by one tick. Ignored unless the pet is alive.
    pub fn tick(&mut self) {
        let Some(personality) = self.active_personality("tick") else {
            return;
        };
        let delta =
            personality.tick_delta(self.mood, &mut self.rng, self.config.smart_relief_chance);
        self.age += 1;
        tracing::trace!(age = self.age, ?delta, "tick");
        self.apply(delta);
    }

    /// Applies a player interaction. Ignored unless the pet is alive.
    pub fn interact(&mut self, action: Action) {
        let Some(personality) = self.active_personality("interact") else {
            return;
        };
        let delta = personality.interact_delta(self.mood, action);
        tracing::trace!(%action, ?delta, "interact");
        self.apply(delta);
    }

    /// Overrides the current mood. The next tick or interaction recomputes it.
    pub fn force_mood(&mut self, mood: Mood) {
        if self.active_personality("force_mood").is_some() {
            tracing::debug!("Mood forced to {}", mood);
            self.mood = mood;
        }
    }

    /// Replaces the personality of a living pet.
    pub fn force_personality(&mut self, personality: Personality) {
        if self.active_personality("force_personality").is_some() {
            tracing::debug!("Personality forced to {}", personality);
            self.personality = Some(personality);
        }
    }

    /// Personality to act with, or `None` if the command must be ignored.
    fn active_personality(&self, command: &str) -> Option<Personality> {
        match (self.state, self.personality) {
            (LifeState::Alive, Some(personality)) => Some(personality),
            (state, _) => {
                tracing::debug!("Ignoring {} on {:?} pet", command, state);
                None
            }
        }
    }

    /// Applies a delta, then settles liveness and mood.
    fn apply(&mut self, delta: NeedDelta) {
        self.needs.adjust(delta);

        if self.needs.any_depleted() {
            self.state = LifeState::Dead;
            tracing::info!(
                "Pet died of neglect after {} ticks: {}",
                self.age,
                self.needs.snapshot()
            );
        }

        let mood = Mood::recompute(&self.needs, self.config.distress_threshold);
        if mood != self.mood {
            tracing::debug!("Mood changed {} -> {}", self.mood, mood);
        }
        self.mood = mood;
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn health(&self) -> HealthStatus {
        self.needs.snapshot()
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    /// `None` until the pet has been started.
    pub fn personality(&self) -> Option<Personality> {
        self.personality
    }

    pub fn is_alive(&self) -> bool {
        self.state == LifeState::Alive
    }

    pub fn life_state(&self) -> LifeState {
        self.state
    }

    /// Ticks survived since the last start.
    pub fn age(&self) -> u64 {
        self.age
    }

    pub fn config(&self) -> &PetConfig {
        &self.config
    }

    /// True if `kind` is at or below the attention threshold.
    pub fn needs_attention(&self, kind: NeedKind) -> bool {
        self.needs.level(kind) <= self.config.attention_threshold
    }

    pub fn needs_feed(&self) -> bool {
        self.needs_attention(NeedKind::Hunger)
    }

    pub fn needs_shower(&self) -> bool {
        self.needs_attention(NeedKind::Hygiene)
    }

    pub fn needs_play(&self) -> bool {
        self.needs_attention(NeedKind::Social)
    }

    pub fn needs_sleep(&self) -> bool {
        self.needs_attention(NeedKind::Sleep)
    }

    /// Needs flagged for attention, in hunger, hygiene, social, sleep order.
    pub fn attention_list(&self) -> Vec<NeedKind> {
        self.needs
            .low_needs(self.config.attention_threshold)
            .collect()
    }

    pub fn snapshot(&self) -> PetSnapshot {
        PetSnapshot {
            state: self.state,
            personality: self.personality,
            mood: self.mood,
            health: self.health(),
            age: self.age,
            needs_attention: self.attention_list(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(personality: Personality) -> Pet {
        let mut pet = Pet::with_seed(7);
        pet.start_with(personality);
        pet
    }

    fn health(hunger: i32, hygiene: i32, social: i32, sleep: i32) -> HealthStatus {
        HealthStatus {
            hunger,
            hygiene,
            social,
            sleep,
        }
    }

    /// Drives a pet to the given uniform level without changing its mood.
    fn lower_to(pet: &mut Pet, level: i32) {
        pet.needs.adjust(NeedDelta::uniform(level - pet.config.initial_level));
    }

    #[test]
    fn test_new_pet_is_uninitialized() {
        let pet = Pet::with_seed(1);

        assert_eq!(pet.life_state(), LifeState::Uninitialized);
        assert!(!pet.is_alive());
        assert_eq!(pet.personality(), None);
        assert_eq!(pet.mood(), Mood::Content);
        assert_eq!(pet.health(), health(0, 0, 0, 0));
    }

    #[test]
    fn test_commands_before_start_are_ignored() {
        let mut pet = Pet::with_seed(1);
        pet.tick();
        pet.interact(Action::Feed);
        pet.force_mood(Mood::Distressed);

        assert_eq!(pet.life_state(), LifeState::Uninitialized);
        assert_eq!(pet.health(), health(0, 0, 0, 0));
        assert_eq!(pet.mood(), Mood::Content);
        assert_eq!(pet.age(), 0);
    }

    #[test]
    fn test_start_initializes_state() {
        let mut pet = Pet::with_seed(1);
        pet.start();

        assert_eq!(pet.health(), health(50, 50, 50, 50));
        assert_eq!(pet.mood(), Mood::Content);
        assert!(pet.is_alive());
        assert!(pet.personality().is_some());
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut pet = started(Personality::Aloof);
        for _ in 0..10 {
            pet.tick();
        }
        pet.interact(Action::Feed);
        pet.start_with(Personality::Needy);

        assert_eq!(pet.health(), health(50, 50, 50, 50));
        assert_eq!(pet.personality(), Some(Personality::Needy));
        assert_eq!(pet.age(), 0);
    }

    #[test]
    fn test_glutton_tick_happy_then_sad() {
        let mut pet = started(Personality::Glutton);

        pet.tick();
        assert_eq!(pet.health(), health(46, 48, 48, 48));

        pet.force_mood(Mood::Distressed);
        pet.tick();
        assert_eq!(pet.health(), health(40, 45, 45, 45));
        // Recomputed from needs, which are all comfortably high
        assert_eq!(pet.mood(), Mood::Content);
    }

    #[test]
    fn test_lazy_tick_happy_then_sad() {
        let mut pet = started(Personality::Lazy);

        pet.tick();
        assert_eq!(pet.health(), health(48, 48, 49, 47));

        pet.force_mood(Mood::Distressed);
        pet.tick();
        assert_eq!(pet.health(), health(45, 45, 48, 43));
    }

    #[test]
    fn test_glutton_interaction_sequence() {
        let mut pet = started(Personality::Glutton);
        lower_to(&mut pet, 30);

        pet.interact(Action::Feed);
        assert_eq!(pet.health(), health(90, 28, 28, 28));
        pet.interact(Action::Play);
        assert_eq!(pet.health(), health(88, 26, 68, 26));
        pet.interact(Action::Clean);
        assert_eq!(pet.health(), health(86, 66, 66, 24));
        pet.interact(Action::Sleep);
        assert_eq!(pet.health(), health(84, 64, 64, 64));
    }

    #[test]
    fn test_lazy_sleep_clamps_at_max() {
        let mut pet = started(Personality::Lazy);
        lower_to(&mut pet, 30);

        pet.interact(Action::Sleep);
        assert_eq!(pet.health(), health(28, 28, 28, 100));
    }

    #[test]
    fn test_mood_follows_needs_after_interaction() {
        let mut pet = started(Personality::Aloof);
        lower_to(&mut pet, 22);

        pet.interact(Action::Feed);
        // Side costs drop hygiene, social, sleep to 20
        assert_eq!(pet.mood(), Mood::Distressed);
        assert!(pet.needs_shower());
        assert!(pet.needs_play());
        assert!(pet.needs_sleep());
        assert!(!pet.needs_feed());
    }

    #[test]
    fn test_death_is_terminal() {
        let mut pet = started(Personality::Aloof);
        lower_to(&mut pet, 2);

        pet.tick();
        assert!(!pet.is_alive());
        assert_eq!(pet.life_state(), LifeState::Dead);
        assert_eq!(pet.mood(), Mood::Distressed);

        let frozen = pet.health();
        let age = pet.age();
        pet.tick();
        pet.interact(Action::Feed);
        pet.interact(Action::Sleep);
        pet.force_mood(Mood::Content);
        pet.force_personality(Personality::Smart);

        assert!(!pet.is_alive());
        assert_eq!(pet.health(), frozen);
        assert_eq!(pet.age(), age);
        assert_eq!(pet.mood(), Mood::Distressed);
        assert_eq!(pet.personality(), Some(Personality::Aloof));
    }

    #[test]
    fn test_interaction_side_cost_can_kill() {
        let mut pet = started(Personality::Smart);
        lower_to(&mut pet, 2);

        pet.interact(Action::Feed);
        assert!(!pet.is_alive());
        assert_eq!(pet.health(), health(42, 0, 0, 0));
    }

    #[test]
    fn test_low_but_nonzero_needs_keep_pet_alive() {
        let mut pet = started(Personality::Aloof);
        lower_to(&mut pet, 3);

        pet.force_mood(Mood::Content);
        pet.tick();
        assert_eq!(pet.health(), health(1, 1, 1, 1));
        assert!(pet.is_alive());
    }

    #[test]
    fn test_force_personality_changes_behavior() {
        let mut pet = started(Personality::Aloof);
        pet.force_personality(Personality::Mysophobia);
        pet.tick();

        assert_eq!(pet.personality(), Some(Personality::Mysophobia));
        assert_eq!(pet.health(), health(48, 46, 48, 48));
    }

    #[test]
    fn test_separate_thresholds() {
        let config = PetConfig {
            distress_threshold: 10,
            attention_threshold: 30,
            ..PetConfig::default()
        };
        let mut pet = Pet::with_config(config, SmallRng::seed_from_u64(3));
        pet.start_with(Personality::Aloof);
        lower_to(&mut pet, 27);

        pet.tick();
        assert_eq!(pet.health(), health(25, 25, 25, 25));
        assert_eq!(pet.mood(), Mood::Content);
        assert!(pet.needs_feed());
        assert_eq!(pet.attention_list().len(), 4);
    }

    #[test]
    fn test_snapshot_reflects_queries() {
        let mut pet = started(Personality::Needy);
        lower_to(&mut pet, 24);
        pet.tick();

        let snapshot = pet.snapshot();
        assert_eq!(snapshot.state, LifeState::Alive);
        assert_eq!(snapshot.personality, Some(Personality::Needy));
        assert_eq!(snapshot.health, health(22, 22, 20, 22));
        assert_eq!(snapshot.mood, Mood::Distressed);
        assert_eq!(snapshot.age, 1);
        assert_eq!(snapshot.needs_attention, vec![NeedKind::Social]);
    }
}
