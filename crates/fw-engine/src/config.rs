//! Session configuration.

use serde::{Deserialize, Serialize};

/// Immutable configuration supplied at session start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Health a fresh session starts with.
    pub starting_health: i32,
    /// Hunger a fresh session starts with.
    pub starting_hunger: i32,
    /// The session is lost once the day counter exceeds this.
    pub max_days: u32,
    /// Seed for the combat RNG.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_seed() -> u64 {
    42
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_health: 100,
            starting_hunger: 0,
            max_days: 365,
            seed: default_seed(),
        }
    }
}

impl Config {
    /// Set the starting health.
    pub fn with_starting_health(mut self, health: i32) -> Self {
        self.starting_health = health;
        self
    }

    /// Set the starting hunger.
    pub fn with_starting_hunger(mut self, hunger: i32) -> Self {
        self.starting_hunger = hunger;
        self
    }

    /// Set the day limit.
    pub fn with_max_days(mut self, days: u32) -> Self {
        self.max_days = days;
        self
    }

    /// Set the combat RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
