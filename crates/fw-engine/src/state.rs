//! The mutable per-session game state.

use serde::{Deserialize, Serialize};

use fw_world::SceneId;

use crate::config::Config;

/// Everything that changes over the course of one session.
///
/// The state is a plain value: handlers take it by `&mut`, and the host can
/// serialize it after any turn and re-supply it verbatim to resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// The scene the player is currently in.
    pub current_scene: SceneId,
    /// Held items in pickup order. Duplicates are permitted.
    pub inventory: Vec<String>,
    /// Current health. No floor: the value may go negative before the
    /// game-over check reads it.
    pub health: i32,
    /// Current hunger. Within `[0, 99]` after every completed turn.
    pub hunger: i32,
    /// Day counter, starting at 1. Incremented only on a successful move.
    pub day: u32,
    /// Whether the session has ended (win or loss).
    pub game_over: bool,
    /// Opaque reference to the victory song, set only on the winning
    /// transition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub victory_song: Option<String>,
}

impl GameState {
    /// A fresh state at the given start scene.
    pub fn fresh(config: &Config, start: SceneId) -> Self {
        Self {
            current_scene: start,
            inventory: Vec::new(),
            health: config.starting_health,
            hunger: config.starting_hunger,
            day: 1,
            game_over: false,
            victory_song: None,
        }
    }

    /// Whether the player holds at least one instance of `item`.
    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|i| i == item)
    }

    /// Append an item to the inventory. Duplicates are allowed; the model
    /// has no stacking.
    pub fn add_item(&mut self, item: impl Into<String>) {
        self.inventory.push(item.into());
    }

    /// Remove the first held instance of `item`. Returns whether one was
    /// removed.
    pub fn remove_item(&mut self, item: &str) -> bool {
        if let Some(pos) = self.inventory.iter().position(|i| i == item) {
            self.inventory.remove(pos);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_matches_config() {
        let config = Config::default().with_starting_health(80).with_starting_hunger(5);
        let state = GameState::fresh(&config, "start".into());
        assert_eq!(state.current_scene.as_str(), "start");
        assert!(state.inventory.is_empty());
        assert_eq!(state.health, 80);
        assert_eq!(state.hunger, 5);
        assert_eq!(state.day, 1);
        assert!(!state.game_over);
        assert!(state.victory_song.is_none());
    }

    #[test]
    fn inventory_allows_duplicates() {
        let mut state = GameState::fresh(&Config::default(), "start".into());
        state.add_item("coin");
        state.add_item("coin");
        assert_eq!(state.inventory.len(), 2);
        assert!(state.remove_item("coin"));
        assert_eq!(state.inventory.len(), 1);
        assert!(state.has_item("coin"));
    }

    #[test]
    fn remove_missing_item_is_false() {
        let mut state = GameState::fresh(&Config::default(), "start".into());
        assert!(!state.remove_item("coin"));
    }

    #[test]
    fn state_serde_round_trip() {
        let mut state = GameState::fresh(&Config::default(), "start".into());
        state.add_item("stick");
        state.day = 3;
        state.hunger = 20;
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
