//! Scene and puzzle records.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for a scene in the graph.
///
/// Scene ids are plain strings supplied by world data (`"forest_path"`),
/// compared literally against player input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneId(pub String);

impl SceneId {
    /// View the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SceneId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SceneId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A one-time, item-gated transition embedded in a scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    /// Player-facing description of the obstacle.
    pub description: String,
    /// The inventory item that solves the puzzle.
    pub required_item: String,
    /// The scene the player is moved to on solving.
    pub reward_scene: SceneId,
}

impl Puzzle {
    /// Create a puzzle requiring `item` and rewarding a move to `reward`.
    pub fn new(
        description: impl Into<String>,
        item: impl Into<String>,
        reward: impl Into<SceneId>,
    ) -> Self {
        Self {
            description: description.into(),
            required_item: item.into(),
            reward_scene: reward.into(),
        }
    }
}

/// A location node in the world graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Player-facing description text.
    pub description: String,
    /// Text prompt handed to the image-generation collaborator.
    #[serde(default)]
    pub image_prompt: String,
    /// Scenes reachable from here, in authored order. Duplicates are not
    /// prevented.
    #[serde(default)]
    pub connected: Vec<SceneId>,
    /// Items currently present. Shrinks as items are taken.
    #[serde(default)]
    pub items: Vec<String>,
    /// Enemies present, in authored order. The front enemy is removed on
    /// defeat.
    #[serde(default)]
    pub enemies: Vec<String>,
    /// Unsolved puzzles keyed by puzzle id. Entries are removed once solved.
    #[serde(default)]
    pub puzzles: BTreeMap<String, Puzzle>,
}

impl Scene {
    /// Create a scene with a description and image prompt.
    pub fn new(description: impl Into<String>, image_prompt: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            image_prompt: image_prompt.into(),
            ..Self::default()
        }
    }

    /// Add connections to other scenes.
    pub fn with_connections<I>(mut self, targets: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<SceneId>,
    {
        self.connected.extend(targets.into_iter().map(Into::into));
        self
    }

    /// Add items present in the scene.
    pub fn with_items<I>(mut self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.items.extend(items.into_iter().map(Into::into));
        self
    }

    /// Add enemies present in the scene.
    pub fn with_enemies<I>(mut self, enemies: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.enemies.extend(enemies.into_iter().map(Into::into));
        self
    }

    /// Add a puzzle under the given puzzle id.
    pub fn with_puzzle(mut self, id: impl Into<String>, puzzle: Puzzle) -> Self {
        self.puzzles.insert(id.into(), puzzle);
        self
    }

    /// Whether `target` is directly reachable from this scene.
    pub fn connects_to(&self, target: &SceneId) -> bool {
        self.connected.contains(target)
    }

    /// Remove a single instance of `item` from the scene. Returns whether
    /// the item was present.
    pub fn remove_item(&mut self, item: &str) -> bool {
        if let Some(pos) = self.items.iter().position(|i| i == item) {
            self.items.remove(pos);
            true
        } else {
            false
        }
    }

    /// Remove and return the front enemy, if any.
    pub fn defeat_front_enemy(&mut self) -> Option<String> {
        if self.enemies.is_empty() {
            None
        } else {
            Some(self.enemies.remove(0))
        }
    }
}
