//! The scene graph container.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{WorldError, WorldResult};
use crate::scene::{Scene, SceneId};

/// A directed graph of scenes, with a start scene and a goal scene.
///
/// The graph is constructed once per session and then only mutated through
/// the engine's action handlers (items taken, enemies defeated, puzzles
/// solved). It is never replaced mid-session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneGraph {
    /// The scene the player starts in, and returns to on restart.
    pub start: SceneId,
    /// The scene that ends the session with a win when entered.
    pub goal: SceneId,
    scenes: HashMap<SceneId, Scene>,
}

impl SceneGraph {
    /// Create an empty graph with the given start and goal scene ids.
    pub fn new(start: impl Into<SceneId>, goal: impl Into<SceneId>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            scenes: HashMap::new(),
        }
    }

    /// Add a scene under `id`.
    pub fn insert(&mut self, id: impl Into<SceneId>, scene: Scene) -> WorldResult<()> {
        let id = id.into();
        if self.scenes.contains_key(&id) {
            return Err(WorldError::DuplicateScene(id));
        }
        self.scenes.insert(id, scene);
        Ok(())
    }

    /// Whether a scene with this id exists.
    pub fn contains(&self, id: &SceneId) -> bool {
        self.scenes.contains_key(id)
    }

    /// Look up a scene by id.
    pub fn scene(&self, id: &SceneId) -> WorldResult<&Scene> {
        self.scenes
            .get(id)
            .ok_or_else(|| WorldError::UnknownScene(id.clone()))
    }

    /// Look up a scene by id for mutation.
    pub fn scene_mut(&mut self, id: &SceneId) -> WorldResult<&mut Scene> {
        self.scenes
            .get_mut(id)
            .ok_or_else(|| WorldError::UnknownScene(id.clone()))
    }

    /// Iterate over all `(id, scene)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&SceneId, &Scene)> {
        self.scenes.iter()
    }

    /// Number of scenes in the graph.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Whether the graph has no scenes.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Check every scene reference in the graph.
    ///
    /// The start scene, goal scene, every connection, and every puzzle
    /// reward must name an existing scene. Dangling references fail here,
    /// at load time, rather than mid-turn.
    pub fn validate(&self) -> WorldResult<()> {
        if self.is_empty() {
            return Err(WorldError::Validation("graph has no scenes".to_string()));
        }
        if !self.contains(&self.start) {
            return Err(WorldError::UnknownScene(self.start.clone()));
        }
        if !self.contains(&self.goal) {
            return Err(WorldError::UnknownScene(self.goal.clone()));
        }
        for (id, scene) in &self.scenes {
            for target in &scene.connected {
                if !self.contains(target) {
                    return Err(WorldError::DanglingReference {
                        scene: id.clone(),
                        target: target.clone(),
                    });
                }
            }
            for puzzle in scene.puzzles.values() {
                if !self.contains(&puzzle.reward_scene) {
                    return Err(WorldError::DanglingReference {
                        scene: id.clone(),
                        target: puzzle.reward_scene.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Puzzle;

    fn two_scene_graph() -> SceneGraph {
        let mut graph = SceneGraph::new("a", "b");
        graph
            .insert("a", Scene::new("Scene A.", "").with_connections(["b"]))
            .unwrap();
        graph
            .insert("b", Scene::new("Scene B.", "").with_connections(["a"]))
            .unwrap();
        graph
    }

    #[test]
    fn insert_and_lookup() {
        let graph = two_scene_graph();
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.scene(&"a".into()).unwrap().description, "Scene A.");
        assert!(matches!(
            graph.scene(&"missing".into()),
            Err(WorldError::UnknownScene(_))
        ));
    }

    #[test]
    fn duplicate_insert_rejected() {
        let mut graph = two_scene_graph();
        assert!(matches!(
            graph.insert("a", Scene::default()),
            Err(WorldError::DuplicateScene(_))
        ));
    }

    #[test]
    fn validate_accepts_well_formed_graph() {
        assert!(two_scene_graph().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_graph() {
        let graph = SceneGraph::new("a", "a");
        assert!(matches!(
            graph.validate(),
            Err(WorldError::Validation(_))
        ));
    }

    #[test]
    fn validate_rejects_missing_start_or_goal() {
        let mut graph = SceneGraph::new("a", "nowhere");
        graph.insert("a", Scene::default()).unwrap();
        assert!(matches!(
            graph.validate(),
            Err(WorldError::UnknownScene(_))
        ));
    }

    #[test]
    fn validate_rejects_dangling_connection() {
        let mut graph = SceneGraph::new("a", "a");
        graph
            .insert("a", Scene::new("", "").with_connections(["nowhere"]))
            .unwrap();
        match graph.validate() {
            Err(WorldError::DanglingReference { scene, target }) => {
                assert_eq!(scene.as_str(), "a");
                assert_eq!(target.as_str(), "nowhere");
            }
            other => panic!("expected dangling reference, got {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_dangling_puzzle_reward() {
        let mut graph = SceneGraph::new("a", "a");
        graph
            .insert(
                "a",
                Scene::new("", "").with_puzzle("gate", Puzzle::new("", "key", "nowhere")),
            )
            .unwrap();
        assert!(matches!(
            graph.validate(),
            Err(WorldError::DanglingReference { .. })
        ));
    }

    #[test]
    fn graph_serde_round_trip() {
        let graph = two_scene_graph();
        let json = serde_json::to_string(&graph).unwrap();
        let back: SceneGraph = serde_json::from_str(&json).unwrap();
        assert_eq!(back.start.as_str(), "a");
        assert_eq!(back.len(), 2);
        assert!(back.validate().is_ok());
    }
}
