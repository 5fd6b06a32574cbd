//! Scene graph data model for Fernweh.
//!
//! A world is a directed graph of scenes keyed by string ids. Scenes carry
//! description text, an image prompt, connections to other scenes, items,
//! enemies, and item-gated puzzles. The graph is built once, validated, and
//! then only mutated by the engine as items are taken, enemies defeated, and
//! puzzles solved.

/// Error types for world construction and validation.
pub mod error;
/// The scene graph container.
pub mod graph;
/// Built-in sample world.
pub mod sample;
/// Scene and puzzle records.
pub mod scene;

pub use error::{WorldError, WorldResult};
pub use graph::SceneGraph;
pub use scene::{Puzzle, Scene, SceneId};
