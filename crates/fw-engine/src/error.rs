//! Error types for the engine.

use fw_world::{SceneId, WorldError};

/// Alias for `Result<T, EngineError>`.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur when setting up or resuming a session.
///
/// Nothing the player types produces an error: rejected commands are
/// answered with narration text. Errors here mean the host supplied a
/// malformed scene graph or an inconsistent snapshot.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The scene graph failed validation.
    #[error(transparent)]
    World(#[from] WorldError),

    /// A resumed game state points at a scene missing from the graph.
    #[error("resumed state references missing scene \"{0}\"")]
    StaleSnapshot(SceneId),
}
