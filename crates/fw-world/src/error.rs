use crate::scene::SceneId;

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors that can occur when building or validating a scene graph.
///
/// These are programmer-facing faults: a malformed graph fails fast at
/// construction time. Rejected player commands are never errors.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The requested scene id does not exist in the graph.
    #[error("unknown scene: \"{0}\"")]
    UnknownScene(SceneId),

    /// A scene with the same id already exists.
    #[error("scene already exists: \"{0}\"")]
    DuplicateScene(SceneId),

    /// A scene references another scene that does not exist.
    #[error("scene \"{scene}\" references missing scene \"{target}\"")]
    DanglingReference {
        /// The scene holding the reference.
        scene: SceneId,
        /// The referenced scene id that could not be resolved.
        target: SceneId,
    },

    /// A generic validation error with a descriptive message.
    #[error("validation error: {0}")]
    Validation(String),
}
