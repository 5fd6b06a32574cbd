//! Collaborator traits for image and audio generation.
//!
//! The engine is synchronous; generation happens elsewhere. An adapter may
//! spawn threads or an async runtime behind this trait, buffer completed
//! results, and hand them over when polled. A slow or failed generation
//! must never block or fail a turn, so every method is infallible and
//! results are optional.

use fw_world::SceneId;

/// A request for the victory song.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongRequest {
    /// Text prompt describing the piece.
    pub prompt: String,
    /// Title for the piece.
    pub title: String,
    /// Style tags.
    pub tags: Vec<String>,
    /// Whether the piece should have no vocals.
    pub instrumental: bool,
}

/// External generator for scene images and the victory song.
pub trait MediaGenerator {
    /// Request an image for a scene, fire and forget. Called once per scene
    /// when a session starts.
    fn request_image(&mut self, scene: &SceneId, prompt: &str);

    /// Drain any completed image results as `(scene, reference)` pairs.
    /// Polled opportunistically after each turn.
    fn poll_images(&mut self) -> Vec<(SceneId, String)>;

    /// Compose a song, returning an opaque reference if one is available.
    /// Consulted only at the winning transition; `None` is tolerated.
    fn compose_song(&mut self, request: &SongRequest) -> Option<String>;
}

/// A generator that produces nothing. The default for sessions without an
/// external collaborator.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullGenerator;

impl MediaGenerator for NullGenerator {
    fn request_image(&mut self, _scene: &SceneId, _prompt: &str) {}

    fn poll_images(&mut self) -> Vec<(SceneId, String)> {
        Vec::new()
    }

    fn compose_song(&mut self, _request: &SongRequest) -> Option<String> {
        None
    }
}
