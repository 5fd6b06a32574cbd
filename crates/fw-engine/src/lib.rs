//! Turn-based adventure engine for Fernweh.
//!
//! The engine drives one player through a [`fw_world::SceneGraph`]: a
//! command interpreter classifies raw input, action handlers mutate the
//! game state, and the turn engine applies hunger attrition and win/loss
//! checks after every command. Everything is synchronous and owned by a
//! single [`Session`]; the only outward-facing seam is the
//! [`MediaGenerator`] trait for best-effort scene images and the victory
//! song.

/// Action handlers: move, take, use, fight, restart.
pub mod actions;
/// Command classification for raw player input.
pub mod command;
/// Session configuration.
pub mod config;
/// Error types for the engine.
pub mod error;
/// Collaborator traits for image and audio generation.
pub mod media;
/// Narration text for status blocks and action results.
pub mod narrator;
/// Top-level session controller.
pub mod session;
/// The mutable per-session game state.
pub mod state;
/// Attrition and termination checks.
pub mod turn;

pub use command::Command;
pub use config::Config;
pub use error::{EngineError, EngineResult};
pub use media::{MediaGenerator, NullGenerator, SongRequest};
pub use session::Session;
pub use state::GameState;
pub use turn::Ending;
