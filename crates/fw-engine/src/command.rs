//! Command classification for raw player input.

/// A classified player command.
///
/// Classification is strict verb-prefix matching on the lowercased input.
/// The argument is the literal remainder after the prefix: no trimming, no
/// synonyms, no partial-word matching. `"go  forest"` targets a scene named
/// `" forest"` and will not match `"forest"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move to a connected scene.
    Go(String),
    /// Pick up an item present in the scene.
    Take(String),
    /// Use a held item against a puzzle in the scene.
    Use(String),
    /// Fight the front enemy in the scene.
    Fight,
    /// Reset the session after a game over.
    Restart,
    /// Anything else. Performs no mutation, but still costs a turn.
    Unrecognized,
}

impl Command {
    /// Classify raw input into a command.
    pub fn parse(input: &str) -> Self {
        let input = input.to_lowercase();
        if input == "fight" {
            Self::Fight
        } else if input == "restart" {
            Self::Restart
        } else if let Some(target) = input.strip_prefix("go ") {
            Self::Go(target.to_string())
        } else if let Some(item) = input.strip_prefix("take ") {
            Self::Take(item.to_string())
        } else if let Some(item) = input.strip_prefix("use ") {
            Self::Use(item.to_string())
        } else {
            Self::Unrecognized
        }
    }
}
