pub mod check;
pub mod export;
pub mod play;

use std::path::Path;

use fw_world::SceneGraph;

/// Load a world file and validate it.
pub fn load_world(path: &Path) -> Result<SceneGraph, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let graph: SceneGraph =
        serde_json::from_str(&content).map_err(|e| format!("invalid world file: {e}"))?;
    graph.validate().map_err(|e| e.to_string())?;
    Ok(graph)
}
