use std::path::Path;

use fw_world::sample::sample_world;

/// Write the built-in sample world as JSON, for use as seed material for
/// custom worlds.
pub fn run(output: Option<&Path>) -> Result<(), String> {
    let graph = sample_world();
    let content = serde_json::to_string_pretty(&graph)
        .map_err(|e| format!("JSON serialization error: {e}"))?;

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported sample world to {}", path.display());
    } else {
        println!("{content}");
    }

    Ok(())
}
