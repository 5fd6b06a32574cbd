use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

/// Validate a world file and print a scene summary.
pub fn run(world: &Path) -> Result<(), String> {
    let graph = super::load_world(world)?;

    let mut scenes: Vec<_> = graph.iter().collect();
    scenes.sort_by(|a, b| a.0.cmp(b.0));

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Scene", "Paths", "Items", "Enemies", "Puzzles"]);

    for (id, scene) in &scenes {
        let paths: Vec<&str> = scene.connected.iter().map(|s| s.as_str()).collect();
        table.add_row(vec![
            id.as_str().to_string(),
            paths.join(", "),
            scene.items.join(", "),
            scene.enemies.join(", "),
            scene.puzzles.keys().cloned().collect::<Vec<_>>().join(", "),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} {} scenes, start \"{}\", goal \"{}\"",
        "All checks passed.".green(),
        graph.len(),
        graph.start,
        graph.goal
    );

    Ok(())
}
