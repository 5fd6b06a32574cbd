use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use serde::{Deserialize, Serialize};

use fw_engine::{Config, GameState, Session};
use fw_world::{SceneGraph, SceneId, sample::sample_world};

/// Everything a session needs to pick up where it left off. The graph is
/// part of it: taken items and solved puzzles live on the graph, not the
/// state, so restoring the state against a pristine world would hand them
/// back out.
#[derive(Serialize, Deserialize)]
struct Snapshot {
    graph: SceneGraph,
    state: GameState,
    #[serde(default)]
    images: HashMap<SceneId, String>,
}

/// Run an interactive play session over stdin. EOF or `quit` ends the loop;
/// the engine itself has no quit verb.
pub fn run(world: Option<&Path>, save: Option<&Path>, config: Config) -> Result<(), String> {
    let mut session = match restore_snapshot(save)? {
        Some(snapshot) => {
            Session::resume(snapshot.graph, snapshot.state, snapshot.images, config)
                .map_err(|e| format!("cannot resume session: {e}"))?
        }
        None => {
            let graph = match world {
                Some(path) => super::load_world(path)?,
                None => sample_world(),
            };
            Session::new(graph, config).map_err(|e| format!("cannot start session: {e}"))?
        }
    };

    println!("{}", session.describe());
    print_suggestions(&session);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| format!("cannot read input: {e}"))?;
        if line.trim() == "quit" {
            break;
        }

        // Hand the line over untouched: the interpreter's argument matching
        // is deliberately literal.
        let narration = session.process(&line);
        println!();
        println!("{narration}");
        print_suggestions(&session);

        if let Some(path) = save {
            write_snapshot(path, &session)?;
        }
    }

    io::stdout().flush().ok();
    Ok(())
}

fn restore_snapshot(save: Option<&Path>) -> Result<Option<Snapshot>, String> {
    let Some(path) = save else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read snapshot {}: {e}", path.display()))?;
    let snapshot: Snapshot =
        serde_json::from_str(&content).map_err(|e| format!("invalid snapshot: {e}"))?;
    Ok(Some(snapshot))
}

fn write_snapshot(path: &Path, session: &Session) -> Result<(), String> {
    let snapshot = Snapshot {
        graph: session.graph().clone(),
        state: session.state().clone(),
        images: session.images().clone(),
    };
    let content = serde_json::to_string_pretty(&snapshot)
        .map_err(|e| format!("cannot serialize snapshot: {e}"))?;
    std::fs::write(path, content)
        .map_err(|e| format!("cannot write snapshot {}: {e}", path.display()))
}

fn print_suggestions(session: &Session) {
    let suggestions = session.suggestions();
    if suggestions.is_empty() {
        return;
    }
    println!();
    println!(
        "{} {}",
        "Available Commands:".bold(),
        suggestions.join(", ").dimmed()
    );
}
