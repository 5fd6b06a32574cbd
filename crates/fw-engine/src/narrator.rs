//! Narration text for status blocks and action results.
//!
//! Every string the player sees is produced here, so the handlers and the
//! turn engine stay free of formatting concerns.

use fw_world::Scene;

use crate::state::GameState;
use crate::turn::Ending;

/// The standard status block appended to every turn's narration.
pub fn status(state: &GameState, scene: &Scene) -> String {
    let paths: Vec<&str> = scene.connected.iter().map(|s| s.as_str()).collect();
    let mut out = format!(
        "Day {}\nHealth: {}\nHunger: {}\nCurrent Scene: {}\nAvailable Paths: {}\nItems Here: {}\nEnemies Here: {}\nInventory: {}",
        state.day,
        state.health,
        state.hunger,
        scene.description,
        paths.join(", "),
        scene.items.join(", "),
        scene.enemies.join(", "),
        state.inventory.join(", "),
    );
    if !scene.puzzles.is_empty() {
        out.push_str("\nPuzzles:");
        for puzzle in scene.puzzles.values() {
            out.push_str("\n- ");
            out.push_str(&puzzle.description);
        }
    }
    out
}

/// Rejected move.
pub fn cannot_go(target: &str) -> String {
    format!("You can't go to {target} from here.")
}

/// Successful pickup.
pub fn taken(item: &str) -> String {
    format!("You take the {item}.")
}

/// Rejected pickup.
pub fn nothing_to_take(item: &str) -> String {
    format!("There is no {item} here to take.")
}

/// Solved puzzle.
pub fn puzzle_solved(item: &str, puzzle: &str) -> String {
    format!("You use the {item} and solve the {puzzle}!")
}

/// Rejected use.
pub fn cannot_use(item: &str) -> String {
    format!("You can't use the {item} here.")
}

/// Won fight. The sword changes only the telling, never the damage.
pub fn fought(enemy: &str, damage: i32, has_sword: bool) -> String {
    if has_sword {
        format!("You fight the {enemy} with your sword. You take {damage} damage and defeat it!")
    } else {
        format!(
            "You fight the {enemy} with your bare hands. You take {damage} damage and defeat it, but you're hurt."
        )
    }
}

/// Fight with no enemies present.
pub fn nothing_to_fight() -> String {
    "There's nothing to fight here.".to_string()
}

/// Session reset after a game over.
pub fn restarted() -> String {
    "Game restarted. You wake up at the beginning of your journey once again.".to_string()
}

/// Fixed notice for any non-restart input after a game over.
pub fn session_ended() -> String {
    "The game has ended. Type 'restart' to play again.".to_string()
}

/// Terminal narration for an ending.
pub fn ending(ending: Ending) -> String {
    match ending {
        Ending::Wounds => "You succumb to your wounds. Game over.".to_string(),
        Ending::OutOfTime => "You fail to find what you seek in time. Game over.".to_string(),
        Ending::Victory => {
            "Congratulations, you have found what you were seeking! You win!".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use fw_world::Puzzle;

    #[test]
    fn status_block_lists_everything() {
        let mut state = GameState::fresh(&Config::default(), "glade".into());
        state.add_item("stick");
        state.hunger = 10;
        let scene = Scene::new("A sunny glade.", "")
            .with_connections(["path"])
            .with_items(["rope"])
            .with_enemies(["wolf"])
            .with_puzzle("well", Puzzle::new("A locked well.", "key", "glade"));

        let out = status(&state, &scene);
        assert!(out.contains("Day 1"));
        assert!(out.contains("Health: 100"));
        assert!(out.contains("Hunger: 10"));
        assert!(out.contains("A sunny glade."));
        assert!(out.contains("Available Paths: path"));
        assert!(out.contains("Items Here: rope"));
        assert!(out.contains("Enemies Here: wolf"));
        assert!(out.contains("Inventory: stick"));
        assert!(out.contains("- A locked well."));
    }

    #[test]
    fn status_block_omits_empty_puzzle_list() {
        let state = GameState::fresh(&Config::default(), "start".into());
        let out = status(&state, &Scene::new("Nothing here.", ""));
        assert!(!out.contains("Puzzles:"));
    }

    #[test]
    fn fight_narration_branches_on_sword() {
        assert!(fought("goblin", 12, true).contains("with your sword"));
        assert!(fought("goblin", 12, false).contains("bare hands"));
    }
}
