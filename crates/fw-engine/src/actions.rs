//! Action handlers: move, take, use, fight, restart.
//!
//! Each handler validates one command against the scene graph and game
//! state, applies its mutation, and returns narration. A rejected command
//! leaves the state untouched and answers with informational text, never an
//! error.
//!
//! Handlers assume the graph was validated at session start: the current
//! scene always exists, and every transition targets a validated id
//! (connections and puzzle rewards are checked by
//! [`SceneGraph::validate`]).

use rand::Rng;

use fw_world::{Scene, SceneGraph, SceneId};

use crate::config::Config;
use crate::narrator;
use crate::state::GameState;

/// Inclusive range of damage taken when fighting an enemy.
pub const DAMAGE_RANGE: std::ops::RangeInclusive<i32> = 10..=29;

/// The item whose presence changes the fight narration.
const SWORD: &str = "sword";

fn current_scene<'a>(graph: &'a SceneGraph, state: &GameState) -> &'a Scene {
    graph
        .scene(&state.current_scene)
        .expect("current scene exists in validated graph")
}

fn current_scene_mut<'a>(graph: &'a mut SceneGraph, state: &GameState) -> &'a mut Scene {
    graph
        .scene_mut(&state.current_scene)
        .expect("current scene exists in validated graph")
}

/// Move to `target` if it is connected to the current scene.
///
/// A successful move advances the day counter; travel is the only thing
/// that does.
pub fn go(state: &mut GameState, graph: &SceneGraph, target: &str) -> String {
    let target = SceneId::from(target);
    if current_scene(graph, state).connects_to(&target) {
        state.current_scene = target;
        state.day += 1;
        String::new()
    } else {
        narrator::cannot_go(target.as_str())
    }
}

/// Pick up `item` if it is present in the current scene.
pub fn take(state: &mut GameState, graph: &mut SceneGraph, item: &str) -> String {
    let scene = current_scene_mut(graph, state);
    if scene.remove_item(item) {
        state.add_item(item);
        narrator::taken(item)
    } else {
        narrator::nothing_to_take(item)
    }
}

/// Use a held `item` against the current scene's puzzles.
///
/// The first puzzle (in stored order) whose required item matches a held
/// `item` is solved: the item is consumed, the puzzle entry is removed from
/// the scene that owned it, and the player moves to the reward scene.
pub fn use_item(state: &mut GameState, graph: &mut SceneGraph, item: &str) -> String {
    let held = state.has_item(item);
    let scene = current_scene_mut(graph, state);
    let solved = scene
        .puzzles
        .iter()
        .find(|(_, p)| p.required_item == item && held)
        .map(|(id, p)| (id.clone(), p.reward_scene.clone()));

    match solved {
        Some((puzzle_id, reward)) => {
            scene.puzzles.remove(&puzzle_id);
            state.remove_item(item);
            state.current_scene = reward;
            narrator::puzzle_solved(item, &puzzle_id)
        }
        None => narrator::cannot_use(item),
    }
}

/// Fight the front enemy in the current scene.
///
/// Defeating it always costs a uniform damage draw from [`DAMAGE_RANGE`].
/// Carrying a sword changes the narration only, not the damage.
pub fn fight(state: &mut GameState, graph: &mut SceneGraph, rng: &mut impl Rng) -> String {
    let has_sword = state.has_item(SWORD);
    let scene = current_scene_mut(graph, state);
    match scene.defeat_front_enemy() {
        Some(enemy) => {
            let damage = rng.random_range(DAMAGE_RANGE);
            state.health -= damage;
            narrator::fought(&enemy, damage, has_sword)
        }
        None => narrator::nothing_to_fight(),
    }
}

/// Reset the game state to fresh defaults at the graph's start scene.
pub fn restart(state: &mut GameState, config: &Config, graph: &SceneGraph) -> String {
    *state = GameState::fresh(config, graph.start.clone());
    narrator::restarted()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fw_world::Puzzle;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn test_graph() -> SceneGraph {
        let mut graph = SceneGraph::new("clearing", "vault");
        graph
            .insert(
                "clearing",
                Scene::new("A clearing.", "")
                    .with_connections(["cave"])
                    .with_items(["stick"])
                    .with_enemies(["goblin", "wolf"]),
            )
            .unwrap();
        graph
            .insert(
                "cave",
                Scene::new("A dark cave.", "")
                    .with_connections(["clearing"])
                    .with_puzzle("door", Puzzle::new("A locked door.", "key", "vault")),
            )
            .unwrap();
        graph.insert("vault", Scene::new("The vault.", "")).unwrap();
        graph.validate().unwrap();
        graph
    }

    fn fresh_state() -> GameState {
        GameState::fresh(&Config::default(), "clearing".into())
    }

    #[test]
    fn go_to_connected_scene_advances_day() {
        let graph = test_graph();
        let mut state = fresh_state();
        go(&mut state, &graph, "cave");
        assert_eq!(state.current_scene.as_str(), "cave");
        assert_eq!(state.day, 2);
    }

    #[test]
    fn go_rejects_unconnected_target() {
        let graph = test_graph();
        let mut state = fresh_state();
        let out = go(&mut state, &graph, "vault");
        assert!(out.contains("can't go to vault"));
        assert_eq!(state.current_scene.as_str(), "clearing");
        assert_eq!(state.day, 1);
    }

    #[test]
    fn take_moves_item_from_scene_to_inventory() {
        let mut graph = test_graph();
        let mut state = fresh_state();
        let out = take(&mut state, &mut graph, "stick");
        assert!(out.contains("take the stick"));
        assert_eq!(state.inventory, vec!["stick"]);
        assert!(graph.scene(&"clearing".into()).unwrap().items.is_empty());
    }

    #[test]
    fn take_twice_fails_second_time() {
        let mut graph = test_graph();
        let mut state = fresh_state();
        take(&mut state, &mut graph, "stick");
        let out = take(&mut state, &mut graph, "stick");
        assert!(out.contains("no stick here"));
        assert_eq!(state.inventory, vec!["stick"]);
    }

    #[test]
    fn use_item_solves_puzzle_and_moves_player() {
        let mut graph = test_graph();
        let mut state = fresh_state();
        state.add_item("key");
        state.current_scene = "cave".into();

        let out = use_item(&mut state, &mut graph, "key");
        assert!(out.contains("solve the door"));
        assert_eq!(state.current_scene.as_str(), "vault");
        assert!(state.inventory.is_empty());
        // The puzzle is gone from the scene that owned it.
        assert!(graph.scene(&"cave".into()).unwrap().puzzles.is_empty());
    }

    #[test]
    fn use_item_requires_holding_it() {
        let mut graph = test_graph();
        let mut state = fresh_state();
        state.current_scene = "cave".into();

        let out = use_item(&mut state, &mut graph, "key");
        assert!(out.contains("can't use the key"));
        assert_eq!(state.current_scene.as_str(), "cave");
        assert!(!graph.scene(&"cave".into()).unwrap().puzzles.is_empty());
    }

    #[test]
    fn use_item_with_no_matching_puzzle_changes_nothing() {
        let mut graph = test_graph();
        let mut state = fresh_state();
        state.add_item("stick");

        let out = use_item(&mut state, &mut graph, "stick");
        assert!(out.contains("can't use the stick"));
        assert_eq!(state.inventory, vec!["stick"]);
        assert_eq!(state.current_scene.as_str(), "clearing");
    }

    #[test]
    fn fight_removes_front_enemy_and_applies_damage() {
        let mut graph = test_graph();
        let mut state = fresh_state();
        let mut rng = StdRng::seed_from_u64(1);

        let out = fight(&mut state, &mut graph, &mut rng);
        assert!(out.contains("goblin"));
        assert!(out.contains("bare hands"));
        let damage = 100 - state.health;
        assert!(DAMAGE_RANGE.contains(&damage));
        assert_eq!(
            graph.scene(&"clearing".into()).unwrap().enemies,
            vec!["wolf"]
        );
    }

    #[test]
    fn fight_with_sword_changes_narration_not_damage() {
        let mut graph = test_graph();
        let mut state = fresh_state();
        state.add_item("sword");
        let mut rng = StdRng::seed_from_u64(1);
        let mut expected_rng = StdRng::seed_from_u64(1);
        let expected_damage: i32 = expected_rng.random_range(DAMAGE_RANGE);

        let out = fight(&mut state, &mut graph, &mut rng);
        assert!(out.contains("with your sword"));
        assert_eq!(state.health, 100 - expected_damage);
    }

    #[test]
    fn fight_in_empty_scene_is_harmless() {
        let mut graph = test_graph();
        let mut state = fresh_state();
        state.current_scene = "cave".into();
        let mut rng = StdRng::seed_from_u64(1);

        let out = fight(&mut state, &mut graph, &mut rng);
        assert!(out.contains("nothing to fight"));
        assert_eq!(state.health, 100);
    }

    #[test]
    fn restart_restores_fresh_state() {
        let graph = test_graph();
        let config = Config::default();
        let mut state = fresh_state();
        state.add_item("stick");
        state.health = -3;
        state.hunger = 40;
        state.day = 12;
        state.game_over = true;
        state.current_scene = "cave".into();
        state.victory_song = Some("song://x".to_string());

        restart(&mut state, &config, &graph);
        assert_eq!(state, GameState::fresh(&config, "clearing".into()));
    }
}
