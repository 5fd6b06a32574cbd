//! Built-in sample world.
//!
//! A small forest-and-ruins adventure used by the CLI and the test suite.
//! The engine never assumes this content; any well-formed [`SceneGraph`]
//! works.

use crate::graph::SceneGraph;
use crate::scene::{Puzzle, Scene};

/// Build the sample world: a forest clearing leading to ancient ruins.
///
/// The returned graph is well formed; construction only fails if the
/// fixture itself is broken, so callers may unwrap in tests.
pub fn sample_world() -> SceneGraph {
    let mut graph = SceneGraph::new("start", "ruin_depths");

    let scenes = [
        (
            "start",
            Scene::new(
                "You find yourself in a mysterious forest clearing. Paths lead north and east.",
                "Mysterious fantasy forest clearing, path leading north and east, misty atmosphere",
            )
            .with_connections(["forest_path", "river"])
            .with_items(["stick"]),
        ),
        (
            "forest_path",
            Scene::new(
                "The forest path winds through dense trees. You spot something shiny on the ground.",
                "Dense fantasy forest, winding path, shiny object on the ground",
            )
            .with_connections(["start", "forest_glade"])
            .with_items(["silver_key"])
            .with_enemies(["goblin"]),
        ),
        (
            "river",
            Scene::new(
                "A peaceful river flows past. A small boat is tied to the shore.",
                "Calm river flowing through forest, small wooden boat tied to shore",
            )
            .with_connections(["start", "boat_ride"])
            .with_items(["fishing_pole"]),
        ),
        (
            "forest_glade",
            Scene::new(
                "You enter a sunny forest glade. There is an old stone well in the center.",
                "Sunny forest clearing, ancient stone well in the center",
            )
            .with_connections(["forest_path"])
            .with_puzzle(
                "well",
                Puzzle::new(
                    "The well is locked. It requires a silver key.",
                    "silver_key",
                    "well_bottom",
                ),
            ),
        ),
        (
            "well_bottom",
            Scene::new(
                "You descend to the bottom of the well. There is an old chest filled with treasure!",
                "Dark stone well bottom, ancient treasure chest overflowing with gold coins and jewels",
            )
            .with_connections(["forest_glade"]),
        ),
        (
            "boat_ride",
            Scene::new(
                "You drift down the river in the boat, enjoying the scenery.",
                "Peaceful boat ride down fantasy river, lush forest on the banks",
            )
            .with_connections(["river", "river_end"]),
        ),
        (
            "river_end",
            Scene::new(
                "The river carries you to a distant shore. An ancient ruin stands before you.",
                "Crumbling stone ruins on the shore of a river in a fantasy setting, mysterious atmosphere",
            )
            .with_connections(["boat_ride", "ruin_entrance"])
            .with_enemies(["skeleton"]),
        ),
        (
            "ruin_entrance",
            Scene::new(
                "You stand before the entrance to the ruins. A sturdy metal gate blocks your path.",
                "Heavy, locked metal gate in front of ancient stone ruins",
            )
            .with_connections(["river_end"])
            .with_puzzle(
                "gate",
                Puzzle::new(
                    "The gate is locked. It looks like it could be opened with some kind of key.",
                    "gold_key",
                    "ruin_depths",
                ),
            ),
        ),
        (
            "ruin_depths",
            Scene::new(
                "You venture deep into the ancient ruins and discover the lost treasure of the ancients!",
                "Sunlight streaming into ancient ruins onto piles of gold treasure and artifacts",
            )
            .with_connections(["ruin_entrance"])
            .with_enemies(["ancient_guardian"]),
        ),
    ];

    for (id, scene) in scenes {
        graph
            .insert(id, scene)
            .expect("sample world ids are unique");
    }

    graph
}
