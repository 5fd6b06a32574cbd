//! Attrition and termination checks.
//!
//! These run after the action handler on every processed turn, in a fixed
//! order: hunger attrition first, then the win/loss checks.

use fw_world::SceneGraph;

use crate::config::Config;
use crate::state::GameState;

/// Hunger gained each turn.
pub const HUNGER_PER_TURN: i32 = 10;
/// Hunger level that triggers starvation damage and resets to zero.
pub const HUNGER_LIMIT: i32 = 100;
/// Health lost when hunger reaches the limit.
pub const STARVATION_DAMAGE: i32 = 20;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// Health reached zero or below.
    Wounds,
    /// The day counter passed the configured limit.
    OutOfTime,
    /// The player reached the goal scene.
    Victory,
}

/// Apply one turn of hunger attrition.
///
/// Runs unconditionally for every processed command, including
/// unrecognized ones: every input costs a turn. Hunger overflow converts
/// into starvation damage and resets the counter, so hunger is always in
/// `[0, HUNGER_LIMIT)` afterwards.
pub fn apply_attrition(state: &mut GameState) {
    state.hunger += HUNGER_PER_TURN;
    if state.hunger >= HUNGER_LIMIT {
        state.health -= STARVATION_DAMAGE;
        state.hunger = 0;
    }
}

/// Run the termination checks in priority order.
///
/// The first match flips `game_over` and decides the ending: death by
/// wounds outranks running out of days, which outranks reaching the goal.
pub fn check_termination(
    state: &mut GameState,
    graph: &SceneGraph,
    config: &Config,
) -> Option<Ending> {
    let ending = if state.health <= 0 {
        Ending::Wounds
    } else if state.day > config.max_days {
        Ending::OutOfTime
    } else if state.current_scene == graph.goal {
        Ending::Victory
    } else {
        return None;
    };
    state.game_over = true;
    Some(ending)
}
