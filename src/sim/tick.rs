//! Fixed timestep simulation tick
//!
//! One call advances gameplay by exactly one step, in a fixed order:
//! animation, jump physics, spawning, item collection, obstacle contact.
//! Outside `Playing` the tick is a no-op, so the driving loop can keep
//! cadence in every phase and a new run resumes promptly.

use super::collision::{find_all_collisions, has_any_collision};
use super::state::{GamePhase, GameState};

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, dt: f32) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    state.player = state.player.update_animation(dt).update_jump(dt);

    // Physics has no meaning until the display size is known
    let Some(spawner) = state.spawner.as_mut() else {
        return;
    };
    spawner.update(dt);

    let collected = find_all_collisions(&state.player, spawner.active_items());
    let obstacle_hit = has_any_collision(&state.player, spawner.active_obstacles());

    // Remove collected items in the same tick the points are awarded, so an
    // item overlapping the player can never score twice
    if !collected.is_empty() {
        spawner.remove_items(&collected);
    }
    for item in &collected {
        state.add_score(item.item_type.point_value());
    }

    if obstacle_hit {
        state.end_game();
    }
}
