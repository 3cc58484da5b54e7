//! Obstacle spawning, scrolling, speed ramp, and retirement
//!
//! Spawn cadence is a renewal process: a countdown decremented each tick,
//! reset to a fresh uniform draw from [100, 150) whenever it fires. This
//! gives an irregular but well-defined cadence (one draw per spawn) instead
//! of re-rolling a modulo divisor every frame.

use rand::Rng;

use super::state::{GameState, Obstacle};
use crate::consts::*;

/// Ramp the scroll speed every [`SPEED_RAMP_INTERVAL`] ticks, capped at
/// [`MAX_SPEED`]. Skips frame 0 so a fresh session starts at exactly
/// [`INITIAL_SPEED`].
pub fn ramp_speed(state: &mut GameState) {
    if state.frame > 0 && state.frame % SPEED_RAMP_INTERVAL == 0 && state.speed < MAX_SPEED {
        state.speed = (state.speed + SPEED_INCREMENT).min(MAX_SPEED);
    }
}

/// Decrement the spawn countdown; spawn an obstacle and re-draw the
/// countdown when it reaches zero.
pub fn update_spawn(state: &mut GameState) {
    if state.spawn_timer > 0 {
        state.spawn_timer -= 1;
        return;
    }

    spawn_obstacle(state);
    state.spawn_timer = state
        .rng
        .random_range(SPAWN_INTERVAL_MIN..SPAWN_INTERVAL_MAX);
}

/// Push a new obstacle at the right edge, base aligned with the ground line.
fn spawn_obstacle(state: &mut GameState) {
    if state.enemy_kinds == 0 {
        return;
    }
    let sprite = state.rng.random_range(0..state.enemy_kinds);
    let size = SPRITE_SIZE * OBSTACLE_SCALE;
    let id = state.next_entity_id();
    state.obstacles.push_back(Obstacle {
        id,
        x: CANVAS_WIDTH,
        y: CANVAS_HEIGHT - GROUND_HEIGHT - size + OBSTACLE_SINK,
        width: size,
        height: size,
        sprite,
        passed: false,
    });
}

/// Scroll every obstacle left by the current speed, then retire obstacles
/// that are fully off-screen.
///
/// Obstacles never reorder (uniform scroll, spawn at the right edge), so the
/// front of the queue is always the leftmost and only it needs checking.
pub fn scroll_and_retire(state: &mut GameState) {
    for obs in &mut state.obstacles {
        obs.x -= state.speed;
    }

    while state
        .obstacles
        .front()
        .is_some_and(|obs| obs.x < RETIRE_X)
    {
        state.obstacles.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::GamePhase;

    fn playing_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        state.assets_ready();
        state.start_session();
        assert_eq!(state.phase, GamePhase::Playing);
        state
    }

    #[test]
    fn test_countdown_spawns_and_redraws() {
        let mut state = playing_state(42);
        let first_wait = state.spawn_timer;
        assert!((SPAWN_INTERVAL_MIN..SPAWN_INTERVAL_MAX).contains(&first_wait));

        for _ in 0..first_wait {
            update_spawn(&mut state);
            assert!(state.obstacles.is_empty());
        }
        // Countdown hit zero: next call spawns and re-draws
        update_spawn(&mut state);
        assert_eq!(state.obstacles.len(), 1);
        assert!((SPAWN_INTERVAL_MIN..SPAWN_INTERVAL_MAX).contains(&state.spawn_timer));

        let obs = state.obstacles[0];
        assert_eq!(obs.x, CANVAS_WIDTH);
        assert_eq!(obs.width, SPRITE_SIZE * OBSTACLE_SCALE);
        assert!(obs.sprite < state.enemy_kinds);
        assert!(!obs.passed);
        // Base sits on the ground line (plus the visual sink)
        assert_eq!(obs.y + obs.height, CANVAS_HEIGHT - GROUND_HEIGHT + OBSTACLE_SINK);
    }

    #[test]
    fn test_speed_ramp_caps_at_max() {
        let mut state = playing_state(42);
        assert_eq!(state.speed, INITIAL_SPEED);

        // Frame 0 must not ramp
        ramp_speed(&mut state);
        assert_eq!(state.speed, INITIAL_SPEED);

        for step in 1..=20u64 {
            state.frame = step * SPEED_RAMP_INTERVAL;
            ramp_speed(&mut state);
        }
        assert_eq!(state.speed, MAX_SPEED);

        // Saturated: further ramps are no-ops
        state.frame += SPEED_RAMP_INTERVAL;
        ramp_speed(&mut state);
        assert_eq!(state.speed, MAX_SPEED);
    }

    #[test]
    fn test_scroll_moves_all_obstacles_uniformly() {
        let mut state = playing_state(42);
        state.spawn_timer = 0;
        update_spawn(&mut state);
        state.spawn_timer = 0;
        update_spawn(&mut state);
        assert_eq!(state.obstacles.len(), 2);

        let xs: Vec<f32> = state.obstacles.iter().map(|o| o.x).collect();
        scroll_and_retire(&mut state);
        for (obs, old_x) in state.obstacles.iter().zip(xs) {
            assert_eq!(obs.x, old_x - state.speed);
        }
    }

    #[test]
    fn test_retirement_only_from_front_past_threshold() {
        let mut state = playing_state(42);
        state.spawn_timer = 0;
        update_spawn(&mut state);

        // Just above the threshold: must survive
        state.obstacles[0].x = RETIRE_X + state.speed + 0.5;
        scroll_and_retire(&mut state);
        assert_eq!(state.obstacles.len(), 1);
        assert!(state.obstacles[0].x >= RETIRE_X);

        // Next scroll pushes it past the threshold: retired
        scroll_and_retire(&mut state);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_same_seed_same_spawn_script() {
        let mut a = playing_state(777);
        let mut b = playing_state(777);
        for _ in 0..2000 {
            update_spawn(&mut a);
            update_spawn(&mut b);
        }
        assert_eq!(a.obstacles.len(), b.obstacles.len());
        for (oa, ob) in a.obstacles.iter().zip(b.obstacles.iter()) {
            assert_eq!(oa.sprite, ob.sprite);
            assert_eq!(oa.id, ob.id);
        }
    }
}
