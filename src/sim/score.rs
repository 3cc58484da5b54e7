//! Passage scoring
//!
//! An obstacle is "passed" the first tick its trailing edge scrolls behind
//! the player's fixed horizontal anchor. Each obstacle scores exactly once.

use super::state::GameState;
use crate::consts::*;

/// Mark newly passed obstacles and award points for each.
pub fn update_passes(state: &mut GameState) {
    for obs in &mut state.obstacles {
        if !obs.passed && obs.x + obs.width < PLAYER_X {
            obs.passed = true;
            state.score += PASS_POINTS;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Obstacle;

    fn state_with_obstacle(x: f32) -> GameState {
        let mut state = GameState::new(1);
        state.assets_ready();
        state.start_session();
        let id = state.next_entity_id();
        state.obstacles.push_back(Obstacle {
            id,
            x,
            y: 200.0,
            width: 64.0,
            height: 64.0,
            sprite: 0,
            passed: false,
        });
        state
    }

    #[test]
    fn test_scores_once_when_trailing_edge_crosses_anchor() {
        // Trailing edge exactly at the anchor: not yet passed
        let mut state = state_with_obstacle(PLAYER_X - 64.0);
        update_passes(&mut state);
        assert_eq!(state.score, 0);
        assert!(!state.obstacles[0].passed);

        // One pixel past: scores
        state.obstacles[0].x -= 1.0;
        update_passes(&mut state);
        assert_eq!(state.score, PASS_POINTS);
        assert!(state.obstacles[0].passed);

        // Idempotent: never scores again for the same obstacle
        for _ in 0..10 {
            state.obstacles[0].x -= 6.0;
            update_passes(&mut state);
        }
        assert_eq!(state.score, PASS_POINTS);
    }

    #[test]
    fn test_multiple_obstacles_score_independently() {
        let mut state = state_with_obstacle(-50.0);
        let id = state.next_entity_id();
        state.obstacles.push_back(Obstacle {
            id,
            x: -30.0,
            y: 200.0,
            width: 64.0,
            height: 64.0,
            sprite: 1,
            passed: false,
        });
        update_passes(&mut state);
        assert_eq!(state.score, 2 * PASS_POINTS);
    }
}
