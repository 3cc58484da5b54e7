//! Per-tick simulation step and phase transitions
//!
//! One tick per display refresh callback. All mutable session state is owned
//! by [`GameState`] and touched only inside [`tick`]; the driver's only jobs
//! are scheduling, input capture, and rendering the resulting snapshot.

use super::collision::player_hits_obstacle;
use super::state::{GamePhase, GameState};
use super::{physics, score, spawn};

/// Input for a single tick
///
/// A single contextual command: in Menu and GameOver it starts a session, in
/// Playing it jumps. One-shot - the driver clears it after each tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub press: bool,
}

/// Advance the game by one tick.
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        // Press is a no-op until assets settle
        GamePhase::Loading => {}

        GamePhase::Menu | GamePhase::GameOver => {
            if input.press {
                state.start_session();
                log::info!("session started (seed {})", state.seed);
            }
        }

        GamePhase::Playing => {
            if input.press {
                physics::jump(&mut state.player);
            }

            physics::step_player(&mut state.player);
            spawn::ramp_speed(state);
            spawn::update_spawn(state);
            spawn::scroll_and_retire(state);

            // Any overlap ends the session immediately
            if state
                .obstacles
                .iter()
                .any(|obs| player_hits_obstacle(&state.player, obs))
            {
                state.phase = GamePhase::GameOver;
                log::info!("game over at score {}", state.score);
                return;
            }

            score::update_passes(state);
            state.frame += 1;
        }
    }
}
