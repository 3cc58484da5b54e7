//! Vertical physics: explicit Euler integration and the floor clamp
//!
//! One step per tick, render-driven - no sub-stepping or interpolation.

use super::state::Player;
use crate::consts::*;
use crate::floor_y;

/// Advance the player one tick: apply gravity, integrate, resolve ground.
///
/// The clamp runs every tick the player is at or below the floor line, so
/// velocity never builds up while resting on the ground.
pub fn step_player(player: &mut Player) {
    player.dy += GRAVITY;
    player.y += player.dy;

    if player.y >= floor_y() {
        player.y = floor_y();
        player.dy = 0.0;
        player.is_jumping = false;
        player.jump_count = 0;
    }
}

/// Apply a jump command.
///
/// Honored iff fewer than [`MAX_JUMPS`] jumps have been taken since the last
/// ground contact (one from the ground plus one mid-air). A third press while
/// airborne is a no-op.
pub fn jump(player: &mut Player) {
    if player.jump_count < MAX_JUMPS {
        player.dy = JUMP_STRENGTH;
        player.is_jumping = true;
        player.jump_count += 1;
    }
}
