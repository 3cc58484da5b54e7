//! Collision detection between the player and obstacles
//!
//! Axis-aligned boxes with asymmetric inward padding: the usable hitboxes
//! are smaller than the drawn sprites, so grazing an obstacle's edge does not
//! end the run.

use super::state::{Obstacle, Player};
use crate::consts::*;

/// An axis-aligned box in canvas coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Hitbox {
    /// Standard rectangle intersection: no overlap iff one box is entirely
    /// left, right, above, or below the other.
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        !(self.right < other.left
            || self.left > other.right
            || self.bottom < other.top
            || self.top > other.bottom)
    }
}

/// The player's padded hitbox.
///
/// Inset by [`PLAYER_PADDING`] on the left, right, and top, and by
/// [`OBSTACLE_PADDING`] on the bottom - the feet get slightly less
/// forgiveness than the body.
pub fn player_hitbox(player: &Player) -> Hitbox {
    Hitbox {
        left: PLAYER_X + PLAYER_PADDING,
        right: PLAYER_X + player.width - PLAYER_PADDING,
        top: player.y + PLAYER_PADDING,
        bottom: player.y + player.height - OBSTACLE_PADDING,
    }
}

/// An obstacle's padded hitbox: inset by [`OBSTACLE_PADDING`] on the left,
/// right, and top; the base is left unpadded so landing on top still counts.
pub fn obstacle_hitbox(obs: &Obstacle) -> Hitbox {
    Hitbox {
        left: obs.x + OBSTACLE_PADDING,
        right: obs.x + obs.width - OBSTACLE_PADDING,
        top: obs.y + OBSTACLE_PADDING,
        bottom: obs.y + obs.height,
    }
}

/// True if the player's padded box overlaps this obstacle's padded box.
pub fn player_hits_obstacle(player: &Player, obs: &Obstacle) -> bool {
    player_hitbox(player).overlaps(&obstacle_hitbox(obs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::floor_y;
    use proptest::prelude::*;

    fn obstacle_at(x: f32, y: f32) -> Obstacle {
        Obstacle {
            id: 1,
            x,
            y,
            width: 64.0,
            height: 64.0,
            sprite: 0,
            passed: false,
        }
    }

    #[test]
    fn test_overlap_inside_padded_region() {
        let player = Player::grounded();
        // Obstacle overlapping the player's padded box by one pixel on the
        // left edge: player right edge is at PLAYER_X + 60 - 15 = 95,
        // obstacle padded left edge at x + 10.
        let obs = obstacle_at(95.0 - 10.0 - 1.0, floor_y());
        assert!(player_hits_obstacle(&player, &obs));
    }

    #[test]
    fn test_separated_by_padding_is_a_miss() {
        let player = Player::grounded();
        // Sprites visually touch, but the padded boxes are apart.
        let obs = obstacle_at(PLAYER_X + player.width, floor_y());
        assert!(!player_hits_obstacle(&player, &obs));
    }

    #[test]
    fn test_player_above_obstacle_is_a_miss() {
        let mut player = Player::grounded();
        player.y = floor_y() - 150.0; // mid-jump
        let obs = obstacle_at(PLAYER_X, floor_y());
        assert!(!player_hits_obstacle(&player, &obs));
    }

    #[test]
    fn test_direct_hit() {
        let player = Player::grounded();
        let obs = obstacle_at(PLAYER_X, floor_y());
        assert!(player_hits_obstacle(&player, &obs));
    }

    proptest! {
        /// Boxes fully to the player's right never collide.
        #[test]
        fn prop_far_right_never_hits(x in 200.0f32..10_000.0, y in 0.0f32..400.0) {
            let player = Player::grounded();
            let obs = obstacle_at(x, y);
            prop_assert!(!player_hits_obstacle(&player, &obs));
        }

        /// Overlap is symmetric.
        #[test]
        fn prop_overlap_symmetric(
            ax in -200.0f32..900.0, ay in 0.0f32..400.0,
            bx in -200.0f32..900.0, by in 0.0f32..400.0,
        ) {
            let a = obstacle_hitbox(&obstacle_at(ax, ay));
            let b = obstacle_hitbox(&obstacle_at(bx, by));
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        /// A box always overlaps itself.
        #[test]
        fn prop_overlap_reflexive(x in -200.0f32..900.0, y in 0.0f32..400.0) {
            let hb = obstacle_hitbox(&obstacle_at(x, y));
            prop_assert!(hb.overlaps(&hb));
        }
    }
}
