//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only
//! - Stable obstacle order (spawn order, oldest first)
//! - No rendering or platform dependencies

pub mod collision;
pub mod physics;
pub mod score;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Hitbox, obstacle_hitbox, player_hitbox, player_hits_obstacle};
pub use state::{GamePhase, GameState, Obstacle, Player};
pub use tick::{TickInput, tick};
