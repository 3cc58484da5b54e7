//! Poké-Runner - a browser endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, scoring)
//! - `assets`: PokeAPI sprite lookup and preloading (wasm only)
//! - `render`: Canvas 2D frame drawing (wasm only)
//! - `highscores`: Persisted high score behind an injectable store

pub mod highscores;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod assets;
#[cfg(target_arch = "wasm32")]
pub mod render;

pub use highscores::{HighScore, ScoreStore};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels, origin top-left)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 400.0;

    /// Ground band height, measured up from the bottom edge
    pub const GROUND_HEIGHT: f32 = 50.0;

    /// Horizontal scroll speed (pixels per tick)
    pub const INITIAL_SPEED: f32 = 6.0;
    pub const MAX_SPEED: f32 = 12.0;
    /// Speed increase applied every [`SPEED_RAMP_INTERVAL`] ticks
    pub const SPEED_INCREMENT: f32 = 0.5;
    pub const SPEED_RAMP_INTERVAL: u64 = 600;

    /// Vertical physics (pixels per tick, y grows downward)
    pub const GRAVITY: f32 = 0.6;
    pub const JUMP_STRENGTH: f32 = -12.0;
    /// Ground jump plus one mid-air jump
    pub const MAX_JUMPS: u8 = 2;

    /// Source sprites are 32x32; scaled up for the big-pixel look
    pub const SPRITE_SIZE: f32 = 32.0;
    pub const PLAYER_SCALE: f32 = 2.5;
    pub const OBSTACLE_SCALE: f32 = 2.0;

    /// The player never moves horizontally; this is its left edge
    pub const PLAYER_X: f32 = 50.0;
    /// Player hitbox (smaller than the drawn sprite)
    pub const PLAYER_WIDTH: f32 = 60.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;

    /// Inward hitbox padding - near-misses should feel like misses
    pub const PLAYER_PADDING: f32 = 15.0;
    pub const OBSTACLE_PADDING: f32 = 10.0;

    /// Points per obstacle cleared
    pub const PASS_POINTS: u32 = 10;
    /// Obstacles are retired once fully off the left edge
    pub const RETIRE_X: f32 = -100.0;

    /// Spawn countdown is re-drawn uniformly from this half-open range
    pub const SPAWN_INTERVAL_MIN: u32 = 100;
    pub const SPAWN_INTERVAL_MAX: u32 = 150;

    /// Obstacle sprites sink this far into the ground band visually
    pub const OBSTACLE_SINK: f32 = 10.0;

    /// Species fetched from PokeAPI
    pub const PLAYER_SPECIES: &str = "pikachu";
    pub const ENEMY_SPECIES: [&str; 5] = ["geodude", "rattata", "diglett", "koffing", "voltorb"];
}

/// The y-coordinate of the player's resting top edge.
///
/// Derived from canvas geometry: bottom of the canvas, minus the ground band,
/// minus the drawn player sprite box (40px source box at player scale).
#[inline]
pub fn floor_y() -> f32 {
    consts::CANVAS_HEIGHT - consts::GROUND_HEIGHT - 40.0 * consts::PLAYER_SCALE
}
