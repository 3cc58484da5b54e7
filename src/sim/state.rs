//! Game state and core simulation types
//!
//! Everything the renderer snapshots and the tick mutates lives here.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::floor_y;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Sprite assets are still resolving; input is ignored
    Loading,
    /// Assets ready, waiting for a start press
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended on a collision
    GameOver,
}

/// The player character
///
/// Horizontal position is fixed at [`PLAYER_X`]; only the vertical axis is
/// simulated. `y` is the top edge of the hitbox, growing downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub y: f32,
    /// Vertical velocity (pixels per tick, positive = falling)
    pub dy: f32,
    pub width: f32,
    pub height: f32,
    pub is_jumping: bool,
    /// Jumps taken since last ground contact (0..=MAX_JUMPS)
    pub jump_count: u8,
}

impl Player {
    /// New player resting on the floor line
    pub fn grounded() -> Self {
        Self {
            y: floor_y(),
            dy: 0.0,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            is_jumping: false,
            jump_count: 0,
        }
    }

    pub fn on_ground(&self) -> bool {
        self.y >= floor_y()
    }
}

/// One scrolling obstacle
///
/// `sprite` indexes into the shared enemy sprite handles owned by the asset
/// layer; the handle itself is opaque to the sim and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub sprite: usize,
    /// Set once the player has cleared this obstacle (monotonic false->true)
    pub passed: bool,
}

/// Complete game state (deterministic given seed + input script)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; the only source of randomness in the sim
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Session score (resets each session)
    pub score: u32,
    /// Ticks elapsed in the current session
    pub frame: u64,
    /// Current horizontal scroll speed (pixels per tick)
    pub speed: f32,
    /// Ticks until the next obstacle spawn
    pub spawn_timer: u32,
    /// The player character
    pub player: Player,
    /// Live obstacles, oldest (leftmost) first
    pub obstacles: VecDeque<Obstacle>,
    /// Number of distinct enemy sprite handles available to the spawner
    pub enemy_kinds: usize,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh state in the Loading phase
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let spawn_timer = rng.random_range(SPAWN_INTERVAL_MIN..SPAWN_INTERVAL_MAX);
        Self {
            seed,
            rng,
            phase: GamePhase::Loading,
            score: 0,
            frame: 0,
            speed: INITIAL_SPEED,
            spawn_timer,
            player: Player::grounded(),
            obstacles: VecDeque::new(),
            enemy_kinds: ENEMY_SPECIES.len(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// All sprite slots have settled (success or fallback); leave Loading.
    ///
    /// Fires the Loading->Menu transition exactly once; later calls are no-ops.
    pub fn assets_ready(&mut self) {
        if self.phase == GamePhase::Loading {
            self.phase = GamePhase::Menu;
        }
    }

    /// Reset session state and enter Playing.
    ///
    /// Valid from Menu and GameOver; score, frame counter, speed, and the
    /// obstacle queue all return to their starting values. The high score is
    /// untouched - it lives outside the sim.
    pub fn start_session(&mut self) {
        self.score = 0;
        self.frame = 0;
        self.speed = INITIAL_SPEED;
        self.obstacles.clear();
        self.spawn_timer = self.rng.random_range(SPAWN_INTERVAL_MIN..SPAWN_INTERVAL_MAX);
        self.player = Player::grounded();
        self.phase = GamePhase::Playing;
    }
}
