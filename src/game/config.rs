use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::grid::Tile;

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid in tiles
    pub grid_width: usize,
    /// Height of the game grid in tiles
    pub grid_height: usize,
    /// Tick period in milliseconds
    pub tick_ms: u64,
    /// Tile where the snake starts (and restarts)
    pub snake_start: Tile,
    /// Heading the snake starts with
    pub start_heading: Direction,
    /// Tile where the apple first appears and returns to after a reset
    pub apple_start: Tile,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 16,
            tick_ms: 100,
            snake_start: Tile::new(1, 1),
            start_heading: Direction::Down,
            apple_start: Tile::new(3, 3),
        }
    }
}

impl GameConfig {
    /// Smallest playable grid side: the apple's interior margin
    /// `[1, side-2]` needs at least two tiles to draw from.
    pub const MIN_GRID_SIDE: usize = 4;
    /// Smallest tick period the driving loop accepts
    pub const MIN_TICK_MS: u64 = 1;

    /// Create a configuration with a custom grid size, clamped to the
    /// playable minimum
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width.max(Self::MIN_GRID_SIDE),
            grid_height: height.max(Self::MIN_GRID_SIDE),
            ..Default::default()
        }
    }

    /// Set the tick period, clamped to the minimum
    pub fn with_tick_ms(mut self, tick_ms: u64) -> Self {
        self.tick_ms = tick_ms.max(Self::MIN_TICK_MS);
        self
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }
}
