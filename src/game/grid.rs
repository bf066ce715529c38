use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A tile coordinate on the game grid
///
/// `x` is the column and `y` the row; one unit is one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub x: i32,
    pub y: i32,
}

impl Tile {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move tile by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move tile one cell in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// Fixed grid dimensions in tiles, used for boundary collision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBounds {
    pub width: usize,
    pub height: usize,
}

impl GridBounds {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Check if a tile lies within the grid
    pub fn contains(&self, tile: Tile) -> bool {
        tile.x >= 0
            && tile.x < self.width as i32
            && tile.y >= 0
            && tile.y < self.height as i32
    }
}
