use rand::Rng;

use super::grid::{GridBounds, Tile};

/// The single apple on the grid
///
/// Relocated rather than destroyed when the snake eats it. Relocation picks
/// a uniform tile inside the interior margin and does not check for overlap
/// with the snake body: an apple under the snake simply reappears as the
/// tail passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apple {
    tile: Tile,
}

impl Apple {
    pub fn new(tile: Tile) -> Self {
        Self { tile }
    }

    pub fn tile(&self) -> Tile {
        self.tile
    }

    /// Move the apple to a random tile in `[1, width-2] x [1, height-2]`,
    /// never on the outermost ring of the grid.
    pub fn relocate<R: Rng>(&mut self, rng: &mut R, bounds: GridBounds) {
        let x = rng.gen_range(1..=bounds.width as i32 - 2);
        let y = rng.gen_range(1..=bounds.height as i32 - 2);
        self.tile = Tile::new(x, y);
    }
}
