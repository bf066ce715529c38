use super::direction::Direction;
use super::grid::Tile;

/// Placeholder position appended on growth; it becomes a real trailing
/// segment once the next advance shifts a predecessor tile into it.
pub const GROWTH_SENTINEL: Tile = Tile { x: -1, y: -1 };

/// The snake: an ordered sequence of tile segments with head at index 0
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    segments: Vec<Tile>,
    heading: Direction,
}

impl Snake {
    /// Create a snake of the given length with every segment stacked on the
    /// start tile. Segments untangle over the first few advances.
    pub fn new(start: Tile, heading: Direction, length: usize) -> Self {
        Self {
            segments: vec![start; length.max(1)],
            heading,
        }
    }

    /// Get the head tile
    pub fn head(&self) -> Tile {
        self.segments[0]
    }

    /// All segments, head first
    pub fn segments(&self) -> &[Tile] {
        &self.segments
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Set the heading. Reversing into the body is allowed; surviving it is
    /// the player's problem.
    pub fn set_heading(&mut self, heading: Direction) {
        self.heading = heading;
    }

    /// Shift every segment to its predecessor's tile, then move the head one
    /// tile in the current heading. Never fails; collision detection is the
    /// controller's job.
    pub fn advance(&mut self) {
        for i in (1..self.segments.len()).rev() {
            self.segments[i] = self.segments[i - 1];
        }
        self.segments[0] = self.segments[0].moved_in_direction(self.heading);
    }

    /// Append a placeholder tail segment at the out-of-grid sentinel. The
    /// next advance turns it into a real segment.
    pub fn grow(&mut self) {
        self.segments.push(GROWTH_SENTINEL);
    }

    /// Check if the head overlaps a body segment at index 3 or later. The
    /// first three trailing segments are exempt, which prevents false
    /// positives while freshly stacked segments are still untangling.
    pub fn hits_self(&self) -> bool {
        if self.segments.len() <= 3 {
            return false;
        }
        let head = self.head();
        self.segments[3..].contains(&head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_stacked_on_start_tile() {
        let snake = Snake::new(Tile::new(1, 1), Direction::Down, 1);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Tile::new(1, 1));

        let snake = Snake::new(Tile::new(1, 1), Direction::Down, 3);
        assert_eq!(snake.len(), 3);
        assert!(snake.segments().iter().all(|&s| s == Tile::new(1, 1)));
    }

    #[test]
    fn test_advance_shifts_segments() {
        let mut snake = Snake::new(Tile::new(5, 5), Direction::Right, 1);
        snake.advance();
        assert_eq!(snake.head(), Tile::new(6, 5));

        snake.set_heading(Direction::Down);
        snake.advance();
        assert_eq!(snake.head(), Tile::new(6, 6));
    }

    #[test]
    fn test_stacked_segments_untangle() {
        let mut snake = Snake::new(Tile::new(2, 2), Direction::Right, 3);

        snake.advance();
        assert_eq!(snake.segments(), &[Tile::new(3, 2), Tile::new(2, 2), Tile::new(2, 2)]);

        snake.advance();
        assert_eq!(snake.segments(), &[Tile::new(4, 2), Tile::new(3, 2), Tile::new(2, 2)]);
    }

    #[test]
    fn test_grow_then_advance_clears_sentinel() {
        let mut snake = Snake::new(Tile::new(5, 5), Direction::Right, 1);
        snake.advance();
        snake.grow();
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.segments()[1], GROWTH_SENTINEL);

        snake.advance();
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.segments(), &[Tile::new(7, 5), Tile::new(6, 5)]);
        assert!(!snake.segments().contains(&GROWTH_SENTINEL));
    }

    #[test]
    fn test_reversal_is_allowed() {
        let mut snake = Snake::new(Tile::new(5, 5), Direction::Right, 1);
        snake.set_heading(Direction::Left);
        assert_eq!(snake.heading(), Direction::Left);
        snake.advance();
        assert_eq!(snake.head(), Tile::new(4, 5));
    }

    #[test]
    fn test_self_hit_requires_index_three_or_later() {
        // All segments stacked: at length 3 the head only overlaps
        // indices 1 and 2, which are exempt.
        let short = Snake::new(Tile::new(5, 5), Direction::Right, 3);
        assert!(!short.hits_self());

        // At length 4 the head also overlaps index 3: collision.
        let long = Snake::new(Tile::new(5, 5), Direction::Right, 4);
        assert!(long.hits_self());
    }

    #[test]
    fn test_self_hit_after_tight_loop() {
        // A length-5 snake walking a 2x2 loop lands its head on its own body.
        let mut snake = Snake::new(Tile::new(5, 5), Direction::Right, 5);
        for _ in 0..4 {
            snake.advance(); // untangle along the row: head (9,5) .. tail (5,5)
        }
        snake.set_heading(Direction::Down);
        snake.advance(); // (9,6)
        snake.set_heading(Direction::Left);
        snake.advance(); // (8,6)
        snake.set_heading(Direction::Up);
        snake.advance(); // head (8,5) lands on segment index 4
        assert!(snake.hits_self());
    }
}
