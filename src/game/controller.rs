use crate::audio::{AudioCue, SoundEffect};

use super::apple::Apple;
use super::config::GameConfig;
use super::direction::Direction;
use super::grid::GridBounds;
use super::snake::Snake;

/// Which phase the game is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

/// What ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Head left the grid
    Wall,
    /// Head landed on a body segment at index 3 or later
    SelfHit,
}

/// Result of one tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    /// Phase after the tick
    pub phase: Phase,
    /// Whether the snake ate the apple this tick
    pub ate_apple: bool,
    /// Collision that ended the run, if any
    pub collision: Option<CollisionKind>,
    /// Playback requests for the audio collaborator
    pub cues: Vec<AudioCue>,
}

impl TickOutcome {
    fn quiet(phase: Phase) -> Self {
        Self {
            phase,
            ate_apple: false,
            collision: None,
            cues: Vec::new(),
        }
    }
}

/// Owns the snake and the apple, applies input, and advances the game one
/// tick at a time
///
/// A collision is the only "error" of the domain and it is not a fault: it
/// is the `Playing -> GameOver` transition, reported in the [`TickOutcome`].
/// The run is unrecoverable until [`GameController::confirm`] resets it.
pub struct GameController {
    config: GameConfig,
    bounds: GridBounds,
    snake: Snake,
    apple: Apple,
    phase: Phase,
    rng: rand::rngs::ThreadRng,
}

impl GameController {
    pub fn new(config: GameConfig) -> Self {
        let bounds = GridBounds::new(config.grid_width, config.grid_height);
        let snake = Snake::new(config.snake_start, config.start_heading, 1);
        let apple = Apple::new(config.apple_start);

        Self {
            config,
            bounds,
            snake,
            apple,
            phase: Phase::Playing,
            rng: rand::thread_rng(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> &Apple {
        &self.apple
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// Score is the snake's length
    pub fn score(&self) -> usize {
        self.snake.len()
    }

    /// Point the snake in a new direction. Ignored while the game-over
    /// screen is up.
    pub fn set_heading(&mut self, heading: Direction) {
        if self.phase == Phase::Playing {
            self.snake.set_heading(heading);
        }
    }

    /// Acknowledge a game over and start a fresh run: snake back to length 1
    /// at the start tile with the default heading, apple back to its start
    /// tile, background music resumed. No-op while still playing.
    pub fn confirm(&mut self) -> Vec<AudioCue> {
        if self.phase != Phase::GameOver {
            return Vec::new();
        }

        self.snake = Snake::new(self.config.snake_start, self.config.start_heading, 1);
        self.apple = Apple::new(self.config.apple_start);
        self.phase = Phase::Playing;

        vec![AudioCue::ResumeMusic]
    }

    /// Advance the game by one tick: move, check collisions, then handle the
    /// apple. Frozen while in `GameOver`.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase == Phase::GameOver {
            return TickOutcome::quiet(Phase::GameOver);
        }

        self.snake.advance();

        if let Some(kind) = self.check_collision() {
            self.phase = Phase::GameOver;
            return TickOutcome {
                phase: Phase::GameOver,
                ate_apple: false,
                collision: Some(kind),
                cues: vec![
                    AudioCue::Effect(SoundEffect::Crash),
                    AudioCue::PauseMusic,
                ],
            };
        }

        let ate_apple = self.snake.head() == self.apple.tile();
        if ate_apple {
            self.snake.grow();
            self.apple.relocate(&mut self.rng, self.bounds);
        }

        TickOutcome {
            phase: Phase::Playing,
            ate_apple,
            collision: None,
            cues: if ate_apple {
                vec![AudioCue::Effect(SoundEffect::Ding)]
            } else {
                Vec::new()
            },
        }
    }

    /// Boundary check first, then self-collision on the advanced head
    fn check_collision(&self) -> Option<CollisionKind> {
        if !self.bounds.contains(self.snake.head()) {
            return Some(CollisionKind::Wall);
        }
        if self.snake.hits_self() {
            return Some(CollisionKind::SelfHit);
        }
        None
    }

    // Test hook: drop the snake into a known configuration.
    #[cfg(test)]
    fn place_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }

    #[cfg(test)]
    fn place_apple(&mut self, tile: super::grid::Tile) {
        self.apple = Apple::new(tile);
    }
}
