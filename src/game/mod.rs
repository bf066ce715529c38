//! Core game logic module
//!
//! Everything here is free of I/O and rendering dependencies: the snake
//! state machine, the apple spawner, and the controller that advances one
//! tick at a time and reports what happened.

pub mod apple;
pub mod config;
pub mod controller;
pub mod direction;
pub mod grid;
pub mod snake;

// Re-export commonly used types
pub use apple::Apple;
pub use config::GameConfig;
pub use controller::{CollisionKind, GameController, Phase, TickOutcome};
pub use direction::Direction;
pub use grid::{GridBounds, Tile};
pub use snake::Snake;
