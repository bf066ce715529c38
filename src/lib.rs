//! Snake and apple arcade game
//!
//! This library provides:
//! - Core game logic (game module): snake state machine, apple spawner,
//!   and the controller that ties them together
//! - Audio cue plumbing (audio module)
//! - Keyboard input mapping (input module)
//! - Session metrics (metrics module)
//! - TUI rendering (render module)
//! - The interactive driving loop (modes module)

pub mod audio;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
