//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the gameplay engine: the grid, the shapes, placement rules,
//! row clearing and level progression. It has **no dependencies** on UI, audio or I/O.
//!
//! - **Deterministic**: the same seed deals the same shapes
//! - **Explicit**: the random source is owned by the session and passed down, never global
//! - **Bounded**: every board access is bounds-checked before indexing
//!
//! # Module Structure
//!
//! - [`board`]: 11x17 grid with placement rules and the row sweep
//! - [`shape`]: tile masks for the seven kinds and the 2x4 rotation transform
//! - [`generator`]: random shapes (rotation, column, color, kind)
//! - [`playfield`]: gravity state machine, score and level progression
//! - [`game_state`]: a play session with start/playing/game-over status
//! - [`snapshot`]: read-only view for renderers
//! - [`rng`]: seeded random source
//!
//! # Rules
//!
//! - One point per cleared row, no multi-row bonus
//! - Rotation either fits in place or fails (no wall kicks)
//! - Gravity steps every 500ms, 50ms faster per level, never under 100ms
//! - A new level every 20 seconds of play
//!
//! # Example
//!
//! ```
//! use hyper_tetris_core::GameState;
//! use hyper_tetris_types::{GameAction, GameStatus};
//!
//! let mut game = GameState::new(12345);
//! game.apply_action(GameAction::Start);
//!
//! // The first gravity step spawns a shape.
//! game.tick(501);
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//!
//! assert_ne!(game.status(), GameStatus::NotStarted);
//! ```

pub mod board;
pub mod game_state;
pub mod generator;
pub mod playfield;
pub mod rng;
pub mod shape;
pub mod snapshot;

pub use hyper_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, CompletedRows};
pub use game_state::{GameState, TickEvents};
pub use generator::ShapeGenerator;
pub use playfield::{GravityState, Playfield, StepOutcome};
pub use rng::{game_rng, random_seed, GameRng};
pub use shape::{local_tiles, rotate_offset, tile_mask, Shape, ShapeCells, TileMask};
pub use snapshot::{GameSnapshot, ShapeSnapshot};
