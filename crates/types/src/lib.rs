//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! - **Width**: 11 columns (indexed 0-10)
//! - **Height**: 17 rows (indexed 0-16, row 0 at the top)
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_TICK_INTERVAL_MS` | 500 | Gravity step interval at level 0 |
//! | `TICK_DECREASE_MS` | 50 | Interval reduction per level-up |
//! | `MIN_TICK_INTERVAL_MS` | 100 | Floor for the gravity interval |
//! | `NEXT_LEVEL_INTERVAL_MS` | 20000 | Play time per level |
//!
//! # Examples
//!
//! ```
//! use hyper_tetris_types::{Rotation, ShapeKind, FillColor, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! let rotation = Rotation::from_index(3);
//! assert_eq!(rotation.rotate_cw(), Rotation::R0);
//!
//! assert_eq!(ShapeKind::from_index(5), Some(ShapeKind::T));
//! assert_eq!(FillColor::from_code(FillColor::Blue.code()), Some(FillColor::Blue));
//!
//! assert_eq!(BOARD_WIDTH, 11);
//! assert_eq!(BOARD_HEIGHT, 17);
//! ```

/// Board dimensions
pub const BOARD_WIDTH: u8 = 11;
pub const BOARD_HEIGHT: u8 = 17;

/// Local grid of a shape: 2 columns x 4 rows (un-rotated)
pub const SHAPE_SIZE_X: u8 = 2;
pub const SHAPE_SIZE_Y: u8 = 4;

/// Number of occupied tiles in every shape
pub const SHAPE_TILES: usize = 4;

/// Game timing constants (in milliseconds)
pub const INITIAL_TICK_INTERVAL_MS: u32 = 500;
pub const TICK_DECREASE_MS: u32 = 50;
pub const MIN_TICK_INTERVAL_MS: u32 = 100;
pub const NEXT_LEVEL_INTERVAL_MS: u32 = 20_000;

/// Frame pacing used by the terminal driver (~60 FPS)
pub const FRAME_MS: u32 = 16;

/// Shape kinds, in generator order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    J,
    L,
    S,
    Z,
    T,
    O,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::T,
        ShapeKind::O,
    ];

    /// Kind for a generator index (0..7)
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Discrete orientation of a shape.
///
/// `R0` is the un-rotated mask; each step is one quarter turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    R0,
    R1,
    R2,
    R3,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [Rotation::R0, Rotation::R1, Rotation::R2, Rotation::R3];

    /// Rotation for an index, taken modulo 4
    pub fn from_index(index: u8) -> Self {
        Self::ALL[(index % 4) as usize]
    }

    pub fn index(&self) -> u8 {
        match self {
            Rotation::R0 => 0,
            Rotation::R1 => 1,
            Rotation::R2 => 2,
            Rotation::R3 => 3,
        }
    }

    /// Advance one step (modulo 4)
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::R0 => Rotation::R1,
            Rotation::R1 => Rotation::R2,
            Rotation::R2 => Rotation::R3,
            Rotation::R3 => Rotation::R0,
        }
    }
}

/// Fill palette for shapes; picked independently of the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FillColor {
    Orange,
    Red,
    Green,
    Blue,
    Violet,
}

impl FillColor {
    pub const ALL: [FillColor; 5] = [
        FillColor::Orange,
        FillColor::Red,
        FillColor::Green,
        FillColor::Blue,
        FillColor::Violet,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Compact non-zero code used in snapshots (0 means empty)
    pub fn code(&self) -> u8 {
        match self {
            FillColor::Orange => 1,
            FillColor::Red => 2,
            FillColor::Green => 3,
            FillColor::Blue => 4,
            FillColor::Violet => 5,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(FillColor::Orange),
            2 => Some(FillColor::Red),
            3 => Some(FillColor::Green),
            4 => Some(FillColor::Blue),
            5 => Some(FillColor::Violet),
            _ => None,
        }
    }
}

/// Cell on the board (None = empty, Some = filled with a color)
pub type Cell = Option<FillColor>;

/// Commands a driver may issue, each once per discrete key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    /// Start a session, or restart one that is running or over
    Start,
}

/// Session status as seen by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    NotStarted,
    Playing,
    GameOver,
}

/// Cue-worthy things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// One or more rows were cleared in a single tick
    RowsCleared { rows: u32 },
    LevelUp { level: u32 },
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_cycles() {
        let mut r = Rotation::R0;
        for expected in [Rotation::R1, Rotation::R2, Rotation::R3, Rotation::R0] {
            r = r.rotate_cw();
            assert_eq!(r, expected);
        }
    }

    #[test]
    fn test_rotation_index_roundtrip() {
        for r in Rotation::ALL {
            assert_eq!(Rotation::from_index(r.index()), r);
        }
        assert_eq!(Rotation::from_index(5), Rotation::R1);
    }

    #[test]
    fn test_shape_kind_index_order() {
        assert_eq!(ShapeKind::from_index(0), Some(ShapeKind::I));
        assert_eq!(ShapeKind::from_index(6), Some(ShapeKind::O));
        assert_eq!(ShapeKind::from_index(7), None);
    }

    #[test]
    fn test_fill_color_codes_are_nonzero_and_unique() {
        let mut seen = Vec::new();
        for c in FillColor::ALL {
            assert_ne!(c.code(), 0);
            assert!(!seen.contains(&c.code()));
            seen.push(c.code());
            assert_eq!(FillColor::from_code(c.code()), Some(c));
        }
        assert_eq!(FillColor::from_code(0), None);
    }
}
