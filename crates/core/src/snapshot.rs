//! Snapshot module - read-only copy of a session for renderers

use crate::board::ROWS;
use crate::shape::{Shape, ShapeCells};
use crate::types::{FillColor, GameStatus, Rotation, ShapeKind, BOARD_WIDTH, INITIAL_TICK_INTERVAL_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeSnapshot {
    pub kind: ShapeKind,
    pub rotation: Rotation,
    pub color: FillColor,
    pub x: i8,
    pub y: i8,
    /// Board cells after the rotation transform
    pub cells: ShapeCells,
    /// Rotated cells normalized to a (0, 0) bounding box, for previews
    pub preview: ShapeCells,
}

impl From<Shape> for ShapeSnapshot {
    fn from(value: Shape) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            color: value.color,
            x: value.x,
            y: value.y,
            cells: value.cells(),
            preview: value.preview_cells(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Color codes per cell, row-major; 0 is empty
    pub board: [[u8; BOARD_WIDTH as usize]; ROWS],
    pub current: Option<ShapeSnapshot>,
    pub next: Option<ShapeSnapshot>,
    pub status: GameStatus,
    /// Seed that reproduces this session's shape sequence
    pub seed: u64,
    pub score: u32,
    pub level: u32,
    pub tick_interval_ms: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; ROWS],
            current: None,
            next: None,
            status: GameStatus::NotStarted,
            seed: 0,
            score: 0,
            level: 0,
            tick_interval_ms: INITIAL_TICK_INTERVAL_MS,
        }
    }
}
