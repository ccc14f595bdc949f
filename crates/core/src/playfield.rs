//! Playfield module - board state, current/next shapes, gravity and progression
//!
//! The playfield runs the gravity state machine one step per tick interval:
//!
//! - no active shape: promote the next shape and generate a new one; a blocked
//!   spawn ends the game
//! - falling: move down one row, or merge into the board when resting and mark
//!   completed rows
//!
//! Every step finishes with the row sweep (clear, collapse, score) over whatever
//! rows were marked, so a landing and its clear always happen in the same step.

use rand::Rng;

use crate::board::{Board, CompletedRows};
use crate::generator::ShapeGenerator;
use crate::shape::Shape;
use crate::types::{
    INITIAL_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS, NEXT_LEVEL_INTERVAL_MS, TICK_DECREASE_MS,
};

/// Where the gravity state machine currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GravityState {
    NoActiveShape,
    Falling,
    GameOver,
}

/// What a single gravity step did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutcome {
    /// A shape was promoted from next to current (or blocked on spawn)
    pub spawned: bool,
    /// The current shape was merged into the board
    pub landed: bool,
    pub rows_cleared: u32,
    /// The spawned shape collided; the playfield is now over
    pub game_over: bool,
}

/// Board plus the shapes and timers that act on it
#[derive(Debug, Clone)]
pub struct Playfield {
    board: Board,
    current: Option<Shape>,
    next: Option<Shape>,
    completed_rows: CompletedRows,
    generator: ShapeGenerator,
    score: u32,
    level: u32,
    tick_interval_ms: u32,
    tick_timer_ms: u32,
    level_timer_ms: u32,
    game_over: bool,
}

impl Playfield {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: None,
            next: None,
            completed_rows: CompletedRows::new(),
            generator: ShapeGenerator::new(),
            score: 0,
            level: 0,
            tick_interval_ms: INITIAL_TICK_INTERVAL_MS,
            tick_timer_ms: 0,
            level_timer_ms: 0,
            game_over: false,
        }
    }

    /// Empty the board and return to the start of a session.
    ///
    /// Clears row markers, shapes, timers, score, level and the game-over flag.
    pub fn reset(&mut self) {
        *self = Self {
            generator: self.generator,
            ..Self::new()
        };
    }

    /// Generate the first "next" shape if there is none yet
    pub fn prepare_next<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.next.is_none() {
            self.next = Some(self.generator.generate(rng));
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access, for setting up puzzles and tests
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current(&self) -> Option<Shape> {
        self.current
    }

    pub fn next(&self) -> Option<Shape> {
        self.next
    }

    /// Replace the current shape without validation
    pub fn set_current(&mut self, shape: Option<Shape>) {
        self.current = shape;
    }

    /// Replace the next shape
    pub fn set_next(&mut self, shape: Shape) {
        self.next = Some(shape);
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn tick_interval_ms(&self) -> u32 {
        self.tick_interval_ms
    }

    pub fn tick_timer_ms(&self) -> u32 {
        self.tick_timer_ms
    }

    pub fn level_timer_ms(&self) -> u32 {
        self.level_timer_ms
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn gravity_state(&self) -> GravityState {
        if self.game_over {
            GravityState::GameOver
        } else if self.current.is_some() {
            GravityState::Falling
        } else {
            GravityState::NoActiveShape
        }
    }

    pub fn is_valid_position(&self, shape: &Shape) -> bool {
        self.board.is_valid_position(shape)
    }

    pub fn is_at_resting_position(&self, shape: &Shape) -> bool {
        self.board.is_at_resting_position(shape)
    }

    /// Offset `shape` by (dx, dy) if the new position is valid
    pub fn attempt_move(&self, shape: &mut Shape, dx: i8, dy: i8) -> bool {
        self.board.attempt_move(shape, dx, dy)
    }

    /// Rotate `shape` one step in place if the result is valid
    pub fn attempt_rotate(&self, shape: &mut Shape) -> bool {
        self.board.attempt_rotate(shape)
    }

    pub fn merge_shape(&mut self, shape: &Shape) {
        self.board.merge_shape(shape);
    }

    pub fn detect_completed_rows(&self) -> CompletedRows {
        self.board.completed_rows()
    }

    /// Clear and collapse `rows`, adding one point per cleared row
    pub fn clear_and_collapse(&mut self, rows: &[usize]) -> u32 {
        let cleared = self.board.clear_and_collapse(rows) as u32;
        self.score += cleared;
        cleared
    }

    /// Move the current shape; false when there is none or the move is blocked
    pub fn move_current(&mut self, dx: i8, dy: i8) -> bool {
        if self.game_over {
            return false;
        }
        match self.current.as_mut() {
            Some(shape) => self.board.attempt_move(shape, dx, dy),
            None => false,
        }
    }

    /// Rotate the current shape; false when there is none or the rotation is blocked
    pub fn rotate_current(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        match self.current.as_mut() {
            Some(shape) => self.board.attempt_rotate(shape),
            None => false,
        }
    }

    /// Run one gravity step.
    ///
    /// Does nothing once the game is over.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> StepOutcome {
        let mut outcome = StepOutcome::default();
        if self.game_over {
            return outcome;
        }

        match self.current.as_mut() {
            None => {
                outcome.spawned = true;
                let shape = match self.next.take() {
                    Some(shape) => shape,
                    None => self.generator.generate(rng),
                };
                self.next = Some(self.generator.generate(rng));

                // A blocked spawn stays current so the losing placement is still drawn.
                if !self.board.is_valid_position(&shape) {
                    self.game_over = true;
                    outcome.game_over = true;
                }
                self.current = Some(shape);
            }
            Some(shape) => {
                if !self.board.attempt_move(shape, 0, 1) && self.board.is_at_resting_position(shape) {
                    let landed = *shape;
                    self.board.merge_shape(&landed);
                    self.completed_rows = self.board.completed_rows();
                    self.current = None;
                    outcome.landed = true;
                }
            }
        }

        let rows = std::mem::take(&mut self.completed_rows);
        outcome.rows_cleared = self.clear_and_collapse(&rows);

        outcome
    }

    /// Accumulate frame time and run a gravity step once the interval is exceeded.
    ///
    /// The frame's time is added before the comparison, so at 16 ms frames the
    /// first step lands on frame 32 (512 ms). The firing frame's time is not
    /// carried over.
    pub fn advance_tick<R: Rng + ?Sized>(&mut self, elapsed_ms: u32, rng: &mut R) -> Option<StepOutcome> {
        self.tick_timer_ms = self.tick_timer_ms.saturating_add(elapsed_ms);
        if self.tick_timer_ms > self.tick_interval_ms {
            self.tick_timer_ms = 0;
            Some(self.step(rng))
        } else {
            None
        }
    }

    /// Accumulate play time; returns true when the level went up.
    ///
    /// Same accumulate-then-compare order as [`Playfield::advance_tick`].
    ///
    /// Each level-up shortens the tick interval by a fixed step, never below the floor.
    pub fn advance_level_timer(&mut self, elapsed_ms: u32) -> bool {
        self.level_timer_ms = self.level_timer_ms.saturating_add(elapsed_ms);
        if self.level_timer_ms <= NEXT_LEVEL_INTERVAL_MS {
            return false;
        }

        self.level_timer_ms = 0;
        self.level += 1;
        self.tick_interval_ms = self
            .tick_interval_ms
            .saturating_sub(TICK_DECREASE_MS)
            .max(MIN_TICK_INTERVAL_MS);
        true
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new()
    }
}
