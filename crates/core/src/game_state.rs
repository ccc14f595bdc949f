//! Game state module - one play session
//!
//! Ties the playfield to its random source and the start/playing/game-over status.
//! Drivers call [`GameState::apply_action`] once per discrete key press and
//! [`GameState::tick`] once per frame with the frame's elapsed time.

use arrayvec::ArrayVec;

use crate::playfield::Playfield;
use crate::rng::{game_rng, GameRng};
use crate::snapshot::{GameSnapshot, ShapeSnapshot};
use crate::types::{GameAction, GameEvent, GameStatus};

/// Events produced by one call to [`GameState::tick`]
pub type TickEvents = ArrayVec<GameEvent, 3>;

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    playfield: Playfield,
    rng: GameRng,
    seed: u64,
    status: GameStatus,
}

impl GameState {
    /// Create a session that has not started yet
    pub fn new(seed: u64) -> Self {
        Self {
            playfield: Playfield::new(),
            rng: game_rng(seed),
            seed,
            status: GameStatus::NotStarted,
        }
    }

    /// Start (or restart) play on an empty board.
    ///
    /// The random stream carries on, so a restart deals a different sequence.
    pub fn start(&mut self) {
        self.playfield.reset();
        self.playfield.prepare_next(&mut self.rng);
        self.status = GameStatus::Playing;
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.playfield.score()
    }

    pub fn level(&self) -> u32 {
        self.playfield.level()
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    /// Mutable playfield access, for setting up puzzles and tests
    pub fn playfield_mut(&mut self) -> &mut Playfield {
        &mut self.playfield
    }

    pub fn request_move_left(&mut self) -> bool {
        self.playing() && self.playfield.move_current(-1, 0)
    }

    pub fn request_move_right(&mut self) -> bool {
        self.playing() && self.playfield.move_current(1, 0)
    }

    pub fn request_soft_drop(&mut self) -> bool {
        self.playing() && self.playfield.move_current(0, 1)
    }

    pub fn request_rotate(&mut self) -> bool {
        self.playing() && self.playfield.rotate_current()
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.request_move_left(),
            GameAction::MoveRight => self.request_move_right(),
            GameAction::SoftDrop => self.request_soft_drop(),
            GameAction::Rotate => self.request_rotate(),
            GameAction::Start => {
                self.start();
                true
            }
        }
    }

    /// Advance gravity and the level timer by one frame.
    ///
    /// Does nothing unless the session is playing.
    pub fn tick(&mut self, elapsed_ms: u32) -> TickEvents {
        let mut events = TickEvents::new();
        if !self.playing() {
            return events;
        }

        if let Some(outcome) = self.playfield.advance_tick(elapsed_ms, &mut self.rng) {
            if outcome.rows_cleared > 0 {
                events.push(GameEvent::RowsCleared {
                    rows: outcome.rows_cleared,
                });
            }
            if outcome.game_over {
                self.status = GameStatus::GameOver;
                events.push(GameEvent::GameOver);
                return events;
            }
        }

        if self.playfield.advance_level_timer(elapsed_ms) {
            events.push(GameEvent::LevelUp {
                level: self.playfield.level(),
            });
        }

        events
    }

    fn playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.playfield.board().write_u8_grid(&mut out.board);

        out.current = self.playfield.current().map(ShapeSnapshot::from);
        out.next = self.playfield.next().map(ShapeSnapshot::from);
        out.status = self.status;
        out.seed = self.seed;
        out.score = self.playfield.score();
        out.level = self.playfield.level();
        out.tick_interval_ms = self.playfield.tick_interval_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
