//! Terminal Hyper Tetris runner (default binary).
//!
//! This is the external per-frame driver: it polls crossterm for key edges, feeds
//! the frame's elapsed time to the core, surfaces core events as cues, and renders
//! through the framebuffer-based terminal view.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use hyper_tetris::core::{random_seed, GameSnapshot, GameState};
use hyper_tetris::input::{should_quit, EdgeTrigger};
use hyper_tetris::term::{FrameBuffer, GameView, Hud, TerminalRenderer, Viewport};
use hyper_tetris::types::{GameAction, GameEvent, GameStatus, FRAME_MS};

/// How long a cue banner stays on screen
const CUE_MS: u32 = 1200;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Seed for the shape sequence (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Terminal columns per board cell
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u16).range(1..=8))]
    cell_width: u16,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &args);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

struct Cue {
    text: String,
    remaining_ms: u32,
}

fn run(term: &mut TerminalRenderer, args: &Args) -> Result<()> {
    let seed = args.seed.unwrap_or_else(random_seed);
    let mut game = GameState::new(seed);

    let view = GameView::new(args.cell_width, 1);
    let mut edges = EdgeTrigger::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut cue: Option<Cue> = None;

    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let hud = Hud {
            message: cue.as_ref().map(|c| c.text.as_str()),
        };
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, &hud, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next frame.
        let timeout = frame
            .checked_sub(last_frame.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(action) = edges.handle_key_press(key.code, Instant::now()) {
                            // Start only from the title or game-over screen.
                            if action != GameAction::Start || game.status() != GameStatus::Playing {
                                game.apply_action(action);
                            }
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Held keys never repeat commands.
                    }
                    KeyEventKind::Release => edges.handle_key_release(key.code),
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Frame update.
        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            last_frame = Instant::now();
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);

            for ev in game.tick(elapsed_ms) {
                match ev {
                    GameEvent::RowsCleared { rows } => {
                        let text = if rows == 1 {
                            "+1 ROW".to_string()
                        } else {
                            format!("+{} ROWS", rows)
                        };
                        cue = Some(Cue {
                            text,
                            remaining_ms: CUE_MS,
                        });
                        term.bell()?;
                    }
                    GameEvent::LevelUp { level } => {
                        cue = Some(Cue {
                            text: format!("LEVEL {}!", level),
                            remaining_ms: CUE_MS,
                        });
                    }
                    GameEvent::GameOver => {
                        cue = None;
                        edges.clear();
                        term.bell()?;
                    }
                }
            }

            if let Some(c) = cue.as_mut() {
                c.remaining_ms = c.remaining_ms.saturating_sub(elapsed_ms);
                if c.remaining_ms == 0 {
                    cue = None;
                }
            }
        }
    }
}
