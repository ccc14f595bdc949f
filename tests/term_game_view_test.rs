use hyper_tetris::core::{GameSnapshot, GameState, Shape};
use hyper_tetris::term::{color_rgb, AnchorY, GameView, Hud, Viewport, MAX_CELL_SIZE};
use hyper_tetris::types::{FillColor, GameStatus, Rotation, ShapeKind};

fn playing_snapshot() -> GameSnapshot {
    let mut snap = GameSnapshot::default();
    snap.status = GameStatus::Playing;
    snap
}

#[test]
fn frame_size_matches_board_at_two_columns_per_cell() {
    let view = GameView::default();
    assert_eq!(view.frame_size(), (24, 19));
    assert_eq!(GameView::new(1, 1).frame_size(), (13, 19));
}

#[test]
fn border_corners_fit_exact_viewport() {
    let view = GameView::default();
    let fb = view.render(&playing_snapshot(), &Hud::default(), Viewport::new(24, 19));

    assert_eq!(fb.get(0, 0).map(|c| c.ch), Some('┌'));
    assert_eq!(fb.get(23, 0).map(|c| c.ch), Some('┐'));
    assert_eq!(fb.get(0, 18).map(|c| c.ch), Some('└'));
    assert_eq!(fb.get(23, 18).map(|c| c.ch), Some('┘'));
    assert_eq!(fb.get(12, 0).map(|c| c.ch), Some('─'));
    assert_eq!(fb.get(0, 9).map(|c| c.ch), Some('│'));
}

#[test]
fn landed_cell_is_two_columns_wide() {
    let view = GameView::default();
    let mut snap = playing_snapshot();
    snap.board[16][0] = FillColor::Green.code();

    let fb = view.render(&snap, &Hud::default(), Viewport::new(24, 19));
    let left = fb.get(1, 17).unwrap();
    let right = fb.get(2, 17).unwrap();
    assert_eq!(left.ch, '█');
    assert_eq!(right.ch, '█');
    assert_eq!(left.style.fg, color_rgb(FillColor::Green));
    assert_eq!(fb.get(3, 17).map(|c| c.ch), Some(' '));
}

#[test]
fn current_shape_is_drawn_over_board() {
    let view = GameView::default();
    let mut game = GameState::new(1);
    game.start();
    game.playfield_mut()
        .set_current(Some(Shape::new(ShapeKind::O, 4, 2, Rotation::R0, FillColor::Violet)));

    let fb = view.render(&game.snapshot(), &Hud::default(), Viewport::new(24, 19));
    // Cell (4, 2) starts at column 1 + 4 * 2, row 1 + 2.
    for (x, y) in [(9, 3), (10, 3), (11, 3), (12, 3), (9, 4), (12, 4)] {
        let cell = fb.get(x, y).unwrap();
        assert_eq!(cell.ch, '█', "({}, {})", x, y);
        assert_eq!(cell.style.fg, color_rgb(FillColor::Violet));
    }
}

#[test]
fn shape_tiles_above_top_are_clipped() {
    let view = GameView::default();
    let mut game = GameState::new(1);
    game.start();
    game.playfield_mut()
        .set_current(Some(Shape::new(ShapeKind::I, 0, -3, Rotation::R0, FillColor::Red)));

    let fb = view.render(&game.snapshot(), &Hud::default(), Viewport::new(24, 19));
    assert_eq!(fb.get(1, 0).map(|c| c.ch), Some('─'));
    assert_eq!(fb.get(1, 1).map(|c| c.ch), Some('█'));
    assert_ne!(fb.get(1, 2).map(|c| c.ch), Some('█'));
}

#[test]
fn side_panel_shows_next_level_score_and_cue() {
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let mut game = GameState::new(8);
    game.start();
    game.playfield_mut()
        .set_next(Shape::new(ShapeKind::O, 0, 0, Rotation::R0, FillColor::Blue));
    let mut snap = game.snapshot();
    snap.score = 42;
    snap.level = 3;

    let hud = Hud {
        message: Some("+2 ROWS"),
    };
    let fb = view.render(&snap, &hud, Viewport::new(60, 19));

    // Board starts at column 18, panel two columns past its right edge.
    let panel_x = 18 + 24 + 2;
    assert!(fb.row_text(0).contains("NEXT"));
    assert_eq!(fb.get(panel_x, 1).map(|c| c.ch), Some('█'));
    assert_eq!(fb.get(panel_x + 3, 2).map(|c| c.ch), Some('█'));
    assert!(fb.row_text(6).contains("LEVEL"));
    assert!(fb.row_text(7).contains('3'));
    assert!(fb.row_text(9).contains("SCORE"));
    assert!(fb.row_text(10).contains("42"));
    assert!(fb.row_text(12).contains("SEED"));
    assert!(fb.row_text(13).contains('8'));
    assert!(fb.row_text(15).contains("+2 ROWS"));
}

#[test]
fn narrow_viewport_drops_side_panel() {
    let view = GameView::default();
    let fb = view.render(&playing_snapshot(), &Hud::default(), Viewport::new(30, 19));
    for y in 0..19 {
        assert!(!fb.row_text(y).contains("SCORE"));
    }
}

#[test]
fn title_and_game_over_overlays() {
    let view = GameView::default();

    let title = view.render(&GameSnapshot::default(), &Hud::default(), Viewport::new(24, 19));
    assert!(title.row_text(9).contains("HYPER TETRIS"));
    assert!(title.row_text(11).contains("PRESS SPACE"));

    let mut over = playing_snapshot();
    over.status = GameStatus::GameOver;
    let fb = view.render(&over, &Hud::default(), Viewport::new(24, 19));
    assert!(fb.row_text(9).contains("GAME OVER"));
    assert!(fb.row_text(11).contains("SPACE TO RETRY"));

    let playing = view.render(&playing_snapshot(), &Hud::default(), Viewport::new(24, 19));
    assert!(!playing.row_text(9).contains("GAME OVER"));
}

#[test]
fn render_into_resizes_reused_buffer() {
    let view = GameView::default();
    let mut fb = hyper_tetris::term::FrameBuffer::new(0, 0);
    view.render_into(&playing_snapshot(), &Hud::default(), Viewport::new(40, 20), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 20));
    view.render_into(&playing_snapshot(), &Hud::default(), Viewport::new(24, 19), &mut fb);
    assert_eq!((fb.width(), fb.height()), (24, 19));
}

#[test]
fn oversized_cells_are_clamped() {
    let view = GameView::new(6000, u16::MAX);
    let (w, h) = view.frame_size();
    assert_eq!(w, 11 * MAX_CELL_SIZE + 2);
    assert_eq!(h, 17 * MAX_CELL_SIZE + 2);

    let fb = view.render(&playing_snapshot(), &Hud::default(), Viewport::new(40, 20));
    assert_eq!((fb.width(), fb.height()), (40, 20));
    assert_eq!(fb.get(0, 0).map(|c| c.ch), Some('┌'));
}
