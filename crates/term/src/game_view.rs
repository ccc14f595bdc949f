//! GameView: draws a `core::GameSnapshot` into a terminal framebuffer.
//!
//! Pure: snapshot in, cells out. No terminal I/O happens here.

use crate::core::{GameSnapshot, ShapeCells};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{FillColor, GameStatus, BOARD_HEIGHT, BOARD_WIDTH};

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const BORDER: Rgb = Rgb::new(200, 200, 200);
const CUE: Rgb = Rgb::new(255, 220, 120);
const BLOCK: char = '█';

/// Narrowest side panel worth drawing, in columns
const MIN_PANEL_W: u16 = 12;
/// Rows reserved for the next-shape preview, in board cells
const PREVIEW_ROWS: u16 = 5;
/// Largest supported cell size, in terminal columns or rows
pub const MAX_CELL_SIZE: u16 = 8;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Driver-owned extras drawn next to the game (cue banners and the like).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hud<'a> {
    pub message: Option<&'a str>,
}

/// Vertical placement of the board within the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Renders snapshots with a configurable cell size.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    cell_w: u16,
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps board cells roughly square.
        Self::new(2, 1)
    }
}

/// Where things go for one viewport.
#[derive(Debug, Clone, Copy)]
struct Layout {
    /// Top-left corner of the border
    x: u16,
    y: u16,
    /// Border size, including the border itself
    w: u16,
    h: u16,
    /// Left column of the side panel, if it fits
    panel_x: Option<u16>,
}

impl Layout {
    fn center_row(&self, line: u16) -> u16 {
        self.y.saturating_add(self.h / 2).saturating_add(line)
    }
}

impl GameView {
    /// Cell sizes are clamped to `1..=MAX_CELL_SIZE`.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_SIZE),
            cell_h: cell_h.clamp(1, MAX_CELL_SIZE),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Size of the bordered board in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let (w, h) = self.frame_size();
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        let panel = x.saturating_add(w).saturating_add(2);
        let panel_x = (viewport.width.saturating_sub(panel) >= MIN_PANEL_W).then_some(panel);
        Layout {
            x,
            y,
            w,
            h,
            panel_x,
        }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// The framebuffer is resized to the viewport, so one buffer can be reused
    /// across frames.
    pub fn render_into(&self, snap: &GameSnapshot, hud: &Hud<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(viewport);
        self.draw_well(fb, &layout);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, &code) in row.iter().enumerate() {
                let (x, y) = (x as u16, y as u16);
                match FillColor::from_code(code) {
                    Some(color) => self.draw_block(fb, &layout, x, y, color),
                    None => self.draw_empty(fb, &layout, x, y),
                }
            }
        }

        if let Some(current) = snap.current {
            self.draw_shape(fb, &layout, &current.cells, current.color);
        }

        if let Some(panel_x) = layout.panel_x {
            self.draw_side_panel(fb, snap, hud, panel_x, layout.y);
        }

        let banner = match snap.status {
            GameStatus::NotStarted => Some(("HYPER TETRIS", "PRESS SPACE")),
            GameStatus::GameOver => Some(("GAME OVER", "SPACE TO RETRY")),
            GameStatus::Playing => None,
        };
        if let Some((title, hint)) = banner {
            draw_centered(fb, &layout, 0, title);
            draw_centered(fb, &layout, 2, hint);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: &Hud<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    /// Background plus box-drawing border around the board
    fn draw_well(&self, fb: &mut FrameBuffer, l: &Layout) {
        let inner = CellStyle::fg(Rgb::new(80, 80, 90)).on(PLAY_BG);
        fb.fill_rect(l.x + 1, l.y + 1, l.w - 2, l.h - 2, ' ', inner);

        let style = CellStyle::fg(BORDER);
        let (right, bottom) = (l.x + l.w - 1, l.y + l.h - 1);
        for x in l.x + 1..right {
            fb.put_char(x, l.y, '─', style);
            fb.put_char(x, bottom, '─', style);
        }
        for y in l.y + 1..bottom {
            fb.put_char(l.x, y, '│', style);
            fb.put_char(right, y, '│', style);
        }
        for (x, y, ch) in [(l.x, l.y, '┌'), (right, l.y, '┐'), (l.x, bottom, '└'), (right, bottom, '┘')] {
            fb.put_char(x, y, ch, style);
        }
    }

    fn draw_shape(&self, fb: &mut FrameBuffer, l: &Layout, cells: &ShapeCells, color: FillColor) {
        // Tiles still above the top edge are not drawn.
        let on_board = cells
            .iter()
            .filter(|&&(x, y)| (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y));
        for &(x, y) in on_board {
            self.draw_block(fb, l, x as u16, y as u16, color);
        }
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, l: &Layout, x: u16, y: u16) {
        let shade = if (x + y) % 2 == 0 { 44 } else { 52 };
        let style = CellStyle::fg(Rgb::new(90, 90, 100))
            .on(Rgb::new(shade, shade, shade + 12))
            .dim();
        self.fill_board_cell(fb, l, x, y, ' ', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, l: &Layout, x: u16, y: u16, color: FillColor) {
        let style = CellStyle::fg(color_rgb(color)).on(PLAY_BG).bold();
        self.fill_board_cell(fb, l, x, y, BLOCK, style);
    }

    fn fill_board_cell(&self, fb: &mut FrameBuffer, l: &Layout, x: u16, y: u16, ch: char, style: CellStyle) {
        let px = l.x + 1 + x * self.cell_w;
        let py = l.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    /// NEXT preview, LEVEL, SCORE, SEED and the driver's cue, top to bottom
    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, hud: &Hud<'_>, x: u16, top: u16) {
        let label = CellStyle::fg(Rgb::TEXT).bold();
        let value = CellStyle::fg(BORDER);

        fb.put_str(x, top, "NEXT", label);
        if let Some(next) = snap.next {
            let style = CellStyle::fg(color_rgb(next.color)).bold();
            for &(dx, dy) in next.preview.iter() {
                let px = x.saturating_add(dx as u16 * self.cell_w);
                let py = top.saturating_add(1 + dy as u16 * self.cell_h);
                fb.fill_rect(px, py, self.cell_w, self.cell_h, BLOCK, style);
            }
        }

        let mut y = top.saturating_add(1 + PREVIEW_ROWS * self.cell_h);
        let rows = [
            ("LEVEL", u64::from(snap.level)),
            ("SCORE", u64::from(snap.score)),
            ("SEED", snap.seed),
        ];
        for (name, number) in rows {
            fb.put_str(x, y, name, label);
            fb.put_u64(x, y.saturating_add(1), number, value);
            y = y.saturating_add(3);
        }

        if let Some(message) = hud.message {
            fb.put_str(x, y, message, CellStyle::fg(CUE).bold());
        }
    }
}

/// Centered text over the board, `line` rows below its middle
fn draw_centered(fb: &mut FrameBuffer, l: &Layout, line: u16, text: &str) {
    let text_w = text.chars().count() as u16;
    let x = l.x.saturating_add(l.w.saturating_sub(text_w) / 2);
    fb.put_str(x, l.center_row(line), text, CellStyle::fg(Rgb::WHITE).bold());
}

/// Terminal color for a fill color.
pub fn color_rgb(color: FillColor) -> Rgb {
    match color {
        FillColor::Orange => Rgb::new(255, 165, 0),
        FillColor::Red => Rgb::new(220, 60, 60),
        FillColor::Green => Rgb::new(90, 210, 110),
        FillColor::Blue => Rgb::new(80, 120, 230),
        FillColor::Violet => Rgb::new(200, 120, 230),
    }
}
