//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Each frame is compared with the one before it and only the changed runs of
//! cells are written. A size change (or [`TerminalRenderer::invalidate`]) forces
//! a full redraw.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

const BELL: u8 = 0x07;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Last frame written, used as the diff base
    shown: Option<FrameBuffer>,
    buf: Vec<u8>,
    /// Whether the terminal reports key release and repeat events
    key_events: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            buf: Vec::with_capacity(16 * 1024),
            key_events: false,
        }
    }

    /// Switch to raw mode on the alternate screen.
    ///
    /// Asks for release and repeat key events when the terminal supports them.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.key_events = terminal::supports_keyboard_enhancement().unwrap_or(false);
        self.buf.clear();
        self.buf
            .queue(terminal::EnterAlternateScreen)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?;
        if self.key_events {
            self.buf.queue(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
        }
        self.flush()
    }

    /// Restore the terminal. Safe to call after a failed frame.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        if self.key_events {
            self.buf.queue(PopKeyboardEnhancementFlags)?;
            self.key_events = false;
        }
        reset_style(&mut self.buf)?;
        self.buf
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Ring the terminal bell; the driver's stand-in for sound cues.
    pub fn bell(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.push(BELL);
        self.flush()
    }

    /// Draw a framebuffer, swapping it with the previous frame.
    ///
    /// Callers keep one `FrameBuffer` and pass it in every frame; after the call
    /// it holds the previous frame's cells and can be re-rendered into.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut previous = match self.shown.take() {
            Some(shown) if same_size(&shown, fb) => {
                encode_diff_into(&shown, fb, &mut self.buf)?;
                shown
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        self.flush()?;

        std::mem::swap(&mut previous, fb);
        self.shown = Some(previous);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out` without touching stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut pen = Pen::default();
    for y in 0..fb.height() {
        pen.run(out, fb, 0, y, fb.width())?;
    }
    reset_style(out)
}

/// Encode only the runs that differ between `prev` and `next` into `out`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = Pen::default();
    for_each_changed_run(prev, next, |x, y, len| pen.run(out, next, x, y, len))?;
    reset_style(out)
}

/// Remembers the last style written so runs only emit style changes.
#[derive(Default)]
struct Pen {
    style: Option<CellStyle>,
}

impl Pen {
    fn run(&mut self, out: &mut Vec<u8>, fb: &FrameBuffer, x: u16, y: u16, len: u16) -> Result<()> {
        let Some(row) = fb.row(y) else {
            return Ok(());
        };
        out.queue(cursor::MoveTo(x, y))?;
        for cell in row.iter().skip(x as usize).take(len as usize) {
            if self.style != Some(cell.style) {
                write_style(out, cell.style)?;
                self.style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    }
}

fn write_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(color(style.fg)))?
        .queue(SetBackgroundColor(color(style.bg)))?
        .queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn reset_style(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn same_size(a: &FrameBuffer, b: &FrameBuffer) -> bool {
    (a.width(), a.height()) == (b.width(), b.height())
}

/// Call `f(x, y, len)` for every maximal run of cells that differ.
///
/// Buffers of different sizes report every row as one run.
fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    for y in 0..next.height() {
        let (Some(old), Some(new)) = (prev.row(y), next.row(y)) else {
            f(0, y, next.width())?;
            continue;
        };
        if !same_size(prev, next) {
            f(0, y, next.width())?;
            continue;
        }

        let mut start: Option<usize> = None;
        for (x, (a, b)) in old.iter().zip(new).enumerate() {
            match (a != b, start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    f(s as u16, y, (x - s) as u16)?;
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            f(s as u16, y, (new.len() - s) as u16)?;
        }
    }
    Ok(())
}
