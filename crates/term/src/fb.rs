//! Framebuffer and style types for terminal rendering.
//!
//! Coordinates are terminal columns and rows. All writes clip at the edges, so
//! views can draw without checking the viewport first.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const TEXT: Rgb = Rgb::new(220, 220, 220);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Foreground, background and weight of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    /// Plain style with the given foreground on black
    pub const fn fg(fg: Rgb) -> Self {
        Self {
            fg,
            bg: Rgb::BLACK,
            bold: false,
            dim: false,
        }
    }

    pub const fn on(self, bg: Rgb) -> Self {
        Self { bg, ..self }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn dim(self) -> Self {
        Self { dim: true, ..self }
    }

    pub const fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::fg(Rgb::TEXT)
    }
}

/// A glyph and its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub const BLANK: Cell = CellStyle::fg(Rgb::TEXT).into_cell(' ');
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Row-major grid of cells, reused across frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Change dimensions, keeping the allocation when possible.
    ///
    /// Contents are unspecified afterwards; callers clear before drawing.
    pub fn resize(&mut self, width: u16, height: u16) {
        if (self.width, self.height) != (width, height) {
            self.width = width;
            self.height = height;
            self.cells
                .resize(width as usize * height as usize, Cell::BLANK);
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// The cells of row `y`
    pub fn row(&self, y: u16) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        Some(&self.cells[start..start + self.width as usize])
    }

    /// The cells of row `y` from column `x` to the right edge
    fn row_tail_mut(&mut self, x: u16, y: u16) -> Option<&mut [Cell]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        let end = start + self.width as usize;
        Some(&mut self.cells[start + x as usize..end])
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.row(y)?.get(x as usize).copied()
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.row_tail_mut(x, y).and_then(|tail| tail.first_mut()) {
            *slot = cell;
        }
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, style.into_cell(ch));
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        if let Some(tail) = self.row_tail_mut(x, y) {
            for (slot, ch) in tail.iter_mut().zip(s.chars()) {
                *slot = style.into_cell(ch);
            }
        }
    }

    /// Write a decimal number without allocating.
    pub fn put_u64(&mut self, x: u16, y: u16, value: u64, style: CellStyle) {
        let mut digits = [b'0'; 20];
        let mut len = 0;
        let mut n = value;
        while len == 0 || n > 0 {
            digits[digits.len() - 1 - len] = b'0' + (n % 10) as u8;
            n /= 10;
            len += 1;
        }
        let text = &digits[digits.len() - len..];
        if let Some(tail) = self.row_tail_mut(x, y) {
            for (slot, &d) in tail.iter_mut().zip(text) {
                *slot = style.into_cell(d as char);
            }
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        let cell = style.into_cell(ch);
        for row in y..y.saturating_add(h).min(self.height) {
            if let Some(tail) = self.row_tail_mut(x, row) {
                let n = (w as usize).min(tail.len());
                tail[..n].fill(cell);
            }
        }
    }

    /// Characters of one row, for assertions and debugging.
    pub fn row_text(&self, y: u16) -> String {
        self.row(y)
            .map(|cells| cells.iter().map(|c| c.ch).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_u64_writes_digits() {
        let mut fb = FrameBuffer::new(22, 1);
        fb.put_u64(1, 0, 4096, CellStyle::default());
        assert_eq!(fb.row_text(0), " 4096                 ");

        fb.put_u64(0, 0, 0, CellStyle::default());
        assert_eq!(fb.get(0, 0).unwrap().ch, '0');

        fb.put_u64(0, 0, u64::MAX, CellStyle::default());
        assert_eq!(fb.row_text(0), "18446744073709551615  ");
    }

    #[test]
    fn out_of_range_writes_are_dropped() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_str(1, 1, "abc", CellStyle::default());
        assert_eq!(fb.row_text(1), " a");
        fb.set(5, 5, Cell::default());
        fb.put_str(0, 9, "x", CellStyle::default());
        assert_eq!(fb.row_text(9), "");
    }

    #[test]
    fn fill_rect_clips_to_buffer() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.fill_rect(2, 1, 5, 5, '#', CellStyle::default());
        assert_eq!(fb.row_text(0), "    ");
        assert_eq!(fb.row_text(1), "  ##");
        assert_eq!(fb.row_text(2), "  ##");
    }

    #[test]
    fn resize_keeps_dimensions_consistent() {
        let mut fb = FrameBuffer::new(3, 3);
        fb.resize(5, 2);
        assert_eq!((fb.width(), fb.height()), (5, 2));
        assert_eq!(fb.row(1).map(|r| r.len()), Some(5));
        assert!(fb.row(2).is_none());
    }
}
