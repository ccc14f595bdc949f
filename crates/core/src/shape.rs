//! Shape module - tile masks and the 2x4 rotation transform
//!
//! Every shape is defined on a 2-wide x 4-tall local grid. The mask for each kind is a
//! `'static` table and is never mutated; rotation is applied only when a tile's board
//! position is queried. Copies of a [`Shape`] therefore share nothing mutable.

use crate::types::{FillColor, Rotation, ShapeKind, SHAPE_SIZE_X, SHAPE_SIZE_Y, SHAPE_TILES};

/// Local occupancy grid, indexed `[i][j]` with `i` the column (0..2) and `j` the row (0..4)
pub type TileMask = [[bool; SHAPE_SIZE_Y as usize]; SHAPE_SIZE_X as usize];

/// Board (or local) coordinates of the four occupied tiles
pub type ShapeCells = [(i8, i8); SHAPE_TILES];

const fn mask(tiles: [(usize, usize); SHAPE_TILES]) -> TileMask {
    let mut m = [[false; SHAPE_SIZE_Y as usize]; SHAPE_SIZE_X as usize];
    let mut k = 0;
    while k < SHAPE_TILES {
        m[tiles[k].0][tiles[k].1] = true;
        k += 1;
    }
    m
}

static I_MASK: TileMask = mask([(0, 0), (0, 1), (0, 2), (0, 3)]);
static J_MASK: TileMask = mask([(1, 0), (1, 1), (1, 2), (0, 2)]);
static L_MASK: TileMask = mask([(0, 0), (0, 1), (0, 2), (1, 2)]);
static S_MASK: TileMask = mask([(0, 0), (0, 1), (1, 1), (1, 2)]);
static Z_MASK: TileMask = mask([(1, 0), (1, 1), (0, 1), (0, 2)]);
static T_MASK: TileMask = mask([(0, 1), (1, 0), (1, 1), (1, 2)]);
static O_MASK: TileMask = mask([(0, 0), (0, 1), (1, 0), (1, 1)]);

/// Get the un-rotated tile mask for a shape kind
pub fn tile_mask(kind: ShapeKind) -> &'static TileMask {
    match kind {
        ShapeKind::I => &I_MASK,
        ShapeKind::J => &J_MASK,
        ShapeKind::L => &L_MASK,
        ShapeKind::S => &S_MASK,
        ShapeKind::Z => &Z_MASK,
        ShapeKind::T => &T_MASK,
        ShapeKind::O => &O_MASK,
    }
}

/// Offset of local tile (i, j) under a rotation.
///
/// This is the fixed 2x4 scheme, not a square-matrix rotation:
/// - R0: (i, j)
/// - R1: (2 - j, i)
/// - R2: (1 - i, 3 - j)
/// - R3: (j, 1 - i)
#[inline]
pub fn rotate_offset(i: i8, j: i8, rotation: Rotation) -> (i8, i8) {
    match rotation {
        Rotation::R0 => (i, j),
        Rotation::R1 => (3 - j - 1, i),
        Rotation::R2 => (1 - i, 3 - j),
        Rotation::R3 => (j, 1 - i),
    }
}

/// Occupied local tiles of a kind, column-major
pub fn local_tiles(kind: ShapeKind) -> ShapeCells {
    let m = tile_mask(kind);
    let mut out = [(0i8, 0i8); SHAPE_TILES];
    let mut k = 0;
    for (i, column) in m.iter().enumerate() {
        for (j, &filled) in column.iter().enumerate() {
            if filled {
                out[k] = (i as i8, j as i8);
                k += 1;
            }
        }
    }
    out
}

/// A falling piece.
///
/// Only `x`, `y`, `rotation` and `color` vary per instance; the tiles come from
/// the kind's static mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub kind: ShapeKind,
    pub x: i8,
    pub y: i8,
    pub rotation: Rotation,
    pub color: FillColor,
}

impl Shape {
    pub fn new(kind: ShapeKind, x: i8, y: i8, rotation: Rotation, color: FillColor) -> Self {
        Self {
            kind,
            x,
            y,
            rotation,
            color,
        }
    }

    pub fn tiles(&self) -> &'static TileMask {
        tile_mask(self.kind)
    }

    /// Board cells covered by this shape, after the rotation transform
    pub fn cells(&self) -> ShapeCells {
        local_tiles(self.kind).map(|(i, j)| {
            let (dx, dy) = rotate_offset(i, j, self.rotation);
            (self.x + dx, self.y + dy)
        })
    }

    /// Rotated offsets relative to the origin, shifted so the bounding box starts at (0, 0)
    pub fn preview_cells(&self) -> ShapeCells {
        let offsets = local_tiles(self.kind).map(|(i, j)| rotate_offset(i, j, self.rotation));
        let min_x = offsets.iter().map(|c| c.0).min().unwrap_or(0);
        let min_y = offsets.iter().map(|c| c.1).min().unwrap_or(0);
        offsets.map(|(x, y)| (x - min_x, y - min_y))
    }

    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    pub fn rotated(&self) -> Self {
        Self {
            rotation: self.rotation.rotate_cw(),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut cells: ShapeCells) -> ShapeCells {
        cells.sort();
        cells
    }

    #[test]
    fn test_every_mask_has_four_tiles() {
        for kind in ShapeKind::ALL {
            let count = tile_mask(kind).iter().flatten().filter(|&&t| t).count();
            assert_eq!(count, SHAPE_TILES, "{:?}", kind);
        }
    }

    #[test]
    fn test_rotate_offset_table() {
        assert_eq!(rotate_offset(0, 0, Rotation::R0), (0, 0));
        assert_eq!(rotate_offset(1, 3, Rotation::R1), (-1, 1));
        assert_eq!(rotate_offset(0, 0, Rotation::R1), (2, 0));
        assert_eq!(rotate_offset(0, 0, Rotation::R2), (1, 3));
        assert_eq!(rotate_offset(1, 2, Rotation::R2), (0, 1));
        assert_eq!(rotate_offset(1, 2, Rotation::R3), (2, 0));
        assert_eq!(rotate_offset(0, 3, Rotation::R3), (3, 1));
    }

    #[test]
    fn test_o_shape_cells() {
        let shape = Shape::new(ShapeKind::O, 4, 0, Rotation::R0, FillColor::Red);
        assert_eq!(sorted(shape.cells()), [(4, 0), (4, 1), (5, 0), (5, 1)]);
    }

    #[test]
    fn test_i_shape_rotations() {
        let base = Shape::new(ShapeKind::I, 4, 0, Rotation::R0, FillColor::Red);
        assert_eq!(sorted(base.cells()), [(4, 0), (4, 1), (4, 2), (4, 3)]);

        let r1 = Shape { rotation: Rotation::R1, ..base };
        assert_eq!(sorted(r1.cells()), [(3, 0), (4, 0), (5, 0), (6, 0)]);

        let r2 = Shape { rotation: Rotation::R2, ..base };
        assert_eq!(sorted(r2.cells()), [(5, 0), (5, 1), (5, 2), (5, 3)]);

        let r3 = Shape { rotation: Rotation::R3, ..base };
        assert_eq!(sorted(r3.cells()), [(4, 1), (5, 1), (6, 1), (7, 1)]);
    }

    #[test]
    fn test_four_rotations_restore_cells() {
        for kind in ShapeKind::ALL {
            let start = Shape::new(kind, 4, 4, Rotation::R2, FillColor::Blue);
            let mut s = start;
            for _ in 0..4 {
                s = s.rotated();
            }
            assert_eq!(s, start);
            assert_eq!(s.cells(), start.cells());
        }
    }

    #[test]
    fn test_copies_do_not_alias() {
        let next = Shape::new(ShapeKind::T, 2, 0, Rotation::R0, FillColor::Violet);
        let mut current = next;
        current.x += 3;
        current.rotation = current.rotation.rotate_cw();

        assert_eq!(next.x, 2);
        assert_eq!(next.rotation, Rotation::R0);
        assert!(std::ptr::eq(next.tiles(), current.tiles()));
    }

    #[test]
    fn test_preview_cells_start_at_origin() {
        for kind in ShapeKind::ALL {
            for rotation in Rotation::ALL {
                let s = Shape::new(kind, 0, 0, rotation, FillColor::Green);
                let p = s.preview_cells();
                assert_eq!(p.iter().map(|c| c.0).min(), Some(0));
                assert_eq!(p.iter().map(|c| c.1).min(), Some(0));
            }
        }
    }
}
