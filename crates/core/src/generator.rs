//! Shape generator - uniform random shapes
//!
//! Each new shape draws, in order: a rotation, a starting column, a fill color and a kind.
//! The random source is always passed in by the caller.

use rand::Rng;

use crate::shape::Shape;
use crate::types::{FillColor, Rotation, ShapeKind, BOARD_WIDTH, SHAPE_SIZE_X};

/// Builds new falling shapes
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeGenerator;

impl ShapeGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a shape at the top row.
    ///
    /// The column is drawn from `0..BOARD_WIDTH - 2`, which fits the un-rotated
    /// 2-wide mask; rotated footprints are not taken into account.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Shape {
        let rotation = Rotation::from_index(rng.random_range(0..4u8));
        let x = rng.random_range(0..(BOARD_WIDTH - SHAPE_SIZE_X)) as i8;
        let color = FillColor::ALL[rng.random_range(0..FillColor::ALL.len())];
        let kind = ShapeKind::ALL[rng.random_range(0..ShapeKind::ALL.len())];

        Shape::new(kind, x, 0, rotation, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::game_rng;

    #[test]
    fn test_generated_shapes_start_at_top_within_columns() {
        let mut rng = game_rng(7);
        let generator = ShapeGenerator::new();
        for _ in 0..500 {
            let s = generator.generate(&mut rng);
            assert_eq!(s.y, 0);
            assert!(s.x >= 0 && s.x < (BOARD_WIDTH - SHAPE_SIZE_X) as i8);
        }
    }

    #[test]
    fn test_generator_covers_all_kinds_colors_and_rotations() {
        let mut rng = game_rng(99);
        let generator = ShapeGenerator::new();
        let mut kinds = Vec::new();
        let mut colors = Vec::new();
        let mut rotations = Vec::new();
        for _ in 0..1000 {
            let s = generator.generate(&mut rng);
            if !kinds.contains(&s.kind) {
                kinds.push(s.kind);
            }
            if !colors.contains(&s.color) {
                colors.push(s.color);
            }
            if !rotations.contains(&s.rotation) {
                rotations.push(s.rotation);
            }
        }
        assert_eq!(kinds.len(), ShapeKind::ALL.len());
        assert_eq!(colors.len(), FillColor::ALL.len());
        assert_eq!(rotations.len(), 4);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let generator = ShapeGenerator::new();
        let mut a = game_rng(12345);
        let mut b = game_rng(12345);
        for _ in 0..50 {
            assert_eq!(generator.generate(&mut a), generator.generate(&mut b));
        }
    }
}
