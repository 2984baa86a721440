//! Board layout calculations - maps window pixels to squares and back.

use crate::domain::Square;

/// Fixed-size board drawn at `origin` pixels from the window's top-left corner
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BoardLayout {
    pub square_size: f32,
    pub origin: f32,
}

impl BoardLayout {
    pub fn new(square_size: f32, origin: f32) -> Self {
        Self {
            square_size,
            origin,
        }
    }

    /// Square under a window position.
    ///
    /// Positions past the board edge are clamped onto the nearest border square.
    pub fn to_square(&self, x: f32, y: f32) -> Square {
        Square::clamped(self.cell(y), self.cell(x))
    }

    /// Window position of a square's top-left corner
    pub fn to_pixel(&self, square: Square) -> (f32, f32) {
        (
            self.origin + square.col() as f32 * self.square_size,
            self.origin + square.row() as f32 * self.square_size,
        )
    }

    /// Total edge length of the board (8 squares)
    pub fn board_total_size(&self) -> f32 {
        self.square_size * 8.0
    }

    fn cell(&self, coord: f32) -> usize {
        let offset = (coord - self.origin).max(0.0);
        (offset / self.square_size) as usize
    }
}
