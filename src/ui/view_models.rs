//! View models handed to the renderer.
//!
//! These types are read-only projections of session state. The renderer
//! draws from them and never writes back into the session.

use crate::domain::{Piece, PieceColor, Selection, SessionStatus};

/// One side's clock, ready to draw
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ClockDisplay {
    pub color: PieceColor,
    /// `MM:SS`, clamped at zero
    pub text: String,
    pub running: bool,
    pub expired: bool,
}

/// A numbered row of the move list
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MovePairDisplay {
    pub move_num: usize,
    pub white: String,
    pub black: Option<String>,
}

/// Everything the board view needs for one frame
#[derive(Clone, Debug)]
pub struct Snapshot<'a, P> {
    pub position: &'a P,
    /// Piece placement indexed by square
    pub board: [Option<Piece>; 64],
    pub selection: Selection,
    pub white_clock: ClockDisplay,
    pub black_clock: ClockDisplay,
    pub status: SessionStatus,
    pub side_to_move: PieceColor,
    pub moves: Vec<MovePairDisplay>,
}
