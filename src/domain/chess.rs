//! Pure chess domain types and utilities.
//! No GPUI dependencies - this is the domain layer.

use std::fmt;

use shakmaty::{Color as SColor, File, Rank, Role};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    pub fn opposite(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceColor::White => "White",
            PieceColor::Black => "Black",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: PieceColor,
}

impl Piece {
    /// Unicode glyph used by the board renderer
    pub fn glyph(&self) -> &'static str {
        match (self.kind, self.color) {
            (PieceKind::Pawn, PieceColor::White) => "♙",
            (PieceKind::Rook, PieceColor::White) => "♖",
            (PieceKind::Knight, PieceColor::White) => "♘",
            (PieceKind::Bishop, PieceColor::White) => "♗",
            (PieceKind::Queen, PieceColor::White) => "♕",
            (PieceKind::King, PieceColor::White) => "♔",
            (PieceKind::Pawn, PieceColor::Black) => "♟",
            (PieceKind::Rook, PieceColor::Black) => "♜",
            (PieceKind::Knight, PieceColor::Black) => "♞",
            (PieceKind::Bishop, PieceColor::Black) => "♝",
            (PieceKind::Queen, PieceColor::Black) => "♛",
            (PieceKind::King, PieceColor::Black) => "♚",
        }
    }
}

/// A board cell, indexed row-major from the top-left of the rendered board.
///
/// Row 0 is rank 8 and column 0 is file a, so index 0 is a8 and index 63 is h1.
/// The index is always in `0..64`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Square(u8);

impl Square {
    pub const COUNT: usize = 64;

    pub fn new(index: usize) -> Option<Self> {
        (index < Self::COUNT).then_some(Square(index as u8))
    }

    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square((row * 8 + col) as u8))
        } else {
            None
        }
    }

    /// Square at row/col, pulling out-of-range values onto the board edge
    pub fn clamped(row: usize, col: usize) -> Self {
        Square((row.min(7) * 8 + col.min(7)) as u8)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn row(self) -> usize {
        self.index() / 8
    }

    pub fn col(self) -> usize {
        self.index() % 8
    }

    /// All 64 squares in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::COUNT as u8).map(Square)
    }

    /// Squares of one board row, left to right; empty past the last row
    pub fn row_squares(row: usize) -> impl Iterator<Item = Square> {
        (0..8).filter_map(move |col| Self::from_row_col(row, col))
    }

    /// Parse algebraic notation such as `e4`
    pub fn parse(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        let file = chars.next()?;
        let rank = chars.next()?;
        if chars.next().is_some() || !('a'..='h').contains(&file) || !('1'..='8').contains(&rank)
        {
            return None;
        }
        let col = file as usize - 'a' as usize;
        let row = 7 - (rank as usize - '1' as usize);
        Self::from_row_col(row, col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col() as u8) as char;
        let rank = (b'8' - self.row() as u8) as char;
        write!(f, "{file}{rank}")
    }
}

impl From<Square> for shakmaty::Square {
    fn from(square: Square) -> Self {
        to_square(square.row(), square.col())
    }
}

impl From<shakmaty::Square> for Square {
    fn from(square: shakmaty::Square) -> Self {
        let col = square.file() as usize;
        let row = 7 - square.rank() as usize;
        Square((row * 8 + col) as u8)
    }
}

/// A request to move whatever stands on `from` to `to`
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Convert row/col (0-indexed, row 0 = rank 8) to shakmaty Square
pub fn to_square(row: usize, col: usize) -> shakmaty::Square {
    let file = File::new(col as u32);
    let rank = Rank::new(7 - row as u32); // row 0 = rank 8, row 7 = rank 1
    shakmaty::Square::from_coords(file, rank)
}

pub fn shakmaty_to_color(color: SColor) -> PieceColor {
    match color {
        SColor::White => PieceColor::White,
        SColor::Black => PieceColor::Black,
    }
}

/// Convert shakmaty piece to our domain Piece
pub fn shakmaty_to_piece(piece: shakmaty::Piece) -> Piece {
    let kind = match piece.role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    };
    Piece {
        kind,
        color: shakmaty_to_color(piece.color),
    }
}
