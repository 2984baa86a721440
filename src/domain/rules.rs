//! Rules engine seam.
//!
//! The session never inspects a position directly. Everything it needs to know
//! about legality, piece placement and game end goes through [`RulesEngine`].
//! [`ShakmatyRules`] is the implementation backed by the `shakmaty` crate.

use anyhow::Context as _;
use log::warn;
use shakmaty::fen::Fen;
use shakmaty::san::San;
use shakmaty::{CastlingMode, Chess, File, Move as SMove, Position, Role};

use crate::domain::chess::{Move, Piece, PieceColor, Square, shakmaty_to_color, shakmaty_to_piece};

/// Query and update interface for chess rules.
///
/// Implementations are authoritative and total: every query answers, and a
/// query about a square that holds nothing answers "no piece" or an empty set.
pub trait RulesEngine {
    type Position: Clone;

    fn initial_position(&self) -> Self::Position;

    /// All legal moves, with castling expressed as the king's destination
    fn legal_moves(&self, position: &Self::Position) -> Vec<Move>;

    /// Destinations of the legal moves starting on `from`, in generation order
    fn legal_moves_from(&self, position: &Self::Position, from: Square) -> Vec<Square> {
        let mut targets = Vec::new();
        for m in self.legal_moves(position) {
            if m.from == from && !targets.contains(&m.to) {
                targets.push(m.to);
            }
        }
        targets
    }

    fn side_to_move(&self, position: &Self::Position) -> PieceColor;

    fn piece_at(&self, position: &Self::Position, square: Square) -> Option<Piece>;

    /// Play `mv`, which must be legal in `position`
    fn apply(&self, position: &Self::Position, mv: Move) -> Self::Position;

    fn is_checkmate(&self, position: &Self::Position) -> bool;

    fn is_stalemate(&self, position: &Self::Position) -> bool;

    fn is_insufficient_material(&self, position: &Self::Position) -> bool;

    /// Human-readable notation for `mv` played from `position`
    fn describe_move(&self, _position: &Self::Position, mv: Move) -> String {
        mv.to_string()
    }
}

/// Standard chess rules provided by shakmaty
#[derive(Clone, Copy, Debug, Default)]
pub struct ShakmatyRules;

impl ShakmatyRules {
    /// Build a position from a FEN string
    pub fn position_from_fen(fen: &str) -> anyhow::Result<Chess> {
        let parsed: Fen = fen
            .parse()
            .with_context(|| format!("invalid FEN `{fen}`"))?;
        let position: Chess = parsed
            .into_position(CastlingMode::Standard)
            .with_context(|| format!("FEN `{fen}` is not a legal position"))?;
        Ok(position)
    }

    /// From/to squares as a user would click them.
    ///
    /// Drops are not part of standard chess and yield `None`.
    fn endpoints(m: &SMove) -> Option<(shakmaty::Square, shakmaty::Square)> {
        match m {
            SMove::Normal { from, to, .. } => Some((*from, *to)),
            SMove::EnPassant { from, to, .. } => Some((*from, *to)),
            SMove::Castle { king, rook, .. } => {
                // King moves two squares towards the rook (g1/g8 or c1/c8)
                let king_dest = if rook.file() == File::H {
                    shakmaty::Square::from_coords(File::G, rook.rank())
                } else {
                    shakmaty::Square::from_coords(File::C, rook.rank())
                };
                Some((*king, king_dest))
            }
            SMove::Put { .. } => None,
        }
    }

    /// Find the shakmaty move matching `mv`, auto-promoting pawns to a queen
    fn find_legal(position: &Chess, mv: Move) -> Option<SMove> {
        let from_sq: shakmaty::Square = mv.from.into();
        let to_sq: shakmaty::Square = mv.to.into();

        let mut found = None;
        for m in &position.legal_moves() {
            if Self::endpoints(m) != Some((from_sq, to_sq)) {
                continue;
            }
            match m {
                SMove::Normal {
                    promotion: Some(promoted),
                    ..
                } => {
                    if *promoted == Role::Queen {
                        return Some(m.clone());
                    }
                    found.get_or_insert_with(|| m.clone());
                }
                _ => return Some(m.clone()),
            }
        }
        found
    }
}

impl RulesEngine for ShakmatyRules {
    type Position = Chess;

    fn initial_position(&self) -> Chess {
        Chess::default()
    }

    fn legal_moves(&self, position: &Chess) -> Vec<Move> {
        position
            .legal_moves()
            .iter()
            .filter_map(Self::endpoints)
            .map(|(from, to)| Move::new(from.into(), to.into()))
            .collect()
    }

    fn side_to_move(&self, position: &Chess) -> PieceColor {
        shakmaty_to_color(position.turn())
    }

    fn piece_at(&self, position: &Chess, square: Square) -> Option<Piece> {
        position
            .board()
            .piece_at(square.into())
            .map(shakmaty_to_piece)
    }

    fn apply(&self, position: &Chess, mv: Move) -> Chess {
        let Some(m) = Self::find_legal(position, mv) else {
            warn!("rules engine asked to play {mv}, which is not legal here");
            return position.clone();
        };
        match position.clone().play(m) {
            Ok(next) => next,
            Err(err) => {
                warn!("rules engine failed to play {mv}: {err}");
                position.clone()
            }
        }
    }

    fn is_checkmate(&self, position: &Chess) -> bool {
        position.is_checkmate()
    }

    fn is_stalemate(&self, position: &Chess) -> bool {
        position.is_stalemate()
    }

    fn is_insufficient_material(&self, position: &Chess) -> bool {
        position.is_insufficient_material()
    }

    fn describe_move(&self, position: &Chess, mv: Move) -> String {
        let Some(m) = Self::find_legal(position, mv) else {
            return mv.to_string();
        };
        let san = San::from_move(position, m.clone());
        let suffix = match position.clone().play(m) {
            Ok(next) if next.is_checkmate() => "#",
            Ok(next) if next.is_check() => "+",
            _ => "",
        };
        format!("{san}{suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chess::PieceKind;

    fn sq(name: &str) -> Square {
        Square::parse(name).unwrap()
    }

    #[test]
    fn test_initial_position() {
        let rules = ShakmatyRules;
        let pos = rules.initial_position();
        assert_eq!(rules.legal_moves(&pos).len(), 20);
        assert_eq!(rules.side_to_move(&pos), PieceColor::White);
        assert_eq!(
            rules.piece_at(&pos, sq("e1")),
            Some(Piece {
                kind: PieceKind::King,
                color: PieceColor::White,
            })
        );
        assert_eq!(rules.piece_at(&pos, sq("e4")), None);
    }

    #[test]
    fn test_legal_moves_from_empty_square() {
        let rules = ShakmatyRules;
        let pos = rules.initial_position();
        assert!(rules.legal_moves_from(&pos, sq("e4")).is_empty());
        assert!(rules.legal_moves_from(&pos, sq("e7")).is_empty()); // not black's turn
    }

    #[test]
    fn test_castling_targets_king_destination() {
        let rules = ShakmatyRules;
        let pos = ShakmatyRules::position_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let targets = rules.legal_moves_from(&pos, sq("e1"));
        assert!(targets.contains(&sq("g1")));
        assert!(targets.contains(&sq("c1")));

        let next = rules.apply(&pos, Move::new(sq("e1"), sq("g1")));
        assert_eq!(
            rules.piece_at(&next, sq("g1")).map(|p| p.kind),
            Some(PieceKind::King)
        );
        assert_eq!(
            rules.piece_at(&next, sq("f1")).map(|p| p.kind),
            Some(PieceKind::Rook)
        );
        assert_eq!(rules.piece_at(&next, sq("h1")), None);
    }

    #[test]
    fn test_promotion_targets_deduplicated_and_queen() {
        let rules = ShakmatyRules;
        let pos = ShakmatyRules::position_from_fen("8/P6k/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(rules.legal_moves_from(&pos, sq("a7")), vec![sq("a8")]);

        let mv = Move::new(sq("a7"), sq("a8"));
        assert_eq!(rules.describe_move(&pos, mv), "a8=Q");
        let next = rules.apply(&pos, mv);
        assert_eq!(
            rules.piece_at(&next, sq("a8")).map(|p| p.kind),
            Some(PieceKind::Queen)
        );
    }

    #[test]
    fn test_apply_illegal_move_keeps_position() {
        let rules = ShakmatyRules;
        let pos = rules.initial_position();
        let next = rules.apply(&pos, Move::new(sq("e2"), sq("e5")));
        assert_eq!(rules.side_to_move(&next), PieceColor::White);
        assert!(rules.piece_at(&next, sq("e2")).is_some());
    }

    #[test]
    fn test_terminal_queries() {
        let rules = ShakmatyRules;
        let mate = ShakmatyRules::position_from_fen(
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
        )
        .unwrap();
        assert!(rules.is_checkmate(&mate));

        let stalemate = ShakmatyRules::position_from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(rules.is_stalemate(&stalemate));

        let bare_kings = ShakmatyRules::position_from_fen("8/8/8/4k3/8/8/8/4K3 w - - 0 1").unwrap();
        assert!(rules.is_insufficient_material(&bare_kings));
    }

    #[test]
    fn test_invalid_fen() {
        assert!(ShakmatyRules::position_from_fen("not a fen").is_err());
    }
}
