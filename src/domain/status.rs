//! Game end detection.

use crate::domain::clock::{ClockPair, Expiry};
use crate::domain::rules::RulesEngine;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SessionStatus {
    #[default]
    InProgress,
    WhiteWinsOnTime,
    BlackWinsOnTime,
    DrawOnTime,
    Checkmate,
    Stalemate,
    DrawInsufficientMaterial,
}

impl SessionStatus {
    pub fn is_terminal(self) -> bool {
        self != SessionStatus::InProgress
    }

    /// Announcement shown to the players
    pub fn message(self) -> &'static str {
        match self {
            SessionStatus::InProgress => "Game in progress",
            SessionStatus::WhiteWinsOnTime => "White wins on time!",
            SessionStatus::BlackWinsOnTime => "Black wins on time!",
            SessionStatus::DrawOnTime => "Draw on time!",
            SessionStatus::Checkmate => "Checkmate!",
            SessionStatus::Stalemate => "Stalemate!",
            SessionStatus::DrawInsufficientMaterial => "Draw due to insufficient material!",
        }
    }

    /// Status for the current clocks and position.
    ///
    /// A fallen flag ends the game before the board is looked at, so a
    /// timeout wins over a checkmate reached in the same frame.
    pub fn evaluate<R: RulesEngine>(
        clocks: &ClockPair,
        rules: &R,
        position: &R::Position,
    ) -> SessionStatus {
        match clocks.expired() {
            Expiry::Both => return SessionStatus::DrawOnTime,
            Expiry::White => return SessionStatus::BlackWinsOnTime,
            Expiry::Black => return SessionStatus::WhiteWinsOnTime,
            Expiry::None => {}
        }

        if rules.is_checkmate(position) {
            SessionStatus::Checkmate
        } else if rules.is_stalemate(position) {
            SessionStatus::Stalemate
        } else if rules.is_insufficient_material(position) {
            SessionStatus::DrawInsufficientMaterial
        } else {
            SessionStatus::InProgress
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chess::PieceColor;
    use crate::domain::rules::ShakmatyRules;
    use std::time::{Duration, Instant};

    const FOOLS_MATE: &str = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";

    fn clocks() -> ClockPair {
        ClockPair::new(Duration::from_secs(300), PieceColor::White, Instant::now())
    }

    #[test]
    fn test_in_progress() {
        let rules = ShakmatyRules;
        let status = SessionStatus::evaluate(&clocks(), &rules, &rules.initial_position());
        assert_eq!(status, SessionStatus::InProgress);
        assert!(!status.is_terminal());
    }

    #[test]
    fn test_single_expiry_awards_other_side() {
        let rules = ShakmatyRules;
        let pos = rules.initial_position();

        let mut white_out = clocks();
        white_out.set_remaining(PieceColor::White, 0.0);
        assert_eq!(
            SessionStatus::evaluate(&white_out, &rules, &pos),
            SessionStatus::BlackWinsOnTime
        );

        let mut black_out = clocks();
        black_out.set_remaining(PieceColor::Black, -0.25);
        assert_eq!(
            SessionStatus::evaluate(&black_out, &rules, &pos),
            SessionStatus::WhiteWinsOnTime
        );
    }

    #[test]
    fn test_both_expired_is_draw() {
        let rules = ShakmatyRules;
        let mut both = clocks();
        both.set_remaining(PieceColor::White, 0.0);
        both.set_remaining(PieceColor::Black, -1.0);
        assert_eq!(
            SessionStatus::evaluate(&both, &rules, &rules.initial_position()),
            SessionStatus::DrawOnTime
        );
    }

    #[test]
    fn test_clock_checked_before_board() {
        let rules = ShakmatyRules;
        let mated = ShakmatyRules::position_from_fen(FOOLS_MATE).unwrap();
        assert_eq!(
            SessionStatus::evaluate(&clocks(), &rules, &mated),
            SessionStatus::Checkmate
        );

        let mut black_out = clocks();
        black_out.set_remaining(PieceColor::Black, 0.0);
        assert_eq!(
            SessionStatus::evaluate(&black_out, &rules, &mated),
            SessionStatus::WhiteWinsOnTime
        );
    }

    #[test]
    fn test_board_terminal_conditions() {
        let rules = ShakmatyRules;
        let stalemate = ShakmatyRules::position_from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(
            SessionStatus::evaluate(&clocks(), &rules, &stalemate),
            SessionStatus::Stalemate
        );

        let bare_kings = ShakmatyRules::position_from_fen("8/8/8/4k3/8/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(
            SessionStatus::evaluate(&clocks(), &rules, &bare_kings),
            SessionStatus::DrawInsufficientMaterial
        );
    }
}
