//! Snapshot export - builds render-ready view models from a session.

use crate::domain::{ClockState, PieceColor, RulesEngine, Square};
use crate::models::SessionController;
use crate::ui::view_models::{ClockDisplay, MovePairDisplay, Snapshot};

/// Project the session into a snapshot for the renderer.
/// Pure read: calling it twice without input in between gives the same values.
pub fn snapshot<R: RulesEngine>(session: &SessionController<R>) -> Snapshot<'_, R::Position> {
    let rules = session.rules();
    let position = session.position();

    let mut board = [None; Square::COUNT];
    for square in Square::all() {
        board[square.index()] = rules.piece_at(position, square);
    }

    let clocks = session.clocks();
    Snapshot {
        position,
        board,
        selection: session.selection().clone(),
        white_clock: clock_display(PieceColor::White, clocks.state(PieceColor::White)),
        black_clock: clock_display(PieceColor::Black, clocks.state(PieceColor::Black)),
        status: session.status(),
        side_to_move: session.side_to_move(),
        moves: move_pairs(session.history()),
    }
}

fn clock_display(color: PieceColor, state: &ClockState) -> ClockDisplay {
    ClockDisplay {
        color,
        text: format_clock(state.remaining),
        running: state.running,
        expired: state.is_expired(),
    }
}

/// Format seconds as `MM:SS`; negative values show as `00:00`
pub fn format_clock(seconds: f64) -> String {
    let whole = seconds.max(0.0).floor() as u64;
    format!("{:02}:{:02}", whole / 60, whole % 60)
}

/// Group the move history into numbered white/black pairs
pub fn move_pairs(history: &[String]) -> Vec<MovePairDisplay> {
    history
        .chunks(2)
        .enumerate()
        .map(|(i, chunk)| MovePairDisplay {
            move_num: i + 1,
            white: chunk.first().cloned().unwrap_or_default(),
            black: chunk.get(1).cloned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Selection, SessionStatus, ShakmatyRules};
    use crate::ui::board_layout::BoardLayout;
    use std::time::{Duration, Instant};

    fn new_session(now: Instant) -> SessionController<ShakmatyRules> {
        SessionController::new(
            ShakmatyRules,
            ShakmatyRules.initial_position(),
            Duration::from_secs(300),
            BoardLayout::new(100.0, 0.0),
            now,
        )
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(300.0), "05:00");
        assert_eq!(format_clock(59.99), "00:59");
        assert_eq!(format_clock(61.0), "01:01");
        assert_eq!(format_clock(0.0), "00:00");
        assert_eq!(format_clock(-3.2), "00:00");
    }

    #[test]
    fn test_move_pairs() {
        let history: Vec<String> = ["e4", "e5", "Nf3"].iter().map(|s| s.to_string()).collect();
        let pairs = move_pairs(&history);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].move_num, 1);
        assert_eq!(pairs[0].white, "e4");
        assert_eq!(pairs[0].black.as_deref(), Some("e5"));
        assert_eq!(pairs[1].white, "Nf3");
        assert_eq!(pairs[1].black, None);
    }

    #[test]
    fn test_snapshot_of_new_session() {
        let session = new_session(Instant::now());
        let snap = snapshot(&session);

        assert_eq!(snap.board.iter().filter(|p| p.is_some()).count(), 32);
        assert_eq!(snap.white_clock.text, "05:00");
        assert!(snap.white_clock.running);
        assert!(!snap.black_clock.running);
        assert_eq!(snap.status, SessionStatus::InProgress);
        assert_eq!(snap.side_to_move, PieceColor::White);
        assert_eq!(snap.selection, Selection::Empty);
        assert!(snap.moves.is_empty());
    }

    #[test]
    fn test_snapshot_is_idempotent() {
        let t0 = Instant::now();
        let mut session = new_session(t0);
        session.click_square(Square::parse("g1").unwrap(), t0);
        session.frame(t0 + Duration::from_millis(2500));

        let first = snapshot(&session);
        let second = snapshot(&session);
        assert_eq!(first.board, second.board);
        assert_eq!(first.selection, second.selection);
        assert_eq!(first.white_clock, second.white_clock);
        assert_eq!(first.black_clock, second.black_clock);
        assert_eq!(first.status, second.status);
        assert_eq!(first.moves, second.moves);
        assert!(std::ptr::eq(first.position, second.position));
        assert_eq!(first.white_clock.text, "04:57");
    }

    #[test]
    fn test_snapshot_clamps_display_only() {
        let t0 = Instant::now();
        let mut session = new_session(t0);
        session.clocks_mut().set_remaining(PieceColor::White, 0.5);
        session.frame(t0 + Duration::from_secs(2));

        let snap = snapshot(&session);
        assert_eq!(snap.white_clock.text, "00:00");
        assert!(snap.white_clock.expired);
        assert!(!snap.white_clock.running);
        assert_eq!(session.clocks().state(PieceColor::White).remaining, -1.5);
        assert_eq!(snap.status, SessionStatus::BlackWinsOnTime);
    }
}
