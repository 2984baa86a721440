//! Square selection state machine.

use crate::domain::chess::{Move, Square};
use crate::domain::rules::RulesEngine;

/// What the player currently has picked up
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum Selection {
    #[default]
    Empty,
    PieceSelected {
        square: Square,
        /// Legal destinations for the selected piece
        targets: Vec<Square>,
    },
}

/// Result of feeding one click to the selection
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ClickOutcome {
    Ignored,
    Selected(Square),
    Deselected,
    /// The click completes a move; the caller decides whether it is accepted
    Submit(Move),
}

impl Selection {
    pub fn selected_square(&self) -> Option<Square> {
        match self {
            Selection::Empty => None,
            Selection::PieceSelected { square, .. } => Some(*square),
        }
    }

    pub fn targets(&self) -> &[Square] {
        match self {
            Selection::Empty => &[],
            Selection::PieceSelected { targets, .. } => targets,
        }
    }

    pub fn clear(&mut self) {
        *self = Selection::Empty;
    }

    /// Handle a click on `clicked`.
    ///
    /// A submitted move leaves the selection in place; the caller clears it
    /// once the move has been accepted.
    pub fn click<R: RulesEngine>(
        &mut self,
        rules: &R,
        position: &R::Position,
        clicked: Square,
    ) -> ClickOutcome {
        let (selected, is_target) = match self {
            Selection::Empty => return self.try_select(rules, position, clicked),
            Selection::PieceSelected { square, targets } => (*square, targets.contains(&clicked)),
        };

        if selected == clicked {
            self.clear();
            ClickOutcome::Deselected
        } else if is_target {
            ClickOutcome::Submit(Move::new(selected, clicked))
        } else {
            // Another piece of the mover switches the selection, anything else is ignored
            self.try_select(rules, position, clicked)
        }
    }

    fn try_select<R: RulesEngine>(
        &mut self,
        rules: &R,
        position: &R::Position,
        clicked: Square,
    ) -> ClickOutcome {
        let owned = rules
            .piece_at(position, clicked)
            .is_some_and(|piece| piece.color == rules.side_to_move(position));
        if !owned {
            return ClickOutcome::Ignored;
        }
        *self = Selection::PieceSelected {
            square: clicked,
            targets: rules.legal_moves_from(position, clicked),
        };
        ClickOutcome::Selected(clicked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rules::ShakmatyRules;

    fn sq(name: &str) -> Square {
        Square::parse(name).unwrap()
    }

    #[test]
    fn test_empty_click_on_non_owned_square_stays_empty() {
        let rules = ShakmatyRules;
        let pos = rules.initial_position();
        let side = rules.side_to_move(&pos);

        for square in Square::all() {
            let owned = rules.piece_at(&pos, square).is_some_and(|p| p.color == side);
            if owned {
                continue;
            }
            let mut selection = Selection::Empty;
            assert_eq!(selection.click(&rules, &pos, square), ClickOutcome::Ignored);
            assert_eq!(selection, Selection::Empty);
        }
    }

    #[test]
    fn test_select_own_piece_caches_targets() {
        let rules = ShakmatyRules;
        let pos = rules.initial_position();
        let mut selection = Selection::Empty;

        assert_eq!(
            selection.click(&rules, &pos, sq("g1")),
            ClickOutcome::Selected(sq("g1"))
        );
        assert_eq!(selection.selected_square(), Some(sq("g1")));
        let mut targets = selection.targets().to_vec();
        targets.sort();
        assert_eq!(targets, vec![sq("f3"), sq("h3")]);
    }

    #[test]
    fn test_reclick_deselects() {
        let rules = ShakmatyRules;
        let pos = rules.initial_position();
        let mut selection = Selection::Empty;

        selection.click(&rules, &pos, sq("e2"));
        assert_eq!(selection.click(&rules, &pos, sq("e2")), ClickOutcome::Deselected);
        assert_eq!(selection, Selection::Empty);
    }

    #[test]
    fn test_target_click_submits_move() {
        let rules = ShakmatyRules;
        let pos = rules.initial_position();
        let mut selection = Selection::Empty;

        selection.click(&rules, &pos, sq("e2"));
        assert_eq!(
            selection.click(&rules, &pos, sq("e4")),
            ClickOutcome::Submit(Move::new(sq("e2"), sq("e4")))
        );
        assert_eq!(selection.selected_square(), Some(sq("e2")));
    }

    #[test]
    fn test_non_target_click_is_ignored() {
        let rules = ShakmatyRules;
        let pos = rules.initial_position();
        let mut selection = Selection::Empty;

        selection.click(&rules, &pos, sq("e2"));
        let before = selection.clone();
        assert_eq!(selection.click(&rules, &pos, sq("e5")), ClickOutcome::Ignored);
        assert_eq!(selection.click(&rules, &pos, sq("e7")), ClickOutcome::Ignored);
        assert_eq!(selection, before);
    }

    #[test]
    fn test_clicking_other_own_piece_reselects() {
        let rules = ShakmatyRules;
        let pos = rules.initial_position();
        let mut selection = Selection::Empty;

        selection.click(&rules, &pos, sq("e2"));
        assert_eq!(
            selection.click(&rules, &pos, sq("d2")),
            ClickOutcome::Selected(sq("d2"))
        );
        assert!(selection.targets().contains(&sq("d4")));
    }
}
