//! Session controller - owns one timed game and advances it frame by frame.
//!
//! The controller is the only writer of session state. Input handlers queue
//! [`InputEvent`]s; [`SessionController::frame`] drains them in arrival order,
//! then ticks the clocks and re-evaluates the game status.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::domain::{
    ClickOutcome, ClockPair, Move, PieceColor, RulesEngine, Selection, SessionStatus, Square,
};
use crate::ui::board_layout::BoardLayout;

/// Input delivered by the presentation layer
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum InputEvent {
    Quit,
    /// Pointer press at window coordinates
    Click { x: f32, y: f32 },
}

/// What the frame loop should do after a frame
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FrameOutcome {
    Running,
    /// The game has ended; only a quit request is still acted on
    Finished,
    Quit,
}

pub struct SessionController<R: RulesEngine> {
    rules: R,
    position: R::Position,
    clocks: ClockPair,
    selection: Selection,
    status: SessionStatus,
    layout: BoardLayout,
    pending: VecDeque<InputEvent>,
    /// Notation of every move played, in order
    history: Vec<String>,
}

impl<R: RulesEngine> SessionController<R> {
    /// Start a session from `position`; the side to move starts on the clock
    pub fn new(
        rules: R,
        position: R::Position,
        initial_time: Duration,
        layout: BoardLayout,
        now: Instant,
    ) -> Self {
        let first = rules.side_to_move(&position);
        Self {
            clocks: ClockPair::new(initial_time, first, now),
            rules,
            position,
            selection: Selection::Empty,
            status: SessionStatus::InProgress,
            layout,
            pending: VecDeque::new(),
            history: Vec::new(),
        }
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    pub fn position(&self) -> &R::Position {
        &self.position
    }

    pub fn clocks(&self) -> &ClockPair {
        &self.clocks
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn side_to_move(&self) -> PieceColor {
        self.rules.side_to_move(&self.position)
    }

    /// Queue an event for the next frame
    pub fn push_event(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    /// Run one frame: input first, then clocks, then the end-of-game check
    pub fn frame(&mut self, now: Instant) -> FrameOutcome {
        while let Some(event) = self.pending.pop_front() {
            match event {
                InputEvent::Quit => {
                    self.pending.clear();
                    return FrameOutcome::Quit;
                }
                InputEvent::Click { x, y } => {
                    if !self.status.is_terminal() {
                        let square = self.layout.to_square(x, y);
                        self.click_square(square, now);
                    }
                }
            }
        }

        if self.status.is_terminal() {
            return FrameOutcome::Finished;
        }

        self.clocks.tick(now);
        self.status = SessionStatus::evaluate(&self.clocks, &self.rules, &self.position);
        if self.status.is_terminal() {
            self.finish();
            return FrameOutcome::Finished;
        }
        FrameOutcome::Running
    }

    /// Feed a click on `square` to the selection; returns true if a move was played
    pub fn click_square(&mut self, square: Square, now: Instant) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        match self
            .selection
            .click(&self.rules, &self.position, square)
        {
            ClickOutcome::Submit(mv) => self.submit_move(mv, now),
            ClickOutcome::Selected(_) | ClickOutcome::Deselected | ClickOutcome::Ignored => false,
        }
    }

    /// Play `mv` if the rules engine lists it as legal.
    ///
    /// The mover's clock is settled up to `now` before the turn passes, so the
    /// time since the last frame is charged to the player who was thinking.
    pub fn submit_move(&mut self, mv: Move, now: Instant) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        if !self.rules.legal_moves(&self.position).contains(&mv) {
            debug!("rejected illegal move {mv}");
            return false;
        }

        let notation = self.rules.describe_move(&self.position, mv);
        self.clocks.tick(now);
        self.position = self.rules.apply(&self.position, mv);
        self.selection.clear();
        self.clocks.switch_turn(self.rules.side_to_move(&self.position));

        info!("{} played {notation}", self.side_to_move().opposite().name());
        self.history.push(notation);

        // Clicks queued behind a game-ending move must not act
        self.status = SessionStatus::evaluate(&self.clocks, &self.rules, &self.position);
        if self.status.is_terminal() {
            self.finish();
        }
        true
    }

    fn finish(&mut self) {
        self.clocks.stop();
        self.selection.clear();
        info!("game over: {}", self.status.message());
    }

    #[cfg(test)]
    pub fn clocks_mut(&mut self) -> &mut ClockPair {
        &mut self.clocks
    }
}
