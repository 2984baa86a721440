//! Per-side countdown clocks.
//!
//! Time is charged from `Instant` deltas rather than a fixed amount per frame,
//! so clock accuracy does not depend on the frame rate.

use std::time::{Duration, Instant};

use crate::domain::chess::PieceColor;

/// Remaining time and run flag for one side
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ClockState {
    /// Seconds left; negative once the flag has fallen
    pub remaining: f64,
    pub running: bool,
}

impl ClockState {
    fn new(initial: Duration, running: bool) -> Self {
        Self {
            remaining: initial.as_secs_f64(),
            running,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.remaining <= 0.0
    }
}

/// Which clocks have run out
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Expiry {
    None,
    White,
    Black,
    Both,
}

/// White and black clocks sharing one last-update timestamp
#[derive(Clone, Debug)]
pub struct ClockPair {
    white: ClockState,
    black: ClockState,
    last_update: Instant,
}

impl ClockPair {
    /// Both sides start with `initial`; `first` is running
    pub fn new(initial: Duration, first: PieceColor, now: Instant) -> Self {
        Self {
            white: ClockState::new(initial, first == PieceColor::White),
            black: ClockState::new(initial, first == PieceColor::Black),
            last_update: now,
        }
    }

    pub fn state(&self, color: PieceColor) -> &ClockState {
        match color {
            PieceColor::White => &self.white,
            PieceColor::Black => &self.black,
        }
    }

    fn state_mut(&mut self, color: PieceColor) -> &mut ClockState {
        match color {
            PieceColor::White => &mut self.white,
            PieceColor::Black => &mut self.black,
        }
    }

    /// The side whose clock is running, if any
    pub fn running(&self) -> Option<PieceColor> {
        if self.white.running {
            Some(PieceColor::White)
        } else if self.black.running {
            Some(PieceColor::Black)
        } else {
            None
        }
    }

    /// Charge the time since the last update to the running side
    pub fn tick(&mut self, now: Instant) {
        let Some(side) = self.running() else {
            return;
        };
        let elapsed = now.saturating_duration_since(self.last_update);
        self.state_mut(side).remaining -= elapsed.as_secs_f64();
        self.last_update = now;
    }

    /// Start `active`'s clock and pause the other one
    pub fn switch_turn(&mut self, active: PieceColor) {
        self.state_mut(active).running = true;
        self.state_mut(active.opposite()).running = false;
    }

    /// Pause both clocks for good
    pub fn stop(&mut self) {
        self.white.running = false;
        self.black.running = false;
    }

    pub fn expired(&self) -> Expiry {
        match (self.white.is_expired(), self.black.is_expired()) {
            (false, false) => Expiry::None,
            (true, false) => Expiry::White,
            (false, true) => Expiry::Black,
            (true, true) => Expiry::Both,
        }
    }

    #[cfg(test)]
    pub fn set_remaining(&mut self, color: PieceColor, seconds: f64) {
        self.state_mut(color).remaining = seconds;
    }
}
