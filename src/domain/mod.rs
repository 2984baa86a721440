pub mod chess;
pub mod clock;
pub mod rules;
pub mod selection;
pub mod status;

pub use chess::{Move, Piece, PieceColor, Square};
pub use clock::{ClockPair, ClockState};
pub use rules::{RulesEngine, ShakmatyRules};
pub use selection::{ClickOutcome, Selection};
pub use status::SessionStatus;
