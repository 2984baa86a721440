mod game;
pub mod session;

pub use game::GameModel;
pub use session::{InputEvent, SessionController};
