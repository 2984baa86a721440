//! Game model - the gpui entity that owns the session and paces its frames.
//!
//! Architecture:
//! - Mouse handlers only queue [`InputEvent`]s on the session
//! - A gpui task wakes once per frame interval and runs one session frame
//! - Every frame notifies observers so the board view re-renders

use std::time::{Duration, Instant};

use gpui::{AsyncApp, Context, Task, WeakEntity};
use log::info;
use shakmaty::Chess;

use crate::config::SessionConfig;
use crate::domain::{RulesEngine, ShakmatyRules};
use crate::models::session::{FrameOutcome, InputEvent, SessionController};
use crate::ui::board_layout::BoardLayout;
use crate::ui::theme::BOARD_PADDING;

pub struct GameModel {
    session: SessionController<ShakmatyRules>,
    /// Time between two frames
    frame_interval: Duration,
    /// Whether the frame loop has been started
    running: bool,
    /// Frame loop task (kept alive while the model exists)
    _frame_task: Option<Task<()>>,
}

impl GameModel {
    pub fn new(config: &SessionConfig) -> anyhow::Result<Self> {
        let rules = ShakmatyRules;
        let position: Chess = match &config.start_fen {
            Some(fen) => ShakmatyRules::position_from_fen(fen)?,
            None => rules.initial_position(),
        };
        let layout = BoardLayout::new(config.square_size, BOARD_PADDING);
        let session = SessionController::new(
            rules,
            position,
            config.initial_time()?,
            layout,
            Instant::now(),
        );
        info!(
            "new session: {} to move, {:.0}s per side, {} fps",
            session.side_to_move().name(),
            config.initial_time_secs,
            config.frame_rate
        );

        Ok(Self {
            session,
            frame_interval: config.frame_interval(),
            running: false,
            _frame_task: None,
        })
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn session(&self) -> &SessionController<ShakmatyRules> {
        &self.session
    }

    /// Queue an input event; it is processed on the next frame
    pub fn push_event(&mut self, event: InputEvent) {
        self.session.push_event(event);
    }

    /// Start the frame loop.
    ///
    /// Must be called from a Context<GameModel> to spawn the background task.
    pub fn start(&mut self, cx: &mut Context<Self>) {
        if self.running {
            return;
        }
        self.running = true;
        let interval = self.frame_interval;
        let task = cx.spawn(async move |weak_entity: WeakEntity<GameModel>, cx: &mut AsyncApp| {
            Self::run_frame_loop(weak_entity, interval, cx).await;
        });
        self._frame_task = Some(task);
    }

    async fn run_frame_loop(
        weak_entity: WeakEntity<GameModel>,
        interval: Duration,
        cx: &mut AsyncApp,
    ) {
        loop {
            cx.background_executor().timer(interval).await;

            // If the entity is gone the window was closed
            let outcome = weak_entity.update(cx, |game, cx| {
                let outcome = game.session.frame(Instant::now());
                if outcome == FrameOutcome::Quit {
                    game.running = false;
                }
                cx.notify();
                outcome
            });

            match outcome {
                Ok(FrameOutcome::Running | FrameOutcome::Finished) => continue,
                Ok(FrameOutcome::Quit) => {
                    info!("quit requested");
                    let _ = cx.update(|cx| cx.quit());
                    break;
                }
                Err(_) => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_model_is_idle() {
        let game = GameModel::new(&SessionConfig::default()).unwrap();
        assert!(!game.is_running());
        assert_eq!(game.frame_interval, Duration::from_secs_f64(1.0 / 15.0));
    }

    #[test]
    fn test_oversized_clock_is_an_error() {
        let config = SessionConfig {
            initial_time_secs: 1e20,
            ..SessionConfig::default()
        };
        assert!(GameModel::new(&config).is_err());
    }
}
