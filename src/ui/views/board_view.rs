//! Chess board view - the board with click-to-move input and the side panel.

use gpui::{
    Context, Entity, MouseButton, MouseDownEvent, Subscription, Window, div, prelude::*, px, rgb,
};

use crate::domain::Square;
use crate::models::{GameModel, InputEvent};
use crate::ui::components::render_square;
use crate::ui::display::snapshot;
use crate::ui::theme::{BOARD_PADDING, Highlight, PANEL_BG, SIDE_PANEL_WIDTH};
use crate::ui::views::render_side_panel;

/// The main chess board view that observes a GameModel
pub struct ChessBoardView {
    model: Entity<GameModel>,
    _subscription: Subscription,
}

impl ChessBoardView {
    pub fn new(model: Entity<GameModel>, cx: &mut Context<Self>) -> Self {
        let _subscription = cx.observe(&model, |_, _, cx| cx.notify());
        Self {
            model,
            _subscription,
        }
    }
}

impl Render for ChessBoardView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let model_down = self.model.clone();
        let model_quit = self.model.clone();

        let game = self.model.read(cx);
        let session = game.session();
        let square_size = session.layout().square_size;
        let board_total_size = session.layout().board_total_size();
        let snap = snapshot(session);

        let selected = snap.selection.selected_square();
        let targets = snap.selection.targets();
        let highlight_of = |square: Square| {
            if selected == Some(square) {
                Highlight::Selected
            } else if targets.contains(&square) {
                Highlight::Target
            } else {
                Highlight::None
            }
        };

        let board = div()
            .flex_shrink_0()
            .flex()
            .flex_col()
            .w(px(board_total_size))
            .h(px(board_total_size))
            .overflow_hidden()
            .children((0..8).map(|row| {
                div().flex().flex_shrink_0().children(Square::row_squares(row).map(|square| {
                    render_square(
                        square,
                        snap.board[square.index()],
                        highlight_of(square),
                        square_size,
                    )
                }))
            }))
            // Clicks are queued and handled on the next frame
            .on_mouse_down(
                MouseButton::Left,
                move |ev: &MouseDownEvent, _window, cx| {
                    model_down.update(cx, |game, _cx| {
                        game.push_event(InputEvent::Click {
                            x: ev.position.x.into(),
                            y: ev.position.y.into(),
                        });
                    });
                },
            );

        let side_panel = render_side_panel(&snap, move |cx| {
            model_quit.update(cx, |game, _cx| game.push_event(InputEvent::Quit));
        });

        div()
            .size_full()
            .flex()
            .bg(rgb(PANEL_BG))
            .child(div().flex_shrink_0().p(px(BOARD_PADDING)).child(board))
            .child(
                div()
                    .w(px(SIDE_PANEL_WIDTH))
                    .h_full()
                    .py(px(BOARD_PADDING))
                    .pr(px(BOARD_PADDING))
                    .child(side_panel),
            )
    }
}
