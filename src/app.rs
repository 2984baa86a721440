//! Application setup and window creation.

use anyhow::Context as _;
use gpui::{App, Bounds, TitlebarOptions, WindowBounds, WindowOptions, prelude::*, px, size};
use gpui_component::Root;

use crate::config::SessionConfig;
use crate::models::GameModel;
use crate::ui::theme::{BOARD_PADDING, SIDE_PANEL_WIDTH};
use crate::ui::views::ChessBoardView;

/// Initialize the session and open its window
pub fn run(cx: &mut App, config: SessionConfig) -> anyhow::Result<()> {
    gpui_component::init(cx);

    let game = GameModel::new(&config)?;
    let model = cx.new(|cx| {
        let mut game = game;
        game.start(cx);
        game
    });

    // Board plus padding on every side, side panel to the right
    let board_edge = config.square_size * 8.0 + BOARD_PADDING * 2.0;
    let bounds = Bounds::centered(
        None,
        size(px(board_edge + SIDE_PANEL_WIDTH), px(board_edge)),
        cx,
    );
    cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some("Chess Game".into()),
                ..Default::default()
            }),
            ..Default::default()
        },
        |window, cx| {
            let view = cx.new(|cx| ChessBoardView::new(model, cx));
            cx.new(|cx| Root::new(view, window, cx))
        },
    )
    .context("failed to open the session window")?;

    Ok(())
}
