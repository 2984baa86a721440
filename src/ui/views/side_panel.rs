//! Side panel - clocks, game status, move history and the quit control.

use gpui::{App, Div, div, prelude::*, px, rgb};
use gpui_component::button::{Button, ButtonVariants};

use crate::ui::theme::{
    BORDER_COLOR, CLOCK_ACTIVE_BG, CLOCK_EXPIRED, MOVE_LIST_BG, STATUS_OVER, TEXT_PRIMARY,
    TEXT_SECONDARY,
};
use crate::ui::view_models::{ClockDisplay, MovePairDisplay, Snapshot};

/// Render the side panel for one snapshot.
/// `on_quit` runs when the player presses the quit button.
pub fn render_side_panel<P>(
    snap: &Snapshot<'_, P>,
    on_quit: impl Fn(&mut App) + 'static,
) -> Div {
    let status_text = if snap.status.is_terminal() {
        snap.status.message().to_string()
    } else {
        format!("{} to move", snap.side_to_move.name())
    };
    let status_color = if snap.status.is_terminal() {
        STATUS_OVER
    } else {
        TEXT_SECONDARY
    };

    let quit_button = Button::new("quit-session")
        .label("Quit")
        .danger()
        .compact()
        .on_click(move |_, _, cx| on_quit(cx));

    div()
        .size_full()
        .flex()
        .flex_col()
        .gap_2()
        // Black sits at the top of the board, so its clock comes first
        .child(render_clock(&snap.black_clock))
        .child(render_clock(&snap.white_clock))
        .child(
            div()
                .py_2()
                .text_color(rgb(status_color))
                .font_weight(gpui::FontWeight::SEMIBOLD)
                .child(status_text),
        )
        .child(render_move_list(&snap.moves))
        .child(div().flex().justify_end().child(quit_button))
}

fn render_clock(clock: &ClockDisplay) -> impl IntoElement {
    let text_color = if clock.expired {
        CLOCK_EXPIRED
    } else {
        TEXT_PRIMARY
    };

    div()
        .flex()
        .items_center()
        .justify_between()
        .px_3()
        .py_2()
        .rounded_md()
        .border_1()
        .border_color(rgb(BORDER_COLOR))
        .when(clock.running, |el| el.bg(rgb(CLOCK_ACTIVE_BG)))
        .child(
            div()
                .text_color(rgb(TEXT_SECONDARY))
                .child(clock.color.name()),
        )
        .child(
            div()
                .text_color(rgb(text_color))
                .text_size(px(28.0))
                .font_weight(gpui::FontWeight::BOLD)
                .child(clock.text.clone()),
        )
}

fn render_move_list(moves: &[MovePairDisplay]) -> impl IntoElement {
    div()
        .flex_1()
        .min_h_0()
        .flex()
        .flex_col()
        .bg(rgb(MOVE_LIST_BG))
        .border_1()
        .border_color(rgb(BORDER_COLOR))
        .rounded_md()
        .overflow_hidden()
        // Header (fixed)
        .child(
            div()
                .p_3()
                .pb_2()
                .text_color(rgb(TEXT_PRIMARY))
                .text_sm()
                .border_b_1()
                .border_color(rgb(BORDER_COLOR))
                .child("Moves"),
        )
        // Scrollable moves content
        .child(
            div()
                .id("move-list-scroll")
                .flex_1()
                .overflow_y_scroll()
                .p_3()
                .pt_2()
                .flex()
                .flex_col()
                .gap_1()
                .when(moves.is_empty(), |el| {
                    el.child(
                        div()
                            .text_color(rgb(TEXT_SECONDARY))
                            .text_sm()
                            .child("No moves yet"),
                    )
                })
                .children(moves.iter().map(|pair| {
                    div()
                        .flex()
                        .items_center()
                        .gap_2()
                        .child(
                            div()
                                .text_color(rgb(TEXT_SECONDARY))
                                .text_sm()
                                .w(px(32.0))
                                .child(format!("{}.", pair.move_num)),
                        )
                        .child(
                            div()
                                .text_color(rgb(TEXT_PRIMARY))
                                .text_sm()
                                .flex_1()
                                .child(pair.white.clone()),
                        )
                        .when_some(pair.black.clone(), |el, black| {
                            el.child(
                                div()
                                    .text_color(rgb(TEXT_PRIMARY))
                                    .text_sm()
                                    .flex_1()
                                    .child(black),
                            )
                        })
                })),
        )
}
