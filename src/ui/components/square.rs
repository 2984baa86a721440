//! Square rendering component.

use crate::domain::{Piece, Square};
use crate::ui::components::render_piece;
use crate::ui::theme::{GLYPH_SCALE, Highlight, square_color};
use gpui::{div, prelude::*, px};

/// Render a single board square with optional piece
pub fn render_square(
    square: Square,
    piece: Option<Piece>,
    highlight: Highlight,
    square_size: f32,
) -> impl IntoElement {
    div()
        .flex_shrink_0() // never shrink - maintain aspect ratio
        .size(px(square_size))
        .bg(square_color(square.row(), square.col(), highlight))
        .flex()
        .items_center()
        .justify_center()
        .when_some(piece, |el, p| {
            el.child(render_piece(p, square_size * GLYPH_SCALE))
        })
}
