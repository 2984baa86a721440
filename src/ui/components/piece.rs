//! Piece rendering component.

use crate::domain::Piece;
use crate::ui::theme::PIECE_COLOR;
use gpui::{div, prelude::*, px, rgb};

/// Render a chess piece glyph centered in its container
pub fn render_piece(piece: Piece, glyph_size: f32) -> impl IntoElement {
    div()
        .size_full()
        .flex()
        .items_center()
        .justify_center()
        .text_size(px(glyph_size))
        .text_color(rgb(PIECE_COLOR))
        .child(piece.glyph())
}
