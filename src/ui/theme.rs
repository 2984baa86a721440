//! Theme constants and colors for the chess UI.

use gpui::{Rgba, rgb};

// Layout constants
pub const BOARD_PADDING: f32 = 20.0;
pub const GLYPH_SCALE: f32 = 0.8; // glyph size relative to square
pub const SIDE_PANEL_WIDTH: f32 = 260.0;

// Board colors
pub const LIGHT_SQUARE: u32 = 0xEEEED2;
pub const DARK_SQUARE: u32 = 0x769656;
pub const SELECTED_LIGHT: u32 = 0xA5A5E8;
pub const SELECTED_DARK: u32 = 0x5C6FA8;
pub const TARGET_LIGHT: u32 = 0xA5D2A5;
pub const TARGET_DARK: u32 = 0x5FA25F;
pub const PIECE_COLOR: u32 = 0x000000;

// Panel colors
pub const PANEL_BG: u32 = 0x2a2a2a;
pub const MOVE_LIST_BG: u32 = 0x1e1e1e;
pub const BORDER_COLOR: u32 = 0x4a4a4a;
pub const TEXT_PRIMARY: u32 = 0xffffff;
pub const TEXT_SECONDARY: u32 = 0x888888;
pub const CLOCK_ACTIVE_BG: u32 = 0x3f6212;
pub const CLOCK_EXPIRED: u32 = 0xf87171;
pub const STATUS_OVER: u32 = 0xfbbf24;

/// How a square is highlighted
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Highlight {
    None,
    Selected,
    Target,
}

/// Get the color for a board square based on its position and highlight
pub fn square_color(row: usize, col: usize, highlight: Highlight) -> Rgba {
    let light = (row + col) % 2 == 0;
    let hex = match (highlight, light) {
        (Highlight::None, true) => LIGHT_SQUARE,
        (Highlight::None, false) => DARK_SQUARE,
        (Highlight::Selected, true) => SELECTED_LIGHT,
        (Highlight::Selected, false) => SELECTED_DARK,
        (Highlight::Target, true) => TARGET_LIGHT,
        (Highlight::Target, false) => TARGET_DARK,
    };
    rgb(hex)
}
