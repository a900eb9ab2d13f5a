//! Console colour index -> crossterm colour.
//!
//! Indices follow the classic console attribute order, where bit 3 selects
//! the bright variant: 1 blue, 2 green, 4 red, 7 grey, 10 bright green, ...

use crossterm::style::Color;

use crate::types::ColorIndex;

pub fn console_color(index: ColorIndex) -> Color {
    match index.get() {
        0 => Color::Black,
        1 => Color::DarkBlue,
        2 => Color::DarkGreen,
        3 => Color::DarkCyan,
        4 => Color::DarkRed,
        5 => Color::DarkMagenta,
        6 => Color::DarkYellow,
        7 => Color::Grey,
        8 => Color::DarkGrey,
        9 => Color::Blue,
        10 => Color::Green,
        11 => Color::Cyan,
        12 => Color::Red,
        13 => Color::Magenta,
        14 => Color::Yellow,
        _ => Color::White,
    }
}
