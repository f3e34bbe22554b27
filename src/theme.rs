//! Theme resolution and terminal color helpers

use clap::ValueEnum;

const RESET: &str = "\x1b[0m";

/// Named color themes for the side bars and symbols.
///
/// Each maps to an ANSI bright-foreground code. "default" and "magenta"
/// share a code on purpose: the default look is magenta.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Default,
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
}

impl Theme {
    pub fn code(self) -> u8 {
        match self {
            Theme::Default => 95,
            Theme::Red => 91,
            Theme::Green => 92,
            Theme::Yellow => 93,
            Theme::Blue => 94,
            Theme::Magenta => 95,
            Theme::Cyan => 96,
        }
    }
}

/// Wrap text in the theme's foreground color plus a reset.
pub fn colorize(text: &str, theme: Theme) -> String {
    format!("\x1b[{}m{}{}", theme.code(), text, RESET)
}

/// The colored side bar printed between symbol and value.
pub fn bar(theme: Theme) -> String {
    colorize("\u{2590}", theme)
}

/// Two rows of 8 three-wide blocks: the standard colors then the bright
/// variants. Independent of the chosen theme.
pub fn palette_rows() -> [String; 2] {
    let mut rows = [String::new(), String::new()];
    for (row_index, row) in rows.iter_mut().enumerate() {
        for color_offset in 0..8 {
            let color = 30 + color_offset + if row_index == 1 { 60 } else { 0 };
            let block = format!("\x1b[{}m\u{2588}{}", color, RESET);
            for _ in 0..3 {
                row.push_str(&block);
            }
        }
    }
    rows
}
