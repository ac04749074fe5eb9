use crossterm::style::{Color, Stylize};

/// Design tokens for the CodeInsight CLI.
///
/// All icons and colors used in output must be sourced from this module.
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";

    // Selection states.
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = "○";
    pub const PARTIAL: &str = "◐";

    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";

    pub const REPO: &str = "📦";
    pub const SEPARATOR: &str = "─";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";

    pub const SELECTED: &str = "[x]";
    pub const UNSELECTED: &str = "[ ]";
    pub const PARTIAL: &str = "[-]";

    pub const EXPAND: &str = "[v]";
    pub const COLLAPSE: &str = "[>]";

    pub const REPO: &str = "[REPO]";
    pub const SEPARATOR: &str = "-";
}

/// Pick the unicode or ascii variant of an icon
pub fn icon(unicode: bool, fancy: &'static str, plain: &'static str) -> &'static str {
    if unicode {
        fancy
    } else {
        plain
    }
}

/// Color `text` when color output is enabled
pub fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        text.with(color).to_string()
    } else {
        text.to_string()
    }
}
