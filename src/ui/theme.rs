//! # Theme System
//!
//! Colours used by the roster table, grouped by what they mean rather than
//! where they are drawn. The active theme is cycled with `t` and remembered
//! in the user config.
//!
//! ## Built-in Themes
//!
//! - **Catppuccin Mocha** (default)
//! - **Dracula**
//! - **Nord**
//! - **Gruvbox Dark**

use ratatui::style::Color;

/// All colours used by the table UI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Human-readable name, also the key stored in the config file.
    pub name: &'static str,

    pub bg: Color,
    /// Primary text (cells, search input).
    pub fg: Color,
    /// Hints, disabled controls, footer.
    pub fg_dim: Color,

    /// Borders, header row, current page, cursor row.
    pub accent: Color,
    /// Input fields of the row being edited.
    pub secondary: Color,

    /// Confirmation messages.
    pub success: Color,
    /// Delete controls and warnings.
    pub error: Color,

    /// Background of checked rows.
    pub checked_bg: Color,
}

impl Theme {
    /// All built-in themes, in cycling order.
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Return the default theme (Catppuccin Mocha).
    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }

    /// The theme after `self` in cycling order, wrapping around.
    pub fn next(&self) -> &'static Theme {
        let pos = BUILT_IN_THEMES
            .iter()
            .position(|t| t.name == self.name)
            .unwrap_or(0);
        &BUILT_IN_THEMES[(pos + 1) % BUILT_IN_THEMES.len()]
    }
}

static BUILT_IN_THEMES: [Theme; 4] = [
    Theme {
        name: "Catppuccin Mocha",
        bg: Color::Rgb(30, 30, 46),           // base
        fg: Color::Rgb(205, 214, 244),        // text
        fg_dim: Color::Rgb(108, 112, 134),    // overlay0
        accent: Color::Rgb(137, 180, 250),    // blue
        secondary: Color::Rgb(249, 226, 175), // yellow
        success: Color::Rgb(166, 227, 161),   // green
        error: Color::Rgb(243, 139, 168),     // red
        checked_bg: Color::Rgb(69, 71, 90),   // surface1
    },
    Theme {
        name: "Dracula",
        bg: Color::Rgb(40, 42, 54),
        fg: Color::Rgb(248, 248, 242),
        fg_dim: Color::Rgb(98, 114, 164),
        accent: Color::Rgb(189, 147, 249),    // purple
        secondary: Color::Rgb(241, 250, 140), // yellow
        success: Color::Rgb(80, 250, 123),
        error: Color::Rgb(255, 85, 85),
        checked_bg: Color::Rgb(68, 71, 90),
    },
    Theme {
        name: "Nord",
        bg: Color::Rgb(46, 52, 64),
        fg: Color::Rgb(236, 239, 244),
        fg_dim: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(136, 192, 208),    // frost
        secondary: Color::Rgb(235, 203, 139), // aurora yellow
        success: Color::Rgb(163, 190, 140),
        error: Color::Rgb(191, 97, 106),
        checked_bg: Color::Rgb(67, 76, 94),
    },
    Theme {
        name: "Gruvbox Dark",
        bg: Color::Rgb(40, 40, 40),
        fg: Color::Rgb(235, 219, 178),
        fg_dim: Color::Rgb(146, 131, 116),
        accent: Color::Rgb(131, 165, 152),    // aqua
        secondary: Color::Rgb(250, 189, 47),  // yellow
        success: Color::Rgb(184, 187, 38),
        error: Color::Rgb(251, 73, 52),
        checked_bg: Color::Rgb(80, 73, 69),
    },
];
