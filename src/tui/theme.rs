//! Theme system for TUI colors and styles
//!
//! Colors follow the CLI output of `confticket generate` (ticket/render.rs).

use iocraft::prelude::Color;

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Brand colors
    pub accent: Color,

    // Validation colors
    pub error: Color,
    pub hint: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub border_drop: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub button_text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb {
                r: 245,
                g: 116,
                b: 82,
            },

            error: Color::Rgb {
                r: 245,
                g: 116,
                b: 82,
            },
            hint: Color::Rgb {
                r: 209,
                g: 208,
                b: 213,
            },

            border: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            border_focused: Color::Blue,
            border_drop: Color::Rgb {
                r: 245,
                g: 116,
                b: 82,
            },
            background: Color::Reset,
            text: Color::White,
            text_dimmed: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            highlight: Color::Blue,
            button_text: Color::Black,
        }
    }
}

impl Theme {
    /// Border color for a form element, taking focus and errors into account
    pub fn field_border(&self, is_focused: bool, has_error: bool) -> Color {
        if has_error {
            self.error
        } else if is_focused {
            self.border_focused
        } else {
            self.border
        }
    }

    /// Label color for a form element
    pub fn label_color(&self, is_focused: bool) -> Color {
        if is_focused {
            self.border_focused
        } else {
            self.text
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
