//! Styles used by the draw functions, built once at startup.

use ratatui::style::{Color, Modifier, Style};

/// Every style the screens and widgets use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Outer frame and headings.
    pub accent: Style,
    /// Border of the focused field.
    pub focused: Style,
    /// Unfocused borders, placeholders and hints.
    pub muted: Style,
    /// Connection failures.
    pub error: Style,
    /// The highlighted menu item.
    pub selected: Style,
    /// Confirmation messages.
    pub success: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Style::default().fg(Color::Cyan),
            focused: Style::default().fg(Color::Yellow),
            muted: Style::default().fg(Color::DarkGray),
            error: Style::default().fg(Color::Red),
            selected: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            success: Style::default().fg(Color::Green),
        }
    }
}

impl Theme {
    /// Monochrome styles relying on modifiers only.
    pub fn plain() -> Self {
        Self {
            accent: Style::default().add_modifier(Modifier::BOLD),
            focused: Style::default().add_modifier(Modifier::BOLD),
            muted: Style::default().add_modifier(Modifier::DIM),
            error: Style::default().add_modifier(Modifier::BOLD),
            selected: Style::default().add_modifier(Modifier::REVERSED),
            success: Style::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_has_no_colors() {
        let theme = Theme::plain();
        for style in [
            theme.accent,
            theme.focused,
            theme.muted,
            theme.error,
            theme.selected,
            theme.success,
        ] {
            assert_eq!(style.fg, None);
            assert_eq!(style.bg, None);
        }
    }
}
