//! One-line footer listing the keys that work in the current phase.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::model::Phase;
use crate::tui::Theme;

/// Hint text for `phase`.
pub fn hints(phase: Phase) -> &'static str {
    match phase {
        Phase::FormInput => "Enter: next/submit  Up/Down: move  (esc to quit)",
        Phase::Connecting => "(esc to quit)",
        Phase::ConnectionFailed => "Enter: retry  e: edit  (esc to quit)",
        Phase::Welcome => "Tab: choose action  (esc to quit)",
        Phase::MenuUpload => "Tab: next  (esc to quit)",
        Phase::MenuDownload => "Shift+Tab: back  (esc to quit)",
    }
}

#[mutants::skip]
pub fn draw_key_hints(phase: Phase, theme: &Theme, frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(hints(phase))).style(theme.muted);
    frame.render_widget(footer, area);
}
