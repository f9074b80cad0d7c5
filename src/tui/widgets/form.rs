//! Renders a [`FieldSet`] as a column of bordered inputs.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::FieldSet;
use crate::tui::Theme;

/// Rows taken by a single field.
pub const FIELD_HEIGHT: u16 = 3;

/// Renders the fields within the given area.
///
/// Empty fields show their label as a placeholder; masked fields show glyphs.
#[mutants::skip]
pub fn draw_fields(fields: &FieldSet, theme: &Theme, frame: &mut Frame, area: Rect) {
    let constraints = fields
        .fields()
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT));
    let rows = Layout::vertical(constraints).split(area);

    for (i, field) in fields.fields().iter().enumerate() {
        let is_focused = i == fields.focus();
        let border_style = if is_focused { theme.focused } else { theme.muted };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);

        let mut spans = if field.is_empty() {
            vec![Span::styled(field.label.as_str(), theme.muted)]
        } else {
            vec![Span::raw(field.display_value())]
        };
        if is_focused {
            let cursor = Span::styled("\u{2588}", theme.focused.add_modifier(Modifier::SLOW_BLINK));
            if field.is_empty() {
                spans.insert(0, cursor);
            } else {
                spans.push(cursor);
            }
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        frame.render_widget(paragraph, rows[i]);
    }
}
