//! Connection form screen: greeting, host/user/password fields.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::model::FormController;
use crate::tui::Theme;
use crate::tui::widgets::{FIELD_HEIGHT, draw_fields};

/// Greeting shown above the form.
pub const HEADING: &str = "Welcome to Easy-ftp Client!";
/// Prompt shown below the greeting.
pub const PROMPT: &str = "Please enter the Hostname of the ftp server you wish to connect to";

#[mutants::skip]
pub fn draw_form_input(form: &FormController, theme: &Theme, frame: &mut Frame, area: Rect) {
    let fields_height = FIELD_HEIGHT * form.fields().len() as u16;
    let [heading_area, prompt_area, _gap, fields_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(fields_height),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(HEADING)).style(theme.accent),
        heading_area,
    );
    frame.render_widget(Paragraph::new(Line::from(PROMPT)), prompt_area);
    draw_fields(form.fields(), theme, frame, fields_area);
}
