//! Progress and failure screens for a connection attempt.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::connection::ConnectionError;
use crate::model::{FormController, HOSTNAME, Spinner, USER};
use crate::tui::Theme;

/// Renders the spinner with the target host.
#[mutants::skip]
pub fn draw_connecting(
    form: &FormController,
    spinner: &Spinner,
    theme: &Theme,
    frame: &mut Frame,
    area: Rect,
) {
    let line = Line::from(vec![
        Span::styled(format!("{} ", spinner.symbol()), theme.accent),
        Span::raw(format!("Connecting to {}...", target(form))),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Renders the failure reason.
#[mutants::skip]
pub fn draw_connection_failed(
    form: &FormController,
    error: Option<ConnectionError>,
    theme: &Theme,
    frame: &mut Frame,
    area: Rect,
) {
    let reason = error.map_or_else(|| "unknown error".to_string(), |e| e.to_string());
    let line = Line::from(Span::styled(
        format!("Could not connect to {}: {reason}", target(form)),
        theme.error,
    ));
    frame.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), area);
}

/// `user@host`, or just the host when no user was given.
pub(super) fn target(form: &FormController) -> String {
    let host = form.fields().value(HOSTNAME);
    let host = if host.is_empty() { "(no host)" } else { host };
    match form.fields().value(USER) {
        "" => host.to_string(),
        user => format!("{user}@{host}"),
    }
}
