//! Full-screen rendering of a [`WizardState`].

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin};
use ratatui::widgets::{Block, Borders};

use super::Theme;
use super::screens::{draw_connecting, draw_connection_failed, draw_form_input, draw_welcome};
use super::widgets::draw_key_hints;
use crate::model::Phase;
use crate::wizard::WizardState;

/// Redraws everything from `state`; nothing is carried between frames.
#[mutants::skip]
pub fn draw(state: &WizardState, theme: &Theme, frame: &mut Frame) {
    let block = Block::default()
        .title(" easyftp ")
        .borders(Borders::ALL)
        .border_style(theme.accent);
    let inner = block.inner(frame.area()).inner(Margin::new(1, 0));
    frame.render_widget(block, frame.area());

    let [body, footer] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let form = state.form();
    match state.phase() {
        Phase::FormInput => draw_form_input(form, theme, frame, body),
        Phase::Connecting => draw_connecting(form, state.spinner(), theme, frame, body),
        Phase::ConnectionFailed => {
            draw_connection_failed(form, state.last_error(), theme, frame, body)
        }
        Phase::Welcome | Phase::MenuUpload | Phase::MenuDownload => {
            draw_welcome(form, state.menu(), theme, frame, body)
        }
    }
    draw_key_hints(state.phase(), theme, frame, footer);
}
