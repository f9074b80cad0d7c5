//! Post-connect screen with the action menu.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use super::connecting::target;
use crate::model::{ActionMenu, FormController};
use crate::tui::Theme;
use crate::tui::widgets::draw_menu;

#[mutants::skip]
pub fn draw_welcome(
    form: &FormController,
    menu: &ActionMenu,
    theme: &Theme,
    frame: &mut Frame,
    area: Rect,
) {
    let [status_area, prompt_area, _gap, menu_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(format!("Connected to {}", target(form)))).style(theme.success),
        status_area,
    );
    frame.render_widget(
        Paragraph::new(Line::from("What would you like to do?")),
        prompt_area,
    );
    draw_menu(menu, theme, frame, menu_area);
}
