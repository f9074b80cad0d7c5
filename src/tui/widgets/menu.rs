//! Horizontal Upload/Download selector.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{ActionMenu, MenuItem};
use crate::tui::Theme;

/// Renders the menu items on one line, highlighting the selected one.
#[mutants::skip]
pub fn draw_menu(menu: &ActionMenu, theme: &Theme, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for (i, item) in MenuItem::all().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if menu.highlighted() == Some(*item) {
            theme.selected
        } else {
            theme.muted
        };
        spans.push(Span::styled(format!("[ {} ]", item.label()), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn render(menu: &ActionMenu, theme: &Theme) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(30, 1)).unwrap();
        terminal
            .draw(|frame| draw_menu(menu, theme, frame, frame.area()))
            .unwrap();
        terminal
    }

    fn line(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        (0..buf.area.width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn shows_both_items() {
        let terminal = render(&ActionMenu::default(), &Theme::default());
        assert_eq!(line(&terminal).trim_end(), "[ Upload ]  [ Download ]");
    }

    #[test]
    fn highlighted_item_uses_selected_style() {
        let theme = Theme::default();
        let mut menu = ActionMenu::default();
        menu.highlight(MenuItem::Download);
        let terminal = render(&menu, &theme);
        let buf = terminal.backend().buffer();
        // "[ Upload ]  " is 12 columns wide
        assert_eq!(buf[(14, 0)].symbol(), "D");
        assert_eq!(buf[(14, 0)].bg, theme.selected.bg.unwrap());
        assert_ne!(buf[(2, 0)].bg, theme.selected.bg.unwrap());
    }
}
