//! Bottom status bar: key hints on the left, search state on the right.

use crate::search::SearchController;
use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const KEY_HINTS: &[(&str, &str)] = &[
    ("↑↓", "navigate"),
    ("Enter", "select / search"),
    ("Esc", "clear"),
    ("Ctrl+Q", "quit"),
];

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame, area: Rect, controller: &SearchController, theme: &Theme) {
        let mut spans = Vec::new();
        for (i, (key, action)) in KEY_HINTS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", theme.muted()));
            }
            spans.push(Span::styled(
                format!(" {key} "),
                Style::default()
                    .fg(theme.selection_text)
                    .bg(theme.selection),
            ));
            spans.push(Span::styled(format!(" {action}"), theme.status_bar()));
        }

        let state_text = if controller.is_loading() {
            Some(Span::styled(
                " ⏳ Checking coverage... ",
                Style::default().fg(theme.warning).bg(theme.surface),
            ))
        } else if controller.search_allowed() {
            Some(Span::styled(
                " Press Enter to check coverage ",
                Style::default().fg(theme.success).bg(theme.surface),
            ))
        } else {
            None
        };

        if let Some(state) = state_text {
            let used: usize = spans.iter().map(|s| s.width()).sum();
            let padding = (area.width as usize).saturating_sub(used + state.width());
            spans.push(Span::styled(" ".repeat(padding), theme.status_bar()));
            spans.push(state);
        }

        let paragraph = Paragraph::new(Line::from(spans)).style(theme.status_bar());
        frame.render_widget(paragraph, area);
    }
}
