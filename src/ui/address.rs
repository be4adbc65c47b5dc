//! Address entry widget: the input box, its hint line and the suggestion
//! dropdown overlay.

use crate::search::{SearchController, MIN_QUERY_CHARS};
use crate::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

pub struct AddressInput;

impl AddressInput {
    /// Render the input box with the committed-address line underneath.
    pub fn render(frame: &mut Frame, area: Rect, controller: &SearchController, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Input box
                Constraint::Length(1), // Hint line
            ])
            .split(area);

        let input_text = format!("🔍 {}", controller.input());
        let input_paragraph = Paragraph::new(input_text).style(theme.text()).block(
            Block::default()
                .title(" Address ")
                .borders(Borders::ALL)
                .border_style(theme.block_border(true)),
        );
        frame.render_widget(input_paragraph, chunks[0]);

        let hint = if let Some(selected) = controller.selected() {
            Line::from(Span::styled(
                format!("📍 {}", selected.label),
                theme.available(),
            ))
        } else if controller.input().chars().count() < MIN_QUERY_CHARS {
            Line::from(Span::styled(
                format!("Type at least {MIN_QUERY_CHARS} characters to see suggestions"),
                theme.muted(),
            ))
        } else {
            Line::from(Span::styled(
                "Select an address from the suggestion list",
                theme.muted(),
            ))
        };
        frame.render_widget(Paragraph::new(hint), chunks[1]);
    }

    /// Render the suggestion dropdown as an overlay anchored under the
    /// input box. No-op while the dropdown is hidden.
    pub fn render_suggestions(
        frame: &mut Frame,
        frame_area: Rect,
        anchor: Rect,
        controller: &SearchController,
        theme: &Theme,
    ) {
        if !controller.dropdown_visible() {
            return;
        }

        let suggestions = controller.suggestions();
        let height = (suggestions.len() as u16 + 2)
            .min(frame_area.height.saturating_sub(anchor.y + 3));
        if height < 3 {
            return;
        }

        let dropdown_area = Rect {
            x: anchor.x,
            y: anchor.y + 3,
            width: anchor.width,
            height,
        };

        // Clear background so the dropdown overlays the results panel
        frame.render_widget(Clear, dropdown_area);

        let items: Vec<ListItem> = suggestions
            .iter()
            .enumerate()
            .map(|(i, suggestion)| {
                let style = if i == controller.highlighted() {
                    theme.highlight()
                } else {
                    theme.text()
                };
                ListItem::new(Line::from(Span::styled(
                    format!("📍 {}", suggestion.label),
                    style,
                )))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(format!(
                    " Suggestions ({}/{}) ",
                    controller.highlighted() + 1,
                    suggestions.len()
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_focused)),
        );

        frame.render_widget(list, dropdown_area);
    }
}
