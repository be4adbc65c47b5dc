//! Coverage results panel: one block per checked address, four operator
//! rows with a per-generation availability badge.

use crate::search::SearchController;
use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct ResultsPanel;

impl ResultsPanel {
    pub fn render(frame: &mut Frame, area: Rect, controller: &SearchController, theme: &Theme) {
        let block = Block::default()
            .title(" Network coverage ")
            .borders(Borders::ALL)
            .border_style(theme.block_border(false));
        let inner_area = block.inner(area);
        frame.render_widget(block, area);

        if controller.is_loading() {
            let loading_paragraph = Paragraph::new("⏳ Checking coverage...")
                .style(Style::default().fg(theme.warning))
                .alignment(Alignment::Center);
            frame.render_widget(loading_paragraph, inner_area);
            return;
        }

        let results = match controller.results() {
            Some(results) => results,
            None => {
                let empty_paragraph =
                    Paragraph::new("Search for an address to see its network coverage")
                        .style(theme.muted())
                        .alignment(Alignment::Center);
                frame.render_widget(empty_paragraph, inner_area);
                return;
            }
        };

        let mut lines = Vec::new();
        for (address, coverage) in results {
            lines.push(Line::from(Span::styled(
                format!("📡 {address}"),
                theme.title(),
            )));
            for (operator, networks) in coverage.operators() {
                let mut spans = vec![Span::styled(format!("  {operator:<10}"), theme.text())];
                for (generation, available) in networks.generations() {
                    spans.push(Span::styled(format!("{generation} "), theme.muted()));
                    let (badge, style) = if available {
                        ("✓", theme.available())
                    } else {
                        ("✗", theme.unavailable())
                    };
                    spans.push(Span::styled(format!("{badge}   "), style));
                }
                lines.push(Line::from(spans));
            }
            lines.push(Line::from(""));
        }

        frame.render_widget(Paragraph::new(lines), inner_area);
    }
}
