pub mod address;
pub mod results;
pub mod status_bar;
pub mod toast;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::search::SearchController;
use crate::theme::Theme;

use self::{address::AddressInput, results::ResultsPanel, status_bar::StatusBar};

// Re-export toast types for external use
pub use toast::{ToastLevel, ToastManager, ToastRenderer};

/// Top-level UI compositor. Widgets are stateless; all screen state lives
/// in the `SearchController` handed to `render`.
pub struct UI {
    theme: Theme,
    toasts: ToastManager,
}

impl UI {
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            toasts: ToastManager::new(),
        }
    }

    pub fn toasts_mut(&mut self) -> &mut ToastManager {
        &mut self.toasts
    }

    /// Drop expired toasts. Called once per tick.
    pub fn update_toasts(&mut self) {
        self.toasts.update();
    }

    pub fn render(&self, frame: &mut Frame, controller: &SearchController) {
        let area = frame.size();

        // Background fill first; every widget lands on top of it
        let background = Block::default().style(Style::default().bg(self.theme.background));
        frame.render_widget(background, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Address input and hint
                Constraint::Min(8),    // Coverage results
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        AddressInput::render(frame, chunks[0], controller, &self.theme);
        ResultsPanel::render(frame, chunks[1], controller, &self.theme);
        StatusBar::render(frame, chunks[2], controller, &self.theme);

        // Overlays last: the dropdown over the results, toasts over everything
        AddressInput::render_suggestions(frame, area, chunks[0], controller, &self.theme);
        ToastRenderer::render(frame, area, self.toasts.toasts(), &self.theme);
    }
}

impl Default for UI {
    fn default() -> Self {
        Self::new()
    }
}
