use crate::search::SearchController;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct EventHandler {
    should_quit: bool,
}

/// Result of handling a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    /// The user asked for a coverage check; the app owns the network side.
    SearchRequested,
}

impl EventHandler {
    pub fn new() -> Self {
        Self { should_quit: false }
    }

    pub fn handle_key_event(
        &mut self,
        key: KeyEvent,
        controller: &mut SearchController,
    ) -> EventResult {
        match key.code {
            // Global quit commands
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }

            KeyCode::Esc => {
                controller.clear();
            }

            // Dropdown navigation
            KeyCode::Up => {
                controller.highlight_previous();
            }
            KeyCode::Down => {
                controller.highlight_next();
            }

            // Enter commits a suggestion while the dropdown is open,
            // otherwise it submits the coverage check
            KeyCode::Enter => {
                if controller.dropdown_visible() {
                    controller.select_highlighted();
                } else {
                    return EventResult::SearchRequested;
                }
            }

            // Text editing
            KeyCode::Backspace => {
                controller.backspace();
            }
            KeyCode::Char(c) => {
                controller.push_char(c);
            }

            _ => {}
        }

        EventResult::Continue
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
