use ratatui::style::{Color, Modifier, Style};

/// Color palette for clean, minimalistic terminal UI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub surface: Color,

    pub text_primary: Color,
    pub text_muted: Color,

    pub border: Color,
    pub border_focused: Color,
    pub selection: Color,
    pub selection_text: Color,

    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    pub accent: Color,
}

impl Theme {
    /// Retro groove dark theme with warm, earthy colors.
    pub fn gruvbox_dark() -> Self {
        Self {
            background: Color::Rgb(40, 40, 40),  // #282828 - dark0
            foreground: Color::Rgb(235, 219, 178), // #ebdbb2 - light1
            surface: Color::Rgb(60, 56, 54), // #3c3836 - dark1

            text_primary: Color::Rgb(235, 219, 178), // #ebdbb2 - light1
            text_muted: Color::Rgb(189, 174, 147),   // #bdae93 - light3

            border: Color::Rgb(102, 92, 84), // #665c54 - dark4
            border_focused: Color::Rgb(131, 165, 152), // #83a598 - bright_blue
            selection: Color::Rgb(131, 165, 152), // #83a598 - bright_blue
            selection_text: Color::Rgb(40, 40, 40), // #282828 - dark0

            success: Color::Rgb(152, 151, 26), // #98971a - bright_green
            warning: Color::Rgb(215, 153, 33), // #d79921 - bright_yellow
            error: Color::Rgb(204, 36, 29),    // #cc241d - bright_red
            info: Color::Rgb(131, 165, 152),   // #83a598 - bright_blue

            accent: Color::Rgb(250, 189, 47), // #fabd2f - bright_yellow
        }
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn block_border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focused)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .bg(self.selection)
            .fg(self.selection_text)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar(&self) -> Style {
        Style::default().bg(self.surface).fg(self.text_primary)
    }

    pub fn available(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn unavailable(&self) -> Style {
        Style::default().fg(self.error)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::gruvbox_dark()
    }
}
