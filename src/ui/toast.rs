//! Toast notification system for user feedback.
//!
//! Non-intrusive, temporary notices that appear at the top-right of the
//! screen and automatically dismiss after a level-dependent duration.

use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::collections::VecDeque;
use tokio::time::{Duration, Instant};

/// Maximum number of toasts to display simultaneously
const MAX_VISIBLE_TOASTS: usize = 5;

/// Severity of a toast notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Toast notification item
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    /// Create a new toast notification
    pub fn new(message: String, level: ToastLevel) -> Self {
        let duration = match level {
            ToastLevel::Info => Duration::from_secs(3),
            ToastLevel::Success => Duration::from_secs(2),
            ToastLevel::Warning => Duration::from_secs(4),
            ToastLevel::Error => Duration::from_secs(5),
        };

        Self {
            message,
            level,
            created_at: Instant::now(),
            duration,
        }
    }

    /// Create a toast with custom duration
    pub fn with_duration(message: String, level: ToastLevel, duration: Duration) -> Self {
        Self {
            message,
            level,
            created_at: Instant::now(),
            duration,
        }
    }

    /// Check if toast has expired
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Get remaining time as percentage (1.0 = full time, 0.0 = expired)
    pub fn remaining_percentage(&self) -> f64 {
        let elapsed = self.created_at.elapsed();
        if elapsed >= self.duration {
            0.0
        } else {
            1.0 - (elapsed.as_secs_f64() / self.duration.as_secs_f64())
        }
    }

    /// Get toast icon based on level
    pub fn icon(&self) -> &'static str {
        match self.level {
            ToastLevel::Info => "ℹ",
            ToastLevel::Success => "✓",
            ToastLevel::Warning => "⚠",
            ToastLevel::Error => "✗",
        }
    }

    /// Get toast colors based on level and theme
    pub fn colors(&self, theme: &Theme) -> (Color, Color, Color) {
        let accent = match self.level {
            ToastLevel::Info => theme.info,
            ToastLevel::Success => theme.success,
            ToastLevel::Warning => theme.warning,
            ToastLevel::Error => theme.error,
        };
        (accent, theme.foreground, theme.surface)
    }
}

/// Toast notification manager
#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: VecDeque<Toast>,
}

impl ToastManager {
    /// Create a new toast manager
    pub fn new() -> Self {
        Self {
            toasts: VecDeque::new(),
        }
    }

    /// Add a new toast notification
    pub fn add_toast(&mut self, toast: Toast) {
        // Remove oldest toast if at capacity
        if self.toasts.len() >= MAX_VISIBLE_TOASTS {
            self.toasts.pop_front();
        }

        self.toasts.push_back(toast);
    }

    /// Add a simple toast with message and level
    pub fn show(&mut self, message: String, level: ToastLevel) {
        self.add_toast(Toast::new(message, level));
    }

    /// Remove expired toasts
    pub fn update(&mut self) {
        self.toasts.retain(|toast| !toast.is_expired());
    }

    /// Get current toasts
    pub fn toasts(&self) -> &VecDeque<Toast> {
        &self.toasts
    }

    /// Check if there are any active toasts
    pub fn has_toasts(&self) -> bool {
        !self.toasts.is_empty()
    }

    /// Clear all toasts
    pub fn clear(&mut self) {
        self.toasts.clear();
    }
}

/// Convenience functions for common toast types
impl ToastManager {
    /// Show an info toast
    pub fn info<S: Into<String>>(&mut self, message: S) {
        self.show(message.into(), ToastLevel::Info);
    }

    /// Show a success toast
    pub fn success<S: Into<String>>(&mut self, message: S) {
        self.show(message.into(), ToastLevel::Success);
    }

    /// Show a warning toast
    pub fn warning<S: Into<String>>(&mut self, message: S) {
        self.show(message.into(), ToastLevel::Warning);
    }

    /// Show an error toast
    pub fn error<S: Into<String>>(&mut self, message: S) {
        self.show(message.into(), ToastLevel::Error);
    }
}

/// Toast renderer for displaying notifications
pub struct ToastRenderer;

impl ToastRenderer {
    /// Render toast notifications in the top-right corner
    pub fn render(frame: &mut Frame, area: Rect, toasts: &VecDeque<Toast>, theme: &Theme) {
        if toasts.is_empty() {
            return;
        }

        let toast_width = area.width.min(50);
        let toast_area = Rect {
            x: area.width.saturating_sub(toast_width).saturating_sub(2),
            y: 1,
            width: toast_width,
            height: area.height.saturating_sub(2),
        };

        // Render each toast from newest to oldest (top to bottom)
        let mut current_y = toast_area.y;
        let toast_height = 4;

        for toast in toasts.iter().rev() {
            if current_y + toast_height > toast_area.y + toast_area.height {
                break;
            }

            let individual_toast_area = Rect {
                x: toast_area.x,
                y: current_y,
                width: toast_area.width,
                height: toast_height,
            };

            Self::render_individual_toast(frame, individual_toast_area, toast, theme);
            current_y += toast_height + 1;
        }
    }

    fn render_individual_toast(frame: &mut Frame, area: Rect, toast: &Toast, theme: &Theme) {
        // Clear the area first for proper overlay
        frame.render_widget(Clear, area);

        let (accent_color, text_color, bg_color) = toast.colors(theme);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent_color))
            .style(Style::default().bg(bg_color));

        let inner_area = block.inner(area);
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(3), // Icon area
                Constraint::Min(0),    // Content area
            ])
            .split(inner_area);

        frame.render_widget(block, area);

        if let Some(icon_area) = chunks.first() {
            let icon_paragraph = Paragraph::new(toast.icon())
                .style(
                    Style::default()
                        .fg(accent_color)
                        .add_modifier(Modifier::BOLD),
                )
                .alignment(Alignment::Center);
            frame.render_widget(icon_paragraph, *icon_area);
        }

        if let Some(content_area) = chunks.get(1) {
            let message_lines: Vec<Line> = toast
                .message
                .lines()
                .map(|line| Line::from(Span::styled(line, Style::default().fg(text_color))))
                .collect();

            let content_paragraph = Paragraph::new(message_lines)
                .wrap(Wrap { trim: true })
                .alignment(Alignment::Left);

            frame.render_widget(content_paragraph, *content_area);
        }

        Self::render_progress_bar(frame, area, toast, accent_color);
    }

    /// Render progress bar showing remaining time
    fn render_progress_bar(frame: &mut Frame, area: Rect, toast: &Toast, accent_color: Color) {
        let progress_area = Rect {
            x: area.x + 1,
            y: area.y + area.height - 1,
            width: area.width.saturating_sub(2),
            height: 1,
        };

        let remaining = toast.remaining_percentage();
        let filled_width = ((progress_area.width as f64) * remaining) as u16;

        let progress_content = if filled_width > 0 {
            "█".repeat(filled_width as usize)
        } else {
            String::new()
        };

        let progress_paragraph =
            Paragraph::new(progress_content).style(Style::default().fg(accent_color));

        frame.render_widget(progress_paragraph, progress_area);
    }
}
