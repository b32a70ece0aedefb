use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};
use unicode_width::UnicodeWidthStr;

use super::Component;
use crate::{action::Action, config::Config, mode::Mode, tui::Frame};

const HINTS: &str = "tab focus · arrows move · enter toggle · q quit";

/// Bottom status line: the latest tooltip or system message on the left,
/// key hints on the right.
#[derive(Default)]
pub struct StatusBar {
    config: Config,
    message: Option<String>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn style(&self, key: &str, fallback: Style) -> Style {
        self.config
            .styles
            .get(&Mode::Home)
            .and_then(|styles| styles.get(key))
            .copied()
            .unwrap_or(fallback)
    }
}

impl Component for StatusBar {
    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.config = config;
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::SystemMessage(message) => self.message = Some(message),
            Action::Error(message) => self.message = Some(format!("Error: {message}")),
            _ => {}
        };

        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let layout = Layout::new(
            Direction::Vertical,
            [Constraint::Min(0), Constraint::Length(1)],
        )
        .split(area);
        f.render_widget(Clear, layout[1]);

        let message = self.message.clone().unwrap_or_default();
        let width = layout[1].width as usize;
        let padding = width
            .saturating_sub(message.width())
            .saturating_sub(HINTS.width());

        let line = if padding > 0 {
            Line::from(vec![
                Span::styled(
                    message,
                    self.style("message", Style::default().fg(Color::Gray)),
                ),
                Span::raw(" ".repeat(padding)),
                Span::styled(
                    HINTS,
                    self.style("hints", Style::default().fg(Color::DarkGray)),
                ),
            ])
        } else {
            Line::from(Span::styled(
                message,
                self.style("message", Style::default().fg(Color::Gray)),
            ))
        };
        f.render_widget(Paragraph::new(line), layout[1]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_system_messages_replace_each_other() {
        let mut status_bar = StatusBar::new();
        assert_eq!(status_bar.message(), None);

        status_bar
            .update(Action::SystemMessage("France: UTC + 1".to_string()))
            .unwrap();
        assert_eq!(status_bar.message(), Some("France: UTC + 1"));

        status_bar
            .update(Action::SystemMessage("Chrome selected".to_string()))
            .unwrap();
        assert_eq!(status_bar.message(), Some("Chrome selected"));
    }

    #[test]
    fn test_errors_are_shown() {
        let mut status_bar = StatusBar::new();
        status_bar
            .update(Action::Error("draw failed".to_string()))
            .unwrap();
        assert_eq!(status_bar.message(), Some("Error: draw failed"));
    }

    #[test]
    fn test_other_actions_are_ignored() {
        let mut status_bar = StatusBar::new();
        status_bar.update(Action::Tick).unwrap();
        assert_eq!(status_bar.message(), None);
    }
}
