use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::formatting::truncate;
use crate::tui::component::{Component, Element, ElementWidget};
use crate::tui::layout::STATUS_BAR_HEIGHT;
use crate::tui::state::SystemState;

pub const NOT_LOADED_TEXT: &str = "No data loaded";

/// StatusBar component - status or error message on the left, last update time on the right
pub struct StatusBar;

impl Component for StatusBar {
    type Props = SystemState;
    type State = ();

    fn view(&self, props: &Self::Props, _state: &Self::State) -> Element {
        let right_text = match props.last_update {
            Some(time) => format!(
                "Updated {}",
                time.format(&props.config.time_format)
            ),
            None => NOT_LOADED_TEXT.to_string(),
        };
        Element::Widget(Box::new(StatusBarWidget {
            message: props.status_message.clone().unwrap_or_default(),
            is_error: props.status_is_error,
            right_text,
        }))
    }
}

/// Renderable widget for StatusBar
#[derive(Clone)]
struct StatusBarWidget {
    message: String,
    is_error: bool,
    right_text: String,
}

impl ElementWidget for StatusBarWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let box_chars = &config.box_chars;
        let right_with_margin = format!(" {} ", self.right_text);
        let bar_position = area
            .width
            .saturating_sub(right_with_margin.width() as u16 + 1);

        // First line: horizontal separator with connector above the bar
        let left_part = box_chars.horizontal.repeat(bar_position as usize);
        let right_part = box_chars
            .horizontal
            .repeat(area.width.saturating_sub(bar_position + 1) as usize);
        let connector = if config.use_unicode { "┬" } else { "+" };
        let line1 = format!("{}{}{}", left_part, connector, right_part);

        // Second line: message on the left, bar, update time on the right
        let message_width = (bar_position as usize).saturating_sub(2);
        let message = truncate(&self.message, message_width);
        let message_style = if self.is_error {
            Style::default().fg(config.error_fg)
        } else {
            Style::default()
        };
        let padding = (bar_position as usize).saturating_sub(message.width() + 1);

        let line2 = Line::from(vec![
            Span::raw(" "),
            Span::styled(message, message_style),
            Span::raw(" ".repeat(padding)),
            Span::raw(box_chars.vertical.clone()),
            Span::raw(right_with_margin),
        ]);

        let status_bar = Paragraph::new(vec![Line::raw(line1), line2]);
        ratatui::widgets::Widget::render(status_bar, area, buf);
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(STATUS_BAR_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::{assert_buffer, buffer_lines, render_element};
    use chrono::{Local, TimeZone};

    #[test]
    fn test_status_bar_before_first_load() {
        let system = SystemState {
            status_message: Some("Ready".into()),
            ..SystemState::default()
        };
        let buf = render_element(StatusBar.view(&system, &()), 40, 2);
        assert_buffer(
            &buf,
            &[
                "───────────────────────┬────────────────",
                " Ready                 │ No data loaded",
            ],
        );
    }

    #[test]
    fn test_status_bar_shows_update_time() {
        let system = SystemState {
            last_update: Local.with_ymd_and_hms(2024, 3, 1, 19, 5, 9).single(),
            ..SystemState::default()
        };
        let buf = render_element(StatusBar.view(&system, &()), 80, 2);
        assert!(buffer_lines(&buf)[1].ends_with("│ Updated 19:05:09 "));
    }

    #[test]
    fn test_error_message_uses_error_color() {
        let mut system = SystemState::default();
        system.set_status_error_message("Failed".into());
        let buf = render_element(StatusBar.view(&system, &()), 40, 2);
        assert_eq!(buf[(1, 1)].fg, DisplayConfig::default().error_fg);
    }
}
