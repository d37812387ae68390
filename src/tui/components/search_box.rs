use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::config::DisplayConfig;
use crate::formatting::truncate;
use crate::listing::ListFilter;
use crate::tui::component::ElementWidget;

pub const SEARCH_PLACEHOLDER: &str = "Search players (e.g., LeBron James)...";
pub const FILTER_PLACEHOLDER: &str = "Filter by player name...";

pub fn placeholder(filter: &ListFilter) -> &'static str {
    match filter {
        ListFilter::Search => SEARCH_PLACEHOLDER,
        ListFilter::Position(_) | ListFilter::Team(_) => FILTER_PLACEHOLDER,
    }
}

/// Bordered single-line text input
#[derive(Clone)]
pub struct SearchBoxWidget {
    pub text: String,
    pub placeholder: &'static str,
    /// Receives keys: highlighted border and a cursor
    pub editing: bool,
}

impl ElementWidget for SearchBoxWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let border_style = if self.editing {
            Style::default().fg(config.selection_fg)
        } else {
            Style::default()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let width = inner.width as usize;
        let paragraph = if self.text.is_empty() {
            Paragraph::new(truncate(self.placeholder, width))
                .style(Style::default().fg(Color::DarkGray))
        } else {
            let mut text = self.text.clone();
            if self.editing {
                text.push('_');
            }
            // keep the end of long input visible
            let skip = text.chars().count().saturating_sub(width);
            Paragraph::new(text.chars().skip(skip).collect::<String>())
        };
        paragraph.render(inner, buf);
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}
