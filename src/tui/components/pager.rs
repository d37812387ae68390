use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::config::DisplayConfig;
use crate::tui::component::ElementWidget;
use crate::tui::layout::{page_label, pager_regions, NEXT_LABEL, PREVIOUS_LABEL};

/// `[ Previous ]  Page N  [ Next ]`
#[derive(Clone)]
pub struct PagerWidget {
    pub page: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PagerWidget {
    fn button_style(enabled: bool, config: &DisplayConfig) -> Style {
        if enabled {
            Style::default().fg(config.accent_fg)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        }
    }
}

impl ElementWidget for PagerWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.height == 0 {
            return;
        }
        let regions = pager_regions(area, self.page);
        let label = page_label(self.page);
        for (rect, text, style) in [
            (
                regions.previous,
                PREVIOUS_LABEL,
                Self::button_style(self.has_previous, config),
            ),
            (regions.label, label.as_str(), Style::default()),
            (
                regions.next,
                NEXT_LABEL,
                Self::button_style(self.has_next, config),
            ),
        ] {
            if !rect.is_empty() {
                buf.set_stringn(rect.x, rect.y, text, rect.width as usize, style);
            }
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(1)
    }
}
