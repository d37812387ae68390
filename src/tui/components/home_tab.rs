use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::config::{DisplayConfig, SELECTION_STYLE_MODIFIER};
use crate::tui::component::{Component, Element, ElementWidget};
use crate::tui::layout::{home_link_area, GET_STARTED_LABEL};

pub const HOME_TITLE: &str = "HOOPS";
pub const HOME_SUBTITLE: &str = "Fantasy basketball player stats";

const KEY_HELP: [&str; 6] = [
    "1-4        switch tab",
    "Enter      search / open",
    "[ ]        previous / next page",
    "Tab        results / search box",
    "Esc, x     close details",
    "m          teams grid / map",
];

#[derive(Clone)]
pub struct HomeTabProps {
    pub focused: bool,
}

/// Home tab: title, the "GET STARTED" link and key help
pub struct HomeTab;

impl Component for HomeTab {
    type Props = HomeTabProps;
    type State = ();

    fn view(&self, props: &Self::Props, _state: &Self::State) -> Element {
        Element::Widget(Box::new(HomeWidget {
            focused: props.focused,
        }))
    }
}

#[derive(Clone)]
struct HomeWidget {
    focused: bool,
}

impl ElementWidget for HomeWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.height < 5 {
            return;
        }
        buf.set_string(
            area.x + 2,
            area.y + 1,
            HOME_TITLE,
            Style::default()
                .fg(config.accent_fg)
                .add_modifier(Modifier::BOLD),
        );
        buf.set_string(area.x + 2, area.y + 2, HOME_SUBTITLE, Style::default());

        let link = home_link_area(area);
        let link_style = if self.focused {
            Style::default()
                .fg(config.selection_fg)
                .add_modifier(SELECTION_STYLE_MODIFIER)
        } else {
            Style::default().fg(config.selection_fg)
        };
        buf.set_stringn(link.x, link.y, GET_STARTED_LABEL, link.width as usize, link_style);

        for (i, line) in KEY_HELP.iter().enumerate() {
            let y = link.y + 2 + i as u16;
            if y >= area.bottom() {
                break;
            }
            buf.set_string(area.x + 2, y, line, Style::default());
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}
