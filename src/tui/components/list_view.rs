use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::config::DisplayConfig;
use crate::layout_constants::{PAGER_HEIGHT, SEARCH_BOX_HEIGHT};
use crate::listing::{ListFocus, ListViewState};
use crate::tui::component::{vertical, Component, Constraint, Element, ElementWidget};
use crate::tui::layout::TABLE_HEADER_HEIGHT;

use super::pager::PagerWidget;
use super::player_table::{TableBody, TableHeaderWidget, TableRowsWidget};
use super::search_box::{placeholder, SearchBoxWidget};

#[derive(Clone)]
pub struct ListViewProps {
    pub list: ListViewState,
    /// Content (not the tab bar) has key focus
    pub focused: bool,
}

/// Title, search box, player table and pager of one list view
///
/// The stacking matches `layout::list_regions`, which mouse hit-testing uses.
pub struct ListView;

impl Component for ListView {
    type Props = ListViewProps;
    type State = ();

    fn view(&self, props: &Self::Props, _state: &Self::State) -> Element {
        let list = &props.list;
        let editing = props.focused && list.focus == ListFocus::SearchBox;
        let table_focused = props.focused && list.focus == ListFocus::Table;

        vertical(
            [
                Constraint::Length(1),
                Constraint::Length(SEARCH_BOX_HEIGHT),
                Constraint::Length(TABLE_HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(PAGER_HEIGHT),
            ],
            vec![
                Element::Widget(Box::new(TitleWidget {
                    title: list.filter.title(),
                })),
                Element::Widget(Box::new(SearchBoxWidget {
                    text: list.search_text.clone(),
                    placeholder: placeholder(&list.filter),
                    editing,
                })),
                Element::Widget(Box::new(TableHeaderWidget)),
                Element::Widget(Box::new(TableRowsWidget {
                    body: TableBody::from_state(list),
                    selected: list.selected,
                    focused: table_focused,
                })),
                Element::Widget(Box::new(PagerWidget {
                    page: list.page,
                    has_previous: list.has_previous_page(),
                    has_next: list.has_next_page,
                })),
            ],
        )
    }
}

#[derive(Clone)]
struct TitleWidget {
    title: String,
}

impl ElementWidget for TitleWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.height == 0 {
            return;
        }
        buf.set_stringn(
            area.x + 1,
            area.y,
            &self.title,
            area.width.saturating_sub(1) as usize,
            Style::default()
                .fg(config.accent_fg)
                .add_modifier(Modifier::BOLD),
        );
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}
