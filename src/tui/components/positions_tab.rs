use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::config::{DisplayConfig, SELECTION_STYLE_MODIFIER};
use crate::tui::component::{Component, Element, ElementWidget};
use crate::tui::layout::category_rows;
use crate::tui::state::PositionsUiState;

use super::list_view::{ListView, ListViewProps};

pub const POSITIONS_TITLE: &str = "Browse by position";

#[derive(Clone)]
pub struct PositionsTabProps {
    pub positions: PositionsUiState,
    pub focused: bool,
}

/// Positions tab: category index, or the listing of the opened category
pub struct PositionsTab;

impl Component for PositionsTab {
    type Props = PositionsTabProps;
    type State = ();

    fn view(&self, props: &Self::Props, _state: &Self::State) -> Element {
        match &props.positions.listing {
            Some(list) => ListView.view(
                &ListViewProps {
                    list: list.clone(),
                    focused: props.focused,
                },
                &(),
            ),
            None => Element::Widget(Box::new(CategoryIndexWidget {
                selected: props.positions.selected_category,
                focused: props.focused,
            })),
        }
    }
}

#[derive(Clone)]
struct CategoryIndexWidget {
    selected: usize,
    focused: bool,
}

impl ElementWidget for CategoryIndexWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.height == 0 {
            return;
        }
        buf.set_stringn(
            area.x + 1,
            area.y,
            POSITIONS_TITLE,
            area.width.saturating_sub(1) as usize,
            Style::default()
                .fg(config.accent_fg)
                .add_modifier(Modifier::BOLD),
        );

        for (i, (category, row)) in category_rows(area).into_iter().enumerate() {
            let style = if i == self.selected {
                let fg = if self.focused {
                    config.selection_fg
                } else {
                    config.unfocused_selection_fg
                };
                Style::default().fg(fg).add_modifier(SELECTION_STYLE_MODIFIER)
            } else {
                Style::default()
            };
            let label = format!("{} ({})", category.label(), category.codes().join(", "));
            buf.set_stringn(row.x, row.y, label, row.width as usize, style);
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PositionCategory;
    use crate::listing::{EndOfResults, ListFilter, ListViewState};
    use crate::tui::testing::{buffer_contains, buffer_lines, render_element};

    #[test]
    fn test_index_rows_sit_on_hit_rows() {
        let props = PositionsTabProps {
            positions: PositionsUiState::default(),
            focused: true,
        };
        let area = Rect::new(0, 0, 60, 10);
        let buf = render_element(PositionsTab.view(&props, &()), area.width, area.height);
        let lines = buffer_lines(&buf);
        for (category, row) in category_rows(area) {
            let line = &lines[row.y as usize];
            assert!(line[row.x as usize..].starts_with(category.label()), "{}", line);
        }
        assert_eq!(buf[(2, 2)].fg, DisplayConfig::default().selection_fg);
        assert_eq!(
            category_rows(area)[0].0,
            PositionCategory::ALL[0]
        );
    }

    #[test]
    fn test_open_category_shows_listing() {
        let props = PositionsTabProps {
            positions: PositionsUiState {
                selected_category: 1,
                listing: Some(ListViewState::new(
                    ListFilter::Position("forwards".into()),
                    15,
                    EndOfResults::Exact,
                )),
            },
            focused: true,
        };
        let buf = render_element(PositionsTab.view(&props, &()), 80, 20);
        assert!(buffer_contains(&buf, "FORWARDS"));
        assert!(!buffer_contains(&buf, POSITIONS_TITLE));
    }
}
