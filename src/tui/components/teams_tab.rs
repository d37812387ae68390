use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::catalog::{Division, TEAMS};
use crate::config::{DisplayConfig, SELECTION_STYLE_MODIFIER};
use crate::formatting::truncate;
use crate::tui::component::{Component, Element, ElementWidget};
use crate::tui::layout::{division_origin, team_grid_cells, team_map_cells};
use crate::tui::state::TeamsUiState;
use crate::tui::types::TeamLayout;

use super::list_view::{ListView, ListViewProps};

pub const GRID_TITLE: &str = "Teams by division  (m: map)";
pub const MAP_TITLE: &str = "Team map  (m: grid)";

#[derive(Clone)]
pub struct TeamsTabProps {
    pub teams: TeamsUiState,
    pub focused: bool,
}

/// Teams tab: division grid or league map, or the listing of the opened team
pub struct TeamsTab;

impl Component for TeamsTab {
    type Props = TeamsTabProps;
    type State = ();

    fn view(&self, props: &Self::Props, _state: &Self::State) -> Element {
        if let Some(list) = &props.teams.listing {
            return ListView.view(
                &ListViewProps {
                    list: list.clone(),
                    focused: props.focused,
                },
                &(),
            );
        }
        Element::Widget(Box::new(TeamPickerWidget {
            layout: props.teams.layout,
            selected: props.teams.selected_team,
            focused: props.focused,
        }))
    }
}

#[derive(Clone)]
struct TeamPickerWidget {
    layout: TeamLayout,
    selected: usize,
    focused: bool,
}

impl TeamPickerWidget {
    fn team_style(&self, index: usize, config: &DisplayConfig) -> Style {
        if index != self.selected {
            return Style::default();
        }
        let fg = if self.focused {
            config.selection_fg
        } else {
            config.unfocused_selection_fg
        };
        Style::default().fg(fg).add_modifier(SELECTION_STYLE_MODIFIER)
    }

    fn render_grid(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let heading = Style::default()
            .fg(config.accent_fg)
            .add_modifier(Modifier::BOLD);

        for division in Division::ALL {
            let (x, y) = division_origin(area, division);
            // conference line sits right above the first division of each band
            if x == area.x && y > area.y && y - 1 < area.bottom() {
                let line = format!("{} Conference", division.conference().name());
                buf.set_stringn(area.x + 1, y - 1, line, area.width as usize - 1, heading);
            }
            if y < area.bottom() && x < area.right() {
                buf.set_stringn(
                    x + 1,
                    y,
                    division.name(),
                    (area.right() - x).saturating_sub(1) as usize,
                    Style::default().add_modifier(Modifier::UNDERLINED),
                );
            }
        }

        for (index, cell) in team_grid_cells(area) {
            let name = truncate(TEAMS[index].name, cell.width.saturating_sub(1) as usize);
            buf.set_stringn(
                cell.x + 1,
                cell.y,
                name,
                cell.width as usize - 1,
                self.team_style(index, config),
            );
        }
    }

    fn render_map(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        for (index, cell) in team_map_cells(area) {
            buf.set_stringn(
                cell.x,
                cell.y,
                TEAMS[index].code,
                cell.width as usize,
                self.team_style(index, config),
            );
        }
    }
}

impl ElementWidget for TeamPickerWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.height == 0 || area.width < 2 {
            return;
        }
        let title = match self.layout {
            TeamLayout::Grid => GRID_TITLE,
            TeamLayout::Map => MAP_TITLE,
        };
        buf.set_stringn(
            area.x + 1,
            area.y,
            title,
            area.width as usize - 1,
            Style::default()
                .fg(config.accent_fg)
                .add_modifier(Modifier::BOLD),
        );

        match self.layout {
            TeamLayout::Grid => self.render_grid(area, buf, config),
            TeamLayout::Map => self.render_map(area, buf, config),
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}
