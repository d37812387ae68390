/// Mouse event to action mapping
///
/// Clicks are resolved against the geometry in `layout`, the same regions
/// the components draw into.
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::trace;

use crate::catalog::{PositionCategory, TEAMS};
use crate::listing::{ListFocus, ListViewState};

use super::action::Action;
use super::layout::{
    app_areas, category_rows, hit, home_link_area, list_regions, modal_area, pager_regions,
    scroll_offset, tab_label_ranges, table_row, team_grid_cells, team_map_cells,
};
use super::state::AppState;
use super::types::{Tab, TeamLayout, ViewKey};

/// Where a click landed
#[derive(Debug, Clone, PartialEq)]
enum MouseHitRegion {
    /// Outside the details panel while it is open
    Backdrop,
    /// Inside the details panel
    Modal,
    TabLabel(Tab),
    HomeLink,
    SearchBox(ViewKey),
    TableRow(ViewKey, usize),
    PreviousPage(ViewKey),
    NextPage(ViewKey),
    Category(PositionCategory),
    Team(usize),
    None,
}

fn hit_test(state: &AppState, area: Rect, column: u16, row: u16) -> MouseHitRegion {
    if state.details.open {
        return if hit(modal_area(area), column, row) {
            MouseHitRegion::Modal
        } else {
            MouseHitRegion::Backdrop
        };
    }

    let areas = app_areas(area);
    if row == areas.tab_bar.y {
        let titles: Vec<&str> = Tab::ALL.iter().map(|t| t.title()).collect();
        return tab_label_ranges(&titles, areas.tab_bar.x)
            .iter()
            .position(|(start, end)| column >= *start && column < *end)
            .map(|i| MouseHitRegion::TabLabel(Tab::ALL[i]))
            .unwrap_or(MouseHitRegion::None);
    }

    let content = areas.content;
    if !hit(content, column, row) {
        return MouseHitRegion::None;
    }

    if let Some((view, list)) = state.active_list() {
        return hit_test_list(view, list, content, column, row);
    }

    match state.navigation.current_tab {
        Tab::Home if hit(home_link_area(content), column, row) => MouseHitRegion::HomeLink,
        Tab::Positions => category_rows(content)
            .into_iter()
            .find(|(_, rect)| hit(*rect, column, row))
            .map(|(category, _)| MouseHitRegion::Category(category))
            .unwrap_or(MouseHitRegion::None),
        Tab::Teams => {
            let cells = match state.ui.teams.layout {
                TeamLayout::Grid => team_grid_cells(content),
                TeamLayout::Map => team_map_cells(content),
            };
            cells
                .into_iter()
                .find(|(_, rect)| hit(*rect, column, row))
                .map(|(index, _)| MouseHitRegion::Team(index))
                .unwrap_or(MouseHitRegion::None)
        }
        _ => MouseHitRegion::None,
    }
}

fn hit_test_list(
    view: ViewKey,
    list: &ListViewState,
    content: Rect,
    column: u16,
    row: u16,
) -> MouseHitRegion {
    let regions = list_regions(content);
    if hit(regions.search_box, column, row) {
        return MouseHitRegion::SearchBox(view);
    }
    // Rows only count while they are displayed
    if !list.loading && list.error.is_none() {
        let offset = scroll_offset(regions.rows, list.selected);
        if let Some(index) = (0..list.rows.len())
            .find(|i| table_row(regions.rows, offset, *i).is_some_and(|r| hit(r, column, row)))
        {
            return MouseHitRegion::TableRow(view, index);
        }
    }
    let pager = pager_regions(regions.pager, list.page);
    if hit(pager.previous, column, row) {
        return MouseHitRegion::PreviousPage(view);
    }
    if hit(pager.next, column, row) {
        return MouseHitRegion::NextPage(view);
    }
    MouseHitRegion::None
}

fn click_action(state: &AppState, region: MouseHitRegion) -> Option<Action> {
    match region {
        MouseHitRegion::Backdrop => Some(Action::CloseDetails),
        MouseHitRegion::Modal | MouseHitRegion::None => None,
        MouseHitRegion::TabLabel(tab) => Some(Action::NavigateTab(tab)),
        MouseHitRegion::HomeLink => Some(Action::GetStarted),
        MouseHitRegion::SearchBox(view) => Some(Action::SetListFocus(view, ListFocus::SearchBox)),
        MouseHitRegion::TableRow(view, index) => Some(Action::OpenRow(view, index)),
        // Disabled pager buttons do nothing
        MouseHitRegion::PreviousPage(view) => state
            .list(view)
            .filter(|list| list.has_previous_page() && !list.loading)
            .map(|_| Action::PreviousPage(view)),
        MouseHitRegion::NextPage(view) => state
            .list(view)
            .filter(|list| list.has_next_page && !list.loading)
            .map(|_| Action::NextPage(view)),
        MouseHitRegion::Category(category) => Some(Action::OpenCategory(category.key().to_string())),
        MouseHitRegion::Team(index) => TEAMS
            .get(index)
            .map(|team| Action::OpenTeam(team.slug.to_string())),
    }
}

/// Wheel moves the selection of whatever list is showing
fn scroll_action(state: &AppState, down: bool) -> Option<Action> {
    if state.details.open {
        return None;
    }
    if let Some((view, _)) = state.active_list() {
        return Some(if down {
            Action::SelectNext(view)
        } else {
            Action::SelectPrevious(view)
        });
    }
    match state.navigation.current_tab {
        Tab::Positions => {
            let selected = state.ui.positions.selected_category;
            Some(Action::SelectCategory(if down {
                selected + 1
            } else {
                selected.saturating_sub(1)
            }))
        }
        Tab::Teams => {
            let selected = state.ui.teams.selected_team;
            Some(Action::SelectTeam(if down {
                selected + 1
            } else {
                selected.saturating_sub(1)
            }))
        }
        _ => None,
    }
}

/// Convert a MouseEvent into an Action; `area` is the full terminal area
pub fn mouse_to_action(event: MouseEvent, state: &AppState, area: Rect) -> Option<Action> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let region = hit_test(state, area, event.column, event.row);
            trace!(
                "MOUSE: click at ({}, {}) -> {:?}",
                event.column,
                event.row,
                region
            );
            click_action(state, region)
        }
        MouseEventKind::ScrollDown => scroll_action(state, true),
        MouseEventKind::ScrollUp => scroll_action(state, false),
        _ => None,
    }
}
