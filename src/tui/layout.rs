/// Screen geometry shared by the components and the mouse hit-testing
///
/// Components draw into the regions computed here and `mouse` resolves clicks
/// against the same regions, so the two can never disagree.
use ratatui::layout::{Constraint, Layout, Position, Rect};
use unicode_width::UnicodeWidthStr;

use crate::catalog::{Division, PositionCategory, TEAMS};
use crate::layout_constants::{
    MODAL_HEIGHT, MODAL_WIDTH, PAGER_HEIGHT, SEARCH_BOX_HEIGHT, TEAM_CELL_WIDTH,
};

/// Tab line + separator line
pub const TAB_BAR_HEIGHT: u16 = 2;
/// Separator line + status line
pub const STATUS_BAR_HEIGHT: u16 = 2;
/// Table header + separator line
pub const TABLE_HEADER_HEIGHT: u16 = 2;
/// Title and blank line above the index pages
pub const INDEX_HEADER_HEIGHT: u16 = 2;

const TAB_SEPARATOR_WIDTH: u16 = 3;
const MAP_CODE_WIDTH: u16 = 3;

pub const PREVIOUS_LABEL: &str = "[ Previous ]";
pub const NEXT_LABEL: &str = "[ Next ]";
pub const GET_STARTED_LABEL: &str = "[ GET STARTED ]";

/// Top-level regions of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppAreas {
    pub tab_bar: Rect,
    pub content: Rect,
    pub status_bar: Rect,
}

pub fn app_areas(area: Rect) -> AppAreas {
    let [main, status_bar] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(STATUS_BAR_HEIGHT)]).areas(area);
    let [tab_bar, content] =
        Layout::vertical([Constraint::Length(TAB_BAR_HEIGHT), Constraint::Min(0)]).areas(main);
    AppAreas {
        tab_bar,
        content,
        status_bar,
    }
}

/// Column range `[start, end)` of each tab label on the tab line
pub fn tab_label_ranges(titles: &[&str], x: u16) -> Vec<(u16, u16)> {
    let mut ranges = Vec::with_capacity(titles.len());
    let mut pos = x;
    for (i, title) in titles.iter().enumerate() {
        if i > 0 {
            pos += TAB_SEPARATOR_WIDTH;
        }
        let end = pos + title.width() as u16;
        ranges.push((pos, end));
        pos = end;
    }
    ranges
}

/// Regions of a list view (search, position or team listing)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListRegions {
    pub title: Rect,
    pub search_box: Rect,
    pub header: Rect,
    pub rows: Rect,
    pub pager: Rect,
}

pub fn list_regions(content: Rect) -> ListRegions {
    let [title, search_box, header, rows, pager] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(SEARCH_BOX_HEIGHT),
        Constraint::Length(TABLE_HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(PAGER_HEIGHT),
    ])
    .areas(content);
    ListRegions {
        title,
        search_box,
        header,
        rows,
        pager,
    }
}

/// Index of the first table row drawn, keeping `selected` on screen
pub fn scroll_offset(rows: Rect, selected: usize) -> usize {
    match rows.height as usize {
        0 => 0,
        visible => selected.saturating_sub(visible - 1),
    }
}

/// Screen row of table row `index` when drawing from `offset`, if it is visible
pub fn table_row(rows: Rect, offset: usize, index: usize) -> Option<Rect> {
    let line = u16::try_from(index.checked_sub(offset)?).ok()?;
    (line < rows.height).then(|| Rect::new(rows.x, rows.y + line, rows.width, 1))
}

/// Clickable parts of the pager line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerRegions {
    pub previous: Rect,
    pub label: Rect,
    pub next: Rect,
}

pub fn page_label(page: usize) -> String {
    format!("Page {}", page)
}

/// `[ Previous ]  Page N  [ Next ]`, one column in from the left edge
pub fn pager_regions(pager: Rect, page: usize) -> PagerRegions {
    let previous_width = PREVIOUS_LABEL.width() as u16;
    let label_width = page_label(page).width() as u16;
    let next_width = NEXT_LABEL.width() as u16;

    let previous = Rect::new(pager.x + 1, pager.y, previous_width, 1);
    let label = Rect::new(previous.right() + 2, pager.y, label_width, 1);
    let next = Rect::new(label.right() + 2, pager.y, next_width, 1);
    PagerRegions {
        previous: previous.intersection(pager),
        label: label.intersection(pager),
        next: next.intersection(pager),
    }
}

/// Centered details panel, clipped to the screen
pub fn modal_area(area: Rect) -> Rect {
    let width = MODAL_WIDTH.min(area.width);
    let height = MODAL_HEIGHT.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// The "GET STARTED" link on the home tab
pub fn home_link_area(content: Rect) -> Rect {
    Rect::new(content.x + 2, content.y + 4, GET_STARTED_LABEL.width() as u16, 1).intersection(content)
}

/// One row per position category on the positions index
pub fn category_rows(content: Rect) -> Vec<(PositionCategory, Rect)> {
    PositionCategory::ALL
        .iter()
        .enumerate()
        .filter_map(|(i, category)| {
            let y = content.y + INDEX_HEADER_HEIGHT + 2 * i as u16;
            (y < content.bottom())
                .then(|| (*category, Rect::new(content.x + 2, y, 30.min(content.width), 1)))
        })
        .collect()
}

/// Origin of each division block in the teams grid
///
/// Eastern divisions form the first band, Western the second; each band is a
/// conference line followed by three division columns.
pub fn division_origin(content: Rect, division: Division) -> (u16, u16) {
    let index = Division::ALL
        .iter()
        .position(|d| *d == division)
        .unwrap_or_default() as u16;
    let band = index / 3;
    let column = index % 3;
    let x = content.x + column * TEAM_CELL_WIDTH;
    // conference line, division header, five teams, blank
    let y = content.y + INDEX_HEADER_HEIGHT + band * 8 + 1;
    (x, y)
}

/// Visible grid cells as `(index into TEAMS, cell)`
pub fn team_grid_cells(content: Rect) -> Vec<(usize, Rect)> {
    let mut cells = Vec::new();
    for division in Division::ALL {
        let (x, y) = division_origin(content, division);
        let members = TEAMS
            .iter()
            .enumerate()
            .filter(|(_, team)| team.division == division);
        for (k, (index, _)) in members.enumerate() {
            let cell = Rect::new(x, y + 1 + k as u16, TEAM_CELL_WIDTH - 2, 1);
            if cell.bottom() <= content.bottom() && cell.right() <= content.right() {
                cells.push((index, cell));
            }
        }
    }
    cells
}

/// Map cells as `(index into TEAMS, cell)`
///
/// Codes are placed at their map coordinates scaled to the area below the
/// title; a code that would touch an already placed one is nudged to the
/// nearest free row.
pub fn team_map_cells(content: Rect) -> Vec<(usize, Rect)> {
    let map = Rect::new(
        content.x,
        content.y + INDEX_HEADER_HEIGHT.min(content.height),
        content.width,
        content.height.saturating_sub(INDEX_HEADER_HEIGHT),
    );
    if map.width < MAP_CODE_WIDTH || map.height == 0 {
        return Vec::new();
    }

    let span_x = f32::from(map.width - MAP_CODE_WIDTH);
    let span_y = f32::from(map.height - 1);
    let mut placed: Vec<(usize, Rect)> = Vec::with_capacity(TEAMS.len());

    for (index, team) in TEAMS.iter().enumerate() {
        let x = map.x + (team.map_left / 100.0 * span_x).round() as u16;
        let natural_y = i32::from(map.y) + (team.map_top / 100.0 * span_y).round() as i32;

        let candidate = [0, 1, -1, 2, -2, 3, -3]
            .iter()
            .map(|dy| natural_y + dy)
            .filter(|y| *y >= i32::from(map.y) && *y < i32::from(map.bottom()))
            .map(|y| Rect::new(x, y as u16, MAP_CODE_WIDTH, 1))
            .find(|cell| !placed.iter().any(|(_, other)| codes_touch(cell, other)));

        if let Some(cell) = candidate {
            placed.push((index, cell));
        }
    }
    placed
}

/// Same row and less than one column apart
fn codes_touch(a: &Rect, b: &Rect) -> bool {
    a.y == b.y && a.x < b.right() + 1 && b.x < a.right() + 1
}

pub fn hit(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(Position::new(column, row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_areas_80x24() {
        let areas = app_areas(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.tab_bar, Rect::new(0, 0, 80, 2));
        assert_eq!(areas.content, Rect::new(0, 2, 80, 20));
        assert_eq!(areas.status_bar, Rect::new(0, 22, 80, 2));
    }

    #[test]
    fn test_tab_label_ranges() {
        let ranges = tab_label_ranges(&["Home", "Search"], 0);
        assert_eq!(ranges, vec![(0, 4), (7, 13)]);
    }

    #[test]
    fn test_list_regions_stack() {
        let regions = list_regions(Rect::new(0, 2, 80, 20));
        assert_eq!(regions.title.y, 2);
        assert_eq!(regions.search_box, Rect::new(0, 3, 80, 3));
        assert_eq!(regions.header.y, 6);
        assert_eq!(regions.rows, Rect::new(0, 8, 80, 13));
        assert_eq!(regions.pager, Rect::new(0, 21, 80, 1));
    }

    #[test]
    fn test_table_row_visibility() {
        let rows = Rect::new(0, 8, 80, 2);
        assert_eq!(table_row(rows, 0, 1), Some(Rect::new(0, 9, 80, 1)));
        assert_eq!(table_row(rows, 0, 2), None);

        // scrolled down by one: row 0 is hidden, row 2 takes the last line
        assert_eq!(table_row(rows, 1, 0), None);
        assert_eq!(table_row(rows, 1, 2), Some(Rect::new(0, 9, 80, 1)));
    }

    #[test]
    fn test_scroll_offset_keeps_selection_visible() {
        let rows = Rect::new(0, 8, 80, 13);
        assert_eq!(scroll_offset(rows, 0), 0);
        assert_eq!(scroll_offset(rows, 12), 0);
        assert_eq!(scroll_offset(rows, 14), 2);
        assert_eq!(scroll_offset(Rect::new(0, 0, 80, 0), 5), 0);
    }

    #[test]
    fn test_pager_regions() {
        let regions = pager_regions(Rect::new(0, 21, 80, 1), 3);
        assert_eq!(regions.previous, Rect::new(1, 21, 12, 1));
        assert_eq!(regions.label, Rect::new(15, 21, 6, 1));
        assert_eq!(regions.next, Rect::new(23, 21, 8, 1));
    }

    #[test]
    fn test_modal_is_centered_and_clipped() {
        assert_eq!(modal_area(Rect::new(0, 0, 80, 30)), Rect::new(12, 3, 56, 24));
        assert_eq!(modal_area(Rect::new(0, 0, 40, 10)), Rect::new(0, 0, 40, 10));
    }

    #[test]
    fn test_grid_shows_all_teams_on_standard_terminal() {
        let cells = team_grid_cells(Rect::new(0, 2, 80, 20));
        assert_eq!(cells.len(), TEAMS.len());
        for (i, (_, a)) in cells.iter().enumerate() {
            for (_, b) in &cells[i + 1..] {
                assert!(a.intersection(*b).is_empty());
            }
        }
    }

    #[test]
    fn test_map_codes_never_touch() {
        for (width, height) in [(80, 20), (120, 40)] {
            let cells = team_map_cells(Rect::new(0, 2, width, height));
            assert_eq!(cells.len(), TEAMS.len());
            for (i, (_, a)) in cells.iter().enumerate() {
                for (_, b) in &cells[i + 1..] {
                    assert!(!codes_touch(a, b), "{:?} touches {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_map_on_tiny_area_is_empty() {
        assert!(team_map_cells(Rect::new(0, 0, 2, 10)).is_empty());
    }
}
