use ratatui::layout::Rect;

use crate::catalog::{Conference, Division, TEAMS};
use crate::config::DisplayConfig;
use crate::formatting::{format_header, pad_right};
use crate::tui::layout::team_map_cells;

/// Size of the printed league map
const MAP_WIDTH: u16 = 80;
const MAP_HEIGHT: u16 = 24;

pub fn run(map: bool, display: &DisplayConfig) {
    if map {
        print!("{}", format_team_map(display));
    } else {
        print!("{}", format_team_directory(display));
    }
}

/// Teams grouped by conference and division, with the slug `team` expects
pub fn format_team_directory(display: &DisplayConfig) -> String {
    let mut output = String::from("\n");
    for conference in [Conference::Eastern, Conference::Western] {
        output.push_str(&format_header(
            &format!("{} Conference", conference.name()),
            true,
            display,
        ));
        for division in Division::ALL.iter().filter(|d| d.conference() == conference) {
            output.push('\n');
            output.push_str(&format_header(division.name(), false, display));
            for team in division.teams() {
                output.push_str(&format!(
                    "  {}  {} {}\n",
                    team.code,
                    pad_right(team.name, 24),
                    team.slug
                ));
            }
        }
        output.push('\n');
    }
    output
}

/// Team codes at their map positions, as on the teams tab
pub fn format_team_map(display: &DisplayConfig) -> String {
    let area = Rect::new(0, 0, MAP_WIDTH, MAP_HEIGHT);
    let mut grid = vec![vec![' '; MAP_WIDTH as usize]; MAP_HEIGHT as usize];
    for (index, cell) in team_map_cells(area) {
        for (i, c) in TEAMS[index].code.chars().enumerate() {
            grid[cell.y as usize][cell.x as usize + i] = c;
        }
    }

    let mut output = String::from("\n");
    output.push_str(&format_header("Team Map", true, display));
    // the map starts below the title rows of the tab layout
    for row in grid.iter().skip(2) {
        let line: String = row.iter().collect();
        output.push_str(line.trim_end());
        output.push('\n');
    }
    output
}
