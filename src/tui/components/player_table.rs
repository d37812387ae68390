use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::config::{DisplayConfig, SELECTION_STYLE_MODIFIER};
use crate::formatting::pad_right;
use crate::layout_constants::{NAME_COL_WIDTH, TEAM_COL_WIDTH};
use crate::listing::{ListFilter, ListViewState};
use crate::tui::component::ElementWidget;
use crate::tui::layout::{scroll_offset, table_row};
use crate::types::Player;

pub const LOADING_ROWS: &str = "Loading players...";
pub const EMPTY_PAGE: &str = "No players found on this page";
pub const SEARCH_PROMPT: &str = "Type a name and press Enter to search";

/// Width of the selector column in front of every row
const SELECTOR_WIDTH: usize = 2;

fn format_row(name: &str, team: &str, position: &str) -> String {
    format!(
        "{} {} {}",
        pad_right(name, NAME_COL_WIDTH),
        pad_right(team, TEAM_COL_WIDTH),
        position
    )
}

/// Column titles and the rule under them
#[derive(Clone)]
pub struct TableHeaderWidget;

impl ElementWidget for TableHeaderWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.height == 0 {
            return;
        }
        let header = format!(
            "{}{}",
            " ".repeat(SELECTOR_WIDTH),
            format_row("Player Name", "Team", "Position")
        );
        buf.set_stringn(area.x, area.y, header, area.width as usize, Style::default());
        if area.height > 1 {
            buf.set_string(
                area.x,
                area.y + 1,
                config.box_chars.horizontal.repeat(area.width as usize),
                Style::default(),
            );
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}

/// What the row area shows
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    Rows(Vec<Player>),
    Message { text: String, is_error: bool },
}

impl TableBody {
    pub fn from_state(state: &ListViewState) -> Self {
        if state.loading {
            return TableBody::Message {
                text: LOADING_ROWS.to_string(),
                is_error: false,
            };
        }
        if let Some(err) = &state.error {
            return TableBody::Message {
                text: err.to_string(),
                is_error: true,
            };
        }
        if state.is_empty_result() {
            return TableBody::Message {
                text: EMPTY_PAGE.to_string(),
                is_error: false,
            };
        }
        if !state.loaded_once && state.filter == ListFilter::Search {
            return TableBody::Message {
                text: SEARCH_PROMPT.to_string(),
                is_error: false,
            };
        }
        TableBody::Rows(state.rows.clone())
    }
}

/// One line per player, the selected one highlighted
#[derive(Clone)]
pub struct TableRowsWidget {
    pub body: TableBody,
    pub selected: usize,
    /// The table has key focus (selection drawn in the focused color)
    pub focused: bool,
}

impl ElementWidget for TableRowsWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.height == 0 {
            return;
        }
        let width = area.width as usize;
        match &self.body {
            TableBody::Message { text, is_error } => {
                let style = if *is_error {
                    Style::default().fg(config.error_fg)
                } else {
                    Style::default()
                };
                buf.set_stringn(area.x + 2, area.y, text, width.saturating_sub(2), style);
            }
            TableBody::Rows(players) => {
                let selection_style = Style::default()
                    .fg(if self.focused {
                        config.selection_fg
                    } else {
                        config.unfocused_selection_fg
                    })
                    .add_modifier(SELECTION_STYLE_MODIFIER);

                let offset = scroll_offset(area, self.selected);
                for (i, player) in players.iter().enumerate().skip(offset) {
                    let Some(row) = table_row(area, offset, i) else {
                        break;
                    };
                    let y = row.y;
                    let line = format_row(&player.full_name, player.team_display(), &player.position);
                    if i == self.selected {
                        let selector = format!("{} ", config.box_chars.selector);
                        buf.set_stringn(area.x, y, selector, width, Style::default());
                        buf.set_stringn(
                            area.x + SELECTOR_WIDTH as u16,
                            y,
                            line,
                            width.saturating_sub(SELECTOR_WIDTH),
                            selection_style,
                        );
                    } else {
                        buf.set_stringn(
                            area.x + SELECTOR_WIDTH as u16,
                            y,
                            line,
                            width.saturating_sub(SELECTOR_WIDTH),
                            Style::default(),
                        );
                    }
                }
            }
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}
