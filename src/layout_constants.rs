//! Shared layout constants used across CLI and TUI components.
//!
//! This module centralizes common layout values to ensure consistency
//! and make it easier to adjust layouts globally.

/// Width of the player name column
pub const NAME_COL_WIDTH: usize = 28;

/// Width of the team code column
pub const TEAM_COL_WIDTH: usize = 6;

/// Width of the position column
pub const POSITION_COL_WIDTH: usize = 8;

/// Width of stat labels in the details report
pub const STAT_LABEL_WIDTH: usize = 14;

/// Width of the stats modal panel, borders included
pub const MODAL_WIDTH: u16 = 56;

/// Height of the stats modal panel, borders included
pub const MODAL_HEIGHT: u16 = 24;

/// Width of one team cell in the teams grid
pub const TEAM_CELL_WIDTH: u16 = 26;

/// Rows taken by the search box (border + input + border)
pub const SEARCH_BOX_HEIGHT: u16 = 3;

/// Rows taken by the pager line
pub const PAGER_HEIGHT: u16 = 1;
