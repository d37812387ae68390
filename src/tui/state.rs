use chrono::{DateTime, Local};

use crate::config::Config;
use crate::details::DetailState;
use crate::listing::{ListFilter, ListViewState, DEFAULT_SEARCH_PAGE_SIZE};

use super::types::{Tab, TeamLayout, ViewKey};

pub const DEFAULT_STATUS_MESSAGE: &str = "1-4: tabs  ←→: switch tab  ↓: enter  Esc: back  q: quit";

/// Root application state - single source of truth
///
/// This is the entire application state in one place.
/// All state changes happen through the reducer.
/// Components receive slices of this state as props.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Navigation state (which tab, focus)
    pub navigation: NavigationState,

    /// UI state per tab
    pub ui: UiState,

    /// Player details overlay, shared by every list view
    pub details: DetailState,

    /// System state
    pub system: SystemState,
}

#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    pub current_tab: Tab,
    /// Whether focus is on content (true) or tab bar (false)
    pub content_focused: bool,
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub search: ListViewState,
    pub positions: PositionsUiState,
    pub teams: TeamsUiState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            search: ListViewState::new(
                ListFilter::Search,
                DEFAULT_SEARCH_PAGE_SIZE,
                Default::default(),
            ),
            positions: PositionsUiState::default(),
            teams: TeamsUiState::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PositionsUiState {
    /// Highlighted entry of the category index
    pub selected_category: usize,
    /// Open category listing, if any
    pub listing: Option<ListViewState>,
}

#[derive(Debug, Clone, Default)]
pub struct TeamsUiState {
    pub layout: TeamLayout,
    /// Index into the team directory
    pub selected_team: usize,
    /// Open team listing, if any
    pub listing: Option<ListViewState>,
}

#[derive(Debug, Clone)]
pub struct SystemState {
    pub config: Config,
    pub status_message: Option<String>,
    pub status_is_error: bool,
    /// Time of the last successful load
    pub last_update: Option<DateTime<Local>>,
}

impl Default for SystemState {
    fn default() -> Self {
        Self {
            config: Config::default(),
            status_message: Some(DEFAULT_STATUS_MESSAGE.to_string()),
            status_is_error: false,
            last_update: None,
        }
    }
}

impl SystemState {
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = false;
    }

    pub fn set_status_error_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = true;
    }

    pub fn reset_status_message(&mut self) {
        self.status_message = Some(DEFAULT_STATUS_MESSAGE.to_string());
        self.status_is_error = false;
    }
}

impl AppState {
    /// Initial state for the given configuration
    pub fn new(config: Config) -> Self {
        let mut state = AppState::default();
        state.ui.search = ListViewState::new(
            ListFilter::Search,
            config.pagination.search_page_size,
            config.end_detection(),
        );
        state.system.config = config;
        state
    }

    /// The list view currently shown for `view`, if any
    pub fn list(&self, view: ViewKey) -> Option<&ListViewState> {
        match view {
            ViewKey::Search => Some(&self.ui.search),
            ViewKey::Positions => self.ui.positions.listing.as_ref(),
            ViewKey::Teams => self.ui.teams.listing.as_ref(),
        }
    }

    pub fn list_mut(&mut self, view: ViewKey) -> Option<&mut ListViewState> {
        match view {
            ViewKey::Search => Some(&mut self.ui.search),
            ViewKey::Positions => self.ui.positions.listing.as_mut(),
            ViewKey::Teams => self.ui.teams.listing.as_mut(),
        }
    }

    /// List view on the current tab, if one is showing
    pub fn active_list(&self) -> Option<(ViewKey, &ListViewState)> {
        let view = ViewKey::for_tab(self.navigation.current_tab)?;
        self.list(view).map(|list| (view, list))
    }
}
