/// Core type definitions used across the TUI
///
/// This module contains the small enums used for navigation and for
/// addressing the per-view list states.

/// Tab enum for main navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Search,
    Positions,
    Teams,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Search, Tab::Positions, Tab::Teams];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Search => "Search",
            Tab::Positions => "Positions",
            Tab::Teams => "Teams",
        }
    }

    pub fn next(self) -> Tab {
        match self {
            Tab::Home => Tab::Search,
            Tab::Search => Tab::Positions,
            Tab::Positions => Tab::Teams,
            Tab::Teams => Tab::Home,
        }
    }

    pub fn previous(self) -> Tab {
        match self {
            Tab::Home => Tab::Teams,
            Tab::Search => Tab::Home,
            Tab::Positions => Tab::Search,
            Tab::Teams => Tab::Positions,
        }
    }
}

/// Which list view an action or a fetch result belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKey {
    Search,
    Positions,
    Teams,
}

impl ViewKey {
    /// The list view shown on `tab`, if it has one
    pub fn for_tab(tab: Tab) -> Option<ViewKey> {
        match tab {
            Tab::Home => None,
            Tab::Search => Some(ViewKey::Search),
            Tab::Positions => Some(ViewKey::Positions),
            Tab::Teams => Some(ViewKey::Teams),
        }
    }
}

/// Teams index presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TeamLayout {
    /// Teams grouped by division
    #[default]
    Grid,
    /// Team codes placed on a league map
    Map,
}

impl TeamLayout {
    pub fn toggled(self) -> TeamLayout {
        match self {
            TeamLayout::Grid => TeamLayout::Map,
            TeamLayout::Map => TeamLayout::Grid,
        }
    }
}
