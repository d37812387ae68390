// Component library exports

pub mod app;
pub mod home_tab;
pub mod list_view;
pub mod pager;
pub mod player_table;
pub mod positions_tab;
pub mod search_box;
pub mod stats_modal;
pub mod status_bar;
pub mod tabbed_panel;
pub mod teams_tab;

pub use app::App;
pub use home_tab::{HomeTab, HomeTabProps};
pub use list_view::{ListView, ListViewProps};
pub use positions_tab::{PositionsTab, PositionsTabProps};
pub use stats_modal::StatsModal;
pub use status_bar::StatusBar;
pub use tabbed_panel::{TabItem, TabbedPanel, TabbedPanelProps};
pub use teams_tab::{TeamsTab, TeamsTabProps};
