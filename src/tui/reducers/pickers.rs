use tracing::debug;

use super::list_view::begin_load;
use crate::catalog::{PositionCategory, TEAMS};
use crate::listing::{ListFilter, ListFocus, ListViewState};
use crate::tui::action::Action;
use crate::tui::component::Effect;
use crate::tui::reducers::navigation::content_hint;
use crate::tui::state::AppState;
use crate::tui::types::{Tab, ViewKey};

/// Handle the positions and teams index pages
pub fn reduce_pickers(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::SelectCategory(index) => {
            let mut new_state = state;
            new_state.ui.positions.selected_category =
                (*index).min(PositionCategory::ALL.len() - 1);
            Ok((new_state, Effect::None))
        }
        Action::SelectTeam(index) => {
            let mut new_state = state;
            new_state.ui.teams.selected_team = (*index).min(TEAMS.len() - 1);
            Ok((new_state, Effect::None))
        }
        Action::ToggleTeamLayout => {
            let mut new_state = state;
            new_state.ui.teams.layout = new_state.ui.teams.layout.toggled();
            debug!("TEAMS: Layout is now {:?}", new_state.ui.teams.layout);
            Ok((new_state, Effect::None))
        }
        Action::OpenCategory(key) => Ok(open_category(state, key)),
        Action::OpenTeam(slug) => Ok(open_team(state, slug)),
        _ => Err(state),
    }
}

fn open_category(state: AppState, key: &str) -> (AppState, Effect) {
    let mut new_state = state;
    if let Some(index) = PositionCategory::ALL.iter().position(|c| c.key() == key) {
        new_state.ui.positions.selected_category = index;
    }
    let pagination = &new_state.system.config.pagination;
    let mut listing = ListViewState::new(
        ListFilter::Position(key.to_string()),
        pagination.position_page_size,
        pagination.end_detection(),
    );
    listing.focus = ListFocus::Table;
    debug!("POSITIONS: Opening listing for {}", key);
    new_state.ui.positions.listing = Some(listing);
    focus_tab(&mut new_state, Tab::Positions);
    begin_load(new_state, ViewKey::Positions)
}

fn open_team(state: AppState, slug: &str) -> (AppState, Effect) {
    let mut new_state = state;
    if let Some(index) = TEAMS.iter().position(|t| t.slug.eq_ignore_ascii_case(slug)) {
        new_state.ui.teams.selected_team = index;
    }
    let pagination = &new_state.system.config.pagination;
    let mut listing = ListViewState::new(
        ListFilter::Team(slug.to_string()),
        pagination.team_page_size,
        pagination.end_detection(),
    );
    listing.focus = ListFocus::Table;
    debug!("TEAMS: Opening listing for {}", slug);
    new_state.ui.teams.listing = Some(listing);
    focus_tab(&mut new_state, Tab::Teams);
    begin_load(new_state, ViewKey::Teams)
}

fn focus_tab(state: &mut AppState, tab: Tab) {
    state.navigation.current_tab = tab;
    state.navigation.content_focused = true;
    let hint = content_hint(state).to_string();
    state.system.set_status_message(hint);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::types::TeamLayout;

    fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
        reduce_pickers(state, &action).unwrap_or_else(|_| panic!("not handled"))
    }

    #[test]
    fn test_open_category_starts_load() {
        let (state, effect) = reduce(AppState::default(), Action::OpenCategory("centers".into()));
        let listing = state.ui.positions.listing.as_ref().unwrap();
        assert_eq!(listing.filter, ListFilter::Position("centers".into()));
        assert_eq!(listing.page_size, 15);
        assert!(listing.loading);
        assert_eq!(state.ui.positions.selected_category, 2);
        assert_eq!(state.navigation.current_tab, Tab::Positions);
        assert!(state.navigation.content_focused);
        match effect {
            Effect::FetchPage { view, load } => {
                assert_eq!(view, ViewKey::Positions);
                assert_eq!(Some(load.token), listing.pending);
            }
            other => panic!("unexpected effect {:?}", other),
        }
    }

    #[test]
    fn test_open_unknown_team_settles_empty() {
        let (state, effect) = reduce(AppState::default(), Action::OpenTeam("sonics".into()));
        assert!(matches!(effect, Effect::None));
        let listing = state.ui.teams.listing.unwrap();
        assert!(listing.is_empty_result());
        assert!(listing.error.is_none());
    }

    #[test]
    fn test_open_team_uses_team_page_size() {
        let (state, effect) = reduce(AppState::default(), Action::OpenTeam("heat".into()));
        assert!(matches!(effect, Effect::FetchPage { view: ViewKey::Teams, .. }));
        assert_eq!(state.ui.teams.listing.unwrap().page_size, 10);
        assert_eq!(TEAMS[state.ui.teams.selected_team].slug, "heat");
    }

    #[test]
    fn test_selection_is_clamped() {
        let (state, _) = reduce(AppState::default(), Action::SelectCategory(9));
        assert_eq!(state.ui.positions.selected_category, 2);
        let (state, _) = reduce(state, Action::SelectTeam(99));
        assert_eq!(state.ui.teams.selected_team, 29);
    }

    #[test]
    fn test_toggle_team_layout() {
        let (state, _) = reduce(AppState::default(), Action::ToggleTeamLayout);
        assert_eq!(state.ui.teams.layout, TeamLayout::Map);
        let (state, _) = reduce(state, Action::ToggleTeamLayout);
        assert_eq!(state.ui.teams.layout, TeamLayout::Grid);
    }
}
