/// Keyboard event to action mapping
///
/// This module handles converting crossterm KeyEvents into Actions.
/// It contains all the keyboard navigation logic for the TUI.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, trace};

use crate::catalog::{PositionCategory, TEAMS};
use crate::listing::{ListFocus, ListViewState};

use super::action::Action;
use super::state::AppState;
use super::types::{Tab, TeamLayout, ViewKey};

/// Teams per division, the grid's column height
const DIVISION_SIZE: usize = 5;

/// Whether keystrokes are currently going into a search box
fn is_editing_search(state: &AppState) -> bool {
    state.navigation.content_focused
        && !state.details.open
        && matches!(state.active_list(), Some((_, list)) if list.focus == ListFocus::SearchBox)
}

/// Handle global keys that work regardless of tab or focus state
fn handle_global_keys(key: KeyEvent, editing: bool) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') if !editing => Some(Action::Quit),
        _ => None,
    }
}

/// Handle ESC key with priority-based navigation up through focus hierarchy
fn handle_esc_key(state: &AppState) -> Option<Action> {
    // Priority 1: close the details overlay
    if state.details.open {
        debug!("KEY: ESC pressed with details open - closing details");
        return Some(Action::CloseDetails);
    }

    // Priority 2: close an open position/team listing, back to its index
    if state.navigation.content_focused {
        match state.navigation.current_tab {
            Tab::Positions if state.ui.positions.listing.is_some() => {
                debug!("KEY: ESC pressed in position listing - back to categories");
                return Some(Action::CloseListing(ViewKey::Positions));
            }
            Tab::Teams if state.ui.teams.listing.is_some() => {
                debug!("KEY: ESC pressed in team listing - back to teams");
                return Some(Action::CloseListing(ViewKey::Teams));
            }
            _ => {}
        }

        // Priority 3: If content is focused, return to tab bar
        debug!("KEY: ESC pressed in content - returning to tab bar");
        return Some(Action::ExitContentFocus);
    }

    // Priority 4: At top level (tab bar), do nothing - use 'q' to quit
    debug!("KEY: ESC pressed at tab bar - ignoring (use 'q' to quit)");
    None
}

/// Keys while the details overlay is open; everything else is swallowed
fn handle_details_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Char('x') | KeyCode::Char('X') => Some(Action::CloseDetails),
        _ => None,
    }
}

/// Handle direct tab switching via number keys (1-4)
fn handle_number_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Char('1') => Some(Action::NavigateTab(Tab::Home)),
        KeyCode::Char('2') => Some(Action::NavigateTab(Tab::Search)),
        KeyCode::Char('3') => Some(Action::NavigateTab(Tab::Positions)),
        KeyCode::Char('4') => Some(Action::NavigateTab(Tab::Teams)),
        _ => None,
    }
}

/// Handle navigation when tab bar is focused (Left/Right/Down)
fn handle_tab_bar_navigation(key_code: KeyCode, current_tab: Tab) -> Option<Action> {
    match key_code {
        KeyCode::Left => Some(Action::NavigateTabLeft),
        KeyCode::Right => Some(Action::NavigateTabRight),
        KeyCode::Down => {
            debug!("KEY: Down pressed on tab bar - entering content focus");
            Some(Action::EnterContentFocus)
        }
        KeyCode::Enter if current_tab == Tab::Home => Some(Action::GetStarted),
        KeyCode::Enter => Some(Action::EnterContentFocus),
        _ => None,
    }
}

fn handle_home_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Enter => Some(Action::GetStarted),
        KeyCode::Up => Some(Action::ExitContentFocus),
        _ => None,
    }
}

/// Keys for a list view (search box or results table)
fn handle_list_keys(key: KeyEvent, view: ViewKey, list: &ListViewState) -> Option<Action> {
    // Paging works from either part of the view
    match key.code {
        KeyCode::PageDown => return Some(Action::NextPage(view)),
        KeyCode::PageUp => return Some(Action::PreviousPage(view)),
        _ => {}
    }

    match list.focus {
        ListFocus::SearchBox => match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(Action::SearchInput(view, c))
            }
            KeyCode::Backspace => Some(Action::SearchBackspace(view)),
            KeyCode::Enter => Some(Action::SubmitSearch(view)),
            KeyCode::Down | KeyCode::Tab => Some(Action::SetListFocus(view, ListFocus::Table)),
            KeyCode::Up => Some(Action::ExitContentFocus),
            _ => None,
        },
        ListFocus::Table => match key.code {
            KeyCode::Up if list.selected == 0 => {
                Some(Action::SetListFocus(view, ListFocus::SearchBox))
            }
            KeyCode::Up => Some(Action::SelectPrevious(view)),
            KeyCode::Down => Some(Action::SelectNext(view)),
            KeyCode::Enter => Some(Action::OpenSelected(view)),
            KeyCode::Char('[') => Some(Action::PreviousPage(view)),
            KeyCode::Char(']') => Some(Action::NextPage(view)),
            KeyCode::Char('/') | KeyCode::Tab | KeyCode::BackTab => {
                Some(Action::SetListFocus(view, ListFocus::SearchBox))
            }
            _ => None,
        },
    }
}

fn handle_positions_index_keys(key_code: KeyCode, state: &AppState) -> Option<Action> {
    let selected = state.ui.positions.selected_category;
    match key_code {
        KeyCode::Up if selected == 0 => Some(Action::ExitContentFocus),
        KeyCode::Up => Some(Action::SelectCategory(selected - 1)),
        KeyCode::Down => Some(Action::SelectCategory(
            (selected + 1).min(PositionCategory::ALL.len() - 1),
        )),
        KeyCode::Enter => PositionCategory::ALL
            .get(selected)
            .map(|category| Action::OpenCategory(category.key().to_string())),
        _ => None,
    }
}

fn handle_teams_index_keys(key_code: KeyCode, state: &AppState) -> Option<Action> {
    let teams = &state.ui.teams;
    let selected = teams.selected_team;
    let last = TEAMS.len() - 1;

    match key_code {
        KeyCode::Char('m') | KeyCode::Char('M') => return Some(Action::ToggleTeamLayout),
        KeyCode::Enter => {
            return TEAMS
                .get(selected)
                .map(|team| Action::OpenTeam(team.slug.to_string()))
        }
        KeyCode::Up if selected == 0 => return Some(Action::ExitContentFocus),
        _ => {}
    }

    let target = match (teams.layout, key_code) {
        (_, KeyCode::Up) => selected - 1,
        (_, KeyCode::Down) => (selected + 1).min(last),
        // grid columns are divisions of five
        (TeamLayout::Grid, KeyCode::Left) => selected.checked_sub(DIVISION_SIZE)?,
        (TeamLayout::Grid, KeyCode::Right) => {
            let next = selected + DIVISION_SIZE;
            if next > last {
                return None;
            }
            next
        }
        (TeamLayout::Map, KeyCode::Left) => selected.checked_sub(1)?,
        (TeamLayout::Map, KeyCode::Right) => (selected + 1).min(last),
        _ => return None,
    };
    Some(Action::SelectTeam(target))
}

/// Convert a KeyEvent into an Action based on current application state
///
/// This function implements all keyboard navigation:
/// - Global keys (q, Ctrl-C, ESC)
/// - Details overlay: Esc or x closes, everything else is swallowed
/// - Tab bar focus: Left/Right navigate tabs, Down enters content
/// - Content focus: Context-sensitive navigation, Up returns to tab bar
pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    let current_tab = state.navigation.current_tab;
    let content_focused = state.navigation.content_focused;
    let editing = is_editing_search(state);

    trace!(
        "KEY: {:?} (tab={:?}, content_focused={}, editing={}, details_open={})",
        key.code,
        current_tab,
        content_focused,
        editing,
        state.details.open
    );

    // 1. Check global keys (q/Q unless typing, Ctrl-C)
    if let Some(action) = handle_global_keys(key, editing) {
        return Some(action);
    }

    // 2. Check ESC key (priority hierarchy)
    if key.code == KeyCode::Esc {
        return handle_esc_key(state);
    }

    // 3. The details overlay takes every other key
    if state.details.open {
        return handle_details_keys(key.code);
    }

    // 4. Check number keys for direct tab switching
    if !editing {
        if let Some(action) = handle_number_keys(key.code) {
            return Some(action);
        }
    }

    // 5. Handle navigation based on focus level
    if !content_focused {
        let action = handle_tab_bar_navigation(key.code, current_tab);
        if action.is_some() {
            debug!("KEY: Tab bar navigation: {:?}", action);
        }
        return action;
    }

    // 6. Delegate to tab-specific handlers
    if let Some((view, list)) = state.active_list() {
        return handle_list_keys(key, view, list);
    }
    match current_tab {
        Tab::Home => handle_home_keys(key.code),
        Tab::Positions => handle_positions_index_keys(key.code, state),
        Tab::Teams => handle_teams_index_keys(key.code, state),
        Tab::Search => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::{make_player, make_players};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn on_tab(tab: Tab, content_focused: bool) -> AppState {
        let mut state = AppState::default();
        state.navigation.current_tab = tab;
        state.navigation.content_focused = content_focused;
        state
    }

    #[test]
    fn test_quit_keys() {
        let state = AppState::default();
        assert!(matches!(
            key_to_action(key(KeyCode::Char('q')), &state),
            Some(Action::Quit)
        ));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let editing = on_tab(Tab::Search, true);
        assert!(matches!(key_to_action(ctrl_c, &editing), Some(Action::Quit)));
    }

    #[test]
    fn test_typing_in_search_box_captures_q_and_digits() {
        let state = on_tab(Tab::Search, true);
        assert!(matches!(
            key_to_action(key(KeyCode::Char('q')), &state),
            Some(Action::SearchInput(ViewKey::Search, 'q'))
        ));
        assert!(matches!(
            key_to_action(key(KeyCode::Char('3')), &state),
            Some(Action::SearchInput(ViewKey::Search, '3'))
        ));
        assert!(matches!(
            key_to_action(key(KeyCode::Enter), &state),
            Some(Action::SubmitSearch(ViewKey::Search))
        ));
    }

    #[test]
    fn test_number_keys_switch_tabs() {
        let state = AppState::default();
        assert!(matches!(
            key_to_action(key(KeyCode::Char('4')), &state),
            Some(Action::NavigateTab(Tab::Teams))
        ));
    }

    #[test]
    fn test_tab_bar_keys() {
        let state = AppState::default();
        assert!(matches!(
            key_to_action(key(KeyCode::Right), &state),
            Some(Action::NavigateTabRight)
        ));
        assert!(matches!(
            key_to_action(key(KeyCode::Down), &state),
            Some(Action::EnterContentFocus)
        ));
        assert!(matches!(
            key_to_action(key(KeyCode::Enter), &state),
            Some(Action::GetStarted)
        ));
    }

    #[test]
    fn test_esc_priority() {
        let mut state = on_tab(Tab::Positions, true);
        state.ui.positions.listing = Some(ListViewState::new(
            crate::listing::ListFilter::Position("guards".into()),
            15,
            Default::default(),
        ));
        state.details.open(make_player(1, "A", "G", None));
        assert!(matches!(
            key_to_action(key(KeyCode::Esc), &state),
            Some(Action::CloseDetails)
        ));

        state.details.close();
        assert!(matches!(
            key_to_action(key(KeyCode::Esc), &state),
            Some(Action::CloseListing(ViewKey::Positions))
        ));

        state.ui.positions.listing = None;
        assert!(matches!(
            key_to_action(key(KeyCode::Esc), &state),
            Some(Action::ExitContentFocus)
        ));

        state.navigation.content_focused = false;
        assert!(key_to_action(key(KeyCode::Esc), &state).is_none());
    }

    #[test]
    fn test_details_overlay_swallows_keys() {
        let mut state = on_tab(Tab::Search, true);
        state.details.open(make_player(1, "A", "G", None));
        assert!(key_to_action(key(KeyCode::Char('2')), &state).is_none());
        assert!(key_to_action(key(KeyCode::Down), &state).is_none());
        assert!(matches!(
            key_to_action(key(KeyCode::Char('x')), &state),
            Some(Action::CloseDetails)
        ));
    }

    #[test]
    fn test_table_keys() {
        let mut state = on_tab(Tab::Search, true);
        state.ui.search.focus = ListFocus::Table;
        state.ui.search.rows = make_players(3);

        assert!(matches!(
            key_to_action(key(KeyCode::Up), &state),
            Some(Action::SetListFocus(ViewKey::Search, ListFocus::SearchBox))
        ));
        assert!(matches!(
            key_to_action(key(KeyCode::Char(']')), &state),
            Some(Action::NextPage(ViewKey::Search))
        ));
        assert!(matches!(
            key_to_action(key(KeyCode::Char('[')), &state),
            Some(Action::PreviousPage(ViewKey::Search))
        ));
        assert!(matches!(
            key_to_action(key(KeyCode::Enter), &state),
            Some(Action::OpenSelected(ViewKey::Search))
        ));

        state.ui.search.selected = 2;
        assert!(matches!(
            key_to_action(key(KeyCode::Up), &state),
            Some(Action::SelectPrevious(ViewKey::Search))
        ));
        // not editing: number keys still switch tabs
        assert!(matches!(
            key_to_action(key(KeyCode::Char('1')), &state),
            Some(Action::NavigateTab(Tab::Home))
        ));
    }

    #[test]
    fn test_positions_index_keys() {
        let mut state = on_tab(Tab::Positions, true);
        assert!(matches!(
            key_to_action(key(KeyCode::Up), &state),
            Some(Action::ExitContentFocus)
        ));
        state.ui.positions.selected_category = 2;
        assert!(matches!(
            key_to_action(key(KeyCode::Enter), &state),
            Some(Action::OpenCategory(ref k)) if k == "centers"
        ));
    }

    #[test]
    fn test_teams_grid_keys() {
        let mut state = on_tab(Tab::Teams, true);
        state.ui.teams.selected_team = 7;
        assert!(matches!(
            key_to_action(key(KeyCode::Right), &state),
            Some(Action::SelectTeam(12))
        ));
        assert!(matches!(
            key_to_action(key(KeyCode::Left), &state),
            Some(Action::SelectTeam(2))
        ));
        assert!(matches!(
            key_to_action(key(KeyCode::Char('m')), &state),
            Some(Action::ToggleTeamLayout)
        ));
        assert!(matches!(
            key_to_action(key(KeyCode::Enter), &state),
            Some(Action::OpenTeam(ref slug)) if slug == TEAMS[7].slug
        ));

        state.ui.teams.selected_team = 2;
        assert!(key_to_action(key(KeyCode::Left), &state).is_none());
    }
}
