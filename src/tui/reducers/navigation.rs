use tracing::{debug, trace};

use crate::listing::ListFocus;
use crate::tui::action::Action;
use crate::tui::component::Effect;
use crate::tui::state::AppState;
use crate::tui::types::Tab;

/// Handle all navigation-related actions
pub fn reduce_navigation(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::NavigateTab(tab) => Ok(navigate_to_tab(state, *tab)),
        Action::NavigateTabLeft => {
            let tab = state.navigation.current_tab.previous();
            Ok(navigate_to_tab(state, tab))
        }
        Action::NavigateTabRight => {
            let tab = state.navigation.current_tab.next();
            Ok(navigate_to_tab(state, tab))
        }
        Action::EnterContentFocus => Ok(enter_content_focus(state)),
        Action::ExitContentFocus => Ok(exit_content_focus(state)),
        Action::GetStarted => Ok(get_started(state)),
        _ => Err(state),
    }
}

/// Key help shown in the status bar while content is focused
pub fn content_hint(state: &AppState) -> &'static str {
    match state.navigation.current_tab {
        Tab::Home => "Enter: get started  Esc: back",
        Tab::Search => "Enter: search  Tab: results/search box  [ ]: page  Esc: back",
        Tab::Positions if state.ui.positions.listing.is_some() => {
            "Type to filter  Tab: results/search box  [ ]: page  Esc: categories"
        }
        Tab::Positions => "↑↓: select  Enter: open  Esc: back",
        Tab::Teams if state.ui.teams.listing.is_some() => {
            "Type to filter  Tab: results/search box  [ ]: page  Esc: teams"
        }
        Tab::Teams => "Arrows: select  Enter: open  m: grid/map  Esc: back",
    }
}

fn navigate_to_tab(state: AppState, tab: Tab) -> (AppState, Effect) {
    trace!("Navigating to tab: {:?}", tab);
    let mut new_state = state;
    new_state.navigation.current_tab = tab;
    new_state.navigation.content_focused = false; // Return focus to tab bar
    if new_state.details.open {
        trace!("  Closing details overlay");
        new_state.details.close();
    }
    new_state.system.reset_status_message();
    (new_state, Effect::None)
}

fn enter_content_focus(state: AppState) -> (AppState, Effect) {
    debug!("FOCUS: Entering content focus (Down key from tab bar)");
    let mut new_state = state;
    new_state.navigation.content_focused = true;
    let hint = content_hint(&new_state).to_string();
    new_state.system.set_status_message(hint);
    (new_state, Effect::None)
}

fn exit_content_focus(state: AppState) -> (AppState, Effect) {
    debug!("FOCUS: Exiting content focus");
    let mut new_state = state;
    new_state.navigation.content_focused = false;
    new_state.system.reset_status_message();
    (new_state, Effect::None)
}

fn get_started(state: AppState) -> (AppState, Effect) {
    debug!("FOCUS: Get started - jumping to the search box");
    let mut new_state = state;
    new_state.navigation.current_tab = Tab::Search;
    new_state.navigation.content_focused = true;
    new_state.ui.search.focus = ListFocus::SearchBox;
    let hint = content_hint(&new_state).to_string();
    new_state.system.set_status_message(hint);
    (new_state, Effect::None)
}
