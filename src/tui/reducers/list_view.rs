use chrono::Local;
use tracing::debug;

use super::details::open_details;
use crate::tui::action::Action;
use crate::tui::component::Effect;
use crate::tui::state::AppState;
use crate::tui::types::ViewKey;

/// Handle actions addressed to one of the list views
pub fn reduce_list_view(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::SearchInput(view, c) => Ok(edit_search(state, *view, |text| text.push(*c))),
        Action::SearchBackspace(view) => Ok(edit_search(state, *view, |text| {
            text.pop();
        })),
        Action::SubmitSearch(view) => Ok(begin_load(state, *view)),
        Action::NextPage(view) => Ok(change_page(state, *view, true)),
        Action::PreviousPage(view) => Ok(change_page(state, *view, false)),
        Action::SelectNext(view) => Ok(with_list(state, *view, |list| list.select_next())),
        Action::SelectPrevious(view) => Ok(with_list(state, *view, |list| list.select_previous())),
        Action::SetListFocus(view, focus) => {
            // also reached by clicking, which may come from the tab bar
            let mut new_state = state;
            new_state.navigation.content_focused = true;
            Ok(with_list(new_state, *view, |list| list.focus = *focus))
        }
        Action::OpenSelected(view) => Ok(open_selected(state, *view)),
        Action::OpenRow(view, index) => {
            let (state, _) = with_list(state, *view, |list| {
                list.select_index(*index);
            });
            Ok(open_selected(state, *view))
        }
        Action::CloseListing(view) => Ok(close_listing(state, *view)),
        Action::PageLoaded {
            view,
            token,
            result,
        } => Ok(page_loaded(state, *view, *token, result)),
        _ => Err(state),
    }
}

/// Start loading the current page of `view`
///
/// Validation failures and empty filter sets settle inside the state and
/// produce no fetch.
pub fn begin_load(state: AppState, view: ViewKey) -> (AppState, Effect) {
    let mut new_state = state;
    let effect = match new_state.list_mut(view).and_then(|list| list.begin_load()) {
        Some(load) => {
            debug!(
                "LIST: {:?} loading page {} (token={})",
                view, load.request.page, load.token
            );
            Effect::FetchPage { view, load }
        }
        None => Effect::None,
    };
    (new_state, effect)
}

fn with_list(
    state: AppState,
    view: ViewKey,
    f: impl FnOnce(&mut crate::listing::ListViewState),
) -> (AppState, Effect) {
    let mut new_state = state;
    if let Some(list) = new_state.list_mut(view) {
        f(list);
    }
    (new_state, Effect::None)
}

fn edit_search(state: AppState, view: ViewKey, edit: impl FnOnce(&mut String)) -> (AppState, Effect) {
    let mut new_state = state;
    let Some(list) = new_state.list_mut(view) else {
        return (new_state, Effect::None);
    };

    let mut text = list.search_text.clone();
    edit(&mut text);
    let changed = list.set_search_text(text);

    if !changed {
        return (new_state, Effect::None);
    }
    // The search view waits for Enter; filtered views refine as you type
    if list.filter.queries_while_typing() {
        return begin_load(new_state, view);
    }
    list.clear_results();
    (new_state, Effect::None)
}

fn change_page(state: AppState, view: ViewKey, forward: bool) -> (AppState, Effect) {
    let mut new_state = state;
    let moved = match new_state.list_mut(view) {
        // A page change while loading would race the in-flight page
        Some(list) if !list.loading => {
            if forward {
                list.next_page()
            } else {
                list.previous_page()
            }
        }
        _ => false,
    };
    if !moved {
        debug!("LIST: {:?} page change ignored (forward={})", view, forward);
        return (new_state, Effect::None);
    }
    begin_load(new_state, view)
}

fn open_selected(state: AppState, view: ViewKey) -> (AppState, Effect) {
    let player = state
        .list(view)
        .and_then(|list| list.selected_player())
        .cloned();
    match player {
        Some(player) => open_details(state, player),
        None => (state, Effect::None),
    }
}

fn close_listing(state: AppState, view: ViewKey) -> (AppState, Effect) {
    let mut new_state = state;
    let closed = match view {
        ViewKey::Search => None,
        ViewKey::Positions => new_state.ui.positions.listing.take(),
        ViewKey::Teams => new_state.ui.teams.listing.take(),
    };
    if let Some(list) = closed {
        debug!(
            "LIST: Closed {:?} listing (pending token {:?} dropped)",
            list.filter, list.pending
        );
    }
    (new_state, Effect::None)
}

fn page_loaded(
    state: AppState,
    view: ViewKey,
    token: u64,
    result: &Result<crate::listing::PlayerPage, crate::error::ViewError>,
) -> (AppState, Effect) {
    let mut new_state = state;
    let applied = match new_state.list_mut(view) {
        Some(list) => list.apply_page(token, result.clone()),
        None => {
            debug!("LIST: {:?} result for closed view dropped (token={})", view, token);
            false
        }
    };
    if applied && result.is_ok() {
        new_state.system.last_update = Some(Local::now());
    }
    (new_state, Effect::None)
}
