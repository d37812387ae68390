use crate::tui::component::{vertical, Component, Constraint, Element};
use crate::tui::layout::STATUS_BAR_HEIGHT;
use crate::tui::state::AppState;
use crate::tui::types::Tab;

use super::{
    home_tab::HomeTabProps, list_view::ListViewProps, positions_tab::PositionsTabProps,
    teams_tab::TeamsTabProps, HomeTab, ListView, PositionsTab, StatsModal, StatusBar, TabItem,
    TabbedPanel, TabbedPanelProps, TeamsTab,
};

/// Root App component
///
/// This is the top-level component that renders the entire application.
/// It uses the global AppState as props and delegates rendering to child components.
pub struct App;

impl Component for App {
    type Props = AppState;
    type State = ();

    fn view(&self, props: &Self::Props, _state: &Self::State) -> Element {
        tracing::trace!(
            "APP: App.view() called with tab={:?} details_open={}",
            props.navigation.current_tab,
            props.details.open
        );
        let base = vertical(
            [
                Constraint::Min(0),                    // TabbedPanel (tabs + content)
                Constraint::Length(STATUS_BAR_HEIGHT), // StatusBar (separator + content)
            ],
            vec![
                self.render_main_tabs(props),
                StatusBar.view(&props.system, &()),
            ],
        );

        if props.details.open {
            Element::Overlay {
                base: Box::new(base),
                overlay: Box::new(StatsModal.view(&props.details, &())),
            }
        } else {
            base
        }
    }
}

impl App {
    /// Render main navigation tabs using TabbedPanel
    fn render_main_tabs(&self, state: &AppState) -> Element {
        let current = state.navigation.current_tab;

        // Only the active tab builds its content
        let tabs = Tab::ALL
            .iter()
            .map(|tab| {
                let active = *tab == current;
                let content = if active {
                    self.render_tab_content(state, *tab)
                } else {
                    Element::None
                };
                TabItem::new(tab.title(), active, content)
            })
            .collect();

        TabbedPanel.view(
            &TabbedPanelProps {
                tabs,
                focused: !state.navigation.content_focused && !state.details.open,
            },
            &(),
        )
    }

    fn render_tab_content(&self, state: &AppState, tab: Tab) -> Element {
        let focused = state.navigation.content_focused && !state.details.open;
        match tab {
            Tab::Home => HomeTab.view(&HomeTabProps { focused }, &()),
            Tab::Search => ListView.view(
                &ListViewProps {
                    list: state.ui.search.clone(),
                    focused,
                },
                &(),
            ),
            Tab::Positions => PositionsTab.view(
                &PositionsTabProps {
                    positions: state.ui.positions.clone(),
                    focused,
                },
                &(),
            ),
            Tab::Teams => TeamsTab.view(
                &TeamsTabProps {
                    teams: state.ui.teams.clone(),
                    focused,
                },
                &(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::layout::{app_areas, home_link_area};
    use crate::listing::{EndOfResults, ListFilter, ListViewState};
    use crate::tui::testing::{
        buffer_contains, buffer_lines, make_player, make_players, render_element,
    };
    use ratatui::layout::Rect;

    #[test]
    fn test_app_home_screen() {
        let state = AppState::default();
        let buf = render_element(App.view(&state, &()), 80, 24);
        let lines = buffer_lines(&buf);
        assert!(lines[0].starts_with("Home │ Search │ Positions │ Teams"));
        assert!(lines[23].contains("No data loaded"));

        let link = home_link_area(app_areas(Rect::new(0, 0, 80, 24)).content);
        assert!(lines[link.y as usize][link.x as usize..].starts_with("[ GET STARTED ]"));
    }

    #[test]
    fn test_app_search_tab() {
        let mut state = AppState::default();
        state.navigation.current_tab = Tab::Search;
        let buf = render_element(App.view(&state, &()), 80, 24);
        assert!(buffer_contains(&buf, "Player Search"));
        assert!(!buffer_contains(&buf, "GET STARTED"));
    }

    #[test]
    fn test_app_with_details_open_is_overlay() {
        let mut state = AppState::default();
        state
            .details
            .open(make_player(1, "Nikola Jokic", "C", Some("DEN")));
        let element = App.view(&state, &());
        assert!(matches!(element, Element::Overlay { .. }));

        let buf = render_element(element, 80, 30);
        assert!(buffer_contains(&buf, "Loading Stats..."));
    }

    #[test]
    fn test_full_position_page_reaches_last_row() {
        let mut listing =
            ListViewState::new(ListFilter::Position("guards".into()), 15, EndOfResults::Exact);
        listing.rows = make_players(15);
        listing.loaded_once = true;
        listing.selected = 14;

        let mut state = AppState::default();
        state.navigation.current_tab = Tab::Positions;
        state.navigation.content_focused = true;
        state.ui.positions.listing = Some(listing);

        let buf = render_element(App.view(&state, &()), 80, 24);
        assert!(buffer_contains(&buf, "► Player 15"));
        assert!(buffer_contains(&buf, "Player 14"));
    }
}
