use chrono::Local;
use tracing::debug;

use crate::tui::action::Action;
use crate::tui::component::Effect;
use crate::tui::state::AppState;
use crate::types::Player;

/// Handle the details overlay: open, close and fetch results
pub fn reduce_details(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::OpenDetails(player) => Ok(open_details(state, player.clone())),
        Action::CloseDetails => {
            let mut new_state = state;
            debug!("DETAILS: Closing overlay");
            new_state.details.close();
            Ok((new_state, Effect::None))
        }
        Action::DetailsLoaded { token, result } => {
            let mut new_state = state;
            if new_state.details.apply(*token, result.clone()) && result.is_ok() {
                new_state.system.last_update = Some(Local::now());
            }
            Ok((new_state, Effect::None))
        }
        _ => Err(state),
    }
}

/// Open the overlay for `player` and request its season stats
pub fn open_details(state: AppState, player: Player) -> (AppState, Effect) {
    let mut new_state = state;
    let player_id = player.id;
    let token = new_state.details.open(player);
    debug!("DETAILS: Opening player {} (token={})", player_id, token);
    (new_state, Effect::FetchDetails { token, player_id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::details::{FALLBACK_TITLE, LOADING_TITLE};
    use crate::error::ViewError;
    use crate::tui::testing::{make_player, make_season};

    fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
        reduce_details(state, &action).unwrap_or_else(|_| panic!("not handled"))
    }

    #[test]
    fn test_open_details_requests_stats() {
        let (state, effect) = reduce(
            AppState::default(),
            Action::OpenDetails(make_player(23, "LeBron James", "F", Some("LAL"))),
        );
        assert!(state.details.open);
        assert!(state.details.loading);
        assert_eq!(state.details.title(), LOADING_TITLE);
        match effect {
            Effect::FetchDetails { token, player_id } => {
                assert_eq!(player_id, 23);
                assert_eq!(Some(token), state.details.pending);
            }
            other => panic!("unexpected effect {:?}", other),
        }
    }

    #[test]
    fn test_details_loaded_applies_current_token() {
        let (state, effect) = reduce(
            AppState::default(),
            Action::OpenDetails(make_player(23, "LeBron James", "F", Some("LAL"))),
        );
        let token = match effect {
            Effect::FetchDetails { token, .. } => token,
            other => panic!("unexpected effect {:?}", other),
        };
        let (state, _) = reduce(
            state,
            Action::DetailsLoaded {
                token,
                result: Ok(make_season(71.0)),
            },
        );
        assert!(!state.details.loading);
        assert_eq!(state.details.title(), "LeBron James");
        assert!(state.system.last_update.is_some());
    }

    #[test]
    fn test_late_result_after_close_is_dropped() {
        let (state, effect) = reduce(
            AppState::default(),
            Action::OpenDetails(make_player(1, "A", "G", None)),
        );
        let token = match effect {
            Effect::FetchDetails { token, .. } => token,
            other => panic!("unexpected effect {:?}", other),
        };
        let (state, _) = reduce(state, Action::CloseDetails);
        let (state, _) = reduce(
            state,
            Action::DetailsLoaded {
                token,
                result: Ok(make_season(3.0)),
            },
        );
        assert!(!state.details.open);
        assert!(state.details.stats.is_none());
        assert!(state.system.last_update.is_none());
    }

    #[test]
    fn test_failed_load_keeps_overlay_open() {
        let (state, effect) = reduce(
            AppState::default(),
            Action::OpenDetails(make_player(1, "A", "G", None)),
        );
        let token = match effect {
            Effect::FetchDetails { token, .. } => token,
            other => panic!("unexpected effect {:?}", other),
        };
        let (state, _) = reduce(
            state,
            Action::DetailsLoaded {
                token,
                result: Err(ViewError::NotFound),
            },
        );
        assert!(state.details.open);
        assert!(!state.details.loading);
        assert_eq!(state.details.title(), FALLBACK_TITLE);
    }
}
