use std::sync::Arc;

use tracing::debug;

use super::action::Action;
use super::component::Effect;
use super::types::ViewKey;
use crate::data_provider::StatsDataProvider;
use crate::details::fetch_details;
use crate::listing::{fetch_page, PendingLoad};

/// Effect handler for data fetching operations
///
/// This handles all async data fetching from the stats store.
/// Each method returns an Effect that will dispatch the appropriate
/// *Loaded action, carrying the request token, when complete.
pub struct DataEffects {
    provider: Arc<dyn StatsDataProvider>,
}

impl DataEffects {
    /// Create a new DataEffects handler with a stats data provider
    pub fn new(provider: Arc<dyn StatsDataProvider>) -> Self {
        Self { provider }
    }

    /// Fetch one page of players for a list view
    pub fn fetch_page(&self, view: ViewKey, load: PendingLoad) -> Effect {
        let provider = self.provider.clone();
        Effect::Async(Box::pin(async move {
            let PendingLoad { token, request } = load;
            let result = fetch_page(provider.as_ref(), &request).await;
            debug!(
                "EFFECT: page {} for {:?} resolved (token={}, ok={})",
                request.page,
                view,
                token,
                result.is_ok()
            );
            Action::PageLoaded {
                view,
                token,
                result,
            }
        }))
    }

    /// Fetch season stats for the details overlay
    pub fn fetch_details(&self, token: u64, player_id: i64) -> Effect {
        let provider = self.provider.clone();
        Effect::Async(Box::pin(async move {
            let result = fetch_details(provider.as_ref(), player_id).await;
            debug!(
                "EFFECT: details for player {} resolved (token={}, ok={})",
                player_id,
                token,
                result.is_ok()
            );
            Action::DetailsLoaded { token, result }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ViewError;
    use crate::listing::{EndOfResults, ListFilter, PageRequest};
    use crate::tui::testing::{make_players, make_season, ScriptedProvider};

    fn effects(provider: ScriptedProvider) -> DataEffects {
        DataEffects::new(Arc::new(provider))
    }

    async fn resolve(effect: Effect) -> Action {
        match effect {
            Effect::Async(future) => future.await,
            other => panic!("expected async effect, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_page_carries_view_and_token() {
        let data_effects = effects(ScriptedProvider::new().with_players(make_players(3)));
        let load = PendingLoad {
            token: 41,
            request: PageRequest {
                filter: ListFilter::Search,
                search_text: "player".into(),
                page: 1,
                page_size: 13,
                end_detection: EndOfResults::Exact,
            },
        };

        match resolve(data_effects.fetch_page(ViewKey::Search, load)).await {
            Action::PageLoaded {
                view,
                token,
                result,
            } => {
                assert_eq!(view, ViewKey::Search);
                assert_eq!(token, 41);
                assert_eq!(result.unwrap().rows.len(), 3);
            }
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_details_maps_missing_row() {
        let data_effects = effects(ScriptedProvider::new().with_season(5, make_season(10.0)));

        match resolve(data_effects.fetch_details(9, 6)).await {
            Action::DetailsLoaded { token, result } => {
                assert_eq!(token, 9);
                assert_eq!(result, Err(ViewError::NotFound));
            }
            other => panic!("unexpected action {:?}", other),
        }
    }
}
