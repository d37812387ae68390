/// Mock stats client for development and testing
use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use crate::data_provider::{PlayerQuery, StatsDataProvider};
use crate::fixtures;
use crate::supabase::SupabaseError;
use crate::types::{Player, SeasonStats};

/// Simulated round trip so loading states stay visible
const DEFAULT_LATENCY: Duration = Duration::from_millis(150);

/// Mock client that returns fixture data instead of querying the store
pub struct MockClient {
    latency: Duration,
}

impl MockClient {
    /// Create a new mock client
    pub fn new() -> Self {
        info!("Creating MockClient for development mode");
        Self {
            latency: DEFAULT_LATENCY,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StatsDataProvider for MockClient {
    async fn players(&self, query: &PlayerQuery) -> Result<Vec<Player>, SupabaseError> {
        tokio::time::sleep(self.latency).await;
        let players = fixtures::query_mock_players(query);
        info!(
            "MockClient: Returning {} mock players (offset {}, limit {})",
            players.len(),
            query.offset,
            query.limit
        );
        Ok(players)
    }

    async fn player_season_stats(&self, player_id: i64) -> Result<SeasonStats, SupabaseError> {
        tokio::time::sleep(self.latency).await;
        info!("MockClient: Returning mock season for player {}", player_id);
        fixtures::create_mock_season(player_id).ok_or(SupabaseError::NoRows)
    }
}
