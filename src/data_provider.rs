/// Trait for providing player data, abstracting over the real PostgREST client and mock implementations
use async_trait::async_trait;

use crate::supabase::query::contains_pattern;
use crate::supabase::rows::{PlayerRow, SeasonStatsRow};
use crate::supabase::{Client, Query, SupabaseError};
use crate::types::{Player, SeasonStats};

pub const PLAYERS_TABLE: &str = "players";
pub const SEASON_STATS_TABLE: &str = "player_season_stats";

/// Projection used by every list view
pub const PLAYER_COLUMNS: &str = "id,full_name,position,team_id!inner(name)";
/// Projection for the details overlay
pub const SEASON_STATS_COLUMNS: &str = "*,team_name:teams!inner(name)";

/// A fully resolved player list query
///
/// Built by `listing::PageRequest`; an empty `positions` set is never sent,
/// callers short-circuit those before reaching a provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerQuery {
    pub id: Option<i64>,
    pub positions: Vec<&'static str>,
    pub team_code: Option<&'static str>,
    /// Raw user text, escaped when turned into an `ilike` pattern
    pub name_contains: Option<String>,
    pub offset: usize,
    pub limit: usize,
}

impl PlayerQuery {
    pub fn to_query(&self) -> Query {
        let mut query = Query::from(PLAYERS_TABLE).select(PLAYER_COLUMNS);
        if let Some(id) = self.id {
            query = query.eq("id", id);
        }
        if !self.positions.is_empty() {
            query = query.in_("position", &self.positions);
        }
        if let Some(code) = self.team_code {
            query = query.eq("team_id.name", code);
        }
        if let Some(text) = &self.name_contains {
            query = query.ilike("full_name", &contains_pattern(text));
        }
        if self.limit > 0 {
            query = query.range(self.offset, self.offset + self.limit - 1);
        }
        query
    }
}

/// Build the single-row season stats query for a player
pub fn season_stats_query(player_id: i64) -> Query {
    Query::from(SEASON_STATS_TABLE)
        .select(SEASON_STATS_COLUMNS)
        .eq("player_id", player_id)
        .single()
}

/// Trait for player data providers, implemented by both the real Client and MockClient
#[async_trait]
pub trait StatsDataProvider: Send + Sync {
    /// Fetch one window of players matching `query`, in server order
    async fn players(&self, query: &PlayerQuery) -> Result<Vec<Player>, SupabaseError>;

    /// Fetch the season stats row for a player; `NoRows` when there is none
    async fn player_season_stats(&self, player_id: i64) -> Result<SeasonStats, SupabaseError>;
}

#[async_trait]
impl StatsDataProvider for Client {
    async fn players(&self, query: &PlayerQuery) -> Result<Vec<Player>, SupabaseError> {
        let rows: Vec<PlayerRow> = self.select_rows(&query.to_query()).await?;
        Ok(rows.into_iter().map(Player::from).collect())
    }

    async fn player_season_stats(&self, player_id: i64) -> Result<SeasonStats, SupabaseError> {
        let row: SeasonStatsRow = self.select_single(&season_stats_query(player_id)).await?;
        Ok(row.into())
    }
}
