//! General test utilities for TUI tests.
//!
//! This module provides common test helpers used across multiple test modules:
//! a scripted in-memory data provider, player/season builders and buffer
//! assertions for rendered widgets.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[cfg(test)]
//! mod tests {
//!     use crate::tui::testing::*;
//!
//!     #[tokio::test]
//!     async fn test_example() {
//!         let provider = ScriptedProvider::new().with_players(make_players(3));
//!         // Use provider in tests...
//!     }
//! }
//! ```

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::config::DisplayConfig;
use crate::data_provider::{PlayerQuery, StatsDataProvider};
use crate::supabase::SupabaseError;
use crate::types::{Player, SeasonStats};

use super::component::Element;
use super::renderer::Renderer;

/// Constant for general rendering width
pub const RENDER_WIDTH: u16 = 80;

/// Player with a position and an optional team code
pub fn make_player(id: i64, name: &str, position: &str, team: Option<&str>) -> Player {
    Player {
        id,
        full_name: name.to_string(),
        position: position.to_string(),
        team_name: team.map(str::to_string),
    }
}

/// `count` guards named "Player 1".."Player N" with ids 1..=N
pub fn make_players(count: usize) -> Vec<Player> {
    (1..=count)
        .map(|i| make_player(i as i64, &format!("Player {}", i), "G", Some("BOS")))
        .collect()
}

/// Season totals with `games_played` and everything else zero
pub fn make_season(games_played: f64) -> SeasonStats {
    SeasonStats {
        games_played,
        ..Default::default()
    }
}

/// In-memory stand-in for the stats store
///
/// Applies the same filters the store would (id, positions, team code,
/// case-insensitive name substring, row window) and records every query.
#[derive(Default)]
pub struct ScriptedProvider {
    players: Vec<Player>,
    seasons: HashMap<i64, SeasonStats>,
    failure: Option<String>,
    /// Artificial latency keyed by the name filter of a query
    delays: HashMap<String, Duration>,
    queries: Mutex<Vec<PlayerQuery>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_players(mut self, players: Vec<Player>) -> Self {
        self.players = players;
        self
    }

    pub fn with_season(mut self, player_id: i64, season: SeasonStats) -> Self {
        self.seasons.insert(player_id, season);
        self
    }

    /// Every player query fails with a server error carrying `message`
    pub fn failing_players(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    /// Delay answers to queries whose name filter is `name`
    pub fn with_delay(mut self, name: &str, millis: u64) -> Self {
        self.delays
            .insert(name.to_string(), Duration::from_millis(millis));
        self
    }

    pub fn recorded_queries(&self) -> Vec<PlayerQuery> {
        self.queries.lock().unwrap().clone()
    }

    fn matches(player: &Player, query: &PlayerQuery) -> bool {
        if let Some(id) = query.id {
            if player.id != id {
                return false;
            }
        }
        if !query.positions.is_empty() && !query.positions.contains(&player.position.as_str()) {
            return false;
        }
        if let Some(code) = query.team_code {
            if player.team_name.as_deref() != Some(code) {
                return false;
            }
        }
        if let Some(name) = &query.name_contains {
            if !player
                .full_name
                .to_lowercase()
                .contains(&name.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}

#[async_trait]
impl StatsDataProvider for ScriptedProvider {
    async fn players(&self, query: &PlayerQuery) -> Result<Vec<Player>, SupabaseError> {
        self.queries.lock().unwrap().push(query.clone());

        let delay = query
            .name_contains
            .as_ref()
            .and_then(|name| self.delays.get(name))
            .copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(message) = &self.failure {
            return Err(SupabaseError::Api {
                status: 500,
                code: None,
                message: message.clone(),
            });
        }

        Ok(self
            .players
            .iter()
            .filter(|p| Self::matches(p, query))
            .skip(query.offset)
            .take(query.limit)
            .cloned()
            .collect())
    }

    async fn player_season_stats(&self, player_id: i64) -> Result<SeasonStats, SupabaseError> {
        self.seasons
            .get(&player_id)
            .cloned()
            .ok_or(SupabaseError::NoRows)
    }
}

/// Render an element tree into a fresh buffer
pub fn render_element(element: Element, width: u16, height: u16) -> Buffer {
    render_element_with_config(element, width, height, &DisplayConfig::default())
}

pub fn render_element_with_config(
    element: Element,
    width: u16,
    height: u16,
    config: &DisplayConfig,
) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    let mut renderer = Renderer::new();
    renderer.render(element, buf.area, &mut buf, config);
    buf
}

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Whether any line of the buffer contains `needle`
pub fn buffer_contains(buf: &Buffer, needle: &str) -> bool {
    buffer_lines(buf).iter().any(|line| line.contains(needle))
}

/// Helper for buffer assertions
pub fn assert_buffer(buf: &Buffer, expected: &[&str]) {
    let actual = buffer_lines(buf);
    let buffer_width = buf.area().width as usize;

    assert_eq!(
        actual.len(),
        expected.len(),
        "Buffer height mismatch: expected {} lines, got {}",
        expected.len(),
        actual.len()
    );
    for (i, expected_line) in expected.iter().enumerate() {
        assert_eq!(
            actual[i].chars().count(),
            buffer_width,
            "Line {} width mismatch: expected {}, got {}",
            i,
            buffer_width,
            actual[i].chars().count()
        );
        assert_eq!(
            actual[i].trim_end(),
            expected_line.trim_end(),
            "Line {} mismatch:\nExpected: '{}'\nActual:   '{}'",
            i,
            expected_line,
            actual[i]
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Style;

    #[tokio::test]
    async fn test_scripted_provider_windows_rows() {
        let provider = ScriptedProvider::new().with_players(make_players(5));
        let query = PlayerQuery {
            offset: 2,
            limit: 2,
            ..Default::default()
        };
        let rows = provider.players(&query).await.unwrap();
        assert_eq!(rows.iter().map(|p| p.id).collect::<Vec<_>>(), vec![3, 4]);
        assert_eq!(provider.recorded_queries().len(), 1);
    }

    #[tokio::test]
    async fn test_scripted_provider_filters() {
        let provider = ScriptedProvider::new().with_players(vec![
            make_player(1, "Jamal Murray", "G", Some("DEN")),
            make_player(2, "Nikola Jokic", "C", Some("DEN")),
            make_player(3, "LeBron James", "F", Some("LAL")),
        ]);
        let query = PlayerQuery {
            name_contains: Some("JAM".into()),
            limit: 10,
            ..Default::default()
        };
        assert_eq!(provider.players(&query).await.unwrap().len(), 2);

        let query = PlayerQuery {
            team_code: Some("DEN"),
            positions: vec!["C"],
            limit: 10,
            ..Default::default()
        };
        let rows = provider.players(&query).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].full_name, "Nikola Jokic");
    }

    #[tokio::test]
    async fn test_scripted_provider_missing_season_is_no_rows() {
        let provider = ScriptedProvider::new();
        assert!(matches!(
            provider.player_season_stats(1).await,
            Err(SupabaseError::NoRows)
        ));
    }

    #[test]
    fn test_buffer_lines() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 2));
        buf.set_string(0, 1, "ab", Style::default());
        assert_eq!(buffer_lines(&buf), vec!["    ".to_string(), "ab  ".to_string()]);
        assert!(buffer_contains(&buf, "ab"));
    }
}
