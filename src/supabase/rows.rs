/// PostgREST wire rows
///
/// serde shapes for the JSON the `players` and `player_season_stats` tables
/// return. Numeric columns are nullable in the store, so they decode through
/// `null_as_zero`.
use serde::{Deserialize, Deserializer};

use crate::types::{Player, SeasonStats};

/// Embedded `teams` row produced by `team_id!inner(name)`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TeamRef {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerRow {
    pub id: i64,
    pub full_name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub team_id: Option<TeamRef>,
}

impl From<PlayerRow> for Player {
    fn from(row: PlayerRow) -> Self {
        Player {
            id: row.id,
            full_name: row.full_name,
            position: row.position.unwrap_or_else(|| "UNKNOWN".to_string()),
            team_name: row.team_id.and_then(|t| t.name),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeasonStatsRow {
    pub player_id: i64,
    #[serde(default)]
    pub team_name: Option<TeamRef>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub games_played: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total_minutes: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub field_goal_percentage: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub three_point_percentage: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub free_throw_percentage: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total_rebounds: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub assists: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub steals: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub blocks: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub turnovers: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub points: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub fantasy_points_standard: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub plus_minus: f64,
}

impl From<SeasonStatsRow> for SeasonStats {
    fn from(row: SeasonStatsRow) -> Self {
        SeasonStats {
            team_name: row.team_name.and_then(|t| t.name),
            games_played: row.games_played,
            total_minutes: row.total_minutes,
            field_goal_percentage: row.field_goal_percentage,
            three_point_percentage: row.three_point_percentage,
            free_throw_percentage: row.free_throw_percentage,
            total_rebounds: row.total_rebounds,
            assists: row.assists,
            steals: row.steals,
            blocks: row.blocks,
            turnovers: row.turnovers,
            points: row.points,
            fantasy_points_standard: row.fantasy_points_standard,
            plus_minus: row.plus_minus,
        }
    }
}

/// Error payload PostgREST returns on non-2xx responses
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_row_with_team() {
        let json = r#"{"id": 12, "full_name": "Jamal Murray", "position": "G", "team_id": {"name": "DEN"}}"#;
        let row: PlayerRow = serde_json::from_str(json).unwrap();
        let player = Player::from(row);
        assert_eq!(player.id, 12);
        assert_eq!(player.team_name.as_deref(), Some("DEN"));
        assert_eq!(player.position, "G");
    }

    #[test]
    fn test_player_row_missing_team_and_position() {
        let json = r#"{"id": 3, "full_name": "Someone", "position": null, "team_id": null}"#;
        let player = Player::from(serde_json::from_str::<PlayerRow>(json).unwrap());
        assert_eq!(player.team_name, None);
        assert_eq!(player.position, "UNKNOWN");
    }

    #[test]
    fn test_stats_row_nulls_become_zero() {
        let json = r#"{
            "id": 1, "player_id": 12, "season_id": 1,
            "games_played": 70, "total_minutes": null,
            "field_goal_percentage": 0.481, "points": 1479.0,
            "plus_minus": -45,
            "team_name": {"name": "DEN"}
        }"#;
        let stats = SeasonStats::from(serde_json::from_str::<SeasonStatsRow>(json).unwrap());
        assert_eq!(stats.games_played, 70.0);
        assert_eq!(stats.total_minutes, 0.0);
        assert_eq!(stats.assists, 0.0);
        assert_eq!(stats.plus_minus, -45.0);
        assert_eq!(stats.team_name.as_deref(), Some("DEN"));
    }

    #[test]
    fn test_error_body_partial() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"code":"PGRST116","message":"JSON object requested"}"#)
                .unwrap();
        assert_eq!(body.code.as_deref(), Some("PGRST116"));
        assert!(body.hint.is_none());
    }
}
