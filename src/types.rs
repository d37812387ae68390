/// Shared domain types used across the application
///
/// These are the read-only projections the viewer works with. They are
/// produced from the PostgREST wire rows in `supabase::rows` and consumed
/// by both the CLI commands and the TUI.

/// Text shown wherever a player has no associated team
pub const MISSING_TEAM: &str = "N/A";

/// A player row as projected into list views
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i64,
    pub full_name: String,
    /// Raw position code (G, F, C, G-F, F-C). Unknown codes are kept as-is.
    pub position: String,
    /// Team code from the inner join on teams, e.g. "BOS"
    pub team_name: Option<String>,
}

impl Player {
    pub fn team_display(&self) -> &str {
        self.team_name.as_deref().unwrap_or(MISSING_TEAM)
    }
}

/// One season-stats row, exactly as stored (totals and fractions)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeasonStats {
    pub team_name: Option<String>,
    pub games_played: f64,
    pub total_minutes: f64,
    pub field_goal_percentage: f64,
    pub three_point_percentage: f64,
    pub free_throw_percentage: f64,
    pub total_rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
    pub points: f64,
    pub fantasy_points_standard: f64,
    pub plus_minus: f64,
}

/// Season stats joined with the player header shown in the details overlay
///
/// Name and position come from the already-known `Player`, never from a
/// second fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStats {
    pub player_id: i64,
    pub full_name: String,
    pub position: String,
    pub team_name: String,
    pub season: SeasonStats,
}

impl PlayerStats {
    pub fn new(player: &Player, season: SeasonStats) -> Self {
        let team_name = season
            .team_name
            .clone()
            .or_else(|| player.team_name.clone())
            .unwrap_or_else(|| MISSING_TEAM.to_string());
        Self {
            player_id: player.id,
            full_name: player.full_name.clone(),
            position: player.position.clone(),
            team_name,
            season,
        }
    }
}
