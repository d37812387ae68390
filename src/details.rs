/// Player details overlay: state, fetch and derived stat values
use tracing::debug;

use crate::data_provider::StatsDataProvider;
use crate::error::ViewError;
use crate::listing::next_token;
use crate::types::{Player, PlayerStats, SeasonStats};

pub const LOADING_TITLE: &str = "Loading Stats...";
pub const LOADING_BODY: &str = "Fetching player data...";
pub const FALLBACK_TITLE: &str = "Player Details";
pub const LOAD_FAILED: &str = "Could not load detailed stats for this player.";
pub const KEY_STATS_TITLE: &str = "Key Statistics";
pub const SHOOTING_TITLE: &str = "Shooting Percentages";

/// State of the details overlay
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailState {
    pub open: bool,
    pub player: Option<Player>,
    pub loading: bool,
    pub stats: Option<PlayerStats>,
    pub error: Option<ViewError>,
    pub pending: Option<u64>,
}

impl DetailState {
    /// Open for `player`, discarding whatever was shown before
    ///
    /// Returns the token the fetch result must carry.
    pub fn open(&mut self, player: Player) -> u64 {
        let token = next_token();
        *self = DetailState {
            open: true,
            player: Some(player),
            loading: true,
            stats: None,
            error: None,
            pending: Some(token),
        };
        token
    }

    pub fn apply(&mut self, token: u64, result: Result<SeasonStats, ViewError>) -> bool {
        if !self.open || self.pending != Some(token) {
            debug!(token, pending = ?self.pending, "Discarding stale details result");
            return false;
        }
        self.pending = None;
        self.loading = false;
        match (result, &self.player) {
            (Ok(season), Some(player)) => {
                self.stats = Some(PlayerStats::new(player, season));
                self.error = None;
            }
            (Ok(_), None) => {
                self.stats = None;
                self.error = Some(ViewError::NotFound);
            }
            (Err(err), _) => {
                self.stats = None;
                self.error = Some(err);
            }
        }
        true
    }

    /// Close and invalidate any in-flight fetch
    pub fn close(&mut self) {
        *self = DetailState::default();
    }

    pub fn title(&self) -> &str {
        if self.loading {
            LOADING_TITLE
        } else {
            self.stats
                .as_ref()
                .map(|s| s.full_name.as_str())
                .unwrap_or(FALLBACK_TITLE)
        }
    }

    /// Message shown in place of stats after a failed load
    pub fn failure_message(&self) -> Option<String> {
        if self.loading || self.stats.is_some() || !self.open {
            return None;
        }
        match &self.error {
            None | Some(ViewError::NotFound) => Some(LOAD_FAILED.to_string()),
            Some(err) => Some(format!("{} {}", LOAD_FAILED, err.detail())),
        }
    }
}

pub async fn fetch_details(
    provider: &dyn StatsDataProvider,
    player_id: i64,
) -> Result<SeasonStats, ViewError> {
    Ok(provider.player_season_stats(player_id).await?)
}

/// Season total divided by games played, 0.0 without games
pub fn per_game(total: f64, games_played: f64) -> f64 {
    if games_played > 0.0 {
        total / games_played
    } else {
        0.0
    }
}

/// Fraction in [0,1] rendered as a percentage with one decimal
pub fn format_percentage(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

pub fn format_average(value: f64) -> String {
    let formatted = format!("{:.1}", value);
    // avoid "-0.0" for tiny negative averages
    if formatted == "-0.0" {
        "0.0".to_string()
    } else {
        formatted
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatLine {
    pub label: &'static str,
    pub value: String,
}

impl StatLine {
    fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }
}

/// Display values for one player, shared by the TUI modal and the CLI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsView {
    pub full_name: String,
    pub team: String,
    pub position: String,
    pub games_played: String,
    pub key_stats: Vec<StatLine>,
    pub shooting: Vec<StatLine>,
}

impl StatsView {
    pub fn new(stats: &PlayerStats) -> Self {
        let s = &stats.season;
        let gp = s.games_played;
        let avg = |total: f64| format_average(per_game(total, gp));

        Self {
            full_name: stats.full_name.clone(),
            team: stats.team_name.clone(),
            position: stats.position.clone(),
            games_played: format!("{}", gp.max(0.0).round() as i64),
            key_stats: vec![
                StatLine::new("Points", avg(s.points)),
                StatLine::new("Assists", avg(s.assists)),
                StatLine::new("Rebounds", avg(s.total_rebounds)),
                StatLine::new("Steals", avg(s.steals)),
                StatLine::new("Blocks", avg(s.blocks)),
                StatLine::new("Turnovers", avg(s.turnovers)),
                StatLine::new("Fantasy Pts", avg(s.fantasy_points_standard)),
                StatLine::new("Minutes", avg(s.total_minutes)),
                StatLine::new("+/-", avg(s.plus_minus)),
            ],
            shooting: vec![
                StatLine::new("FG%", format_percentage(s.field_goal_percentage)),
                StatLine::new("3PT%", format_percentage(s.three_point_percentage)),
                StatLine::new("FT%", format_percentage(s.free_throw_percentage)),
            ],
        }
    }

    /// "Team: DEN   Pos: G   GP: 70"
    pub fn header_line(&self) -> String {
        format!(
            "Team: {}   Pos: {}   GP: {}",
            self.team, self.position, self.games_played
        )
    }
}
