use anyhow::{Context, Result};

use crate::config::DisplayConfig;
use crate::data_provider::{PlayerQuery, StatsDataProvider};
use crate::details::{StatsView, KEY_STATS_TITLE, LOAD_FAILED, SHOOTING_TITLE};
use crate::error::ViewError;
use crate::formatting::{format_header, format_stat_line};
use crate::types::{Player, PlayerStats};

pub async fn run(provider: &dyn StatsDataProvider, player_id: i64, display: &DisplayConfig) -> Result<()> {
    let query = PlayerQuery {
        id: Some(player_id),
        limit: 1,
        ..Default::default()
    };
    let player = provider
        .players(&query)
        .await
        .map_err(ViewError::from)
        .with_context(|| format!("Failed to look up player {}", player_id))?
        .into_iter()
        .next()
        .with_context(|| format!("No player with id {}", player_id))?;

    match crate::details::fetch_details(provider, player_id).await {
        Ok(season) => {
            let stats = PlayerStats::new(&player, season);
            print!("{}", format_player_report(&stats, display));
        }
        Err(err) => {
            tracing::warn!("Season stats for player {} unavailable: {}", player_id, err);
            print!("{}", format_missing_report(&player, &err, display));
        }
    }
    Ok(())
}

/// Header line, key statistics and shooting percentages
pub fn format_player_report(stats: &PlayerStats, display: &DisplayConfig) -> String {
    let view = StatsView::new(stats);
    let mut output = String::from("\n");
    output.push_str(&format_header(&view.full_name, true, display));
    output.push_str(&view.header_line());
    output.push_str("\n\n");

    for (title, lines) in [(KEY_STATS_TITLE, &view.key_stats), (SHOOTING_TITLE, &view.shooting)] {
        output.push_str(&format_header(title, false, display));
        for line in lines {
            output.push_str(&format_stat_line(line.label, &line.value));
            output.push('\n');
        }
        output.push('\n');
    }
    output
}

fn format_missing_report(player: &Player, err: &ViewError, display: &DisplayConfig) -> String {
    let mut output = String::from("\n");
    output.push_str(&format_header(&player.full_name, true, display));
    if err.is_not_found() {
        output.push_str(LOAD_FAILED);
    } else {
        output.push_str(&format!("{} {}", LOAD_FAILED, err.detail()));
    }
    output.push('\n');
    output
}
