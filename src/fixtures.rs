/// Mock fixture data for testing and development
///
/// This module provides consistent, deterministic fixture data that can be used for:
/// 1. Unit tests - a realistic league to page and filter through
/// 2. Development mock mode - running the app without a backend
/// 3. Benchmarks - providing consistent data for performance testing
///
/// The fixtures cover every position code, several teams and one free agent.
use crate::data_provider::PlayerQuery;
use crate::types::{Player, SeasonStats};

/// (id, name, position, team code, games, points, rebounds, assists)
type FixtureRow = (i64, &'static str, &'static str, Option<&'static str>, f64, f64, f64, f64);

const FIXTURE_ROWS: [FixtureRow; 30] = [
    (1, "Jamal Murray", "G", Some("DEN"), 59.0, 1237.0, 236.0, 385.0),
    (2, "Nikola Jokic", "C", Some("DEN"), 79.0, 2085.0, 976.0, 708.0),
    (3, "Michael Porter Jr.", "F", Some("DEN"), 81.0, 1361.0, 569.0, 122.0),
    (4, "Aaron Gordon", "F", Some("DEN"), 73.0, 1009.0, 475.0, 254.0),
    (5, "LeBron James", "F", Some("LAL"), 71.0, 1822.0, 518.0, 589.0),
    (6, "Anthony Davis", "F-C", Some("LAL"), 76.0, 1874.0, 955.0, 266.0),
    (7, "Austin Reaves", "G", Some("LAL"), 82.0, 1293.0, 357.0, 452.0),
    (8, "Jayson Tatum", "F", Some("BOS"), 74.0, 1987.0, 601.0, 363.0),
    (9, "Jaylen Brown", "G-F", Some("BOS"), 70.0, 1611.0, 387.0, 252.0),
    (10, "Jrue Holiday", "G", Some("BOS"), 69.0, 827.0, 372.0, 331.0),
    (11, "Kristaps Porzingis", "C", Some("BOS"), 57.0, 1148.0, 412.0, 114.0),
    (12, "Stephen Curry", "G", Some("GSW"), 74.0, 1956.0, 333.0, 378.0),
    (13, "Draymond Green", "F", Some("GSW"), 55.0, 478.0, 398.0, 332.0),
    (14, "Luka Doncic", "G", Some("DAL"), 70.0, 2370.0, 647.0, 686.0),
    (15, "Kyrie Irving", "G", Some("DAL"), 58.0, 1487.0, 290.0, 298.0),
    (16, "Dereck Lively II", "C", Some("DAL"), 55.0, 485.0, 381.0, 61.0),
    (17, "Giannis Antetokounmpo", "F", Some("MIL"), 73.0, 2222.0, 841.0, 476.0),
    (18, "Damian Lillard", "G", Some("MIL"), 73.0, 1794.0, 321.0, 511.0),
    (19, "Joel Embiid", "C", Some("PHI"), 39.0, 1353.0, 429.0, 219.0),
    (20, "Tyrese Maxey", "G", Some("PHI"), 70.0, 1810.0, 260.0, 435.0),
    (21, "Shai Gilgeous-Alexander", "G", Some("OKC"), 75.0, 2254.0, 413.0, 465.0),
    (22, "Chet Holmgren", "F-C", Some("OKC"), 82.0, 1364.0, 652.0, 196.0),
    (23, "Jalen Williams", "G-F", Some("OKC"), 71.0, 1350.0, 284.0, 320.0),
    (24, "Anthony Edwards", "G", Some("MIN"), 79.0, 2046.0, 427.0, 405.0),
    (25, "Rudy Gobert", "C", Some("MIN"), 76.0, 1094.0, 983.0, 99.0),
    (26, "Jimmy Butler", "F", Some("MIA"), 60.0, 1243.0, 319.0, 299.0),
    (27, "Bam Adebayo", "C", Some("MIA"), 71.0, 1367.0, 737.0, 278.0),
    (28, "Victor Wembanyama", "F-C", Some("SAS"), 71.0, 1522.0, 755.0, 274.0),
    (29, "Devin Booker", "G", Some("PHX"), 68.0, 1840.0, 306.0, 469.0),
    (30, "Free Agent Veteran", "F", None, 12.0, 64.0, 30.0, 11.0),
];

/// Every fixture player, ordered by id
pub fn create_mock_players() -> Vec<Player> {
    FIXTURE_ROWS
        .iter()
        .map(|(id, name, position, team, ..)| Player {
            id: *id,
            full_name: name.to_string(),
            position: position.to_string(),
            team_name: team.map(str::to_string),
        })
        .collect()
}

/// Season totals for a fixture player; `None` for ids without a season row
pub fn create_mock_season(player_id: i64) -> Option<SeasonStats> {
    // the free agent has no season row
    let (_, _, _, team, games, points, rebounds, assists) = FIXTURE_ROWS
        .iter()
        .find(|row| row.0 == player_id && row.3.is_some())?;
    Some(SeasonStats {
        team_name: team.map(str::to_string),
        games_played: *games,
        total_minutes: games * 33.5,
        field_goal_percentage: 0.45 + (player_id % 7) as f64 * 0.01,
        three_point_percentage: 0.33 + (player_id % 5) as f64 * 0.01,
        free_throw_percentage: 0.78 + (player_id % 9) as f64 * 0.01,
        total_rebounds: *rebounds,
        assists: *assists,
        steals: games * 1.1,
        blocks: games * 0.6,
        turnovers: games * 2.4,
        points: *points,
        fantasy_points_standard: points + rebounds * 1.2 + assists * 1.5,
        plus_minus: (player_id % 11) as f64 * 12.0 - 50.0,
    })
}

/// Apply the store's filters to the fixture players
///
/// Name matching is a case-insensitive substring match like `ilike %text%`.
pub fn query_mock_players(query: &PlayerQuery) -> Vec<Player> {
    create_mock_players()
        .into_iter()
        .filter(|player| query.id.is_none_or(|id| player.id == id))
        .filter(|player| {
            query.positions.is_empty() || query.positions.contains(&player.position.as_str())
        })
        .filter(|player| {
            query
                .team_code
                .is_none_or(|code| player.team_name.as_deref() == Some(code))
        })
        .filter(|player| {
            query.name_contains.as_ref().is_none_or(|name| {
                player
                    .full_name
                    .to_lowercase()
                    .contains(&name.to_lowercase())
            })
        })
        .skip(query.offset)
        .take(query.limit)
        .collect()
}
