/// Static lookup tables: position categories, team slugs and the team directory
///
/// These are plain data. Unknown keys never panic; they resolve to `None`
/// or an empty code set and the caller decides what an empty filter means.
use phf::phf_map;

/// Every position code the store is known to use
pub const KNOWN_POSITIONS: [&str; 5] = ["G", "F", "C", "G-F", "F-C"];

static POSITION_CODES: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "guards" => &["G", "G-F"],
    "forwards" => &["F", "F-C", "G-F"],
    "centers" => &["C", "F-C"],
};

static TEAM_SLUGS: phf::Map<&'static str, &'static str> = phf_map! {
    "celtics" => "BOS",
    "nets" => "BKN",
    "knicks" => "NYK",
    "76ers" => "PHI",
    "raptors" => "TOR",
    "bulls" => "CHI",
    "cavaliers" => "CLE",
    "pistons" => "DET",
    "pacers" => "IND",
    "bucks" => "MIL",
    "hawks" => "ATL",
    "hornets" => "CHA",
    "heat" => "MIA",
    "magic" => "ORL",
    "wizards" => "WAS",
    "nuggets" => "DEN",
    "timberwolves" => "MIN",
    "thunder" => "OKC",
    "blazers" => "POR",
    "jazz" => "UTA",
    "warriors" => "GSW",
    "clippers" => "LAC",
    "lakers" => "LAL",
    "suns" => "PHX",
    "kings" => "SAC",
    "mavericks" => "DAL",
    "rockets" => "HOU",
    "grizzlies" => "MEM",
    "pelicans" => "NOP",
    "spurs" => "SAS",
};

/// Position filter category shown on the positions index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionCategory {
    Guards,
    Forwards,
    Centers,
}

impl PositionCategory {
    pub const ALL: [PositionCategory; 3] = [
        PositionCategory::Guards,
        PositionCategory::Forwards,
        PositionCategory::Centers,
    ];

    pub fn key(self) -> &'static str {
        match self {
            PositionCategory::Guards => "guards",
            PositionCategory::Forwards => "forwards",
            PositionCategory::Centers => "centers",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PositionCategory::Guards => "Guards",
            PositionCategory::Forwards => "Forwards",
            PositionCategory::Centers => "Centers",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(key.trim()))
    }

    pub fn codes(self) -> &'static [&'static str] {
        position_codes(self.key())
    }
}

/// Position codes for a category key; empty for unknown keys
pub fn position_codes(key: &str) -> &'static [&'static str] {
    POSITION_CODES
        .get(key.trim().to_ascii_lowercase().as_str())
        .copied()
        .unwrap_or(&[])
}

/// Case-insensitive team slug lookup
pub fn slug_to_code(slug: &str) -> Option<&'static str> {
    TEAM_SLUGS
        .get(slug.trim().to_ascii_lowercase().as_str())
        .copied()
}

/// Known position codes not covered by any category
pub fn unreachable_positions() -> Vec<&'static str> {
    KNOWN_POSITIONS
        .iter()
        .copied()
        .filter(|code| !POSITION_CODES.values().any(|codes| codes.contains(code)))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conference {
    Eastern,
    Western,
}

impl Conference {
    pub fn name(self) -> &'static str {
        match self {
            Conference::Eastern => "Eastern",
            Conference::Western => "Western",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Division {
    Atlantic,
    Central,
    Southeast,
    Northwest,
    Pacific,
    Southwest,
}

impl Division {
    /// Display order of the teams index
    pub const ALL: [Division; 6] = [
        Division::Atlantic,
        Division::Central,
        Division::Southeast,
        Division::Northwest,
        Division::Pacific,
        Division::Southwest,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Division::Atlantic => "Atlantic",
            Division::Central => "Central",
            Division::Southeast => "Southeast",
            Division::Northwest => "Northwest",
            Division::Pacific => "Pacific",
            Division::Southwest => "Southwest",
        }
    }

    pub fn conference(self) -> Conference {
        match self {
            Division::Atlantic | Division::Central | Division::Southeast => Conference::Eastern,
            Division::Northwest | Division::Pacific | Division::Southwest => Conference::Western,
        }
    }

    pub fn teams(self) -> impl Iterator<Item = &'static TeamInfo> {
        TEAMS.iter().filter(move |t| t.division == self)
    }
}

/// One entry of the team directory
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamInfo {
    pub slug: &'static str,
    pub code: &'static str,
    pub name: &'static str,
    pub division: Division,
    /// Horizontal position on the league map, percent of width
    pub map_left: f32,
    /// Vertical position on the league map, percent of height
    pub map_top: f32,
}

const fn team(
    slug: &'static str,
    code: &'static str,
    name: &'static str,
    division: Division,
    map_left: f32,
    map_top: f32,
) -> TeamInfo {
    TeamInfo {
        slug,
        code,
        name,
        division,
        map_left,
        map_top,
    }
}

pub static TEAMS: [TeamInfo; 30] = [
    team("celtics", "BOS", "Boston Celtics", Division::Atlantic, 77.0, 31.0),
    team("nets", "BKN", "Brooklyn Nets", Division::Atlantic, 74.0, 37.0),
    team("knicks", "NYK", "New York Knicks", Division::Atlantic, 74.2, 32.4),
    team("76ers", "PHI", "Philadelphia 76ers", Division::Atlantic, 72.0, 40.0),
    team("raptors", "TOR", "Toronto Raptors", Division::Atlantic, 68.0, 25.0),
    team("bulls", "CHI", "Chicago Bulls", Division::Central, 59.0, 35.0),
    team("cavaliers", "CLE", "Cleveland Cavaliers", Division::Central, 65.5, 35.0),
    team("pistons", "DET", "Detroit Pistons", Division::Central, 63.5, 31.0),
    team("pacers", "IND", "Indiana Pacers", Division::Central, 61.0, 40.0),
    team("bucks", "MIL", "Milwaukee Bucks", Division::Central, 58.0, 29.0),
    team("hawks", "ATL", "Atlanta Hawks", Division::Southeast, 64.0, 58.0),
    team("hornets", "CHA", "Charlotte Hornets", Division::Southeast, 68.0, 53.0),
    team("heat", "MIA", "Miami Heat", Division::Southeast, 71.0, 77.0),
    team("magic", "ORL", "Orlando Magic", Division::Southeast, 68.0, 73.0),
    team("wizards", "WAS", "Washington Wizards", Division::Southeast, 70.0, 44.0),
    team("nuggets", "DEN", "Denver Nuggets", Division::Northwest, 39.0, 41.0),
    team("timberwolves", "MIN", "Minnesota Timberwolves", Division::Northwest, 52.0, 25.0),
    team("thunder", "OKC", "Oklahoma City Thunder", Division::Northwest, 48.0, 53.0),
    team("blazers", "POR", "Portland Trail Blazers", Division::Northwest, 22.5, 21.0),
    team("jazz", "UTA", "Utah Jazz", Division::Northwest, 32.0, 36.0),
    team("warriors", "GSW", "Golden State Warriors", Division::Pacific, 20.0, 40.0),
    team("clippers", "LAC", "LA Clippers", Division::Pacific, 23.0, 56.0),
    team("lakers", "LAL", "Los Angeles Lakers", Division::Pacific, 22.0, 51.0),
    team("suns", "PHX", "Phoenix Suns", Division::Pacific, 30.0, 57.0),
    team("kings", "SAC", "Sacramento Kings", Division::Pacific, 22.0, 37.0),
    team("mavericks", "DAL", "Dallas Mavericks", Division::Southwest, 49.0, 61.0),
    team("rockets", "HOU", "Houston Rockets", Division::Southwest, 51.0, 69.0),
    team("grizzlies", "MEM", "Memphis Grizzlies", Division::Southwest, 56.0, 55.0),
    team("pelicans", "NOP", "New Orleans Pelicans", Division::Southwest, 57.0, 70.0),
    team("spurs", "SAS", "San Antonio Spurs", Division::Southwest, 46.0, 70.0),
];

pub fn team_by_slug(slug: &str) -> Option<&'static TeamInfo> {
    let slug = slug.trim().to_ascii_lowercase();
    TEAMS.iter().find(|t| t.slug == slug)
}

pub fn team_by_code(code: &str) -> Option<&'static TeamInfo> {
    TEAMS.iter().find(|t| t.code.eq_ignore_ascii_case(code.trim()))
}
