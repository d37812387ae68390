use ratatui::style::{Color, Modifier};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use xdg::BaseDirectories;

use crate::formatting::BoxChars;
use crate::listing::{
    EndOfResults, DEFAULT_POSITION_PAGE_SIZE, DEFAULT_SEARCH_PAGE_SIZE, DEFAULT_TEAM_PAGE_SIZE,
};

pub const URL_ENV: &str = "SUPABASE_URL";
pub const KEY_ENV: &str = "SUPABASE_ANON_KEY";

/// Modifier applied to the active tab and the selected row
pub const SELECTION_STYLE_MODIFIER: Modifier = Modifier::REVERSED.union(Modifier::BOLD);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing backend URL: set SUPABASE_URL (environment or .env) or [backend] url in config.toml")]
    MissingUrl,

    #[error("Missing access key: set SUPABASE_ANON_KEY (environment or .env) or [backend] anon_key in config.toml")]
    MissingKey,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    pub time_format: String,
    pub use_unicode: bool,
    pub backend: BackendConfig,
    pub pagination: PaginationConfig,
    pub theme: ThemeConfig,
    /// Rendering settings derived from the fields above
    #[serde(skip)]
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct BackendConfig {
    pub url: Option<String>,
    pub anon_key: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PaginationConfig {
    pub search_page_size: usize,
    pub position_page_size: usize,
    pub team_page_size: usize,
    /// Detect the last page with a lookahead row instead of the full-page guess
    pub exact_end: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ThemeConfig {
    #[serde(deserialize_with = "deserialize_color", serialize_with = "serialize_color")]
    pub selection_fg: Color,
    #[serde(
        deserialize_with = "deserialize_color_optional",
        serialize_with = "serialize_color_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub unfocused_selection_fg: Option<Color>,
    #[serde(deserialize_with = "deserialize_color", serialize_with = "serialize_color")]
    pub accent_fg: Color,
    #[serde(deserialize_with = "deserialize_color", serialize_with = "serialize_color")]
    pub error_fg: Color,
}

/// Everything widgets need to draw themselves
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    pub use_unicode: bool,
    pub selection_fg: Color,
    pub unfocused_selection_fg: Color,
    /// Division headers, modal section titles, pager labels
    pub accent_fg: Color,
    pub error_fg: Color,
    pub box_chars: BoxChars,
}

/// Resolved backend credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub url: String,
    pub anon_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            time_format: "%H:%M:%S".to_string(),
            use_unicode: true,
            backend: BackendConfig::default(),
            pagination: PaginationConfig::default(),
            theme: ThemeConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        BackendConfig {
            url: None,
            anon_key: None,
            timeout_secs: 10,
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        PaginationConfig {
            search_page_size: DEFAULT_SEARCH_PAGE_SIZE,
            position_page_size: DEFAULT_POSITION_PAGE_SIZE,
            team_page_size: DEFAULT_TEAM_PAGE_SIZE,
            exact_end: true,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            selection_fg: Color::Rgb(6, 147, 227), // #0693e3
            unfocused_selection_fg: None,
            accent_fg: Color::Rgb(5, 128, 195),
            error_fg: Color::Red,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig::new(&ThemeConfig::default(), true)
    }
}

impl DisplayConfig {
    pub fn new(theme: &ThemeConfig, use_unicode: bool) -> Self {
        DisplayConfig {
            use_unicode,
            selection_fg: theme.selection_fg,
            unfocused_selection_fg: theme.unfocused_selection_fg(),
            accent_fg: theme.accent_fg,
            error_fg: theme.error_fg,
            box_chars: BoxChars::from_use_unicode(use_unicode),
        }
    }
}

impl ThemeConfig {
    /// Get the unfocused selection color, calculating 50% darker if not explicitly set
    pub fn unfocused_selection_fg(&self) -> Color {
        self.unfocused_selection_fg
            .unwrap_or_else(|| darken_color(self.selection_fg, 0.5))
    }
}

impl PaginationConfig {
    pub fn end_detection(&self) -> EndOfResults {
        if self.exact_end {
            EndOfResults::Exact
        } else {
            EndOfResults::FullPage
        }
    }
}

impl BackendConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    /// Resolve credentials from the process environment, falling back to the config file
    pub fn resolve(&self) -> Result<Credentials, ConfigError> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve credentials with `env` as the environment lookup
    pub fn resolve_with(
        &self,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Credentials, ConfigError> {
        let pick = |name: &str, fallback: &Option<String>| {
            env(name)
                .or_else(|| fallback.clone())
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let url = pick(URL_ENV, &self.url).ok_or(ConfigError::MissingUrl)?;
        let anon_key = pick(KEY_ENV, &self.anon_key).ok_or(ConfigError::MissingKey)?;
        Ok(Credentials { url, anon_key })
    }
}

impl Config {
    /// Recompute derived settings after deserialization
    pub fn finalize(mut self) -> Self {
        self.display = DisplayConfig::new(&self.theme, self.use_unicode);
        self
    }

    pub fn end_detection(&self) -> EndOfResults {
        self.pagination.end_detection()
    }
}

/// Show just enough of a key to recognize it
pub fn mask_key(key: &str) -> String {
    let visible: String = key.chars().take(4).collect();
    if key.chars().count() <= 4 {
        "****".to_string()
    } else {
        format!("{}****", visible)
    }
}

/// Darken a color by a given factor (0.0 = black, 1.0 = original)
fn darken_color(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let r = (r as f32 * factor) as u8;
            let g = (g as f32 * factor) as u8;
            let b = (b as f32 * factor) as u8;
            Color::Rgb(r, g, b)
        }
        other => other,
    }
}

/// Deserialize a color from a string (supports named colors, RGB hex, or RGB tuple)
fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s)))
}

fn deserialize_color_optional<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(color_str) => {
            let color = parse_color(&color_str).ok_or_else(|| {
                serde::de::Error::custom(format!("Invalid color: {}", color_str))
            })?;
            Ok(Some(color))
        }
        None => Ok(None),
    }
}

fn serialize_color<S>(color: &Color, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&format_color(color))
}

fn serialize_color_optional<S>(color: &Option<Color>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match color {
        Some(c) => serializer.serialize_str(&format_color(c)),
        None => serializer.serialize_none(),
    }
}

/// Render a color the way `parse_color` accepts it back
pub fn format_color(color: &Color) -> String {
    match color {
        Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
        other => format!("{:?}", other).to_lowercase(),
    }
}

/// Parse a color string into a ratatui Color
/// Supports:
/// - Named colors: "red", "blue", "cyan", "orange", etc.
/// - Hex colors: "#FF6600", "#f60"
/// - RGB tuples: "255,165,0"
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    match s.as_str() {
        "black" => return Some(Color::Black),
        "red" => return Some(Color::Red),
        "green" => return Some(Color::Green),
        "yellow" => return Some(Color::Yellow),
        "blue" => return Some(Color::Blue),
        "magenta" => return Some(Color::Magenta),
        "cyan" => return Some(Color::Cyan),
        "gray" | "grey" => return Some(Color::Gray),
        "darkgray" | "darkgrey" => return Some(Color::DarkGray),
        "lightred" => return Some(Color::LightRed),
        "lightgreen" => return Some(Color::LightGreen),
        "lightyellow" => return Some(Color::LightYellow),
        "lightblue" => return Some(Color::LightBlue),
        "lightmagenta" => return Some(Color::LightMagenta),
        "lightcyan" => return Some(Color::LightCyan),
        "white" => return Some(Color::White),
        "orange" => return Some(Color::Rgb(255, 165, 0)),
        _ => {}
    }

    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        } else if hex.len() == 3 {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
    }

    if s.contains(',') {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() == 3 {
            let r = parts[0].trim().parse::<u8>().ok()?;
            let g = parts[1].trim().parse::<u8>().ok()?;
            let b = parts[2].trim().parse::<u8>().ok()?;
            return Some(Color::Rgb(r, g, b));
        }
    }

    None
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

/// Load `.env` from the working directory if there is one
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

pub fn read() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default(),
    };

    if !config_path.exists() {
        return Config::default();
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };

    parse(&content).unwrap_or_default()
}

pub fn parse(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(content).map(Config::finalize)
}
