use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::layout_constants::{
    NAME_COL_WIDTH, POSITION_COL_WIDTH, STAT_LABEL_WIDTH, TEAM_COL_WIDTH,
};
use crate::types::Player;

/// Box-drawing characters for table borders
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub double_horizontal: String,
    pub vertical: String,
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub connector2: String,
    pub selector: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            double_horizontal: "═".to_string(),
            vertical: "│".to_string(),
            top_left: "╭".to_string(),
            top_right: "╮".to_string(),
            bottom_left: "╰".to_string(),
            bottom_right: "╯".to_string(),
            connector2: "┴".to_string(),
            selector: "►".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            double_horizontal: "=".to_string(),
            vertical: "|".to_string(),
            top_left: "+".to_string(),
            top_right: "+".to_string(),
            bottom_left: "+".to_string(),
            bottom_right: "+".to_string(),
            connector2: "-".to_string(),
            selector: ">".to_string(),
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

/// Format a header with text and underline
///
/// # Arguments
/// * `text` - The header text to display
/// * `double_line` - If true, uses double-line (═/=), otherwise single-line (─/-)
/// * `display` - Display configuration to determine unicode vs ASCII
///
/// # Returns
/// A formatted string with the header text and underline separator matching the text width
pub fn format_header(text: &str, double_line: bool, display: &DisplayConfig) -> String {
    let separator_char = if double_line {
        &display.box_chars.double_horizontal
    } else {
        &display.box_chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.width()))
}

/// Cut `text` to at most `width` display columns, marking the cut with an ellipsis
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Left-align `text` in exactly `width` display columns
pub fn pad_right(text: &str, width: usize) -> String {
    let text = truncate(text, width);
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

/// Player Name | Team | Position table used by the list commands
pub fn format_player_table(players: &[Player], display: &DisplayConfig) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{} {} {}\n",
        pad_right("Player Name", NAME_COL_WIDTH),
        pad_right("Team", TEAM_COL_WIDTH),
        "Position"
    ));
    output.push_str(&format!(
        "{}\n",
        display
            .box_chars
            .horizontal
            .repeat(NAME_COL_WIDTH + TEAM_COL_WIDTH + POSITION_COL_WIDTH + 2)
    ));
    for player in players {
        output.push_str(&format!(
            "{} {} {}\n",
            pad_right(&player.full_name, NAME_COL_WIDTH),
            pad_right(player.team_display(), TEAM_COL_WIDTH),
            player.position
        ));
    }
    output
}

/// "Label ........ value" line of the stats report
pub fn format_stat_line(label: &str, value: &str) -> String {
    format!("  {:<width$} {:>7}", label, value, width = STAT_LABEL_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::make_player;

    #[test]
    fn test_format_header_single_line_unicode() {
        let display = DisplayConfig::default();
        let result = format_header("Test Header", false, &display);
        assert_eq!(result, "Test Header\n───────────\n");
    }

    #[test]
    fn test_format_header_double_line_ascii() {
        let display = DisplayConfig {
            use_unicode: false,
            box_chars: BoxChars::ascii(),
            ..Default::default()
        };
        let result = format_header("Test Header", true, &display);
        assert_eq!(result, "Test Header\n===========\n");
    }

    #[test]
    fn test_empty_header() {
        let result = format_header("", false, &DisplayConfig::default());
        assert_eq!(result, "\n\n");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Giannis", 10), "Giannis");
        assert_eq!(truncate("Giannis Antetokounmpo", 10), "Giannis A…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_pad_right_exact_width() {
        assert_eq!(pad_right("BOS", 5), "BOS  ");
        assert_eq!(pad_right("Nikola Jokić", 12).width(), 12);
    }

    #[test]
    fn test_player_table_rows() {
        let players = vec![
            make_player(1, "Jayson Tatum", "F", Some("BOS")),
            make_player(2, "Free Agent", "G", None),
        ];
        let table = format_player_table(&players, &DisplayConfig::default());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Player Name"));
        assert!(lines[2].starts_with("Jayson Tatum"));
        assert!(lines[2].contains(" BOS "));
        assert!(lines[3].contains(" N/A "));
        assert!(lines[3].ends_with('G'));
    }

    #[test]
    fn test_stat_line_alignment() {
        assert_eq!(
            format_stat_line("Points", "21.1"),
            format!("  {:<14}    21.1", "Points")
        );
    }
}
