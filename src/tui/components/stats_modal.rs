use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::config::DisplayConfig;
use crate::details::{DetailState, StatsView, KEY_STATS_TITLE, LOADING_BODY, SHOOTING_TITLE};
use crate::formatting::format_stat_line;
use crate::tui::component::{Component, Element, ElementWidget};
use crate::tui::layout::modal_area;

pub const CLOSE_HINT: &str = "Esc/x: close";

#[derive(Debug, Clone, PartialEq)]
enum ModalBody {
    Loading,
    Failed(String),
    Loaded(StatsView),
}

/// Player details overlay, centered over whatever is underneath
pub struct StatsModal;

impl Component for StatsModal {
    type Props = DetailState;
    type State = ();

    fn view(&self, props: &Self::Props, _state: &Self::State) -> Element {
        if !props.open {
            return Element::None;
        }
        let body = if props.loading {
            ModalBody::Loading
        } else if let Some(stats) = &props.stats {
            ModalBody::Loaded(StatsView::new(stats))
        } else {
            ModalBody::Failed(props.failure_message().unwrap_or_default())
        };
        Element::Widget(Box::new(StatsModalWidget {
            title: props.title().to_string(),
            body,
        }))
    }
}

#[derive(Clone)]
struct StatsModalWidget {
    title: String,
    body: ModalBody,
}

impl StatsModalWidget {
    fn body_lines(&self, config: &DisplayConfig) -> Vec<Line<'static>> {
        let section = Style::default()
            .fg(config.accent_fg)
            .add_modifier(Modifier::BOLD);
        match &self.body {
            ModalBody::Loading => vec![Line::raw(LOADING_BODY)],
            ModalBody::Failed(message) => {
                vec![Line::styled(message.clone(), Style::default().fg(config.error_fg))]
            }
            ModalBody::Loaded(view) => {
                let mut lines = vec![Line::raw(view.header_line()), Line::raw("")];
                lines.push(Line::styled(KEY_STATS_TITLE, section));
                lines.extend(
                    view.key_stats
                        .iter()
                        .map(|s| Line::raw(format_stat_line(s.label, &s.value))),
                );
                lines.push(Line::raw(""));
                lines.push(Line::styled(SHOOTING_TITLE, section));
                lines.extend(
                    view.shooting
                        .iter()
                        .map(|s| Line::raw(format_stat_line(s.label, &s.value))),
                );
                lines
            }
        }
    }
}

impl ElementWidget for StatsModalWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let modal = modal_area(area);
        if modal.width < 2 || modal.height < 2 {
            return;
        }
        Clear.render(modal, buf);

        let border_type = if config.use_unicode {
            BorderType::Rounded
        } else {
            BorderType::Plain
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(Style::default().fg(config.selection_fg))
            .title(format!(" {} ", self.title));
        let inner = block.inner(modal);
        block.render(modal, buf);
        if inner.height == 0 {
            return;
        }

        let body = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height);
        Paragraph::new(self.body_lines(config))
            .wrap(Wrap { trim: false })
            .render(body, buf);

        // hint on the last inner line
        buf.set_stringn(
            body.x,
            inner.bottom() - 1,
            CLOSE_HINT,
            body.width as usize,
            Style::default().add_modifier(Modifier::DIM),
        );
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ViewError;
    use crate::tui::testing::{buffer_contains, buffer_lines, make_player, make_season, render_element};
    use crate::types::SeasonStats;

    fn opened() -> DetailState {
        let mut details = DetailState::default();
        details.open(make_player(7, "Jamal Murray", "G", Some("DEN")));
        details
    }

    #[test]
    fn test_closed_modal_renders_nothing() {
        assert!(matches!(
            StatsModal.view(&DetailState::default(), &()),
            Element::None
        ));
    }

    #[test]
    fn test_loading_modal() {
        let buf = render_element(StatsModal.view(&opened(), &()), 80, 30);
        let lines = buffer_lines(&buf);
        assert!(lines[3].contains(" Loading Stats... "));
        assert!(lines[4].contains("Fetching player data..."));
        assert!(buffer_contains(&buf, CLOSE_HINT));
    }

    #[test]
    fn test_loaded_modal_shows_averages() {
        let mut details = opened();
        let token = details.pending.unwrap();
        let season = SeasonStats {
            points: 1479.0,
            field_goal_percentage: 0.481,
            ..make_season(70.0)
        };
        details.apply(token, Ok(season));

        let buf = render_element(StatsModal.view(&details, &()), 80, 30);
        assert!(buffer_contains(&buf, " Jamal Murray "));
        assert!(buffer_contains(&buf, "Team: DEN   Pos: G   GP: 70"));
        assert!(buffer_contains(&buf, "Key Statistics"));
        assert!(buffer_contains(&buf, &format_stat_line("Points", "21.1")));
        assert!(buffer_contains(&buf, &format_stat_line("FG%", "48.1%")));
    }

    #[test]
    fn test_failed_modal_shows_message() {
        let mut details = opened();
        let token = details.pending.unwrap();
        details.apply(token, Err(ViewError::NotFound));

        let buf = render_element(StatsModal.view(&details, &()), 80, 30);
        assert!(buffer_contains(&buf, " Player Details "));
        assert!(buffer_contains(
            &buf,
            "Could not load detailed stats for this player."
        ));
    }

    #[test]
    fn test_modal_clears_what_is_underneath() {
        let base = Element::Widget(Box::new(StatsModalWidget {
            title: "x".into(),
            body: ModalBody::Loading,
        }));
        let element = Element::Overlay {
            base: Box::new(base.clone()),
            overlay: Box::new(StatsModal.view(&opened(), &())),
        };
        let buf = render_element(element, 80, 30);
        assert!(!buffer_contains(&buf, " x "));
    }
}
