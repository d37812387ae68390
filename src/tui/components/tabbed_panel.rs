use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::config::{DisplayConfig, SELECTION_STYLE_MODIFIER};
use crate::tui::component::{vertical, Component, Constraint, Element, ElementWidget};
use crate::tui::layout::{tab_label_ranges, TAB_BAR_HEIGHT};

/// A single tab item containing its label and content
#[derive(Clone)]
pub struct TabItem {
    /// Display title for the tab
    pub title: String,
    /// Whether this tab is the active one
    pub active: bool,
    /// Content to show when this tab is active
    pub content: Element,
}

impl TabItem {
    pub fn new(title: impl Into<String>, active: bool, content: Element) -> Self {
        Self {
            title: title.into(),
            active,
            content,
        }
    }
}

/// Props for TabbedPanel component
#[derive(Clone)]
pub struct TabbedPanelProps {
    pub tabs: Vec<TabItem>,
    /// Whether the tab bar is focused (affects styling)
    pub focused: bool,
}

/// TabbedPanel component - renders a tab bar with the active tab's content
pub struct TabbedPanel;

impl Component for TabbedPanel {
    type Props = TabbedPanelProps;
    type State = ();

    fn view(&self, props: &Self::Props, _state: &Self::State) -> Element {
        let active_content = props
            .tabs
            .iter()
            .find(|tab| tab.active)
            .map(|tab| tab.content.clone())
            .unwrap_or(Element::None);

        let labels = props
            .tabs
            .iter()
            .map(|tab| TabLabel {
                title: tab.title.clone(),
                active: tab.active,
            })
            .collect();

        vertical(
            [
                Constraint::Length(TAB_BAR_HEIGHT), // labels + separator
                Constraint::Min(0),
            ],
            vec![
                Element::Widget(Box::new(TabBarWidget {
                    labels,
                    focused: props.focused,
                })),
                active_content,
            ],
        )
    }
}

#[derive(Clone)]
struct TabLabel {
    title: String,
    active: bool,
}

/// Widget that renders the tab bar (labels + separator line)
#[derive(Clone)]
struct TabBarWidget {
    labels: Vec<TabLabel>,
    focused: bool,
}

impl TabBarWidget {
    fn label_style(&self, label: &TabLabel, config: &DisplayConfig) -> Style {
        if !label.active {
            return Style::default();
        }
        let fg = if self.focused {
            config.selection_fg
        } else {
            config.unfocused_selection_fg
        };
        Style::default().fg(fg).add_modifier(SELECTION_STYLE_MODIFIER)
    }
}

impl ElementWidget for TabBarWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if self.labels.is_empty() || area.width == 0 || area.height < 2 {
            return;
        }

        let titles: Vec<&str> = self.labels.iter().map(|l| l.title.as_str()).collect();
        let ranges = tab_label_ranges(&titles, area.x);
        let separator = format!(" {} ", config.box_chars.vertical);
        let right = area.x + area.width;

        // Tab line
        for (i, (label, (start, _))) in self.labels.iter().zip(&ranges).enumerate() {
            if *start >= right {
                break;
            }
            if i > 0 {
                buf.set_string(start - 3, area.y, &separator, Style::default());
            }
            buf.set_string(*start, area.y, &label.title, self.label_style(label, config));
        }

        // Separator line with connectors under the gaps
        let horizontal = &config.box_chars.horizontal;
        buf.set_string(
            area.x,
            area.y + 1,
            horizontal.repeat(area.width as usize),
            Style::default(),
        );
        for (_, end) in ranges.iter().take(ranges.len().saturating_sub(1)) {
            let x = end + 1;
            if x < right {
                buf.set_string(x, area.y + 1, &config.box_chars.connector2, Style::default());
            }
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(TAB_BAR_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::{assert_buffer, render_element};

    fn props(active: usize) -> TabbedPanelProps {
        TabbedPanelProps {
            tabs: ["Home", "Search", "Positions", "Teams"]
                .iter()
                .enumerate()
                .map(|(i, title)| TabItem::new(*title, i == active, Element::None))
                .collect(),
            focused: true,
        }
    }

    #[test]
    fn test_tabbed_panel_renders_container() {
        match TabbedPanel.view(&props(0), &()) {
            Element::Container { children, .. } => assert_eq!(children.len(), 2),
            _ => panic!("Expected container element"),
        }
    }

    #[test]
    fn test_tab_bar_render() {
        let buf = render_element(TabbedPanel.view(&props(1), &()), 40, 2);
        assert_buffer(
            &buf,
            &[
                "Home │ Search │ Positions │ Teams",
                "─────┴────────┴───────────┴─────────────",
            ],
        );
    }

    #[test]
    fn test_active_tab_is_highlighted() {
        let buf = render_element(TabbedPanel.view(&props(1), &()), 40, 2);
        let config = DisplayConfig::default();
        assert_eq!(buf[(7, 0)].fg, config.selection_fg);
        assert_eq!(buf[(0, 0)].fg, ratatui::style::Color::Reset);
    }
}
