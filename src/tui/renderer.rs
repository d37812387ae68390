use ratatui::{
    buffer::Buffer,
    layout::{Constraint as RatatuiConstraint, Direction, Layout as RatatuiLayout, Rect},
};

use super::component::{Constraint, ContainerLayout, Element};
use crate::config::DisplayConfig;

/// Renders virtual element tree to ratatui buffer
///
/// The Renderer takes a virtual Element tree produced by components
/// and renders it to the terminal using ratatui.
pub struct Renderer;

impl Renderer {
    /// Create a new renderer
    pub fn new() -> Self {
        Self
    }

    /// Render an element tree to the given area in the buffer
    pub fn render(&mut self, element: Element, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        self.render_element(&element, area, buf, config);
    }

    /// Calculate layout constraints and split the area
    fn calculate_layout(&self, layout: &ContainerLayout, area: Rect) -> Vec<Rect> {
        let (direction, constraints) = match layout {
            ContainerLayout::Vertical(constraints) => (Direction::Vertical, constraints),
            ContainerLayout::Horizontal(constraints) => (Direction::Horizontal, constraints),
        };

        let ratatui_constraints = constraints
            .iter()
            .map(|c| self.convert_constraint(*c))
            .collect::<Vec<_>>();

        RatatuiLayout::default()
            .direction(direction)
            .constraints(ratatui_constraints)
            .split(area)
            .to_vec()
    }

    /// Convert our Constraint type to ratatui's Constraint
    fn convert_constraint(&self, constraint: Constraint) -> RatatuiConstraint {
        match constraint {
            Constraint::Length(n) => RatatuiConstraint::Length(n),
            Constraint::Min(n) => RatatuiConstraint::Min(n),
            Constraint::Max(n) => RatatuiConstraint::Max(n),
            Constraint::Percentage(n) => RatatuiConstraint::Percentage(n),
            Constraint::Ratio(a, b) => RatatuiConstraint::Ratio(a, b),
        }
    }

    fn render_element(&self, element: &Element, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        match element {
            Element::Widget(widget) => {
                widget.render(area, buf, config);
            }

            Element::Container { children, layout } => {
                let chunks = self.calculate_layout(layout, area);
                for (child, chunk) in children.iter().zip(chunks.iter()) {
                    self.render_element(child, *chunk, buf, config);
                }
            }

            Element::Overlay { base, overlay } => {
                // Overlay gets the same area; it positions itself
                self.render_element(base, area, buf, config);
                self.render_element(overlay, area, buf, config);
            }

            Element::None => {}
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::component::{horizontal, vertical, ElementWidget};
    use crate::tui::testing::{assert_buffer, render_element};
    use ratatui::{
        text::Text,
        widgets::{Paragraph, Widget},
    };

    /// Test widget that renders its text at the top left of its area
    #[derive(Clone)]
    struct TestWidget {
        text: String,
    }

    impl ElementWidget for TestWidget {
        fn render(&self, area: Rect, buf: &mut Buffer, _config: &DisplayConfig) {
            Paragraph::new(Text::from(self.text.clone())).render(area, buf);
        }

        fn clone_box(&self) -> Box<dyn ElementWidget> {
            Box::new(self.clone())
        }
    }

    fn text(s: &str) -> Element {
        Element::Widget(Box::new(TestWidget { text: s.to_string() }))
    }

    #[test]
    fn test_render_none() {
        let buf = render_element(Element::None, 10, 2);
        assert_buffer(&buf, &["", ""]);
    }

    #[test]
    fn test_render_widget() {
        let buf = render_element(text("Hello"), 10, 1);
        assert_buffer(&buf, &["Hello"]);
    }

    #[test]
    fn test_render_vertical_container() {
        let element = vertical(
            [Constraint::Length(1), Constraint::Length(1)],
            vec![text("Top"), text("Bottom")],
        );
        let buf = render_element(element, 10, 2);
        assert_buffer(&buf, &["Top", "Bottom"]);
    }

    #[test]
    fn test_render_horizontal_container() {
        let element = horizontal(
            [Constraint::Length(5), Constraint::Min(0)],
            vec![text("Left"), text("Right")],
        );
        let buf = render_element(element, 12, 1);
        assert_buffer(&buf, &["Left Right"]);
    }

    #[test]
    fn test_render_overlay_draws_on_top() {
        let element = Element::Overlay {
            base: Box::new(text("Base text")),
            overlay: Box::new(text("Over")),
        };
        let buf = render_element(element, 10, 1);
        assert_buffer(&buf, &["Over text"]);
    }
}
