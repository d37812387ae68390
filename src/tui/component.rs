use ratatui::{buffer::Buffer, layout::Rect};
use std::future::Future;
use std::pin::Pin;

use super::action::Action;
use super::types::ViewKey;
use crate::config::DisplayConfig;
use crate::listing::PendingLoad;

/// Core component trait - like React.Component
///
/// Components are the building blocks of the UI. Each component:
/// - Has Props (input data, like React props)
/// - Has State (local state, unit for the stateless ones)
/// - Renders to an Element tree (virtual DOM)
pub trait Component {
    /// Props type for this component
    type Props;

    /// Local state type (if any)
    type State: Default;

    /// Create initial state from props (like useState)
    fn init(_props: &Self::Props) -> Self::State {
        Self::State::default()
    }

    /// Render component given props and state (pure function)
    fn view(&self, props: &Self::Props, state: &Self::State) -> Element;
}

/// Element in virtual component tree
#[derive(Clone)]
pub enum Element {
    /// A widget that can be directly rendered to ratatui buffer
    Widget(Box<dyn ElementWidget>),

    /// A container with layout and children
    Container {
        children: Vec<Element>,
        layout: ContainerLayout,
    },

    /// An overlay that renders on top of base content (for modals, popups, etc.)
    Overlay {
        base: Box<Element>,
        overlay: Box<Element>,
    },

    /// Nothing to render
    None,
}

/// Layout for container elements
#[derive(Clone, Debug, PartialEq)]
pub enum ContainerLayout {
    Vertical(Vec<Constraint>),
    Horizontal(Vec<Constraint>),
}

/// Constraint for layout
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constraint {
    Length(u16),
    Min(u16),
    Max(u16),
    Percentage(u16),
    Ratio(u32, u32),
}

/// Side effects produced by the reducer
///
/// Fetch variants are turned into async effects by the runtime through
/// `DataEffects`, so reducers never touch the data provider.
pub enum Effect {
    None,
    Async(Pin<Box<dyn Future<Output = Action> + Send>>),
    /// Load one page for a list view
    FetchPage { view: ViewKey, load: PendingLoad },
    /// Load season stats for the details overlay
    FetchDetails { token: u64, player_id: i64 },
}

impl std::fmt::Debug for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::None => write!(f, "None"),
            Effect::Async(_) => write!(f, "Async(..)"),
            Effect::FetchPage { view, load } => write!(
                f,
                "FetchPage({:?}, token={}, page={})",
                view, load.token, load.request.page
            ),
            Effect::FetchDetails { token, player_id } => {
                write!(f, "FetchDetails(token={}, player_id={})", token, player_id)
            }
        }
    }
}

/// Trait for widgets that can be wrapped in the Element tree
pub trait ElementWidget: Send + Sync {
    /// Render this widget into the provided buffer
    ///
    /// # Arguments
    ///
    /// * `area` - The rectangular area to render into
    /// * `buf` - The buffer to write to
    /// * `config` - Display configuration (colors, box chars, etc.)
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig);

    /// Clone this widget into a boxed trait object
    fn clone_box(&self) -> Box<dyn ElementWidget>;

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }
}

impl Clone for Box<dyn ElementWidget> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Helper to create a container with vertical layout
pub fn vertical<const N: usize>(constraints: [Constraint; N], children: Vec<Element>) -> Element {
    Element::Container {
        children,
        layout: ContainerLayout::Vertical(constraints.to_vec()),
    }
}

/// Helper to create a container with horizontal layout
pub fn horizontal<const N: usize>(constraints: [Constraint; N], children: Vec<Element>) -> Element {
    Element::Container {
        children,
        layout: ContainerLayout::Horizontal(constraints.to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct TestWidget;

    impl ElementWidget for TestWidget {
        fn render(&self, _area: Rect, _buf: &mut Buffer, _config: &DisplayConfig) {}

        fn clone_box(&self) -> Box<dyn ElementWidget> {
            Box::new(self.clone())
        }
    }

    #[test]
    fn test_widget_default_preferred_height() {
        assert_eq!(TestWidget.preferred_height(), None);
    }

    #[test]
    fn test_box_element_widget_clone() {
        let widget: Box<dyn ElementWidget> = Box::new(TestWidget);
        let _cloned = widget.clone();
    }

    #[test]
    fn test_vertical_helper() {
        let element = vertical(
            [Constraint::Length(10), Constraint::Min(5)],
            vec![Element::None, Element::None],
        );

        match element {
            Element::Container { children, layout } => {
                assert_eq!(children.len(), 2);
                assert_eq!(
                    layout,
                    ContainerLayout::Vertical(vec![Constraint::Length(10), Constraint::Min(5)])
                );
            }
            _ => panic!("Expected Container element"),
        }
    }

    #[test]
    fn test_horizontal_helper() {
        let element = horizontal([Constraint::Percentage(50)], vec![Element::None]);

        match element {
            Element::Container { children, layout } => {
                assert_eq!(children.len(), 1);
                assert!(matches!(layout, ContainerLayout::Horizontal(_)));
            }
            _ => panic!("Expected Container element"),
        }
    }

    #[test]
    fn test_effect_debug_names_fetch() {
        let effect = Effect::FetchDetails {
            token: 7,
            player_id: 42,
        };
        assert_eq!(format!("{:?}", effect), "FetchDetails(token=7, player_id=42)");
    }
}
