//! Widget trait and the child values widgets are composed from.
//!
//! A [`Widget`] is an immutable description of one instance: its props and
//! children. Rendering turns it into output [`Node`]s through a
//! [`RenderCx`]; per-instance state lives in the renderer's state store, not
//! in the widget value.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use super::render::{RenderCx, Rendered};
use crate::element::{Element, ElementType, Node, Props};
use crate::validate::PropError;

// ---------------------------------------------------------------------------
// Widget trait
// ---------------------------------------------------------------------------

/// Core trait implemented by all widgets.
///
/// Object-safe: widgets are stored as `Rc<dyn Widget>` inside [`Child`].
pub trait Widget {
    /// The widget kind (e.g. "Checkbox", "ListItem").
    ///
    /// Used for utility class names and same-kind child detection.
    fn widget_type(&self) -> &str;

    /// Render this instance.
    fn render(&self, cx: &RenderCx<'_>) -> Rendered;

    /// Element type the consumer explicitly chose for the root slot, through
    /// a builder or a forwarded `component` prop.
    fn component(&self) -> Option<&ElementType> {
        None
    }

    /// Report suspicious props. Only called when validation is enabled.
    fn validate(&self) -> Result<(), PropError> {
        Ok(())
    }

    /// Downcast to `&dyn Any` for runtime type inspection.
    fn as_any(&self) -> &dyn Any;
}

/// Builder-style conversion of widgets into children.
///
/// Automatically implemented for all `'static` widgets.
pub trait WidgetExt: Widget + Sized + 'static {
    /// Wrap this widget as a child.
    fn into_child(self) -> Child {
        Child::Widget(WidgetElement::new(self))
    }
}

// Blanket implementation: every Widget gets WidgetExt for free.
impl<T: Widget + 'static> WidgetExt for T {}

// ---------------------------------------------------------------------------
// WidgetElement / Child
// ---------------------------------------------------------------------------

/// A widget instance plus props injected by its parent.
#[derive(Clone)]
pub struct WidgetElement {
    pub widget: Rc<dyn Widget>,
    /// Props a composite parent re-injected; they take precedence over the
    /// widget's own forwarded props.
    pub injected: Props,
}

impl WidgetElement {
    pub fn new(widget: impl Widget + 'static) -> Self {
        Self {
            widget: Rc::new(widget),
            injected: Props::new(),
        }
    }

    pub fn widget_type(&self) -> &str {
        self.widget.widget_type()
    }

    /// The child's own explicit element type, ignoring injected props.
    pub fn component(&self) -> Option<&ElementType> {
        self.widget.component()
    }

    /// A copy with `props` merged over the injected bag.
    pub fn with_injected(&self, props: &Props) -> Self {
        Self {
            widget: Rc::clone(&self.widget),
            injected: self.injected.merged(props),
        }
    }
}

impl fmt::Debug for WidgetElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetElement")
            .field("widget", &self.widget_type())
            .field("injected", &self.injected)
            .finish()
    }
}

/// One child of a composite: text, a widget, or already-rendered output.
#[derive(Debug, Clone)]
pub enum Child {
    Text(String),
    Widget(WidgetElement),
    Node(Node),
}

impl Child {
    /// Whether this child can receive injected props.
    pub fn is_element(&self) -> bool {
        match self {
            Child::Text(_) => false,
            Child::Widget(_) => true,
            Child::Node(node) => node.as_element().is_some(),
        }
    }

    /// The widget kind, for widget children.
    pub fn widget_type(&self) -> Option<&str> {
        match self {
            Child::Widget(w) => Some(w.widget_type()),
            _ => None,
        }
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_owned())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Child::Node(node)
    }
}

impl From<Element> for Child {
    fn from(el: Element) -> Self {
        Child::Node(Node::Element(el))
    }
}

impl From<WidgetElement> for Child {
    fn from(el: WidgetElement) -> Self {
        Child::Widget(el)
    }
}
