//! Node types: NodeId, NodeData.

use slotmap::new_key_type;

use crate::element::{Element, ElementType, EventHandler, EventKind, Props};

new_key_type! {
    /// Unique identifier for a mounted node. Copy, lightweight (u64).
    pub struct NodeId;
}

/// Data of a single mounted node: an element or a text run.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// Element type; `None` for text nodes.
    pub element: Option<ElementType>,
    /// Widget kind that produced the element (e.g. "Checkbox").
    pub widget_type: Option<String>,
    /// Slot name within the producing widget.
    pub slot: Option<String>,
    /// The element's `id` prop, copied for lookups.
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub props: Props,
    /// Text content of a text node.
    pub text: Option<String>,
}

impl NodeData {
    /// Data for a rendered element. Children are mounted separately.
    pub fn from_element(el: &Element) -> Self {
        Self {
            element: Some(el.element_type.clone()),
            widget_type: el.widget_type.clone(),
            slot: el.slot.clone(),
            id: el.props.get_str("id").map(str::to_owned),
            classes: el.classes.clone(),
            props: el.props.clone(),
            text: None,
        }
    }

    /// A text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            element: None,
            widget_type: None,
            slot: None,
            id: None,
            classes: Vec::new(),
            props: Props::new(),
            text: Some(text.into()),
        }
    }

    pub fn is_text(&self) -> bool {
        self.element.is_none()
    }

    /// Tag or component name of an element node.
    pub fn element_name(&self) -> Option<&str> {
        self.element.as_ref().map(ElementType::name)
    }

    /// Whether this node has a given class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Whether this node is the `slot` of a `widget`.
    pub fn is_slot(&self, widget: &str, slot: &str) -> bool {
        self.widget_type.as_deref() == Some(widget) && self.slot.as_deref() == Some(slot)
    }

    /// The handler registered for an event kind.
    pub fn handler(&self, kind: EventKind) -> Option<&EventHandler> {
        self.props.get_handler(kind.handler_prop())
    }
}
