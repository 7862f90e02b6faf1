//! Rendered element model: element types, props, output nodes.
//!
//! A widget render produces a tree of [`Node`]s. Each [`Element`] carries the
//! element type its slot resolved to, the merged props, the ordered class list
//! and the refs that should observe the mounted node.

pub mod props;

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use crate::owner::OwnerState;

pub use props::{EventHandler, EventKind, NodeRef, PropValue, Props, SlotEvent};

// ---------------------------------------------------------------------------
// ElementType
// ---------------------------------------------------------------------------

/// Handle to a consumer-provided component used in place of a primitive tag.
///
/// Two handles are equal when they carry the same name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentHandle {
    name: Rc<str>,
}

impl ComponentHandle {
    /// Create a handle with the given display name.
    pub fn new(name: impl Into<Rc<str>>) -> Self {
        Self { name: name.into() }
    }

    /// The component's display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The element a slot renders as: a named primitive or a custom component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// A primitive tag such as `span`, `li` or `input`.
    Primitive(Cow<'static, str>),
    /// A consumer-supplied component.
    Component(ComponentHandle),
}

impl ElementType {
    /// A primitive element from a static tag name.
    pub const fn tag(name: &'static str) -> Self {
        ElementType::Primitive(Cow::Borrowed(name))
    }

    /// A custom component element.
    pub fn component(name: impl Into<Rc<str>>) -> Self {
        ElementType::Component(ComponentHandle::new(name))
    }

    /// Tag or component name.
    pub fn name(&self) -> &str {
        match self {
            ElementType::Primitive(tag) => tag,
            ElementType::Component(handle) => handle.name(),
        }
    }

    /// Whether this is a primitive tag.
    pub fn is_primitive(&self) -> bool {
        matches!(self, ElementType::Primitive(_))
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Element / Node
// ---------------------------------------------------------------------------

/// One rendered element with its resolved slot data.
#[derive(Debug, Clone)]
pub struct Element {
    pub element_type: ElementType,
    /// Widget kind that produced this element (e.g. `"Checkbox"`).
    pub widget_type: Option<String>,
    /// Slot name within the producing widget (e.g. `"input"`).
    pub slot: Option<String>,
    pub props: Props,
    /// Ordered class list; consumer classes come last.
    pub classes: Vec<String>,
    /// Refs filled with the node id once mounted.
    pub refs: Vec<NodeRef>,
    /// Present only when the element type is a custom component.
    pub owner_state: Option<Rc<OwnerState>>,
    pub children: Vec<Node>,
}

impl Element {
    /// Create a bare element of the given type.
    pub fn new(element_type: ElementType) -> Self {
        Self {
            element_type,
            widget_type: None,
            slot: None,
            props: Props::new(),
            classes: Vec::new(),
            refs: Vec::new(),
            owner_state: None,
            children: Vec::new(),
        }
    }

    /// Append a child node (builder).
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append several child nodes (builder).
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Whether the class list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// A node of rendered output.
#[derive(Debug, Clone)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Children without a wrapping element; flattened when mounted.
    Fragment(Vec<Node>),
    Empty,
}

impl Node {
    /// The element, if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}
