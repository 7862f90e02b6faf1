//! Prop bags, event handlers and node refs.
//!
//! [`Props`] is an ordered map from prop name to [`PropValue`]. Merging two
//! bags follows one rule everywhere in the engine: plain values are replaced by
//! the higher-precedence bag, event handlers (`on*` props) are composed so the
//! higher-precedence handler runs first and then calls through to the lower one.

use std::cell::Cell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use super::ElementType;
use crate::dom::node::NodeId;
use crate::event::modality::FocusOrigin;
use crate::theme::Declarations;

// ---------------------------------------------------------------------------
// EventKind / SlotEvent
// ---------------------------------------------------------------------------

/// Kind of event delivered to a slot element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Change,
    Focus,
    Blur,
    Click,
}

impl EventKind {
    /// The prop name whose handler receives this event.
    pub fn handler_prop(self) -> &'static str {
        match self {
            EventKind::Change => "onChange",
            EventKind::Focus => "onFocus",
            EventKind::Blur => "onBlur",
            EventKind::Click => "onClick",
        }
    }
}

/// An event travelling through the mounted tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotEvent {
    pub kind: EventKind,
    /// The node the event was dispatched to.
    pub target: Option<NodeId>,
    /// How focus was obtained (focus events only).
    pub origin: Option<FocusOrigin>,
    /// New checked value, filled by a change handler that toggled.
    pub checked: Option<bool>,
    propagation_stopped: bool,
    default_prevented: bool,
}

impl SlotEvent {
    /// Create an event of the given kind.
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            target: None,
            origin: None,
            checked: None,
            propagation_stopped: false,
            default_prevented: false,
        }
    }

    /// A focus event with the given origin.
    pub fn focus(origin: FocusOrigin) -> Self {
        Self {
            origin: Some(origin),
            ..Self::new(EventKind::Focus)
        }
    }

    /// Stop bubbling after the current handler.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    /// Mark the default action as cancelled. Change handlers skip the toggle.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

// ---------------------------------------------------------------------------
// EventHandler
// ---------------------------------------------------------------------------

/// A shared event callback stored in a prop bag.
#[derive(Clone)]
pub struct EventHandler(Rc<dyn Fn(&mut SlotEvent)>);

impl EventHandler {
    /// Wrap a closure.
    pub fn new(f: impl Fn(&mut SlotEvent) + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invoke the handler.
    pub fn call(&self, event: &mut SlotEvent) {
        (self.0)(event)
    }

    /// A handler that runs `self` and then calls through to `inner`.
    pub fn wrapping(&self, inner: &EventHandler) -> EventHandler {
        let outer = self.clone();
        let inner = inner.clone();
        EventHandler::new(move |event| {
            outer.call(event);
            inner.call(event);
        })
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &EventHandler) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EventHandler(..)")
    }
}

// ---------------------------------------------------------------------------
// NodeRef
// ---------------------------------------------------------------------------

/// A ref cell filled with the mounted node id of the element it is attached to.
#[derive(Debug, Clone, Default)]
pub struct NodeRef(Rc<Cell<Option<NodeId>>>);

impl NodeRef {
    pub fn new() -> Self {
        Self::default()
    }

    /// The mounted node, if the ref has been attached.
    pub fn get(&self) -> Option<NodeId> {
        self.0.get()
    }

    pub(crate) fn set(&self, id: Option<NodeId>) {
        self.0.set(id);
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &NodeRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

// ---------------------------------------------------------------------------
// PropValue
// ---------------------------------------------------------------------------

/// A single prop value.
#[derive(Debug, Clone)]
pub enum PropValue {
    Bool(bool),
    Int(i64),
    Str(String),
    Element(ElementType),
    Handler(EventHandler),
    Style(Rc<Declarations>),
    Ref(NodeRef),
}

impl PartialEq for PropValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PropValue::Bool(a), PropValue::Bool(b)) => a == b,
            (PropValue::Int(a), PropValue::Int(b)) => a == b,
            (PropValue::Str(a), PropValue::Str(b)) => a == b,
            (PropValue::Element(a), PropValue::Element(b)) => a == b,
            (PropValue::Handler(a), PropValue::Handler(b)) => a.ptr_eq(b),
            (PropValue::Style(a), PropValue::Style(b)) => a == b,
            (PropValue::Ref(a), PropValue::Ref(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<bool> for PropValue {
    fn from(v: bool) -> Self {
        PropValue::Bool(v)
    }
}

impl From<i64> for PropValue {
    fn from(v: i64) -> Self {
        PropValue::Int(v)
    }
}

impl From<&str> for PropValue {
    fn from(v: &str) -> Self {
        PropValue::Str(v.to_owned())
    }
}

impl From<String> for PropValue {
    fn from(v: String) -> Self {
        PropValue::Str(v)
    }
}

impl From<ElementType> for PropValue {
    fn from(v: ElementType) -> Self {
        PropValue::Element(v)
    }
}

impl From<EventHandler> for PropValue {
    fn from(v: EventHandler) -> Self {
        PropValue::Handler(v)
    }
}

impl From<Rc<Declarations>> for PropValue {
    fn from(v: Rc<Declarations>) -> Self {
        PropValue::Style(v)
    }
}

impl From<NodeRef> for PropValue {
    fn from(v: NodeRef) -> Self {
        PropValue::Ref(v)
    }
}

/// Whether a prop name names an event handler (`onChange`, `onFocus`, ...).
pub fn is_handler_key(key: &str) -> bool {
    let mut chars = key.chars();
    chars.next() == Some('o')
        && chars.next() == Some('n')
        && chars.next().is_some_and(|c| c.is_ascii_uppercase())
}

// ---------------------------------------------------------------------------
// Props
// ---------------------------------------------------------------------------

/// An ordered bag of props.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    values: BTreeMap<String, PropValue>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a prop (builder).
    pub fn with(mut self, key: &str, value: impl Into<PropValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Set a prop only when `value` is `Some` (builder).
    pub fn with_opt<V: Into<PropValue>>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.set(key, value);
        }
        self
    }

    /// Set a prop, replacing any previous value.
    pub fn set(&mut self, key: &str, value: impl Into<PropValue>) {
        self.values.insert(key.to_owned(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.values.get(key)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.values.get(key) {
            Some(PropValue::Bool(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(PropValue::Str(v)) => Some(v),
            _ => None,
        }
    }

    pub fn get_element(&self, key: &str) -> Option<&ElementType> {
        match self.values.get(key) {
            Some(PropValue::Element(v)) => Some(v),
            _ => None,
        }
    }

    pub fn get_handler(&self, key: &str) -> Option<&EventHandler> {
        match self.values.get(key) {
            Some(PropValue::Handler(v)) => Some(v),
            _ => None,
        }
    }

    pub fn get_ref(&self, key: &str) -> Option<&NodeRef> {
        match self.values.get(key) {
            Some(PropValue::Ref(v)) => Some(v),
            _ => None,
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        self.values.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merge a higher-precedence bag into this one.
    ///
    /// Values from `higher` replace existing values. When both bags hold a
    /// handler under the same name, the result runs `higher`'s handler first and
    /// then this bag's.
    pub fn merge(&mut self, higher: &Props) {
        for (key, value) in &higher.values {
            let merged = match (self.values.get(key), value) {
                (Some(PropValue::Handler(lower)), PropValue::Handler(upper))
                    if is_handler_key(key) =>
                {
                    PropValue::Handler(upper.wrapping(lower))
                }
                _ => value.clone(),
            };
            self.values.insert(key.clone(), merged);
        }
    }

    /// Return a new bag with `higher` merged over this one.
    pub fn merged(&self, higher: &Props) -> Props {
        let mut out = self.clone();
        out.merge(higher);
        out
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Props {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
