//! The render pass: context handed to widgets, per-instance state, and the
//! report a subtree sends back to its ancestors.
//!
//! Rendering is synchronous and single-threaded. A widget renders its children
//! through [`RenderCx::render_children`], which assigns each child an instance
//! path (`parent/segment/index`). The path keys the child's persistent state
//! in the [`StateStore`] and seeds its generated id.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use super::traits::{Child, WidgetElement};
use crate::config::EngineConfig;
use crate::context::{AmbientContext, ContextKey};
use crate::element::{ElementType, Node, Props};
use crate::owner::{Appearance, Color};
use crate::theme::{Declarations, StyleTable};

/// Instance path of the root widget.
pub const ROOT_PATH: &str = "root";

// ---------------------------------------------------------------------------
// Report / Rendered
// ---------------------------------------------------------------------------

/// Registrations a subtree reports to its nearest interested ancestor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Id of a list subheader that registered with a listening list item.
    pub subheader_id: Option<String>,
}

impl Report {
    /// Fold a later sibling's report into this one. Later registrations win.
    pub fn merge(&mut self, other: Report) {
        if other.subheader_id.is_some() {
            self.subheader_id = other.subheader_id;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.subheader_id.is_none()
    }
}

/// Output of one widget render.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub node: Node,
    pub report: Report,
}

impl Rendered {
    pub fn new(node: impl Into<Node>) -> Self {
        Self {
            node: node.into(),
            report: Report::default(),
        }
    }

    /// Attach a report (builder).
    pub fn with_report(mut self, report: Report) -> Self {
        self.report = report;
        self
    }
}

// ---------------------------------------------------------------------------
// StateStore
// ---------------------------------------------------------------------------

type StateKey = (String, TypeId);

/// Persistent per-instance state keyed by instance path and type.
///
/// Entries not touched during a pass are dropped by [`StateStore::end_pass`],
/// so an instance that leaves the tree starts fresh if it comes back.
#[derive(Default)]
pub struct StateStore {
    slots: RefCell<HashMap<StateKey, Rc<dyn Any>>>,
    touched: RefCell<HashSet<StateKey>>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The state of type `T` at `path`, created with `T::default()` on first use.
    pub fn use_state<T: Default + 'static>(&self, path: &str) -> Rc<RefCell<T>> {
        let key = (path.to_owned(), TypeId::of::<T>());
        self.touched.borrow_mut().insert(key.clone());
        let mut slots = self.slots.borrow_mut();
        if let Some(existing) = slots.get(&key) {
            if let Ok(cell) = Rc::clone(existing).downcast::<RefCell<T>>() {
                return cell;
            }
        }
        let cell = Rc::new(RefCell::new(T::default()));
        slots.insert(key, Rc::clone(&cell) as Rc<dyn Any>);
        cell
    }

    /// Start tracking which entries a pass uses.
    pub fn begin_pass(&self) {
        self.touched.borrow_mut().clear();
    }

    /// Drop entries the pass did not use. Returns how many were dropped.
    pub fn end_pass(&self) -> usize {
        let touched = self.touched.borrow();
        let mut slots = self.slots.borrow_mut();
        let before = slots.len();
        slots.retain(|key, _| touched.contains(key));
        before - slots.len()
    }

    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }
}

// ---------------------------------------------------------------------------
// RenderCx
// ---------------------------------------------------------------------------

/// Everything a widget can see while rendering.
#[derive(Clone)]
pub struct RenderCx<'a> {
    ambient: AmbientContext,
    path: String,
    injected: Props,
    store: &'a StateStore,
    config: &'a EngineConfig,
    theme: &'a dyn StyleTable,
}

impl<'a> RenderCx<'a> {
    /// Context for the root widget.
    pub fn new(
        ambient: AmbientContext,
        store: &'a StateStore,
        config: &'a EngineConfig,
        theme: &'a dyn StyleTable,
    ) -> Self {
        Self {
            ambient,
            path: ROOT_PATH.to_owned(),
            injected: Props::new(),
            store,
            config,
            theme,
        }
    }

    pub fn ambient(&self) -> &AmbientContext {
        &self.ambient
    }

    /// Read an ambient value.
    pub fn read<T: Clone + Default + 'static>(&self, key: &ContextKey<T>) -> T {
        self.ambient.read(key)
    }

    /// Instance path of the widget being rendered.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Props re-injected by the parent composite.
    pub fn injected(&self) -> &Props {
        &self.injected
    }

    pub fn config(&self) -> &EngineConfig {
        self.config
    }

    /// A context for this widget's own children with `value` provided under
    /// `key`. Injected props do not carry over.
    pub fn provide<T: Clone + Default + 'static>(&self, key: &ContextKey<T>, value: T) -> Self {
        self.with_ambient(self.ambient.provide(key, value))
    }

    /// A context for this widget's own children seeing `ambient`.
    pub fn with_ambient(&self, ambient: AmbientContext) -> Self {
        Self {
            ambient,
            path: self.path.clone(),
            injected: Props::new(),
            store: self.store,
            config: self.config,
            theme: self.theme,
        }
    }

    /// The widget's external forwarded props: its own bag with the injected
    /// props merged over it.
    pub fn external(&self, own: &Props) -> Props {
        own.merged(&self.injected)
    }

    /// The root element type: an injected `component` beats the widget's own.
    pub fn component_override(&self, own: Option<&ElementType>) -> Option<ElementType> {
        self.injected
            .get_element("component")
            .or(own)
            .cloned()
    }

    /// Persistent state of type `T` for this instance.
    pub fn use_state<T: Default + 'static>(&self) -> Rc<RefCell<T>> {
        self.store.use_state(&self.path)
    }

    /// The explicit id, or one derived from the instance path. Stable across
    /// renders of the same tree.
    pub fn use_id(&self, explicit: Option<&str>) -> String {
        match explicit {
            Some(id) => id.to_owned(),
            None => format!("{}-{}", self.config.id_prefix, self.path.replace('/', "-")),
        }
    }

    /// Utility class name for a key of `widget`.
    pub fn utility_class(&self, widget: &str, key: &str) -> String {
        self.config.utility_class(widget, key)
    }

    /// Style declarations for an appearance, if the theme defines any.
    pub fn style(&self, appearance: &Appearance) -> Option<Rc<Declarations>> {
        self.theme_lookup(appearance.variant.as_str(), &appearance.color)
    }

    /// Raw style table lookup by variant key.
    pub fn theme_lookup(&self, variant_key: &str, color: &Color) -> Option<Rc<Declarations>> {
        self.theme.lookup(variant_key, color)
    }

    /// Render one widget at `path` with its injected props.
    pub fn render_widget(&self, element: &WidgetElement, path: String) -> Rendered {
        let widget = &element.widget;
        if self.config.validate_props {
            if let Err(err) = widget.validate() {
                tracing::warn!(widget = widget.widget_type(), %path, "{err}");
            }
        }
        let cx = Self {
            ambient: self.ambient.clone(),
            path,
            injected: element.injected.clone(),
            store: self.store,
            config: self.config,
            theme: self.theme,
        };
        widget.render(&cx)
    }

    /// Render one child. `segment` names the group of children (e.g.
    /// `"children"`, `"label"`) and `index` its position in the group.
    pub fn render_child(&self, child: &Child, segment: &str, index: usize) -> Rendered {
        match child {
            Child::Text(text) => Rendered::new(Node::Text(text.clone())),
            Child::Node(node) => Rendered::new(node.clone()),
            Child::Widget(element) => {
                let path = format!("{}/{segment}/{index}", self.path);
                self.render_widget(element, path)
            }
        }
    }

    /// Render children in order and fold their reports.
    pub fn render_children<I>(&self, children: I, segment: &str) -> (Vec<Node>, Report)
    where
        I: IntoIterator,
        I::Item: std::borrow::Borrow<Child>,
    {
        let mut report = Report::default();
        let nodes = children
            .into_iter()
            .enumerate()
            .map(|(index, child)| {
                let rendered =
                    self.render_child(std::borrow::Borrow::borrow(&child), segment, index);
                report.merge(rendered.report);
                rendered.node
            })
            .collect();
        (nodes, report)
    }
}
