//! Root: owns a widget tree and drives render passes and events.
//!
//! [`Root`] ties together the root widget, engine config, style table, state
//! store and input modality. Every event it dispatches is followed by a fresh
//! render pass, so the mounted [`Dom`] always reflects the latest state.
//! Node ids are only valid for the [`Dom`] they were read from.

use std::rc::Rc;

use crate::config::EngineConfig;
use crate::context::{AmbientContext, ContextKey};
use crate::dom::{Dom, NodeId};
use crate::element::{EventKind, Node, SlotEvent};
use crate::event::{FocusOrigin, InputEvent, InputModality};
use crate::theme::{StyleTable, VariantStyles};
use crate::widget::{RenderCx, StateStore, Widget, WidgetElement};

// ---------------------------------------------------------------------------
// Root
// ---------------------------------------------------------------------------

/// The top of a widget tree.
pub struct Root {
    widget: WidgetElement,
    config: EngineConfig,
    theme: Rc<dyn StyleTable>,
    ambient: AmbientContext,
    store: StateStore,
    modality: InputModality,
    node: Node,
    dom: Dom,
}

impl Root {
    /// Create a root for `widget`. Nothing is rendered until [`Root::render`].
    pub fn new(widget: impl Widget + 'static) -> Self {
        Self {
            widget: WidgetElement::new(widget),
            config: EngineConfig::default(),
            theme: Rc::new(VariantStyles::new()),
            ambient: AmbientContext::new(),
            store: StateStore::new(),
            modality: InputModality::new(),
            node: Node::Empty,
            dom: Dom::new(),
        }
    }

    /// Set the engine config (builder).
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the style table (builder).
    pub fn with_theme(mut self, theme: impl StyleTable + 'static) -> Self {
        self.theme = Rc::new(theme);
        self
    }

    /// Provide an ambient value to the whole tree (builder).
    pub fn provide<T: Clone + Default + 'static>(mut self, key: &ContextKey<T>, value: T) -> Self {
        self.ambient = self.ambient.provide(key, value);
        self
    }

    /// Replace the root widget. Instance state survives for instances that
    /// keep their path.
    pub fn set_widget(&mut self, widget: impl Widget + 'static) {
        self.widget = WidgetElement::new(widget);
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run one render pass and mount the result.
    pub fn render(&mut self) -> &Dom {
        self.store.begin_pass();
        let rendered = {
            let cx = RenderCx::new(
                self.ambient.clone(),
                &self.store,
                &self.config,
                self.theme.as_ref(),
            );
            cx.render_widget(&self.widget, cx.path().to_owned())
        };
        let dropped = self.store.end_pass();
        if dropped > 0 {
            tracing::debug!(dropped, "dropped state of unmounted instances");
        }
        if !rendered.report.is_empty() {
            tracing::trace!(report = ?rendered.report, "registration reached the root unclaimed");
        }
        self.dom = Dom::mount(&rendered.node);
        self.node = rendered.node;
        &self.dom
    }

    /// The tree mounted by the last render.
    pub fn dom(&self) -> &Dom {
        &self.dom
    }

    /// The output of the last render.
    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    // -- events -------------------------------------------------------------

    /// Feed raw input. Only updates the input modality.
    pub fn input(&mut self, event: &InputEvent) {
        self.modality.observe(event);
    }

    /// Dispatch `event` to `node` of the current tree, then re-render.
    pub fn dispatch(&mut self, node: NodeId, event: &mut SlotEvent) -> &Dom {
        let called = self.dom.dispatch(node, event);
        tracing::trace!(kind = ?event.kind, called, "dispatched");
        self.render()
    }

    /// Focus `node`, attributing the focus to the last input modality.
    pub fn focus(&mut self, node: NodeId) -> &Dom {
        let origin = self.modality.focus_origin();
        self.dispatch(node, &mut SlotEvent::focus(origin))
    }

    /// Focus `node` from application code.
    pub fn focus_programmatic(&mut self, node: NodeId) -> &Dom {
        self.dispatch(node, &mut SlotEvent::focus(FocusOrigin::Programmatic))
    }

    pub fn blur(&mut self, node: NodeId) -> &Dom {
        self.dispatch(node, &mut SlotEvent::new(EventKind::Blur))
    }

    pub fn change(&mut self, node: NodeId) -> &Dom {
        self.dispatch(node, &mut SlotEvent::new(EventKind::Change))
    }

    /// Click `node`. A click on a checkbox input, or on a label pointing at
    /// one, also changes that input unless a handler prevented the default.
    pub fn click(&mut self, node: NodeId) -> &Dom {
        let mut event = SlotEvent::new(EventKind::Click);
        self.dom.dispatch(node, &mut event);
        if !event.is_default_prevented() {
            if let Some(input) = self.activation_target(node) {
                self.dom.dispatch(input, &mut SlotEvent::new(EventKind::Change));
            }
        }
        self.render()
    }

    fn activation_target(&self, node: NodeId) -> Option<NodeId> {
        let data = self.dom.get(node)?;
        match data.element_name()? {
            "input" if data.props.get_str("type") == Some("checkbox") => Some(node),
            "label" => {
                let target = data.props.get_str("htmlFor")?;
                self.dom.query_by_id(target)
            }
            _ => None,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
