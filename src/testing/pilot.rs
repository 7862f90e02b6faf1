//! Pilot: programmatic interaction with a [`Root`].
//!
//! The `Pilot` renders a widget tree once on creation and then simulates user
//! input against named slots, so tests never hold stale node ids.

use crate::app::Root;
use crate::config::EngineConfig;
use crate::context::ContextKey;
use crate::dom::{Dom, NodeData, NodeId};
use crate::event::{InputEvent, Key, KeyEvent, Modifiers, PointerEvent, PointerKind};
use crate::theme::StyleTable;
use crate::widget::Widget;

use super::snapshot::dom_to_string;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless driver for testing.
///
/// # Examples
///
/// ```ignore
/// use gilt_slots::testing::Pilot;
/// use gilt_slots::widgets::Checkbox;
///
/// let mut pilot = Pilot::new(Checkbox::new());
/// pilot.click("Checkbox", "input");
/// assert!(pilot.slot("Checkbox", "root").has_class("Joy-checked"));
/// ```
pub struct Pilot {
    root: Root,
}

impl Pilot {
    /// Wrap `widget` in a root and render it.
    pub fn new(widget: impl Widget + 'static) -> Self {
        Self::from_root(Root::new(widget))
    }

    /// Drive an already configured root. Renders it first.
    pub fn from_root(mut root: Root) -> Self {
        root.render();
        Self { root }
    }

    /// Re-render with a different config (builder).
    pub fn with_config(self, config: EngineConfig) -> Self {
        Self::from_root(self.root.with_config(config))
    }

    /// Re-render with a style table (builder).
    pub fn with_theme(self, theme: impl StyleTable + 'static) -> Self {
        Self::from_root(self.root.with_theme(theme))
    }

    /// Re-render with an ambient value provided at the root (builder).
    pub fn provide<T: Clone + Default + 'static>(self, key: &ContextKey<T>, value: T) -> Self {
        Self::from_root(self.root.provide(key, value))
    }

    pub fn root(&mut self) -> &mut Root {
        &mut self.root
    }

    pub fn dom(&self) -> &Dom {
        self.root.dom()
    }

    /// Current tree as snapshot text.
    pub fn snapshot(&self) -> String {
        dom_to_string(self.root.dom())
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// All nodes rendering `slot` of `widget`, in document order.
    pub fn slots(&self, widget: &str, slot: &str) -> Vec<&NodeData> {
        let dom = self.root.dom();
        dom.query_slot(widget, slot)
            .into_iter()
            .filter_map(|id| dom.get(id))
            .collect()
    }

    /// The first node rendering `slot` of `widget`.
    ///
    /// # Panics
    ///
    /// Panics if no such slot is mounted.
    pub fn slot(&self, widget: &str, slot: &str) -> &NodeData {
        let id = self.find(widget, slot);
        &self.root.dom()[id]
    }

    fn find(&self, widget: &str, slot: &str) -> NodeId {
        match self.root.dom().query_slot(widget, slot).first() {
            Some(&id) => id,
            None => panic!("no {widget}.{slot} slot mounted"),
        }
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Simulate a key press with no modifiers.
    pub fn press_key(&mut self, key: Key) {
        self.press_key_with(key, Modifiers::NONE);
    }

    /// Simulate a key press with the given modifiers.
    pub fn press_key_with(&mut self, key: Key, modifiers: Modifiers) {
        self.root
            .input(&InputEvent::Key(KeyEvent::press(key, modifiers)));
    }

    /// Simulate a pointer press.
    pub fn pointer_down(&mut self) {
        self.root
            .input(&InputEvent::Pointer(PointerEvent::new(PointerKind::Down, 0, 0)));
    }

    /// Click the first `widget.slot`, as a pointer would.
    pub fn click(&mut self, widget: &str, slot: &str) {
        self.pointer_down();
        let id = self.find(widget, slot);
        self.root.click(id);
    }

    /// Move focus to the first `widget.slot` with the keyboard.
    pub fn tab_to(&mut self, widget: &str, slot: &str) {
        self.press_key(Key::Tab);
        self.focus(widget, slot);
    }

    /// Focus the first `widget.slot` using the current modality.
    pub fn focus(&mut self, widget: &str, slot: &str) {
        let id = self.find(widget, slot);
        self.root.focus(id);
    }

    pub fn blur(&mut self, widget: &str, slot: &str) {
        let id = self.find(widget, slot);
        self.root.blur(id);
    }

    /// Fire a change event at the first `widget.slot`.
    pub fn change(&mut self, widget: &str, slot: &str) {
        let id = self.find(widget, slot);
        self.root.change(id);
    }

    /// Re-render without any input.
    pub fn rerender(&mut self) {
        self.root.render();
    }
}

// ===========================================================================
// Tests
// ===========================================================================
