//! Interaction state of a two-state control (checked, focus, disabled).
//!
//! [`SwitchState`] lives in the renderer's state store and survives renders.
//! Each render resolves it against the current inputs into an
//! [`InteractionState`]; the input slot's handlers, produced by
//! [`SwitchBehavior`], mutate it when events arrive.

use std::cell::RefCell;
use std::rc::Rc;

use super::controlled::Controlled;
use crate::context::FormControl;
use crate::element::{EventHandler, Props, SlotEvent};
use crate::event::FocusOrigin;
use crate::slot::SlotPropsGetter;

// ---------------------------------------------------------------------------
// Inputs / resolved state
// ---------------------------------------------------------------------------

/// Per-render inputs of a switch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwitchInputs {
    pub checked: Option<bool>,
    pub default_checked: Option<bool>,
    pub disabled: Option<bool>,
    pub read_only: Option<bool>,
    pub indeterminate: bool,
    pub form: Option<FormControl>,
}

/// Resolved interaction flags for one render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub checked: bool,
    pub indeterminate: bool,
    pub disabled: bool,
    pub read_only: bool,
    pub focus_visible: bool,
}

impl InteractionState {
    /// Checked or indeterminate.
    pub fn is_active(&self) -> bool {
        self.checked || self.indeterminate
    }
}

// ---------------------------------------------------------------------------
// SwitchState
// ---------------------------------------------------------------------------

/// Persistent per-instance state.
#[derive(Debug, Clone)]
pub struct SwitchState {
    checked: Controlled<bool>,
    indeterminate: bool,
    disabled: bool,
    read_only: bool,
    focused: bool,
    focus_visible: bool,
}

impl Default for SwitchState {
    fn default() -> Self {
        Self {
            checked: Controlled::new("checked"),
            indeterminate: false,
            disabled: false,
            read_only: false,
            focused: false,
            focus_visible: false,
        }
    }
}

impl SwitchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve against this render's inputs. Never fires callbacks.
    ///
    /// `disabled` and `read_only` take the explicit value, then the form
    /// control's, then `false`. Disabling clears focus visibility.
    pub fn resolve(&mut self, inputs: &SwitchInputs) -> InteractionState {
        let form = inputs.form.as_ref();
        self.disabled = inputs
            .disabled
            .or_else(|| form.and_then(|f| f.disabled))
            .unwrap_or(false);
        self.read_only = inputs
            .read_only
            .or_else(|| form.and_then(|f| f.read_only))
            .unwrap_or(false);
        self.indeterminate = inputs.indeterminate;
        self.checked.resolve(inputs.checked, inputs.default_checked);
        if self.disabled {
            self.focus_visible = false;
        }
        self.snapshot()
    }

    /// The state as of the last resolve or event.
    pub fn snapshot(&self) -> InteractionState {
        InteractionState {
            checked: *self.checked.get(),
            indeterminate: self.indeterminate,
            disabled: self.disabled,
            read_only: self.read_only,
            focus_visible: self.focus_visible,
        }
    }

    /// Flip the checked value. Returns the new value, or `None` when the
    /// control is disabled or read-only. Controlled values are reported but
    /// not stored.
    pub fn toggle(&mut self) -> Option<bool> {
        if self.disabled || self.read_only {
            return None;
        }
        let next = !*self.checked.get();
        self.checked.set(next);
        Some(next)
    }

    /// Record focus. Returns `true` when focus visibility turned on.
    pub fn focus(&mut self, origin: FocusOrigin) -> bool {
        self.focused = true;
        if !origin.shows_focus_ring() {
            self.focus_visible = false;
            return false;
        }
        if self.disabled || self.focus_visible {
            return false;
        }
        self.focus_visible = true;
        true
    }

    pub fn blur(&mut self) {
        self.focused = false;
        self.focus_visible = false;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_controlled(&self) -> bool {
        self.checked.is_controlled()
    }
}

// ---------------------------------------------------------------------------
// SwitchBehavior
// ---------------------------------------------------------------------------

/// Prop getter for the native input of a switch.
///
/// Produces `type`, `checked`, `disabled`, `readOnly` and the `onChange`,
/// `onFocus`, `onBlur` handlers. Handlers run before any lower-precedence
/// handler of the same name.
#[derive(Clone)]
pub struct SwitchBehavior {
    state: Rc<RefCell<SwitchState>>,
    resolved: InteractionState,
    on_change: Option<EventHandler>,
    on_focus_visible: Option<EventHandler>,
}

impl SwitchBehavior {
    pub fn new(state: Rc<RefCell<SwitchState>>, resolved: InteractionState) -> Self {
        Self {
            state,
            resolved,
            on_change: None,
            on_focus_visible: None,
        }
    }

    /// Called once per successful toggle with `event.checked` set.
    pub fn on_change(mut self, handler: Option<EventHandler>) -> Self {
        self.on_change = handler;
        self
    }

    /// Called when focus becomes visible.
    pub fn on_focus_visible(mut self, handler: Option<EventHandler>) -> Self {
        self.on_focus_visible = handler;
        self
    }

    fn change_handler(&self) -> EventHandler {
        let state = Rc::clone(&self.state);
        let on_change = self.on_change.clone();
        EventHandler::new(move |event: &mut SlotEvent| {
            if event.is_default_prevented() {
                return;
            }
            let toggled = state.borrow_mut().toggle();
            if let Some(checked) = toggled {
                event.checked = Some(checked);
                if let Some(handler) = &on_change {
                    handler.call(event);
                }
            }
        })
    }

    fn focus_handler(&self) -> EventHandler {
        let state = Rc::clone(&self.state);
        let on_focus_visible = self.on_focus_visible.clone();
        EventHandler::new(move |event: &mut SlotEvent| {
            let origin = event.origin.unwrap_or(FocusOrigin::Programmatic);
            let shown = state.borrow_mut().focus(origin);
            if shown {
                if let Some(handler) = &on_focus_visible {
                    handler.call(event);
                }
            }
        })
    }

    fn blur_handler(&self) -> EventHandler {
        let state = Rc::clone(&self.state);
        EventHandler::new(move |_: &mut SlotEvent| state.borrow_mut().blur())
    }
}

impl SlotPropsGetter for SwitchBehavior {
    fn slot_props(&self, _forwarded: &Props) -> Props {
        Props::new()
            .with("type", "checkbox")
            .with("checked", self.resolved.checked)
            .with("disabled", self.resolved.disabled)
            .with("readOnly", self.resolved.read_only)
            .with("onChange", self.change_handler())
            .with("onFocus", self.focus_handler())
            .with("onBlur", self.blur_handler())
    }
}
