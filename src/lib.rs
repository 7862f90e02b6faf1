//! # gilt-slots
//!
//! Slot composition and derived-state engine for component widgets.
//!
//! A widget is described by a small set of named slots (root, input, label,
//! ...). Each render freezes an owner state from the widget's props, its
//! persistent interaction state and the ambient context, composes utility
//! classes from it, and merges every slot's props from the widget defaults,
//! the consumer's forwarded props and per-slot overrides.
//!
//! ## Core Systems
//!
//! - **[`context`]** — Scoped ambient values (nesting, list layout, form control)
//! - **[`state`]** — Controlled/uncontrolled arbitration and switch interaction state
//! - **[`owner`]** — Color, variant and size resolution into the owner state
//! - **[`classes`]** — Utility class composition per slot
//! - **[`slot`]** — Slot prop merging, element type and ref resolution
//! - **[`widget`]** — Widget trait, render pass, child enumeration
//! - **[`widgets`]** — Built-in widgets: Checkbox, List, ListItem, ListSubheader, Typography
//! - **[`dom`]** — Slotmap-backed arena of mounted output with queries and event dispatch
//! - **[`event`]** — Input events and keyboard/pointer modality
//! - **[`app`]** — Root tying a widget tree to state, config and events
//! - **[`testing`]** — Pilot and snapshot helpers

// Foundation
pub mod config;
pub mod element;
pub mod theme;
pub mod validate;

// Derived state
pub mod classes;
pub mod context;
pub mod owner;
pub mod slot;
pub mod state;

// Widget system
pub mod widget;
pub mod widgets;

// Output and events
pub mod dom;
pub mod event;

// Application
pub mod app;
pub mod testing;

pub use app::Root;
pub use config::EngineConfig;
pub use widget::{Child, Widget, WidgetExt};
