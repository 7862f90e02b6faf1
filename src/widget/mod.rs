//! Widget system: trait, render pass, child enumeration.

pub mod children;
pub mod render;
pub mod traits;

pub use children::{annotate, FIRST_CHILD_PROP};
pub use render::{RenderCx, Rendered, Report, StateStore};
pub use traits::{Child, Widget, WidgetElement, WidgetExt};
