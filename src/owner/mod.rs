//! Owner state: the frozen per-render descriptor of a widget instance.

pub mod appearance;
pub mod state;

pub use appearance::{
    resolve_appearance, resolve_color, resolve_size, Appearance, Color, ExplicitAppearance, Size,
    ToggleAppearance, Variant,
};
pub use state::{OwnerState, OwnerStateBuilder};
