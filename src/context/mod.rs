//! Ambient context: tree-scoped values provided by ancestors.

pub mod ambient;
pub mod form;
pub mod keys;

pub use ambient::{AmbientContext, ContextKey};
pub use form::FormControl;
pub use keys::{
    ColorInversion, ListComponent, Nesting, COLOR_INVERSION, FORM_CONTROL, LIST_COMPONENT, MENU,
    NESTED_LIST, ROW_LIST, SUBHEADER_DISPATCH, TYPOGRAPHY_NESTED, WRAP_LIST,
};
