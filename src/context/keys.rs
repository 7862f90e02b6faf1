//! The ambient keys published and read by the built-in widgets.

use std::fmt;

use super::ambient::ContextKey;
use super::form::FormControl;
use crate::owner::Variant;

// ---------------------------------------------------------------------------
// Nesting
// ---------------------------------------------------------------------------

/// Nesting value a list item publishes to its subtree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Nesting {
    /// Not inside a nested list item.
    #[default]
    Off,
    /// Inside a nested list item with no registered subheader.
    Nested,
    /// Inside a nested list item whose subheader registered this id.
    Subheader(String),
}

impl Nesting {
    /// Whether the subtree is nested at all.
    pub fn is_nested(&self) -> bool {
        !matches!(self, Nesting::Off)
    }

    /// Id of the registered subheader, if any.
    pub fn subheader_id(&self) -> Option<&str> {
        match self {
            Nesting::Subheader(id) => Some(id),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// ListComponent
// ---------------------------------------------------------------------------

/// The enclosing list's element and role, published as `"element:role"`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListComponent {
    /// Primitive tag of the list, empty for custom components.
    pub element: String,
    pub role: String,
}

impl ListComponent {
    pub fn new(element: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            role: role.into(),
        }
    }

    /// Parse the `"element:role"` form. Missing parts are empty.
    pub fn parse(path: &str) -> Self {
        let (element, role) = path.split_once(':').unwrap_or((path, ""));
        Self::new(element, role)
    }

    /// Whether the list element repeats `li` children natively.
    pub fn is_list_element(&self) -> bool {
        matches!(self.element.as_str(), "ul" | "ol" | "menu")
    }
}

impl fmt::Display for ListComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.element, self.role)
    }
}

// ---------------------------------------------------------------------------
// ColorInversion
// ---------------------------------------------------------------------------

/// Variants whose children invert to the `context` color.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorInversion {
    variants: Vec<Variant>,
}

impl ColorInversion {
    pub fn new(variants: impl IntoIterator<Item = Variant>) -> Self {
        Self {
            variants: variants.into_iter().collect(),
        }
    }

    /// Whether a child using `variant` inverts.
    pub fn inverts(&self, variant: &Variant) -> bool {
        self.variants.contains(variant)
    }
}

// ---------------------------------------------------------------------------
// Keys
// ---------------------------------------------------------------------------

/// Nesting published by list items.
pub const NESTED_LIST: ContextKey<Nesting> = ContextKey::new("nested-list");
/// Whether the enclosing list lays items out in a row.
pub const ROW_LIST: ContextKey<bool> = ContextKey::new("row-list");
/// Whether the enclosing list wraps its items.
pub const WRAP_LIST: ContextKey<bool> = ContextKey::new("wrap-list");
/// Element and role of the enclosing list.
pub const LIST_COMPONENT: ContextKey<Option<ListComponent>> = ContextKey::new("list-component");
/// Present when a list item listens for subheader registrations.
pub const SUBHEADER_DISPATCH: ContextKey<bool> = ContextKey::new("subheader-dispatch");
/// The enclosing form control, if any.
pub const FORM_CONTROL: ContextKey<Option<FormControl>> = ContextKey::new("form-control");
/// Whether the subtree sits inside a menu.
pub const MENU: ContextKey<bool> = ContextKey::new("menu");
/// Whether text is already inside a text element.
pub const TYPOGRAPHY_NESTED: ContextKey<bool> = ContextKey::new("typography-nested");
/// Color inversion published by surfaces.
pub const COLOR_INVERSION: ContextKey<ColorInversion> = ContextKey::new("color-inversion");
