//! Style resolution table: `(variant, color) -> declarations` lookup.
//!
//! The engine never interprets declarations; widgets look them up by key and
//! attach whatever they find as a `style` prop on the slot that shows the
//! variant.

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use crate::owner::Color;

/// A block of style declarations, property name to value.
pub type Declarations = BTreeMap<String, String>;

/// Lookup-by-key access to variant styles.
pub trait StyleTable {
    /// Declarations for a variant key (`"solid"`, `"solidDisabled"`, ...) and
    /// color, if the table has any.
    fn lookup(&self, variant: &str, color: &Color) -> Option<Rc<Declarations>>;
}

/// A map-backed [`StyleTable`].
#[derive(Debug, Clone, Default)]
pub struct VariantStyles {
    entries: HashMap<(String, String), Rc<Declarations>>,
}

impl VariantStyles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register declarations for a variant key and color (builder).
    pub fn with<K, V>(
        mut self,
        variant: &str,
        color: &Color,
        declarations: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let block: Declarations = declarations
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.entries.insert(
            (variant.to_owned(), color.as_str().to_owned()),
            Rc::new(block),
        );
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StyleTable for VariantStyles {
    fn lookup(&self, variant: &str, color: &Color) -> Option<Rc<Declarations>> {
        self.entries
            .get(&(variant.to_owned(), color.as_str().to_owned()))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_hit_and_miss() {
        let table = VariantStyles::new().with("solid", &Color::Primary, [("color", "white")]);
        let hit = table.lookup("solid", &Color::Primary).unwrap();
        assert_eq!(hit.get("color").map(String::as_str), Some("white"));
        assert!(table.lookup("solid", &Color::Neutral).is_none());
        assert!(table.lookup("soft", &Color::Primary).is_none());
    }

    #[test]
    fn custom_colors_are_keys_too() {
        let brand = Color::from("brand");
        let table = VariantStyles::new().with("plain", &brand, [("color", "teal")]);
        assert!(table.lookup("plain", &Color::from("brand")).is_some());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn empty_table() {
        let table = VariantStyles::default();
        assert!(table.is_empty());
        assert!(table.lookup("solid", &Color::Danger).is_none());
    }
}
