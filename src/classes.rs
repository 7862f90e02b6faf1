//! Utility class composition: owner state flags to class tokens per slot.
//!
//! Each slot declares an ordered list of `(flag, key)` pairs. Composition keeps
//! the keys whose flag is set, maps each through a naming function and, when the
//! consumer supplied an override for that key, appends the consumer class right
//! after the generated one. The result depends only on the inputs.

use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Key helpers
// ---------------------------------------------------------------------------

/// Uppercase the first character: `"solid"` becomes `"Solid"`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A prefixed key: `("variant", "solid")` becomes `"variantSolid"`.
pub fn prefixed_key(prefix: &str, value: &str) -> String {
    format!("{prefix}{}", capitalize(value))
}

// ---------------------------------------------------------------------------
// SlotClasses
// ---------------------------------------------------------------------------

/// Ordered flag list for one slot. The slot's own name is always the first key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotClasses {
    slot: String,
    keys: Vec<(bool, String)>,
}

impl SlotClasses {
    pub fn new(slot: &str) -> Self {
        Self {
            slot: slot.to_owned(),
            keys: vec![(true, slot.to_owned())],
        }
    }

    /// Contribute `key` when `on` is set.
    pub fn flag(mut self, on: bool, key: &str) -> Self {
        self.keys.push((on, key.to_owned()));
        self
    }

    /// Contribute `{prefix}{Value}` when `value` is present.
    pub fn token(mut self, prefix: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => self.keys.push((true, prefixed_key(prefix, v))),
            _ => self.keys.push((false, prefix.to_owned())),
        }
        self
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Keys whose flag is set, in declaration order.
    pub fn active_keys(&self) -> impl Iterator<Item = &str> {
        self.keys
            .iter()
            .filter(|(on, _)| *on)
            .map(|(_, key)| key.as_str())
    }
}

// ---------------------------------------------------------------------------
// ClassOverrides / ClassMap
// ---------------------------------------------------------------------------

/// Consumer classes keyed by utility key (`"root"`, `"checked"`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassOverrides {
    entries: BTreeMap<String, String>,
}

impl ClassOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a consumer class for `key` (builder).
    pub fn with(mut self, key: &str, class: impl Into<String>) -> Self {
        self.entries.insert(key.to_owned(), class.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys with an override, in name order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Composed class lists per slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassMap {
    slots: BTreeMap<String, Vec<String>>,
}

impl ClassMap {
    /// Classes of a slot, empty if the slot was not composed.
    pub fn get(&self, slot: &str) -> &[String] {
        self.slots.get(slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Classes of a slot joined with spaces.
    pub fn joined(&self, slot: &str) -> String {
        self.get(slot).join(" ")
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Compose class lists for every slot.
pub fn compose_classes(
    slots: &[SlotClasses],
    name_fn: impl Fn(&str) -> String,
    overrides: &ClassOverrides,
) -> ClassMap {
    let composed = slots
        .iter()
        .map(|slot| {
            let mut classes = Vec::new();
            for key in slot.active_keys() {
                classes.push(name_fn(key));
                if let Some(extra) = overrides.get(key) {
                    classes.push(extra.to_owned());
                }
            }
            (slot.slot.clone(), classes)
        })
        .collect();
    ClassMap { slots: composed }
}
