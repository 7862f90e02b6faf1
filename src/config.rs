//! Engine configuration: class naming, id generation, child policies.
//!
//! [`EngineConfig`] is a plain builder-style struct. Every render pass reads it
//! through the [`RenderCx`](crate::widget::RenderCx); nothing in the engine
//! holds global configuration.

// ---------------------------------------------------------------------------
// NestedChildPolicy
// ---------------------------------------------------------------------------

/// What happens to a child widget of the same kind as the composite that is
/// enumerating it (e.g. a `ListItem` inside a `ListItem`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NestedChildPolicy {
    /// Force a neutral container unless the child names its own element type.
    #[default]
    RespectExplicit,
    /// Always force a neutral container, even over an explicit element type.
    AlwaysForce,
    /// Leave same-kind children untouched.
    Never,
}

/// Utility keys that describe a global interaction state rather than a
/// widget-specific sub-part. They share one class name across all widgets.
pub const GLOBAL_STATE_KEYS: &[&str] = &[
    "active",
    "checked",
    "completed",
    "disabled",
    "error",
    "expanded",
    "focused",
    "focusVisible",
    "readOnly",
    "required",
    "selected",
];

// ---------------------------------------------------------------------------
// EngineConfig
// ---------------------------------------------------------------------------

/// Configuration for the composition engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Prefix for widget utility classes (`{prefix}{Widget}-{key}`).
    pub class_prefix: String,
    /// Prefix for global state classes (`{state_prefix}-{key}`).
    pub state_prefix: String,
    /// Prefix for generated element ids.
    pub id_prefix: String,
    /// Element-type policy for same-kind nested children.
    pub nested_child_policy: NestedChildPolicy,
    /// Run each widget's prop validation before rendering it.
    pub validate_props: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            class_prefix: "Joy".to_owned(),
            state_prefix: "Joy".to_owned(),
            id_prefix: "gilt".to_owned(),
            nested_child_policy: NestedChildPolicy::default(),
            validate_props: false,
        }
    }
}

impl EngineConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the widget class prefix (builder).
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Set the global state class prefix (builder).
    pub fn with_state_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.state_prefix = prefix.into();
        self
    }

    /// Set the generated id prefix (builder).
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Set the nested same-kind child policy (builder).
    pub fn with_nested_child_policy(mut self, policy: NestedChildPolicy) -> Self {
        self.nested_child_policy = policy;
        self
    }

    /// Enable or disable prop validation (builder).
    pub fn with_validation(mut self, enabled: bool) -> Self {
        self.validate_props = enabled;
        self
    }

    /// Class name for a utility key of a widget.
    ///
    /// Global state keys (see [`GLOBAL_STATE_KEYS`]) are shared across widgets.
    pub fn utility_class(&self, widget: &str, key: &str) -> String {
        if GLOBAL_STATE_KEYS.contains(&key) {
            format!("{}-{key}", self.state_prefix)
        } else {
            format!("{}{widget}-{key}", self.class_prefix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.class_prefix, "Joy");
        assert_eq!(config.id_prefix, "gilt");
        assert_eq!(config.nested_child_policy, NestedChildPolicy::RespectExplicit);
        assert!(!config.validate_props);
    }

    #[test]
    fn builder_chain() {
        let config = EngineConfig::new()
            .with_class_prefix("Acme")
            .with_state_prefix("is")
            .with_id_prefix("acme")
            .with_nested_child_policy(NestedChildPolicy::Never)
            .with_validation(true);
        assert_eq!(config.class_prefix, "Acme");
        assert_eq!(config.state_prefix, "is");
        assert_eq!(config.id_prefix, "acme");
        assert_eq!(config.nested_child_policy, NestedChildPolicy::Never);
        assert!(config.validate_props);
    }

    #[test]
    fn slot_keys_are_widget_scoped() {
        let config = EngineConfig::default();
        assert_eq!(config.utility_class("Checkbox", "root"), "JoyCheckbox-root");
        assert_eq!(
            config.utility_class("ListItem", "variantSoft"),
            "JoyListItem-variantSoft"
        );
    }

    #[test]
    fn state_keys_are_global() {
        let config = EngineConfig::default();
        assert_eq!(config.utility_class("Checkbox", "checked"), "Joy-checked");
        assert_eq!(config.utility_class("ListItem", "focusVisible"), "Joy-focusVisible");
    }
}
