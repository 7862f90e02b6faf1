//! Built-in widgets: Checkbox, List, ListItem, ListSubheader, Typography,
//! ContextProvider.

pub mod checkbox;
pub mod list;
pub mod list_item;
pub mod list_subheader;
pub mod provider;
pub mod typography;

pub use checkbox::Checkbox;
pub use list::{List, Orientation};
pub use list_item::ListItem;
pub use list_subheader::ListSubheader;
pub use provider::ContextProvider;
pub use typography::Typography;

use crate::element::Props;
use crate::owner::Appearance;
use crate::widget::RenderCx;

/// Builder methods shared by every widget with slots.
///
/// Expects the fields `component`, `props`, `slots`, `classes` and `node_ref`.
macro_rules! slot_builders {
    () => {
        /// Element type of the root slot (builder).
        pub fn component(mut self, component: $crate::element::ElementType) -> Self {
            self.component = Some(component);
            self
        }

        /// Forward an extra prop to the root slot (builder).
        pub fn prop(mut self, key: &str, value: impl Into<$crate::element::PropValue>) -> Self {
            self.props.set(key, value);
            self
        }

        /// Consumer props for one slot (builder).
        pub fn slot_props(mut self, slot: &str, props: $crate::element::Props) -> Self {
            self.slots = self.slots.props(slot, props);
            self
        }

        /// Consumer element type for one slot (builder).
        pub fn slot_component(mut self, slot: &str, component: $crate::element::ElementType) -> Self {
            self.slots = self.slots.component(slot, component);
            self
        }

        /// Consumer class for one slot (builder).
        pub fn slot_class(mut self, slot: &str, class: impl Into<String>) -> Self {
            self.slots = self.slots.class_name(slot, class);
            self
        }

        /// Extra class emitted after the utility class for `key` (builder).
        pub fn class_override(mut self, key: &str, class: impl Into<String>) -> Self {
            self.classes = self.classes.with(key, class);
            self
        }

        /// Ref filled with the root node once mounted (builder).
        pub fn node_ref(mut self, node_ref: $crate::element::NodeRef) -> Self {
            self.node_ref = Some(node_ref);
            self
        }
    };
}

pub(crate) use slot_builders;

/// External props of a widget: its own forwarded bag plus its explicit
/// element type as `component`.
pub(crate) fn forwarded_props(
    cx: &RenderCx<'_>,
    own: &Props,
    component: Option<&crate::element::ElementType>,
) -> Props {
    let own = own.clone().with_opt("component", component.cloned());
    cx.external(&own)
}

/// The `style` prop for a slot showing `appearance`, if the theme has one.
///
/// Disabled slots look up `{variant}Disabled`.
pub(crate) fn variant_style(cx: &RenderCx<'_>, appearance: &Appearance, disabled: bool) -> Props {
    let style = if disabled {
        let key = format!("{}Disabled", appearance.variant);
        cx.theme_lookup(&key, &appearance.color)
    } else {
        cx.style(appearance)
    };
    Props::new().with_opt("style", style)
}
