//! ContextProvider: provides ambient values to a subtree.
//!
//! Renders no element of its own; its children are returned as a fragment.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use crate::context::{AmbientContext, ContextKey};
use crate::element::Node;
use crate::widget::{Child, RenderCx, Rendered, Widget};

type Provision = Rc<dyn Fn(&AmbientContext) -> AmbientContext>;

/// Provides one or more ambient values to its children.
///
/// # Examples
///
/// ```ignore
/// let form = ContextProvider::new()
///     .value(&FORM_CONTROL, Some(FormControl::new().error(true)))
///     .child(Checkbox::new().into_child());
/// ```
#[derive(Default, Clone)]
pub struct ContextProvider {
    provisions: Vec<(&'static str, Provision)>,
    children: Vec<Child>,
}

impl ContextProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide `value` under `key`. Later values for the same key win.
    pub fn value<T: Clone + Default + 'static>(mut self, key: &ContextKey<T>, value: T) -> Self {
        let key = ContextKey::<T>::new(key.name());
        self.provisions.push((
            key.name(),
            Rc::new(move |ambient: &AmbientContext| ambient.provide(&key, value.clone())),
        ));
        self
    }

    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Child>) -> Self {
        self.children.extend(children);
        self
    }

    /// `ambient` with every provision applied in order.
    pub fn apply(&self, ambient: &AmbientContext) -> AmbientContext {
        self.provisions
            .iter()
            .fold(ambient.clone(), |scope, (_, provide)| provide(&scope))
    }
}

impl fmt::Debug for ContextProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<_> = self.provisions.iter().map(|(name, _)| *name).collect();
        f.debug_struct("ContextProvider")
            .field("keys", &keys)
            .field("children", &self.children.len())
            .finish()
    }
}

impl Widget for ContextProvider {
    fn widget_type(&self) -> &str {
        "ContextProvider"
    }

    fn render(&self, cx: &RenderCx<'_>) -> Rendered {
        let scoped = cx.with_ambient(self.apply(cx.ambient()));
        let (children, report) = scoped.render_children(&self.children, "children");
        Rendered::new(Node::Fragment(children)).with_report(report)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{FormControl, FORM_CONTROL, ROW_LIST};
    use crate::testing::Pilot;
    use crate::widget::WidgetExt;
    use crate::widgets::Checkbox;

    #[test]
    fn applies_in_order() {
        let provider = ContextProvider::new()
            .value(&ROW_LIST, true)
            .value(&ROW_LIST, false);
        let ambient = provider.apply(&AmbientContext::new());
        assert!(!ambient.read(&ROW_LIST));
        assert!(ambient.is_provided(&ROW_LIST));
    }

    #[test]
    fn subtree_sees_values() {
        let pilot = Pilot::new(
            ContextProvider::new()
                .value(&FORM_CONTROL, Some(FormControl::new().error(true)))
                .child(Checkbox::new().into_child()),
        );
        assert!(pilot
            .slot("Checkbox", "root")
            .has_class("JoyCheckbox-colorDanger"));
    }

    #[test]
    fn renders_children_as_fragment() {
        let pilot = Pilot::new(ContextProvider::new().child("a").child("b"));
        assert_eq!(pilot.dom().roots().len(), 2);
    }

    #[test]
    fn debug_lists_keys() {
        let provider = ContextProvider::new().value(&ROW_LIST, true);
        assert_eq!(
            format!("{provider:?}"),
            "ContextProvider { keys: [\"row-list\"], children: 0 }"
        );
    }
}
