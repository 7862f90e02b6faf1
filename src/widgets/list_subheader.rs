//! ListSubheader widget: a heading that labels the nested list next to it.

use std::any::Any;

use crate::classes::{compose_classes, ClassOverrides, SlotClasses};
use crate::context::{COLOR_INVERSION, SUBHEADER_DISPATCH};
use crate::element::{ElementType, NodeRef, Props};
use crate::owner::{Color, OwnerState, Variant};
use crate::slot::{compose_slot, SlotOverrides, SlotSpec, ROOT_SLOT};
use crate::validate::{self, PropError};
use crate::widget::{Child, RenderCx, Rendered, Report, Widget};

use super::{forwarded_props, slot_builders};

pub const SLOTS: &[&str] = &["root"];

/// A list subheader.
///
/// When a listening [`ListItem`](super::ListItem) encloses it, the subheader
/// reports its id upward so the item's nested list can reference it.
#[derive(Default)]
pub struct ListSubheader {
    id: Option<String>,
    sticky: bool,
    color: Option<Color>,
    variant: Option<Variant>,
    children: Vec<Child>,
    component: Option<ElementType>,
    props: Props,
    slots: SlotOverrides,
    classes: ClassOverrides,
    node_ref: Option<NodeRef>,
}

impl ListSubheader {
    pub fn new(content: impl Into<Child>) -> Self {
        Self {
            children: vec![content.into()],
            ..Self::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn sticky(mut self, sticky: bool) -> Self {
        self.sticky = sticky;
        self
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn variant(mut self, variant: impl Into<Variant>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    slot_builders!();
}

impl Widget for ListSubheader {
    fn widget_type(&self) -> &str {
        "ListSubheader"
    }

    fn render(&self, cx: &RenderCx<'_>) -> Rendered {
        let inversion = cx.read(&COLOR_INVERSION);
        // Without a variant there is nothing to invert.
        let color = self.color.clone().or_else(|| {
            self.variant
                .as_ref()
                .filter(|v| inversion.inverts(v))
                .map(|_| Color::Context)
        });

        let mut builder = OwnerState::builder("ListSubheader")
            .sticky(self.sticky)
            .props(cx.external(&self.props));
        if let Some(color) = color {
            builder = builder.color(color);
        }
        if let Some(variant) = self.variant.clone() {
            builder = builder.variant(variant);
        }
        let state = builder.build();

        let slots = [SlotClasses::new("root")
            .flag(state.sticky(), "sticky")
            .token("color", state.color().map(Color::as_str))
            .token("variant", state.variant().map(Variant::as_str))];
        let classes = compose_classes(
            &slots,
            |key| cx.utility_class("ListSubheader", key),
            &self.classes,
        );

        let id = cx.use_id(self.id.as_deref());
        let external = forwarded_props(cx, &self.props, self.component.as_ref());
        let root = compose_slot(
            SlotSpec::new(ROOT_SLOT, ElementType::tag("div"))
                .external(&external)
                .additional(Props::new().with("id", id.as_str()))
                .classes(classes.get("root"))
                .node_ref(self.node_ref.clone()),
            &self.slots,
            &state,
        );
        let (children, mut report) = cx.render_children(&self.children, "children");

        if cx.read(&SUBHEADER_DISPATCH) {
            tracing::trace!(path = cx.path(), %id, "registering subheader");
            report.merge(Report {
                subheader_id: Some(id),
            });
        }
        Rendered::new(root.into_element(children)).with_report(report)
    }

    fn component(&self) -> Option<&ElementType> {
        self.component
            .as_ref()
            .or_else(|| self.props.get_element("component"))
    }

    fn validate(&self) -> Result<(), PropError> {
        validate::check_slots("ListSubheader", SLOTS, &self.slots)?;
        validate::check_id("ListSubheader", self.id.as_deref())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::context::{AmbientContext, ColorInversion};
    use crate::testing::Pilot;
    use crate::theme::VariantStyles;
    use crate::widget::StateStore;
    use pretty_assertions::assert_eq;

    fn render(widget: &ListSubheader, dispatch: bool) -> Rendered {
        let store = StateStore::new();
        let config = EngineConfig::default();
        let theme = VariantStyles::new();
        let ambient = AmbientContext::new().provide(&SUBHEADER_DISPATCH, dispatch);
        widget.render(&RenderCx::new(ambient, &store, &config, &theme))
    }

    #[test]
    fn renders_div_with_generated_id() {
        let pilot = Pilot::new(ListSubheader::new("Fruit"));
        let root = pilot.slot("ListSubheader", "root");
        assert_eq!(root.element_name(), Some("div"));
        assert_eq!(root.id.as_deref(), Some("gilt-root"));
        assert_eq!(root.classes, ["JoyListSubheader-root"]);
    }

    #[test]
    fn reports_only_with_dispatcher() {
        let sub = ListSubheader::new("x").id("s1");
        assert_eq!(render(&sub, true).report.subheader_id.as_deref(), Some("s1"));
        assert!(render(&sub, false).report.is_empty());
    }

    #[test]
    fn classes_from_flags() {
        let pilot = Pilot::new(ListSubheader::new("x").sticky(true).variant("soft"))
            .provide(&COLOR_INVERSION, ColorInversion::new([Variant::Soft]));
        assert_eq!(
            pilot.slot("ListSubheader", "root").classes,
            [
                "JoyListSubheader-root",
                "JoyListSubheader-sticky",
                "JoyListSubheader-colorContext",
                "JoyListSubheader-variantSoft"
            ]
        );
    }

    #[test]
    fn explicit_id_validated() {
        assert!(ListSubheader::new("x").id(" ").validate().is_err());
        assert!(ListSubheader::new("x").id("ok").validate().is_ok());
    }
}
