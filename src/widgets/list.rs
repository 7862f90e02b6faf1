//! List widget: a container publishing layout and identity to its items.

use std::any::Any;
use std::rc::Rc;

use crate::classes::{compose_classes, ClassMap, ClassOverrides, SlotClasses};
use crate::config::NestedChildPolicy;
use crate::context::{
    ListComponent, Nesting, COLOR_INVERSION, LIST_COMPONENT, NESTED_LIST, ROW_LIST, WRAP_LIST,
};
use crate::element::{ElementType, NodeRef, Props};
use crate::owner::{
    resolve_appearance, Appearance, Color, ExplicitAppearance, OwnerState, Size, Variant,
};
use crate::slot::{compose_slot, SlotOverrides, SlotSpec, ROOT_SLOT};
use crate::validate::{self, PropError};
use crate::widget::{annotate, Child, RenderCx, Rendered, Widget};

use super::{forwarded_props, slot_builders, variant_style};

pub const SLOTS: &[&str] = &["root"];

/// Direction items are laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Vertical => "vertical",
            Orientation::Horizontal => "horizontal",
        }
    }
}

/// A list of items.
///
/// Children read the list's orientation, wrapping and `"element:role"` from
/// the ambient context. A list inside a nested [`ListItem`](super::ListItem)
/// keeps the item's nesting and is labelled by its registered subheader; any
/// other list resets nesting for its subtree.
#[derive(Default)]
pub struct List {
    orientation: Orientation,
    wrap: bool,
    role: Option<String>,
    size: Option<Size>,
    color: Option<Color>,
    variant: Option<Variant>,
    children: Vec<Child>,
    component: Option<ElementType>,
    props: Props,
    slots: SlotOverrides,
    classes: ClassOverrides,
    node_ref: Option<NodeRef>,
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Let a horizontal list wrap its items.
    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn size(mut self, size: impl Into<Size>) -> Self {
        self.size = Some(size.into());
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

    pub fn children(mut self, children: impl IntoIterator<Item = Child>) -> Self {
        self.children.extend(children);
        self
    }

    slot_builders!();

    fn compose_classes(&self, cx: &RenderCx<'_>, state: &OwnerState) -> ClassMap {
        let slots = [SlotClasses::new("root")
            .flag(true, self.orientation.as_str())
            .flag(state.nested(), "nesting")
            .token("variant", state.variant().map(Variant::as_str))
            .token("color", state.color().map(Color::as_str))
            .token("size", state.size().map(Size::as_str))];
        compose_classes(&slots, |key| cx.utility_class("List", key), &self.classes)
    }
}

impl Widget for List {
    fn widget_type(&self) -> &str {
        "List"
    }

    fn render(&self, cx: &RenderCx<'_>) -> Rendered {
        let nesting = cx.read(&NESTED_LIST);
        let inversion = cx.read(&COLOR_INVERSION);
        let explicit = ExplicitAppearance {
            variant: self.variant.clone(),
            color: self.color.clone(),
        };
        let appearance = resolve_appearance(
            &explicit,
            None,
            &inversion,
            &Appearance::new(Variant::Plain, Color::Neutral),
        );
        let row = self.orientation == Orientation::Horizontal;
        let state: Rc<OwnerState> = OwnerState::builder("List")
            .nested(nesting.is_nested())
            .nesting(nesting.clone())
            .row(row)
            .wrap(self.wrap)
            .variant(appearance.variant.clone())
            .color(appearance.color.clone())
            .size(self.size.clone().unwrap_or(Size::Md))
            .props(cx.external(&self.props))
            .build();
        let classes = self.compose_classes(cx, &state);

        let element = cx
            .component_override(self.component.as_ref())
            .unwrap_or(ElementType::tag("ul"));
        let tag = if element.is_primitive() { element.name() } else { "" };
        let list_component = ListComponent::new(tag, self.role.clone().unwrap_or_default());

        let external = forwarded_props(cx, &self.props, self.component.as_ref());
        let additional = variant_style(cx, &appearance, false)
            .with_opt("role", self.role.as_deref())
            .with_opt("aria-labelledby", nesting.subheader_id());
        let root = compose_slot(
            SlotSpec::new(ROOT_SLOT, ElementType::tag("ul"))
                .external(&external)
                .additional(additional)
                .classes(classes.get("root"))
                .node_ref(self.node_ref.clone()),
            &self.slots,
            &state,
        );

        let children_cx = cx
            .provide(&ROW_LIST, row)
            .provide(&WRAP_LIST, self.wrap)
            .provide(&LIST_COMPONENT, Some(list_component))
            .provide(
                &NESTED_LIST,
                if nesting.is_nested() { nesting } else { Nesting::Off },
            );
        // Items only get the first-child marker; nested lists keep their element.
        let annotated = annotate(&self.children, "List", NestedChildPolicy::Never);
        let (children, report) = children_cx.render_children(annotated, "children");
        Rendered::new(root.into_element(children)).with_report(report)
    }

    fn component(&self) -> Option<&ElementType> {
        self.component
            .as_ref()
            .or_else(|| self.props.get_element("component"))
    }

    fn validate(&self) -> Result<(), PropError> {
        validate::check_slots("List", SLOTS, &self.slots)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Pilot;
    use crate::widget::WidgetExt;
    use crate::widgets::ListItem;
    use pretty_assertions::assert_eq;

    /// Records what it sees in the ambient context as props.
    struct Spy;

    impl Widget for Spy {
        fn widget_type(&self) -> &str {
            "Spy"
        }

        fn render(&self, cx: &RenderCx<'_>) -> Rendered {
            let mut el = crate::element::Element::new(ElementType::tag("i"));
            el.widget_type = Some("Spy".into());
            el.slot = Some("root".into());
            el.props = Props::new()
                .with("row", cx.read(&ROW_LIST))
                .with("wrap", cx.read(&WRAP_LIST))
                .with_opt("list", cx.read(&LIST_COMPONENT).map(|l| l.to_string()))
                .with("nested", cx.read(&NESTED_LIST).is_nested());
            Rendered::new(el)
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn defaults() {
        let pilot = Pilot::new(List::new().child(Spy.into_child()));
        let root = pilot.slot("List", "root");
        assert_eq!(root.element_name(), Some("ul"));
        assert_eq!(
            root.classes,
            [
                "JoyList-root",
                "JoyList-vertical",
                "JoyList-variantPlain",
                "JoyList-colorNeutral",
                "JoyList-sizeMd"
            ]
        );
        let spy = pilot.slot("Spy", "root");
        assert_eq!(spy.props.get_bool("row"), Some(false));
        assert_eq!(spy.props.get_str("list"), Some("ul:"));
        assert_eq!(spy.props.get_bool("nested"), Some(false));
    }

    #[test]
    fn publishes_row_wrap_and_component() {
        let pilot = Pilot::new(
            List::new()
                .orientation(Orientation::Horizontal)
                .wrap(true)
                .role("menubar")
                .component(ElementType::tag("div"))
                .child(Spy.into_child()),
        );
        let spy = pilot.slot("Spy", "root");
        assert_eq!(spy.props.get_bool("row"), Some(true));
        assert_eq!(spy.props.get_bool("wrap"), Some(true));
        assert_eq!(spy.props.get_str("list"), Some("div:menubar"));
        let root = pilot.slot("List", "root");
        assert_eq!(root.element_name(), Some("div"));
        assert_eq!(root.props.get_str("role"), Some("menubar"));
        assert!(root.has_class("JoyList-horizontal"));
    }

    #[test]
    fn custom_component_has_empty_element() {
        let pilot = Pilot::new(
            List::new()
                .component(ElementType::component("Menu"))
                .role("menu")
                .child(Spy.into_child()),
        );
        assert_eq!(pilot.slot("Spy", "root").props.get_str("list"), Some(":menu"));
    }

    #[test]
    fn items_adapt_to_the_list() {
        let pilot = Pilot::new(
            List::new()
                .component(ElementType::tag("div"))
                .role("group")
                .child(ListItem::new().child("a").into_child()),
        );
        let item = pilot.slot("ListItem", "root");
        assert_eq!(item.element_name(), Some("div"));
        assert_eq!(item.props.get_str("role"), Some("presentation"));
    }

    #[test]
    fn first_item_is_marked() {
        let pilot = Pilot::new(
            List::new()
                .child(ListItem::new().child("a").into_child())
                .child(ListItem::new().child("b").into_child())
                .child(List::new().into_child()),
        );
        let items = pilot.slots("ListItem", "root");
        assert_eq!(items[0].props.get_str("data-first-child"), Some(""));
        assert_eq!(items[1].props.get_str("data-first-child"), None);
        assert_eq!(pilot.slots("List", "root")[1].element_name(), Some("ul"));
    }

    #[test]
    fn unknown_slot_is_reported() {
        assert!(List::new().slot_props("marker", Props::new()).validate().is_err());
    }

    #[test]
    fn resets_nesting_outside_nested_items() {
        let pilot = Pilot::new(List::new().child(Spy.into_child()))
            .provide(&NESTED_LIST, Nesting::Off);
        assert_eq!(pilot.slot("Spy", "root").props.get_bool("nested"), Some(false));
        assert!(!pilot.slot("List", "root").has_class("JoyList-nesting"));
    }

    #[test]
    fn nested_list_keeps_nesting_and_label() {
        let pilot = Pilot::new(List::new().child(Spy.into_child()))
            .provide(&NESTED_LIST, Nesting::Subheader("head".into()));
        let root = pilot.slot("List", "root");
        assert!(root.has_class("JoyList-nesting"));
        assert_eq!(root.props.get_str("aria-labelledby"), Some("head"));
        assert_eq!(pilot.slot("Spy", "root").props.get_bool("nested"), Some(true));

        let pilot = Pilot::new(List::new()).provide(&NESTED_LIST, Nesting::Nested);
        assert_eq!(pilot.slot("List", "root").props.get_str("aria-labelledby"), None);
    }
}
