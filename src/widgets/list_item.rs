//! ListItem widget: one row of a list, optionally hosting a nested list.
//!
//! A nested item listens for a [`ListSubheader`](super::ListSubheader) among
//! its descendants. The body is rendered once with the provisional nesting
//! value; when a subheader registered its id, the body is rendered again
//! with that id published so the nested list can point `aria-labelledby` at
//! it.

use std::any::Any;
use std::rc::Rc;

use crate::classes::{compose_classes, ClassMap, ClassOverrides, SlotClasses};
use crate::context::{
    ColorInversion, ListComponent, Nesting, COLOR_INVERSION, LIST_COMPONENT, MENU, NESTED_LIST,
    ROW_LIST, SUBHEADER_DISPATCH, WRAP_LIST,
};
use crate::element::{ElementType, Node, NodeRef, Props};
use crate::owner::{resolve_appearance, Appearance, Color, ExplicitAppearance, OwnerState, Variant};
use crate::slot::{compose_slot, SlotOverrides, SlotSpec, ROOT_SLOT};
use crate::validate::{self, PropError};
use crate::widget::{annotate, Child, RenderCx, Rendered, Report, Widget};

use super::{forwarded_props, slot_builders};

pub const SLOTS: &[&str] = &["root", "startAction", "endAction"];

/// Role of an item inside a list with the given role, if it needs one.
fn role_in_list(list_role: &str) -> Option<&'static str> {
    match list_role {
        "menu" | "menubar" => Some("none"),
        "group" => Some("presentation"),
        _ => None,
    }
}

/// A list row with optional start and end actions.
#[derive(Default)]
pub struct ListItem {
    nested: bool,
    sticky: bool,
    role: Option<String>,
    color: Option<Color>,
    variant: Option<Variant>,
    start_action: Option<Child>,
    end_action: Option<Child>,
    children: Vec<Child>,
    component: Option<ElementType>,
    props: Props,
    slots: SlotOverrides,
    classes: ClassOverrides,
    node_ref: Option<NodeRef>,
}

impl ListItem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host a nested list (builder).
    pub fn nested(mut self, nested: bool) -> Self {
        self.nested = nested;
        self
    }

    pub fn sticky(mut self, sticky: bool) -> Self {
        self.sticky = sticky;
        self
    }

    /// Explicit ARIA role; wins over the role derived from the list.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
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

    pub fn start_action(mut self, action: impl Into<Child>) -> Self {
        self.start_action = Some(action.into());
        self
    }

    pub fn end_action(mut self, action: impl Into<Child>) -> Self {
        self.end_action = Some(action.into());
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

    /// The item's element type: explicit, else `div` inside a list whose
    /// element does not repeat `li` children.
    fn element_type(&self, list: Option<&ListComponent>) -> Option<ElementType> {
        Widget::component(self).cloned().or_else(|| {
            list.filter(|l| !l.element.is_empty() && !l.is_list_element())
                .map(|_| ElementType::tag("div"))
        })
    }

    fn role_for(&self, in_menu: bool, list: Option<&ListComponent>) -> Option<String> {
        if let Some(role) = &self.role {
            return Some(role.clone());
        }
        match list {
            Some(list) => role_in_list(&list.role).map(str::to_owned),
            None => in_menu.then(|| "none".to_owned()),
        }
    }

    /// Freeze the owner state for one render.
    pub fn resolve_owner_state(
        &self,
        parent_nesting: &Nesting,
        row: bool,
        wrap: bool,
        inversion: &ColorInversion,
        injected: &Props,
    ) -> Rc<OwnerState> {
        let explicit = ExplicitAppearance {
            variant: self.variant.clone(),
            color: self.color.clone(),
        };
        let appearance = resolve_appearance(
            &explicit,
            None,
            inversion,
            &Appearance::new(Variant::Plain, Color::Neutral),
        );
        OwnerState::builder("ListItem")
            .nested(self.nested)
            .nesting(parent_nesting.clone())
            .sticky(self.sticky)
            .row(row)
            .wrap(wrap)
            .variant(appearance.variant)
            .color(appearance.color)
            .props(self.props.merged(injected))
            .build()
    }

    fn compose_classes(&self, cx: &RenderCx<'_>, state: &OwnerState) -> ClassMap {
        let slots = [
            SlotClasses::new("root")
                .flag(state.nested(), "nested")
                .flag(state.nesting().is_nested(), "nesting")
                .flag(state.sticky(), "sticky")
                .token("color", state.color().map(Color::as_str))
                .token("variant", state.variant().map(Variant::as_str)),
            SlotClasses::new("startAction"),
            SlotClasses::new("endAction"),
        ];
        compose_classes(&slots, |key| cx.utility_class("ListItem", key), &self.classes)
    }

    fn render_action(
        &self,
        cx: &RenderCx<'_>,
        slot: &str,
        state: &Rc<OwnerState>,
        classes: &ClassMap,
        report: &mut Report,
    ) -> Option<Node> {
        let action = match slot {
            "startAction" => self.start_action.as_ref(),
            _ => self.end_action.as_ref(),
        }?;
        let rendered = cx.render_child(action, slot, 0);
        report.merge(rendered.report);
        let composed = compose_slot(
            SlotSpec::new(slot, ElementType::tag("div")).classes(classes.get(slot)),
            &self.slots,
            state,
        );
        Some(composed.into_element(vec![rendered.node]).into())
    }

    /// Render start action, annotated children and end action under `cx`.
    fn render_body(
        &self,
        cx: &RenderCx<'_>,
        state: &Rc<OwnerState>,
        classes: &ClassMap,
    ) -> (Vec<Node>, Report) {
        let mut report = Report::default();
        let mut nodes = Vec::new();
        nodes.extend(self.render_action(cx, "startAction", state, classes, &mut report));

        let annotated = annotate(&self.children, "ListItem", cx.config().nested_child_policy);
        let (children, children_report) = cx.render_children(annotated, "children");
        report.merge(children_report);
        nodes.extend(children);

        nodes.extend(self.render_action(cx, "endAction", state, classes, &mut report));
        (nodes, report)
    }
}

impl Widget for ListItem {
    fn widget_type(&self) -> &str {
        "ListItem"
    }

    fn render(&self, cx: &RenderCx<'_>) -> Rendered {
        let parent_nesting = cx.read(&NESTED_LIST);
        let list = cx.read(&LIST_COMPONENT);
        let inversion = cx.read(&COLOR_INVERSION);

        let state = self.resolve_owner_state(
            &parent_nesting,
            cx.read(&ROW_LIST),
            cx.read(&WRAP_LIST),
            &inversion,
            cx.injected(),
        );
        let classes = self.compose_classes(cx, &state);
        let role = self.role_for(cx.read(&MENU), list.as_ref());

        let component = self.element_type(list.as_ref());
        let external = forwarded_props(cx, &self.props, component.as_ref());
        let root = compose_slot(
            SlotSpec::new(ROOT_SLOT, ElementType::tag("li"))
                .external(&external)
                .additional(Props::new().with_opt("role", role))
                .classes(classes.get("root"))
                .node_ref(self.node_ref.clone()),
            &self.slots,
            &state,
        );

        let provisional = if self.nested { Nesting::Nested } else { Nesting::Off };
        let body_cx = cx.provide(&SUBHEADER_DISPATCH, true);
        let (mut body, report) =
            self.render_body(&body_cx.provide(&NESTED_LIST, provisional), &state, &classes);

        if let (true, Some(id)) = (self.nested, report.subheader_id) {
            tracing::debug!(path = cx.path(), %id, "re-rendering nested item with subheader");
            let final_cx = body_cx.provide(&NESTED_LIST, Nesting::Subheader(id));
            body = self.render_body(&final_cx, &state, &classes).0;
        }

        // Registrations below this item are consumed here.
        Rendered::new(root.into_element(body))
    }

    fn component(&self) -> Option<&ElementType> {
        self.component
            .as_ref()
            .or_else(|| self.props.get_element("component"))
    }

    fn validate(&self) -> Result<(), PropError> {
        validate::check_slots("ListItem", SLOTS, &self.slots)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
