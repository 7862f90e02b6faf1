//! Typography widget: a run of text at a typographic level.
//!
//! Text inside other text renders as `span` and inherits its level, so
//! nesting never produces invalid block-in-inline structure.

use std::any::Any;

use crate::classes::{compose_classes, ClassOverrides, SlotClasses};
use crate::context::{COLOR_INVERSION, TYPOGRAPHY_NESTED};
use crate::element::{ElementType, Node, NodeRef, Props};
use crate::owner::{Color, OwnerState, Variant};
use crate::slot::{compose_slot, SlotOverrides, SlotSpec, ROOT_SLOT};
use crate::validate::{self, PropError};
use crate::widget::{Child, RenderCx, Rendered, Report, Widget};

use super::{forwarded_props, slot_builders};

pub const SLOTS: &[&str] = &["root", "startDecorator", "endDecorator"];

/// Level used when neither the consumer nor a parent text sets one.
pub const DEFAULT_LEVEL: &str = "body1";

/// Element type for a level.
fn level_element(level: &str) -> ElementType {
    match level {
        "h1" => ElementType::tag("h1"),
        "h2" => ElementType::tag("h2"),
        "h3" => ElementType::tag("h3"),
        "h4" => ElementType::tag("h4"),
        "h5" => ElementType::tag("h5"),
        "h6" => ElementType::tag("h6"),
        "inherit" => ElementType::tag("span"),
        _ => ElementType::tag("p"),
    }
}

/// Styled text.
#[derive(Default)]
pub struct Typography {
    level: Option<String>,
    no_wrap: bool,
    gutter_bottom: bool,
    color: Option<Color>,
    variant: Option<Variant>,
    start_decorator: Option<Child>,
    end_decorator: Option<Child>,
    children: Vec<Child>,
    component: Option<ElementType>,
    props: Props,
    slots: SlotOverrides,
    classes: ClassOverrides,
    node_ref: Option<NodeRef>,
}

impl Typography {
    pub fn new(content: impl Into<Child>) -> Self {
        Self {
            children: vec![content.into()],
            ..Self::default()
        }
    }

    /// Typographic level (`"h1"`, `"body2"`, ...).
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    pub fn no_wrap(mut self, no_wrap: bool) -> Self {
        self.no_wrap = no_wrap;
        self
    }

    pub fn gutter_bottom(mut self, gutter_bottom: bool) -> Self {
        self.gutter_bottom = gutter_bottom;
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

    pub fn start_decorator(mut self, decorator: impl Into<Child>) -> Self {
        self.start_decorator = Some(decorator.into());
        self
    }

    pub fn end_decorator(mut self, decorator: impl Into<Child>) -> Self {
        self.end_decorator = Some(decorator.into());
        self
    }

    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    slot_builders!();

    /// The effective level: explicit, else `inherit` inside other text,
    /// else [`DEFAULT_LEVEL`].
    pub fn resolved_level(&self, nested: bool) -> &str {
        match (&self.level, nested) {
            (Some(level), _) => level,
            (None, true) => "inherit",
            (None, false) => DEFAULT_LEVEL,
        }
    }
}

impl Widget for Typography {
    fn widget_type(&self) -> &str {
        "Typography"
    }

    fn render(&self, cx: &RenderCx<'_>) -> Rendered {
        let nested = cx.read(&TYPOGRAPHY_NESTED);
        let inversion = cx.read(&COLOR_INVERSION);
        let level = self.resolved_level(nested);

        let color = self.color.clone().or_else(|| {
            self.variant
                .as_ref()
                .filter(|v| inversion.inverts(v))
                .map(|_| Color::Context)
        });
        let mut builder = OwnerState::builder("Typography").props(cx.external(&self.props));
        if let Some(color) = color {
            builder = builder.color(color);
        }
        if let Some(variant) = self.variant.clone() {
            builder = builder.variant(variant);
        }
        let state = builder.build();

        let slots = [
            SlotClasses::new("root")
                .flag(true, level)
                .flag(self.no_wrap, "noWrap")
                .flag(self.gutter_bottom, "gutterBottom")
                .token("color", state.color().map(Color::as_str))
                .token("variant", state.variant().map(Variant::as_str)),
            SlotClasses::new("startDecorator"),
            SlotClasses::new("endDecorator"),
        ];
        let classes = compose_classes(
            &slots,
            |key| cx.utility_class("Typography", key),
            &self.classes,
        );

        let element = if nested {
            ElementType::tag("span")
        } else {
            level_element(level)
        };
        let external = forwarded_props(cx, &self.props, self.component.as_ref());
        let root = compose_slot(
            SlotSpec::new(ROOT_SLOT, element)
                .external(&external)
                .classes(classes.get("root"))
                .node_ref(self.node_ref.clone()),
            &self.slots,
            &state,
        );

        let inner = cx.provide(&TYPOGRAPHY_NESTED, true);
        let mut report = Report::default();
        let mut decorate = |slot: &str, decorator: Option<&Child>| -> Option<Node> {
            let rendered = inner.render_child(decorator?, slot, 0);
            report.merge(rendered.report);
            let composed = compose_slot(
                SlotSpec::new(slot, ElementType::tag("span")).classes(classes.get(slot)),
                &self.slots,
                &state,
            );
            Some(composed.into_element(vec![rendered.node]).into())
        };
        let start = decorate("startDecorator", self.start_decorator.as_ref());
        let end = decorate("endDecorator", self.end_decorator.as_ref());
        let (children, children_report) = inner.render_children(&self.children, "children");
        report.merge(children_report);

        let nodes: Vec<Node> = start.into_iter().chain(children).chain(end).collect();
        Rendered::new(root.into_element(nodes)).with_report(report)
    }

    fn component(&self) -> Option<&ElementType> {
        self.component
            .as_ref()
            .or_else(|| self.props.get_element("component"))
    }

    fn validate(&self) -> Result<(), PropError> {
        validate::check_slots("Typography", SLOTS, &self.slots)
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
    use pretty_assertions::assert_eq;

    #[test]
    fn top_level_is_paragraph() {
        let pilot = Pilot::new(Typography::new("Hello"));
        let root = pilot.slot("Typography", "root");
        assert_eq!(root.element_name(), Some("p"));
        assert_eq!(root.classes, ["JoyTypography-root", "JoyTypography-body1"]);
    }

    #[test]
    fn heading_levels() {
        let pilot = Pilot::new(Typography::new("T").level("h2"));
        assert_eq!(pilot.slot("Typography", "root").element_name(), Some("h2"));
    }

    #[test]
    fn nested_text_is_span_and_inherits() {
        let pilot = Pilot::new(
            Typography::new("outer ").child(Typography::new("inner").into_child()),
        );
        let nodes = pilot.slots("Typography", "root");
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].element_name(), Some("p"));
        assert_eq!(nodes[1].element_name(), Some("span"));
        assert!(nodes[1].has_class("JoyTypography-inherit"));
    }

    #[test]
    fn explicit_level_still_spans_when_nested() {
        let pilot = Pilot::new(Typography::new("x").level("h1"))
            .provide(&TYPOGRAPHY_NESTED, true);
        let root = pilot.slot("Typography", "root");
        assert_eq!(root.element_name(), Some("span"));
        assert!(root.has_class("JoyTypography-h1"));
    }

    #[test]
    fn explicit_component_wins() {
        let pilot = Pilot::new(Typography::new("x").component(ElementType::tag("label")))
            .provide(&TYPOGRAPHY_NESTED, true);
        assert_eq!(pilot.slot("Typography", "root").element_name(), Some("label"));
    }

    #[test]
    fn decorators_surround_content() {
        let pilot = Pilot::new(
            Typography::new("body")
                .start_decorator("<")
                .end_decorator(">")
                .no_wrap(true),
        );
        let dom = pilot.dom();
        assert_eq!(dom.text_content(dom.root().unwrap()), "<body>");
        assert_eq!(
            pilot.slot("Typography", "startDecorator").classes,
            ["JoyTypography-startDecorator"]
        );
        assert!(pilot.slot("Typography", "root").has_class("JoyTypography-noWrap"));
    }
}
