//! Slot composition: final element type and merged props per named slot.
//!
//! Precedence, lowest to highest:
//!
//! 1. the slot's default props
//! 2. the widget's external forwarded props (root slot by default)
//! 3. additional props computed by the widget
//! 4. the slot's prop getter output (native-control behavior)
//! 5. the consumer's per-slot override
//!
//! Plain values are replaced by higher layers; event handlers compose, the
//! higher layer's handler running first (see [`Props::merge`]). Class names are
//! never merged as values: the utility classes come first and every consumer
//! class is appended after them.

use std::collections::BTreeMap;
use std::rc::Rc;

use crate::element::{Element, ElementType, Node, NodeRef, PropValue, Props};
use crate::owner::OwnerState;

/// The slot every widget renders as its outermost element.
pub const ROOT_SLOT: &str = "root";

// ---------------------------------------------------------------------------
// SlotPropsGetter
// ---------------------------------------------------------------------------

/// Behavior props for a slot hosting a native control.
pub trait SlotPropsGetter {
    /// Props owned by the behavior. `forwarded` is the bag merged from the
    /// lower layers; handlers returned here are composed over the ones in it.
    fn slot_props(&self, forwarded: &Props) -> Props;
}

impl<F> SlotPropsGetter for F
where
    F: Fn(&Props) -> Props,
{
    fn slot_props(&self, forwarded: &Props) -> Props {
        self(forwarded)
    }
}

// ---------------------------------------------------------------------------
// SlotOverrides
// ---------------------------------------------------------------------------

/// Consumer override for one slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotOverride {
    pub component: Option<ElementType>,
    pub slot_props: Props,
    pub class_name: Option<String>,
}

/// Consumer overrides keyed by slot name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotOverrides {
    slots: BTreeMap<String, SlotOverride>,
}

impl SlotOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the element type of `slot` (builder).
    pub fn component(mut self, slot: &str, component: ElementType) -> Self {
        self.entry(slot).component = Some(component);
        self
    }

    /// Merge props into the override of `slot` (builder).
    pub fn props(mut self, slot: &str, props: Props) -> Self {
        self.entry(slot).slot_props.merge(&props);
        self
    }

    /// Set the consumer class of `slot` (builder).
    pub fn class_name(mut self, slot: &str, class_name: impl Into<String>) -> Self {
        self.entry(slot).class_name = Some(class_name.into());
        self
    }

    pub fn get(&self, slot: &str) -> Option<&SlotOverride> {
        self.slots.get(slot)
    }

    /// Names of the overridden slots.
    pub fn slot_names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    fn entry(&mut self, slot: &str) -> &mut SlotOverride {
        self.slots.entry(slot.to_owned()).or_default()
    }
}

// ---------------------------------------------------------------------------
// SlotSpec
// ---------------------------------------------------------------------------

/// Everything a widget knows about one of its slots for this render.
pub struct SlotSpec<'a> {
    pub name: &'a str,
    pub element_type: ElementType,
    pub default_props: Props,
    pub external_forwarded: Option<&'a Props>,
    pub additional_props: Props,
    pub getter: Option<&'a dyn SlotPropsGetter>,
    /// Composed utility classes for this slot.
    pub classes: Vec<String>,
    pub node_ref: Option<NodeRef>,
    pub accepts_ref: bool,
    pub forwards_external: bool,
}

impl<'a> SlotSpec<'a> {
    /// A slot with the given default element type. Only the root slot forwards
    /// external props by default.
    pub fn new(name: &'a str, element_type: ElementType) -> Self {
        Self {
            name,
            element_type,
            default_props: Props::new(),
            external_forwarded: None,
            additional_props: Props::new(),
            getter: None,
            classes: Vec::new(),
            node_ref: None,
            accepts_ref: false,
            forwards_external: name == ROOT_SLOT,
        }
    }

    pub fn default_props(mut self, props: Props) -> Self {
        self.default_props = props;
        self
    }

    pub fn external(mut self, props: &'a Props) -> Self {
        self.external_forwarded = Some(props);
        self
    }

    pub fn additional(mut self, props: Props) -> Self {
        self.additional_props = props;
        self
    }

    pub fn getter(mut self, getter: &'a dyn SlotPropsGetter) -> Self {
        self.getter = Some(getter);
        self
    }

    pub fn classes(mut self, classes: &[String]) -> Self {
        self.classes = classes.to_vec();
        self
    }

    pub fn node_ref(mut self, node_ref: Option<NodeRef>) -> Self {
        self.node_ref = node_ref;
        self
    }

    pub fn accepts_ref(mut self, accepts: bool) -> Self {
        self.accepts_ref = accepts;
        self
    }

    pub fn forwards_external(mut self, forwards: bool) -> Self {
        self.forwards_external = forwards;
        self
    }
}

// ---------------------------------------------------------------------------
// ComposedSlot
// ---------------------------------------------------------------------------

/// A slot's final element type, props, classes and refs.
#[derive(Debug, Clone)]
pub struct ComposedSlot {
    pub name: String,
    /// Widget kind that owns the slot.
    pub widget: String,
    pub element_type: ElementType,
    pub props: Props,
    pub classes: Vec<String>,
    pub refs: Vec<NodeRef>,
    /// Attached only when the element is a custom component.
    pub owner_state: Option<Rc<OwnerState>>,
}

impl ComposedSlot {
    /// Turn the slot into an element with the given children.
    pub fn into_element(self, children: Vec<Node>) -> Element {
        Element {
            element_type: self.element_type,
            widget_type: Some(self.widget),
            slot: Some(self.name),
            props: self.props,
            classes: self.classes,
            refs: self.refs,
            owner_state: self.owner_state,
            children,
        }
    }
}

fn take_class(props: &mut Props) -> Option<String> {
    match props.remove("className") {
        Some(PropValue::Str(class)) => Some(class),
        _ => None,
    }
}

fn take_component(props: &mut Props) -> Option<ElementType> {
    match props.remove("component") {
        Some(PropValue::Element(el)) => Some(el),
        Some(PropValue::Str(tag)) => Some(ElementType::Primitive(tag.into())),
        _ => None,
    }
}

fn take_ref(props: &mut Props) -> Option<NodeRef> {
    match props.remove("ref") {
        Some(PropValue::Ref(r)) => Some(r),
        _ => None,
    }
}

/// Compose one slot.
pub fn compose_slot(
    spec: SlotSpec<'_>,
    overrides: &SlotOverrides,
    owner_state: &Rc<OwnerState>,
) -> ComposedSlot {
    let mut props = spec.default_props;
    let mut consumer_classes: Vec<String> = Vec::new();

    let mut external_component = None;
    if spec.forwards_external {
        if let Some(external) = spec.external_forwarded {
            let mut external = external.clone();
            external_component = take_component(&mut external);
            consumer_classes.extend(take_class(&mut external));
            props.merge(&external);
        }
    }

    let mut additional = spec.additional_props;
    consumer_classes.extend(take_class(&mut additional));
    props.merge(&additional);

    if let Some(getter) = spec.getter {
        let behavior = getter.slot_props(&props);
        props.merge(&behavior);
    }

    let mut refs = Vec::new();
    if let Some(node_ref) = spec.node_ref {
        if spec.name == ROOT_SLOT || spec.accepts_ref {
            refs.push(node_ref);
        } else {
            tracing::debug!(slot = spec.name, "slot does not accept a ref; dropping it");
        }
    }

    let mut override_component = None;
    if let Some(over) = overrides.get(spec.name) {
        let mut slot_props = over.slot_props.clone();
        let props_component = take_component(&mut slot_props);
        let props_class = take_class(&mut slot_props);
        refs.extend(take_ref(&mut slot_props));
        props.merge(&slot_props);
        override_component = over.component.clone().or(props_component);
        consumer_classes.extend(over.class_name.clone());
        consumer_classes.extend(props_class);
    }

    let element_type = override_component
        .or(external_component)
        .unwrap_or(spec.element_type);

    let mut classes = spec.classes;
    classes.extend(
        consumer_classes
            .iter()
            .flat_map(|c| c.split_whitespace())
            .map(str::to_owned),
    );

    let widget = owner_state.widget().to_owned();
    let owner_state = (!element_type.is_primitive()).then(|| Rc::clone(owner_state));

    tracing::trace!(slot = spec.name, element = %element_type, "composed slot");

    ComposedSlot {
        name: spec.name.to_owned(),
        widget,
        element_type,
        props,
        classes,
        refs,
        owner_state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{EventHandler, EventKind, SlotEvent};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    fn owner() -> Rc<OwnerState> {
        OwnerState::builder("Test").build()
    }

    fn recording(log: &Rc<RefCell<Vec<&'static str>>>, name: &'static str) -> EventHandler {
        let log = Rc::clone(log);
        EventHandler::new(move |_| log.borrow_mut().push(name))
    }

    fn fire(props: &Props, key: &str) {
        let mut event = SlotEvent::new(EventKind::Change);
        props.get_handler(key).expect("handler").call(&mut event);
    }

    #[test]
    fn precedence_default_external_additional() {
        let external: Props = [("a", 2i64), ("b", 3i64)].into_iter().collect();
        let spec = SlotSpec::new(ROOT_SLOT, ElementType::tag("span"))
            .default_props([("a", 1i64)].into_iter().collect())
            .external(&external)
            .additional([("b", 4i64)].into_iter().collect());
        let slot = compose_slot(spec, &SlotOverrides::new(), &owner());
        let expected: Props = [("a", 2i64), ("b", 4i64)].into_iter().collect();
        assert_eq!(slot.props, expected);
    }

    #[test]
    fn non_root_slots_ignore_external_by_default() {
        let external: Props = [("a", 2i64)].into_iter().collect();
        let spec = SlotSpec::new("input", ElementType::tag("input")).external(&external);
        let slot = compose_slot(spec, &SlotOverrides::new(), &owner());
        assert!(slot.props.is_empty());

        let spec = SlotSpec::new("input", ElementType::tag("input"))
            .external(&external)
            .forwards_external(true);
        let slot = compose_slot(spec, &SlotOverrides::new(), &owner());
        assert_eq!(slot.props.get("a"), Some(&PropValue::Int(2)));
    }

    #[test]
    fn getter_beats_additional_values() {
        let getter = |_: &Props| Props::new().with("checked", true);
        let spec = SlotSpec::new("input", ElementType::tag("input"))
            .additional(Props::new().with("checked", false).with("id", "x"))
            .getter(&getter);
        let slot = compose_slot(spec, &SlotOverrides::new(), &owner());
        assert_eq!(slot.props.get_bool("checked"), Some(true));
        assert_eq!(slot.props.get_str("id"), Some("x"));
    }

    #[test]
    fn getter_handler_wraps_additional_handler() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let getter_log = Rc::clone(&log);
        let getter = move |forwarded: &Props| {
            assert!(forwarded.get_handler("onChange").is_some());
            Props::new().with("onChange", recording(&getter_log, "getter"))
        };
        let spec = SlotSpec::new("input", ElementType::tag("input"))
            .additional(Props::new().with("onChange", recording(&log, "additional")))
            .getter(&getter);
        let slot = compose_slot(spec, &SlotOverrides::new(), &owner());
        fire(&slot.props, "onChange");
        assert_eq!(*log.borrow(), vec!["getter", "additional"]);
    }

    #[test]
    fn consumer_override_is_highest() {
        let getter = |_: &Props| Props::new().with("tabIndex", 0i64);
        let overrides = SlotOverrides::new().props("input", Props::new().with("tabIndex", -1i64));
        let spec = SlotSpec::new("input", ElementType::tag("input")).getter(&getter);
        let slot = compose_slot(spec, &overrides, &owner());
        assert_eq!(slot.props.get("tabIndex"), Some(&PropValue::Int(-1)));
    }

    #[test]
    fn consumer_handler_composes_with_internal() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let overrides =
            SlotOverrides::new().props("input", Props::new().with("onChange", recording(&log, "consumer")));
        let spec = SlotSpec::new("input", ElementType::tag("input"))
            .additional(Props::new().with("onChange", recording(&log, "internal")));
        let slot = compose_slot(spec, &overrides, &owner());
        fire(&slot.props, "onChange");
        assert_eq!(*log.borrow(), vec!["consumer", "internal"]);
    }

    #[test]
    fn element_type_resolution_order() {
        let external = Props::new().with("component", ElementType::tag("div"));

        let spec = SlotSpec::new(ROOT_SLOT, ElementType::tag("li")).external(&external);
        let slot = compose_slot(spec, &SlotOverrides::new(), &owner());
        assert_eq!(slot.element_type, ElementType::tag("div"));
        assert!(!slot.props.contains("component"));

        let overrides = SlotOverrides::new().component(ROOT_SLOT, ElementType::component("Fancy"));
        let spec = SlotSpec::new(ROOT_SLOT, ElementType::tag("li")).external(&external);
        let slot = compose_slot(spec, &overrides, &owner());
        assert_eq!(slot.element_type, ElementType::component("Fancy"));
    }

    #[test]
    fn owner_state_only_on_components() {
        let spec = SlotSpec::new(ROOT_SLOT, ElementType::tag("span"));
        assert!(compose_slot(spec, &SlotOverrides::new(), &owner()).owner_state.is_none());

        let overrides = SlotOverrides::new().component(ROOT_SLOT, ElementType::component("Fancy"));
        let spec = SlotSpec::new(ROOT_SLOT, ElementType::tag("span"));
        let slot = compose_slot(spec, &overrides, &owner());
        assert_eq!(slot.owner_state.as_ref().map(|s| s.widget()), Some("Test"));
    }

    #[test]
    fn widget_name_kept_for_every_element_type() {
        let spec = SlotSpec::new(ROOT_SLOT, ElementType::tag("span"));
        assert_eq!(compose_slot(spec, &SlotOverrides::new(), &owner()).widget, "Test");

        let spec = SlotSpec::new(ROOT_SLOT, ElementType::component("Fancy"));
        assert_eq!(compose_slot(spec, &SlotOverrides::new(), &owner()).widget, "Test");
    }

    #[test]
    fn consumer_classes_come_last() {
        let external = Props::new().with("className", "from-caller");
        let overrides = SlotOverrides::new()
            .class_name(ROOT_SLOT, "override")
            .props(ROOT_SLOT, Props::new().with("className", "slot-props extra"));
        let spec = SlotSpec::new(ROOT_SLOT, ElementType::tag("span"))
            .external(&external)
            .classes(&["W-root".to_owned(), "Joy-checked".to_owned()]);
        let slot = compose_slot(spec, &overrides, &owner());
        assert_eq!(
            slot.classes,
            ["W-root", "Joy-checked", "from-caller", "override", "slot-props", "extra"]
        );
        assert!(!slot.props.contains("className"));
    }

    #[test]
    fn refs_attach_to_root_only_unless_accepted() {
        let node_ref = NodeRef::new();
        let spec = SlotSpec::new(ROOT_SLOT, ElementType::tag("span")).node_ref(Some(node_ref.clone()));
        assert_eq!(compose_slot(spec, &SlotOverrides::new(), &owner()).refs.len(), 1);

        let spec = SlotSpec::new("action", ElementType::tag("span")).node_ref(Some(node_ref.clone()));
        assert!(compose_slot(spec, &SlotOverrides::new(), &owner()).refs.is_empty());

        let spec = SlotSpec::new("input", ElementType::tag("input"))
            .node_ref(Some(node_ref))
            .accepts_ref(true);
        assert_eq!(compose_slot(spec, &SlotOverrides::new(), &owner()).refs.len(), 1);
    }

    #[test]
    fn consumer_slot_ref_is_forked_in() {
        let mine = NodeRef::new();
        let theirs = NodeRef::new();
        let overrides = SlotOverrides::new().props(ROOT_SLOT, Props::new().with("ref", theirs.clone()));
        let spec = SlotSpec::new(ROOT_SLOT, ElementType::tag("span")).node_ref(Some(mine.clone()));
        let slot = compose_slot(spec, &overrides, &owner());
        assert_eq!(slot.refs.len(), 2);
        assert!(slot.refs[0].ptr_eq(&mine));
        assert!(slot.refs[1].ptr_eq(&theirs));
        assert!(!slot.props.contains("ref"));
    }

    #[test]
    fn into_element_keeps_slot_data() {
        let spec = SlotSpec::new("label", ElementType::tag("label"))
            .classes(&["W-label".to_owned()])
            .additional(Props::new().with("htmlFor", "x"));
        let el = compose_slot(spec, &SlotOverrides::new(), &owner())
            .into_element(vec![Node::Text("hi".into())]);
        assert_eq!(el.slot.as_deref(), Some("label"));
        assert_eq!(el.widget_type.as_deref(), Some("Test"));
        assert_eq!(el.props.get_str("htmlFor"), Some("x"));
        assert_eq!(el.children.len(), 1);
        assert!(el.has_class("W-label"));
    }
}
