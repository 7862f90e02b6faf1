//! Integration tests for gilt-slots.
//!
//! These tests exercise the public API from outside the crate: owner-state
//! resolution, slot composition, the subheader handshake and the testing
//! helpers working together.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use gilt_slots::classes::{compose_classes, ClassOverrides, SlotClasses};
use gilt_slots::context::{ColorInversion, Nesting, NESTED_LIST};
use gilt_slots::element::{Element, ElementType, Props};
use gilt_slots::owner::OwnerState;
use gilt_slots::slot::{compose_slot, SlotOverrides, SlotSpec};
use gilt_slots::state::InteractionState;
use gilt_slots::testing::{dom_to_string, Pilot};
use gilt_slots::widget::{RenderCx, Rendered};
use gilt_slots::widgets::*;
use gilt_slots::{EngineConfig, Root, Widget, WidgetExt};
use pretty_assertions::assert_eq;

/// Publishes what it reads from `NESTED_LIST` as a `nesting` prop.
struct NestingProbe;

impl Widget for NestingProbe {
    fn widget_type(&self) -> &str {
        "Probe"
    }

    fn render(&self, cx: &RenderCx<'_>) -> Rendered {
        let value = match cx.read(&NESTED_LIST) {
            Nesting::Off => "false".to_owned(),
            Nesting::Nested => "true".to_owned(),
            Nesting::Subheader(id) => id,
        };
        let mut el = Element::new(ElementType::tag("i"));
        el.widget_type = Some("Probe".into());
        el.slot = Some("root".into());
        el.props.set("nesting", value);
        Rendered::new(el)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn checked(pilot: &Pilot) -> bool {
    pilot
        .slot("Checkbox", "input")
        .props
        .get_bool("checked")
        .unwrap_or(false)
}

// ---------------------------------------------------------------------------
// Owner state
// ---------------------------------------------------------------------------

#[test]
fn test_owner_state_is_deterministic() {
    let checkbox = Checkbox::new().color("warning").size("lg");
    let interaction = InteractionState {
        checked: true,
        focus_visible: true,
        ..InteractionState::default()
    };
    let inversion = ColorInversion::default();
    let (first, _) = checkbox.resolve_owner_state(&interaction, None, &inversion, &Props::new());
    let (second, _) = checkbox.resolve_owner_state(&interaction, None, &inversion, &Props::new());
    assert_eq!(first, second);
}

#[test]
fn test_rendering_twice_is_identical() {
    let mut root = Root::new(
        List::new().child(
            ListItem::new()
                .child(Checkbox::new().label("Remember me").into_child())
                .into_child(),
        ),
    );
    let first = dom_to_string(root.render());
    let second = dom_to_string(root.render());
    assert_eq!(first, second);
}

#[test]
fn test_variant_follows_checked_only() {
    for checked in [true, false] {
        for disabled in [true, false] {
            let pilot = Pilot::new(Checkbox::new().checked(checked).disabled(disabled));
            let root = pilot.slot("Checkbox", "root");
            let expected = if checked {
                "JoyCheckbox-variantSolid"
            } else {
                "JoyCheckbox-variantOutlined"
            };
            assert!(root.has_class(expected), "{checked} {disabled}: {:?}", root.classes);
        }
    }
}

// ---------------------------------------------------------------------------
// Interaction state
// ---------------------------------------------------------------------------

#[test]
fn test_controlled_value_wins_over_toggles() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let checkbox = Checkbox::new()
        .checked(false)
        .on_change(move |ev| sink.borrow_mut().push(ev.checked));
    let mut pilot = Pilot::new(checkbox);
    for _ in 0..3 {
        pilot.click("Checkbox", "input");
        assert!(!checked(&pilot));
    }
    // Every attempt is still reported to the owner of the value.
    assert_eq!(*seen.borrow(), vec![Some(true), Some(true), Some(true)]);
}

#[test]
fn test_uncontrolled_toggles_alternate() {
    for n in 0..5 {
        let mut pilot = Pilot::new(Checkbox::new().default_checked(false));
        for _ in 0..n {
            pilot.change("Checkbox", "input");
        }
        assert_eq!(checked(&pilot), n % 2 == 1, "after {n} toggles");
    }
}

#[test]
fn test_disabled_and_read_only_block_toggles() {
    let mut pilot = Pilot::new(Checkbox::new().disabled(true));
    pilot.click("Checkbox", "input");
    assert!(!checked(&pilot));

    let mut pilot = Pilot::new(Checkbox::new().read_only(true).default_checked(true));
    pilot.click("Checkbox", "input");
    assert!(checked(&pilot));
}

// ---------------------------------------------------------------------------
// Classes and slots
// ---------------------------------------------------------------------------

#[test]
fn test_class_composition_is_idempotent() {
    let config = EngineConfig::default();
    let slots = [
        SlotClasses::new("root")
            .flag(true, "checked")
            .flag(false, "disabled")
            .token("variant", Some("solid")),
        SlotClasses::new("input"),
    ];
    let overrides = ClassOverrides::new().with("root", "extra");
    let name = |key: &str| config.utility_class("Checkbox", key);
    let first = compose_classes(&slots, name, &overrides);
    let second = compose_classes(&slots, name, &overrides);
    assert_eq!(first, second);
    assert_eq!(
        first.get("root"),
        ["JoyCheckbox-root", "extra", "Joy-checked", "JoyCheckbox-variantSolid"]
    );
}

#[test]
fn test_slot_prop_precedence() {
    let external = Props::new().with("a", 2i64).with("b", 3i64);
    let composed = compose_slot(
        SlotSpec::new("root", ElementType::tag("span"))
            .default_props(Props::new().with("a", 1i64))
            .external(&external)
            .additional(Props::new().with("b", 4i64)),
        &SlotOverrides::new(),
        &OwnerState::builder("Test").build(),
    );
    assert_eq!(composed.props, Props::new().with("a", 2i64).with("b", 4i64));
}

#[test]
fn test_consumer_slot_props_win() {
    let pilot = Pilot::new(
        Checkbox::new()
            .name("agree")
            .slot_props("input", Props::new().with("name", "override")),
    );
    assert_eq!(pilot.slot("Checkbox", "input").props.get_str("name"), Some("override"));
}

// ---------------------------------------------------------------------------
// Nesting and subheaders
// ---------------------------------------------------------------------------

#[test]
fn test_nested_item_publishes_true() {
    let pilot = Pilot::new(ListItem::new().nested(true).child(NestingProbe.into_child()));
    assert_eq!(pilot.slot("Probe", "root").props.get_str("nesting"), Some("true"));
}

#[test]
fn test_registered_subheader_is_republished() {
    let pilot = Pilot::new(
        ListItem::new()
            .nested(true)
            .child(ListSubheader::new("Section").id("x").into_child())
            .child(NestingProbe.into_child()),
    );
    assert_eq!(pilot.slot("Probe", "root").props.get_str("nesting"), Some("x"));
}

#[test]
fn test_plain_item_publishes_false() {
    let pilot = Pilot::new(
        ListItem::new()
            .child(ListSubheader::new("Section").id("x").into_child())
            .child(NestingProbe.into_child()),
    );
    assert_eq!(pilot.slot("Probe", "root").props.get_str("nesting"), Some("false"));
}

#[test]
fn test_generated_subheader_id_labels_list() {
    let pilot = Pilot::new(
        List::new().child(
            ListItem::new()
                .nested(true)
                .child(ListSubheader::new("Fruit").into_child())
                .child(List::new().child(ListItem::new().child("Apple").into_child()).into_child())
                .into_child(),
        ),
    );
    let subheader_id = pilot.slot("ListSubheader", "root").id.clone().unwrap();
    assert_eq!(subheader_id, "gilt-root-children-0-children-0");
    let lists = pilot.slots("List", "root");
    assert_eq!(lists[0].props.get_str("aria-labelledby"), None);
    assert_eq!(lists[1].props.get_str("aria-labelledby"), Some(subheader_id.as_str()));
}

// ---------------------------------------------------------------------------
// Child annotation
// ---------------------------------------------------------------------------

#[test]
fn test_first_child_marker() {
    let pilot = Pilot::new(
        ListItem::new()
            .child(Typography::new("one").into_child())
            .child(Typography::new("two").into_child())
            .child(Typography::new("three").into_child()),
    );
    let texts = pilot.slots("Typography", "root");
    assert_eq!(texts.len(), 3);
    assert_eq!(texts[0].props.get_str("data-first-child"), Some(""));
    assert_eq!(texts[1].props.get_str("data-first-child"), None);
    assert_eq!(texts[2].props.get_str("data-first-child"), None);
}

#[test]
fn test_nested_child_policy_is_configurable() {
    let tree = || {
        ListItem::new().child(
            ListItem::new()
                .component(ElementType::tag("section"))
                .into_child(),
        )
    };
    let respect = Pilot::new(tree());
    assert_eq!(respect.slots("ListItem", "root")[1].element_name(), Some("section"));

    let force = Pilot::new(tree()).with_config(
        EngineConfig::default()
            .with_nested_child_policy(gilt_slots::config::NestedChildPolicy::AlwaysForce),
    );
    assert_eq!(force.slots("ListItem", "root")[1].element_name(), Some("div"));
}

// ---------------------------------------------------------------------------
// Snapshots
// ---------------------------------------------------------------------------

#[test]
fn test_checkbox_snapshot() {
    let pilot = Pilot::new(Checkbox::new().label("Label").default_checked(true));
    insta::assert_snapshot!(pilot.snapshot(), @r###"
    <span data-slot="Checkbox.root" class="JoyCheckbox-root Joy-checked JoyCheckbox-variantSolid JoyCheckbox-colorPrimary JoyCheckbox-sizeMd">
      <span data-slot="Checkbox.checkbox" class="JoyCheckbox-checkbox Joy-checked">
        <span data-slot="Checkbox.action" class="JoyCheckbox-action Joy-checked">
          <input data-slot="Checkbox.input" class="JoyCheckbox-input" checked=true disabled=false id="gilt-root" readOnly=false type="checkbox">
        <svg data-testid="CheckIcon">
      <label data-slot="Checkbox.label" class="JoyCheckbox-label" htmlFor="gilt-root">
        "Label"
    "###);
}
