//! Checkbox widget: a two-state control with an optional label.
//!
//! Slots, outermost first:
//!
//! ```text
//! root (span)
//! ├── checkbox (span)
//! │   ├── action (span)
//! │   │   └── input (input)
//! │   └── icon
//! └── label (label)
//! ```
//!
//! The checked value is controlled when `checked` is given, otherwise kept in
//! the instance's [`SwitchState`]. Active (checked or indeterminate) and
//! inactive appearances are resolved separately and the matching one is
//! frozen into the owner state.

use std::any::Any;
use std::rc::Rc;

use crate::classes::{compose_classes, ClassMap, ClassOverrides, SlotClasses};
use crate::context::{ColorInversion, FormControl, COLOR_INVERSION, FORM_CONTROL, TYPOGRAPHY_NESTED};
use crate::element::{
    Element, ElementType, EventHandler, Node, NodeRef, Props, SlotEvent,
};
use crate::owner::{
    resolve_size, Appearance, Color, ExplicitAppearance, OwnerState, Size, ToggleAppearance,
    Variant,
};
use crate::slot::{compose_slot, SlotOverrides, SlotSpec, ROOT_SLOT};
use crate::state::{InteractionState, SwitchBehavior, SwitchInputs, SwitchState};
use crate::validate::{self, PropError};
use crate::widget::{Child, RenderCx, Rendered, Report, Widget};

use super::{forwarded_props, slot_builders, variant_style};

/// Slot names, in render order.
pub const SLOTS: &[&str] = &["root", "checkbox", "action", "input", "label"];

/// Placeholder element for a named icon.
fn icon(name: &str) -> Child {
    let el = Element {
        props: Props::new().with("data-testid", name),
        ..Element::new(ElementType::tag("svg"))
    };
    Child::from(el)
}

// ---------------------------------------------------------------------------
// Checkbox
// ---------------------------------------------------------------------------

/// A checkbox with slots for its box, hit area, native input and label.
///
/// # Examples
///
/// ```ignore
/// let terms = Checkbox::new().label("Accept terms").default_checked(true);
/// let locked = Checkbox::new().checked(true).disabled(true);
/// ```
pub struct Checkbox {
    checked: Option<bool>,
    default_checked: Option<bool>,
    disabled: Option<bool>,
    read_only: Option<bool>,
    required: Option<bool>,
    indeterminate: bool,
    disable_icon: bool,
    overlay: bool,
    id: Option<String>,
    name: Option<String>,
    value: Option<String>,
    label: Option<Child>,
    checked_icon: Child,
    indeterminate_icon: Child,
    unchecked_icon: Option<Child>,
    color: Option<Color>,
    variant: Option<Variant>,
    size: Option<Size>,
    on_change: Option<EventHandler>,
    on_focus: Option<EventHandler>,
    on_blur: Option<EventHandler>,
    on_focus_visible: Option<EventHandler>,
    component: Option<ElementType>,
    props: Props,
    slots: SlotOverrides,
    classes: ClassOverrides,
    node_ref: Option<NodeRef>,
}

impl Default for Checkbox {
    fn default() -> Self {
        Self {
            checked: None,
            default_checked: None,
            disabled: None,
            read_only: None,
            required: None,
            indeterminate: false,
            disable_icon: false,
            overlay: false,
            id: None,
            name: None,
            value: None,
            label: None,
            checked_icon: icon("CheckIcon"),
            indeterminate_icon: icon("IndeterminateIcon"),
            unchecked_icon: None,
            color: None,
            variant: None,
            size: None,
            on_change: None,
            on_focus: None,
            on_blur: None,
            on_focus_visible: None,
            component: None,
            props: Props::new(),
            slots: SlotOverrides::new(),
            classes: ClassOverrides::new(),
            node_ref: None,
        }
    }
}

impl Checkbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Control the checked value.
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    /// Initial value of an uncontrolled checkbox.
    pub fn default_checked(mut self, checked: bool) -> Self {
        self.default_checked = Some(checked);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = Some(read_only);
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn indeterminate(mut self, indeterminate: bool) -> Self {
        self.indeterminate = indeterminate;
        self
    }

    /// Drop the icon; the action slot then shows the variant.
    pub fn disable_icon(mut self, disable: bool) -> Self {
        self.disable_icon = disable;
        self
    }

    /// Stretch the hit area over the nearest positioned ancestor.
    pub fn overlay(mut self, overlay: bool) -> Self {
        self.overlay = overlay;
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn label(mut self, label: impl Into<Child>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn checked_icon(mut self, icon: impl Into<Child>) -> Self {
        self.checked_icon = icon.into();
        self
    }

    pub fn indeterminate_icon(mut self, icon: impl Into<Child>) -> Self {
        self.indeterminate_icon = icon.into();
        self
    }

    pub fn unchecked_icon(mut self, icon: impl Into<Child>) -> Self {
        self.unchecked_icon = Some(icon.into());
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

    pub fn size(mut self, size: impl Into<Size>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Called once per toggle with `event.checked` set to the new value.
    pub fn on_change(mut self, f: impl Fn(&mut SlotEvent) + 'static) -> Self {
        self.on_change = Some(EventHandler::new(f));
        self
    }

    pub fn on_focus(mut self, f: impl Fn(&mut SlotEvent) + 'static) -> Self {
        self.on_focus = Some(EventHandler::new(f));
        self
    }

    pub fn on_blur(mut self, f: impl Fn(&mut SlotEvent) + 'static) -> Self {
        self.on_blur = Some(EventHandler::new(f));
        self
    }

    /// Called when keyboard focus makes the focus ring visible.
    pub fn on_focus_visible(mut self, f: impl Fn(&mut SlotEvent) + 'static) -> Self {
        self.on_focus_visible = Some(EventHandler::new(f));
        self
    }

    slot_builders!();

    fn switch_inputs(&self, form: Option<FormControl>) -> SwitchInputs {
        SwitchInputs {
            checked: self.checked,
            default_checked: self.default_checked,
            disabled: self.disabled,
            read_only: self.read_only,
            indeterminate: self.indeterminate,
            form,
        }
    }

    /// Freeze the owner state for one render.
    ///
    /// Returns the descriptor and the appearance it selected.
    pub fn resolve_owner_state(
        &self,
        interaction: &InteractionState,
        form: Option<&FormControl>,
        inversion: &ColorInversion,
        injected: &Props,
    ) -> (Rc<OwnerState>, Appearance) {
        let explicit = ExplicitAppearance {
            variant: self.variant.clone(),
            color: self.color.clone(),
        };
        let toggle = ToggleAppearance::resolve(
            &explicit,
            form,
            inversion,
            &Appearance::new(Variant::Solid, Color::Primary),
            &Appearance::new(Variant::Outlined, Color::Neutral),
        );
        let appearance = toggle.select(interaction.is_active()).clone();
        let size = resolve_size(self.size.as_ref(), form, Size::Md);
        let state = OwnerState::builder("Checkbox")
            .checked(interaction.checked)
            .indeterminate(interaction.indeterminate)
            .disabled(interaction.disabled)
            .focus_visible(interaction.focus_visible)
            .overlay(self.overlay)
            .disable_icon(self.disable_icon)
            .variant(appearance.variant.clone())
            .color(appearance.color.clone())
            .size(size)
            .props(self.props.merged(injected))
            .build();
        (state, appearance)
    }

    fn compose_classes(&self, cx: &RenderCx<'_>, state: &OwnerState) -> ClassMap {
        let checked = state.checked();
        let disabled = state.disabled();
        let focus_visible = state.focus_visible();
        let slots = [
            SlotClasses::new("root")
                .flag(checked, "checked")
                .flag(disabled, "disabled")
                .flag(focus_visible, "focusVisible")
                .token("variant", state.variant().map(Variant::as_str))
                .token("color", state.color().map(Color::as_str))
                .token("size", state.size().map(Size::as_str)),
            SlotClasses::new("checkbox")
                .flag(checked, "checked")
                .flag(disabled, "disabled"),
            SlotClasses::new("action")
                .flag(checked, "checked")
                .flag(state.disable_icon() && disabled, "disabled")
                .flag(focus_visible, "focusVisible"),
            SlotClasses::new("input"),
            SlotClasses::new("label"),
        ];
        compose_classes(&slots, |key| cx.utility_class("Checkbox", key), &self.classes)
    }

    fn current_icon(&self, interaction: &InteractionState) -> Option<&Child> {
        if self.disable_icon {
            None
        } else if interaction.indeterminate {
            Some(&self.indeterminate_icon)
        } else if interaction.checked {
            Some(&self.checked_icon)
        } else {
            self.unchecked_icon.as_ref()
        }
    }
}

impl Widget for Checkbox {
    fn widget_type(&self) -> &str {
        "Checkbox"
    }

    fn render(&self, cx: &RenderCx<'_>) -> Rendered {
        let form = cx.read(&FORM_CONTROL);
        let inversion = cx.read(&COLOR_INVERSION);

        let switch = cx.use_state::<SwitchState>();
        let interaction = switch
            .borrow_mut()
            .resolve(&self.switch_inputs(form.clone()));
        let (owner_state, appearance) =
            self.resolve_owner_state(&interaction, form.as_ref(), &inversion, cx.injected());
        let classes = self.compose_classes(cx, &owner_state);

        let id = cx.use_id(
            self.id
                .as_deref()
                .or_else(|| form.as_ref().and_then(|f| f.html_for.as_deref())),
        );
        let external = forwarded_props(cx, &self.props, self.component.as_ref());
        let style = variant_style(cx, &appearance, interaction.disabled);

        let root = compose_slot(
            SlotSpec::new(ROOT_SLOT, ElementType::tag("span"))
                .external(&external)
                .classes(classes.get("root"))
                .node_ref(self.node_ref.clone()),
            &self.slots,
            &owner_state,
        );
        let checkbox = compose_slot(
            SlotSpec::new("checkbox", ElementType::tag("span"))
                .additional(if self.disable_icon { Props::new() } else { style.clone() })
                .classes(classes.get("checkbox")),
            &self.slots,
            &owner_state,
        );
        let action = compose_slot(
            SlotSpec::new("action", ElementType::tag("span"))
                .additional(if self.disable_icon { style } else { Props::new() })
                .classes(classes.get("action")),
            &self.slots,
            &owner_state,
        );

        let behavior = SwitchBehavior::new(Rc::clone(&switch), interaction)
            .on_change(self.on_change.clone())
            .on_focus_visible(self.on_focus_visible.clone());
        let required = self
            .required
            .or_else(|| form.as_ref().and_then(|f| f.required));
        let input_props = Props::new()
            .with("id", id.as_str())
            .with_opt("name", self.name.as_deref())
            .with_opt("value", self.value.as_deref())
            .with_opt("readOnly", self.read_only)
            .with_opt("required", required)
            .with_opt(
                "aria-describedby",
                form.as_ref().and_then(|f| f.described_by.as_deref()),
            )
            .with_opt("aria-checked", self.indeterminate.then_some("mixed"))
            .with_opt("onFocus", self.on_focus.clone())
            .with_opt("onBlur", self.on_blur.clone());
        let input = compose_slot(
            SlotSpec::new("input", ElementType::tag("input"))
                .additional(input_props)
                .getter(&behavior)
                .classes(classes.get("input")),
            &self.slots,
            &owner_state,
        );

        let mut report = Report::default();
        let icon = self.current_icon(&interaction).map(|icon| {
            let rendered = cx.render_child(icon, "icon", 0);
            report.merge(rendered.report);
            rendered.node
        });

        let action_el = action.into_element(vec![input.into_element(Vec::new()).into()]);
        let mut box_children = vec![Node::from(action_el)];
        box_children.extend(icon);
        let mut root_children = vec![Node::from(checkbox.into_element(box_children))];

        if let Some(label) = &self.label {
            let rendered = cx
                .provide(&TYPOGRAPHY_NESTED, true)
                .render_child(label, "label", 0);
            report.merge(rendered.report);
            let label_slot = compose_slot(
                SlotSpec::new("label", ElementType::tag("label"))
                    .additional(Props::new().with("htmlFor", id.as_str()))
                    .classes(classes.get("label")),
                &self.slots,
                &owner_state,
            );
            root_children.push(label_slot.into_element(vec![rendered.node]).into());
        }

        Rendered::new(root.into_element(root_children)).with_report(report)
    }

    fn component(&self) -> Option<&ElementType> {
        self.component
            .as_ref()
            .or_else(|| self.props.get_element("component"))
    }

    fn validate(&self) -> Result<(), PropError> {
        validate::check_slots("Checkbox", SLOTS, &self.slots)?;
        validate::check_exclusive(
            "Checkbox",
            ("checked", self.checked.is_some()),
            ("defaultChecked", self.default_checked.is_some()),
        )?;
        validate::check_id("Checkbox", self.id.as_deref())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
