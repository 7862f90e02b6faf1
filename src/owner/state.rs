//! The immutable owner-state descriptor and its builder.

use std::rc::Rc;

use super::appearance::{Color, Size, Variant};
use crate::context::Nesting;
use crate::element::Props;

/// Fully resolved visual and interaction state of one widget instance for one
/// render.
///
/// Built once through [`OwnerState::builder`] after color, variant and size
/// have been resolved, then shared read-only with every slot of the render.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OwnerState {
    widget: String,
    checked: bool,
    indeterminate: bool,
    disabled: bool,
    focus_visible: bool,
    nested: bool,
    nesting: Nesting,
    sticky: bool,
    row: bool,
    wrap: bool,
    overlay: bool,
    disable_icon: bool,
    color: Option<Color>,
    variant: Option<Variant>,
    size: Option<Size>,
    props: Props,
}

impl OwnerState {
    /// Start building the owner state of a `widget` kind.
    pub fn builder(widget: &str) -> OwnerStateBuilder {
        OwnerStateBuilder {
            state: OwnerState {
                widget: widget.to_owned(),
                ..OwnerState::default()
            },
        }
    }

    pub fn widget(&self) -> &str {
        &self.widget
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    pub fn indeterminate(&self) -> bool {
        self.indeterminate
    }

    pub fn disabled(&self) -> bool {
        self.disabled
    }

    pub fn focus_visible(&self) -> bool {
        self.focus_visible
    }

    pub fn nested(&self) -> bool {
        self.nested
    }

    /// Nesting value read from the enclosing list item.
    pub fn nesting(&self) -> &Nesting {
        &self.nesting
    }

    pub fn sticky(&self) -> bool {
        self.sticky
    }

    pub fn row(&self) -> bool {
        self.row
    }

    pub fn wrap(&self) -> bool {
        self.wrap
    }

    pub fn overlay(&self) -> bool {
        self.overlay
    }

    pub fn disable_icon(&self) -> bool {
        self.disable_icon
    }

    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    pub fn variant(&self) -> Option<&Variant> {
        self.variant.as_ref()
    }

    pub fn size(&self) -> Option<&Size> {
        self.size.as_ref()
    }

    /// Explicit input props passed through unchanged.
    pub fn props(&self) -> &Props {
        &self.props
    }
}

/// Builder for [`OwnerState`]. Consumed by [`OwnerStateBuilder::build`].
#[derive(Debug, Clone)]
pub struct OwnerStateBuilder {
    state: OwnerState,
}

macro_rules! flag_setters {
    ($($field:ident),* $(,)?) => {
        $(
            pub fn $field(mut self, value: bool) -> Self {
                self.state.$field = value;
                self
            }
        )*
    };
}

impl OwnerStateBuilder {
    flag_setters!(
        checked,
        indeterminate,
        disabled,
        focus_visible,
        nested,
        sticky,
        row,
        wrap,
        overlay,
        disable_icon,
    );

    pub fn nesting(mut self, nesting: Nesting) -> Self {
        self.state.nesting = nesting;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.state.color = Some(color);
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.state.variant = Some(variant);
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.state.size = Some(size);
        self
    }

    pub fn props(mut self, props: Props) -> Self {
        self.state.props = props;
        self
    }

    /// Freeze the descriptor.
    pub fn build(self) -> Rc<OwnerState> {
        Rc::new(self.state)
    }
}
