//! Child enumeration with positional and same-kind annotations.
//!
//! A composite walks its children once, in order, and hands each one a fresh
//! copy with extra props injected. The caller's children are never modified.

use crate::config::NestedChildPolicy;
use crate::element::{ElementType, Node, Props};

use super::traits::Child;

/// Marker prop set on the child at index 0.
pub const FIRST_CHILD_PROP: &str = "data-first-child";

/// Neutral container forced on same-kind children.
pub const NEUTRAL_CONTAINER: ElementType = ElementType::tag("div");

/// Annotate `children` of a composite of kind `parent_kind`.
///
/// Lazily yields one child per input, in order:
/// - the element at index 0 (counting text) gets [`FIRST_CHILD_PROP`] = `""`;
/// - a widget child of the same kind as the parent gets `component = div`,
///   subject to `policy`;
/// - text children pass through unchanged.
pub fn annotate<'c>(
    children: &'c [Child],
    parent_kind: &'c str,
    policy: NestedChildPolicy,
) -> impl Iterator<Item = Child> + 'c {
    children
        .iter()
        .enumerate()
        .map(move |(index, child)| annotate_one(child, index, parent_kind, policy))
}

fn annotate_one(child: &Child, index: usize, parent_kind: &str, policy: NestedChildPolicy) -> Child {
    let first = index == 0;
    match child {
        Child::Text(_) => child.clone(),
        Child::Node(Node::Element(el)) if first => {
            let mut el = el.clone();
            el.props.set(FIRST_CHILD_PROP, "");
            Child::Node(Node::Element(el))
        }
        Child::Node(_) => child.clone(),
        Child::Widget(widget) => {
            let mut injected = Props::new();
            if first {
                injected.set(FIRST_CHILD_PROP, "");
            }
            if widget.widget_type() == parent_kind {
                let force = match policy {
                    NestedChildPolicy::RespectExplicit => widget.component().is_none(),
                    NestedChildPolicy::AlwaysForce => true,
                    NestedChildPolicy::Never => false,
                };
                if force {
                    injected.set("component", NEUTRAL_CONTAINER);
                }
            }
            if injected.is_empty() {
                child.clone()
            } else {
                Child::Widget(widget.with_injected(&injected))
            }
        }
    }
}
