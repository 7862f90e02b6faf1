//! Snapshot rendering helpers.
//!
//! Converts a mounted [`Dom`] into an indented, HTML-like text form suitable
//! for `insta` snapshots and plain assertions. Handlers and refs are omitted;
//! props are printed in key order so the output is deterministic.

use std::fmt::Write;

use crate::dom::{Dom, NodeId};
use crate::element::PropValue;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render every root of `dom` to text, one node per line.
///
/// # Examples
///
/// ```ignore
/// use gilt_slots::testing::dom_to_string;
///
/// let out = dom_to_string(root.render());
/// assert!(out.starts_with("<span data-slot=\"Checkbox.root\""));
/// ```
pub fn dom_to_string(dom: &Dom) -> String {
    let mut out = String::new();
    for &root in dom.roots() {
        write_node(dom, root, 0, &mut out);
    }
    // Trim the final newline.
    if out.ends_with('\n') {
        out.pop();
    }
    out
}

/// Render the subtree under `node` to text.
pub fn subtree_to_string(dom: &Dom, node: NodeId) -> String {
    let mut out = String::new();
    write_node(dom, node, 0, &mut out);
    if out.ends_with('\n') {
        out.pop();
    }
    out
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

fn write_node(dom: &Dom, id: NodeId, depth: usize, out: &mut String) {
    let Some(data) = dom.get(id) else {
        return;
    };
    let indent = "  ".repeat(depth);
    if let Some(text) = &data.text {
        let _ = writeln!(out, "{indent}{text:?}");
        return;
    }
    let name = data.element_name().unwrap_or("?");
    let _ = write!(out, "{indent}<{name}");
    if let (Some(widget), Some(slot)) = (&data.widget_type, &data.slot) {
        let _ = write!(out, " data-slot=\"{widget}.{slot}\"");
    }
    if !data.classes.is_empty() {
        let _ = write!(out, " class=\"{}\"", data.classes.join(" "));
    }
    for (key, value) in data.props.iter() {
        if let Some(value) = format_value(value) {
            let _ = write!(out, " {key}={value}");
        }
    }
    let _ = writeln!(out, ">");
    for &child in dom.children(id) {
        write_node(dom, child, depth + 1, out);
    }
}

fn format_value(value: &PropValue) -> Option<String> {
    match value {
        PropValue::Bool(b) => Some(b.to_string()),
        PropValue::Int(n) => Some(n.to_string()),
        PropValue::Str(s) => Some(format!("{s:?}")),
        PropValue::Element(el) => Some(format!("<{el}>")),
        PropValue::Style(decls) => {
            let body: Vec<String> = decls.iter().map(|(k, v)| format!("{k}: {v}")).collect();
            Some(format!("{{{}}}", body.join("; ")))
        }
        PropValue::Handler(_) | PropValue::Ref(_) => None,
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Element, ElementType, EventHandler, Node, Props};

    fn sample() -> Dom {
        let mut outer = Element::new(ElementType::tag("ul"));
        outer.widget_type = Some("List".into());
        outer.slot = Some("root".into());
        outer.classes = vec!["JoyList-root".into(), "JoyList-sizeMd".into()];
        outer.props = Props::new()
            .with("role", "list")
            .with("onClick", EventHandler::new(|_| {}));
        let mut inner = Element::new(ElementType::tag("li"));
        inner.props = Props::new().with("data-first-child", "").with("tabIndex", 0i64);
        let node: Node = outer
            .with_child(inner.with_child(Node::Text("one".into())).into())
            .into();
        Dom::mount(&node)
    }

    #[test]
    fn renders_indented_tree() {
        insta::assert_snapshot!(dom_to_string(&sample()), @r###"
        <ul data-slot="List.root" class="JoyList-root JoyList-sizeMd" role="list">
          <li data-first-child="" tabIndex=0>
            "one"
        "###);
    }

    #[test]
    fn empty_dom_is_empty_string() {
        assert_eq!(dom_to_string(&Dom::new()), "");
    }

    #[test]
    fn subtree_only() {
        let dom = sample();
        let li = dom.element_children(dom.root().unwrap())[0];
        assert_eq!(
            subtree_to_string(&dom, li),
            "<li data-first-child=\"\" tabIndex=0>\n  \"one\""
        );
    }

    #[test]
    fn styles_and_components() {
        let mut decls = crate::theme::Declarations::new();
        decls.insert("color".into(), "red".into());
        decls.insert("border".into(), "none".into());
        assert_eq!(
            format_value(&PropValue::Style(std::rc::Rc::new(decls))).as_deref(),
            Some("{border: none; color: red}")
        );
        assert_eq!(
            format_value(&PropValue::Element(ElementType::component("Fancy"))).as_deref(),
            Some("<Fancy>")
        );
    }
}
