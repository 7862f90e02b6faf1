//! DOM queries: by id, class, widget, element, slot; generic predicate matching.

use super::node::{NodeData, NodeId};
use super::tree::Dom;

impl Dom {
    /// Find the first node whose `id` prop matches the given string.
    pub fn query_by_id(&self, id: &str) -> Option<NodeId> {
        self.iter_nodes()
            .find(|(_, data)| data.id.as_deref() == Some(id))
            .map(|(node_id, _)| node_id)
    }

    /// Find all nodes that have the given class.
    pub fn query_by_class(&self, class: &str) -> Vec<NodeId> {
        self.query_all(|data| data.has_class(class))
    }

    /// Find all nodes produced by the given widget kind.
    pub fn query_by_type(&self, widget_type: &str) -> Vec<NodeId> {
        self.query_all(|data| data.widget_type.as_deref() == Some(widget_type))
    }

    /// Find all element nodes with the given tag or component name.
    pub fn query_by_element(&self, name: &str) -> Vec<NodeId> {
        self.query_all(|data| data.element_name() == Some(name))
    }

    /// Find all nodes rendered as `slot` of a `widget`.
    pub fn query_slot(&self, widget: &str, slot: &str) -> Vec<NodeId> {
        self.query_all(|data| data.is_slot(widget, slot))
    }

    /// Find all nodes matching an arbitrary predicate.
    pub fn query_all(&self, predicate: impl Fn(&NodeData) -> bool) -> Vec<NodeId> {
        self.iter_nodes()
            .filter(|(_, data)| predicate(data))
            .map(|(node_id, _)| node_id)
            .collect()
    }

    /// Iterate over all `(NodeId, &NodeData)` pairs in the arena.
    ///
    /// Iterates in slotmap insertion order; for a tree built by
    /// [`Dom::mount`] that is document order.
    fn iter_nodes(&self) -> impl Iterator<Item = (NodeId, &NodeData)> {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::dom::tree::Dom;
    use crate::element::{Element, ElementType, Node, Props};

    fn slot(tag: &'static str, widget: &str, slot: &str, classes: &[&str]) -> Element {
        let mut el = Element::new(ElementType::tag(tag));
        el.widget_type = Some(widget.into());
        el.slot = Some(slot.into());
        el.classes = classes.iter().map(|c| (*c).to_owned()).collect();
        el
    }

    /// ```text
    ///   span Checkbox.root  .JoyCheckbox-root .Joy-checked
    ///     span Checkbox.checkbox
    ///       input Checkbox.input  #agree
    ///     label Checkbox.label
    /// ```
    fn build_query_dom() -> Dom {
        let mut input = slot("input", "Checkbox", "input", &["JoyCheckbox-input"]);
        input.props = Props::new().with("id", "agree");
        let node: Node = slot("span", "Checkbox", "root", &["JoyCheckbox-root", "Joy-checked"])
            .with_child(
                slot("span", "Checkbox", "checkbox", &["JoyCheckbox-checkbox", "Joy-checked"])
                    .with_child(input.into())
                    .into(),
            )
            .with_child(slot("label", "Checkbox", "label", &["JoyCheckbox-label"]).into())
            .into();
        Dom::mount(&node)
    }

    #[test]
    fn query_by_id_found() {
        let dom = build_query_dom();
        let id = dom.query_by_id("agree").unwrap();
        assert_eq!(dom.get(id).unwrap().element_name(), Some("input"));
    }

    #[test]
    fn query_by_id_not_found() {
        let dom = build_query_dom();
        assert!(dom.query_by_id("nope").is_none());
    }

    #[test]
    fn query_by_class_in_document_order() {
        let dom = build_query_dom();
        let checked = dom.query_by_class("Joy-checked");
        assert_eq!(checked.len(), 2);
        assert_eq!(dom.get(checked[0]).unwrap().slot.as_deref(), Some("root"));
        assert_eq!(dom.get(checked[1]).unwrap().slot.as_deref(), Some("checkbox"));
    }

    #[test]
    fn query_by_type_and_element() {
        let dom = build_query_dom();
        assert_eq!(dom.query_by_type("Checkbox").len(), 4);
        assert!(dom.query_by_type("ListItem").is_empty());
        assert_eq!(dom.query_by_element("span").len(), 2);
    }

    #[test]
    fn query_slot_matches_widget_and_slot() {
        let dom = build_query_dom();
        assert_eq!(dom.query_slot("Checkbox", "label").len(), 1);
        assert!(dom.query_slot("ListItem", "label").is_empty());
    }

    #[test]
    fn query_all_custom_predicate() {
        let dom = build_query_dom();
        let with_id = dom.query_all(|d| d.id.is_some());
        assert_eq!(with_id.len(), 1);
    }

    #[test]
    fn query_on_empty_dom() {
        let dom = Dom::new();
        assert!(dom.query_by_id("x").is_none());
        assert!(dom.query_by_class("x").is_empty());
    }
}
