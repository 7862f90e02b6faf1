//! Event dispatch: target first, then bubbling through ancestors.

use super::node::NodeId;
use super::tree::Dom;
use crate::element::SlotEvent;

impl Dom {
    /// Deliver `event` to `target` and bubble it up to the root.
    ///
    /// Every node on the path with a handler for the event kind is called.
    /// Bubbling stops after a handler calls
    /// [`SlotEvent::stop_propagation`]. Returns the number of handlers run.
    pub fn dispatch(&self, target: NodeId, event: &mut SlotEvent) -> usize {
        if !self.contains(target) {
            tracing::debug!(?target, "dispatch to a node that is not mounted");
            return 0;
        }
        event.target = Some(target);
        let path = std::iter::once(target).chain(self.ancestors(target));
        let mut called = 0;
        for node in path {
            let Some(handler) = self.get(node).and_then(|d| d.handler(event.kind)) else {
                continue;
            };
            handler.call(event);
            called += 1;
            if event.is_propagation_stopped() {
                break;
            }
        }
        called
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::dom::tree::Dom;
    use crate::element::{Element, ElementType, EventHandler, EventKind, Node, Props, SlotEvent};

    fn logging(log: &Rc<RefCell<Vec<&'static str>>>, name: &'static str, stop: bool) -> EventHandler {
        let log = Rc::clone(log);
        EventHandler::new(move |ev: &mut SlotEvent| {
            log.borrow_mut().push(name);
            if stop {
                ev.stop_propagation();
            }
        })
    }

    fn tree(log: &Rc<RefCell<Vec<&'static str>>>, stop_at_middle: bool) -> Dom {
        let mut outer = Element::new(ElementType::tag("div"));
        outer.props = Props::new().with("onClick", logging(log, "outer", false));
        let mut middle = Element::new(ElementType::tag("span"));
        middle.props = Props::new().with("onClick", logging(log, "middle", stop_at_middle));
        let mut inner = Element::new(ElementType::tag("input"));
        inner.props = Props::new()
            .with("id", "target")
            .with("onClick", logging(log, "inner", false));
        let node: Node = outer
            .with_child(middle.with_child(inner.into()).into())
            .into();
        Dom::mount(&node)
    }

    #[test]
    fn bubbles_from_target_to_root() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let dom = tree(&log, false);
        let target = dom.query_by_id("target").unwrap();
        let mut ev = SlotEvent::new(EventKind::Click);
        assert_eq!(dom.dispatch(target, &mut ev), 3);
        assert_eq!(*log.borrow(), vec!["inner", "middle", "outer"]);
        assert_eq!(ev.target, Some(target));
    }

    #[test]
    fn stop_propagation_halts_bubbling() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let dom = tree(&log, true);
        let target = dom.query_by_id("target").unwrap();
        let mut ev = SlotEvent::new(EventKind::Click);
        assert_eq!(dom.dispatch(target, &mut ev), 2);
        assert_eq!(*log.borrow(), vec!["inner", "middle"]);
    }

    #[test]
    fn other_kinds_are_ignored() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let dom = tree(&log, false);
        let target = dom.query_by_id("target").unwrap();
        let mut ev = SlotEvent::new(EventKind::Change);
        assert_eq!(dom.dispatch(target, &mut ev), 0);
        assert!(log.borrow().is_empty());
    }
}
