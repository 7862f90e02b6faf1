//! Output tree: slotmap-backed arena of mounted elements with queries and
//! event dispatch.

pub mod dispatch;
pub mod node;
pub mod query;
pub mod tree;

pub use node::{NodeData, NodeId};
pub use tree::Dom;
