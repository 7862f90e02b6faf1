//! Headless testing helpers: Pilot, snapshot rendering.
//!
//! Use the [`Pilot`] to drive a [`Root`](crate::app::Root) by slot name. Use
//! [`dom_to_string`] to capture a mounted tree as text for `insta` snapshots.

pub mod pilot;
pub mod snapshot;

pub use pilot::Pilot;
pub use snapshot::{dom_to_string, subtree_to_string};
