//! Interaction state: controlled values and two-state controls.

pub mod controlled;
pub mod switch;

pub use controlled::{ControlMode, Controlled};
pub use switch::{InteractionState, SwitchBehavior, SwitchInputs, SwitchState};
