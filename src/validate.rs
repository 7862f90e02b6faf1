//! Development-time prop validation.
//!
//! Resolution itself is total: any combination of props renders. Widgets can
//! still report props that are probably a mistake; the renderer runs these
//! checks when [`EngineConfig::validate_props`](crate::config::EngineConfig) is
//! on and logs failures without stopping the render.

use crate::slot::SlotOverrides;

/// A suspicious prop combination.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropError {
    #[error("{widget} has no slot named `{slot}`")]
    UnknownSlot { widget: String, slot: String },
    #[error("{widget}: `{first}` and `{second}` should not be set together")]
    Conflicting {
        widget: String,
        first: &'static str,
        second: &'static str,
    },
    #[error("{widget}: invalid value for `{prop}`: {message}")]
    InvalidValue {
        widget: String,
        prop: &'static str,
        message: String,
    },
}

/// Every overridden slot must be one of `known`.
pub fn check_slots(widget: &str, known: &[&str], overrides: &SlotOverrides) -> Result<(), PropError> {
    match overrides.slot_names().find(|slot| !known.contains(slot)) {
        Some(slot) => Err(PropError::UnknownSlot {
            widget: widget.to_owned(),
            slot: slot.to_owned(),
        }),
        None => Ok(()),
    }
}

/// At most one of two props may be set.
pub fn check_exclusive(
    widget: &str,
    first: (&'static str, bool),
    second: (&'static str, bool),
) -> Result<(), PropError> {
    if first.1 && second.1 {
        return Err(PropError::Conflicting {
            widget: widget.to_owned(),
            first: first.0,
            second: second.0,
        });
    }
    Ok(())
}

/// An explicit id must not be empty or contain whitespace.
pub fn check_id(widget: &str, id: Option<&str>) -> Result<(), PropError> {
    match id {
        Some(id) if id.is_empty() || id.contains(char::is_whitespace) => {
            Err(PropError::InvalidValue {
                widget: widget.to_owned(),
                prop: "id",
                message: format!("{id:?} is not a usable element id"),
            })
        }
        _ => Ok(()),
    }
}
