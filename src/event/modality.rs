//! Keyboard-versus-pointer modality, used to decide focus visibility.
//!
//! A focus ring should only appear when the user is navigating with the
//! keyboard (or focus was moved by code). [`InputModality`] remembers which
//! kind of input came last and classifies focus events accordingly.

use super::input::{InputEvent, KeyPhase, PointerKind};

/// How a focus event came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusOrigin {
    Keyboard,
    Pointer,
    /// Focus moved by application code.
    Programmatic,
}

impl FocusOrigin {
    /// Whether focus obtained this way should be shown.
    pub fn shows_focus_ring(self) -> bool {
        !matches!(self, FocusOrigin::Pointer)
    }
}

/// Tracks whether the last relevant input was a keyboard press.
#[derive(Debug, Clone)]
pub struct InputModality {
    had_keyboard_event: bool,
}

impl Default for InputModality {
    fn default() -> Self {
        // No input seen yet: focus at startup is keyboard-equivalent.
        Self {
            had_keyboard_event: true,
        }
    }
}

impl InputModality {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed an input event.
    ///
    /// Key presses without a ctrl/alt/meta chord switch to keyboard modality;
    /// pointer presses switch to pointer modality. Everything else is ignored.
    pub fn observe(&mut self, event: &InputEvent) {
        match event {
            InputEvent::Key(key) => {
                if key.phase != KeyPhase::Release && !key.modifiers.is_chord() {
                    self.had_keyboard_event = true;
                }
            }
            InputEvent::Pointer(pointer) => {
                if pointer.kind == PointerKind::Down {
                    self.had_keyboard_event = false;
                }
            }
            InputEvent::WindowFocus(_) | InputEvent::Other => {}
        }
    }

    /// Origin to attribute to a focus event happening now.
    pub fn focus_origin(&self) -> FocusOrigin {
        if self.had_keyboard_event {
            FocusOrigin::Keyboard
        } else {
            FocusOrigin::Pointer
        }
    }
}
