//! Input events and keyboard/pointer modality tracking.

pub mod input;
pub mod modality;

pub use input::{InputEvent, Key, KeyEvent, KeyPhase, Modifiers, PointerEvent, PointerKind};
pub use modality::{FocusOrigin, InputModality};
