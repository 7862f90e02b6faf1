//! Input event types wrapping crossterm for decoupling.
//!
//! The engine only needs to know whether the user is driving the interface
//! from the keyboard or a pointer, so the event model here is narrow: key
//! presses with modifiers, pointer actions, and terminal focus changes.
//! Crossterm events are converted via `From` impls so the rest of the crate
//! never depends on crossterm directly.

use std::ops::BitOr;

// ---------------------------------------------------------------------------
// Key / Modifiers
// ---------------------------------------------------------------------------

/// Keyboard key, decoupled from crossterm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    BackTab,
    Left,
    Right,
    Up,
    Down,
    /// Any key the engine does not distinguish.
    Other,
}

/// Modifier key bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(pub u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(1);
    pub const CTRL: Modifiers = Modifiers(2);
    pub const ALT: Modifiers = Modifiers(4);
    pub const META: Modifiers = Modifiers(8);

    /// Check whether `self` contains all the bits in `other`.
    pub fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Whether a ctrl, alt or meta chord is held. Such presses are shortcuts,
    /// not keyboard navigation.
    pub fn is_chord(self) -> bool {
        self.contains(Modifiers::CTRL) || self.contains(Modifiers::ALT) || self.contains(Modifiers::META)
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;
    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

// ---------------------------------------------------------------------------
// KeyEvent
// ---------------------------------------------------------------------------

/// Press, auto-repeat, or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyPhase {
    Press,
    Repeat,
    Release,
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: Key,
    pub modifiers: Modifiers,
    pub phase: KeyPhase,
}

impl KeyEvent {
    /// A key press.
    pub fn press(code: Key, modifiers: Modifiers) -> Self {
        Self {
            code,
            modifiers,
            phase: KeyPhase::Press,
        }
    }
}

// ---------------------------------------------------------------------------
// PointerEvent
// ---------------------------------------------------------------------------

/// Pointer action kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    Down,
    Up,
    Drag,
    Moved,
    Scroll,
}

/// A pointer (mouse) event at a terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: u16,
    pub y: u16,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, x: u16, y: u16) -> Self {
        Self { kind, x, y }
    }
}

// ---------------------------------------------------------------------------
// InputEvent
// ---------------------------------------------------------------------------

/// Top-level input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Pointer(PointerEvent),
    /// The terminal window gained (`true`) or lost (`false`) focus.
    WindowFocus(bool),
    /// Resize, paste and anything else irrelevant to modality.
    Other,
}

// ---------------------------------------------------------------------------
// From<crossterm> conversions
// ---------------------------------------------------------------------------

fn convert_modifiers(m: crossterm::event::KeyModifiers) -> Modifiers {
    use crossterm::event::KeyModifiers as Ct;
    let mut out = Modifiers::NONE;
    if m.contains(Ct::SHIFT) {
        out = out | Modifiers::SHIFT;
    }
    if m.contains(Ct::CONTROL) {
        out = out | Modifiers::CTRL;
    }
    if m.contains(Ct::ALT) {
        out = out | Modifiers::ALT;
    }
    if m.contains(Ct::SUPER) || m.contains(Ct::META) {
        out = out | Modifiers::META;
    }
    out
}

impl From<crossterm::event::KeyEvent> for KeyEvent {
    fn from(ct: crossterm::event::KeyEvent) -> Self {
        use crossterm::event::{KeyCode, KeyEventKind};
        let code = match ct.code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            _ => Key::Other,
        };
        let phase = match ct.kind {
            KeyEventKind::Press => KeyPhase::Press,
            KeyEventKind::Repeat => KeyPhase::Repeat,
            KeyEventKind::Release => KeyPhase::Release,
        };
        KeyEvent {
            code,
            modifiers: convert_modifiers(ct.modifiers),
            phase,
        }
    }
}

impl From<crossterm::event::MouseEvent> for PointerEvent {
    fn from(me: crossterm::event::MouseEvent) -> Self {
        use crossterm::event::MouseEventKind;
        let kind = match me.kind {
            MouseEventKind::Down(_) => PointerKind::Down,
            MouseEventKind::Up(_) => PointerKind::Up,
            MouseEventKind::Drag(_) => PointerKind::Drag,
            MouseEventKind::Moved => PointerKind::Moved,
            _ => PointerKind::Scroll,
        };
        PointerEvent::new(kind, me.column, me.row)
    }
}

impl From<crossterm::event::Event> for InputEvent {
    fn from(ct: crossterm::event::Event) -> Self {
        use crossterm::event::Event;
        match ct {
            Event::Key(ke) => InputEvent::Key(KeyEvent::from(ke)),
            Event::Mouse(me) => InputEvent::Pointer(PointerEvent::from(me)),
            Event::FocusGained => InputEvent::WindowFocus(true),
            Event::FocusLost => InputEvent::WindowFocus(false),
            _ => InputEvent::Other,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
