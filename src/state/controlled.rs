//! Controlled versus uncontrolled values.
//!
//! A value is controlled when the caller supplies it on the first resolve; it
//! then always comes from the caller. Otherwise the instance owns it, seeded
//! once from the default. The mode never changes after the first resolve.

use std::fmt;

/// Who owns a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMode {
    Controlled,
    Uncontrolled,
}

/// Arbitration between a caller-supplied value and internal state.
#[derive(Debug, Clone)]
pub struct Controlled<T> {
    name: &'static str,
    mode: Option<ControlMode>,
    value: T,
    seed: Option<T>,
    warned_mode: bool,
    warned_default: bool,
}

impl<T> Controlled<T>
where
    T: Clone + Default + PartialEq + fmt::Debug,
{
    /// A fresh arbiter for the value called `name` (used in warnings).
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            mode: None,
            value: T::default(),
            seed: None,
            warned_mode: false,
            warned_default: false,
        }
    }

    /// The mode, once decided.
    pub fn mode(&self) -> Option<ControlMode> {
        self.mode
    }

    pub fn is_controlled(&self) -> bool {
        self.mode == Some(ControlMode::Controlled)
    }

    /// Current value for this render.
    ///
    /// Misuse (switching modes, changing the default of an uncontrolled value)
    /// is logged once per instance and otherwise ignored.
    pub fn resolve(&mut self, controlled: Option<T>, default: Option<T>) -> T {
        match self.mode {
            None => {
                if let Some(value) = controlled {
                    self.mode = Some(ControlMode::Controlled);
                    self.value = value;
                } else {
                    self.mode = Some(ControlMode::Uncontrolled);
                    self.value = default.clone().unwrap_or_default();
                    self.seed = default;
                }
            }
            Some(ControlMode::Controlled) => match controlled {
                Some(value) => self.value = value,
                None => self.warn_mode("controlled", "uncontrolled"),
            },
            Some(ControlMode::Uncontrolled) => {
                if controlled.is_some() {
                    self.warn_mode("uncontrolled", "controlled");
                }
                if default != self.seed && !self.warned_default {
                    self.warned_default = true;
                    tracing::warn!(
                        value = self.name,
                        "the default of an uncontrolled value changed after it was initialized"
                    );
                }
            }
        }
        self.value.clone()
    }

    /// Store a new value. Only uncontrolled values are stored; returns whether
    /// the value was kept.
    pub fn set(&mut self, value: T) -> bool {
        if self.is_controlled() {
            return false;
        }
        self.value = value;
        true
    }

    /// The last resolved or stored value.
    pub fn get(&self) -> &T {
        &self.value
    }

    fn warn_mode(&mut self, from: &str, to: &str) {
        if self.warned_mode {
            return;
        }
        self.warned_mode = true;
        tracing::warn!(
            value = self.name,
            from,
            to,
            "a value switched between controlled and uncontrolled; the mode is fixed for the lifetime of the instance"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_resolve_decides_mode() {
        let mut c = Controlled::<bool>::new("checked");
        assert_eq!(c.mode(), None);
        assert!(c.resolve(Some(true), None));
        assert_eq!(c.mode(), Some(ControlMode::Controlled));

        let mut u = Controlled::<bool>::new("checked");
        assert!(!u.resolve(None, None));
        assert_eq!(u.mode(), Some(ControlMode::Uncontrolled));
    }

    #[test]
    fn uncontrolled_seeded_once() {
        let mut c = Controlled::new("checked");
        assert!(c.resolve(None, Some(true)));
        assert!(c.set(false));
        // A later default does not reseed.
        assert!(!c.resolve(None, Some(true)));
    }

    #[test]
    fn controlled_ignores_set() {
        let mut c = Controlled::new("checked");
        assert!(!c.resolve(Some(false), None));
        assert!(!c.set(true));
        assert!(!c.resolve(Some(false), None));
        assert!(c.resolve(Some(true), None));
    }

    #[test]
    fn controlled_losing_value_keeps_last() {
        let mut c = Controlled::new("checked");
        c.resolve(Some(true), None);
        assert!(c.resolve(None, Some(false)));
        assert!(c.is_controlled());
    }

    #[test]
    fn uncontrolled_ignores_late_controlled_value() {
        let mut c = Controlled::new("checked");
        c.resolve(None, None);
        assert!(!c.resolve(Some(true), None));
        assert!(!c.is_controlled());
    }

    #[test]
    fn get_returns_last_value() {
        let mut c = Controlled::new("label");
        c.resolve(None, Some(String::from("a")));
        c.set(String::from("b"));
        assert_eq!(c.get(), "b");
    }
}
