//! Form-level context shared by the controls inside a form control.

use crate::owner::{Color, Size};

/// Values a form control exposes to its controls. Read-only for widgets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormControl {
    pub disabled: Option<bool>,
    pub read_only: Option<bool>,
    pub required: Option<bool>,
    /// An error state forces the danger color.
    pub error: bool,
    pub size: Option<Size>,
    pub color: Option<Color>,
    /// Id of the helper text describing the control.
    pub described_by: Option<String>,
    /// Id the form label points at; controls adopt it when they have none.
    pub html_for: Option<String>,
}

impl FormControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = Some(read_only);
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn described_by(mut self, id: impl Into<String>) -> Self {
        self.described_by = Some(id.into());
        self
    }

    pub fn html_for(mut self, id: impl Into<String>) -> Self {
        self.html_for = Some(id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let form = FormControl::new()
            .disabled(true)
            .required(true)
            .error(true)
            .size(Size::Lg)
            .color(Color::Success)
            .described_by("help")
            .html_for("field");
        assert_eq!(form.disabled, Some(true));
        assert_eq!(form.read_only, None);
        assert_eq!(form.required, Some(true));
        assert!(form.error);
        assert_eq!(form.size, Some(Size::Lg));
        assert_eq!(form.color, Some(Color::Success));
        assert_eq!(form.described_by.as_deref(), Some("help"));
        assert_eq!(form.html_for.as_deref(), Some("field"));
    }

    #[test]
    fn default_is_empty() {
        let form = FormControl::default();
        assert_eq!(form.disabled, None);
        assert!(!form.error);
    }
}
