//! Color, variant and size resolution.
//!
//! Appearance is resolved once, before the owner state is frozen. Toggle
//! widgets resolve two complete appearances, one for the active (checked or
//! indeterminate) look and one for the inactive look, and pick between them at
//! the end.

use std::fmt;

use crate::context::{ColorInversion, FormControl};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $token:literal),* $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)*
            /// A theme-defined value outside the built-in set.
            Custom(String),
        }

        impl $name {
            /// The token used in class names and style lookups.
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $token,)*
                    $name::Custom(s) => s.as_str(),
                }
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $($token => $name::$variant,)*
                    other => $name::Custom(other.to_owned()),
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                $name::from(s.as_str())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

token_enum! {
    /// Palette color of a widget.
    Color {
        Primary => "primary",
        Neutral => "neutral",
        Danger => "danger",
        Info => "info",
        Success => "success",
        Warning => "warning",
        Context => "context",
    }
}

token_enum! {
    /// Global variant of a widget.
    Variant {
        Plain => "plain",
        Outlined => "outlined",
        Soft => "soft",
        Solid => "solid",
    }
}

token_enum! {
    /// Size of a widget.
    Size {
        Sm => "sm",
        Md => "md",
        Lg => "lg",
    }
}

// ---------------------------------------------------------------------------
// Appearance
// ---------------------------------------------------------------------------

/// A resolved variant/color pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appearance {
    pub variant: Variant,
    pub color: Color,
}

impl Appearance {
    pub fn new(variant: Variant, color: Color) -> Self {
        Self { variant, color }
    }
}

/// Variant and color as given on the widget instance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExplicitAppearance {
    pub variant: Option<Variant>,
    pub color: Option<Color>,
}

/// Resolve a color for a widget rendered with `variant`.
///
/// Order: explicit color, then `context` when the surrounding surface inverts
/// this variant, then danger for a form control in error, then the form
/// control's color, then `default`.
pub fn resolve_color(
    explicit: Option<&Color>,
    form: Option<&FormControl>,
    inversion: &ColorInversion,
    variant: &Variant,
    default: &Color,
) -> Color {
    if let Some(color) = explicit {
        return color.clone();
    }
    if inversion.inverts(variant) {
        return Color::Context;
    }
    match form {
        Some(form) if form.error => Color::Danger,
        Some(FormControl {
            color: Some(color), ..
        }) => color.clone(),
        _ => default.clone(),
    }
}

/// Resolve one complete appearance against a default.
pub fn resolve_appearance(
    explicit: &ExplicitAppearance,
    form: Option<&FormControl>,
    inversion: &ColorInversion,
    default: &Appearance,
) -> Appearance {
    let variant = explicit
        .variant
        .clone()
        .unwrap_or_else(|| default.variant.clone());
    let color = resolve_color(
        explicit.color.as_ref(),
        form,
        inversion,
        &variant,
        &default.color,
    );
    Appearance { variant, color }
}

/// Size: explicit, then the form control's size, then `default`.
pub fn resolve_size(explicit: Option<&Size>, form: Option<&FormControl>, default: Size) -> Size {
    explicit
        .cloned()
        .or_else(|| form.and_then(|f| f.size.clone()))
        .unwrap_or(default)
}

// ---------------------------------------------------------------------------
// ToggleAppearance
// ---------------------------------------------------------------------------

/// Independently resolved active and inactive appearances of a toggle widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleAppearance {
    pub active: Appearance,
    pub inactive: Appearance,
}

impl ToggleAppearance {
    pub fn resolve(
        explicit: &ExplicitAppearance,
        form: Option<&FormControl>,
        inversion: &ColorInversion,
        active_default: &Appearance,
        inactive_default: &Appearance,
    ) -> Self {
        Self {
            active: resolve_appearance(explicit, form, inversion, active_default),
            inactive: resolve_appearance(explicit, form, inversion, inactive_default),
        }
    }

    /// The appearance to render with.
    pub fn select(&self, is_active: bool) -> &Appearance {
        if is_active {
            &self.active
        } else {
            &self.inactive
        }
    }
}
