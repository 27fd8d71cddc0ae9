//! Light / dark scheme selection.
//!
//! The scheme decides which end of the contrast ramp is "background" and
//! which is "foreground". Dark themes sit near black and reach toward white;
//! light themes mirror that around the neutral anchor.

use std::fmt;

/// Which way the theme faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scheme {
    /// Dark backgrounds, light text. The default.
    #[default]
    Dark,
    /// Light backgrounds, dark text.
    Light,
}

impl Scheme {
    /// Look up a scheme by its exact lowercase name.
    ///
    /// Returns `None` for anything other than `dark` or `light`.
    #[must_use]
    pub fn known(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Interpret a user-supplied scheme name.
    ///
    /// Only the literal `light` selects [`Scheme::Light`]; every other
    /// string (including `Light` and the empty string) falls back to
    /// [`Scheme::Dark`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::known(name).unwrap_or_default()
    }

    #[must_use]
    pub const fn is_light(self) -> bool {
        matches!(self, Self::Light)
    }

    /// The CSS `color-scheme` keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
