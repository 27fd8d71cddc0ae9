//! Theme assembly: the fixed set of CSS custom properties.
//!
//! A `Stylesheet` is built once from a base color and a scheme. Every
//! computed color comes from the [`Ramp`]; the rest are `var(--…)` cross
//! references so the bookmark manager's own rules pick up the palette.
//! Rendering is a plain [`fmt::Display`], so callers decide where it goes.

use std::fmt;

use log::debug;
use lt_color::{ColorError, Rgb};

use crate::logo::LogoFilter;
use crate::ramp::Ramp;
use crate::scheme::Scheme;

/// Background position: dark in a dark theme, light in a light one.
const PRIMARY_POSITION: f64 = 0.3;
/// Foreground position: the opposite end from the background.
const CONTRAST_POSITION: f64 = 1.8;

// ---------------------------------------------------------------------------
// Value / Declaration
// ---------------------------------------------------------------------------

/// The right-hand side of one custom property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Rgb(Rgb),
    Rgba(Rgb, f64),
    /// A reference to another custom property, rendered as `var(--name)`.
    Var(&'static str),
    Literal(&'static str),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Rgb(rgb) => write!(f, "{}", rgb.css()),
            Self::Rgba(rgb, alpha) => write!(f, "{}", rgb.css_alpha(alpha)),
            Self::Var(name) => write!(f, "var(--{name})"),
            Self::Literal(text) => f.write_str(text),
        }
    }
}

/// One `--name: value;` line, optionally followed by a trailing comment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Declaration {
    /// Property name without the leading `--`.
    pub name: &'static str,
    pub value: Value,
    pub note: Option<&'static str>,
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--{}: {};", self.name, self.value)?;
        if let Some(note) = self.note {
            write!(f, " /* {note} */")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Section
// ---------------------------------------------------------------------------

/// A commented group of declarations inside `:root`.
///
/// Untitled sections render as a bare blank-line-separated block; they
/// split a long group without introducing a new heading.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Section {
    pub title: Option<&'static str>,
    pub declarations: Vec<Declaration>,
}

impl Section {
    #[must_use]
    pub const fn titled(title: &'static str) -> Self {
        Self {
            title: Some(title),
            declarations: Vec::new(),
        }
    }

    #[must_use]
    pub const fn untitled() -> Self {
        Self {
            title: None,
            declarations: Vec::new(),
        }
    }

    fn push(mut self, name: &'static str, value: Value) -> Self {
        self.declarations.push(Declaration {
            name,
            value,
            note: None,
        });
        self
    }

    #[must_use]
    pub fn rgb(self, name: &'static str, color: Rgb) -> Self {
        self.push(name, Value::Rgb(color))
    }

    #[must_use]
    pub fn rgba(self, name: &'static str, color: Rgb, alpha: f64) -> Self {
        self.push(name, Value::Rgba(color, alpha))
    }

    #[must_use]
    pub fn var(self, name: &'static str, target: &'static str) -> Self {
        self.push(name, Value::Var(target))
    }

    #[must_use]
    pub fn literal(self, name: &'static str, text: &'static str) -> Self {
        self.push(name, Value::Literal(text))
    }

    /// Attach a trailing comment to the most recently added declaration.
    #[must_use]
    pub fn note(mut self, note: &'static str) -> Self {
        if let Some(last) = self.declarations.last_mut() {
            last.note = Some(note);
        }
        self
    }
}

// ---------------------------------------------------------------------------
// Stylesheet
// ---------------------------------------------------------------------------

/// A complete generated theme.
#[derive(Debug, Clone, PartialEq)]
pub struct Stylesheet {
    pub base: Rgb,
    pub scheme: Scheme,
    pub ramp: Ramp,
    pub sections: Vec<Section>,
    pub logo: LogoFilter,
}

impl Stylesheet {
    /// Derive every variable from `base` under `scheme`.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub fn generate(base: Rgb, scheme: Scheme) -> Self {
        let ramp = Ramp::from_base(base, scheme);
        let primary = ramp.at(PRIMARY_POSITION);
        let contrast = ramp.at(CONTRAST_POSITION);
        let logo = LogoFilter::for_base(base);

        debug!(
            "base {base} ({scheme}): neutral {}, primary {primary}, contrast {contrast}",
            ramp.neutral()
        );
        debug!("logo hue rotation {}deg", logo.rotation);

        let sections = vec![
            Section::titled("Contrast levels")
                .rgb("contrast-5", ramp.at(0.1))
                .rgb("contrast-10", ramp.at(0.2))
                .rgb("contrast-20", ramp.at(0.4))
                .rgb("contrast-30", ramp.at(0.6))
                .rgb("contrast-40", ramp.at(0.8))
                .rgb("contrast-50", ramp.at(1.0))
                .note("neutral")
                .rgb("contrast-60", ramp.at(1.2))
                .rgb("contrast-70", ramp.at(1.4))
                .rgb("contrast-80", ramp.at(1.6))
                .rgb("contrast-90", ramp.at(1.8)),
            Section::titled("Primary colors")
                .rgb("primary-color", primary)
                .rgb("primary-color-highlight", ramp.shift(primary, 0.1))
                .rgb("primary-color-shade", ramp.shift(primary, -0.1))
                .rgba("primary-overlay", primary, 0.15),
            Section::titled("Base theme colors")
                .rgb("body-color", primary)
                .var("body-color-contrast", "contrast-30"),
            Section::titled("Text colors")
                .rgb("text-color", contrast)
                .rgb("secondary-text-color", ramp.shift(contrast, -0.2))
                .rgb("tertiary-text-color", ramp.shift(contrast, -0.4))
                .rgb("contrast-text-color", ramp.at(2.0))
                .note("white in dark theme, black in light theme")
                .rgb("primary-text-color", ramp.at(1.0)),
            Section::titled("Link colors")
                .rgb("link-color", ramp.at(1.0))
                .rgb("secondary-link-color", ramp.at(1.2)),
            Section::untitled()
                .rgb("alternative-color", ramp.at(1.0))
                .rgb("alternative-color-dark", contrast),
            Section::titled("Icon colors").var("icon-color", "text-color"),
            Section::titled("Border colors")
                .var("border-color", "contrast-30")
                .var("secondary-border-color", "contrast-20")
                .literal("focus-outline", "3px solid var(--contrast-40)"),
            Section::titled("Input styling")
                .rgb("input-bg", ramp.shift(primary, 0.3))
                .rgb("input-border", ramp.shift(primary, 0.5))
                .rgb("input-text", ramp.shift(contrast, 0.1))
                .var("input-bg-color", "input-bg")
                .var("input-disabled-bg-color", "contrast-30")
                .var("input-text-color", "input-text")
                .var("input-hint-color", "secondary-text-color")
                .var("input-border-color", "border-color")
                .rgba("input-placeholder-color", contrast, 0.5),
            Section::titled("Form elements")
                .var("checkbox-bg-color", "contrast-10")
                .var("checkbox-checked-bg-color", "input-bg")
                .var("checkbox-disabled-bg-color", "primary")
                .var("checkbox-border-color", "border-color")
                .var("checkbox-icon-color", "contrast-text-color"),
            Section::titled("Button styling")
                .rgba("btn-bg-color", contrast, 0.5)
                .rgba("btn-hover-bg-color", contrast, 0.6)
                .var("btn-border-color", "border-color")
                .var("btn-text-color", "input-text")
                .var("btn-icon-color", "btn-text-color"),
            Section::titled("Special buttons")
                .var("btn-primary-bg-color", "btn-bg-color")
                .var("btn-primary-hover-bg-color", "btn-hover-bg-color")
                .var("btn-primary-text-color", "input-text"),
            Section::untitled()
                .var("btn-success-bg-color", "success-color")
                .var("btn-success-hover-bg-color", "success-color-highlight")
                .var("btn-success-text-color", "contrast-text-color"),
            Section::untitled()
                .var("btn-error-bg-color", "error-color")
                .var("btn-error-hover-bg-color", "error-color-highlight")
                .var("btn-error-text-color", "contrast-text-color"),
            Section::untitled()
                .var("btn-link-text-color", "link-color")
                .var("btn-link-hover-text-color", "link-color"),
            Section::titled("Menu styling")
                .rgb("menu-bg-color", ramp.shift(primary, 0.2))
                .var("menu-border-color", "contrast-30")
                .var("menu-item-color", "text-color")
                .var("menu-item-hover-color", "text-color")
                .literal("menu-item-bg-color", "transparent")
                .var("menu-item-hover-bg-color", "contrast-20"),
            Section::titled("Tab styling")
                .var("tab-color", "text-color")
                .var("tab-hover-color", "primary-text-color")
                .var("tab-active-color", "primary-text-color")
                .var("tab-highlight-color", "primary-text-color"),
            Section::titled("Bookmark styling")
                .var("bookmark-title-color", "primary-text-color")
                .var("bookmark-description-color", "text-color")
                .var("bookmark-actions-color", "secondary-text-color")
                .var("bookmark-actions-hover-color", "text-color"),
            Section::titled("Switch styling")
                .var("switch-bg-color", "contrast-10")
                .var("switch-border-color", "border-color")
                .var("switch-toggle-color", "text-color"),
            Section::titled("Modal additions")
                .rgba("modal-overlay-bg-color", ramp.at(0.1), 0.5)
                .rgb("modal-container-bg-color", primary)
                .note("same as body background")
                .var("modal-container-border-color", "contrast-30")
                .literal("modal-box-shadow", "none"),
            Section::titled("Bulk actions").var("bulk-actions-bg-color", "contrast-5"),
        ];

        Self {
            base,
            scheme,
            ramp,
            sections,
            logo,
        }
    }

    /// Every declaration in output order.
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.sections.iter().flat_map(|s| s.declarations.iter())
    }

    /// Look up a variable by name (with or without the leading `--`).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        let name = name.strip_prefix("--").unwrap_or(name);
        self.declarations()
            .find(|d| d.name == name)
            .map(|d| &d.value)
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "/* Generated theme from {} */", self.base)?;
        writeln!(f, ":root {{")?;
        for section in &self.sections {
            writeln!(f)?;
            if let Some(title) = section.title {
                writeln!(f, "    /* {title} */")?;
            }
            for decl in &section.declarations {
                writeln!(f, "    {decl}")?;
            }
        }
        writeln!(f)?;
        writeln!(f, "    color-scheme: {};", self.scheme)?;
        writeln!(f, "}}")?;
        writeln!(f)?;
        writeln!(
            f,
            "/* Special logo styling that can't be handled by variables */"
        )?;
        write!(f, "{}", self.logo)
    }
}

/// Validate `hex` and render the full stylesheet for it.
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] if `hex` is not `#RRGGBB`.
pub fn generate(hex: &str, scheme: Scheme) -> Result<String, ColorError> {
    let base = Rgb::from_hex(hex)?;
    Ok(Stylesheet::generate(base, scheme).to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
