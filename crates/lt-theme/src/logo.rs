//! Logo recoloring.
//!
//! The bookmark manager ships its logo as a fixed purple raster. Rather
//! than recolor the asset, the theme rotates its hue with a CSS filter so
//! it lands on the base color's hue.

use std::fmt;

use lt_color::{Rgb, hue_rotation_degrees};

/// The logo's own color (`#815EE8`).
pub const LOGO_REFERENCE: Rgb = Rgb::new(0x81, 0x5e, 0xe8);

/// A `hue-rotate()` filter that carries the logo onto a base color's hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoFilter {
    /// Whole degrees, −180 to 180.
    pub rotation: i32,
}

impl LogoFilter {
    #[must_use]
    pub fn for_base(base: Rgb) -> Self {
        Self {
            rotation: hue_rotation_degrees(LOGO_REFERENCE, base),
        }
    }

    /// Approximately what the logo looks like once the filter is applied
    /// (before the saturate/brightness boost).
    #[must_use]
    pub fn tint(self) -> Rgb {
        LOGO_REFERENCE.rotate_hue(f64::from(self.rotation))
    }
}

impl fmt::Display for LogoFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, ".logo {{")?;
        writeln!(
            f,
            "    filter: hue-rotate({}deg) saturate(130%) brightness(120%) !important;",
            self.rotation
        )?;
        write!(f, "}}")
    }
}
