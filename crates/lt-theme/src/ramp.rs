//! The contrast ramp — every theme color is a point on one axis.
//!
//! A ramp is anchored on a *neutral* color: the base color pulled to 50%
//! HSL lightness. Positions on the ramp run from 0.0 (black) through 1.0
//! (the neutral itself) to 2.0 (white):
//!
//! ```text
//!   0.0 ──────────── 1.0 ──────────── 2.0
//!  black  (shade)  neutral  (tint)  white
//! ```
//!
//! Below 1.0 the neutral is scaled toward black; above 1.0 each channel is
//! blended toward 255. The hue proportions of the base color survive along
//! the whole axis, so every level still "belongs" to the base color.
//!
//! The scheme only affects [`Ramp::at`] and [`Ramp::shift`]: a light theme
//! mirrors positions around the neutral, so callers can always think in
//! theme-relative terms ("0.3 is the background, 1.8 is the text").

use lt_color::Rgb;

use crate::scheme::Scheme;

/// Pure black.
pub const MIN_POSITION: f64 = 0.0;
/// The neutral anchor.
pub const NEUTRAL_POSITION: f64 = 1.0;
/// Pure white.
pub const MAX_POSITION: f64 = 2.0;

/// A neutral anchor plus a scheme: the context every theme color is
/// generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ramp {
    neutral: Rgb,
    scheme: Scheme,
}

impl Ramp {
    #[must_use]
    pub const fn new(neutral: Rgb, scheme: Scheme) -> Self {
        Self { neutral, scheme }
    }

    /// Build a ramp whose anchor is derived from `base`.
    #[must_use]
    pub fn from_base(base: Rgb, scheme: Scheme) -> Self {
        Self::new(Self::derive_neutral(base), scheme)
    }

    /// Pull a color to 50% HSL lightness by scaling all channels equally.
    ///
    /// Scaling preserves the channel ratios, so the hue is kept. Pure black
    /// has no lightness to scale and is returned unchanged.
    #[must_use]
    pub fn derive_neutral(rgb: Rgb) -> Rgb {
        let l = rgb.lightness();
        let factor = if l > 0.0 { 0.5 / l } else { 1.0 };
        rgb.scale(factor)
    }

    #[must_use]
    pub const fn neutral(self) -> Rgb {
        self.neutral
    }

    #[must_use]
    pub const fn scheme(self) -> Scheme {
        self.scheme
    }

    /// Where `color` sits on this ramp, measured by HSL lightness.
    ///
    /// Colors no lighter than the neutral land in 0.0–1.0, lighter ones in
    /// 1.0–2.0. Independent of the scheme.
    #[must_use]
    pub fn position_of(self, color: Rgb) -> f64 {
        let cl = color.lightness();
        let nl = self.neutral.lightness();
        if cl <= nl {
            // A black anchor has nothing below it.
            if nl > 0.0 { cl / nl } else { MIN_POSITION }
        } else {
            NEUTRAL_POSITION + (cl - nl) / (1.0 - nl)
        }
    }

    /// The color at an absolute `position`, ignoring the scheme.
    ///
    /// Out-of-range positions are clamped to 0.0–2.0.
    #[must_use]
    pub fn blend(self, position: f64) -> Rgb {
        let position = position.clamp(MIN_POSITION, MAX_POSITION);
        if position < NEUTRAL_POSITION {
            self.neutral.scale(position)
        } else {
            self.neutral.tint(position - NEUTRAL_POSITION)
        }
    }

    /// The color at a theme-relative `position`.
    ///
    /// For dark themes this is [`blend`](Self::blend) directly. Light
    /// themes mirror the position around the neutral first, so low
    /// positions are light and high positions are dark.
    #[must_use]
    pub fn at(self, position: f64) -> Rgb {
        let position = position.clamp(MIN_POSITION, MAX_POSITION);
        let position = if self.scheme.is_light() {
            MAX_POSITION - position
        } else {
            position
        };
        self.blend(position)
    }

    /// Move `color` along the ramp by `delta`, relative to where it is now.
    ///
    /// A positive delta moves toward the text end of the theme (lighter in
    /// dark themes, darker in light themes). The move stops at pure black or
    /// pure white instead of overshooting.
    #[must_use]
    pub fn shift(self, color: Rgb, delta: f64) -> Rgb {
        let current = self.position_of(color);
        let delta = if self.scheme.is_light() { -delta } else { delta };
        // Not `clamp`: the bounds come from a measured position.
        let delta = delta.min(MAX_POSITION - current).max(-current);
        // `current` is absolute already, so no second mirror here.
        self.blend(current + delta)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
