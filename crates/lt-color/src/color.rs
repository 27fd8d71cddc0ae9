// SPDX-License-Identifier: MIT
//
// lt-color color system — 8-bit RGB with an HSL view for lightness and hue.
//
// Single-character variable names (r, g, b, h, s, l) are the standard
// mathematical convention in color science. Renaming them would make the
// code harder to compare against reference implementations.
#![allow(clippy::many_single_char_names)]
//
// The theme engine only ever stores 8-bit RGB. HSL is a derived view used
// for two things: measuring lightness (where a color sits between black
// and white) and reading or rotating the hue. Conversions follow the
// classic hexcone model, so results match what browsers and most color
// pickers report.
//
// Conversion pipeline:
//
//   "#RRGGBB" ↔ Rgb (u8 × 3) ↔ Hsl (f64 × 3, hue as a fraction of a turn)
//
// Every float → channel conversion truncates toward zero and clamps to
// [0, 255]; nothing here rounds to nearest.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An opaque sRGB color with 8-bit channels.
///
/// This is the value type that flows through the whole theme pipeline.
/// It is `Copy`, compares exactly, and formats as `#rrggbb` via `Display`.
///
/// # Examples
///
/// ```
/// use lt_color::Rgb;
///
/// let green = Rgb::from_hex("#50B464").unwrap();
/// assert_eq!(green, Rgb::new(80, 180, 100));
/// assert_eq!(green.to_hex(), "#50b464");
/// assert_eq!(green.css().to_string(), "rgb(80, 180, 100)");
/// assert_eq!(green.css_alpha(0.5).to_string(), "rgba(80, 180, 100, 0.5)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` or `RRGGBB` string (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidFormat`] unless the input is exactly six
    /// hex digits after an optional leading `#`.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        parse_hex(s).ok_or_else(|| ColorError::InvalidFormat(s.to_owned()))
    }

    /// Format as lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// The three channels in `[r, g, b]` order.
    #[inline]
    #[must_use]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Apply `f` to every channel.
    #[inline]
    #[must_use]
    pub fn map(self, f: impl Fn(u8) -> u8) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }

    /// Multiply every channel by `factor`, truncating and clamping to 0–255.
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        self.map(|c| to_channel(f64::from(c) * factor))
    }

    /// Blend every channel toward 255 by `amount` (0.0 keeps the color,
    /// 1.0 gives white), truncating and clamping to 0–255.
    #[must_use]
    pub fn tint(self, amount: f64) -> Self {
        self.map(|c| {
            let c = f64::from(c);
            to_channel(c + (255.0 - c) * amount)
        })
    }

    /// Convert to HSL.
    #[inline]
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        Hsl::from_rgb(self)
    }

    /// HSL lightness: the mean of the largest and smallest channel, 0.0–1.0.
    #[inline]
    #[must_use]
    pub fn lightness(self) -> f64 {
        self.to_hsl().l
    }

    /// Rotate the hue by `degrees`, keeping saturation and lightness.
    #[must_use]
    pub fn rotate_hue(self, degrees: f64) -> Self {
        self.to_hsl().rotate(degrees).to_rgb()
    }

    /// `Display` adaptor producing `rgb(r, g, b)`.
    #[inline]
    #[must_use]
    pub const fn css(self) -> CssRgb {
        CssRgb(self)
    }

    /// `Display` adaptor producing `rgba(r, g, b, alpha)`.
    #[inline]
    #[must_use]
    pub const fn css_alpha(self, alpha: f64) -> CssRgba {
        CssRgba { rgb: self, alpha }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

// ─── CSS formatting ──────────────────────────────────────────────────────────

/// CSS `rgb()` functional notation for an [`Rgb`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CssRgb(pub Rgb);

impl fmt::Display for CssRgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb { r, g, b } = self.0;
        write!(f, "rgb({r}, {g}, {b})")
    }
}

/// CSS `rgba()` functional notation for an [`Rgb`] plus alpha.
///
/// Alpha prints in Rust's shortest round-trip form (`0.15`, `0.5`, `1`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CssRgba {
    pub rgb: Rgb,
    pub alpha: f64,
}

impl fmt::Display for CssRgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb { r, g, b } = self.rgb;
        write!(f, "rgba({r}, {g}, {b}, {})", self.alpha)
    }
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in HSL, derived from [`Rgb`].
///
/// - `h`: hue as a fraction of a full turn, 0.0 to 1.0 (exclusive)
/// - `s`: saturation, 0.0 to 1.0
/// - `l`: lightness, 0.0 (black) to 1.0 (white)
///
/// Grays have hue 0 and saturation 0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Convert from 8-bit RGB using normalized 0.0–1.0 channels.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn from_rgb(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.channels().map(|c| f64::from(c) / 255.0);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let sum = max + min;
        let range = max - min;
        let l = sum / 2.0;

        if max == min {
            return Self::new(0.0, 0.0, l);
        }

        let s = if l <= 0.5 {
            range / sum
        } else {
            range / (2.0 - max - min)
        };

        // Distance of each channel from the maximum, relative to the range.
        let rc = (max - r) / range;
        let gc = (max - g) / range;
        let bc = (max - b) / range;

        // Which sextant of the hexcone are we in?
        let h = if r == max {
            bc - gc
        } else if g == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };

        Self::new((h / 6.0).rem_euclid(1.0), s, l)
    }

    /// Convert back to 8-bit RGB (channels truncated, not rounded).
    ///
    /// Truncation means a round trip through HSL can lose one unit on a
    /// channel (yellow comes back as `#feff00`).
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn to_rgb(self) -> Rgb {
        if self.s == 0.0 {
            let v = to_channel(self.l * 255.0);
            return Rgb::new(v, v, v);
        }

        let m2 = if self.l <= 0.5 {
            self.l * (1.0 + self.s)
        } else {
            self.l + self.s - self.l * self.s
        };
        let m1 = 2.0 * self.l - m2;

        Rgb::new(
            to_channel(hue_to_channel(m1, m2, self.h + ONE_THIRD) * 255.0),
            to_channel(hue_to_channel(m1, m2, self.h) * 255.0),
            to_channel(hue_to_channel(m1, m2, self.h - ONE_THIRD) * 255.0),
        )
    }

    /// Hue in degrees, 0.0 to 360.0 (exclusive).
    #[inline]
    #[must_use]
    pub fn hue_degrees(self) -> f64 {
        self.h * 360.0
    }

    /// Shift the hue by `degrees` (wraps around the color wheel).
    #[must_use]
    pub fn rotate(self, degrees: f64) -> Self {
        Self {
            h: normalize_degrees(self.hue_degrees() + degrees) / 360.0,
            ..self
        }
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

// ─── Hue rotation ────────────────────────────────────────────────────────────

/// Degrees of hue rotation that carry `from` onto the hue of `to`.
///
/// Takes the shorter way around the wheel, so the result is always within
/// −180..=180. Fractional degrees are truncated toward zero. Swapping the
/// arguments negates the result.
///
/// ```
/// use lt_color::{Rgb, hue_rotation_degrees};
///
/// let red = Rgb::new(255, 0, 0);
/// let green = Rgb::new(0, 255, 0);
/// assert_eq!(hue_rotation_degrees(red, green), 120);
/// assert_eq!(hue_rotation_degrees(green, red), -120);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn hue_rotation_degrees(from: Rgb, to: Rgb) -> i32 {
    let mut rotation = to.to_hsl().hue_degrees() - from.to_hsl().hue_degrees();
    if rotation.abs() > 180.0 {
        rotation -= 360.0_f64.copysign(rotation);
    }
    // |rotation| <= 180, so the cast cannot overflow.
    rotation as i32
}

/// Rotate the hue of a hex color and return the result as `#rrggbb`.
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] if `hex` is not a valid hex color.
pub fn rotate_hue_hex(hex: &str, degrees: i32) -> Result<String, ColorError> {
    let rgb = Rgb::from_hex(hex)?;
    Ok(rgb.rotate_hue(f64::from(degrees)).to_hex())
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Normalize an angle to the range [0, 360).
#[inline]
fn normalize_degrees(d: f64) -> f64 {
    d.rem_euclid(360.0)
}

/// One channel of the HSL → RGB conversion for a hue offset.
fn hue_to_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRDS {
        m1 + (m2 - m1) * (TWO_THIRDS - hue) * 6.0
    } else {
        m1
    }
}

/// Truncate a float to a channel value, clamping to 0–255.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn to_channel(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.clamp(0.0, 255.0) as u8
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Rgb> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();
    if bytes.len() != 6 {
        return None;
    }
    let r = parse_hex_byte(&bytes[0..2])?;
    let g = parse_hex_byte(&bytes[2..4])?;
    let b = parse_hex_byte(&bytes[4..6])?;
    Some(Rgb::new(r, g, b))
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // Helper: check that two f64 values are approximately equal.
    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    // ── Hex Parsing ──────────────────────────────────────────────────────

    #[test]
    fn hex_parsing_with_hash() {
        assert_eq!(Rgb::from_hex("#50B464"), Ok(Rgb::new(80, 180, 100)));
    }

    #[test]
    fn hex_parsing_no_hash() {
        assert_eq!(Rgb::from_hex("00ff00"), Ok(Rgb::new(0, 255, 0)));
    }

    #[test]
    fn hex_parsing_mixed_case() {
        assert_eq!(Rgb::from_hex("#aBcDeF"), Ok(Rgb::new(0xab, 0xcd, 0xef)));
    }

    #[test]
    fn hex_parsing_invalid() {
        for bad in ["", "#", "#12345", "#1234567", "#f80", "notacolor", "#gg0000", "#12 456", "#ééé"] {
            assert_eq!(
                Rgb::from_hex(bad),
                Err(ColorError::InvalidFormat(bad.to_owned())),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn hex_roundtrip() {
        for hex in ["#000000", "#ffffff", "#50b464", "#815ee8", "#0a0b0c", "#c86432"] {
            assert_eq!(Rgb::from_hex(hex).unwrap().to_hex(), hex);
        }
    }

    #[test]
    fn hex_roundtrip_normalizes_case() {
        assert_eq!(Rgb::from_hex("#50B464").unwrap().to_string(), "#50b464");
    }

    #[test]
    fn from_str_delegates_to_hex() {
        let rgb: Rgb = "#815EE8".parse().unwrap();
        assert_eq!(rgb, Rgb::new(0x81, 0x5e, 0xe8));
        assert!("purple".parse::<Rgb>().is_err());
    }

    #[test]
    fn error_message_names_input() {
        let err = Rgb::from_hex("zzz").unwrap_err();
        assert!(err.to_string().contains("\"zzz\""), "{err}");
    }

    // ── CSS formatting ───────────────────────────────────────────────────

    #[test]
    fn css_rgb() {
        assert_eq!(Rgb::new(78, 176, 98).css().to_string(), "rgb(78, 176, 98)");
    }

    #[test]
    fn css_rgba_short_alpha() {
        let c = Rgb::new(219, 239, 223);
        assert_eq!(c.css_alpha(0.15).to_string(), "rgba(219, 239, 223, 0.15)");
        assert_eq!(c.css_alpha(0.5).to_string(), "rgba(219, 239, 223, 0.5)");
        assert_eq!(c.css_alpha(0.6).to_string(), "rgba(219, 239, 223, 0.6)");
    }

    // ── RGB → HSL ────────────────────────────────────────────────────────

    #[test]
    fn black_and_white_lightness() {
        assert!(approx_eq(Rgb::BLACK.lightness(), 0.0, 1e-12));
        assert!(approx_eq(Rgb::WHITE.lightness(), 1.0, 1e-12));
    }

    #[test]
    fn gray_is_achromatic() {
        let hsl = Rgb::new(127, 127, 127).to_hsl();
        assert!(approx_eq(hsl.h, 0.0, 1e-12));
        assert!(approx_eq(hsl.s, 0.0, 1e-12));
        assert!(approx_eq(hsl.l, 127.0 / 255.0, 1e-12));
    }

    #[test]
    fn pure_red() {
        let hsl = Rgb::new(255, 0, 0).to_hsl();
        assert!(approx_eq(hsl.h, 0.0, 1e-12));
        assert!(approx_eq(hsl.s, 1.0, 1e-12));
        assert!(approx_eq(hsl.l, 0.5, 1e-12));
    }

    #[test]
    fn known_green() {
        let hsl = Rgb::new(80, 180, 100).to_hsl();
        assert!(approx_eq(hsl.hue_degrees(), 132.0, 1e-9), "hue {}", hsl.hue_degrees());
        assert!(approx_eq(hsl.s, 0.4, 1e-9));
        assert!(approx_eq(hsl.l, 130.0 / 255.0, 1e-12));
    }

    #[test]
    fn known_purple() {
        let hsl = Rgb::new(0x81, 0x5e, 0xe8).to_hsl();
        assert!(approx_eq(hsl.h, 0.708_937_198, 1e-8), "hue {}", hsl.h);
        assert!(approx_eq(hsl.s, 0.75, 1e-9));
        assert!(approx_eq(hsl.l, 163.0 / 255.0, 1e-12));
    }

    #[test]
    fn magenta_hue_wraps_into_range() {
        // Max channel red with blue > green gives a negative raw sextant.
        let hsl = Rgb::new(255, 0, 128).to_hsl();
        assert!(hsl.h > 0.9 && hsl.h < 1.0, "hue {}", hsl.h);
    }

    // ── HSL → RGB ────────────────────────────────────────────────────────

    #[test]
    fn hsl_roundtrip_primaries() {
        for rgb in [
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::BLACK,
            Rgb::WHITE,
        ] {
            assert_eq!(rgb.to_hsl().to_rgb(), rgb);
        }
    }

    #[test]
    fn hsl_roundtrip_can_lose_one_unit() {
        assert_eq!(Rgb::new(255, 255, 0).to_hsl().to_rgb(), Rgb::new(254, 255, 0));
    }

    #[test]
    fn hsl_to_rgb_truncates() {
        // 0.5 * 255 = 127.5 → 127
        assert_eq!(Hsl::new(0.0, 0.0, 0.5).to_rgb(), Rgb::new(127, 127, 127));
    }

    // ── Scaling ──────────────────────────────────────────────────────────

    #[test]
    fn scale_truncates_and_clamps() {
        let c = Rgb::new(10, 100, 200);
        assert_eq!(c.scale(0.5), Rgb::new(5, 50, 100));
        assert_eq!(c.scale(2.0), Rgb::new(20, 200, 255));
        assert_eq!(c.scale(-1.0), Rgb::BLACK);
        assert_eq!(Rgb::new(3, 3, 3).scale(0.5), Rgb::new(1, 1, 1));
    }

    #[test]
    fn tint_moves_toward_white() {
        let c = Rgb::new(78, 176, 98);
        assert_eq!(c.tint(0.0), c);
        assert_eq!(c.tint(1.0), Rgb::WHITE);
        // 78 + 177 * 0.5 = 166.5 → 166
        assert_eq!(c.tint(0.5), Rgb::new(166, 215, 176));
    }

    // ── Hue rotation ─────────────────────────────────────────────────────

    #[test]
    fn rotate_red_to_green_and_blue() {
        assert_eq!(rotate_hue_hex("#ff0000", 120).unwrap(), "#00ff00");
        assert_eq!(rotate_hue_hex("#ff0000", -120).unwrap(), "#0000ff");
    }

    #[test]
    fn rotate_full_turn_is_identity() {
        let c = Rgb::new(255, 0, 0);
        assert_eq!(c.rotate_hue(360.0), c);
    }

    #[test]
    fn rotate_rejects_bad_hex() {
        assert!(rotate_hue_hex("#12", 10).is_err());
    }

    #[test]
    fn rotation_logo_reference_to_green() {
        let logo = Rgb::new(0x81, 0x5e, 0xe8);
        let green = Rgb::new(80, 180, 100);
        assert_eq!(hue_rotation_degrees(logo, green), -123);
        assert_eq!(hue_rotation_degrees(green, logo), 123);
    }

    #[test]
    fn rotation_takes_short_way_round() {
        // 350° → 10° is +20, not −340.
        let from = Hsl::new(350.0 / 360.0, 1.0, 0.5).to_rgb();
        let to = Hsl::new(10.0 / 360.0, 1.0, 0.5).to_rgb();
        let deg = hue_rotation_degrees(from, to);
        assert!((19..=21).contains(&deg), "rotation {deg}");
        assert_eq!(hue_rotation_degrees(to, from), -deg);
    }

    #[test]
    fn rotation_is_antisymmetric_and_bounded() {
        let samples = [
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(80, 180, 100),
            Rgb::new(0x81, 0x5e, 0xe8),
            Rgb::new(250, 10, 120),
            Rgb::new(12, 200, 230),
            Rgb::new(128, 128, 128),
        ];
        for a in samples {
            for b in samples {
                let ab = hue_rotation_degrees(a, b);
                let ba = hue_rotation_degrees(b, a);
                assert_eq!(ab, -ba, "{a} → {b}");
                assert!((-180..=180).contains(&ab), "{a} → {b}: {ab}");
            }
        }
    }

    #[test]
    fn rotation_to_self_is_zero() {
        let c = Rgb::new(12, 200, 230);
        assert_eq!(hue_rotation_degrees(c, c), 0);
    }
}
