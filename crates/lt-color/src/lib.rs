// SPDX-License-Identifier: MIT
//
// lt-color — color primitives for linktint.
//
// Everything the theme engine needs to know about a color lives here:
// parsing `#RRGGBB`, converting between 8-bit RGB and HSL, formatting as
// CSS `rgb()` / `rgba()` values, and rotating hues. The crate is a leaf:
// no I/O, no logging, no state. Every function is a pure transform over
// small `Copy` value types.

pub mod color;
pub mod error;

pub use color::{Hsl, Rgb, hue_rotation_degrees, rotate_hue_hex};
pub use error::ColorError;
