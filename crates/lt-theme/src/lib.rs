//! # lt-theme — bookmark-manager stylesheets from one base color
//!
//! Every color in a generated theme is a point on a single contrast ramp
//! anchored on the base color. Changing the base color or flipping the
//! scheme produces a new, internally consistent theme.
//!
//! # Architecture
//!
//! ```text
//! base color + Scheme
//!     │
//!     ▼
//! ramp.rs:       neutral anchor, absolute positions, relative shifts
//!     │
//!     ├──▶ logo.rs:  hue-rotate filter for the fixed-color logo
//!     ▼
//! stylesheet.rs: fixed set of CSS custom properties, rendered as text
//! ```
//!
//! All arithmetic is done on 8-bit channels with truncation, so outputs are
//! stable across platforms.

pub mod logo;
pub mod ramp;
pub mod scheme;
pub mod stylesheet;

pub use logo::{LOGO_REFERENCE, LogoFilter};
pub use ramp::Ramp;
pub use scheme::Scheme;
pub use stylesheet::{Stylesheet, generate};
