// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors produced while turning user input into colors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input was not exactly six hex digits (optionally prefixed by `#`).
    #[error("invalid hex color {0:?}: expected 6 hex digits like #50B464")]
    InvalidFormat(String),
}
