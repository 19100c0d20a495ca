// SPDX-License-Identifier: MIT
//
// Error type shared by every crate that accepts a color argument.

use thiserror::Error;

/// A color argument failed hex-format validation.
///
/// The offending input is carried verbatim so callers can surface it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid hex color: {input}")]
    InvalidColor { input: String },
}

impl ColorError {
    pub(crate) fn invalid(input: &str) -> Self {
        Self::InvalidColor {
            input: input.to_owned(),
        }
    }
}
