// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors surfaced by style lookup and conversion.
//!
//! Both kinds are deterministic: the same inputs always produce the same error,
//! so callers should never retry.

use thiserror::Error;

use crate::config::Style;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StylizeError {
    /// No transformer is registered for the requested style.
    #[error("Unsupported style '{0}': no transformer is registered for it")]
    UnsupportedStyle(Style),

    /// The caller broke the input contract (missing source, unknown style name).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type StylizeResult<T> = Result<T, StylizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_style_names_the_style() {
        let err = StylizeError::UnsupportedStyle(Style::LowerCamelSnake);
        assert_eq!(
            err.to_string(),
            "Unsupported style 'lower_camel_snake': no transformer is registered for it"
        );
    }
}
