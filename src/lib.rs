// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Convert text between casing conventions.
//!
//! ```rust
//! use stylize::{stylize, Style};
//!
//! assert_eq!(stylize("helloWorld", Style::LowerSnake).unwrap(), "hello_world");
//! assert_eq!(stylize("hello world", Style::Train).unwrap(), "Hello-World");
//! ```

pub mod config;        // styles + registry config
pub mod errors;        // error handling
pub mod observability;
pub mod registry;      // style -> transformer lookup
pub mod traits;        // unified abstractions
pub mod transformers;  // casing algorithms

pub use config::Style;
pub use errors::{StylizeError, StylizeResult};
pub use registry::StyleRegistry;
pub use traits::{CaseTransformer, Stylized};

/// Convert `source` to `style` using the process-wide registry.
pub fn stylize(source: &str, style: Style) -> StylizeResult<String> {
    StyleRegistry::global().stylize_with(source, style)
}

/// Like [`stylize`], but treats a missing source as a caller error.
pub fn stylize_optional(source: Option<&str>, style: Style) -> StylizeResult<String> {
    let source = source.ok_or_else(|| {
        StylizeError::InvalidArgument(format!("source string is required for style '{}'", style))
    })?;
    stylize(source, style)
}
