// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for registry construction and style lookup.
//!
//! This module contains message types for logging events related to:
//! * Registry creation
//! * Lazy transformer instantiation
//! * Lookups for styles the registry does not serve

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Registry created.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use stylize::observability::messages::registry::RegistryBuilt;
///
/// let msg = RegistryBuilt { style_count: 12 };
/// assert_eq!(msg.to_string(), "Style registry built with 12 registered styles");
/// ```
pub struct RegistryBuilt {
    pub style_count: usize,
}

impl Display for RegistryBuilt {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Style registry built with {} registered styles",
            self.style_count
        )
    }
}

impl StructuredLog for RegistryBuilt {
    fn log(&self) {
        tracing::info!(style_count = self.style_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "registry_built",
            span_name = name,
            style_count = self.style_count,
        )
    }
}

/// A transformer was constructed and cached on first lookup of its style.
///
/// # Log Level
/// `debug!` - Lifecycle detail
pub struct TransformerInstantiated<'a> {
    pub style: &'a str,
    pub transformer: &'a str,
}

impl Display for TransformerInstantiated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Instantiated '{}' transformer for style '{}'",
            self.transformer, self.style
        )
    }
}

impl StructuredLog for TransformerInstantiated<'_> {
    fn log(&self) {
        tracing::debug!(style = self.style, transformer = self.transformer, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "transformer_instantiated",
            span_name = name,
            style = self.style,
            transformer = self.transformer,
        )
    }
}

/// Lookup for a style that has no registered transformer.
///
/// # Log Level
/// `warn!` - Caller asked for something this registry cannot serve
pub struct UnsupportedStyleRequested<'a> {
    pub style: &'a str,
    pub registered_count: usize,
}

impl Display for UnsupportedStyleRequested<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "No transformer registered for style '{}' ({} styles registered)",
            self.style, self.registered_count
        )
    }
}

impl StructuredLog for UnsupportedStyleRequested<'_> {
    fn log(&self) {
        tracing::warn!(
            style = self.style,
            registered_count = self.registered_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::WARN,
            "unsupported_style",
            span_name = name,
            style = self.style,
            registered_count = self.registered_count,
        )
    }
}
