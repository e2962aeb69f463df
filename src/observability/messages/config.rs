// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration loading and validation.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Config file read and parsed.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ConfigLoaded<'a> {
    pub path: &'a str,
    pub style_count: usize,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded stylize config from '{}': {} styles",
            self.path, self.style_count
        )
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(path = self.path, style_count = self.style_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "config_loaded",
            span_name = name,
            path = self.path,
            style_count = self.style_count,
        )
    }
}

/// Config file could not be read or parsed.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ConfigLoadFailed<'a> {
    pub path: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ConfigLoadFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Failed to load stylize config '{}': {}", self.path, self.error)
    }
}

impl StructuredLog for ConfigLoadFailed<'_> {
    fn log(&self) {
        tracing::error!(path = self.path, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "config_load_failed",
            span_name = name,
            path = self.path,
            error = %self.error,
        )
    }
}

/// A style appears more than once in the config.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use stylize::observability::messages::config::DuplicateStyleDetected;
///
/// let msg = DuplicateStyleDetected { style: "train" };
/// assert_eq!(msg.to_string(), "Duplicate style in config: 'train'");
/// ```
pub struct DuplicateStyleDetected<'a> {
    pub style: &'a str,
}

impl Display for DuplicateStyleDetected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Duplicate style in config: '{}'", self.style)
    }
}

impl StructuredLog for DuplicateStyleDetected<'_> {
    fn log(&self) {
        tracing::error!(style = self.style, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "duplicate_style",
            span_name = name,
            style = self.style,
        )
    }
}

/// The config lists styles explicitly but the list is empty.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct EmptyStyleListDetected;

impl Display for EmptyStyleListDetected {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Config declares an empty style list; every lookup would fail")
    }
}

impl StructuredLog for EmptyStyleListDetected {
    fn log(&self) {
        tracing::error!("{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(tracing::Level::ERROR, "empty_style_list", span_name = name)
    }
}
