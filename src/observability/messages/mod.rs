// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! # Organization
//!
//! * `config` - Config loading and validation warnings and errors
//! * `registry` - Registry lifecycle and lookup events
//! * `transformer` - Conversion events

use tracing::Span;

pub mod config;
pub mod registry;
pub mod transformer;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog: std::fmt::Display {
    /// Emit the message as a `tracing` event at its documented level.
    fn log(&self);

    /// Open a span carrying the same fields as the event.
    fn span(&self, name: &str) -> Span;
}
