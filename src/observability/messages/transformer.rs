// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for individual conversions.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A string was converted.
///
/// # Log Level
/// `trace!` - Emitted on every call
pub struct TransformationCompleted<'a> {
    pub style: &'a str,
    pub input_len: usize,
    pub output_len: usize,
}

impl Display for TransformationCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Stylized to '{}': input={} bytes, output={} bytes",
            self.style, self.input_len, self.output_len
        )
    }
}

impl StructuredLog for TransformationCompleted<'_> {
    fn log(&self) {
        tracing::trace!(
            style = self.style,
            input_len = self.input_len,
            output_len = self.output_len,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "stylize",
            span_name = name,
            style = self.style,
            input_len = self.input_len,
        )
    }
}
