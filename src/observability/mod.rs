// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! All diagnostic output goes through struct-based message types that implement
//! `Display` and [`messages::StructuredLog`], so log text lives in one place and
//! every event carries the same structured fields wherever it is emitted.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::config` - Config loading and validation events
//! * `messages::registry` - Registry construction and style lookup events
//! * `messages::transformer` - Per-call conversion events
//!
//! The library only emits events; installing a subscriber is left to the host
//! application.
//!
//! # Usage
//!
//! ```rust
//! use stylize::observability::messages::registry::TransformerInstantiated;
//! use stylize::observability::messages::StructuredLog;
//!
//! TransformerInstantiated {
//!     style: "train",
//!     transformer: "word_joined",
//! }
//! .log();
//! ```

pub mod messages;
