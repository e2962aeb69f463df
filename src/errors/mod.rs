// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod stylize;

pub use config::{ConfigError, ValidationError};
pub use stylize::{StylizeError, StylizeResult};
