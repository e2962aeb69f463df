// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod whole_string;
pub mod word_joined;
pub mod words;

pub use whole_string::*;
pub use word_joined::*;
pub use words::{capitalize, split_words};
