// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod factory;
pub mod style_registry;

pub use factory::{TransformerConstructor, TransformerFactory};
pub use style_registry::StyleRegistry;
