// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::config::Style;
use crate::traits::CaseTransformer;
use crate::transformers::{WholeStringTransformer, WordJoinedTransformer};

/// Builds a fresh transformer; takes no arguments.
pub type TransformerConstructor = fn() -> Arc<dyn CaseTransformer>;

/// Static table of transformer constructors, one per [`Style`].
pub struct TransformerFactory;

impl TransformerFactory {
    /// Constructor for `style`.
    ///
    /// - `Lower`, `Upper` -> WholeStringTransformer
    /// - every other style -> WordJoinedTransformer with that style's layout
    pub fn constructor(style: Style) -> TransformerConstructor {
        match style {
            // Whole-string transforms
            Style::Lower => || Arc::new(WholeStringTransformer::lower()),
            Style::Upper => || Arc::new(WholeStringTransformer::upper()),

            // Word-based transforms
            Style::Title => || Arc::new(WordJoinedTransformer::title()),
            Style::LowerCamel => || Arc::new(WordJoinedTransformer::lower_camel()),
            Style::UpperCamel => || Arc::new(WordJoinedTransformer::upper_camel()),
            Style::LowerSnake => || Arc::new(WordJoinedTransformer::lower_snake()),
            Style::UpperSnake => || Arc::new(WordJoinedTransformer::upper_snake()),
            Style::LowerCamelSnake => || Arc::new(WordJoinedTransformer::lower_camel_snake()),
            Style::UpperCamelSnake => || Arc::new(WordJoinedTransformer::upper_camel_snake()),
            Style::LowerDash => || Arc::new(WordJoinedTransformer::lower_dash()),
            Style::UpperDash => || Arc::new(WordJoinedTransformer::upper_dash()),
            Style::Train => || Arc::new(WordJoinedTransformer::train()),
        }
    }

    /// Create a transformer instance for `style`
    pub fn create_transformer(style: Style) -> Arc<dyn CaseTransformer> {
        Self::constructor(style)()
    }

    /// List all styles the factory can build
    pub fn list_available_styles() -> Vec<Style> {
        Style::ALL.to_vec()
    }

    /// Check if a style is available
    pub fn is_style_available(style: Style) -> bool {
        Self::list_available_styles().contains(&style)
    }
}
