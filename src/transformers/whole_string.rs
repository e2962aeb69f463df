// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::Style;
use crate::traits::CaseTransformer;

/// Case-maps the whole input without looking at word boundaries.
///
/// Every character, separators included, keeps its position.
pub struct WholeStringTransformer {
    style: Style,
}

impl WholeStringTransformer {
    pub fn lower() -> Self {
        Self { style: Style::Lower }
    }

    pub fn upper() -> Self {
        Self { style: Style::Upper }
    }
}

impl CaseTransformer for WholeStringTransformer {
    fn adapt(&self, input: &str) -> String {
        match self.style {
            Style::Upper => input.to_uppercase(),
            _ => input.to_lowercase(),
        }
    }

    fn style(&self) -> Style {
        self.style
    }

    fn name(&self) -> &'static str {
        "whole_string"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_string_transforms() {
        let test_cases = vec![
            (WholeStringTransformer::upper(), "hello world", "HELLO WORLD"),
            (WholeStringTransformer::upper(), "snake_case-and dash", "SNAKE_CASE-AND DASH"),
            (WholeStringTransformer::lower(), "Hello World", "hello world"),
            (WholeStringTransformer::lower(), "HTTPServer_V2", "httpserver_v2"),
            (WholeStringTransformer::lower(), "", ""),
            (WholeStringTransformer::upper(), "42 + 1!", "42 + 1!"),
        ];

        for (transformer, input, expected) in test_cases {
            assert_eq!(
                transformer.adapt(input),
                expected,
                "{} on {:?}",
                transformer.style(),
                input
            );
        }
    }

    #[test]
    fn test_whole_string_styles() {
        assert_eq!(WholeStringTransformer::lower().style(), Style::Lower);
        assert_eq!(WholeStringTransformer::upper().style(), Style::Upper);
    }
}
