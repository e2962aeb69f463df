// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DASH_SEPARATOR, SNAKE_SEPARATOR, TITLE_SEPARATOR};
use crate::config::Style;
use crate::traits::CaseTransformer;
use super::words::{capitalize, split_words};

/// How a single word is cased before joining.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCase {
    Lower,
    Upper,
    Capitalized,
}

impl WordCase {
    pub fn apply(&self, word: &str) -> String {
        match self {
            WordCase::Lower => word.to_lowercase(),
            WordCase::Upper => word.to_uppercase(),
            WordCase::Capitalized => capitalize(word),
        }
    }
}

/// Layout of a word-joined style: casing of the first word, casing of every
/// following word, and the separator placed between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordJoinedConfig {
    pub first: WordCase,
    pub rest: WordCase,
    pub separator: &'static str,
}

/// Splits the input into words, re-cases each one and joins them.
pub struct WordJoinedTransformer {
    style: Style,
    config: WordJoinedConfig,
}

impl WordJoinedTransformer {
    pub fn new(style: Style, config: WordJoinedConfig) -> Self {
        Self { style, config }
    }

    fn uniform(style: Style, case: WordCase, separator: &'static str) -> Self {
        Self::new(
            style,
            WordJoinedConfig {
                first: case,
                rest: case,
                separator,
            },
        )
    }

    /// `Title Case`
    pub fn title() -> Self {
        Self::uniform(Style::Title, WordCase::Capitalized, TITLE_SEPARATOR)
    }

    /// `lowerCamelCase`
    pub fn lower_camel() -> Self {
        Self::new(
            Style::LowerCamel,
            WordJoinedConfig {
                first: WordCase::Lower,
                rest: WordCase::Capitalized,
                separator: "",
            },
        )
    }

    /// `UpperCamelCase`
    pub fn upper_camel() -> Self {
        Self::uniform(Style::UpperCamel, WordCase::Capitalized, "")
    }

    /// `lower_snake_case`
    pub fn lower_snake() -> Self {
        Self::uniform(Style::LowerSnake, WordCase::Lower, SNAKE_SEPARATOR)
    }

    /// `UPPER_SNAKE_CASE`
    pub fn upper_snake() -> Self {
        Self::uniform(Style::UpperSnake, WordCase::Upper, SNAKE_SEPARATOR)
    }

    /// `lower_Camel_Snake_Case`
    pub fn lower_camel_snake() -> Self {
        Self::new(
            Style::LowerCamelSnake,
            WordJoinedConfig {
                first: WordCase::Lower,
                rest: WordCase::Capitalized,
                separator: SNAKE_SEPARATOR,
            },
        )
    }

    /// `Upper_Camel_Snake_Case`
    pub fn upper_camel_snake() -> Self {
        Self::uniform(Style::UpperCamelSnake, WordCase::Capitalized, SNAKE_SEPARATOR)
    }

    /// `lower-dash`
    pub fn lower_dash() -> Self {
        Self::uniform(Style::LowerDash, WordCase::Lower, DASH_SEPARATOR)
    }

    /// `UPPER-DASH`
    pub fn upper_dash() -> Self {
        Self::uniform(Style::UpperDash, WordCase::Upper, DASH_SEPARATOR)
    }

    /// `Train-Case`
    pub fn train() -> Self {
        Self::uniform(Style::Train, WordCase::Capitalized, DASH_SEPARATOR)
    }

    pub fn config(&self) -> WordJoinedConfig {
        self.config
    }
}

impl CaseTransformer for WordJoinedTransformer {
    fn adapt(&self, input: &str) -> String {
        split_words(input)
            .into_iter()
            .enumerate()
            .map(|(i, word)| {
                let case = if i == 0 { self.config.first } else { self.config.rest };
                case.apply(word)
            })
            .collect::<Vec<_>>()
            .join(self.config.separator)
    }

    fn style(&self) -> Style {
        self.style
    }

    fn name(&self) -> &'static str {
        "word_joined"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_joined_transforms() {
        let input = "parse HTTPResponse_code-v2";
        let test_cases = vec![
            (WordJoinedTransformer::title(), "Parse Http Response Code V 2"),
            (WordJoinedTransformer::lower_camel(), "parseHttpResponseCodeV2"),
            (WordJoinedTransformer::upper_camel(), "ParseHttpResponseCodeV2"),
            (WordJoinedTransformer::lower_snake(), "parse_http_response_code_v_2"),
            (WordJoinedTransformer::upper_snake(), "PARSE_HTTP_RESPONSE_CODE_V_2"),
            (WordJoinedTransformer::lower_camel_snake(), "parse_Http_Response_Code_V_2"),
            (WordJoinedTransformer::upper_camel_snake(), "Parse_Http_Response_Code_V_2"),
            (WordJoinedTransformer::lower_dash(), "parse-http-response-code-v-2"),
            (WordJoinedTransformer::upper_dash(), "PARSE-HTTP-RESPONSE-CODE-V-2"),
            (WordJoinedTransformer::train(), "Parse-Http-Response-Code-V-2"),
        ];

        for (transformer, expected) in test_cases {
            assert_eq!(
                transformer.adapt(input),
                expected,
                "Failed for style: {}",
                transformer.style()
            );
        }
    }

    #[test]
    fn test_word_joined_simple_inputs() {
        assert_eq!(WordJoinedTransformer::title().adapt("hello world"), "Hello World");
        assert_eq!(WordJoinedTransformer::title().adapt("the QUICK brown fox"), "The Quick Brown Fox");
        assert_eq!(WordJoinedTransformer::lower_camel().adapt("hello_world"), "helloWorld");
        assert_eq!(WordJoinedTransformer::lower_camel().adapt("Hello World"), "helloWorld");
        assert_eq!(WordJoinedTransformer::lower_snake().adapt("helloWorld"), "hello_world");
        assert_eq!(WordJoinedTransformer::upper_snake().adapt("maxRetryCount"), "MAX_RETRY_COUNT");
        assert_eq!(WordJoinedTransformer::train().adapt("hello world"), "Hello-World");
        assert_eq!(WordJoinedTransformer::lower_dash().adapt("UserAccount ID"), "user-account-id");
    }

    #[test]
    fn test_word_joined_edge_inputs() {
        for transformer in [
            WordJoinedTransformer::title(),
            WordJoinedTransformer::lower_camel(),
            WordJoinedTransformer::upper_snake(),
            WordJoinedTransformer::train(),
        ] {
            assert_eq!(transformer.adapt(""), "");
            assert_eq!(transformer.adapt("  __--  "), "");
        }

        // Non-letters keep their place inside words.
        assert_eq!(WordJoinedTransformer::lower_snake().adapt("hello, world!"), "hello,_world!");
        assert_eq!(WordJoinedTransformer::title().adapt("42"), "42");
        assert_eq!(WordJoinedTransformer::upper_camel().adapt("single"), "Single");
    }

    #[test]
    fn test_word_case_apply() {
        assert_eq!(WordCase::Lower.apply("MiXeD"), "mixed");
        assert_eq!(WordCase::Upper.apply("MiXeD"), "MIXED");
        assert_eq!(WordCase::Capitalized.apply("mIXED"), "Mixed");
    }

    #[test]
    fn test_custom_config() {
        let transformer = WordJoinedTransformer::new(
            Style::UpperDash,
            WordJoinedConfig {
                first: WordCase::Upper,
                rest: WordCase::Lower,
                separator: ".",
            },
        );
        assert_eq!(transformer.adapt("one two three"), "ONE.two.three");
        assert_eq!(transformer.config().separator, ".");
    }
}
