// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::StylizeError;

/// Target casing convention.
///
/// The set is closed: every value has exactly one transformer in the
/// [`TransformerFactory`](crate::registry::TransformerFactory) table.
///
/// # Variants
/// * `Lower` - lowercase
/// * `Upper` - UPPERCASE
/// * `Title` - Title Case
/// * `LowerCamel` - lowerCamelCase
/// * `UpperCamel` - UpperCamelCase
/// * `LowerSnake` - lower_snake_case
/// * `UpperSnake` - UPPER_SNAKE_CASE
/// * `LowerCamelSnake` - lower_Camel_Snake_Case
/// * `UpperCamelSnake` - Upper_Camel_Snake_Case
/// * `LowerDash` - lower-dash
/// * `UpperDash` - UPPER-DASH
/// * `Train` - Train-Case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    Lower,
    Upper,
    Title,
    LowerCamel,
    UpperCamel,
    LowerSnake,
    UpperSnake,
    LowerCamelSnake,
    UpperCamelSnake,
    LowerDash,
    UpperDash,
    Train,
}

impl Style {
    /// Every style, in declaration order.
    pub const ALL: [Style; 12] = [
        Style::Lower,
        Style::Upper,
        Style::Title,
        Style::LowerCamel,
        Style::UpperCamel,
        Style::LowerSnake,
        Style::UpperSnake,
        Style::LowerCamelSnake,
        Style::UpperCamelSnake,
        Style::LowerDash,
        Style::UpperDash,
        Style::Train,
    ];

    /// Canonical snake_case key, matching the serde representation.
    pub fn name(&self) -> &'static str {
        match self {
            Style::Lower => "lower",
            Style::Upper => "upper",
            Style::Title => "title",
            Style::LowerCamel => "lower_camel",
            Style::UpperCamel => "upper_camel",
            Style::LowerSnake => "lower_snake",
            Style::UpperSnake => "upper_snake",
            Style::LowerCamelSnake => "lower_camel_snake",
            Style::UpperCamelSnake => "upper_camel_snake",
            Style::LowerDash => "lower_dash",
            Style::UpperDash => "upper_dash",
            Style::Train => "train",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = StylizeError;

    /// Accepts the canonical key in any case, with `-` standing in for `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        Style::ALL
            .into_iter()
            .find(|style| style.name() == key)
            .ok_or_else(|| StylizeError::InvalidArgument(format!("unknown style '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trips_through_from_str() {
        for style in Style::ALL {
            assert_eq!(style.name().parse::<Style>().unwrap(), style);
        }
    }

    #[test]
    fn test_from_str_is_lenient_about_case_and_dashes() {
        assert_eq!("Lower-Camel".parse::<Style>().unwrap(), Style::LowerCamel);
        assert_eq!(" TRAIN ".parse::<Style>().unwrap(), Style::Train);
        assert_eq!("upper_camel_snake".parse::<Style>().unwrap(), Style::UpperCamelSnake);
    }

    #[test]
    fn test_from_str_rejects_unknown_style() {
        let err = "kebab".parse::<Style>().unwrap_err();
        assert!(matches!(err, StylizeError::InvalidArgument(_)));
        assert!(err.to_string().contains("kebab"));
    }

    #[test]
    fn test_serde_uses_snake_case_names() {
        let styles: Vec<Style> = serde_yaml::from_str("[lower_camel_snake, train]").unwrap();
        assert_eq!(styles, vec![Style::LowerCamelSnake, Style::Train]);

        let yaml = serde_yaml::to_string(&Style::UpperDash).unwrap();
        assert_eq!(yaml.trim(), "upper_dash");
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(Style::UpperSnake.to_string(), "upper_snake");
    }
}
