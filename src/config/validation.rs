// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Configuration validation.
//!
//! Checks run in order and every failure is collected, so a single pass
//! reports all problems in a config:
//!
//! 1. **Non-empty list**: an explicit `styles: []` is rejected
//! 2. **Uniqueness**: each style may be listed once
//!
//! ```rust
//! use stylize::config::{validate_config, StylizeConfig};
//! use stylize::errors::ValidationError;
//! use stylize::Style;
//!
//! let cfg = StylizeConfig::with_styles([Style::Lower, Style::Lower]);
//! let errors = validate_config(&cfg).unwrap_err();
//! assert_eq!(errors, vec![ValidationError::DuplicateStyle { style: Style::Lower }]);
//! ```

use std::collections::HashSet;

use crate::config::StylizeConfig;
use crate::errors::ValidationError;
use crate::observability::messages::config::{DuplicateStyleDetected, EmptyStyleListDetected};
use crate::observability::messages::StructuredLog;

/// Validate a registry configuration, returning every rule it breaks.
pub fn validate_config(cfg: &StylizeConfig) -> Result<(), Vec<ValidationError>> {
    let Some(styles) = &cfg.styles else {
        return Ok(());
    };

    let mut errors = Vec::new();

    if styles.is_empty() {
        EmptyStyleListDetected.log();
        errors.push(ValidationError::EmptyStyleList);
    }

    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for style in styles {
        if !seen.insert(*style) && reported.insert(*style) {
            DuplicateStyleDetected {
                style: style.name(),
            }
            .log();
            errors.push(ValidationError::DuplicateStyle { style: *style });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Style;

    #[test]
    fn test_validate_config_table_driven() {
        struct TestCase {
            name: &'static str,
            config: StylizeConfig,
            expected: Result<(), Vec<ValidationError>>,
        }

        let test_cases = vec![
            TestCase {
                name: "styles omitted",
                config: StylizeConfig::default(),
                expected: Ok(()),
            },
            TestCase {
                name: "distinct styles",
                config: StylizeConfig::with_styles([Style::Lower, Style::Train]),
                expected: Ok(()),
            },
            TestCase {
                name: "empty list",
                config: StylizeConfig::with_styles(Vec::<Style>::new()),
                expected: Err(vec![ValidationError::EmptyStyleList]),
            },
            TestCase {
                name: "duplicate reported once",
                config: StylizeConfig::with_styles([
                    Style::Title,
                    Style::Title,
                    Style::Upper,
                    Style::Title,
                ]),
                expected: Err(vec![ValidationError::DuplicateStyle { style: Style::Title }]),
            },
            TestCase {
                name: "several duplicates",
                config: StylizeConfig::with_styles([
                    Style::Upper,
                    Style::Lower,
                    Style::Lower,
                    Style::Upper,
                ]),
                expected: Err(vec![
                    ValidationError::DuplicateStyle { style: Style::Lower },
                    ValidationError::DuplicateStyle { style: Style::Upper },
                ]),
            },
        ];

        for test_case in test_cases {
            assert_eq!(
                validate_config(&test_case.config),
                test_case.expected,
                "Test case '{}'",
                test_case.name
            );
        }
    }
}
