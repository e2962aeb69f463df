// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config::Style;
use crate::errors::ConfigError;
use crate::observability::messages::config::{ConfigLoadFailed, ConfigLoaded};
use crate::observability::messages::StructuredLog;

/// Registry configuration.
///
/// Selects which styles a [`StyleRegistry`](crate::registry::StyleRegistry) built
/// from this config will serve. Lookups for any other style fail with
/// `UnsupportedStyle`.
///
/// # Fields
/// * `styles` - Styles to register (optional, defaults to every style)
///
/// # Example
/// ```yaml
/// styles:
///   - lower
///   - upper
///   - lower_snake
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StylizeConfig {
    #[serde(default)]
    pub styles: Option<Vec<Style>>,
}

impl StylizeConfig {
    /// Config that registers only `styles`.
    pub fn with_styles(styles: impl IntoIterator<Item = Style>) -> Self {
        Self {
            styles: Some(styles.into_iter().collect()),
        }
    }

    /// The styles this config registers, with an omitted list meaning all of them.
    pub fn resolved_styles(&self) -> Vec<Style> {
        match &self.styles {
            Some(styles) => styles.clone(),
            None => Style::ALL.to_vec(),
        }
    }
}

/// Parse a config from YAML text
pub fn parse_config(yaml: &str) -> Result<StylizeConfig, ConfigError> {
    // An empty document means "all defaults".
    if yaml.trim().is_empty() {
        return Ok(StylizeConfig::default());
    }
    Ok(serde_yaml::from_str(yaml)?)
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<StylizeConfig, ConfigError> {
    let path = path.as_ref();
    let result = fs::read_to_string(path)
        .map_err(ConfigError::from)
        .and_then(|content| parse_config(&content));

    let display_path = path.display().to_string();
    match &result {
        Ok(cfg) => ConfigLoaded {
            path: &display_path,
            style_count: cfg.resolved_styles().len(),
        }
        .log(),
        Err(e) => ConfigLoadFailed {
            path: &display_path,
            error: e,
        }
        .log(),
    }

    result
}

/// Load and validate a config from a YAML file
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<StylizeConfig, ConfigError> {
    let cfg = load_config(path)?;
    crate::config::validate_config(&cfg).map_err(ConfigError::Invalid)?;
    Ok(cfg)
}
