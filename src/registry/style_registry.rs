// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use crate::config::{Style, StylizeConfig};
use crate::errors::{StylizeError, StylizeResult};
use crate::observability::messages::registry::{
    RegistryBuilt, TransformerInstantiated, UnsupportedStyleRequested,
};
use crate::observability::messages::transformer::TransformationCompleted;
use crate::observability::messages::StructuredLog;
use crate::registry::{TransformerConstructor, TransformerFactory};
use crate::traits::CaseTransformer;

struct RegistryEntry {
    construct: TransformerConstructor,
    instance: OnceLock<Arc<dyn CaseTransformer>>,
}

/// Maps each registered [`Style`] to its transformer.
///
/// The set of registered styles is fixed when the registry is built. Each
/// transformer is constructed on the first lookup of its style and the same
/// instance is returned afterwards; concurrent first lookups construct it at
/// most once.
///
/// # Examples
///
/// ```rust
/// use stylize::{Style, StyleRegistry, StylizeError};
///
/// let registry = StyleRegistry::with_styles([Style::LowerSnake]);
/// assert_eq!(registry.stylize_with("helloWorld", Style::LowerSnake).unwrap(), "hello_world");
/// assert_eq!(
///     registry.get(Style::Train).err(),
///     Some(StylizeError::UnsupportedStyle(Style::Train))
/// );
/// ```
pub struct StyleRegistry {
    entries: BTreeMap<Style, RegistryEntry>,
}

impl StyleRegistry {
    /// Registry serving every style.
    pub fn new() -> Self {
        Self::with_styles(TransformerFactory::list_available_styles())
    }

    /// Registry serving only `styles`. Repeated styles are registered once.
    pub fn with_styles(styles: impl IntoIterator<Item = Style>) -> Self {
        let entries: BTreeMap<Style, RegistryEntry> = styles
            .into_iter()
            .map(|style| {
                let entry = RegistryEntry {
                    construct: TransformerFactory::constructor(style),
                    instance: OnceLock::new(),
                };
                (style, entry)
            })
            .collect();

        RegistryBuilt {
            style_count: entries.len(),
        }
        .log();

        Self { entries }
    }

    /// Registry serving the styles selected by `cfg`.
    pub fn from_config(cfg: &StylizeConfig) -> Self {
        Self::with_styles(cfg.resolved_styles())
    }

    /// Process-wide registry with every style registered, built on first use.
    pub fn global() -> &'static StyleRegistry {
        static GLOBAL: OnceLock<StyleRegistry> = OnceLock::new();
        GLOBAL.get_or_init(StyleRegistry::new)
    }

    /// Transformer for `style`, constructing and caching it on first request.
    pub fn get(&self, style: Style) -> StylizeResult<Arc<dyn CaseTransformer>> {
        let Some(entry) = self.entries.get(&style) else {
            UnsupportedStyleRequested {
                style: style.name(),
                registered_count: self.entries.len(),
            }
            .log();
            return Err(StylizeError::UnsupportedStyle(style));
        };

        let transformer = entry.instance.get_or_init(|| {
            let transformer = (entry.construct)();
            TransformerInstantiated {
                style: style.name(),
                transformer: transformer.name(),
            }
            .log();
            transformer
        });

        Ok(Arc::clone(transformer))
    }

    /// Convert `source` with this registry's transformer for `style`.
    pub fn stylize_with(&self, source: &str, style: Style) -> StylizeResult<String> {
        let transformer = self.get(style)?;
        let output = transformer.adapt(source);

        TransformationCompleted {
            style: style.name(),
            input_len: source.len(),
            output_len: output.len(),
        }
        .log();

        Ok(output)
    }

    /// Registered styles, in declaration order.
    pub fn registered_styles(&self) -> Vec<Style> {
        self.entries.keys().copied().collect()
    }

    pub fn is_registered(&self, style: Style) -> bool {
        self.entries.contains_key(&style)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StyleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleRegistry")
            .field("styles", &self.registered_styles())
            .finish()
    }
}
