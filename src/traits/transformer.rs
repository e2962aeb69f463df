use crate::config::Style;

/// Converts a string into exactly one casing [`Style`].
///
/// Implementations are stateless: `adapt` must be a pure function of its input,
/// so a single instance can be shared across threads and cached by the registry.
pub trait CaseTransformer: Send + Sync {
    fn adapt(&self, input: &str) -> String;

    fn style(&self) -> Style;

    fn name(&self) -> &'static str;
}
