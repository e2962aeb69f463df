use crate::config::Style;
use crate::errors::StylizeResult;

/// Method-call form of [`stylize`](crate::stylize).
///
/// ```rust
/// use stylize::{Style, Stylized};
///
/// assert_eq!("HTTPServer".stylized(Style::LowerSnake).unwrap(), "http_server");
/// ```
pub trait Stylized {
    fn stylized(&self, style: Style) -> StylizeResult<String>;
}

impl Stylized for str {
    fn stylized(&self, style: Style) -> StylizeResult<String> {
        crate::stylize(self, style)
    }
}

impl Stylized for String {
    fn stylized(&self, style: Style) -> StylizeResult<String> {
        self.as_str().stylized(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_and_string_agree() {
        let owned = String::from("user_account-id");
        for style in Style::ALL {
            assert_eq!(
                owned.stylized(style).unwrap(),
                "user_account-id".stylized(style).unwrap()
            );
        }
    }

    #[test]
    fn test_stylized_uses_global_registry() {
        assert_eq!("hello world".stylized(Style::UpperCamel).unwrap(), "HelloWorld");
    }
}
