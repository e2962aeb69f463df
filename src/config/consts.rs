/// Joins words for `Title`
pub const TITLE_SEPARATOR: &str = " ";
/// Joins words for the `*Snake` styles
pub const SNAKE_SEPARATOR: &str = "_";
/// Joins words for the `*Dash` styles and `Train`
pub const DASH_SEPARATOR: &str = "-";
/// Characters other than whitespace that mark an explicit word boundary
pub const WORD_SEPARATORS: [char; 2] = ['_', '-'];
