// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Word-boundary detection.
//!
//! A boundary is placed, in order of precedence:
//!
//! 1. at any whitespace, `_` or `-`; the separator itself is dropped
//! 2. between a lowercase letter and a following uppercase letter (`helloWorld`)
//! 3. before the last letter of an uppercase run that is followed by a lowercase
//!    letter, so acronyms stay whole (`HTTPServer` -> `HTTP`, `Server`)
//! 4. on either side of a run of ASCII digits that touches a letter (`v2beta`)
//!
//! Any other character (punctuation, symbols) never starts a boundary and stays
//! inside the word it appears in.

use crate::config::consts::WORD_SEPARATORS;

fn is_separator(c: char) -> bool {
    c.is_whitespace() || WORD_SEPARATORS.contains(&c)
}

fn is_boundary(prev: char, current: char, next: Option<char>) -> bool {
    if prev.is_lowercase() && current.is_uppercase() {
        return true;
    }
    if prev.is_uppercase() && current.is_uppercase() && next.is_some_and(char::is_lowercase) {
        return true;
    }
    (prev.is_ascii_digit() && current.is_alphabetic())
        || (prev.is_alphabetic() && current.is_ascii_digit())
}

/// Split `input` into words, borrowing each word from the input.
///
/// ```rust
/// use stylize::transformers::split_words;
///
/// assert_eq!(split_words("parseHTTPResponse_v2"), vec!["parse", "HTTP", "Response", "v", "2"]);
/// assert!(split_words(" -_ ").is_empty());
/// ```
pub fn split_words(input: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = input.char_indices().collect();
    let mut words = Vec::new();
    let mut word_start: Option<usize> = None;

    for (i, &(offset, current)) in chars.iter().enumerate() {
        if is_separator(current) {
            if let Some(start) = word_start.take() {
                words.push(&input[start..offset]);
            }
            continue;
        }

        match word_start {
            // A word is open, so the previous char is part of it (never a separator).
            Some(start) => {
                let prev = chars[i - 1].1;
                let next = chars.get(i + 1).map(|&(_, c)| c);
                if is_boundary(prev, current, next) {
                    words.push(&input[start..offset]);
                    word_start = Some(offset);
                }
            }
            None => word_start = Some(offset),
        }
    }

    if let Some(start) = word_start {
        words.push(&input[start..]);
    }

    words
}

/// First character uppercased, the rest lowercased.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words_table_driven() {
        let test_cases: Vec<(&str, Vec<&str>)> = vec![
            ("", vec![]),
            ("hello", vec!["hello"]),
            ("hello world", vec!["hello", "world"]),
            ("hello_world", vec!["hello", "world"]),
            ("hello-world", vec!["hello", "world"]),
            ("  hello \t\n world  ", vec!["hello", "world"]),
            ("hello__--world", vec!["hello", "world"]),
            ("helloWorld", vec!["hello", "World"]),
            ("HelloWorld", vec!["Hello", "World"]),
            ("HTTPServer", vec!["HTTP", "Server"]),
            ("getHTTPResponseCode", vec!["get", "HTTP", "Response", "Code"]),
            ("ABC", vec!["ABC"]),
            ("aB", vec!["a", "B"]),
            ("version2", vec!["version", "2"]),
            ("abc123def", vec!["abc", "123", "def"]),
            ("2fast", vec!["2", "fast"]),
            ("HTML5Parser", vec!["HTML", "5", "Parser"]),
            ("123", vec!["123"]),
            ("hello, world!", vec!["hello,", "world!"]),
            ("v1.2", vec!["v", "1.2"]),
            ("ÉcoleNormale", vec!["École", "Normale"]),
            ("---", vec![]),
        ];

        for (input, expected) in test_cases {
            assert_eq!(split_words(input), expected, "split_words({:?})", input);
        }
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("hELLO"), "Hello");
        assert_eq!(capitalize("HTTP"), "Http");
        assert_eq!(capitalize("123"), "123");
        assert_eq!(capitalize("éCOLE"), "École");
    }
}
