//! Shape matchers
//!
//! Every token class is recognized by one regular expression over its surface
//! syntax. The matchers form a fixed, ordered list and the first one that
//! matches at a position wins:
//!
//! 1. comment         `<!-- ... -->`
//! 2. close           `</name>`
//! 3. self-contained  `<name .../>`
//! 4. open            `<name ...>`
//! 5. text            anything without angle brackets
//!
//! Comment and self-contained must be tried before open: the open body accepts
//! both of them otherwise.

use once_cell::sync::Lazy;
use regex::Regex;

use super::token::TokenType;

const COMMENT: &str = r"(?s)<!--.*?-->";
const CLOSE: &str = r"<\s*/\s*[\w:.\-]+\s*>";
const SELF_CONTAINED: &str = r"<[^/<>][^<>]*/\s*>";
const OPEN: &str = r"<[^/<>](?:[^<>]*[^/<>])?>";
// Starts and ends on non-whitespace so that layout never leaks into a token.
const TEXT: &str = r"[^<>\s](?:[^<>]*[^<>\s])?";

/// A compiled shape: one pattern anchored two ways.
struct Shape {
    kind: TokenType,
    /// Anchored at the start only, for scanning.
    prefix: Regex,
    /// Anchored at both ends, for classifying a complete string.
    whole: Regex,
}

impl Shape {
    fn new(kind: TokenType, pattern: &str) -> Self {
        Self {
            kind,
            prefix: Regex::new(&format!("^(?:{pattern})")).expect("shape pattern compiles"),
            whole: Regex::new(&format!("^(?:{pattern})$")).expect("shape pattern compiles"),
        }
    }
}

static SHAPES: Lazy<[Shape; 5]> = Lazy::new(|| {
    [
        Shape::new(TokenType::Comment, COMMENT),
        Shape::new(TokenType::Close, CLOSE),
        Shape::new(TokenType::SelfContained, SELF_CONTAINED),
        Shape::new(TokenType::Open, OPEN),
        Shape::new(TokenType::Text, TEXT),
    ]
});

/// Match the start of `rest` against the shapes in priority order.
///
/// Returns the shape and the byte length of the match.
pub(crate) fn match_prefix(rest: &str) -> Option<(TokenType, usize)> {
    SHAPES
        .iter()
        .find_map(|shape| shape.prefix.find(rest).map(|m| (shape.kind, m.end())))
}

pub(crate) fn classify(text: &str) -> Option<TokenType> {
    SHAPES
        .iter()
        .find(|shape| shape.whole.is_match(text))
        .map(|shape| shape.kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_shapes() {
        assert_eq!(classify("<a>"), Some(TokenType::Open));
        assert_eq!(classify("<book id=\"1\">"), Some(TokenType::Open));
        assert_eq!(classify("<?xml version=\"1.0\"?>"), Some(TokenType::Open));
        assert_eq!(classify("<ns:item x='a/b'>"), Some(TokenType::Open));
    }

    #[test]
    fn test_self_contained_beats_open() {
        assert_eq!(classify("<a/>"), Some(TokenType::SelfContained));
        assert_eq!(classify("<br />"), Some(TokenType::SelfContained));
        assert_eq!(
            classify("<img src=\"x.png\"/>"),
            Some(TokenType::SelfContained)
        );
    }

    #[test]
    fn test_close_shapes() {
        assert_eq!(classify("</book>"), Some(TokenType::Close));
        assert_eq!(classify("< / book >"), Some(TokenType::Close));
        assert_eq!(classify("</ns:book>"), Some(TokenType::Close));
    }

    #[test]
    fn test_comment_beats_open() {
        assert_eq!(classify("<!-- note -->"), Some(TokenType::Comment));
        assert_eq!(classify("<!-- a <b> c -->"), Some(TokenType::Comment));
    }

    #[test]
    fn test_text_shapes() {
        assert_eq!(classify("hello"), Some(TokenType::Text));
        assert_eq!(classify("Hello, world & co."), Some(TokenType::Text));
        assert_eq!(classify(" padded"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_unrecognized() {
        assert_eq!(classify("<"), None);
        assert_eq!(classify(">"), None);
        assert_eq!(classify("</>"), None);
    }

    #[test]
    fn test_match_prefix_stops_at_first_tag() {
        assert_eq!(match_prefix("<a><b>"), Some((TokenType::Open, 3)));
        assert_eq!(match_prefix("text</a>"), Some((TokenType::Text, 4)));
        assert_eq!(match_prefix("<!--x--><a>"), Some((TokenType::Comment, 8)));
        assert_eq!(match_prefix("> rest"), None);
    }
}
