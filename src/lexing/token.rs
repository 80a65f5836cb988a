//! Token definitions
//!
//! A token is an immutable slice of the source document together with the
//! shape it was recognized as. The shape is decided once, by the lexer, and
//! carried on the token from then on.

use serde::Serialize;
use std::fmt;

use super::shapes;

/// The lexical shape of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenType {
    /// `<book id="1">`, `<?xml version="1.0"?>`
    Open,
    /// `</book>`
    Close,
    /// `<br/>`
    SelfContained,
    /// A run of character data.
    Text,
    /// `<!-- ... -->`, opaque like text but laid out as a leaf.
    Comment,
    /// No neighbour. Only used as the previous type of the first token and the
    /// next type of the last one.
    None,
}

impl TokenType {
    /// Classify a complete string by shape, trying the matchers in priority order.
    ///
    /// Returns `None` if the whole string matches no shape. For every token
    /// produced by the lexer this returns the token's own type.
    pub fn classify(text: &str) -> Option<TokenType> {
        shapes::classify(text)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenType::Open => "open",
            TokenType::Close => "close",
            TokenType::SelfContained => "self-contained",
            TokenType::Text => "text",
            TokenType::Comment => "comment",
            TokenType::None => "none",
        };
        f.write_str(name)
    }
}

/// A single token of the source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    text: String,
    kind: TokenType,
    offset: usize,
}

impl Token {
    pub(crate) fn new(text: &str, kind: TokenType, offset: usize) -> Self {
        Self {
            text: text.to_string(),
            kind,
            offset,
        }
    }

    /// Raw text exactly as it appeared in the source.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> TokenType {
        self.kind
    }

    /// Byte offset of the token in the (newline-stripped) source.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A run of characters that matched none of the shapes and was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRun {
    pub offset: usize,
    pub text: String,
}
