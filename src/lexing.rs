//! Lexing
//!
//! Turns a flat XML document into an ordered list of [`Token`]s.
//!
//! The scan is a single left-to-right pass. At each position whitespace is
//! skipped, otherwise the shape matchers (see [`shapes`]) are tried in priority
//! order and the first match becomes a token. Characters that match no shape
//! are skipped as well; adjacent ones are coalesced into a [`SkippedRun`] so the
//! caller can tell that the input was not fully understood. Lexing never fails.

mod shapes;
mod token;

pub use token::{SkippedRun, Token, TokenType};

use tracing::warn;

/// Result of lexing a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenization {
    pub tokens: Vec<Token>,
    pub skipped: Vec<SkippedRun>,
}

/// Remove line breaks so the document is laid out on a single line.
pub fn strip_newlines(source: &str) -> String {
    source.chars().filter(|c| !matches!(c, '\n' | '\r')).collect()
}

/// Tokenize a document.
///
/// The source is expected to have its newlines stripped already (see
/// [`strip_newlines`]); newlines that remain are treated as any other
/// whitespace.
pub fn tokenize(source: &str) -> Tokenization {
    let mut tokens = Vec::new();
    let mut skipped = Vec::new();
    let mut run_start: Option<usize> = None;
    let mut pos = 0;

    while let Some(ch) = source[pos..].chars().next() {
        if ch.is_whitespace() {
            close_run(source, &mut run_start, pos, &mut skipped);
            pos += ch.len_utf8();
            continue;
        }

        match shapes::match_prefix(&source[pos..]) {
            Some((kind, len)) => {
                close_run(source, &mut run_start, pos, &mut skipped);
                tokens.push(Token::new(&source[pos..pos + len], kind, pos));
                pos += len;
            }
            None => {
                run_start.get_or_insert(pos);
                pos += ch.len_utf8();
            }
        }
    }
    close_run(source, &mut run_start, pos, &mut skipped);

    Tokenization { tokens, skipped }
}

/// Convenience wrapper returning only the tokens.
pub fn tokens(source: &str) -> Vec<Token> {
    tokenize(source).tokens
}

fn close_run(source: &str, run_start: &mut Option<usize>, end: usize, out: &mut Vec<SkippedRun>) {
    if let Some(start) = run_start.take() {
        let text = &source[start..end];
        warn!(offset = start, text, "skipping unrecognized input");
        out.push(SkippedRun {
            offset: start,
            text: text.to_string(),
        });
    }
}
