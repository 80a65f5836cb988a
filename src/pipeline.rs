//! Formatting pipeline
//!
//! read -> strip newlines -> tokenize -> indent -> write
//!
//! Everything runs sequentially on one document. The only fallible steps are
//! reading the input and writing the output; both surface as typed [`Error`]s.
//! A failed read writes nothing.

use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::config::{Emit, Settings};
use crate::error::{Error, Result};
use crate::indentation::{indent_with_report, Formatted};
use crate::lexing::{strip_newlines, tokenize, SkippedRun, Token};

/// Everything produced by formatting one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub tokens: Vec<Token>,
    pub skipped: Vec<SkippedRun>,
    pub formatted: Formatted,
}

/// Format a document held in memory.
pub fn format_str(source: &str, tabulator: &str) -> Outcome {
    let flat = strip_newlines(source);
    let tokenization = tokenize(&flat);
    debug!(
        tokens = tokenization.tokens.len(),
        skipped = tokenization.skipped.len(),
        "tokenized document"
    );

    let formatted = indent_with_report(&tokenization.tokens, tabulator);
    debug!(
        bytes = formatted.text.len(),
        final_depth = formatted.final_depth,
        underflows = formatted.underflows,
        "indented document"
    );

    Outcome {
        tokens: tokenization.tokens,
        skipped: tokenization.skipped,
        formatted,
    }
}

/// Serialize a token stream as pretty-printed JSON.
pub fn tokens_json(tokens: &[Token]) -> Result<String> {
    Ok(serde_json::to_string_pretty(tokens)?)
}

/// Read, format and write one document as described by `settings`.
pub fn run(settings: &Settings) -> Result<Outcome> {
    let source = read_input(&settings.input)?;
    let outcome = format_str(&source, &settings.tabulator);

    let body = match settings.emit {
        Emit::Formatted => outcome.formatted.text.clone(),
        Emit::Tokens => tokens_json(&outcome.tokens)?,
    };
    write_output(&settings.output, &body)?;
    info!(
        input = %settings.input.display(),
        output = %settings.output.display(),
        tokens = outcome.tokens.len(),
        "wrote output"
    );

    Ok(outcome)
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::InputRead {
        path: path.to_path_buf(),
        source,
    })
}

fn write_output(path: &Path, body: &str) -> Result<()> {
    fs::write(path, body).map_err(|source| Error::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}
