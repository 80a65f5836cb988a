//! # xmlfmt
//!
//! Reformats flat, whitespace-stripped XML into a nested, indented layout.
//!
//! There is no XML parser or DOM here. Tokens are recognized purely by their
//! surface shape (opening tag, closing tag, self-contained tag, text or comment)
//! and the layout is decided one token at a time from the token's own shape and
//! the shapes of its immediate neighbours.
//!
//! ## Pipeline
//!
//! 1. **Lexing** ([`lexing`]): the document, with newlines stripped, is scanned
//!    into an ordered list of [`Token`]s. Whitespace between tokens is dropped and
//!    unrecognized characters are skipped and reported.
//!
//! 2. **Indentation** ([`indentation`]): a single left-to-right pass over the
//!    tokens emits each one with a depth-based prefix and a newline at shape
//!    transitions.
//!
//! The [`pipeline`] module wires both phases to file input and output, driven by
//! a [`Settings`] value built from the layered [`config`](crate::config).

pub mod config;
pub mod error;
pub mod indentation;
pub mod lexing;
pub mod pipeline;

pub use crate::config::{Emit, Loader, Settings, XmlfmtConfig};
pub use error::{Error, Result};
pub use indentation::{indent, indent_with_report, Formatted};
pub use lexing::{strip_newlines, tokenize, SkippedRun, Token, TokenType, Tokenization};
pub use pipeline::{format_str, run, Outcome};
