//! Indentation engine
//!
//! Lays out a token sequence in one left-to-right pass. Each token is looked at
//! together with the shapes of its immediate neighbours (see
//! [`ClassifiedToken`]) and two small rule tables decide the rest:
//!
//! - the **prefix rule** decides whether the token starts a fresh line and so
//!   gets `tabulator x nest_level` in front of it;
//! - the **suffix rule** decides whether a newline follows the token and whether
//!   the nest level goes up or down.
//!
//! Comments are laid out exactly like self-contained tags: both are leaves.
//!
//! The nest level is unsigned. A decrement at level zero (a stray closing tag)
//! is clamped and counted instead of going negative.

use tracing::{debug, warn};

use crate::lexing::{Token, TokenType};

/// A token seen together with the shapes of its neighbours.
#[derive(Debug, Clone, Copy)]
pub struct ClassifiedToken<'a> {
    pub token: &'a Token,
    pub previous: TokenType,
    pub next: TokenType,
}

impl ClassifiedToken<'_> {
    pub fn current(&self) -> TokenType {
        self.token.kind()
    }
}

/// Pair every token with the types of the tokens before and after it.
pub fn classify_neighbours(tokens: &[Token]) -> impl Iterator<Item = ClassifiedToken<'_>> {
    tokens.iter().enumerate().map(move |(i, token)| ClassifiedToken {
        token,
        previous: i
            .checked_sub(1)
            .map_or(TokenType::None, |p| tokens[p].kind()),
        next: tokens.get(i + 1).map_or(TokenType::None, Token::kind),
    })
}

/// Layout role of a token type. Self-contained tags and comments share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Open,
    Close,
    Leaf,
    Text,
    Edge,
}

impl From<TokenType> for Role {
    fn from(kind: TokenType) -> Self {
        match kind {
            TokenType::Open => Role::Open,
            TokenType::Close => Role::Close,
            TokenType::SelfContained | TokenType::Comment => Role::Leaf,
            TokenType::Text => Role::Text,
            TokenType::None => Role::Edge,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Stay,
    Enter,
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Suffix {
    newline: bool,
    step: Step,
}

impl Suffix {
    const NOTHING: Suffix = Suffix {
        newline: false,
        step: Step::Stay,
    };
    const NEWLINE: Suffix = Suffix {
        newline: true,
        step: Step::Stay,
    };
    const ENTER: Suffix = Suffix {
        newline: true,
        step: Step::Enter,
    };
    const LEAVE: Suffix = Suffix {
        newline: true,
        step: Step::Leave,
    };
}

/// Tokens that continue the current line get no indentation prefix.
fn needs_prefix(current: Role, previous: Role) -> bool {
    !matches!(
        (current, previous),
        (Role::Open, Role::Edge)
            | (Role::Close, Role::Open)
            | (Role::Close, Role::Text)
            | (Role::Text, Role::Open)
            | (Role::Text, Role::Text)
    )
}

fn suffix(current: Role, next: Role) -> Suffix {
    match (current, next) {
        (Role::Edge, _) | (_, Role::Edge) => Suffix::NOTHING,
        (Role::Open, Role::Open | Role::Leaf) => Suffix::ENTER,
        (Role::Open, Role::Close | Role::Text) => Suffix::NOTHING,
        (Role::Close | Role::Leaf, Role::Close) => Suffix::LEAVE,
        (Role::Close | Role::Leaf, Role::Open | Role::Leaf | Role::Text) => Suffix::NEWLINE,
        (Role::Text, Role::Open | Role::Leaf) => Suffix::NEWLINE,
        (Role::Text, Role::Close | Role::Text) => Suffix::NOTHING,
    }
}

/// Result of an indentation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    pub text: String,
    /// Nest level after the last token. Zero for a balanced document.
    pub final_depth: usize,
    /// Decrements that would have taken the nest level below zero.
    pub underflows: usize,
}

/// The indentation state machine.
pub struct Indenter<'t> {
    tabulator: &'t str,
    nest_level: usize,
    output: String,
    underflows: usize,
}

impl<'t> Indenter<'t> {
    pub fn new(tabulator: &'t str) -> Self {
        Self {
            tabulator,
            nest_level: 0,
            output: String::new(),
            underflows: 0,
        }
    }

    /// Append one token with its prefix and suffix.
    pub fn push(&mut self, item: &ClassifiedToken<'_>) {
        let current = Role::from(item.current());

        if needs_prefix(current, Role::from(item.previous)) {
            self.output.push_str(&self.tabulator.repeat(self.nest_level));
        }
        self.output.push_str(item.token.text());

        let suffix = suffix(current, Role::from(item.next));
        if suffix.newline {
            self.output.push('\n');
        }
        match suffix.step {
            Step::Stay => {}
            Step::Enter => self.nest_level += 1,
            Step::Leave => self.leave(item.token),
        }
    }

    fn leave(&mut self, token: &Token) {
        match self.nest_level.checked_sub(1) {
            Some(level) => self.nest_level = level,
            None => {
                self.underflows += 1;
                warn!(
                    offset = token.offset(),
                    token = token.text(),
                    "closing below nest level zero, clamping"
                );
            }
        }
    }

    pub fn finish(self) -> Formatted {
        if self.nest_level != 0 {
            debug!(depth = self.nest_level, "document ends inside an element");
        }
        Formatted {
            text: self.output,
            final_depth: self.nest_level,
            underflows: self.underflows,
        }
    }
}

/// Indent a token sequence, returning the text together with depth bookkeeping.
pub fn indent_with_report(tokens: &[Token], tabulator: &str) -> Formatted {
    let mut indenter = Indenter::new(tabulator);
    for item in classify_neighbours(tokens) {
        indenter.push(&item);
    }
    indenter.finish()
}

/// Indent a token sequence.
///
/// An empty sequence yields an empty string.
pub fn indent(tokens: &[Token], tabulator: &str) -> String {
    indent_with_report(tokens, tabulator).text
}
