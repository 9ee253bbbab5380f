/*! Errors raised while compiling a pattern.

Compilation errors are terminal: no partial automaton is ever returned.
Matching, in contrast, never fails; every input string has a well-defined
boolean result once compilation succeeded.
*/

use thiserror::Error;

use crate::Span;

/// An error occurred while compiling a pattern.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// The pattern ends with a `\` that doesn't escape anything.
    #[error("unterminated escape sequence at {0}")]
    UnterminatedEscape(Span),

    /// The tokenizer could not classify a portion of the pattern as either
    /// a literal or an operator.
    ///
    /// Every character is either an operator or a literal, so this is not
    /// expected to occur in practice, but a lexer failure must be a
    /// reportable condition rather than undefined behavior.
    #[error("unrecognized token at {0}")]
    UnrecognizedToken(Span),

    /// The parser could not derive a syntax tree from the tokens at the
    /// given position. Unmatched parentheses and operators with nothing to
    /// apply to end up here.
    #[error("syntax error at {0}")]
    SyntaxError(Span),
}

impl CompileError {
    /// Position within the pattern (in bytes) where the error was found.
    pub fn position(&self) -> usize {
        match self {
            Self::UnterminatedEscape(span) => span.start(),
            Self::UnrecognizedToken(span) => span.start(),
            Self::SyntaxError(span) => span.start(),
        }
    }
}
