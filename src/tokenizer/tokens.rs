use crate::Span;

/// Characters that have a special meaning when they appear unescaped in a
/// pattern.
pub const OPERATORS: &[char] = &['(', ')', '*', '+', '?', '|', '^', '$'];

/// Each of the tokens produced by the tokenizer.
///
/// Both variants carry the character they were lexed from and the span they
/// occupy within the pattern. An escaped operator (`\+`, `\*`, ...) becomes
/// a [`Token::Literal`] carrying the operator character, with a span
/// covering the whole two-byte escape sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// A character that matches itself.
    Literal(char, Span),
    /// An unescaped character from the operator set `( ) * + ? | ^ $`.
    Operator(char, Span),
}

impl Token {
    /// Returns the span occupied by this token.
    pub fn span(&self) -> Span {
        match self {
            Self::Literal(_, span) => span.clone(),
            Self::Operator(_, span) => span.clone(),
        }
    }

    /// True if this token is the operator `op`.
    #[inline]
    pub fn is_operator(&self, op: char) -> bool {
        matches!(self, Self::Operator(c, _) if *c == op)
    }

    /// True if this token is a literal character.
    #[inline]
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(..))
    }
}
