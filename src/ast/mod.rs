/*! Abstract Syntax Tree (AST) for parsed patterns.

The AST is built bottom-up by the parser and is never mutated afterwards.
Consumers (the automaton builder, external renderers) traverse it by
matching exhaustively on [`Ast`], so adding a new variant is a
compile-time-checked change everywhere it matters.
*/

use std::fmt::{Display, Formatter};

/// A node in the syntax tree of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ast {
    /// Matches exactly this character.
    Literal(char),
    /// Matches its children in sequence. With no children it matches the
    /// empty string.
    Concat(Vec<Ast>),
    /// Matches either the left or the right alternative.
    Alternation { left: Box<Ast>, right: Box<Ast> },
    /// Matches zero-or-more, one-or-more or zero-or-one repetitions of its
    /// child, depending on the operator.
    Repetition { op: RepetitionOp, child: Box<Ast> },
    /// Constrains the child's match to the true start and/or end of the
    /// input. `child` is `None` when the anchored expression is empty, as
    /// in `^$`.
    Anchor { start: bool, end: bool, child: Option<Box<Ast>> },
}

/// The repetition operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepetitionOp {
    /// `?`
    ZeroOrOne,
    /// `*`
    ZeroOrMore,
    /// `+`
    OneOrMore,
}

impl Display for RepetitionOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroOrOne => write!(f, "?"),
            Self::ZeroOrMore => write!(f, "*"),
            Self::OneOrMore => write!(f, "+"),
        }
    }
}
