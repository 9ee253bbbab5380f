/*! A handwritten recursive-descent parser for patterns.

The parser consumes the token sequence produced by the
[tokenizer][`crate::tokenizer`] and builds exactly one [`Ast`] root, or
fails with [`CompileError::SyntaxError`] pointing at the offending span.

Operator precedence is enforced purely by the shape of the recursion, one
method per grammar rule:

```text
regex         := alternation
alternation   := anchored ('|' anchored)*
anchored      := '^'? concatenation '$'?
concatenation := repetition*
repetition    := atom ('*' | '+' | '?')?
atom          := LITERAL | '(' regex ')'
```

Grouping binds tightest, then repetition, concatenation, anchoring, and
alternation loosest, so `a|b*` parses as `a|(b*)` and `^ab$|c` as
`(^ab$)|c`.

An empty concatenation is not a failure: it parses to a [`Ast::Concat`]
with no children, which matches the empty string. That is what makes the
empty pattern, `^$`, `()` and empty alternation branches like `(abc|)ef`
all valid.
*/

use crate::ast::{Ast, RepetitionOp};
use crate::errors::CompileError;
use crate::tokenizer::{tokenize, Token};
use crate::Span;


/// Parses a pattern and produces its Abstract Syntax Tree.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    eof: u32,
}

impl Parser {
    /// Creates a new [`Parser`] for the given pattern.
    ///
    /// Tokenization happens here; escape errors are reported before any
    /// parsing takes place.
    pub fn new(pattern: &str) -> Result<Self, CompileError> {
        Ok(Self {
            tokens: tokenize(pattern)?,
            pos: 0,
            eof: pattern.len() as u32,
        })
    }

    /// Consumes the parser and produces the AST root.
    ///
    /// Fails with [`CompileError::SyntaxError`] if any tokens remain
    /// unconsumed after the top-level expression.
    pub fn parse(mut self) -> Result<Ast, CompileError> {
        let ast = self.alternation()?;
        if let Some(token) = self.peek() {
            return Err(CompileError::SyntaxError(token.span()));
        }
        Ok(ast)
    }

    /// `alternation := anchored ('|' anchored)*`
    ///
    /// Left-associative: `a|b|c` becomes `(a|b)|c`.
    fn alternation(&mut self) -> Result<Ast, CompileError> {
        let mut left = self.anchored()?;
        while self.bump_if_operator('|') {
            let right = self.anchored()?;
            left = Ast::Alternation {
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    /// `anchored := '^'? concatenation '$'?`
    ///
    /// Both markers are optional and independent. Without either marker the
    /// concatenation is returned as-is, with no wrapping node.
    fn anchored(&mut self) -> Result<Ast, CompileError> {
        let start = self.bump_if_operator('^');
        let concat = self.concatenation()?;
        let end = self.bump_if_operator('$');

        if !start && !end {
            return Ok(concat);
        }

        let child = if matches!(&concat, Ast::Concat(c) if c.is_empty()) {
            None
        } else {
            Some(Box::new(concat))
        };

        Ok(Ast::Anchor { start, end, child })
    }

    /// `concatenation := repetition*`
    ///
    /// Collects repetitions for as long as the next token can start an
    /// atom. Zero repetitions is valid and produces an empty
    /// [`Ast::Concat`]; a single repetition is returned unwrapped.
    fn concatenation(&mut self) -> Result<Ast, CompileError> {
        let mut children = Vec::new();
        while self.at_atom() {
            children.push(self.repetition()?);
        }
        if children.len() == 1 {
            return Ok(children.remove(0));
        }
        Ok(Ast::Concat(children))
    }

    /// `repetition := atom ('*' | '+' | '?')?`
    fn repetition(&mut self) -> Result<Ast, CompileError> {
        let atom = self.atom()?;
        let op = match self.peek() {
            Some(t) if t.is_operator('*') => RepetitionOp::ZeroOrMore,
            Some(t) if t.is_operator('+') => RepetitionOp::OneOrMore,
            Some(t) if t.is_operator('?') => RepetitionOp::ZeroOrOne,
            _ => return Ok(atom),
        };
        self.bump();
        Ok(Ast::Repetition { op, child: Box::new(atom) })
    }

    /// `atom := LITERAL | '(' regex ')'`
    ///
    /// A group contributes no node of its own; the inner expression is
    /// returned directly.
    fn atom(&mut self) -> Result<Ast, CompileError> {
        match self.peek() {
            Some(Token::Literal(c, _)) => {
                let c = *c;
                self.bump();
                Ok(Ast::Literal(c))
            }
            Some(t) if t.is_operator('(') => {
                self.bump();
                let inner = self.alternation()?;
                if !self.bump_if_operator(')') {
                    return Err(CompileError::SyntaxError(self.current_span()));
                }
                Ok(inner)
            }
            _ => Err(CompileError::SyntaxError(self.current_span())),
        }
    }

    /// True if the next token can start an atom.
    fn at_atom(&self) -> bool {
        match self.peek() {
            Some(t) => t.is_literal() || t.is_operator('('),
            None => false,
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    /// Consumes the next token if it is the operator `op`.
    fn bump_if_operator(&mut self, op: char) -> bool {
        match self.peek() {
            Some(t) if t.is_operator(op) => {
                self.bump();
                true
            }
            _ => false,
        }
    }

    /// The span of the next token, or an empty span at the end of the
    /// pattern when all tokens have been consumed.
    fn current_span(&self) -> Span {
        match self.peek() {
            Some(token) => token.span(),
            None => Span(self.eof..self.eof),
        }
    }
}
