/*! Implements the pattern tokenizer.

Tokenization is the first step in the compilation process. The tokenizer
takes the pattern string and produces a sequence of tokens that is later
processed by the parser.

Every character of the pattern becomes exactly one token: unescaped
characters from the operator set `( ) * + ? | ^ $` become
[`Token::Operator`], everything else becomes [`Token::Literal`]. A `\`
escapes the character that follows it, and the two-character sequence
collapses into a single [`Token::Literal`] carrying the escaped character.
A `\` in the last position of the pattern has nothing to escape and is
reported as [`CompileError::UnterminatedEscape`].
*/

use logos::Logos;

use crate::errors::CompileError;
use crate::Span;

mod tokens;

pub use tokens::Token;
pub use tokens::OPERATORS;


/// The raw tokens recognized by the lexer, before spans are attached.
#[derive(Logos, Debug, PartialEq)]
enum RawToken {
    // An escape pair collapses into the escaped character. `(?s:.)` also
    // accepts an escaped newline.
    #[regex(r"\\(?s:.)", |lex| lex.slice().chars().nth(1))]
    Escaped(char),

    #[regex(r"[()*+?|^$]", |lex| lex.slice().chars().next())]
    Operator(char),

    #[regex(r"[^\\()*+?|^$]", |lex| lex.slice().chars().next())]
    Literal(char),
}

/// Takes a pattern and produces a sequence of tokens.
pub struct Tokenizer<'src> {
    lexer: logos::Lexer<'src, RawToken>,
}

impl<'src> Tokenizer<'src> {
    /// Creates a new [`Tokenizer`] for the given pattern.
    pub fn new(pattern: &'src str) -> Self {
        // Can't handle patterns greater than the maximum span size.
        assert!(pattern.len() < Span::MAX);
        Self { lexer: RawToken::lexer(pattern) }
    }

    /// Returns the next token, or `None` when the pattern is exhausted.
    pub fn next_token(&mut self) -> Option<Result<Token, CompileError>> {
        let raw = self.lexer.next()?;
        let span = Span::from(self.lexer.span());
        Some(match raw {
            Ok(RawToken::Escaped(c)) | Ok(RawToken::Literal(c)) => {
                Ok(Token::Literal(c, span))
            }
            Ok(RawToken::Operator(c)) => Ok(Token::Operator(c, span)),
            Err(()) => {
                // The only portion of a pattern the lexer can fail on is a
                // trailing backslash. Anything else that ever slips through
                // is still reported, as an unrecognized token.
                if self.lexer.slice().starts_with('\\') {
                    Err(CompileError::UnterminatedEscape(span))
                } else {
                    Err(CompileError::UnrecognizedToken(span))
                }
            }
        })
    }
}

/// Tokenizes the whole pattern at once.
///
/// The empty pattern produces an empty token sequence, not an error.
pub fn tokenize(pattern: &str) -> Result<Vec<Token>, CompileError> {
    let mut tokenizer = Tokenizer::new(pattern);
    let mut tokens = Vec::new();
    while let Some(token) = tokenizer.next_token() {
        tokens.push(token?);
    }
    Ok(tokens)
}
