/*! A small regular expression engine built on Thompson's construction.

A pattern string is compiled into a nondeterministic finite automaton
([`Nfa`]) which is then simulated over candidate strings by a [`Scanner`].
Compilation runs the full pipeline (tokenize → parse → build → optimize)
once; the resulting automaton is immutable and can be shared freely, even
across threads. Each [`Scanner`] borrows an automaton and can be reused for
any number of `matches` calls.

Matching is unanchored: the pattern may match any substring of the input.
`^` and `$` inside the pattern pin the match to the true start and/or end
of the input.

The supported syntax is deliberately small: literals, `\`-escapes,
grouping with `( )`, repetition with `*`, `+` and `?`, alternation with
`|`, and the `^`/`$` anchors.

# Example

```rust
let nfa = minregex::compile("^colou?r$").unwrap();
let mut scanner = minregex::Scanner::new(&nfa);

assert!(scanner.matches("color"));
assert!(scanner.matches("colour"));
assert!(!scanner.matches("colours"));
```
*/

use std::fmt::{Display, Formatter};
use std::ops::Range;

pub mod ast;
pub mod compiler;
pub mod errors;
pub mod parser;
pub mod scanner;
pub mod tokenizer;

#[cfg(test)]
mod tests;

pub use compiler::compile;
pub use compiler::Nfa;
pub use errors::CompileError;
pub use scanner::Scanner;

/// Starting and ending positions of some token inside the pattern.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Span(pub Range<u32>);

impl From<logos::Span> for Span {
    fn from(value: logos::Span) -> Self {
        Self(value.start as u32..value.end as u32)
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}..{}]", self.start(), self.end())
    }
}

impl Span {
    pub(crate) const MAX: usize = u32::MAX as usize;

    /// Offset within the pattern (in bytes) where the span starts.
    #[inline]
    pub fn start(&self) -> usize {
        self.0.start as usize
    }

    /// Offset within the pattern (in bytes) where the span ends.
    #[inline]
    pub fn end(&self) -> usize {
        self.0.end as usize
    }

    /// Returns the span as a range of byte offsets.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.0.start as usize..self.0.end as usize
    }
}
