/*! Compiles an AST into a nondeterministic finite automaton.

The construction is the classical Thompson one: each AST variant maps to a
fixed state-graph fragment, and fragments compose through their
`(enter, exit)` state pair. Every fragment allocates fresh states; nothing
is shared between sibling subtrees, so the exit of one construction is
never aliased with the exit of another.

After the whole tree is built, a final epsilon state is appended beyond the
root's exit so that the automaton's accept state is a dedicated object, not
an internal node of some fragment. A compaction pass then shortens chains
of epsilon transitions to bound the cost of epsilon-closure during
matching.
*/

use log::debug;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::ast::{Ast, RepetitionOp};
use crate::errors::CompileError;
use crate::parser::Parser;

mod nfa;

pub use nfa::{Condition, Nfa, State, StateId};


/// Compiles a pattern into an [`Nfa`].
///
/// Runs the full pipeline: tokenize, parse, build, optimize. Errors are
/// terminal; no partial automaton is ever returned. Compilation is
/// deterministic for a given pattern.
pub fn compile(pattern: &str) -> Result<Nfa, CompileError> {
    let ast = Parser::new(pattern)?.parse()?;

    let mut builder = NfaBuilder::new();
    let (enter, exit) = builder.build_ast(&ast);

    // Give the automaton a dedicated accept state, not aliased with any
    // fragment's own exit.
    let accept = builder.add_state(Condition::Epsilon);
    builder.connect(exit, accept);

    let mut nfa = Nfa { states: builder.states, enter, exit: accept };
    compact_epsilons(&mut nfa);

    debug!("pattern compiled into {} states", nfa.state_count());

    Ok(nfa)
}

/// Builds the automaton fragment for each AST node.
struct NfaBuilder {
    states: Vec<State>,
}

impl NfaBuilder {
    fn new() -> Self {
        Self { states: Vec::new() }
    }

    fn add_state(&mut self, condition: Condition) -> StateId {
        let id = StateId(self.states.len() as u32);
        self.states.push(State::new(condition));
        id
    }

    fn connect(&mut self, from: StateId, to: StateId) {
        self.states[from.as_usize()].edges.push(to);
    }

    /// Returns the `(enter, exit)` pair of the fragment built for `ast`.
    fn build_ast(&mut self, ast: &Ast) -> (StateId, StateId) {
        match ast {
            Ast::Literal(c) => {
                // A single state consuming the character; it is its own
                // enter and exit.
                let s = self.add_state(Condition::Literal(*c));
                (s, s)
            }

            Ast::Concat(children) => {
                let mut iter = children.iter();
                let Some(first) = iter.next() else {
                    // Zero children match the empty string.
                    let s = self.add_state(Condition::Epsilon);
                    return (s, s);
                };
                let (enter, mut exit) = self.build_ast(first);
                for child in iter {
                    let (child_enter, child_exit) = self.build_ast(child);
                    self.connect(exit, child_enter);
                    exit = child_exit;
                }
                (enter, exit)
            }

            Ast::Alternation { left, right } => {
                let (left_enter, left_exit) = self.build_ast(left);
                let (right_enter, right_exit) = self.build_ast(right);

                let enter = self.add_state(Condition::Epsilon);
                let exit = self.add_state(Condition::Epsilon);

                self.connect(enter, left_enter);
                self.connect(enter, right_enter);
                self.connect(left_exit, exit);
                self.connect(right_exit, exit);

                (enter, exit)
            }

            Ast::Repetition { op, child } => {
                let (child_enter, child_exit) = self.build_ast(child);
                match op {
                    RepetitionOp::ZeroOrOne => {
                        let enter = self.add_state(Condition::Epsilon);
                        let exit = self.add_state(Condition::Epsilon);
                        self.connect(enter, child_enter);
                        self.connect(enter, exit);
                        self.connect(child_exit, exit);
                        (enter, exit)
                    }
                    RepetitionOp::OneOrMore => {
                        // The child's enter doubles as the fragment's
                        // enter; the back edge from the new exit forms the
                        // loop.
                        let exit = self.add_state(Condition::Epsilon);
                        self.connect(child_exit, exit);
                        self.connect(exit, child_enter);
                        (child_enter, exit)
                    }
                    RepetitionOp::ZeroOrMore => {
                        // One state serving as both enter and exit, with
                        // the child hanging off it as a loop.
                        let enter_exit = self.add_state(Condition::Epsilon);
                        self.connect(enter_exit, child_enter);
                        self.connect(child_exit, enter_exit);
                        (enter_exit, enter_exit)
                    }
                }
            }

            Ast::Anchor { start, end, child } => {
                let (mut enter, mut exit) = match child {
                    Some(child) => self.build_ast(child),
                    None => {
                        let s = self.add_state(Condition::Epsilon);
                        (s, s)
                    }
                };
                if *start {
                    let s = self.add_state(Condition::Start);
                    self.connect(s, enter);
                    enter = s;
                }
                if *end {
                    let s = self.add_state(Condition::End);
                    self.connect(exit, s);
                    exit = s;
                }
                (enter, exit)
            }
        }
    }
}

/// Shortens chains of epsilon transitions.
///
/// For every reachable state, the outgoing edge list is replaced by the
/// result of transitively following epsilon successors until something that
/// matters is found: a condition-bearing state, an anchor pseudo-state, or
/// the accept state. State identities are never deleted or merged; this is
/// a bounded compaction pass, not a minimization, and the accepted language
/// is unchanged.
fn compact_epsilons(nfa: &mut Nfa) {
    let mut fringe = vec![nfa.enter];
    let mut seen = FxHashSet::default();

    while let Some(cur) = fringe.pop() {
        if !seen.insert(cur) {
            continue;
        }
        compact_vertex(nfa, cur);
        fringe.extend_from_slice(nfa[cur].edges());
    }
}

fn compact_vertex(nfa: &mut Nfa, vertex: StateId) {
    let mut pending: Vec<StateId> = nfa[vertex].edges().to_vec();
    let mut seen = FxHashSet::default();
    let mut kept: SmallVec<[StateId; 2]> = SmallVec::new();

    // Worklist expansion of epsilon successors, with its own seen-set:
    // the graph may contain epsilon cycles (from `*` and `+`).
    while let Some(cur) = pending.pop() {
        if !seen.insert(cur) {
            continue;
        }
        if cur != nfa.exit && nfa[cur].condition() == Condition::Epsilon {
            pending.extend_from_slice(nfa[cur].edges());
        } else {
            kept.push(cur);
        }
    }

    nfa.states[vertex.as_usize()].edges = kept;
}
