use std::ops::Index;

use smallvec::SmallVec;

/// Identifies a state within an [`Nfa`].
///
/// States are stored in an arena owned by the automaton and reference each
/// other by id, never by pointer. This is what lets the graph contain the
/// cycles produced by `*` and `+` without any ownership conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub(crate) u32);

impl StateId {
    #[inline]
    pub(crate) fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// The condition under which a state lets the simulation move on to its
/// successors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// Cost-free transition, taken without consuming any input.
    Epsilon,
    /// Taken by consuming exactly this character from the input.
    Literal(char),
    /// Anchor pseudo-state, taken by consuming the start-of-input sentinel.
    Start,
    /// Anchor pseudo-state, taken by consuming the end-of-input sentinel.
    End,
}

/// A state of the automaton.
#[derive(Debug, Clone)]
pub struct State {
    pub(crate) condition: Condition,
    pub(crate) edges: SmallVec<[StateId; 2]>,
}

impl State {
    pub(crate) fn new(condition: Condition) -> Self {
        Self { condition, edges: SmallVec::new() }
    }

    /// The condition guarding this state's outgoing edges.
    #[inline]
    pub fn condition(&self) -> Condition {
        self.condition
    }

    /// The successors of this state. Order and duplicates are immaterial
    /// to matching.
    #[inline]
    pub fn edges(&self) -> &[StateId] {
        &self.edges
    }
}

/// A compiled pattern: a Thompson-style nondeterministic finite automaton.
///
/// Produced by [`compile`][`crate::compile`] and consumed by
/// [`Scanner`][`crate::Scanner`]. The automaton is immutable once built and
/// can be shared read-only across any number of scanners, including from
/// multiple threads.
#[derive(Debug)]
pub struct Nfa {
    pub(crate) states: Vec<State>,
    pub(crate) enter: StateId,
    pub(crate) exit: StateId,
}

impl Nfa {
    /// The start state.
    #[inline]
    pub fn enter(&self) -> StateId {
        self.enter
    }

    /// The accept state. It is unique per automaton and reaching it during
    /// simulation signals a match.
    #[inline]
    pub fn exit(&self) -> StateId {
        self.exit
    }

    /// Number of states in the automaton, including states left unreachable
    /// by the optimizer.
    #[inline]
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// All states, addressable by [`StateId`].
    #[inline]
    pub fn states(&self) -> &[State] {
        &self.states
    }
}

impl Index<StateId> for Nfa {
    type Output = State;

    #[inline]
    fn index(&self, id: StateId) -> &Self::Output {
        &self.states[id.as_usize()]
    }
}
