/*! Runs compiled patterns against candidate strings.

The scanner simulates the automaton over the input in a single linear pass,
no backtracking: it maintains a frontier of simultaneously-active states,
advances the whole frontier on every input character, and reports a match
the instant the accept state becomes reachable.

Unanchored search falls out of one detail of the simulation: before every
character is consumed, the epsilon-closure of the start state is injected
back into the frontier, which amounts to attempting a fresh match at the
current offset. Patterns with `^`/`$` restrict themselves to the input
boundaries because their anchor pseudo-states only consume the boundary
sentinels, which are fed to the frontier exactly once, before the first
character and after the last one.
*/

use bitvec::vec::BitVec;
use rustc_hash::FxHashMap;

use crate::compiler::{Condition, Nfa, StateId};


/// Matches candidate strings against an already compiled pattern.
///
/// A scanner borrows the automaton and owns only the transient
/// book-keeping of a scan, so any number of scanners can share one [`Nfa`].
/// A single scanner can be reused for any number of [`matches`][Self::matches]
/// calls; no state is retained between calls.
pub struct Scanner<'r> {
    nfa: &'r Nfa,
    frontier: Frontier,
}

impl<'r> Scanner<'r> {
    /// Creates a new scanner for the given automaton.
    pub fn new(nfa: &'r Nfa) -> Self {
        Self { nfa, frontier: Frontier::new(nfa.state_count()) }
    }

    /// Returns true if the pattern matches somewhere in `haystack`.
    ///
    /// Matching never fails: every input, including the empty string, has a
    /// well-defined result.
    pub fn matches(&mut self, haystack: &str) -> bool {
        let nfa = self.nfa;

        self.frontier.reset();

        // The closure of the start state may already contain the accept
        // state: an all-epsilon pattern matches the empty string, anywhere.
        if self.frontier.add(nfa, nfa.enter()) {
            return true;
        }
        if self.consume_anchor(Condition::Start) {
            return true;
        }

        for c in haystack.chars() {
            // A fresh match attempt may begin at the current offset; this
            // is what makes the search unanchored.
            if self.frontier.add(nfa, nfa.enter()) {
                return true;
            }
            if self.consume_literal(c) {
                return true;
            }
        }

        // One more attempt for the empty match at the end of the input,
        // then feed the end sentinel to whatever is waiting for it.
        if self.frontier.add(nfa, nfa.enter()) {
            return true;
        }
        self.consume_anchor(Condition::End)
    }

    /// Advances the frontier over the input character `c`.
    ///
    /// Only the states waiting exactly for `c` survive, through their
    /// successors; the rest of the frontier is discarded.
    fn consume_literal(&mut self, c: char) -> bool {
        let nfa = self.nfa;
        let advancing = self.frontier.take_literals(c);
        self.frontier.reset();
        for id in advancing {
            for &succ in nfa[id].edges() {
                if self.frontier.add(nfa, succ) {
                    return true;
                }
            }
        }
        false
    }

    /// Advances the anchor pseudo-states waiting for the given boundary
    /// sentinel. States waiting for anything else are unaffected; unlike a
    /// character, a sentinel does not invalidate the rest of the frontier.
    fn consume_anchor(&mut self, sentinel: Condition) -> bool {
        let nfa = self.nfa;
        let mut advancing = Vec::new();
        self.frontier.anchors.retain(|&id| {
            if nfa[id].condition() == sentinel {
                advancing.push(id);
                false
            } else {
                true
            }
        });
        for id in advancing {
            for &succ in nfa[id].edges() {
                if self.frontier.add(nfa, succ) {
                    return true;
                }
            }
        }
        false
    }
}

/// The set of automaton states that are active at some point of the scan.
///
/// States are partitioned by what they are waiting for, so that consuming
/// a character or a sentinel touches exactly the states that can react to
/// it: states with a literal condition are bucketed by their character,
/// anchor pseudo-states go to their own bucket, and epsilon states are
/// never stored at all; they are expanded on insertion through the
/// worklist, which also guards against epsilon cycles via the membership
/// bitmap.
struct Frontier {
    /// States awaiting an input character, keyed by that character.
    literals: FxHashMap<char, Vec<StateId>>,
    /// Anchor pseudo-states awaiting a boundary sentinel.
    anchors: Vec<StateId>,
    /// Membership bitmap over all states of the automaton.
    members: BitVec,
    /// Reusable worklist for epsilon expansion. Always empty between
    /// operations.
    pending: Vec<StateId>,
}

impl Frontier {
    fn new(state_count: usize) -> Self {
        Self {
            literals: FxHashMap::default(),
            anchors: Vec::new(),
            members: BitVec::repeat(false, state_count),
            pending: Vec::new(),
        }
    }

    /// Empties the frontier. Bucket allocations are kept for reuse.
    fn reset(&mut self) {
        for bucket in self.literals.values_mut() {
            bucket.clear();
        }
        self.anchors.clear();
        self.members.fill(false);
        self.pending.clear();
    }

    /// Adds a state and its epsilon-closure to the frontier. Returns true
    /// the instant the accept state is reached, leaving the frontier in a
    /// state that is only good for [`reset`][Self::reset].
    fn add(&mut self, nfa: &Nfa, id: StateId) -> bool {
        self.pending.push(id);
        while let Some(id) = self.pending.pop() {
            if self.members[id.as_usize()] {
                continue;
            }
            self.members.set(id.as_usize(), true);

            if id == nfa.exit() {
                self.pending.clear();
                return true;
            }

            match nfa[id].condition() {
                Condition::Epsilon => {
                    self.pending.extend_from_slice(nfa[id].edges());
                }
                Condition::Literal(c) => {
                    self.literals.entry(c).or_default().push(id);
                }
                Condition::Start | Condition::End => {
                    self.anchors.push(id);
                }
            }
        }
        false
    }

    /// Removes and returns the bucket of states waiting for `c`.
    fn take_literals(&mut self, c: char) -> Vec<StateId> {
        self.literals
            .get_mut(&c)
            .map(std::mem::take)
            .unwrap_or_default()
    }
}
