//! A steppable cursor over an [`Nfa`]'s active-state set.
//!
//! Unlike [`Nfa::accepts`](super::Nfa::accepts), which consumes a whole string at once,
//! an [`NfaEvaluator`] lets a caller feed bytes one at a time and inspect the active set
//! in between — this is what the subset constructor in [`super::Nfa::to_dfa`] needs.

use super::Nfa;
use std::collections::BTreeSet;

/// A cursor over the set of states an [`Nfa`] is "currently in".
///
/// Always ε-closed: after construction and after every [`step`](Self::step), the active
/// set already contains everything reachable by ε-transitions alone.
#[derive(Clone, Debug)]
pub struct NfaEvaluator<'a> {
    nfa: &'a Nfa,
    current: BTreeSet<usize>,
}

impl<'a> NfaEvaluator<'a> {
    pub(super) fn new(nfa: &'a Nfa) -> Self {
        let current = nfa.epsilon_closure(&BTreeSet::from([nfa.start()]));
        NfaEvaluator { nfa, current }
    }

    /// Whether the active set contains a final state.
    pub fn is_accepting(&self) -> bool {
        self.current.iter().any(|s| self.nfa.finals().contains(s))
    }

    /// The active set of state ids, ε-closed.
    pub fn current_states(&self) -> &BTreeSet<usize> {
        &self.current
    }

    /// Advances by one byte, replacing the active set with the ε-closure of everywhere
    /// it can reach on `symbol`. The active set becomes empty (and stays empty on every
    /// further step) once no state in it has a transition on the byte fed.
    pub fn step(&mut self, symbol: u8) {
        let reachable: BTreeSet<usize> = self
            .current
            .iter()
            .flat_map(|&s| self.nfa.states()[s].transitions_on(symbol).iter().copied())
            .collect();
        self.current = self.nfa.epsilon_closure(&reachable);
    }

    /// Feeds an entire byte string through [`step`](Self::step) in order.
    pub fn step_all(&mut self, input: &[u8]) {
        for &byte in input {
            self.step(byte);
        }
    }
}
