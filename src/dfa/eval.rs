//! A steppable cursor over a [`Dfa`]'s current state.

use super::Dfa;

/// A cursor over a [`Dfa`]'s current state, for callers that want to feed bytes in one
/// at a time rather than call [`Dfa::accepts`] on a whole string.
///
/// Once [`step`](Self::step) is fed a byte with no transition from the current state,
/// the evaluator becomes stuck: it stops tracking a current state at all, and every
/// further `step` and `is_accepting` call is a no-op / `false`, mirroring the
/// implicit-reject semantics of [`Dfa::trace`].
#[derive(Clone, Debug)]
pub struct DfaEvaluator<'a> {
    dfa: &'a Dfa,
    current: Option<usize>,
}

impl<'a> DfaEvaluator<'a> {
    pub(super) fn new(dfa: &'a Dfa) -> Self {
        DfaEvaluator {
            dfa,
            current: Some(dfa.start()),
        }
    }

    /// Whether the evaluator is on a final state. Always `false` once stuck.
    pub fn is_accepting(&self) -> bool {
        self.current
            .is_some_and(|s| self.dfa.states()[s].is_final())
    }

    /// The current state id, or `None` if the evaluator is stuck.
    pub fn current_state(&self) -> Option<usize> {
        self.current
    }

    /// Advances by one byte, following the current state's transition on `symbol`. If
    /// there is none, the evaluator becomes permanently stuck.
    pub fn step(&mut self, symbol: u8) {
        self.current = self
            .current
            .and_then(|s| self.dfa.states()[s].transition_on(symbol));
    }

    /// Feeds an entire byte string through [`step`](Self::step) in order.
    pub fn step_all(&mut self, input: &[u8]) {
        for &byte in input {
            self.step(byte);
        }
    }
}
