//! # Deterministic finite automaton
//!
//! A [`Dfa`] is produced by [`Nfa::to_dfa`](crate::nfa::Nfa::to_dfa) via subset
//! construction. Unlike the teacher shape this crate started from, a [`DfaState`]'s
//! transition table is **partial**: a symbol with no entry means "no transition", i.e.
//! an implicit reject, rather than a transition to a dedicated dead state. This matches
//! how the subset constructor actually behaves — a DFA state built from a subset with
//! no NFA successor on some byte simply has nothing to record for that byte.
//!
//! ```
//! use formalang::regex;
//!
//! let dfa = regex::compile("a(b|c)*").unwrap().to_dfa();
//! assert!(dfa.accepts("abcbc"));
//! assert!(!dfa.accepts("d"));
//! ```

pub mod eval;

pub use eval::DfaEvaluator;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// A single state of a [`Dfa`]: at most one successor per symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DfaState {
    id: usize,
    is_final: bool,
    transitions: BTreeMap<u8, usize>,
}

impl DfaState {
    pub(crate) fn new(id: usize, is_final: bool, transitions: Vec<(u8, usize)>) -> Self {
        DfaState {
            id,
            is_final,
            transitions: transitions.into_iter().collect(),
        }
    }

    /// This state's id within its owning [`Dfa`].
    pub fn id(&self) -> usize {
        self.id
    }

    /// Whether this state is accepting.
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// The successor on `symbol`, if this state has a transition for it.
    pub fn transition_on(&self, symbol: u8) -> Option<usize> {
        self.transitions.get(&symbol).copied()
    }

    /// All (symbol, successor) pairs, in ascending symbol order.
    pub fn transitions(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.transitions.iter().map(|(&c, &t)| (c, t))
    }
}

/// A deterministic finite automaton with a partial transition function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dfa {
    states: Vec<DfaState>,
    start: usize,
    alphabet: BTreeSet<u8>,
}

impl Dfa {
    pub(crate) fn from_parts(start: usize, states: Vec<DfaState>, alphabet: BTreeSet<u8>) -> Self {
        Dfa {
            states,
            start,
            alphabet,
        }
    }

    /// The states of this DFA, indexed by id.
    pub fn states(&self) -> &[DfaState] {
        &self.states
    }

    /// The id of the start state.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The alphabet this DFA was built over, in ascending byte order.
    pub fn alphabet(&self) -> &BTreeSet<u8> {
        &self.alphabet
    }

    /// Whether this DFA accepts `input`: run [`trace`](Self::trace) and check whether it
    /// both consumed the whole input and landed on a final state.
    pub fn accepts(&self, input: &str) -> bool {
        match self.trace(input) {
            Some(path) => self.states[*path.last().unwrap()].is_final(),
            None => false,
        }
    }

    /// Runs `input` from the start state, returning the sequence of state ids visited
    /// (including the start state), or `None` if some prefix of `input` has no
    /// transition to follow — the partial transition function rejected before the end
    /// of the string was reached.
    pub fn trace(&self, input: &str) -> Option<Vec<usize>> {
        let mut path = Vec::with_capacity(input.len() + 1);
        let mut current = self.start;
        path.push(current);
        for &byte in input.as_bytes() {
            current = self.states[current].transition_on(byte)?;
            path.push(current);
        }
        Some(path)
    }

    /// A convenience [`DfaEvaluator`] seeded at the start state, for callers that want
    /// to step one byte at a time.
    pub fn evaluator(&self) -> DfaEvaluator<'_> {
        DfaEvaluator::new(self)
    }
}
