//! # Nondeterministic finite automaton
//!
//! An [`Nfa`] is the direct output of [Thompson's construction](crate::regex::compile):
//! an arena of [`State`]s, a start state, and the set of bytes actually observed while
//! building it. States may have ε-transitions and more than one successor per symbol.
//!
//! ```
//! use formalang::regex;
//!
//! let nfa = regex::compile("a(b|c)*").unwrap();
//! assert!(nfa.accepts("a"));
//! assert!(nfa.accepts("abcbc"));
//! assert!(!nfa.accepts("b"));
//! ```
//!
//! The only way to obtain an `Nfa` is [`regex::compile`](crate::regex::compile) — there
//! is no parser for a serialized automaton format, matching this crate's narrower scope
//! (see the crate-level docs).

pub mod eval;
mod normalize;

use crate::dfa::{Dfa, DfaState};
pub use crate::state::State;
pub use eval::NfaEvaluator;
use std::collections::{BTreeSet, HashMap, VecDeque};

/// A non-deterministic finite automaton with ε-transitions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Nfa {
    states: Vec<State>,
    start: usize,
    finals: BTreeSet<usize>,
    alphabet: BTreeSet<u8>,
}

impl Nfa {
    pub(crate) fn from_build(states: Vec<State>, start: usize, alphabet: BTreeSet<u8>) -> Self {
        let (states, start) = normalize::normalize(states, start);
        let finals = states
            .iter()
            .filter(|s| s.is_final())
            .map(State::id)
            .collect();
        Nfa {
            states,
            start,
            finals,
            alphabet,
        }
    }

    /// The states of this NFA, in id order (dense, starting at 0).
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// The id of the start state.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The ids of the final (accepting) states.
    pub fn finals(&self) -> &BTreeSet<usize> {
        &self.finals
    }

    /// The alphabet observed while this NFA was built, in ascending byte order.
    pub fn alphabet(&self) -> &BTreeSet<u8> {
        &self.alphabet
    }

    /// The ε-closure of `states`: the smallest superset closed under ε-transitions.
    pub fn epsilon_closure(&self, states: &BTreeSet<usize>) -> BTreeSet<usize> {
        let mut closure: BTreeSet<usize> = states.clone();
        let mut queue: VecDeque<usize> = states.iter().copied().collect();
        while let Some(s) = queue.pop_front() {
            for &target in self.states[s].epsilon_transitions() {
                if closure.insert(target) {
                    queue.push_back(target);
                }
            }
        }
        closure
    }

    /// Whether this NFA accepts `input`, per §4.4: seed with the ε-closure of the start
    /// state, step on each byte (rejecting as soon as the active set goes empty), and
    /// accept iff the final active set contains a final state.
    pub fn accepts(&self, input: &str) -> bool {
        let mut active = self.epsilon_closure(&BTreeSet::from([self.start]));
        for &byte in input.as_bytes() {
            let stepped: BTreeSet<usize> = active
                .iter()
                .flat_map(|&s| self.states[s].transitions_on(byte).iter().copied())
                .collect();
            if stepped.is_empty() {
                return false;
            }
            active = self.epsilon_closure(&stepped);
        }
        active.iter().any(|s| self.finals.contains(s))
    }

    /// A convenience [`NfaEvaluator`] seeded at the start state's ε-closure, for callers
    /// that want to step one byte at a time (e.g. the subset constructor below).
    pub fn evaluator(&self) -> NfaEvaluator<'_> {
        NfaEvaluator::new(self)
    }

    /// Determinizes this NFA into a [`Dfa`] via subset construction (§4.5). DFA state
    /// ids are assigned in discovery order starting from the ε-closure of the NFA's
    /// start state, so `to_dfa` is deterministic: two NFAs with identical ids and
    /// transitions always produce identical DFAs.
    pub fn to_dfa(&self) -> Dfa {
        let start_key = self.epsilon_closure(&BTreeSet::from([self.start]));
        let mut dfa_id_of: HashMap<BTreeSet<usize>, usize> = HashMap::new();
        let mut worklist: VecDeque<BTreeSet<usize>> = VecDeque::new();

        dfa_id_of.insert(start_key.clone(), 0);
        worklist.push_back(start_key);

        let mut by_id: HashMap<usize, DfaState> = HashMap::new();

        while let Some(subset) = worklist.pop_front() {
            let id = dfa_id_of[&subset];
            let is_final = subset.iter().any(|s| self.finals.contains(s));
            let mut transitions = Vec::new();

            for &symbol in &self.alphabet {
                let reachable: BTreeSet<usize> = subset
                    .iter()
                    .flat_map(|&s| self.states[s].transitions_on(symbol).iter().copied())
                    .collect();
                if reachable.is_empty() {
                    continue;
                }
                let target = self.epsilon_closure(&reachable);
                let target_id = *dfa_id_of.entry(target.clone()).or_insert_with(|| {
                    let next = dfa_id_of.len();
                    worklist.push_back(target.clone());
                    next
                });
                transitions.push((symbol, target_id));
            }

            by_id.insert(id, DfaState::new(id, is_final, transitions));
        }

        let states: Vec<DfaState> = (0..by_id.len())
            .map(|id| by_id.remove(&id).expect("every discovered id has a state"))
            .collect();

        Dfa::from_parts(0, states, self.alphabet.clone())
    }

    /// Checks the lesser-known invariant (§8, property 4): does every state have at
    /// most one outgoing edge per symbol and no ε-transitions? If so, this NFA can be
    /// read directly as a DFA without running the subset construction.
    pub fn is_deterministic_shape(&self) -> bool {
        self.states.iter().all(|s| {
            s.epsilon_transitions().is_empty()
                && s.transitions().all(|(_, targets)| targets.len() <= 1)
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::regex;

    #[test]
    fn literal_accepts_exactly_itself() {
        let nfa = regex::compile("a").unwrap();
        assert!(nfa.accepts("a"));
        assert!(!nfa.accepts(""));
        assert!(!nfa.accepts("aa"));
    }

    #[test]
    fn normalization_is_deterministic() {
        let a = regex::compile("(a|b)*abb").unwrap();
        let b = regex::compile("(a|b)*abb").unwrap();
        assert_eq!(a.start(), b.start());
        assert_eq!(a.finals(), b.finals());
        assert_eq!(a.states().len(), b.states().len());
        for (sa, sb) in a.states().iter().zip(b.states().iter()) {
            assert_eq!(sa.id(), sb.id());
            assert_eq!(sa.is_final(), sb.is_final());
        }
    }

    #[test]
    fn start_id_is_zero_after_normalization() {
        let nfa = regex::compile("ab|c*").unwrap();
        assert_eq!(nfa.start(), 0);
    }

    #[test]
    fn empty_regex_accepts_nothing() {
        let nfa = regex::compile("").unwrap();
        assert!(!nfa.accepts(""));
        assert!(!nfa.accepts("a"));
        assert!(nfa.finals().is_empty());
    }
}
