//! Property tests for the invariants promised across regex/NFA/DFA construction.
//!
//! Regexes are generated over a two-letter alphabet and kept small — subset
//! construction is worst-case exponential in the NFA's state count, and a
//! `prop_recursive` regex generator can otherwise produce pathological unions of stars
//! that make this suite slow for no extra confidence.

use crate::regex;
use proptest::prelude::*;

fn small_regex() -> impl Strategy<Value = String> {
    "[ab]".prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            3 => (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("{a}{b}")),
            3 => (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("{a}|{b}")),
            1 => inner.prop_map(|r| format!("({r})*")),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Invariant 1 (§8): NFA and DFA acceptance agree on every input.
    #[test]
    fn nfa_and_dfa_agree(pattern in small_regex(), input in "[ab]{0,8}") {
        let nfa = regex::compile(&pattern).unwrap();
        let dfa = nfa.to_dfa();
        prop_assert_eq!(nfa.accepts(&input), dfa.accepts(&input));
    }

    /// Invariant 2 (§8): compiling the same regex twice yields identical NFAs.
    #[test]
    fn compile_is_deterministic(pattern in small_regex()) {
        let a = regex::compile(&pattern).unwrap();
        let b = regex::compile(&pattern).unwrap();
        prop_assert_eq!(a.start(), b.start());
        prop_assert_eq!(a.finals(), b.finals());
        prop_assert_eq!(a.states().len(), b.states().len());
        for (sa, sb) in a.states().iter().zip(b.states().iter()) {
            prop_assert_eq!(sa.id(), sb.id());
            prop_assert_eq!(sa.is_final(), sb.is_final());
        }
    }

    /// Invariant 5 (§8): a trace is a prefix of the input, never longer than it, and
    /// starts at the DFA's start state.
    #[test]
    fn trace_is_a_prefix(pattern in small_regex(), input in "[ab]{0,8}") {
        let dfa = regex::compile(&pattern).unwrap().to_dfa();
        if let Some(path) = dfa.trace(&input) {
            prop_assert!(path.len() <= input.len() + 1);
            prop_assert_eq!(path[0], dfa.start());
        }
    }
}

#[cfg(test)]
mod approx_properties {
    use crate::approx::approx_match;
    use proptest::prelude::*;

    proptest! {
        /// Invariant 6 (§8): a larger error budget never turns a match into a non-match.
        #[test]
        fn monotone_in_k(text in "[a-z]{0,12}", pattern in "[a-z]{0,6}", k in 0usize..4) {
            if approx_match(&text, &pattern, k) {
                prop_assert!(approx_match(&text, &pattern, k + 1));
            }
        }
    }
}
