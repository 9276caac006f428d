//! # Graph export
//!
//! Renders an [`Nfa`](crate::nfa::Nfa) or [`Dfa`](crate::dfa::Dfa) as a textual directed
//! graph description (the Graphviz DOT language), suitable for a drawing tool this crate
//! does not itself provide — see the crate-level docs for what's out of scope.
//!
//! ```
//! use formalang::regex;
//!
//! let nfa = regex::compile("a|b").unwrap();
//! let dot = formalang::graph::export(&nfa);
//! assert!(dot.starts_with("digraph NFA {"));
//! assert!(dot.contains("shape=doublecircle"));
//! ```

use crate::dfa::Dfa;
use crate::nfa::Nfa;
use std::fmt::Write as _;

/// Something that can be rendered as a DOT graph.
pub trait Exportable {
    /// Renders `self` as a complete `digraph { ... }` description.
    fn to_dot(&self) -> String;
}

impl Exportable for Nfa {
    fn to_dot(&self) -> String {
        let mut out = String::new();
        out.push_str("digraph NFA {\n");
        out.push_str("  rankdir=LR;\n");
        out.push_str("  node [shape=circle];\n");

        for &id in self.finals() {
            let _ = writeln!(out, "  {id} [shape=doublecircle];");
        }

        out.push_str("  start [shape=none, label=\"\"];\n");
        let _ = writeln!(out, "  start -> {};", self.start());

        for state in self.states() {
            for (symbol, targets) in state.transitions() {
                for &target in targets {
                    let _ = writeln!(
                        out,
                        "  {} -> {target} [label=\"{}\"];",
                        state.id(),
                        symbol as char
                    );
                }
            }
            for &target in state.epsilon_transitions() {
                let _ = writeln!(out, "  {} -> {target} [label=\"ε\"];", state.id());
            }
        }

        out.push_str("}\n");
        out
    }
}

impl Exportable for Dfa {
    fn to_dot(&self) -> String {
        let mut out = String::new();
        out.push_str("digraph DFA {\n");
        out.push_str("  rankdir=LR;\n");
        out.push_str("  node [shape=circle];\n");

        for state in self.states() {
            if state.is_final() {
                let _ = writeln!(out, "  {} [shape=doublecircle];", state.id());
            }
        }

        out.push_str("  start [shape=none, label=\"\"];\n");
        let _ = writeln!(out, "  start -> {};", self.start());

        for state in self.states() {
            for (symbol, target) in state.transitions() {
                let _ = writeln!(
                    out,
                    "  {} -> {target} [label=\"{}\"];",
                    state.id(),
                    symbol as char
                );
            }
        }

        out.push_str("}\n");
        out
    }
}

/// Renders any [`Exportable`] automaton as a DOT graph description.
pub fn export(automaton: &impl Exportable) -> String {
    automaton.to_dot()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regex;

    #[test]
    fn nfa_export_has_epsilon_edges() {
        let nfa = regex::compile("a*").unwrap();
        let dot = nfa.to_dot();
        assert!(dot.starts_with("digraph NFA {"));
        assert!(dot.contains("label=\"ε\""));
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn dfa_export_has_no_epsilon_edges() {
        let dfa = regex::compile("ab").unwrap().to_dfa();
        let dot = dfa.to_dot();
        assert!(dot.starts_with("digraph DFA {"));
        assert!(!dot.contains('ε'));
        assert!(dot.contains("shape=doublecircle"));
    }

    #[test]
    fn start_pseudo_node_points_at_real_start() {
        let nfa = regex::compile("a").unwrap();
        let dot = nfa.to_dot();
        assert!(dot.contains(&format!("start -> {};", nfa.start())));
    }
}
