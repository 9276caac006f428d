//! # formalang
//!
//! A small formal-language toolkit built around a regular-expression compiler and
//! automaton simulator. [`regex::compile`] translates a textual regex into an
//! [`nfa::Nfa`] via Thompson's construction; [`nfa::Nfa::to_dfa`] determinizes it into a
//! [`dfa::Dfa`] via subset construction; both automata can be simulated directly and
//! rendered as a [DOT](graph) graph. Two independent engines share the surface but stand
//! on their own: an [`approx`] edit-distance matcher, and a [`pda`] demo recognizing
//! {aⁿbⁿ}.
//!
//! ```
//! use formalang::regex;
//!
//! let nfa = regex::compile("(a|b)*abb").unwrap();
//! assert!(nfa.accepts("aabb"));
//!
//! let dfa = nfa.to_dfa();
//! assert!(dfa.accepts("aabb"));
//! assert_eq!(dfa.trace("aabb").unwrap().len(), 5);
//! ```
//!
//! ## Scope
//!
//! The regex surface covers concatenation, alternation (`|`), Kleene star (`*`),
//! grouping, and single ASCII alphanumeric literals. There are no character classes, no
//! escapes, no anchors, no backreferences, no counted repetition, and no Unicode
//! semantics beyond byte-wise alphanumerics. DFAs here are never minimized. Matching is
//! whole-input, not streaming or incremental. An interactive shell, file-system output,
//! and bindings to other languages are all out of scope for this crate — it exposes pure
//! in-memory operations and leaves presentation to its caller.

pub mod approx;
pub mod dfa;
pub mod graph;
pub mod nfa;
pub mod pda;
pub mod regex;
mod state;

#[cfg(test)]
mod proptests;
