//! # Regex compiler
//!
//! Translates a textual regular expression into an [`Nfa`](crate::nfa::Nfa) via
//! Thompson's construction. The alphabet is ASCII alphanumerics; the only operators are
//! concatenation (implicit, by juxtaposition), alternation (`|`), Kleene star (`*`), and
//! grouping (`(`/`)`). There is no escaping mechanism, no character classes, and no
//! anchors — see the crate-level docs for the full list of things this crate doesn't do.
//!
//! ```
//! use formalang::regex;
//!
//! let nfa = regex::compile("(a|b)*abb").unwrap();
//! assert!(nfa.accepts("abb"));
//! assert!(nfa.accepts("aabb"));
//! assert!(!nfa.accepts("ab"));
//!
//! assert!(regex::compile("a(").is_err());
//! ```

mod error;
mod preprocess;
mod shunting;
mod thompson;

pub use error::MalformedRegex;

use crate::nfa::Nfa;

/// Compiles `regex` into an [`Nfa`] by running the preprocessor, the shunting-yard
/// converter, and the Thompson builder in sequence. Each stage can fail with a
/// [`MalformedRegex`]; no partial automaton is ever returned on error.
pub fn compile(regex: &str) -> Result<Nfa, MalformedRegex> {
    let with_concat = preprocess::insert_concatenation(regex);
    let postfix = shunting::to_postfix(&with_concat)?;
    thompson::build(&postfix)
}
