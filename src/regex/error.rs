use thiserror::Error;

/// The single error kind surfaced by [`crate::regex::compile`].
///
/// Every cause named here corresponds to one of the malformed shapes the shunting-yard
/// stage and the Thompson builder can detect; there is no partial-success path, and
/// nothing downstream of a `MalformedRegex` is ever constructed.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum MalformedRegex {
    /// A `)` was encountered with no matching `(` before it.
    #[error("missing '(' (unmatched ')' at byte {0})")]
    MissingOpenParen(usize),
    /// Input ended with one or more `(` still open.
    #[error("missing ')' (unclosed '(' remaining at end of input)")]
    MissingCloseParen,
    /// An operator was consumed by the Thompson builder with too few operands on the
    /// fragment stack (e.g. a leading `|` or `*`, or two operators in a row).
    #[error("operator missing operand")]
    OperatorMissingOperand,
    /// The postfix program left more or less than exactly one fragment on the stack.
    #[error("malformed expression: did not reduce to a single fragment")]
    NotASingleFragment,
}
