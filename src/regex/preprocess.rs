//! Inserts the explicit concatenation operator (`.`) between adjacent operands.
//!
//! The shunting-yard stage only ever sees `|`, `*`, `(`, `)`, `.` and literal bytes —
//! juxtaposition (`ab` meaning "a then b") is not an operator the shunting-yard
//! algorithm understands on its own, so it has to be spelled out first.

/// Inserts explicit `.` concatenation markers into `regex`, per the adjacency rule:
/// a `.` goes between `c1` and `c2` whenever `c1` can end an operand (or is `*`/`)`)
/// and `c2` can start one.
pub(super) fn insert_concatenation(regex: &str) -> Vec<u8> {
    let bytes = regex.as_bytes();
    if bytes.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(bytes.len() * 2);
    for window in bytes.windows(2) {
        let (c1, c2) = (window[0], window[1]);
        out.push(c1);
        if needs_concatenation(c1, c2) {
            out.push(b'.');
        }
    }
    out.push(*bytes.last().unwrap());
    out
}

fn is_operand_rhs_candidate(c: u8) -> bool {
    c != b'(' && c != b'|'
}

fn is_operand_lhs_candidate(c: u8) -> bool {
    c != b')' && c != b'|' && c != b'*'
}

fn needs_concatenation(c1: u8, c2: u8) -> bool {
    (is_operand_rhs_candidate(c1) && is_operand_lhs_candidate(c2))
        || (c1 == b'*' && is_operand_lhs_candidate(c2))
        || (c1 == b')' && is_operand_lhs_candidate(c2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(bytes: &[u8]) -> String {
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn empty_input() {
        assert_eq!(insert_concatenation(""), Vec::<u8>::new());
    }

    #[test]
    fn adjacent_literals() {
        assert_eq!(s(&insert_concatenation("ab")), "a.b");
    }

    #[test]
    fn star_then_literal() {
        assert_eq!(s(&insert_concatenation("a*b")), "a*.b");
    }

    #[test]
    fn close_paren_then_literal() {
        assert_eq!(s(&insert_concatenation("(a)b")), "(a).b");
    }

    #[test]
    fn no_concatenation_around_union() {
        assert_eq!(s(&insert_concatenation("a|b")), "a|b");
    }

    #[test]
    fn nested_groups() {
        assert_eq!(s(&insert_concatenation("(a|b)(c|d)")), "(a|b).(c|d)");
    }
}
