//! Converts the concatenation-expanded infix regex into postfix (reverse Polish) form
//! using the classic shunting-yard algorithm.

use super::error::MalformedRegex;

fn precedence(op: u8) -> u8 {
    match op {
        b'*' => 3,
        b'.' => 2,
        b'|' => 1,
        _ => 0,
    }
}

fn is_operator(c: u8) -> bool {
    matches!(c, b'*' | b'.' | b'|')
}

/// Converts `input` (already expanded by [`super::preprocess::insert_concatenation`])
/// into postfix. Operands are emitted as-is; operators are reordered by precedence.
pub(super) fn to_postfix(input: &[u8]) -> Result<Vec<u8>, MalformedRegex> {
    let mut output = Vec::with_capacity(input.len());
    let mut ops: Vec<u8> = Vec::new();

    for (idx, &c) in input.iter().enumerate() {
        match c {
            b'(' => ops.push(c),
            b')' => {
                loop {
                    match ops.pop() {
                        Some(b'(') => break,
                        Some(op) => output.push(op),
                        None => return Err(MalformedRegex::MissingOpenParen(idx)),
                    }
                }
            }
            op if is_operator(op) => {
                while let Some(&top) = ops.last() {
                    if top != b'(' && precedence(top) >= precedence(op) {
                        output.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }
                ops.push(op);
            }
            operand => output.push(operand),
        }
    }

    while let Some(op) = ops.pop() {
        if op == b'(' {
            return Err(MalformedRegex::MissingCloseParen);
        }
        output.push(op);
    }

    Ok(output)
}
