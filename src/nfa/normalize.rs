//! BFS renumbering of a freshly built NFA's states.
//!
//! Thompson construction allocates state ids in whatever order fragments happen to be
//! assembled, which depends on stack discipline, not on any traversal a caller would
//! recognize. Renumbering by breadth-first search from the start state makes two
//! `compile` calls on the same regex produce byte-identical NFAs (same ids, same
//! transition order) — this is what lets the subset constructor's keys be stable
//! across runs, see [`crate::nfa::Nfa::to_dfa`].

use crate::state::State;
use std::collections::VecDeque;

/// Renumbers `states` by BFS from `start`, in the visit order mandated by the spec:
/// for each state, its ε-successors (insertion order) before its labeled successors
/// (ascending symbol, then insertion order). States unreachable from `start` — which
/// should not occur for a successfully built fragment, but are handled regardless —
/// are appended afterwards in their original relative order.
///
/// Returns the renumbered states (indexed by new id) and the new id of `start`.
pub(crate) fn normalize(states: Vec<State>, start: usize) -> (Vec<State>, usize) {
    let n = states.len();
    let mut new_id = vec![usize::MAX; n];
    let mut order = Vec::with_capacity(n);

    let mut queue = VecDeque::new();
    new_id[start] = 0;
    order.push(start);
    queue.push_back(start);

    while let Some(old) = queue.pop_front() {
        let state = &states[old];
        for &succ in state.epsilon_transitions() {
            if new_id[succ] == usize::MAX {
                new_id[succ] = order.len();
                order.push(succ);
                queue.push_back(succ);
            }
        }
        for (_, targets) in state.transitions() {
            for &succ in targets {
                if new_id[succ] == usize::MAX {
                    new_id[succ] = order.len();
                    order.push(succ);
                    queue.push_back(succ);
                }
            }
        }
    }

    for old in 0..n {
        if new_id[old] == usize::MAX {
            new_id[old] = order.len();
            order.push(old);
        }
    }

    let mut new_states: Vec<Option<State>> = vec![None; n];
    for (old_id, mut state) in states.into_iter().enumerate() {
        let mapped = new_id[old_id];
        remap_state(&mut state, mapped, &new_id);
        new_states[mapped] = Some(state);
    }

    let new_states = new_states
        .into_iter()
        .map(|s| s.expect("every old id maps to exactly one new id"))
        .collect();

    (new_states, new_id[start])
}

fn remap_state(state: &mut State, new_id_self: usize, new_id: &[usize]) {
    let is_final = state.is_final();
    let eps: Vec<usize> = state.epsilon_transitions().iter().map(|&t| new_id[t]).collect();
    let transitions: Vec<(u8, Vec<usize>)> = state
        .transitions()
        .map(|(c, targets)| (c, targets.iter().map(|&t| new_id[t]).collect()))
        .collect();

    *state = State::new(new_id_self);
    state.set_final(is_final);
    for target in eps {
        state.add_epsilon_transition(target);
    }
    for (c, targets) in transitions {
        for target in targets {
            state.add_transition(c, target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_becomes_zero() {
        let mut states = vec![State::new(0), State::new(1), State::new(2)];
        states[2].add_epsilon_transition(0);
        states[0].set_final(true);
        let (states, start) = normalize(states, 2);
        assert_eq!(start, 0);
        assert_eq!(states.len(), 3);
        assert!(states.iter().any(|s| s.is_final()));
    }

    #[test]
    fn unreachable_states_appended() {
        // state 0 is start, state 1 is unreachable, state 2 is reachable via eps
        let mut states = vec![State::new(0), State::new(1), State::new(2)];
        states[0].add_epsilon_transition(2);
        let (states, start) = normalize(states, 0);
        assert_eq!(start, 0);
        assert_eq!(states.len(), 3);
        // old id 1 (unreachable) must still be present, renumbered to 2
        assert!(states.iter().any(|s| s.id() == 2));
    }
}
