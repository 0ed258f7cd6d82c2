use log::trace;

use crate::state::{Graph, StateId};

/// Set of states reachable after consuming a prefix of the input.
///
/// Keeps insertion order so exploration is deterministic, with a per-state
/// mark for O(1) deduplication.
struct Frontier {
    states: Vec<StateId>,
    marked: Vec<bool>,
}

impl Frontier {
    fn new(len: usize) -> Self {
        Self {
            states: Vec::new(),
            marked: vec![false; len],
        }
    }

    fn insert(&mut self, id: StateId) {
        if !self.marked[id.index()] {
            self.marked[id.index()] = true;
            self.states.push(id);
        }
    }

    fn clear(&mut self) {
        for id in self.states.drain(..) {
            self.marked[id.index()] = false;
        }
    }

    fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Return true if `graph` matches the whole of `input`.
///
/// Runs all paths through the graph in lockstep, one input character at a
/// time, so the cost is bounded by the input length times the number of
/// edges in the graph.
///
/// Termination never consumes a character, so it never enters the frontier.
/// The input is accepted when a state left in the final frontier links to it.
pub fn matches(graph: &Graph, input: &str) -> bool {
    let mut current = Frontier::new(graph.len());
    let mut next = Frontier::new(graph.len());
    current.insert(graph.start());

    for (pos, ch) in input.char_indices() {
        for &id in &current.states {
            for &succ in graph.successors(id) {
                if !graph.is_termination(succ) && graph.accepts_char(succ, ch) {
                    next.insert(succ);
                }
            }
        }
        if next.is_empty() {
            trace!("no state accepts {ch:?} at offset {pos}");
            return false;
        }
        current.clear();
        std::mem::swap(&mut current, &mut next);
    }

    current
        .states
        .iter()
        .any(|&id| graph.successors(id).contains(&graph.termination()))
}
