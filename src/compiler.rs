use log::{debug, trace};

use crate::error::SyntaxError;
use crate::state::{Graph, RepeatKind, State, StateId, StateKind};

/// Characters that carry meaning in fuller regex dialects. They are rejected
/// rather than treated as literals.
const RESERVED: &[char] = &['\\', '|', '(', ')', '[', ']', '{', '}', '^', '$', '?'];

fn is_literal(ch: char) -> bool {
    (ch == ' ' || ch.is_ascii_graphic()) && !RESERVED.contains(&ch)
}

/// Compile `pattern` into a state graph.
///
/// Example:
/// - Pattern: `a*b` → start → 'a' ⟲, star('a'); 'b' is entered from start,
///   'a' and star('a'); 'b' → termination
pub fn compile(pattern: &str) -> Result<Graph, SyntaxError> {
    let mut compiler = Compiler::new();
    for (pos, ch) in pattern.char_indices() {
        match ch {
            '.' => compiler.push_unit(StateKind::Wildcard),
            '*' => compiler.quantify(RepeatKind::Star, ch, pos)?,
            '+' => compiler.quantify(RepeatKind::Plus, ch, pos)?,
            c if is_literal(c) => compiler.push_unit(StateKind::Literal(c)),
            c => return Err(SyntaxError::UnsupportedChar { ch: c, pos }),
        }
    }
    let graph = compiler.finish();
    debug!("compiled {pattern:?} into {} states", graph.len());
    trace!("graph for {pattern:?}:\n{graph}");
    Ok(graph)
}

/// The consuming state most recently created from a `.` or literal.
#[derive(Clone, Copy)]
struct Unit {
    state: StateId,
    quantified: bool,
}

struct Compiler {
    states: Vec<State>,
    /// States the next unit is entered from.
    entries: Vec<StateId>,
    /// Entries in force before `last` was created; they bypass `last` when
    /// it turns out to be optional.
    skipped: Vec<StateId>,
    last: Option<Unit>,
}

impl Compiler {
    fn new() -> Self {
        Self {
            states: vec![State::new(StateKind::Start)],
            entries: vec![Graph::START],
            skipped: Vec::new(),
            last: None,
        }
    }

    fn push(&mut self, kind: StateKind) -> StateId {
        let id = StateId(self.states.len());
        self.states.push(State::new(kind));
        id
    }

    fn link(&mut self, from: StateId, to: StateId) {
        self.states[from.0].link(to);
    }

    fn link_entries(&mut self, to: StateId) {
        for i in 0..self.entries.len() {
            let from = self.entries[i];
            self.link(from, to);
        }
    }

    fn push_unit(&mut self, kind: StateKind) {
        let id = self.push(kind);
        self.link_entries(id);
        self.skipped = std::mem::replace(&mut self.entries, vec![id]);
        self.last = Some(Unit {
            state: id,
            quantified: false,
        });
    }

    fn quantify(&mut self, kind: RepeatKind, ch: char, pos: usize) -> Result<(), SyntaxError> {
        let Some(unit) = self.last else {
            return Err(SyntaxError::DanglingQuantifier { ch, pos });
        };
        if unit.quantified {
            return Err(SyntaxError::NestedQuantifier { ch, pos });
        }

        let q = self.push(StateKind::Repeat {
            kind,
            inner: unit.state,
        });
        self.link(unit.state, unit.state);
        self.link(unit.state, q);

        self.entries = match kind {
            RepeatKind::Star => {
                let mut entries = self.skipped.clone();
                entries.extend([unit.state, q]);
                entries
            }
            RepeatKind::Plus => vec![unit.state, q],
        };
        self.last = Some(Unit {
            quantified: true,
            ..unit
        });
        Ok(())
    }

    fn finish(mut self) -> Graph {
        let termination = self.push(StateKind::Termination);
        self.link_entries(termination);
        debug_assert!(self
            .states
            .iter()
            .all(|s| s.is_termination() || !s.successors().is_empty()));
        Graph {
            states: self.states,
            termination,
        }
    }
}
