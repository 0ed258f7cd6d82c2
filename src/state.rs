use std::fmt;

/// Index of a state inside a [`Graph`].
///
/// States refer to each other through ids instead of owning pointers, because
/// quantifiers introduce self-loops and the graph is not a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub(crate) usize);

impl StateId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatKind {
    /// `*`, zero or more.
    Star,
    /// `+`, one or more.
    Plus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateKind {
    Start,
    Termination,
    Literal(char),
    Wildcard,
    /// Wraps a consuming state and tests characters the same way it does.
    Repeat { kind: RepeatKind, inner: StateId },
}

#[derive(Debug, Clone)]
pub struct State {
    kind: StateKind,
    successors: Vec<StateId>,
}

impl State {
    pub(crate) fn new(kind: StateKind) -> Self {
        Self {
            kind,
            successors: Vec::new(),
        }
    }

    pub fn kind(&self) -> StateKind {
        self.kind
    }

    pub fn successors(&self) -> &[StateId] {
        &self.successors
    }

    pub fn is_termination(&self) -> bool {
        matches!(self.kind, StateKind::Termination)
    }

    /// Add an edge to `to` unless it is already present.
    pub(crate) fn link(&mut self, to: StateId) {
        if !self.successors.contains(&to) {
            self.successors.push(to);
        }
    }
}

/// A compiled pattern: an arena of states with the start state at id 0.
///
/// The graph is never mutated after compilation, so it can be shared freely
/// between match queries and threads.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) states: Vec<State>,
    pub(crate) termination: StateId,
}

impl Graph {
    pub const START: StateId = StateId(0);

    pub fn start(&self) -> StateId {
        Self::START
    }

    pub fn termination(&self) -> StateId {
        self.termination
    }

    /// Number of states, Start and Termination included.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.0]
    }

    pub fn successors(&self, id: StateId) -> &[StateId] {
        self.states[id.0].successors()
    }

    pub fn is_termination(&self, id: StateId) -> bool {
        id == self.termination
    }

    pub fn iter(&self) -> impl Iterator<Item = (StateId, &State)> {
        self.states.iter().enumerate().map(|(i, s)| (StateId(i), s))
    }

    /// Whether the state `id` consumes `ch`.
    ///
    /// `Start` never consumes anything. `Termination` accepts vacuously; the
    /// matcher does not rely on that and identifies it by id instead.
    pub fn accepts_char(&self, id: StateId, ch: char) -> bool {
        match self.state(id).kind {
            StateKind::Start => false,
            StateKind::Termination => true,
            StateKind::Literal(c) => c == ch,
            StateKind::Wildcard => true,
            // The compiler never wraps a Repeat in another Repeat, so this
            // recurses at most once.
            StateKind::Repeat { inner, .. } => self.accepts_char(inner, ch),
        }
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateKind::Start => write!(f, "start"),
            StateKind::Termination => write!(f, "termination"),
            StateKind::Literal(c) => write!(f, "literal {c:?}"),
            StateKind::Wildcard => write!(f, "wildcard"),
            StateKind::Repeat {
                kind: RepeatKind::Star,
                inner,
            } => write!(f, "star({inner})"),
            StateKind::Repeat {
                kind: RepeatKind::Plus,
                inner,
            } => write!(f, "plus({inner})"),
        }
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, state) in self.iter() {
            write!(f, "{id}: {}", state.kind)?;
            let mut succs = state.successors.iter();
            if let Some(first) = succs.next() {
                write!(f, " -> {first}")?;
                for s in succs {
                    write!(f, ", {s}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // start -> 'a' -> star('a') -> termination, with a self-loop on 'a'.
    fn star_graph() -> Graph {
        let mut states = vec![
            State::new(StateKind::Start),
            State::new(StateKind::Literal('a')),
            State::new(StateKind::Repeat {
                kind: RepeatKind::Star,
                inner: StateId(1),
            }),
            State::new(StateKind::Termination),
        ];
        states[0].link(StateId(1));
        states[1].link(StateId(1));
        states[1].link(StateId(2));
        states[2].link(StateId(3));
        Graph {
            states,
            termination: StateId(3),
        }
    }

    #[test]
    fn acceptance_per_kind() {
        let g = star_graph();
        assert!(!g.accepts_char(g.start(), 'a'));
        assert!(g.accepts_char(StateId(1), 'a'));
        assert!(!g.accepts_char(StateId(1), 'b'));
        assert!(g.accepts_char(StateId(2), 'a'));
        assert!(!g.accepts_char(StateId(2), 'b'));
        assert!(g.accepts_char(g.termination(), 'z'));
    }

    #[test]
    fn link_is_deduplicated_per_state() {
        let mut s = State::new(StateKind::Wildcard);
        s.link(StateId(4));
        s.link(StateId(4));
        s.link(StateId(2));
        assert_eq!(s.successors(), &[StateId(4), StateId(2)]);

        // A fresh state of the same kind starts with its own empty edge list.
        let other = State::new(StateKind::Wildcard);
        assert!(other.successors().is_empty());
    }

    #[test]
    fn display() {
        assert_eq!(
            star_graph().to_string(),
            "0: start -> 1\n\
             1: literal 'a' -> 1, 2\n\
             2: star(1) -> 3\n\
             3: termination\n"
        );
    }
}
