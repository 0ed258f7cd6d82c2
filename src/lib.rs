//! A small regular-expression engine built on an explicit state graph.
//!
//! Patterns are made of ASCII literals, the wildcard `.`, and the postfix
//! quantifiers `*` and `+`. A pattern only matches when it consumes the whole
//! input.

pub mod compiler;
pub mod error;
pub mod matcher;
pub mod state;

use std::fmt;
use std::str::FromStr;

pub use compiler::compile;
pub use error::SyntaxError;
pub use matcher::matches;
pub use state::{Graph, RepeatKind, State, StateId, StateKind};

/// A compiled pattern together with its source text.
#[derive(Debug, Clone)]
pub struct Regex {
    pattern: String,
    graph: Graph,
}

impl Regex {
    pub fn new(pattern: &str) -> Result<Self, SyntaxError> {
        let graph = compile(pattern)?;
        Ok(Self {
            pattern: pattern.to_owned(),
            graph,
        })
    }

    pub fn is_match(&self, input: &str) -> bool {
        matches(&self.graph, input)
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }
}

impl FromStr for Regex {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Regex::new(s)
    }
}

impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// Compile `pattern` and test it against `input` in one go.
pub fn is_match(input: &str, pattern: &str) -> Result<bool, SyntaxError> {
    Ok(matches(&compile(pattern)?, input))
}
