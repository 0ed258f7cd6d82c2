use thiserror::Error;

/// Error returned when a pattern uses syntax the compiler does not support.
///
/// `pos` is the byte offset of `ch` within the pattern.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("unsupported character {ch:?} at offset {pos}")]
    UnsupportedChar { ch: char, pos: usize },

    #[error("quantifier {ch:?} at offset {pos} has nothing to repeat")]
    DanglingQuantifier { ch: char, pos: usize },

    #[error("quantifier {ch:?} at offset {pos} follows another quantifier")]
    NestedQuantifier { ch: char, pos: usize },
}

impl SyntaxError {
    pub fn position(&self) -> usize {
        match self {
            SyntaxError::UnsupportedChar { pos, .. }
            | SyntaxError::DanglingQuantifier { pos, .. }
            | SyntaxError::NestedQuantifier { pos, .. } => *pos,
        }
    }
}
