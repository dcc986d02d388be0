use gridseek_core::{GridError, Point};
use thiserror::Error;

/// Errors raised while generating or parsing maps.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    #[error("block probability must be below 100, got {0}")]
    InvalidProbability(u8),

    #[error("map text is empty")]
    Empty,

    #[error("map line {line} is {found} cells wide, expected {expected}")]
    InconsistentSize {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("map contains invalid rune \u{201c}{ch}\u{201d} at {pos}")]
    InvalidRune { ch: char, pos: Point },

    #[error("marker \u{201c}{ch}\u{201d} appears more than once, again at {pos}")]
    DuplicateMarker { ch: char, pos: Point },

    #[error("invalid cell layout: {0}")]
    InvalidLayout(&'static str),

    #[error(transparent)]
    Grid(#[from] GridError),
}
