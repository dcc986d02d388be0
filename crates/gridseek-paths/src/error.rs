use gridseek_core::{Point, Range};
use thiserror::Error;

/// Why a search did not produce a path.
///
/// Every variant leaves the grid untouched. Transient search state is reset
/// at the start of the next call, so any failure is recoverable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Start or end lies outside the grid.
    #[error("endpoint {pos} is outside the grid {bounds}")]
    OutOfRange { pos: Point, bounds: Range },

    /// Start or end is a blocked cell.
    #[error("endpoint {pos} is a blocked cell")]
    BlockedEndpoint { pos: Point },

    /// The frontier ran dry before the goal was reached.
    #[error("no path found")]
    NoPathFound,

    /// The parent chain is longer than the grid has cells. This is a bug in
    /// parent-link maintenance, never a caller error.
    #[error("parent chain exceeds {limit} nodes, path links are corrupt")]
    CorruptPath { limit: usize },

    /// The configured expansion budget ran out.
    #[error("search budget exhausted after {expansions} expansions")]
    BudgetExhausted { expansions: usize },
}

impl SearchError {
    /// Whether this is an internal invariant violation rather than an
    /// expected outcome.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::CorruptPath { .. })
    }
}
