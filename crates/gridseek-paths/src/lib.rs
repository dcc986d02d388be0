//! Path search over 4-connected grids.
//!
//! This crate provides two families of search over an immutable
//! [`gridseek_core::Grid`]:
//!
//! - **A\*** shortest-path search with the Manhattan heuristic
//!   ([`GridSearch::search`])
//! - **Line-of-sight hybrids** that hop straight to the goal once an external
//!   [`LineOfSightOracle`] reports a clear segment, on top of either A\*
//!   ([`HybridSearch::search`]) or breadth-first expansion
//!   ([`HybridSearch::search_breadth_first`])
//!
//! An engine owns all transient search state (node table, [`Frontier`],
//! [`Visited`] set) and reuses it between calls; the grid itself is only
//! ever borrowed read-only.
//!
//! # Frontier ordering
//!
//! The frontier ranks by `f`, then `x`, then `y`. Distinct cells never tie,
//! which makes exploration order, and therefore the returned path,
//! deterministic.

mod astar;
mod bfs;
mod config;
mod distance;
mod error;
mod frontier;
mod hybrid;
mod path;
mod search;
mod traits;
mod visited;

pub use config::{ParseStrategyError, SearchConfig, Strategy};
pub use distance::manhattan;
pub use error::SearchError;
pub use frontier::{Frontier, Rank};
pub use hybrid::HybridSearch;
pub use path::{Path, Waypoint};
pub use search::{GridSearch, Node, STEP_COST, SearchStats};
pub use traits::LineOfSightOracle;
pub use visited::Visited;
