//! **gridseek-core**: core types for grid path search.
//!
//! This crate provides the static world model shared by every search:
//! cell coordinates ([`Point`]), grid rectangles ([`Range`]), cell
//! traversability ([`CellType`]) and the immutable [`Grid`].

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::CellType;
pub use geom::{Point, Range};
pub use grid::{Grid, GridError, GridIter};
