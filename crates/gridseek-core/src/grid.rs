//! The [`Grid`] type, an immutable 2D array of [`CellType`]s.
//!
//! A `Grid` is built once and never mutated. Search engines borrow it
//! read-only and keep their transient per-cell state in their own tables,
//! so one grid can back any number of independent searches.

use thiserror::Error;

use crate::cell::CellType;
use crate::geom::{Point, Range, RangeIter};

/// Errors raised while building or querying a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid size must be positive, got {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    #[error("expected {expected} cells for the grid, got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },

    #[error("cell {pos} is outside the grid {bounds}")]
    OutOfBounds { pos: Point, bounds: Range },
}

/// A rectangular grid of walkable and blocked cells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridData", into = "GridData")
)]
pub struct Grid {
    cells: Vec<CellType>,
    bounds: Range,
}

impl Grid {
    /// Build a grid, asking `assign` for the type of every cell in
    /// row-major order.
    pub fn new(
        width: i32,
        height: i32,
        mut assign: impl FnMut(Point) -> CellType,
    ) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidSize { width, height });
        }
        let bounds = Range::sized(width, height);
        let cells = bounds.iter().map(&mut assign).collect();
        Ok(Self { cells, bounds })
    }

    /// A grid with every cell walkable.
    pub fn open(width: i32, height: i32) -> Result<Self, GridError> {
        Self::new(width, height, |_| CellType::Walkable)
    }

    /// Build a grid from row-major cell data.
    pub fn from_cells(width: i32, height: i32, cells: Vec<CellType>) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidSize { width, height });
        }
        let bounds = Range::sized(width, height);
        if cells.len() != bounds.len() {
            return Err(GridError::CellCountMismatch {
                expected: bounds.len(),
                actual: cells.len(),
            });
        }
        Ok(Self { cells, bounds })
    }

    /// The bounding range `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Flat row-major index of `p`, or `None` outside the grid.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width() as usize + p.x as usize)
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.width() as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Type of the cell at `p`.
    pub fn cell(&self, p: Point) -> Result<CellType, GridError> {
        self.index(p)
            .map(|i| self.cells[i])
            .ok_or(GridError::OutOfBounds {
                pos: p,
                bounds: self.bounds,
            })
    }

    /// Whether `p` is inside the grid and walkable.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| self.cells[i].is_walkable())
    }

    /// Whether `p` is inside the grid and blocked.
    #[inline]
    pub fn is_blocked(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| self.cells[i].is_blocked())
    }

    /// Count cells of the given type.
    pub fn count(&self, kind: CellType) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// Row-major iterator over `(Point, CellType)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            inner: self.bounds.iter(),
        }
    }
}

/// Serialized form of a [`Grid`]; validated on the way back in.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridData {
    width: i32,
    height: i32,
    cells: Vec<CellType>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridData> for Grid {
    type Error = GridError;

    fn try_from(data: GridData) -> Result<Self, GridError> {
        Grid::from_cells(data.width, data.height, data.cells)
    }
}

#[cfg(feature = "serde")]
impl From<Grid> for GridData {
    fn from(g: Grid) -> Self {
        Self {
            width: g.width(),
            height: g.height(),
            cells: g.cells,
        }
    }
}

/// Iterator over `(Point, CellType)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    inner: RangeIter,
}

impl Iterator for GridIter<'_> {
    type Item = (Point, CellType);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.inner.next()?;
        let i = self.grid.index(p)?;
        Some((p, self.grid.cells[i]))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_json_keeps_cells() {
        let g = Grid::new(3, 2, |p| {
            if p.x == 1 {
                CellType::Blocked
            } else {
                CellType::Walkable
            }
        })
        .unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn short_cell_list_is_rejected() {
        let json = r#"{"width":2,"height":2,"cells":["Walkable"]}"#;
        assert!(serde_json::from_str::<Grid>(json).is_err());
    }
}
