//! The [`CellType`] of a grid cell.

/// Static traversability of a cell. Fixed when the grid is built.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellType {
    #[default]
    Walkable,
    Blocked,
}

impl CellType {
    /// Whether a search may step onto this cell.
    #[inline]
    pub const fn is_walkable(self) -> bool {
        matches!(self, Self::Walkable)
    }

    /// Whether this cell is an obstacle.
    #[inline]
    pub const fn is_blocked(self) -> bool {
        matches!(self, Self::Blocked)
    }
}
