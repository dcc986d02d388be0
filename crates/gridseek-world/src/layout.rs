//! Placement of grid cells in world space.

use gridseek_core::Point;

use crate::error::MapError;

/// A point in world space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
}

/// Affine placement of cells: cell `(x, y)` sits at
/// `(begin_x + x * offset_x, begin_y + y * offset_y)`, occupying a square
/// of side `cell_size` centred there.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CellLayout {
    pub begin_x: f64,
    pub begin_y: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub cell_size: f64,
}

impl Default for CellLayout {
    fn default() -> Self {
        Self {
            begin_x: 0.0,
            begin_y: 0.0,
            offset_x: 1.0,
            offset_y: 1.0,
            cell_size: 1.0,
        }
    }
}

impl CellLayout {
    pub fn validate(&self) -> Result<(), MapError> {
        let finite = [self.begin_x, self.begin_y, self.offset_x, self.offset_y, self.cell_size]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(MapError::InvalidLayout("values must be finite"));
        }
        if self.offset_x == 0.0 || self.offset_y == 0.0 {
            return Err(MapError::InvalidLayout("offsets must be non-zero"));
        }
        if self.cell_size <= 0.0 {
            return Err(MapError::InvalidLayout("cell size must be positive"));
        }
        Ok(())
    }

    /// World-space centre of cell `p`.
    #[inline]
    pub fn to_world(&self, p: Point) -> WorldPoint {
        WorldPoint {
            x: self.begin_x + p.x as f64 * self.offset_x,
            y: self.begin_y + p.y as f64 * self.offset_y,
        }
    }

    /// The cell whose centre is nearest to `w`.
    pub fn to_cell(&self, w: WorldPoint) -> Point {
        Point::new(
            ((w.x - self.begin_x) / self.offset_x).round() as i32,
            ((w.y - self.begin_y) / self.offset_y).round() as i32,
        )
    }

    /// World-space box `(min, max)` occupied by cell `p`.
    pub fn bounds_of(&self, p: Point) -> (WorldPoint, WorldPoint) {
        let c = self.to_world(p);
        let half = self.cell_size / 2.0;
        (
            WorldPoint {
                x: c.x - half,
                y: c.y - half,
            },
            WorldPoint {
                x: c.x + half,
                y: c.y + half,
            },
        )
    }
}
