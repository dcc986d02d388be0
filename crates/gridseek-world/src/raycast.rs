//! A geometric line-of-sight oracle over a [`Grid`].
//!
//! Every blocked cell is an axis-aligned box placed by a [`CellLayout`].
//! The sight line runs between the centres of the two cells and is
//! obstructed if it meets any blocked box, including touching a corner or
//! an edge.

use gridseek_core::{Grid, Point, Range};
use gridseek_paths::LineOfSightOracle;

use crate::error::MapError;
use crate::layout::{CellLayout, WorldPoint};

/// Ray caster answering sight queries against one grid.
#[derive(Debug, Clone, Copy)]
pub struct RayCaster<'g> {
    grid: &'g Grid,
    layout: CellLayout,
}

impl<'g> RayCaster<'g> {
    /// A caster with unit spacing and unit cells.
    pub fn new(grid: &'g Grid) -> Self {
        Self {
            grid,
            layout: CellLayout::default(),
        }
    }

    pub fn with_layout(grid: &'g Grid, layout: CellLayout) -> Result<Self, MapError> {
        layout.validate()?;
        Ok(Self { grid, layout })
    }

    #[inline]
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    #[inline]
    pub fn layout(&self) -> CellLayout {
        self.layout
    }

    /// The first blocked cell (in row-major order) whose box meets the
    /// segment from `from` to `to`, ignoring the two endpoint cells.
    pub fn first_obstacle(&self, from: Point, to: Point) -> Option<Point> {
        let a = self.layout.to_world(from);
        let b = self.layout.to_world(to);
        self.candidates(from, to)
            .iter()
            .filter(|&p| p != from && p != to && self.grid.is_blocked(p))
            .find(|&p| {
                let (lo, hi) = self.layout.bounds_of(p);
                segment_meets_box(a, b, lo, hi)
            })
    }

    /// Cells whose boxes could reach the segment: the endpoints' bounding
    /// rectangle widened by however many cells a box can overhang, never
    /// more than the grid itself.
    fn candidates(&self, from: Point, to: Point) -> Range {
        let bounds = self.grid.bounds();
        let step = self.layout.offset_x.abs().min(self.layout.offset_y.abs());
        let limit = bounds.width().max(bounds.height());
        let margin = (self.layout.cell_size / (2.0 * step))
            .ceil()
            .clamp(1.0, f64::from(limit)) as i32;
        Range::new(
            from.x.min(to.x).saturating_sub(margin).max(bounds.min.x),
            from.y.min(to.y).saturating_sub(margin).max(bounds.min.y),
            from.x.max(to.x).saturating_add(margin + 1).min(bounds.max.x),
            from.y.max(to.y).saturating_add(margin + 1).min(bounds.max.y),
        )
    }
}

impl LineOfSightOracle for RayCaster<'_> {
    fn is_obstructed(&self, from: Point, to: Point) -> bool {
        match self.first_obstacle(from, to) {
            Some(p) => {
                log::trace!("ray {from} -> {to} stopped by {p}");
                true
            }
            None => false,
        }
    }
}

/// Slab test of segment `a..b` against the closed box `lo..hi`.
fn segment_meets_box(a: WorldPoint, b: WorldPoint, lo: WorldPoint, hi: WorldPoint) -> bool {
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    for (p, d, min, max) in [(a.x, b.x - a.x, lo.x, hi.x), (a.y, b.y - a.y, lo.y, hi.y)] {
        if d == 0.0 {
            if p < min || p > max {
                return false;
            }
            continue;
        }
        let (mut near, mut far) = ((min - p) / d, (max - p) / d);
        if near > far {
            std::mem::swap(&mut near, &mut far);
        }
        t0 = t0.max(near);
        t1 = t1.min(far);
        if t0 > t1 {
            return false;
        }
    }
    true
}
