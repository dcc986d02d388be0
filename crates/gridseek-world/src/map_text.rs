//! ASCII maps.
//!
//! `.` is walkable, `#` is blocked. `S` and `G` mark a walkable start and
//! goal. Lines are separated by `'\n'` and must all have the same width;
//! surrounding whitespace of the whole text is ignored.

use std::fmt::Write as _;
use std::str::FromStr;

use gridseek_core::{CellType, Grid, Point};
use gridseek_paths::Path;

use crate::error::MapError;

/// A grid parsed from text, with optional start and goal markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapText {
    grid: Grid,
    start: Option<Point>,
    goal: Option<Point>,
}

impl MapText {
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MapError::Empty);
        }

        let mut cells = Vec::new();
        let mut start = None;
        let mut goal = None;
        let mut width = None;
        let mut height = 0;

        for (y, line) in s.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            let mut x = 0;
            for ch in line.chars() {
                let pos = Point::new(x as i32, y as i32);
                let cell = match ch {
                    '.' => CellType::Walkable,
                    '#' => CellType::Blocked,
                    'S' | 'G' => {
                        let slot = if ch == 'S' { &mut start } else { &mut goal };
                        if slot.replace(pos).is_some() {
                            return Err(MapError::DuplicateMarker { ch, pos });
                        }
                        CellType::Walkable
                    }
                    _ => return Err(MapError::InvalidRune { ch, pos }),
                };
                cells.push(cell);
                x += 1;
            }
            match width {
                None => width = Some(x),
                Some(w) if w != x => {
                    return Err(MapError::InconsistentSize {
                        line: y,
                        expected: w,
                        found: x,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.unwrap_or(0) as i32;
        let grid = Grid::from_cells(width, height, cells)?;
        Ok(Self { grid, start, goal })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

impl FromStr for MapText {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Draw `grid` as text, overlaying `path` if given: `S` and `G` for its
/// endpoints and `*` for every waypoint in between.
pub fn render(grid: &Grid, path: Option<&Path>) -> String {
    let mut out = String::with_capacity(grid.len() + grid.height() as usize);
    for (p, cell) in grid.iter() {
        let ch = match path {
            Some(path) if path.start() == Some(p) => 'S',
            Some(path) if path.goal() == Some(p) => 'G',
            Some(path) if path.contains(p) => '*',
            _ if cell.is_blocked() => '#',
            _ => '.',
        };
        out.push(ch);
        if p.x == grid.width() - 1 && p.y < grid.height() - 1 {
            out.push('\n');
        }
    }
    out
}

/// Like [`render`], followed by a one-line summary of the path.
pub fn render_with_summary(grid: &Grid, path: &Path) -> String {
    let mut out = render(grid, Some(path));
    let _ = write!(
        out,
        "\n{} waypoints, cost {}, {} hop(s)",
        path.len(),
        path.cost(),
        path.hops().count()
    );
    out
}
