use std::collections::VecDeque;

use gridseek_core::{Grid, Point};

use crate::config::SearchConfig;
use crate::distance::manhattan;
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::path::{Path, reconstruct};
use crate::visited::Visited;

/// Cost of one orthogonal step.
pub const STEP_COST: i32 = 1;

// ---------------------------------------------------------------------------
// Per-cell search state
// ---------------------------------------------------------------------------

/// Transient search bookkeeping for one cell.
///
/// Only meaningful for cells discovered during the current search: a node
/// is always written when first discovered and read only afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Node {
    pub g: i32,
    pub h: i32,
    pub f: i32,
    /// Predecessor on the best known path, by coordinate.
    pub parent: Option<Point>,
}

/// Counters for the most recent search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes whose neighbours were enumerated.
    pub expansions: usize,
    /// Line-of-sight queries issued.
    pub sight_checks: usize,
}

// ---------------------------------------------------------------------------
// GridSearch
// ---------------------------------------------------------------------------

/// Search engine over one borrowed, immutable [`Grid`].
///
/// The engine owns every piece of mutable state (node table, frontier,
/// visited set) and resets it at the top of each search, so it can be
/// reused indefinitely. Independent engines over the same grid never
/// share state.
pub struct GridSearch<'g> {
    pub(crate) grid: &'g Grid,
    pub(crate) config: SearchConfig,
    pub(crate) nodes: Vec<Node>,
    pub(crate) frontier: Frontier,
    pub(crate) visited: Visited,
    pub(crate) queue: VecDeque<usize>,
    pub(crate) stats: SearchStats,
}

impl<'g> GridSearch<'g> {
    /// Create an engine with the default (unbounded) configuration.
    pub fn new(grid: &'g Grid) -> Self {
        Self::with_config(grid, SearchConfig::default())
    }

    pub fn with_config(grid: &'g Grid, config: SearchConfig) -> Self {
        Self {
            grid,
            config,
            nodes: vec![Node::default(); grid.len()],
            frontier: Frontier::new(),
            visited: Visited::new(grid.len()),
            queue: VecDeque::new(),
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Counters from the last search call.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Search state of `p` if the last search marked it visited.
    ///
    /// A* marks a cell when it leaves the frontier, so its costs are final.
    /// The breadth-first variant marks a cell as soon as it is enqueued,
    /// which includes cells still waiting in the queue when the goal was
    /// reached.
    pub fn visited_node(&self, p: Point) -> Option<Node> {
        let i = self.grid.index(p)?;
        self.visited.contains(i).then(|| self.nodes[i])
    }

    /// Number of cells the last search marked visited. See
    /// [`visited_node`](Self::visited_node).
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    // -----------------------------------------------------------------------
    // Shared steps
    // -----------------------------------------------------------------------

    /// Check both endpoints before touching any state. Returns their flat
    /// indices.
    pub(crate) fn validate(&mut self, start: Point, end: Point) -> Result<(usize, usize), SearchError> {
        self.stats = SearchStats::default();
        let bounds = self.grid.bounds();
        let (Some(si), Some(gi)) = (self.grid.index(start), self.grid.index(end)) else {
            let pos = if bounds.contains(start) { end } else { start };
            log::warn!("endpoint {pos} is outside {bounds}");
            return Err(SearchError::OutOfRange { pos, bounds });
        };
        for pos in [start, end] {
            if self.grid.is_blocked(pos) {
                log::warn!("endpoint {pos} is blocked");
                return Err(SearchError::BlockedEndpoint { pos });
            }
        }
        Ok((si, gi))
    }

    /// Clear frontier, visited set and queue, then seed the start node.
    pub(crate) fn begin(&mut self, si: usize) {
        self.frontier.clear();
        self.visited.clear();
        self.queue.clear();
        self.nodes[si] = Node::default();
        self.visited.insert(si);
    }

    /// Count one expansion against the configured budget.
    pub(crate) fn charge(&mut self) -> Result<(), SearchError> {
        if let Some(max) = self.config.max_expansions {
            if self.stats.expansions >= max {
                log::warn!("search budget of {max} expansions exhausted");
                return Err(SearchError::BudgetExhausted {
                    expansions: self.stats.expansions,
                });
            }
        }
        self.stats.expansions += 1;
        Ok(())
    }

    /// Push every walkable, undiscovered orthogonal neighbour of `ci` into
    /// the frontier. Nodes already in the frontier keep their first cost.
    pub(crate) fn expand(&mut self, ci: usize, goal: Point) {
        let cp = self.grid.point(ci);
        let g = self.nodes[ci].g + STEP_COST;
        for np in cp.neighbors_4() {
            let Some(ni) = self.grid.index(np) else {
                continue;
            };
            if !self.grid.is_walkable(np) || self.visited.contains(ni) || self.frontier.contains(np) {
                continue;
            }
            let h = manhattan(np, goal);
            self.nodes[ni] = Node {
                g,
                h,
                f: g + h,
                parent: Some(cp),
            };
            self.frontier.insert(np, g + h);
        }
        log::trace!("expanded {cp}, frontier holds {}", self.frontier.len());
    }

    /// Promote the best frontier node to visited and return its index.
    pub(crate) fn advance(&mut self) -> Result<usize, SearchError> {
        let Some(next) = self.frontier.extract_min() else {
            log::debug!(
                "frontier exhausted after {} expansions",
                self.stats.expansions
            );
            return Err(SearchError::NoPathFound);
        };
        let ni = self.grid.index(next.pos).ok_or(SearchError::CorruptPath {
            limit: self.grid.len(),
        })?;
        self.visited.insert(ni);
        Ok(ni)
    }

    /// Make `current` the goal's parent, costing the hop by the number of
    /// unit steps it stands in for.
    pub(crate) fn link_goal(&mut self, ci: usize, gi: usize) {
        let cp = self.grid.point(ci);
        let gp = self.grid.point(gi);
        let g = self.nodes[ci].g + manhattan(cp, gp);
        self.nodes[gi] = Node {
            g,
            h: 0,
            f: g,
            parent: Some(cp),
        };
    }

    pub(crate) fn finish(&self, gi: usize) -> Result<Path, SearchError> {
        let path = reconstruct(self.grid, &self.nodes, self.grid.point(gi))?;
        log::debug!(
            "path of {} cells found after {} expansions",
            path.len(),
            self.stats.expansions
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridseek_core::CellType;

    #[test]
    fn validate_reports_first_offending_endpoint() {
        let grid = Grid::open(5, 5).unwrap();
        let mut gs = GridSearch::new(&grid);
        let err = gs.validate(Point::new(0, 0), Point::new(5, 5)).unwrap_err();
        assert!(matches!(err, SearchError::OutOfRange { pos, .. } if pos == Point::new(5, 5)));
        let err = gs.validate(Point::new(-1, 0), Point::new(9, 9)).unwrap_err();
        assert!(matches!(err, SearchError::OutOfRange { pos, .. } if pos == Point::new(-1, 0)));
    }

    #[test]
    fn bounds_are_checked_before_blockage() {
        let grid = Grid::new(3, 3, |_| CellType::Blocked).unwrap();
        let mut gs = GridSearch::new(&grid);
        assert!(matches!(
            gs.validate(Point::new(0, 0), Point::new(3, 0)),
            Err(SearchError::OutOfRange { .. })
        ));
        assert_eq!(
            gs.validate(Point::new(0, 0), Point::new(1, 0)),
            Err(SearchError::BlockedEndpoint {
                pos: Point::new(0, 0)
            })
        );
    }

    #[test]
    fn expand_skips_blocked_and_known_cells() {
        let grid = Grid::new(3, 3, |p| {
            if p == Point::new(1, 0) {
                CellType::Blocked
            } else {
                CellType::Walkable
            }
        })
        .unwrap();
        let mut gs = GridSearch::new(&grid);
        let si = grid.index(Point::new(1, 1)).unwrap();
        gs.begin(si);
        gs.frontier.insert(Point::new(0, 1), 42);
        gs.expand(si, Point::new(2, 2));

        // (1,0) blocked, (0,1) already queued: only down and right are new.
        assert_eq!(gs.frontier.len(), 3);
        let down = gs.nodes[grid.index(Point::new(1, 2)).unwrap()];
        assert_eq!(down.g, 1);
        assert_eq!(down.h, 1);
        assert_eq!(down.f, 2);
        assert_eq!(down.parent, Some(Point::new(1, 1)));
        // Untouched: no decrease-key.
        assert_eq!(gs.nodes[grid.index(Point::new(0, 1)).unwrap()], Node::default());
    }

    #[test]
    fn budget_counts_expansions() {
        let grid = Grid::open(2, 2).unwrap();
        let mut gs = GridSearch::with_config(&grid, SearchConfig::default().with_max_expansions(2));
        assert!(gs.charge().is_ok());
        assert!(gs.charge().is_ok());
        assert_eq!(
            gs.charge(),
            Err(SearchError::BudgetExhausted { expansions: 2 })
        );
    }

    #[test]
    fn set_config_applies_to_next_search() {
        let grid = Grid::open(3, 3).unwrap();
        let mut gs = GridSearch::with_config(&grid, SearchConfig::default().with_max_expansions(1));
        let (a, b) = (Point::new(0, 0), Point::new(2, 2));
        assert_eq!(
            gs.search(a, b),
            Err(SearchError::BudgetExhausted { expansions: 1 })
        );

        gs.set_config(SearchConfig::default());
        assert_eq!(gs.config().max_expansions, None);
        assert_eq!(gs.search(a, b).unwrap().len(), 5);
    }
}
