//! Line-of-sight short-circuit on top of [`GridSearch`].
//!
//! Before every expansion the current node asks a [`LineOfSightOracle`]
//! whether the goal is visible. If it is, the goal is linked straight to the
//! current node and the search ends with a single hop. This trades path
//! optimality for far fewer expansions across open areas.

use gridseek_core::{Grid, Point};

use crate::config::{SearchConfig, Strategy};
use crate::error::SearchError;
use crate::path::Path;
use crate::search::{GridSearch, SearchStats};
use crate::traits::LineOfSightOracle;

/// A [`GridSearch`] paired with the oracle its hybrid variants consult.
pub struct HybridSearch<'g, O> {
    engine: GridSearch<'g>,
    oracle: O,
}

impl<'g, O: LineOfSightOracle> HybridSearch<'g, O> {
    pub fn new(grid: &'g Grid, oracle: O) -> Self {
        Self::with_engine(GridSearch::new(grid), oracle)
    }

    pub fn with_config(grid: &'g Grid, config: SearchConfig, oracle: O) -> Self {
        Self::with_engine(GridSearch::with_config(grid, config), oracle)
    }

    pub fn with_engine(engine: GridSearch<'g>, oracle: O) -> Self {
        Self { engine, oracle }
    }

    #[inline]
    pub fn engine(&self) -> &GridSearch<'g> {
        &self.engine
    }

    #[inline]
    pub fn engine_mut(&mut self) -> &mut GridSearch<'g> {
        &mut self.engine
    }

    #[inline]
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.engine.stats()
    }

    pub fn into_parts(self) -> (GridSearch<'g>, O) {
        (self.engine, self.oracle)
    }

    /// Run the named strategy. [`Strategy::AStar`] ignores the oracle.
    pub fn run(&mut self, strategy: Strategy, start: Point, end: Point) -> Result<Path, SearchError> {
        match strategy {
            Strategy::AStar => self.engine.search(start, end),
            Strategy::AStarWithSight => self.search(start, end),
            Strategy::BfsWithSight => self.search_breadth_first(start, end),
        }
    }

    /// A* that hops to the goal as soon as the current node can see it.
    ///
    /// The sight check is made from the node currently being expanded, so
    /// where the hop starts depends on how far the search has progressed.
    /// At most one oracle query is issued per expansion.
    pub fn search(&mut self, start: Point, end: Point) -> Result<Path, SearchError> {
        let (si, gi) = self.engine.validate(start, end)?;
        log::debug!("hybrid a* search {start} -> {end}");
        self.engine.begin(si);

        let mut ci = si;
        while ci != gi {
            if self.goal_in_sight(ci, end) {
                self.engine.link_goal(ci, gi);
                break;
            }
            self.engine.charge()?;
            self.engine.expand(ci, end);
            ci = self.engine.advance()?;
        }
        self.engine.finish(gi)
    }

    pub(crate) fn goal_in_sight(&mut self, ci: usize, end: Point) -> bool {
        let cp = self.engine.grid.point(ci);
        self.engine.stats.sight_checks += 1;
        let clear = !self.oracle.is_obstructed(cp, end);
        log::trace!("sight {cp} -> {end}: {}", if clear { "clear" } else { "blocked" });
        clear
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridseek_core::CellType;

    fn never_blocked(_: Point, _: Point) -> bool {
        false
    }

    fn always_blocked(_: Point, _: Point) -> bool {
        true
    }

    #[test]
    fn clear_sight_jumps_from_start() {
        let grid = Grid::open(30, 30).unwrap();
        let mut hs = HybridSearch::new(&grid, never_blocked);
        let path = hs.search(Point::new(0, 0), Point::new(29, 17)).unwrap();
        assert_eq!(
            path.clone().into_points(),
            vec![Point::new(0, 0), Point::new(29, 17)]
        );
        assert_eq!(path.cost(), 46);
        assert_eq!(hs.stats().sight_checks, 1);
        assert_eq!(hs.stats().expansions, 0);
    }

    #[test]
    fn blocked_sight_matches_plain_astar() {
        let grid = Grid::new(7, 5, |p| {
            if p.x == 3 && p.y != 4 {
                CellType::Blocked
            } else {
                CellType::Walkable
            }
        })
        .unwrap();
        let (a, b) = (Point::new(0, 0), Point::new(6, 0));
        let mut hs = HybridSearch::new(&grid, always_blocked);
        let hybrid = hs.search(a, b).unwrap();
        let plain = GridSearch::new(&grid).search(a, b).unwrap();
        assert_eq!(hybrid, plain);
        assert_eq!(hs.stats().sight_checks, hs.stats().expansions);
    }

    #[test]
    fn hop_starts_from_first_node_with_sight() {
        // Sight of the goal only from row y = 2.
        let grid = Grid::open(8, 5).unwrap();
        let oracle = |from: Point, _: Point| from.y != 2;
        let mut hs = HybridSearch::new(&grid, oracle);
        let path = hs.search(Point::new(0, 0), Point::new(7, 4)).unwrap();
        let hops: Vec<_> = path.hops().collect();
        assert_eq!(hops.len(), 1);
        assert_eq!(hops[0].0.y, 2);
        assert_eq!(hops[0].1, Point::new(7, 4));
        // Every segment before the hop is a unit step.
        let pts = path.clone().into_points();
        assert!(pts[..pts.len() - 1].windows(2).all(|w| w[0].is_adjacent_4(w[1])));
        assert!(path.waypoints().windows(2).all(|w| w[0].g < w[1].g));
    }

    #[test]
    fn start_equals_end_skips_oracle() {
        let grid = Grid::open(3, 3).unwrap();
        let mut hs = HybridSearch::new(&grid, never_blocked);
        let path = hs.search(Point::new(2, 2), Point::new(2, 2)).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(hs.stats().sight_checks, 0);
    }

    #[test]
    fn validation_precedes_oracle() {
        let grid = Grid::new(4, 4, |p| {
            if p == Point::new(3, 3) {
                CellType::Blocked
            } else {
                CellType::Walkable
            }
        })
        .unwrap();
        let mut hs = HybridSearch::new(&grid, never_blocked);
        assert!(matches!(
            hs.search(Point::new(0, 0), Point::new(4, 0)),
            Err(SearchError::OutOfRange { .. })
        ));
        assert_eq!(
            hs.search(Point::new(0, 0), Point::new(3, 3)),
            Err(SearchError::BlockedEndpoint {
                pos: Point::new(3, 3)
            })
        );
        assert_eq!(hs.stats().sight_checks, 0);
    }

    #[test]
    fn run_dispatches_by_strategy() {
        let grid = Grid::open(5, 5).unwrap();
        let mut hs = HybridSearch::new(&grid, never_blocked);
        let (a, b) = (Point::new(0, 0), Point::new(4, 4));
        assert_eq!(hs.run(Strategy::AStar, a, b).unwrap().len(), 9);
        assert_eq!(hs.run(Strategy::AStarWithSight, a, b).unwrap().len(), 2);
        assert_eq!(hs.run(Strategy::BfsWithSight, a, b).unwrap().len(), 2);
    }

    #[test]
    fn into_parts_keeps_engine_state() {
        let grid = Grid::open(4, 4).unwrap();
        let mut hs = HybridSearch::new(&grid, never_blocked);
        hs.search(Point::new(0, 0), Point::new(3, 3)).unwrap();
        assert_eq!(hs.stats().sight_checks, 1);

        let (mut engine, oracle) = hs.into_parts();
        assert_eq!(engine.stats().sight_checks, 1);
        assert!(!oracle.is_obstructed(Point::new(0, 0), Point::new(3, 3)));
        let path = engine.search(Point::new(0, 0), Point::new(3, 3)).unwrap();
        assert_eq!(path.len(), 7);
        assert_eq!(engine.stats().sight_checks, 0);
    }
}
