use gridseek_core::Point;

use crate::error::SearchError;
use crate::hybrid::HybridSearch;
use crate::path::Path;
use crate::search::Node;
use crate::traits::LineOfSightOracle;

/// Enqueue order for the breadth-first variant: -x, +x, -y, +y.
const FIFO_ORDER: [Point; 4] = [
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(0, 1),
];

impl<O: LineOfSightOracle> HybridSearch<'_, O> {
    /// Breadth-first search with the same line-of-sight short-circuit as
    /// [`search`](Self::search).
    ///
    /// Expansion is unweighted FIFO: a cell is marked visited when it is
    /// enqueued and never enqueued twice. Waypoint costs are hop counts.
    pub fn search_breadth_first(&mut self, start: Point, end: Point) -> Result<Path, SearchError> {
        let (si, gi) = self.engine_mut().validate(start, end)?;
        log::debug!("hybrid bfs search {start} -> {end}");
        let engine = self.engine_mut();
        engine.begin(si);
        engine.queue.push_back(si);

        while let Some(ci) = self.engine_mut().queue.pop_front() {
            if ci == gi {
                return self.engine().finish(gi);
            }
            if self.goal_in_sight(ci, end) {
                self.engine_mut().link_goal(ci, gi);
                return self.engine().finish(gi);
            }

            let engine = self.engine_mut();
            engine.charge()?;
            let cp = engine.grid.point(ci);
            let depth = engine.nodes[ci].g + 1;
            for d in FIFO_ORDER {
                let np = cp + d;
                let Some(ni) = engine.grid.index(np) else {
                    continue;
                };
                if !engine.grid.is_walkable(np) || engine.visited.contains(ni) {
                    continue;
                }
                engine.nodes[ni] = Node {
                    g: depth,
                    h: 0,
                    f: depth,
                    parent: Some(cp),
                };
                engine.visited.insert(ni);
                engine.queue.push_back(ni);
            }
        }

        log::debug!(
            "bfs queue exhausted after {} expansions",
            self.stats().expansions
        );
        Err(SearchError::NoPathFound)
    }
}
