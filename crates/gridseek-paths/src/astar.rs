use gridseek_core::Point;

use crate::error::SearchError;
use crate::path::Path;
use crate::search::GridSearch;

impl GridSearch<'_> {
    /// Compute a shortest 4-connected path from `start` to `end` using A*
    /// with the Manhattan heuristic.
    ///
    /// Returns the full path including both endpoints. Endpoints are
    /// validated before any state is touched: out-of-grid coordinates fail
    /// with [`SearchError::OutOfRange`], blocked ones with
    /// [`SearchError::BlockedEndpoint`].
    pub fn search(&mut self, start: Point, end: Point) -> Result<Path, SearchError> {
        let (si, gi) = self.validate(start, end)?;
        log::debug!("a* search {start} -> {end}");
        self.begin(si);

        let mut ci = si;
        while ci != gi {
            self.charge()?;
            self.expand(ci, end);
            ci = self.advance()?;
        }
        self.finish(gi)
    }
}
