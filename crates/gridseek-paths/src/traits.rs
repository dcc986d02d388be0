use gridseek_core::Point;

/// Answers whether the straight segment between two cells is blocked.
///
/// The engine only relies on the boolean contract: implementations must be
/// pure with respect to search state and depend on static obstacle
/// placement alone. How a cell maps to a geometric point is up to the
/// implementation.
pub trait LineOfSightOracle {
    /// `true` if something blocks the segment from `from` to `to`.
    fn is_obstructed(&self, from: Point, to: Point) -> bool;
}

impl<F> LineOfSightOracle for F
where
    F: Fn(Point, Point) -> bool,
{
    #[inline]
    fn is_obstructed(&self, from: Point, to: Point) -> bool {
        self(from, to)
    }
}
