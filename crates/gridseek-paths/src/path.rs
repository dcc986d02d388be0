use gridseek_core::{Grid, Point};

use crate::error::SearchError;
use crate::search::Node;

/// One cell of a returned path with its accumulated cost from the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    pub pos: Point,
    pub g: i32,
}

/// An ordered walk from start to goal, both inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    waypoints: Vec<Waypoint>,
}

impl Path {
    /// Number of waypoints, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    #[inline]
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// The waypoint coordinates in order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.waypoints.iter().map(|w| w.pos)
    }

    pub fn start(&self) -> Option<Point> {
        self.waypoints.first().map(|w| w.pos)
    }

    pub fn goal(&self) -> Option<Point> {
        self.waypoints.last().map(|w| w.pos)
    }

    /// Accumulated cost at the goal.
    pub fn cost(&self) -> i32 {
        self.waypoints.last().map_or(0, |w| w.g)
    }

    pub fn contains(&self, p: Point) -> bool {
        self.points().any(|q| q == p)
    }

    /// Consecutive waypoint pairs that are not one orthogonal step apart,
    /// i.e. line-of-sight hops.
    pub fn hops(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.waypoints
            .windows(2)
            .map(|w| (w[0].pos, w[1].pos))
            .filter(|(a, b)| !a.is_adjacent_4(*b))
    }

    pub fn into_points(self) -> Vec<Point> {
        self.waypoints.into_iter().map(|w| w.pos).collect()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Waypoint;
    type IntoIter = std::slice::Iter<'a, Waypoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.waypoints.iter()
    }
}

/// Walk parent links back from `goal` and return the forward path.
///
/// The walk is capped at the number of grid cells: a longer chain can only
/// come from a parent cycle, which is reported as
/// [`SearchError::CorruptPath`] instead of looping forever.
pub(crate) fn reconstruct(grid: &Grid, nodes: &[Node], goal: Point) -> Result<Path, SearchError> {
    let limit = grid.len();
    let mut waypoints = Vec::new();
    let mut cursor = Some(goal);

    while let Some(p) = cursor {
        let Some(i) = grid.index(p).filter(|_| waypoints.len() < limit) else {
            log::error!("parent chain from {goal} broke after {} links", waypoints.len());
            return Err(SearchError::CorruptPath { limit });
        };
        let node = &nodes[i];
        waypoints.push(Waypoint { pos: p, g: node.g });
        cursor = node.parent;
    }

    waypoints.reverse();
    Ok(Path { waypoints })
}
