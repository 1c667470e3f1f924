use crate::error::SearchError;
use crate::grid::Grid;
use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexMap;
use itertools::Itertools;
use log::info;
use num_traits::Zero;
use std::hash::Hash;

pub mod bfs;
pub mod dijkstra;

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Parent index recorded for the start node, which has no predecessor.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Outcome of a completed search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchResult {
    /// The cells from start to goal inclusive, each a single 4-directional step from the last.
    Found(Vec<Point>),
    /// The search ran to completion without reaching the goal.
    NotFound,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found(_))
    }
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            SearchResult::Found(path) => Some(path),
            SearchResult::NotFound => None,
        }
    }
    pub fn into_path(self) -> Option<Vec<Point>> {
        match self {
            SearchResult::Found(path) => Some(path),
            SearchResult::NotFound => None,
        }
    }
    /// Number of cells on the path, 0 if no path was found.
    pub fn len(&self) -> usize {
        self.path().map_or(0, <[Point]>::len)
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Number of moves on the path.
    pub fn steps(&self) -> Option<usize> {
        self.path().map(|p| p.len() - 1)
    }
}

impl From<Option<Vec<Point>>> for SearchResult {
    fn from(path: Option<Vec<Point>>) -> Self {
        path.map_or(SearchResult::NotFound, SearchResult::Found)
    }
}

/// A shortest-path search between two cells of a [Grid]. The grid is only borrowed and every call
/// owns its own frontier and parent state, so one grid can be searched from several threads.
pub trait GridSearch {
    fn search(&self, grid: &Grid, start: Point, goal: Point) -> Result<SearchResult, SearchError>;
}

/// Checks shared by all searches before any frontier is built. Returns the final result when it
/// is already decided.
pub(crate) fn preflight(
    grid: &Grid,
    start: Point,
    goal: Point,
) -> Result<Option<SearchResult>, SearchError> {
    grid.check_bounds(start)?;
    grid.check_bounds(goal)?;
    if start == goal {
        return Ok(Some(SearchResult::Found(vec![start])));
    }
    if !grid.is_open(start) || !grid.is_open(goal) {
        info!("{} or {} is blocked, no path", start, goal);
        return Ok(Some(SearchResult::NotFound));
    }
    if grid.component_precheck && !grid.components_dirty() && grid.unreachable(start, goal) {
        info!("{} is not reachable from {}", goal, start);
        return Ok(Some(SearchResult::NotFound));
    }
    Ok(None)
}

/// Walks the parent indices from `start` back to the root and returns the nodes in root-first
/// order.
#[allow(deprecated)]
pub(crate) fn reverse_path<N, V, F>(
    parents: &FxIndexMap<N, V>,
    mut parent: F,
    start: usize,
) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    let mut path: Vec<N> = itertools::unfold(start, |i| {
        parents.get_index(*i).map(|(node, value)| {
            *i = parent(value);
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// Sums `step_cost` over every move of `path`.
pub fn path_cost<C, F>(path: &[Point], mut step_cost: F) -> C
where
    C: Zero + Copy,
    F: FnMut(&Point, &Point) -> C,
{
    path.iter()
        .tuple_windows()
        .fold(C::zero(), |total, (a, b)| total + step_cost(a, b))
}
