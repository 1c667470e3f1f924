use super::{preflight, reverse_path, FxIndexMap, GridSearch, SearchResult, NO_PARENT};
use crate::error::SearchError;
use crate::grid::Grid;
use grid_util::point::Point;
use log::{debug, warn};
use std::collections::VecDeque;

/// Breadth-first search with a FIFO frontier. Every step costs the same, so the first time a cell
/// is reached is along a path with the fewest possible moves. Each cell's parent is fixed when it
/// is first seen and never revised, which together with the neighbour order of
/// [Grid::neighbours] makes the returned path deterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSearch;

impl BfsSearch {
    pub fn new() -> BfsSearch {
        BfsSearch
    }
}

impl GridSearch for BfsSearch {
    fn search(&self, grid: &Grid, start: Point, goal: Point) -> Result<SearchResult, SearchError> {
        if let Some(result) = preflight(grid, start, goal)? {
            return Ok(result);
        }
        // Presence in `parents` doubles as the visited set.
        let mut parents: FxIndexMap<Point, usize> = FxIndexMap::default();
        parents.insert(start, NO_PARENT);
        let mut frontier = VecDeque::from([(start, 0usize)]);

        while let Some((current, index)) = frontier.pop_front() {
            if current == goal {
                let path = reverse_path(&parents, |&p| p, index);
                debug!(
                    "BFS reached {} after visiting {} cells, path has {} cells",
                    goal,
                    parents.len(),
                    path.len()
                );
                return Ok(SearchResult::Found(path));
            }
            for neighbour in grid.neighbours(current) {
                if parents.contains_key(&neighbour) {
                    continue;
                }
                let (n, _) = parents.insert_full(neighbour, index);
                frontier.push_back((neighbour, n));
            }
        }
        if grid.component_precheck && !grid.components_dirty() {
            warn!("Reachable goal could not be pathed to, are the components correct?");
        }
        debug!("BFS exhausted {} cells without reaching {}", parents.len(), goal);
        Ok(SearchResult::NotFound)
    }
}
