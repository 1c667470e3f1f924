use super::{preflight, reverse_path, FxIndexMap, GridSearch, SearchResult, NO_PARENT};
use crate::error::SearchError;
use crate::grid::Grid;
use crate::UNIFORM_STEP_COST;
use core::fmt;
use grid_util::point::Point;
use indexmap::map::Entry::{Occupied, Vacant};
use log::{debug, warn};
use num_traits::{CheckedAdd, Zero};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::marker::PhantomData;

struct SmallestCostHolder<K> {
    cost: K,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cost.eq(&other.cost)
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so that the max-heap pops the smallest cost first
        other.cost.cmp(&self.cost)
    }
}

/// The step cost used by [DijkstraSearch::new].
pub fn uniform_step_cost(_: &Point, _: &Point) -> i32 {
    UNIFORM_STEP_COST
}

pub type UniformDijkstra = DijkstraSearch<fn(&Point, &Point) -> i32, i32>;

/// Dijkstra search with a binary heap keyed on accumulated cost. The cost of a move is given by
/// the step cost function, which must never be negative: the search stops as soon as the goal is
/// popped, which is only optimal under that condition. A negative step cost is reported as
/// [SearchError::InvalidStepCost], an accumulated cost that overflows `C` as
/// [SearchError::CostOverflow].
///
/// Improved cells are pushed again rather than updated in place. Outdated heap entries are
/// recognised by their cost being above the recorded one and skipped when popped.
///
/// Entries of equal cost leave the heap in an unspecified order, so when several paths share the
/// minimum cost the one returned may differ from the path [BfsSearch](super::bfs::BfsSearch)
/// returns. Its cost never does.
pub struct DijkstraSearch<F, C> {
    step_cost: F,
    cost: PhantomData<fn() -> C>,
}

impl DijkstraSearch<fn(&Point, &Point) -> i32, i32> {
    /// Dijkstra search where every move costs [UNIFORM_STEP_COST].
    pub fn new() -> UniformDijkstra {
        DijkstraSearch {
            step_cost: uniform_step_cost,
            cost: PhantomData,
        }
    }
}

impl Default for UniformDijkstra {
    fn default() -> Self {
        DijkstraSearch::new()
    }
}

impl<F: Clone, C> Clone for DijkstraSearch<F, C> {
    fn clone(&self) -> Self {
        DijkstraSearch {
            step_cost: self.step_cost.clone(),
            cost: PhantomData,
        }
    }
}

impl<F, C> fmt::Debug for DijkstraSearch<F, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DijkstraSearch").finish_non_exhaustive()
    }
}

impl<F, C> DijkstraSearch<F, C>
where
    F: Fn(&Point, &Point) -> C,
    C: Zero + CheckedAdd + Ord + Copy,
{
    /// Dijkstra search where moving from the first to the second (adjacent, open) cell costs
    /// `step_cost(from, to)`.
    pub fn with_step_cost(step_cost: F) -> Self {
        DijkstraSearch {
            step_cost,
            cost: PhantomData,
        }
    }

    /// Computes a cheapest path from `start` to `goal` together with its cost.
    pub fn search_with_cost(
        &self,
        grid: &Grid,
        start: Point,
        goal: Point,
    ) -> Result<Option<(Vec<Point>, C)>, SearchError> {
        if let Some(result) = preflight(grid, start, goal)? {
            return Ok(result.into_path().map(|path| (path, C::zero())));
        }
        let mut to_see = BinaryHeap::new();
        to_see.push(SmallestCostHolder {
            cost: C::zero(),
            index: 0,
        });
        let mut parents: FxIndexMap<Point, (usize, C)> = FxIndexMap::default();
        parents.insert(start, (NO_PARENT, C::zero()));
        let mut expanded = 0usize;

        while let Some(SmallestCostHolder { cost, index }) = to_see.pop() {
            let current = match parents.get_index(index) {
                Some((&node, &(_, c))) => {
                    // We may have inserted a node several times into the binary heap if we found
                    // a better way to access it. Ensure that we are currently dealing with the
                    // best path and discard the others.
                    if cost > c {
                        continue;
                    }
                    node
                }
                None => continue,
            };
            if current == goal {
                break;
            }
            expanded += 1;
            for neighbour in grid.neighbours(current) {
                let move_cost = (self.step_cost)(&current, &neighbour);
                if move_cost < C::zero() {
                    return Err(SearchError::InvalidStepCost {
                        from: current,
                        to: neighbour,
                    });
                }
                let new_cost = cost.checked_add(&move_cost).ok_or(SearchError::CostOverflow {
                    from: current,
                    to: neighbour,
                })?;
                let n = match parents.entry(neighbour) {
                    Vacant(e) => {
                        let n = e.index();
                        e.insert((index, new_cost));
                        n
                    }
                    Occupied(mut e) => {
                        if new_cost < e.get().1 {
                            e.insert((index, new_cost));
                            e.index()
                        } else {
                            continue;
                        }
                    }
                };
                to_see.push(SmallestCostHolder {
                    cost: new_cost,
                    index: n,
                });
            }
        }

        match parents.get_full(&goal) {
            Some((goal_index, _, &(_, goal_cost))) => {
                let path = reverse_path(&parents, |&(p, _)| p, goal_index);
                debug!(
                    "Dijkstra reached {} after expanding {} cells, path has {} cells",
                    goal,
                    expanded,
                    path.len()
                );
                Ok(Some((path, goal_cost)))
            }
            None => {
                if grid.component_precheck && !grid.components_dirty() {
                    warn!("Reachable goal could not be pathed to, are the components correct?");
                }
                debug!("Dijkstra expanded {} cells without reaching {}", expanded, goal);
                Ok(None)
            }
        }
    }
}

impl<F, C> GridSearch for DijkstraSearch<F, C>
where
    F: Fn(&Point, &Point) -> C,
    C: Zero + CheckedAdd + Ord + Copy,
{
    fn search(&self, grid: &Grid, start: Point, goal: Point) -> Result<SearchResult, SearchError> {
        Ok(self
            .search_with_cost(grid, start, goal)?
            .map(|(path, _)| path)
            .into())
    }
}
