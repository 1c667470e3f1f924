//! # grid_search
//!
//! Shortest-path search on a 4-connected occupancy grid. Two searches are provided behind the
//! [GridSearch] trait:
//!
//! - [BfsSearch], a breadth-first search that returns a path with the fewest moves and breaks
//!   ties deterministically by the neighbour order right, down, left, up.
//! - [DijkstraSearch], a uniform-cost search with a pluggable, non-negative step cost. With the
//!   default cost of 1 per move its paths are as short as those of [BfsSearch].
//!
//! The [Grid] keeps the
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)) of its open
//! cells so that searches between different components return
//! [SearchResult::NotFound] without flood-filling. A [Level] pairs a grid with the named
//! positions of a Sokoban-style puzzle and plans a box push with two searches.
//!
//! ```
//! use grid_search::{BfsSearch, Grid, GridSearch, Point};
//!
//! let grid: Grid = "...\n.#.\n...".parse().unwrap();
//! let path = BfsSearch
//!     .search(&grid, Point::new(0, 0), Point::new(2, 2))
//!     .unwrap();
//! assert_eq!(path.len(), 5);
//! ```
mod error;
pub mod grid;
pub mod level;
pub mod search;

pub use error::{LayoutError, SearchError};
pub use grid::{Grid, Traversability};
pub use grid_util::point::Point;
pub use level::{Level, Positions, PushPlan};
pub use search::bfs::BfsSearch;
pub use search::dijkstra::{uniform_step_cost, DijkstraSearch, UniformDijkstra};
pub use search::{path_cost, GridSearch, SearchResult};

/// Moves in the order neighbours are visited: right, down, left, up, as `(dx, dy)` with `y`
/// growing downwards.
pub const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Cost of a single move for [DijkstraSearch::new].
pub const UNIFORM_STEP_COST: i32 = 1;
