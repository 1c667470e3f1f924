use crate::error::{LayoutError, SearchError};
use crate::DIRECTIONS;
use core::fmt;
use core::str::FromStr;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use itertools::{iproduct, Itertools};
use petgraph::unionfind::UnionFind;

/// Classification of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Traversability {
    Open,
    Blocked,
}

impl Traversability {
    fn from_blocked(blocked: bool) -> Traversability {
        if blocked {
            Traversability::Blocked
        } else {
            Traversability::Open
        }
    }
    pub fn is_open(self) -> bool {
        self == Traversability::Open
    }
}

/// [Grid] stores the occupancy of a fixed-size rectangle of cells in a [BoolGrid] (`true` means
/// [Blocked](Traversability::Blocked)) and maintains the 4-connected components of the open cells
/// using a [UnionFind] structure, so that searches between different components can be answered
/// without flood-filling.
///
/// Cells are [Point]s where `x` is the column and `y` is the row. The dimensions are fixed at
/// construction.
#[derive(Clone, Debug)]
pub struct Grid {
    grid: BoolGrid,
    components: UnionFind<usize>,
    components_dirty: bool,
    /// Whether searches may answer [NotFound](crate::SearchResult::NotFound) from the components
    /// alone when they are up to date.
    pub component_precheck: bool,
}

impl Grid {
    /// Creates a grid of the given size with every cell open.
    pub fn new(width: usize, height: usize) -> Grid {
        let mut grid = Grid {
            grid: BoolGrid::new(width, height, false),
            components: UnionFind::new(width * height),
            components_dirty: false,
            component_precheck: true,
        };
        grid.generate_components();
        grid
    }

    /// Builds a grid from rows of occupancy values, `true` meaning blocked. Row `y` of the input
    /// becomes row `y` of the grid.
    pub fn from_occupancy<R: AsRef<[bool]>>(rows: &[R]) -> Result<Grid, LayoutError> {
        let width = rows.first().ok_or(LayoutError::Empty)?.as_ref().len();
        if width == 0 {
            return Err(LayoutError::Empty);
        }
        let mut grid = Grid {
            grid: BoolGrid::new(width, rows.len(), false),
            components: UnionFind::new(width * rows.len()),
            components_dirty: false,
            component_precheck: true,
        };
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(LayoutError::InconsistentWidth {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, &blocked) in row.iter().enumerate() {
                grid.grid.set(x as i32, y as i32, blocked);
            }
        }
        grid.generate_components();
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn in_bounds(&self, cell: Point) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as usize) < self.width()
            && (cell.y as usize) < self.height()
    }

    pub fn check_bounds(&self, cell: Point) -> Result<(), SearchError> {
        if self.in_bounds(cell) {
            Ok(())
        } else {
            Err(SearchError::OutOfBounds {
                cell,
                width: self.width(),
                height: self.height(),
            })
        }
    }

    pub fn get(&self, cell: Point) -> Result<Traversability, SearchError> {
        self.check_bounds(cell)?;
        Ok(Traversability::from_blocked(self.grid.get(cell.x, cell.y)))
    }

    /// Whether the cell is in bounds and open. Safe to call with any coordinate.
    pub fn is_open(&self, cell: Point) -> bool {
        self.in_bounds(cell) && !self.grid.get(cell.x, cell.y)
    }

    /// The open neighbours of `cell` in right, down, left, up order. This order decides which of
    /// several equally short paths a search returns.
    pub fn neighbours(&self, cell: Point) -> impl Iterator<Item = Point> + '_ {
        DIRECTIONS
            .iter()
            .map(move |&(dx, dy)| Point::new(cell.x + dx, cell.y + dy))
            .filter(move |&p| self.is_open(p))
    }

    /// All open cells in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = Point> + '_ {
        iproduct!(0..self.height() as i32, 0..self.width() as i32)
            .map(|(y, x)| Point::new(x, y))
            .filter(move |&p| self.is_open(p))
    }

    /// Updates a cell. Joins newly connected components when opening and flags the components as
    /// dirty when blocking, since that can split a component in two.
    pub fn set(&mut self, cell: Point, value: Traversability) -> Result<(), SearchError> {
        self.check_bounds(cell)?;
        let blocked = value == Traversability::Blocked;
        if blocked {
            if !self.grid.get(cell.x, cell.y) {
                self.components_dirty = true;
            }
        } else {
            let ix = self.ix(cell);
            let open_neighbours = self.neighbours(cell).collect::<Vec<_>>();
            for n in open_neighbours {
                let n_ix = self.ix(n);
                self.components.union(ix, n_ix);
            }
        }
        self.grid.set(cell.x, cell.y, blocked);
        Ok(())
    }

    pub fn components_dirty(&self) -> bool {
        self.components_dirty
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up open grid neighbours to the same
    /// components. Linking right and down from every cell covers every edge once.
    pub fn generate_components(&mut self) {
        let (w, h) = (self.width(), self.height());
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for (y, x) in iproduct!(0..h as i32, 0..w as i32) {
            let point = Point::new(x, y);
            if !self.is_open(point) {
                continue;
            }
            let parent_ix = self.ix(point);
            for p in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                if self.is_open(p) {
                    let ix = self.ix(p);
                    self.components.union(parent_ix, ix);
                }
            }
        }
    }

    /// Retrieves the component id a given in-bounds [Point] belongs to.
    pub fn get_component(&self, cell: Point) -> Option<usize> {
        self.in_bounds(cell)
            .then(|| self.components.find(self.ix(cell)))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: Point, goal: Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component. Out of bounds cells are never
    /// reachable. Only meaningful while the components are not dirty.
    pub fn unreachable(&self, start: Point, goal: Point) -> bool {
        if self.in_bounds(start) && self.in_bounds(goal) {
            !self.components.equiv(self.ix(start), self.ix(goal))
        } else {
            true
        }
    }

    /// Checks that `path` leads from `start` to `goal` in single 4-directional steps, each onto
    /// an open cell.
    pub fn is_valid_path(&self, path: &[Point], start: Point, goal: Point) -> bool {
        path.first() == Some(&start)
            && path.last() == Some(&goal)
            && path
                .iter()
                .tuple_windows()
                .all(|(a, b)| a.manhattan_distance(b) == 1 && self.is_open(*b))
    }

    fn ix(&self, cell: Point) -> usize {
        cell.y as usize * self.width() + cell.x as usize
    }
}

/// Parses a rectangular text layout into a grid, calling `marker` for characters that are not
/// terrain. `marker` decides whether such a cell is blocked.
pub(crate) fn parse_layout<F>(layout: &str, mut marker: F) -> Result<Grid, LayoutError>
where
    F: FnMut(char, Point) -> Result<bool, LayoutError>,
{
    let rows = layout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(y, line)| {
            line.chars()
                .enumerate()
                .map(|(x, ch)| match ch {
                    '.' | '0' => Ok(false),
                    '#' | '1' => Ok(true),
                    _ => marker(ch, Point::new(x as i32, y as i32)),
                })
                .collect::<Result<Vec<bool>, LayoutError>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    Grid::from_occupancy(&rows)
}

impl FromStr for Grid {
    type Err = LayoutError;

    /// Reads one row per line, `.` or `0` for open and `#` or `1` for blocked cells. Blank lines
    /// and surrounding whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_layout(s, |ch, pos| Err(LayoutError::InvalidChar { ch, pos }))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height() as i32 {
            let row = (0..self.width() as i32)
                .map(|x| if self.grid.get(x, y) { '#' } else { '.' })
                .collect::<String>();
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
