use core::fmt;
use grid_util::point::Point;

/// Conditions under which a search refuses to run. Not finding a path is not one of them, see
/// [SearchResult::NotFound](crate::SearchResult::NotFound).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// The start or goal lies outside `[0, width) x [0, height)`.
    OutOfBounds {
        cell: Point,
        width: usize,
        height: usize,
    },
    /// The step cost function returned a negative cost for the move `from -> to`.
    InvalidStepCost { from: Point, to: Point },
    /// Adding the cost of the move `from -> to` overflowed the cost type.
    CostOverflow { from: Point, to: Point },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                cell,
                width,
                height,
            } => write!(
                f,
                "cell ({}, {}) is outside of the {width}x{height} grid",
                cell.x, cell.y
            ),
            Self::InvalidStepCost { from, to } => write!(
                f,
                "negative step cost for move ({}, {}) -> ({}, {})",
                from.x, from.y, to.x, to.y
            ),
            Self::CostOverflow { from, to } => write!(
                f,
                "path cost overflows at move ({}, {}) -> ({}, {})",
                from.x, from.y, to.x, to.y
            ),
        }
    }
}

impl std::error::Error for SearchError {}

/// Errors that can occur when parsing a grid or level layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// The layout contains no rows.
    Empty,
    /// A row has a different width than the first row.
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character that is neither terrain nor an allowed marker.
    InvalidChar { ch: char, pos: Point },
    /// A level marker (player, box or goal) does not occur.
    MissingMarker(char),
    /// A level marker occurs more than once.
    DuplicateMarker { ch: char, pos: Point },
    /// A level position lies outside the grid or on a blocked cell.
    MarkerNotOpen { ch: char, pos: Point },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "layout is empty"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "layout row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => write!(
                f,
                "layout contains invalid character '{ch}' at ({}, {})",
                pos.x, pos.y
            ),
            Self::MissingMarker(ch) => write!(f, "layout has no '{ch}' marker"),
            Self::DuplicateMarker { ch, pos } => write!(
                f,
                "layout has a second '{ch}' marker at ({}, {})",
                pos.x, pos.y
            ),
            Self::MarkerNotOpen { ch, pos } => write!(
                f,
                "'{ch}' marker at ({}, {}) is not on an open cell",
                pos.x, pos.y
            ),
        }
    }
}

impl std::error::Error for LayoutError {}
