use crate::error::{LayoutError, SearchError};
use crate::grid::{parse_layout, Grid};
use crate::search::GridSearch;
use core::fmt;
use core::str::FromStr;
use grid_util::point::Point;
use log::info;

const PLAYER: char = 'P';
const BOX: char = 'B';
const GOAL: char = 'G';

/// The named positions of a level. They are kept apart from the [Grid], which only knows open and
/// blocked cells. Every position of a [Level] is on an open cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Positions {
    pub player: Point,
    pub box_pos: Point,
    pub goal: Point,
}

/// Paths that first walk the player to the box and then carry the box to the goal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PushPlan {
    pub player_path: Vec<Point>,
    pub box_path: Vec<Point>,
}

/// A Sokoban-style level: an occupancy grid plus the player, box and goal positions.
///
/// Levels are read from a text layout using the grid characters (`.`/`0` open, `#`/`1` blocked)
/// and exactly one each of `P` (player), `B` (box) and `G` (goal), which are open cells.
#[derive(Clone, Debug)]
pub struct Level {
    grid: Grid,
    positions: Positions,
}

impl Level {
    /// Pairs a grid with positions, which must all be on open cells.
    pub fn new(grid: Grid, positions: Positions) -> Result<Level, LayoutError> {
        check_positions(&grid, &positions)?;
        Ok(Level { grid, positions })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn positions(&self) -> Positions {
        self.positions
    }

    /// Moves the named positions, for instance one step at a time along a [PushPlan].
    pub fn set_positions(&mut self, positions: Positions) -> Result<(), LayoutError> {
        check_positions(&self.grid, &positions)?;
        self.positions = positions;
        Ok(())
    }

    pub fn is_solved(&self) -> bool {
        self.positions.box_pos == self.positions.goal
    }

    /// Plans a push with two searches: the player to the box cell, then the box cell to the goal.
    /// Returns [None] if either leg has no path. The box does not block the player and the player
    /// does not block the box.
    pub fn plan_push<S: GridSearch>(&self, search: &S) -> Result<Option<PushPlan>, SearchError> {
        let Positions {
            player,
            box_pos,
            goal,
        } = self.positions;
        let player_path = match search.search(&self.grid, player, box_pos)?.into_path() {
            Some(path) => path,
            None => {
                info!("Player at {} cannot reach box at {}", player, box_pos);
                return Ok(None);
            }
        };
        let box_path = match search.search(&self.grid, box_pos, goal)?.into_path() {
            Some(path) => path,
            None => {
                info!("Box at {} cannot reach goal at {}", box_pos, goal);
                return Ok(None);
            }
        };
        Ok(Some(PushPlan {
            player_path,
            box_path,
        }))
    }

    /// Moves the player and the box to the ends of their planned paths.
    pub fn apply(&mut self, plan: &PushPlan) {
        if let Some(&player) = plan.player_path.last() {
            self.positions.player = player;
        }
        if let Some(&box_pos) = plan.box_path.last() {
            self.positions.box_pos = box_pos;
        }
    }
}

fn check_positions(grid: &Grid, positions: &Positions) -> Result<(), LayoutError> {
    for (ch, pos) in [
        (PLAYER, positions.player),
        (BOX, positions.box_pos),
        (GOAL, positions.goal),
    ] {
        if !grid.is_open(pos) {
            return Err(LayoutError::MarkerNotOpen { ch, pos });
        }
    }
    Ok(())
}

impl FromStr for Level {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut player = None;
        let mut box_pos = None;
        let mut goal = None;
        let grid = parse_layout(s, |ch, pos| {
            let slot = match ch {
                PLAYER => &mut player,
                BOX => &mut box_pos,
                GOAL => &mut goal,
                _ => return Err(LayoutError::InvalidChar { ch, pos }),
            };
            if slot.replace(pos).is_some() {
                return Err(LayoutError::DuplicateMarker { ch, pos });
            }
            Ok(false)
        })?;
        let positions = Positions {
            player: player.ok_or(LayoutError::MissingMarker(PLAYER))?,
            box_pos: box_pos.ok_or(LayoutError::MissingMarker(BOX))?,
            goal: goal.ok_or(LayoutError::MissingMarker(GOAL))?,
        };
        Ok(Level { grid, positions })
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.grid.height() as i32 {
            let row = (0..self.grid.width() as i32)
                .map(|x| {
                    let p = Point::new(x, y);
                    if p == self.positions.player {
                        PLAYER
                    } else if p == self.positions.box_pos {
                        BOX
                    } else if p == self.positions.goal {
                        GOAL
                    } else if self.grid.is_open(p) {
                        '.'
                    } else {
                        '#'
                    }
                })
                .collect::<String>();
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
