//! # Grid Module
//!
//! The [`GridWorld`] is the immutable map the agent moves on: a bounded
//! rectangle of cells, each either open or a wall.
//!
//! ## Coordinates
//!
//! - Coordinates are zero-based with `(0, 0)` at the **bottom-left** cell.
//! - The textual description lists rows top to bottom, so row 0 of the input
//!   is the row with the largest `y`.
//! - Every coordinate outside `[0, width) × [0, height)` is a wall.
//!
//! ## Basic Usage
//!
//! ```
//! use pacman_space::GridWorld;
//!
//! let grid = GridWorld::new(["......", ".XX.XX", "......"]).unwrap();
//! assert_eq!(grid.width(), 6);
//! assert_eq!(grid.height(), 3);
//!
//! // The middle row holds the walls; y counts up from the bottom.
//! assert!(grid.occupied(1, 1));
//! assert!(!grid.occupied(3, 1));
//!
//! // The boundary is a wall everywhere.
//! assert!(grid.occupied(-1, 0));
//! assert!(grid.occupied(0, 3));
//! ```

use std::str::FromStr;

use crate::error::{GridError, Result};
use crate::state::AgentState;
use crate::Direction;

/// Options for parsing a grid description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridConfig {
    /// Character that marks a wall cell. Every other character is open.
    pub wall_marker: char,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { wall_marker: 'X' }
    }
}

/// A bounded two-dimensional grid of open and wall cells.
///
/// A `GridWorld` is read-only once built, so any number of [`AgentState`]s
/// (and threads) can share it by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridWorld {
    /// At most [`GridWorld::MAX_DIM`], so every cell has an `i32` coordinate.
    width: usize,
    height: usize,
    /// Wall flags in input order: top row first, left to right.
    walls: Vec<bool>,
}

impl GridWorld {
    /// Maximum width or height: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: usize = i32::MAX as usize;

    /// Builds a grid from rows of cell markers using the default `X` wall marker.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::MalformedGrid`] if there are no rows, the rows are
    /// empty, the rows have different lengths, or either dimension exceeds
    /// [`GridWorld::MAX_DIM`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pacman_space::{GridError, GridWorld};
    ///
    /// let grid = GridWorld::new(["...", ".X.", "..."]).unwrap();
    /// assert!(grid.occupied(1, 1));
    ///
    /// let ragged = GridWorld::new(["...", ".."]);
    /// assert!(matches!(ragged, Err(GridError::MalformedGrid(_))));
    /// ```
    pub fn new<I, S>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(rows, &GridConfig::default())
    }

    /// Builds a grid from rows of cell markers with a custom wall marker.
    ///
    /// ```
    /// use pacman_space::{GridConfig, GridWorld};
    ///
    /// let config = GridConfig { wall_marker: '#' };
    /// let grid = GridWorld::with_config(["#.", ".X"], &config).unwrap();
    /// assert!(grid.occupied(0, 1));
    /// assert!(!grid.occupied(1, 0));
    /// ```
    pub fn with_config<I, S>(rows: I, config: &GridConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut width = None;
        let mut height = 0;
        let mut walls = Vec::new();

        for (index, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            let len = row.chars().count();
            match width {
                None if len == 0 => {
                    return Err(GridError::MalformedGrid(
                        "rows must contain at least one cell".to_string(),
                    ));
                }
                None => {
                    check_dimension("width", len)?;
                    width = Some(len);
                }
                Some(expected) if expected != len => {
                    return Err(GridError::MalformedGrid(format!(
                        "row {} has length {}, expected {}",
                        index, len, expected
                    )));
                }
                Some(_) => {}
            }
            walls.extend(row.chars().map(|c| c == config.wall_marker));
            height += 1;
        }

        let width = width
            .ok_or_else(|| GridError::MalformedGrid("grid has no rows".to_string()))?;
        check_dimension("height", height)?;

        let grid = Self {
            width,
            height,
            walls,
        };
        log::debug!(
            "Built {}x{} grid with {} walls",
            grid.width,
            grid.height,
            grid.wall_count()
        );
        Ok(grid)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if `(x, y)` lies inside the grid bounds.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    /// Tests whether the agent is blocked at `(x, y)`.
    ///
    /// A cell is occupied if it is a wall or lies outside the grid.
    pub fn occupied(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_none_or(|i| self.walls[i])
    }

    /// Returns `true` only for in-bounds wall cells.
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|i| self.walls[i])
    }

    /// Number of in-bounds wall cells.
    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|&&w| w).count()
    }

    /// Iterates over every open cell, bottom row first, left to right.
    pub fn open_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..self.height as i32)
            .flat_map(move |y| (0..self.width as i32).map(move |x| (x, y)))
            .filter(move |&(x, y)| !self.occupied(x, y))
    }

    /// Places the agent at `(x, y)` facing `direction`.
    ///
    /// Unlike [`AgentState::new`], this refuses a start position the agent
    /// could never legally occupy.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OccupiedCell`] if `(x, y)` is a wall or out of bounds.
    ///
    /// ```
    /// use pacman_space::{Direction, GridError, GridWorld};
    ///
    /// let grid = GridWorld::new(["...", ".X.", "..."]).unwrap();
    /// assert!(grid.initial_state(0, 0, Direction::North).is_ok());
    /// assert_eq!(
    ///     grid.initial_state(1, 1, Direction::North).unwrap_err(),
    ///     GridError::OccupiedCell { x: 1, y: 1 }
    /// );
    /// ```
    pub fn initial_state(&self, x: i32, y: i32, direction: Direction) -> Result<AgentState<'_>> {
        if self.occupied(x, y) {
            return Err(GridError::OccupiedCell { x, y });
        }
        Ok(AgentState::new(x, y, direction, self))
    }

    /// Maps a logical coordinate to its slot in `walls`, inverting the row.
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        if x >= self.width || y >= self.height {
            return None;
        }
        let row = self.height - 1 - y;
        Some(row * self.width + x)
    }
}

fn check_dimension(name: &str, value: usize) -> Result<()> {
    if value > GridWorld::MAX_DIM {
        return Err(GridError::MalformedGrid(format!(
            "{} {} exceeds maximum {}",
            name,
            value,
            GridWorld::MAX_DIM
        )));
    }
    Ok(())
}

impl FromStr for GridWorld {
    type Err = GridError;

    /// Parses newline-separated rows, top row first.
    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.lines())
    }
}
