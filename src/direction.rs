//! Compass directions and the move table shared by every transition.
//!
//! A [`Direction`] is both the facing of an agent and the direction of a
//! single-cell step. The four variants are the only directions that exist,
//! so an agent can never hold an invalid heading.

use std::fmt;
use std::str::FromStr;

use crate::error::{GridError, Result};

/// One of the four compass directions.
///
/// `North` increases `y`, `East` increases `x`; the grid origin is the
/// bottom-left cell.
///
/// # Examples
///
/// ```
/// use pacman_space::Direction;
///
/// assert_eq!(Direction::North.delta(), (0, 1));
/// assert_eq!(Direction::East.opposite(), Direction::West);
/// assert_eq!("S".parse::<Direction>().unwrap(), Direction::South);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions in enumeration order. Successors are generated in this order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Coordinate offset `(dx, dy)` of one step in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Direction to the left of this heading (counter-clockwise quarter turn).
    pub fn left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    /// Direction to the right of this heading (clockwise quarter turn).
    pub fn right(self) -> Self {
        self.left().opposite()
    }

    /// The coordinate reached by stepping once from `(x, y)`.
    ///
    /// Returns `None` when the step leaves the `i32` coordinate range.
    pub fn step(self, x: i32, y: i32) -> Option<(i32, i32)> {
        let (dx, dy) = self.delta();
        Some((x.checked_add(dx)?, y.checked_add(dy)?))
    }

    /// Single-letter label: `N`, `S`, `E` or `W`.
    pub fn label(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::East => 'E',
            Direction::West => 'W',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Direction {
    type Err = GridError;

    /// Accepts the single-letter labels and the full names, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "north" => Ok(Direction::North),
            "s" | "south" => Ok(Direction::South),
            "e" | "east" => Ok(Direction::East),
            "w" | "west" => Ok(Direction::West),
            _ => Err(GridError::InvalidDirection(s.to_string())),
        }
    }
}
