//! # State Module
//!
//! An [`AgentState`] is one node of the Pac-Man state space: where the agent
//! stands and which way it is facing.
//!
//! ## Identity
//!
//! Search algorithms deduplicate states, so identity matters:
//!
//! - **Equality** compares `x`, `y` and `direction`. The grid reference is not
//!   compared; states are only ever compared within one grid.
//! - **Hash** ([`AgentState::state_hash`]) is `x + width * y`. The direction does
//!   **not** participate, so states that differ only in facing collide.
//!
//! This is a weak-hash/strong-equality contract: a matching hash never implies
//! equality, and any hash-keyed frontier or visited set must confirm with `==`
//! (see [`VisitedSet`](crate::VisitedSet)).
//!
//! The [`Hash`] impl hashes `(x, y)` alone, without the grid width, so equal
//! states hash equally even when they borrow different grids and `std` hash
//! collections stay correct.
//!
//! ```
//! use pacman_space::{AgentState, Direction, GridWorld};
//!
//! let grid = GridWorld::new(["...", "...", "..."]).unwrap();
//! let north = AgentState::new(1, 2, Direction::North, &grid);
//! let east = AgentState::new(1, 2, Direction::East, &grid);
//!
//! assert_eq!(north.state_hash(), 1 + 3 * 2);
//! assert_eq!(north.state_hash(), east.state_hash());
//! assert_ne!(north, east);
//! assert_eq!(north.to_string(), "(1,2,N)");
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::grid::GridWorld;
use crate::Direction;

/// The agent's position and facing on a shared [`GridWorld`].
///
/// States are small `Copy` values borrowing the grid; they never outlive or
/// modify it.
#[derive(Clone, Copy)]
pub struct AgentState<'g> {
    x: i32,
    y: i32,
    direction: Direction,
    grid: &'g GridWorld,
}

impl<'g> AgentState<'g> {
    /// Creates a state at `(x, y)` facing `direction`.
    ///
    /// The position is not validated; use
    /// [`GridWorld::initial_state`] to reject walls and out-of-bounds cells.
    pub fn new(x: i32, y: i32, direction: Direction, grid: &'g GridWorld) -> Self {
        Self {
            x,
            y,
            direction,
            grid,
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The grid this state lives on.
    pub fn grid(&self) -> &'g GridWorld {
        self.grid
    }

    /// Structural equality: same position and same facing.
    pub fn equals(&self, other: &AgentState<'_>) -> bool {
        self.x == other.x && self.y == other.y && self.direction == other.direction
    }

    /// Deterministic hash over the position only: `x + width * y`.
    ///
    /// Recomputed on every call. States that differ only by direction share
    /// a hash; always confirm candidates with [`equals`](Self::equals).
    pub fn state_hash(&self) -> i64 {
        i64::from(self.x) + self.grid.width() as i64 * i64::from(self.y)
    }

    /// The state one step away in `direction`, facing `direction`, if that
    /// cell is open.
    pub(crate) fn open_step(&self, direction: Direction) -> Option<Self> {
        let (x, y) = direction.step(self.x, self.y)?;
        if self.grid.occupied(x, y) {
            return None;
        }
        Some(Self::new(x, y, direction, self.grid))
    }

    /// Returns this position with a different facing.
    pub(crate) fn facing(&self, direction: Direction) -> Self {
        Self::new(self.x, self.y, direction, self.grid)
    }

    /// Whether the neighbouring cell in `direction` is occupied. Stepping
    /// past the `i32` range counts as occupied.
    pub(crate) fn blocked(&self, direction: Direction) -> bool {
        self.open_step(direction).is_none()
    }
}

impl PartialEq for AgentState<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for AgentState<'_> {}

impl Hash for AgentState<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

impl fmt::Debug for AgentState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentState")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("direction", &self.direction)
            .finish()
    }
}

/// Formats as `(x,y,D)`, e.g. `(0,0,N)`.
impl fmt::Display for AgentState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.direction)
    }
}
