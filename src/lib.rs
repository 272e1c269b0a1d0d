//! A discrete state space for search algorithms, instantiated as a Pac-Man
//! agent walking a walled grid.
//!
//! The crate supplies nodes and edges, not traversal: a [`GridWorld`] holds
//! the walls, an [`AgentState`] is a position plus facing, and
//! [`AgentState::successors`] lists every state one move away.
//!
//! ```
//! use pacman_space::{Direction, GridWorld};
//!
//! let grid = GridWorld::new(["......", ".XX.XX", "......"]).unwrap();
//! let start = grid.initial_state(0, 0, Direction::North).unwrap();
//!
//! for successor in start.successors().iter() {
//!     println!("{} -> {} (hash {})", successor.action, successor.state, successor.hash);
//! }
//! ```

mod direction;
mod error;
mod grid;
mod space;
mod state;
mod successor;

pub use direction::Direction;
pub use error::{GridError, Result};
pub use grid::{GridConfig, GridWorld};
pub use space::{SearchState, VisitedSet};
pub use state::AgentState;
pub use successor::{Move, Successor, Successors};
