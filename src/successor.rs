//! Transition engine: the legal one-move successors of an [`AgentState`].
//!
//! A move is either a straight step into an open neighbouring cell, or a
//! dead-end turnaround when the cells ahead, left and right of the current
//! facing are all occupied. Successors are produced in the fixed order
//! North, South, East, West, then the turnaround, and never contain two
//! structurally equal states.

use std::fmt;

use crate::state::AgentState;
use crate::Direction;

/// The move that produced a successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// One step in the given direction, ending up facing it.
    Step(Direction),
    /// Dead-end reversal; holds the new facing.
    TurnAround(Direction),
}

impl Move {
    /// Direction the agent faces after the move.
    pub fn direction(self) -> Direction {
        match self {
            Move::Step(d) | Move::TurnAround(d) => d,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Step(d) => write!(f, "{}", d),
            Move::TurnAround(d) => write!(f, "turn-around-{}", d),
        }
    }
}

/// One successor record: the state's hash, the move taken and the new state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Successor<'g> {
    pub hash: i64,
    pub action: Move,
    pub state: AgentState<'g>,
}

impl<'g> Successor<'g> {
    fn new(action: Move, state: AgentState<'g>) -> Self {
        Self {
            hash: state.state_hash(),
            action,
            state,
        }
    }
}

/// Ordered, duplicate-free successor list.
///
/// Duplicates are detected with structural equality, never with the hash.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Successors<'g> {
    items: Vec<Successor<'g>>,
}

impl<'g> Successors<'g> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends `state` unless an equal state is already present.
    ///
    /// Returns whether the state was added.
    pub fn push(&mut self, action: Move, state: AgentState<'g>) -> bool {
        if self.contains(&state) {
            return false;
        }
        self.items.push(Successor::new(action, state));
        true
    }

    pub fn contains(&self, state: &AgentState<'_>) -> bool {
        self.items.iter().any(|s| s.state.equals(state))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Successor<'g>> {
        self.items.iter()
    }

    /// The successor states in order.
    pub fn states(&self) -> Vec<AgentState<'g>> {
        self.items.iter().map(|s| s.state).collect()
    }

    /// The successors as `(hash, state)` pairs, in order.
    pub fn into_pairs(self) -> Vec<(i64, AgentState<'g>)> {
        self.items.into_iter().map(|s| (s.hash, s.state)).collect()
    }
}

impl<'g> IntoIterator for Successors<'g> {
    type Item = Successor<'g>;
    type IntoIter = std::vec::IntoIter<Successor<'g>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, 'g> IntoIterator for &'a Successors<'g> {
    type Item = &'a Successor<'g>;
    type IntoIter = std::slice::Iter<'a, Successor<'g>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'g> AgentState<'g> {
    /// All legal next states reachable by one move from this state's own cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use pacman_space::{AgentState, Direction, GridWorld};
    ///
    /// let grid = GridWorld::new(["...", ".X.", "..."]).unwrap();
    /// let state = AgentState::new(1, 0, Direction::North, &grid);
    ///
    /// let labels: Vec<String> = state
    ///     .successors()
    ///     .iter()
    ///     .map(|s| s.state.to_string())
    ///     .collect();
    /// assert_eq!(labels, ["(2,0,E)", "(0,0,W)"]);
    /// ```
    pub fn successors(&self) -> Successors<'g> {
        let mut successors = Successors::new();

        for direction in Direction::ALL {
            if let Some(next) = self.open_step(direction) {
                successors.push(Move::Step(direction), next);
            }
        }

        if self.at_dead_end() {
            let back = self.direction().opposite();
            let reversal = self
                .open_step(back)
                .unwrap_or_else(|| self.facing(back));
            log::debug!("Dead end at {}, turning around to {}", self, reversal);
            successors.push(Move::TurnAround(back), reversal);
        }

        log::trace!("Expanded {} into {} successors", self, successors.len());
        successors
    }

    /// Whether the cells ahead, left and right of the current facing are all occupied.
    pub fn at_dead_end(&self) -> bool {
        let heading = self.direction();
        self.blocked(heading) && self.blocked(heading.left()) && self.blocked(heading.right())
    }
}
