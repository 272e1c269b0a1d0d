//! The contract between a state space and the search algorithms that walk it.
//!
//! Breadth-first, depth-first and A* search only need two things from a
//! state: its successors, and a hash to deduplicate with. [`SearchState`]
//! captures exactly that. [`VisitedSet`] is the matching deduplication
//! structure for spaces whose hash is weaker than their equality.

use std::collections::HashMap;
use std::fmt::Debug;

use crate::state::AgentState;

/// A node in a discrete state space.
///
/// # Hash contract
///
/// Equal states must have equal hashes. Unequal states may collide, so a
/// matching hash is only a candidate; callers confirm with `==`.
///
/// # Examples
///
/// A breadth-first walk over every reachable state:
///
/// ```
/// use std::collections::VecDeque;
/// use pacman_space::{Direction, GridWorld, SearchState, VisitedSet};
///
/// let grid = GridWorld::new(["..", ".."]).unwrap();
/// let start = grid.initial_state(0, 0, Direction::North).unwrap();
///
/// let mut visited = VisitedSet::new();
/// let mut frontier = VecDeque::from([start]);
/// visited.insert(start);
/// while let Some(state) = frontier.pop_front() {
///     for (_, next) in state.successor_states() {
///         if visited.insert(next) {
///             frontier.push_back(next);
///         }
///     }
/// }
/// // Each of the four cells is entered from two directions.
/// assert_eq!(visited.len(), 9);
/// ```
pub trait SearchState: Clone + Eq + Debug {
    /// Hash used to bucket states; may collide for unequal states.
    fn state_hash(&self) -> i64;

    /// Successors as `(hash, state)` pairs in a deterministic order.
    fn successor_states(&self) -> Vec<(i64, Self)>;
}

impl SearchState for AgentState<'_> {
    fn state_hash(&self) -> i64 {
        AgentState::state_hash(self)
    }

    fn successor_states(&self) -> Vec<(i64, Self)> {
        self.successors().into_pairs()
    }
}

/// A set of states bucketed by [`SearchState::state_hash`].
///
/// Membership is decided by equality within a bucket, so colliding but
/// distinct states are all kept.
#[derive(Debug, Clone)]
pub struct VisitedSet<S> {
    buckets: HashMap<i64, Vec<S>>,
    len: usize,
}

impl<S: SearchState> VisitedSet<S> {
    pub fn new() -> Self {
        Self {
            buckets: HashMap::new(),
            len: 0,
        }
    }

    /// Inserts `state`, returning `false` if an equal state was already present.
    pub fn insert(&mut self, state: S) -> bool {
        let bucket = self.buckets.entry(state.state_hash()).or_default();
        if bucket.contains(&state) {
            return false;
        }
        bucket.push(state);
        self.len += 1;
        true
    }

    pub fn contains(&self, state: &S) -> bool {
        self.buckets
            .get(&state.state_hash())
            .is_some_and(|bucket| bucket.contains(state))
    }

    /// Number of distinct states.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct hash values seen.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}

impl<S: SearchState> Default for VisitedSet<S> {
    fn default() -> Self {
        Self::new()
    }
}
