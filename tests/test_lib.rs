use pacman_space::{
    AgentState, Direction, GridError, GridWorld, Move, SearchState, VisitedSet,
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Every state reachable from `start`, in breadth-first order.
    fn reachable<S: SearchState>(start: S) -> Vec<S> {
        let mut visited = VisitedSet::new();
        let mut order = Vec::new();
        let mut frontier = VecDeque::new();
        visited.insert(start.clone());
        frontier.push_back(start);
        while let Some(state) = frontier.pop_front() {
            for (_, next) in state.successor_states() {
                if visited.insert(next.clone()) {
                    frontier.push_back(next);
                }
            }
            order.push(state);
        }
        order
    }

    #[test]
    fn test_center_wall_scenario() {
        let grid = GridWorld::new(["...", ".X.", "..."]).unwrap();
        assert!(grid.occupied(1, 1));

        let state = AgentState::new(1, 0, Direction::North, &grid);
        let pairs = state.successors().into_pairs();
        assert_eq!(
            pairs,
            vec![
                (2, AgentState::new(2, 0, Direction::East, &grid)),
                (0, AgentState::new(0, 0, Direction::West, &grid)),
            ]
        );
    }

    #[test]
    fn test_single_cell_scenario() {
        let grid = GridWorld::new(["."]).unwrap();
        let state = AgentState::new(0, 0, Direction::North, &grid);
        let successors = state.successors();
        assert_eq!(successors.len(), 1);
        assert_eq!(
            successors.states(),
            vec![AgentState::new(0, 0, Direction::South, &grid)]
        );

        // Spinning in place keeps alternating between the two facings.
        let back = successors.states()[0].successors().states();
        assert_eq!(back, vec![state]);
    }

    #[test]
    fn test_ragged_grid_scenario() {
        let result = GridWorld::new(["....", "...", "...."]);
        assert!(matches!(result, Err(GridError::MalformedGrid(_))));
    }

    #[test]
    fn test_original_demo_grid() {
        let grid = GridWorld::new(["......", ".XX.XX", "......"]).unwrap();
        let start = grid.initial_state(0, 0, Direction::North).unwrap();
        let labels: Vec<String> = start
            .successors()
            .iter()
            .map(|s| format!("{}:{}", s.action, s.state))
            .collect();
        assert_eq!(labels, vec!["N:(0,1,N)", "E:(1,0,E)"]);
    }

    #[test]
    fn test_dead_end_pocket_turns_back() {
        // (3, 0) is a pocket open only to the north.
        let grid = GridWorld::new(["......", ".XX.XX", "XXX.XX"]).unwrap();
        let state = AgentState::new(3, 0, Direction::South, &grid);
        assert!(state.at_dead_end());
        let successors = state.successors();
        assert_eq!(
            successors.states(),
            vec![AgentState::new(3, 1, Direction::North, &grid)]
        );
        assert!(successors
            .iter()
            .all(|s| !matches!(s.action, Move::TurnAround(_))));
    }

    #[test]
    fn test_successors_at_coordinate_limits() {
        let grid = GridWorld::new(["..."]).unwrap();
        let east = AgentState::new(i32::MAX, 0, Direction::East, &grid);
        assert_eq!(
            east.successors().states(),
            vec![AgentState::new(i32::MAX, 0, Direction::West, &grid)]
        );
        let west = AgentState::new(i32::MIN, 0, Direction::West, &grid);
        assert_eq!(
            west.successors().states(),
            vec![AgentState::new(i32::MIN, 0, Direction::East, &grid)]
        );
    }

    #[test]
    fn test_bfs_covers_every_open_cell() {
        let grid = GridWorld::new(["......", ".XX.XX", "......"]).unwrap();
        let start = grid.initial_state(0, 0, Direction::North).unwrap();
        let states = reachable(start);

        let mut cells: Vec<(i32, i32)> = states.iter().map(|s| s.position()).collect();
        cells.sort();
        cells.dedup();
        let mut open: Vec<(i32, i32)> = grid.open_cells().collect();
        open.sort();
        assert_eq!(cells, open);

        for state in &states {
            assert!(!grid.occupied(state.x(), state.y()));
        }
    }

    #[test]
    fn test_bfs_terminates_on_enclosed_cell() {
        let grid = GridWorld::new(["XXX", "X.X", "XXX"]).unwrap();
        let start = grid.initial_state(1, 1, Direction::East).unwrap();
        let states = reachable(start);
        // Only the two facings along the east-west axis are ever produced.
        assert_eq!(
            states,
            vec![start, AgentState::new(1, 1, Direction::West, &grid)]
        );
    }

    #[test]
    fn test_parallel_expansion_matches_sequential() {
        let grid = GridWorld::new(["......", ".XX.XX", "......"]).unwrap();
        let frontier: Vec<AgentState> = grid
            .open_cells()
            .flat_map(|(x, y)| Direction::ALL.map(|d| AgentState::new(x, y, d, &grid)))
            .collect();

        let sequential: Vec<_> = frontier.iter().map(|s| s.successors()).collect();
        let parallel: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = frontier
                .iter()
                .map(|s| scope.spawn(move || s.successors()))
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .collect()
        });
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_grid_from_text() {
        let text = "\
......
.XX.XX
......
";
        let grid: GridWorld = text.parse().unwrap();
        assert_eq!(grid, GridWorld::new(["......", ".XX.XX", "......"]).unwrap());
    }
}
