pub mod astar;
pub mod bfs;
pub mod dfs;

use std::{collections::HashMap, time::Duration};

use crate::maze::{Coord, Maze};
use astar::solve_astar;
use bfs::solve_bfs;
use dfs::solve_dfs;

/// Outcome of one search, identical in shape for every solver.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Whether a path from start to goal was found
    pub success: bool,
    /// Coordinates from start to goal inclusive, empty on failure
    pub path: Vec<Coord>,
    /// Number of moves along `path`
    pub steps: usize,
    /// Distinct coordinates taken off the frontier and expanded
    pub nodes_explored: usize,
    /// Wall-clock time spent in the search loop
    pub time: Duration,
}

impl SearchResult {
    /// Result for a search that never started because an endpoint is unusable.
    pub fn rejected() -> Self {
        Self::failed(0, Duration::ZERO)
    }

    pub fn failed(nodes_explored: usize, time: Duration) -> Self {
        SearchResult {
            success: false,
            path: Vec::new(),
            steps: 0,
            nodes_explored,
            time,
        }
    }

    pub fn found(path: Vec<Coord>, nodes_explored: usize, time: Duration) -> Self {
        SearchResult {
            success: true,
            steps: path.len().saturating_sub(1),
            path,
            nodes_explored,
            time,
        }
    }

    /// Elapsed search time in seconds.
    pub fn time_secs(&self) -> f64 {
        self.time.as_secs_f64()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Solver {
    Bfs,
    Dfs,
    AStar,
}

impl Solver {
    pub const ALL: [Solver; 3] = [Solver::Bfs, Solver::Dfs, Solver::AStar];

    /// Short label used in metrics tables.
    pub fn short_name(&self) -> &'static str {
        match self {
            Solver::Bfs => "BFS",
            Solver::Dfs => "DFS",
            Solver::AStar => "A*",
        }
    }
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::AStar => write!(f, "A* Search (A*)"),
        }
    }
}

/// Run the selected solver from `start` to `goal`.
pub fn solve_maze(maze: &Maze, solver: Solver, start: Coord, goal: Coord) -> SearchResult {
    let result = match solver {
        Solver::Bfs => solve_bfs(maze, start, goal),
        Solver::Dfs => solve_dfs(maze, start, goal),
        Solver::AStar => solve_astar(maze, start, goal),
    };
    tracing::debug!(
        "[solver] {} from {:?} to {:?}: success={} steps={} nodes_explored={} time={:?}",
        solver.short_name(),
        start,
        goal,
        result.success,
        result.steps,
        result.nodes_explored,
        result.time
    );
    result
}

/// Both endpoints must be in bounds and free before a search may start.
fn endpoints_valid(maze: &Maze, start: Coord, goal: Coord) -> bool {
    let valid = maze.is_free(start) && maze.is_free(goal);
    if !valid {
        tracing::warn!(
            "[solver] rejected endpoints start={:?} goal={:?} on a {}x{} maze",
            start,
            goal,
            maze.rows(),
            maze.cols()
        );
    }
    valid
}

/// Walk predecessor links back from `goal` and return the path in start-to-goal order.
/// The start coordinate is the only one without a predecessor.
fn reconstruct_path(parents: &HashMap<Coord, Option<Coord>>, goal: Coord) -> Vec<Coord> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&Some(parent)) = parents.get(&current) {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashSet;

    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;
    use crate::maze::Cell;

    pub(crate) fn maze(layout: &str) -> Maze {
        layout.parse().expect("valid layout")
    }

    pub(crate) const OPEN_5X5: &str = "
        .....
        .....
        .....
        .....
        .....
    ";

    pub(crate) const MEDIUM_10X10: &str = "
        ..#.......
        .##.####..
        ....#..#.#
        #.#.#.##..
        ..#...#..#
        .####.#.#.
        ......#.#.
        .#.####.#.
        .#......#.
        .####.#...
    ";

    pub(crate) const WALLED: &str = "
        ...#...
        ...#...
        ...#...
        ...#...
    ";

    /// Asserts that `result.path` is a connected walk of free cells from start to goal.
    pub(crate) fn assert_valid_path(maze: &Maze, result: &SearchResult, start: Coord, goal: Coord) {
        assert!(result.success);
        assert_eq!(result.path.first(), Some(&start));
        assert_eq!(result.path.last(), Some(&goal));
        assert_eq!(result.steps, result.path.len() - 1);
        for coord in &result.path {
            assert!(maze.is_free(*coord), "{:?} is not free", coord);
        }
        for pair in result.path.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert_eq!(
                a.0.abs_diff(b.0) + a.1.abs_diff(b.1),
                1,
                "{:?} -> {:?} is not a cardinal step",
                a,
                b
            );
        }
    }

    /// Shortest path length by repeated relaxation over every cell, independent of any queue.
    fn brute_force_distance(maze: &Maze, start: Coord, goal: Coord) -> Option<usize> {
        if !maze.is_free(start) || !maze.is_free(goal) {
            return None;
        }
        let mut dist: HashMap<Coord, usize> = HashMap::from([(start, 0)]);
        loop {
            let mut changed = false;
            for row in 0..maze.rows() {
                for col in 0..maze.cols() {
                    let Some(&d) = dist.get(&(row, col)) else {
                        continue;
                    };
                    for n in maze.neighbors((row, col)) {
                        if dist.get(&n).is_none_or(|&existing| d + 1 < existing) {
                            dist.insert(n, d + 1);
                            changed = true;
                        }
                    }
                }
            }
            if !changed {
                return dist.get(&goal).copied();
            }
        }
    }

    fn random_maze(rng: &mut StdRng, rows: usize, cols: usize, wall_chance: f64) -> Maze {
        let rows = (0..rows)
            .map(|_| {
                (0..cols)
                    .map(|_| {
                        if rng.random_bool(wall_chance) {
                            Cell::Wall
                        } else {
                            Cell::Free
                        }
                    })
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        Maze::from_rows(&rows).unwrap()
    }

    #[test]
    fn test_open_grid_reference_values() {
        let m = maze(OPEN_5X5);
        let bfs = solve_maze(&m, Solver::Bfs, (0, 0), (4, 4));
        let astar = solve_maze(&m, Solver::AStar, (0, 0), (4, 4));
        let dfs = solve_maze(&m, Solver::Dfs, (0, 0), (4, 4));

        assert_eq!(bfs.steps, 8);
        assert_eq!(astar.steps, 8);
        assert_eq!(bfs.nodes_explored, 25);
        assert_eq!(astar.nodes_explored, 9);
        assert!(astar.nodes_explored < bfs.nodes_explored);
        // DFS snakes through every row before reaching the goal
        assert_eq!(dfs.steps, 24);
        assert_eq!(dfs.nodes_explored, 25);
    }

    #[test]
    fn test_dfs_longer_than_bfs() {
        let m = maze(MEDIUM_10X10);
        let bfs = solve_maze(&m, Solver::Bfs, (0, 0), (9, 9));
        let dfs = solve_maze(&m, Solver::Dfs, (0, 0), (9, 9));
        let astar = solve_maze(&m, Solver::AStar, (0, 0), (9, 9));
        assert_eq!(bfs.steps, 20);
        assert_eq!(astar.steps, 20);
        assert_eq!(dfs.steps, 24);
        assert_eq!(bfs.nodes_explored, 57);
        assert_eq!(dfs.nodes_explored, 35);
        assert_eq!(astar.nodes_explored, 36);
        for result in [&bfs, &dfs, &astar] {
            assert_valid_path(&m, result, (0, 0), (9, 9));
        }
    }

    #[test]
    fn test_unreachable_goal() {
        let m = maze(WALLED);
        for solver in Solver::ALL {
            let result = solve_maze(&m, solver, (0, 0), (3, 6));
            assert!(!result.success, "{} found a path", solver);
            assert!(result.path.is_empty());
            assert_eq!(result.steps, 0);
            // Every cell on the start side is expanded before giving up
            assert_eq!(result.nodes_explored, 12);
        }
    }

    #[test]
    fn test_invalid_endpoints() {
        let m = maze(
            "
            #....
            .....
            ",
        );
        let cases = [
            ((0, 0), (1, 4)), // start on a wall
            ((1, 4), (0, 0)), // goal on a wall
            ((5, 0), (1, 4)), // start out of bounds
            ((1, 0), (1, 9)), // goal out of bounds
        ];
        for solver in Solver::ALL {
            for (start, goal) in cases {
                let result = solve_maze(&m, solver, start, goal);
                assert_eq!(result, SearchResult::rejected());
            }
        }
    }

    #[test]
    fn test_start_is_goal() {
        let m = maze(OPEN_5X5);
        for solver in Solver::ALL {
            let result = solve_maze(&m, solver, (2, 2), (2, 2));
            assert!(result.success);
            assert_eq!(result.path, vec![(2, 2)]);
            assert_eq!(result.steps, 0);
            assert_eq!(result.nodes_explored, 1);
        }
    }

    #[test]
    fn test_deterministic() {
        let m = maze(MEDIUM_10X10);
        for solver in Solver::ALL {
            let first = solve_maze(&m, solver, (0, 0), (9, 9));
            let second = solve_maze(&m, solver, (0, 0), (9, 9));
            assert_eq!(first.path, second.path);
            assert_eq!(first.steps, second.steps);
            assert_eq!(first.nodes_explored, second.nodes_explored);
        }
    }

    #[test]
    fn test_random_mazes_against_reference() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let rows = rng.random_range(1..=8);
            let cols = rng.random_range(1..=8);
            let m = random_maze(&mut rng, rows, cols, 0.3);
            let start = (rng.random_range(0..rows), rng.random_range(0..cols));
            let goal = (rng.random_range(0..rows), rng.random_range(0..cols));

            let expected = brute_force_distance(&m, start, goal);
            let bfs = solve_maze(&m, Solver::Bfs, start, goal);
            let dfs = solve_maze(&m, Solver::Dfs, start, goal);
            let astar = solve_maze(&m, Solver::AStar, start, goal);

            match expected {
                Some(distance) => {
                    assert_eq!(bfs.steps, distance, "BFS on\n{}", m);
                    assert_eq!(astar.steps, distance, "A* on\n{}", m);
                    assert!(astar.nodes_explored <= bfs.nodes_explored, "A* on\n{}", m);
                    assert!(dfs.steps >= distance);
                    for result in [&bfs, &dfs, &astar] {
                        assert_valid_path(&m, result, start, goal);
                    }
                    // DFS paths never revisit a cell
                    let unique = dfs.path.iter().collect::<HashSet<_>>();
                    assert_eq!(unique.len(), dfs.path.len());
                }
                None => {
                    for result in [&bfs, &dfs, &astar] {
                        assert!(!result.success);
                        assert!(result.path.is_empty());
                    }
                }
            }
        }
    }

    #[test]
    fn test_solver_display() {
        assert_eq!(Solver::AStar.short_name(), "A*");
        assert_eq!(Solver::Bfs.to_string(), "Breadth-First Search (BFS)");
    }
}
