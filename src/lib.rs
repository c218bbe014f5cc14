//! Grid pathfinding engine comparing breadth-first search, depth-first search and A*.
//!
//! Every solver shares the signature `fn(&Maze, Coord, Coord) -> SearchResult` and reports
//! the path, step count, nodes explored and elapsed time. Invalid endpoints and unreachable
//! goals are ordinary failed results; only a malformed maze layout is an error.
//!
//! ```
//! use mazepath::{maze::Maze, solvers::{Solver, solve_maze}};
//!
//! let maze: Maze = "
//!     ..#
//!     ...
//! ".parse().unwrap();
//! let result = solve_maze(&maze, Solver::AStar, (0, 0), (1, 2));
//! assert!(result.success);
//! assert_eq!(result.steps, 3);
//! ```

pub mod app;
pub mod config;
pub mod maze;
pub mod presets;
pub mod solvers;
