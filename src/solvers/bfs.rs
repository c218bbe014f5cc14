use std::{
    collections::{HashMap, VecDeque},
    time::Instant,
};

use super::{SearchResult, endpoints_valid, reconstruct_path};
use crate::maze::{Coord, Maze};

/// Breadth-first search. Finds a shortest path in number of moves.
pub fn solve_bfs(maze: &Maze, start: Coord, goal: Coord) -> SearchResult {
    if !endpoints_valid(maze, start, goal) {
        return SearchResult::rejected();
    }

    let timer = Instant::now();
    let mut queue = VecDeque::from([start]);
    // A cell is visited as soon as it is queued, so each cell enters the queue at most once.
    // The map doubles as the visited set.
    let mut parents: HashMap<Coord, Option<Coord>> = HashMap::from([(start, None)]);
    let mut nodes_explored = 0;

    while let Some(current) = queue.pop_front() {
        nodes_explored += 1;
        if current == goal {
            let path = reconstruct_path(&parents, goal);
            return SearchResult::found(path, nodes_explored, timer.elapsed());
        }

        for neighbor in maze.neighbors(current) {
            if !parents.contains_key(&neighbor) {
                parents.insert(neighbor, Some(current));
                queue.push_back(neighbor);
            }
        }
    }

    SearchResult::failed(nodes_explored, timer.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::tests::{OPEN_5X5, maze};

    #[test]
    fn test_bfs_open_grid_path() {
        let result = solve_bfs(&maze(OPEN_5X5), (0, 0), (4, 4));
        // "Down" is enqueued before "right", so BFS hugs the left column
        assert_eq!(
            result.path,
            vec![
                (0, 0),
                (1, 0),
                (2, 0),
                (3, 0),
                (4, 0),
                (4, 1),
                (4, 2),
                (4, 3),
                (4, 4)
            ]
        );
        assert_eq!(result.nodes_explored, 25);
    }

    #[test]
    fn test_bfs_takes_shortcut() {
        let m = maze(
            "
            .....
            .###.
            .....
            ",
        );
        let result = solve_bfs(&m, (0, 0), (2, 0));
        assert_eq!(result.path, vec![(0, 0), (1, 0), (2, 0)]);
        assert_eq!(result.steps, 2);
    }
}
