use std::{collections::HashMap, time::Instant};

use super::{SearchResult, endpoints_valid, reconstruct_path};
use crate::maze::{Coord, Maze};

/// Stack entry: a coordinate and the cell that pushed it.
struct TrackedCell {
    coord: Coord,
    parent: Option<Coord>,
}

/// Depth-first search. Finds some path if one exists, not necessarily the shortest.
///
/// Cells are marked visited when popped, so the same cell may sit on the stack several
/// times. Only the first pop counts; later ones are discarded.
pub fn solve_dfs(maze: &Maze, start: Coord, goal: Coord) -> SearchResult {
    if !endpoints_valid(maze, start, goal) {
        return SearchResult::rejected();
    }

    let timer = Instant::now();
    let mut stack = vec![TrackedCell {
        coord: start,
        parent: None,
    }];
    let mut parents: HashMap<Coord, Option<Coord>> = HashMap::new();
    let mut nodes_explored = 0;

    while let Some(TrackedCell { coord, parent }) = stack.pop() {
        if parents.contains_key(&coord) {
            continue;
        }
        parents.insert(coord, parent);
        nodes_explored += 1;

        if coord == goal {
            let path = reconstruct_path(&parents, goal);
            return SearchResult::found(path, nodes_explored, timer.elapsed());
        }

        // Pushed up, down, left, right: right is popped first.
        stack.extend(
            maze.neighbors(coord)
                .filter(|n| !parents.contains_key(n))
                .map(|n| TrackedCell {
                    coord: n,
                    parent: Some(coord),
                }),
        );
    }

    SearchResult::failed(nodes_explored, timer.elapsed())
}
