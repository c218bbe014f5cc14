use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap, HashSet},
    time::Instant,
};

use super::{SearchResult, endpoints_valid, reconstruct_path};
use crate::maze::{Coord, Maze};

/// Manhattan distance, `|Δrow| + |Δcol|`.
/// Admissible and consistent for four-way movement at unit cost.
pub fn manhattan(a: Coord, b: Coord) -> usize {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

/// Frontier entry. Field order is the heap order: lowest `f` first, then lowest `h`
/// (deepest along the current best route), then earliest pushed.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct TrackedCell {
    /// Estimated total cost through this cell, `g + h`
    total_cost: usize,
    /// Estimated cost from this cell to the goal
    heuristic_cost: usize,
    /// Push counter, for first-in first-out among equal costs
    sequence: usize,
    coord: Coord,
}

/// A* search guided by [`manhattan`]. Returns a shortest path and usually expands fewer
/// cells than BFS.
pub fn solve_astar(maze: &Maze, start: Coord, goal: Coord) -> SearchResult {
    if !endpoints_valid(maze, start, goal) {
        return SearchResult::rejected();
    }

    let timer = Instant::now();
    // Using Reverse to turn the max-heap into a min-heap
    let mut open: BinaryHeap<Reverse<TrackedCell>> = BinaryHeap::new();
    let mut sequence = 0;
    open.push(Reverse(TrackedCell {
        total_cost: manhattan(start, goal),
        heuristic_cost: manhattan(start, goal),
        sequence,
        coord: start,
    }));
    // Best known cost from start to each discovered cell
    let mut costs: HashMap<Coord, usize> = HashMap::from([(start, 0)]);
    let mut parents: HashMap<Coord, Option<Coord>> = HashMap::from([(start, None)]);
    let mut closed: HashSet<Coord> = HashSet::new();
    let mut nodes_explored = 0;

    while let Some(Reverse(current)) = open.pop() {
        // Stale entry left behind by a later, cheaper push
        if !closed.insert(current.coord) {
            continue;
        }
        nodes_explored += 1;

        if current.coord == goal {
            let path = reconstruct_path(&parents, goal);
            return SearchResult::found(path, nodes_explored, timer.elapsed());
        }

        let new_cost = costs[&current.coord] + 1;
        for neighbor in maze.neighbors(current.coord) {
            if closed.contains(&neighbor) {
                continue;
            }
            let is_cheaper = costs
                .get(&neighbor)
                .is_none_or(|&existing_cost| new_cost < existing_cost);
            if !is_cheaper {
                continue;
            }
            costs.insert(neighbor, new_cost);
            parents.insert(neighbor, Some(current.coord));

            sequence += 1;
            let heuristic_cost = manhattan(neighbor, goal);
            open.push(Reverse(TrackedCell {
                total_cost: new_cost + heuristic_cost,
                heuristic_cost,
                sequence,
                coord: neighbor,
            }));
        }
    }

    SearchResult::failed(nodes_explored, timer.elapsed())
}
