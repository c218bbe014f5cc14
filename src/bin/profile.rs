use std::time::Duration;

use mazepath::{
    config::Config,
    maze::{Cell, Coord, Maze},
    presets,
    solvers::{Solver, solve_maze},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

const DEFAULT_ITERS: usize = 100;
const DEFAULT_SEED: u64 = 0;
const FIELD_SIZE: usize = 64;
const WALL_CHANCE: f64 = 0.25;

/// Square obstacle field with every cell independently walled. Corners stay free.
fn obstacle_field(size: usize, seed: u64) -> std::io::Result<Maze> {
    let mut rng = StdRng::seed_from_u64(seed);
    let rows = (0..size)
        .map(|row| {
            (0..size)
                .map(|col| {
                    let corner = (row, col) == (0, 0) || (row, col) == (size - 1, size - 1);
                    if !corner && rng.random_bool(WALL_CHANCE) {
                        Cell::Wall
                    } else {
                        Cell::Free
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    Maze::from_rows(&rows).map_err(std::io::Error::other)
}

fn profile(name: &str, maze: &Maze, start: Coord, goal: Coord, num_iters: usize) {
    println!("{} ({}x{})", name, maze.rows(), maze.cols());
    for solver in Solver::ALL {
        let mut total = Duration::ZERO;
        let mut last = None;
        for _ in 0..num_iters {
            let result = solve_maze(maze, solver, start, goal);
            total += result.time;
            last = Some(result);
        }
        if let Some(result) = last {
            println!(
                "  {:<4} found={:<5} steps={:<5} nodes_explored={:<6} mean_time={:?}",
                solver.short_name(),
                result.success,
                result.steps,
                result.nodes_explored,
                total / num_iters as u32
            );
        }
    }
}

fn main() -> std::io::Result<()> {
    let _guard = Config::from_env().init_logging();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_ITERS);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_SEED);
    tracing::info!("[profile] {} iterations, seed {}", num_iters, seed);

    for preset in presets::catalog() {
        let maze = preset.maze().map_err(std::io::Error::other)?;
        profile(preset.name, &maze, preset.start, preset.goal, num_iters);
    }

    let field = obstacle_field(FIELD_SIZE, seed)?;
    profile(
        "Random obstacle field",
        &field,
        (0, 0),
        (FIELD_SIZE - 1, FIELD_SIZE - 1),
        num_iters,
    );
    Ok(())
}
