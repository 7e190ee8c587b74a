use std::time::{Duration, Instant};

use dfsmaze::{
    config::{HEIGHT, WIDTH},
    generators::{generate_maze, get_rng},
    solvers::solve_maze,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(10);

    let mut generating = Duration::ZERO;
    let mut solving = Duration::ZERO;
    for seed in 0..num_iters {
        let started = Instant::now();
        let maze = generate_maze(HEIGHT, WIDTH, &mut get_rng(Some(seed)))?;
        generating += started.elapsed();

        let started = Instant::now();
        if solve_maze(&maze).is_none() {
            eprintln!("Seed {} produced an unsolvable maze", seed);
        }
        solving += started.elapsed();
    }

    let runs = num_iters.max(1) as u32;
    println!(
        "{} runs on a {}x{} grid: generate {:?}/run, solve {:?}/run",
        num_iters,
        HEIGHT,
        WIDTH,
        generating / runs,
        solving / runs
    );
    Ok(())
}
