use dfsmaze::{
    config::Config,
    generators::{generate_maze, get_rng},
    logging, renderer,
    solvers::solve_maze,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    // Fail before anything is generated or written
    config.validate()?;

    std::fs::create_dir_all(&config.output_dir)?;
    let _guard = logging::init(&config.output_dir, tracing::Level::DEBUG);
    tracing::info!(
        "[main] Starting with a {}x{} grid",
        config.height,
        config.width
    );

    let maze = generate_maze(config.height, config.width, &mut get_rng(None))?;
    tracing::info!(
        "[main] Entrance {:?}, exit {:?}",
        maze.entrance(),
        maze.exit()
    );
    let maze_path = renderer::render(
        &maze,
        &config.output_dir,
        &config.maze_name,
        config.cell_size,
    )?;
    if config.preview {
        renderer::preview(&maze)?;
    }
    println!("Maze saved to {}", maze_path.display());

    match solve_maze(&maze) {
        Some(way) => {
            let way_path = renderer::render(
                &way,
                &config.output_dir,
                &config.solution_name,
                config.cell_size,
            )?;
            if config.preview {
                renderer::preview(&way)?;
            }
            println!("Maze solved! Goal reached.");
            println!("Path saved to {}", way_path.display());
        }
        None => {
            println!("No path found to the goal.");
        }
    }

    tracing::info!("[main] Done");
    Ok(())
}
