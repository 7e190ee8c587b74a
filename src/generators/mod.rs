use rand::{Rng, SeedableRng, rngs::StdRng};

mod dfs;

use dfs::randomized_dfs;

use crate::{
    config::validate_dimensions,
    error::MazeError,
    maze::Maze,
};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Carve a perfect maze of `height x width` grid positions.
///
/// Dimensions are checked before any carving starts. The returned maze only holds
/// [`Cell::Open`](crate::maze::Cell::Open) and [`Cell::Wall`](crate::maze::Cell::Wall), and is
/// verified to connect every real cell to the entrance.
pub fn generate_maze<R: Rng>(
    height: u16,
    width: u16,
    rng: &mut R,
) -> Result<Maze, MazeError> {
    validate_dimensions(height, width)?;

    let mut maze = Maze::create_frame(height, width);
    randomized_dfs(&mut maze, rng);
    finish_maze(maze)
}

/// Collapse a carved maze to two states and check that every real cell is reachable from the
/// entrance.
fn finish_maze(mut maze: Maze) -> Result<Maze, MazeError> {
    maze.collapse();

    let unreachable = maze.unreachable_cells();
    if unreachable > 0 {
        tracing::error!("[generate] {} cells are cut off from the entrance", unreachable);
        return Err(MazeError::Disconnected { unreachable });
    }

    tracing::info!(
        "[generate] Carved a {}x{} maze with {} passages",
        maze.height(),
        maze.width(),
        maze.carved_wall_count()
    );
    Ok(maze)
}

/// Random source that always yields zero, so every uniform pick lands on the first candidate.
#[cfg(test)]
pub(crate) struct FirstChoice;

#[cfg(test)]
impl rand::RngCore for FirstChoice {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::maze::Cell;

    fn assert_spanning_tree(maze: &Maze) {
        let real_cells = maze.real_cells().count();
        // Every real cell is passable
        assert!(maze.real_cells().all(|pos| maze[pos] == Cell::Open));
        // A tree over n nodes has n - 1 edges
        assert_eq!(maze.carved_wall_count(), real_cells - 1);
        assert!(maze.is_connected());
        // Nothing outside cells and carved slots is open
        assert_eq!(maze.count(Cell::Open), 2 * real_cells - 1);
    }

    #[test]
    fn test_spanning_tree_property() {
        for seed in 0..20 {
            let mut rng = get_rng(Some(seed));
            let maze = generate_maze(21, 31, &mut rng).unwrap();
            assert_spanning_tree(&maze);
        }
    }

    #[test]
    fn test_spanning_tree_default_size() {
        let mut rng = get_rng(Some(7));
        let maze = generate_maze(121, 251, &mut rng).unwrap();
        assert_spanning_tree(&maze);
        assert_eq!(maze.real_cells().count(), 60 * 125);
    }

    #[test]
    fn test_border_stays_intact() {
        let mut rng = get_rng(Some(3));
        let maze = generate_maze(11, 15, &mut rng).unwrap();
        for (row, col) in maze.grid().coords() {
            if maze.grid().is_boundary(row, col) {
                assert_eq!(maze[(row, col)], Cell::Wall);
            }
        }
    }

    #[test]
    fn test_same_seed_same_maze() {
        let first = generate_maze(31, 41, &mut get_rng(Some(42))).unwrap();
        let second = generate_maze(31, 41, &mut get_rng(Some(42))).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fixed_choices_seven_by_seven() {
        let maze = generate_maze(7, 7, &mut FirstChoice).unwrap();
        assert_spanning_tree(&maze);
        assert_eq!(maze.carved_wall_count(), 8);

        // Always taking the first candidate snakes through the rows.
        let expected = [
            "#######", //
            "#     #", //
            "##### #", //
            "#     #", //
            "# #####", //
            "#     #", //
            "#######", //
        ];
        for (row, line) in expected.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let cell = if ch == '#' { Cell::Wall } else { Cell::Open };
                assert_eq!(maze[(row as u16, col as u16)], cell, "at {:?}", (row, col));
            }
        }
    }

    #[test]
    fn test_single_cell_maze() {
        let maze = generate_maze(3, 3, &mut FirstChoice).unwrap();
        assert_eq!(maze.count(Cell::Open), 1);
        assert_eq!(maze[(1, 1)], Cell::Open);
        assert_eq!(maze.carved_wall_count(), 0);
    }

    #[test]
    fn test_stranded_cells_are_reported() {
        // Walling off the middle cell leaves the exit unreachable by carving
        let mut maze = Maze::create_frame(3, 7);
        maze[(1, 3)] = Cell::Wall;
        randomized_dfs(&mut maze, &mut FirstChoice);

        assert_eq!(
            finish_maze(maze),
            Err(MazeError::Disconnected { unreachable: 2 })
        );
    }

    #[test]
    fn test_finish_accepts_connected_maze() {
        let mut maze = Maze::create_frame(3, 5);
        randomized_dfs(&mut maze, &mut FirstChoice);
        let maze = finish_maze(maze).unwrap();
        assert_spanning_tree(&maze);
    }

    #[test]
    fn test_invalid_dimensions_rejected() {
        assert_eq!(
            generate_maze(4, 7, &mut FirstChoice),
            Err(MazeError::Config(ConfigError::EvenDimension {
                axis: "height",
                value: 4
            }))
        );
        assert!(matches!(
            generate_maze(7, 1, &mut FirstChoice),
            Err(MazeError::Config(ConfigError::TooSmall { .. }))
        ));
    }
}
