mod dfs;

use dfs::solve_dfs;

use crate::maze::{Cell, Maze};

/// Find the path from the entrance to the exit of a generated maze.
///
/// The input is left untouched; the returned copy has the path marked [`Cell::OnPath`] and
/// abandoned dead ends marked [`Cell::Backtracked`]. Returns `None` when the exit cannot be
/// reached.
pub fn solve_maze(maze: &Maze) -> Option<Maze> {
    let mut solved = maze.clone();
    let (entrance, exit) = (solved.entrance(), solved.exit());

    if !solve_dfs(&mut solved, entrance, exit) {
        tracing::warn!("[solve] No path found from {:?} to {:?}", entrance, exit);
        return None;
    }

    tracing::info!(
        "[solve] Reached {:?}: {} cells on the path, {} backtracked",
        exit,
        solved.count(Cell::OnPath),
        solved.count(Cell::Backtracked)
    );
    Some(solved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{FirstChoice, generate_maze, get_rng};
    use crate::maze::{Direction, Pos};

    /// Walk the `OnPath` positions from the entrance and return them in order.
    fn trace_path(maze: &Maze) -> Vec<Pos> {
        let mut path = vec![maze.entrance()];
        let mut previous = None;
        let mut current = maze.entrance();
        while current != maze.exit() {
            let next = Direction::ALL
                .into_iter()
                .filter_map(|direction| direction.step(current, 1))
                .find(|&pos| maze[pos] == Cell::OnPath && Some(pos) != previous)
                .expect("path is broken");
            previous = Some(current);
            current = next;
            path.push(current);
        }
        path
    }

    #[test]
    fn test_never_reports_not_found_on_generated_mazes() {
        for seed in 0..20 {
            let maze = generate_maze(25, 35, &mut get_rng(Some(seed))).unwrap();
            let solved = solve_maze(&maze).expect("generated maze must be solvable");
            let path = trace_path(&solved);
            // The path is simple and its cells are exactly the OnPath marks
            assert_eq!(path.len(), solved.count(Cell::OnPath));
            assert_eq!(path.last(), Some(&maze.exit()));
        }
    }

    #[test]
    fn test_input_is_not_mutated() {
        let maze = generate_maze(11, 11, &mut get_rng(Some(5))).unwrap();
        let before = maze.clone();
        let _ = solve_maze(&maze);
        assert_eq!(maze, before);
    }

    #[test]
    fn test_seven_by_seven_tree_distance() {
        let maze = generate_maze(7, 7, &mut FirstChoice).unwrap();
        let solved = solve_maze(&maze).unwrap();
        // The snake visits every cell: 9 cells and 8 slots, 16 steps
        assert_eq!(trace_path(&solved).len() - 1, 16);
        assert_eq!(solved.count(Cell::Backtracked), 0);
        assert_eq!(solved.count(Cell::Open), 0);
    }

    #[test]
    fn test_unsolvable_maze() {
        // A bare frame has no carved passages at all
        let maze = Maze::create_frame(7, 7);
        assert_eq!(solve_maze(&maze), None);
    }

    #[test]
    fn test_single_cell_maze() {
        let maze = generate_maze(3, 3, &mut FirstChoice).unwrap();
        let solved = solve_maze(&maze).unwrap();
        assert_eq!(solved.count(Cell::OnPath), 1);
        assert_eq!(trace_path(&solved), vec![(1, 1)]);
    }
}
