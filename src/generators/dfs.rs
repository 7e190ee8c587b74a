use rand::Rng;

use crate::maze::{Cell, Maze};

/// Carve a spanning tree over the real cells of a freshly framed maze.
///
/// Visited cells and the wall slots carved between them are marked [`Cell::Carved`]; the
/// caller collapses the result to two states.
pub fn randomized_dfs<R: Rng>(maze: &mut Maze, rng: &mut R) {
    let exit = maze.exit();
    let mut remaining = maze.unvisited_real_cells().len();
    if remaining == 0 {
        return;
    }

    let mut current = maze.entrance();
    maze[current] = Cell::Carved;
    remaining -= 1;

    // The stack keeps only cells already carved into the tree
    let mut stack = Vec::with_capacity(remaining);
    let mut fresh_seeds = 0usize;

    while remaining > 0 {
        let neighbors = maze.neighbors(current, 2);

        // The exit is a leaf: carving on from it would tunnel through the last corner first
        if !neighbors.is_empty() && current != exit {
            stack.push(current);
            let next = neighbors[rng.random_range(0..neighbors.len())];
            maze.remove_wall(current, next, Cell::Carved);
            maze[next] = Cell::Carved;
            remaining -= 1;
            current = next;
        } else if let Some(previous) = stack.pop() {
            current = previous;
        } else {
            // Nothing left to backtrack to, seed a fresh component from any unvisited cell.
            // The new component is not joined to the tree; generate_maze reports it.
            let unvisited = maze.unvisited_real_cells();
            current = unvisited[rng.random_range(0..unvisited.len())];
            tracing::warn!(
                "[generate] Stack exhausted with {} cells unvisited, reseeding at {:?}",
                remaining,
                current
            );
            maze[current] = Cell::Carved;
            remaining -= 1;
            fresh_seeds += 1;
        }
    }

    tracing::debug!(
        "[generate] Finished carving with {} fresh seeds",
        fresh_seeds
    );
}
