use crate::maze::{Cell, Maze, Pos, manhattan_distance};

/// Pick the candidate closest to `goal`. Among equally close candidates the last one wins.
fn best_turn(candidates: &[Pos], goal: Pos) -> Option<Pos> {
    candidates
        .iter()
        .rev()
        .min_by_key(|&&pos| manhattan_distance(pos, goal))
        .copied()
}

/// Depth-first walk from `start` to `goal`, always trying the neighbor closest to the goal
/// first.
///
/// Every position stepped onto is marked [`Cell::OnPath`]; positions proven to be dead ends are
/// re-marked [`Cell::Backtracked`] and never entered again. Returns whether the goal was
/// reached.
pub fn solve_dfs(maze: &mut Maze, start: Pos, goal: Pos) -> bool {
    let mut current = start;
    maze[current] = Cell::OnPath;

    // The stack holds the path walked so far, minus the current position
    let mut stack: Vec<Pos> = Vec::new();
    let mut backtracks = 0usize;

    while current != goal {
        let neighbors = maze.neighbors(current, 1);

        if let Some(next) = best_turn(&neighbors, goal) {
            stack.push(current);
            maze[next] = Cell::OnPath;
            current = next;
        } else if let Some(previous) = stack.pop() {
            maze[current] = Cell::Backtracked;
            backtracks += 1;
            current = previous;
        } else {
            return false;
        }
    }

    tracing::debug!(
        "[solve] Path of {} steps found after {} backtracks",
        stack.len(),
        backtracks
    );
    true
}
