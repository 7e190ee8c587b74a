use std::io::Write;

use crossterm::{
    cursor, queue,
    style::{self, Color, Stylize},
    terminal::{self, ClearType},
};

use super::is_approach;
use crate::maze::{Cell, Maze};

/// Print the finished grid to the terminal.
///
/// Returns `Ok(false)` without drawing anything when the terminal is too small to show the whole
/// grid.
pub fn preview(maze: &Maze) -> std::io::Result<bool> {
    let (term_width, term_height) = terminal::size()?;
    if term_width < maze.width() * Cell::CELL_WIDTH || term_height < maze.height() {
        tracing::debug!(
            "[preview] Terminal ({}x{}) too small for a {}x{} grid, skipping",
            term_width,
            term_height,
            maze.width(),
            maze.height()
        );
        return Ok(false);
    }

    let mut stdout = std::io::stdout();
    queue!(
        stdout,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    for row in 0..maze.height() {
        for col in 0..maze.width() {
            if is_approach(maze, (row, col)) {
                queue!(stdout, style::PrintStyledContent("🟩".with(Color::Green)))?;
            } else {
                queue!(stdout, style::Print(maze[(row, col)]))?;
            }
        }
        queue!(stdout, style::Print("\r\n"))?;
    }
    stdout.flush()?;
    Ok(true)
}
