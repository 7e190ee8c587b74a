mod preview;

use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};

use crate::{
    error::RenderError,
    maze::{Cell, Maze, Pos},
};

pub use preview::preview;

/// Extension of every image written by [`render`].
pub const IMAGE_EXTENSION: &str = "png";

pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
pub const WALL: Rgb<u8> = Rgb([0, 0, 0]);
pub const ON_PATH: Rgb<u8> = Rgb([255, 0, 0]);
pub const BACKTRACKED: Rgb<u8> = Rgb([0, 0, 255]);
pub const APPROACH: Rgb<u8> = Rgb([0, 128, 0]);

/// Whether `pos` is the border slot leading into the entrance or out of the exit.
pub(crate) fn is_approach(maze: &Maze, pos: Pos) -> bool {
    let entrance = maze.entrance();
    let exit = maze.exit();
    (pos.0 == entrance.0 && pos.1 + 1 == entrance.1) || (pos.0 == exit.0 && pos.1 == exit.1 + 1)
}

fn color_of(maze: &Maze, pos: Pos) -> Rgb<u8> {
    if is_approach(maze, pos) {
        return APPROACH;
    }
    match maze[pos] {
        Cell::OnPath => ON_PATH,
        Cell::Backtracked => BACKTRACKED,
        Cell::Wall => WALL,
        Cell::Open | Cell::Carved => BACKGROUND,
    }
}

/// Paint every grid position as a `cell_size` pixel square.
pub fn rasterize(maze: &Maze, cell_size: u32) -> RgbImage {
    let mut image = RgbImage::from_pixel(
        maze.width() as u32 * cell_size,
        maze.height() as u32 * cell_size,
        BACKGROUND,
    );

    for pos in maze.grid().coords() {
        let color = color_of(maze, pos);
        if color == BACKGROUND {
            continue;
        }
        let (left, top) = (pos.1 as u32 * cell_size, pos.0 as u32 * cell_size);
        for y in top..top + cell_size {
            for x in left..left + cell_size {
                image.put_pixel(x, y, color);
            }
        }
    }
    image
}

/// Rasterize `maze` and save it as `<dir>/<name>.png`, creating `dir` if needed.
/// Returns the path written.
pub fn render(
    maze: &Maze,
    dir: &Path,
    name: &str,
    cell_size: u32,
) -> Result<PathBuf, RenderError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.{}", name, IMAGE_EXTENSION));

    rasterize(maze, cell_size).save(&path)?;
    tracing::info!("[render] Saved {}", path.display());
    Ok(path)
}
