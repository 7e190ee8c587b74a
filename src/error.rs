use thiserror::Error;

/// Rejected grid settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{axis} must be odd so cells land on odd positions, got {value}")]
    EvenDimension { axis: &'static str, value: u16 },
    #[error("{axis} must be at least {min} to hold an interior cell, got {value}")]
    TooSmall {
        axis: &'static str,
        value: u16,
        min: u16,
    },
    #[error("cell size must be at least one pixel")]
    ZeroCellSize,
}

/// Failures while carving a maze.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("invalid maze configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("generated maze is disconnected: {unreachable} cells cannot be reached from the entrance")]
    Disconnected { unreachable: usize },
}

/// Failures while writing an image.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
