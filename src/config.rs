use std::path::PathBuf;

use crate::error::ConfigError;

/// Grid height in positions, walls included.
pub const HEIGHT: u16 = 121;
/// Grid width in positions, walls included.
pub const WIDTH: u16 = 251;
/// Side of one grid position in the rendered image, in pixels.
pub const CELL_SIZE: u32 = 10;
/// Smallest odd dimension that still holds one real cell.
///
/// Deliberately below the commonly quoted 5: a 5x5 grid already holds 2x2
/// real cells, while 3x3 is the single-cell grid where entrance and exit coincide.
pub const MIN_DIMENSION: u16 = 3;
/// Base name of the image holding the generated maze.
pub const MAZE_NAME: &str = "maze";
/// Base name of the image holding the solved maze.
pub const SOLUTION_NAME: &str = "way";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub height: u16,
    pub width: u16,
    pub cell_size: u32,
    /// Directory the images and the log file are written to.
    pub output_dir: PathBuf,
    pub maze_name: String,
    pub solution_name: String,
    /// Show each finished grid in the terminal after saving it.
    pub preview: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            height: HEIGHT,
            width: WIDTH,
            cell_size: CELL_SIZE,
            output_dir: PathBuf::from("."),
            maze_name: MAZE_NAME.to_string(),
            solution_name: SOLUTION_NAME.to_string(),
            preview: true,
        }
    }
}

impl Config {
    /// Check the grid settings. Must pass before anything is generated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_dimensions(self.height, self.width)?;
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        Ok(())
    }
}

/// Both dimensions must be odd and at least [`MIN_DIMENSION`].
pub fn validate_dimensions(height: u16, width: u16) -> Result<(), ConfigError> {
    for (axis, value) in [("height", height), ("width", width)] {
        if value % 2 == 0 {
            return Err(ConfigError::EvenDimension { axis, value });
        }
        if value < MIN_DIMENSION {
            return Err(ConfigError::TooSmall {
                axis,
                value,
                min: MIN_DIMENSION,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_even_dimension_rejected() {
        let config = Config {
            height: 4,
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::EvenDimension {
                axis: "height",
                value: 4
            })
        );
        assert!(matches!(
            validate_dimensions(7, 10),
            Err(ConfigError::EvenDimension { axis: "width", .. })
        ));
    }

    #[test]
    fn test_too_small_rejected() {
        assert_eq!(
            validate_dimensions(1, 7),
            Err(ConfigError::TooSmall {
                axis: "height",
                value: 1,
                min: MIN_DIMENSION
            })
        );
        assert_eq!(validate_dimensions(3, 3), Ok(()));
    }

    #[test]
    fn test_zero_cell_size_rejected() {
        let config = Config {
            cell_size: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroCellSize));
    }
}
