use crossterm::style::{Color, Stylize};

use std::fmt;

/// The state of a single grid position.
///
/// A freshly framed grid only holds [`Cell::Wall`] and [`Cell::Open`]. Generation folds cells
/// into the spanning tree as [`Cell::Carved`], and the solver leaves [`Cell::OnPath`] and
/// [`Cell::Backtracked`] marks behind.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Impassable.
    #[default]
    Wall,
    /// Passable and not yet visited by the running pass.
    Open,
    /// Incorporated into the spanning tree during generation.
    Carved,
    /// Stepped onto by the solver and not (yet) proven a dead end.
    OnPath,
    /// Stepped onto by the solver and abandoned as a dead end.
    Backtracked,
}

impl Cell {
    /// The width of each cell when previewed in the terminal, in character widths.
    pub const CELL_WIDTH: u16 = 2;

    pub fn is_wall(&self) -> bool {
        matches!(self, Cell::Wall)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Cell::Wall => "⬜".with(Color::White),
            Cell::Open | Cell::Carved => "  ".with(Color::Reset),
            Cell::OnPath => "🟥".with(Color::Red),
            Cell::Backtracked => "🟦".with(Color::Blue),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Cell::CELL_WIDTH as usize,
                "Each cell must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}
