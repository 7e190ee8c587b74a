pub mod cell;
pub mod grid;

use std::collections::VecDeque;

pub use cell::Cell;
use grid::Grid;

/// A `(row, col)` position in the grid.
pub type Pos = (u16, u16);

/// The four axis-aligned moves, in the order neighbors are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// The unit vector of this direction as `(Δrow, Δcol)`.
    pub const fn delta(self) -> (i16, i16) {
        match self {
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
        }
    }

    /// Move `distance` positions away from `from`.
    /// Returns `None` when the step would leave the coordinate space.
    pub fn step(self, from: Pos, distance: u16) -> Option<Pos> {
        let distance = i16::try_from(distance).ok()?;
        let (d_row, d_col) = self.delta();
        Some((
            from.0.checked_add_signed(d_row * distance)?,
            from.1.checked_add_signed(d_col * distance)?,
        ))
    }
}

/// Sum of the absolute row and column differences between two positions.
pub fn manhattan_distance(a: Pos, b: Pos) -> u32 {
    a.0.abs_diff(b.0) as u32 + a.1.abs_diff(b.1) as u32
}

/// A rectangular maze frame.
///
/// Real cells live on odd `(row, col)` positions inside the border. Every other position is a
/// wall slot: the ones between two real cells can be carved away, the border never is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Maze {
    grid: Grid,
}

impl Maze {
    /// Creates a fully walled frame: every real cell is [`Cell::Open`], everything else is
    /// [`Cell::Wall`].
    pub fn create_frame(height: u16, width: u16) -> Self {
        let mut maze = Maze {
            grid: Grid::new(height, width, Cell::Wall),
        };
        for pos in maze.real_cells().collect::<Vec<_>>() {
            maze.grid[pos] = Cell::Open;
        }
        maze
    }

    /// Returns a reference to the underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the height of the grid in positions (walls included).
    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    /// Returns the width of the grid in positions (walls included).
    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    /// The first real cell.
    pub fn entrance(&self) -> Pos {
        (1, 1)
    }

    /// The last real cell.
    pub fn exit(&self) -> Pos {
        (
            self.height().saturating_sub(2),
            self.width().saturating_sub(2),
        )
    }

    /// Whether `pos` lies strictly inside the border.
    pub fn is_interior(&self, pos: Pos) -> bool {
        pos.0 > 0 && pos.1 > 0 && pos.0 + 1 < self.height() && pos.1 + 1 < self.width()
    }

    /// Whether `pos` is a real cell rather than a wall slot.
    pub fn is_real_cell(&self, pos: Pos) -> bool {
        pos.0 % 2 == 1 && pos.1 % 2 == 1 && self.is_interior(pos)
    }

    /// All real cells in row-major order.
    pub fn real_cells(&self) -> impl Iterator<Item = Pos> + use<> {
        let (height, width) = (self.height(), self.width());
        (1..height.saturating_sub(1)).step_by(2).flat_map(move |row| {
            (1..width.saturating_sub(1))
                .step_by(2)
                .map(move |col| (row, col))
        })
    }

    /// Positions exactly `distance` steps away from `pos` that are inside the border and still
    /// [`Cell::Open`], in [`Direction::ALL`] order.
    ///
    /// Generation asks for `distance = 2` to hop over the wall slot onto the next real cell.
    /// Solving asks for `distance = 1` since carved slots and cells are both just open.
    pub fn neighbors(&self, pos: Pos, distance: u16) -> Vec<Pos> {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| direction.step(pos, distance))
            .filter(|&next| self.is_interior(next) && self.grid[next] == Cell::Open)
            .collect()
    }

    /// Sets the wall slot halfway between `from` and `to` to `fill`.
    ///
    /// `from` and `to` must be two apart on exactly one axis, as pairs produced by
    /// [`Maze::neighbors`] with `distance = 2` are.
    pub fn remove_wall(&mut self, from: Pos, to: Pos, fill: Cell) {
        debug_assert!(
            (from.0.abs_diff(to.0), from.1.abs_diff(to.1)) == (2, 0)
                || (from.0.abs_diff(to.0), from.1.abs_diff(to.1)) == (0, 2),
            "{:?} and {:?} are not two apart on a single axis",
            from,
            to
        );
        let wall = (
            ((from.0 as u32 + to.0 as u32) / 2) as u16,
            ((from.1 as u32 + to.1 as u32) / 2) as u16,
        );
        self.grid[wall] = fill;
    }

    /// Real cells still [`Cell::Open`], i.e. not yet folded into the spanning tree.
    pub fn unvisited_real_cells(&self) -> Vec<Pos> {
        self.real_cells()
            .filter(|&pos| self.grid[pos] == Cell::Open)
            .collect()
    }

    /// Number of positions currently in the given state.
    pub fn count(&self, cell: Cell) -> usize {
        self.grid.data.iter().filter(|&&c| c == cell).count()
    }

    /// Number of wall slots between real cells that are no longer walls.
    pub fn carved_wall_count(&self) -> usize {
        self.grid
            .coords()
            .filter(|&pos| self.is_interior(pos) && !self.is_real_cell(pos))
            .filter(|&pos| !self.grid[pos].is_wall())
            .count()
    }

    /// Number of real cells that cannot be reached from the entrance through passable
    /// positions.
    pub fn unreachable_cells(&self) -> usize {
        let total = self.real_cells().count();
        let start = self.entrance();
        if !self.is_real_cell(start) || self.grid[start].is_wall() {
            return total;
        }

        let mut seen = vec![false; self.grid.data.len()];
        let index = |pos: Pos| pos.0 as usize * self.width() as usize + pos.1 as usize;
        let mut queue = VecDeque::from([start]);
        seen[index(start)] = true;
        let mut reached = 0;

        while let Some(pos) = queue.pop_front() {
            if self.is_real_cell(pos) {
                reached += 1;
            }
            for next in Direction::ALL
                .into_iter()
                .filter_map(|direction| direction.step(pos, 1))
            {
                if self.is_interior(next) && !self.grid[next].is_wall() && !seen[index(next)] {
                    seen[index(next)] = true;
                    queue.push_back(next);
                }
            }
        }

        total - reached
    }

    /// Whether every real cell is reachable from the entrance.
    pub fn is_connected(&self) -> bool {
        self.unreachable_cells() == 0
    }

    /// Reduces a generated maze to two states: carved positions become [`Cell::Open`],
    /// everything else becomes [`Cell::Wall`].
    pub fn collapse(&mut self) {
        self.grid.data.iter_mut().for_each(|cell| {
            *cell = match cell {
                Cell::Carved => Cell::Open,
                _ => Cell::Wall,
            }
        });
    }
}

impl std::ops::Index<Pos> for Maze {
    type Output = Cell;

    fn index(&self, index: Pos) -> &Self::Output {
        &self.grid[index]
    }
}

impl std::ops::IndexMut<Pos> for Maze {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        &mut self.grid[index]
    }
}
