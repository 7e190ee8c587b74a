use super::cell::Cell;

/// Row-major cell storage. Coordinates are `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    pub data: Box<[Cell]>,
    width: u16,
    height: u16,
}

impl Grid {
    pub fn new(height: u16, width: u16, cell: Cell) -> Self {
        let data = vec![cell; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn is_boundary(&self, row: u16, col: u16) -> bool {
        row == 0 || col == 0 || row == self.height - 1 || col == self.width - 1
    }

    fn ravel_index(&self, row: u16, col: u16) -> usize {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        row as usize * self.width as usize + col as usize
    }

    /// Iterate over all coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = (u16, u16)> + use<> {
        let (height, width) = (self.height, self.width);
        (0..height).flat_map(move |row| (0..width).map(move |col| (row, col)))
    }
}

impl std::ops::Index<(u16, u16)> for Grid {
    type Output = Cell;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

impl std::ops::IndexMut<(u16, u16)> for Grid {
    fn index_mut(&mut self, index: (u16, u16)) -> &mut Self::Output {
        let idx = self.ravel_index(index.0, index.1);
        &mut self.data[idx]
    }
}
