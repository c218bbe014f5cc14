use crate::maze::Coord;

/// Row-major rectangular storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    data: Box<[T]>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Grid<T> {
    pub fn new(rows: usize, cols: usize, cell: T) -> Self {
        let data = vec![cell; rows * cols].into_boxed_slice();
        Grid { data, rows, cols }
    }
}

impl<T> Grid<T> {
    /// Builds a grid from already flattened row-major data.
    /// Caller guarantees `data.len() == rows * cols`.
    pub(crate) fn from_raw(data: Vec<T>, rows: usize, cols: usize) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Grid {
            data: data.into_boxed_slice(),
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn get(&self, coord: Coord) -> Option<&T> {
        self.ravel_index(coord).map(|idx| &self.data[idx])
    }

    /// Returns `None` when the coordinate falls outside the grid.
    fn ravel_index(&self, (row, col): Coord) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }
}

impl<T> std::ops::Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, index: Coord) -> &Self::Output {
        match self.ravel_index(index) {
            Some(idx) => &self.data[idx],
            None => panic!(
                "coordinate {:?} is out of bounds for a {}x{} grid",
                index, self.rows, self.cols
            ),
        }
    }
}

impl<T> std::ops::IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        match self.ravel_index(index) {
            Some(idx) => &mut self.data[idx],
            None => panic!(
                "coordinate {:?} is out of bounds for a {}x{} grid",
                index, self.rows, self.cols
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_indexing() {
        let mut grid = Grid::new(3, 4, 0u8);
        grid[(2, 3)] = 7;
        assert_eq!(grid[(2, 3)], 7);
        // Row-major layout
        assert_eq!(grid.data()[2 * 4 + 3], 7);
        assert_eq!(grid.get((3, 0)), None);
        assert_eq!(grid.get((0, 4)), None);
    }

    #[test]
    #[should_panic]
    fn test_grid_index_out_of_bounds() {
        let grid = Grid::new(2, 2, 0u8);
        let _ = grid[(2, 0)];
    }
}
