use super::cell::Cell;

/// Row-major storage for the maze cells.
pub struct Grid {
    pub data: Box<[Cell]>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize, cell: Cell) -> Self {
        let data = vec![cell; width * height].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Linear index of `(x, y)`, i.e. `y * width + x`.
    pub fn ravel_index(&self, x: usize, y: usize) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "({x}, {y}) is outside a {}x{} grid",
            self.width,
            self.height
        );
        y * self.width + x
    }

    pub fn fill(&mut self, cell: Cell) {
        self.data.fill(cell);
    }
}

impl std::ops::Index<(usize, usize)> for Grid {
    type Output = Cell;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

impl std::ops::IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let idx = self.ravel_index(index.0, index.1);
        &mut self.data[idx]
    }
}
