/// Represents a cell in the grid, which can be either a passage or a wall.
///
/// The zero value (`Cell::default()`) is an open, unvisited cell.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Blocks traversal when set.
    pub wall: bool,
    /// Generation-time bookkeeping. Meaningless once generation completes.
    pub visited: bool,
}

impl Cell {
    /// A wall that no generator has touched yet.
    pub const WALL: Cell = Cell {
        wall: true,
        visited: false,
    };
    /// A cell carved by a generator.
    pub const CARVED: Cell = Cell {
        wall: false,
        visited: true,
    };

    pub fn is_open(&self) -> bool {
        !self.wall
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero_value() {
        assert_eq!(
            Cell::default(),
            Cell {
                wall: false,
                visited: false
            }
        );
        assert!(Cell::default().is_open());
        assert!(!Cell::WALL.is_open());
    }
}
