pub mod cell;
mod grid;

use std::fmt;

pub use cell::Cell;
use grid::Grid;

/// Integer coordinate in the maze. `x` grows to the right, `y` grows downwards.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Point { x, y }
    }

    /// Returns the point shifted by `(dx, dy)`, or `None` if either coordinate would go negative.
    pub fn offset(self, dx: isize, dy: isize) -> Option<Point> {
        Some(Point {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }

    /// Manhattan distance `|dx| + |dy|`.
    pub fn manhattan_distance(self, other: Point) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Checks if the point lies on the outer border of a `width`x`height` maze.
    pub fn is_on_border(self, width: usize, height: usize) -> bool {
        self.x == 0 || self.y == 0 || self.x + 1 == width || self.y + 1 == height
    }

    /// Checks if the point is one of the four corners of a `width`x`height` maze.
    pub fn is_corner_of(self, width: usize, height: usize) -> bool {
        (self.x == 0 || self.x + 1 == width) && (self.y == 0 || self.y + 1 == height)
    }

    /// The cell exactly between two points that are two steps apart on the same row or column.
    pub fn midpoint(self, other: Point) -> Point {
        Point {
            x: (self.x + other.x) / 2,
            y: (self.y + other.y) / 2,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(usize, usize)> for Point {
    fn from((x, y): (usize, usize)) -> Self {
        Point { x, y }
    }
}

/// Cardinal directions, in the order the solvers try them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

pub struct Maze {
    grid: Grid,
}

impl Maze {
    /// Creates a new maze with the given width and height.
    /// Every cell starts as the zero value (open, unvisited). Generators are expected to fill the
    /// maze with walls before carving. Dimensions are not validated here.
    pub fn new(width: usize, height: usize) -> Self {
        Maze {
            grid: Grid::new(width, height, Cell::default()),
        }
    }

    #[cfg(test)]
    /// Builds a maze from rows of `#` (wall) and any other character (passage).
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        let mut maze = Maze::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.chars().count(), width, "ragged row {y}");
            for (x, c) in row.chars().enumerate() {
                maze[Point::new(x, y)].wall = c == '#';
            }
        }
        maze
    }

    #[cfg(test)]
    /// Returns a reference to the internal grid data for testing purposes.
    pub fn grid(&self) -> &[Cell] {
        &self.grid.data
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Checks if the given point is within the bounds of the maze.
    pub fn is_in_bounds(&self, point: Point) -> bool {
        point.x < self.width() && point.y < self.height()
    }

    /// Checks if the given point lies on the outer border.
    pub fn is_boundary(&self, point: Point) -> bool {
        self.is_in_bounds(point) && point.is_on_border(self.width(), self.height())
    }

    /// Checks if the given point lies strictly inside the outer border.
    pub fn is_interior(&self, point: Point) -> bool {
        self.is_in_bounds(point) && !point.is_on_border(self.width(), self.height())
    }

    /// Returns the cell at `point`, or `None` when out of bounds.
    pub fn get(&self, point: Point) -> Option<&Cell> {
        self.is_in_bounds(point).then(|| &self[point])
    }

    /// Checks if `point` is in bounds and not a wall.
    pub fn is_open(&self, point: Point) -> bool {
        self.get(point).is_some_and(Cell::is_open)
    }

    /// Linear index of a point, `y * width + x`.
    pub fn index_of(&self, point: Point) -> usize {
        self.grid.ravel_index(point.x, point.y)
    }

    /// Sets every cell, border included, to a fresh wall.
    pub fn fill_walls(&mut self) {
        self.grid.fill(Cell::WALL);
    }

    /// Sets every border cell to a wall without touching the visited flag.
    pub fn close_border(&mut self) {
        for point in self.points().filter(|&p| self.is_boundary(p)).collect::<Vec<_>>() {
            self[point].wall = true;
        }
    }

    /// Iterates over every point in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let (width, height) = (self.width(), self.height());
        (0..height).flat_map(move |y| (0..width).map(move |x| Point::new(x, y)))
    }
}

impl std::ops::Index<Point> for Maze {
    type Output = Cell;

    fn index(&self, index: Point) -> &Self::Output {
        &self.grid[(index.x, index.y)]
    }
}

impl std::ops::IndexMut<Point> for Maze {
    fn index_mut(&mut self, index: Point) -> &mut Self::Output {
        &mut self.grid[(index.x, index.y)]
    }
}

/// Get neighbors of a cell.
/// A neighbor is considered a cell that is one step away in the cardinal directions, yielded in
/// `Direction::ALL` order (up, right, down, left). Only in-bounds neighbors are yielded.
pub fn get_neighbors(point: Point, maze: &Maze) -> impl Iterator<Item = Point> + '_ {
    Direction::ALL
        .into_iter()
        .filter_map(move |dir| {
            let (dx, dy) = dir.delta();
            point.offset(dx, dy)
        })
        .filter(move |&p| maze.is_in_bounds(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_maze_is_zero_valued() {
        let maze = Maze::new(4, 3);
        assert_eq!(maze.width(), 4);
        assert_eq!(maze.height(), 3);
        assert_eq!(maze.grid().len(), 12);
        assert!(maze.grid().iter().all(|&c| c == Cell::default()));
    }

    #[test]
    fn test_maze_indexing() {
        let mut maze = Maze::new(5, 5);
        maze[Point::new(2, 3)].wall = true;
        assert!(maze[Point::new(2, 3)].wall);
        // Row-major layout
        assert!(maze.grid()[3 * 5 + 2].wall);
        assert_eq!(maze.index_of(Point::new(2, 3)), 17);
        assert!(!maze[Point::new(3, 2)].wall);
    }

    #[test]
    fn test_out_of_bounds() {
        let maze = Maze::new(5, 4);
        assert!(!maze.is_in_bounds(Point::new(5, 3)));
        assert!(!maze.is_in_bounds(Point::new(0, 4)));
        assert!(maze.is_in_bounds(Point::new(4, 3)));
        assert!(maze.get(Point::new(9, 9)).is_none());
        assert!(!maze.is_open(Point::new(9, 9)));
    }

    #[test]
    fn test_boundary_and_corners() {
        let maze = Maze::new(5, 4);
        assert!(maze.is_boundary(Point::new(0, 2)));
        assert!(maze.is_boundary(Point::new(2, 3)));
        assert!(!maze.is_boundary(Point::new(2, 2)));
        assert!(maze.is_interior(Point::new(3, 2)));
        assert!(!maze.is_interior(Point::new(4, 2)));
        for corner in [(0, 0), (4, 0), (0, 3), (4, 3)] {
            assert!(Point::from(corner).is_corner_of(5, 4), "{corner:?}");
        }
        assert!(!Point::new(2, 0).is_corner_of(5, 4));
        assert!(Point::new(2, 0).is_on_border(5, 4));
        assert!(!Point::new(1, 1).is_on_border(5, 4));
    }

    #[test]
    fn test_fill_walls_and_close_border() {
        let mut maze = Maze::new(4, 4);
        maze[Point::new(1, 1)].visited = true;
        maze.close_border();
        assert!(maze[Point::new(0, 2)].wall);
        assert!(!maze[Point::new(1, 1)].wall);
        assert!(maze[Point::new(1, 1)].visited);

        maze.fill_walls();
        assert!(maze.grid().iter().all(|&c| c == Cell::WALL));
    }

    #[test]
    fn test_neighbors_order_and_bounds() {
        let maze = Maze::new(3, 3);
        let center: Vec<_> = get_neighbors(Point::new(1, 1), &maze).collect();
        assert_eq!(
            center,
            vec![
                Point::new(1, 0),
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(0, 1)
            ]
        );
        let corner: Vec<_> = get_neighbors(Point::new(0, 0), &maze).collect();
        assert_eq!(corner, vec![Point::new(1, 0), Point::new(0, 1)]);
    }

    #[test]
    fn test_point_helpers() {
        let a = Point::new(1, 3);
        let b = Point::new(3, 3);
        assert_eq!(a.midpoint(b), Point::new(2, 3));
        assert_eq!(a.manhattan_distance(Point::new(4, 0)), 6);
        assert_eq!(Point::new(0, 2).offset(-1, 0), None);
        assert_eq!(Point::new(0, 2).offset(2, -2), Some(Point::new(2, 0)));
        assert_eq!(Point::new(7, 1).to_string(), "(7, 1)");
    }
}
