mod astar;
mod bfs;

pub use astar::solve_astar;
pub use bfs::solve_bfs;

use crate::maze::{Maze, Point};

/// Search node stored in the A* arena.
#[derive(Debug, Clone, Copy)]
struct TrackedCell {
    /// Coordinates of the cell in the maze
    coord: Point,
    /// Arena index of the cell from which this cell was reached
    parent: Option<usize>,
    /// Cost to reach this cell from the start
    traveling_cost: usize,
    /// Estimated cost to reach the goal from this cell
    heuristic_cost: usize,
}

impl TrackedCell {
    fn priority(&self) -> usize {
        self.traveling_cost + self.heuristic_cost
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    Bfs,
    AStar,
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Solver::AStar => write!(f, "A* Search"),
        }
    }
}

impl Solver {
    /// Finds a path from `entry` to `exit`. See [`solve_maze`].
    pub fn find_path(self, maze: &Maze, entry: Point, exit: Point) -> Option<Vec<Point>> {
        solve_maze(maze, self, entry, exit)
    }
}

/// Runs the selected solver without touching the maze.
///
/// Returns the path from `entry` to `exit`, both inclusive, or `None` when they are not connected.
pub fn solve_maze(maze: &Maze, solver: Solver, entry: Point, exit: Point) -> Option<Vec<Point>> {
    let path = match solver {
        Solver::Bfs => solve_bfs(maze, entry, exit),
        Solver::AStar => solve_astar(maze, entry, exit),
    };
    match &path {
        Some(path) => tracing::info!("[solve] {} found {} steps", solver, path.len() - 1),
        None => tracing::info!("[solve] {} found no path {} -> {}", solver, entry, exit),
    }
    path
}
