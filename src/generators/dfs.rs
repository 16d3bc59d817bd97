use std::collections::{HashMap, VecDeque};

use rand::Rng;

use crate::{
    maze::{Cell, Maze, Point, get_neighbors},
    solvers::solve_bfs,
};

/// Lattice steps used by the walk: two cells in each cardinal direction.
const LATTICE_STEPS: [(isize, isize); 4] = [(2, 0), (-2, 0), (0, 2), (0, -2)];

/// Recursive backtracking with an explicit stack.
///
/// Carves a spanning tree over the sub-lattice reachable from `entry` in steps of two, keeping a
/// closed border except at `entry` and `exit`. The exit is patched in afterwards if the walk did
/// not reach it.
pub fn randomized_dfs<R: Rng + ?Sized>(maze: &mut Maze, entry: Point, exit: Point, rng: &mut R) {
    // Initialize the maze with walls
    maze.fill_walls();
    set_outer_walls(maze, entry, exit);

    maze[entry] = Cell::CARVED;

    // The stack will keep only carved cells
    let mut stack = vec![entry];
    let mut carved = 1usize;

    while let Some(&cell) = stack.last() {
        let neighbors = get_unvisited_neighbors(cell, maze);
        if neighbors.is_empty() {
            // Dead end, backtrack
            stack.pop();
            continue;
        }

        let neighbor = neighbors[rng.random_range(0..neighbors.len())];
        maze[cell.midpoint(neighbor)].wall = false;
        maze[neighbor] = Cell::CARVED;
        carved += 1;
        // Carve the maze in that neighbor's direction
        stack.push(neighbor);
    }
    tracing::debug!("[dfs] Carved {} lattice cells from {}", carved, entry);

    connect_exit_point(maze, entry, exit, rng);
}

/// Closes the whole outer border, leaving passages at the entry and exit points.
fn set_outer_walls(maze: &mut Maze, entry: Point, exit: Point) {
    maze.close_border();
    maze[entry].wall = false;
    maze[exit].wall = false;
}

/// Get unvisited neighbors of a cell.
/// A neighbor is considered a cell that is two steps away in the cardinal directions and lies
/// strictly inside the border.
fn get_unvisited_neighbors(cell: Point, maze: &Maze) -> Vec<Point> {
    lattice_neighbors(cell, maze)
        .filter(|&p| !maze[p].visited)
        .collect()
}

fn lattice_neighbors(cell: Point, maze: &Maze) -> impl Iterator<Item = Point> + '_ {
    LATTICE_STEPS
        .into_iter()
        .filter_map(move |(dx, dy)| cell.offset(dx, dy))
        .filter(|&p| maze.is_interior(p))
}

/// Makes sure `exit` is reachable from `entry` without adding a loop.
///
/// Usually the exit shares the walk's lattice and only needs the wall towards one already carved
/// neighbor removed. Otherwise a tunnel is dug through interior cells to the closest open cell.
fn connect_exit_point<R: Rng + ?Sized>(maze: &mut Maze, entry: Point, exit: Point, rng: &mut R) {
    if solve_bfs(maze, entry, exit).is_some() {
        return;
    }

    let carved_neighbors = lattice_neighbors(exit, maze)
        .filter(|&p| maze[p].visited)
        .collect::<Vec<_>>();
    if !carved_neighbors.is_empty() {
        let next = carved_neighbors[rng.random_range(0..carved_neighbors.len())];
        maze[exit.midpoint(next)].wall = false;
        maze[exit].visited = true;
        tracing::debug!("[dfs] Connected exit {} through {}", exit, next);
        return;
    }

    let Some(tunnel) = find_tunnel(maze, exit) else {
        tracing::warn!("[dfs] Exit {} could not be connected to the maze", exit);
        return;
    };
    tracing::debug!(
        "[dfs] Exit {} is off the walk lattice, dug a tunnel of {} cells",
        exit,
        tunnel.cells.len()
    );
    for &p in &tunnel.cells {
        maze[p] = Cell::CARVED;
    }

    // The end cell joined several parts of the tree, cut each extra loop once
    let end = tunnel.cells[0];
    if let Some((&first, rest)) = tunnel.joins.split_first() {
        for &other in rest {
            break_loop(maze, end, first, other, entry, exit);
        }
    }
}

/// Interior cells to open so that `exit` meets the carved tree.
struct Tunnel {
    /// Cells to open, starting with the one next to the tree
    cells: Vec<Point>,
    /// Open cells the first tunnel cell touches
    joins: Vec<Point>,
}

/// Open cells next to `point`, not counting the exit itself.
fn open_neighbors(maze: &Maze, point: Point, exit: Point) -> Vec<Point> {
    get_neighbors(point, maze)
        .filter(|&n| n != exit && maze.is_open(n))
        .collect()
}

/// Breadth-first search from `exit` through interior walls.
///
/// Walls with no open neighbor are dug through. The shortest route ending next to exactly one
/// open cell is preferred. When every route ends next to two or more open cells, the closest
/// such route is returned and the caller has to cut the loops it closes.
fn find_tunnel(maze: &Maze, exit: Point) -> Option<Tunnel> {
    let mut parent: HashMap<Point, Point> = HashMap::from([(exit, exit)]);
    let mut queue = VecDeque::from([exit]);
    let mut fallback = None;

    while let Some(current) = queue.pop_front() {
        for next in get_neighbors(current, maze) {
            if parent.contains_key(&next) || !maze.is_interior(next) || maze.is_open(next) {
                continue;
            }
            parent.insert(next, current);

            let joins = open_neighbors(maze, next, exit);
            match joins.len() {
                0 => queue.push_back(next),
                1 => return Some(trace_tunnel(&parent, exit, next, joins)),
                _ => {
                    if fallback.is_none() {
                        fallback = Some(trace_tunnel(&parent, exit, next, joins));
                    }
                }
            }
        }
    }
    fallback
}

fn trace_tunnel(
    parent: &HashMap<Point, Point>,
    exit: Point,
    end: Point,
    joins: Vec<Point>,
) -> Tunnel {
    let mut cells = Vec::new();
    let mut p = end;
    while p != exit {
        cells.push(p);
        p = parent[&p];
    }
    Tunnel { cells, joins }
}

/// Walls up one cell on the loop `end -> first ~> other -> end`.
///
/// Only a cell with exactly two open neighbors is picked. Both of them lie on the loop, so the
/// open cells stay connected and form a tree again.
fn break_loop(
    maze: &mut Maze,
    end: Point,
    first: Point,
    other: Point,
    entry: Point,
    exit: Point,
) {
    let Some(path) = open_path_avoiding(maze, other, first, end) else {
        // An earlier cut already split this loop
        return;
    };
    let cut = path.into_iter().find(|&p| {
        p != entry
            && p != exit
            && get_neighbors(p, maze).filter(|&n| maze.is_open(n)).count() == 2
    });
    match cut {
        Some(p) => {
            maze[p].wall = true;
            tracing::debug!("[dfs] Walled {} to cut the loop through {}", p, end);
        }
        None => tracing::warn!("[dfs] Could not cut the loop through {}", end),
    }
}

/// Shortest route between two open cells that does not pass through `avoid`.
fn open_path_avoiding(maze: &Maze, from: Point, to: Point, avoid: Point) -> Option<Vec<Point>> {
    let mut parent: HashMap<Point, Point> = HashMap::from([(from, from)]);
    let mut queue = VecDeque::from([from]);

    while let Some(current) = queue.pop_front() {
        if current == to {
            let mut path = vec![current];
            let mut p = current;
            while p != from {
                p = parent[&p];
                path.push(p);
            }
            path.reverse();
            return Some(path);
        }
        for next in get_neighbors(current, maze) {
            if next != avoid && maze.is_open(next) && !parent.contains_key(&next) {
                parent.insert(next, current);
                queue.push_back(next);
            }
        }
    }
    None
}
