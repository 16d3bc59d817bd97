use std::collections::{HashMap, HashSet, VecDeque};

use crate::maze::{Maze, Point, get_neighbors};

/// Breadth-first search through non-wall cells.
///
/// Returns one of the shortest paths from `start` to `goal` (both inclusive), or `None` if the
/// goal cannot be reached. Neighbors are tried up, right, down, left, which fixes which of several
/// equally short paths comes back.
pub fn solve_bfs(maze: &Maze, start: Point, goal: Point) -> Option<Vec<Point>> {
    if !maze.is_in_bounds(start) || !maze.is_in_bounds(goal) {
        tracing::warn!("[bfs] {} -> {} leaves the maze", start, goal);
        return None;
    }

    let mut queue = VecDeque::from([start]);
    let mut visited = HashSet::from([start]);
    // Discovery edges, child -> parent
    let mut parent: HashMap<Point, Point> = HashMap::new();

    while let Some(current) = queue.pop_front() {
        if current == goal {
            let path = reconstruct_path(&parent, start, goal);
            tracing::debug!(
                "[bfs] Found path of {} cells, visited {}",
                path.len(),
                visited.len()
            );
            return Some(path);
        }

        for neighbor in get_neighbors(current, maze) {
            if maze[neighbor].is_open() && visited.insert(neighbor) {
                parent.insert(neighbor, current);
                queue.push_back(neighbor);
            }
        }
    }

    tracing::debug!("[bfs] No path, visited {} cells", visited.len());
    None // No path found
}

fn reconstruct_path(parent: &HashMap<Point, Point>, start: Point, goal: Point) -> Vec<Point> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        current = parent[&current];
        path.push(current);
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_path() {
        let maze = Maze::from_rows(&[
            ".##", //
            ".##", //
            "...",
        ]);
        let path = solve_bfs(&maze, Point::new(0, 0), Point::new(2, 2)).unwrap();
        assert_eq!(
            path,
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 2),
                Point::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_no_path() {
        let maze = Maze::from_rows(&[
            ".##", //
            "###", //
            "##.",
        ]);
        assert_eq!(solve_bfs(&maze, Point::new(0, 0), Point::new(2, 2)), None);
    }

    #[test]
    fn test_neighbor_order_picks_upper_route() {
        // Two equally short routes around the block; "up" and "right" are tried first.
        let maze = Maze::from_rows(&[
            "...", //
            ".#.", //
            "...",
        ]);
        let path = solve_bfs(&maze, Point::new(0, 2), Point::new(2, 0)).unwrap();
        assert_eq!(
            path,
            vec![
                Point::new(0, 2),
                Point::new(0, 1),
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
            ]
        );
    }

    #[test]
    fn test_start_equals_goal() {
        let maze = Maze::from_rows(&["..."]);
        assert_eq!(
            solve_bfs(&maze, Point::new(1, 0), Point::new(1, 0)),
            Some(vec![Point::new(1, 0)])
        );
    }

    #[test]
    fn test_path_length_with_two_routes() {
        let maze = Maze::from_rows(&[
            ".......", //
            ".#####.", //
            "...#...", //
            "##.#.##", //
            "##...##",
        ]);
        let path = solve_bfs(&maze, Point::new(0, 2), Point::new(6, 2)).unwrap();
        // Over the top and through the bottom loop both take 10 steps.
        assert_eq!(path.len(), 11);
    }

    #[test]
    fn test_out_of_bounds_is_no_path() {
        let maze = Maze::new(3, 3);
        assert_eq!(solve_bfs(&maze, Point::new(0, 0), Point::new(3, 0)), None);
    }
}
