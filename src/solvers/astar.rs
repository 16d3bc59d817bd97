use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashSet},
};

use super::TrackedCell;
use crate::maze::{Maze, Point, get_neighbors};

/// Heap entry. Derived ordering compares `priority` first, then `node`. Arena indices grow with
/// every push, so equal priorities pop in insertion order once wrapped in `Reverse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct QueueEntry {
    /// Traveling cost plus heuristic cost
    priority: usize,
    /// Index of the node in the arena
    node: usize,
}

/// Manhattan distance heuristic. Admissible and consistent on a unit-cost 4-connected grid.
fn heuristic(from: Point, goal: Point) -> usize {
    from.manhattan_distance(goal)
}

/// A* search with the Manhattan heuristic.
///
/// A cell is marked visited the first time it is discovered and never re-queued, even if a
/// cheaper route shows up later. With unit steps and a consistent heuristic this still yields the
/// shortest path on loop-free mazes, which is what the generators produce. On grids with loops,
/// ties in priority can settle a cell through a longer route.
pub fn solve_astar(maze: &Maze, start: Point, goal: Point) -> Option<Vec<Point>> {
    if !maze.is_in_bounds(start) || !maze.is_in_bounds(goal) {
        tracing::warn!("[astar] {} -> {} leaves the maze", start, goal);
        return None;
    }

    // Every discovered cell lives in the arena, parents are arena indices
    let mut nodes = vec![TrackedCell {
        coord: start,
        parent: None,
        traveling_cost: 0,
        heuristic_cost: heuristic(start, goal),
    }];

    // Using Reverse to turn the max-heap into a min-heap
    let mut pq: BinaryHeap<Reverse<QueueEntry>> = BinaryHeap::new();
    pq.push(Reverse(QueueEntry {
        priority: nodes[0].priority(),
        node: 0,
    }));
    let mut visited = HashSet::from([start]);

    while let Some(Reverse(entry)) = pq.pop() {
        let current = nodes[entry.node];
        if current.coord == goal {
            let path = reconstruct_path(&nodes, entry.node);
            tracing::debug!(
                "[astar] Found path of {} cells, discovered {}",
                path.len(),
                nodes.len()
            );
            return Some(path);
        }

        let new_cost = current.traveling_cost + 1; // Uniform cost for each step
        for neighbor in get_neighbors(current.coord, maze) {
            if !maze[neighbor].is_open() || !visited.insert(neighbor) {
                continue;
            }
            let node = TrackedCell {
                coord: neighbor,
                parent: Some(entry.node),
                traveling_cost: new_cost,
                heuristic_cost: heuristic(neighbor, goal),
            };
            pq.push(Reverse(QueueEntry {
                priority: node.priority(),
                node: nodes.len(),
            }));
            nodes.push(node);
        }
    }

    tracing::debug!("[astar] No path, discovered {} cells", nodes.len());
    None // No path found
}

/// Follows parent links from `last` back to the root.
fn reconstruct_path(nodes: &[TrackedCell], last: usize) -> Vec<Point> {
    let mut path = Vec::new();
    let mut next = Some(last);
    while let Some(idx) = next {
        path.push(nodes[idx].coord);
        next = nodes[idx].parent;
    }
    path.reverse();
    path
}
