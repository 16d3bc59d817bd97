use rand::{Rng, seq::SliceRandom};

use super::{GenerationError, union_find::UnionFind};
use crate::{
    maze::{Maze, Point},
    solvers::solve_bfs,
};

/// Wall edge between two lattice cells two steps apart
#[derive(Clone, Copy)]
struct Edge {
    cell1: Point,
    cell2: Point,
}

/// Randomized Kruskal over the odd sub-lattice.
///
/// Entry and exit are forced open regardless of lattice parity, so a run can leave them cut off
/// from the spanning tree. Such runs are thrown away and regenerated, up to `max_attempts` times.
/// Returns the number of attempts used.
pub fn randomized_kruskal<R: Rng + ?Sized>(
    maze: &mut Maze,
    entry: Point,
    exit: Point,
    max_attempts: usize,
    rng: &mut R,
) -> Result<usize, GenerationError> {
    let edges = collect_edges(maze);

    for attempt in 1..=max_attempts {
        carve_spanning_tree(maze, edges.clone(), rng);

        // Set entry and exit points as passages
        maze[entry].wall = false;
        maze[exit].wall = false;

        if solve_bfs(maze, entry, exit).is_some() {
            tracing::debug!(
                "[kruskal] {} -> {} connected after {} attempt(s)",
                entry,
                exit,
                attempt
            );
            return Ok(attempt);
        }
        tracing::trace!("[kruskal] Attempt {} left {} cut off from {}", attempt, exit, entry);
    }

    tracing::warn!(
        "[kruskal] Gave up connecting {} -> {} after {} attempts",
        entry,
        exit,
        max_attempts
    );
    Err(GenerationError::Unconnected {
        attempts: max_attempts,
    })
}

/// Cells at odd coordinates strictly inside the border.
fn lattice_cells(maze: &Maze) -> impl Iterator<Item = Point> + use<> {
    let width = maze.width();
    let height = maze.height();
    (1..height.saturating_sub(1))
        .step_by(2)
        .flat_map(move |y| (1..width.saturating_sub(1)).step_by(2).map(move |x| Point::new(x, y)))
}

/// Collect all possible edges between adjacent lattice cells.
fn collect_edges(maze: &Maze) -> Vec<Edge> {
    let width = maze.width();
    let height = maze.height();

    lattice_cells(maze)
        .flat_map(|cell| {
            [
                (cell.x + 2 < width).then(|| Edge {
                    cell1: cell,
                    cell2: Point::new(cell.x + 2, cell.y),
                }),
                (cell.y + 2 < height).then(|| Edge {
                    cell1: cell,
                    cell2: Point::new(cell.x, cell.y + 2),
                }),
            ]
        })
        .flatten()
        .collect()
}

/// Walls off the whole maze, then carves a random spanning forest over `edges`.
fn carve_spanning_tree<R: Rng + ?Sized>(maze: &mut Maze, mut edges: Vec<Edge>, rng: &mut R) {
    maze.fill_walls();
    // A lattice with a single cell has no edges, open it directly
    for cell in lattice_cells(maze) {
        maze[cell].wall = false;
    }

    // Initialize Union-Find for all cells
    let mut uf = UnionFind::new(maze.width() * maze.height());

    // Shuffle edges randomly
    edges.shuffle(rng);

    for edge in edges {
        let idx1 = maze.index_of(edge.cell1);
        let idx2 = maze.index_of(edge.cell2);

        // Joining cells that are already connected would create a loop
        if uf.unite(idx1, idx2) {
            maze[edge.cell1].wall = false;
            maze[edge.cell2].wall = false;
            maze[edge.cell1.midpoint(edge.cell2)].wall = false;
        }
    }
}
