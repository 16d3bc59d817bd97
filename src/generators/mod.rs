use rand::{Rng, SeedableRng, rngs::StdRng};
use thiserror::Error;

mod dfs;
mod kruskal;
mod union_find;

pub use dfs::randomized_dfs;
pub use kruskal::randomized_kruskal;
pub use union_find::UnionFind;

use crate::maze::{Maze, Point};

/// Smallest width or height a generator accepts.
pub const MIN_DIMENSION: usize = 3;
/// Default cap on Kruskal regenerations before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("maze must be at least 3x3, got {width}x{height}")]
    TooSmall { width: usize, height: usize },
    #[error("point {point} lies outside the {width}x{height} maze")]
    PointOutOfBounds {
        point: Point,
        width: usize,
        height: usize,
    },
    #[error("Kruskal's algorithm needs at least one attempt")]
    NoAttempts,
    #[error("entry and exit are still disconnected after {attempts} attempts")]
    Unconnected { attempts: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    Dfs,
    Kruskal,
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::Dfs => write!(f, "Randomized Depth-First Search (DFS)"),
            Generator::Kruskal => write!(f, "Kruskal's Algorithm"),
        }
    }
}

impl Generator {
    /// Generates a maze in place. See [`generate_maze`].
    pub fn generate<R: Rng + ?Sized>(
        self,
        maze: &mut Maze,
        entry: Point,
        exit: Point,
        max_attempts: usize,
        rng: &mut R,
    ) -> Result<(), GenerationError> {
        generate_maze(maze, self, entry, exit, max_attempts, rng)
    }
}

/// Carves `maze` in place with the selected generator, keeping passages at `entry` and `exit`.
///
/// The maze must be at least 3x3 and both points must lie inside it. `max_attempts` bounds the
/// Kruskal regeneration loop, must be positive for Kruskal and is ignored by DFS.
pub fn generate_maze<R: Rng + ?Sized>(
    maze: &mut Maze,
    generator: Generator,
    entry: Point,
    exit: Point,
    max_attempts: usize,
    rng: &mut R,
) -> Result<(), GenerationError> {
    let (width, height) = (maze.width(), maze.height());
    if width < MIN_DIMENSION || height < MIN_DIMENSION {
        return Err(GenerationError::TooSmall { width, height });
    }
    if let Some(&point) = [entry, exit].iter().find(|&&p| !maze.is_in_bounds(p)) {
        return Err(GenerationError::PointOutOfBounds {
            point,
            width,
            height,
        });
    }
    if generator == Generator::Kruskal && max_attempts == 0 {
        return Err(GenerationError::NoAttempts);
    }

    tracing::info!(
        "[generate] {} on {}x{} from {} to {}",
        generator,
        width,
        height,
        entry,
        exit
    );
    match generator {
        Generator::Dfs => randomized_dfs(maze, entry, exit, rng),
        Generator::Kruskal => {
            randomized_kruskal(maze, entry, exit, max_attempts, rng)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::solve_bfs;

    #[test]
    fn test_rejects_small_mazes() {
        let mut maze = Maze::new(2, 5);
        let err = generate_maze(
            &mut maze,
            Generator::Dfs,
            Point::new(0, 1),
            Point::new(1, 3),
            DEFAULT_MAX_ATTEMPTS,
            &mut get_rng(Some(0)),
        )
        .unwrap_err();
        assert_eq!(
            err,
            GenerationError::TooSmall {
                width: 2,
                height: 5
            }
        );
        assert_eq!(err.to_string(), "maze must be at least 3x3, got 2x5");
    }

    #[test]
    fn test_rejects_out_of_bounds_points() {
        let mut maze = Maze::new(5, 5);
        let err = Generator::Kruskal
            .generate(
                &mut maze,
                Point::new(0, 1),
                Point::new(5, 3),
                DEFAULT_MAX_ATTEMPTS,
                &mut get_rng(Some(0)),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            GenerationError::PointOutOfBounds { point, .. } if point == Point::new(5, 3)
        ));
    }

    #[test]
    fn test_kruskal_rejects_zero_attempts() {
        let entry = Point::new(0, 1);
        let exit = Point::new(6, 5);
        let mut maze = Maze::new(7, 7);
        let err = Generator::Kruskal
            .generate(&mut maze, entry, exit, 0, &mut get_rng(Some(0)))
            .unwrap_err();
        assert_eq!(err, GenerationError::NoAttempts);

        // DFS has no retry loop, so the cap does not matter
        Generator::Dfs
            .generate(&mut maze, entry, exit, 0, &mut get_rng(Some(0)))
            .unwrap();
        assert!(solve_bfs(&maze, entry, exit).is_some());
    }

    #[test]
    fn test_both_generators_connect_entry_and_exit() {
        let entry = Point::new(0, 3);
        let exit = Point::new(16, 9);
        for generator in [Generator::Dfs, Generator::Kruskal] {
            for seed in 0..10 {
                let mut maze = Maze::new(17, 11);
                generate_maze(
                    &mut maze,
                    generator,
                    entry,
                    exit,
                    DEFAULT_MAX_ATTEMPTS,
                    &mut get_rng(Some(seed)),
                )
                .unwrap();
                assert!(solve_bfs(&maze, entry, exit).is_some(), "{generator} seed {seed}");
            }
        }
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let a: u64 = get_rng(Some(5)).random();
        let b: u64 = get_rng(Some(5)).random();
        assert_eq!(a, b);
    }
}
