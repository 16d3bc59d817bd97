pub mod input;
pub mod renderer;

use std::{
    io::{BufRead, Write},
    time::{Duration, Instant},
};

use crossterm::style::{Attribute, Color, Stylize};

use crate::{
    generators::{DEFAULT_MAX_ATTEMPTS, GenerationError, Generator, generate_maze, get_rng},
    maze::{Maze, Point},
    solvers::{Solver, solve_maze},
};

/// Environment variable holding a fixed RNG seed.
pub const SEED_ENV: &str = "LABYRINTH_SEED";
/// Environment variable overriding the Kruskal attempt cap.
pub const MAX_ATTEMPTS_ENV: &str = "LABYRINTH_MAX_ATTEMPTS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    /// Largest width or height the prompts accept
    pub max_dimension: usize,
    /// How many times Kruskal may regenerate before giving up
    pub max_generation_attempts: usize,
    /// Fixed seed for reproducible mazes, random when `None`
    pub seed: Option<u64>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            max_dimension: 255,
            max_generation_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
        }
    }
}

impl App {
    /// Available maze generators
    const GENERATORS: [Generator; 2] = [Generator::Dfs, Generator::Kruskal];
    /// Available maze solvers
    const SOLVERS: [Solver; 2] = [Solver::Bfs, Solver::AStar];

    /// Default settings overlaid with the `LABYRINTH_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Default settings overlaid with whatever `lookup` returns. Unparsable values are ignored.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut app = App::default();
        if let Some(raw) = lookup(SEED_ENV) {
            match raw.trim().parse() {
                Ok(seed) => app.seed = Some(seed),
                Err(_) => tracing::warn!("[app] Ignoring invalid {}={:?}", SEED_ENV, raw),
            }
        }
        if let Some(raw) = lookup(MAX_ATTEMPTS_ENV) {
            match raw.trim().parse() {
                Ok(attempts) if attempts > 0 => app.max_generation_attempts = attempts,
                _ => tracing::warn!("[app] Ignoring invalid {}={:?}", MAX_ATTEMPTS_ENV, raw),
            }
        }
        app
    }

    /// Interactive session: ask for the settings, generate, solve, and draw the result.
    /// Closing the input at any prompt ends the session quietly.
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> std::io::Result<()> {
        tracing::info!("[app] Session started with {:?}", self);
        let mut rng = get_rng(self.seed);

        let Some(width) = input::ask_dimension(input, output, "Width", self.max_dimension)? else {
            return App::say_goodbye(output);
        };
        let Some(height) = input::ask_dimension(input, output, "Height", self.max_dimension)?
        else {
            return App::say_goodbye(output);
        };

        let Some(generator) = input::select_from_menu(
            input,
            output,
            "Select maze generation algorithm:",
            &App::GENERATORS,
        )?
        else {
            return App::say_goodbye(output);
        };

        let Some((entry, exit)) = input::ask_endpoints(input, output, width, height, &mut rng)?
        else {
            return App::say_goodbye(output);
        };
        writeln!(output, "Entry {entry}, exit {exit}")?;

        let mut maze = Maze::new(width, height);
        if let Err(err) = generate_maze(
            &mut maze,
            generator,
            entry,
            exit,
            self.max_generation_attempts,
            &mut rng,
        ) {
            tracing::warn!("[app] Generation failed: {}", err);
            writeln!(
                output,
                "{}",
                format!("Could not generate the maze: {err}").with(Color::Red)
            )?;
            return Ok(());
        }

        let Some(solver) = input::select_from_menu(
            input,
            output,
            "Select maze solving algorithm:",
            &App::SOLVERS,
        )?
        else {
            return App::say_goodbye(output);
        };
        let path = solve_maze(&maze, solver, entry, exit);

        App::print_heading(output, "Generated maze:")?;
        renderer::render_maze(output, &maze, None)?;

        match path {
            Some(path) => {
                App::print_heading(output, "Maze with path:")?;
                renderer::render_maze(output, &maze, Some(&path))?;
                writeln!(output, "Path length: {} steps", path.len() - 1)?;
            }
            None => {
                writeln!(
                    output,
                    "{}",
                    "No path found.".with(Color::Yellow).attribute(Attribute::Bold)
                )?;
            }
        }
        tracing::info!("[app] Session finished");
        Ok(())
    }

    fn print_heading<W: Write>(output: &mut W, heading: &str) -> std::io::Result<()> {
        writeln!(
            output,
            "\n{}",
            heading.with(Color::Green).attribute(Attribute::Bold)
        )
    }

    fn say_goodbye<W: Write>(output: &mut W) -> std::io::Result<()> {
        tracing::info!("[app] Input closed, exiting");
        writeln!(output, "\nInput closed, exiting.")
    }

    /// Profiling mode: generate and solve repeatedly without rendering.
    /// Entry and exit sit on the left and right borders. Returns the total time spent.
    pub fn profile(
        &self,
        width: usize,
        height: usize,
        generator: Generator,
        solver: Solver,
        iterations: Option<usize>,
    ) -> Result<Duration, GenerationError> {
        let mut rng = get_rng(self.seed);
        let entry = Point::new(0, 1);
        let exit = Point::new(width.saturating_sub(1), height.saturating_sub(2));
        let iterations = iterations.unwrap_or(1);

        let mut total = Duration::ZERO;
        for i in 0..iterations {
            let started = Instant::now();
            let mut maze = Maze::new(width, height);
            generate_maze(
                &mut maze,
                generator,
                entry,
                exit,
                self.max_generation_attempts,
                &mut rng,
            )?;
            let generated = started.elapsed();
            let path = solve_maze(&maze, solver, entry, exit);
            let elapsed = started.elapsed();
            tracing::info!(
                "[profile] Iteration {}: generate {:?}, solve {:?}, path {:?}",
                i,
                generated,
                elapsed - generated,
                path.map(|p| p.len())
            );
            total += elapsed;
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run_session(app: &App, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes());
        let mut output = Vec::new();
        app.run(&mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_from_vars() {
        let app = App::from_vars(|key| match key {
            SEED_ENV => Some("42".to_owned()),
            MAX_ATTEMPTS_ENV => Some("0".to_owned()),
            _ => None,
        });
        assert_eq!(app.seed, Some(42));
        assert_eq!(app.max_generation_attempts, DEFAULT_MAX_ATTEMPTS);

        let app = App::from_vars(|_| None);
        assert_eq!(app, App::default());
    }

    #[test]
    fn test_full_session_with_manual_points() {
        let app = App {
            seed: Some(3),
            ..App::default()
        };
        // 11x11, DFS, manual entry (0, 1) and exit (10, 9), A*
        let out = run_session(&app, "11\n11\n1\n1\n0\n1\n10\n9\n2\n");
        assert!(out.contains("Entry (0, 1), exit (10, 9)"));
        assert!(out.contains("Generated maze:"));
        assert!(out.contains("Maze with path:"));
        assert!(out.contains("Path length:"));
    }

    #[test]
    fn test_full_session_with_random_points() {
        let app = App {
            seed: Some(8),
            ..App::default()
        };
        // 9x7, Kruskal, random points, BFS
        let out = run_session(&app, "9\n7\n2\n2\n1\n");
        assert!(out.contains("Generated maze:"));
        assert!(out.contains("Maze with path:"));
    }

    #[test]
    fn test_dfs_session_with_random_points() {
        for seed in 0..10 {
            let app = App {
                seed: Some(seed),
                ..App::default()
            };
            // 9x7, DFS, random points, BFS
            let out = run_session(&app, "9\n7\n1\n2\n1\n");
            assert!(out.contains("Maze with path:"), "seed {seed}");
            assert!(!out.contains("No path found."), "seed {seed}");
        }
    }

    #[test]
    fn test_closed_input_ends_session() {
        let out = run_session(&App::default(), "11\n");
        assert!(out.contains("Input closed, exiting."));
    }

    #[test]
    fn test_profile_runs_iterations() {
        let app = App {
            seed: Some(0),
            ..App::default()
        };
        let total = app
            .profile(31, 31, Generator::Kruskal, Solver::AStar, Some(3))
            .unwrap();
        assert!(total > Duration::ZERO);
    }
}
