use std::{collections::HashSet, fmt, io::Write};

use crossterm::style::{Color, Stylize};

use crate::maze::{Maze, Point};

/// What a single maze cell looks like on the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Wall,
    Passage,
    Route,
}

impl Glyph {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: usize = 2;
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Glyph::Wall => "██".with(Color::Red),
            Glyph::Passage => "  ".with(Color::Reset),
            Glyph::Route => "  ".on(Color::Green),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Glyph::CELL_WIDTH,
                "Each cell must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// Glyph for `point`, given the set of cells on the route.
pub fn glyph_at(maze: &Maze, point: Point, route: &HashSet<Point>) -> Glyph {
    if maze[point].wall {
        Glyph::Wall
    } else if route.contains(&point) {
        Glyph::Route
    } else {
        Glyph::Passage
    }
}

/// Draws the maze row by row, highlighting the cells of `path` if given.
pub fn render_maze<W: Write>(
    output: &mut W,
    maze: &Maze,
    path: Option<&[Point]>,
) -> std::io::Result<()> {
    let route: HashSet<Point> = path.into_iter().flatten().copied().collect();
    for y in 0..maze.height() {
        for x in 0..maze.width() {
            write!(output, "{}", glyph_at(maze, Point::new(x, y), &route))?;
        }
        writeln!(output)?;
    }
    output.flush()
}
