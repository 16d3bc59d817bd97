use std::{
    fmt,
    io::{BufRead, Write},
};

use crossterm::style::{Color, Stylize};
use rand::Rng;

use crate::{generators::MIN_DIMENSION, maze::Point};

/// How the entry and exit points are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointMode {
    Manual,
    Random,
}

impl fmt::Display for EndpointMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointMode::Manual => write!(f, "Enter manually"),
            EndpointMode::Random => write!(f, "Pick at random"),
        }
    }
}

/// Reads one line, trimmed. `None` means the input was closed.
fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

fn print_error<W: Write>(output: &mut W, message: &str) -> std::io::Result<()> {
    writeln!(output, "{}", message.with(Color::Red))
}

/// Prompts until the user enters a number accepted by `is_valid`.
/// Returns `Ok(None)` if the input is closed first.
pub fn ask_number<R, W>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    error_message: &str,
    is_valid: impl Fn(usize) -> bool,
) -> std::io::Result<Option<usize>>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.parse::<usize>() {
            Ok(value) if is_valid(value) => return Ok(Some(value)),
            _ => print_error(output, error_message)?,
        }
    }
}

/// Asks for an odd maze dimension between 3 and `max`.
pub fn ask_dimension<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    name: &str,
    max: usize,
) -> std::io::Result<Option<usize>> {
    ask_number(
        input,
        output,
        &format!("{name} (odd, {MIN_DIMENSION} to {max}): "),
        &format!(
            "Please enter an odd whole number between {MIN_DIMENSION} and {max} for the {}.",
            name.to_lowercase()
        ),
        |value| (MIN_DIMENSION..=max).contains(&value) && value % 2 == 1,
    )
}

/// Shows a numbered menu and returns the chosen item.
pub fn select_from_menu<R, W, T>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    items: &[T],
) -> std::io::Result<Option<T>>
where
    R: BufRead,
    W: Write,
    T: fmt::Display + Copy,
{
    writeln!(output, "{}", prompt.with(Color::Yellow))?;
    for (i, item) in items.iter().enumerate() {
        writeln!(output, "  {}. {}", i + 1, item)?;
    }
    let choice = ask_number(
        input,
        output,
        "> ",
        &format!("Please choose a number from 1 to {}.", items.len()),
        |value| (1..=items.len()).contains(&value),
    )?;
    Ok(choice.map(|value| items[value - 1]))
}

/// Asks for a point on the border of a `width`x`height` maze, corners excluded.
pub fn ask_boundary_point<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    name: &str,
    width: usize,
    height: usize,
) -> std::io::Result<Option<Point>> {
    loop {
        let Some(x) = ask_number(
            input,
            output,
            &format!("{name} x (0 to {}): ", width - 1),
            &format!("Please enter an x coordinate from 0 to {}.", width - 1),
            |value| value < width,
        )?
        else {
            return Ok(None);
        };
        let Some(y) = ask_number(
            input,
            output,
            &format!("{name} y (0 to {}): ", height - 1),
            &format!("Please enter a y coordinate from 0 to {}.", height - 1),
            |value| value < height,
        )?
        else {
            return Ok(None);
        };

        let point = Point::new(x, y);
        if point.is_on_border(width, height) && !point.is_corner_of(width, height) {
            return Ok(Some(point));
        }
        print_error(
            output,
            "The point must lie on the border of the maze, but not in a corner.",
        )?;
    }
}

/// A uniformly random border point, corners excluded.
///
/// `width` and `height` must both be at least 3, smaller mazes have no such point.
pub fn random_boundary_point<G: Rng + ?Sized>(width: usize, height: usize, rng: &mut G) -> Point {
    debug_assert!(
        width >= MIN_DIMENSION && height >= MIN_DIMENSION,
        "a {width}x{height} maze has no border point outside the corners"
    );
    match rng.random_range(0..4) {
        0 => Point::new(rng.random_range(1..width - 1), 0),
        1 => Point::new(rng.random_range(1..width - 1), height - 1),
        2 => Point::new(0, rng.random_range(1..height - 1)),
        _ => Point::new(width - 1, rng.random_range(1..height - 1)),
    }
}

/// Two distinct random border points.
pub fn random_endpoints<G: Rng + ?Sized>(
    width: usize,
    height: usize,
    rng: &mut G,
) -> (Point, Point) {
    loop {
        let entry = random_boundary_point(width, height, rng);
        let exit = random_boundary_point(width, height, rng);
        if entry != exit {
            return (entry, exit);
        }
    }
}

/// Asks how to choose the endpoints, then collects or draws them.
pub fn ask_endpoints<R, W, G>(
    input: &mut R,
    output: &mut W,
    width: usize,
    height: usize,
    rng: &mut G,
) -> std::io::Result<Option<(Point, Point)>>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let Some(mode) = select_from_menu(
        input,
        output,
        "How should the entry and exit points be chosen?",
        &[EndpointMode::Manual, EndpointMode::Random],
    )?
    else {
        return Ok(None);
    };

    match mode {
        EndpointMode::Random => Ok(Some(random_endpoints(width, height, rng))),
        EndpointMode::Manual => {
            let Some(entry) = ask_boundary_point(input, output, "Entry", width, height)? else {
                return Ok(None);
            };
            loop {
                let Some(exit) = ask_boundary_point(input, output, "Exit", width, height)? else {
                    return Ok(None);
                };
                if exit != entry {
                    return Ok(Some((entry, exit)));
                }
                print_error(output, "The exit must differ from the entry.")?;
            }
        }
    }
}
