//! Hilbert curves in your terminal.
//!
//! Draws the path of a curve with box-drawing characters, one character per
//! cell. The top text row is `y = side - 1`, so the origin sits at the lower
//! left just like the coordinates. The start cell shows which way the path
//! leaves it and the end cell is an arrow in the direction of arrival.

use crate::grid::{GridOrder, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dir {
    Left,
    Right,
    Up,
    Down,
}

/// Direction of the single-cell step from `from` to `to`.
fn step(from: Point<u16>, to: Point<u16>) -> Option<Dir> {
    match (to.x.checked_sub(from.x), to.y.checked_sub(from.y)) {
        (Some(1), Some(0)) => Some(Dir::Right),
        (Some(0), Some(1)) => Some(Dir::Up),
        (None, Some(0)) if from.x - to.x == 1 => Some(Dir::Left),
        (Some(0), None) if from.y - to.y == 1 => Some(Dir::Down),
        _ => None,
    }
}

fn start_glyph(out: Dir) -> char {
    match out {
        Dir::Right => '├',
        Dir::Left => '┤',
        Dir::Up => '┴',
        Dir::Down => '┬',
    }
}

fn end_glyph(arrival: Dir) -> char {
    match arrival {
        Dir::Right => '>',
        Dir::Left => '<',
        Dir::Up => '^',
        Dir::Down => 'v',
    }
}

/// Glyph for a cell joined to its two curve neighbours in directions `a` and `b`.
fn path_glyph(a: Dir, b: Dir) -> char {
    use Dir::*;
    match (a, b) {
        (Left, Right) | (Right, Left) => '─',
        (Up, Down) | (Down, Up) => '│',
        (Up, Right) | (Right, Up) => '└',
        (Up, Left) | (Left, Up) => '┘',
        (Down, Right) | (Right, Down) => '┌',
        (Down, Left) | (Left, Down) => '┐',
        // a cell never has both neighbours on the same side
        _ => '?',
    }
}

/// Render the curve of `order` as text, one line per grid row.
///
/// A 1x1 grid renders as a single `*`.
///
/// ```
/// use hilbert_grid::{GridOrder, render};
///
/// let order = GridOrder::new(2u16)?;
/// assert_eq!(render::ascii(&order), "┌┐\n┴v\n");
/// # Ok::<(), hilbert_grid::Error>(())
/// ```
pub fn ascii(order: &GridOrder<u16>) -> String {
    let side = usize::from(order.side());
    let points: Vec<Point<u16>> = order.iter().collect();

    if points.len() < 2 {
        return "*\n".to_string();
    }

    let mut rows = vec![vec![' '; side]; side];
    let last = points.len() - 1;

    for (i, &point) in points.iter().enumerate() {
        let prev = i.checked_sub(1).and_then(|j| points.get(j)).copied();
        let next = points.get(i + 1).copied();

        let glyph = match (prev, next) {
            (None, Some(n)) => step(point, n).map(start_glyph),
            (Some(p), None) if i == last => step(p, point).map(end_glyph),
            (Some(p), Some(n)) => match (step(point, p), step(point, n)) {
                (Some(a), Some(b)) => Some(path_glyph(a, b)),
                _ => None,
            },
            _ => None,
        };

        let row = side - 1 - usize::from(point.y);
        if let Some(cell) = rows
            .get_mut(row)
            .and_then(|r| r.get_mut(usize::from(point.x)))
        {
            *cell = glyph.unwrap_or('?');
        }
    }

    let mut out = String::with_capacity((side + 1) * side * 3);
    for row in rows {
        out.extend(row);
        out.push('\n');
    }
    out
}
