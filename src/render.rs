//! Text rendering of finished mazes
//!
//! The diagram uses two characters per cell. The first shows the south wall
//! (`_` closed, space open), the second the east wall (`|` closed). An open
//! east wall is drawn as `_` when both this cell and its east neighbor have
//! a closed south wall, so floors continue through horizontal corridors.
//!
//! ```text
//!  _________
//! |___   ___|
//! |___   ___|
//! | |_   ___|
//! |_   ___  |
//! |_______|_|
//! ```

use std::fmt;

use crate::cell::{Cell, Direction};
use crate::grid::Grid;

/// Render `grid` as an ASCII diagram.
///
/// The result has `height + 1` lines, each terminated by `\n`: the north
/// boundary of `2 * width` characters followed by one line of
/// `2 * width + 1` characters per row. Only wall-open flags are read.
pub fn render(grid: &Grid<Cell>) -> String {
    let width = grid.width();
    let mut buffer = String::with_capacity((2 * width + 2) * (grid.height() + 1));

    buffer.push(' ');
    buffer.push_str(&"_".repeat(2 * width - 1));
    buffer.push('\n');

    for row in grid.rows() {
        buffer.push('|');
        for (x, cell) in row.iter().enumerate() {
            let south_open = cell.is_open(Direction::South);
            buffer.push(if south_open { ' ' } else { '_' });

            if cell.is_open(Direction::East) {
                let floor_open = south_open
                    || row
                        .get(x + 1)
                        .is_some_and(|east| east.is_open(Direction::South));
                buffer.push(if floor_open { ' ' } else { '_' });
            } else {
                buffer.push('|');
            }
        }
        buffer.push('\n');
    }
    buffer
}

impl fmt::Display for Grid<Cell> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
