//! Generate perfect mazes with randomized Prim's algorithm
//!
//! A perfect maze is a spanning tree over a rectangular grid of cells:
//! every cell is reachable and there is exactly one path between any two
//! cells. Mazes are rendered as fixed-width text diagrams.
//!
//! # Examples
//! ```
//! use prim_maze::{render, MazeGenerator, Prim};
//!
//! let maze = Prim::default().generate(5, 5, 0).unwrap();
//! let text = render(&maze);
//!
//! assert_eq!(text.lines().count(), 6);
//! assert!(text.lines().skip(1).all(|line| line.len() == 11));
//! ```
//!
//! Too small mazes are rejected:
//! ```
//! use prim_maze::{generate, GenerateError};
//!
//! assert_eq!(
//!     generate(1, 5, 0),
//!     Err(GenerateError::InvalidDimensions { width: 1, height: 5 })
//! );
//! ```

pub mod cell;
pub mod error;
mod frontier;
pub mod grid;
pub mod logging;
pub mod maze_generator;
pub mod prim;
pub mod render;

pub use cell::{Cell, Direction};
pub use error::GenerateError;
pub use grid::{Grid, Point};
pub use maze_generator::MazeGenerator;
pub use prim::{Prim, Sampling};
pub use render::render;

/// Generate a maze with uniformly sampled [`Prim`].
///
/// ## Arguments
/// - `width`: Number of cells per row, at least 2.
/// - `height`: Number of rows, at least 2.
/// - `seed`: Random seed. Equal seeds give equal mazes.
pub fn generate(width: usize, height: usize, seed: i64) -> Result<Grid<Cell>, GenerateError> {
    Prim::default().generate(width, height, seed)
}
