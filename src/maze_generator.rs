//! Maze generation contract

use crate::cell::Cell;
use crate::error::GenerateError;
use crate::grid::Grid;
use crate::render::render;

/// Strategy for building a perfect maze.
///
/// Implementations must be deterministic: the same `width`, `height` and
/// `seed` always produce the same grid. Returned grids carry wall-open flags
/// only.
pub trait MazeGenerator {
    /// Build a `width` × `height` maze from `seed`.
    ///
    /// Fails with [`GenerateError::InvalidDimensions`] when either side is
    /// shorter than 2 cells.
    fn generate(&self, width: usize, height: usize, seed: i64) -> Result<Grid<Cell>, GenerateError>;

    /// Build a maze and render it as text
    fn generate_text(&self, width: usize, height: usize, seed: i64) -> Result<String, GenerateError> {
        Ok(render(&self.generate(width, height, seed)?))
    }
}
