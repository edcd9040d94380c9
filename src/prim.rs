//! Randomized Prim's algorithm
//!
//! The maze grows from a single random cell. Every step takes a random cell
//! from the frontier (unvisited cells next to the maze), connects it to one
//! random neighbor that is already in the maze, and adds its own unvisited
//! neighbors to the frontier. Generation stops once the frontier is empty,
//! at which point every cell has been connected exactly once.
//!
//! See <http://weblog.jamisbuck.org/2011/1/10/maze-generation-prim-s-algorithm.html>

use clap::ValueEnum;
use log::{debug, trace};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::cell::Cell;
use crate::error::GenerateError;
use crate::frontier::Growth;
use crate::grid::{Grid, Point};
use crate::maze_generator::MazeGenerator;

/// How a random entry is drawn from the frontier and from the neighbor list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Sampling {
    /// Every entry is equally likely
    #[default]
    Uniform,
    /// Historical behavior: while more than one entry remains, the last
    /// stored entry is never picked. Frontier removal keeps insertion order.
    SkipLast,
}

impl Sampling {
    /// Index of the entry to take from a list of `len` entries.
    ///
    /// A single entry is taken without drawing from `rng`.
    fn pick<R: Rng>(self, len: usize, rng: &mut R) -> usize {
        match (self, len) {
            (_, 0 | 1) => 0,
            (Sampling::Uniform, len) => rng.gen_range(0..len),
            (Sampling::SkipLast, len) => rng.gen_range(0..len - 1),
        }
    }

    fn keeps_order(self) -> bool {
        matches!(self, Sampling::SkipLast)
    }
}

/// Perfect maze generator based on randomized Prim's algorithm
#[derive(Debug, Clone, Copy, Default)]
pub struct Prim {
    sampling: Sampling,
}

impl Prim {
    pub fn new(sampling: Sampling) -> Self {
        Prim { sampling }
    }

    pub fn sampling(&self) -> Sampling {
        self.sampling
    }

    /// Grow the maze until the frontier is exhausted.
    ///
    /// The start cell never lies on the last row or column.
    fn grow<R: Rng>(&self, growth: &mut Growth, rng: &mut R) {
        let (width, height) = (growth.cells().width(), growth.cells().height());
        let start = Point::new(rng.gen_range(0..width - 1), rng.gen_range(0..height - 1));
        debug!("growing {width}x{height} maze from {start:?}");
        growth.mark_in_maze(start);

        while !growth.frontier().is_empty() {
            let index = self.sampling.pick(growth.frontier().len(), rng);
            let p = growth.take_frontier(index, self.sampling.keeps_order());

            // Every frontier cell was queued by a neighbor joining the maze
            let neighbors = growth.in_maze_neighbors(p);
            assert!(
                !neighbors.is_empty(),
                "frontier cell {p:?} has no neighbor in the maze"
            );
            let q = neighbors[self.sampling.pick(neighbors.len(), rng)];

            trace!("connect {p:?} to {q:?}");
            growth.connect(p, q);
            growth.mark_in_maze(p);
        }
    }
}

impl MazeGenerator for Prim {
    fn generate(&self, width: usize, height: usize, seed: i64) -> Result<Grid<Cell>, GenerateError> {
        let mut growth = Growth::new(width, height)?;
        let mut rng = StdRng::seed_from_u64(seed as u64);

        self.grow(&mut growth, &mut rng);
        debug!("{width}x{height} maze complete (seed {seed}, {:?} sampling)", self.sampling);
        Ok(growth.finish())
    }
}
