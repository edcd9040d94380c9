//! Frontier bookkeeping for a growing maze
//!
//! [`Growth`] owns the grid being carved together with the frontier list,
//! so the `FRONTIER` flag of a cell and its membership in the list are
//! always changed in the same call.

use crate::cell::{Cell, Direction};
use crate::error::GenerateError;
use crate::grid::{Grid, Point};

/// Unordered set of cells waiting to be connected to the maze
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    points: Vec<Point>,
}

impl Frontier {
    pub(crate) fn len(&self) -> usize {
        self.points.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    /// Remove the point stored at `index`.
    ///
    /// With `keep_order` the remaining points keep their relative order,
    /// otherwise the last point is moved into the hole.
    fn remove(&mut self, index: usize, keep_order: bool) -> Point {
        if keep_order {
            self.points.remove(index)
        } else {
            self.points.swap_remove(index)
        }
    }
}

/// Grid and frontier of one generation run
#[derive(Debug)]
pub(crate) struct Growth {
    cells: Grid<Cell>,
    frontier: Frontier,
}

impl Growth {
    pub(crate) fn new(width: usize, height: usize) -> Result<Self, GenerateError> {
        Ok(Growth {
            cells: Grid::new(width, height)?,
            frontier: Frontier::default(),
        })
    }

    pub(crate) fn cells(&self) -> &Grid<Cell> {
        &self.cells
    }

    pub(crate) fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Queue `p` for connection, unless it is outside the grid or already
    /// visited.
    pub(crate) fn add_frontier(&mut self, p: Point) {
        if let Some(cell) = self.cells.get_mut(p) {
            if cell.is_unvisited() {
                cell.insert(Cell::FRONTIER);
                self.frontier.push(p);
            }
        }
    }

    /// Commit `p` to the maze and queue its unvisited neighbors.
    pub(crate) fn mark_in_maze(&mut self, p: Point) {
        let cell = &mut self.cells[p];
        cell.remove(Cell::FRONTIER);
        cell.insert(Cell::IN_MAZE);

        for dir in Direction::SCAN_ORDER {
            if let Some(q) = p.step(dir) {
                self.add_frontier(q);
            }
        }
    }

    /// Take the frontier point at `index` out of the set.
    ///
    /// The cell keeps its `FRONTIER` flag until [`Growth::mark_in_maze`] is
    /// called for it.
    pub(crate) fn take_frontier(&mut self, index: usize, keep_order: bool) -> Point {
        self.frontier.remove(index, keep_order)
    }

    /// Neighbors of `p` that are already part of the maze
    pub(crate) fn in_maze_neighbors(&self, p: Point) -> Vec<Point> {
        self.cells
            .adjacent(p)
            .filter(|&q| self.cells[q].is_in_maze())
            .collect()
    }

    /// Open the wall between adjacent cells `from` and `to`
    pub(crate) fn connect(&mut self, from: Point, to: Point) {
        let dir = Direction::between(from, to);
        self.cells[from].insert(dir.wall());
        self.cells[to].insert(dir.opposite().wall());
    }

    /// Finished grid, with growth state stripped from every cell
    pub(crate) fn finish(self) -> Grid<Cell> {
        debug_assert!(self.frontier.is_empty());
        self.cells.map(Cell::walls)
    }
}
