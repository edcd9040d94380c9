//! Fixed-size rectangular storage for maze cells

use std::ops::{Index, IndexMut};

use crate::cell::Direction;
use crate::error::GenerateError;

/// Location in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Point { x, y }
    }

    /// Point one step towards `direction`, or `None` when that would leave
    /// the non-negative quadrant.
    pub fn step(self, direction: Direction) -> Option<Point> {
        let Point { x, y } = self;
        match direction {
            Direction::North => Some(Point::new(x, y.checked_sub(1)?)),
            Direction::South => Some(Point::new(x, y + 1)),
            Direction::East => Some(Point::new(x + 1, y)),
            Direction::West => Some(Point::new(x.checked_sub(1)?, y)),
        }
    }
}

/// Row-major `width` × `height` grid.
///
/// Both sides are at least [`Grid::MIN_SIDE`] long; smaller grids are
/// rejected on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

impl<T: Clone + Default> Grid<T> {
    /// Allocate a grid of default cells.
    ///
    /// Returns [`GenerateError::InvalidDimensions`] if either side is
    /// shorter than [`Grid::MIN_SIDE`] or the cell count overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, GenerateError> {
        let invalid = GenerateError::InvalidDimensions { width, height };
        if width < Self::MIN_SIDE || height < Self::MIN_SIDE {
            return Err(invalid);
        }
        let len = width.checked_mul(height).ok_or(invalid)?;
        Ok(Grid {
            cells: vec![T::default(); len],
            width,
            height,
        })
    }
}

impl<T> Grid<T> {
    pub const MIN_SIDE: usize = 2;

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x < self.width && p.y < self.height
    }

    pub fn get(&self, p: Point) -> Option<&T> {
        self.contains(p).then(|| &self.cells[self.offset(p)])
    }

    pub fn get_mut(&mut self, p: Point) -> Option<&mut T> {
        if self.contains(p) {
            let offset = self.offset(p);
            Some(&mut self.cells[offset])
        } else {
            None
        }
    }

    /// In-bounds point next to `p` in `direction`
    pub fn neighbor(&self, p: Point, direction: Direction) -> Option<Point> {
        p.step(direction).filter(|&q| self.contains(q))
    }

    /// In-bounds axis-adjacent points of `p`: west, east, north, south.
    pub fn adjacent(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        Direction::SCAN_ORDER
            .into_iter()
            .filter_map(move |dir| self.neighbor(p, dir))
    }

    /// Rows from north to south
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.width)
    }

    /// All points in row-major order
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Point::new(x, y)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Grid<U> {
        Grid {
            cells: self.cells.into_iter().map(f).collect(),
            width: self.width,
            height: self.height,
        }
    }

    fn offset(&self, p: Point) -> usize {
        p.y * self.width + p.x
    }
}

impl<T> Index<Point> for Grid<T> {
    type Output = T;

    fn index(&self, p: Point) -> &Self::Output {
        self.get(p)
            .unwrap_or_else(|| panic!("{p:?} outside {}x{} grid", self.width, self.height))
    }
}

impl<T> IndexMut<Point> for Grid<T> {
    fn index_mut(&mut self, p: Point) -> &mut Self::Output {
        let (width, height) = (self.width, self.height);
        self.get_mut(p)
            .unwrap_or_else(|| panic!("{p:?} outside {width}x{height} grid"))
    }
}
