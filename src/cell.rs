//! Cell bits and cardinal directions

use bitflags::bitflags;

use crate::grid::Point;

bitflags! {
    /// State of a single maze cell.
    ///
    /// The low nibble holds the wall-open flags: a set flag means the wall
    /// in that direction is passable. `IN_MAZE` and `FRONTIER` only exist
    /// while the maze is growing and are stripped from finished grids.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Cell: u8 {
        const NORTH = 0x01;
        const SOUTH = 0x02;
        const EAST = 0x04;
        const WEST = 0x08;

        const IN_MAZE = 0x10;
        const FRONTIER = 0x20;

        const WALLS = Self::NORTH.bits() | Self::SOUTH.bits() | Self::EAST.bits() | Self::WEST.bits();
        const GROWTH = Self::IN_MAZE.bits() | Self::FRONTIER.bits();
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::empty()
    }
}

impl Cell {
    /// Wall-open flags only, growth state removed
    pub fn walls(self) -> Cell {
        self & Cell::WALLS
    }

    /// Neither queued in the frontier nor part of the maze yet
    pub fn is_unvisited(self) -> bool {
        !self.intersects(Cell::GROWTH)
    }

    pub fn is_in_maze(self) -> bool {
        self.contains(Cell::IN_MAZE)
    }

    pub fn is_frontier(self) -> bool {
        self.contains(Cell::FRONTIER)
    }

    pub fn is_open(self, direction: Direction) -> bool {
        self.contains(direction.wall())
    }

    /// Number of open walls
    pub fn passages(self) -> usize {
        self.walls().bits().count_ones() as usize
    }
}

/// Cardinal direction of travel between two adjacent cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Order in which the neighbors of a cell are visited
    pub const SCAN_ORDER: [Direction; 4] = [
        Direction::West,
        Direction::East,
        Direction::North,
        Direction::South,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Wall-open flag for this direction
    pub fn wall(self) -> Cell {
        match self {
            Direction::North => Cell::NORTH,
            Direction::South => Cell::SOUTH,
            Direction::East => Cell::EAST,
            Direction::West => Cell::WEST,
        }
    }

    /// Direction of travel from `from` to `to`.
    ///
    /// The points must be axis-adjacent. The x axis is compared first, so
    /// any point that is neither east, west nor south of `from` resolves to
    /// north.
    pub fn between(from: Point, to: Point) -> Direction {
        debug_assert_eq!(
            from.x.abs_diff(to.x) + from.y.abs_diff(to.y),
            1,
            "{from:?} and {to:?} are not adjacent"
        );
        if to.x > from.x {
            Direction::East
        } else if to.x < from.x {
            Direction::West
        } else if to.y > from.y {
            Direction::South
        } else {
            Direction::North
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Direction};
    use crate::grid::Point;

    #[test]
    fn wall_bits_match_historical_encoding() {
        assert_eq!(Cell::NORTH.bits(), 1);
        assert_eq!(Cell::SOUTH.bits(), 2);
        assert_eq!(Cell::EAST.bits(), 4);
        assert_eq!(Cell::WEST.bits(), 8);
        assert!(!Cell::WALLS.intersects(Cell::GROWTH));
    }

    #[test]
    fn walls_drop_growth_state() {
        let cell = Cell::IN_MAZE | Cell::EAST | Cell::SOUTH;
        assert_eq!(cell.walls(), Cell::EAST | Cell::SOUTH);
        assert_eq!(cell.passages(), 2);
        assert!(cell.is_in_maze());
        assert!(!cell.is_unvisited());
        assert!(Cell::default().is_unvisited());
    }

    #[test]
    fn opposite_is_an_involution() {
        for dir in Direction::ALL {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn direction_between_neighbors() {
        let center = Point::new(1, 1);
        assert_eq!(Direction::between(center, Point::new(2, 1)), Direction::East);
        assert_eq!(Direction::between(center, Point::new(0, 1)), Direction::West);
        assert_eq!(Direction::between(center, Point::new(1, 2)), Direction::South);
        assert_eq!(Direction::between(center, Point::new(1, 0)), Direction::North);
    }
}
