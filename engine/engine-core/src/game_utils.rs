//! Shared utilities for grid game implementations
//!
//! Coordinates and moves common to every grid game in the workspace, so
//! games and adversary policies agree on geometry.

use std::fmt;

/// Cell coordinate. `x` grows to the east, `y` grows to the south.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance between two cells.
    ///
    /// # Example
    /// ```
    /// use engine_core::Position;
    ///
    /// assert_eq!(Position::new(1, 1).manhattan(Position::new(4, 3)), 5);
    /// ```
    #[inline]
    pub fn manhattan(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Cell reached by moving one step in `direction`
    #[inline]
    pub fn step(self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One move on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Stop,
}

impl Direction {
    /// Moving directions in enumeration order. `Stop` is not included.
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::Stop => (0, 0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::Stop => "stop",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal_steps_move_one_cell() {
        let origin = Position::new(3, 3);
        for dir in Direction::CARDINAL {
            assert_eq!(origin.step(dir).manhattan(origin), 1);
        }
        assert_eq!(origin.step(Direction::Stop), origin);
    }

    #[test]
    fn test_north_decreases_y() {
        assert_eq!(Position::new(2, 2).step(Direction::North), Position::new(2, 1));
        assert_eq!(Position::new(2, 2).step(Direction::East), Position::new(3, 2));
    }

    #[test]
    fn test_manhattan_is_symmetric() {
        let a = Position::new(-2, 5);
        let b = Position::new(4, 1);
        assert_eq!(a.manhattan(b), 10);
        assert_eq!(b.manhattan(a), 10);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn test_direction_display() {
        let names: Vec<String> = Direction::CARDINAL.iter().map(|d| d.to_string()).collect();
        assert_eq!(names, vec!["north", "south", "east", "west"]);
        assert_eq!(Direction::Stop.to_string(), "stop");
    }
}
