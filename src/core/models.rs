use std::error::Error;
use std::fmt;

/// One cell of the playfield. The closed symbol set of the level files:
/// `*` wall, `.` floor, `O` target, `X` box on target, `#` box, `P` player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Wall,
    Floor,
    Target,
    BoxOnFloor,
    BoxOnTarget,
    Player,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A level definition the grid model refuses to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedLevelError {
    NoPlayer,
    MultiplePlayers { first: Vec2, second: Vec2 },
    RaggedRow { row: usize, len: usize, expected: usize },
    UnknownSymbol { symbol: char, pos: Vec2 },
}

impl fmt::Display for MalformedLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedLevelError::NoPlayer => write!(f, "level has no player cell"),
            MalformedLevelError::MultiplePlayers { first, second } => write!(
                f,
                "level has more than one player cell: ({}, {}) and ({}, {})",
                first.i, first.j, second.i, second.j
            ),
            MalformedLevelError::RaggedRow { row, len, expected } => write!(
                f,
                "row {} is {} cells wide, expected {}",
                row, len, expected
            ),
            MalformedLevelError::UnknownSymbol { symbol, pos } => write!(
                f,
                "unknown symbol '{}' at ({}, {})",
                symbol, pos.i, pos.j
            ),
        }
    }
}

impl Error for MalformedLevelError {}
