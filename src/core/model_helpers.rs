use crate::core::{Cell, Direction, Vec2};

impl Cell {
    pub fn from_symbol(ch: char) -> Option<Cell> {
        match ch {
            '*' => Some(Cell::Wall),
            '.' => Some(Cell::Floor),
            'O' => Some(Cell::Target),
            '#' => Some(Cell::BoxOnFloor),
            'X' => Some(Cell::BoxOnTarget),
            'P' => Some(Cell::Player),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Cell::Wall => '*',
            Cell::Floor => '.',
            Cell::Target => 'O',
            Cell::BoxOnFloor => '#',
            Cell::BoxOnTarget => 'X',
            Cell::Player => 'P',
        }
    }

    /// Floor or an unfilled target: the player or a pushed box may enter.
    pub fn walkable(&self) -> bool {
        matches!(self, Cell::Floor | Cell::Target)
    }

    pub fn holds_box(&self) -> bool {
        matches!(self, Cell::BoxOnFloor | Cell::BoxOnTarget)
    }
}

impl Direction {
    pub fn delta(&self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { i: -1, j: 0 },
            Direction::Down => Vec2 { i: 1, j: 0 },
            Direction::Left => Vec2 { i: 0, j: -1 },
            Direction::Right => Vec2 { i: 0, j: 1 },
        }
    }
}
