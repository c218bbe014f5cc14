use std::fmt;

/// State of one maze square.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Wall,
    #[default]
    Free,
}

impl Cell {
    pub const WALL_CHAR: char = '#';
    pub const FREE_CHAR: char = '.';

    pub fn is_free(self) -> bool {
        self == Cell::Free
    }

    /// Parse a single layout character.
    /// `S` and `G` mark start and goal squares in preset layouts, both of which are free.
    pub fn from_char(ch: char) -> Option<Cell> {
        match ch {
            Cell::WALL_CHAR => Some(Cell::Wall),
            Cell::FREE_CHAR | 'S' | 'G' => Some(Cell::Free),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Cell::Wall => Cell::WALL_CHAR,
            Cell::Free => Cell::FREE_CHAR,
        };
        write!(f, "{}", ch)
    }
}
