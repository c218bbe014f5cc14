use crate::maze::{self, Coord, Maze};

/// A named maze layout with fixed endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    /// Rows of `#` (wall) and `.` (free), one per line
    pub layout: &'static str,
    pub start: Coord,
    pub goal: Coord,
}

impl Preset {
    pub fn maze(&self) -> maze::Result<Maze> {
        self.layout.parse()
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

const OPEN_FIELD: Preset = Preset {
    name: "Open Field (5x5)",
    layout: "
        .....
        .....
        .....
        .....
        .....
    ",
    start: (0, 0),
    goal: (4, 4),
};

const SIMPLE: Preset = Preset {
    name: "Simple Maze (5x5)",
    layout: "
        ..#..
        .##.#
        .....
        #.##.
        ...#.
    ",
    start: (0, 0),
    goal: (4, 4),
};

const MEDIUM: Preset = Preset {
    name: "Medium Maze (10x10)",
    layout: "
        ..#.......
        .##.####..
        ....#..#.#
        #.#.#.##..
        ..#...#..#
        .####.#.#.
        ......#.#.
        .#.####.#.
        .#......#.
        .####.#...
    ",
    start: (0, 0),
    goal: (9, 9),
};

const DEAD_ENDS: Preset = Preset {
    name: "Dead Ends (8x8)",
    layout: "
        ...#....
        .#.#.##.
        .#...#..
        .###.#.#
        ...#.#..
        ##.#.##.
        ...#....
        .#####.#
    ",
    start: (0, 0),
    goal: (7, 6),
};

const WALLED_OFF: Preset = Preset {
    name: "Walled Off (no path)",
    layout: "
        ...#...
        ...#...
        ...#...
        ...#...
    ",
    start: (0, 0),
    goal: (3, 6),
};

/// All built-in presets, in menu order.
pub fn catalog() -> Vec<Preset> {
    vec![OPEN_FIELD, SIMPLE, MEDIUM, DEAD_ENDS, WALLED_OFF]
}
