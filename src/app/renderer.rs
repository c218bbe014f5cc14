use std::{fmt, io::Write};

use crossterm::{
    QueueableCommand,
    style::{self, Color, Stylize},
};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use crate::maze::{Cell, Coord, Grid, Maze};

/// What to draw at one maze position once the endpoints and route are overlaid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Free,
    Route,
    Start,
    Goal,
}

impl Tile {
    /// The width of each tile when rendered, in character widths.
    pub const TILE_WIDTH: u16 = 2;

    /// Single-character form used by [`render_plain`].
    pub fn symbol(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Free => '.',
            Tile::Route => '*',
            Tile::Start => 'S',
            Tile::Goal => 'G',
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Tile::Wall => "🟦".with(Color::Blue),
            Tile::Free => "⬜".with(Color::White),
            Tile::Route => "🟨".with(Color::Yellow),
            Tile::Start => "🟩".with(Color::Green),
            Tile::Goal => "🟥".with(Color::Red),
        };

        #[cfg(debug_assertions)]
        {
            assert_eq!(
                styled_symbol.content().width(),
                Tile::TILE_WIDTH as usize,
                "Each tile must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// Lay the route, then the endpoints, over the maze cells.
/// Endpoints win over the route, and out-of-bounds coordinates are ignored.
pub fn overlay(maze: &Maze, start: Coord, goal: Coord, path: &[Coord]) -> Grid<Tile> {
    let mut tiles = Grid::new(maze.rows(), maze.cols(), Tile::Free);
    for (row, cells) in maze.iter_rows().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            if *cell == Cell::Wall {
                tiles[(row, col)] = Tile::Wall;
            }
        }
    }
    let marks = path
        .iter()
        .map(|&c| (c, Tile::Route))
        .chain([(start, Tile::Start), (goal, Tile::Goal)]);
    for (coord, tile) in marks {
        if maze.is_in_bounds(coord) {
            tiles[coord] = tile;
        }
    }
    tiles
}

/// Queue the maze with its overlay onto `out`, one terminal line per row.
/// Lines end in `\r\n` since the terminal is in raw mode.
pub fn draw_maze<W: Write>(
    out: &mut W,
    maze: &Maze,
    start: Coord,
    goal: Coord,
    path: &[Coord],
) -> std::io::Result<()> {
    let tiles = overlay(maze, start, goal, path);
    for row in tiles.data().chunks(tiles.cols()) {
        for tile in row {
            out.queue(style::Print(tile))?;
        }
        out.queue(style::Print("\r\n"))?;
    }
    out.flush()
}

/// Plain ASCII rendering, for logs.
pub fn render_plain(maze: &Maze, start: Coord, goal: Coord, path: &[Coord]) -> String {
    let tiles = overlay(maze, start, goal, path);
    let mut text = String::with_capacity(tiles.rows() * (tiles.cols() + 1));
    for row in tiles.data().chunks(tiles.cols()) {
        text.extend(row.iter().map(|tile| tile.symbol()));
        text.push('\n');
    }
    text
}

/// Whether a maze can be drawn in a terminal of the given size.
pub fn fits_terminal(maze: &Maze, term_width: u16, term_height: u16) -> bool {
    let width = maze.cols().saturating_mul(Tile::TILE_WIDTH as usize);
    width <= term_width as usize && maze.rows() <= term_height as usize
}

/// `(r, c) → (r, c) → …`
pub fn format_route(path: &[Coord]) -> String {
    path.iter()
        .map(|(row, col)| format!("({}, {})", row, col))
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Cut `text` to at most `max_width` terminal columns, ending in `…` when shortened.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let (truncated, _) = text.unicode_truncate(max_width - 1);
    format!("{}…", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maze() -> Maze {
        "
        ..#
        ...
        "
        .parse()
        .unwrap()
    }

    #[test]
    fn test_render_plain() {
        let m = maze();
        let path = [(0, 0), (1, 0), (1, 1), (1, 2)];
        assert_eq!(render_plain(&m, (0, 0), (1, 2), &path), "S.#\n**G\n");
        assert_eq!(render_plain(&m, (0, 0), (1, 2), &[]), "S.#\n..G\n");
    }

    #[test]
    fn test_overlay_ignores_out_of_bounds() {
        let m = maze();
        let tiles = overlay(&m, (9, 9), (1, 2), &[(7, 7)]);
        assert_eq!(tiles[(0, 0)], Tile::Free);
        assert_eq!(tiles[(0, 2)], Tile::Wall);
        assert_eq!(tiles[(1, 2)], Tile::Goal);
    }

    #[test]
    fn test_draw_maze_writes_every_row() {
        let m = maze();
        let mut out = Vec::new();
        draw_maze(&mut out, &m, (0, 0), (1, 2), &[]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("\r\n").count(), 2);
        assert!(text.contains("🟩"));
        assert!(text.contains("🟥"));
        assert!(text.contains("🟦"));
    }

    #[test]
    fn test_fits_terminal() {
        let m = maze();
        assert!(fits_terminal(&m, 6, 2));
        assert!(!fits_terminal(&m, 5, 2));
        assert!(!fits_terminal(&m, 6, 1));
    }

    #[test]
    fn test_format_and_truncate_route() {
        let route = format_route(&[(0, 0), (0, 1), (1, 1)]);
        assert_eq!(route, "(0, 0) → (0, 1) → (1, 1)");
        assert_eq!(truncate_to_width(&route, 100), route);
        assert_eq!(truncate_to_width(&route, 7), "(0, 0)…");
        assert_eq!(truncate_to_width(&route, 0), "");
        assert_eq!(format_route(&[]), "");
    }
}
