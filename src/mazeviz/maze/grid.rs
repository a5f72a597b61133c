use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::errors;

/// State of a single grid cell.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Wall,
    Open,
    Start,
    Goal,
    Visiting,
    DeadEnd,
    Solution,
}

/// Grid coordinate; `x` is the column, `y` is the row. Signed so that
/// neighbor probes may step outside the grid and be answered with `None`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(&self, dir: Dir) -> Point {
        let (dx, dy) = dir.delta();
        Point::new(self.x + dx, self.y + dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

impl Dir {
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Right, Dir::Down, Dir::Left];

    fn delta(&self) -> (i32, i32) {
        match self {
            Dir::Up => (0, -1),
            Dir::Right => (1, 0),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
        }
    }
}

/// Square grid of cell markers plus the player start position.
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    cells: Vec<Vec<Marker>>,
    player: Point,
    tile_size: f32,
}

impl Maze {
    /// Parses a maze from text: `size` lines of at least `size` characters.
    ///
    /// Legend: `'P'` start (exactly one required), `' '` open, `'F'` goal,
    /// anything else a wall. Validation is all-or-nothing; on error no maze
    /// is produced.
    pub fn parse(text: &str, size: usize, tile_size: f32) -> Result<Maze, errors::MazeLoad> {
        let mut cells = Vec::with_capacity(size);
        let mut player = None;

        let mut lines = text.lines();
        for row in 0..size {
            let line = lines
                .next()
                .ok_or(errors::MazeLoad::MissingLine(row, size))?;

            let chars = line.chars().collect::<Vec<_>>();
            if chars.len() < size {
                return Err(errors::MazeLoad::ShortLine(row, chars.len(), size));
            }

            let mut cell_row = Vec::with_capacity(size);
            for (col, &c) in chars.iter().take(size).enumerate() {
                let marker = match c {
                    'P' => {
                        if player.is_some() {
                            return Err(errors::MazeLoad::MultipleStarts);
                        }
                        player = Some(Point::new(col as i32, row as i32));
                        Marker::Start
                    }
                    ' ' => Marker::Open,
                    'F' => Marker::Goal,
                    _ => Marker::Wall,
                };
                cell_row.push(marker);
            }
            cells.push(cell_row);
        }

        let player = player.ok_or(errors::MazeLoad::NoStart)?;

        debug!("parsed maze; size: {size}, player: {player:?}");

        Ok(Maze {
            cells,
            player,
            tile_size,
        })
    }

    /// Reads a maze from a file, inferring the grid size from the first
    /// line and picking a tile size that keeps the board on screen.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Maze, errors::MazeLoad> {
        info!("loading maze from file: {:?}", path.as_ref());

        let text = fs::read_to_string(path)?;
        let size = text.lines().next().map(|l| l.chars().count()).unwrap_or(0);
        if size == 0 {
            return Err(errors::MazeLoad::Empty);
        }

        let tile_size = (520.0 / size as f32).min(24.0);
        Maze::parse(&text, size, tile_size)
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    pub fn player(&self) -> Point {
        self.player
    }

    /// Marker at `p`, or `None` when `p` lies outside the grid.
    pub fn marker(&self, p: Point) -> Option<Marker> {
        if p.x < 0 || p.y < 0 {
            return None;
        }

        self.cells
            .get(p.y as usize)
            .and_then(|row| row.get(p.x as usize))
            .copied()
    }

    /// Overwrites the marker at `p`. Out-of-bounds writes are ignored; the
    /// solver only writes to cells it has already probed.
    pub fn set(&mut self, p: Point, marker: Marker) {
        if p.x < 0 || p.y < 0 {
            return;
        }

        if let Some(cell) = self
            .cells
            .get_mut(p.y as usize)
            .and_then(|row| row.get_mut(p.x as usize))
        {
            *cell = marker;
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &Vec<Marker>> {
        self.cells.iter()
    }

    /// All cells with the given marker, in row-major order.
    pub fn cells_with(&self, marker: Marker) -> Vec<Point> {
        let mut res = vec![];
        for (y, row) in self.cells.iter().enumerate() {
            for (x, m) in row.iter().enumerate() {
                if *m == marker {
                    res.push(Point::new(x as i32, y as i32));
                }
            }
        }
        res
    }
}

#[cfg(test)]
mod grid_tests {
    use super::*;

    #[test]
    fn test_parse_legend() {
        let maze = Maze::parse("@@@\n@P \n@ F", 3, 10.0).unwrap();

        assert_eq!(maze.size(), 3);
        assert_eq!(maze.player(), Point::new(1, 1));
        assert_eq!(maze.marker(Point::new(1, 1)), Some(Marker::Start));
        assert_eq!(maze.marker(Point::new(2, 1)), Some(Marker::Open));
        assert_eq!(maze.marker(Point::new(2, 2)), Some(Marker::Goal));
        assert_eq!(maze.marker(Point::new(0, 0)), Some(Marker::Wall));
    }

    #[test]
    fn test_parse_unknown_chars_are_walls() {
        let maze = Maze::parse("#x%\n@P \n@ F", 3, 10.0).unwrap();

        assert_eq!(maze.marker(Point::new(0, 0)), Some(Marker::Wall));
        assert_eq!(maze.marker(Point::new(1, 0)), Some(Marker::Wall));
        assert_eq!(maze.marker(Point::new(2, 0)), Some(Marker::Wall));
    }

    #[test]
    fn test_parse_short_line() {
        let res = Maze::parse("@@@\n@P\n@ F", 3, 10.0);
        assert!(matches!(res, Err(errors::MazeLoad::ShortLine(1, 2, 3))));
    }

    #[test]
    fn test_parse_missing_line() {
        let res = Maze::parse("@@@\n@PF", 3, 10.0);
        assert!(matches!(res, Err(errors::MazeLoad::MissingLine(2, 3))));
    }

    #[test]
    fn test_parse_no_start() {
        let res = Maze::parse("@@@\n@  \n@ F", 3, 10.0);
        assert!(matches!(res, Err(errors::MazeLoad::NoStart)));
    }

    #[test]
    fn test_parse_multiple_starts() {
        let res = Maze::parse("@@@\n@PP\n@ F", 3, 10.0);
        assert!(matches!(res, Err(errors::MazeLoad::MultipleStarts)));
    }

    #[test]
    fn test_out_of_bounds_marker() {
        let maze = Maze::parse("@@@\n@P \n@ F", 3, 10.0).unwrap();

        assert_eq!(maze.marker(Point::new(-1, 0)), None);
        assert_eq!(maze.marker(Point::new(0, -1)), None);
        assert_eq!(maze.marker(Point::new(3, 0)), None);
        assert_eq!(maze.marker(Point::new(0, 3)), None);
    }

    #[test]
    fn test_set_and_restore() {
        let maze = Maze::parse("@@@\n@P \n@ F", 3, 10.0).unwrap();
        let snapshot = maze.clone();

        let mut mutated = maze.clone();
        mutated.set(Point::new(1, 1), Marker::Visiting);
        mutated.set(Point::new(2, 1), Marker::DeadEnd);
        assert_ne!(mutated, snapshot);

        mutated = snapshot.clone();
        assert_eq!(mutated, maze);
    }

    #[test]
    fn test_dir_deltas() {
        let p = Point::new(5, 5);
        assert_eq!(p.step(Dir::Up), Point::new(5, 4));
        assert_eq!(p.step(Dir::Right), Point::new(6, 5));
        assert_eq!(p.step(Dir::Down), Point::new(5, 6));
        assert_eq!(p.step(Dir::Left), Point::new(4, 5));
    }
}
