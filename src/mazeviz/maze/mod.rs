pub mod catalog;
pub mod errors;
mod grid;

pub use self::catalog::{MazeId, MazeSource};
pub use self::grid::{Dir, Marker, Maze, Point};
