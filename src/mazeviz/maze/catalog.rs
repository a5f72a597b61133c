use std::path::PathBuf;

use lazy_static::lazy_static;
use tracing::info;

use super::{errors, Maze};

lazy_static! {
    static ref FIRST: Maze = Maze::parse(include_str!("../../../assets/maze_1.txt"), 23, 21.0)
        .expect("embedded maze 1 is valid");
    static ref SECOND: Maze = Maze::parse(include_str!("../../../assets/maze_2.txt"), 37, 14.0)
        .expect("embedded maze 2 is valid");
}

/// Selector for the two embedded mazes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeId {
    First,
    Second,
}

impl MazeId {
    pub fn toggle(self) -> MazeId {
        match self {
            MazeId::First => MazeId::Second,
            MazeId::Second => MazeId::First,
        }
    }
}

/// Where the active maze came from; reloading goes back to this source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeSource {
    BuiltIn(MazeId),
    File(PathBuf),
}

impl MazeSource {
    pub fn load(&self) -> Result<Maze, errors::MazeLoad> {
        info!("loading maze from source: {self:?}");

        match self {
            MazeSource::BuiltIn(MazeId::First) => Ok(FIRST.clone()),
            MazeSource::BuiltIn(MazeId::Second) => Ok(SECOND.clone()),
            MazeSource::File(path) => Maze::from_file(path),
        }
    }
}
