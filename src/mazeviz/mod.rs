mod bus;
mod commands;
pub mod maze;
pub mod solver;

pub use self::bus::{channels, Bus, Message};
pub use self::commands::ControlCommand;
