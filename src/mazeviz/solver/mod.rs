mod mode;
mod solver;

pub use self::mode::Mode;
pub use self::solver::{Outcome, Solver, StepEvent};
