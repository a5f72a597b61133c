use rand::seq::SliceRandom;
use rand::thread_rng;
use tracing::{debug, info};

use crate::mazeviz::maze::{Dir, Marker, Maze, Point};

/// Terminal result of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Found,
    Blocked,
}

/// One visible unit of search progress, produced by [`Solver::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    /// A cell was entered and marked `Visiting`.
    Advanced(Point),
    /// A cell was exhausted and marked `DeadEnd`.
    Backtracked(Point),
    /// The search is over; further steps keep returning this.
    Finished(Outcome),
}

struct Frame {
    pos: Point,
    dirs: [Dir; 4],
    cursor: usize,
}

impl Frame {
    fn new(pos: Point) -> Self {
        let mut dirs = Dir::ALL;
        dirs.shuffle(&mut thread_rng());

        Self {
            pos,
            dirs,
            cursor: 0,
        }
    }
}

/// Randomized depth-first backtracking search, unrolled into an explicit
/// frame stack so one visible step happens per pull. The caller owns pacing:
/// it decides how often to call [`Solver::step`] and drops the solver to
/// cancel, which leaves the grid exactly as the last step left it.
///
/// Each entered cell gets a fresh uniformly shuffled permutation of the four
/// axis directions, so repeated runs on the same maze explore differently.
pub struct Solver {
    stack: Vec<Frame>,
    entry: Option<Point>,
    outcome: Option<Outcome>,
    steps: usize,
}

impl Solver {
    pub fn new(start: Point) -> Self {
        info!("starting search from {start:?}");

        Self {
            stack: vec![],
            entry: Some(start),
            outcome: None,
            steps: 0,
        }
    }

    /// Number of visible steps taken so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Advances the search by exactly one visible event.
    ///
    /// Probes that hit a wall, an out-of-bounds coordinate, or a cell already
    /// on the active path or solved path are silent and resolved within the
    /// same call; only entering a cell or abandoning one is a step.
    pub fn step(&mut self, maze: &mut Maze) -> StepEvent {
        if let Some(outcome) = self.outcome {
            return StepEvent::Finished(outcome);
        }

        if let Some(start) = self.entry.take() {
            return match maze.marker(start) {
                Some(Marker::Goal) => self.finish(maze, Outcome::Found),
                Some(Marker::Open) | Some(Marker::Start) | Some(Marker::DeadEnd) => {
                    self.advance(maze, start)
                }
                _ => self.finish(maze, Outcome::Blocked),
            };
        }

        loop {
            let frame = match self.stack.last_mut() {
                Some(frame) => frame,
                None => return self.finish(maze, Outcome::Blocked),
            };

            if frame.cursor == frame.dirs.len() {
                let pos = frame.pos;
                self.stack.pop();
                maze.set(pos, Marker::DeadEnd);
                self.steps += 1;

                debug!("backtracked from {pos:?}");

                return StepEvent::Backtracked(pos);
            }

            let target = frame.pos.step(frame.dirs[frame.cursor]);
            frame.cursor += 1;

            match maze.marker(target) {
                Some(Marker::Goal) => return self.finish(maze, Outcome::Found),
                Some(Marker::Open) | Some(Marker::Start) | Some(Marker::DeadEnd) => {
                    return self.advance(maze, target)
                }
                // wall, active path, solved path or out of bounds
                _ => continue,
            }
        }
    }

    fn advance(&mut self, maze: &mut Maze, pos: Point) -> StepEvent {
        maze.set(pos, Marker::Visiting);
        self.stack.push(Frame::new(pos));
        self.steps += 1;

        debug!("advanced to {pos:?}");

        StepEvent::Advanced(pos)
    }

    /// Solution unwinding is not animated: on `Found` every cell still on
    /// the stack turns `Solution` within this single step. The goal cell
    /// keeps its marker.
    fn finish(&mut self, maze: &mut Maze, outcome: Outcome) -> StepEvent {
        if outcome == Outcome::Found {
            self.stack
                .iter()
                .for_each(|frame| maze.set(frame.pos, Marker::Solution));
        }
        self.stack.clear();
        self.outcome = Some(outcome);

        info!("search finished after {} steps: {outcome:?}", self.steps);

        StepEvent::Finished(outcome)
    }
}

#[cfg(test)]
mod solver_tests {
    use super::*;

    fn maze(text: &str, size: usize) -> Maze {
        Maze::parse(text, size, 10.0).unwrap()
    }

    fn run(solver: &mut Solver, maze: &mut Maze) -> Outcome {
        for _ in 0..10_000 {
            if let StepEvent::Finished(outcome) = solver.step(maze) {
                return outcome;
            }
        }
        panic!("solver did not terminate");
    }

    #[test]
    fn test_corridor_to_adjacent_goal() {
        let mut m = maze("@@@\n@P@\n@F@", 3);
        let mut solver = Solver::new(m.player());

        assert_eq!(solver.step(&mut m), StepEvent::Advanced(Point::new(1, 1)));
        assert_eq!(
            solver.step(&mut m),
            StepEvent::Finished(Outcome::Found)
        );

        assert_eq!(m.marker(Point::new(1, 1)), Some(Marker::Solution));
        assert_eq!(m.marker(Point::new(1, 2)), Some(Marker::Goal));
        assert!(m.cells_with(Marker::DeadEnd).is_empty());
    }

    #[test]
    fn test_walled_off_start() {
        let mut m = maze("@@@\n@P@\n@@@", 3);
        let mut solver = Solver::new(m.player());

        assert_eq!(solver.step(&mut m), StepEvent::Advanced(Point::new(1, 1)));
        assert_eq!(
            solver.step(&mut m),
            StepEvent::Backtracked(Point::new(1, 1))
        );
        assert_eq!(
            solver.step(&mut m),
            StepEvent::Finished(Outcome::Blocked)
        );

        assert_eq!(m.cells_with(Marker::DeadEnd), vec![Point::new(1, 1)]);
    }

    #[test]
    fn test_unreachable_goal_marks_reachable_cells_dead() {
        // the open pocket around P cannot reach F behind the wall
        let mut m = maze("@@@@@\n@P @@\n@  @F\n@@@@@\n@@@@@", 5);
        let mut solver = Solver::new(m.player());

        assert_eq!(run(&mut solver, &mut m), Outcome::Blocked);

        assert_eq!(m.cells_with(Marker::DeadEnd).len(), 4);
        assert!(m.cells_with(Marker::Visiting).is_empty());
        assert!(m.cells_with(Marker::Solution).is_empty());
        // the unreachable goal keeps its marker untouched
        assert_eq!(m.marker(Point::new(4, 2)), Some(Marker::Goal));
    }

    #[test]
    fn test_single_path_with_branch() {
        // one path to F along the top, one dead-end branch going down
        let mut m = maze("@@@@@\n@P  F\n@ @@@\n@ @@@\n@@@@@", 5);
        let snapshot = m.clone();
        let mut solver = Solver::new(m.player());

        assert_eq!(run(&mut solver, &mut m), Outcome::Found);

        assert_eq!(m.marker(Point::new(1, 1)), Some(Marker::Solution));
        assert_eq!(m.marker(Point::new(2, 1)), Some(Marker::Solution));
        assert_eq!(m.marker(Point::new(3, 1)), Some(Marker::Solution));
        assert_eq!(m.marker(Point::new(4, 1)), Some(Marker::Goal));
        // branch cells are either untouched or proven dead, never solution
        for p in [Point::new(1, 2), Point::new(1, 3)] {
            assert_ne!(m.marker(p), Some(Marker::Solution));
            assert_ne!(m.marker(p), Some(Marker::Visiting));
        }
        assert!(m.cells_with(Marker::Visiting).is_empty());

        // walls and the layout outside the explored region are untouched
        assert_eq!(m.cells_with(Marker::Wall), snapshot.cells_with(Marker::Wall));
    }

    #[test]
    fn test_finished_is_sticky() {
        let mut m = maze("@@@\n@P@\n@@@", 3);
        let mut solver = Solver::new(m.player());

        assert_eq!(run(&mut solver, &mut m), Outcome::Blocked);
        let snapshot = m.clone();

        assert_eq!(
            solver.step(&mut m),
            StepEvent::Finished(Outcome::Blocked)
        );
        assert!(solver.finished());
        assert_eq!(m, snapshot);
    }

    #[test]
    fn test_random_order_never_breaks_solvability() {
        for _ in 0..25 {
            let mut m = maze("@@@@@\n@P  @\n@ @ @\n@   F\n@@@@@", 5);
            let mut solver = Solver::new(m.player());
            assert_eq!(run(&mut solver, &mut m), Outcome::Found);
            assert!(m.cells_with(Marker::Visiting).is_empty());
        }
    }

    #[test]
    fn test_step_counter() {
        let mut m = maze("@@@\n@P@\n@@@", 3);
        let mut solver = Solver::new(m.player());

        run(&mut solver, &mut m);
        // one advance into the start, one backtrack out of it
        assert_eq!(solver.steps(), 2);
    }
}
