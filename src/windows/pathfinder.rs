use std::path::PathBuf;

use egui::{Button, Key, Ui, Window};
use egui_notify::{Anchor, Toasts};
use tracing::{error, info};

use crate::mazeviz::maze::{Maze, MazeId, MazeSource};
use crate::mazeviz::solver::{Mode, Outcome, Solver, StepEvent};
use crate::mazeviz::{channels, Bus, ControlCommand};
use crate::widgets::{AppWidget, MazeView, OpenDropFile};

use super::AppWindow;

const WINDOW_NAME: &str = "pathfinder";

/// Maze window and the control state machine behind it.
///
/// Buttons and keyboard shortcuts both publish [`ControlCommand`]s to the
/// controls channel; the window drains that channel once per frame and is the
/// only consumer. While a solver is live and not paused it advances one
/// visible search step per frame.
pub struct Pathfinder {
    visible: bool,
    bus: Bus,
    maze_id: MazeId,
    source: MazeSource,
    maze: Maze,
    snapshot: Maze,
    solver: Option<Solver>,
    mode: Mode,
    paused: bool,
    replay: bool,
    last_outcome: Option<Outcome>,
    open_drop_file: OpenDropFile,
    toasts: Toasts,
}

impl Pathfinder {
    pub fn new(bus: Bus, visible: bool) -> Self {
        info!("initing window {WINDOW_NAME}");

        let maze_id = MazeId::First;
        let source = MazeSource::BuiltIn(maze_id);
        let maze = source.load().expect("embedded mazes are valid");

        Self {
            visible,
            bus,
            maze_id,
            source,
            snapshot: maze.clone(),
            maze,
            solver: None,
            mode: Mode::Stopped,
            paused: false,
            replay: false,
            last_outcome: None,
            open_drop_file: Default::default(),
            toasts: Toasts::default().with_anchor(Anchor::TopRight),
        }
    }

    fn publish(&mut self, cmd: ControlCommand) {
        if let Err(err) = self.bus.write(channels::CONTROLS.to_string(), cmd.to_message()) {
            error!("failed to publish command {cmd:?}: {err}");
        }
    }

    fn drain_commands(&mut self) {
        while let Ok(msg) = self.bus.read(channels::CONTROLS.to_string()) {
            match ControlCommand::from_message(&msg) {
                Ok(cmd) => self.apply(cmd),
                Err(err) => error!("skipping malformed control message: {err}"),
            }
        }
    }

    fn apply(&mut self, cmd: ControlCommand) {
        info!("applying control command: {cmd:?}");

        match cmd {
            ControlCommand::Start => self.begin(Mode::Solving),
            ControlCommand::StepStart => self.begin(Mode::Stepping),
            ControlCommand::Stop => self.stop(),
            ControlCommand::Next => {
                if self.mode == Mode::Stepping && self.solver.is_some() {
                    self.paused = false;
                }
            }
            ControlCommand::PauseToggle => self.paused = !self.paused,
            ControlCommand::SwitchMaze => {
                self.maze_id = self.maze_id.toggle();
                self.source = MazeSource::BuiltIn(self.maze_id);
                self.stop();
            }
            ControlCommand::Replay => {
                self.stop();
                self.begin(Mode::Solving);
                self.replay = true;
            }
        }
    }

    /// Starts a new search unless one is already live.
    fn begin(&mut self, mode: Mode) {
        if self.solver.is_some() || self.mode != Mode::Stopped {
            return;
        }

        self.snapshot = self.maze.clone();
        self.solver = Some(Solver::new(self.maze.player()));
        self.mode = mode;
        self.paused = false;
        self.last_outcome = None;
    }

    /// Cancels any live search and reloads the active maze, discarding all
    /// transient markings.
    fn stop(&mut self) {
        match self.source.load() {
            Ok(maze) => self.install(maze),
            Err(err) => {
                error!("failed to reload maze: {err}");
                self.toasts.error(format!("failed to reload maze: {err}"));

                self.source = MazeSource::BuiltIn(self.maze_id);
                if let Ok(maze) = self.source.load() {
                    self.install(maze);
                }
            }
        }
    }

    fn install(&mut self, maze: Maze) {
        self.solver = None;
        self.mode = Mode::Stopped;
        self.paused = false;
        self.replay = false;
        self.last_outcome = None;
        self.snapshot = maze.clone();
        self.maze = maze;
    }

    /// One animation tick: a single visible solver step, unless paused.
    fn tick(&mut self) {
        if self.paused {
            return;
        }

        let solver = match self.solver.as_mut() {
            Some(solver) => solver,
            None => return,
        };

        match solver.step(&mut self.maze) {
            StepEvent::Advanced(_) | StepEvent::Backtracked(_) => {
                if self.mode == Mode::Stepping {
                    self.paused = true;
                }
            }
            StepEvent::Finished(outcome) => {
                self.last_outcome = Some(outcome);

                if self.replay {
                    self.maze = self.snapshot.clone();
                    self.solver = Some(Solver::new(self.maze.player()));
                    self.mode = Mode::Solving;
                } else {
                    // markings stay visible; a stop trigger clears them
                    self.solver = None;
                }
            }
        }
    }

    fn handle_keys(&mut self, ui: &Ui) {
        let mut cmds = vec![];
        {
            let input = ui.ctx().input();
            if input.key_pressed(Key::Space) {
                cmds.push(ControlCommand::PauseToggle);
            }
            if self.mode == Mode::Stepping
                && (input.key_pressed(Key::ArrowRight) || input.key_pressed(Key::N))
            {
                cmds.push(ControlCommand::Next);
            }
            if input.key_pressed(Key::S) {
                cmds.push(ControlCommand::SwitchMaze);
            }
            if input.key_pressed(Key::Z) {
                cmds.push(ControlCommand::Replay);
            }
        }

        cmds.into_iter().for_each(|cmd| self.publish(cmd));
    }

    fn handle_controls(&mut self, ui: &mut Ui) {
        let searching = self.solver.is_some();
        let can_begin = self.mode == Mode::Stopped && !searching;

        let mut cmds = vec![];
        ui.horizontal(|ui| {
            if ui.add_enabled(can_begin, Button::new("START")).clicked() {
                cmds.push(ControlCommand::Start);
            }
            if ui.add_enabled(can_begin, Button::new("STEP")).clicked() {
                cmds.push(ControlCommand::StepStart);
            }
            if ui.button("STOP").clicked() {
                cmds.push(ControlCommand::Stop);
            }
            let next_live = self.mode == Mode::Stepping && searching;
            if ui.add_enabled(next_live, Button::new("NEXT")).clicked() {
                cmds.push(ControlCommand::Next);
            }
        });

        cmds.into_iter().for_each(|cmd| self.publish(cmd));
    }

    fn handle_file_drop(&mut self, ui: &mut Ui) {
        self.open_drop_file.show(ui);

        if let Some(path) = self.open_drop_file.path() {
            match Maze::from_file(&path) {
                Ok(maze) => {
                    info!("loaded maze from {path}");
                    self.source = MazeSource::File(PathBuf::from(path));
                    self.install(maze);
                }
                Err(err) => {
                    error!("failed to load maze from {path}: {err}");
                    self.toasts.error(format!("failed to load maze: {err}"));
                }
            }
        }
    }

    fn status(&self) -> String {
        let mode = match self.mode {
            Mode::Solving => {
                if self.replay {
                    "replaying"
                } else {
                    "solving"
                }
            }
            Mode::Stepping => "stepping",
            Mode::Stopped => "stopped",
        };

        let steps = self
            .solver
            .as_ref()
            .map(|solver| solver.steps())
            .unwrap_or_default();

        let outcome = match self.last_outcome {
            Some(Outcome::Found) => " | path found",
            Some(Outcome::Blocked) => " | no path",
            None => "",
        };

        let paused = if self.paused { " | paused" } else { "" };

        format!("{mode} | steps: {steps}{paused}{outcome}")
    }
}

impl AppWindow for Pathfinder {
    fn toggle_btn(&mut self, ui: &mut Ui) {
        if ui.button(WINDOW_NAME).clicked() {
            self.visible = !self.visible;
        }
    }

    fn show(&mut self, ui: &mut Ui) {
        let mut visible = self.visible;

        Window::new(WINDOW_NAME).open(&mut visible).show(ui.ctx(), |ui| {
            self.handle_keys(ui);
            self.handle_controls(ui);
            self.handle_file_drop(ui);

            self.drain_commands();
            self.tick();

            ui.separator();
            ui.label(self.status());
            MazeView::new(&self.maze).show(ui);

            if self.solver.is_some() && !self.paused {
                ui.ctx().request_repaint();
            }

            self.toasts.show(ui.ctx());
        });

        self.visible = visible;
    }
}
