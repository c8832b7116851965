use std::{fmt, io, io::Write, time::Duration};

use cmazer::{
    dims::Dims,
    gameboard::Cell,
    visualizer::{MoveRecorder, Visualizer},
    Maze, MazeError,
};
use thiserror::Error;

use crate::{
    renderer::{render_ascii, TerminalRenderer},
    settings::{ColorScheme, SettingsError},
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Terminal error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("Invalid maze: {0}")]
    Maze(#[from] MazeError),
    #[error("Logger error: {0}")]
    Logger(String),
    #[error("Generated maze is not perfect (seed {0})")]
    NotPerfect(u64),
}

/// Everything one run needs, settings and command line already merged.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub cols: usize,
    pub rows: usize,
    pub seed: Option<u64>,
    pub animate: bool,
    pub frame_delay: Duration,
    pub colors: ColorScheme,
    pub check: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub size: Dims,
    pub seed: u64,
    pub found: bool,
    pub forward_moves: usize,
    pub undo_moves: usize,
    pub path: Vec<Dims>,
    pub perfect: Option<bool>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Maze: {}x{}, seed {}", self.size.0, self.size.1, self.seed)?;
        if self.found {
            writeln!(f, "Solved: path of {} cells", self.path.len().max(1))?;
        } else {
            writeln!(f, "Solved: no path from entry to exit")?;
        }
        writeln!(
            f,
            "Moves: {} forward, {} undone",
            self.forward_moves, self.undo_moves
        )?;
        if let Some(perfect) = self.perfect {
            writeln!(f, "Perfect: {}", if perfect { "yes" } else { "no" })?;
        }
        Ok(())
    }
}

/// Passes every notification to all of its visualizers.
struct Fanout<'a>(Vec<&'a mut dyn Visualizer>);

impl Visualizer for Fanout<'_> {
    fn on_cell_drawn(&mut self, pos: Dims, cell: &Cell) {
        self.0.iter_mut().for_each(|v| v.on_cell_drawn(pos, cell));
    }

    fn on_move(&mut self, from: Dims, to: Dims, undo: bool) {
        self.0.iter_mut().for_each(|v| v.on_move(from, to, undo));
    }

    fn on_tick(&mut self) {
        self.0.iter_mut().for_each(|v| v.on_tick());
    }
}

/// Generates and solves one maze, drawing it into `out`.
pub fn run<W: Write>(opts: &RunOptions, out: &mut W) -> Result<Report, AppError> {
    let mut maze = Maze::try_new(opts.cols, opts.rows, opts.seed)?;
    let mut recorder = MoveRecorder::new();

    let (seed, found) = if opts.animate {
        let mut renderer =
            TerminalRenderer::new(&mut *out, maze.size(), opts.colors, opts.frame_delay);
        renderer.begin()?;
        let seed = maze.generate_with(&mut renderer);
        let found = maze.solve_with(&mut Fanout(vec![
            &mut renderer as &mut dyn Visualizer,
            &mut recorder,
        ]));
        renderer.finish()?;
        (seed, found)
    } else {
        let seed = maze.generate();
        let found = maze.solve_with(&mut recorder);
        write!(out, "{}", render_ascii(maze.grid(), &recorder.path()))?;
        (seed, found)
    };

    log::info!(
        "maze {:?} solved: {}, {} cells visited",
        maze.size(),
        found,
        maze.visited_count()
    );

    let perfect = opts.check.then(|| maze.grid().is_perfect());
    if perfect == Some(false) {
        return Err(AppError::NotPerfect(seed));
    }

    let report = Report {
        size: maze.size(),
        seed,
        found,
        forward_moves: recorder.forward_count(),
        undo_moves: recorder.undo_count(),
        path: recorder.path(),
        perfect,
    };
    write!(out, "{}", report)?;

    Ok(report)
}
