use thiserror::Error;

use crate::{
    algorithms::{self, random_from_seed, CellMask},
    dims::Dims,
    gameboard::{CellWall, Grid},
    visualizer::{NoVisualizer, Visualizer},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze must be at least 1x1, got {0}x{1}")]
    InvalidSize(usize, usize),
}

/// A grid together with its generation and solving state.
///
/// The lifecycle is: [`Maze::new`] (all walls closed), [`Maze::generate`]
/// (carves, then resets the visited markers), [`Maze::solve`] (marks the cells
/// the search went through). Visited markers from carving never leak into
/// solving.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    visited: CellMask,
    seed: Option<u64>,
}

impl Maze {
    /// # Panics
    /// If `cols` or `rows` is zero, see [`Maze::try_new`] for unchecked input.
    pub fn new(cols: usize, rows: usize, seed: Option<u64>) -> Self {
        Self::from_grid(Grid::new(cols, rows)).with_seed(seed)
    }

    pub fn try_new(cols: usize, rows: usize, seed: Option<u64>) -> Result<Self, MazeError> {
        if cols == 0 || rows == 0 {
            return Err(MazeError::InvalidSize(cols, rows));
        }
        Ok(Self::new(cols, rows, seed))
    }

    /// Wraps an already built grid, e.g. a hand-made one.
    pub fn from_grid(grid: Grid) -> Self {
        let visited = CellMask::new_empty(grid.cols(), grid.rows());
        Maze {
            grid,
            visited,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> Dims {
        self.grid.size()
    }

    pub fn entry(&self) -> Dims {
        self.grid.entry()
    }

    pub fn exit(&self) -> Dims {
        self.grid.exit()
    }

    /// Seed used by the last generation, or the one requested for the next.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn is_visited(&self, pos: Dims) -> bool {
        self.visited[pos]
    }

    pub fn visited_count(&self) -> usize {
        self.visited.enabled_count()
    }

    pub fn visited(&self) -> &CellMask {
        &self.visited
    }

    pub fn reset_visited(&mut self) {
        self.visited.clear();
    }

    /// Silent [`Maze::generate_with`].
    pub fn generate(&mut self) -> u64 {
        self.generate_with(&mut NoVisualizer)
    }

    /// Carves the maze from the entry and opens the entrance and the exit.
    ///
    /// Returns the seed that was used; it's also remembered, so regenerating a
    /// fresh maze with it gives the same layout.
    pub fn generate_with(&mut self, visualizer: &mut dyn Visualizer) -> u64 {
        let (mut rng, seed) = random_from_seed(self.seed);
        self.seed = Some(seed);
        log::debug!("generating {:?} maze with seed {}", self.size(), seed);

        for pos in Dims::iter_fill(Dims::ZERO, self.size()) {
            visualizer.on_cell_drawn(pos, &self.grid[pos]);
        }
        visualizer.on_tick();

        self.break_entrance_and_exit(visualizer);

        let entry = self.entry();
        algorithms::carve(
            &mut self.grid,
            entry,
            &mut self.visited,
            &mut rng,
            visualizer,
        );

        self.reset_visited();

        seed
    }

    fn break_entrance_and_exit(&mut self, visualizer: &mut dyn Visualizer) {
        let (entry, exit) = (self.entry(), self.exit());

        self.grid.open_border(entry, CellWall::Top);
        visualizer.on_cell_drawn(entry, &self.grid[entry]);
        visualizer.on_tick();

        self.grid.open_border(exit, CellWall::Bottom);
        visualizer.on_cell_drawn(exit, &self.grid[exit]);
        visualizer.on_tick();
    }

    /// Silent [`Maze::solve_with`].
    pub fn solve(&mut self) -> bool {
        self.solve_with(&mut NoVisualizer)
    }

    /// Searches for the path from the entry to the exit.
    ///
    /// Always succeeds on a generated maze. `false` means the wall layout is
    /// disconnected, it's not an error. Markers of a previous search are cleared
    /// first, so solving again gives the same answer.
    pub fn solve_with(&mut self, visualizer: &mut dyn Visualizer) -> bool {
        self.reset_visited();
        let entry = self.entry();
        let found = algorithms::solve_from(&self.grid, entry, &mut self.visited, visualizer);
        log::debug!(
            "solve finished, found: {}, visited {} cells",
            found,
            self.visited_count()
        );
        found
    }
}
