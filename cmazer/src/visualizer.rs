//! Notification seam between the algorithms and whatever draws them.
//!
//! Every callback is fire-and-forget: the algorithms never read anything back,
//! so running with [`NoVisualizer`] yields exactly the same maze and the same
//! solving outcome as running with a renderer attached.

use crate::{dims::Dims, gameboard::Cell};

pub trait Visualizer {
    /// Wall configuration of `pos` changed (or is drawn for the first time).
    fn on_cell_drawn(&mut self, _pos: Dims, _cell: &Cell) {}

    /// The solver stepped from `from` to `to`, or retreated over that step if `undo`.
    fn on_move(&mut self, _from: Dims, _to: Dims, _undo: bool) {}

    /// Pacing point between two steps.
    fn on_tick(&mut self) {}
}

/// Silent visualizer, used when nobody is watching.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoVisualizer;

impl Visualizer for NoVisualizer {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Dims,
    pub to: Dims,
    pub undo: bool,
}

/// Records everything it is told, mostly for reporting and tests.
#[derive(Debug, Default, Clone)]
pub struct MoveRecorder {
    pub moves: Vec<Move>,
    pub drawn_cells: usize,
}

impl MoveRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn forward_count(&self) -> usize {
        self.moves.iter().filter(|m| !m.undo).count()
    }

    pub fn undo_count(&self) -> usize {
        self.moves.iter().filter(|m| m.undo).count()
    }

    /// Cells of the forward moves that were never undone, starting with the
    /// origin of the first move. After a successful solve this is the path
    /// from the entry to the exit.
    pub fn path(&self) -> Vec<Dims> {
        let mut path: Vec<Dims> = Vec::new();
        for mv in &self.moves {
            if mv.undo {
                if path.last() == Some(&mv.to) {
                    path.pop();
                }
            } else {
                if path.is_empty() {
                    path.push(mv.from);
                }
                path.push(mv.to);
            }
        }
        path
    }
}

impl Visualizer for MoveRecorder {
    fn on_cell_drawn(&mut self, _pos: Dims, _cell: &Cell) {
        self.drawn_cells += 1;
    }

    fn on_move(&mut self, from: Dims, to: Dims, undo: bool) {
        self.moves.push(Move { from, to, undo });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_drops_undone_branches() {
        let mut rec = MoveRecorder::new();
        rec.on_move(Dims(0, 0), Dims(1, 0), false);
        rec.on_move(Dims(1, 0), Dims(2, 0), false);
        rec.on_move(Dims(1, 0), Dims(2, 0), true);
        rec.on_move(Dims(1, 0), Dims(1, 1), false);

        assert_eq!(rec.forward_count(), 3);
        assert_eq!(rec.undo_count(), 1);
        assert_eq!(rec.path(), vec![Dims(0, 0), Dims(1, 0), Dims(1, 1)]);
    }

    #[test]
    fn empty_recorder_has_no_path() {
        assert!(MoveRecorder::new().path().is_empty());
    }
}
