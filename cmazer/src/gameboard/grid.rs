use std::ops;

use smallvec::SmallVec;

use crate::{array::Array2D, dims::Dims};

use super::cell::{Cell, CellWall};

/// Neighbour candidate order used while carving.
const NEIGHBOR_ORDER: [CellWall; 4] = [
    CellWall::Left,
    CellWall::Right,
    CellWall::Top,
    CellWall::Bottom,
];

/// Rectangular board of [`Cell`]s, `cols × rows`.
///
/// Walls between two cells are always opened on both sides at once, so the only
/// way to carve an interior wall is [`Grid::open_passage`]. Border walls (the
/// entrance and the exit) go through [`Grid::open_border`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2D<Cell>,
}

impl Grid {
    /// Creates a fully enclosed grid.
    ///
    /// # Panics
    /// If `cols` or `rows` is zero.
    pub fn new(cols: usize, rows: usize) -> Self {
        assert!(
            cols >= 1 && rows >= 1,
            "grid must be at least 1x1, got {}x{}",
            cols,
            rows
        );
        assert!(
            cols <= i32::MAX as usize && rows <= i32::MAX as usize,
            "grid dimensions overflow coordinates"
        );

        Grid {
            cells: Array2D::new(Cell::new(), cols, rows),
        }
    }

    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn cols(&self) -> usize {
        self.cells.width()
    }

    pub fn rows(&self) -> usize {
        self.cells.height()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn entry(&self) -> Dims {
        Dims::ZERO
    }

    pub fn exit(&self) -> Dims {
        self.size() - Dims::ONE
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        self.cells.dim_to_idx(pos).is_some()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> + '_ {
        self.cells.iter_pos()
    }

    /// Neighbour across `wall`, `None` on the border.
    pub fn neighbor(&self, pos: Dims, wall: CellWall) -> Option<Dims> {
        let next = pos + wall.to_coord();
        self.is_in_bounds(next).then_some(next)
    }

    /// In-bounds neighbours of `pos`, left, right, top, bottom.
    ///
    /// # Panics
    /// If `pos` itself is out of bounds.
    pub fn neighbors(&self, pos: Dims) -> SmallVec<[Dims; 4]> {
        self.assert_in_bounds(pos);

        NEIGHBOR_ORDER
            .into_iter()
            .filter_map(|wall| self.neighbor(pos, wall))
            .collect()
    }

    /// Returns the wall of `cell` that faces `cell2`, if they are adjacent.
    pub fn which_wall_between(cell: Dims, cell2: Dims) -> Option<CellWall> {
        match (cell2.0 - cell.0, cell2.1 - cell.1) {
            (0, -1) => Some(CellWall::Top),
            (1, 0) => Some(CellWall::Right),
            (0, 1) => Some(CellWall::Bottom),
            (-1, 0) => Some(CellWall::Left),
            _ => None,
        }
    }

    /// Removes the wall between two adjacent cells, on both sides.
    ///
    /// # Panics
    /// If either cell is out of bounds or the cells are not adjacent.
    pub fn open_passage(&mut self, from: Dims, to: Dims) {
        self.assert_in_bounds(from);
        self.assert_in_bounds(to);
        let wall = Self::which_wall_between(from, to)
            .unwrap_or_else(|| panic!("cells {:?} and {:?} are not adjacent", from, to));

        self.cells[from].remove_wall(wall);
        self.cells[to].remove_wall(wall.reverse_wall());
    }

    /// Removes a wall on the outer border of the grid.
    ///
    /// # Panics
    /// If `pos` is out of bounds or the wall has a cell behind it.
    pub fn open_border(&mut self, pos: Dims, wall: CellWall) {
        self.assert_in_bounds(pos);
        assert!(
            self.neighbor(pos, wall).is_none(),
            "{:?} wall of {:?} is not on the border",
            wall,
            pos
        );

        self.cells[pos].remove_wall(wall);
    }

    /// Whether `from` can step to its neighbour across `wall`.
    pub fn can_pass(&self, from: Dims, wall: CellWall) -> bool {
        self.neighbor(from, wall).is_some() && self[from].is_open(wall)
    }

    /// Number of open interior passages.
    pub fn passage_count(&self) -> usize {
        self.iter_pos()
            .map(|pos| {
                [CellWall::Right, CellWall::Bottom]
                    .into_iter()
                    .filter(|&wall| self.can_pass(pos, wall))
                    .count()
            })
            .sum()
    }

    /// Every interior wall is either open on both sides or closed on both.
    pub fn is_symmetric(&self) -> bool {
        self.iter_pos().all(|pos| {
            CellWall::get_in_order().into_iter().all(|wall| {
                self.neighbor(pos, wall).map_or(true, |other| {
                    self[pos].is_open(wall) == self[other].is_open(wall.reverse_wall())
                })
            })
        })
    }

    /// Every cell can be reached from the entry through open passages.
    pub fn is_connected(&self) -> bool {
        let mut seen = Array2D::new(false, self.cols(), self.rows());
        let mut stack = vec![self.entry()];
        seen[self.entry()] = true;
        let mut reached = 1;

        while let Some(pos) = stack.pop() {
            for wall in CellWall::get_in_order() {
                if !self.can_pass(pos, wall) {
                    continue;
                }
                let next = pos + wall.to_coord();
                if !seen[next] {
                    seen[next] = true;
                    reached += 1;
                    stack.push(next);
                }
            }
        }

        reached == self.cell_count()
    }

    /// Passage graph is a spanning tree: connected with exactly `cells - 1` edges.
    pub fn is_perfect(&self) -> bool {
        self.is_symmetric()
            && self.passage_count() == self.cell_count() - 1
            && self.is_connected()
    }

    /// One byte per cell in row-major order, see [`Cell::walls_bits`].
    pub fn wall_bitmap(&self) -> Vec<u8> {
        self.cells.iter().map(Cell::walls_bits).collect()
    }

    fn assert_in_bounds(&self, pos: Dims) {
        assert!(
            self.is_in_bounds(pos),
            "position {:?} is outside of the {:?} grid",
            pos,
            self.size()
        );
    }
}

impl ops::Index<Dims> for Grid {
    type Output = Cell;

    fn index(&self, index: Dims) -> &Self::Output {
        &self.cells[index]
    }
}
