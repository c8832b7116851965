use crate::dims::Dims;

use self::CellWall::*;

/// One grid position. Every wall starts closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    top: bool,
    right: bool,
    bottom: bool,
    left: bool,
}

impl Cell {
    pub fn new() -> Cell {
        Cell {
            top: true,
            right: true,
            bottom: true,
            left: true,
        }
    }

    pub(crate) fn remove_wall(&mut self, wall: CellWall) {
        match wall {
            Top => self.top = false,
            Right => self.right = false,
            Bottom => self.bottom = false,
            Left => self.left = false,
        }
    }

    /// `true` if the wall is still standing.
    pub fn get_wall(&self, wall: CellWall) -> bool {
        match wall {
            Top => self.top,
            Right => self.right,
            Bottom => self.bottom,
            Left => self.left,
        }
    }

    pub fn is_open(&self, wall: CellWall) -> bool {
        !self.get_wall(wall)
    }

    pub fn open_walls(&self) -> impl Iterator<Item = CellWall> + '_ {
        CellWall::get_in_order()
            .into_iter()
            .filter(|&wall| self.is_open(wall))
    }

    /// Standing walls packed as [`CellWall::bit`] flags.
    pub fn walls_bits(&self) -> u8 {
        CellWall::get_in_order()
            .into_iter()
            .filter(|&wall| self.get_wall(wall))
            .fold(0, |bits, wall| bits | wall.bit())
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CellWall {
    Top,
    Right,
    Bottom,
    Left,
}

impl CellWall {
    pub fn to_coord(self) -> Dims {
        match self {
            Top => Dims(0, -1),
            Right => Dims(1, 0),
            Bottom => Dims(0, 1),
            Left => Dims(-1, 0),
        }
    }

    pub fn reverse_wall(self) -> CellWall {
        match self {
            Top => Bottom,
            Right => Left,
            Bottom => Top,
            Left => Right,
        }
    }

    pub fn bit(self) -> u8 {
        match self {
            Top => 0b0001,
            Right => 0b0010,
            Bottom => 0b0100,
            Left => 0b1000,
        }
    }

    /// Clockwise from the top, the order the solver explores in.
    pub fn get_in_order() -> [CellWall; 4] {
        [Top, Right, Bottom, Left]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_closed() {
        let cell = Cell::new();
        assert!(CellWall::get_in_order().iter().all(|&w| cell.get_wall(w)));
        assert_eq!(cell.walls_bits(), 0b1111);
        assert_eq!(cell.open_walls().count(), 0);
    }

    #[test]
    fn remove_single_wall() {
        let mut cell = Cell::new();
        cell.remove_wall(Right);
        assert!(cell.is_open(Right));
        assert!(cell.get_wall(Left));
        assert_eq!(cell.walls_bits(), 0b1101);
        assert_eq!(cell.open_walls().collect::<Vec<_>>(), vec![Right]);
    }

    #[test]
    fn reverse_is_opposite_offset() {
        for wall in CellWall::get_in_order() {
            assert_eq!(wall.to_coord() + wall.reverse_wall().to_coord(), Dims::ZERO);
            assert_eq!(wall.reverse_wall().reverse_wall(), wall);
        }
    }
}
