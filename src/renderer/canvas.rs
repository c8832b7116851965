use std::fmt;

use cmazer::{
    array::Array2D,
    dims::Dims,
    gameboard::{Cell, CellWall, Grid},
};

const CORNER: char = '+';
const H_WALL: char = '-';
const V_WALL: char = '|';
const PATH: char = '*';
const UNDONE: char = '.';
const EMPTY: char = ' ';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphKind {
    Empty,
    Wall,
    Path,
    Undone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub kind: GlyphKind,
}

impl Glyph {
    const EMPTY: Glyph = Glyph {
        ch: EMPTY,
        kind: GlyphKind::Empty,
    };

    fn wall(ch: char) -> Self {
        Glyph {
            ch,
            kind: GlyphKind::Wall,
        }
    }
}

/// Character lattice of a maze, `(2 * cols + 1) × (2 * rows + 1)`.
///
/// Cell `(i, j)` sits at `(2i + 1, 2j + 1)`, walls between the centres and
/// corners on the even/even positions.
#[derive(Debug, Clone)]
pub struct Canvas {
    glyphs: Array2D<Glyph>,
}

impl Canvas {
    pub fn new(maze_size: Dims) -> Self {
        let size = maze_size * 2 + Dims::ONE;
        let mut glyphs = Array2D::new(Glyph::EMPTY, size.0 as usize, size.1 as usize);
        for pos in Dims::iter_fill(Dims::ZERO, size) {
            if pos.0 % 2 == 0 && pos.1 % 2 == 0 {
                glyphs[pos] = Glyph::wall(CORNER);
            }
        }

        Canvas { glyphs }
    }

    pub fn size(&self) -> Dims {
        self.glyphs.size()
    }

    pub fn center(cell: Dims) -> Dims {
        cell * 2 + Dims::ONE
    }

    pub fn glyph(&self, pos: Dims) -> Option<Glyph> {
        self.glyphs.get(pos).copied()
    }

    /// Lattice positions that [`Canvas::draw_cell`] may change.
    pub fn cell_area(cell: Dims) -> impl Iterator<Item = Dims> {
        let center = Self::center(cell);
        Dims::iter_fill(center - Dims::ONE, center + Dims(2, 2))
    }

    pub fn draw_cell(&mut self, pos: Dims, cell: &Cell) {
        let center = Self::center(pos);
        for wall in CellWall::get_in_order() {
            let at = center + wall.to_coord();
            let glyph = &mut self.glyphs[at];
            if cell.get_wall(wall) {
                *glyph = Glyph::wall(match wall {
                    CellWall::Top | CellWall::Bottom => H_WALL,
                    CellWall::Left | CellWall::Right => V_WALL,
                });
            } else if glyph.kind == GlyphKind::Wall {
                *glyph = Glyph::EMPTY;
            }
        }
    }

    pub fn draw_grid(&mut self, grid: &Grid) {
        for pos in grid.iter_pos() {
            self.draw_cell(pos, &grid[pos]);
        }
    }

    /// Marks a step between two adjacent cells, returns the changed positions.
    pub fn draw_move(&mut self, from: Dims, to: Dims, undo: bool) -> [Dims; 3] {
        let (a, b) = (Self::center(from), Self::center(to));
        let between = Dims((a.0 + b.0) / 2, (a.1 + b.1) / 2);

        let (ch, kind) = if undo {
            (UNDONE, GlyphKind::Undone)
        } else {
            (PATH, GlyphKind::Path)
        };
        let mark = Glyph { ch, kind };

        if !undo {
            self.glyphs[a] = mark;
        }
        self.glyphs[between] = mark;
        self.glyphs[b] = mark;

        [a, between, b]
    }

    /// Marks a whole path, consecutive cells must be adjacent.
    pub fn draw_path(&mut self, path: &[Dims]) {
        for step in path.windows(2) {
            self.draw_move(step[0], step[1], false);
        }
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Dims(width, height) = self.size();
        for y in 0..height {
            let line: String = (0..width).map(|x| self.glyphs[Dims(x, y)].ch).collect();
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

/// Plain text picture of `grid` with `path` marked on it.
pub fn render_ascii(grid: &Grid, path: &[Dims]) -> String {
    let mut canvas = Canvas::new(grid.size());
    canvas.draw_grid(grid);
    canvas.draw_path(path);
    canvas.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_single_cell() {
        let grid = Grid::new(1, 1);
        assert_eq!(render_ascii(&grid, &[]), "+-+\n| |\n+-+\n");
    }

    #[test]
    fn corridor_with_path() {
        let mut grid = Grid::new(2, 1);
        grid.open_passage(Dims(0, 0), Dims(1, 0));
        grid.open_border(Dims(0, 0), CellWall::Top);
        grid.open_border(Dims(1, 0), CellWall::Bottom);

        let picture = render_ascii(&grid, &[Dims(0, 0), Dims(1, 0)]);
        assert_eq!(picture, "+ +-+\n|***|\n+-+ +\n");
    }

    #[test]
    fn undo_keeps_origin() {
        let mut canvas = Canvas::new(Dims(2, 1));
        canvas.draw_move(Dims(0, 0), Dims(1, 0), false);
        canvas.draw_move(Dims(0, 0), Dims(1, 0), true);

        assert_eq!(canvas.glyph(Dims(1, 1)).map(|g| g.kind), Some(GlyphKind::Path));
        assert_eq!(canvas.glyph(Dims(2, 1)).map(|g| g.kind), Some(GlyphKind::Undone));
        assert_eq!(canvas.glyph(Dims(3, 1)).map(|g| g.ch), Some(UNDONE));
    }

    #[test]
    fn cell_area_is_three_by_three() {
        let area: Vec<_> = Canvas::cell_area(Dims(1, 0)).collect();
        assert_eq!(area.len(), 9);
        assert_eq!(area.first(), Some(&Dims(2, 0)));
        assert_eq!(area.last(), Some(&Dims(4, 2)));
    }
}
