pub mod canvas;

use std::{
    io::{self, Write},
    thread,
    time::Duration,
};

use cmazer::{dims::Dims, gameboard::Cell, visualizer::Visualizer};
use crossterm::{
    cursor, queue,
    style::{Color, PrintStyledContent, Stylize as _},
    terminal,
};

use crate::settings::ColorScheme;

pub use canvas::{render_ascii, Canvas, GlyphKind};

/// Draws generation and solving live into a terminal.
///
/// Errors can't travel back through [`Visualizer`], so the first one is kept
/// and drawing stops; [`TerminalRenderer::finish`] hands it over.
pub struct TerminalRenderer<W: Write> {
    out: W,
    canvas: Canvas,
    colors: ColorScheme,
    frame_delay: Duration,
    error: Option<io::Error>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, maze_size: Dims, colors: ColorScheme, frame_delay: Duration) -> Self {
        TerminalRenderer {
            out,
            canvas: Canvas::new(maze_size),
            colors,
            frame_delay,
            error: None,
        }
    }

    /// Clears the screen and hides the cursor.
    pub fn begin(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            terminal::Clear(terminal::ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        self.out.flush()
    }

    /// Puts the cursor under the maze and returns the first drawing error, if any.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }

        let height = u16::try_from(self.canvas.size().1)
            .unwrap_or(MAX_COORD)
            .min(MAX_COORD);
        queue!(self.out, cursor::MoveTo(0, height), cursor::Show)?;
        self.out.flush()?;
        Ok(self.out)
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    fn color_of(&self, kind: GlyphKind) -> Color {
        match kind {
            GlyphKind::Empty | GlyphKind::Wall => self.colors.wall,
            GlyphKind::Path => self.colors.path,
            GlyphKind::Undone => self.colors.undo,
        }
    }

    fn print_glyphs(&mut self, positions: impl IntoIterator<Item = Dims>) {
        if self.error.is_some() {
            return;
        }

        for pos in positions {
            let (Some(glyph), Some((x, y))) = (self.canvas.glyph(pos), terminal_pos(pos)) else {
                continue;
            };
            let color = self.color_of(glyph.kind);
            let printed = queue!(
                self.out,
                cursor::MoveTo(x, y),
                PrintStyledContent(glyph.ch.with(color))
            );

            if let Err(err) = printed {
                log::error!("Terminal drawing failed: {}", err);
                self.error = Some(err);
                return;
            }
        }
    }
}

/// Largest column or row a cursor move can name, escape codes count from 1.
const MAX_COORD: u16 = u16::MAX - 1;

/// Terminal column and row of a canvas position, `None` if the terminal can't address it.
fn terminal_pos(pos: Dims) -> Option<(u16, u16)> {
    let coord = |c: i32| u16::try_from(c).ok().filter(|&c| c <= MAX_COORD);
    Some((coord(pos.0)?, coord(pos.1)?))
}

impl<W: Write> Visualizer for TerminalRenderer<W> {
    fn on_cell_drawn(&mut self, pos: Dims, cell: &Cell) {
        self.canvas.draw_cell(pos, cell);
        self.print_glyphs(Canvas::cell_area(pos));
    }

    fn on_move(&mut self, from: Dims, to: Dims, undo: bool) {
        let changed = self.canvas.draw_move(from, to, undo);
        self.print_glyphs(changed);
    }

    fn on_tick(&mut self) {
        if self.error.is_some() {
            return;
        }

        if let Err(err) = self.out.flush() {
            self.error = Some(err);
            return;
        }

        if !self.frame_delay.is_zero() {
            thread::sleep(self.frame_delay);
        }
    }
}
