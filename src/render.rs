use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use unicode_width::UnicodeWidthStr;

use crate::actor::Actor;
use crate::grid::{Cell, Grid, Pos};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Glyph {
    Actor,
    Wall,
    Open,
}

impl Glyph {
    const ALL: [Glyph; 3] = [Glyph::Actor, Glyph::Wall, Glyph::Open];

    fn text(self) -> &'static str {
        match self {
            Glyph::Actor => "i",
            Glyph::Wall => "#",
            Glyph::Open => " ",
        }
    }

    fn color(self) -> Color {
        match self {
            Glyph::Actor => Color::Green,
            Glyph::Wall | Glyph::Open => Color::Reset,
        }
    }
}

fn glyph_for(grid: &Grid, actor: Actor, pos: Pos) -> Glyph {
    if pos == actor.pos {
        return Glyph::Actor;
    }
    match grid.cell(pos) {
        Some(Cell::Wall) => Glyph::Wall,
        _ => Glyph::Open,
    }
}

/// Terminal columns per room cell: the display width of the widest glyph.
fn cell_width() -> usize {
    Glyph::ALL
        .iter()
        .map(|glyph| UnicodeWidthStr::width(glyph.text()))
        .max()
        .unwrap_or(1)
}

/// Plain-text rows of the room, one string per grid row, without colour.
pub fn frame_lines(grid: &Grid, actor: Actor) -> Vec<String> {
    let cell_w = cell_width();
    (0..grid.height())
        .map(|y| {
            (0..grid.width())
                .map(|x| padded(glyph_for(grid, actor, Pos::new(x, y)).text(), cell_w))
                .collect::<String>()
        })
        .collect()
}

/// Pads `text` with spaces up to `cell_w` display columns so the room's
/// columns line up when glyphs differ in width.
fn padded(text: &str, cell_w: usize) -> String {
    let w = UnicodeWidthStr::width(text);
    let mut cell = text.to_string();
    for _ in w..cell_w {
        cell.push(' ');
    }
    cell
}

/// Full-redraw renderer: every frame clears the screen and repaints the
/// room, centred in the viewport, with a status line above it.
#[derive(Debug)]
pub struct Renderer {
    origin_x: u16,
    origin_y: u16,
    cell_w: usize,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            origin_x: 0,
            origin_y: 0,
            cell_w: cell_width(),
        }
    }

    pub fn draw<W: Write>(
        &mut self,
        out: &mut W,
        grid: &Grid,
        actor: Actor,
        hud: &str,
        viewport: (u16, u16),
    ) -> io::Result<()> {
        let needed_w = (grid.width() * self.cell_w) as u16;
        let needed_h = (grid.height() + 1) as u16;
        let (term_w, term_h) = viewport;

        out.queue(Clear(ClearType::All))?;
        out.queue(MoveTo(0, 0))?;

        if term_w < needed_w || term_h < needed_h {
            let msg = format!(
                "Terminal too small. Need at least {}x{} (cols x rows). Current: {}x{}.",
                needed_w, needed_h, term_w, term_h
            );
            out.queue(Print(msg))?;
            out.flush()?;
            return Ok(());
        }

        self.origin_x = (term_w - needed_w) / 2;
        self.origin_y = (term_h - needed_h) / 2 + 1;

        out.queue(MoveTo(self.origin_x, self.origin_y - 1))?;
        out.queue(SetForegroundColor(Color::White))?;
        out.queue(Print(hud))?;
        out.queue(ResetColor)?;

        for y in 0..grid.height() {
            // Raw mode does not turn '\n' into a carriage return, so each row
            // is positioned explicitly.
            out.queue(MoveTo(self.origin_x, self.origin_y + y as u16))?;
            for x in 0..grid.width() {
                self.draw_cell(out, glyph_for(grid, actor, Pos::new(x, y)))?;
            }
        }

        out.flush()
    }

    fn draw_cell<W: Write>(&self, out: &mut W, glyph: Glyph) -> io::Result<()> {
        let color = glyph.color();
        if color == Color::Reset {
            out.queue(Print(padded(glyph.text(), self.cell_w)))?;
            return Ok(());
        }
        out.queue(SetForegroundColor(color))?;
        out.queue(Print(padded(glyph.text(), self.cell_w)))?;
        out.queue(ResetColor)?;
        Ok(())
    }
}
