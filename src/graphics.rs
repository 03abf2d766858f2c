use std::io::{self, Write};

use crossterm::{cursor::MoveTo, queue, style::Print};

const MAX_COORDINATE: f64 = 10_000.0;

/// Character buffer the size of the terminal
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Canvas {
            width,
            height,
            cells: vec![' '; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Character at a cell, if it is inside the canvas
    #[cfg(test)]
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Sets a cell, ignoring coordinates outside the canvas
    pub fn plot(&mut self, x: isize, y: isize, glyph: char) {
        if x >= 0 && x < self.width as isize && y >= 0 && y < self.height as isize {
            self.cells[y as usize * self.width + x as usize] = glyph;
        }
    }

    /// Writes text starting at a cell, clipped at the right edge
    pub fn put_str(&mut self, x: usize, y: usize, text: &str) {
        for (offset, glyph) in text.chars().enumerate() {
            self.plot((x + offset) as isize, y as isize, glyph);
        }
    }

    /// Draws a line between two points using Bresenham's algorithm
    pub fn draw_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, glyph: char) {
        // Far off-screen endpoints would make the walk below arbitrarily long
        if [x0, y0, x1, y1].iter().any(|c| !c.is_finite() || c.abs() > MAX_COORDINATE) {
            return;
        }
        let (mut x0, mut y0, x1, y1) = (
            x0.round() as isize,
            y0.round() as isize,
            x1.round() as isize,
            y1.round() as isize,
        );
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy; // error value e_xy

        loop {
            self.plot(x0, y0, glyph);

            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Queues every row of the canvas on `out`
    pub fn flush_to(&self, out: &mut impl Write) -> io::Result<()> {
        for (row, line) in self.cells.chunks(self.width.max(1)).enumerate() {
            let text: String = line.iter().collect();
            queue!(out, MoveTo(0, row as u16), Print(text))?;
        }
        out.flush()
    }
}
