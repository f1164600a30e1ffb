//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are encoded into a byte buffer first and written with a single
//! flush. After the first frame only changed runs of cells are re-sent.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Last frame sent, `None` forces a full redraw.
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(32 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Undo everything `enter` did.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (e.g. after a resize event).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// The caller keeps passing the same `FrameBuffer`; after the call it
    /// holds the previous frame and can be rendered into again without
    /// cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        self.flush_buf()?;

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Tracks the style already active on the terminal so runs of equally
/// styled cells only emit their characters.
struct Painter<'a> {
    out: &'a mut Vec<u8>,
    current: Option<CellStyle>,
}

impl<'a> Painter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, current: None }
    }

    fn paint(&mut self, fb: &FrameBuffer, x: u16, y: u16) -> Result<()> {
        let cell = fb.get(x, y).unwrap_or_default();
        if self.current != Some(cell.style) {
            apply_style_into(self.out, cell.style)?;
            self.current = Some(cell.style);
        }
        self.out.queue(Print(cell.ch))?;
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut painter = Painter::new(out);
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            painter.paint(fb, x, y)?;
        }
        if y + 1 < fb.height() {
            painter.out.queue(Print("\r\n"))?;
        }
    }
    painter.finish()
}

/// Encode only the runs of cells that differ between `prev` and `next`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut painter = Painter::new(out);
    for (x, y, len) in changed_runs(prev, next) {
        painter.out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            painter.paint(next, x + dx, y)?;
        }
    }
    painter.finish()
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Iterate `(x, y, len)` runs of horizontally adjacent changed cells.
///
/// A size mismatch marks every row as one run.
fn changed_runs<'a>(
    prev: &'a FrameBuffer,
    next: &'a FrameBuffer,
) -> impl Iterator<Item = (u16, u16, u16)> + 'a {
    let same_size = prev.width() == next.width() && prev.height() == next.height();
    let w = next.width();

    (0..next.height()).flat_map(move |y| {
        let mut x = 0u16;
        std::iter::from_fn(move || {
            if !same_size {
                if x == 0 && w > 0 {
                    x = w;
                    return Some((0, y, w));
                }
                return None;
            }

            let differs = |x: u16| prev.get(x, y) != next.get(x, y);
            while x < w && !differs(x) {
                x += 1;
            }
            if x >= w {
                return None;
            }
            let start = x;
            while x < w && differs(x) {
                x += 1;
            }
            Some((start, y, x - start))
        })
    })
}
