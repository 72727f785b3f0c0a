//! TerminalRenderer: owns the real terminal and flushes framebuffers to it.
//!
//! `enter` puts the terminal into raw mode on the alternate screen, `exit`
//! restores it. `exit` is idempotent and also runs on drop, so every way out
//! of the game (quit, game over, error, unwinding panic) gives the terminal back.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    style::{Attribute, Color, Colors, Print, ResetColor, SetAttribute, SetColors},
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::surface::Surface;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    active: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Acquire the terminal: raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        if self.active {
            return Ok(());
        }
        terminal::enable_raw_mode().context("terminal unavailable: cannot enable raw mode")?;
        self.active = true;

        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
            .context("terminal unavailable: cannot enter alternate screen")?;
        tracing::debug!("terminal acquired");
        Ok(())
    }

    /// Release the terminal. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.last = None;

        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        let flushed = self.flush_buf();
        terminal::disable_raw_mode()?;
        tracing::debug!("terminal released");
        flushed
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers should keep one `FrameBuffer` and pass it in every frame.
    /// The renderer will diff against the previous frame and then swap buffers
    /// so the caller can reuse the old one without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            Some(mut prev) => {
                encode_full_into(fb, &mut self.buf)?;
                prev.resize(fb.width(), fb.height());
                prev
            }
            None => {
                encode_full_into(fb, &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        self.flush_buf()?;

        // Swap current into prev so next frame can diff without cloning.
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

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

impl Surface for TerminalRenderer {
    fn size(&self) -> Result<(u16, u16)> {
        Ok(terminal::size()?)
    }

    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.draw_swap(fb)
    }
}

/// Best-effort terminal restore for panic hooks, where the renderer may be
/// unreachable.
pub fn restore_terminal() {
    let mut out = io::stdout();
    let _ = out.queue(ResetColor);
    let _ = out.queue(terminal::EnableLineWrap);
    let _ = out.queue(cursor::Show);
    let _ = out.queue(terminal::LeaveAlternateScreen);
    let _ = out.flush();
    let _ = terminal::disable_raw_mode();
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

/// Tracks the style last sent to the terminal so runs only switch when needed.
#[derive(Default)]
struct Pen {
    style: Option<CellStyle>,
}

impl Pen {
    /// Queue `len` cells of row `y` starting at column `x`.
    fn run(
        &mut self,
        out: &mut Vec<u8>,
        fb: &FrameBuffer,
        x: u16,
        y: u16,
        len: u16,
    ) -> Result<()> {
        out.queue(cursor::MoveTo(x, y))?;
        for col in x..x + len {
            let cell = fb.get(col, y).unwrap_or_default();
            if self.style != Some(cell.style) {
                let weight = if cell.style.bold {
                    Attribute::Bold
                } else {
                    Attribute::NormalIntensity
                };
                out.queue(SetColors(Colors::new(
                    cell.style.fg.into(),
                    cell.style.bg.into(),
                )))?;
                out.queue(SetAttribute(weight))?;
                self.style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn finish(self, out: &mut Vec<u8>) -> Result<()> {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

/// Queue a clear followed by every row of `fb`. Nothing is written to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen = Pen::default();
    for y in 0..fb.height() {
        pen.run(out, fb, 0, y, fb.width())?;
    }
    pen.finish(out)
}

/// Queue only the cells of `next` that differ from `prev`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = Pen::default();
    for_each_changed_run(prev, next, |x, y, len| pen.run(out, next, x, y, len))?;
    pen.finish(out)
}

/// Call `f(x, y, len)` for each horizontal run of differing cells.
///
/// Frames of different sizes are compared as wholly dirty.
fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    let resized = (prev.width(), prev.height()) != (next.width(), next.height());
    let width = next.width();
    for y in 0..next.height() {
        let mut run_start: Option<u16> = None;
        for x in 0..=width {
            let dirty = x < width && (resized || prev.get(x, y) != next.get(x, y));
            match (dirty, run_start) {
                (true, None) => run_start = Some(x),
                (false, Some(start)) => {
                    f(start, y, x - start)?;
                    run_start = None;
                }
                _ => {}
            }
        }
    }
    Ok(())
}
