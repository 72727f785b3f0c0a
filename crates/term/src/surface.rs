//! The display seam between the game loop and a terminal.

use anyhow::Result;

use crate::fb::FrameBuffer;

/// Something the game loop can measure and present frames to.
///
/// [`crate::TerminalRenderer`] is the real implementation; tests substitute a
/// recording surface.
pub trait Surface {
    /// Current `(width, height)` in cells.
    fn size(&self) -> Result<(u16, u16)>;

    /// Flush a finished frame. Implementations may swap `fb` with a recycled
    /// buffer, so callers must fully redraw before the next present.
    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()>;
}
