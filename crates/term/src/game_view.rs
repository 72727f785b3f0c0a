//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameState;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{
    GAME_OVER_MESSAGE, GAME_OVER_ORIGIN, GROUND_GLYPH, OBSTACLE_GLYPH, PLAYER_GLYPH,
};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Glyphs and colors used to draw the world.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    player: CellStyle,
    obstacle: CellStyle,
    ground: CellStyle,
    message: CellStyle,
    show_ground: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            player: CellStyle {
                bold: true,
                ..CellStyle::fg(Rgb::new(80, 220, 100))
            },
            obstacle: CellStyle::fg(Rgb::new(220, 70, 60)),
            ground: CellStyle::fg(Rgb::new(110, 95, 70)),
            message: CellStyle {
                bold: true,
                ..CellStyle::fg(Rgb::new(230, 60, 60))
            },
            show_ground: true,
        }
    }
}

impl GameView {
    /// Skip the ground line (only the player and obstacles are drawn).
    pub fn without_ground(mut self) -> Self {
        self.show_ground = false;
        self
    }

    /// Clear `fb` and redraw the whole world.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport first.
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        if self.show_ground {
            if let Ok(row) = u16::try_from(state.ground + 1) {
                fb.hline(row, GROUND_GLYPH, self.ground);
            }
        }

        for obstacle in state.obstacles.iter() {
            fb.put_char_at(obstacle.x, obstacle.y, OBSTACLE_GLYPH, self.obstacle);
        }

        // Player last so it stays visible on the collision frame.
        fb.put_char_at(state.player.x, state.player.y, PLAYER_GLYPH, self.player);
    }

    /// Clear `fb` and draw only the game-over message.
    pub fn render_game_over_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));
        let (x, y) = GAME_OVER_ORIGIN;
        fb.put_str(x, y, GAME_OVER_MESSAGE, self.message);
    }

    /// Allocating convenience wrapper around [`render_into`](Self::render_into).
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }
}
