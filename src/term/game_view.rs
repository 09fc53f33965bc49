//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O) so it can be unit-tested. One terminal cell
//! per grid unit; the framed arena is centered in the viewport and clipped
//! by the framebuffer when the terminal is smaller than the arena.

use crate::core::GameState;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, GRID_HEIGHT, GRID_WIDTH};

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

/// Lightweight terminal renderer for the snake arena.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    /// Render the current game state into a framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let frame_w = GRID_WIDTH as u16 + 2;
        let frame_h = GRID_HEIGHT as u16 + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        // Leave a line above the arena for score and controls.
        let start_y = (viewport.height.saturating_sub(frame_h + 1) / 2).saturating_add(1);

        let arena_bg = CellStyle::new(Rgb::new(70, 70, 80), Rgb::new(20, 20, 26));
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            GRID_WIDTH as u16,
            GRID_HEIGHT as u16,
            ' ',
            arena_bg,
        );
        draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        self.draw_snake(&mut fb, state, start_x, start_y);
        self.draw_fruit(&mut fb, state.fruit(), start_x, start_y);
        self.draw_status(&mut fb, state, start_x, start_y);

        if state.is_game_over() {
            self.draw_game_over(&mut fb, state, start_x, start_y, frame_w, frame_h);
        }

        fb
    }

    fn draw_snake(&self, fb: &mut FrameBuffer, state: &GameState, start_x: u16, start_y: u16) {
        let body = CellStyle::new(Rgb::new(90, 200, 110), Rgb::new(20, 20, 26));
        let head = CellStyle::new(Rgb::new(160, 255, 170), Rgb::new(20, 20, 26)).bold();

        for (i, &segment) in state.snake().iter().enumerate() {
            let style = if i == 0 { head } else { body };
            self.put_grid_cell(fb, segment, start_x, start_y, '█', style);
        }
    }

    fn draw_fruit(&self, fb: &mut FrameBuffer, fruit: Cell, start_x: u16, start_y: u16) {
        let style = CellStyle::new(Rgb::new(230, 80, 80), Rgb::new(20, 20, 26)).bold();
        self.put_grid_cell(fb, fruit, start_x, start_y, '●', style);
    }

    fn put_grid_cell(
        &self,
        fb: &mut FrameBuffer,
        cell: Cell,
        start_x: u16,
        start_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        if cell.x < 0 || cell.y < 0 {
            return;
        }
        let px = start_x + 1 + cell.x as u16;
        let py = start_y + 1 + cell.y as u16;
        fb.put_char(px, py, ch, style);
    }

    fn draw_status(&self, fb: &mut FrameBuffer, state: &GameState, start_x: u16, start_y: u16) {
        let label = CellStyle::default().bold();
        let hint = CellStyle::new(Rgb::new(150, 150, 160), Rgb::new(0, 0, 0));

        let y = start_y.saturating_sub(1);
        fb.put_str(start_x, y, &format!("SCORE {}", state.score()), label);

        // Control hint mirrors the session lifecycle: Start on first play,
        // Pause/Unpause afterwards.
        let control = if state.is_first_play() {
            "space: start"
        } else if state.is_running() {
            "space: pause"
        } else if !state.is_game_over() {
            "space: unpause"
        } else {
            "r: restart"
        };
        let x = start_x + (GRID_WIDTH as u16 + 2).saturating_sub(control.len() as u16 + 10);
        fb.put_str(x, y, control, hint);
        fb.put_str(x + control.len() as u16 + 2, y, "q: quit", hint);
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let score_line = format!("You scored {} points", state.score());
        let lines = ["GAME OVER", score_line.as_str(), "press r to start over"];

        let mid_y = start_y + frame_h / 2;
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = start_x + frame_w.saturating_sub(text_w) / 2;
            let y = mid_y.saturating_sub(1) + i as u16;
            fb.put_str(x, y, text, style);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}
