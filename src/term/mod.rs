//! Terminal rendering module.
//!
//! A small game-oriented rendering layer: [`game_view`] projects the pure
//! game state into a [`fb::FrameBuffer`], and [`renderer`] flushes it to the
//! terminal. The view is pure so it stays unit-testable; all I/O lives in
//! the renderer.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{CellStyle, FrameBuffer, Rgb, TermCell};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
