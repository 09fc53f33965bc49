//! Core module - pure game logic with no terminal or I/O dependencies.
//!
//! - [`grid`]: coordinate arithmetic, boundary testing, fruit placement
//! - [`game_state`]: the immutable tick/advance state machine
//! - [`rng`]: seedable randomness for fruit placement
//! - [`timer`]: explicit handle for the periodic tick
//! - [`session`]: owns the committed state, RNG, and timer handle

pub mod game_state;
pub mod grid;
pub mod rng;
pub mod session;
pub mod timer;

pub use game_state::GameState;
pub use grid::{boundary_edge, occupies, random_free_cell, step};
pub use rng::GameRng;
pub use session::Session;
pub use timer::TickTimer;
