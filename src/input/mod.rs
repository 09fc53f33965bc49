//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Filtering
//! of non-directional input happens here, so the game core only ever sees
//! valid actions.

pub mod map;

pub use map::{handle_key_event, should_quit};
