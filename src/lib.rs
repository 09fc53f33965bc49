//! Terminal Snake with a bouncing arena boundary.
//!
//! The game core ([`core`]) is a pure, deterministic state machine over a
//! 70x45 grid: a tick moves the snake one cell, deflects it off the arena
//! edges instead of killing it, detects self-collision, and grows it on
//! fruit. Input mapping ([`input`]) and terminal rendering ([`term`]) are
//! thin collaborators around that core.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
