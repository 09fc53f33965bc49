//! Core types shared across the application.
//! This module contains pure data types with no external dependencies.

/// Arena dimensions in grid units.
pub const GRID_WIDTH: i8 = 70;
pub const GRID_HEIGHT: i8 = 45;

/// Fixed simulation step (milliseconds).
pub const TICK_MS: u64 = 100;

/// Length of the snake at the start of a session. Score is measured
/// as growth beyond this.
pub const INITIAL_SNAKE_LEN: usize = 4;

/// A single grid cell. Coordinates are grid units; `x` grows rightward,
/// `y` grows downward. Values one step outside the arena occur transiently
/// while boundary collisions are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i8,
    pub y: i8,
}

impl Cell {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }
}

/// Travel direction of the snake's head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The 180-degree reverse. Requests for the opposite of the current
    /// heading are rejected so the snake cannot fold into its own neck.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Deflection applied when the head would leave the arena through the
    /// given edge. The mapping is arbitrary but fixed.
    pub fn bounce(self) -> Self {
        match self {
            Direction::Left => Direction::Up,
            Direction::Right => Direction::Down,
            Direction::Up => Direction::Right,
            Direction::Down => Direction::Left,
        }
    }
}

/// Game actions produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Turn(Direction),
    Pause,
    Restart,
}
