//! Grid geometry: pure coordinate arithmetic, boundary testing, and fruit
//! placement. No game state lives here.

use crate::core::rng::GameRng;
use crate::types::{Cell, Direction, GRID_HEIGHT, GRID_WIDTH};

/// The adjacent cell in direction `d`. Up decrements `y`, Down increments it;
/// the result may lie one step outside the arena.
pub fn step(cell: Cell, d: Direction) -> Cell {
    match d {
        Direction::Up => Cell::new(cell.x, cell.y - 1),
        Direction::Down => Cell::new(cell.x, cell.y + 1),
        Direction::Left => Cell::new(cell.x - 1, cell.y),
        Direction::Right => Cell::new(cell.x + 1, cell.y),
    }
}

/// Which arena edge `cell` has crossed, if any.
///
/// Checks run in a fixed priority order (x<0, x>=width, y>=height, y<0).
/// A single step from an interior cell can only cross one edge, so the
/// order is unobservable in reachable states, but it is kept stable for
/// compatibility with the reference behavior.
pub fn boundary_edge(cell: Cell) -> Option<Direction> {
    if cell.x < 0 {
        Some(Direction::Left)
    } else if cell.x >= GRID_WIDTH {
        Some(Direction::Right)
    } else if cell.y >= GRID_HEIGHT {
        Some(Direction::Down)
    } else if cell.y < 0 {
        Some(Direction::Up)
    } else {
        None
    }
}

/// True if `cell` equals any element of `cells`.
pub fn occupies(cell: Cell, cells: &[Cell]) -> bool {
    cells.contains(&cell)
}

/// Draw a uniformly random cell that is not in `occupied`.
///
/// Rejection sampling: redraw while the candidate collides. Unbiased among
/// free cells, and termination is not a practical concern since the arena
/// dwarfs any reachable snake length.
pub fn random_free_cell(rng: &mut GameRng, occupied: &[Cell]) -> Cell {
    loop {
        let candidate = Cell::new(
            rng.random_range(0..GRID_WIDTH),
            rng.random_range(0..GRID_HEIGHT),
        );
        if !occupies(candidate, occupied) {
            return candidate;
        }
    }
}
