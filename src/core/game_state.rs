//! Game state - the tick/advance state machine.
//!
//! `GameState` is an immutable value: `request_direction` and `tick` build
//! and return the next state, and the owner (usually [`crate::core::Session`])
//! commits it by assignment. A tick in progress therefore sees either the old
//! or the new requested direction in full, never a partial update.

use crate::core::grid::{boundary_edge, occupies, random_free_cell, step};
use crate::core::rng::GameRng;
use crate::types::{Cell, Direction, INITIAL_SNAKE_LEN};

/// Snake segments at the start of a session, head first, heading left.
const INITIAL_SNAKE: [Cell; INITIAL_SNAKE_LEN] = [
    Cell::new(35, 22),
    Cell::new(36, 22),
    Cell::new(37, 22),
    Cell::new(38, 22),
];

/// Complete game state for one play session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Occupied cells, head first. Never empty.
    snake: Vec<Cell>,
    /// Never overlaps the snake at the moment it is placed.
    fruit: Cell,
    /// Direction the head moved in on the last committed tick.
    current_direction: Direction,
    /// Direction the next tick will use; set by player input, overridden
    /// by a boundary bounce.
    requested_direction: Direction,
    running: bool,
    game_over: bool,
    first_play: bool,
}

impl GameState {
    /// Initial state: four segments in the middle of the arena moving left,
    /// fruit on a random free cell, tick loop not yet started.
    pub fn new(rng: &mut GameRng) -> Self {
        let snake = INITIAL_SNAKE.to_vec();
        let fruit = random_free_cell(rng, &snake);
        Self {
            snake,
            fruit,
            current_direction: Direction::Left,
            requested_direction: Direction::Left,
            running: false,
            game_over: false,
            first_play: true,
        }
    }

    /// Build a state from an explicit layout. Intended for scenario setup in
    /// tests and for replaying recorded positions; callers are responsible
    /// for a non-empty snake.
    pub fn from_parts(snake: Vec<Cell>, fruit: Cell, direction: Direction) -> Self {
        debug_assert!(!snake.is_empty());
        Self {
            snake,
            fruit,
            current_direction: direction,
            requested_direction: direction,
            running: true,
            game_over: false,
            first_play: false,
        }
    }

    pub fn snake(&self) -> &[Cell] {
        &self.snake
    }

    pub fn head(&self) -> Cell {
        self.snake[0]
    }

    pub fn fruit(&self) -> Cell {
        self.fruit
    }

    pub fn current_direction(&self) -> Direction {
        self.current_direction
    }

    pub fn requested_direction(&self) -> Direction {
        self.requested_direction
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_first_play(&self) -> bool {
        self.first_play
    }

    /// Points scored so far: segments grown beyond the initial length.
    pub fn score(&self) -> u32 {
        self.snake.len().saturating_sub(INITIAL_SNAKE_LEN) as u32
    }

    /// Record a direction request from the player.
    ///
    /// Ignored if it would reverse the current heading or if the game is
    /// over; otherwise it takes effect on the next tick.
    #[must_use]
    pub fn request_direction(&self, d: Direction) -> Self {
        if self.game_over || d == self.current_direction.opposite() {
            return self.clone();
        }
        Self {
            requested_direction: d,
            ..self.clone()
        }
    }

    /// Advance the simulation by one step.
    ///
    /// Moves the head in the requested direction, deflecting off the arena
    /// boundary; detects self-collision (terminal); consumes fruit, growing
    /// the tail by one and relocating the fruit. Returns the next state.
    #[must_use]
    pub fn tick(&self, rng: &mut GameRng) -> Self {
        if self.game_over {
            return self.clone();
        }

        let head = self.snake[0];
        let tail = &self.snake[1..];
        let mut dir = self.requested_direction;
        let mut new_head = step(head, dir);

        // Self-collision is judged on the pre-bounce candidate. Terminal:
        // nothing else this tick can be observed, so stop here.
        if occupies(new_head, tail) {
            return Self {
                running: false,
                game_over: true,
                ..self.clone()
            };
        }

        // A bounce overrides any pending player input; the head is
        // recomputed from its old position, not the out-of-bounds cell.
        if let Some(edge) = boundary_edge(new_head) {
            dir = edge.bounce();
            new_head = step(head, dir);
        }

        let mut snake = Vec::with_capacity(self.snake.len() + 1);
        snake.push(new_head);
        snake.extend_from_slice(&self.snake);

        // Normal movement: the last segment is vacated.
        snake.pop();

        let fruit = if new_head == self.fruit {
            // Grow by one: extend the tail away from the direction of
            // travel, deflecting once if the grow cell would fall outside
            // the arena.
            let last = *snake.last().expect("snake is never empty");
            let mut grow_dir = dir.opposite();
            let mut new_tail = step(last, grow_dir);
            if let Some(edge) = boundary_edge(new_tail) {
                grow_dir = edge.bounce();
                new_tail = step(last, grow_dir);
            }
            snake.push(new_tail);
            random_free_cell(rng, &snake)
        } else {
            self.fruit
        };

        Self {
            snake,
            fruit,
            current_direction: dir,
            requested_direction: dir,
            ..self.clone()
        }
    }

    /// Mark the tick loop live. Clears the first-play flag.
    #[must_use]
    pub(crate) fn started(&self) -> Self {
        Self {
            running: true,
            first_play: false,
            ..self.clone()
        }
    }

    /// Mark the tick loop stopped.
    #[must_use]
    pub(crate) fn stopped(&self) -> Self {
        Self {
            running: false,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GRID_HEIGHT, GRID_WIDTH};

    fn rng() -> GameRng {
        GameRng::new(12345)
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::new(&mut rng());

        assert_eq!(state.snake(), INITIAL_SNAKE);
        assert_eq!(state.current_direction(), Direction::Left);
        assert_eq!(state.requested_direction(), Direction::Left);
        assert_eq!(state.score(), 0);
        assert!(!state.is_running());
        assert!(!state.is_game_over());
        assert!(state.is_first_play());
        assert!(!occupies(state.fruit(), state.snake()));
    }

    #[test]
    fn test_plain_tick_moves_head_left() {
        let mut r = rng();
        let state = GameState::new(&mut r);

        let next = state.tick(&mut r);
        assert_eq!(
            next.snake(),
            [
                Cell::new(34, 22),
                Cell::new(35, 22),
                Cell::new(36, 22),
                Cell::new(37, 22),
            ]
        );
        assert_eq!(next.score(), 0);
        assert_eq!(next.current_direction(), Direction::Left);
    }

    #[test]
    fn test_tick_preserves_length_without_fruit() {
        let mut r = rng();
        let mut state = GameState::new(&mut r);
        // Park the fruit where the leftward march can't reach it.
        state.fruit = Cell::new(0, 0);

        for _ in 0..20 {
            let next = state.tick(&mut r);
            assert!(!next.is_game_over());
            assert_eq!(next.snake().len(), state.snake().len());
            state = next;
        }
    }

    #[test]
    fn test_request_direction_applies_on_next_tick() {
        let mut r = rng();
        let state = GameState::new(&mut r).request_direction(Direction::Up);

        assert_eq!(state.requested_direction(), Direction::Up);
        // Heading unchanged until the tick commits it.
        assert_eq!(state.current_direction(), Direction::Left);

        let next = state.tick(&mut r);
        assert_eq!(next.head(), Cell::new(35, 21));
        assert_eq!(next.current_direction(), Direction::Up);
    }

    #[test]
    fn test_request_opposite_is_ignored() {
        let mut r = rng();
        let state = GameState::new(&mut r);

        let next = state.request_direction(Direction::Right);
        assert_eq!(next.requested_direction(), Direction::Left);
        assert_eq!(next, state);
    }

    #[test]
    fn test_request_checks_current_not_requested() {
        // Mirrors the reference: two quick inputs within one tick are both
        // validated against the committed heading.
        let mut r = rng();
        let state = GameState::new(&mut r)
            .request_direction(Direction::Up)
            .request_direction(Direction::Down);

        // Down is not the opposite of Left, so it wins.
        assert_eq!(state.requested_direction(), Direction::Down);
    }

    #[test]
    fn test_request_after_game_over_is_ignored() {
        let mut r = rng();
        let state = GameState {
            game_over: true,
            ..GameState::new(&mut r)
        };
        let next = state.request_direction(Direction::Up);
        assert_eq!(next.requested_direction(), Direction::Left);
    }

    #[test]
    fn test_self_collision_ends_game() {
        // Head at (5,5) moving left onto a tail cell.
        let snake = vec![
            Cell::new(5, 5),
            Cell::new(5, 6),
            Cell::new(4, 6),
            Cell::new(4, 5),
        ];
        let mut r = rng();
        let state = GameState::from_parts(snake.clone(), Cell::new(60, 40), Direction::Left);

        let over = state.tick(&mut r);
        assert!(over.is_game_over());
        assert!(!over.is_running());
        // Terminal transition leaves the board untouched.
        assert_eq!(over.snake(), snake);

        // Further ticks are no-ops until reset.
        let after = over.tick(&mut r);
        assert_eq!(after, over);
    }

    #[test]
    fn test_boundary_bounce_left_edge() {
        let snake = vec![
            Cell::new(0, 10),
            Cell::new(1, 10),
            Cell::new(2, 10),
            Cell::new(3, 10),
        ];
        let mut r = rng();
        let state = GameState::from_parts(snake, Cell::new(60, 40), Direction::Left);

        let next = state.tick(&mut r);
        assert!(!next.is_game_over());
        assert_eq!(next.head(), Cell::new(0, 9));
        assert_eq!(next.current_direction(), Direction::Up);
        // The bounce also clobbers any pending request.
        assert_eq!(next.requested_direction(), Direction::Up);
    }

    #[test]
    fn test_bounce_overrides_pending_input() {
        let snake = vec![
            Cell::new(0, 10),
            Cell::new(1, 10),
            Cell::new(2, 10),
            Cell::new(3, 10),
        ];
        let mut r = rng();
        let state = GameState::from_parts(snake, Cell::new(60, 40), Direction::Left)
            .request_direction(Direction::Down);
        // Down would also be legal here, but Left is still the committed
        // heading, so re-request Left to force a bounce this tick.
        let state = state.request_direction(Direction::Left);

        let next = state.tick(&mut r);
        assert_eq!(next.current_direction(), Direction::Up);
        assert_eq!(next.requested_direction(), Direction::Up);
    }

    #[test]
    fn test_head_never_leaves_arena() {
        let mut r = rng();
        let mut state = GameState::new(&mut r);
        // The bounce cycle walks the perimeter; no head position may ever
        // be outside the arena.
        for _ in 0..2_000 {
            state = state.tick(&mut r);
            assert!(
                boundary_edge(state.head()).is_none(),
                "head escaped: {:?}",
                state.head()
            );
            if state.is_game_over() {
                break;
            }
        }
    }

    #[test]
    fn test_fruit_eaten_grows_and_relocates() {
        let mut r = rng();
        let mut state = GameState::new(&mut r);
        state.fruit = Cell::new(34, 22);

        let next = state.tick(&mut r);
        assert_eq!(next.head(), Cell::new(34, 22));
        assert_eq!(next.snake().len(), 5);
        assert_eq!(next.score(), 1);
        // Grown tail extends opposite the direction of travel.
        assert_eq!(
            next.snake(),
            [
                Cell::new(34, 22),
                Cell::new(35, 22),
                Cell::new(36, 22),
                Cell::new(37, 22),
                Cell::new(38, 22),
            ]
        );
        // New fruit does not overlap the grown snake.
        assert!(!occupies(next.fruit(), next.snake()));
        assert_ne!(next.fruit(), Cell::new(34, 22));
    }

    #[test]
    fn test_fruit_growth_bounces_tail_at_edge() {
        // After movement the tail end sits on the right edge, so growing
        // opposite a leftward heading must deflect.
        let snake = vec![
            Cell::new(66, 10),
            Cell::new(67, 10),
            Cell::new(68, 10),
            Cell::new(69, 10),
            Cell::new(69, 11),
        ];
        let mut r = rng();
        let state = GameState::from_parts(snake, Cell::new(65, 10), Direction::Left);

        let next = state.tick(&mut r);
        assert_eq!(next.snake().len(), 6);
        // Grow cell step((69,10), Right) = (70,10) is out; bounce(Right) =
        // Down gives (69,11), the cell movement just vacated.
        assert_eq!(*next.snake().last().unwrap(), Cell::new(69, 11));
    }

    #[test]
    fn test_score_tracks_length() {
        let mut r = rng();
        let mut state = GameState::new(&mut r);
        for _ in 0..50 {
            // Keep feeding the snake right in front of its head.
            state.fruit = step(state.head(), state.requested_direction());
            if boundary_edge(state.fruit).is_some() {
                break;
            }
            let next = state.tick(&mut r);
            assert_eq!(
                next.score() as usize,
                next.snake().len() - INITIAL_SNAKE_LEN
            );
            state = next;
        }
        assert!(state.score() > 0);
    }

    #[test]
    fn test_from_parts_bounds() {
        let state = GameState::from_parts(
            vec![Cell::new(0, 0)],
            Cell::new(GRID_WIDTH - 1, GRID_HEIGHT - 1),
            Direction::Right,
        );
        assert_eq!(state.snake().len(), 1);
        assert_eq!(state.score(), 0);
    }
}
