//! Play-session driver.
//!
//! `Session` owns the committed [`GameState`], the RNG that places fruit, and
//! the [`TickTimer`] handle while the tick loop is live. It exposes the state
//! machine's operation surface (`request_direction`, `start`, `stop`,
//! `reset`) plus `advance`, which the host calls from its event loop; because
//! input dispatch and `advance` run on the same loop, a tick always sees a
//! fully committed requested direction.

use std::time::{Duration, Instant};

use crate::core::game_state::GameState;
use crate::core::rng::GameRng;
use crate::core::timer::TickTimer;
use crate::types::{Direction, TICK_MS};

pub struct Session {
    state: GameState,
    rng: GameRng,
    timer: Option<TickTimer>,
    interval: Duration,
}

impl Session {
    /// New session with an entropy-seeded RNG and the default tick interval.
    pub fn new() -> Self {
        Self::with_rng(GameRng::from_entropy(), Duration::from_millis(TICK_MS))
    }

    /// Deterministic session for tests and benches.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed), Duration::from_millis(TICK_MS))
    }

    pub fn with_rng(mut rng: GameRng, interval: Duration) -> Self {
        let state = GameState::new(&mut rng);
        Self {
            state,
            rng,
            timer: None,
            interval,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Forward a direction request to the state machine. Reversals and
    /// post-game-over requests are dropped there.
    pub fn request_direction(&mut self, d: Direction) {
        self.state = self.state.request_direction(d);
    }

    /// Begin (or resume) the periodic tick. No-op while already running.
    pub fn start(&mut self) {
        if self.timer.is_some() {
            return;
        }
        self.timer = Some(TickTimer::start(self.interval));
        self.state = self.state.started();
    }

    /// Cancel the periodic tick. Idempotent; once this returns, `advance`
    /// cannot fire another tick until `start` is called again.
    pub fn stop(&mut self) {
        self.timer = None;
        if self.state.is_running() {
            self.state = self.state.stopped();
        }
    }

    /// Discard the current game and begin a fresh one with the initial
    /// snake layout and a newly placed fruit.
    pub fn reset(&mut self) {
        self.stop();
        self.state = GameState::new(&mut self.rng);
        self.start();
    }

    /// How long the host may sleep before the next tick is due. `None` when
    /// the tick loop is stopped.
    pub fn timeout(&self, now: Instant) -> Option<Duration> {
        self.timer.as_ref().map(|t| t.timeout(now))
    }

    /// Apply a tick if one is due. Returns true if the state changed. The
    /// timer handle is dropped on the game-over transition so the loop goes
    /// quiet until reset.
    pub fn advance(&mut self, now: Instant) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };
        if !timer.due(now) {
            return false;
        }

        self.state = self.state.tick(&mut self.rng);
        if self.state.is_game_over() {
            self.timer = None;
        }
        true
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
