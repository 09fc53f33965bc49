//! Terminal Snake runner (default binary).
//!
//! One loop drives everything: render, wait for input until the next tick
//! deadline, dispatch actions into the session, advance the simulation.
//! Input and ticks are serialized by construction.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::core::Session;
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::term::{GameView, TerminalRenderer, Viewport};
use tui_snake::types::GameAction;

/// Poll cadence while the tick loop is stopped (start screen, pause,
/// game over).
const IDLE_POLL: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut session = Session::new();
    let view = GameView;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(session.state(), Viewport::new(w, h));
        term.draw(&fb)?;

        let timeout = session.timeout(Instant::now()).unwrap_or(IDLE_POLL);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        dispatch(&mut session, action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        session.advance(Instant::now());
    }
}

fn dispatch(session: &mut Session, action: GameAction) {
    match action {
        GameAction::Turn(d) => session.request_direction(d),
        GameAction::Pause => {
            if session.state().is_running() {
                session.stop();
            } else if !session.state().is_game_over() {
                session.start();
            }
        }
        GameAction::Restart => session.reset(),
    }
}
