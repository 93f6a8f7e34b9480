use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::Event as TermEvent;
use log::{debug, info, warn};

use crate::clock::TickQueue;
use crate::engine::{Command, Engine, Event, Transition};
use crate::geometry::Bounds;
use crate::keys::Key;
use crate::render::{self, Palette};
use crate::state::GameState;
use crate::term::TermManager;

/// How long to wait for input when no tick is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Single-threaded event loop: key presses and due ticks are fed to the
/// engine one at a time, and the board is redrawn after each.
pub struct SnakeGame {
    term: TermManager,
    engine: Engine,
    state: GameState,
    pending: TickQueue,
    palette: Palette,
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

impl SnakeGame {
    pub fn new(bounds: Bounds, palette: Palette) -> Self {
        let mut engine = Engine::new();
        let state = engine.new_game(bounds);
        SnakeGame { term: TermManager::new(), engine, state, pending: TickQueue::new(), palette }
    }

    /// Plays until the player quits. The terminal is restored even if the loop fails.
    pub fn run(&mut self) -> Result<()> {
        info!("starting a {}x{} game", self.state.bounds.width(), self.state.bounds.height());
        self.term.setup().context("failed to set up the terminal")?;

        let res = self.play();
        let restored = self.term.restore().context("failed to restore the terminal");

        res.and(restored)
    }

    ///////////////////////////////////////////////////////////////////////////

    fn play(&mut self) -> Result<()> {
        self.check_frame_fits()?;
        self.draw()?;

        loop {
            let timeout = self.pending.time_until_next(Instant::now()).unwrap_or(IDLE_POLL);

            match self.term.next_event(timeout).context("failed to read terminal events")? {
                Some(TermEvent::Key(key_ev)) => {
                    let key = Key::from_key_event(&key_ev);
                    if self.dispatch(Event::Key(key))? == Flow::Quit {
                        info!("quitting");
                        return Ok(());
                    }
                }
                Some(TermEvent::Resize(..)) => {
                    self.check_frame_fits()?;
                    self.draw()?;
                }
                _ => {}
            }

            for token in self.pending.pop_due(Instant::now()) {
                self.dispatch(Event::Tick(token))?;
            }
        }
    }

    fn dispatch(&mut self, event: Event) -> Result<Flow> {
        let Transition { state, command } = self.engine.update(self.state.clone(), event);
        self.state = state;

        let flow = match command {
            Some(Command::Quit) => Flow::Quit,
            Some(Command::Schedule(tick)) => {
                self.pending.schedule(tick, Instant::now());
                Flow::Continue
            }
            None => Flow::Continue,
        };

        if flow == Flow::Continue {
            self.draw()?;
        }
        debug!("{:?} handled, {} ticks pending, latest {:?}", event, self.pending.len(), self.engine.latest_tick());

        Ok(flow)
    }

    fn draw(&mut self) -> Result<()> {
        let frame = render::render(&self.state, &self.palette);
        self.term.draw_frame(&frame).context("failed to draw the board")
    }

    fn check_frame_fits(&self) -> Result<()> {
        let (cols, rows) = self.term.size().context("failed to read the terminal size")?;
        let (width, height) = render::frame_size(&self.state);

        if width > cols as usize || height > rows as usize {
            warn!("the board needs {}x{} cells but the terminal is {}x{}", width, height, cols, rows);
        }

        Ok(())
    }
}
