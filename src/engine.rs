use std::time::Duration;

use log::{debug, info};
use rand::Rng;
use rand::rngs::ThreadRng;

use crate::clock::{ScheduledTick, TickSequence, TickToken};
use crate::geometry::Bounds;
use crate::keys::Key;
use crate::state::{self, GameState};

const SLOWEST_TICK_MS: u64 = 500;
const FASTEST_TICK_MS: u64 = 50;
const SPEEDUP_PER_POINT_MS: u64 = 10;

/// Input to the transition function.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Key(Key),
    Tick(TickToken),
}

/// What the event loop should do after a transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Deliver `Event::Tick` with this token after the delay.
    Schedule(ScheduledTick),
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: GameState,
    pub command: Option<Command>,
}

impl Transition {
    fn idle(state: GameState) -> Self {
        Transition { state, command: None }
    }
}

/// Time between moves for a given score: 500ms, 10ms faster per point, never under 50ms.
pub fn tick_delay(score: u32) -> Duration {
    let speedup = SPEEDUP_PER_POINT_MS.saturating_mul(score as u64);
    let ms = SLOWEST_TICK_MS.saturating_sub(speedup).max(FASTEST_TICK_MS);
    Duration::from_millis(ms)
}

/// Owns the tick sequence and the randomness of one session and steps the game.
pub struct Engine<R = ThreadRng> {
    rng: R,
    ticks: TickSequence,
}

impl Engine<ThreadRng> {
    pub fn new() -> Self {
        Engine::with_rng(rand::thread_rng())
    }
}

impl<R: Rng> Engine<R> {
    pub fn with_rng(rng: R) -> Self {
        Engine { rng, ticks: TickSequence::new() }
    }

    pub fn new_game(&mut self, bounds: Bounds) -> GameState {
        state::new_game(bounds, &mut self.rng)
    }

    pub fn latest_tick(&self) -> TickToken {
        self.ticks.latest()
    }

    /// Computes the state following `event`.
    ///
    /// Direction keys turn and immediately move the snake. Ticks move it too,
    /// unless a newer tick has been issued since. Every successful move (and
    /// every idle tick while no direction is set) schedules exactly one new
    /// tick, which makes all earlier pending ticks stale. Once the game is over
    /// nothing moves until a restart.
    pub fn update(&mut self, mut state: GameState, event: Event) -> Transition {
        match event {
            Event::Key(Key::Quit) => {
                return Transition { state, command: Some(Command::Quit) };
            }
            Event::Key(Key::Restart) => {
                info!("restarting a {}x{} game", state.bounds.width(), state.bounds.height());
                let fresh = self.new_game(state.bounds);
                return Transition::idle(fresh);
            }
            Event::Key(Key::Other) => return Transition::idle(state),
            Event::Key(Key::Turn(direction)) => state.direction = Some(direction),
            Event::Tick(token) => {
                if self.ticks.is_stale(token) {
                    debug!("dropping stale tick {:?}, latest is {:?}", token, self.ticks.latest());
                    return Transition::idle(state);
                }
            }
        }

        if state.is_over() {
            return Transition::idle(state);
        }

        let direction = match state.direction {
            Some(direction) => direction,
            // Nothing to move yet, keep the clock running until the player picks a direction
            None => return self.schedule_tick(state),
        };

        let new_head = match state.bounds.step(state.snake.head(), direction) {
            Some(pos) if !state.snake.occupies(pos) => pos,
            _ => {
                info!("game lost with a score of {}", state.score);
                state.lost = true;
                return Transition::idle(state);
            }
        };

        if new_head == state.food {
            state.snake.grow(new_head);
            state.score += 1;

            match state::place_food(state.bounds, &state.snake, &mut self.rng) {
                Some(food) => state.food = food,
                None => {
                    info!("board filled, game won with a score of {}", state.score);
                    state.won = true;
                    return Transition::idle(state);
                }
            }
        } else {
            state.snake.slide(new_head);
        }

        self.schedule_tick(state)
    }

    fn schedule_tick(&mut self, state: GameState) -> Transition {
        let tick = ScheduledTick { token: self.ticks.next(), delay: tick_delay(state.score) };
        Transition { state, command: Some(Command::Schedule(tick)) }
    }
}
