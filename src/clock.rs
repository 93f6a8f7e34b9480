use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

/// Generation number of a scheduled tick. Only the newest one is honored.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TickToken(u64);

/// Hands out increasing tick tokens and remembers the latest one.
///
/// Lives for the whole process, across restarts, so ticks scheduled by a
/// previous game can still be recognised as stale.
#[derive(Debug, Default)]
pub struct TickSequence {
    latest: TickToken,
}

impl TickSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self) -> TickToken {
        self.latest = TickToken(self.latest.0 + 1);
        self.latest
    }

    pub fn latest(&self) -> TickToken {
        self.latest
    }

    pub fn is_stale(&self, token: TickToken) -> bool {
        token < self.latest
    }
}

/// Request to deliver `Tick(token)` once `delay` has passed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScheduledTick {
    pub token: TickToken,
    pub delay: Duration,
}

/// Pending ticks ordered by deadline. Each one is handed out exactly once.
#[derive(Debug, Default)]
pub struct TickQueue {
    pending: BinaryHeap<Reverse<(Instant, TickToken)>>,
}

impl TickQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, tick: ScheduledTick, now: Instant) {
        self.pending.push(Reverse((now + tick.delay, tick.token)));
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// How long until the earliest pending tick is due, if there is one.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.pending
            .peek()
            .map(|Reverse((deadline, _))| deadline.saturating_duration_since(now))
    }

    /// Removes and returns every tick due at `now`, earliest first.
    pub fn pop_due(&mut self, now: Instant) -> Vec<TickToken> {
        let mut due = vec![];

        while let Some(Reverse((deadline, token))) = self.pending.peek().copied() {
            if deadline > now {
                break;
            }
            self.pending.pop();
            due.push(token);
        }

        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_increase() {
        let mut seq = TickSequence::new();
        let a = seq.next();
        let b = seq.next();

        assert!(a < b);
        assert_eq!(seq.latest(), b);
        assert!(seq.is_stale(a));
        assert!(!seq.is_stale(b));
    }

    #[test]
    fn test_independent_sequences() {
        let mut one = TickSequence::new();
        let mut two = TickSequence::new();
        one.next();
        one.next();

        assert_eq!(two.next(), TickToken(1));
        assert_eq!(one.latest(), TickToken(2));
    }

    #[test]
    fn test_queue_delivers_due_ticks_once() {
        let mut seq = TickSequence::new();
        let mut queue = TickQueue::new();
        let start = Instant::now();

        let slow = seq.next();
        let fast = seq.next();
        queue.schedule(ScheduledTick { token: slow, delay: Duration::from_millis(500) }, start);
        queue.schedule(ScheduledTick { token: fast, delay: Duration::from_millis(100) }, start);

        assert_eq!(queue.time_until_next(start), Some(Duration::from_millis(100)));
        assert!(queue.pop_due(start).is_empty());

        assert_eq!(queue.pop_due(start + Duration::from_millis(100)), vec![fast]);
        assert_eq!(queue.len(), 1);

        assert_eq!(queue.pop_due(start + Duration::from_secs(1)), vec![slow]);
        assert!(queue.pop_due(start + Duration::from_secs(2)).is_empty());
        assert_eq!(queue.time_until_next(start), None);
    }

    #[test]
    fn test_overdue_tick_waits_zero() {
        let mut queue = TickQueue::new();
        let start = Instant::now();
        queue.schedule(ScheduledTick { token: TickToken(1), delay: Duration::from_millis(50) }, start);

        assert_eq!(queue.time_until_next(start + Duration::from_secs(1)), Some(Duration::ZERO));
    }
}
