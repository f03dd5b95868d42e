//! Event Loop Implementation
//!
//! Timeouts and intervals against a virtual millisecond clock. Tasks are
//! plain data; the owner pops them one at a time so a handler can cancel
//! or reschedule timers before the next one fires.

/// Timer handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u32);

/// Timer entry
#[derive(Debug, Clone)]
struct Timer<T> {
    id: TimerId,
    task: T,
    delay_ms: u64,
    due_at: u64,
    is_interval: bool,
    /// Tie-breaker for timers due at the same instant
    seq: u64,
}

/// Timer loop
#[derive(Debug)]
pub struct EventLoop<T> {
    timers: Vec<Timer<T>>,
    next_timer_id: u32,
    next_seq: u64,
    current_time: u64,
}

impl<T> Default for EventLoop<T> {
    fn default() -> Self {
        Self {
            timers: Vec::new(),
            next_timer_id: 1,
            next_seq: 0,
            current_time: 0,
        }
    }
}

impl<T: Clone> EventLoop<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn schedule(&mut self, task: T, delay_ms: u64, is_interval: bool) -> TimerId {
        let id = TimerId(self.next_timer_id);
        self.next_timer_id = self.next_timer_id.wrapping_add(1);
        let seq = self.bump_seq();
        self.timers.push(Timer {
            id,
            task,
            delay_ms,
            due_at: self.current_time.saturating_add(delay_ms),
            is_interval,
            seq,
        });
        id
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    /// Set a timeout
    pub fn set_timeout(&mut self, task: T, delay_ms: u64) -> TimerId {
        self.schedule(task, delay_ms, false)
    }

    /// Set an interval (minimum period 1ms)
    pub fn set_interval(&mut self, task: T, delay_ms: u64) -> TimerId {
        self.schedule(task, delay_ms.max(1), true)
    }

    /// Clear a timeout/interval; returns true if it was pending
    pub fn clear_timer(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        before != self.timers.len()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    /// Number of pending timers
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Current virtual time (ms)
    pub fn current_time(&self) -> u64 {
        self.current_time
    }

    /// When the next timer fires
    pub fn next_due(&self) -> Option<u64> {
        self.timers.iter().map(|t| t.due_at).min()
    }

    /// Pop the earliest timer due at or before `deadline`.
    ///
    /// The clock moves to the timer's due time. Intervals are rescheduled
    /// one period later; timeouts are removed.
    pub fn pop_due(&mut self, deadline: u64) -> Option<(TimerId, T)> {
        let pos = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_at <= deadline)
            .min_by_key(|(_, t)| (t.due_at, t.seq))
            .map(|(i, _)| i)?;

        self.current_time = self.current_time.max(self.timers[pos].due_at);

        if self.timers[pos].is_interval {
            let seq = self.bump_seq();
            let now = self.current_time;
            let timer = &mut self.timers[pos];
            timer.due_at = now.saturating_add(timer.delay_ms);
            timer.seq = seq;
            Some((timer.id, timer.task.clone()))
        } else {
            let timer = self.timers.remove(pos);
            Some((timer.id, timer.task))
        }
    }

    /// Move the clock forward without firing anything
    pub fn advance_to(&mut self, deadline: u64) {
        self.current_time = self.current_time.max(deadline);
    }

    /// Fire everything due within `delta_ms`, collecting the tasks in order
    pub fn tick(&mut self, delta_ms: u64) -> Vec<T> {
        let deadline = self.current_time.saturating_add(delta_ms);
        let mut fired = Vec::new();
        while let Some((_, task)) = self.pop_due(deadline) {
            fired.push(task);
        }
        self.advance_to(deadline);
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout() {
        let mut loop_ = EventLoop::new();
        let id = loop_.set_timeout("aria", 100);
        assert!(loop_.is_pending(id));

        assert!(loop_.tick(50).is_empty());
        assert_eq!(loop_.tick(60), vec!["aria"]);
        assert!(!loop_.is_pending(id));
        assert_eq!(loop_.current_time(), 110);
    }

    #[test]
    fn test_interval_catches_up() {
        let mut loop_ = EventLoop::new();
        loop_.set_interval(1, 10);

        assert_eq!(loop_.tick(35), vec![1, 1, 1]);
        assert_eq!(loop_.next_due(), Some(40));
    }

    #[test]
    fn test_order_by_due_then_registration() {
        let mut loop_ = EventLoop::new();
        loop_.set_timeout("b", 20);
        loop_.set_timeout("a1", 10);
        loop_.set_timeout("a2", 10);
        assert_eq!(loop_.tick(20), vec!["a1", "a2", "b"]);
    }

    #[test]
    fn test_clear_between_pops() {
        let mut loop_ = EventLoop::new();
        let first = loop_.set_timeout(1, 5);
        let second = loop_.set_timeout(2, 5);

        let (fired, task) = loop_.pop_due(10).unwrap();
        assert_eq!((fired, task), (first, 1));
        assert!(loop_.clear_timer(second));
        assert!(loop_.pop_due(10).is_none());
        assert!(!loop_.clear_timer(second));
    }

    #[test]
    fn test_huge_delay_saturates() {
        let mut loop_ = EventLoop::new();
        loop_.tick(10);
        let id = loop_.set_interval("never", u64::MAX);
        assert_eq!(loop_.next_due(), Some(u64::MAX));

        assert!(loop_.tick(1_000).is_empty());
        assert!(loop_.clear_timer(id));
        loop_.set_timeout("also never", u64::MAX - 5);
        assert_eq!(loop_.next_due(), Some(u64::MAX));
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let mut loop_ = EventLoop::new();
        loop_.set_interval((), 0);
        assert_eq!(loop_.tick(3).len(), 3);
    }
}
