use foundation::time::Time;

/// Cancel-and-replace debounce timer.
///
/// Key properties:
/// - At most one pending commit at a time.
/// - Scheduling a new target drops any previous pending commit, so a stale
///   target can never fire after a newer one superseded it.
/// - Time is explicit: the embedder advances it and polls. No wall clocks,
///   which keeps firing order deterministic and replayable.
#[derive(Debug, Clone, PartialEq)]
pub struct DebounceTimer<T> {
    delay_s: f64,
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone, PartialEq)]
struct Pending<T> {
    target: T,
    deadline: Time,
}

impl<T> DebounceTimer<T> {
    pub fn new(delay_s: f64) -> Self {
        Self {
            delay_s: delay_s.max(0.0),
            pending: None,
        }
    }

    pub fn delay_s(&self) -> f64 {
        self.delay_s
    }

    /// Schedules `target` to fire `delay_s` after `now`, replacing any
    /// previously pending target.
    pub fn schedule(&mut self, target: T, now: Time) {
        self.pending = Some(Pending {
            target,
            deadline: now.advanced_by(self.delay_s),
        });
    }

    /// Drops the pending target, returning it if there was one.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.target)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_target(&self) -> Option<&T> {
        self.pending.as_ref().map(|p| &p.target)
    }

    /// Fires the pending target if its deadline has been reached.
    ///
    /// The deadline itself counts as reached (`now >= deadline`).
    pub fn poll(&mut self, now: Time) -> Option<T> {
        let deadline = self.pending.as_ref()?.deadline;
        if now < deadline {
            return None;
        }
        self.pending.take().map(|p| p.target)
    }
}

#[cfg(test)]
mod tests {
    use super::DebounceTimer;
    use foundation::time::Time;

    #[test]
    fn fires_at_deadline_not_before() {
        let mut timer = DebounceTimer::new(0.5);
        timer.schedule("x", Time::ZERO);
        assert_eq!(timer.poll(Time(0.499)), None);
        assert!(timer.is_pending());
        assert_eq!(timer.poll(Time(0.5)), Some("x"));
        assert!(!timer.is_pending());
    }

    #[test]
    fn reschedule_replaces_pending_target() {
        let mut timer = DebounceTimer::new(0.5);
        timer.schedule("x", Time::ZERO);
        timer.schedule("y", Time(0.3));
        // The first deadline passes without firing; only the newest target
        // ever commits.
        assert_eq!(timer.poll(Time(0.6)), None);
        assert_eq!(timer.poll(Time(0.8)), Some("y"));
        assert_eq!(timer.poll(Time(1.0)), None);
    }

    #[test]
    fn cancel_drops_pending() {
        let mut timer = DebounceTimer::new(0.5);
        timer.schedule("x", Time::ZERO);
        assert_eq!(timer.cancel(), Some("x"));
        assert_eq!(timer.poll(Time(10.0)), None);
        assert_eq!(timer.cancel(), None);
    }

    #[test]
    fn zero_delay_fires_on_next_poll() {
        let mut timer = DebounceTimer::new(0.0);
        timer.schedule(7u32, Time(1.0));
        assert_eq!(timer.poll(Time(1.0)), Some(7));
    }
}
