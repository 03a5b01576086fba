// SPDX-License-Identifier: MPL-2.0
//! One-shot delayed callback driven by the host clock.
//!
//! The trigger never sleeps or spawns. The host feeds it the current
//! [`Instant`] from its tick subscription and the callback runs on the first
//! poll at or past the deadline. One trigger covers one lifetime: it can be
//! started once, and after firing or cancelling it stays inert.

use crate::error::{Error, Result};
use std::fmt;
use std::time::{Duration, Instant};

type Callback<T> = Box<dyn FnOnce() -> T>;

enum Phase<T> {
    Idle,
    Armed {
        deadline: Instant,
        callback: Callback<T>,
    },
    Fired,
    Cancelled,
}

/// Fires a callback exactly once, `delay` after [`TimedTrigger::start`].
///
/// The callback's return value is handed back from [`TimedTrigger::poll`],
/// which lets an Elm-style update loop turn expiry into a message.
pub struct TimedTrigger<T> {
    phase: Phase<T>,
}

impl<T> Default for TimedTrigger<T> {
    fn default() -> Self {
        Self { phase: Phase::Idle }
    }
}

impl<T> fmt::Debug for TimedTrigger<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = match &self.phase {
            Phase::Idle => "idle",
            Phase::Armed { .. } => "armed",
            Phase::Fired => "fired",
            Phase::Cancelled => "cancelled",
        };
        f.debug_struct("TimedTrigger")
            .field("phase", &phase)
            .field("deadline", &self.deadline())
            .finish()
    }
}

impl<T> TimedTrigger<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the trigger to fire `delay` after `now`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Trigger`] if the trigger was already started.
    pub fn start<F>(&mut self, now: Instant, delay: Duration, callback: F) -> Result<()>
    where
        F: FnOnce() -> T + 'static,
    {
        if !matches!(self.phase, Phase::Idle) {
            return Err(Error::Trigger("trigger already started".to_string()));
        }
        self.phase = Phase::Armed {
            deadline: now + delay,
            callback: Box::new(callback),
        };
        tracing::debug!(delay_ms = delay.as_millis() as u64, "timed trigger armed");
        Ok(())
    }

    /// Runs the callback if the deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = matches!(&self.phase, Phase::Armed { deadline, .. } if now >= *deadline);
        if !due {
            return None;
        }
        match std::mem::replace(&mut self.phase, Phase::Fired) {
            Phase::Armed { callback, .. } => {
                tracing::debug!("timed trigger fired");
                Some(callback())
            }
            other => {
                self.phase = other;
                None
            }
        }
    }

    /// Disarms the trigger. Returns `true` if a pending callback was dropped.
    pub fn cancel(&mut self) -> bool {
        if matches!(self.phase, Phase::Armed { .. }) {
            self.phase = Phase::Cancelled;
            tracing::debug!("timed trigger cancelled");
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        matches!(self.phase, Phase::Armed { .. })
    }

    #[must_use]
    pub fn has_fired(&self) -> bool {
        matches!(self.phase, Phase::Fired)
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        match &self.phase {
            Phase::Armed { deadline, .. } => Some(*deadline),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    const DELAY: Duration = Duration::from_millis(30_000);

    fn counting_trigger(now: Instant) -> (TimedTrigger<()>, Rc<Cell<u32>>) {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut trigger = TimedTrigger::new();
        trigger
            .start(now, DELAY, move || counter.set(counter.get() + 1))
            .expect("fresh trigger starts");
        (trigger, calls)
    }

    #[test]
    fn does_not_fire_before_delay() {
        let start = Instant::now();
        let (mut trigger, calls) = counting_trigger(start);

        assert!(trigger.poll(start).is_none());
        assert!(trigger.poll(start + Duration::from_millis(29_999)).is_none());
        assert_eq!(calls.get(), 0);
        assert!(trigger.is_armed());
    }

    #[test]
    fn fires_exactly_once_after_delay() {
        let start = Instant::now();
        let (mut trigger, calls) = counting_trigger(start);

        assert!(trigger.poll(start + DELAY).is_some());
        assert!(trigger.poll(start + DELAY * 2).is_none());
        assert!(trigger.poll(start + DELAY * 3).is_none());

        assert_eq!(calls.get(), 1);
        assert!(trigger.has_fired());
    }

    #[test]
    fn cancel_before_expiry_prevents_callback() {
        let start = Instant::now();
        let (mut trigger, calls) = counting_trigger(start);

        assert!(trigger.cancel());
        assert!(trigger.poll(start + DELAY * 2).is_none());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn cancel_after_fire_is_noop() {
        let start = Instant::now();
        let (mut trigger, calls) = counting_trigger(start);
        trigger.poll(start + DELAY);

        assert!(!trigger.cancel());
        assert!(trigger.has_fired());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn restarting_is_rejected() {
        let start = Instant::now();
        let (mut trigger, _calls) = counting_trigger(start);

        let result = trigger.start(start, DELAY, || ());
        assert!(matches!(result, Err(Error::Trigger(_))));

        trigger.cancel();
        assert!(trigger.start(start, DELAY, || ()).is_err());
    }

    #[test]
    fn poll_returns_callback_value() {
        let start = Instant::now();
        let mut trigger = TimedTrigger::new();
        trigger
            .start(start, Duration::from_millis(10), || "open")
            .expect("fresh trigger starts");
        assert_eq!(trigger.poll(start + Duration::from_millis(10)), Some("open"));
    }
}
