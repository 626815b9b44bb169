//! Wall-clock access for the capture loop.
//!
//! Every call to [`Clock::now`] is a fresh reading; the loop never caches one
//! across iterations.

use chrono::{Local, NaiveDateTime};
use std::cell::{Cell, RefCell};
use std::time::Duration;

/// Source of the current local time plus the ability to block.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
    fn sleep(&self, duration: Duration);
}

/// The real local clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// A clock that only moves when slept on.
///
/// Sleeping advances the reading by exactly the requested duration, which
/// makes loop timing deterministic in tests and demos.
#[derive(Debug)]
pub struct SimulatedClock {
    now: Cell<NaiveDateTime>,
    sleeps: RefCell<Vec<Duration>>,
}

impl SimulatedClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            now: Cell::new(start),
            sleeps: RefCell::new(Vec::new()),
        }
    }

    /// Move the clock forward without recording a sleep.
    pub fn advance(&self, by: chrono::Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Every sleep requested so far, in order.
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.borrow().clone()
    }
}

impl Clock for SimulatedClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }

    fn sleep(&self, duration: Duration) {
        self.sleeps.borrow_mut().push(duration);
        let next = chrono::Duration::from_std(duration)
            .ok()
            .and_then(|step| self.now.get().checked_add_signed(step))
            .unwrap_or(NaiveDateTime::MAX);
        self.now.set(next);
    }
}

impl<K: Clock + ?Sized> Clock for &K {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }

    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration)
    }
}
