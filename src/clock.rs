//! Time sources
//!
//! The registry never reads the wall clock directly; every
//! expiry-sensitive operation asks an injected clock at call time

use std::sync::Arc;
use std::sync::Mutex;

use chrono::TimeDelta;
use chrono::Utc;
use chrono::naive::NaiveDateTime;

/// A source of "now"
pub trait Clock {
    /// The current instant
    fn now(&self) -> NaiveDateTime;
}

/// The wall clock
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().naive_utc()
    }
}

/// A hand-driven clock
///
/// Cloned handles share the same instant; advancing one advances them
/// all. Meant for tests and demos that need deterministic expiry.
#[derive(Clone, Debug)]
pub struct ManualClock {
    /// The shared instant
    instant: Arc<Mutex<NaiveDateTime>>,
}

impl ManualClock {
    /// Create a clock frozen at the given instant
    pub fn starting_at(instant: NaiveDateTime) -> Self {
        Self {
            instant: Arc::new(Mutex::new(instant)),
        }
    }

    /// Move the clock forward
    pub fn advance(&self, delta: TimeDelta) {
        let mut instant = self.instant.lock().expect("Clock instant");

        *instant = *instant + delta;
    }

    /// Jump the clock to the given instant
    pub fn set(&self, new_instant: NaiveDateTime) {
        let mut instant = self.instant.lock().expect("Clock instant");

        *instant = new_instant;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        *self.instant.lock().expect("Clock instant")
    }
}
