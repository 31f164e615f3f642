//! Time source abstraction.
//! The service never reads the wall clock directly; tests substitute a
//! manual clock to make elapsed-time behavior deterministic.

use chrono::Utc;

pub trait Clock {
    /// Current Unix time in whole seconds.
    fn now(&self) -> i64;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now().timestamp()
    }
}
