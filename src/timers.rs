//! `gloo` timers behind the [`Scheduler`] capability.

use std::time::Duration;

use folio_core::dom::{Scheduler, TimerHandle};
use gloo::timers::callback::{Interval, Timeout};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimers;

pub enum BrowserTimer {
    Interval(Interval),
    Timeout(Timeout),
}

impl TimerHandle for BrowserTimer {
    fn cancel(self) {
        let closure = match self {
            BrowserTimer::Interval(interval) => interval.cancel(),
            BrowserTimer::Timeout(timeout) => timeout.cancel(),
        };
        // The cancelled callback may be the one executing right now; free it
        // on the next turn of the event loop instead.
        let _ = Timeout::new(0, move || drop(closure)).forget();
    }
}

fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

impl Scheduler for BrowserTimers {
    type Handle = BrowserTimer;

    fn interval(&self, period: Duration, mut tick: Box<dyn FnMut()>) -> BrowserTimer {
        BrowserTimer::Interval(Interval::new(millis(period), move || tick()))
    }

    fn timeout(&self, delay: Duration, fire: Box<dyn FnOnce()>) -> BrowserTimer {
        BrowserTimer::Timeout(Timeout::new(millis(delay), fire))
    }
}
