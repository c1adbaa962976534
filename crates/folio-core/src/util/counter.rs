//! Counter-up animation for metric figures.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use tracing::debug;

use super::format::format_number;
use crate::dom::{Element, Scheduler, TimerHandle};

/// One rendered step of a counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

/// Counts from 0 to `target` in equal increments, one per tick.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: u64, duration: Duration, tick: Duration) -> Self {
        let steps = duration.as_secs_f64() / tick.as_secs_f64();
        let increment = if steps.is_finite() && steps > 0.0 {
            target as f64 / steps
        } else {
            target as f64
        };
        Self {
            target,
            increment,
            current: 0.0,
            finished: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance one tick. Returns `None` once the target has been shown.
    pub fn step(&mut self) -> Option<CounterFrame> {
        if self.finished {
            return None;
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.finished = true;
            Some(CounterFrame {
                text: format_number(self.target),
                done: true,
            })
        } else {
            Some(CounterFrame {
                text: format_number(self.current.floor() as u64),
                done: false,
            })
        }
    }
}

/// Running counter; the interval cancels itself when the target is reached.
pub struct CounterHandle<H> {
    slot: Rc<RefCell<Option<H>>>,
}

impl<H: TimerHandle> CounterHandle<H> {
    pub fn is_running(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Stop early, leaving the last rendered value in place.
    pub fn stop(&self) {
        let handle = self.slot.borrow_mut().take();
        if let Some(handle) = handle {
            handle.cancel();
        }
    }
}

/// Animate `element`'s text from 0 to `target` over `duration`.
pub fn animate_counter<E, S>(
    element: E,
    target: u64,
    duration: Duration,
    tick: Duration,
    scheduler: &S,
) -> CounterHandle<S::Handle>
where
    E: Element + 'static,
    S: Scheduler,
{
    let mut animation = CounterAnimation::new(target, duration, tick);
    let slot: Rc<RefCell<Option<S::Handle>>> = Rc::new(RefCell::new(None));

    let tick_slot = Rc::clone(&slot);
    let handle = scheduler.interval(
        tick,
        Box::new(move || {
            let Some(frame) = animation.step() else {
                return;
            };
            element.set_text(&frame.text);
            if frame.done {
                debug!(value = target, "counter finished");
                let handle = tick_slot.borrow_mut().take();
                if let Some(handle) = handle {
                    handle.cancel();
                }
            }
        }),
    );
    *slot.borrow_mut() = Some(handle);

    CounterHandle { slot }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeElement, FakeScheduler};

    const TICK: Duration = Duration::from_millis(16);

    #[test]
    fn reaches_target_exactly_without_overshoot() {
        let mut animation = CounterAnimation::new(100, Duration::from_millis(2000), TICK);
        let mut frames = Vec::new();
        while let Some(frame) = animation.step() {
            frames.push(frame);
        }

        let last = frames.last().unwrap();
        assert!(last.done);
        assert_eq!(last.text, "100");
        assert!((125..=126).contains(&frames.len()));

        let mut previous = 0;
        for frame in &frames {
            let value: u64 = frame.text.parse().unwrap();
            assert!(value <= 100);
            assert!(value >= previous);
            previous = value;
        }
        assert!(animation.step().is_none());
    }

    #[test]
    fn large_targets_are_formatted() {
        let mut animation = CounterAnimation::new(21200, Duration::from_millis(32), TICK);
        assert_eq!(animation.step().unwrap().text, "10.6K");
        assert_eq!(
            animation.step().unwrap(),
            CounterFrame {
                text: "21.2K".to_string(),
                done: true
            }
        );
    }

    #[test]
    fn zero_duration_finishes_on_first_tick() {
        let mut animation = CounterAnimation::new(42, Duration::ZERO, TICK);
        assert!(animation.step().unwrap().done);
    }

    #[test]
    fn zero_target_finishes_on_first_tick() {
        let mut animation = CounterAnimation::new(0, Duration::from_millis(2000), TICK);
        let frame = animation.step().unwrap();
        assert_eq!(frame.text, "0");
        assert!(frame.done);
    }

    #[test]
    fn animate_counter_cancels_its_interval() {
        let scheduler = FakeScheduler::new();
        let element = FakeElement::new("span");
        let handle = animate_counter(
            element.clone(),
            100,
            Duration::from_millis(2000),
            TICK,
            &scheduler,
        );
        assert!(handle.is_running());

        scheduler.advance(1000);
        let midway: u64 = element.text().parse().unwrap();
        assert!(midway > 0 && midway < 100);

        scheduler.advance(2000);
        assert_eq!(element.text(), "100");
        assert!(!handle.is_running());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn stop_freezes_value() {
        let scheduler = FakeScheduler::new();
        let element = FakeElement::new("span");
        let handle = animate_counter(
            element.clone(),
            1000,
            Duration::from_millis(2000),
            TICK,
            &scheduler,
        );

        scheduler.advance(160);
        handle.stop();
        let frozen = element.text();
        scheduler.advance(5000);
        assert_eq!(element.text(), frozen);
        assert_eq!(scheduler.pending(), 0);
    }
}
