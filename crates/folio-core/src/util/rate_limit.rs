//! Debounce and throttle wrappers.
//!
//! Both wrap a callback and gate it through a [`Scheduler`]. Neither is
//! wired to a page event by default; hosts use them for expensive scroll or
//! resize work.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::dom::{Scheduler, TimerHandle};

/// Runs the callback once calls have stopped for `wait`, with the last
/// arguments given.
pub struct Debounce<S: Scheduler, A> {
    scheduler: S,
    wait: Duration,
    func: Rc<RefCell<dyn FnMut(A)>>,
    pending: Rc<RefCell<Option<S::Handle>>>,
}

impl<S: Scheduler, A: 'static> Debounce<S, A> {
    pub fn new(func: impl FnMut(A) + 'static, wait: Duration, scheduler: S) -> Self {
        Self {
            scheduler,
            wait,
            func: Rc::new(RefCell::new(func)),
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Restart the wait with `args` as the pending arguments.
    pub fn call(&self, args: A) {
        let previous = self.pending.borrow_mut().take();
        if let Some(previous) = previous {
            previous.cancel();
        }

        let func = Rc::clone(&self.func);
        let pending = Rc::clone(&self.pending);
        let handle = self.scheduler.timeout(
            self.wait,
            Box::new(move || {
                let fired = pending.borrow_mut().take();
                if let Some(fired) = fired {
                    fired.cancel();
                }
                (*func.borrow_mut())(args);
            }),
        );
        *self.pending.borrow_mut() = Some(handle);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }
}

impl<S: Scheduler, A> Drop for Debounce<S, A> {
    fn drop(&mut self) {
        let pending = self.pending.borrow_mut().take();
        if let Some(pending) = pending {
            pending.cancel();
        }
    }
}

/// Runs the callback at most once per `limit`; calls during the cooldown
/// are dropped.
pub struct Throttle<S: Scheduler, A> {
    scheduler: S,
    limit: Duration,
    func: RefCell<Box<dyn FnMut(A)>>,
    cooling: Rc<Cell<bool>>,
    cooldown: Rc<RefCell<Option<S::Handle>>>,
}

impl<S: Scheduler, A> Throttle<S, A> {
    pub fn new(func: impl FnMut(A) + 'static, limit: Duration, scheduler: S) -> Self {
        Self {
            scheduler,
            limit,
            func: RefCell::new(Box::new(func)),
            cooling: Rc::new(Cell::new(false)),
            cooldown: Rc::new(RefCell::new(None)),
        }
    }

    /// Returns whether the callback ran.
    pub fn call(&self, args: A) -> bool {
        if self.cooling.get() {
            return false;
        }
        (*self.func.borrow_mut())(args);
        self.cooling.set(true);

        let cooling = Rc::clone(&self.cooling);
        let cooldown = Rc::clone(&self.cooldown);
        let handle = self.scheduler.timeout(
            self.limit,
            Box::new(move || {
                cooling.set(false);
                let finished = cooldown.borrow_mut().take();
                if let Some(finished) = finished {
                    finished.cancel();
                }
            }),
        );
        *self.cooldown.borrow_mut() = Some(handle);
        true
    }

    pub fn is_cooling(&self) -> bool {
        self.cooling.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeScheduler;

    fn recorder() -> (Rc<RefCell<Vec<u32>>>, impl FnMut(u32) + 'static) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        (calls, move |v| sink.borrow_mut().push(v))
    }

    #[test]
    fn debounce_fires_once_with_last_args() {
        let scheduler = FakeScheduler::new();
        let (calls, func) = recorder();
        let debounced = Debounce::new(func, Duration::from_millis(100), scheduler.clone());

        debounced.call(1);
        scheduler.advance(50);
        debounced.call(2);
        scheduler.advance(50);
        debounced.call(3);
        assert!(calls.borrow().is_empty());
        assert!(debounced.is_pending());

        scheduler.advance(100);
        assert_eq!(*calls.borrow(), vec![3]);
        assert!(!debounced.is_pending());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn debounce_separate_bursts() {
        let scheduler = FakeScheduler::new();
        let (calls, func) = recorder();
        let debounced = Debounce::new(func, Duration::from_millis(10), scheduler.clone());

        debounced.call(1);
        scheduler.advance(20);
        debounced.call(2);
        scheduler.advance(20);
        assert_eq!(*calls.borrow(), vec![1, 2]);
    }

    #[test]
    fn throttle_drops_calls_during_cooldown() {
        let scheduler = FakeScheduler::new();
        let (calls, func) = recorder();
        let throttled = Throttle::new(func, Duration::from_millis(100), scheduler.clone());

        assert!(throttled.call(1));
        assert!(!throttled.call(2));
        scheduler.advance(99);
        assert!(!throttled.call(3));
        assert!(throttled.is_cooling());

        scheduler.advance(1);
        assert!(!throttled.is_cooling());
        assert!(throttled.call(4));
        assert_eq!(*calls.borrow(), vec![1, 4]);
    }
}
