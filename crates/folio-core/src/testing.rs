//! In-memory doubles for the host capabilities.
//!
//! Lets every handler run without a browser: elements keep their classes,
//! attributes and styles in a shared cell, the scheduler runs on a manual
//! clock, and the observer just records what it watches.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::dom::{
    Document, Element, Rect, Scheduler, ScrollBehavior, TimerHandle, Viewport, ViewportObserver,
};

#[derive(Default)]
struct ElementState {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    offset_top: f64,
    offset_height: f64,
    rect: Rect,
    parent: Option<FakeElement>,
}

/// Shared-handle element. Clones refer to the same node.
#[derive(Clone, Default)]
pub struct FakeElement(Rc<RefCell<ElementState>>);

impl FakeElement {
    pub fn new(tag: &str) -> Self {
        let el = Self::default();
        el.0.borrow_mut().tag = tag.to_string();
        el
    }

    pub fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_id(self, id: &str) -> Self {
        self.with_attr("id", id)
    }

    /// Document-relative box, as offsetTop/offsetHeight.
    pub fn with_offset(self, top: f64, height: f64) -> Self {
        {
            let mut state = self.0.borrow_mut();
            state.offset_top = top;
            state.offset_height = height;
        }
        self
    }

    pub fn with_rect(self, rect: Rect) -> Self {
        self.0.borrow_mut().rect = rect;
        self
    }

    pub fn with_parent(self, parent: &FakeElement) -> Self {
        self.0.borrow_mut().parent = Some(parent.clone());
        self
    }

    pub fn set_offset(&self, top: f64, height: f64) {
        let mut state = self.0.borrow_mut();
        state.offset_top = top;
        state.offset_height = height;
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().styles.get(property).cloned()
    }

    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    /// Supports `.class`, `#id` and bare tag names.
    fn matches(&self, selector: &str) -> bool {
        if let Some(class) = selector.strip_prefix('.') {
            self.has_class(class)
        } else if let Some(id) = selector.strip_prefix('#') {
            self.attribute("id").as_deref() == Some(id)
        } else {
            self.0.borrow().tag == selector
        }
    }
}

impl PartialEq for FakeElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for FakeElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0.borrow();
        f.debug_struct("FakeElement")
            .field("tag", &state.tag)
            .field("classes", &state.classes)
            .field("attributes", &state.attributes)
            .finish()
    }
}

impl Element for FakeElement {
    fn add_class(&self, class: &str) {
        let mut state = self.0.borrow_mut();
        if !state.classes.iter().any(|c| c == class) {
            state.classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.retain(|c| c != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&self, name: &str) {
        self.0.borrow_mut().attributes.remove(name);
    }

    fn set_style(&self, property: &str, value: &str) {
        self.0
            .borrow_mut()
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_string();
    }

    fn offset_top(&self) -> f64 {
        self.0.borrow().offset_top
    }

    fn offset_height(&self) -> f64 {
        self.0.borrow().offset_height
    }

    fn bounding_rect(&self) -> Rect {
        self.0.borrow().rect
    }

    fn closest(&self, selector: &str) -> Option<Self> {
        let mut current = Some(self.clone());
        while let Some(el) = current {
            if el.matches(selector) {
                return Some(el);
            }
            current = el.0.borrow().parent.clone();
        }
        None
    }
}

/// Id index over a fixed set of elements.
#[derive(Default)]
pub struct FakeDocument {
    elements: Vec<FakeElement>,
}

impl FakeDocument {
    pub fn new(elements: impl IntoIterator<Item = FakeElement>) -> Self {
        Self {
            elements: elements.into_iter().collect(),
        }
    }
}

impl Document<FakeElement> for FakeDocument {
    fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        self.elements
            .iter()
            .find(|el| el.attribute("id").as_deref() == Some(id))
            .cloned()
    }
}

/// Window double that records scroll requests.
pub struct FakeViewport {
    scroll_y: Cell<f64>,
    inner_height: Cell<f64>,
    requests: RefCell<Vec<(f64, ScrollBehavior)>>,
}

impl FakeViewport {
    pub fn new(inner_height: f64) -> Self {
        Self {
            scroll_y: Cell::new(0.0),
            inner_height: Cell::new(inner_height),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn set_scroll_y(&self, y: f64) {
        self.scroll_y.set(y);
    }

    pub fn scroll_requests(&self) -> Vec<(f64, ScrollBehavior)> {
        self.requests.borrow().clone()
    }
}

impl Viewport for FakeViewport {
    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn inner_height(&self) -> f64 {
        self.inner_height.get()
    }

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        self.requests.borrow_mut().push((top, behavior));
    }
}

/// Observer double; reports are fed by the test directly.
pub struct FakeObserver<E> {
    observed: Vec<E>,
    unobserved: usize,
}

impl<E> Default for FakeObserver<E> {
    fn default() -> Self {
        Self {
            observed: Vec::new(),
            unobserved: 0,
        }
    }
}

impl<E: PartialEq> FakeObserver<E> {
    pub fn is_observing(&self, target: &E) -> bool {
        self.observed.contains(target)
    }

    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }

    pub fn unobserve_calls(&self) -> usize {
        self.unobserved
    }
}

impl<E: Clone + PartialEq> ViewportObserver<E> for FakeObserver<E> {
    fn observe(&mut self, target: &E) {
        if !self.observed.contains(target) {
            self.observed.push(target.clone());
        }
    }

    fn unobserve(&mut self, target: &E) {
        self.unobserved += 1;
        self.observed.retain(|el| el != target);
    }
}

enum Callback {
    Repeating(Box<dyn FnMut()>),
    Once(Option<Box<dyn FnOnce()>>),
}

struct TimerEntry {
    id: u64,
    due: u64,
    period: Option<u64>,
    callback: Rc<RefCell<Callback>>,
    cancelled: Rc<Cell<bool>>,
}

#[derive(Default)]
struct SchedulerState {
    now: u64,
    next_id: u64,
    timers: Vec<TimerEntry>,
}

/// Manual-clock scheduler. Time only moves on [`FakeScheduler::advance`].
#[derive(Clone, Default)]
pub struct FakeScheduler(Rc<RefCell<SchedulerState>>);

/// Handle to a fake timer; dropping it cancels, like a browser timer guard.
pub struct FakeTimer {
    cancelled: Rc<Cell<bool>>,
}

impl TimerHandle for FakeTimer {
    fn cancel(self) {}
}

impl Drop for FakeTimer {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

impl FakeScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds elapsed on the manual clock.
    pub fn now(&self) -> u64 {
        self.0.borrow().now
    }

    /// Timers that are scheduled and not cancelled.
    pub fn pending(&self) -> usize {
        self.0
            .borrow()
            .timers
            .iter()
            .filter(|t| !t.cancelled.get())
            .count()
    }

    /// Move the clock forward, firing every timer that falls due in order.
    pub fn advance(&self, ms: u64) {
        let target = self.now() + ms;
        loop {
            let next = {
                let mut state = self.0.borrow_mut();
                state.timers.retain(|t| !t.cancelled.get());
                let Some(pos) = state
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| (t.due, t.id))
                    .map(|(pos, _)| pos)
                else {
                    break;
                };
                let due = state.timers[pos].due;
                state.now = due;
                match state.timers[pos].period {
                    Some(period) => {
                        state.timers[pos].due = due + period;
                        Rc::clone(&state.timers[pos].callback)
                    }
                    None => state.timers.remove(pos).callback,
                }
            };

            let mut callback = next.borrow_mut();
            match &mut *callback {
                Callback::Repeating(tick) => tick(),
                Callback::Once(fire) => {
                    if let Some(fire) = fire.take() {
                        fire();
                    }
                }
            }
        }
        self.0.borrow_mut().now = target;
    }

    fn schedule(&self, delay: Duration, period: Option<u64>, callback: Callback) -> FakeTimer {
        let cancelled = Rc::new(Cell::new(false));
        let mut state = self.0.borrow_mut();
        state.next_id += 1;
        let entry = TimerEntry {
            id: state.next_id,
            due: state.now + delay.as_millis() as u64,
            period,
            callback: Rc::new(RefCell::new(callback)),
            cancelled: Rc::clone(&cancelled),
        };
        state.timers.push(entry);
        FakeTimer { cancelled }
    }
}

impl Scheduler for FakeScheduler {
    type Handle = FakeTimer;

    fn interval(&self, period: Duration, tick: Box<dyn FnMut()>) -> FakeTimer {
        let period_ms = (period.as_millis() as u64).max(1);
        self.schedule(
            Duration::from_millis(period_ms),
            Some(period_ms),
            Callback::Repeating(tick),
        )
    }

    fn timeout(&self, delay: Duration, fire: Box<dyn FnOnce()>) -> FakeTimer {
        self.schedule(delay, None, Callback::Once(Some(fire)))
    }
}
