//! Host capabilities the handlers run against.
//!
//! Handlers never touch a concrete DOM. The browser crate implements these
//! traits over `web-sys`; the `testing` module implements them in memory.

use std::time::Duration;

/// A page element the handlers can read geometry from and project state onto.
///
/// Mutations take `&self`: element handles are shared references into the
/// host document, not owned values.
pub trait Element: Clone {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;

    /// Project a boolean onto the presence of `class`.
    fn set_class(&self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
    fn remove_attribute(&self, name: &str);

    /// Set one inline style property (e.g. `transform`).
    fn set_style(&self, property: &str, value: &str);

    fn set_text(&self, text: &str);

    /// Document-relative top, as `offsetTop`.
    fn offset_top(&self) -> f64;
    /// Rendered height, as `offsetHeight`.
    fn offset_height(&self) -> f64;
    /// Viewport-relative bounding box.
    fn bounding_rect(&self) -> Rect;

    /// Nearest inclusive ancestor matching `selector`.
    fn closest(&self, selector: &str) -> Option<Self>;
}

/// Lookup into the host document.
pub trait Document<E> {
    fn element_by_id(&self, id: &str) -> Option<E>;
}

/// The scrollable window.
pub trait Viewport {
    fn scroll_y(&self) -> f64;
    fn inner_height(&self) -> f64;
    /// Request a scroll; completion is never observed.
    fn scroll_to(&self, top: f64, behavior: ScrollBehavior);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Viewport-intersection report for one observed element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub is_intersecting: bool,
    pub ratio: f64,
}

/// Watches elements entering and leaving the viewport.
///
/// Reports are delivered by the host to whichever handler registered the
/// observer; this trait only covers subscription.
pub trait ViewportObserver<E> {
    fn observe(&mut self, target: &E);
    fn unobserve(&mut self, target: &E);
}

/// Cancellation side of a scheduled timer.
///
/// Dropping a handle may also cancel it, depending on the host. `cancel`
/// must be safe to call from inside the timer's own callback.
pub trait TimerHandle {
    fn cancel(self);
}

/// Timer capability backing animations and rate limiters.
pub trait Scheduler {
    type Handle: TimerHandle + 'static;

    /// Fire `tick` every `period` until the handle is cancelled.
    fn interval(&self, period: Duration, tick: Box<dyn FnMut()>) -> Self::Handle;

    /// Fire `fire` once after `delay`.
    fn timeout(&self, delay: Duration, fire: Box<dyn FnOnce()>) -> Self::Handle;
}
