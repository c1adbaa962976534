//! Smooth scrolling for in-page anchors, offset by the fixed navbar.

use tracing::{debug, trace};

use crate::dom::{Document, Element, ScrollBehavior, Viewport};

/// Whether an anchor with this `href` is intercepted.
pub fn is_fragment_href(href: &str) -> bool {
    href.starts_with('#')
}

pub struct SmoothScroll<E> {
    navbar: Option<E>,
}

impl<E: Element> SmoothScroll<E> {
    pub fn new(navbar: Option<E>) -> Self {
        Self { navbar }
    }

    /// Scroll offset that lands `target` just below the navbar.
    pub fn target_offset(&self, target: &E) -> f64 {
        let nav_height = self.navbar.as_ref().map_or(0.0, |n| n.offset_height());
        target.offset_top() - nav_height
    }

    /// Handle a click on an anchor whose default navigation was already
    /// suppressed. Returns the offset a smooth scroll was requested to.
    ///
    /// A bare `#` or a fragment with no matching element is a no-op.
    pub fn on_anchor_click<D, V>(&self, href: &str, document: &D, viewport: &V) -> Option<f64>
    where
        D: Document<E>,
        V: Viewport,
    {
        let id = href.strip_prefix('#')?;
        if id.is_empty() {
            return None;
        }

        let Some(target) = document.element_by_id(id) else {
            trace!(href, "anchor target missing");
            return None;
        };

        let top = self.target_offset(&target);
        debug!(href, top, "smooth scrolling to anchor");
        viewport.scroll_to(top, ScrollBehavior::Smooth);
        Some(top)
    }
}
