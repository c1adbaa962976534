//! `IntersectionObserver` behind the [`ViewportObserver`] capability.

use folio_core::dom::{Intersection, ViewportObserver};
use folio_core::FolioResult;
use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::DomElement;
use crate::error::binding_error;

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Owns an observer and the closure it reports through.
pub struct BrowserObserver {
    inner: IntersectionObserver,
    callback: EntriesCallback,
}

impl BrowserObserver {
    /// Create an observer calling `on_entry` once per reported element.
    ///
    /// Fails when the host has no `IntersectionObserver`.
    pub fn new<F>(threshold: f64, root_margin: &str, mut on_entry: F) -> FolioResult<Self>
    where
        F: FnMut(&DomElement, Intersection, &mut ObserverRef) + 'static,
    {
        let callback: EntriesCallback = Closure::wrap(Box::new(
            move |entries: Array, observer: IntersectionObserver| {
                let mut observer = ObserverRef(observer);
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let report = Intersection {
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    };
                    on_entry(&DomElement(entry.target()), report, &mut observer);
                }
            },
        )
            as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(root_margin);

        let inner =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(binding_error)?;

        Ok(Self { inner, callback })
    }

    /// Keep observing for the rest of the page's life.
    pub fn forget(self) {
        self.callback.forget();
    }
}

impl ViewportObserver<DomElement> for BrowserObserver {
    fn observe(&mut self, target: &DomElement) {
        self.inner.observe(target.inner());
    }

    fn unobserve(&mut self, target: &DomElement) {
        self.inner.unobserve(target.inner());
    }
}

/// The observer as seen from inside its own callback.
pub struct ObserverRef(IntersectionObserver);

impl ViewportObserver<DomElement> for ObserverRef {
    fn observe(&mut self, target: &DomElement) {
        self.0.observe(target.inner());
    }

    fn unobserve(&mut self, target: &DomElement) {
        self.0.unobserve(target.inner());
    }
}
