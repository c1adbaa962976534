//! Deferred image loading.
//!
//! Images carry their real source in `data-src`. When one scrolls into
//! view the source is swapped in and the image is no longer observed.

use tracing::{debug, info};

use crate::dom::{Element, Intersection, ViewportObserver};

pub const DEFERRED_SRC: &str = "data-src";

pub struct LazyImages<E> {
    images: Vec<E>,
}

impl<E: Element> LazyImages<E> {
    pub fn new(images: Vec<E>) -> Self {
        info!(images = images.len(), "lazy images prepared");
        Self { images }
    }

    pub fn images(&self) -> &[E] {
        &self.images
    }

    pub fn attach<O: ViewportObserver<E>>(&self, observer: &mut O) {
        for image in &self.images {
            observer.observe(image);
        }
    }

    /// Load `image` if it is in view. Returns whether a source was swapped in.
    pub fn on_intersection<O: ViewportObserver<E>>(
        &self,
        image: &E,
        entry: Intersection,
        observer: &mut O,
    ) -> bool {
        if !entry.is_intersecting {
            return false;
        }
        let Some(src) = image.attribute(DEFERRED_SRC) else {
            observer.unobserve(image);
            return false;
        };
        debug!(src = %src, "loading deferred image");
        image.set_attribute("src", &src);
        image.remove_attribute(DEFERRED_SRC);
        observer.unobserve(image);
        true
    }
}
