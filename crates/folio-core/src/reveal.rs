//! Scroll-reveal controller
//!
//! Tags content regions and gallery items with the fade-in marker and adds
//! the visible marker once the viewport observer reports them. Revealed
//! elements stay revealed and stay observed; repeat reports are no-ops.

use tracing::{debug, info};

use crate::config::{Classes, RevealConfig};
use crate::dom::{Element, Intersection, ViewportObserver};

pub struct ScrollReveal<E> {
    targets: Vec<E>,
    classes: Classes,
}

impl<E: Element> ScrollReveal<E> {
    /// Tag `regions` and `gallery` with the fade-in marker.
    ///
    /// Gallery items also get a transition delay of `index * stagger_ms`.
    pub fn new(regions: Vec<E>, gallery: Vec<E>, config: &RevealConfig, classes: Classes) -> Self {
        for region in &regions {
            region.add_class(&classes.fade_in);
        }
        for (index, item) in gallery.iter().enumerate() {
            item.set_style("transition-delay", &stagger_delay(index, config.stagger_ms));
            item.add_class(&classes.fade_in);
        }

        info!(
            regions = regions.len(),
            gallery = gallery.len(),
            "scroll reveal prepared"
        );

        let mut targets = regions;
        targets.extend(gallery);
        Self { targets, classes }
    }

    pub fn targets(&self) -> &[E] {
        &self.targets
    }

    /// Subscribe every tagged element to `observer`.
    pub fn attach<O: ViewportObserver<E>>(&self, observer: &mut O) {
        for target in &self.targets {
            observer.observe(target);
        }
    }

    /// Handle one observer report for `target`.
    pub fn on_intersection(&self, target: &E, entry: Intersection) {
        if entry.is_intersecting && !target.has_class(&self.classes.visible) {
            debug!(ratio = entry.ratio, "revealing element");
            target.add_class(&self.classes.visible);
        }
    }
}

/// CSS `transition-delay` value for the gallery item at `index`.
pub fn stagger_delay(index: usize, stagger_ms: u32) -> String {
    format!("{}ms", index as u64 * u64::from(stagger_ms))
}
