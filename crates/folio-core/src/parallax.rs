//! Hero parallax: scroll-driven drift and pointer-driven tilt of the hero
//! graphic. Both effects are skipped when their element is missing.

use tracing::trace;

use crate::config::ParallaxConfig;
use crate::dom::{Element, Rect};

pub struct Parallax<E> {
    hero: Option<E>,
    graphics: Option<E>,
    pointer_graphics: Option<E>,
    config: ParallaxConfig,
}

impl<E: Element> Parallax<E> {
    /// `graphics` drifts on scroll and, until [`Self::with_pointer_graphics`]
    /// says otherwise, also follows the pointer.
    pub fn new(hero: Option<E>, graphics: Option<E>, config: ParallaxConfig) -> Self {
        Self {
            hero,
            pointer_graphics: graphics.clone(),
            graphics,
            config,
        }
    }

    /// Move `graphics` for the pointer effect instead, typically the graphic
    /// nested inside the hero.
    pub fn with_pointer_graphics(mut self, graphics: Option<E>) -> Self {
        self.pointer_graphics = graphics;
        self
    }

    pub fn has_hero(&self) -> bool {
        self.hero.is_some()
    }

    pub fn has_graphics(&self) -> bool {
        self.graphics.is_some()
    }

    /// Window scrolled to `scroll_y` with a viewport `viewport_height` tall.
    ///
    /// Past the first screen the transform is left as last applied.
    pub fn on_scroll(&self, scroll_y: f64, viewport_height: f64) {
        let Some(ref graphics) = self.graphics else {
            return;
        };
        if let Some(transform) = scroll_transform(scroll_y, viewport_height, self.config.scroll_rate) {
            graphics.set_style("transform", &transform);
        }
    }

    /// Pointer moved to client coordinates (`x`, `y`) inside the hero.
    pub fn on_pointer_move(&self, x: f64, y: f64) {
        let (Some(hero), Some(graphics)) = (&self.hero, &self.pointer_graphics) else {
            return;
        };
        let Some((dx, dy)) = pointer_offset(hero.bounding_rect(), x, y) else {
            trace!("hero has no area, skipping pointer parallax");
            return;
        };
        let range = self.config.pointer_range;
        graphics.set_style("transform", &format!("translate({}px, {}px)", dx * range, dy * range));
    }

    /// Pointer left the hero; recentre the graphic.
    pub fn on_pointer_leave(&self) {
        if let Some(ref graphics) = self.pointer_graphics {
            graphics.set_style("transform", "translate(0, 0)");
        }
    }
}

/// `translateY` for a scroll offset, or `None` once past the first screen.
pub fn scroll_transform(scroll_y: f64, viewport_height: f64, rate: f64) -> Option<String> {
    (scroll_y < viewport_height).then(|| format!("translateY({}px)", scroll_y * rate))
}

/// Cursor position relative to `rect`, normalised to [-0.5, 0.5] per axis.
pub fn pointer_offset(rect: Rect, x: f64, y: f64) -> Option<(f64, f64)> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    Some((
        (x - rect.left) / rect.width - 0.5,
        (y - rect.top) / rect.height - 0.5,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeElement;

    fn hero_rect() -> Rect {
        Rect {
            left: 100.0,
            top: 0.0,
            width: 800.0,
            height: 400.0,
        }
    }

    fn build() -> (Parallax<FakeElement>, FakeElement) {
        let hero = FakeElement::new("section").with_class("hero").with_rect(hero_rect());
        let graphics = FakeElement::new("div").with_class("hero-graphics").with_parent(&hero);
        (
            Parallax::new(Some(hero), Some(graphics.clone()), ParallaxConfig::default()),
            graphics,
        )
    }

    #[test]
    fn scroll_translates_within_first_screen() {
        let (parallax, graphics) = build();
        parallax.on_scroll(100.0, 800.0);
        assert_eq!(graphics.style("transform").as_deref(), Some("translateY(30px)"));
    }

    #[test]
    fn scroll_past_first_screen_keeps_last_value() {
        let (parallax, graphics) = build();
        parallax.on_scroll(500.0, 800.0);
        parallax.on_scroll(900.0, 800.0);
        assert_eq!(graphics.style("transform").as_deref(), Some("translateY(150px)"));
    }

    #[test]
    fn pointer_centre_is_zero() {
        let (parallax, graphics) = build();
        parallax.on_pointer_move(500.0, 200.0);
        assert_eq!(graphics.style("transform").as_deref(), Some("translate(0px, 0px)"));
    }

    #[test]
    fn pointer_corner_is_full_range() {
        let (parallax, graphics) = build();
        parallax.on_pointer_move(100.0, 400.0);
        assert_eq!(graphics.style("transform").as_deref(), Some("translate(-10px, 10px)"));
    }

    #[test]
    fn leave_resets() {
        let (parallax, graphics) = build();
        parallax.on_pointer_move(900.0, 0.0);
        parallax.on_pointer_leave();
        assert_eq!(graphics.style("transform").as_deref(), Some("translate(0, 0)"));
    }

    #[test]
    fn missing_graphics_is_noop() {
        let hero = FakeElement::new("section").with_rect(hero_rect());
        let parallax = Parallax::new(Some(hero.clone()), None, ParallaxConfig::default());
        parallax.on_scroll(10.0, 800.0);
        parallax.on_pointer_move(10.0, 10.0);
        parallax.on_pointer_leave();
        assert_eq!(hero.style("transform"), None);
    }

    #[test]
    fn zero_area_hero_is_skipped() {
        let hero = FakeElement::new("section");
        let graphics = FakeElement::new("div");
        let parallax = Parallax::new(Some(hero), Some(graphics.clone()), ParallaxConfig::default());
        parallax.on_pointer_move(10.0, 10.0);
        assert_eq!(graphics.style("transform"), None);
    }

    #[test]
    fn pointer_moves_graphic_inside_hero() {
        let outside = FakeElement::new("div").with_class("hero-graphics");
        let hero = FakeElement::new("section").with_class("hero").with_rect(hero_rect());
        let inside = FakeElement::new("div").with_class("hero-graphics").with_parent(&hero);
        let parallax = Parallax::new(Some(hero), Some(outside.clone()), ParallaxConfig::default())
            .with_pointer_graphics(Some(inside.clone()));

        parallax.on_scroll(100.0, 800.0);
        parallax.on_pointer_move(100.0, 400.0);
        assert_eq!(outside.style("transform").as_deref(), Some("translateY(30px)"));
        assert_eq!(inside.style("transform").as_deref(), Some("translate(-10px, 10px)"));

        parallax.on_pointer_leave();
        assert_eq!(outside.style("transform").as_deref(), Some("translateY(30px)"));
        assert_eq!(inside.style("transform").as_deref(), Some("translate(0, 0)"));
    }

    #[test]
    fn hero_without_own_graphic_ignores_pointer() {
        let outside = FakeElement::new("div").with_class("hero-graphics");
        let hero = FakeElement::new("section").with_class("hero").with_rect(hero_rect());
        let parallax = Parallax::new(Some(hero), Some(outside.clone()), ParallaxConfig::default())
            .with_pointer_graphics(None);

        parallax.on_pointer_move(100.0, 400.0);
        parallax.on_pointer_leave();
        assert_eq!(outside.style("transform"), None);
    }

    #[test]
    fn pointer_offset_bounds() {
        let (dx, dy) = pointer_offset(hero_rect(), 900.0, 0.0).unwrap();
        assert_eq!((dx, dy), (0.5, -0.5));
        assert_eq!(pointer_offset(Rect::default(), 1.0, 1.0), None);
    }

    #[test]
    fn scroll_transform_cutoff() {
        assert_eq!(scroll_transform(0.0, 800.0, 0.3).as_deref(), Some("translateY(0px)"));
        assert_eq!(scroll_transform(800.0, 800.0, 0.3), None);
    }
}
