//! Navigation controller
//!
//! Owns the mobile menu state, the navbar "scrolled" marker and the
//! active-link highlight. All three are plain fields; the class lists on the
//! page are a projection of them, rewritten after every change.

use tracing::{debug, trace};

use crate::config::{Classes, NavConfig};
use crate::dom::Element;

/// Element references the navigation controller works with.
///
/// Any of the single elements may be absent; the matching projection is
/// then skipped while the state keeps updating.
pub struct NavElements<E> {
    pub navbar: Option<E>,
    pub toggle: Option<E>,
    pub menu: Option<E>,
    pub links: Vec<E>,
    /// Sections carrying an `id`, in document order
    pub sections: Vec<E>,
}

pub struct NavController<E> {
    elements: NavElements<E>,
    config: NavConfig,
    classes: Classes,
    menu_open: bool,
    scrolled: bool,
    current_section: Option<String>,
    last_scroll: f64,
}

impl<E: Element> NavController<E> {
    pub fn new(elements: NavElements<E>, config: NavConfig, classes: Classes) -> Self {
        let menu_open = elements
            .menu
            .as_ref()
            .is_some_and(|menu| menu.has_class(&classes.active));
        Self {
            elements,
            config,
            classes,
            menu_open,
            scrolled: false,
            current_section: None,
            last_scroll: 0.0,
        }
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Id of the section currently highlighted in the menu.
    pub fn current_section(&self) -> Option<&str> {
        self.current_section.as_deref()
    }

    /// Offset seen by the most recent scroll event.
    pub fn last_scroll(&self) -> f64 {
        self.last_scroll
    }

    pub fn links(&self) -> &[E] {
        &self.elements.links
    }

    /// Flip the mobile menu.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        debug!(open = self.menu_open, "menu toggled");
        self.project_menu();
    }

    /// Force the menu closed, whatever its state.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
        self.project_menu();
    }

    /// React to a window scroll at vertical offset `scroll_y`.
    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scrolled = scroll_y > self.config.scrolled_threshold;
        if let Some(ref navbar) = self.elements.navbar {
            navbar.set_class(&self.classes.scrolled, self.scrolled);
        }

        self.update_active_link(scroll_y);
        self.last_scroll = scroll_y;
    }

    fn update_active_link(&mut self, scroll_y: f64) {
        let probe = scroll_y + self.config.section_probe_offset;
        let spans: Vec<(f64, f64)> = self
            .elements
            .sections
            .iter()
            .map(|s| (s.offset_top(), s.offset_height()))
            .collect();

        let current = locate_section(&spans, probe)
            .and_then(|index| self.elements.sections[index].attribute("id"));

        if current != self.current_section {
            trace!(section = ?current, "current section changed");
        }

        let wanted = current.as_ref().map(|id| format!("#{}", id));
        for link in &self.elements.links {
            let is_current =
                wanted.is_some() && link.attribute("href").as_deref() == wanted.as_deref();
            link.set_class(&self.classes.active, is_current);
        }

        self.current_section = current;
    }

    fn project_menu(&self) {
        if let Some(ref menu) = self.elements.menu {
            menu.set_class(&self.classes.active, self.menu_open);
        }
        if let Some(ref toggle) = self.elements.toggle {
            toggle.set_class(&self.classes.active, self.menu_open);
        }
    }
}

/// Index of the last `(top, height)` span whose `[top, top + height)` holds `probe`.
pub fn locate_section(spans: &[(f64, f64)], probe: f64) -> Option<usize> {
    spans
        .iter()
        .rposition(|&(top, height)| probe >= top && probe < top + height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeElement;

    fn page() -> NavController<FakeElement> {
        let sections = vec![
            FakeElement::new("section").with_id("about").with_offset(600.0, 800.0),
            FakeElement::new("section").with_id("resume").with_offset(1400.0, 600.0),
            FakeElement::new("section").with_id("contact").with_offset(2000.0, 500.0),
        ];
        let links = ["#about", "#resume", "#contact"]
            .iter()
            .map(|href| FakeElement::new("a").with_attr("href", href))
            .collect();

        NavController::new(
            NavElements {
                navbar: Some(FakeElement::new("nav").with_class("navbar")),
                toggle: Some(FakeElement::new("button").with_class("nav-toggle")),
                menu: Some(FakeElement::new("ul").with_class("nav-menu")),
                links,
                sections,
            },
            NavConfig::default(),
            Classes::default(),
        )
    }

    fn active_hrefs(nav: &NavController<FakeElement>) -> Vec<String> {
        nav.links()
            .iter()
            .filter(|l| l.has_class("active"))
            .filter_map(|l| l.attribute("href"))
            .collect()
    }

    #[test]
    fn toggle_projects_onto_menu_and_button() {
        let mut nav = page();
        nav.toggle_menu();
        assert!(nav.menu_open());
        assert!(nav.elements.menu.as_ref().unwrap().has_class("active"));
        assert!(nav.elements.toggle.as_ref().unwrap().has_class("active"));

        nav.toggle_menu();
        assert!(!nav.menu_open());
        assert!(!nav.elements.menu.as_ref().unwrap().has_class("active"));
    }

    #[test]
    fn close_menu_from_either_state() {
        let mut nav = page();
        nav.close_menu();
        assert!(!nav.menu_open());

        nav.toggle_menu();
        nav.close_menu();
        assert!(!nav.menu_open());
        assert!(!nav.elements.toggle.as_ref().unwrap().has_class("active"));
    }

    #[test]
    fn scrolled_marker_follows_threshold() {
        let mut nav = page();
        nav.on_scroll(50.0);
        assert!(!nav.is_scrolled());
        assert!(!nav.elements.navbar.as_ref().unwrap().has_class("scrolled"));

        nav.on_scroll(51.0);
        assert!(nav.is_scrolled());
        assert!(nav.elements.navbar.as_ref().unwrap().has_class("scrolled"));

        nav.on_scroll(0.0);
        assert!(!nav.elements.navbar.as_ref().unwrap().has_class("scrolled"));
    }

    #[test]
    fn active_link_tracks_section() {
        let mut nav = page();
        nav.on_scroll(600.0);
        assert_eq!(nav.current_section(), Some("about"));
        assert_eq!(active_hrefs(&nav), vec!["#about"]);

        nav.on_scroll(1300.0);
        assert_eq!(nav.current_section(), Some("resume"));
        assert_eq!(active_hrefs(&nav), vec!["#resume"]);
    }

    #[test]
    fn no_section_clears_active_link() {
        let mut nav = page();
        nav.on_scroll(1300.0);
        assert_eq!(active_hrefs(&nav).len(), 1);

        nav.on_scroll(0.0);
        assert_eq!(nav.current_section(), None);
        assert!(active_hrefs(&nav).is_empty());
    }

    #[test]
    fn records_last_scroll() {
        let mut nav = page();
        nav.on_scroll(321.0);
        assert_eq!(nav.last_scroll(), 321.0);
    }

    #[test]
    fn missing_elements_are_skipped() {
        let mut nav = NavController::<FakeElement>::new(
            NavElements {
                navbar: None,
                toggle: None,
                menu: None,
                links: Vec::new(),
                sections: Vec::new(),
            },
            NavConfig::default(),
            Classes::default(),
        );
        nav.toggle_menu();
        nav.on_scroll(500.0);
        assert!(nav.menu_open());
        assert!(nav.is_scrolled());
    }

    #[test]
    fn locate_section_prefers_last_overlap() {
        let spans = [(0.0, 500.0), (400.0, 300.0)];
        assert_eq!(locate_section(&spans, 450.0), Some(1));
        assert_eq!(locate_section(&spans, 100.0), Some(0));
        assert_eq!(locate_section(&spans, 700.0), None);
    }
}
