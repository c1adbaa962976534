//! `web-sys` implementations of the host capabilities.

use folio_core::dom::{Document, Element, Rect, ScrollBehavior, Viewport};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollToOptions, SvgElement, Window};

/// Handle to a live page element.
#[derive(Clone)]
pub struct DomElement(pub web_sys::Element);

impl DomElement {
    pub fn inner(&self) -> &web_sys::Element {
        &self.0
    }

    fn style(&self) -> Option<web_sys::CssStyleDeclaration> {
        if let Some(html) = self.0.dyn_ref::<HtmlElement>() {
            Some(html.style())
        } else {
            self.0.dyn_ref::<SvgElement>().map(|svg| svg.style())
        }
    }
}

impl PartialEq for DomElement {
    fn eq(&self, other: &Self) -> bool {
        js_sys::Object::is(self.0.as_ref(), other.0.as_ref())
    }
}

impl Element for DomElement {
    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let _ = self.0.set_attribute(name, value);
    }

    fn remove_attribute(&self, name: &str) {
        let _ = self.0.remove_attribute(name);
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Some(style) = self.style() {
            let _ = style.set_property(property, value);
        }
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn offset_top(&self) -> f64 {
        self.0
            .dyn_ref::<HtmlElement>()
            .map_or(0.0, |html| f64::from(html.offset_top()))
    }

    fn offset_height(&self) -> f64 {
        self.0
            .dyn_ref::<HtmlElement>()
            .map_or(0.0, |html| f64::from(html.offset_height()))
    }

    fn bounding_rect(&self) -> Rect {
        let rect = self.0.get_bounding_client_rect();
        Rect {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }

    fn closest(&self, selector: &str) -> Option<Self> {
        self.0.closest(selector).ok().flatten().map(DomElement)
    }
}

/// First element matching `selector`, if any.
pub fn query(document: &web_sys::Document, selector: &str) -> Option<DomElement> {
    document.query_selector(selector).ok().flatten().map(DomElement)
}

/// First descendant of `root` matching `selector`.
pub fn query_within(root: &DomElement, selector: &str) -> Option<DomElement> {
    root.0.query_selector(selector).ok().flatten().map(DomElement)
}

/// Every element matching `selector`, in document order.
///
/// An invalid selector matches nothing.
pub fn query_all(document: &web_sys::Document, selector: &str) -> Vec<DomElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        tracing::debug!(selector, "selector rejected");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .map(DomElement)
        .collect()
}

pub struct BrowserDocument(pub web_sys::Document);

impl Document<DomElement> for BrowserDocument {
    fn element_by_id(&self, id: &str) -> Option<DomElement> {
        self.0.get_element_by_id(id).map(DomElement)
    }
}

pub struct BrowserViewport(pub Window);

impl Viewport for BrowserViewport {
    fn scroll_y(&self) -> f64 {
        self.0.scroll_y().unwrap_or(0.0)
    }

    fn inner_height(&self) -> f64 {
        self.0
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(match behavior {
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        });
        self.0.scroll_to_with_scroll_to_options(&options);
    }
}
