//! Folio Core Library
//!
//! Interaction handlers for a static portfolio page, written against
//! abstract host capabilities so they run and test without a browser.
//!
//! ## Overview
//!
//! Each handler owns the element references it needs and keeps its state
//! as plain fields. CSS classes and inline styles on the page are a
//! projection of that state:
//!
//! - [`NavController`]: mobile menu, navbar shadow, active section link
//! - [`ScrollReveal`]: fade-in as content enters the viewport
//! - [`SmoothScroll`]: animated in-page anchor jumps below the navbar
//! - [`Parallax`]: hero graphic drift on scroll and pointer movement
//! - [`TabGroup`]: single-select metrics tabs
//! - [`extras`]: lazy images, lightbox and video hooks (opt-in)
//! - [`util`]: counter animation, number formatting, debounce/throttle
//!
//! ## Quick Start
//!
//! ```ignore
//! use folio_core::{Classes, NavConfig, NavController, NavElements};
//!
//! let mut nav = NavController::new(elements, NavConfig::default(), Classes::default());
//! nav.on_scroll(window.scroll_y());
//! ```
//!
//! Missing elements are never an error: the related effect is skipped.

pub mod config;
pub mod dom;
pub mod error;
pub mod extras;
pub mod logging;
pub mod nav;
pub mod parallax;
pub mod reveal;
pub mod smooth_scroll;
pub mod tabs;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod util;

// Re-exports
pub use config::{
    Classes, CounterConfig, Extensions, FolioConfig, LogLevel, NavConfig, ParallaxConfig,
    RevealConfig, Selectors,
};
pub use dom::{
    Document, Element, Intersection, Rect, Scheduler, ScrollBehavior, TimerHandle, Viewport,
    ViewportObserver,
};
pub use error::{FolioError, FolioResult};
pub use nav::{locate_section, NavController, NavElements};
pub use parallax::Parallax;
pub use reveal::ScrollReveal;
pub use smooth_scroll::{is_fragment_href, SmoothScroll};
pub use tabs::TabGroup;
pub use util::{format_number, format_value};
