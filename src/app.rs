//! Page wiring.
//!
//! Builds every controller from the live document and binds it to the
//! events it reacts to. Controllers never talk to each other; each one owns
//! its elements and lives in the closures of its own listeners.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::dom::{Element, Viewport};
use folio_core::extras::{LazyImages, Lightbox, VideoPlayers};
use folio_core::{
    is_fragment_href, FolioConfig, NavController, NavElements, Parallax, ScrollReveal,
    SmoothScroll, TabGroup,
};
use gloo::events::{EventListener, EventListenerOptions};
use tracing::{debug, info, info_span};
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Window};

use crate::dom::{query, query_all, query_within, BrowserDocument, BrowserViewport, DomElement};
use crate::observer::BrowserObserver;

/// Listeners and observers bound to the page.
#[derive(Default)]
pub struct Page {
    listeners: Vec<EventListener>,
    observers: Vec<BrowserObserver>,
}

impl Page {
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Keep everything bound for the rest of the page's life.
    pub fn persist(self) {
        for listener in self.listeners {
            listener.forget();
        }
        for observer in self.observers {
            observer.forget();
        }
    }
}

/// Bind every handler the config enables.
pub fn mount(window: &Window, document: &web_sys::Document, config: &FolioConfig) -> Page {
    let span = info_span!("mount");
    let _enter = span.enter();

    let mut page = Page::default();
    init_navigation(&mut page, window, document, config);
    init_scroll_reveal(&mut page, document, config);
    init_smooth_scroll(&mut page, window, document, config);
    init_parallax(&mut page, window, document, config);
    init_metrics_tabs(&mut page, document, config);

    let extensions = config.extensions;
    if extensions.lazy_images {
        init_lazy_loading(&mut page, document, config);
    }
    if extensions.lightbox {
        init_lightbox(&mut page, document, config);
    }
    if extensions.video_players {
        init_video_players(&mut page, document, config);
    }

    page
}

fn init_navigation(
    page: &mut Page,
    window: &Window,
    document: &web_sys::Document,
    config: &FolioConfig,
) {
    let selectors = &config.selectors;
    let toggle = query(document, &selectors.nav_toggle);
    let links = query_all(document, &selectors.nav_links);
    let sections = query_all(document, &selectors.sections);
    info!(links = links.len(), sections = sections.len(), "navigation bound");

    let nav = Rc::new(RefCell::new(NavController::new(
        NavElements {
            navbar: query(document, &selectors.navbar),
            toggle: toggle.clone(),
            menu: query(document, &selectors.nav_menu),
            links: links.clone(),
            sections,
        },
        config.nav.clone(),
        config.classes.clone(),
    )));

    if let Some(toggle) = toggle {
        let nav = Rc::clone(&nav);
        page.listeners.push(EventListener::new(toggle.inner(), "click", move |_| {
            nav.borrow_mut().toggle_menu();
        }));
    }

    for link in &links {
        let nav = Rc::clone(&nav);
        page.listeners.push(EventListener::new(link.inner(), "click", move |_| {
            nav.borrow_mut().close_menu();
        }));
    }

    let viewport = BrowserViewport(window.clone());
    page.listeners.push(EventListener::new(window, "scroll", move |_| {
        nav.borrow_mut().on_scroll(viewport.scroll_y());
    }));
}

fn init_scroll_reveal(page: &mut Page, document: &web_sys::Document, config: &FolioConfig) {
    let reveal = Rc::new(ScrollReveal::new(
        query_all(document, &config.selectors.reveal_targets),
        query_all(document, &config.selectors.gallery_items),
        &config.reveal,
        config.classes.clone(),
    ));

    let handler = Rc::clone(&reveal);
    let observer = BrowserObserver::new(
        config.reveal.threshold,
        &config.reveal.root_margin,
        move |target, entry, _| handler.on_intersection(target, entry),
    );

    match observer {
        Ok(mut observer) => {
            reveal.attach(&mut observer);
            page.observers.push(observer);
        }
        Err(e) => debug!(error = %e, "viewport observer unavailable, reveal left pending"),
    }
}

fn init_smooth_scroll(
    page: &mut Page,
    window: &Window,
    document: &web_sys::Document,
    config: &FolioConfig,
) {
    let scroll = Rc::new(SmoothScroll::new(query(document, &config.selectors.navbar)));
    let target_lookup = Rc::new(BrowserDocument(document.clone()));
    let viewport = Rc::new(BrowserViewport(window.clone()));

    let anchors = query_all(document, &config.selectors.fragment_anchors);
    info!(anchors = anchors.len(), "smooth scroll bound");

    for anchor in anchors {
        let scroll = Rc::clone(&scroll);
        let target_lookup = Rc::clone(&target_lookup);
        let viewport = Rc::clone(&viewport);
        let href_source = anchor.clone();

        page.listeners.push(EventListener::new_with_options(
            anchor.inner(),
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let Some(href) = href_source.attribute("href") else {
                    return;
                };
                if !is_fragment_href(&href) {
                    return;
                }
                scroll.on_anchor_click(&href, &*target_lookup, &*viewport);
            },
        ));
    }
}

fn init_parallax(
    page: &mut Page,
    window: &Window,
    document: &web_sys::Document,
    config: &FolioConfig,
) {
    let hero = query(document, &config.selectors.hero);
    let graphics = query(document, &config.selectors.hero_graphics);
    let hero_graphics = hero
        .as_ref()
        .and_then(|hero| query_within(hero, &config.selectors.hero_graphics));
    let parallax = Rc::new(
        Parallax::new(hero.clone(), graphics, config.parallax.clone())
            .with_pointer_graphics(hero_graphics),
    );

    if parallax.has_graphics() {
        let parallax = Rc::clone(&parallax);
        let viewport = BrowserViewport(window.clone());
        page.listeners.push(EventListener::new(window, "scroll", move |_| {
            parallax.on_scroll(viewport.scroll_y(), viewport.inner_height());
        }));
    }

    let Some(hero) = hero else {
        return;
    };

    let on_move = Rc::clone(&parallax);
    page.listeners.push(EventListener::new(hero.inner(), "mousemove", move |event| {
        if let Some(event) = event.dyn_ref::<MouseEvent>() {
            on_move.on_pointer_move(f64::from(event.client_x()), f64::from(event.client_y()));
        }
    }));

    page.listeners.push(EventListener::new(hero.inner(), "mouseleave", move |_| {
        parallax.on_pointer_leave();
    }));
}

fn init_metrics_tabs(page: &mut Page, document: &web_sys::Document, config: &FolioConfig) {
    let tabs = query_all(document, &config.selectors.tabs);
    if tabs.is_empty() {
        return;
    }

    let group = Rc::new(RefCell::new(TabGroup::new(
        tabs.clone(),
        config.classes.active.clone(),
    )));
    for (index, tab) in tabs.iter().enumerate() {
        let group = Rc::clone(&group);
        page.listeners.push(EventListener::new(tab.inner(), "click", move |_| {
            group.borrow_mut().select(index);
        }));
    }
    info!(tabs = tabs.len(), "metrics tabs bound");
}

fn init_lazy_loading(page: &mut Page, document: &web_sys::Document, config: &FolioConfig) {
    let lazy = Rc::new(LazyImages::new(query_all(
        document,
        &config.selectors.lazy_images,
    )));

    let handler = Rc::clone(&lazy);
    let observer = BrowserObserver::new(0.0, "0px", move |image, entry, observer| {
        handler.on_intersection(image, entry, observer);
    });

    match observer {
        Ok(mut observer) => {
            lazy.attach(&mut observer);
            page.observers.push(observer);
        }
        Err(e) => debug!(error = %e, "viewport observer unavailable, images stay deferred"),
    }
}

fn init_lightbox(page: &mut Page, document: &web_sys::Document, config: &FolioConfig) {
    let lightbox = Rc::new(Lightbox::new(query_all(
        document,
        &config.selectors.gallery_items,
    )));

    for (index, item) in lightbox.items().iter().enumerate() {
        let lightbox = Rc::clone(&lightbox);
        page.listeners.push(EventListener::new(item.inner(), "click", move |_| {
            lightbox.on_item_click(index);
        }));
    }
}

fn init_video_players(page: &mut Page, document: &web_sys::Document, config: &FolioConfig) {
    let players = Rc::new(VideoPlayers::new(
        query_all(document, &config.selectors.play_buttons),
        config.selectors.video_card.clone(),
    ));

    for button in players.buttons() {
        let players = Rc::clone(&players);
        let clicked: DomElement = button.clone();
        page.listeners.push(EventListener::new(button.inner(), "click", move |_| {
            players.on_play_click(&clicked);
        }));
    }
}
