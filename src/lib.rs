//! Folio browser bindings
//!
//! Compiled to WebAssembly and loaded by the portfolio page. On page-ready
//! it reads the optional embedded config, installs console logging and binds
//! every interaction handler from `folio-core` to the live document.

mod app;
mod console;
pub mod context;
mod dom;
mod error;
mod observer;
mod timers;

use std::time::Duration;

use folio_core::util::animate_counter as run_counter;
use folio_core::{format_value, logging, FolioConfig, FolioError};
use gloo::events::EventListener;
use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::console::BrowserConsole;
use crate::dom::DomElement;
use crate::error::to_js;
use crate::timers::BrowserTimers;

/// Entry point run when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window()
        .ok_or_else(|| to_js(FolioError::Binding("no window".to_string())))?;
    let document = window
        .document()
        .ok_or_else(|| to_js(FolioError::Binding("no document".to_string())))?;

    if document.ready_state() == "loading" {
        let target = document.clone();
        EventListener::once(&target, "DOMContentLoaded", move |_| {
            boot(&window, &document);
        })
        .forget();
    } else {
        boot(&window, &document);
    }
    Ok(())
}

fn boot(window: &Window, document: &web_sys::Document) {
    let (config, problem) = match context::load_config(document) {
        Ok(config) => (config, None),
        Err(e) => (FolioConfig::default(), Some(e)),
    };

    let level = config
        .log_level
        .filter()
        .unwrap_or(tracing::level_filters::LevelFilter::INFO);
    if let Err(e) = logging::init(level, BrowserConsole) {
        web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
    }
    if let Some(problem) = problem {
        warn!(error = %problem, "page config ignored, using defaults");
    }

    let page = app::mount(window, document, &config);
    info!(
        listeners = page.listener_count(),
        observers = page.observer_count(),
        "page interactions ready"
    );
    page.persist();
}

/// Count `element`'s text up from 0 to `target`.
///
/// Not called by the page itself; exposed for scripts that reveal metrics.
#[wasm_bindgen(js_name = animateCounter)]
pub fn animate_counter(element: web_sys::Element, target: u32, duration_ms: Option<u32>) {
    let defaults = FolioConfig::default().counter;
    let duration = Duration::from_millis(u64::from(duration_ms.unwrap_or(defaults.duration_ms)));
    let tick = Duration::from_millis(u64::from(defaults.tick_ms));
    // The running interval keeps itself alive until it reaches the target.
    let _ = run_counter(DomElement(element), u64::from(target), duration, tick, &BrowserTimers);
}

/// Compact counter formatting (`21200` becomes `"21.2K"`).
///
/// Values below 1000 come back exactly as JavaScript prints them.
#[wasm_bindgen(js_name = formatNumber)]
pub fn format_number_js(n: f64) -> String {
    if n >= 1000.0 {
        return format_value(n);
    }
    js_sys::Number::from(n)
        .to_string(10)
        .map(String::from)
        .unwrap_or_else(|_| format_value(n))
}
