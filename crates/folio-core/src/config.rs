//! Page configuration.
//!
//! Every value has a default matching the stock portfolio markup, so an
//! empty JSON object (or no config at all) yields a fully working page.
//! Hosts that rename classes or tune the effects supply a partial JSON
//! document; missing keys fall back to their defaults.
//!
//! ```json
//! {
//!   "nav": { "scrolled_threshold": 80 },
//!   "extensions": { "lightbox": true },
//!   "log_level": "debug"
//! }
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::error::{FolioError, FolioResult};

/// Top-level configuration for all page handlers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FolioConfig {
    pub selectors: Selectors,
    pub classes: Classes,
    pub nav: NavConfig,
    pub reveal: RevealConfig,
    pub parallax: ParallaxConfig,
    pub counter: CounterConfig,
    pub extensions: Extensions,
    /// One of trace, debug, info, warn, error, off
    pub log_level: LogLevel,
}

impl FolioConfig {
    /// Parse a (possibly partial) JSON document and validate it.
    pub fn from_json(json: &str) -> FolioResult<Self> {
        let config: FolioConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make a handler misbehave.
    pub fn validate(&self) -> FolioResult<()> {
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(FolioError::InvalidConfig(format!(
                "reveal.threshold must be within [0, 1], got {}",
                self.reveal.threshold
            )));
        }
        if self.counter.tick_ms == 0 {
            return Err(FolioError::InvalidConfig(
                "counter.tick_ms must be greater than zero".to_string(),
            ));
        }
        if !self.parallax.scroll_rate.is_finite() || !self.parallax.pointer_range.is_finite() {
            return Err(FolioError::InvalidConfig(
                "parallax factors must be finite".to_string(),
            ));
        }
        self.log_level.filter()?;
        Ok(())
    }
}

/// CSS selectors used to locate the page structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub navbar: String,
    pub nav_toggle: String,
    pub nav_menu: String,
    pub nav_links: String,
    pub sections: String,
    pub reveal_targets: String,
    pub gallery_items: String,
    pub fragment_anchors: String,
    pub hero: String,
    pub hero_graphics: String,
    pub tabs: String,
    pub lazy_images: String,
    pub play_buttons: String,
    pub video_card: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            navbar: ".navbar".to_string(),
            nav_toggle: ".nav-toggle".to_string(),
            nav_menu: ".nav-menu".to_string(),
            nav_links: ".nav-menu a".to_string(),
            sections: "section[id]".to_string(),
            reveal_targets: [
                ".about-content",
                ".resume-grid",
                ".courses-grid",
                ".tiktok-content",
                ".analytics-card",
                ".gallery-grid",
                ".photography-content",
                ".video-gallery",
                ".engagement-gallery",
                ".contact-content",
                ".section-title",
                ".section-title-large",
            ]
            .join(", "),
            gallery_items: ".gallery-item".to_string(),
            fragment_anchors: "a[href^=\"#\"]".to_string(),
            hero: ".hero".to_string(),
            hero_graphics: ".hero-graphics".to_string(),
            tabs: ".metrics-tabs .tab".to_string(),
            lazy_images: "img[data-src]".to_string(),
            play_buttons: ".play-button".to_string(),
            video_card: ".video-card".to_string(),
        }
    }
}

/// Marker classes written by the handlers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Classes {
    pub active: String,
    pub scrolled: String,
    pub fade_in: String,
    pub visible: String,
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            active: "active".to_string(),
            scrolled: "scrolled".to_string(),
            fade_in: "fade-in".to_string(),
            visible: "visible".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Offsets strictly above this mark the navbar as scrolled
    pub scrolled_threshold: f64,
    /// Added to the scroll offset before locating the current section
    pub section_probe_offset: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: 50.0,
            section_probe_offset: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Visible fraction at which the observer reports a target
    pub threshold: f64,
    pub root_margin: String,
    /// Per-index transition delay for gallery items
    pub stagger_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px".to_string(),
            stagger_ms: 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub scroll_rate: f64,
    /// Pixels of travel per axis across the full hero box
    pub pointer_range: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            scroll_rate: 0.3,
            pointer_range: 20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub tick_ms: u32,
    pub duration_ms: u32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            tick_ms: 16,
            duration_ms: 2000,
        }
    }
}

/// Opt-in wiring for the extension points that ship without a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Extensions {
    pub lazy_images: bool,
    pub lightbox: bool,
    pub video_players: bool,
}

/// Log verbosity, stored as its textual name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogLevel(pub String);

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel("info".to_string())
    }
}

impl LogLevel {
    pub fn filter(&self) -> FolioResult<LevelFilter> {
        LevelFilter::from_str(&self.0)
            .map_err(|_| FolioError::InvalidConfig(format!("unknown log level: {}", self.0)))
    }
}
