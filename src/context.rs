//! Page configuration lookup.
//!
//! Hosts may embed a JSON config block anywhere in the page:
//!
//! ```html
//! <script type="application/json" id="folio-config">
//!   { "nav": { "scrolled_threshold": 80 } }
//! </script>
//! ```

use folio_core::{FolioConfig, FolioResult};

/// Id of the element holding the JSON config.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

/// Read the embedded config, or the defaults when the page has none.
pub fn load_config(document: &web_sys::Document) -> FolioResult<FolioConfig> {
    let text = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());

    match text {
        Some(text) if !text.trim().is_empty() => FolioConfig::from_json(&text),
        _ => Ok(FolioConfig::default()),
    }
}
