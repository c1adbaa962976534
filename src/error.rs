//! Conversions between host exceptions and [`FolioError`].

use folio_core::FolioError;
use wasm_bindgen::JsValue;

/// Wrap a rejected binding call.
pub fn binding_error(value: JsValue) -> FolioError {
    let detail = value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value));
    FolioError::Binding(detail)
}

/// Surface an error to the JS caller.
pub fn to_js(error: FolioError) -> JsValue {
    JsValue::from_str(&error.to_string())
}
