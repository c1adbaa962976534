//! Log sink writing to the browser developer console.

use folio_core::logging::{LogRecord, LogSink};
use wasm_bindgen::JsValue;
use web_sys::console;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserConsole;

impl LogSink for BrowserConsole {
    fn emit(&self, record: &LogRecord) {
        let line = JsValue::from_str(&record.to_line());
        match record.level.as_str() {
            "error" => console::error_1(&line),
            "warn" => console::warn_1(&line),
            "info" => console::info_1(&line),
            _ => console::debug_1(&line),
        }
    }
}
