//! Structured logging routed to a pluggable sink.
//!
//! The handlers log through `tracing` macros. This module turns each event
//! into a [`LogRecord`] and hands it to a [`LogSink`]; in the browser the
//! sink is the developer console.
//!
//! ## Usage
//!
//! ```ignore
//! use folio_core::logging;
//! use tracing::level_filters::LevelFilter;
//!
//! logging::init(LevelFilter::INFO, BrowserConsole)?;
//! tracing::info!(links = 5, "navigation bound");
//! ```

pub mod layer;
pub mod record;

pub use layer::{ConsoleLayer, LogSink};
pub use record::LogRecord;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;

use crate::error::{FolioError, FolioResult};

/// Install a global subscriber that filters at `level` and forwards to `sink`.
///
/// Fails if a global subscriber is already set.
pub fn init<S: LogSink>(level: LevelFilter, sink: S) -> FolioResult<()> {
    let subscriber = tracing_subscriber::registry()
        .with(level)
        .with(ConsoleLayer::new(sink));

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| FolioError::Binding(format!("logging already initialised: {}", e)))
}
